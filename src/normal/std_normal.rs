use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::AbpowerErr;
use crate::normal::error::NormalDistErr;

/// Standard normal cumulative distribution function.
pub fn std_normal_cdf(z: f64) -> f64 {
    let std_normal = Normal::new(0.0, 1.0).unwrap();
    std_normal.cdf(z)
}

/// Standard normal quantile function (inverse CDF).
/// Probabilities of exactly 0 or 1 map to infinite quantiles, so the valid
/// range here is the open interval.
pub fn std_normal_quantile(p: f64) -> Result<f64, AbpowerErr> {
    if !(p > 0.0 && p < 1.0) {
        return Err(NormalDistErr::QuantileOutOfBounds(p).into());
    }
    let std_normal = Normal::new(0.0, 1.0).unwrap();
    Ok(std_normal.inverse_cdf(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_normal_cdf_at_zero() {
        assert!((std_normal_cdf(0.0) - 0.5).abs() < 1e-12)
    }

    #[test]
    fn std_normal_cdf_symmetric() {
        assert!((std_normal_cdf(-1.3) - (1.0 - std_normal_cdf(1.3))).abs() < 1e-12)
    }

    #[test]
    fn std_normal_cdf_value() {
        assert!((std_normal_cdf(1.959964) - 0.975).abs() < 1e-6)
    }

    #[test]
    fn std_normal_quantile_value() {
        assert!((std_normal_quantile(0.975).unwrap() - 1.959964).abs() < 1e-5)
    }

    #[test]
    fn std_normal_quantile_value_2() {
        assert!((std_normal_quantile(0.80).unwrap() - 0.841621).abs() < 1e-5)
    }

    #[test]
    fn std_normal_quantile_symmetric() {
        assert!(
            (std_normal_quantile(0.975).unwrap() + std_normal_quantile(0.025).unwrap()).abs()
                < 1e-7
        )
    }

    #[test]
    fn std_normal_quantile_err() {
        if let Err(e) = std_normal_quantile(1.1) {
            assert_eq!(
                String::from(
                    "while evaluating normal distribution: arguments to \
                    quantile function should be in (0, 1); got 1.1"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn std_normal_quantile_rejects_bounds() {
        assert!(std_normal_quantile(0.0).is_err());
        assert!(std_normal_quantile(1.0).is_err());
        assert!(std_normal_quantile(f64::NAN).is_err());
    }

    #[test]
    fn std_normal_quantile_inverts_cdf() {
        let z = std_normal_quantile(0.7123).unwrap();
        assert!((std_normal_cdf(z) - 0.7123).abs() < 1e-7)
    }
}
