use crate::design::types::ExperimentParameters;
use crate::error::AbpowerErr;
use crate::sample_size::compute_ss::compute_sample_size;
use crate::sample_size::types::SampleSizeResult;
use crate::sweep::types::SweepConfig;

/// Computes one sample-size result per candidate effect size in the config,
/// in list order.
///
/// Candidates that would push the target rate past 100% are dropped rather
/// than rejected; a target of exactly 100% is still swept. Invalid shared
/// parameters surface as an error on the first candidate that reaches
/// validation.
pub fn sensitivity_sweep(config: &SweepConfig) -> Result<Vec<SampleSizeResult>, AbpowerErr> {
    let mut results = Vec::with_capacity(config.mde_values.len());

    for &mde in &config.mde_values {
        if config.baseline_rate + mde > 1.0 {
            tracing::debug!(mde, "skipping candidate effect with target rate above 100%");
            continue;
        }

        let design = ExperimentParameters::new(config.baseline_rate, mde)
            .with_alpha(config.alpha)
            .with_power(config.power)
            .with_daily_volume(config.daily_volume)
            .validate()?;
        results.push(compute_sample_size(&design)?);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::types::DEFAULT_MDE_VALUES;

    #[test]
    fn default_list_produces_one_row_per_candidate() {
        let results = sensitivity_sweep(&SweepConfig::new(0.20))
            .expect("failed to sweep default candidates");
        assert_eq!(results.len(), DEFAULT_MDE_VALUES.len());

        // Bigger effects are easier to detect, so rows shrink monotonically
        for pair in results.windows(2) {
            assert!(pair[0].n_per_group > pair[1].n_per_group);
        }
        assert!((results[0].absolute_lift_pp - 2.0).abs() < 1e-9);
        assert!((results[6].absolute_lift_pp - 10.0).abs() < 1e-9);
    }

    #[test]
    fn near_saturated_baseline_drops_infeasible_candidates() {
        // 0.95 + 0.05 lands exactly on 100%, which is still swept;
        // 0.06, 0.08, and 0.10 overshoot and are dropped
        let results = sensitivity_sweep(&SweepConfig::new(0.95))
            .expect("failed to sweep near-saturated baseline");
        assert_eq!(results.len(), 4);
        assert_eq!(results[3].target_rate_pct, 100.0);
        for row in &results {
            assert!(row.target_rate_pct <= 100.0);
        }
    }

    #[test]
    fn all_candidates_infeasible_yields_empty_sweep() {
        let results = sensitivity_sweep(&SweepConfig::new(0.995))
            .expect("failed to sweep saturated baseline");
        assert!(results.is_empty());
    }

    #[test]
    fn rows_match_single_computation() {
        let results = sensitivity_sweep(&SweepConfig::new(0.20)).unwrap();
        let single = compute_sample_size(
            &ExperimentParameters::new(0.20, 0.05).validate().unwrap(),
        )
        .unwrap();
        assert_eq!(results[3], single);
    }

    #[test]
    fn custom_candidate_list_is_honored() {
        let results = sensitivity_sweep(
            &SweepConfig::new(0.30).with_mde_values(vec![0.04, 0.06]),
        )
        .unwrap();
        assert_eq!(results.len(), 2);
        assert!((results[0].absolute_lift_pp - 4.0).abs() < 1e-9);
        assert!((results[1].absolute_lift_pp - 6.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_shared_parameter_propagates() {
        let err = sensitivity_sweep(&SweepConfig::new(0.20).with_alpha(1.5))
            .expect_err("invalid alpha accepted");
        if let AbpowerErr::InvalidParameter(e) = err {
            assert_eq!(e.field(), "alpha");
        } else {
            panic!()
        }
    }
}
