use crate::design::error::InvalidParameterError;
use crate::error::AbpowerErr;

/// Derives a historical baseline rate from raw unit counts.
///
/// Counts of zero or all successes pass through as rates of 0 and 1, which
/// design validation rejects later if they are used as a baseline.
pub fn baseline_rate_from_counts(
    total_units: i64,
    successful_units: i64,
) -> Result<f64, AbpowerErr> {
    if total_units <= 0 {
        return Err(InvalidParameterError::TotalUnits(total_units).into());
    }
    if successful_units < 0 || successful_units > total_units {
        return Err(InvalidParameterError::SuccessfulUnits {
            successful_units,
            total_units,
        }
        .into());
    }

    Ok(successful_units as f64 / total_units as f64)
}
