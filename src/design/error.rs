//----------------------------------------
// Parameter validation errors
//----------------------------------------
use crate::error::AbpowerErr;
use thiserror::Error;

/// Raised when a parameter sits outside its valid range. Each variant
/// corresponds to one offending field; `Display` carries the reason.
#[derive(Error, Debug)]
pub enum InvalidParameterError {
    #[error("baseline_rate must be strictly between 0 and 1; got {0}")]
    BaselineRate(f64),
    #[error("minimum_detectable_effect must be non-zero")]
    MinimumDetectableEffect,
    #[error("baseline_rate + minimum_detectable_effect must be in (0, 1]; got {0}")]
    TargetRate(f64),
    #[error("alpha must be strictly between 0 and 1; got {0}")]
    Alpha(f64),
    #[error("power must be strictly between 0 and 1; got {0}")]
    Power(f64),
    #[error("daily_volume must be positive; got {0}")]
    DailyVolume(i64),
    #[error("treatment_split must be strictly between 0 and 1; got {0}")]
    TreatmentSplit(f64),
    #[error("total_units must be positive; got {0}")]
    TotalUnits(i64),
    #[error("successful_units must be between 0 and total_units; got {successful_units} of {total_units}")]
    SuccessfulUnits {
        successful_units: i64,
        total_units: i64,
    },
    #[error("n_per_group must be positive; got {0}")]
    NPerGroup(f64),
}

impl InvalidParameterError {
    /// Name of the offending parameter.
    pub fn field(&self) -> &'static str {
        match self {
            InvalidParameterError::BaselineRate(_) => "baseline_rate",
            InvalidParameterError::MinimumDetectableEffect => "minimum_detectable_effect",
            InvalidParameterError::TargetRate(_) => "baseline_rate + minimum_detectable_effect",
            InvalidParameterError::Alpha(_) => "alpha",
            InvalidParameterError::Power(_) => "power",
            InvalidParameterError::DailyVolume(_) => "daily_volume",
            InvalidParameterError::TreatmentSplit(_) => "treatment_split",
            InvalidParameterError::TotalUnits(_) => "total_units",
            InvalidParameterError::SuccessfulUnits { .. } => "successful_units",
            InvalidParameterError::NPerGroup(_) => "n_per_group",
        }
    }
}

impl From<InvalidParameterError> for AbpowerErr {
    fn from(err: InvalidParameterError) -> Self {
        AbpowerErr::InvalidParameter(err)
    }
}
