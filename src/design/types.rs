use serde::{Deserialize, Serialize};

use crate::design::error::InvalidParameterError;
use crate::error::AbpowerErr;

/// Default two-sided significance level.
pub const DEFAULT_ALPHA: f64 = 0.05;
/// Default statistical power.
pub const DEFAULT_POWER: f64 = 0.80;
/// Default number of eligible units arriving per day.
pub const DEFAULT_DAILY_VOLUME: i64 = 400;
/// Default fraction of daily volume assigned to the treatment arm.
pub const DEFAULT_TREATMENT_SPLIT: f64 = 0.50;

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

fn default_power() -> f64 {
    DEFAULT_POWER
}

fn default_daily_volume() -> i64 {
    DEFAULT_DAILY_VOLUME
}

fn default_treatment_split() -> f64 {
    DEFAULT_TREATMENT_SPLIT
}

/// Parameters of a two-arm test, prior to validation.
///
/// The two rate inputs are required; every other knob carries a default and
/// can be omitted in serialized form. Validation happens when the record is
/// turned into an [`ExperimentDesign`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentParameters {
    /// Historical success probability of the control arm, in (0, 1).
    pub baseline_rate: f64,
    /// Absolute effect size to detect. May be negative to plan for a
    /// decrease; the implied target rate
    /// `baseline_rate + minimum_detectable_effect` must land in (0, 1].
    pub minimum_detectable_effect: f64,
    /// Two-sided significance level, in (0, 1). Default 0.05.
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// Statistical power, in (0, 1). Default 0.80.
    #[serde(default = "default_power")]
    pub power: f64,
    /// Total eligible units arriving per day. Default 400.
    #[serde(default = "default_daily_volume")]
    pub daily_volume: i64,
    /// Fraction of daily volume assigned to treatment, in (0, 1).
    /// Default 0.50.
    #[serde(default = "default_treatment_split")]
    pub treatment_split: f64,
}

impl ExperimentParameters {
    /// Parameters with every optional knob at its default.
    pub fn new(baseline_rate: f64, minimum_detectable_effect: f64) -> Self {
        ExperimentParameters {
            baseline_rate,
            minimum_detectable_effect,
            alpha: DEFAULT_ALPHA,
            power: DEFAULT_POWER,
            daily_volume: DEFAULT_DAILY_VOLUME,
            treatment_split: DEFAULT_TREATMENT_SPLIT,
        }
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_power(mut self, power: f64) -> Self {
        self.power = power;
        self
    }

    pub fn with_daily_volume(mut self, daily_volume: i64) -> Self {
        self.daily_volume = daily_volume;
        self
    }

    pub fn with_treatment_split(mut self, treatment_split: f64) -> Self {
        self.treatment_split = treatment_split;
        self
    }

    /// Validates the record, consuming it. Shorthand for
    /// [`ExperimentDesign::new`].
    pub fn validate(self) -> Result<ExperimentDesign, AbpowerErr> {
        ExperimentDesign::new(self)
    }
}

/// A validated experiment design.
///
/// Construction runs the full parameter validation exactly once; the target
/// rate is derived at that point and the fields are frozen afterwards, so
/// every value read through the getters is known to be in range.
#[derive(Debug, Clone)]
pub struct ExperimentDesign {
    baseline_rate: f64,
    minimum_detectable_effect: f64,
    target_rate: f64,
    alpha: f64,
    power: f64,
    daily_volume: i64,
    treatment_split: f64,
}

impl ExperimentDesign {
    /// Validates `params` field by field, first failure wins.
    pub fn new(params: ExperimentParameters) -> Result<Self, AbpowerErr> {
        let target_rate = params.baseline_rate + params.minimum_detectable_effect;

        // Range checks are written negated so that NaN fails them as well
        if !(params.baseline_rate > 0.0 && params.baseline_rate < 1.0) {
            return Err(InvalidParameterError::BaselineRate(params.baseline_rate).into());
        }
        // A zero effect would put an infinite sample size behind a division
        // by zero, so it is rejected up front. A NaN effect falls through
        // to the target-rate bound below.
        if params.minimum_detectable_effect == 0.0 {
            return Err(InvalidParameterError::MinimumDetectableEffect.into());
        }
        // Upper bound inclusive: a target rate of exactly 1.0 is allowed
        if !(target_rate > 0.0 && target_rate <= 1.0) {
            return Err(InvalidParameterError::TargetRate(target_rate).into());
        }
        if !(params.alpha > 0.0 && params.alpha < 1.0) {
            return Err(InvalidParameterError::Alpha(params.alpha).into());
        }
        if !(params.power > 0.0 && params.power < 1.0) {
            return Err(InvalidParameterError::Power(params.power).into());
        }
        if params.daily_volume <= 0 {
            return Err(InvalidParameterError::DailyVolume(params.daily_volume).into());
        }
        if !(params.treatment_split > 0.0 && params.treatment_split < 1.0) {
            return Err(InvalidParameterError::TreatmentSplit(params.treatment_split).into());
        }

        Ok(ExperimentDesign {
            baseline_rate: params.baseline_rate,
            minimum_detectable_effect: params.minimum_detectable_effect,
            target_rate,
            alpha: params.alpha,
            power: params.power,
            daily_volume: params.daily_volume,
            treatment_split: params.treatment_split,
        })
    }

    pub fn baseline_rate(&self) -> f64 {
        self.baseline_rate
    }

    pub fn minimum_detectable_effect(&self) -> f64 {
        self.minimum_detectable_effect
    }

    /// Success probability the treatment arm is designed to reach,
    /// `baseline_rate + minimum_detectable_effect`.
    pub fn target_rate(&self) -> f64 {
        self.target_rate
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    pub fn daily_volume(&self) -> i64 {
        self.daily_volume
    }

    pub fn treatment_split(&self) -> f64 {
        self.treatment_split
    }
}
