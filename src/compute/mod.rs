//----------------------------------------
// compute mod
//----------------------------------------
pub use crate::baseline::from_counts::baseline_rate_from_counts;
pub use crate::design::types::{
    DEFAULT_ALPHA, DEFAULT_DAILY_VOLUME, DEFAULT_POWER, DEFAULT_TREATMENT_SPLIT, ExperimentDesign,
    ExperimentParameters,
};
pub use crate::sample_size::compute_ss::{achieved_power, compute_sample_size};
pub use crate::sample_size::types::SampleSizeResult;
pub use crate::sweep::compute_sweep::sensitivity_sweep;
pub use crate::sweep::types::{DEFAULT_MDE_VALUES, SweepConfig};
