use serde::{Deserialize, Serialize};

/// Complete output of one sample-size calculation.
///
/// Echoes the design it was computed from (rates as percentages) next to
/// the statistical intermediates and the operational requirements, so a
/// renderer needs nothing beyond this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSizeResult {
    pub baseline_rate_pct: f64,
    pub target_rate_pct: f64,
    /// Minimum detectable effect, in percentage points.
    pub absolute_lift_pp: f64,
    /// Change from baseline to target relative to the baseline, as a
    /// percentage. Negative when the design plans for a decrease.
    pub relative_lift_pct: f64,
    pub alpha: f64,
    pub power: f64,
    /// Two-sided critical value, z with Phi(z) = 1 - alpha/2.
    pub z_alpha: f64,
    /// z with Phi(z) = power.
    pub z_beta: f64,
    /// Average of baseline and target rates.
    pub pooled_proportion: f64,
    /// Required units per arm, rounded up.
    pub n_per_group: i64,
    /// Required units across both arms, rounded up from the unrounded
    /// per-arm requirement (not from `n_per_group`).
    pub total_n: i64,
    pub daily_volume: i64,
    pub treatment_split: f64,
    pub control_per_day: f64,
    pub treatment_per_day: f64,
    /// Days until both arms reach the per-arm requirement, rounded up.
    pub days_needed: i64,
}
