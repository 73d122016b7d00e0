use crate::design::error::InvalidParameterError;
use crate::design::types::ExperimentDesign;
use crate::error::AbpowerErr;
use crate::normal::std_normal::{std_normal_cdf, std_normal_quantile};
use crate::sample_size::types::SampleSizeResult;

/// Computes the required per-arm and total sample size for a two-proportion
/// test, along with the implied duration under the design's daily volume and
/// traffic split.
///
/// Uses the pooled-variance normal approximation: with d the absolute effect
/// and p-bar the pooled proportion, each arm needs
/// `2 * pbar * (1 - pbar) * (z_alpha + z_beta)^2 / d^2` units. Rounding is
/// always upward, and the total is rounded from the doubled unrounded
/// requirement rather than from the rounded per-arm count, so the two can
/// differ by one unit.
pub fn compute_sample_size(design: &ExperimentDesign) -> Result<SampleSizeResult, AbpowerErr> {
    let p1 = design.baseline_rate();
    let p2 = design.target_rate();

    //----------------------------------------
    // Critical values
    //----------------------------------------
    // Two-sided test, so alpha is split across both tails
    let z_alpha = std_normal_quantile(1.0 - design.alpha() / 2.0)?;
    let z_beta = std_normal_quantile(design.power())?;

    //----------------------------------------
    // Per-arm requirement
    //----------------------------------------
    let pooled_proportion = (p1 + p2) / 2.0;
    let variance = pooled_proportion * (1.0 - pooled_proportion);
    let raw_n_per_group = 2.0 * variance * (z_alpha + z_beta).powi(2) / (p2 - p1).powi(2);

    //----------------------------------------
    // Duration under the daily split
    //----------------------------------------
    let control_per_day = design.daily_volume() as f64 * (1.0 - design.treatment_split());
    let treatment_per_day = design.daily_volume() as f64 * design.treatment_split();

    // The test cannot conclude before both arms individually reach the
    // per-arm requirement, so the arm with the smaller daily allocation
    // binds. Days count from the unrounded requirement.
    let days_treatment = raw_n_per_group / treatment_per_day;
    let days_control = raw_n_per_group / control_per_day;
    let days_needed = days_treatment.max(days_control).ceil() as i64;

    let relative_lift_pct = (p2 - p1) / p1 * 100.0;

    Ok(SampleSizeResult {
        baseline_rate_pct: p1 * 100.0,
        target_rate_pct: p2 * 100.0,
        absolute_lift_pp: design.minimum_detectable_effect() * 100.0,
        relative_lift_pct,
        alpha: design.alpha(),
        power: design.power(),
        z_alpha,
        z_beta,
        pooled_proportion,
        n_per_group: raw_n_per_group.ceil() as i64,
        total_n: (2.0 * raw_n_per_group).ceil() as i64,
        daily_volume: design.daily_volume(),
        treatment_split: design.treatment_split(),
        control_per_day,
        treatment_per_day,
        days_needed,
    })
}

/// Power attained by the design's test when each arm collects `n_per_group`
/// units; the per-arm formula of [`compute_sample_size`] solved for power
/// instead of size.
pub fn achieved_power(design: &ExperimentDesign, n_per_group: f64) -> Result<f64, AbpowerErr> {
    // Written negated so a NaN count fails as well
    if !(n_per_group > 0.0) {
        return Err(InvalidParameterError::NPerGroup(n_per_group).into());
    }

    let d = design.target_rate() - design.baseline_rate();
    let pooled_proportion = (design.baseline_rate() + design.target_rate()) / 2.0;
    let variance = pooled_proportion * (1.0 - pooled_proportion);

    let z_alpha = std_normal_quantile(1.0 - design.alpha() / 2.0)?;
    let z_beta = (n_per_group * d * d / (2.0 * variance)).sqrt() - z_alpha;

    Ok(std_normal_cdf(z_beta))
}
