use crate::report::format::format_count;
use crate::sample_size::types::SampleSizeResult;

const RULE: &str = "======================================================================";
const THIN_RULE: &str = "----------------------------------------------------------------------";

//----------------------------------------
// Duration assessment
//----------------------------------------

/// How a computed test duration relates to common experiment windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationAssessment {
    /// Fits inside one week
    Feasible,
    /// Fits inside two weeks
    Reasonable,
    /// Longer than two weeks
    Lengthy,
}

impl DurationAssessment {
    pub fn from_days(days: i64) -> Self {
        if days <= 7 {
            DurationAssessment::Feasible
        } else if days <= 14 {
            DurationAssessment::Reasonable
        } else {
            DurationAssessment::Lengthy
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DurationAssessment::Feasible => "feasible",
            DurationAssessment::Reasonable => "reasonable",
            DurationAssessment::Lengthy => "lengthy",
        }
    }
}

//----------------------------------------
// Text rendering
//----------------------------------------

/// Renders one computed design as a sectioned plain-text report.
pub fn render_report(result: &SampleSizeResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", RULE));
    output.push_str("A/B TEST SAMPLE SIZE CALCULATION\n");
    output.push_str(&format!("{}\n", RULE));

    output.push_str("\nTEST PARAMETERS\n");
    output.push_str(&format!(
        "  {:<32}{:.1}%\n",
        "Baseline rate (control):", result.baseline_rate_pct
    ));
    output.push_str(&format!(
        "  {:<32}{:.1}%\n",
        "Target rate (treatment):", result.target_rate_pct
    ));
    output.push_str(&format!(
        "  {:<32}{:.1} percentage points\n",
        "Minimum detectable effect:", result.absolute_lift_pp
    ));
    output.push_str(&format!(
        "  {:<32}{:.1}%\n",
        "Relative lift:", result.relative_lift_pct
    ));
    output.push_str(&format!(
        "  {:<32}{}\n",
        "Significance level (alpha):", result.alpha
    ));
    output.push_str(&format!("  {:<32}{}\n", "Statistical power:", result.power));

    output.push_str("\nSTATISTICAL VALUES\n");
    output.push_str(&format!("  {:<32}{:.3}\n", "z (alpha/2):", result.z_alpha));
    output.push_str(&format!("  {:<32}{:.3}\n", "z (beta):", result.z_beta));
    output.push_str(&format!(
        "  {:<32}{:.3}\n",
        "Pooled proportion:", result.pooled_proportion
    ));

    output.push_str("\nSAMPLE SIZE\n");
    output.push_str(&format!(
        "  {:<32}{}\n",
        "Units per group:",
        format_count(result.n_per_group)
    ));
    output.push_str(&format!(
        "  {:<32}{}\n",
        "Total units:",
        format_count(result.total_n)
    ));

    output.push_str("\nDURATION\n");
    output.push_str(&format!(
        "  {:<32}{} units/day\n",
        "Daily volume:",
        format_count(result.daily_volume)
    ));
    output.push_str(&format!(
        "  {:<32}{:.0}% / {:.0}%\n",
        "Treatment split:",
        result.treatment_split * 100.0,
        (1.0 - result.treatment_split) * 100.0
    ));
    output.push_str(&format!(
        "  {:<32}{:.0} units/day\n",
        "Control arm:", result.control_per_day
    ));
    output.push_str(&format!(
        "  {:<32}{:.0} units/day\n",
        "Treatment arm:", result.treatment_per_day
    ));
    output.push_str(&format!(
        "  {:<32}{}\n",
        "Days needed:", result.days_needed
    ));

    output.push_str("\nASSESSMENT\n");
    let assessment = DurationAssessment::from_days(result.days_needed);
    output.push_str(&format!(
        "  Test duration of {} days is {}",
        result.days_needed,
        assessment.label()
    ));
    match assessment {
        DurationAssessment::Feasible => {
            output.push_str("; one week should provide enough data.\n");
        }
        DurationAssessment::Reasonable => {
            output.push_str("; plan for a two-week window.\n");
        }
        DurationAssessment::Lengthy => {
            output.push_str(". Consider:\n");
            output.push_str("    - increasing the minimum detectable effect\n");
            output.push_str("    - reducing power to 0.70\n");
            output.push_str("    - extending the test window\n");
        }
    }
    output.push_str(&format!("{}\n", RULE));

    output
}

/// Renders sweep rows as a fixed-width table, one line per candidate effect.
pub fn render_sweep_table(results: &[SampleSizeResult]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<12}{:<12}{:<12}{:<12}{:<12}{:<8}\n",
        "MDE (pp)", "Target %", "Rel. lift", "n/group", "Total n", "Days"
    ));
    output.push_str(&format!("{}\n", THIN_RULE));

    for row in results {
        output.push_str(&format!(
            "{:<12}{:<12}{:<12}{:<12}{:<12}{:<8}\n",
            format!("{:.1}", row.absolute_lift_pp),
            format!("{:.1}", row.target_rate_pct),
            format!("{:.1}", row.relative_lift_pct),
            format_count(row.n_per_group),
            format_count(row.total_n),
            row.days_needed
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::types::ExperimentParameters;
    use crate::sample_size::compute_ss::compute_sample_size;
    use crate::sweep::compute_sweep::sensitivity_sweep;
    use crate::sweep::types::SweepConfig;

    fn result_with_daily_volume(daily_volume: i64) -> SampleSizeResult {
        let design = ExperimentParameters::new(0.20, 0.05)
            .with_daily_volume(daily_volume)
            .validate()
            .expect("failed to validate design");
        compute_sample_size(&design).expect("failed to compute design")
    }

    #[test]
    fn assessment_buckets_split_at_one_and_two_weeks() {
        assert_eq!(DurationAssessment::from_days(1), DurationAssessment::Feasible);
        assert_eq!(DurationAssessment::from_days(7), DurationAssessment::Feasible);
        assert_eq!(DurationAssessment::from_days(8), DurationAssessment::Reasonable);
        assert_eq!(DurationAssessment::from_days(14), DurationAssessment::Reasonable);
        assert_eq!(DurationAssessment::from_days(15), DurationAssessment::Lengthy);
        assert_eq!(DurationAssessment::from_days(90), DurationAssessment::Lengthy);
    }

    #[test]
    fn assessment_labels_name_each_bucket() {
        assert_eq!(DurationAssessment::from_days(6).label(), "feasible");
        assert_eq!(DurationAssessment::from_days(11).label(), "reasonable");
        assert_eq!(DurationAssessment::from_days(55).label(), "lengthy");
    }

    #[test]
    fn report_carries_headline_numbers() {
        let report = render_report(&result_with_daily_volume(400));
        assert!(report.contains("Baseline rate (control):"));
        assert!(report.contains("20.0%"));
        assert!(report.contains("25.0%"));
        assert!(report.contains("1,095"));
        assert!(report.contains("2,190"));
        assert!(report.contains("Days needed:"));
        assert!(report.contains("feasible"));
    }

    #[test]
    fn short_test_reads_as_feasible() {
        let report = render_report(&result_with_daily_volume(400));
        assert!(report.contains("Test duration of 6 days is feasible"));
        assert!(!report.contains("lengthy"));
    }

    #[test]
    fn mid_length_test_suggests_two_week_window() {
        // 1094.9 per arm at 100/day lands on 11 days
        let report = render_report(&result_with_daily_volume(200));
        assert!(report.contains("Test duration of 11 days is reasonable"));
        assert!(report.contains("two-week window"));
    }

    #[test]
    fn long_test_lists_mitigations() {
        // 1094.9 per arm at 20/day lands on 55 days
        let report = render_report(&result_with_daily_volume(40));
        assert!(report.contains("Test duration of 55 days is lengthy"));
        assert!(report.contains("increasing the minimum detectable effect"));
        assert!(report.contains("reducing power to 0.70"));
        assert!(report.contains("extending the test window"));
    }

    #[test]
    fn sweep_table_holds_one_line_per_row() {
        let rows = sensitivity_sweep(&SweepConfig::new(0.20)).unwrap();
        let table = render_sweep_table(&rows);
        assert_eq!(table.lines().count(), 2 + rows.len());
        assert!(table.starts_with("MDE (pp)"));
        assert!(table.contains("10.0"));
    }

    #[test]
    fn empty_sweep_renders_header_only() {
        let table = render_sweep_table(&[]);
        assert_eq!(table.lines().count(), 2);
    }
}
