use abpower::compute::{
    DEFAULT_ALPHA, DEFAULT_DAILY_VOLUME, DEFAULT_POWER, DEFAULT_TREATMENT_SPLIT,
    ExperimentParameters, SweepConfig, baseline_rate_from_counts, compute_sample_size,
    sensitivity_sweep,
};
use abpower::report::render::{render_report, render_sweep_table};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "abpower")]
#[command(about = "Sample size and duration calculator for two-proportion A/B tests")]
struct Args {
    /// Baseline conversion rate as a proportion, e.g. 0.20
    #[arg(short, long, default_value_t = 0.20)]
    baseline_rate: f64,

    /// Minimum detectable effect in absolute terms; negative values size a
    /// test for detecting a drop
    #[arg(short, long, default_value_t = 0.05, allow_negative_numbers = true)]
    mde: f64,

    /// Two-sided significance level
    #[arg(long, default_value_t = DEFAULT_ALPHA)]
    alpha: f64,

    /// Statistical power
    #[arg(long, default_value_t = DEFAULT_POWER)]
    power: f64,

    /// Units entering the experiment per day
    #[arg(short, long, default_value_t = DEFAULT_DAILY_VOLUME)]
    daily_volume: i64,

    /// Fraction of daily volume allocated to the treatment arm
    #[arg(short, long, default_value_t = DEFAULT_TREATMENT_SPLIT)]
    treatment_split: f64,

    /// Derive the baseline rate from historical counts instead of --baseline-rate
    #[arg(long, num_args = 2, value_names = ["TOTAL", "SUCCESSES"])]
    from_counts: Option<Vec<i64>>,

    /// Sweep candidate effect sizes instead of computing a single design
    #[arg(long)]
    sweep: bool,

    /// Emit results as JSON instead of a text report
    #[arg(long)]
    json: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

/// Logs go to stderr so that reports and JSON on stdout stay pipeable.
/// The level can be controlled via the `level` parameter or the `RUST_LOG`
/// environment variable.
fn init_logging(level: &str) {
    let default_filter = format!("abpower={level}");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level);

    let baseline_rate = match &args.from_counts {
        Some(counts) => {
            let rate = baseline_rate_from_counts(counts[0], counts[1])?;
            tracing::info!(
                total_units = counts[0],
                successful_units = counts[1],
                rate,
                "derived baseline rate from historical counts"
            );
            rate
        }
        None => args.baseline_rate,
    };

    if args.sweep {
        let config = SweepConfig::new(baseline_rate)
            .with_alpha(args.alpha)
            .with_power(args.power)
            .with_daily_volume(args.daily_volume);
        let rows = sensitivity_sweep(&config)?;
        if rows.is_empty() {
            tracing::warn!(baseline_rate, "every candidate effect overshoots a 100% target rate");
        }

        if args.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        } else {
            print!("{}", render_sweep_table(&rows));
        }
        return Ok(());
    }

    let design = ExperimentParameters::new(baseline_rate, args.mde)
        .with_alpha(args.alpha)
        .with_power(args.power)
        .with_daily_volume(args.daily_volume)
        .with_treatment_split(args.treatment_split)
        .validate()?;
    let result = compute_sample_size(&design)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_report(&result));
    }

    Ok(())
}
