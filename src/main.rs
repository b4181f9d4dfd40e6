// src/main.rs

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::warn;

use motion_log_render::channel_names::POSITION;
use motion_log_render::constants::DEFAULT_TIME_STEP_S;
use motion_log_render::data_analysis::derivative::{
    DifferentiationStrategy, FixedStep, TimestampGradient,
};
use motion_log_render::data_analysis::kinematics::append_kinematics;
use motion_log_render::data_input::log_parser::{estimate_sample_interval, LogReader};
use motion_log_render::data_input::log_schema::LogVariant;
use motion_log_render::plot_functions::plot_kinematics::plot_kinematics;
use motion_log_render::plot_functions::plot_position_vs_speed::plot_position_vs_speed;
use motion_log_render::plot_functions::plot_raw_channels::plot_raw_channels;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Scheme {
    /// Backward difference with a constant out-of-band time step
    FixedStep,
    /// Central-difference gradient over the logged timestamps
    Gradient,
}

#[derive(Parser)]
#[command(name = "motion-log-render", version = motion_log_render::crate_version())]
#[command(about = "Derives velocity, acceleration and jerk from a planner telemetry log and renders time-series plots")]
struct Args {
    /// Path to the whitespace-delimited telemetry log
    input: PathBuf,

    /// Column count of the log variant (5, 6 or 8)
    #[arg(long, default_value_t = 5)]
    columns: usize,

    /// Differentiation scheme for the derived channels
    #[arg(long, value_enum, default_value_t = Scheme::Gradient)]
    scheme: Scheme,

    /// Sampling interval in seconds, used only by the fixed-step scheme
    #[arg(long, default_value_t = DEFAULT_TIME_STEP_S)]
    time_step: f64,

    /// Fail on lines with unexpected column counts instead of dropping them
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let variant = LogVariant::from_column_count(args.columns)
        .ok_or_else(|| format!("unsupported column count {} (expected 5, 6 or 8)", args.columns))?;
    let root_name = args
        .input
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    // --- Parse the log into raw channels ---
    let mut set = LogReader::new(variant).strict(args.strict).read_file(&args.input)?;
    println!("Read {} records from '{}'.", set.len(), args.input.display());
    if let Some(interval) = estimate_sample_interval(&set) {
        println!("Estimated sample interval: {:.6} s ({:.1} Hz)", interval, 1.0 / interval);
    }

    // --- Derive kinematic channels ---
    let strategy: Box<dyn DifferentiationStrategy> = match args.scheme {
        Scheme::FixedStep => Box::new(FixedStep::new(args.time_step)?),
        Scheme::Gradient => Box::new(TimestampGradient),
    };

    // The gradient scheme rejects logs with fewer than two records. An
    // empty or single-record log still renders its raw channels.
    let derived = if matches!(args.scheme, Scheme::Gradient) && set.len() < 2 {
        warn!(
            "skipping {} differentiation: {} records is fewer than 2",
            strategy.name(),
            set.len()
        );
        false
    } else {
        println!(
            "Deriving velocity/acceleration/jerk for {:?} using the {} scheme...",
            POSITION,
            strategy.name()
        );
        append_kinematics(&mut set, strategy.as_ref())?;
        true
    };

    // --- Render ---
    println!("\n--- Generating Raw Channel Overlay Plot ---");
    plot_raw_channels(&set, &root_name)?;

    if derived {
        println!("\n--- Generating Stacked Kinematics Plot ---");
        plot_kinematics(&set, &root_name)?;

        println!("\n--- Generating Position vs Speed Dual-Axis Plot ---");
        plot_position_vs_speed(&set, &root_name)?;
    } else {
        println!("\nSkipping derived-channel plots: no derived channels were computed.");
    }

    Ok(())
}
