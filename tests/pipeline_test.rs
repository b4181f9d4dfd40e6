// tests/pipeline_test.rs
//
// End-to-end scenarios: log file on disk -> raw ChannelSet -> derived
// kinematic channels.

use std::fs;
use std::path::PathBuf;

use motion_log_render::data_analysis::derivative::{FixedStep, TimestampGradient};
use motion_log_render::data_analysis::kinematics::append_kinematics;
use motion_log_render::data_input::log_parser::LogReader;
use motion_log_render::data_input::log_schema::LogVariant;
use motion_log_render::error::TelemetryError;

struct TempLog {
    path: PathBuf,
}

impl TempLog {
    fn new(name: &str, content: &str) -> Self {
        let mut path = std::env::temp_dir();
        path.push(format!(
            "motion_log_render_{}_{}.txt",
            std::process::id(),
            name
        ));
        fs::write(&path, content).unwrap();
        Self { path }
    }
}

impl Drop for TempLog {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[test]
fn fixed_step_pipeline_matches_known_velocity() {
    let log = TempLog::new(
        "fixed_step",
        "t x y z e\n\
         0.0 0.0 0.0 0.0 0.0\n\
         0.002 1.0 0.0 0.0 0.0\n\
         0.004 2.0 0.0 0.0 0.0\n",
    );

    let mut set = LogReader::new(LogVariant::FiveColumn)
        .read_file(&log.path)
        .unwrap();
    let scheme = FixedStep::new(0.002).unwrap();
    append_kinematics(&mut set, &scheme).unwrap();

    assert_eq!(set.samples("vx").unwrap(), &[0.0, 0.0, 500.0]);
    assert_eq!(set.samples("speed").unwrap(), &[0.0, 0.0, 500.0]);

    // Every raw and derived channel stays aligned to the record count.
    for channel in set.channels() {
        assert_eq!(channel.len(), 3, "channel '{}' misaligned", channel.name);
    }
}

#[test]
fn header_only_log_produces_empty_set_without_error() {
    let log = TempLog::new("header_only", "t x y z e\n");

    let mut set = LogReader::new(LogVariant::FiveColumn)
        .read_file(&log.path)
        .unwrap();
    assert!(set.is_empty());
    assert_eq!(set.channel_count(), 5);

    // The fixed-step scheme degrades to empty derived channels rather than
    // failing, so an empty set still flows through to the renderer.
    let scheme = FixedStep::new(0.002).unwrap();
    append_kinematics(&mut set, &scheme).unwrap();
    for channel in set.channels() {
        assert!(channel.is_empty());
    }
}

#[test]
fn mismatched_line_is_dropped_and_later_lines_still_land() {
    let log = TempLog::new(
        "dropped_line",
        "s t x y z e\n\
         1.0 0.0 0.0 0.0 0.0 0.0\n\
         1.0 0.1 1.0 0.0 0.0 0.0 9.9\n\
         1.0 0.2 2.0 0.0 0.0 0.0\n",
    );

    let set = LogReader::new(LogVariant::SixColumn)
        .read_file(&log.path)
        .unwrap();
    // The 7-token line is excluded from every channel; the next 6-token
    // line is appended at the next index with no gap.
    assert_eq!(set.len(), 2);
    assert_eq!(set.samples("x").unwrap(), &[0.0, 2.0]);
    assert_eq!(set.time().unwrap(), &[0.0, 0.2]);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = LogReader::new(LogVariant::FiveColumn)
        .read_file(&PathBuf::from("/nonexistent/planner_output.txt"))
        .unwrap_err();
    assert!(matches!(err, TelemetryError::Io { .. }));
}

#[test]
fn gradient_pipeline_defines_every_derived_sample() {
    let log = TempLog::new(
        "gradient",
        "t x y z e\n\
         0.0 0.0 0.0 0.0 0.0\n\
         0.002 1.0 0.5 0.0 0.0\n\
         0.005 2.5 1.0 0.1 0.0\n\
         0.006 3.0 1.5 0.3 0.0\n",
    );

    let mut set = LogReader::new(LogVariant::FiveColumn)
        .read_file(&log.path)
        .unwrap();
    append_kinematics(&mut set, &TimestampGradient).unwrap();

    for name in ["vx", "vy", "vz", "speed", "accel", "jerk"] {
        let samples = set.samples(name).unwrap();
        assert_eq!(samples.len(), 4);
        assert!(
            samples.iter().all(|v| v.is_finite()),
            "channel '{name}' has non-finite entries"
        );
    }
    // No warm-up sentinels under the gradient scheme: the first velocity
    // sample is the real one-sided slope, 1.0 / 0.002.
    assert!((set.samples("vx").unwrap()[0] - 500.0).abs() < 1e-9);
}

#[test]
fn gradient_rejects_single_record_log() {
    let log = TempLog::new(
        "gradient_short",
        "t x y z e\n\
         0.0 1.0 2.0 3.0 4.0\n",
    );

    let mut set = LogReader::new(LogVariant::FiveColumn)
        .read_file(&log.path)
        .unwrap();
    let err = append_kinematics(&mut set, &TimestampGradient).unwrap_err();
    assert!(matches!(err, TelemetryError::InsufficientSamples { .. }));
    // The failed derivation must not have extended the set.
    assert_eq!(set.channel_count(), 5);
}

#[test]
fn eight_column_pipeline_parses_and_derives() {
    let log = TempLog::new(
        "eight_column",
        "s t x y z e u1 u2\n\
         0.1 0.0 0.0 0.0 0.0 0.0 1.0 2.0\n\
         0.2 0.002 1.0 0.0 0.0 0.0 1.0 2.0\n\
         0.3 0.004 2.0 0.0 0.0 0.0 1.0 2.0\n",
    );

    let mut set = LogReader::new(LogVariant::EightColumn)
        .read_file(&log.path)
        .unwrap();
    assert_eq!(set.samples("s").unwrap(), &[0.1, 0.2, 0.3]);

    let scheme = FixedStep::new(0.002).unwrap();
    append_kinematics(&mut set, &scheme).unwrap();
    assert_eq!(set.samples("vx").unwrap(), &[0.0, 0.0, 500.0]);
}
