// src/data_input/log_parser.rs

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::channel_names::{POSITION, SCALAR_E, SCALAR_S, TIME};
use crate::data_input::channel_set::{Channel, ChannelSet};
use crate::data_input::log_schema::LogVariant;
use crate::error::TelemetryError;

/// Parses the whitespace-delimited planner log into a [`ChannelSet`] of raw
/// channels, driven by a declared column schema.
///
/// The first line is unconditionally treated as a header and skipped. Every
/// later line is split on whitespace: a line whose token count matches the
/// active variant is converted to floats and appended to each raw channel, a
/// line with any other token count is silently dropped (this is how the
/// header echo and malformed trailing content are filtered out). In strict
/// mode the drop becomes a fatal [`TelemetryError::ColumnCount`] instead.
///
/// A structurally matching line containing a non-numeric token aborts the
/// whole parse with [`TelemetryError::Format`]; no partial dataset is
/// produced.
#[derive(Debug, Clone, Copy)]
pub struct LogReader {
    variant: LogVariant,
    strict: bool,
}

impl LogReader {
    pub fn new(variant: LogVariant) -> Self {
        Self {
            variant,
            strict: false,
        }
    }

    /// Fail with a `ColumnCount` error on token-count mismatch instead of
    /// silently dropping the line. The header line is still skipped.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn variant(&self) -> LogVariant {
        self.variant
    }

    /// Reads and parses a log file from disk.
    pub fn read_file(&self, path: &Path) -> Result<ChannelSet, TelemetryError> {
        let file = File::open(path).map_err(|source| TelemetryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let set = self.read_from(BufReader::new(file), path)?;
        info!(
            "parsed {} records ({} channels) from '{}'",
            set.len(),
            set.channel_count(),
            path.display()
        );
        Ok(set)
    }

    /// Parses log content from any buffered reader. `path` is used only for
    /// error reporting.
    pub fn read_from<R: BufRead>(
        &self,
        reader: R,
        path: &Path,
    ) -> Result<ChannelSet, TelemetryError> {
        let expected = self.variant.column_count();
        let time_idx = self.variant.time_index();
        let pos_idx = self.variant.position_indices();
        let e_idx = self.variant.scalar_e_index();
        let s_idx = self.variant.scalar_s_index();

        let mut time: Vec<f64> = Vec::new();
        let mut pos: [Vec<f64>; 3] = Default::default();
        let mut scalar_e: Vec<f64> = Vec::new();
        let mut scalar_s: Vec<f64> = Vec::new();

        let mut dropped = 0usize;

        for (line_index, line_result) in reader.lines().enumerate() {
            let line = line_result.map_err(|source| TelemetryError::Io {
                path: path.to_path_buf(),
                source,
            })?;

            // The first line is always a header, regardless of content.
            if line_index == 0 {
                continue;
            }
            let line_number = line_index + 1;

            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != expected {
                if self.strict && !tokens.is_empty() {
                    return Err(TelemetryError::ColumnCount {
                        line: line_number,
                        expected,
                        found: tokens.len(),
                    });
                }
                if !tokens.is_empty() {
                    dropped += 1;
                    debug!(
                        "line {}: dropped ({} tokens, expected {})",
                        line_number,
                        tokens.len(),
                        expected
                    );
                }
                continue;
            }

            let mut values = Vec::with_capacity(expected);
            for token in &tokens {
                let value: f64 = token.parse().map_err(|_| TelemetryError::Format {
                    line: line_number,
                    token: (*token).to_string(),
                })?;
                values.push(value);
            }

            time.push(values[time_idx]);
            for (axis, &idx) in pos_idx.iter().enumerate() {
                pos[axis].push(values[idx]);
            }
            scalar_e.push(values[e_idx]);
            if let Some(idx) = s_idx {
                scalar_s.push(values[idx]);
            }
        }

        if dropped > 0 {
            info!("dropped {} lines with unexpected column counts", dropped);
        }

        let [pos_x, pos_y, pos_z] = pos;
        let mut set = ChannelSet::new();
        set.add_channel(Channel::new(TIME, "Time", "s", time))?;
        set.add_channel(Channel::new(POSITION[0], "X Position", "units", pos_x))?;
        set.add_channel(Channel::new(POSITION[1], "Y Position", "units", pos_y))?;
        set.add_channel(Channel::new(POSITION[2], "Z Position", "units", pos_z))?;
        set.add_channel(Channel::new(SCALAR_E, "E", "units", scalar_e))?;
        if s_idx.is_some() {
            set.add_channel(Channel::new(SCALAR_S, "S", "units", scalar_s))?;
        }
        Ok(set)
    }
}

/// Mean interval between consecutive timestamps, ignoring non-increasing
/// pairs. Reported to the operator only; the fixed-step scheme deliberately
/// keeps its out-of-band Δt even when the log disagrees.
pub fn estimate_sample_interval(set: &ChannelSet) -> Option<f64> {
    let time = set.time().ok()?;
    let mut total_delta = 0.0;
    let mut count = 0usize;
    for pair in time.windows(2) {
        let delta = pair[1] - pair[0];
        if delta > 1e-9 {
            total_delta += delta;
            count += 1;
        }
    }
    if count > 0 {
        Some(total_delta / count as f64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn parse(reader: LogReader, content: &str) -> Result<ChannelSet, TelemetryError> {
        reader.read_from(Cursor::new(content), &PathBuf::from("test.txt"))
    }

    #[test]
    fn five_column_log_parses_into_aligned_channels() {
        let content = "t x y z e\n\
                       0.0 1.0 2.0 3.0 4.0\n\
                       0.002 1.5 2.5 3.5 4.5\n";
        let set = parse(LogReader::new(LogVariant::FiveColumn), content).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.channel_count(), 5); // no `s` channel in variant A
        assert_eq!(set.time().unwrap(), &[0.0, 0.002]);
        assert_eq!(set.samples("x").unwrap(), &[1.0, 1.5]);
        assert_eq!(set.samples("e").unwrap(), &[4.0, 4.5]);
        assert!(matches!(
            set.get("s"),
            Err(TelemetryError::UnknownChannel(_))
        ));
    }

    #[test]
    fn six_column_log_reorders_s_and_time() {
        let content = "s t x y z e\n\
                       9.0 0.5 1.0 2.0 3.0 4.0\n";
        let set = parse(LogReader::new(LogVariant::SixColumn), content).unwrap();
        assert_eq!(set.time().unwrap(), &[0.5]);
        assert_eq!(set.samples("s").unwrap(), &[9.0]);
        assert_eq!(set.samples("x").unwrap(), &[1.0]);
    }

    #[test]
    fn eight_column_log_ignores_trailing_scalars() {
        let content = "s t x y z e u1 u2\n\
                       9.0 0.5 1.0 2.0 3.0 4.0 7.0 8.0\n";
        let set = parse(LogReader::new(LogVariant::EightColumn), content).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.channel_count(), 6);
        assert_eq!(set.samples("e").unwrap(), &[4.0]);
    }

    #[test]
    fn mismatched_column_counts_are_dropped_without_gaps() {
        // A 7-token line under 6-column mode is dropped; the following
        // well-formed line lands at the next index.
        let content = "s t x y z e\n\
                       1.0 0.0 1.0 2.0 3.0 4.0\n\
                       1.0 0.1 1.0 2.0 3.0 4.0 5.0\n\
                       1.0 0.2 2.0 2.0 3.0 4.0\n";
        let set = parse(LogReader::new(LogVariant::SixColumn), content).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.time().unwrap(), &[0.0, 0.2]);
        assert_eq!(set.samples("x").unwrap(), &[1.0, 2.0]);
    }

    #[test]
    fn strict_mode_rejects_mismatched_column_counts() {
        let content = "s t x y z e\n\
                       1.0 0.1 1.0 2.0 3.0 4.0 5.0\n";
        let err = parse(LogReader::new(LogVariant::SixColumn).strict(true), content).unwrap_err();
        assert!(matches!(
            err,
            TelemetryError::ColumnCount {
                line: 2,
                expected: 6,
                found: 7,
            }
        ));
    }

    #[test]
    fn non_numeric_token_in_matching_line_is_fatal() {
        let content = "t x y z e\n\
                       0.0 1.0 oops 3.0 4.0\n";
        let err = parse(LogReader::new(LogVariant::FiveColumn), content).unwrap_err();
        match err {
            TelemetryError::Format { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "oops");
            }
            other => panic!("expected Format error, got {other:?}"),
        }
    }

    #[test]
    fn header_only_file_yields_empty_channels() {
        let set = parse(LogReader::new(LogVariant::FiveColumn), "t x y z e\n").unwrap();
        assert!(set.is_empty());
        assert_eq!(set.channel_count(), 5);
        assert_eq!(set.time().unwrap().len(), 0);
    }

    #[test]
    fn empty_file_yields_empty_channels() {
        let set = parse(LogReader::new(LogVariant::FiveColumn), "").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn first_line_is_skipped_even_if_it_looks_like_data() {
        let content = "0.0 1.0 2.0 3.0 4.0\n\
                       0.002 1.0 2.0 3.0 4.0\n";
        let set = parse(LogReader::new(LogVariant::FiveColumn), content).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.time().unwrap(), &[0.002]);
    }

    #[test]
    fn sample_interval_estimate_ignores_stalls() {
        let mut set = ChannelSet::new();
        set.add_channel(Channel::new(
            TIME,
            "Time",
            "s",
            vec![0.0, 0.002, 0.002, 0.006],
        ))
        .unwrap();
        let dt = estimate_sample_interval(&set).unwrap();
        assert!((dt - 0.003).abs() < 1e-12);
    }
}
