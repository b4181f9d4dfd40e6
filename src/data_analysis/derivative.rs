// src/data_analysis/derivative.rs

use crate::error::TelemetryError;

/// A numerical differentiation scheme over one channel.
///
/// Two schemes coexist because the log variants differ in what they promise
/// about time: `FixedStep` trusts a constant out-of-band interval,
/// `TimestampGradient` trusts the per-sample timestamps. The choice is always
/// explicit; it is never inferred from the shape of the data.
///
/// The schemes differ semantically, not just numerically: `FixedStep` pads
/// its warm-up with zero sentinels and never fails, `TimestampGradient`
/// defines every index but rejects channels too short to differentiate.
pub trait DifferentiationStrategy {
    /// Human-readable scheme name, for logging.
    fn name(&self) -> &'static str;

    /// Derivative of `samples` with respect to time. `time` must be the
    /// aligned time channel; `FixedStep` ignores it.
    fn derivative(&self, time: &[f64], samples: &[f64]) -> Result<Vec<f64>, TelemetryError>;
}

/// Backward difference with a constant sampling interval supplied out-of-band.
///
/// The first two output samples are warm-up sentinels, defined to be exactly
/// zero rather than "undefined", so every derived channel keeps the raw
/// sample count without introducing missing values. A channel shorter than 3
/// samples differentiates to all zeros instead of failing.
///
/// The interval is never cross-checked against the time channel: if the
/// log's real sampling drifts, the results are silently wrong. Known
/// limitation, kept so existing logs keep producing the same output.
#[derive(Debug, Clone, Copy)]
pub struct FixedStep {
    dt: f64,
}

impl FixedStep {
    /// Validates the interval up front so a bad configuration cannot surface
    /// later as silently-zero output.
    pub fn new(dt: f64) -> Result<Self, TelemetryError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(TelemetryError::InvalidTimeStep(dt));
        }
        Ok(Self { dt })
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }
}

impl DifferentiationStrategy for FixedStep {
    fn name(&self) -> &'static str {
        "fixed-step"
    }

    fn derivative(&self, _time: &[f64], samples: &[f64]) -> Result<Vec<f64>, TelemetryError> {
        let mut out = vec![0.0; samples.len()];
        for i in 2..samples.len() {
            out[i] = (samples[i] - samples[i - 1]) / self.dt;
        }
        Ok(out)
    }
}

/// Central-difference gradient over the actual timestamps, tolerating
/// non-uniform spacing.
///
/// Interior points take the centered slope across their two neighbors,
/// boundary points the one-sided slope to the nearest neighbor, so every
/// index of the output is a real derivative value. A channel shorter than 2
/// samples has no defined derivative and is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampGradient;

impl DifferentiationStrategy for TimestampGradient {
    fn name(&self) -> &'static str {
        "gradient"
    }

    fn derivative(&self, time: &[f64], samples: &[f64]) -> Result<Vec<f64>, TelemetryError> {
        if time.len() != samples.len() {
            return Err(TelemetryError::LengthMismatch {
                name: "time".to_string(),
                expected: samples.len(),
                actual: time.len(),
            });
        }
        let n = samples.len();
        if n < 2 {
            return Err(TelemetryError::InsufficientSamples {
                needed: 2,
                actual: n,
            });
        }

        let mut out = Vec::with_capacity(n);
        out.push((samples[1] - samples[0]) / (time[1] - time[0]));
        for i in 1..n - 1 {
            out.push((samples[i + 1] - samples[i - 1]) / (time[i + 1] - time[i - 1]));
        }
        out.push((samples[n - 1] - samples[n - 2]) / (time[n - 1] - time[n - 2]));
        Ok(out)
    }
}
