// src/plot_functions/mod.rs

pub mod plot_kinematics;
pub mod plot_position_vs_speed;
pub mod plot_raw_channels;

use ndarray::Array1;
use ndarray_stats::QuantileExt;

/// Pairs each sample with its timestamp for plotting.
pub fn series_points(time: &[f64], samples: &[f64]) -> Vec<(f64, f64)> {
    time.iter().zip(samples).map(|(t, v)| (*t, *v)).collect()
}

/// Min and max across a group of channels. `None` when every channel is
/// empty, so callers can draw a placeholder instead of an empty chart.
pub fn value_bounds(channels: &[&[f64]]) -> Option<(f64, f64)> {
    let all: Vec<f64> = channels.iter().flat_map(|c| c.iter().copied()).collect();
    if all.is_empty() {
        return None;
    }
    let arr = Array1::from_vec(all);
    let min = *arr.min().ok()?;
    let max = *arr.max().ok()?;
    Some((min, max))
}
