// src/plot_functions/plot_position_vs_speed.rs

use std::error::Error;

use crate::channel_names::{POSITION, SPEED};
use crate::constants::{
    COLOR_POSITION_X, COLOR_POSITION_Y, COLOR_POSITION_Z, COLOR_SECONDARY_AXIS, LINE_WIDTH_PLOT,
};
use crate::data_input::channel_set::ChannelSet;
use crate::plot_framework::{calculate_range, draw_dual_axis_plot, PlotSeries};
use crate::plot_functions::{series_points, value_bounds};

/// Generates the dual-axis plot: position axes on the primary (left) axis and
/// speed on an independently scaled secondary (right) axis, so the
/// heterogeneous-unit channels stay readable on one chart.
pub fn plot_position_vs_speed(set: &ChannelSet, root_name: &str) -> Result<(), Box<dyn Error>> {
    let output_file = format!("{root_name}_PositionVsSpeed.png");

    let time = set.time()?;
    let speed = set.get(SPEED)?;

    let colors = [COLOR_POSITION_X, COLOR_POSITION_Y, COLOR_POSITION_Z];
    let mut primary_series = Vec::new();
    let mut position_samples: Vec<&[f64]> = Vec::new();
    for (axis, name) in POSITION.iter().enumerate() {
        let channel = set.get(name)?;
        primary_series.push(PlotSeries {
            data: series_points(time, &channel.samples),
            label: channel.label.clone(),
            color: *colors[axis],
            stroke_width: LINE_WIDTH_PLOT,
        });
        position_samples.push(&channel.samples);
    }
    let secondary_series = PlotSeries {
        data: series_points(time, &speed.samples),
        label: speed.label.clone(),
        color: *COLOR_SECONDARY_AXIS,
        stroke_width: LINE_WIDTH_PLOT,
    };

    let (x_range, primary_range, secondary_range) = match (
        value_bounds(&[time]),
        value_bounds(&position_samples),
        value_bounds(&[&speed.samples]),
    ) {
        (Some((t_min, t_max)), Some((p_min, p_max)), Some((s_min, s_max))) => {
            let (p_lo, p_hi) = calculate_range(p_min, p_max);
            let (s_lo, s_hi) = calculate_range(s_min, s_max);
            (t_min..t_max, p_lo..p_hi, s_lo..s_hi)
        }
        _ => (0.0..0.0, 0.0..0.0, 0.0..0.0),
    };

    draw_dual_axis_plot(
        &output_file,
        root_name,
        "Position vs Speed",
        "Time (s)",
        "Position (units)",
        &primary_series,
        "Speed (units/s)",
        &secondary_series,
        x_range,
        primary_range,
        secondary_range,
    )
}
