// src/plot_functions/plot_raw_channels.rs

use std::error::Error;

use crate::channel_names::{POSITION, SCALAR_E};
use crate::constants::{
    COLOR_POSITION_X, COLOR_POSITION_Y, COLOR_POSITION_Z, COLOR_SCALAR_E, LINE_WIDTH_PLOT,
};
use crate::data_input::channel_set::ChannelSet;
use crate::plot_framework::{calculate_range, draw_overlay_plot, PlotConfig, PlotSeries};
use crate::plot_functions::{series_points, value_bounds};

/// Generates the raw-channel overlay plot: x, y, z and the auxiliary scalar
/// `e` on one shared time axis.
pub fn plot_raw_channels(set: &ChannelSet, root_name: &str) -> Result<(), Box<dyn Error>> {
    let output_file = format!("{root_name}_RawChannels.png");

    let time = set.time()?;
    let colors = [COLOR_POSITION_X, COLOR_POSITION_Y, COLOR_POSITION_Z];

    let mut series = Vec::new();
    let mut plotted: Vec<&[f64]> = Vec::new();
    for (axis, name) in POSITION.iter().enumerate() {
        let channel = set.get(name)?;
        series.push(PlotSeries {
            data: series_points(time, &channel.samples),
            label: channel.label.clone(),
            color: *colors[axis],
            stroke_width: LINE_WIDTH_PLOT,
        });
        plotted.push(&channel.samples);
    }
    let e_channel = set.get(SCALAR_E)?;
    series.push(PlotSeries {
        data: series_points(time, &e_channel.samples),
        label: e_channel.label.clone(),
        color: *COLOR_SCALAR_E,
        stroke_width: LINE_WIDTH_PLOT,
    });
    plotted.push(&e_channel.samples);

    let (x_range, y_range) = match (value_bounds(&[time]), value_bounds(&plotted)) {
        (Some((t_min, t_max)), Some((v_min, v_max))) => {
            let (y_min, y_max) = calculate_range(v_min, v_max);
            (t_min..t_max, y_min..y_max)
        }
        // Empty set: invalid ranges make the framework draw a placeholder.
        _ => (0.0..0.0, 0.0..0.0),
    };

    let plot_config = PlotConfig {
        title: "Raw Channels".to_string(),
        x_range,
        y_range,
        series,
        x_label: "Time (s)".to_string(),
        y_label: "Value (units)".to_string(),
    };
    draw_overlay_plot(&output_file, root_name, &plot_config)
}
