// src/plot_functions/plot_kinematics.rs

use std::error::Error;

use plotters::style::RGBColor;

use crate::channel_names::{ACCEL_MAG, JERK_MAG, POSITION, SPEED};
use crate::constants::{
    COLOR_ACCELERATION, COLOR_JERK, COLOR_POSITION_X, COLOR_POSITION_Y, COLOR_POSITION_Z,
    COLOR_SPEED, LINE_WIDTH_PLOT,
};
use crate::data_input::channel_set::ChannelSet;
use crate::plot_framework::{calculate_range, draw_stacked_plot, PlotConfig, PlotSeries};
use crate::plot_functions::{series_points, value_bounds};

const ROW_LABELS: [&str; 4] = ["Position", "Speed", "Acceleration", "Jerk"];

/// Generates the stacked kinematics plot: four rows sharing the time axis,
/// one per derived-quantity family (position, speed, total acceleration,
/// total jerk).
pub fn plot_kinematics(set: &ChannelSet, root_name: &str) -> Result<(), Box<dyn Error>> {
    let output_file = format!("{root_name}_Kinematics_stacked.png");
    let plot_type_name = "Kinematics";

    let time = set.time()?.to_vec();
    let x_bounds = value_bounds(&[&time]);

    // Row 0 overlays the three position axes; rows 1-3 are single magnitude
    // channels. Missing derived channels get placeholder rows instead of
    // failing the image.
    let position_series: Vec<PlotSeries> = {
        let colors = [COLOR_POSITION_X, COLOR_POSITION_Y, COLOR_POSITION_Z];
        POSITION
            .iter()
            .enumerate()
            .filter_map(|(axis, name)| {
                let channel = set.get(name).ok()?;
                Some(PlotSeries {
                    data: series_points(&time, &channel.samples),
                    label: channel.label.clone(),
                    color: *colors[axis],
                    stroke_width: LINE_WIDTH_PLOT,
                })
            })
            .collect()
    };

    let magnitude_rows: [(&str, &RGBColor); 3] = [
        (SPEED, COLOR_SPEED),
        (ACCEL_MAG, COLOR_ACCELERATION),
        (JERK_MAG, COLOR_JERK),
    ];

    draw_stacked_plot(
        &output_file,
        root_name,
        plot_type_name,
        &ROW_LABELS,
        move |row_index| {
            let (t_min, t_max) = x_bounds?;
            let (series, y_label) = if row_index == 0 {
                if position_series.is_empty() {
                    return None;
                }
                (position_series.clone(), "Position (units)".to_string())
            } else {
                let (name, color) = magnitude_rows[row_index - 1];
                let channel = set.get(name).ok()?;
                let series = vec![PlotSeries {
                    data: series_points(&time, &channel.samples),
                    label: channel.label.clone(),
                    color: *color,
                    stroke_width: LINE_WIDTH_PLOT,
                }];
                (series, format!("{} ({})", channel.label, channel.unit))
            };

            let mut v_min = f64::INFINITY;
            let mut v_max = f64::NEG_INFINITY;
            for s in &series {
                for &(_, v) in &s.data {
                    v_min = v_min.min(v);
                    v_max = v_max.max(v);
                }
            }
            if !v_min.is_finite() || !v_max.is_finite() {
                return None;
            }
            let (y_min, y_max) = calculate_range(v_min, v_max);

            Some(PlotConfig {
                title: format!("{} Over Time", ROW_LABELS[row_index]),
                x_range: t_min..t_max,
                y_range: y_min..y_max,
                series,
                x_label: "Time (s)".to_string(),
                y_label,
            })
        },
    )
}
