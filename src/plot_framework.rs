// src/plot_framework.rs

use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{PathElement, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;

use crate::constants::{
    FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND, FONT_SIZE_MAIN_TITLE,
    FONT_SIZE_MESSAGE, LINE_WIDTH_LEGEND, PLOT_HEIGHT, PLOT_WIDTH,
};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    row_label: &str,
    plot_type: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    const CHAR_WIDTH_RATIO: f32 = 0.6;

    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (
        (x_range.end - x_range.start) as u32,
        (y_range.end - y_range.start) as u32,
    );
    let message = if row_label.is_empty() {
        format!("{plot_type} Data Unavailable: {reason}")
    } else {
        format!("{row_label} {plot_type} Data Unavailable: {reason}")
    };

    let estimated_char_width = (FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let estimated_text_width = message.len() as i32 * estimated_char_width;
    let center_x = width as i32 / 2 - estimated_text_width / 2;
    let center_y = height as i32 / 2 - FONT_SIZE_MESSAGE / 2;

    let text_style = ("sans-serif", FONT_SIZE_MESSAGE).into_font().color(&RED);
    area.draw(&Text::new(message, (center_x, center_y), text_style))?;
    Ok(())
}

/// Draws a single chart into the given area from a PlotConfig.
fn draw_single_chart(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(20)
        .y_labels(10)
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let mut legend_series_count = 0;
    for s in &plot_config.series {
        if s.data.is_empty() {
            continue;
        }
        let series = chart.draw_series(LineSeries::new(
            s.data.iter().cloned(),
            s.color.stroke_width(s.stroke_width),
        ))?;
        if !s.label.is_empty() {
            let color = s.color;
            series.label(&s.label).legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 20, y)],
                    color.stroke_width(LINE_WIDTH_LEGEND),
                )
            });
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LEGEND))
            .draw()?;
    }
    Ok(())
}

/// Creates a single-chart image overlaying named channels on one time axis.
pub fn draw_overlay_plot(
    output_filename: &str,
    root_name: &str,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE)
            .into_font()
            .color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);

    let has_data = plot_config.series.iter().any(|s| !s.data.is_empty());
    let valid_ranges = plot_config.x_range.end > plot_config.x_range.start
        && plot_config.y_range.end > plot_config.y_range.start;
    if has_data && valid_ranges {
        draw_single_chart(&margined_root_area, plot_config)?;
        root_area.present()?;
        println!("  Overlay plot saved as '{output_filename}'.");
    } else {
        let reason = if !has_data { "No data points" } else { "Invalid ranges" };
        draw_unavailable_message(&margined_root_area, "", &plot_config.title, reason)?;
        root_area.present()?;
        println!("  Skipping '{output_filename}' plot content: {reason}, placeholder shown.");
    }
    Ok(())
}

/// Creates a stacked plot image with one subplot per derived-quantity family,
/// all sharing the time axis.
///
/// `get_row_plot_data` supplies each row's chart (by row index); a `None`
/// row draws a placeholder message instead of failing the whole image.
pub fn draw_stacked_plot<'a, F>(
    output_filename: &'a str,
    root_name: &str,
    plot_type_name: &str,
    row_labels: &[&str],
    mut get_row_plot_data: F,
) -> Result<(), Box<dyn Error>>
where
    F: FnMut(usize) -> Option<PlotConfig>,
    <BitMapBackend<'a> as DrawingBackend>::ErrorType: 'static,
{
    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE)
            .into_font()
            .color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);
    let sub_plot_areas = margined_root_area.split_evenly((row_labels.len(), 1));
    let mut any_row_plotted = false;

    for (row_index, row_label) in row_labels.iter().enumerate() {
        let area = &sub_plot_areas[row_index];
        match get_row_plot_data(row_index) {
            Some(plot_config) => {
                let has_data = plot_config.series.iter().any(|s| !s.data.is_empty());
                let valid_ranges = plot_config.x_range.end > plot_config.x_range.start
                    && plot_config.y_range.end > plot_config.y_range.start;
                if has_data && valid_ranges {
                    draw_single_chart(area, &plot_config)?;
                    any_row_plotted = true;
                } else {
                    let reason = if !has_data {
                        "No data points"
                    } else {
                        "Invalid ranges"
                    };
                    draw_unavailable_message(area, row_label, plot_type_name, reason)?;
                }
            }
            None => {
                draw_unavailable_message(area, row_label, plot_type_name, "No data available")?;
            }
        }
    }

    root_area.present()?;
    if any_row_plotted {
        println!("  Stacked plot saved as '{output_filename}'.");
    } else {
        println!(
            "  Skipping '{output_filename}' plot content: no data for any row, only placeholder messages shown."
        );
    }
    Ok(())
}

/// Creates a chart with a primary left axis and an independently scaled
/// secondary right axis, for overlaying heterogeneous-unit channels.
pub fn draw_dual_axis_plot(
    output_filename: &str,
    root_name: &str,
    title: &str,
    x_label: &str,
    primary_label: &str,
    primary_series: &[PlotSeries],
    secondary_label: &str,
    secondary_series: &PlotSeries,
    x_range: Range<f64>,
    primary_range: Range<f64>,
    secondary_range: Range<f64>,
) -> Result<(), Box<dyn Error>> {
    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE)
            .into_font()
            .color(&BLACK),
    ))?;
    let area = root_area.margin(50, 5, 5, 5);

    let has_data = primary_series.iter().any(|s| !s.data.is_empty())
        && !secondary_series.data.is_empty();
    if !has_data {
        draw_unavailable_message(&area, "", title, "No data points")?;
        root_area.present()?;
        println!("  Skipping '{output_filename}' plot content: no data, placeholder shown.");
        return Ok(());
    }

    let mut chart = ChartBuilder::on(&area)
        .caption(title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .right_y_label_area_size(60)
        .build_cartesian_2d(x_range.clone(), primary_range)?
        .set_secondary_coord(x_range, secondary_range);

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(primary_label)
        .x_labels(20)
        .y_labels(10)
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;
    chart
        .configure_secondary_axes()
        .y_desc(secondary_label)
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    for s in primary_series {
        if s.data.is_empty() {
            continue;
        }
        let color = s.color;
        chart
            .draw_series(LineSeries::new(
                s.data.iter().cloned(),
                s.color.stroke_width(s.stroke_width),
            ))?
            .label(&s.label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_LEGEND))
            });
    }
    let color = secondary_series.color;
    chart
        .draw_secondary_series(LineSeries::new(
            secondary_series.data.iter().cloned(),
            secondary_series.color.stroke_width(secondary_series.stroke_width),
        ))?
        .label(&secondary_series.label)
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_LEGEND))
        });

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", FONT_SIZE_LEGEND))
        .draw()?;

    root_area.present()?;
    println!("  Dual-axis plot saved as '{output_filename}'.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_padding_is_fifteen_percent() {
        let (min, max) = calculate_range(0.0, 10.0);
        assert!((min - (-1.5)).abs() < 1e-9);
        assert!((max - 11.5).abs() < 1e-9);
    }

    #[test]
    fn degenerate_range_gets_fixed_padding() {
        let (min, max) = calculate_range(5.0, 5.0);
        assert!((min - 4.5).abs() < 1e-9);
        assert!((max - 5.5).abs() < 1e-9);
    }

    #[test]
    fn swapped_bounds_are_reordered() {
        let (min, max) = calculate_range(10.0, 0.0);
        assert!(min < 0.0 && max > 10.0);
    }
}
