// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{AMBER, GREEN, LIGHTBLUE, ORANGE, PURPLE, RED};
use plotters::style::RGBColor;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;

// Default sampling interval of the planner log, in seconds. The fixed-step
// scheme uses this out-of-band value and never cross-checks it against the
// time channel; if the log's real interval drifts, derived values drift with
// it. Known limitation, kept for output compatibility with existing logs.
pub const DEFAULT_TIME_STEP_S: f64 = 0.002;

// Font sizes.
pub const FONT_SIZE_MAIN_TITLE: i32 = 30;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 12;
pub const FONT_SIZE_LEGEND: i32 = 12;
pub const FONT_SIZE_MESSAGE: i32 = 24;

// --- Plot Color Assignments ---
pub const COLOR_POSITION_X: &RGBColor = &RED;
pub const COLOR_POSITION_Y: &RGBColor = &GREEN;
pub const COLOR_POSITION_Z: &RGBColor = &LIGHTBLUE;
pub const COLOR_SCALAR_E: &RGBColor = &AMBER;
pub const COLOR_SPEED: &RGBColor = &LIGHTBLUE;
pub const COLOR_ACCELERATION: &RGBColor = &RED;
pub const COLOR_JERK: &RGBColor = &PURPLE;
pub const COLOR_SECONDARY_AXIS: &RGBColor = &ORANGE;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;
