// src/channel_names.rs

/// Centralized channel naming utilities
///
/// Provides consistent channel names across the parser, the kinematics
/// derivation and all plot functions.
pub const AXIS_COUNT: usize = 3;

/// Canonical name of the time channel.
pub const TIME: &str = "time";

/// Auxiliary scalar carried in every log variant (column `e`).
pub const SCALAR_E: &str = "e";

/// Auxiliary scalar present only in the 6- and 8-column variants (column `s`).
pub const SCALAR_S: &str = "s";

/// Raw position channels in axis order.
pub const POSITION: [&str; AXIS_COUNT] = ["x", "y", "z"];

/// Per-axis velocity channels in axis order.
pub const VELOCITY: [&str; AXIS_COUNT] = ["vx", "vy", "vz"];

/// Per-axis acceleration channels in axis order.
pub const ACCELERATION: [&str; AXIS_COUNT] = ["ax", "ay", "az"];

/// Per-axis jerk channels in axis order.
pub const JERK: [&str; AXIS_COUNT] = ["jx", "jy", "jz"];

/// Magnitude (Euclidean norm) channels.
pub const SPEED: &str = "speed";
pub const ACCEL_MAG: &str = "accel";
pub const JERK_MAG: &str = "jerk";

/// Get the standard axis name for a given index
///
/// # Panics
/// Panics if index is greater than 2
pub fn axis_name(index: usize) -> &'static str {
    match index {
        0 => "X",
        1 => "Y",
        2 => "Z",
        _ => panic!(
            "Invalid axis index: {}. Expected 0 (X), 1 (Y), or 2 (Z)",
            index
        ),
    }
}
