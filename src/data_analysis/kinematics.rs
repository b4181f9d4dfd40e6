// src/data_analysis/kinematics.rs

use crate::channel_names::{
    axis_name, ACCELERATION, ACCEL_MAG, JERK, JERK_MAG, POSITION, SPEED, VELOCITY,
};
use crate::data_analysis::derivative::DifferentiationStrategy;
use crate::data_input::channel_set::{Channel, ChannelSet};
use crate::error::TelemetryError;

/// Euclidean norm across the x/y/z components at each sample index.
pub fn magnitude(x: &[f64], y: &[f64], z: &[f64]) -> Vec<f64> {
    x.iter()
        .zip(y)
        .zip(z)
        .map(|((xv, yv), zv)| (xv * xv + yv * yv + zv * zv).sqrt())
        .collect()
}

/// Derives the twelve kinematic channels from the raw position channels:
/// per-axis velocity, acceleration and jerk, plus their magnitudes.
///
/// Pure with respect to `set`: calling it twice on the same raw ChannelSet
/// yields bit-identical channels. Appending is a separate step so that a
/// failed derivation never leaves a half-extended set behind.
pub fn derive_kinematics(
    set: &ChannelSet,
    strategy: &dyn DifferentiationStrategy,
) -> Result<Vec<Channel>, TelemetryError> {
    let time = set.time()?;

    let mut vel: [Vec<f64>; 3] = Default::default();
    let mut acc: [Vec<f64>; 3] = Default::default();
    let mut jerk: [Vec<f64>; 3] = Default::default();

    for axis in 0..3 {
        let pos = set.samples(POSITION[axis])?;
        vel[axis] = strategy.derivative(time, pos)?;
        acc[axis] = strategy.derivative(time, &vel[axis])?;
        jerk[axis] = strategy.derivative(time, &acc[axis])?;
    }

    let speed = magnitude(&vel[0], &vel[1], &vel[2]);
    let acc_mag = magnitude(&acc[0], &acc[1], &acc[2]);
    let jerk_mag = magnitude(&jerk[0], &jerk[1], &jerk[2]);

    let mut channels = Vec::with_capacity(12);
    for (axis, samples) in vel.into_iter().enumerate() {
        channels.push(Channel::new(
            VELOCITY[axis],
            &format!("{} Velocity", axis_name(axis)),
            "units/s",
            samples,
        ));
    }
    for (axis, samples) in acc.into_iter().enumerate() {
        channels.push(Channel::new(
            ACCELERATION[axis],
            &format!("{} Acceleration", axis_name(axis)),
            "units/s²",
            samples,
        ));
    }
    for (axis, samples) in jerk.into_iter().enumerate() {
        channels.push(Channel::new(
            JERK[axis],
            &format!("{} Jerk", axis_name(axis)),
            "units/s³",
            samples,
        ));
    }
    channels.push(Channel::new(SPEED, "Speed", "units/s", speed));
    channels.push(Channel::new(ACCEL_MAG, "Acceleration", "units/s²", acc_mag));
    channels.push(Channel::new(JERK_MAG, "Jerk", "units/s³", jerk_mag));
    Ok(channels)
}

/// Derives the kinematic channels and appends them to the set.
pub fn append_kinematics(
    set: &mut ChannelSet,
    strategy: &dyn DifferentiationStrategy,
) -> Result<(), TelemetryError> {
    let channels = derive_kinematics(set, strategy)?;
    for channel in channels {
        set.add_channel(channel)?;
    }
    Ok(())
}
