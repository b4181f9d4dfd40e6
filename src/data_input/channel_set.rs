// src/data_input/channel_set.rs

use crate::channel_names::TIME;
use crate::error::TelemetryError;

/// A named, time-aligned sequence of scalar samples.
///
/// `label` and `unit` are display hints for the renderer; the core never
/// interprets them.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub name: String,
    pub label: String,
    pub unit: String,
    pub samples: Vec<f64>,
}

impl Channel {
    pub fn new(name: &str, label: &str, unit: &str, samples: Vec<f64>) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            unit: unit.to_string(),
            samples,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// The full aligned collection of raw and derived channels for one log.
///
/// Append-only: derived channels are always new named entries, never edits of
/// raw data. There is deliberately no deletion or mutation-in-place API, so a
/// raw channel read back after derivation is bit-identical to what the parser
/// produced.
///
/// Invariant: every channel has the same sample count, and index `i` across
/// all channels refers to the same instant.
#[derive(Debug, Clone, Default)]
pub struct ChannelSet {
    channels: Vec<Channel>,
}

impl ChannelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of samples per channel (the number of accepted records).
    /// Zero while the set holds no channels.
    pub fn len(&self) -> usize {
        self.channels.first().map_or(0, Channel::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Channels in insertion order (raw first, derived after).
    pub fn channels(&self) -> impl Iterator<Item = &Channel> {
        self.channels.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.channels.iter().any(|c| c.name == name)
    }

    /// Appends a channel. Once at least one channel exists, the new channel
    /// must match the established sample count exactly.
    pub fn add_channel(&mut self, channel: Channel) -> Result<(), TelemetryError> {
        if self.contains(&channel.name) {
            return Err(TelemetryError::DuplicateChannel(channel.name));
        }
        if !self.channels.is_empty() && channel.len() != self.len() {
            return Err(TelemetryError::LengthMismatch {
                actual: channel.len(),
                name: channel.name,
                expected: self.len(),
            });
        }
        self.channels.push(channel);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&Channel, TelemetryError> {
        self.channels
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| TelemetryError::UnknownChannel(name.to_string()))
    }

    /// Convenience accessor for a channel's sample slice.
    pub fn samples(&self, name: &str) -> Result<&[f64], TelemetryError> {
        Ok(&self.get(name)?.samples)
    }

    /// The canonical time channel.
    pub fn time(&self) -> Result<&[f64], TelemetryError> {
        self.samples(TIME)
    }
}
