//! Video server configuration

use std::ops::RangeInclusive;
use std::time::Duration;

use crate::protocol::constants::*;

/// Video server configuration options
#[derive(Debug, Clone)]
pub struct VideoServerConfig {
    /// Pause after an acknowledgment before its payload, and between
    /// successive payloads of a fan-out
    pub settle_interval: Duration,
}

impl Default for VideoServerConfig {
    fn default() -> Self {
        Self {
            settle_interval: SETTLE_INTERVAL,
        }
    }
}

impl VideoServerConfig {
    /// Set the settle interval
    pub fn settle_interval(mut self, interval: Duration) -> Self {
        self.settle_interval = interval;
        self
    }

    /// Component ids served, in allocation order
    pub fn camera_ids(&self) -> RangeInclusive<u8> {
        MAV_COMP_ID_CAMERA..=MAV_COMP_ID_CAMERA6
    }

    /// Maximum number of media components
    pub fn slot_count(&self) -> usize {
        CAMERA_SLOT_COUNT
    }
}
