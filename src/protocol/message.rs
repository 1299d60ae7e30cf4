//! Decoded protocol messages
//!
//! Field layout on the wire belongs to the transport. The router hands us
//! messages already decoded into these types, and takes them back the same way.

use bytes::Bytes;

use super::constants::*;

/// Command acknowledgment result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MavResult {
    Accepted = 0,
    TemporarilyRejected = 1,
    Denied = 2,
    Unsupported = 3,
    Failed = 4,
    InProgress = 5,
}

impl From<bool> for MavResult {
    fn from(ok: bool) -> Self {
        if ok {
            MavResult::Accepted
        } else {
            MavResult::Denied
        }
    }
}

/// `COMMAND_LONG` (#76)
#[derive(Debug, Clone, PartialEq)]
pub struct CommandLong {
    pub target_system: u8,
    pub target_component: u8,
    pub command: u16,
    pub confirmation: u8,
    pub params: [f32; 7],
}

impl CommandLong {
    /// Create a command with all parameters zeroed
    pub fn new(target_system: u8, target_component: u8, command: u16) -> Self {
        Self {
            target_system,
            target_component,
            command,
            confirmation: 0,
            params: [0.0; 7],
        }
    }

    /// Set the first parameter
    pub fn with_param1(mut self, value: f32) -> Self {
        self.params[0] = value;
        self
    }

    pub fn param1(&self) -> f32 {
        self.params[0]
    }

    /// Whether param1 is zero within `f32::EPSILON`
    pub fn param1_is_zero(&self) -> bool {
        self.param1().abs() < f32::EPSILON
    }

    /// Stream id carried in param1 (1-based, 0 meaning all streams).
    ///
    /// The sign is ignored and values are truncated to `u8`.
    pub fn stream_id(&self) -> u8 {
        self.param1().abs() as u8
    }
}

/// `COMMAND_ACK` (#77)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandAck {
    pub command: u16,
    pub result: MavResult,
    pub target_system: u8,
    pub target_component: u8,
}

/// `CAMERA_INFORMATION` (#259)
#[derive(Debug, Clone, PartialEq)]
pub struct CameraInformation {
    pub time_boot_ms: u32,
    pub vendor_name: String,
    pub model_name: String,
    pub firmware_version: u32,
    pub focal_length: f32,
    pub sensor_size_h: f32,
    pub sensor_size_v: f32,
    pub resolution_h: u16,
    pub resolution_v: u16,
    pub lens_id: u8,
    pub flags: u32,
    pub cam_definition_version: u16,
    pub cam_definition_uri: String,
}

/// `VIDEO_STREAM_INFORMATION` (#269)
#[derive(Debug, Clone, PartialEq)]
pub struct VideoStreamInformation {
    /// 1-based stream id
    pub stream_id: u8,
    pub count: u8,
    pub stream_type: u8,
    pub flags: u16,
    pub framerate: f32,
    pub resolution_h: u16,
    pub resolution_v: u16,
    pub bitrate: u32,
    pub rotation: u16,
    pub hfov: u16,
    pub name: String,
    pub uri: String,
}

/// A message as seen by the router
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    CommandLong(CommandLong),
    CommandAck(CommandAck),
    CameraInformation(CameraInformation),
    VideoStreamInformation(VideoStreamInformation),
    /// Message this crate does not interpret, kept as raw payload
    Other { msg_id: u32, payload: Bytes },
}

impl Message {
    /// MAVLink message id
    pub fn msg_id(&self) -> u32 {
        match self {
            Message::CommandLong(_) => MAVLINK_MSG_ID_COMMAND_LONG,
            Message::CommandAck(_) => MAVLINK_MSG_ID_COMMAND_ACK,
            Message::CameraInformation(_) => MAVLINK_MSG_ID_CAMERA_INFORMATION,
            Message::VideoStreamInformation(_) => MAVLINK_MSG_ID_VIDEO_STREAM_INFORMATION,
            Message::Other { msg_id, .. } => *msg_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_id_from_param1() {
        let cmd = CommandLong::new(1, MAV_COMP_ID_CAMERA, MAV_CMD_VIDEO_START_STREAMING);
        assert_eq!(cmd.stream_id(), 0);

        assert_eq!(cmd.clone().with_param1(2.0).stream_id(), 2);
        assert_eq!(cmd.clone().with_param1(-3.0).stream_id(), 3);
        assert_eq!(cmd.clone().with_param1(1.9).stream_id(), 1);
        assert_eq!(cmd.with_param1(1000.0).stream_id(), u8::MAX);
    }

    #[test]
    fn test_param1_zero_tolerance() {
        let cmd = CommandLong::new(1, MAV_COMP_ID_CAMERA, MAV_CMD_REQUEST_CAMERA_INFORMATION);
        assert!(cmd.param1_is_zero());
        assert!(cmd.clone().with_param1(-0.0).param1_is_zero());
        assert!(cmd.clone().with_param1(1e-9).param1_is_zero());
        assert!(!cmd.clone().with_param1(1.0).param1_is_zero());
        assert!(!cmd.with_param1(f32::NAN).param1_is_zero());
    }

    #[test]
    fn test_result_from_bool() {
        assert_eq!(MavResult::from(true), MavResult::Accepted);
        assert_eq!(MavResult::from(false), MavResult::Denied);
        assert_eq!(MavResult::Denied as u8, 2);
    }

    #[test]
    fn test_msg_id() {
        let cmd = Message::CommandLong(CommandLong::new(1, 100, 0));
        assert_eq!(cmd.msg_id(), MAVLINK_MSG_ID_COMMAND_LONG);

        let other = Message::Other {
            msg_id: 0,
            payload: Bytes::from_static(&[1, 2, 3]),
        };
        assert_eq!(other.msg_id(), 0);
    }
}
