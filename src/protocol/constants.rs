//! MAVLink identifiers used by the camera protocol
//!
//! Values follow the common MAVLink dialect.

use std::time::Duration;

// Message ids
pub const MAVLINK_MSG_ID_COMMAND_LONG: u32 = 76;
pub const MAVLINK_MSG_ID_COMMAND_ACK: u32 = 77;
pub const MAVLINK_MSG_ID_CAMERA_INFORMATION: u32 = 259;
pub const MAVLINK_MSG_ID_VIDEO_STREAM_INFORMATION: u32 = 269;

// Camera component ids (contiguous block of six)
pub const MAV_COMP_ID_CAMERA: u8 = 100;
pub const MAV_COMP_ID_CAMERA2: u8 = 101;
pub const MAV_COMP_ID_CAMERA3: u8 = 102;
pub const MAV_COMP_ID_CAMERA4: u8 = 103;
pub const MAV_COMP_ID_CAMERA5: u8 = 104;
pub const MAV_COMP_ID_CAMERA6: u8 = 105;

/// Number of camera component slots
pub const CAMERA_SLOT_COUNT: usize = (MAV_COMP_ID_CAMERA6 - MAV_COMP_ID_CAMERA) as usize + 1;

// Camera protocol commands
pub const MAV_CMD_REQUEST_CAMERA_INFORMATION: u16 = 521;
pub const MAV_CMD_REQUEST_CAMERA_SETTINGS: u16 = 522;
pub const MAV_CMD_REQUEST_STORAGE_INFORMATION: u16 = 525;
pub const MAV_CMD_STORAGE_FORMAT: u16 = 526;
pub const MAV_CMD_REQUEST_CAMERA_CAPTURE_STATUS: u16 = 527;
pub const MAV_CMD_RESET_CAMERA_SETTINGS: u16 = 529;
pub const MAV_CMD_SET_CAMERA_MODE: u16 = 530;
pub const MAV_CMD_IMAGE_START_CAPTURE: u16 = 2000;
pub const MAV_CMD_IMAGE_STOP_CAPTURE: u16 = 2001;
pub const MAV_CMD_REQUEST_CAMERA_IMAGE_CAPTURE: u16 = 2002;
pub const MAV_CMD_DO_TRIGGER_CONTROL: u16 = 2003;
pub const MAV_CMD_VIDEO_START_CAPTURE: u16 = 2500;
pub const MAV_CMD_VIDEO_STOP_CAPTURE: u16 = 2501;
pub const MAV_CMD_VIDEO_START_STREAMING: u16 = 2502;
pub const MAV_CMD_VIDEO_STOP_STREAMING: u16 = 2503;
pub const MAV_CMD_REQUEST_VIDEO_STREAM_INFORMATION: u16 = 2504;

/// Camera commands that are recognised but not implemented.
///
/// These get an explicit negative acknowledgment rather than silence.
pub const UNSUPPORTED_CAMERA_COMMANDS: [u16; 12] = [
    MAV_CMD_REQUEST_CAMERA_SETTINGS,
    MAV_CMD_SET_CAMERA_MODE,
    MAV_CMD_REQUEST_CAMERA_CAPTURE_STATUS,
    MAV_CMD_RESET_CAMERA_SETTINGS,
    MAV_CMD_REQUEST_STORAGE_INFORMATION,
    MAV_CMD_STORAGE_FORMAT,
    MAV_CMD_IMAGE_START_CAPTURE,
    MAV_CMD_IMAGE_STOP_CAPTURE,
    MAV_CMD_VIDEO_START_CAPTURE,
    MAV_CMD_VIDEO_STOP_CAPTURE,
    MAV_CMD_REQUEST_CAMERA_IMAGE_CAPTURE,
    MAV_CMD_DO_TRIGGER_CONTROL,
];

/// Pause between an acknowledgment and its payload, and between fan-out payloads
pub const SETTLE_INTERVAL: Duration = Duration::from_millis(100);

/// Wire width of `VIDEO_STREAM_INFORMATION.name`
pub const STREAM_NAME_LEN: usize = 32;

/// Wire width of `VIDEO_STREAM_INFORMATION.uri`
pub const STREAM_URI_LEN: usize = 160;

/// Check whether a component id belongs to the camera block
pub const fn is_camera_component(id: u8) -> bool {
    id >= MAV_COMP_ID_CAMERA && id <= MAV_COMP_ID_CAMERA6
}
