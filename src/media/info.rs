//! Stream descriptors and camera capabilities

use crate::protocol::constants::{STREAM_NAME_LEN, STREAM_URI_LEN};
use crate::protocol::{CameraInformation, VideoStreamInformation};

/// Video stream transport type (`VIDEO_STREAM_TYPE`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum VideoStreamType {
    /// RTSP URI
    #[default]
    Rtsp = 0,
    /// RTP over UDP
    RtpUdp = 1,
    /// MPEG over TCP (HTTP)
    TcpMpeg = 2,
    /// H.264 in MPEG-TS
    MpegTsH264 = 3,
}

/// `VIDEO_STREAM_STATUS_FLAGS`
pub mod stream_flags {
    /// Stream is active
    pub const RUNNING: u16 = 1;
    /// Stream is thermal imaging
    pub const THERMAL: u16 = 2;
}

/// `CAMERA_CAP_FLAGS`
pub mod camera_cap_flags {
    pub const CAPTURE_VIDEO: u32 = 1;
    pub const CAPTURE_IMAGE: u32 = 2;
    pub const HAS_MODES: u32 = 4;
    pub const CAN_CAPTURE_IMAGE_IN_VIDEO_MODE: u32 = 8;
    pub const CAN_CAPTURE_VIDEO_IN_IMAGE_MODE: u32 = 16;
    pub const HAS_IMAGE_SURVEY_MODE: u32 = 32;
    pub const HAS_BASIC_ZOOM: u32 = 64;
    pub const HAS_BASIC_FOCUS: u32 = 128;
    pub const HAS_VIDEO_STREAM: u32 = 256;
    pub const HAS_TRACKING_POINT: u32 = 512;
    pub const HAS_TRACKING_RECTANGLE: u32 = 1024;
    pub const HAS_TRACKING_GEO_STATUS: u32 = 2048;
}

/// Description of one media stream
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StreamInfo {
    pub stream_type: VideoStreamType,
    /// `stream_flags` bitmask
    pub flags: u16,
    /// Frames per second; also the worker's invocation rate
    pub framerate: f32,
    /// Horizontal resolution in pixels
    pub width: u16,
    /// Vertical resolution in pixels
    pub height: u16,
    /// Bits per second
    pub bitrate: u32,
    /// Degrees clockwise
    pub rotation: u16,
    /// Horizontal field of view in degrees
    pub hfov: u16,
    pub name: String,
    pub uri: String,
}

impl StreamInfo {
    /// Create a descriptor with the given name and URI
    pub fn new(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
            ..Default::default()
        }
    }

    /// Set the stream type
    pub fn stream_type(mut self, stream_type: VideoStreamType) -> Self {
        self.stream_type = stream_type;
        self
    }

    /// Set the frame rate
    pub fn framerate(mut self, fps: f32) -> Self {
        self.framerate = fps;
        self
    }

    /// Set the resolution
    pub fn resolution(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the bitrate
    pub fn bitrate(mut self, bps: u32) -> Self {
        self.bitrate = bps;
        self
    }

    /// Set the status flags
    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    /// Set rotation and horizontal field of view
    pub fn optics(mut self, rotation: u16, hfov: u16) -> Self {
        self.rotation = rotation;
        self.hfov = hfov;
        self
    }

    /// Check that name and URI fit their wire fields
    pub fn is_valid(&self) -> bool {
        self.name.len() <= STREAM_NAME_LEN && self.uri.len() <= STREAM_URI_LEN
    }

    /// Build the information message for this stream.
    ///
    /// `stream_id` is the 1-based wire id, `count` the component's stream total.
    pub fn to_message(&self, stream_id: u8, count: u8) -> VideoStreamInformation {
        VideoStreamInformation {
            stream_id,
            count,
            stream_type: self.stream_type as u8,
            flags: self.flags,
            framerate: self.framerate,
            resolution_h: self.width,
            resolution_v: self.height,
            bitrate: self.bitrate,
            rotation: self.rotation,
            hfov: self.hfov,
            name: self.name.clone(),
            uri: self.uri.clone(),
        }
    }
}

/// Static capability record of a camera-like component
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MediaCapsInfo {
    /// Boot timestamp in milliseconds
    pub time_boot_ms: u32,
    pub vendor_name: String,
    pub model_name: String,
    /// Packed as `(dev & 0xff) << 24 | (patch & 0xff) << 16 | (minor & 0xff) << 8 | major`
    pub firmware_version: u32,
    /// Millimetres
    pub focal_length: f32,
    /// Millimetres
    pub sensor_size_h: f32,
    /// Millimetres
    pub sensor_size_v: f32,
    pub resolution_h: u16,
    pub resolution_v: u16,
    pub lens_id: u8,
    /// `camera_cap_flags` bitmask
    pub flags: u32,
    pub cam_definition_version: u16,
    pub cam_definition_uri: String,
}

impl MediaCapsInfo {
    /// Build the camera information message.
    ///
    /// The boot time field is scaled by 1000 and wraps at 32 bits.
    pub fn to_message(&self) -> CameraInformation {
        CameraInformation {
            time_boot_ms: self.time_boot_ms.wrapping_mul(1000),
            vendor_name: self.vendor_name.clone(),
            model_name: self.model_name.clone(),
            firmware_version: self.firmware_version,
            focal_length: self.focal_length,
            sensor_size_h: self.sensor_size_h,
            sensor_size_v: self.sensor_size_v,
            resolution_h: self.resolution_h,
            resolution_v: self.resolution_v,
            lens_id: self.lens_id,
            flags: self.flags,
            cam_definition_version: self.cam_definition_version,
            cam_definition_uri: self.cam_definition_uri.clone(),
        }
    }
}
