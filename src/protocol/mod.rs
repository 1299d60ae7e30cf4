//! Camera protocol vocabulary
//!
//! - Message and command identifiers
//! - Decoded message types exchanged with the router

pub mod constants;
pub mod message;

pub use message::{
    CameraInformation, CommandAck, CommandLong, MavResult, Message, VideoStreamInformation,
};
