//! Camera protocol server
//!
//! [`VideoServer`] manages the camera slots and registers
//! [`CameraCommandHandler`] with the router for `COMMAND_LONG`.

pub mod config;
pub mod handler;
pub mod video;

pub use config::VideoServerConfig;
pub use handler::{CameraCommandHandler, PROTOCOL_TABLE};
pub use video::VideoServer;
