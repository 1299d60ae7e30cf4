//! Camera and video stream control plane for a MAVLink-style router
//!
//! Terminates the camera command set on behalf of up to six local camera
//! components and drives their media streams from a periodic scheduler.
//!
//! # Architecture
//!
//! ```text
//!     inbound COMMAND_LONG
//!            │
//!            ▼
//!     RouteSystem::dispatch ──► CameraCommandHandler ──► COMMAND_ACK, *_INFORMATION
//!            │                        │
//!            ▼                        ▼
//!       ComponentBus ◄──────── VideoServer (camera ids 100..=105)
//!            │
//!            ▼
//!     MediaComponent ──► Stream ──► Scheduler ──► worker(&StreamInfo)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use mavcam::media::{MediaCapsInfo, MediaComponent, StreamInfo};
//! use mavcam::router::{ChannelSink, RouteSystem};
//! use mavcam::scheduler::TokioScheduler;
//! use mavcam::{VideoServer, VideoServerConfig};
//!
//! # async fn example() -> mavcam::error::Result<()> {
//! let (sink, _outbound) = ChannelSink::new();
//! let route = Arc::new(RouteSystem::new(1, Arc::new(sink)));
//! let scheduler = Arc::new(TokioScheduler::current().expect("inside a runtime"));
//!
//! let mut camera = MediaComponent::new(MediaCapsInfo::default(), scheduler);
//! camera.register_stream(
//!     StreamInfo::new("main", "rtsp://192.168.1.10:8554/main").framerate(30.0),
//!     Some(Arc::new(|info: &StreamInfo| tracing::trace!(stream = %info.name, "frame"))),
//! );
//!
//! let mut server = VideoServer::new(VideoServerConfig::default());
//! server.init(route.clone())?;
//! server.add_media_component(camera)?;
//! server.start()?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod media;
pub mod protocol;
pub mod router;
pub mod scheduler;
pub mod server;

pub use error::{Error, Result};
pub use server::{VideoServer, VideoServerConfig};
