//! Media streams and the components that own them
//!
//! - [`StreamInfo`] / [`MediaCapsInfo`]: static descriptors
//! - [`Stream`]: one stream and its periodic capture worker
//! - [`MediaComponent`]: an ordered set of streams behind one component id

pub mod component;
pub mod info;
pub mod stream;

pub use component::{DefaultHooks, MediaComponent, StreamHooks, MAX_STREAMS};
pub use info::{camera_cap_flags, stream_flags, MediaCapsInfo, StreamInfo, VideoStreamType};
pub use stream::{Stream, Worker};
