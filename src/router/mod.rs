//! Message router plumbing
//!
//! The parts of the router the camera protocol talks to: addressing, the
//! component bus, outbound delivery and inbound protocol dispatch.

pub mod address;
pub mod bus;
pub mod sink;
pub mod system;

pub use address::SparseAddress;
pub use bus::{Component, ComponentBus, ComponentKind};
pub use sink::{ChannelSink, MessageSink, OutboundPacket};
pub use system::{Disposition, HandlerFuture, ProtocolHandler, RouteSystem};
