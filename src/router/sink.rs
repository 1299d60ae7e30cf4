//! Outbound message delivery

use tokio::sync::mpsc;

use crate::protocol::Message;

use super::address::SparseAddress;

/// A message leaving a local component
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundPacket {
    /// Our system id
    pub system_id: u8,
    /// Local component the message is sent as
    pub component_id: u8,
    /// Peer the message is addressed to
    pub target: SparseAddress,
    pub message: Message,
}

/// Transport-side consumer of outbound messages
///
/// Sending must not block; the transport encodes and queues.
pub trait MessageSink: Send + Sync {
    fn send(&self, packet: OutboundPacket);
}

/// Sink that forwards packets into a tokio channel
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<OutboundPacket>,
}

impl ChannelSink {
    /// Create a sink and the receiver draining it
    pub fn new() -> (Self, mpsc::UnboundedReceiver<OutboundPacket>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl MessageSink for ChannelSink {
    fn send(&self, packet: OutboundPacket) {
        if self.tx.send(packet).is_err() {
            tracing::debug!("Outbound receiver closed, dropping packet");
        }
    }
}
