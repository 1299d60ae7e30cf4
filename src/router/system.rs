//! Routing context
//!
//! Ties together the component bus, the outbound transport and the protocol
//! handlers registered for inbound message ids.
//!
//! ```text
//!   transport ──► dispatch(msg, from) ──► ProtocolHandler (by msg id)
//!                                               │
//!                      ┌────────────────────────┤
//!                      ▼                        ▼
//!                ComponentBus             send(msg, comp, to)
//!                (owns components)              │
//!                                               ▼
//!                                          MessageSink ──► transport
//! ```
//!
//! Dispatch is serialised: a handler that sleeps holds up every message
//! behind it. Handlers must not hold a bus guard across an `.await`.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::sync::Mutex;

use crate::protocol::Message;

use super::address::SparseAddress;
use super::bus::ComponentBus;
use super::sink::{MessageSink, OutboundPacket};

/// What became of a dispatched message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// A handler consumed the message
    Accepted,
    /// No handler is registered for the message id
    Unhandled,
}

/// Boxed future returned by protocol handlers
pub type HandlerFuture<'a> = Pin<Box<dyn Future<Output = Disposition> + Send + 'a>>;

/// Handler for one or more inbound message ids
pub trait ProtocolHandler: Send + Sync {
    fn handle<'a>(
        &'a self,
        route: &'a RouteSystem,
        message: &'a Message,
        from: SparseAddress,
    ) -> HandlerFuture<'a>;
}

/// Routing context shared by everything attached to one router
pub struct RouteSystem {
    system_id: u8,
    bus: RwLock<ComponentBus>,
    sink: Arc<dyn MessageSink>,
    protocols: RwLock<HashMap<u32, Arc<dyn ProtocolHandler>>>,
    dispatch_lock: Mutex<()>,
}

impl RouteSystem {
    /// Create a routing context sending through `sink` as `system_id`
    pub fn new(system_id: u8, sink: Arc<dyn MessageSink>) -> Self {
        Self {
            system_id,
            bus: RwLock::new(ComponentBus::new()),
            sink,
            protocols: RwLock::new(HashMap::new()),
            dispatch_lock: Mutex::new(()),
        }
    }

    /// System id used as the source of every outbound message
    pub fn system_id(&self) -> u8 {
        self.system_id
    }

    pub fn bus(&self) -> RwLockReadGuard<'_, ComponentBus> {
        self.bus.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn bus_mut(&self) -> RwLockWriteGuard<'_, ComponentBus> {
        self.bus.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Route the given message ids to `handler`, replacing earlier handlers
    pub fn add_protocol(&self, msg_ids: &[u32], handler: Arc<dyn ProtocolHandler>) {
        let mut protocols = self.protocols.write().unwrap_or_else(PoisonError::into_inner);
        for &id in msg_ids {
            if protocols.insert(id, Arc::clone(&handler)).is_some() {
                tracing::warn!(msg_id = id, "Protocol handler replaced");
            }
        }
    }

    /// Stop routing the given message ids
    pub fn remove_protocol(&self, msg_ids: &[u32]) {
        let mut protocols = self.protocols.write().unwrap_or_else(PoisonError::into_inner);
        for id in msg_ids {
            protocols.remove(id);
        }
    }

    pub fn has_protocol(&self, msg_id: u32) -> bool {
        self.protocols
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&msg_id)
    }

    /// Send a message as local component `component_id` to `target`
    pub fn send(&self, message: Message, component_id: u8, target: SparseAddress) {
        tracing::trace!(
            msg_id = message.msg_id(),
            component = component_id,
            target = %target,
            "Sending message"
        );
        self.sink.send(OutboundPacket {
            system_id: self.system_id,
            component_id,
            target,
            message,
        });
    }

    /// Deliver an inbound message to its protocol handler.
    ///
    /// Messages are handled one at a time in arrival order.
    pub async fn dispatch(&self, message: Message, from: SparseAddress) -> Disposition {
        let _serial = self.dispatch_lock.lock().await;

        let handler = self
            .protocols
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&message.msg_id())
            .cloned();

        match handler {
            Some(handler) => handler.handle(self, &message, from).await,
            None => {
                tracing::trace!(msg_id = message.msg_id(), from = %from, "No protocol handler");
                Disposition::Unhandled
            }
        }
    }
}

impl std::fmt::Debug for RouteSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteSystem")
            .field("system_id", &self.system_id)
            .field("components", &self.bus().len())
            .finish()
    }
}
