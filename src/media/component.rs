//! Camera-like component owning a set of streams
//!
//! Streams are appended and never removed or reordered, so a stream's index
//! is stable for the lifetime of the component. The wire uses the same
//! index plus one.

use std::sync::{Arc, Weak};

use crate::router::{Component, ComponentKind, RouteSystem};
use crate::scheduler::Scheduler;

use super::info::{MediaCapsInfo, StreamInfo};
use super::stream::{Stream, Worker};

/// Variant-specific checks around starting and stopping streams
///
/// Both hooks default to accepting.
pub trait StreamHooks: Send + Sync {
    /// Called before a stream starts. Returning false keeps it stopped.
    fn on_start_stream(&self, _stream: &Stream) -> bool {
        true
    }

    /// Called after a stream stopped. The return value is reported as the
    /// result of the stop.
    fn on_stop_stream(&self, _stream: &Stream) -> bool {
        true
    }
}

/// Hooks that accept everything
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultHooks;

impl StreamHooks for DefaultHooks {}

/// Most streams a component can hold; wire ids and counts are one byte
pub const MAX_STREAMS: usize = u8::MAX as usize;

/// A camera-like component
pub struct MediaComponent {
    id: u8,
    streams: Vec<Stream>,
    caps: MediaCapsInfo,
    scheduler: Arc<dyn Scheduler>,
    hooks: Box<dyn StreamHooks>,
    route: Weak<RouteSystem>,
}

impl MediaComponent {
    /// Create a component with default hooks
    pub fn new(caps: MediaCapsInfo, scheduler: Arc<dyn Scheduler>) -> Self {
        Self::with_hooks(caps, scheduler, Box::new(DefaultHooks))
    }

    /// Create a component with custom start/stop hooks
    pub fn with_hooks(
        caps: MediaCapsInfo,
        scheduler: Arc<dyn Scheduler>,
        hooks: Box<dyn StreamHooks>,
    ) -> Self {
        Self {
            id: 0,
            streams: Vec::new(),
            caps,
            scheduler,
            hooks,
            route: Weak::new(),
        }
    }

    pub fn caps_info(&self) -> &MediaCapsInfo {
        &self.caps
    }

    pub fn set_caps_info(&mut self, caps: MediaCapsInfo) {
        self.caps = caps;
    }

    /// Routing context this component is attached to, if still alive
    pub fn route(&self) -> Option<Arc<RouteSystem>> {
        self.route.upgrade()
    }

    pub(crate) fn attach(&mut self, id: u8, route: &Arc<RouteSystem>) {
        self.id = id;
        self.route = Arc::downgrade(route);
    }

    pub fn stream_count(&self) -> usize {
        self.streams.len()
    }

    /// Iterate streams in index order
    pub fn streams(&self) -> impl Iterator<Item = &Stream> {
        self.streams.iter()
    }

    /// Look up a stream by 0-based index
    pub fn stream(&self, index: usize) -> Option<&Stream> {
        let stream = self.streams.get(index);
        if stream.is_none() {
            tracing::warn!(component = self.id, index, "No stream with index");
        }
        stream
    }

    /// Create a stream and append it.
    ///
    /// Returns the new stream's index, or `None` if the stream could not be
    /// created or the component already holds [`MAX_STREAMS`] streams.
    pub fn register_stream(&mut self, info: StreamInfo, worker: Option<Worker>) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        let stream = Stream::create(info, worker, Arc::clone(&self.scheduler))?;
        self.adopt_stream(stream)
    }

    /// Append an existing stream and return its index.
    ///
    /// `None` once the component holds [`MAX_STREAMS`] streams; the stream is
    /// dropped in that case.
    pub fn adopt_stream(&mut self, stream: Stream) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        let index = self.streams.len();
        self.streams.push(stream);
        Some(index)
    }

    fn is_full(&self) -> bool {
        if self.streams.len() >= MAX_STREAMS {
            tracing::warn!(component = self.id, max = MAX_STREAMS, "Stream limit reached");
            return true;
        }
        false
    }

    /// Start the stream at `index` if the start hook allows it
    pub fn start_stream(&mut self, index: usize) -> bool {
        if self.stream(index).is_none() {
            return false;
        }
        let stream = &mut self.streams[index];

        if !self.hooks.on_start_stream(stream) {
            tracing::debug!(component = self.id, stream = index + 1, "Stream start vetoed");
            return false;
        }

        let started = stream.start();
        if started {
            tracing::info!(component = self.id, stream = index + 1, "Video stream has started");
        }
        started
    }

    /// Stop the stream at `index`.
    ///
    /// The stream always stops; the stop hook decides what gets reported.
    pub fn stop_stream(&mut self, index: usize) -> bool {
        if self.stream(index).is_none() {
            return false;
        }
        let stream = &mut self.streams[index];

        stream.stop();
        let stopped = self.hooks.on_stop_stream(stream);
        if stopped {
            tracing::info!(component = self.id, stream = index + 1, "Video stream has stopped");
        }
        stopped
    }

    /// Start every stream, returning true only if all of them started.
    ///
    /// Each stream is attempted even after an earlier one failed.
    pub fn start_all(&mut self) -> bool {
        let mut result = true;
        for index in 0..self.streams.len() {
            result &= self.start_stream(index);
        }
        result
    }

    /// Stop every stream, returning true only if all stops were reported
    pub fn stop_all(&mut self) -> bool {
        let mut result = true;
        for index in 0..self.streams.len() {
            result &= self.stop_stream(index);
        }
        result
    }
}

impl Component for MediaComponent {
    fn id(&self) -> u8 {
        self.id
    }

    fn set_id(&mut self, id: u8) {
        self.id = id;
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Media
    }

    fn as_media(&self) -> Option<&MediaComponent> {
        Some(self)
    }

    fn as_media_mut(&mut self) -> Option<&mut MediaComponent> {
        Some(self)
    }
}

impl std::fmt::Debug for MediaComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaComponent")
            .field("id", &self.id)
            .field("streams", &self.streams)
            .field("caps", &self.caps)
            .finish()
    }
}
