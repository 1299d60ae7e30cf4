//! Video server
//!
//! Owns the camera slots of a router: up to six media components, each
//! registered on the component bus under the lowest free camera id. Streams
//! are not started by the server itself; they start when a peer sends
//! `MAV_CMD_VIDEO_START_STREAMING`.

use std::sync::Arc;

use crate::error::{Result, ServerError};
use crate::media::MediaComponent;
use crate::protocol::constants::is_camera_component;
use crate::router::RouteSystem;

use super::config::VideoServerConfig;
use super::handler::{CameraCommandHandler, PROTOCOL_TABLE};

/// Camera protocol server
pub struct VideoServer {
    config: VideoServerConfig,
    route: Option<Arc<RouteSystem>>,
    handler: Arc<CameraCommandHandler>,
    in_use: usize,
}

impl VideoServer {
    /// Create an uninitialised server
    pub fn new(config: VideoServerConfig) -> Self {
        let handler = Arc::new(CameraCommandHandler::new(config.settle_interval));
        Self {
            config,
            route: None,
            handler,
            in_use: 0,
        }
    }

    pub fn config(&self) -> &VideoServerConfig {
        &self.config
    }

    /// Routing context, once initialised
    pub fn route(&self) -> Option<&Arc<RouteSystem>> {
        self.route.as_ref()
    }

    /// Command handler registered with the router
    pub fn handler(&self) -> &Arc<CameraCommandHandler> {
        &self.handler
    }

    /// Number of occupied camera slots
    pub fn in_use(&self) -> usize {
        self.in_use
    }

    /// Attach to a routing context and register the camera protocol.
    ///
    /// A server is attached once; later calls fail and leave the current
    /// routing context in place.
    pub fn init(&mut self, route: impl Into<Option<Arc<RouteSystem>>>) -> Result<()> {
        if self.route.is_some() {
            tracing::warn!("Video server already initialized");
            return Err(ServerError::AlreadyInitialized.into());
        }
        let route = route.into().ok_or(ServerError::NotInitialized)?;

        route.add_protocol(&PROTOCOL_TABLE, self.handler.clone());
        tracing::debug!(system = route.system_id(), "Video protocol registered");

        self.route = Some(route);
        Ok(())
    }

    /// Check the server is ready to serve.
    ///
    /// Fails without a routing context or without any media component.
    pub fn start(&self) -> Result<()> {
        if self.route.is_none() {
            tracing::error!("Unable to start video server: not initialized");
            return Err(ServerError::NotInitialized.into());
        }
        if self.in_use == 0 {
            tracing::error!("Unable to start video server: no cameras added");
            return Err(ServerError::NoComponents.into());
        }
        Ok(())
    }

    /// Stop every stream of every camera component
    pub fn stop(&self) {
        let Some(route) = &self.route else {
            return;
        };

        let mut bus = route.bus_mut();
        for id in self.config.camera_ids() {
            if let Some(mc) = bus.media_mut(id) {
                mc.stop_all();
            }
        }
    }

    /// Register a media component under the lowest free camera id.
    ///
    /// Returns the assigned id.
    pub fn add_media_component(&mut self, mut component: MediaComponent) -> Result<u8> {
        let route = self.route.as_ref().ok_or(ServerError::NotInitialized)?;
        let mut bus = route.bus_mut();

        let id = self
            .config
            .camera_ids()
            .find(|id| !bus.has_component(*id))
            .ok_or(ServerError::NoFreeSlot)?;

        component.attach(id, route);
        bus.add_component(Box::new(component))?;
        self.in_use += 1;

        tracing::info!(component = id, in_use = self.in_use, "Media component added");
        Ok(id)
    }

    /// Unregister the camera component with this id.
    ///
    /// The component and its streams are dropped, which cancels their tasks.
    pub fn remove_media_component(&mut self, id: u8) -> Result<()> {
        if !is_camera_component(id) {
            return Err(ServerError::OutOfRange(id).into());
        }
        let route = self.route.as_ref().ok_or(ServerError::NotInitialized)?;

        let removed = route.bus_mut().remove_component(id)?;
        self.in_use = self.in_use.saturating_sub(1);
        drop(removed);

        tracing::info!(component = id, in_use = self.in_use, "Media component removed");
        Ok(())
    }

    /// Whether a media component occupies this camera id
    pub fn has_media_component(&self, id: u8) -> bool {
        self.with_media_component(id, |_| ()).is_some()
    }

    /// Run `f` on the media component with this id.
    ///
    /// `None` if the id is outside the camera range, the server is not
    /// initialised, or no media component is registered there.
    pub fn with_media_component<R>(&self, id: u8, f: impl FnOnce(&MediaComponent) -> R) -> Option<R> {
        if !is_camera_component(id) {
            return None;
        }
        let route = self.route.as_ref()?;
        let bus = route.bus();
        bus.media(id).map(f)
    }

    /// Mutable variant of [`VideoServer::with_media_component`]
    pub fn with_media_component_mut<R>(
        &self,
        id: u8,
        f: impl FnOnce(&mut MediaComponent) -> R,
    ) -> Option<R> {
        if !is_camera_component(id) {
            return None;
        }
        let route = self.route.as_ref()?;
        let mut bus = route.bus_mut();
        bus.media_mut(id).map(f)
    }
}

impl Drop for VideoServer {
    fn drop(&mut self) {
        self.stop();

        let Some(route) = self.route.take() else {
            return;
        };

        let removed: Vec<_> = {
            let mut bus = route.bus_mut();
            self.config
                .camera_ids()
                .filter_map(|id| bus.remove_component(id).ok())
                .collect()
        };
        self.in_use = 0;
        drop(removed);

        route.remove_protocol(&PROTOCOL_TABLE);
        tracing::debug!(system = route.system_id(), "Video server torn down");
    }
}

impl std::fmt::Debug for VideoServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoServer")
            .field("config", &self.config)
            .field("initialized", &self.route.is_some())
            .field("in_use", &self.in_use)
            .finish()
    }
}
