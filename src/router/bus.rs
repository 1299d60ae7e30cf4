//! Component bus
//!
//! Registry of the local components reachable through the router, keyed by
//! component id. The bus owns the components; everything else refers to
//! them by id.

use std::collections::BTreeMap;

use crate::error::BusError;
use crate::media::MediaComponent;

/// Capability tag of a registered component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    /// Camera-like component with media streams
    Media,
    /// Anything else
    Generic,
}

/// A component that can live on the bus
pub trait Component: Send + Sync {
    fn id(&self) -> u8;

    fn set_id(&mut self, id: u8);

    fn kind(&self) -> ComponentKind {
        ComponentKind::Generic
    }

    /// Typed view for media components
    fn as_media(&self) -> Option<&MediaComponent> {
        None
    }

    fn as_media_mut(&mut self) -> Option<&mut MediaComponent> {
        None
    }
}

/// Component registry
#[derive(Default)]
pub struct ComponentBus {
    components: BTreeMap<u8, Box<dyn Component>>,
}

impl ComponentBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_component(&self, id: u8) -> bool {
        self.components.contains_key(&id)
    }

    /// Register a component under its own id
    pub fn add_component(&mut self, component: Box<dyn Component>) -> Result<(), BusError> {
        let id = component.id();
        if self.components.contains_key(&id) {
            return Err(BusError::IdInUse(id));
        }

        tracing::debug!(component = id, kind = ?component.kind(), "Component added to bus");
        self.components.insert(id, component);
        Ok(())
    }

    /// Unregister a component and hand it back
    pub fn remove_component(&mut self, id: u8) -> Result<Box<dyn Component>, BusError> {
        let component = self.components.remove(&id).ok_or(BusError::NotFound(id))?;
        tracing::debug!(component = id, "Component removed from bus");
        Ok(component)
    }

    pub fn get_component(&self, id: u8) -> Option<&dyn Component> {
        self.components.get(&id).map(|c| c.as_ref())
    }

    /// Media component with this id; `None` if absent or of another kind
    pub fn media(&self, id: u8) -> Option<&MediaComponent> {
        self.components.get(&id).and_then(|c| c.as_media())
    }

    pub fn media_mut(&mut self, id: u8) -> Option<&mut MediaComponent> {
        self.components.get_mut(&id).and_then(|c| c.as_media_mut())
    }

    /// Registered ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = u8> + '_ {
        self.components.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
