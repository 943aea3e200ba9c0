//! Registry of cameras and the one currently active
//!
//! Systems that need "the" camera are handed a registry and look the active
//! id up here instead of reaching for a global.

use camrig_core::EntityId;
use tracing::debug;

use crate::error::RigError;

#[derive(Debug, Clone, Default)]
pub struct CameraRegistry {
    cameras: Vec<EntityId>,
    active: Option<EntityId>,
}

impl CameraRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a camera. Returns false if it was already registered.
    pub fn register(&mut self, id: EntityId) -> bool {
        if self.cameras.contains(&id) {
            return false;
        }
        self.cameras.push(id);
        true
    }

    /// Remove a camera, clearing the active slot if it held it
    pub fn unregister(&mut self, id: EntityId) {
        self.cameras.retain(|camera| *camera != id);
        if self.active == Some(id) {
            debug!("Active camera {:?} unregistered", id);
            self.active = None;
        }
    }

    /// Make a registered camera the active one
    pub fn set_active(&mut self, id: EntityId) -> Result<(), RigError> {
        if !self.cameras.contains(&id) {
            return Err(RigError::UnknownCamera(id));
        }
        self.active = Some(id);
        Ok(())
    }

    /// Register (if needed) and activate in one step
    pub fn activate(&mut self, id: EntityId) {
        self.register(id);
        self.active = Some(id);
    }

    pub fn active(&self) -> Option<EntityId> {
        self.active
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.cameras.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.cameras.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_activate() {
        let mut registry = CameraRegistry::new();
        let a = EntityId::new();
        let b = EntityId::new();

        assert!(registry.register(a));
        assert!(!registry.register(a));
        assert_eq!(registry.set_active(b), Err(RigError::UnknownCamera(b)));
        assert_eq!(registry.active(), None);

        registry.activate(b);
        assert_eq!(registry.active(), Some(b));
        assert_eq!(registry.len(), 2);

        registry.set_active(a).unwrap();
        assert_eq!(registry.active(), Some(a));
    }

    #[test]
    fn test_unregister_active_clears_slot() {
        let mut registry = CameraRegistry::new();
        let a = EntityId::new();
        registry.activate(a);
        registry.unregister(a);
        assert_eq!(registry.active(), None);
        assert!(registry.is_empty());
    }
}
