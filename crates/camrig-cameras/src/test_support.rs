//! In-memory collaborators for unit tests

use std::collections::HashMap;

use camrig_core::{EntityId, Transform};

use crate::scene::{CursorControl, DistanceOverride, Renderer, Scene};

#[derive(Debug, Default)]
pub struct MockScene {
    pub objects: HashMap<EntityId, (Option<Transform>, Vec<Renderer>)>,
    pub player: Option<EntityId>,
}

impl MockScene {
    pub fn add(&mut self, transform: Transform) -> EntityId {
        self.add_with_renderers(transform, Vec::new())
    }

    pub fn add_with_renderers(&mut self, transform: Transform, renderers: Vec<Renderer>) -> EntityId {
        let id = EntityId::new();
        self.objects.insert(id, (Some(transform), renderers));
        id
    }

    pub fn move_to(&mut self, id: EntityId, transform: Transform) {
        if let Some(entry) = self.objects.get_mut(&id) {
            entry.0 = Some(transform);
        }
    }

    pub fn deactivate(&mut self, id: EntityId) {
        if let Some(entry) = self.objects.get_mut(&id) {
            entry.0 = None;
        }
    }
}

impl Scene for MockScene {
    fn transform(&self, id: EntityId) -> Option<Transform> {
        self.objects.get(&id).and_then(|(transform, _)| *transform)
    }

    fn renderers(&self, id: EntityId) -> Vec<Renderer> {
        self.objects
            .get(&id)
            .map(|(_, renderers)| renderers.clone())
            .unwrap_or_default()
    }

    fn find_player(&self) -> Option<EntityId> {
        self.player
    }
}

#[derive(Debug, Default)]
pub struct RecordingCursor {
    pub calls: Vec<bool>,
}

impl CursorControl for RecordingCursor {
    fn set_cursor_lock(&mut self, locked: bool) {
        self.calls.push(locked);
    }
}

#[derive(Debug, Default)]
pub struct RecordingOverride {
    pub look_distance: Option<f32>,
}

impl DistanceOverride for RecordingOverride {
    fn set_look_distance(&mut self, distance: f32) {
        self.look_distance = Some(distance);
    }
}
