//! Collaborators supplied by the host engine
//!
//! The rigs never own a scene graph, cursor or collision system. They reach
//! them through these traits, which the host implements over its own world.

use camrig_core::{Aabb, EntityId, Transform};
use serde::{Deserialize, Serialize};

/// Kind of renderable attached to a scene object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RendererKind {
    Mesh,
    SkinnedMesh,
    Sprite,
    Line,
    /// Motion trail; its bounds cover the whole trail history
    Trail,
    /// Particle system; its bounds cover every live particle
    Particles,
}

impl RendererKind {
    /// Trails and particles, whose bounds say little about the object itself
    pub fn is_effect(&self) -> bool {
        matches!(self, RendererKind::Trail | RendererKind::Particles)
    }
}

/// One renderable under a scene object, with its world-space bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Renderer {
    pub kind: RendererKind,
    pub bounds: Aabb,
}

impl Renderer {
    pub fn new(kind: RendererKind, bounds: Aabb) -> Self {
        Self { kind, bounds }
    }
}

/// Read access to the host's scene graph
pub trait Scene {
    /// World transform of an object, or `None` if it is missing or inactive
    fn transform(&self, id: EntityId) -> Option<Transform>;

    /// Every renderer on the object and its children
    fn renderers(&self, id: EntityId) -> Vec<Renderer>;

    /// The object tagged as the player, if any
    fn find_player(&self) -> Option<EntityId> {
        None
    }
}

/// Cursor visibility and lock control
pub trait CursorControl {
    /// Lock and hide the cursor, or release and show it
    fn set_cursor_lock(&mut self, locked: bool);
}

/// A collaborator that takes over the displayed zoom distance, such as a
/// wall-clip protector that pulls the camera in front of obstacles.
pub trait DistanceOverride {
    /// Distance the camera would like to sit at behind the pivot
    fn set_look_distance(&mut self, distance: f32);
}

/// Cursor control that does nothing, for hosts without a cursor
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCursor;

impl CursorControl for NoCursor {
    fn set_cursor_lock(&mut self, _locked: bool) {}
}
