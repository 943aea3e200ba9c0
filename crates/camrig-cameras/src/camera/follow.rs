//! Target following shared by every rig
//!
//! A [`TargetFollower`] owns the target assignment and decides when a follow
//! step runs. What the step does is up to its [`CameraBehavior`].

use camrig_core::{EntityId, FrameClock, Transform};
use tracing::{debug, trace, warn};

use super::config::{FollowConfig, UpdatePhase};
use crate::scene::Scene;

/// One camera style's follow step
pub trait CameraBehavior {
    /// Per-rig state mutated by the follow step
    type State;

    /// Move the rig toward `target` for one step of `dt` seconds
    fn follow_target(&self, state: &mut Self::State, target: &Transform, dt: f32, clock: &FrameClock);

    /// Called whenever the target changes, including to `None`
    fn target_changed(&self, _state: &mut Self::State, _scene: &dyn Scene, _target: Option<EntityId>) {}
}

/// Target assignment plus phase dispatch around a behavior
#[derive(Debug, Clone)]
pub struct TargetFollower<B> {
    /// Follow settings
    pub config: FollowConfig,
    /// Behavior run on each follow step
    pub behavior: B,
    target: Option<EntityId>,
    target_lost: bool,
}

impl<B: CameraBehavior> TargetFollower<B> {
    /// Create a follower with no target
    pub fn new(config: FollowConfig, behavior: B) -> Self {
        Self {
            config,
            behavior,
            target: None,
            target_lost: false,
        }
    }

    /// The current target, if any
    pub fn target(&self) -> Option<EntityId> {
        self.target
    }

    /// True once the assigned target has stopped resolving in the scene
    pub fn target_lost(&self) -> bool {
        self.target_lost
    }

    /// Assign a new target (or clear it) and let the behavior react
    pub fn set_target(&mut self, state: &mut B::State, scene: &dyn Scene, target: Option<EntityId>) {
        debug!("Camera target changed: {:?} -> {:?}", self.target, target);
        self.target = target;
        self.target_lost = false;
        self.behavior.target_changed(state, scene, target);
    }

    /// Fixed update phase; steps by the clock's fixed timestep
    pub fn fixed_update(&mut self, state: &mut B::State, scene: &dyn Scene, clock: &FrameClock) -> bool {
        self.step(UpdatePhase::Fixed, state, scene, clock, clock.config.fixed_timestep)
    }

    /// Late update phase; steps by the frame's scaled delta
    pub fn late_update(&mut self, state: &mut B::State, scene: &dyn Scene, clock: &FrameClock) -> bool {
        self.step(UpdatePhase::Late, state, scene, clock, clock.delta_time)
    }

    /// Manual update; steps by the frame's scaled delta
    pub fn manual_update(&mut self, state: &mut B::State, scene: &dyn Scene, clock: &FrameClock) -> bool {
        self.step(UpdatePhase::Manual, state, scene, clock, clock.delta_time)
    }

    /// Run the follow step if `phase` is ours and the target resolves.
    /// Returns whether the behavior ran.
    fn step(
        &mut self,
        phase: UpdatePhase,
        state: &mut B::State,
        scene: &dyn Scene,
        clock: &FrameClock,
        dt: f32,
    ) -> bool {
        let resolved = self.target.and_then(|id| scene.transform(id));
        if self.config.auto_target_player && resolved.is_none() {
            self.find_and_target_player(state, scene);
        }

        if phase != self.config.update_phase {
            return false;
        }

        let Some(id) = self.target else {
            trace!("No camera target, skipping follow");
            return false;
        };
        let Some(target) = scene.transform(id) else {
            if !self.target_lost {
                warn!("Camera target {:?} is no longer in the scene", id);
                self.target_lost = true;
            }
            return false;
        };

        self.target_lost = false;
        self.behavior.follow_target(state, &target, dt, clock);
        true
    }

    fn find_and_target_player(&mut self, state: &mut B::State, scene: &dyn Scene) {
        let Some(player) = scene.find_player() else {
            return;
        };
        if Some(player) == self.target || scene.transform(player).is_none() {
            return;
        }
        debug!("Auto-targeting player {:?}", player);
        self.set_target(state, scene, Some(player));
    }
}
