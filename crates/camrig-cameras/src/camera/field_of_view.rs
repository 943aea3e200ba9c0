//! Field-of-view fitter
//!
//! Zooms the camera so the target keeps roughly the same on-screen size as
//! it moves away, in the manner of a CCTV camera tracking a subject. The rig
//! turns toward the target through a look-at base first.

use camrig_core::{smooth_damp, Aabb, EntityId, FrameClock, Transform};
use tracing::debug;

use super::config::{FieldOfViewConfig, LookAtConfig};
use super::follow::CameraBehavior;
use super::look_at::{LookAtCam, LookAtState};
use crate::scene::{Renderer, Scene};

/// Largest half-extent of the union of `renderers`' bounds.
///
/// Trail and particle renderers are skipped unless `include_effects` is set.
/// Returns 0.0 when nothing qualifies.
pub fn max_bounds_extent(renderers: &[Renderer], include_effects: bool) -> f32 {
    let bounds = renderers
        .iter()
        .filter(|r| include_effects || !r.kind.is_effect())
        .map(|r| r.bounds)
        .reduce(|merged, next| merged.union(&next));

    bounds.map_or(0.0, |b: Aabb| b.extents().max_element())
}

/// Field of view, in degrees, that fits `bound_size` at `distance`
pub fn required_field_of_view(bound_size: f32, distance: f32, multiplier: f32) -> f32 {
    bound_size.atan2(distance).to_degrees() * multiplier
}

/// Mutable state of a field-of-view rig
#[derive(Debug, Clone)]
pub struct FieldOfViewState {
    /// Look-at base; its rig transform is where the distance is measured from
    pub look: LookAtState,
    /// Cached target size, refreshed when the target changes
    pub bound_size: f32,
    /// Current field of view in degrees
    pub fov: f32,
    /// Velocity of the FOV smoothing filter
    pub fov_velocity: f32,
}

impl FieldOfViewState {
    pub fn new(rig: Transform, initial_fov: f32) -> Self {
        Self {
            look: LookAtState::new(rig),
            bound_size: 0.0,
            fov: initial_fov.max(0.0),
            fov_velocity: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TargetFieldOfView {
    pub config: FieldOfViewConfig,
    look_at: LookAtCam,
}

impl TargetFieldOfView {
    pub fn new(config: FieldOfViewConfig, look_at: LookAtConfig) -> Self {
        Self {
            config,
            look_at: LookAtCam::new(look_at),
        }
    }
}

impl CameraBehavior for TargetFieldOfView {
    type State = FieldOfViewState;

    fn follow_target(&self, state: &mut FieldOfViewState, target: &Transform, dt: f32, clock: &FrameClock) {
        self.look_at.follow_target(&mut state.look, target, dt, clock);

        let distance = state.look.rig.distance(target);
        let required = required_field_of_view(state.bound_size, distance, self.config.zoom_amount_multiplier);

        state.fov = smooth_damp(
            state.fov,
            required,
            &mut state.fov_velocity,
            self.config.fov_adjust_time,
            dt,
        )
        .max(0.0);
    }

    fn target_changed(&self, state: &mut FieldOfViewState, scene: &dyn Scene, target: Option<EntityId>) {
        state.bound_size = target.map_or(0.0, |id| {
            max_bounds_extent(&scene.renderers(id), self.config.include_effects_in_size)
        });
        debug!("Field-of-view target size: {:.3}", state.bound_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::RendererKind;
    use crate::test_support::MockScene;
    use glam::Vec3;

    fn mesh(center: Vec3, extents: Vec3) -> Renderer {
        Renderer::new(RendererKind::Mesh, Aabb::from_center_extents(center, extents))
    }

    #[test]
    fn test_bounds_union_of_meshes() {
        let renderers = [
            mesh(Vec3::ZERO, Vec3::new(1.0, 0.5, 0.5)),
            mesh(Vec3::new(0.0, 3.0, 0.0), Vec3::splat(0.5)),
        ];
        // y spans -0.5..3.5
        assert_eq!(max_bounds_extent(&renderers, false), 2.0);
    }

    #[test]
    fn test_effects_excluded_from_bounds() {
        let trail = Renderer::new(
            RendererKind::Trail,
            Aabb::from_center_extents(Vec3::ZERO, Vec3::splat(50.0)),
        );
        assert_eq!(max_bounds_extent(&[trail], false), 0.0);

        let particles = Renderer::new(
            RendererKind::Particles,
            Aabb::from_center_extents(Vec3::ZERO, Vec3::splat(20.0)),
        );
        let renderers = [trail, mesh(Vec3::ZERO, Vec3::ONE), particles];
        assert_eq!(max_bounds_extent(&renderers, false), 1.0);
        assert_eq!(max_bounds_extent(&renderers, true), 50.0);
    }

    #[test]
    fn test_required_fov_shrinks_with_distance() {
        let mut last = f32::MAX;
        for step in 1..40 {
            let fov = required_field_of_view(1.5, step as f32 * 2.5, 2.0);
            assert!(fov < last);
            assert!(fov >= 0.0);
            last = fov;
        }
    }

    #[test]
    fn test_bound_size_cached_on_target_change() {
        let mut scene = MockScene::default();
        let target = scene.add_with_renderers(
            Transform::from_position(Vec3::new(0.0, 0.0, -10.0)),
            vec![mesh(Vec3::ZERO, Vec3::new(0.5, 2.0, 0.5))],
        );
        let fitter = TargetFieldOfView::default();
        let mut state = FieldOfViewState::new(Transform::default(), 60.0);

        fitter.target_changed(&mut state, &scene, Some(target));
        assert_eq!(state.bound_size, 2.0);

        fitter.target_changed(&mut state, &scene, None);
        assert_eq!(state.bound_size, 0.0);
    }

    #[test]
    fn test_fov_eases_toward_required() {
        let fitter = TargetFieldOfView::default();
        let mut state = FieldOfViewState::new(Transform::default(), 60.0);
        state.bound_size = 1.0;
        let target = Transform::from_position(Vec3::new(0.0, 0.0, -10.0));
        let required = required_field_of_view(1.0, 10.0, 2.0);
        let mut clock = FrameClock::default();
        clock.update(1.0 / 60.0);

        fitter.follow_target(&mut state, &target, clock.delta_time, &clock);
        assert!(state.fov < 60.0 && state.fov > required);

        for _ in 0..1200 {
            fitter.follow_target(&mut state, &target, clock.delta_time, &clock);
            assert!(state.fov >= 0.0);
        }
        assert!((state.fov - required).abs() < 1e-3);
    }

    #[test]
    fn test_fitter_turns_toward_target() {
        let fitter = TargetFieldOfView::default();
        let mut state = FieldOfViewState::new(Transform::default(), 60.0);
        state.bound_size = 1.0;
        let target = Transform::from_position(Vec3::new(3.0, 0.0, -10.0));

        let mut clock = FrameClock::default();
        clock.update(1.0 / 60.0);
        for _ in 0..600 {
            fitter.follow_target(&mut state, &target, clock.delta_time, &clock);
        }

        assert!((state.look.rig.forward() - target.position.normalize()).length() < 1e-2);
        assert_eq!(state.look.rig.position, Vec3::ZERO);
    }

    #[test]
    fn test_fov_holds_when_paused() {
        let fitter = TargetFieldOfView::default();
        let mut state = FieldOfViewState::new(Transform::default(), 45.0);
        state.bound_size = 3.0;
        let target = Transform::from_position(Vec3::new(0.0, 0.0, -4.0));

        fitter.follow_target(&mut state, &target, 0.0, &FrameClock::default());
        assert_eq!(state.fov, 45.0);
        assert_eq!(state.fov_velocity, 0.0);
    }
}
