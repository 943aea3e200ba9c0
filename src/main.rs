//! camrig - headless camera rig simulator
//!
//! Drives a configured rig against a target circling the origin and logs the
//! resulting camera pose. Run with `init` to write the default settings file.

mod settings;

use anyhow::{Context, Result};
use camrig_cameras::{
    CameraRegistry, CameraRig, CursorControl, LookInput, Renderer, RendererKind, Scene,
};
use camrig_core::{Aabb, EntityId, FrameClock, Transform};
use glam::Vec3;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use settings::{RigSettings, SimulationSettings};

/// One scripted player object with a body and a motion trail
struct CircleScene {
    player: EntityId,
    position: Vec3,
}

impl CircleScene {
    fn new() -> Self {
        Self {
            player: EntityId::new(),
            position: Vec3::ZERO,
        }
    }

    fn advance(&mut self, sim: &SimulationSettings, time: f32) {
        let angle = time * sim.target_speed;
        self.position = Vec3::new(
            angle.cos() * sim.target_radius,
            0.0,
            angle.sin() * sim.target_radius - 20.0,
        );
    }
}

impl Scene for CircleScene {
    fn transform(&self, id: EntityId) -> Option<Transform> {
        (id == self.player).then(|| Transform::from_position(self.position))
    }

    fn renderers(&self, id: EntityId) -> Vec<Renderer> {
        if id != self.player {
            return Vec::new();
        }
        vec![
            Renderer::new(
                RendererKind::SkinnedMesh,
                Aabb::from_center_extents(self.position, Vec3::new(0.5, 1.0, 0.5)),
            ),
            Renderer::new(
                RendererKind::Trail,
                Aabb::from_center_extents(self.position, Vec3::splat(6.0)),
            ),
        ]
    }

    fn find_player(&self) -> Option<EntityId> {
        Some(self.player)
    }
}

/// Cursor that only reports lock changes
struct LoggedCursor;

impl CursorControl for LoggedCursor {
    fn set_cursor_lock(&mut self, locked: bool) {
        info!("Cursor {}", if locked { "locked" } else { "released" });
    }
}

/// Gentle scripted look input: a slow pan with a short zoom-out burst
fn scripted_input(frame: u32) -> LookInput {
    let zoom = if (60..90).contains(&frame) { -0.1 } else { 0.0 };
    LookInput::new(0.2, (frame as f32 * 0.05).sin() * 0.1, zoom)
}

fn run(settings: &RigSettings) -> Result<()> {
    let sim = &settings.simulation;
    settings.time.validate().context("Invalid time settings")?;
    let mut clock = FrameClock::new(settings.time.clone());
    let mut scene = CircleScene::new();
    let mut cursor = LoggedCursor;

    let mut registry = CameraRegistry::new();
    let camera_id = EntityId::new();
    registry.activate(camera_id);

    let start = Transform::from_position(Vec3::new(0.0, 2.0, 0.0));
    let mut rig = CameraRig::from_config(&settings.rig, start).context("Invalid rig settings")?;
    rig.set_target(&scene, scene.find_player());

    for frame in 0..sim.frames {
        clock.update(sim.frame_time());
        scene.advance(sim, clock.time());

        rig.update(&scripted_input(frame), &clock, &mut cursor, None);
        for _ in 0..clock.fixed_steps() {
            rig.fixed_update(&scene, &clock);
        }
        rig.late_update(&scene, &clock, None);

        if sim.log_every > 0 && frame % sim.log_every == 0 {
            let pose = rig.pose();
            info!(
                "frame {:>4}: position {:?} forward {:?} fov {:?}",
                frame,
                pose.transform.position,
                pose.transform.forward(),
                pose.field_of_view
            );
        }
    }

    rig.disable(&mut cursor);
    debug!("Active camera at exit: {:?}", registry.active());
    Ok(())
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")?;

    if std::env::args().nth(1).as_deref() == Some("init") {
        return RigSettings::default().save();
    }

    let settings = RigSettings::load();
    info!(
        "Simulating {} frames of a {:?} rig",
        settings.simulation.frames, settings.rig.style
    );
    run(&settings)
}
