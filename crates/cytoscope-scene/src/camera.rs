//! Orbit camera controls
//!
//! Left-drag orbits around the focus point, right-drag pans it, the wheel
//! or a two finger pinch zooms. Distance and focus approach their targets
//! with exponential smoothing so stepped wheel input still feels fluid.

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

/// Marker for the one scene camera.
#[derive(Component)]
pub struct MainCamera;

#[derive(Resource, Debug, Clone)]
pub struct CameraSettings {
    pub distance: f32,
    pub target_distance: f32,
    pub azimuth: f32,
    pub elevation: f32,
    pub target: Vec3,
    pub target_focus: Vec3,
    pub sensitivity: f32,
    pub zoom_speed: f32,
    pub smooth_factor: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            distance: 8.5,
            target_distance: 8.5,
            azimuth: 0.0,
            elevation: 0.36,
            target: Vec3::ZERO,
            target_focus: Vec3::ZERO,
            sensitivity: 0.005,
            zoom_speed: 0.1,
            smooth_factor: 0.15,
        }
    }
}

const MIN_DISTANCE: f32 = 2.0;
const MAX_DISTANCE: f32 = 40.0;
const MAX_ELEVATION: f32 = 1.5;

/// Camera offset from the focus point for the given spherical coordinates.
/// Y is up; azimuth 0 looks down the -Z axis from +Z.
pub fn orbit_position(azimuth: f32, elevation: f32, distance: f32) -> Vec3 {
    Vec3::new(
        distance * elevation.cos() * azimuth.sin(),
        distance * elevation.sin(),
        distance * elevation.cos() * azimuth.cos(),
    )
}

/// Frame-rate independent smoothing step for the given per-frame factor.
pub fn approach_factor(smooth: f32, dt: f32) -> f32 {
    1.0 - (-smooth * 60.0 * dt).exp()
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSettings>()
            .add_systems(Update, update_camera);
    }
}

#[allow(clippy::too_many_arguments)]
fn update_camera(
    mut settings: ResMut<CameraSettings>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut mouse_wheel: MessageReader<MouseWheel>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    time: Res<Time>,
    mut contexts: EguiContexts,
) {
    let egui_wants_pointer = contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_pointer_input())
        .unwrap_or(false);

    if egui_wants_pointer {
        // Drain the readers so stale input does not replay later.
        mouse_motion.clear();
        mouse_wheel.clear();
    } else {
        let mut delta = Vec2::ZERO;
        for motion in mouse_motion.read() {
            delta += motion.delta;
        }

        if mouse_buttons.pressed(MouseButton::Left) {
            settings.azimuth -= delta.x * settings.sensitivity;
            settings.elevation = (settings.elevation + delta.y * settings.sensitivity)
                .clamp(-MAX_ELEVATION, MAX_ELEVATION);
        } else if mouse_buttons.pressed(MouseButton::Right) {
            let pan_speed = settings.distance * 0.002;
            let right = Vec3::new(settings.azimuth.cos(), 0.0, -settings.azimuth.sin());
            let pan = right * -delta.x * pan_speed + Vec3::Y * delta.y * pan_speed;
            settings.target_focus += pan;
        }

        for wheel in mouse_wheel.read() {
            let factor = 1.0 - wheel.y * settings.zoom_speed * 0.3;
            settings.target_distance =
                (settings.target_distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
        }

        // Single finger orbits, two fingers pinch to zoom.
        let active: Vec<_> = touches.iter().collect();
        if active.len() == 1 {
            let delta = active[0].delta();
            settings.azimuth -= delta.x * settings.sensitivity;
            settings.elevation = (settings.elevation + delta.y * settings.sensitivity)
                .clamp(-MAX_ELEVATION, MAX_ELEVATION);
        } else if active.len() == 2 {
            let spread = active[0].position().distance(active[1].position());
            let previous = active[0]
                .previous_position()
                .distance(active[1].previous_position());
            if previous > f32::EPSILON {
                let factor = previous / spread.max(f32::EPSILON);
                settings.target_distance =
                    (settings.target_distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
            }
        }
    }

    let blend = approach_factor(settings.smooth_factor, time.delta_secs());
    settings.distance += (settings.target_distance - settings.distance) * blend;
    let focus_step = (settings.target_focus - settings.target) * blend;
    settings.target += focus_step;

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    transform.translation =
        settings.target + orbit_position(settings.azimuth, settings.elevation, settings.distance);
    transform.look_at(settings.target, Vec3::Y);
}
