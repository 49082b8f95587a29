//! Organelle entities: spawning, animation, and picking

use bevy::prelude::*;
use bevy_egui::EguiContexts;
use cytoscope_core::{Shape, LAYOUT_LIGHTNESS, LAYOUT_SATURATION};

use crate::camera::MainCamera;
use crate::loading::TextureLibrary;
use crate::types::{CellCatalog, LayerVisibility, SceneSettings, SelectedOrganelle};

/// A touch that wanders further than this is an orbit, not a pick.
const TAP_SLOP: f32 = 10.0;

/// One organelle in the scene, carrying the data picking needs.
#[derive(Component, Debug, Clone)]
pub struct OrganelleUnit {
    pub name: String,
    pub hit_radius: f32,
}

/// Constant yaw rotation, applied per frame while the layer is visible.
#[derive(Component, Debug, Clone)]
pub struct Spinning {
    pub step: f32,
}

impl Default for Spinning {
    fn default() -> Self {
        Self { step: 0.01 }
    }
}

/// Vertical bobbing around a fixed anchor height.
#[derive(Component, Debug, Clone)]
pub struct Floating {
    pub speed: f32,
    pub range: f32,
    pub anchor_y: f32,
}

impl Default for Floating {
    fn default() -> Self {
        Self {
            speed: 0.5,
            range: 0.2,
            anchor_y: 0.0,
        }
    }
}

impl Floating {
    /// Offset from the anchor at the given elapsed time.
    pub fn offset_at(&self, elapsed: f32) -> f32 {
        (elapsed * self.speed).sin() * self.range
    }
}

/// Pending tap state, used to tell taps apart from orbit drags.
#[derive(Resource, Default, Debug)]
pub struct TouchState {
    pub start_position: Option<Vec2>,
    pub is_dragging: bool,
}

/// Mesh geometry for the shared shape description.
pub fn mesh_for_shape(shape: &Shape) -> Mesh {
    match shape {
        Shape::Box { size } => Cuboid::new(size[0], size[1], size[2]).into(),
        Shape::Sphere { radius } => Sphere::new(*radius).into(),
        Shape::Cylinder { radius, length } => Cylinder::new(*radius, *length).into(),
    }
}

/// Geometry override per organelle; everything else renders as a small sphere.
pub fn shape_for(name: &str) -> Shape {
    match name {
        "GolgiApparatus" => Shape::Box {
            size: [1.0, 0.5, 1.5],
        },
        "RoughER" | "SmoothER" => Shape::Cylinder {
            radius: 0.3,
            length: 2.0,
        },
        _ => Shape::default(),
    }
}

/// Bobbing speed override per organelle.
pub fn float_speed_for(name: &str) -> f32 {
    match name {
        "Vacuole" => 0.3,
        "GolgiApparatus" => 0.4,
        _ => 0.5,
    }
}

/// Distance along the ray to the sphere at `center`, if the ray passes
/// within `radius` of it. Hits behind the origin do not count.
pub fn ray_hit_distance(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let to_center = center - origin;
    let t = to_center.dot(direction);
    if t < 0.0 {
        return None;
    }
    let closest = origin + direction * t;
    if closest.distance_squared(center) <= radius * radius {
        Some(t)
    } else {
        None
    }
}

pub struct OrganellesPlugin;

impl Plugin for OrganellesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TouchState>().add_systems(
            Update,
            (
                spawn_organelles,
                handle_organelle_interaction,
                handle_deselection,
                spin_organelles,
                float_organelles,
            ),
        );
    }
}

/// Spawn every cataloged organelle once the texture gate opens.
fn spawn_organelles(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cell: Res<CellCatalog>,
    library: Res<TextureLibrary>,
    layers: Res<LayerVisibility>,
    mut spawned: Local<bool>,
) {
    if *spawned || !library.ready() {
        return;
    }
    *spawned = true;

    for placed in &cell.placements {
        let shape = shape_for(&placed.name);
        let material = StandardMaterial {
            base_color: Color::hsl(placed.hue, LAYOUT_SATURATION, LAYOUT_LIGHTNESS),
            base_color_texture: library.surface_texture(&placed.name),
            metallic: 0.1,
            perceptual_roughness: 0.8,
            ..default()
        };

        commands.spawn((
            Mesh3d(meshes.add(mesh_for_shape(&shape))),
            MeshMaterial3d(materials.add(material)),
            Transform::from_translation(Vec3::from(placed.position)),
            layers.organelle_visibility(),
            OrganelleUnit {
                name: placed.name.clone(),
                hit_radius: shape.bounding_radius(),
            },
            Spinning::default(),
            Floating {
                speed: float_speed_for(&placed.name),
                anchor_y: placed.position[1],
                ..default()
            },
        ));
    }

    tracing::info!("Spawned {} organelles", cell.placements.len());
}

/// Pick the closest organelle under a click or a tap.
///
/// A miss leaves the current selection alone; only Escape clears it.
#[allow(clippy::too_many_arguments)]
fn handle_organelle_interaction(
    windows: Query<&Window>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    organelles: Query<(&OrganelleUnit, &GlobalTransform)>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    mut touch_state: ResMut<TouchState>,
    layers: Res<LayerVisibility>,
    mut selected: ResMut<SelectedOrganelle>,
    mut contexts: EguiContexts,
) {
    if !layers.organelles {
        return;
    }

    let egui_wants_pointer = contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_pointer_input())
        .unwrap_or(false);
    if egui_wants_pointer {
        return;
    }

    let mut pick_position = None;

    for touch in touches.iter_just_pressed() {
        touch_state.start_position = Some(touch.position());
        touch_state.is_dragging = false;
    }
    for touch in touches.iter() {
        if let Some(start) = touch_state.start_position {
            if touch.position().distance(start) > TAP_SLOP {
                touch_state.is_dragging = true;
            }
        }
    }
    for touch in touches.iter_just_released() {
        if !touch_state.is_dragging {
            pick_position = Some(touch.position());
        }
        touch_state.start_position = None;
    }

    if mouse_buttons.just_pressed(MouseButton::Left) {
        let Ok(window) = windows.single() else {
            return;
        };
        if let Some(cursor) = window.cursor_position() {
            pick_position = Some(cursor);
        }
    }

    let Some(position) = pick_position else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, position) else {
        return;
    };

    let origin = ray.origin;
    let direction = *ray.direction;

    let mut closest: Option<(f32, &str)> = None;
    for (unit, transform) in &organelles {
        let hit = ray_hit_distance(origin, direction, transform.translation(), unit.hit_radius);
        if let Some(t) = hit {
            if closest.is_none_or(|(best, _)| t < best) {
                closest = Some((t, unit.name.as_str()));
            }
        }
    }

    if let Some((_, name)) = closest {
        tracing::debug!("Selected organelle: {}", name);
        selected.select(name);
    }
}

fn handle_deselection(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut selected: ResMut<SelectedOrganelle>,
) {
    if keyboard.just_pressed(KeyCode::Escape) && selected.0.is_some() {
        tracing::debug!("Selection cleared");
        selected.clear();
    }
}

/// Spin every organelle around its own Y axis while the layer is visible.
/// Hiding the layer freezes the angle in place.
fn spin_organelles(
    layers: Res<LayerVisibility>,
    mut query: Query<(&Spinning, &mut Transform), With<OrganelleUnit>>,
) {
    if !layers.organelles {
        return;
    }
    for (spin, mut transform) in &mut query {
        transform.rotate_y(spin.step);
    }
}

/// Bob each organelle off its anchor height.
fn float_organelles(
    layers: Res<LayerVisibility>,
    settings: Res<SceneSettings>,
    time: Res<Time>,
    mut query: Query<(&Floating, &mut Transform), With<OrganelleUnit>>,
) {
    if !layers.organelles || !settings.floating {
        return;
    }
    let elapsed = time.elapsed_secs();
    for (float, mut transform) in &mut query {
        transform.translation.y = float.anchor_y + float.offset_at(elapsed);
    }
}
