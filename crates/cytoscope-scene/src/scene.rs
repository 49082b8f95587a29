//! Static scene content: camera, lights, and the cell boundary

use bevy::light::NotShadowCaster;
use bevy::prelude::*;
use cytoscope_core::Shape;

use crate::camera::MainCamera;
use crate::loading::TextureLibrary;
use crate::organelles::{mesh_for_shape, OrganelleUnit};
use crate::types::LayerVisibility;

const EDGE_THICKNESS: f32 = 0.03;

/// Marker for the boundary entities (wall, membrane, cytoplasm).
#[derive(Component)]
pub struct CellBoundary;

/// One concentric boundary layer.
#[derive(Debug, Clone)]
pub struct BoundaryLayer {
    pub shape: Shape,
    pub color: Color,
    pub wireframe: bool,
}

/// The three boundary layers, outermost first.
pub fn boundary_layers() -> Vec<BoundaryLayer> {
    vec![
        // Cell wall, drawn as a wireframe cube.
        BoundaryLayer {
            shape: Shape::Box {
                size: [7.0, 7.0, 7.0],
            },
            color: Color::srgb(0.565, 0.933, 0.565),
            wireframe: true,
        },
        // Plasma membrane.
        BoundaryLayer {
            shape: Shape::Sphere { radius: 3.5 },
            color: Color::srgba(0.0, 0.502, 0.0, 0.5),
            wireframe: false,
        },
        // Cytoplasm.
        BoundaryLayer {
            shape: Shape::Sphere { radius: 3.4 },
            color: Color::srgba(1.0, 1.0, 0.0, 0.3),
            wireframe: false,
        },
    ]
}

pub struct SceneSetupPlugin;

impl Plugin for SceneSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene)
            .add_systems(Update, (spawn_boundary, update_layer_visibility));
    }
}

/// Camera and lights go up immediately; cell content waits on the textures.
fn setup_scene(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 50.0_f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Transform::from_xyz(0.0, 3.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 5.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Warm fill from the opposite side so hidden faces stay readable.
    commands.spawn((
        PointLight {
            intensity: 1_500_000.0,
            color: Color::srgb(1.0, 0.95, 0.9),
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-5.0, 3.0, -5.0),
    ));
}

/// Centers and dimensions of the twelve beams outlining a cube of `size`.
fn edge_beams(size: f32, thickness: f32) -> Vec<(Vec3, Vec3)> {
    let h = size / 2.0;
    let mut beams = Vec::with_capacity(12);
    for sy in [-h, h] {
        for sz in [-h, h] {
            beams.push((
                Vec3::new(0.0, sy, sz),
                Vec3::new(size + thickness, thickness, thickness),
            ));
        }
    }
    for sx in [-h, h] {
        for sz in [-h, h] {
            beams.push((
                Vec3::new(sx, 0.0, sz),
                Vec3::new(thickness, size + thickness, thickness),
            ));
        }
    }
    for sx in [-h, h] {
        for sy in [-h, h] {
            beams.push((
                Vec3::new(sx, sy, 0.0),
                Vec3::new(thickness, thickness, size + thickness),
            ));
        }
    }
    beams
}

/// Spawn the boundary layers once the texture gate opens.
fn spawn_boundary(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    library: Res<TextureLibrary>,
    layers: Res<LayerVisibility>,
    mut spawned: Local<bool>,
) {
    if *spawned || !library.ready() {
        return;
    }
    *spawned = true;

    for layer in boundary_layers() {
        if layer.wireframe {
            let Shape::Box { size } = layer.shape else {
                continue;
            };
            let material = materials.add(StandardMaterial {
                base_color: layer.color,
                unlit: true,
                ..default()
            });
            for (center, dimensions) in edge_beams(size[0], EDGE_THICKNESS) {
                commands.spawn((
                    Mesh3d(meshes.add(Cuboid::new(dimensions.x, dimensions.y, dimensions.z))),
                    MeshMaterial3d(material.clone()),
                    Transform::from_translation(center),
                    layers.boundary_visibility(),
                    CellBoundary,
                    NotShadowCaster,
                ));
            }
        } else {
            commands.spawn((
                Mesh3d(meshes.add(mesh_for_shape(&layer.shape))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: layer.color,
                    alpha_mode: AlphaMode::Blend,
                    ..default()
                })),
                Transform::default(),
                layers.boundary_visibility(),
                CellBoundary,
                NotShadowCaster,
            ));
        }
    }

    tracing::info!("Spawned cell boundary");
}

/// Push visibility flags onto the layer entities whenever they change.
fn update_layer_visibility(
    layers: Res<LayerVisibility>,
    mut organelles: Query<&mut Visibility, (With<OrganelleUnit>, Without<CellBoundary>)>,
    mut boundary: Query<&mut Visibility, With<CellBoundary>>,
) {
    if !layers.is_changed() {
        return;
    }

    for mut visibility in &mut organelles {
        *visibility = layers.organelle_visibility();
    }
    for mut visibility in &mut boundary {
        *visibility = layers.boundary_visibility();
    }
}
