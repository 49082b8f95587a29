//! Bevy application setup

use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use cytoscope_core::OrganelleCatalog;
use cytoscope_scene::{CellCatalog, CellScenePlugin, LayerVisibility, SceneSettings};

/// Window and scene switches resolved from the command line.
#[derive(Debug, Clone)]
pub struct WindowOptions {
    pub width: f32,
    pub height: f32,
    pub show_boundary: bool,
    pub floating: bool,
}

/// Run the Bevy application.
pub fn run(catalog: OrganelleCatalog, options: WindowOptions) {
    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Cytoscope Plant Cell Explorer".to_string(),
                        resolution: (options.width as u32, options.height as u32).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(AssetPlugin {
                    // No .meta files ship with the textures.
                    meta_check: AssetMetaCheck::Never,
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin::default())
        .insert_resource(CellCatalog::new(catalog))
        .insert_resource(LayerVisibility {
            organelles: true,
            boundary: options.show_boundary,
        })
        .insert_resource(SceneSettings {
            floating: options.floating,
        })
        .add_plugins(CellScenePlugin)
        .add_systems(Startup, log_startup)
        .run();
}

fn log_startup(cell: Res<CellCatalog>) {
    tracing::info!("Viewer started with {} catalog entries", cell.catalog.len());
}
