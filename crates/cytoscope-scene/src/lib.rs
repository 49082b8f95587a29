//! Interactive 3D plant cell scene
//!
//! Renders an organelle catalog as an orbitable 3D scene: a ring of
//! animated organelles inside concentric boundary layers, with egui
//! overlays for selection info and layer toggles. The host app inserts
//! its own [`CellCatalog`] before adding [`CellScenePlugin`]; every
//! resource falls back to a sensible default otherwise.

pub mod camera;
pub mod loading;
pub mod organelles;
pub mod scene;
pub mod types;
pub mod ui;

use bevy::prelude::*;

pub use camera::{CameraSettings, MainCamera};
pub use loading::TextureLibrary;
pub use types::{CellCatalog, LayerVisibility, SceneSettings, SelectedOrganelle};

/// Everything the cell viewer needs on top of `DefaultPlugins` and egui.
pub struct CellScenePlugin;

impl Plugin for CellScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CellCatalog>()
            .init_resource::<SelectedOrganelle>()
            .init_resource::<LayerVisibility>()
            .init_resource::<SceneSettings>()
            .add_plugins((
                camera::CameraPlugin,
                loading::AssetGatePlugin,
                scene::SceneSetupPlugin,
                organelles::OrganellesPlugin,
                ui::UiPlugin,
            ));
    }
}
