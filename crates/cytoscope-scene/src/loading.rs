//! Surface texture loading and the scene spawn gate
//!
//! The cell content does not spawn until every surface texture has been
//! resolved by the asset server. If any of them fail, the gate stays shut
//! and the UI reports which paths broke.

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::types::CellCatalog;

/// Organelles that render with a surface texture, and the asset path for it.
const SURFACE_TEXTURES: &[(&str, &str)] = &[
    ("Nucleus", "textures/nucleus.png"),
    ("Chloroplast", "textures/chloroplast.png"),
    ("Mitochondrion", "textures/mitochondrion.png"),
];

/// One pending or resolved texture load.
#[derive(Debug, Clone)]
pub struct TextureSlot {
    pub organelle: String,
    pub path: String,
    pub handle: Handle<Image>,
}

/// Tracks the surface textures the scene is waiting on.
#[derive(Resource, Debug, Clone)]
pub struct TextureLibrary {
    pub loading: bool,
    pub slots: Vec<TextureSlot>,
    pub resolved: usize,
    pub failed: Vec<String>,
}

impl Default for TextureLibrary {
    fn default() -> Self {
        Self {
            loading: true,
            slots: Vec::new(),
            resolved: 0,
            failed: Vec::new(),
        }
    }
}

impl TextureLibrary {
    /// True once every slot resolved and none of them failed.
    pub fn ready(&self) -> bool {
        !self.loading && self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.slots.len()
    }

    /// Texture handle for `name`, skipping slots whose load failed.
    pub fn surface_texture(&self, name: &str) -> Option<Handle<Image>> {
        self.slots
            .iter()
            .find(|slot| slot.organelle == name && !self.failed.contains(&slot.path))
            .map(|slot| slot.handle.clone())
    }
}

pub struct AssetGatePlugin;

impl Plugin for AssetGatePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TextureLibrary>()
            .add_systems(Startup, begin_texture_loads)
            .add_systems(Update, poll_texture_loads);
    }
}

/// Kick off the texture loads for every cataloged organelle that has one.
fn begin_texture_loads(
    asset_server: Res<AssetServer>,
    cell: Res<CellCatalog>,
    mut library: ResMut<TextureLibrary>,
) {
    if cell.catalog.is_empty() {
        tracing::warn!("Catalog is empty, the scene will have no organelles");
    }

    for (organelle, path) in SURFACE_TEXTURES {
        if cell.descriptor(organelle).is_none() {
            continue;
        }
        library.slots.push(TextureSlot {
            organelle: (*organelle).to_string(),
            path: (*path).to_string(),
            handle: asset_server.load(*path),
        });
    }

    if library.slots.is_empty() {
        // Nothing to wait on, open the gate immediately.
        library.loading = false;
        tracing::info!("No surface textures to load");
    } else {
        tracing::info!("Loading {} surface textures", library.slots.len());
    }
}

/// Poll the asset server until every slot has settled.
fn poll_texture_loads(asset_server: Res<AssetServer>, mut library: ResMut<TextureLibrary>) {
    if !library.loading {
        return;
    }

    let mut resolved = 0;
    let mut failed = Vec::new();

    for slot in &library.slots {
        match asset_server.get_load_state(slot.handle.id()) {
            Some(LoadState::Loaded) => resolved += 1,
            Some(LoadState::Failed(_)) => {
                resolved += 1;
                failed.push(slot.path.clone());
            }
            _ => {}
        }
    }

    let settled = resolved == library.slots.len();
    library.resolved = resolved;

    if settled {
        library.loading = false;
        library.failed = failed;
        if library.failed.is_empty() {
            tracing::info!("Loaded {} surface textures", library.slots.len());
        } else {
            tracing::error!(
                "Failed to load {} of {} surface textures: {}",
                library.failed.len(),
                library.slots.len(),
                library.failed.join(", ")
            );
        }
    }
}
