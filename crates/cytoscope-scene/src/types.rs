//! Scene-wide resources and state

use bevy::prelude::*;
use cytoscope_core::{ring_layout, OrganelleCatalog, OrganelleDescriptor, PlacedOrganelle};

/// The catalog driving the scene, with its derived ring placements.
///
/// Built once at startup; the placements are a pure function of the
/// catalog order, so they are computed here and never again.
#[derive(Resource, Debug, Clone)]
pub struct CellCatalog {
    pub catalog: OrganelleCatalog,
    pub placements: Vec<PlacedOrganelle>,
}

impl CellCatalog {
    pub fn new(catalog: OrganelleCatalog) -> Self {
        let placements = ring_layout(catalog.names());
        Self {
            catalog,
            placements,
        }
    }

    /// Catalog entry for `name`, if there is one.
    pub fn descriptor(&self, name: &str) -> Option<&OrganelleDescriptor> {
        self.catalog.get(name)
    }
}

impl Default for CellCatalog {
    fn default() -> Self {
        Self::new(OrganelleCatalog::builtin())
    }
}

/// Name of the organelle currently shown in the info panel, if any.
#[derive(Resource, Default, Debug, Clone)]
pub struct SelectedOrganelle(pub Option<String>);

impl SelectedOrganelle {
    /// Last writer wins; there is never more than one selection.
    pub fn select(&mut self, name: impl Into<String>) {
        self.0 = Some(name.into());
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }
}

/// Which scene layers are drawn.
///
/// Hiding the organelle layer leaves the selection untouched, so a stale
/// selection may point at a hidden organelle and the info panel keeps
/// showing it.
#[derive(Resource, Debug, Clone)]
pub struct LayerVisibility {
    pub organelles: bool,
    pub boundary: bool,
}

impl Default for LayerVisibility {
    fn default() -> Self {
        Self {
            organelles: true,
            boundary: true,
        }
    }
}

impl LayerVisibility {
    pub fn toggle_organelles(&mut self) {
        self.organelles = !self.organelles;
    }

    pub fn organelle_visibility(&self) -> Visibility {
        if self.organelles {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }

    pub fn boundary_visibility(&self) -> Visibility {
        if self.boundary {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }
}

/// Motion switches resolved from the command line and the settings UI.
#[derive(Resource, Debug, Clone)]
pub struct SceneSettings {
    pub floating: bool,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self { floating: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_resource_places_every_entry() {
        let cell = CellCatalog::default();
        assert_eq!(cell.placements.len(), cell.catalog.len());
        assert_eq!(cell.placements[0].name, "Nucleus");
    }

    #[test]
    fn test_descriptor_lookup() {
        let cell = CellCatalog::default();
        assert_eq!(
            cell.descriptor("Nucleus").map(|o| o.description.as_str()),
            Some("Control center of the cell containing DNA.")
        );
        assert!(cell.descriptor("UnknownCell").is_none());
    }

    #[test]
    fn test_selection_last_writer_wins() {
        let mut selected = SelectedOrganelle::default();
        assert_eq!(selected.0, None);

        selected.select("Nucleus");
        selected.select("Vacuole");
        assert_eq!(selected.0.as_deref(), Some("Vacuole"));

        selected.clear();
        assert_eq!(selected.0, None);
    }

    #[test]
    fn test_double_toggle_restores_visibility() {
        let mut layers = LayerVisibility::default();
        assert!(layers.organelles);

        layers.toggle_organelles();
        assert!(!layers.organelles);
        assert_eq!(layers.organelle_visibility(), Visibility::Hidden);

        layers.toggle_organelles();
        assert!(layers.organelles);
        assert_eq!(layers.organelle_visibility(), Visibility::Visible);
    }

    #[test]
    fn test_toggle_keeps_render_set() {
        let catalog = OrganelleCatalog::from_json(
            r#"{"organelle": [
                {"name": "Nucleus", "description": "Control center of the cell containing DNA."},
                {"name": "Mitochondrion", "description": "Generates energy (ATP) for the cell."}
            ]}"#,
        )
        .unwrap();
        let cell = CellCatalog::new(catalog);
        let mut layers = LayerVisibility::default();

        assert_eq!(cell.placements.len(), 2);
        layers.toggle_organelles();
        layers.toggle_organelles();

        // Same placements, same visibility as before the round trip.
        assert_eq!(cell.placements.len(), 2);
        assert_eq!(layers.organelle_visibility(), Visibility::Visible);
    }

    #[test]
    fn test_hiding_preserves_selection() {
        let mut selected = SelectedOrganelle::default();
        let mut layers = LayerVisibility::default();

        selected.select("Nucleus");
        layers.toggle_organelles();

        // The stale selection survives the hide; the panel keeps showing it.
        assert_eq!(selected.0.as_deref(), Some("Nucleus"));
    }
}
