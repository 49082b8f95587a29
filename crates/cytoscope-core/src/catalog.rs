//! Organelle catalog: the static name -> description/image mapping
//!
//! The catalog is loaded once at startup (the built-in table, or a JSON
//! or TOML file) and never mutated afterwards. Entry order is preserved
//! because the ring layout is order-dependent.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to parse catalog: {0}")]
    ParseError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid catalog: {0}")]
    ValidationError(String),
}

/// One organelle entry.
///
/// `image` is an opaque reference to an illustration asset; consumers may
/// resolve it or ignore it, the catalog itself never interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganelleDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

/// Ordered, read-only collection of organelle descriptors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrganelleCatalog {
    #[serde(default)]
    pub organelle: Vec<OrganelleDescriptor>,
}

fn entry(name: &str, description: &str, image: &str) -> OrganelleDescriptor {
    OrganelleDescriptor {
        name: name.to_string(),
        description: description.to_string(),
        image: image.to_string(),
    }
}

impl OrganelleCatalog {
    /// The standard plant-cell catalog shipped with the viewer.
    pub fn builtin() -> Self {
        Self {
            organelle: vec![
                entry(
                    "Nucleus",
                    "Control center of the cell containing DNA.",
                    "/images/nucleus.png",
                ),
                entry(
                    "Mitochondrion",
                    "Generates energy (ATP) for the cell.",
                    "/images/mitochondrion.png",
                ),
                entry(
                    "Chloroplast",
                    "Site of photosynthesis, converts sunlight into energy.",
                    "/images/chloroplast.png",
                ),
                entry(
                    "Vacuole",
                    "Stores water, nutrients, and waste products.",
                    "/images/vacuole.png",
                ),
                entry(
                    "GolgiApparatus",
                    "Packages and modifies proteins.",
                    "/images/golgi.png",
                ),
                entry(
                    "RoughER",
                    "Studded with ribosomes, helps in protein synthesis.",
                    "/images/rough_er.png",
                ),
                entry(
                    "SmoothER",
                    "Involved in lipid synthesis and detoxification.",
                    "/images/smooth_er.png",
                ),
                entry(
                    "Ribosomes",
                    "Produces proteins essential for cell function.",
                    "/images/ribosomes.png",
                ),
                entry(
                    "Peroxisome",
                    "Breaks down fatty acids and toxins.",
                    "/images/peroxisome.png",
                ),
                entry(
                    "CellWall",
                    "Provides structural support and protection.",
                    "/images/cell_wall.png",
                ),
                entry(
                    "PlasmaMembrane",
                    "Controls movement of materials in and out.",
                    "/images/plasma_membrane.png",
                ),
                entry(
                    "Cytoplasm",
                    "Gel-like fluid where all organelles are suspended.",
                    "/images/cytoplasm.png",
                ),
                entry(
                    "Plasmodesmata",
                    "Channels that allow transport between plant cells.",
                    "/images/plasmodesmata.png",
                ),
                entry(
                    "Lysosome",
                    "Breaks down waste and unwanted materials.",
                    "/images/lysosome.png",
                ),
            ],
        }
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self =
            serde_json::from_str(json).map_err(|e| CatalogError::ParseError(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a catalog from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, CatalogError> {
        let catalog: Self =
            toml::from_str(toml_str).map_err(|e| CatalogError::ParseError(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a file, sniffing JSON vs TOML by content.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = if content.trim_start().starts_with('{') {
            Self::from_json(&content)?
        } else {
            Self::from_toml(&content)?
        };
        tracing::debug!(
            "Loaded {} catalog entries from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.organelle.len());
        for descriptor in &self.organelle {
            if descriptor.name.is_empty() {
                return Err(CatalogError::ValidationError(
                    "organelle with an empty name".to_string(),
                ));
            }
            if seen.contains(&descriptor.name.as_str()) {
                return Err(CatalogError::ValidationError(format!(
                    "duplicate organelle name: {}",
                    descriptor.name
                )));
            }
            seen.push(&descriptor.name);
        }
        Ok(())
    }

    /// Look up one entry by name. Absent names are "no entry", not an error.
    pub fn get(&self, name: &str) -> Option<&OrganelleDescriptor> {
        self.organelle.iter().find(|o| o.name == name)
    }

    /// Entry names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.organelle.iter().map(|o| o.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrganelleDescriptor> {
        self.organelle.iter()
    }

    pub fn len(&self) -> usize {
        self.organelle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.organelle.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = OrganelleCatalog::builtin();
        assert_eq!(catalog.len(), 14);
        assert_eq!(catalog.organelle[0].name, "Nucleus");
        assert_eq!(catalog.organelle[13].name, "Lysosome");

        let nucleus = catalog.get("Nucleus").unwrap();
        assert_eq!(
            nucleus.description,
            "Control center of the cell containing DNA."
        );
        assert_eq!(nucleus.image, "/images/nucleus.png");
    }

    #[test]
    fn test_lookup_absent_name_is_none() {
        let catalog = OrganelleCatalog::builtin();
        assert!(catalog.get("UnknownCell").is_none());
        assert!(catalog.get("").is_none());
        assert!(catalog.get("nucleus").is_none(), "lookup is case-sensitive");
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{
    "organelle": [
        { "name": "Nucleus", "description": "Control center.", "image": "/images/nucleus.png" },
        { "name": "Vacuole", "description": "Stores water." }
    ]
}"#;

        let catalog = OrganelleCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.organelle[0].name, "Nucleus");
        assert_eq!(catalog.organelle[1].name, "Vacuole");
        assert_eq!(catalog.organelle[1].image, "");
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
[[organelle]]
name = "Chloroplast"
description = "Site of photosynthesis."
image = "/images/chloroplast.png"

[[organelle]]
name = "Ribosomes"
description = "Produces proteins."
"#;

        let catalog = OrganelleCatalog::from_toml(toml_str).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.organelle[0].name, "Chloroplast");
        assert_eq!(catalog.organelle[1].description, "Produces proteins.");
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = OrganelleCatalog::from_json(r#"{ "organelle": [] }"#).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let json = r#"{
    "organelle": [
        { "name": "Nucleus", "description": "a" },
        { "name": "Nucleus", "description": "b" }
    ]
}"#;

        let err = OrganelleCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::ValidationError(_)));
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let json = r#"{ "organelle": [ { "name": "", "description": "x" } ] }"#;
        let err = OrganelleCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::ValidationError(_)));
    }

    #[test]
    fn test_from_file_sniffs_format() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("cell.json");
        std::fs::write(
            &json_path,
            r#"{ "organelle": [ { "name": "Nucleus" } ] }"#,
        )
        .unwrap();
        let from_json = OrganelleCatalog::from_file(&json_path).unwrap();
        assert_eq!(from_json.len(), 1);

        let toml_path = dir.path().join("cell.toml");
        std::fs::write(&toml_path, "[[organelle]]\nname = \"Vacuole\"\n").unwrap();
        let from_toml = OrganelleCatalog::from_file(&toml_path).unwrap();
        assert_eq!(from_toml.names().collect::<Vec<_>>(), vec!["Vacuole"]);
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let err = OrganelleCatalog::from_file(Path::new("/nonexistent/cell.json")).unwrap_err();
        assert!(matches!(err, CatalogError::IoError(_)));
    }
}
