//! Cytoscope Core - Renderer-independent plant-cell model
//!
//! This crate provides the data layer for the Cytoscope viewer:
//! - Organelle catalog (name -> description/image) with JSON/TOML loading
//! - Deterministic ring layout derived from catalog order
//! - Tagged shape variants shared by organelles and boundary layers

pub mod catalog;
pub mod layout;
pub mod shape;

pub use catalog::{CatalogError, OrganelleCatalog, OrganelleDescriptor};
pub use layout::{ring_layout, PlacedOrganelle, LAYOUT_LIGHTNESS, LAYOUT_SATURATION};
pub use shape::Shape;
