//! Integration tests: catalog order drives the ring layout.

use cytoscope_core::{ring_layout, OrganelleCatalog};

#[test]
fn builtin_catalog_lays_out_fourteen_organelles() {
    let catalog = OrganelleCatalog::builtin();
    let layout = ring_layout(catalog.names());

    assert_eq!(layout.len(), 14);

    // Index 0 sits at the top of the ring.
    assert_eq!(layout[0].name, "Nucleus");
    assert_eq!(layout[0].position, [0.0, 1.5, 0.0]);
    assert_eq!(layout[0].hue, 0.0);

    // Every placement refers back to a catalog entry.
    for placed in &layout {
        assert!(
            catalog.get(&placed.name).is_some(),
            "placement {} has no catalog entry",
            placed.name
        );
    }
}

#[test]
fn layout_is_stable_across_reloads() {
    let json = r#"{
    "organelle": [
        { "name": "Nucleus", "description": "Control center of the cell containing DNA." },
        { "name": "Mitochondrion", "description": "Generates energy (ATP) for the cell." }
    ]
}"#;

    let first = OrganelleCatalog::from_json(json).unwrap();
    let second = OrganelleCatalog::from_json(json).unwrap();

    assert_eq!(
        ring_layout(first.names()),
        ring_layout(second.names()),
        "same catalog order must produce the same scene"
    );
}

#[test]
fn reordering_the_catalog_moves_every_organelle() {
    let forward = ring_layout(["Nucleus", "Vacuole"]);
    let reversed = ring_layout(["Vacuole", "Nucleus"]);

    let nucleus_forward = forward.iter().find(|p| p.name == "Nucleus").unwrap();
    let nucleus_reversed = reversed.iter().find(|p| p.name == "Nucleus").unwrap();
    assert_ne!(nucleus_forward.position, nucleus_reversed.position);
    assert_ne!(nucleus_forward.hue, nucleus_reversed.hue);
}

#[test]
fn panel_text_for_selection_comes_from_the_catalog() {
    let catalog = OrganelleCatalog::builtin();

    // Selecting a known organelle resolves descriptive text.
    let selected = "Nucleus";
    let text = catalog.get(selected).map(|o| o.description.as_str());
    assert_eq!(text, Some("Control center of the cell containing DNA."));

    // Selecting an unknown organelle resolves to nothing at all.
    assert_eq!(catalog.get("UnknownCell").map(|o| o.description.as_str()), None);
}
