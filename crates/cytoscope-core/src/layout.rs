//! Deterministic ring layout for organelle placement
//!
//! Positions and colors depend only on each entry's ordinal index, so the
//! same catalog order always produces the same scene. Reordering the
//! catalog reorders every placement by design.

use serde::{Deserialize, Serialize};

/// Saturation applied to every placement color.
pub const LAYOUT_SATURATION: f32 = 1.0;
/// Lightness applied to every placement color.
pub const LAYOUT_LIGHTNESS: f32 = 0.6;

/// One laid-out organelle: the catalog name plus its derived placement.
///
/// `hue` is in degrees; renderers combine it with [`LAYOUT_SATURATION`]
/// and [`LAYOUT_LIGHTNESS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedOrganelle {
    pub name: String,
    pub position: [f32; 3],
    pub hue: f32,
}

/// Placement for ordinal index `i`: a point on the sine/cosine ring and
/// a hue stepping 30 degrees per entry.
pub fn place_at(i: usize) -> ([f32; 3], f32) {
    let t = i as f32;
    let position = [t.sin() * 2.0, t.cos() * 1.5, t.sin() * -2.0];
    let hue = ((i * 30) % 360) as f32;
    (position, hue)
}

/// Lay out `names` in order. Empty input yields an empty layout.
pub fn ring_layout<'a, I>(names: I) -> Vec<PlacedOrganelle>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let (position, hue) = place_at(i);
            PlacedOrganelle {
                name: name.to_string(),
                position,
                hue,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_formula() {
        for i in 0..20usize {
            let (position, _) = place_at(i);
            let t = i as f32;
            assert_eq!(position[0], t.sin() * 2.0);
            assert_eq!(position[1], t.cos() * 1.5);
            assert_eq!(position[2], t.sin() * -2.0);
        }
    }

    #[test]
    fn test_x_mirrors_z() {
        for i in 0..20usize {
            let (position, _) = place_at(i);
            assert_eq!(position[0], -position[2]);
        }
    }

    #[test]
    fn test_hue_steps_30_degrees_and_wraps() {
        assert_eq!(place_at(0).1, 0.0);
        assert_eq!(place_at(1).1, 30.0);
        assert_eq!(place_at(11).1, 330.0);
        assert_eq!(place_at(12).1, 0.0);
        assert_eq!(place_at(13).1, 30.0);
    }

    #[test]
    fn test_layout_count_matches_input() {
        for n in [0usize, 1, 2, 14, 31] {
            let names: Vec<String> = (0..n).map(|i| format!("organelle-{i}")).collect();
            let layout = ring_layout(names.iter().map(|s| s.as_str()));
            assert_eq!(layout.len(), n);
        }
    }

    #[test]
    fn test_layout_is_idempotent() {
        let names = ["Nucleus", "Mitochondrion", "Chloroplast"];
        let first = ring_layout(names);
        let second = ring_layout(names);
        assert_eq!(first, second);
    }

    #[test]
    fn test_placement_ignores_name_content() {
        let a = ring_layout(["Nucleus", "Vacuole"]);
        let b = ring_layout(["x", "y"]);
        for (left, right) in a.iter().zip(b.iter()) {
            assert_eq!(left.position, right.position);
            assert_eq!(left.hue, right.hue);
        }
    }

    #[test]
    fn test_names_carried_in_order() {
        let layout = ring_layout(["Nucleus", "Vacuole", "Lysosome"]);
        let names: Vec<&str> = layout.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Nucleus", "Vacuole", "Lysosome"]);
    }

    #[test]
    fn test_empty_input_yields_empty_layout() {
        assert!(ring_layout(std::iter::empty::<&str>()).is_empty());
    }
}
