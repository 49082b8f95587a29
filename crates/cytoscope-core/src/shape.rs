//! Primitive shapes for organelles and boundary layers
//!
//! The shape for an entity is chosen once at construction and never
//! mutated. Dimensions are in scene units.

use serde::{Deserialize, Serialize};

/// Render primitive, tagged so configuration can describe geometry
/// without referencing any renderer type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Box { size: [f32; 3] },
    Sphere { radius: f32 },
    Cylinder { radius: f32, length: f32 },
}

impl Shape {
    /// Radius of the smallest sphere containing the shape, used for hit
    /// testing.
    pub fn bounding_radius(&self) -> f32 {
        match self {
            Shape::Box { size } => {
                let half = [size[0] / 2.0, size[1] / 2.0, size[2] / 2.0];
                (half[0] * half[0] + half[1] * half[1] + half[2] * half[2]).sqrt()
            }
            Shape::Sphere { radius } => *radius,
            Shape::Cylinder { radius, length } => {
                let half_length = length / 2.0;
                (radius * radius + half_length * half_length).sqrt()
            }
        }
    }
}

impl Default for Shape {
    /// The standard organelle primitive.
    fn default() -> Self {
        Shape::Sphere { radius: 0.3 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard_sphere() {
        assert_eq!(Shape::default(), Shape::Sphere { radius: 0.3 });
    }

    #[test]
    fn test_bounding_radius() {
        assert_eq!(Shape::Sphere { radius: 0.3 }.bounding_radius(), 0.3);

        let cube = Shape::Box {
            size: [2.0, 2.0, 2.0],
        };
        assert!((cube.bounding_radius() - 3.0_f32.sqrt()).abs() < 1e-6);

        let rod = Shape::Cylinder {
            radius: 0.3,
            length: 2.0,
        };
        assert!((rod.bounding_radius() - (0.09_f32 + 1.0).sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_tagged_serde_form() {
        let shape: Shape = serde_json::from_str(r#"{ "type": "sphere", "radius": 0.5 }"#).unwrap();
        assert_eq!(shape, Shape::Sphere { radius: 0.5 });

        let shape: Shape =
            serde_json::from_str(r#"{ "type": "box", "size": [1.0, 0.5, 1.5] }"#).unwrap();
        assert_eq!(
            shape,
            Shape::Box {
                size: [1.0, 0.5, 1.5]
            }
        );

        let shape: Shape =
            serde_json::from_str(r#"{ "type": "cylinder", "radius": 0.3, "length": 2.0 }"#)
                .unwrap();
        assert_eq!(
            shape,
            Shape::Cylinder {
                radius: 0.3,
                length: 2.0
            }
        );
    }
}
