use super::vec2::Vec2;
use serde::{Deserialize, Serialize};

/// Rigid placement of a local frame in world space.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
    pub rotation: f64, // Angle in radians
}

impl Transform {
    /// Creates a new transform.
    pub fn new(position: Vec2, rotation: f64) -> Self {
        Self { position, rotation }
    }

    /// Creates an identity transform (no translation, no rotation).
    pub fn identity() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
        }
    }

    /// Rotates a direction into world space without translating it.
    pub fn rotate_vector(self, v: Vec2) -> Vec2 {
        v.rotate(self.rotation)
    }

    /// Rotates a world direction back into the local frame.
    pub fn inverse_rotate_vector(self, v: Vec2) -> Vec2 {
        let (sin_a, cos_a) = self.rotation.sin_cos();
        Vec2::new(v.x * cos_a + v.y * sin_a, -v.x * sin_a + v.y * cos_a)
    }

    /// Applies the transform (rotation then translation) to a point.
    pub fn apply(self, point: Vec2) -> Vec2 {
        self.rotate_vector(point) + self.position
    }

    /// Applies the inverse transform (inverse translation then inverse rotation) to a point.
    pub fn apply_inverse(self, point: Vec2) -> Vec2 {
        self.inverse_rotate_vector(point - self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
