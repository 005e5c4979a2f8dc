use super::MassData;
use crate::collision::{RayCastInput, RayCastOutput, AABB};
use crate::common::POLYGON_RADIUS;
use crate::math::{Transform, Vec2};

/// A line segment. The optional ghost vertices `v0`/`v3` describe the neighbours
/// of this edge when it is a child of a chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeShape {
    pub v1: Vec2,
    pub v2: Vec2,
    pub v0: Option<Vec2>,
    pub v3: Option<Vec2>,
    pub radius: f64,
}

impl EdgeShape {
    pub fn new(v1: Vec2, v2: Vec2) -> Self {
        Self {
            v1,
            v2,
            v0: None,
            v3: None,
            radius: POLYGON_RADIUS,
        }
    }

    /// Calculates the length of the edge.
    pub fn length(&self) -> f64 {
        self.v1.distance(self.v2)
    }

    /// Returns the direction vector of the edge (from v1 to v2).
    pub fn direction(&self) -> Vec2 {
        self.v2 - self.v1
    }

    /// Intersects the ray with the segment, reporting the normal on the side the ray came from.
    pub fn ray_cast(&self, input: &RayCastInput, xf: &Transform) -> Option<RayCastOutput> {
        // Work in the edge's local frame.
        let p1 = xf.apply_inverse(input.p1);
        let p2 = xf.apply_inverse(input.p2);
        let d = p2 - p1;

        let e = self.direction();
        let normal = Vec2::new(e.y, -e.x).normalize();

        let numerator = normal.dot(self.v1 - p1);
        let denominator = normal.dot(d);
        if denominator == 0.0 {
            return None;
        }

        let t = numerator / denominator;
        if t < 0.0 || input.max_fraction < t {
            return None;
        }

        let q = p1 + d * t;
        let rr = e.magnitude_squared();
        if rr == 0.0 {
            return None;
        }

        let s = (q - self.v1).dot(e) / rr;
        if !(0.0..=1.0).contains(&s) {
            return None;
        }

        let local_normal = if numerator > 0.0 { -normal } else { normal };
        Some(RayCastOutput {
            normal: xf.rotate_vector(local_normal),
            fraction: t,
        })
    }

    pub fn compute_aabb(&self, xf: &Transform) -> AABB {
        let v1 = xf.apply(self.v1);
        let v2 = xf.apply(self.v2);
        AABB::new(v1, v2).inflate(self.radius)
    }

    /// Edges have no area: zero mass, centred on the midpoint.
    pub fn compute_mass(&self, _density: f64) -> MassData {
        MassData {
            mass: 0.0,
            center: (self.v1 + self.v2) * 0.5,
            inertia: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_edge_new() {
        let edge = EdgeShape::new(Vec2::new(1.0, 2.0), Vec2::new(4.0, 6.0));
        assert!((edge.length() - 5.0).abs() < EPSILON);
        assert_eq!(edge.direction(), Vec2::new(3.0, 4.0));
        assert_eq!(edge.radius, POLYGON_RADIUS);
        assert!(edge.v0.is_none() && edge.v3.is_none());
    }

    #[test]
    fn test_edge_ray_cast_from_above() {
        let edge = EdgeShape::new(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0));
        let input = RayCastInput::new(Vec2::new(0.0, 2.0), Vec2::new(0.0, -2.0), 1.0);
        let out = edge.ray_cast(&input, &Transform::identity()).unwrap();
        assert!((out.fraction - 0.5).abs() < EPSILON);
        assert!((out.normal.y - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_edge_ray_cast_from_below_flips_normal() {
        let edge = EdgeShape::new(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0));
        let input = RayCastInput::new(Vec2::new(0.5, -1.0), Vec2::new(0.5, 3.0), 1.0);
        let out = edge.ray_cast(&input, &Transform::identity()).unwrap();
        assert!((out.fraction - 0.25).abs() < EPSILON);
        assert!((out.normal.y + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_edge_ray_cast_misses_past_end() {
        let edge = EdgeShape::new(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0));
        let input = RayCastInput::new(Vec2::new(2.0, 1.0), Vec2::new(2.0, -1.0), 1.0);
        assert!(edge.ray_cast(&input, &Transform::identity()).is_none());
        let parallel = RayCastInput::new(Vec2::new(-2.0, 0.5), Vec2::new(2.0, 0.5), 1.0);
        assert!(edge.ray_cast(&parallel, &Transform::identity()).is_none());
    }

    #[test]
    fn test_edge_aabb_and_mass() {
        let edge = EdgeShape::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 1.0));
        let aabb = edge.compute_aabb(&Transform::new(Vec2::new(1.0, 0.0), 0.0));
        assert!((aabb.min.x - (1.0 - POLYGON_RADIUS)).abs() < EPSILON);
        assert!((aabb.max.y - (1.0 + POLYGON_RADIUS)).abs() < EPSILON);

        let data = edge.compute_mass(5.0);
        assert_eq!(data.mass, 0.0);
        assert_eq!(data.center, Vec2::new(1.0, 0.5));
    }
}
