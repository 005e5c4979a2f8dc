pub mod chain;
pub mod circle;
pub mod edge;
pub mod polygon;

pub use chain::ChainShape;
pub use circle::CircleShape;
pub use edge::EdgeShape;
pub use polygon::PolygonShape;

use crate::collision::{RayCastInput, RayCastOutput, AABB};
use crate::error::{BridgeError, Result};
use crate::math::{Transform, Vec2};

/// Discriminant of a [`Shape`], with the numbering used across the binding surface.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Circle = 0,
    Edge = 1,
    Polygon = 2,
    Chain = 3,
}

/// Mass, centroid and rotational inertia (about the shape origin) of a shape.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MassData {
    pub mass: f64,
    pub center: Vec2,
    pub inertia: f64,
}

/// Enum representing the geometric shape of a collision object.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(CircleShape),
    Edge(EdgeShape),
    Polygon(PolygonShape),
    Chain(ChainShape),
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Circle(_) => ShapeType::Circle,
            Shape::Edge(_) => ShapeType::Edge,
            Shape::Polygon(_) => ShapeType::Polygon,
            Shape::Chain(_) => ShapeType::Chain,
        }
    }

    /// Number of child primitives. Only chains have more than one.
    pub fn child_count(&self) -> usize {
        match self {
            Shape::Chain(chain) => chain.child_count(),
            _ => 1,
        }
    }

    /// Point containment in world space. Edges and chains never contain a point.
    pub fn test_point(&self, xf: &Transform, point: Vec2) -> bool {
        match self {
            Shape::Circle(circle) => circle.test_point(xf, point),
            Shape::Polygon(polygon) => polygon.test_point(xf, point),
            Shape::Edge(_) | Shape::Chain(_) => false,
        }
    }

    /// Casts a ray against child `child`. `Ok(None)` means the ray missed.
    pub fn ray_cast(
        &self,
        input: &RayCastInput,
        xf: &Transform,
        child: usize,
    ) -> Result<Option<RayCastOutput>> {
        self.check_child(child)?;
        Ok(match self {
            Shape::Circle(circle) => circle.ray_cast(input, xf),
            Shape::Edge(edge) => edge.ray_cast(input, xf),
            Shape::Polygon(polygon) => polygon.ray_cast(input, xf),
            Shape::Chain(chain) => chain.ray_cast(input, xf, child)?,
        })
    }

    pub fn compute_aabb(&self, xf: &Transform, child: usize) -> Result<AABB> {
        self.check_child(child)?;
        Ok(match self {
            Shape::Circle(circle) => circle.compute_aabb(xf),
            Shape::Edge(edge) => edge.compute_aabb(xf),
            Shape::Polygon(polygon) => polygon.compute_aabb(xf),
            Shape::Chain(chain) => chain.compute_aabb(xf, child)?,
        })
    }

    pub fn compute_mass(&self, density: f64) -> MassData {
        match self {
            Shape::Circle(circle) => circle.compute_mass(density),
            Shape::Edge(edge) => edge.compute_mass(density),
            Shape::Polygon(polygon) => polygon.compute_mass(density),
            Shape::Chain(chain) => chain.compute_mass(density),
        }
    }

    pub fn radius(&self) -> f64 {
        match self {
            Shape::Circle(circle) => circle.radius,
            Shape::Edge(edge) => edge.radius,
            Shape::Polygon(polygon) => polygon.radius,
            Shape::Chain(chain) => chain.radius,
        }
    }

    /// Overwrites the radius field as-is.
    pub fn set_radius(&mut self, radius: f64) {
        match self {
            Shape::Circle(circle) => circle.radius = radius,
            Shape::Edge(edge) => edge.radius = radius,
            Shape::Polygon(polygon) => polygon.radius = radius,
            Shape::Chain(chain) => chain.radius = radius,
        }
    }

    fn check_child(&self, child: usize) -> Result<()> {
        let count = self.child_count();
        if child >= count {
            return Err(BridgeError::InvalidChildIndex { index: child, count });
        }
        Ok(())
    }
}

impl From<CircleShape> for Shape {
    fn from(shape: CircleShape) -> Self {
        Shape::Circle(shape)
    }
}

impl From<EdgeShape> for Shape {
    fn from(shape: EdgeShape) -> Self {
        Shape::Edge(shape)
    }
}

impl From<PolygonShape> for Shape {
    fn from(shape: PolygonShape) -> Self {
        Shape::Polygon(shape)
    }
}

impl From<ChainShape> for Shape {
    fn from(shape: ChainShape) -> Self {
        Shape::Chain(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::POLYGON_RADIUS;

    #[test]
    fn test_shape_type_discriminants() {
        assert_eq!(ShapeType::Circle as i32, 0);
        assert_eq!(ShapeType::Edge as i32, 1);
        assert_eq!(ShapeType::Polygon as i32, 2);
        assert_eq!(ShapeType::Chain as i32, 3);

        let shape: Shape = PolygonShape::new_box(1.0, 1.0).into();
        assert_eq!(shape.shape_type(), ShapeType::Polygon);
    }

    #[test]
    fn test_child_count_and_index_checks() {
        let circle: Shape = CircleShape::new(Vec2::ZERO, 1.0).into();
        assert_eq!(circle.child_count(), 1);
        assert_eq!(
            circle.compute_aabb(&Transform::identity(), 1),
            Err(BridgeError::InvalidChildIndex { index: 1, count: 1 })
        );

        let chain: Shape = ChainShape::new_chain(&[Vec2::ZERO, Vec2::UNIT_X, Vec2::new(2.0, 1.0)])
            .unwrap()
            .into();
        assert_eq!(chain.child_count(), 2);
        assert!(chain.compute_aabb(&Transform::identity(), 1).is_ok());
    }

    #[test]
    fn test_edge_never_contains_points() {
        let edge: Shape = EdgeShape::new(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0)).into();
        assert!(!edge.test_point(&Transform::identity(), Vec2::ZERO));
    }

    #[test]
    fn test_radius_read_write() {
        let mut shape: Shape = PolygonShape::new_box(1.0, 1.0).into();
        assert_eq!(shape.radius(), POLYGON_RADIUS);
        shape.set_radius(-3.0);
        assert_eq!(shape.radius(), -3.0);
    }
}
