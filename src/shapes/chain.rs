use super::{EdgeShape, MassData};
use crate::collision::{RayCastInput, RayCastOutput, AABB};
use crate::common::{LINEAR_SLOP, POLYGON_RADIUS};
use crate::error::{BridgeError, Result};
use crate::math::{Transform, Vec2};

/// A free-form sequence of line segments. Each segment is a child edge.
///
/// A loop repeats its first vertex at the end, so `vertices.len() - 1` is
/// always the number of children.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainShape {
    pub vertices: Vec<Vec2>,
    pub prev_vertex: Option<Vec2>,
    pub next_vertex: Option<Vec2>,
    pub radius: f64,
}

impl ChainShape {
    /// Open chain through `vertices`.
    pub fn new_chain(vertices: &[Vec2]) -> Result<Self> {
        if vertices.len() < 2 {
            return Err(BridgeError::InvalidShape(format!(
                "chain needs at least 2 vertices, got {}",
                vertices.len()
            )));
        }
        check_spacing(vertices)?;
        Ok(ChainShape {
            vertices: vertices.to_vec(),
            prev_vertex: None,
            next_vertex: None,
            radius: POLYGON_RADIUS,
        })
    }

    /// Closed loop through `vertices`; the closing segment is added automatically.
    pub fn new_loop(vertices: &[Vec2]) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(BridgeError::InvalidShape(format!(
                "loop needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        check_spacing(vertices)?;

        let count = vertices.len();
        let mut closed = vertices.to_vec();
        closed.push(vertices[0]);
        Ok(ChainShape {
            vertices: closed,
            prev_vertex: Some(vertices[count - 1]),
            next_vertex: Some(vertices[1]),
            radius: POLYGON_RADIUS,
        })
    }

    pub fn child_count(&self) -> usize {
        self.vertices.len() - 1
    }

    /// The `index`-th segment, with its neighbours recorded as ghost vertices.
    pub fn child_edge(&self, index: usize) -> Result<EdgeShape> {
        let count = self.child_count();
        if index >= count {
            return Err(BridgeError::InvalidChildIndex { index, count });
        }

        let mut edge = EdgeShape::new(self.vertices[index], self.vertices[index + 1]);
        edge.radius = self.radius;
        edge.v0 = if index > 0 {
            Some(self.vertices[index - 1])
        } else {
            self.prev_vertex
        };
        edge.v3 = if index + 2 < self.vertices.len() {
            Some(self.vertices[index + 2])
        } else {
            self.next_vertex
        };
        Ok(edge)
    }

    pub fn ray_cast(
        &self,
        input: &RayCastInput,
        xf: &Transform,
        child: usize,
    ) -> Result<Option<RayCastOutput>> {
        Ok(self.child_edge(child)?.ray_cast(input, xf))
    }

    /// Bounds of one segment. Unlike a standalone edge, no skin is added.
    pub fn compute_aabb(&self, xf: &Transform, child: usize) -> Result<AABB> {
        let edge = self.child_edge(child)?;
        Ok(AABB::new(xf.apply(edge.v1), xf.apply(edge.v2)))
    }

    /// Chains have no area.
    pub fn compute_mass(&self, _density: f64) -> MassData {
        MassData::default()
    }
}

fn check_spacing(vertices: &[Vec2]) -> Result<()> {
    for pair in vertices.windows(2) {
        if pair[0].distance_squared(pair[1]) <= LINEAR_SLOP * LINEAR_SLOP {
            return Err(BridgeError::InvalidShape(
                "chain vertices are too close together".to_string(),
            ));
        }
    }
    Ok(())
}
