//! Ray cast input and output records shared by every shape.

use crate::math::vec2::Vec2;

/// A ray from `p1` toward `p2`, clipped at `p1 + max_fraction * (p2 - p1)`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayCastInput {
    pub p1: Vec2,
    pub p2: Vec2,
    pub max_fraction: f64,
}

impl RayCastInput {
    pub fn new(p1: Vec2, p2: Vec2, max_fraction: f64) -> Self {
        Self { p1, p2, max_fraction }
    }
}

/// Where a ray hit: the surface normal and the fraction along the input ray.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RayCastOutput {
    pub normal: Vec2,
    pub fraction: f64,
}
