use super::MassData;
use crate::collision::{RayCastInput, RayCastOutput, AABB};
use crate::math::{Transform, Vec2};
use std::f64::consts::PI;

/// A solid circle, positioned by `p` in the local frame of its body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleShape {
    pub p: Vec2,
    pub radius: f64,
}

impl CircleShape {
    pub fn new(p: Vec2, radius: f64) -> Self {
        Self { p, radius }
    }

    pub fn test_point(&self, xf: &Transform, point: Vec2) -> bool {
        let center = xf.apply(self.p);
        (point - center).magnitude_squared() <= self.radius * self.radius
    }

    /// Solves `|s + t * r| = radius` for the smallest `t` in `[0, max_fraction]`.
    pub fn ray_cast(&self, input: &RayCastInput, xf: &Transform) -> Option<RayCastOutput> {
        let position = xf.apply(self.p);
        let s = input.p1 - position;
        let b = s.magnitude_squared() - self.radius * self.radius;

        let r = input.p2 - input.p1;
        let c = s.dot(r);
        let rr = r.magnitude_squared();
        let sigma = c * c - rr * b;

        if sigma < 0.0 || rr < f64::EPSILON {
            return None;
        }

        let a = -(c + sigma.sqrt());
        if a < 0.0 || a > input.max_fraction * rr {
            return None;
        }

        let fraction = a / rr;
        Some(RayCastOutput {
            normal: (s + r * fraction).normalize(),
            fraction,
        })
    }

    pub fn compute_aabb(&self, xf: &Transform) -> AABB {
        let p = xf.apply(self.p);
        let r = Vec2::new(self.radius, self.radius);
        AABB { min: p - r, max: p + r }
    }

    /// Mass properties; the rotational inertia is about the shape origin.
    pub fn compute_mass(&self, density: f64) -> MassData {
        let rr = self.radius * self.radius;
        let mass = density * PI * rr;
        MassData {
            mass,
            center: self.p,
            inertia: mass * (0.5 * rr + self.p.magnitude_squared()),
        }
    }
}
