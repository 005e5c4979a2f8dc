use super::MassData;
use crate::collision::{RayCastInput, RayCastOutput, AABB};
use crate::common::{LINEAR_SLOP, MAX_POLYGON_VERTICES, POLYGON_RADIUS};
use crate::error::{BridgeError, Result};
use crate::math::{Transform, Vec2};

/// A convex polygon shape defined by its vertices in local space.
/// Vertices are stored counter-clockwise with one outward normal per edge.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonShape {
    pub vertices: Vec<Vec2>,
    pub normals: Vec<Vec2>,
    pub centroid: Vec2,
    pub radius: f64,
}

impl PolygonShape {
    /// Builds the convex hull of `points`.
    ///
    /// Points closer together than the linear slop are welded. Fails when more
    /// than `MAX_POLYGON_VERTICES` points are given or the hull is degenerate.
    pub fn new(points: &[Vec2]) -> Result<Self> {
        if points.len() < 3 {
            return Err(BridgeError::InvalidShape(format!(
                "polygon needs at least 3 points, got {}",
                points.len()
            )));
        }
        if points.len() > MAX_POLYGON_VERTICES {
            return Err(BridgeError::InvalidShape(format!(
                "polygon accepts at most {} points, got {}",
                MAX_POLYGON_VERTICES,
                points.len()
            )));
        }

        let weld_sq = 0.5 * LINEAR_SLOP * 0.5 * LINEAR_SLOP;
        let mut unique: Vec<Vec2> = Vec::with_capacity(points.len());
        for p in points {
            if unique.iter().all(|q| p.distance_squared(*q) > weld_sq) {
                unique.push(*p);
            }
        }

        let hull = convex_hull(&unique);
        if hull.len() < 3 {
            return Err(BridgeError::InvalidShape(
                "polygon points are collinear or coincident".to_string(),
            ));
        }

        Ok(Self::from_hull(hull))
    }

    /// Axis-aligned box with half-widths `hx`, `hy`, centred on the origin.
    pub fn new_box(hx: f64, hy: f64) -> Self {
        Self::new_oriented_box(hx, hy, Vec2::ZERO, 0.0)
    }

    /// Box with half-widths `hx`, `hy`, centred at `center` and rotated by `angle`.
    pub fn new_oriented_box(hx: f64, hy: f64, center: Vec2, angle: f64) -> Self {
        let xf = Transform::new(center, angle);
        let vertices = [
            Vec2::new(-hx, -hy),
            Vec2::new(hx, -hy),
            Vec2::new(hx, hy),
            Vec2::new(-hx, hy),
        ];
        let normals = [
            Vec2::new(0.0, -1.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(-1.0, 0.0),
        ];
        PolygonShape {
            vertices: vertices.iter().map(|v| xf.apply(*v)).collect(),
            normals: normals.iter().map(|n| xf.rotate_vector(*n)).collect(),
            centroid: center,
            radius: POLYGON_RADIUS,
        }
    }

    fn from_hull(vertices: Vec<Vec2>) -> Self {
        let mut polygon = PolygonShape {
            vertices,
            normals: Vec::new(),
            centroid: Vec2::ZERO,
            radius: POLYGON_RADIUS,
        };
        polygon.normals = polygon.get_edge_normals();
        polygon.centroid = polygon.calculate_centroid();
        polygon
    }

    /// Calculates the area of the polygon using the Shoelace formula.
    pub fn calculate_area(&self) -> f64 {
        let n = self.vertices.len();
        let mut area = 0.0;
        for i in 0..n {
            area += self.vertices[i].cross(self.vertices[(i + 1) % n]);
        }
        (area / 2.0).abs()
    }

    /// Calculates the centroid (center of mass for uniform density) of the polygon.
    pub fn calculate_centroid(&self) -> Vec2 {
        let n = self.vertices.len();
        let mut centroid = Vec2::ZERO;
        let mut signed_area_sum = 0.0;
        let origin = self.vertices[0];

        for i in 1..(n - 1) {
            let v2 = self.vertices[i];
            let v3 = self.vertices[i + 1];

            let triangle_signed_area = (v2 - origin).cross(v3 - origin) / 2.0;
            signed_area_sum += triangle_signed_area;
            centroid += (origin + v2 + v3) / 3.0 * triangle_signed_area;
        }

        if signed_area_sum.abs() < 1e-10 {
            let mut avg = Vec2::ZERO;
            for v in &self.vertices {
                avg += *v;
            }
            avg / (n as f64)
        } else {
            centroid / signed_area_sum
        }
    }

    /// Moment of inertia (density = 1) about the shape origin.
    fn calculate_inertia_about_origin(&self) -> f64 {
        let n = self.vertices.len();
        let mut inertia_sum = 0.0;
        for i in 0..n {
            let v1 = self.vertices[i];
            let v2 = self.vertices[(i + 1) % n];
            inertia_sum +=
                v1.cross(v2) * (v1.magnitude_squared() + v1.dot(v2) + v2.magnitude_squared());
        }
        inertia_sum / 12.0
    }

    /// Returns the outward-facing normal vectors for each edge of the polygon.
    pub fn get_edge_normals(&self) -> Vec<Vec2> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| {
                let edge = self.vertices[(i + 1) % n] - self.vertices[i];
                edge.cross_scalar(1.0).normalize()
            })
            .collect()
    }

    pub fn test_point(&self, xf: &Transform, point: Vec2) -> bool {
        let local = xf.apply_inverse(point);
        self.vertices
            .iter()
            .zip(&self.normals)
            .all(|(v, n)| n.dot(local - *v) <= 0.0)
    }

    /// Clips the ray against every edge's half-plane.
    pub fn ray_cast(&self, input: &RayCastInput, xf: &Transform) -> Option<RayCastOutput> {
        let p1 = xf.apply_inverse(input.p1);
        let p2 = xf.apply_inverse(input.p2);
        let d = p2 - p1;

        let mut lower = 0.0;
        let mut upper = input.max_fraction;
        let mut index = None;

        for (i, (v, n)) in self.vertices.iter().zip(&self.normals).enumerate() {
            // p = p1 + t * d; dot(n, p - v) = 0
            let numerator = n.dot(*v - p1);
            let denominator = n.dot(d);

            if denominator == 0.0 {
                if numerator < 0.0 {
                    return None;
                }
            } else if denominator < 0.0 && numerator < lower * denominator {
                // Entering this half-plane.
                lower = numerator / denominator;
                index = Some(i);
            } else if denominator > 0.0 && numerator < upper * denominator {
                // Leaving this half-plane.
                upper = numerator / denominator;
            }

            if upper < lower {
                return None;
            }
        }

        index.map(|i| RayCastOutput {
            normal: xf.rotate_vector(self.normals[i]),
            fraction: lower,
        })
    }

    pub fn compute_aabb(&self, xf: &Transform) -> AABB {
        let world: Vec<Vec2> = self.vertices.iter().map(|v| xf.apply(*v)).collect();
        AABB::from_points(&world)
            .unwrap_or_default()
            .inflate(self.radius)
    }

    /// Mass properties; the rotational inertia is about the shape origin.
    pub fn compute_mass(&self, density: f64) -> MassData {
        MassData {
            mass: self.calculate_area() * density,
            center: self.centroid,
            inertia: self.calculate_inertia_about_origin() * density,
        }
    }
}

/// Gift-wrapping hull, counter-clockwise, starting from the right-most point.
fn convex_hull(points: &[Vec2]) -> Vec<Vec2> {
    if points.len() < 3 {
        return Vec::new();
    }

    let mut start = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let best = points[start];
        if p.x > best.x || (p.x == best.x && p.y < best.y) {
            start = i;
        }
    }

    let mut hull = Vec::with_capacity(points.len());
    let mut current = start;
    loop {
        hull.push(current);

        let mut next = 0;
        for j in 1..points.len() {
            if next == current {
                next = j;
                continue;
            }
            let r = points[next] - points[current];
            let v = points[j] - points[current];
            let c = r.cross(v);
            // Take the more clockwise candidate; on a tie keep the farther one.
            if c < 0.0 || (c == 0.0 && v.magnitude_squared() > r.magnitude_squared()) {
                next = j;
            }
        }

        current = next;
        if next == start || hull.len() > points.len() {
            break;
        }
    }

    let vertices: Vec<Vec2> = hull.into_iter().map(|i| points[i]).collect();
    let area: f64 = (0..vertices.len())
        .map(|i| vertices[i].cross(vertices[(i + 1) % vertices.len()]))
        .sum();
    if area.abs() < f64::EPSILON {
        return Vec::new();
    }
    vertices
}
