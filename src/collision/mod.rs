pub mod aabb;
pub mod ray_cast;

// Re-export key types
pub use aabb::AABB;
pub use ray_cast::{RayCastInput, RayCastOutput};
