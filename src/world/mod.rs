pub mod handles;
pub mod physics_world;

pub use handles::{BodyHandle, JointHandle, RawHandle, ShapeHandle};
pub use physics_world::PhysicsWorld;
