pub mod collision;
pub mod common;
pub mod config;
pub mod constraints;
pub mod error;
pub mod ffi;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{RayCastInput, RayCastOutput, AABB};
pub use config::WorldConfig;
pub use constraints::{
    Joint, JointDef, JointType, MotorJoint, MotorJointDef, MotorJointHandle, WheelJoint,
    WheelJointDef, WheelJointHandle,
};
pub use error::{BridgeError, Result};
pub use ffi::BridgeStatus;
pub use math::{Transform, Vec2};
pub use objects::{Body, BodyDef, BodyType};
pub use shapes::{ChainShape, CircleShape, EdgeShape, MassData, PolygonShape, Shape, ShapeType};
pub use world::{BodyHandle, JointHandle, PhysicsWorld, RawHandle, ShapeHandle};
