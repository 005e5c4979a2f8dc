pub mod motor_joint;
pub mod wheel_joint;

pub use motor_joint::{MotorJoint, MotorJointDef, MotorJointHandle, MotorJointMut};
pub use wheel_joint::{WheelJoint, WheelJointDef, WheelJointHandle, WheelJointMut};
pub use crate::world::handles::JointHandle;

use crate::error::{BridgeError, Result};
use crate::math::Vec2;
use crate::objects::Body;
use crate::world::handles::BodyHandle;

/// Joint discriminant, numbered the same way as the native engine's joint type enum.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JointType {
    Wheel = 7,
    Motor = 11,
}

/// A definition value consumed by `World::create_joint`.
pub trait JointDef {
    fn joint_type(&self) -> JointType;

    fn body_a(&self) -> BodyHandle;

    fn body_b(&self) -> BodyHandle;

    fn collide_connected(&self) -> bool;

    /// Builds the type-specific part of the joint from this definition.
    fn build(&self) -> JointKind;
}

/// Type-specific joint state.
#[derive(Debug, Clone, PartialEq)]
pub enum JointKind {
    Motor(MotorJoint),
    Wheel(WheelJoint),
}

/// A constraint between two bodies. The general handle type refers to this.
#[derive(Debug, Clone, PartialEq)]
pub struct Joint {
    body_a: BodyHandle,
    body_b: BodyHandle,
    collide_connected: bool,
    pub(crate) kind: JointKind,
}

impl Joint {
    pub(crate) fn from_def<D: JointDef + ?Sized>(def: &D) -> Self {
        Joint {
            body_a: def.body_a(),
            body_b: def.body_b(),
            collide_connected: def.collide_connected(),
            kind: def.build(),
        }
    }

    pub fn joint_type(&self) -> JointType {
        match self.kind {
            JointKind::Motor(_) => JointType::Motor,
            JointKind::Wheel(_) => JointType::Wheel,
        }
    }

    pub fn body_a(&self) -> BodyHandle {
        self.body_a
    }

    pub fn body_b(&self) -> BodyHandle {
        self.body_b
    }

    /// Whether the two attached bodies may still collide with each other.
    pub fn is_collide_connected(&self) -> bool {
        self.collide_connected
    }

    /// World anchor on body A.
    pub fn anchor_a(&self, body_a: &Body) -> Vec2 {
        match &self.kind {
            JointKind::Motor(_) => *body_a.position(),
            JointKind::Wheel(wheel) => body_a.world_point(*wheel.local_anchor_a()),
        }
    }

    /// World anchor on body B.
    pub fn anchor_b(&self, body_b: &Body) -> Vec2 {
        match &self.kind {
            JointKind::Motor(_) => *body_b.position(),
            JointKind::Wheel(wheel) => body_b.world_point(*wheel.local_anchor_b()),
        }
    }

    pub fn as_motor(&self) -> Result<&MotorJoint> {
        match &self.kind {
            JointKind::Motor(motor) => Ok(motor),
            _ => Err(self.mismatch(JointType::Motor)),
        }
    }

    pub fn as_wheel(&self) -> Result<&WheelJoint> {
        match &self.kind {
            JointKind::Wheel(wheel) => Ok(wheel),
            _ => Err(self.mismatch(JointType::Wheel)),
        }
    }

    pub(crate) fn mismatch(&self, expected: JointType) -> BridgeError {
        BridgeError::JointTypeMismatch {
            expected,
            found: self.joint_type(),
        }
    }
}

/// Wakes whichever of the two bodies still exist.
pub(crate) fn wake_bodies(
    bodies: &mut slotmap::SlotMap<BodyHandle, Body>,
    body_a: BodyHandle,
    body_b: BodyHandle,
) {
    for handle in [body_a, body_b] {
        if let Some(body) = bodies.get_mut(handle) {
            body.set_awake(true);
        }
    }
}
