use super::{wake_bodies, JointDef, JointHandle, JointKind, JointType};
use crate::math::Vec2;
use crate::objects::Body;
use crate::world::handles::BodyHandle;
use slotmap::SlotMap;
use std::ops::Deref;

/// Typed handle to a wheel joint. Widens to [`JointHandle`] with `as_joint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WheelJointHandle(JointHandle);

impl WheelJointHandle {
    pub fn as_joint(self) -> JointHandle {
        self.0
    }

    /// Narrows without looking at the joint; the world still checks the type on access.
    pub fn from_joint_unchecked(handle: JointHandle) -> Self {
        WheelJointHandle(handle)
    }
}

impl From<WheelJointHandle> for JointHandle {
    fn from(handle: WheelJointHandle) -> Self {
        handle.0
    }
}

/// Parameters for a wheel joint: body B slides along an axis fixed in body A,
/// held by a spring, and spins freely or under a motor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelJointDef {
    pub body_a: BodyHandle,
    pub body_b: BodyHandle,
    pub collide_connected: bool,
    pub local_anchor_a: Vec2,
    pub local_anchor_b: Vec2,
    /// Translation axis in body A's frame.
    pub local_axis_a: Vec2,
    pub enable_motor: bool,
    pub max_motor_torque: f64,
    pub motor_speed: f64,
    /// Suspension spring frequency, in Hertz.
    pub frequency: f64,
    pub damping_ratio: f64,
}

impl WheelJointDef {
    pub fn new(body_a: BodyHandle, body_b: BodyHandle) -> Self {
        WheelJointDef {
            body_a,
            body_b,
            ..Default::default()
        }
    }

    /// Derives the local anchors and axis from a world anchor and world axis.
    pub fn initialize(
        &mut self,
        body_a: BodyHandle,
        a: &Body,
        body_b: BodyHandle,
        b: &Body,
        anchor: Vec2,
        axis: Vec2,
    ) {
        self.body_a = body_a;
        self.body_b = body_b;
        self.local_anchor_a = a.local_point(anchor);
        self.local_anchor_b = b.local_point(anchor);
        self.local_axis_a = a.local_vector(axis);
    }
}

impl Default for WheelJointDef {
    fn default() -> Self {
        WheelJointDef {
            body_a: BodyHandle::default(),
            body_b: BodyHandle::default(),
            collide_connected: false,
            local_anchor_a: Vec2::ZERO,
            local_anchor_b: Vec2::ZERO,
            local_axis_a: Vec2::UNIT_X,
            enable_motor: false,
            max_motor_torque: 0.0,
            motor_speed: 0.0,
            frequency: 2.0,
            damping_ratio: 0.7,
        }
    }
}

impl JointDef for WheelJointDef {
    fn joint_type(&self) -> JointType {
        JointType::Wheel
    }

    fn body_a(&self) -> BodyHandle {
        self.body_a
    }

    fn body_b(&self) -> BodyHandle {
        self.body_b
    }

    fn collide_connected(&self) -> bool {
        self.collide_connected
    }

    fn build(&self) -> JointKind {
        JointKind::Wheel(WheelJoint {
            local_anchor_a: self.local_anchor_a,
            local_anchor_b: self.local_anchor_b,
            local_axis_a: self.local_axis_a,
            enable_motor: self.enable_motor,
            max_motor_torque: self.max_motor_torque,
            motor_speed: self.motor_speed,
            frequency: self.frequency,
            damping_ratio: self.damping_ratio,
            motor_impulse: 0.0,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WheelJoint {
    local_anchor_a: Vec2,
    local_anchor_b: Vec2,
    local_axis_a: Vec2,
    enable_motor: bool,
    max_motor_torque: f64,
    motor_speed: f64,
    frequency: f64,
    damping_ratio: f64,
    // Last motor impulse applied by a solver; nothing here writes it.
    motor_impulse: f64,
}

impl WheelJoint {
    pub fn local_anchor_a(&self) -> &Vec2 {
        &self.local_anchor_a
    }

    pub fn local_anchor_b(&self) -> &Vec2 {
        &self.local_anchor_b
    }

    pub fn local_axis_a(&self) -> &Vec2 {
        &self.local_axis_a
    }

    /// Separation of the two anchors measured along the axis, in world space.
    pub fn joint_translation(&self, a: &Body, b: &Body) -> f64 {
        let p_a = a.world_point(self.local_anchor_a);
        let p_b = b.world_point(self.local_anchor_b);
        let axis = a.world_vector(self.local_axis_a);
        (p_b - p_a).dot(axis)
    }

    /// Relative angular velocity of the wheel, `w_b - w_a`.
    pub fn joint_speed(&self, a: &Body, b: &Body) -> f64 {
        b.angular_velocity() - a.angular_velocity()
    }

    pub fn is_motor_enabled(&self) -> bool {
        self.enable_motor
    }

    pub fn motor_speed(&self) -> f64 {
        self.motor_speed
    }

    pub fn max_motor_torque(&self) -> f64 {
        self.max_motor_torque
    }

    /// Motor torque given the inverse time step.
    pub fn motor_torque(&self, inv_dt: f64) -> f64 {
        inv_dt * self.motor_impulse
    }

    pub fn spring_frequency(&self) -> f64 {
        self.frequency
    }

    pub fn spring_damping_ratio(&self) -> f64 {
        self.damping_ratio
    }
}

/// Mutable access to a wheel joint. Motor changes wake both attached bodies.
pub struct WheelJointMut<'w> {
    pub(crate) joint: &'w mut WheelJoint,
    pub(crate) bodies: &'w mut SlotMap<BodyHandle, Body>,
    pub(crate) body_a: BodyHandle,
    pub(crate) body_b: BodyHandle,
}

impl WheelJointMut<'_> {
    pub fn enable_motor(&mut self, flag: bool) {
        wake_bodies(self.bodies, self.body_a, self.body_b);
        self.joint.enable_motor = flag;
    }

    pub fn set_motor_speed(&mut self, speed: f64) {
        wake_bodies(self.bodies, self.body_a, self.body_b);
        self.joint.motor_speed = speed;
    }

    pub fn set_max_motor_torque(&mut self, torque: f64) {
        wake_bodies(self.bodies, self.body_a, self.body_b);
        self.joint.max_motor_torque = torque;
    }

    pub fn set_spring_frequency(&mut self, frequency: f64) {
        self.joint.frequency = frequency;
    }

    pub fn set_spring_damping_ratio(&mut self, ratio: f64) {
        self.joint.damping_ratio = ratio;
    }
}

impl Deref for WheelJointMut<'_> {
    type Target = WheelJoint;

    fn deref(&self) -> &WheelJoint {
        self.joint
    }
}
