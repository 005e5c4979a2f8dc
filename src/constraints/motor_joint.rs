use super::{wake_bodies, JointDef, JointHandle, JointKind, JointType};
use crate::math::Vec2;
use crate::objects::Body;
use crate::world::handles::BodyHandle;
use slotmap::SlotMap;
use std::ops::Deref;

/// Typed handle to a motor joint. Widens to [`JointHandle`] with `as_joint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MotorJointHandle(JointHandle);

impl MotorJointHandle {
    pub fn as_joint(self) -> JointHandle {
        self.0
    }

    /// Narrows without looking at the joint. Every access through the result is
    /// still type-checked by the world, so a wrong guess surfaces as
    /// `JointTypeMismatch` rather than a misread.
    pub fn from_joint_unchecked(handle: JointHandle) -> Self {
        MotorJointHandle(handle)
    }
}

impl From<MotorJointHandle> for JointHandle {
    fn from(handle: MotorJointHandle) -> Self {
        handle.0
    }
}

/// Parameters for a motor joint, which drives body B toward a target offset
/// from body A.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorJointDef {
    pub body_a: BodyHandle,
    pub body_b: BodyHandle,
    pub collide_connected: bool,
    /// Position of body B in body A's frame.
    pub linear_offset: Vec2,
    /// Target `angle_b - angle_a`, in radians.
    pub angular_offset: f64,
    pub max_force: f64,
    pub max_torque: f64,
    /// Position correction factor in `[0, 1]`.
    pub correction_factor: f64,
}

impl MotorJointDef {
    pub fn new(body_a: BodyHandle, body_b: BodyHandle) -> Self {
        MotorJointDef {
            body_a,
            body_b,
            ..Default::default()
        }
    }

    /// Takes the offsets from the bodies' current placement.
    pub fn initialize(
        &mut self,
        body_a: BodyHandle,
        a: &Body,
        body_b: BodyHandle,
        b: &Body,
    ) {
        self.body_a = body_a;
        self.body_b = body_b;
        self.linear_offset = a.local_point(*b.position());
        self.angular_offset = b.angle() - a.angle();
    }
}

impl Default for MotorJointDef {
    fn default() -> Self {
        MotorJointDef {
            body_a: BodyHandle::default(),
            body_b: BodyHandle::default(),
            collide_connected: false,
            linear_offset: Vec2::ZERO,
            angular_offset: 0.0,
            max_force: 1.0,
            max_torque: 1.0,
            correction_factor: 0.3,
        }
    }
}

impl JointDef for MotorJointDef {
    fn joint_type(&self) -> JointType {
        JointType::Motor
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
        JointKind::Motor(MotorJoint {
            linear_offset: self.linear_offset,
            angular_offset: self.angular_offset,
            max_force: self.max_force,
            max_torque: self.max_torque,
            correction_factor: self.correction_factor,
        })
    }
}

/// Motor joint state. Values are stored exactly as given; range checks are
/// the solver's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct MotorJoint {
    linear_offset: Vec2,
    angular_offset: f64,
    max_force: f64,
    max_torque: f64,
    correction_factor: f64,
}

impl MotorJoint {
    pub fn linear_offset(&self) -> &Vec2 {
        &self.linear_offset
    }

    pub fn angular_offset(&self) -> f64 {
        self.angular_offset
    }

    pub fn max_force(&self) -> f64 {
        self.max_force
    }

    pub fn max_torque(&self) -> f64 {
        self.max_torque
    }

    pub fn correction_factor(&self) -> f64 {
        self.correction_factor
    }
}

/// Mutable access to a motor joint. Offset changes wake both attached bodies.
pub struct MotorJointMut<'w> {
    pub(crate) joint: &'w mut MotorJoint,
    pub(crate) bodies: &'w mut SlotMap<BodyHandle, Body>,
    pub(crate) body_a: BodyHandle,
    pub(crate) body_b: BodyHandle,
}

impl MotorJointMut<'_> {
    pub fn set_linear_offset(&mut self, offset: Vec2) {
        if offset != self.joint.linear_offset {
            wake_bodies(self.bodies, self.body_a, self.body_b);
            self.joint.linear_offset = offset;
        }
    }

    pub fn set_angular_offset(&mut self, offset: f64) {
        if offset != self.joint.angular_offset {
            wake_bodies(self.bodies, self.body_a, self.body_b);
            self.joint.angular_offset = offset;
        }
    }

    pub fn set_max_force(&mut self, force: f64) {
        self.joint.max_force = force;
    }

    pub fn set_max_torque(&mut self, torque: f64) {
        self.joint.max_torque = torque;
    }

    pub fn set_correction_factor(&mut self, factor: f64) {
        self.joint.correction_factor = factor;
    }
}

impl Deref for MotorJointMut<'_> {
    type Target = MotorJoint;

    fn deref(&self) -> &MotorJoint {
        self.joint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{BodyDef, BodyType};
    use std::f64::consts::PI;
    const EPSILON: f64 = 1e-9;

    fn dynamic(position: Vec2, angle: f64) -> Body {
        Body::new(&BodyDef {
            body_type: BodyType::Dynamic,
            position,
            angle,
            ..BodyDef::default()
        })
    }

    #[test]
    fn test_motor_def_defaults() {
        let def = MotorJointDef::default();
        assert_eq!(def.linear_offset, Vec2::ZERO);
        assert_eq!(def.max_force, 1.0);
        assert_eq!(def.max_torque, 1.0);
        assert!((def.correction_factor - 0.3).abs() < EPSILON);
        assert!(!def.collide_connected);
    }

    #[test]
    fn test_motor_def_initialize_from_placement() {
        let mut bodies: SlotMap<BodyHandle, Body> = SlotMap::with_key();
        let a = bodies.insert(dynamic(Vec2::new(1.0, 0.0), PI / 2.0));
        let b = bodies.insert(dynamic(Vec2::new(1.0, 2.0), PI));

        let mut def = MotorJointDef::default();
        def.initialize(a, &bodies[a], b, &bodies[b]);
        assert_eq!(def.body_a, a);
        assert_eq!(def.body_b, b);
        // B sits 2 units "up" from A, which is A's local +x after a quarter turn.
        assert!((def.linear_offset.x - 2.0).abs() < EPSILON);
        assert!(def.linear_offset.y.abs() < EPSILON);
        assert!((def.angular_offset - PI / 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_motor_build_copies_every_field() {
        let def = MotorJointDef {
            linear_offset: Vec2::new(1.0, -1.0),
            angular_offset: 0.25,
            max_force: 10.0,
            max_torque: 5.0,
            correction_factor: 0.3,
            ..MotorJointDef::default()
        };
        let JointKind::Motor(joint) = def.build() else {
            panic!("motor def built another joint kind");
        };
        assert_eq!(*joint.linear_offset(), Vec2::new(1.0, -1.0));
        assert_eq!(joint.angular_offset(), 0.25);
        assert_eq!(joint.max_force(), 10.0);
        assert_eq!(joint.max_torque(), 5.0);
        assert_eq!(joint.correction_factor(), 0.3);
    }

    #[test]
    fn test_motor_mut_wakes_only_on_offset_change() {
        let mut bodies: SlotMap<BodyHandle, Body> = SlotMap::with_key();
        let a = bodies.insert(dynamic(Vec2::ZERO, 0.0));
        let b = bodies.insert(dynamic(Vec2::UNIT_X, 0.0));
        let JointKind::Motor(mut joint) = MotorJointDef::new(a, b).build() else {
            panic!("motor def built another joint kind");
        };
        bodies[a].set_awake(false);
        bodies[b].set_awake(false);

        {
            let mut view = MotorJointMut {
                joint: &mut joint,
                bodies: &mut bodies,
                body_a: a,
                body_b: b,
            };
            view.set_max_force(-4.0);
            view.set_linear_offset(Vec2::ZERO);
            assert_eq!(view.max_force(), -4.0);
        }
        assert!(!bodies[a].is_awake());

        {
            let mut view = MotorJointMut {
                joint: &mut joint,
                bodies: &mut bodies,
                body_a: a,
                body_b: b,
            };
            view.set_angular_offset(1.5);
        }
        assert!(bodies[a].is_awake());
        assert!(bodies[b].is_awake());
        assert_eq!(joint.angular_offset(), 1.5);
    }
}
