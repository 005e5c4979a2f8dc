use crate::{
    config::WorldConfig,
    constraints::{
        Joint, JointDef, JointHandle, JointKind, JointType, MotorJoint, MotorJointDef,
        MotorJointHandle, MotorJointMut, WheelJoint, WheelJointDef, WheelJointHandle,
        WheelJointMut,
    },
    error::{BridgeError, Result},
    math::vec2::Vec2,
    objects::{Body, BodyDef},
    shapes::Shape,
    world::handles::{BodyHandle, ShapeHandle},
};
use slotmap::SlotMap;

/// Owner of every shape, body and joint reachable through a handle.
pub struct PhysicsWorld {
    config: WorldConfig,
    bodies: SlotMap<BodyHandle, Body>,
    joints: SlotMap<JointHandle, Joint>,
    shapes: SlotMap<ShapeHandle, Shape>,
}

impl PhysicsWorld {
    /// Creates a new, empty world.
    pub fn new(config: WorldConfig) -> Self {
        log::debug!("creating world with gravity {:?}", config.gravity);
        Self {
            config,
            bodies: SlotMap::with_key(),
            joints: SlotMap::with_key(),
            shapes: SlotMap::with_key(),
        }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn gravity(&self) -> Vec2 {
        self.config.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.config.gravity = gravity;
    }

    pub fn set_sleeping_allowed(&mut self, flag: bool) {
        if flag == self.config.allow_sleeping {
            return;
        }
        self.config.allow_sleeping = flag;
        if !flag {
            for body in self.bodies.values_mut() {
                body.set_awake(true);
            }
        }
    }

    pub fn is_sleeping_allowed(&self) -> bool {
        self.config.allow_sleeping
    }

    pub fn set_warm_starting(&mut self, flag: bool) {
        self.config.warm_starting = flag;
    }

    pub fn is_warm_starting(&self) -> bool {
        self.config.warm_starting
    }

    pub fn set_continuous_physics(&mut self, flag: bool) {
        self.config.continuous_physics = flag;
    }

    pub fn is_continuous_physics(&self) -> bool {
        self.config.continuous_physics
    }

    pub fn set_sub_stepping(&mut self, flag: bool) {
        self.config.sub_stepping = flag;
    }

    pub fn is_sub_stepping(&self) -> bool {
        self.config.sub_stepping
    }

    pub fn set_auto_clear_forces(&mut self, flag: bool) {
        self.config.auto_clear_forces = flag;
    }

    pub fn is_auto_clearing_forces(&self) -> bool {
        self.config.auto_clear_forces
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    // ---- bodies ----

    pub fn create_body(&mut self, def: &BodyDef) -> BodyHandle {
        let handle = self.bodies.insert(Body::new(def));
        log::debug!("created {:?} body {:?}", def.body_type, handle);
        handle
    }

    /// Destroys a body together with every joint attached to it.
    pub fn destroy_body(&mut self, handle: BodyHandle) -> Result<Body> {
        let body = self
            .bodies
            .remove(handle)
            .ok_or(BridgeError::InvalidHandle("body"))?;
        for joint in body.joints() {
            self.detach_joint(*joint);
        }
        log::debug!(
            "destroyed body {:?} and {} attached joint(s)",
            handle,
            body.joints().len()
        );
        Ok(body)
    }

    pub fn body(&self, handle: BodyHandle) -> Result<&Body> {
        self.bodies
            .get(handle)
            .ok_or(BridgeError::InvalidHandle("body"))
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Result<&mut Body> {
        self.bodies
            .get_mut(handle)
            .ok_or(BridgeError::InvalidHandle("body"))
    }

    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &Body)> {
        self.bodies.iter()
    }

    // ---- shapes ----

    pub fn create_shape(&mut self, shape: impl Into<Shape>) -> ShapeHandle {
        let shape = shape.into();
        let kind = shape.shape_type();
        let handle = self.shapes.insert(shape);
        log::debug!("created {:?} shape {:?}", kind, handle);
        handle
    }

    /// Consumes the handle and hands back the shape. Any copy of the handle is stale afterwards.
    pub fn destroy_shape(&mut self, handle: ShapeHandle) -> Result<Shape> {
        let shape = self
            .shapes
            .remove(handle)
            .ok_or(BridgeError::InvalidHandle("shape"))?;
        log::debug!("destroyed shape {:?}", handle);
        Ok(shape)
    }

    pub fn shape(&self, handle: ShapeHandle) -> Result<&Shape> {
        self.shapes
            .get(handle)
            .ok_or(BridgeError::InvalidHandle("shape"))
    }

    pub fn shape_mut(&mut self, handle: ShapeHandle) -> Result<&mut Shape> {
        self.shapes
            .get_mut(handle)
            .ok_or(BridgeError::InvalidHandle("shape"))
    }

    // ---- joints ----

    /// Instantiates a joint from a definition value.
    ///
    /// Both bodies must be live and distinct. The joint is recorded on each body
    /// so that destroying either body removes it.
    pub fn create_joint<D: JointDef + ?Sized>(&mut self, def: &D) -> Result<JointHandle> {
        let (a, b) = (def.body_a(), def.body_b());
        self.body(a)?;
        self.body(b)?;
        if a == b {
            return Err(BridgeError::SameBody);
        }

        let handle = self.joints.insert(Joint::from_def(def));
        for body in [a, b] {
            self.bodies[body].joints.push(handle);
        }
        log::debug!(
            "created {:?} joint {:?} between {:?} and {:?}",
            def.joint_type(),
            handle,
            a,
            b
        );
        Ok(handle)
    }

    pub fn create_motor_joint(&mut self, def: &MotorJointDef) -> Result<MotorJointHandle> {
        self.create_joint(def)
            .map(MotorJointHandle::from_joint_unchecked)
    }

    pub fn create_wheel_joint(&mut self, def: &WheelJointDef) -> Result<WheelJointHandle> {
        self.create_joint(def)
            .map(WheelJointHandle::from_joint_unchecked)
    }

    pub fn destroy_joint(&mut self, handle: impl Into<JointHandle>) -> Result<Joint> {
        let handle = handle.into();
        let joint = self
            .detach_joint(handle)
            .ok_or(BridgeError::InvalidHandle("joint"))?;
        log::debug!("destroyed {:?} joint {:?}", joint.joint_type(), handle);
        Ok(joint)
    }

    fn detach_joint(&mut self, handle: JointHandle) -> Option<Joint> {
        let joint = self.joints.remove(handle)?;
        for body in [joint.body_a(), joint.body_b()] {
            if let Some(body) = self.bodies.get_mut(body) {
                body.joints.retain(|j| *j != handle);
            }
        }
        Some(joint)
    }

    pub fn joint(&self, handle: impl Into<JointHandle>) -> Result<&Joint> {
        self.joints
            .get(handle.into())
            .ok_or(BridgeError::InvalidHandle("joint"))
    }

    pub fn joints(&self) -> impl Iterator<Item = (JointHandle, &Joint)> {
        self.joints.iter()
    }

    /// Checked downcast of a general joint handle.
    pub fn as_motor_joint(&self, handle: JointHandle) -> Result<MotorJointHandle> {
        self.joint(handle)?.as_motor()?;
        Ok(MotorJointHandle::from_joint_unchecked(handle))
    }

    /// Checked downcast of a general joint handle.
    pub fn as_wheel_joint(&self, handle: JointHandle) -> Result<WheelJointHandle> {
        self.joint(handle)?.as_wheel()?;
        Ok(WheelJointHandle::from_joint_unchecked(handle))
    }

    pub fn motor_joint(&self, handle: MotorJointHandle) -> Result<&MotorJoint> {
        self.joint(handle)?.as_motor()
    }

    pub fn wheel_joint(&self, handle: WheelJointHandle) -> Result<&WheelJoint> {
        self.joint(handle)?.as_wheel()
    }

    pub fn motor_joint_mut(&mut self, handle: MotorJointHandle) -> Result<MotorJointMut<'_>> {
        let joint = self
            .joints
            .get_mut(handle.as_joint())
            .ok_or(BridgeError::InvalidHandle("joint"))?;
        let (body_a, body_b) = (joint.body_a(), joint.body_b());
        let found = joint.joint_type();
        match &mut joint.kind {
            JointKind::Motor(motor) => Ok(MotorJointMut {
                joint: motor,
                bodies: &mut self.bodies,
                body_a,
                body_b,
            }),
            _ => Err(BridgeError::JointTypeMismatch {
                expected: JointType::Motor,
                found,
            }),
        }
    }

    pub fn wheel_joint_mut(&mut self, handle: WheelJointHandle) -> Result<WheelJointMut<'_>> {
        let joint = self
            .joints
            .get_mut(handle.as_joint())
            .ok_or(BridgeError::InvalidHandle("joint"))?;
        let (body_a, body_b) = (joint.body_a(), joint.body_b());
        let found = joint.joint_type();
        match &mut joint.kind {
            JointKind::Wheel(wheel) => Ok(WheelJointMut {
                joint: wheel,
                bodies: &mut self.bodies,
                body_a,
                body_b,
            }),
            _ => Err(BridgeError::JointTypeMismatch {
                expected: JointType::Wheel,
                found,
            }),
        }
    }

    /// World anchor of a joint on body A.
    pub fn joint_anchor_a(&self, handle: impl Into<JointHandle>) -> Result<Vec2> {
        let joint = self.joint(handle)?;
        Ok(joint.anchor_a(self.body(joint.body_a())?))
    }

    /// World anchor of a joint on body B.
    pub fn joint_anchor_b(&self, handle: impl Into<JointHandle>) -> Result<Vec2> {
        let joint = self.joint(handle)?;
        Ok(joint.anchor_b(self.body(joint.body_b())?))
    }

    pub fn wheel_joint_translation(&self, handle: WheelJointHandle) -> Result<f64> {
        let (wheel, a, b) = self.wheel_with_bodies(handle)?;
        Ok(wheel.joint_translation(a, b))
    }

    pub fn wheel_joint_speed(&self, handle: WheelJointHandle) -> Result<f64> {
        let (wheel, a, b) = self.wheel_with_bodies(handle)?;
        Ok(wheel.joint_speed(a, b))
    }

    fn wheel_with_bodies(&self, handle: WheelJointHandle) -> Result<(&WheelJoint, &Body, &Body)> {
        let joint = self.joint(handle)?;
        let wheel = joint.as_wheel()?;
        Ok((wheel, self.body(joint.body_a())?, self.body(joint.body_b())?))
    }

    /// Fills `def` from the current placement of its two bodies.
    pub fn initialize_motor_joint_def(
        &self,
        def: &mut MotorJointDef,
        body_a: BodyHandle,
        body_b: BodyHandle,
    ) -> Result<()> {
        def.initialize(body_a, self.body(body_a)?, body_b, self.body(body_b)?);
        Ok(())
    }

    /// Fills `def` from a world anchor, a world axis and the placement of its two bodies.
    pub fn initialize_wheel_joint_def(
        &self,
        def: &mut WheelJointDef,
        body_a: BodyHandle,
        body_b: BodyHandle,
        anchor: Vec2,
        axis: Vec2,
    ) -> Result<()> {
        def.initialize(
            body_a,
            self.body(body_a)?,
            body_b,
            self.body(body_b)?,
            anchor,
            axis,
        );
        Ok(())
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}
