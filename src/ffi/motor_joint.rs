//! Motor joint exports.

use super::{deref, deref_mut, out, run, BridgeStatus};
use crate::constraints::{MotorJointDef, MotorJointHandle};
use crate::math::Vec2;
use crate::world::{BodyHandle, JointHandle, PhysicsWorld, RawHandle};

/// C layout of [`MotorJointDef`], with bodies as raw handles.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawMotorJointDef {
    pub body_a: u64,
    pub body_b: u64,
    pub collide_connected: bool,
    pub linear_offset: Vec2,
    pub angular_offset: f64,
    pub max_force: f64,
    pub max_torque: f64,
    pub correction_factor: f64,
}

impl From<&MotorJointDef> for RawMotorJointDef {
    fn from(def: &MotorJointDef) -> Self {
        RawMotorJointDef {
            body_a: def.body_a.to_raw(),
            body_b: def.body_b.to_raw(),
            collide_connected: def.collide_connected,
            linear_offset: def.linear_offset,
            angular_offset: def.angular_offset,
            max_force: def.max_force,
            max_torque: def.max_torque,
            correction_factor: def.correction_factor,
        }
    }
}

impl From<&RawMotorJointDef> for MotorJointDef {
    fn from(raw: &RawMotorJointDef) -> Self {
        MotorJointDef {
            body_a: BodyHandle::from_raw(raw.body_a),
            body_b: BodyHandle::from_raw(raw.body_b),
            collide_connected: raw.collide_connected,
            linear_offset: raw.linear_offset,
            angular_offset: raw.angular_offset,
            max_force: raw.max_force,
            max_torque: raw.max_torque,
            correction_factor: raw.correction_factor,
        }
    }
}

fn motor(raw: u64) -> MotorJointHandle {
    MotorJointHandle::from_joint_unchecked(JointHandle::from_raw(raw))
}

/// Creates a motor joint from flat arguments and writes its general handle.
///
/// # Safety
/// See the module documentation.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn World_create_motor_joint(
    world: *mut PhysicsWorld,
    body_a: u64,
    body_b: u64,
    collide_connected: bool,
    linear_offset: Vec2,
    angular_offset: f64,
    max_force: f64,
    max_torque: f64,
    correction_factor: f64,
    out_joint: *mut u64,
) -> BridgeStatus {
    run("World_create_motor_joint", || {
        let world = deref_mut(world, "world")?;
        let out_joint = out(out_joint, "out_joint")?;
        let def = MotorJointDef {
            body_a: BodyHandle::from_raw(body_a),
            body_b: BodyHandle::from_raw(body_b),
            collide_connected,
            linear_offset,
            angular_offset,
            max_force,
            max_torque,
            correction_factor,
        };
        out_joint.write(world.create_joint(&def)?.to_raw());
        Ok(())
    })
}

/// Definition filled with the default tuning and null bodies.
#[no_mangle]
pub extern "C" fn MotorJointDef_default() -> RawMotorJointDef {
    RawMotorJointDef::from(&MotorJointDef::default())
}

/// Sets the bodies and takes the offsets from their current placement.
///
/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn MotorJointDef_initialize(
    world: *const PhysicsWorld,
    def: *mut RawMotorJointDef,
    body_a: u64,
    body_b: u64,
) -> BridgeStatus {
    run("MotorJointDef_initialize", || {
        let world = deref(world, "world")?;
        let raw = deref_mut(def, "def")?;
        let mut def = MotorJointDef::from(&*raw);
        world.initialize_motor_joint_def(
            &mut def,
            BodyHandle::from_raw(body_a),
            BodyHandle::from_raw(body_b),
        )?;
        *raw = RawMotorJointDef::from(&def);
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn World_create_motor_joint_from_def(
    world: *mut PhysicsWorld,
    def: *const RawMotorJointDef,
    out_joint: *mut u64,
) -> BridgeStatus {
    run("World_create_motor_joint_from_def", || {
        let world = deref_mut(world, "world")?;
        let def = MotorJointDef::from(deref(def, "def")?);
        let out_joint = out(out_joint, "out_joint")?;
        out_joint.write(world.create_joint(&def)?.to_raw());
        Ok(())
    })
}

/// Widens a motor joint handle. Handles share one representation, so this is the identity.
#[no_mangle]
pub extern "C" fn MotorJoint_as_joint(joint: u64) -> u64 {
    motor(joint).as_joint().to_raw()
}

/// Checked downcast: fails with `JointTypeMismatch` unless the joint is a motor joint.
///
/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn Joint_as_motor_joint(
    world: *const PhysicsWorld,
    joint: u64,
    out_joint: *mut u64,
) -> BridgeStatus {
    run("Joint_as_motor_joint", || {
        let handle = deref(world, "world")?.as_motor_joint(JointHandle::from_raw(joint))?;
        out(out_joint, "out_joint")?.write(handle.as_joint().to_raw());
        Ok(())
    })
}

/// Downcast without a type check. Accessors still reject a wrong joint type.
#[no_mangle]
pub extern "C" fn Joint_as_motor_joint_unchecked(joint: u64) -> u64 {
    motor(joint).as_joint().to_raw()
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn MotorJoint_set_linear_offset(
    world: *mut PhysicsWorld,
    joint: u64,
    offset: *const Vec2,
) -> BridgeStatus {
    run("MotorJoint_set_linear_offset", || {
        let world = deref_mut(world, "world")?;
        let offset = *deref(offset, "offset")?;
        world.motor_joint_mut(motor(joint))?.set_linear_offset(offset);
        Ok(())
    })
}

/// Writes a pointer to the stored offset. It stays valid until the world is next mutated.
///
/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn MotorJoint_get_linear_offset(
    world: *const PhysicsWorld,
    joint: u64,
    out_offset: *mut *const Vec2,
) -> BridgeStatus {
    run("MotorJoint_get_linear_offset", || {
        let state = deref(world, "world")?.motor_joint(motor(joint))?;
        out(out_offset, "out_offset")?.write(state.linear_offset());
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn MotorJoint_set_angular_offset(
    world: *mut PhysicsWorld,
    joint: u64,
    offset: f64,
) -> BridgeStatus {
    run("MotorJoint_set_angular_offset", || {
        deref_mut(world, "world")?
            .motor_joint_mut(motor(joint))?
            .set_angular_offset(offset);
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn MotorJoint_get_angular_offset(
    world: *const PhysicsWorld,
    joint: u64,
    out_offset: *mut f64,
) -> BridgeStatus {
    run("MotorJoint_get_angular_offset", || {
        let state = deref(world, "world")?.motor_joint(motor(joint))?;
        out(out_offset, "out_offset")?.write(state.angular_offset());
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn MotorJoint_set_max_force(
    world: *mut PhysicsWorld,
    joint: u64,
    force: f64,
) -> BridgeStatus {
    run("MotorJoint_set_max_force", || {
        deref_mut(world, "world")?
            .motor_joint_mut(motor(joint))?
            .set_max_force(force);
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn MotorJoint_get_max_force(
    world: *const PhysicsWorld,
    joint: u64,
    out_force: *mut f64,
) -> BridgeStatus {
    run("MotorJoint_get_max_force", || {
        let state = deref(world, "world")?.motor_joint(motor(joint))?;
        out(out_force, "out_force")?.write(state.max_force());
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn MotorJoint_set_max_torque(
    world: *mut PhysicsWorld,
    joint: u64,
    torque: f64,
) -> BridgeStatus {
    run("MotorJoint_set_max_torque", || {
        deref_mut(world, "world")?
            .motor_joint_mut(motor(joint))?
            .set_max_torque(torque);
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn MotorJoint_get_max_torque(
    world: *const PhysicsWorld,
    joint: u64,
    out_torque: *mut f64,
) -> BridgeStatus {
    run("MotorJoint_get_max_torque", || {
        let state = deref(world, "world")?.motor_joint(motor(joint))?;
        out(out_torque, "out_torque")?.write(state.max_torque());
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn MotorJoint_set_correction_factor(
    world: *mut PhysicsWorld,
    joint: u64,
    factor: f64,
) -> BridgeStatus {
    run("MotorJoint_set_correction_factor", || {
        deref_mut(world, "world")?
            .motor_joint_mut(motor(joint))?
            .set_correction_factor(factor);
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn MotorJoint_get_correction_factor(
    world: *const PhysicsWorld,
    joint: u64,
    out_factor: *mut f64,
) -> BridgeStatus {
    run("MotorJoint_get_correction_factor", || {
        let state = deref(world, "world")?.motor_joint(motor(joint))?;
        out(out_factor, "out_factor")?.write(state.correction_factor());
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::{BodyDef_default, World_create_body, World_drop, World_new};

    #[test]
    fn test_raw_def_keeps_defaults() {
        let raw = MotorJointDef_default();
        assert_eq!(raw.max_force, 1.0);
        assert_eq!(raw.correction_factor, 0.3);
        assert_eq!(MotorJointDef::from(&raw), MotorJointDef::default());
    }

    #[test]
    fn test_same_body_is_rejected() {
        unsafe {
            let world = World_new();
            let mut body = 0u64;
            World_create_body(world, &BodyDef_default(), &mut body);
            let mut joint = 0u64;
            let status = World_create_motor_joint(
                world,
                body,
                body,
                false,
                Vec2::ZERO,
                0.0,
                1.0,
                1.0,
                0.3,
                &mut joint,
            );
            assert_eq!(status, BridgeStatus::SameBody);
            World_drop(world);
        }
    }
}
