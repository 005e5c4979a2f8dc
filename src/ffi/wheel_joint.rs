//! Wheel joint exports.

use super::{deref, deref_mut, out, run, BridgeStatus};
use crate::constraints::{WheelJointDef, WheelJointHandle};
use crate::math::Vec2;
use crate::world::{BodyHandle, JointHandle, PhysicsWorld, RawHandle};

/// C layout of [`WheelJointDef`], with bodies as raw handles.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawWheelJointDef {
    pub body_a: u64,
    pub body_b: u64,
    pub collide_connected: bool,
    pub local_anchor_a: Vec2,
    pub local_anchor_b: Vec2,
    pub local_axis_a: Vec2,
    pub enable_motor: bool,
    pub max_motor_torque: f64,
    pub motor_speed: f64,
    pub frequency: f64,
    pub damping_ratio: f64,
}

impl From<&WheelJointDef> for RawWheelJointDef {
    fn from(def: &WheelJointDef) -> Self {
        RawWheelJointDef {
            body_a: def.body_a.to_raw(),
            body_b: def.body_b.to_raw(),
            collide_connected: def.collide_connected,
            local_anchor_a: def.local_anchor_a,
            local_anchor_b: def.local_anchor_b,
            local_axis_a: def.local_axis_a,
            enable_motor: def.enable_motor,
            max_motor_torque: def.max_motor_torque,
            motor_speed: def.motor_speed,
            frequency: def.frequency,
            damping_ratio: def.damping_ratio,
        }
    }
}

impl From<&RawWheelJointDef> for WheelJointDef {
    fn from(raw: &RawWheelJointDef) -> Self {
        WheelJointDef {
            body_a: BodyHandle::from_raw(raw.body_a),
            body_b: BodyHandle::from_raw(raw.body_b),
            collide_connected: raw.collide_connected,
            local_anchor_a: raw.local_anchor_a,
            local_anchor_b: raw.local_anchor_b,
            local_axis_a: raw.local_axis_a,
            enable_motor: raw.enable_motor,
            max_motor_torque: raw.max_motor_torque,
            motor_speed: raw.motor_speed,
            frequency: raw.frequency,
            damping_ratio: raw.damping_ratio,
        }
    }
}

fn wheel(raw: u64) -> WheelJointHandle {
    WheelJointHandle::from_joint_unchecked(JointHandle::from_raw(raw))
}

/// Creates a wheel joint from flat arguments and writes its general handle.
///
/// # Safety
/// See the module documentation.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn World_create_wheel_joint(
    world: *mut PhysicsWorld,
    body_a: u64,
    body_b: u64,
    collide_connected: bool,
    local_anchor_a: Vec2,
    local_anchor_b: Vec2,
    local_axis_a: Vec2,
    enable_motor: bool,
    max_motor_torque: f64,
    motor_speed: f64,
    frequency: f64,
    damping_ratio: f64,
    out_joint: *mut u64,
) -> BridgeStatus {
    run("World_create_wheel_joint", || {
        let world = deref_mut(world, "world")?;
        let out_joint = out(out_joint, "out_joint")?;
        let def = WheelJointDef {
            body_a: BodyHandle::from_raw(body_a),
            body_b: BodyHandle::from_raw(body_b),
            collide_connected,
            local_anchor_a,
            local_anchor_b,
            local_axis_a,
            enable_motor,
            max_motor_torque,
            motor_speed,
            frequency,
            damping_ratio,
        };
        out_joint.write(world.create_joint(&def)?.to_raw());
        Ok(())
    })
}

/// Definition filled with the default tuning and null bodies.
#[no_mangle]
pub extern "C" fn WheelJointDef_default() -> RawWheelJointDef {
    RawWheelJointDef::from(&WheelJointDef::default())
}

/// Sets the bodies and derives local anchors and axis from a world anchor and axis.
///
/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn WheelJointDef_initialize(
    world: *const PhysicsWorld,
    def: *mut RawWheelJointDef,
    body_a: u64,
    body_b: u64,
    anchor: *const Vec2,
    axis: *const Vec2,
) -> BridgeStatus {
    run("WheelJointDef_initialize", || {
        let world = deref(world, "world")?;
        let raw = deref_mut(def, "def")?;
        let (anchor, axis) = (*deref(anchor, "anchor")?, *deref(axis, "axis")?);
        let mut def = WheelJointDef::from(&*raw);
        world.initialize_wheel_joint_def(
            &mut def,
            BodyHandle::from_raw(body_a),
            BodyHandle::from_raw(body_b),
            anchor,
            axis,
        )?;
        *raw = RawWheelJointDef::from(&def);
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn World_create_wheel_joint_from_def(
    world: *mut PhysicsWorld,
    def: *const RawWheelJointDef,
    out_joint: *mut u64,
) -> BridgeStatus {
    run("World_create_wheel_joint_from_def", || {
        let world = deref_mut(world, "world")?;
        let def = WheelJointDef::from(deref(def, "def")?);
        let out_joint = out(out_joint, "out_joint")?;
        out_joint.write(world.create_joint(&def)?.to_raw());
        Ok(())
    })
}

/// Widens a wheel joint handle; the identity on the raw value.
#[no_mangle]
pub extern "C" fn WheelJoint_as_joint(joint: u64) -> u64 {
    wheel(joint).as_joint().to_raw()
}

/// Checked downcast: fails with `JointTypeMismatch` unless the joint is a wheel joint.
///
/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn Joint_as_wheel_joint(
    world: *const PhysicsWorld,
    joint: u64,
    out_joint: *mut u64,
) -> BridgeStatus {
    run("Joint_as_wheel_joint", || {
        let handle = deref(world, "world")?.as_wheel_joint(JointHandle::from_raw(joint))?;
        out(out_joint, "out_joint")?.write(handle.as_joint().to_raw());
        Ok(())
    })
}

/// Downcast without a type check. Accessors still reject a wrong joint type.
#[no_mangle]
pub extern "C" fn Joint_as_wheel_joint_unchecked(joint: u64) -> u64 {
    wheel(joint).as_joint().to_raw()
}

/// Writes a pointer to the stored anchor, valid until the world is next mutated.
///
/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn WheelJoint_get_local_anchor_a(
    world: *const PhysicsWorld,
    joint: u64,
    out_anchor: *mut *const Vec2,
) -> BridgeStatus {
    run("WheelJoint_get_local_anchor_a", || {
        let state = deref(world, "world")?.wheel_joint(wheel(joint))?;
        out(out_anchor, "out_anchor")?.write(state.local_anchor_a());
        Ok(())
    })
}

/// Writes a pointer to the stored anchor, valid until the world is next mutated.
///
/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn WheelJoint_get_local_anchor_b(
    world: *const PhysicsWorld,
    joint: u64,
    out_anchor: *mut *const Vec2,
) -> BridgeStatus {
    run("WheelJoint_get_local_anchor_b", || {
        let state = deref(world, "world")?.wheel_joint(wheel(joint))?;
        out(out_anchor, "out_anchor")?.write(state.local_anchor_b());
        Ok(())
    })
}

/// Writes a pointer to the stored axis, valid until the world is next mutated.
///
/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn WheelJoint_get_local_axis_a(
    world: *const PhysicsWorld,
    joint: u64,
    out_axis: *mut *const Vec2,
) -> BridgeStatus {
    run("WheelJoint_get_local_axis_a", || {
        let state = deref(world, "world")?.wheel_joint(wheel(joint))?;
        out(out_axis, "out_axis")?.write(state.local_axis_a());
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn WheelJoint_get_joint_translation(
    world: *const PhysicsWorld,
    joint: u64,
    out_translation: *mut f64,
) -> BridgeStatus {
    run("WheelJoint_get_joint_translation", || {
        let translation = deref(world, "world")?.wheel_joint_translation(wheel(joint))?;
        out(out_translation, "out_translation")?.write(translation);
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn WheelJoint_get_joint_speed(
    world: *const PhysicsWorld,
    joint: u64,
    out_speed: *mut f64,
) -> BridgeStatus {
    run("WheelJoint_get_joint_speed", || {
        let speed = deref(world, "world")?.wheel_joint_speed(wheel(joint))?;
        out(out_speed, "out_speed")?.write(speed);
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn WheelJoint_is_motor_enabled(
    world: *const PhysicsWorld,
    joint: u64,
    out_flag: *mut bool,
) -> BridgeStatus {
    run("WheelJoint_is_motor_enabled", || {
        let state = deref(world, "world")?.wheel_joint(wheel(joint))?;
        out(out_flag, "out_flag")?.write(state.is_motor_enabled());
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn WheelJoint_enable_motor(
    world: *mut PhysicsWorld,
    joint: u64,
    flag: bool,
) -> BridgeStatus {
    run("WheelJoint_enable_motor", || {
        deref_mut(world, "world")?
            .wheel_joint_mut(wheel(joint))?
            .enable_motor(flag);
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn WheelJoint_set_motor_speed(
    world: *mut PhysicsWorld,
    joint: u64,
    speed: f64,
) -> BridgeStatus {
    run("WheelJoint_set_motor_speed", || {
        deref_mut(world, "world")?
            .wheel_joint_mut(wheel(joint))?
            .set_motor_speed(speed);
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn WheelJoint_get_motor_speed(
    world: *const PhysicsWorld,
    joint: u64,
    out_speed: *mut f64,
) -> BridgeStatus {
    run("WheelJoint_get_motor_speed", || {
        let state = deref(world, "world")?.wheel_joint(wheel(joint))?;
        out(out_speed, "out_speed")?.write(state.motor_speed());
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn WheelJoint_set_max_motor_torque(
    world: *mut PhysicsWorld,
    joint: u64,
    torque: f64,
) -> BridgeStatus {
    run("WheelJoint_set_max_motor_torque", || {
        deref_mut(world, "world")?
            .wheel_joint_mut(wheel(joint))?
            .set_max_motor_torque(torque);
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn WheelJoint_get_max_motor_torque(
    world: *const PhysicsWorld,
    joint: u64,
    out_torque: *mut f64,
) -> BridgeStatus {
    run("WheelJoint_get_max_motor_torque", || {
        let state = deref(world, "world")?.wheel_joint(wheel(joint))?;
        out(out_torque, "out_torque")?.write(state.max_motor_torque());
        Ok(())
    })
}

/// Motor torque for a step of `1 / inv_dt` seconds.
///
/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn WheelJoint_get_motor_torque(
    world: *const PhysicsWorld,
    joint: u64,
    inv_dt: f64,
    out_torque: *mut f64,
) -> BridgeStatus {
    run("WheelJoint_get_motor_torque", || {
        let state = deref(world, "world")?.wheel_joint(wheel(joint))?;
        out(out_torque, "out_torque")?.write(state.motor_torque(inv_dt));
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn WheelJoint_set_spring_frequency(
    world: *mut PhysicsWorld,
    joint: u64,
    hz: f64,
) -> BridgeStatus {
    run("WheelJoint_set_spring_frequency", || {
        deref_mut(world, "world")?
            .wheel_joint_mut(wheel(joint))?
            .set_spring_frequency(hz);
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn WheelJoint_get_spring_frequency(
    world: *const PhysicsWorld,
    joint: u64,
    out_hz: *mut f64,
) -> BridgeStatus {
    run("WheelJoint_get_spring_frequency", || {
        let state = deref(world, "world")?.wheel_joint(wheel(joint))?;
        out(out_hz, "out_hz")?.write(state.spring_frequency());
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn WheelJoint_set_spring_damping_ratio(
    world: *mut PhysicsWorld,
    joint: u64,
    ratio: f64,
) -> BridgeStatus {
    run("WheelJoint_set_spring_damping_ratio", || {
        deref_mut(world, "world")?
            .wheel_joint_mut(wheel(joint))?
            .set_spring_damping_ratio(ratio);
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn WheelJoint_get_spring_damping_ratio(
    world: *const PhysicsWorld,
    joint: u64,
    out_ratio: *mut f64,
) -> BridgeStatus {
    run("WheelJoint_get_spring_damping_ratio", || {
        let state = deref(world, "world")?.wheel_joint(wheel(joint))?;
        out(out_ratio, "out_ratio")?.write(state.spring_damping_ratio());
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_def_keeps_defaults() {
        let raw = WheelJointDef_default();
        assert_eq!(raw.local_axis_a, Vec2::UNIT_X);
        assert_eq!(raw.frequency, 2.0);
        assert!(!raw.enable_motor);
        assert_eq!(WheelJointDef::from(&raw), WheelJointDef::default());
    }

    #[test]
    fn test_unchecked_casts_are_identity() {
        let raw = 0x0000_0003_0000_0005u64;
        assert_eq!(WheelJoint_as_joint(Joint_as_wheel_joint_unchecked(raw)), raw);
    }
}
