//! Exports common to every joint type, addressed by the general joint handle.

use super::{deref, out, run, BridgeStatus};
use crate::math::Vec2;
use crate::world::{JointHandle, PhysicsWorld, RawHandle};

/// Writes the joint's type tag (see `JointType`).
///
/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn Joint_get_type(
    world: *const PhysicsWorld,
    joint: u64,
    out_type: *mut i32,
) -> BridgeStatus {
    run("Joint_get_type", || {
        let joint = deref(world, "world")?.joint(JointHandle::from_raw(joint))?;
        out(out_type, "out_type")?.write(joint.joint_type() as i32);
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn Joint_get_body_a(
    world: *const PhysicsWorld,
    joint: u64,
    out_body: *mut u64,
) -> BridgeStatus {
    run("Joint_get_body_a", || {
        let joint = deref(world, "world")?.joint(JointHandle::from_raw(joint))?;
        out(out_body, "out_body")?.write(joint.body_a().to_raw());
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn Joint_get_body_b(
    world: *const PhysicsWorld,
    joint: u64,
    out_body: *mut u64,
) -> BridgeStatus {
    run("Joint_get_body_b", || {
        let joint = deref(world, "world")?.joint(JointHandle::from_raw(joint))?;
        out(out_body, "out_body")?.write(joint.body_b().to_raw());
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn Joint_get_collide_connected(
    world: *const PhysicsWorld,
    joint: u64,
    out_flag: *mut bool,
) -> BridgeStatus {
    run("Joint_get_collide_connected", || {
        let joint = deref(world, "world")?.joint(JointHandle::from_raw(joint))?;
        out(out_flag, "out_flag")?.write(joint.is_collide_connected());
        Ok(())
    })
}

/// World-space anchor on body A.
///
/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn Joint_get_anchor_a(
    world: *const PhysicsWorld,
    joint: u64,
    out_anchor: *mut Vec2,
) -> BridgeStatus {
    run("Joint_get_anchor_a", || {
        let anchor = deref(world, "world")?.joint_anchor_a(JointHandle::from_raw(joint))?;
        out(out_anchor, "out_anchor")?.write(anchor);
        Ok(())
    })
}

/// World-space anchor on body B.
///
/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn Joint_get_anchor_b(
    world: *const PhysicsWorld,
    joint: u64,
    out_anchor: *mut Vec2,
) -> BridgeStatus {
    run("Joint_get_anchor_b", || {
        let anchor = deref(world, "world")?.joint_anchor_b(JointHandle::from_raw(joint))?;
        out(out_anchor, "out_anchor")?.write(anchor);
        Ok(())
    })
}
