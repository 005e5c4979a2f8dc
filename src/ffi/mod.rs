//! C-linkage binding surface.
//!
//! Every export checks its pointers and handles and reports the outcome as a
//! [`BridgeStatus`]. Results are written through out-parameters, which are only
//! touched on success. Handles cross the boundary as `u64`.
//!
//! # Safety
//!
//! Non-null pointers must be valid and properly aligned for their type. A world
//! pointer must come from `World_new*` and must not be used after `World_drop`.
#![allow(non_snake_case)]

pub mod joint;
pub mod motor_joint;
pub mod shape;
pub mod wheel_joint;

use crate::config::WorldConfig;
use crate::error::BridgeError;
use crate::math::Vec2;
use crate::objects::{BodyDef, BodyType};
use crate::world::{BodyHandle, JointHandle, PhysicsWorld, RawHandle};

/// Outcome of a call across the C surface.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeStatus {
    Ok = 0,
    NullPointer = 1,
    InvalidHandle = 2,
    JointTypeMismatch = 3,
    InvalidShape = 4,
    InvalidChildIndex = 5,
    SameBody = 6,
    InvalidBodyType = 7,
}

impl From<&BridgeError> for BridgeStatus {
    fn from(err: &BridgeError) -> Self {
        match err {
            BridgeError::InvalidHandle(_) => BridgeStatus::InvalidHandle,
            BridgeError::JointTypeMismatch { .. } => BridgeStatus::JointTypeMismatch,
            BridgeError::InvalidShape(_) => BridgeStatus::InvalidShape,
            BridgeError::InvalidChildIndex { .. } => BridgeStatus::InvalidChildIndex,
            BridgeError::SameBody => BridgeStatus::SameBody,
            BridgeError::InvalidBodyType(_) => BridgeStatus::InvalidBodyType,
        }
    }
}

/// Why an export refused a call.
pub(crate) enum Reject {
    Null(&'static str),
    Bridge(BridgeError),
}

impl From<BridgeError> for Reject {
    fn from(err: BridgeError) -> Self {
        Reject::Bridge(err)
    }
}

/// Runs an export body and turns its outcome into a status.
pub(crate) fn run(func: &str, body: impl FnOnce() -> Result<(), Reject>) -> BridgeStatus {
    match body() {
        Ok(()) => BridgeStatus::Ok,
        Err(Reject::Null(arg)) => {
            log::warn!("{func}: null pointer for `{arg}`");
            BridgeStatus::NullPointer
        }
        Err(Reject::Bridge(err)) => {
            log::warn!("{func}: {err}");
            BridgeStatus::from(&err)
        }
    }
}

pub(crate) unsafe fn deref<'a, T>(ptr: *const T, name: &'static str) -> Result<&'a T, Reject> {
    ptr.as_ref().ok_or(Reject::Null(name))
}

pub(crate) unsafe fn deref_mut<'a, T>(ptr: *mut T, name: &'static str) -> Result<&'a mut T, Reject> {
    ptr.as_mut().ok_or(Reject::Null(name))
}

/// Checks an out-parameter before any work is done.
pub(crate) fn out<T>(ptr: *mut T, name: &'static str) -> Result<*mut T, Reject> {
    if ptr.is_null() {
        return Err(Reject::Null(name));
    }
    Ok(ptr)
}

/// C layout of [`BodyDef`]. `body_type` is a plain integer and is checked on use.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawBodyDef {
    pub body_type: i32,
    pub position: Vec2,
    pub angle: f64,
    pub linear_velocity: Vec2,
    pub angular_velocity: f64,
    pub awake: bool,
}

impl From<&BodyDef> for RawBodyDef {
    fn from(def: &BodyDef) -> Self {
        RawBodyDef {
            body_type: def.body_type as i32,
            position: def.position,
            angle: def.angle,
            linear_velocity: def.linear_velocity,
            angular_velocity: def.angular_velocity,
            awake: def.awake,
        }
    }
}

impl TryFrom<&RawBodyDef> for BodyDef {
    type Error = BridgeError;

    fn try_from(raw: &RawBodyDef) -> Result<Self, Self::Error> {
        Ok(BodyDef {
            body_type: BodyType::try_from(raw.body_type)?,
            position: raw.position,
            angle: raw.angle,
            linear_velocity: raw.linear_velocity,
            angular_velocity: raw.angular_velocity,
            awake: raw.awake,
        })
    }
}

/// A static, awake body at the origin.
#[no_mangle]
pub extern "C" fn BodyDef_default() -> RawBodyDef {
    RawBodyDef::from(&BodyDef::default())
}

/// Creates a world with the default configuration. Free it with `World_drop`.
#[no_mangle]
pub extern "C" fn World_new() -> *mut PhysicsWorld {
    Box::into_raw(Box::new(PhysicsWorld::default()))
}

/// Creates a world with the given configuration. Free it with `World_drop`.
#[no_mangle]
pub extern "C" fn World_new_with_config(config: WorldConfig) -> *mut PhysicsWorld {
    Box::into_raw(Box::new(PhysicsWorld::new(config)))
}

/// Destroys a world along with every shape, body and joint it owns.
///
/// # Safety
/// `world` must come from `World_new*` and must not be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn World_drop(world: *mut PhysicsWorld) -> BridgeStatus {
    run("World_drop", || {
        if world.is_null() {
            return Err(Reject::Null("world"));
        }
        drop(Box::from_raw(world));
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn World_get_gravity(
    world: *const PhysicsWorld,
    out_gravity: *mut Vec2,
) -> BridgeStatus {
    run("World_get_gravity", || {
        let world = deref(world, "world")?;
        out(out_gravity, "out_gravity")?.write(world.gravity());
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn World_set_gravity(world: *mut PhysicsWorld, gravity: Vec2) -> BridgeStatus {
    run("World_set_gravity", || {
        deref_mut(world, "world")?.set_gravity(gravity);
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn World_get_body_count(
    world: *const PhysicsWorld,
    out_count: *mut u32,
) -> BridgeStatus {
    run("World_get_body_count", || {
        let world = deref(world, "world")?;
        out(out_count, "out_count")?.write(world.body_count() as u32);
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn World_get_joint_count(
    world: *const PhysicsWorld,
    out_count: *mut u32,
) -> BridgeStatus {
    run("World_get_joint_count", || {
        let world = deref(world, "world")?;
        out(out_count, "out_count")?.write(world.joint_count() as u32);
        Ok(())
    })
}

/// Creates a body and writes its handle to `out_body`.
///
/// An unknown `body_type` is reported as `InvalidBodyType` and no body is created.
///
/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn World_create_body(
    world: *mut PhysicsWorld,
    def: *const RawBodyDef,
    out_body: *mut u64,
) -> BridgeStatus {
    run("World_create_body", || {
        let world = deref_mut(world, "world")?;
        let def = BodyDef::try_from(deref(def, "def")?)?;
        let out_body = out(out_body, "out_body")?;
        out_body.write(world.create_body(&def).to_raw());
        Ok(())
    })
}

/// Destroys a body and every joint attached to it.
///
/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn World_destroy_body(world: *mut PhysicsWorld, body: u64) -> BridgeStatus {
    run("World_destroy_body", || {
        deref_mut(world, "world")?.destroy_body(BodyHandle::from_raw(body))?;
        Ok(())
    })
}

/// Destroys a joint given its general handle.
///
/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn World_destroy_joint(world: *mut PhysicsWorld, joint: u64) -> BridgeStatus {
    run("World_destroy_joint", || {
        deref_mut(world, "world")?.destroy_joint(JointHandle::from_raw(joint))?;
        Ok(())
    })
}
