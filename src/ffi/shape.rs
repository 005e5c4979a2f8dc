//! Shape exports. Shapes live in the world's shape registry and are addressed by handle.

use super::{deref, deref_mut, out, run, BridgeStatus, Reject};
use crate::collision::{RayCastInput, RayCastOutput, AABB};
use crate::math::{Transform, Vec2};
use crate::shapes::{ChainShape, CircleShape, EdgeShape, MassData, PolygonShape};
use crate::world::{PhysicsWorld, RawHandle, ShapeHandle};
use std::slice;

unsafe fn points<'a>(ptr: *const Vec2, count: u32) -> Result<&'a [Vec2], Reject> {
    if ptr.is_null() {
        return Err(Reject::Null("points"));
    }
    Ok(slice::from_raw_parts(ptr, count as usize))
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn World_create_circle_shape(
    world: *mut PhysicsWorld,
    center: Vec2,
    radius: f64,
    out_shape: *mut u64,
) -> BridgeStatus {
    run("World_create_circle_shape", || {
        let world = deref_mut(world, "world")?;
        let out_shape = out(out_shape, "out_shape")?;
        out_shape.write(world.create_shape(CircleShape::new(center, radius)).to_raw());
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn World_create_edge_shape(
    world: *mut PhysicsWorld,
    v1: Vec2,
    v2: Vec2,
    out_shape: *mut u64,
) -> BridgeStatus {
    run("World_create_edge_shape", || {
        let world = deref_mut(world, "world")?;
        let out_shape = out(out_shape, "out_shape")?;
        out_shape.write(world.create_shape(EdgeShape::new(v1, v2)).to_raw());
        Ok(())
    })
}

/// Builds the convex hull of `count` points.
///
/// # Safety
/// `points` must point to `count` readable `Vec2` values.
#[no_mangle]
pub unsafe extern "C" fn World_create_polygon_shape(
    world: *mut PhysicsWorld,
    points: *const Vec2,
    count: u32,
    out_shape: *mut u64,
) -> BridgeStatus {
    run("World_create_polygon_shape", || {
        let world = deref_mut(world, "world")?;
        let polygon = PolygonShape::new(self::points(points, count)?)?;
        out(out_shape, "out_shape")?.write(world.create_shape(polygon).to_raw());
        Ok(())
    })
}

/// Axis-aligned box centred on the origin.
///
/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn World_create_box_shape(
    world: *mut PhysicsWorld,
    half_width: f64,
    half_height: f64,
    out_shape: *mut u64,
) -> BridgeStatus {
    run("World_create_box_shape", || {
        let world = deref_mut(world, "world")?;
        let out_shape = out(out_shape, "out_shape")?;
        out_shape.write(
            world
                .create_shape(PolygonShape::new_box(half_width, half_height))
                .to_raw(),
        );
        Ok(())
    })
}

/// Open chain, or a closed loop when `is_loop` is set.
///
/// # Safety
/// `points` must point to `count` readable `Vec2` values.
#[no_mangle]
pub unsafe extern "C" fn World_create_chain_shape(
    world: *mut PhysicsWorld,
    points: *const Vec2,
    count: u32,
    is_loop: bool,
    out_shape: *mut u64,
) -> BridgeStatus {
    run("World_create_chain_shape", || {
        let world = deref_mut(world, "world")?;
        let points = self::points(points, count)?;
        let chain = if is_loop {
            ChainShape::new_loop(points)?
        } else {
            ChainShape::new_chain(points)?
        };
        out(out_shape, "out_shape")?.write(world.create_shape(chain).to_raw());
        Ok(())
    })
}

/// Destroys a shape. The handle is stale afterwards; dropping it again
/// reports `InvalidHandle`.
///
/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn Shape_drop(world: *mut PhysicsWorld, shape: u64) -> BridgeStatus {
    run("Shape_drop", || {
        deref_mut(world, "world")?.destroy_shape(ShapeHandle::from_raw(shape))?;
        Ok(())
    })
}

/// Writes the shape's type tag (see `ShapeType`).
///
/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn Shape_get_type(
    world: *const PhysicsWorld,
    shape: u64,
    out_type: *mut i32,
) -> BridgeStatus {
    run("Shape_get_type", || {
        let shape = deref(world, "world")?.shape(ShapeHandle::from_raw(shape))?;
        out(out_type, "out_type")?.write(shape.shape_type() as i32);
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn Shape_get_child_count(
    world: *const PhysicsWorld,
    shape: u64,
    out_count: *mut u32,
) -> BridgeStatus {
    run("Shape_get_child_count", || {
        let shape = deref(world, "world")?.shape(ShapeHandle::from_raw(shape))?;
        out(out_count, "out_count")?.write(shape.child_count() as u32);
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn Shape_test_point(
    world: *const PhysicsWorld,
    shape: u64,
    xf: *const Transform,
    point: *const Vec2,
    out_hit: *mut bool,
) -> BridgeStatus {
    run("Shape_test_point", || {
        let shape = deref(world, "world")?.shape(ShapeHandle::from_raw(shape))?;
        let hit = shape.test_point(deref(xf, "xf")?, *deref(point, "point")?);
        out(out_hit, "out_hit")?.write(hit);
        Ok(())
    })
}

/// Casts a ray against one child. `out_output` is written only when
/// `*out_hit` is true.
///
/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn Shape_ray_cast(
    world: *const PhysicsWorld,
    shape: u64,
    input: *const RayCastInput,
    xf: *const Transform,
    child_index: u32,
    out_hit: *mut bool,
    out_output: *mut RayCastOutput,
) -> BridgeStatus {
    run("Shape_ray_cast", || {
        let shape = deref(world, "world")?.shape(ShapeHandle::from_raw(shape))?;
        let (input, xf) = (deref(input, "input")?, deref(xf, "xf")?);
        let out_hit = out(out_hit, "out_hit")?;
        let out_output = out(out_output, "out_output")?;

        let hit = shape.ray_cast(input, xf, child_index as usize)?;
        out_hit.write(hit.is_some());
        if let Some(output) = hit {
            out_output.write(output);
        }
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn Shape_compute_aabb(
    world: *const PhysicsWorld,
    shape: u64,
    xf: *const Transform,
    child_index: u32,
    out_aabb: *mut AABB,
) -> BridgeStatus {
    run("Shape_compute_aabb", || {
        let shape = deref(world, "world")?.shape(ShapeHandle::from_raw(shape))?;
        let aabb = shape.compute_aabb(deref(xf, "xf")?, child_index as usize)?;
        out(out_aabb, "out_aabb")?.write(aabb);
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn Shape_compute_mass(
    world: *const PhysicsWorld,
    shape: u64,
    density: f64,
    out_mass: *mut MassData,
) -> BridgeStatus {
    run("Shape_compute_mass", || {
        let shape = deref(world, "world")?.shape(ShapeHandle::from_raw(shape))?;
        out(out_mass, "out_mass")?.write(shape.compute_mass(density));
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn Shape_get_radius(
    world: *const PhysicsWorld,
    shape: u64,
    out_radius: *mut f64,
) -> BridgeStatus {
    run("Shape_get_radius", || {
        let shape = deref(world, "world")?.shape(ShapeHandle::from_raw(shape))?;
        out(out_radius, "out_radius")?.write(shape.radius());
        Ok(())
    })
}

/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn Shape_set_radius(
    world: *mut PhysicsWorld,
    shape: u64,
    radius: f64,
) -> BridgeStatus {
    run("Shape_set_radius", || {
        deref_mut(world, "world")?
            .shape_mut(ShapeHandle::from_raw(shape))?
            .set_radius(radius);
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::World_new;
    use crate::shapes::ShapeType;
    use std::ptr;

    #[test]
    fn test_polygon_rejects_too_few_points() {
        unsafe {
            let world = World_new();
            let pts = [Vec2::ZERO, Vec2::UNIT_X];
            let mut shape = 0u64;
            assert_eq!(
                World_create_polygon_shape(world, pts.as_ptr(), 2, &mut shape),
                BridgeStatus::InvalidShape
            );
            assert_eq!(
                World_create_polygon_shape(world, ptr::null(), 3, &mut shape),
                BridgeStatus::NullPointer
            );
            crate::ffi::World_drop(world);
        }
    }

    #[test]
    fn test_chain_child_queries() {
        unsafe {
            let world = World_new();
            let pts = [Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)];
            let mut shape = 0u64;
            assert_eq!(
                World_create_chain_shape(world, pts.as_ptr(), 3, true, &mut shape),
                BridgeStatus::Ok
            );

            let mut kind = -1;
            Shape_get_type(world, shape, &mut kind);
            assert_eq!(kind, ShapeType::Chain as i32);

            let mut count = 0u32;
            Shape_get_child_count(world, shape, &mut count);
            assert_eq!(count, 3);

            let mut aabb = AABB::default();
            let xf = Transform::identity();
            assert_eq!(
                Shape_compute_aabb(world, shape, &xf, 2, &mut aabb),
                BridgeStatus::Ok
            );
            assert_eq!(
                Shape_compute_aabb(world, shape, &xf, 3, &mut aabb),
                BridgeStatus::InvalidChildIndex
            );
            crate::ffi::World_drop(world);
        }
    }

    #[test]
    fn test_ray_miss_leaves_output_untouched() {
        unsafe {
            let world = World_new();
            let mut shape = 0u64;
            World_create_circle_shape(world, Vec2::ZERO, 1.0, &mut shape);

            let input = RayCastInput::new(Vec2::new(-5.0, 5.0), Vec2::new(5.0, 5.0), 1.0);
            let xf = Transform::identity();
            let mut hit = true;
            let mut output = RayCastOutput {
                normal: Vec2::new(9.0, 9.0),
                fraction: 9.0,
            };
            assert_eq!(
                Shape_ray_cast(world, shape, &input, &xf, 0, &mut hit, &mut output),
                BridgeStatus::Ok
            );
            assert!(!hit);
            assert_eq!(output.fraction, 9.0);
            crate::ffi::World_drop(world);
        }
    }
}
