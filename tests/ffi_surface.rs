use approx::assert_relative_eq;
use physics_bridge::ffi::{joint::*, motor_joint::*, shape::*, wheel_joint::*, *};
use physics_bridge::{BodyType, JointType, MassData, PhysicsWorld, Vec2};
use std::ptr;

struct Fixture {
    world: *mut PhysicsWorld,
    ground: u64,
    body: u64,
}

impl Fixture {
    fn new() -> Self {
        let world = World_new();
        let mut ground = 0;
        let mut body = 0;
        unsafe {
            assert_eq!(
                World_create_body(world, &BodyDef_default(), &mut ground),
                BridgeStatus::Ok
            );
            let def = RawBodyDef {
                body_type: BodyType::Dynamic as i32,
                position: Vec2::new(0.0, 2.0),
                ..BodyDef_default()
            };
            assert_eq!(World_create_body(world, &def, &mut body), BridgeStatus::Ok);
        }
        Fixture {
            world,
            ground,
            body,
        }
    }

    fn motor(&self, max_force: f64, max_torque: f64, correction_factor: f64) -> u64 {
        let mut joint = 0;
        let status = unsafe {
            World_create_motor_joint(
                self.world,
                self.ground,
                self.body,
                false,
                Vec2::ZERO,
                0.0,
                max_force,
                max_torque,
                correction_factor,
                &mut joint,
            )
        };
        assert_eq!(status, BridgeStatus::Ok);
        joint
    }

    fn wheel(&self, enable_motor: bool, motor_speed: f64) -> u64 {
        let mut joint = 0;
        let status = unsafe {
            World_create_wheel_joint(
                self.world,
                self.ground,
                self.body,
                true,
                Vec2::new(0.0, 1.0),
                Vec2::ZERO,
                Vec2::new(0.0, 1.0),
                enable_motor,
                10.0,
                motor_speed,
                4.0,
                0.5,
                &mut joint,
            )
        };
        assert_eq!(status, BridgeStatus::Ok);
        joint
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        unsafe {
            World_drop(self.world);
        }
    }
}

unsafe fn get_f64(
    f: unsafe extern "C" fn(*const PhysicsWorld, u64, *mut f64) -> BridgeStatus,
    world: *const PhysicsWorld,
    joint: u64,
) -> f64 {
    let mut value = f64::NAN;
    assert_eq!(f(world, joint, &mut value), BridgeStatus::Ok);
    value
}

#[test]
fn motor_joint_reads_back_construction_values() {
    let fx = Fixture::new();
    let joint = fx.motor(10.0, 5.0, 0.3);
    unsafe {
        assert_eq!(get_f64(MotorJoint_get_max_force, fx.world, joint), 10.0);
        assert_eq!(get_f64(MotorJoint_get_max_torque, fx.world, joint), 5.0);
        assert_eq!(get_f64(MotorJoint_get_correction_factor, fx.world, joint), 0.3);

        let mut kind = 0;
        assert_eq!(Joint_get_type(fx.world, joint, &mut kind), BridgeStatus::Ok);
        assert_eq!(kind, JointType::Motor as i32);
    }
}

#[test]
fn wheel_joint_motor_toggle() {
    let fx = Fixture::new();
    let joint = fx.wheel(true, 2.5);
    unsafe {
        let mut enabled = false;
        WheelJoint_is_motor_enabled(fx.world, joint, &mut enabled);
        assert!(enabled);
        assert_eq!(get_f64(WheelJoint_get_motor_speed, fx.world, joint), 2.5);

        assert_eq!(WheelJoint_enable_motor(fx.world, joint, false), BridgeStatus::Ok);
        WheelJoint_is_motor_enabled(fx.world, joint, &mut enabled);
        assert!(!enabled);

        let mut kind = 0;
        Joint_get_type(fx.world, joint, &mut kind);
        assert_eq!(kind, JointType::Wheel as i32);

        let mut collide = false;
        Joint_get_collide_connected(fx.world, joint, &mut collide);
        assert!(collide);
    }
}

#[test]
fn every_setter_reads_back() {
    let fx = Fixture::new();
    let motor = fx.motor(1.0, 1.0, 0.3);
    let wheel = fx.wheel(false, 0.0);
    unsafe {
        let offset = Vec2::new(-1.5, 3.0);
        MotorJoint_set_linear_offset(fx.world, motor, &offset);
        let mut stored: *const Vec2 = ptr::null();
        assert_eq!(
            MotorJoint_get_linear_offset(fx.world, motor, &mut stored),
            BridgeStatus::Ok
        );
        assert_eq!(*stored, offset);

        MotorJoint_set_angular_offset(fx.world, motor, -0.75);
        MotorJoint_set_max_force(fx.world, motor, -4.0);
        MotorJoint_set_max_torque(fx.world, motor, 123.0);
        MotorJoint_set_correction_factor(fx.world, motor, 2.0);
        assert_eq!(get_f64(MotorJoint_get_angular_offset, fx.world, motor), -0.75);
        assert_eq!(get_f64(MotorJoint_get_max_force, fx.world, motor), -4.0);
        assert_eq!(get_f64(MotorJoint_get_max_torque, fx.world, motor), 123.0);
        assert_eq!(get_f64(MotorJoint_get_correction_factor, fx.world, motor), 2.0);

        WheelJoint_set_motor_speed(fx.world, wheel, 7.0);
        WheelJoint_set_max_motor_torque(fx.world, wheel, 50.0);
        WheelJoint_set_spring_frequency(fx.world, wheel, 0.0);
        WheelJoint_set_spring_damping_ratio(fx.world, wheel, 1.2);
        assert_eq!(get_f64(WheelJoint_get_motor_speed, fx.world, wheel), 7.0);
        assert_eq!(get_f64(WheelJoint_get_max_motor_torque, fx.world, wheel), 50.0);
        assert_eq!(get_f64(WheelJoint_get_spring_frequency, fx.world, wheel), 0.0);
        assert_eq!(get_f64(WheelJoint_get_spring_damping_ratio, fx.world, wheel), 1.2);
    }
}

#[test]
fn wheel_geometry_queries() {
    let fx = Fixture::new();
    let wheel = fx.wheel(false, 0.0);
    unsafe {
        let mut axis: *const Vec2 = ptr::null();
        WheelJoint_get_local_axis_a(fx.world, wheel, &mut axis);
        assert_eq!(*axis, Vec2::new(0.0, 1.0));

        let mut anchor: *const Vec2 = ptr::null();
        WheelJoint_get_local_anchor_a(fx.world, wheel, &mut anchor);
        assert_eq!(*anchor, Vec2::new(0.0, 1.0));

        // Body B sits at (0, 2), one unit above the anchor on A.
        assert_relative_eq!(
            get_f64(WheelJoint_get_joint_translation, fx.world, wheel),
            1.0
        );
        assert_eq!(get_f64(WheelJoint_get_joint_speed, fx.world, wheel), 0.0);

        let mut torque = f64::NAN;
        WheelJoint_get_motor_torque(fx.world, wheel, 60.0, &mut torque);
        assert_eq!(torque, 0.0);

        let mut world_anchor = Vec2::ZERO;
        Joint_get_anchor_b(fx.world, wheel, &mut world_anchor);
        assert_eq!(world_anchor, Vec2::new(0.0, 2.0));
    }
}

#[test]
fn casts_round_trip_and_downcast_is_checked() {
    let fx = Fixture::new();
    let motor = fx.motor(1.0, 1.0, 0.3);
    unsafe {
        let mut narrowed = 0;
        assert_eq!(
            Joint_as_motor_joint(fx.world, motor, &mut narrowed),
            BridgeStatus::Ok
        );
        assert_eq!(MotorJoint_as_joint(narrowed), motor);
        assert_eq!(MotorJoint_as_joint(Joint_as_motor_joint_unchecked(motor)), motor);

        let mut wrong = 0;
        assert_eq!(
            Joint_as_wheel_joint(fx.world, motor, &mut wrong),
            BridgeStatus::JointTypeMismatch
        );
        assert_eq!(wrong, 0);

        // The unchecked path still refuses to read a motor joint as a wheel joint.
        let forced = Joint_as_wheel_joint_unchecked(motor);
        let mut speed = 0.0;
        assert_eq!(
            WheelJoint_get_motor_speed(fx.world, forced, &mut speed),
            BridgeStatus::JointTypeMismatch
        );
    }
}

#[test]
fn joint_defs_through_the_c_layout() {
    let fx = Fixture::new();
    unsafe {
        let mut motor_def = MotorJointDef_default();
        assert_eq!(
            MotorJointDef_initialize(fx.world, &mut motor_def, fx.ground, fx.body),
            BridgeStatus::Ok
        );
        assert_relative_eq!(motor_def.linear_offset.y, 2.0);
        motor_def.max_torque = 8.0;
        let mut motor = 0;
        assert_eq!(
            World_create_motor_joint_from_def(fx.world, &motor_def, &mut motor),
            BridgeStatus::Ok
        );
        assert_eq!(get_f64(MotorJoint_get_max_torque, fx.world, motor), 8.0);

        let mut wheel_def = WheelJointDef_default();
        let (anchor, axis) = (Vec2::new(0.0, 2.0), Vec2::new(1.0, 0.0));
        assert_eq!(
            WheelJointDef_initialize(fx.world, &mut wheel_def, fx.ground, fx.body, &anchor, &axis),
            BridgeStatus::Ok
        );
        assert_eq!(wheel_def.local_anchor_a, Vec2::new(0.0, 2.0));
        assert_eq!(wheel_def.local_anchor_b, Vec2::ZERO);
        let mut wheel = 0;
        assert_eq!(
            World_create_wheel_joint_from_def(fx.world, &wheel_def, &mut wheel),
            BridgeStatus::Ok
        );

        let mut count = 0;
        World_get_joint_count(fx.world, &mut count);
        assert_eq!(count, 2);

        assert_eq!(
            MotorJointDef_initialize(fx.world, &mut motor_def, fx.ground, 0),
            BridgeStatus::InvalidHandle
        );
    }
}

#[test]
fn shape_drop_twice_reports_invalid_handle() {
    let fx = Fixture::new();
    unsafe {
        let mut shape = 0;
        assert_eq!(
            World_create_circle_shape(fx.world, Vec2::ZERO, 0.5, &mut shape),
            BridgeStatus::Ok
        );

        let mut radius = 0.0;
        Shape_set_radius(fx.world, shape, 0.25);
        Shape_get_radius(fx.world, shape, &mut radius);
        assert_eq!(radius, 0.25);

        let mut mass = MassData::default();
        Shape_compute_mass(fx.world, shape, 1.0, &mut mass);
        assert_relative_eq!(mass.mass, std::f64::consts::PI * 0.0625, epsilon = 1e-12);

        assert_eq!(Shape_drop(fx.world, shape), BridgeStatus::Ok);
        assert_eq!(Shape_drop(fx.world, shape), BridgeStatus::InvalidHandle);
        assert_eq!(
            Shape_get_radius(fx.world, shape, &mut radius),
            BridgeStatus::InvalidHandle
        );
    }
}

#[test]
fn body_type_out_of_range_creates_nothing() {
    let fx = Fixture::new();
    unsafe {
        for bad in [-1, 3, 42] {
            let def = RawBodyDef {
                body_type: bad,
                ..BodyDef_default()
            };
            let mut body = 0;
            assert_eq!(
                World_create_body(fx.world, &def, &mut body),
                BridgeStatus::InvalidBodyType
            );
            assert_eq!(body, 0);
        }
        let mut count = 0;
        World_get_body_count(fx.world, &mut count);
        assert_eq!(count, 2);

        let kinematic = RawBodyDef {
            body_type: BodyType::Kinematic as i32,
            ..BodyDef_default()
        };
        let mut body = 0;
        assert_eq!(
            World_create_body(fx.world, &kinematic, &mut body),
            BridgeStatus::Ok
        );
        assert_ne!(body, 0);
    }
}

#[test]
fn destroyed_joint_handles_are_rejected() {
    let fx = Fixture::new();
    let joint = fx.motor(1.0, 1.0, 0.3);
    unsafe {
        assert_eq!(World_destroy_joint(fx.world, joint), BridgeStatus::Ok);
        let mut force = 0.0;
        assert_eq!(
            MotorJoint_get_max_force(fx.world, joint, &mut force),
            BridgeStatus::InvalidHandle
        );
        assert_eq!(
            MotorJoint_set_max_force(ptr::null_mut(), joint, 1.0),
            BridgeStatus::NullPointer
        );
    }
}
