use crate::constraints::JointHandle;
use crate::error::BridgeError;
use crate::math::{Transform, Vec2};

/// How a body participates in the simulation.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyType {
    #[default]
    Static = 0,
    Kinematic = 1,
    Dynamic = 2,
}

impl TryFrom<i32> for BodyType {
    type Error = BridgeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(BodyType::Static),
            1 => Ok(BodyType::Kinematic),
            2 => Ok(BodyType::Dynamic),
            other => Err(BridgeError::InvalidBodyType(other)),
        }
    }
}

/// Construction parameters for a [`Body`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyDef {
    pub body_type: BodyType,
    pub position: Vec2,
    pub angle: f64,
    pub linear_velocity: Vec2,
    pub angular_velocity: f64,
    pub awake: bool,
}

impl Default for BodyDef {
    fn default() -> Self {
        Self {
            body_type: BodyType::Static,
            position: Vec2::ZERO,
            angle: 0.0,
            linear_velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            awake: true,
        }
    }
}

/// A rigid body as seen by joints: placement, velocity and the joints attached to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    body_type: BodyType,
    transform: Transform,
    linear_velocity: Vec2,
    angular_velocity: f64,
    awake: bool,
    pub(crate) joints: Vec<JointHandle>,
}

impl Body {
    pub fn new(def: &BodyDef) -> Self {
        Body {
            body_type: def.body_type,
            transform: Transform::new(def.position, def.angle),
            linear_velocity: def.linear_velocity,
            angular_velocity: def.angular_velocity,
            awake: def.awake,
            joints: Vec::new(),
        }
    }

    pub fn body_type(&self) -> BodyType {
        self.body_type
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Position of the body origin.
    pub fn position(&self) -> &Vec2 {
        &self.transform.position
    }

    pub fn angle(&self) -> f64 {
        self.transform.rotation
    }

    pub fn set_transform(&mut self, position: Vec2, angle: f64) {
        self.transform = Transform::new(position, angle);
    }

    pub fn world_point(&self, local: Vec2) -> Vec2 {
        self.transform.apply(local)
    }

    pub fn world_vector(&self, local: Vec2) -> Vec2 {
        self.transform.rotate_vector(local)
    }

    pub fn local_point(&self, world: Vec2) -> Vec2 {
        self.transform.apply_inverse(world)
    }

    pub fn local_vector(&self, world: Vec2) -> Vec2 {
        self.transform.inverse_rotate_vector(world)
    }

    pub fn linear_velocity(&self) -> &Vec2 {
        &self.linear_velocity
    }

    /// Ignored for static bodies.
    pub fn set_linear_velocity(&mut self, v: Vec2) {
        if self.body_type == BodyType::Static {
            return;
        }
        if v.magnitude_squared() > 0.0 {
            self.set_awake(true);
        }
        self.linear_velocity = v;
    }

    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    /// Ignored for static bodies.
    pub fn set_angular_velocity(&mut self, w: f64) {
        if self.body_type == BodyType::Static {
            return;
        }
        if w * w > 0.0 {
            self.set_awake(true);
        }
        self.angular_velocity = w;
    }

    pub fn is_awake(&self) -> bool {
        self.awake
    }

    /// Putting a body to sleep also zeroes its velocity.
    pub fn set_awake(&mut self, flag: bool) {
        if flag {
            if !self.awake {
                log::trace!("waking body");
            }
            self.awake = true;
        } else {
            self.awake = false;
            self.linear_velocity = Vec2::ZERO;
            self.angular_velocity = 0.0;
        }
    }

    /// Handles of the joints attached to this body.
    pub fn joints(&self) -> &[JointHandle] {
        &self.joints
    }
}
