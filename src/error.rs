//! Error types for the binding surface

use crate::constraints::JointType;
use thiserror::Error;

/// Failures the bridge can report in place of undefined behaviour.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BridgeError {
    /// The handle was never issued, or the object behind it has been destroyed
    #[error("invalid {0} handle")]
    InvalidHandle(&'static str),

    /// A general joint handle does not refer to the requested joint kind
    #[error("joint type mismatch: expected {expected:?}, found {found:?}")]
    JointTypeMismatch { expected: JointType, found: JointType },

    /// Shape construction was given unusable geometry
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    /// A joint was asked to connect a body to itself
    #[error("joint bodies must be distinct")]
    SameBody,

    /// Child index out of range for a composite shape
    #[error("child index {index} out of range for shape with {count} children")]
    InvalidChildIndex { index: usize, count: usize },

    /// A body definition from C carried an unknown body type
    #[error("invalid body type {0}")]
    InvalidBodyType(i32),
}

/// Result type for bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;
