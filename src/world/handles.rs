//! Generation-checked handles to world-owned objects.
//!
//! A handle stays valid until the object behind it is destroyed. After that the
//! slot may be reused, but the stale handle carries the old version and is
//! rejected instead of aliasing the new object.

use slotmap::{new_key_type, Key, KeyData};

new_key_type! {
    /// Handle to a body owned by a world
    pub struct BodyHandle;
    /// General handle to a joint of any type
    pub struct JointHandle;
    /// Handle to a shape owned by a world
    pub struct ShapeHandle;
}

/// Conversion between handles and the `u64` values passed across the C surface.
pub trait RawHandle: Key + From<KeyData> {
    fn to_raw(self) -> u64 {
        self.data().as_ffi()
    }

    fn from_raw(raw: u64) -> Self {
        KeyData::from_ffi(raw).into()
    }
}

impl RawHandle for BodyHandle {}
impl RawHandle for JointHandle {}
impl RawHandle for ShapeHandle {}
