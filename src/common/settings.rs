//! Engine-wide tolerances and limits shared by the shape types.

/// Collision and constraint tolerance, in meters.
pub const LINEAR_SLOP: f64 = 0.005;

/// Skin radius carried by polygons and edges.
pub const POLYGON_RADIUS: f64 = 2.0 * LINEAR_SLOP;

/// Upper bound on polygon vertex count.
pub const MAX_POLYGON_VERTICES: usize = 8;
