pub mod settings;

pub use settings::{LINEAR_SLOP, MAX_POLYGON_VERTICES, POLYGON_RADIUS};
