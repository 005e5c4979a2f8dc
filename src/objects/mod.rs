pub mod body;

pub use body::{Body, BodyDef, BodyType};
