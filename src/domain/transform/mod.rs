//! Canvas/viewport geometry and the clamped pan/zoom transform.

pub mod engine;
pub mod transition;
pub mod value_objects;

pub use engine::*;
pub use transition::*;
pub use value_objects::*;
