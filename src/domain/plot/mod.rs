//! Needle plot semantics: data records, axes, clustering and layout.

pub mod axis;
pub mod engine;
pub mod entities;
pub mod layout;
pub mod value_objects;

pub use axis::{Axis, ScaleKind, Tick};
pub use engine::{HeadHover, PlotScalingEngine, PlotUpdate};
pub use entities::*;
pub use layout::*;
pub use value_objects::*;
