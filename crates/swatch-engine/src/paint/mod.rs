//! Color and gradient model shared by the stop engine, the adapter and the
//! editing session.
//!
//! Scope:
//! - color representation (straight-alpha sRGB bytes)
//! - gradient stops and the canonical gradient model

pub mod color;
pub mod gradient;

pub use color::{ColorError, Rgba};
pub use gradient::{
    DEFAULT_ANGLE, Direction, GradientKind, GradientModel, GradientStop, RadialShape, StopId,
};
