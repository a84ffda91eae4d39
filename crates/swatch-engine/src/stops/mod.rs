//! Stop-list engine.
//!
//! Free functions over an ordered `GradientStop` list. They are total on
//! well-formed input: out-of-range positions are clamped, never rejected.
//! Count limits (e.g. keeping at least two stops) belong to the caller; see
//! [`crate::session`].

mod interpolate;
mod list;

pub use interpolate::{
    DegenerateInterpolation, clamp_percent, interpolate_color, try_interpolate_color,
};
pub use list::{
    APPEND_STEP, append_stop, find_color_at_position, insert_stop, is_sorted, remove_stop,
    reposition_stop, sort_stops,
};
