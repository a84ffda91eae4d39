//! Editing session: the policy layer between UI gestures and the stop
//! engine.

mod editor;
mod error;

pub use editor::GradientEditor;
pub use error::EditError;

/// Fewest stops a gradient may be edited down to.
pub const MIN_STOPS: usize = 2;
