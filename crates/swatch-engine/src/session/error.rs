use std::fmt;

use crate::paint::{ColorError, StopId};

/// An editor action that was refused. The model is left unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum EditError {
    UnknownStop(StopId),
    /// Removing would leave fewer than [`MIN_STOPS`](super::MIN_STOPS).
    TooFewStops { remaining: usize },
    InvalidColor(ColorError),
    NoActiveDrag,
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::UnknownStop(id) => write!(f, "no stop with id {id}"),
            EditError::TooFewStops { remaining } => {
                write!(f, "a gradient needs at least {} stops, {remaining} left", super::MIN_STOPS)
            }
            EditError::InvalidColor(e) => write!(f, "{e}"),
            EditError::NoActiveDrag => write!(f, "no stop is being dragged"),
        }
    }
}

impl std::error::Error for EditError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EditError::InvalidColor(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ColorError> for EditError {
    fn from(e: ColorError) -> Self {
        EditError::InvalidColor(e)
    }
}
