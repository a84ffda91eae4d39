//! Conversion between gradient text and the canonical model.
//!
//! Loading goes text → [`swatch_grammar::parse`] → AST → [`to_model`];
//! every edit goes back out through [`to_text`]. No AST is kept past
//! loading.

mod emit;
mod load;

pub use emit::{preview_text, to_text};
pub use load::{load_model, parse_model, to_model};
