//! Scanner, parser, and AST for CSS-style gradient text.
//!
//! Covers `linear-gradient`, `radial-gradient` and their `repeating-`
//! variants (with optional vendor prefixes). The crate only turns text into
//! a typed tree; interpreting that tree is up to the caller.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `GradientDefinition`, `ColorStop`, `ColorValue`, `Orientation`, `Distance` |
//! | [`error`] | `SyntaxError` |
//! | [`scanner`] | `Scanner`, `Checkpoint`, terminal patterns |
//! | [`parser`] | `parse` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use swatch_grammar::{parse, ast::GradientFunction};
//!
//! let defs = parse("linear-gradient(90deg, rgba(255,0,0,1) 0%, #00f 100%)").unwrap();
//! assert_eq!(defs[0].function, GradientFunction::Linear);
//! assert_eq!(defs[0].stops.len(), 2);
//! ```

pub mod ast;
pub mod error;
pub mod parser;
pub mod scanner;

pub use ast::GradientDefinition;
pub use error::SyntaxError;
pub use parser::{parse, parse_color};
