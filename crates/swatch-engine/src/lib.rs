//! Swatch engine crate.
//!
//! Owns the canonical gradient model and everything that edits it:
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`paint`] | `Rgba`, `GradientStop`, `GradientModel` |
//! | [`stops`] | stop-list engine (insert, reposition, remove, interpolate) |
//! | [`adapter`] | text ⇄ model conversion on top of `swatch-grammar` |
//! | [`session`] | `GradientEditor`, the policy layer driven by UI gestures |
//! | [`store`] | persistence of the last gradient value |
//! | [`logging`] | `env_logger` setup |
//!
//! ```rust
//! use swatch_engine::session::GradientEditor;
//!
//! let mut editor = GradientEditor::load(
//!     "linear-gradient(90deg, rgba(255,255,255,1) 0%, rgba(0,0,0,1) 100%)",
//! );
//! editor.insert_stop_at(50.0);
//! assert_eq!(editor.stops().len(), 3);
//! ```

pub mod adapter;
pub mod logging;
pub mod paint;
pub mod session;
pub mod stops;
pub mod store;
