//! Controller attribute model.
//!
//! Pure, I/O-free building blocks shared by both conversion directions:
//!
//! - [`vocab`]: the closed attribute-name and cut-type sets
//! - [`extract`]: reading `shaper:name=value` tokens out of layer names
//! - [`scope`]: global → group → leaf override resolution
//! - [`color`] / [`paint`]: fill/stroke resolution and cut-type inference
//! - [`diagnostic`]: non-fatal warnings tied to an element

pub mod color;
pub mod diagnostic;
pub mod extract;
pub mod paint;
pub mod scope;
pub mod vocab;

pub use color::classify;
pub use diagnostic::{Diagnostics, Issue};
pub use extract::Extraction;
pub use paint::PaintContext;
pub use scope::{AttrSet, Scopes};
pub use vocab::{AttrName, CutType, PREFIX};
