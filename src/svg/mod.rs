//! SVG document handling.
//!
//! # Modules
//!
//! - [`tree`]: owned element tree
//! - [`parse`] / [`write`]: `quick-xml` based reading and writing
//! - [`ns`]: namespace URIs and prefix resolution
//! - [`ids`]: collision-free element ids
//!
//! ```text
//! bytes ──► parse ──► Document ──► (transform) ──► write ──► bytes
//! ```

mod error;
pub mod ids;
pub mod ns;
mod parse;
pub mod tree;
mod write;

pub use ids::IdGenerator;
pub use ns::NsScope;
pub use parse::parse;
pub use tree::{Document, Element};
pub use write::write;
