//! Command-line interface module.

mod args;
mod batch;
pub mod decode;
pub mod encode;
mod report;

pub use args::{Cli, Commands};
