//! The two conversion directions.
//!
//! - [`encode`]: editor export → controller input
//! - [`decode`]: controller input → editor import
//!
//! Both are single passes over an in-memory [`Document`](crate::svg::Document)
//! and never touch the filesystem.

pub mod decode;
pub mod encode;

pub use decode::decode_document;
pub use encode::{EncodeOptions, encode_document};

use crate::svg::ns::{SERIF, SERIF_PREFIX};
use crate::svg::{Element, NsScope};

/// Elements the controller cuts.
const LEAVES: &[&str] = &[
    "path", "rect", "circle", "ellipse", "line", "polyline", "polygon", "text",
];

/// Elements whose children are rendered as if they were siblings.
const CONTAINERS: &[&str] = &["svg", "a", "switch"];

/// How the encoder treats an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    /// `<g>`: carries an attribute scope for its descendants.
    Group,
    /// Drawable shape, with its static local name.
    Leaf(&'static str),
    /// Transparent wrapper, visited without a scope of its own.
    Container,
    /// Definitions, metadata and anything unknown: left alone.
    Opaque,
}

impl Role {
    pub(crate) fn of(elem: &Element) -> Self {
        let local = elem.local_name();
        if local == "g" {
            return Self::Group;
        }
        if let Some(name) = LEAVES.iter().copied().find(|name| *name == local) {
            return Self::Leaf(name);
        }
        if CONTAINERS.contains(&local) {
            return Self::Container;
        }
        Self::Opaque
    }
}

/// Name used for an element in warnings: its layer name or id.
pub(crate) fn identity(elem: &Element, scope: &NsScope) -> String {
    let label = scope
        .find_attr(elem, SERIF, SERIF_PREFIX, "id")
        .and_then(|key| elem.get(key))
        .map(|field| format!(" \"{field}\""))
        .or_else(|| elem.get("id").map(|id| format!("#{id}")))
        .unwrap_or_default();
    format!("{}{}", elem.local_name(), label)
}
