//! SVG reading errors.

use thiserror::Error;

/// Errors that make a single document unusable.
#[derive(Debug, Error)]
pub enum SvgError {
    #[error("XML syntax error at byte {position}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    #[error("invalid UTF-8 in {0}")]
    Utf8(&'static str),

    #[error("invalid escape sequence in attribute `{name}`")]
    Escape {
        name: String,
        #[source]
        source: quick_xml::escape::EscapeError,
    },

    #[error("document has no root element")]
    NoRoot,

    #[error("document has more than one root element")]
    MultipleRoots,

    #[error("root element is `<{0}>`, expected `<svg>`")]
    NotSvg(String),

    #[error("unexpected end of document inside `<{0}>`")]
    Unclosed(String),
}
