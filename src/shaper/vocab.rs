//! Recognized controller attribute names and cut-type values.
//!
//! Both sets are closed. Anything outside them is reported as a warning by the
//! caller and never takes part in scope resolution.

use std::fmt;
use std::str::FromStr;

/// Namespace prefix used for controller attributes, both as XML attribute
/// prefix and inside layer names (`shaper:cutDepth=20mm`).
pub const PREFIX: &str = "shaper";

// ============================================================================
// Attribute names
// ============================================================================

/// Controller attribute names.
///
/// Declaration order is the canonical serialization order (used by `Ord`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttrName {
    CutDepth,
    ToolDia,
    CutOffset,
    CutType,
}

impl AttrName {
    pub const ALL: [AttrName; 4] = [
        AttrName::CutDepth,
        AttrName::ToolDia,
        AttrName::CutOffset,
        AttrName::CutType,
    ];

    /// Local name as written after the `shaper:` prefix.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CutDepth => "cutDepth",
            Self::ToolDia => "toolDia",
            Self::CutOffset => "cutOffset",
            Self::CutType => "cutType",
        }
    }

    /// Qualified attribute name, e.g. `shaper:cutDepth`.
    pub fn qualified(self) -> String {
        format!("{PREFIX}:{}", self.as_str())
    }

    /// Look up a local name. Matching is exact (names are case-sensitive).
    pub fn from_local(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attr| attr.as_str() == name)
    }
}

impl fmt::Display for AttrName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Cut types
// ============================================================================

/// How the controller machines a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CutType {
    Guide,
    Inside,
    Outside,
    Pocket,
    Online,
    Anchor,
}

impl CutType {
    pub const ALL: [CutType; 6] = [
        CutType::Guide,
        CutType::Inside,
        CutType::Outside,
        CutType::Pocket,
        CutType::Online,
        CutType::Anchor,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Guide => "guide",
            Self::Inside => "inside",
            Self::Outside => "outside",
            Self::Pocket => "pocket",
            Self::Online => "online",
            Self::Anchor => "anchor",
        }
    }

    /// Fill the controller expects for this cut type.
    pub const fn canonical_fill(self) -> &'static str {
        match self {
            Self::Outside => "#000000",
            Self::Inside => "#FFFFFF",
            Self::Pocket => "#7F7F7F",
            Self::Guide => "#0068FF",
            Self::Online => "none",
            Self::Anchor => "#FF0000",
        }
    }
}

impl FromStr for CutType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cut| cut.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for CutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
