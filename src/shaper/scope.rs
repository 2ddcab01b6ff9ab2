//! Three-tier attribute resolution: global, group chain, leaf.

use std::collections::BTreeMap;

use super::vocab::{AttrName, CutType};

// ============================================================================
// AttrSet
// ============================================================================

/// Recognized attributes of one scope, iterated in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttrSet {
    values: BTreeMap<AttrName, String>,
}

impl AttrSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: AttrName, value: impl Into<String>) {
        self.values.insert(name, value.into());
    }

    pub fn get(&self, name: AttrName) -> Option<&str> {
        self.values.get(&name).map(String::as_str)
    }

    pub fn contains(&self, name: AttrName) -> bool {
        self.values.contains_key(&name)
    }

    /// The `cutType` value, if present and valid.
    pub fn cut_type(&self) -> Option<CutType> {
        self.get(AttrName::CutType)?.parse().ok()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AttrName, &str)> {
        self.values.iter().map(|(name, value)| (*name, value.as_str()))
    }

    /// Override by key: every entry of `other` replaces ours.
    pub fn merge(&mut self, other: &AttrSet) {
        for (name, value) in &other.values {
            self.values.insert(*name, value.clone());
        }
    }
}

impl FromIterator<(AttrName, String)> for AttrSet {
    fn from_iter<I: IntoIterator<Item = (AttrName, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// Scopes
// ============================================================================

/// Stack of enclosing scopes for the element currently being visited.
///
/// The bottom entry is the global scope; each enclosing group pushes one
/// entry, outermost first.
#[derive(Debug, Clone)]
pub struct Scopes {
    layers: Vec<AttrSet>,
}

impl Scopes {
    pub fn new(global: AttrSet) -> Self {
        Self {
            layers: vec![global],
        }
    }

    /// Enter a group.
    pub fn push(&mut self, group: AttrSet) {
        self.layers.push(group);
    }

    /// Leave the innermost group. The global scope is never popped.
    pub fn pop(&mut self) {
        if self.layers.len() > 1 {
            self.layers.pop();
        }
    }

    /// Effective attributes for a leaf carrying `leaf`.
    pub fn resolve(&self, leaf: &AttrSet) -> AttrSet {
        let mut resolved = AttrSet::new();
        for layer in &self.layers {
            resolved.merge(layer);
        }
        resolved.merge(leaf);
        resolved
    }
}
