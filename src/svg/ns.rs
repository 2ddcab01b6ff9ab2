//! XML namespaces and prefix resolution.

use rustc_hash::FxHashMap;

use super::tree::{Element, prefix_part};

pub const SVG: &str = "http://www.w3.org/2000/svg";
pub const SERIF: &str = "http://www.serif.com/";
pub const SHAPER: &str = "http://www.shapertools.com/namespaces/shaper";

/// Conventional prefixes, used when a document does not declare its own.
pub const SERIF_PREFIX: &str = "serif";
pub const SHAPER_PREFIX: &str = "shaper";

/// Declarations every converted document carries on its root.
pub const ROOT_DECLARATIONS: [(&str, &str); 3] = [
    ("xmlns", SVG),
    ("xmlns:serif", SERIF),
    ("xmlns:shaper", SHAPER),
];

/// Add the missing [`ROOT_DECLARATIONS`] to `root`.
///
/// Existing declarations are left alone, even if they bind a different URI.
pub fn declare_root(root: &mut Element) {
    for (key, uri) in ROOT_DECLARATIONS {
        if !root.has(key) {
            root.set(key, uri);
        }
    }
}

/// Bind `prefix` to `uri` on `root` and drop conflicting redeclarations of
/// `prefix` below it, so literal `prefix:*` names resolve to `uri` everywhere.
///
/// Returns the other URIs the prefix was bound to, in document order.
pub fn claim_prefix(root: &mut Element, prefix: &str, uri: &str) -> Vec<String> {
    let key = format!("xmlns:{prefix}");
    let mut displaced = Vec::new();
    if let Some(previous) = root.get(&key)
        && previous != uri
    {
        displaced.push(previous.to_string());
    }
    root.set(key.as_str(), uri);
    for child in root.child_elements_mut() {
        drop_conflicting(child, &key, uri, &mut displaced);
    }
    displaced
}

fn drop_conflicting(elem: &mut Element, key: &str, uri: &str, displaced: &mut Vec<String>) {
    if elem.get(key).is_some_and(|bound| bound != uri)
        && let Some(previous) = elem.remove(key)
    {
        displaced.push(previous);
    }
    for child in elem.child_elements_mut() {
        drop_conflicting(child, key, uri, displaced);
    }
}

/// In-scope prefix bindings while walking a tree.
#[derive(Debug, Clone, Default)]
pub struct NsScope {
    bindings: FxHashMap<String, String>,
}

impl NsScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope seen inside `elem`, including its own `xmlns:*` declarations.
    pub fn enter(&self, elem: &Element) -> Self {
        let mut scope = self.clone();
        for (key, value) in &elem.attrs {
            if let Some(prefix) = key.strip_prefix("xmlns:") {
                scope.bindings.insert(prefix.to_string(), value.clone());
            }
        }
        scope
    }

    /// Whether an attribute name belongs to `uri`.
    ///
    /// An undeclared `fallback` prefix is accepted as well, since editor
    /// exports routinely use `serif:` and `shaper:` without declaring them.
    pub fn attr_in(&self, qname: &str, uri: &str, fallback: &str) -> bool {
        let Some(prefix) = prefix_part(qname) else {
            return false;
        };
        match self.bindings.get(prefix) {
            Some(bound) => bound == uri,
            None => prefix == fallback,
        }
    }

    /// Qualified name of the first attribute of `elem` in `uri` with `local`
    /// name.
    pub fn find_attr<'e>(
        &self,
        elem: &'e Element,
        uri: &str,
        fallback: &str,
        local: &str,
    ) -> Option<&'e str> {
        elem.attrs
            .iter()
            .map(|(key, _)| key.as_str())
            .find(|key| super::tree::local_part(key) == local && self.attr_in(key, uri, fallback))
    }
}
