//! Owned SVG document tree.

use quick_xml::events::Event;

/// A parsed document: everything before the root, the root, everything after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// XML declaration, doctype, comments and whitespace before the root.
    pub prolog: Vec<Event<'static>>,
    pub root: Element,
    /// Comments and whitespace after the root.
    pub epilog: Vec<Event<'static>>,
}

/// Child of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Text, comments, CDATA, processing instructions and entity references,
    /// kept as read and written back verbatim.
    Raw(Event<'static>),
}

/// An element with unescaped attribute values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Qualified name as written, e.g. `path` or `svg:path`.
    pub name: String,
    /// Attributes in document order.
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Name without namespace prefix.
    pub fn local_name(&self) -> &str {
        local_part(&self.name)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has(&self, key: &str) -> bool {
        self.attrs.iter().any(|(k, _)| k == key)
    }

    /// Set an attribute, keeping its position when it already exists.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.attrs.iter().position(|(k, _)| k == key)?;
        Some(self.attrs.remove(index).1)
    }

    /// Remove every attribute matching `pred`, returning them in order.
    pub fn drain_attrs(&mut self, pred: impl Fn(&str) -> bool) -> Vec<(String, String)> {
        let (drained, kept) = std::mem::take(&mut self.attrs)
            .into_iter()
            .partition(|(k, _)| pred(k));
        self.attrs = kept;
        drained
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(elem) => Some(elem),
            Node::Raw(_) => None,
        })
    }

    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(|node| match node {
            Node::Element(elem) => Some(elem),
            Node::Raw(_) => None,
        })
    }

    /// Depth-first, pre-order visit of this element and all descendants.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        visit(self);
        for child in self.child_elements() {
            child.walk(visit);
        }
    }
}

/// Part of a qualified name after the prefix.
pub fn local_part(qname: &str) -> &str {
    qname.rsplit_once(':').map_or(qname, |(_, local)| local)
}

/// Prefix of a qualified name, if any.
pub fn prefix_part(qname: &str) -> Option<&str> {
    qname.split_once(':').map(|(prefix, _)| prefix)
}
