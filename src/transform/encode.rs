//! Editor → controller conversion.
//!
//! Layer names (`serif:id`) are read as attribute scopes, resolved down to
//! every drawable leaf and written out as `shaper:*` attributes. Leaves with
//! no explicit `cutType` get one inferred from their fill and stroke.

use std::fmt;

use crate::shaper::paint::strip_style_properties;
use crate::shaper::{
    AttrName, AttrSet, CutType, Diagnostics, Extraction, Issue, PREFIX, PaintContext, Scopes,
    classify,
};
use crate::svg::ns::{self, SERIF, SERIF_PREFIX, SHAPER, SHAPER_PREFIX};
use crate::svg::{Document, Element, IdGenerator, NsScope};

use super::{Role, identity};

/// Encoder settings.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Lowest-priority attributes applied to every leaf.
    pub globals: AttrSet,
    /// Rewrite fill and stroke width to the controller's conventions.
    pub normalize_paint: bool,
    /// `stroke-width` written when normalizing paint.
    pub stroke_width: String,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            globals: AttrSet::new(),
            normalize_paint: true,
            stroke_width: "0.1".to_string(),
        }
    }
}

/// A layer name that was consumed and replaced by a generated id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub element: &'static str,
    pub field: String,
    pub id: String,
}

impl fmt::Display for Rename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \"{}\" -> id {}", self.element, self.field, self.id)
    }
}

/// Outcome of encoding one document.
#[derive(Debug, Default)]
pub struct EncodeReport {
    pub leaves: usize,
    pub groups: usize,
    pub renames: Vec<Rename>,
    pub diagnostics: Diagnostics,
}

/// Encode `doc` in place.
///
/// `seed` feeds the id generator; passing the raw input bytes makes output
/// reproducible for identical input.
pub fn encode_document(doc: &mut Document, seed: &[u8], options: &EncodeOptions) -> EncodeReport {
    let displaced = ns::claim_prefix(&mut doc.root, SHAPER_PREFIX, SHAPER);
    ns::declare_root(&mut doc.root);

    let scope = NsScope::new().enter(&doc.root);
    let paint = PaintContext::default().child(|key| doc.root.get(key));

    let mut encoder = Encoder {
        options,
        ids: IdGenerator::new(seed, &doc.root),
        scopes: Scopes::new(options.globals.clone()),
        report: EncodeReport::default(),
    };
    for previous in displaced {
        encoder.report.diagnostics.push(
            doc.root.local_name(),
            Issue::PrefixRebound {
                prefix: SHAPER_PREFIX.to_string(),
                previous,
            },
        );
    }
    encoder.visit_children(&mut doc.root, &scope, &paint);
    encoder.report
}

struct Encoder<'a> {
    options: &'a EncodeOptions,
    ids: IdGenerator,
    scopes: Scopes,
    report: EncodeReport,
}

impl Encoder<'_> {
    fn visit_children(&mut self, parent: &mut Element, scope: &NsScope, paint: &PaintContext) {
        for child in parent.child_elements_mut() {
            self.visit(child, scope, paint);
        }
    }

    fn visit(&mut self, elem: &mut Element, scope: &NsScope, paint: &PaintContext) {
        let scope = scope.enter(elem);
        match Role::of(elem) {
            Role::Group => self.encode_group(elem, &scope, paint),
            Role::Leaf(name) => self.encode_leaf(elem, name, &scope, paint),
            Role::Container => {
                let paint = paint.child(|key| elem.get(key));
                self.visit_children(elem, &scope, &paint);
            }
            Role::Opaque => {}
        }
    }

    fn encode_group(&mut self, elem: &mut Element, scope: &NsScope, paint: &PaintContext) {
        let who = identity(elem, scope);
        let field = take_field(elem, scope);
        let extraction = field.as_deref().map(Extraction::from_field).unwrap_or_default();
        // unknown names on a group are reported and dropped
        self.report.diagnostics.extend(&who, extraction.issues);

        self.assign_id(elem, "g", field);
        self.report.groups += 1;

        let paint = paint.child(|key| elem.get(key));
        self.scopes.push(extraction.attrs);
        self.visit_children(elem, scope, &paint);
        self.scopes.pop();
    }

    fn encode_leaf(
        &mut self,
        elem: &mut Element,
        name: &'static str,
        scope: &NsScope,
        paint: &PaintContext,
    ) {
        let who = identity(elem, scope);
        let field = take_field(elem, scope);
        let extraction = field.as_deref().map(Extraction::from_field).unwrap_or_default();
        self.report.diagnostics.extend(&who, extraction.issues);

        let mut resolved = self.scopes.resolve(&extraction.attrs);
        if !resolved.contains(AttrName::CutType) {
            let paint = paint.child(|key| elem.get(key));
            match classify(&paint.fill, &paint.stroke) {
                Some(cut) => resolved.insert(AttrName::CutType, cut.as_str()),
                None => self.report.diagnostics.push(
                    who.as_str(),
                    Issue::Unclassified {
                        fill: paint.fill.describe(),
                        stroke: paint.stroke.describe(),
                    },
                ),
            }
        }

        for (attr, value) in resolved.iter() {
            elem.set(attr.qualified(), value);
        }
        for (attr, value) in extraction.unknown {
            elem.set(format!("{PREFIX}:{attr}"), value);
        }

        if self.options.normalize_paint
            && let Some(cut) = resolved.cut_type()
        {
            self.normalize_paint(elem, cut);
        }

        self.assign_id(elem, name, field);
        self.report.leaves += 1;
    }

    fn assign_id(&mut self, elem: &mut Element, name: &'static str, field: Option<String>) {
        let id = self.ids.next_id();
        elem.set("id", id.clone());
        if let Some(field) = field {
            self.report.renames.push(Rename {
                element: name,
                field,
                id,
            });
        }
    }

    fn normalize_paint(&self, elem: &mut Element, cut: CutType) {
        if let Some(style) = elem.remove("style")
            && let Some(rest) = strip_style_properties(&style, &["fill", "stroke-width"])
        {
            elem.set("style", rest);
        }
        elem.set("fill", cut.canonical_fill());
        elem.set("stroke-width", self.options.stroke_width.as_str());
    }
}

/// Remove and return the layer name.
///
/// `serif:id` is consumed; a plain `id` is read as a fallback so decoder
/// output can be encoded again (it is replaced by the caller anyway).
fn take_field(elem: &mut Element, scope: &NsScope) -> Option<String> {
    match scope.find_attr(elem, SERIF, SERIF_PREFIX, "id") {
        Some(key) => {
            let key = key.to_string();
            elem.remove(&key)
        }
        None => elem.get("id").map(str::to_string),
    }
}
