//! Controller → editor conversion.
//!
//! Controller attributes are folded back into one `id` string, which the
//! editor shows as the layer name:
//!
//! ```text
//! <path shaper:cutDepth="20mm" shaper:cutType="outside"/>
//!   ──► <path id="shaper:cutDepth=20mm shaper:cutType=outside"/>
//! ```

use crate::shaper::{AttrName, AttrSet, CutType, Diagnostics, Issue, PREFIX};
use crate::svg::ns::{self, SHAPER, SHAPER_PREFIX};
use crate::svg::tree::local_part;
use crate::svg::{Document, Element, NsScope};

use super::identity;

/// Outcome of decoding one document.
#[derive(Debug, Default)]
pub struct DecodeReport {
    /// Elements whose attributes were folded into a layer name.
    pub converted: usize,
    pub diagnostics: Diagnostics,
}

/// Decode `doc` in place. The root element itself is never rewritten.
pub fn decode_document(doc: &mut Document) -> DecodeReport {
    let mut report = DecodeReport::default();
    let scope = NsScope::new().enter(&doc.root);
    for child in doc.root.child_elements_mut() {
        decode_element(child, &scope, &mut report);
    }
    ns::declare_root(&mut doc.root);
    report
}

fn decode_element(elem: &mut Element, scope: &NsScope, report: &mut DecodeReport) {
    let scope = scope.enter(elem);
    fold_attributes(elem, &scope, report);
    for child in elem.child_elements_mut() {
        decode_element(child, &scope, report);
    }
}

fn fold_attributes(elem: &mut Element, scope: &NsScope, report: &mut DecodeReport) {
    let keys: Vec<String> = elem
        .attrs
        .iter()
        .filter(|(key, _)| scope.attr_in(key, SHAPER, SHAPER_PREFIX))
        .map(|(key, _)| key.clone())
        .collect();
    if keys.is_empty() {
        return;
    }

    let who = identity(elem, scope);
    let mut known = AttrSet::new();
    let mut unknown = Vec::new();
    for key in &keys {
        let Some(value) = elem.get(key) else { continue };
        let local = local_part(key);
        match AttrName::from_local(local) {
            Some(name) => known.insert(name, value),
            None => unknown.push((local.to_string(), value.to_string())),
        }
    }

    for (name, _) in &unknown {
        report
            .diagnostics
            .push(who.as_str(), Issue::UnknownAttribute { name: name.clone() });
    }
    if known.is_empty() {
        return;
    }

    if let Some(value) = known.get(AttrName::CutType)
        && value.parse::<CutType>().is_err()
    {
        report.diagnostics.push(
            who.as_str(),
            Issue::UnknownCutType {
                value: value.to_string(),
            },
        );
    }

    let pairs = known
        .iter()
        .map(|(name, value)| (name.as_str().to_string(), value.to_string()))
        .chain(unknown);
    let mut tokens = Vec::with_capacity(keys.len());
    for (name, value) in pairs {
        if value.chars().any(char::is_whitespace) {
            report.diagnostics.push(
                who.as_str(),
                Issue::SpacedValue {
                    name: name.clone(),
                    value: value.clone(),
                },
            );
        }
        tokens.push(format!("{PREFIX}:{name}={value}"));
    }

    elem.drain_attrs(|key| keys.iter().any(|k| k == key));
    elem.set("id", tokens.join(" "));
    report.converted += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shaper::Extraction;
    use crate::svg::parse;
    use crate::transform::{EncodeOptions, encode_document};

    const HEAD: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:shaper="http://www.shapertools.com/namespaces/shaper">"#;

    fn decode(body: &str) -> (Document, DecodeReport) {
        let mut doc = parse(&format!("{HEAD}{body}</svg>")).unwrap();
        let report = decode_document(&mut doc);
        (doc, report)
    }

    fn first(doc: &Document) -> &Element {
        doc.root.child_elements().next().unwrap()
    }

    #[test]
    fn test_attributes_folded_in_canonical_order() {
        let (doc, report) =
            decode(r#"<path shaper:cutType="outside" d="M0 0" shaper:cutDepth="20mm"/>"#);
        let path = first(&doc);
        assert_eq!(
            path.get("id"),
            Some("shaper:cutDepth=20mm shaper:cutType=outside")
        );
        assert_eq!(path.get("shaper:cutDepth"), None);
        assert_eq!(path.get("shaper:cutType"), None);
        assert_eq!(path.get("d"), Some("M0 0"));
        assert_eq!(report.converted, 1);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn test_plain_elements_unchanged() {
        let (doc, report) = decode(r##"<rect id="r1" fill="#000"/>"##);
        let rect = first(&doc);
        assert_eq!(rect.get("id"), Some("r1"));
        assert_eq!(report.converted, 0);
    }

    #[test]
    fn test_unknown_only_is_left_alone() {
        let (doc, report) = decode(r#"<rect id="r1" shaper:feed="10"/>"#);
        let rect = first(&doc);
        assert_eq!(rect.get("id"), Some("r1"));
        assert_eq!(rect.get("shaper:feed"), Some("10"));
        assert_eq!(report.converted, 0);
        assert_eq!(report.diagnostics.len(), 1);
    }

    #[test]
    fn test_unknown_follow_known() {
        let (doc, report) =
            decode(r#"<rect shaper:feed="10" shaper:toolDia="3mm" shaper:cutType="engrave"/>"#);
        let rect = first(&doc);
        assert_eq!(
            rect.get("id"),
            Some("shaper:toolDia=3mm shaper:cutType=engrave shaper:feed=10")
        );
        assert_eq!(report.diagnostics.len(), 2);
    }

    #[test]
    fn test_declared_prefix_resolved() {
        let mut doc = parse(
            r#"<svg xmlns:ns0="http://www.shapertools.com/namespaces/shaper"><g><path ns0:cutDepth="2mm"/></g></svg>"#,
        )
        .unwrap();
        decode_document(&mut doc);
        let group = first(&doc);
        let path = group.child_elements().next().unwrap();
        assert_eq!(path.get("id"), Some("shaper:cutDepth=2mm"));
        assert_eq!(path.get("ns0:cutDepth"), None);
        assert_eq!(doc.root.get("xmlns:shaper"), Some(ns::SHAPER));
    }

    #[test]
    fn test_spaced_value_reported() {
        let (_, report) = decode(r#"<path shaper:cutDepth="2 mm"/>"#);
        assert!(matches!(
            report.diagnostics.iter().next().map(|d| &d.issue),
            Some(Issue::SpacedValue { .. })
        ));
    }

    #[test]
    fn test_decode_of_encode_reproduces_layer_attributes() {
        let layers = [
            "Triangle shaper:cutDepth=20mm shaper:cutType=outside",
            "shaper:toolDia=3mm shaper:cutOffset=0.5mm shaper:cutType=pocket",
        ];
        let input = format!(
            r#"<svg xmlns:serif="http://www.serif.com/"><path serif:id="{}"/><rect serif:id="{}"/></svg>"#,
            layers[0], layers[1]
        );
        let mut doc = parse(&input).unwrap();
        encode_document(&mut doc, input.as_bytes(), &EncodeOptions::default());
        decode_document(&mut doc);

        let fields: Vec<_> = doc
            .root
            .child_elements()
            .map(|elem| elem.get("id").unwrap().to_string())
            .collect();
        for (field, source) in fields.iter().zip(layers) {
            assert_eq!(
                Extraction::from_field(field).attrs,
                Extraction::from_field(source).attrs
            );
        }
        // stable across runs
        let mut again = parse(&input).unwrap();
        encode_document(&mut again, input.as_bytes(), &EncodeOptions::default());
        decode_document(&mut again);
        let again: Vec<_> = again
            .root
            .child_elements()
            .map(|elem| elem.get("id").unwrap().to_string())
            .collect();
        assert_eq!(fields, again);
    }

    #[test]
    fn test_encode_of_decode_reproduces_attributes() {
        let (mut doc, _) =
            decode(r##"<path shaper:cutDepth="20mm" shaper:cutType="outside" fill="#000000"/>"##);
        encode_document(&mut doc, b"seed", &EncodeOptions::default());
        let path = first(&doc);
        assert_eq!(path.get("shaper:cutDepth"), Some("20mm"));
        assert_eq!(path.get("shaper:cutType"), Some("outside"));
    }
}
