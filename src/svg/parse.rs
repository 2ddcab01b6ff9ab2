//! SVG reading via `quick-xml` events.

use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};

use super::error::SvgError;
use super::tree::{Document, Element, Node};

/// Parse an SVG document into an owned tree.
///
/// Everything that is not an element is kept as a raw event so that it can
/// be written back untouched.
pub fn parse(input: &str) -> Result<Document, SvgError> {
    let mut reader = Reader::from_str(input);
    let mut stack: Vec<Element> = Vec::new();
    let mut prolog = Vec::new();
    let mut epilog = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let position = reader.buffer_position();
        match reader.read_event() {
            Ok(Event::Start(start)) => stack.push(read_element(&start, position)?),
            Ok(Event::Empty(start)) => {
                let elem = read_element(&start, position)?;
                attach(elem, &mut stack, &mut root)?;
            }
            Ok(Event::End(_)) => {
                // quick-xml rejects mismatched and unbalanced end tags
                if let Some(elem) = stack.pop() {
                    attach(elem, &mut stack, &mut root)?;
                }
            }
            Ok(Event::Eof) => break,
            Ok(event) => {
                let event = event.into_owned();
                match (stack.last_mut(), &root) {
                    (Some(parent), _) => parent.children.push(Node::Raw(event)),
                    (None, None) => prolog.push(event),
                    (None, Some(_)) => epilog.push(event),
                }
            }
            Err(source) => {
                return Err(SvgError::Xml {
                    position: reader.error_position(),
                    source,
                });
            }
        }
    }

    if let Some(open) = stack.last() {
        return Err(SvgError::Unclosed(open.name.clone()));
    }
    let root = root.ok_or(SvgError::NoRoot)?;
    if root.local_name() != "svg" {
        return Err(SvgError::NotSvg(root.name));
    }

    Ok(Document {
        prolog,
        root,
        epilog,
    })
}

fn attach(
    elem: Element,
    stack: &mut [Element],
    root: &mut Option<Element>,
) -> Result<(), SvgError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(elem)),
        None if root.is_none() => *root = Some(elem),
        None => return Err(SvgError::MultipleRoots),
    }
    Ok(())
}

fn read_element(start: &BytesStart<'_>, position: u64) -> Result<Element, SvgError> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|_| SvgError::Utf8("element name"))?
        .to_string();

    let mut attrs = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| SvgError::Xml {
            position,
            source: e.into(),
        })?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|_| SvgError::Utf8("attribute name"))?
            .to_string();
        let raw = std::str::from_utf8(&attr.value).map_err(|_| SvgError::Utf8("attribute value"))?;
        let value = unescape(raw)
            .map_err(|source| SvgError::Escape {
                name: key.clone(),
                source,
            })?
            .into_owned();
        attrs.push((key, value));
    }

    let mut elem = Element::new(name);
    elem.attrs = attrs;
    Ok(elem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_structure() {
        let doc = parse(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- exported -->
<svg xmlns="http://www.w3.org/2000/svg"><g serif:id="Group"><path d="M0 0"/></g><rect/></svg>
"#,
        )
        .unwrap();

        assert_eq!(doc.root.name, "svg");
        let names: Vec<_> = doc.root.child_elements().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["g", "rect"]);
        let group = doc.root.child_elements().next().unwrap();
        assert_eq!(group.get("serif:id"), Some("Group"));
        assert_eq!(group.child_elements().count(), 1);
        assert!(doc.prolog.iter().any(|e| matches!(e, Event::Decl(_))));
        assert!(doc.prolog.iter().any(|e| matches!(e, Event::Comment(_))));
    }

    #[test]
    fn test_attribute_values_unescaped() {
        let doc = parse(r#"<svg><path serif:id="A &amp; B &lt;1&gt;"/></svg>"#).unwrap();
        let path = doc.root.child_elements().next().unwrap();
        assert_eq!(path.get("serif:id"), Some("A & B <1>"));
    }

    #[test]
    fn test_prefixed_root_accepted() {
        let doc = parse(r#"<svg:svg xmlns:svg="http://www.w3.org/2000/svg"/>"#).unwrap();
        assert_eq!(doc.root.local_name(), "svg");
    }

    #[test]
    fn test_malformed_xml() {
        let err = parse("<svg><g></svg>").unwrap_err();
        assert!(matches!(err, SvgError::Xml { .. }));
    }

    #[test]
    fn test_unclosed_root() {
        let err = parse("<svg><g/>").unwrap_err();
        assert!(matches!(err, SvgError::Unclosed(_) | SvgError::Xml { .. }));
    }

    #[test]
    fn test_not_svg() {
        let err = parse("<html/>").unwrap_err();
        assert!(matches!(err, SvgError::NotSvg(name) if name == "html"));
    }

    #[test]
    fn test_empty_document() {
        let err = parse("  <!-- nothing -->  ").unwrap_err();
        assert!(matches!(err, SvgError::NoRoot));
    }
}
