//! SVG serialization via `quick-xml` events.

use std::io;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};

use super::tree::{Document, Element, Node};

/// Serialize a document. Raw events are written exactly as they were read.
pub fn write(doc: &Document) -> io::Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    for event in &doc.prolog {
        writer.write_event(event.borrow())?;
    }
    write_element(&mut writer, &doc.root)?;
    for event in &doc.epilog {
        writer.write_event(event.borrow())?;
    }
    Ok(writer.into_inner())
}

fn write_element(writer: &mut Writer<Vec<u8>>, elem: &Element) -> io::Result<()> {
    let mut start = BytesStart::new(elem.name.as_str());
    for (key, value) in &elem.attrs {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if elem.children.is_empty() {
        return writer.write_event(Event::Empty(start));
    }

    writer.write_event(Event::Start(start))?;
    for child in &elem.children {
        match child {
            Node::Element(child) => write_element(writer, child)?,
            Node::Raw(event) => writer.write_event(event.borrow())?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(elem.name.as_str())))
}
