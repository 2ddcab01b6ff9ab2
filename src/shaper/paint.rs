//! Fill and stroke resolution for a single element.
//!
//! Priority, highest first: `style` declaration, presentation attribute,
//! value inherited from the nearest ancestor, SVG initial value.

use super::color::{Paint, Rgb};

/// Split a `style` attribute into `(property, value)` declarations.
pub fn style_declarations(style: &str) -> impl Iterator<Item = (&str, &str)> {
    style.split(';').filter_map(|decl| {
        let (property, value) = decl.split_once(':')?;
        let property = property.trim();
        (!property.is_empty()).then(|| (property, value.trim()))
    })
}

/// Look up one property in a `style` attribute. The last declaration wins.
pub fn style_property<'a>(style: &'a str, property: &str) -> Option<&'a str> {
    style_declarations(style)
        .filter(|(name, _)| *name == property)
        .map(|(_, value)| value)
        .last()
}

/// Rebuild a `style` attribute without the given properties.
///
/// Returns `None` when nothing is left.
pub fn strip_style_properties(style: &str, properties: &[&str]) -> Option<String> {
    let kept: Vec<String> = style_declarations(style)
        .filter(|(name, _)| !properties.contains(name))
        .map(|(name, value)| format!("{name}:{value}"))
        .collect();
    (!kept.is_empty()).then(|| kept.join(";"))
}

/// Inherited fill and stroke at some point of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintContext {
    pub fill: Paint,
    pub stroke: Paint,
}

impl Default for PaintContext {
    fn default() -> Self {
        Self {
            fill: Paint::Color(Rgb(0, 0, 0)),
            stroke: Paint::None,
        }
    }
}

impl PaintContext {
    /// Context as seen by an element's children.
    ///
    /// `attr` looks up an attribute of the element by name.
    pub fn child<'a>(&self, attr: impl Fn(&str) -> Option<&'a str>) -> Self {
        let style = attr("style").unwrap_or_default();
        let resolve = |property: &str, inherited: &Paint| {
            let specified = style_property(style, property).or_else(|| attr(property));
            match specified {
                None => inherited.clone(),
                Some(value) if value.trim() == "inherit" => inherited.clone(),
                Some(value) => Paint::parse(value),
            }
        };
        Self {
            fill: resolve("fill", &self.fill),
            stroke: resolve("stroke", &self.stroke),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(attrs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<&'a str> {
        move |name| attrs.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
    }

    #[test]
    fn test_style_property_last_wins() {
        let style = "fill:red; stroke:none ;fill: rgb(0,0,0)";
        assert_eq!(style_property(style, "fill"), Some("rgb(0,0,0)"));
        assert_eq!(style_property(style, "stroke"), Some("none"));
        assert_eq!(style_property(style, "opacity"), None);
    }

    #[test]
    fn test_style_handles_empty_declarations() {
        let style = ";;fill:#fff;;";
        assert_eq!(style_property(style, "fill"), Some("#fff"));
    }

    #[test]
    fn test_strip_style_properties() {
        let style = "fill:#000;stroke:red;stroke-width:2;opacity:0.5";
        assert_eq!(
            strip_style_properties(style, &["fill", "stroke-width"]),
            Some("stroke:red;opacity:0.5".to_string())
        );
        assert_eq!(strip_style_properties("fill:#000", &["fill"]), None);
    }

    #[test]
    fn test_initial_values() {
        let ctx = PaintContext::default().child(lookup(&[]));
        assert_eq!(ctx.fill, Paint::Color(Rgb(0, 0, 0)));
        assert_eq!(ctx.stroke, Paint::None);
    }

    #[test]
    fn test_style_beats_attribute() {
        let attrs = [("fill", "white"), ("style", "fill:#7F7F7F")];
        let ctx = PaintContext::default().child(lookup(&attrs));
        assert_eq!(ctx.fill, Paint::Color(Rgb(127, 127, 127)));
    }

    #[test]
    fn test_inherits_from_group() {
        let group = PaintContext::default().child(lookup(&[("fill", "none"), ("stroke", "red")]));
        let leaf = group.child(lookup(&[("stroke", "inherit")]));
        assert_eq!(leaf.fill, Paint::None);
        assert_eq!(leaf.stroke, Paint::Color(Rgb(255, 0, 0)));
    }
}
