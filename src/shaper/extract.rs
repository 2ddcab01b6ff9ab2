//! Attribute extraction from layer names.
//!
//! Layer names mix free text with encoded tokens:
//!
//! ```text
//! Triangle - shaper:cutDepth=20mm shaper:cutType=outside
//! ```
//!
//! Tokens are found anywhere in the field, including glued to preceding text
//! (`Triangle-shaper:cutDepth=20mm`), as long as the prefix does not continue
//! a word. A whitespace-separated chunk that mentions the `shaper:` prefix
//! without holding a valid `shaper:<name>=<value>` is reported and skipped.

use std::sync::LazyLock;

use regex::Regex;

use super::diagnostic::Issue;
use super::scope::AttrSet;
use super::vocab::{AttrName, CutType, PREFIX};

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^A-Za-z0-9_])shaper:([A-Za-z_][A-Za-z0-9_.-]*)=(\S+)")
        .expect("token pattern is valid")
});

/// Raw `(name, value)` pairs of a field.
///
/// Pairs keep the position of the first occurrence of each name and the value
/// of the last one.
pub fn extract_pairs(field: &str) -> (Vec<(String, String)>, Vec<Issue>) {
    let marker = format!("{PREFIX}:");
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut issues = Vec::new();

    for token in field.split_whitespace() {
        if !token.contains(&marker) {
            continue;
        }
        let mut matched = false;
        for caps in TOKEN.captures_iter(token) {
            matched = true;
            let (name, value) = (&caps[1], &caps[2]);
            match pairs.iter_mut().find(|(existing, _)| existing == name) {
                Some(pair) => pair.1 = value.to_string(),
                None => pairs.push((name.to_string(), value.to_string())),
            }
        }
        if !matched {
            issues.push(Issue::MalformedToken {
                token: token.to_string(),
            });
        }
    }

    (pairs, issues)
}

/// Classified result of reading one field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Recognized attributes.
    pub attrs: AttrSet,
    /// Pairs with names outside the vocabulary, in field order.
    pub unknown: Vec<(String, String)>,
    /// Validation problems found while reading the field.
    pub issues: Vec<Issue>,
}

impl Extraction {
    pub fn from_field(field: &str) -> Self {
        let (pairs, issues) = extract_pairs(field);
        Self::from_pairs(pairs, issues)
    }

    /// Read several fields as one, later fields overriding earlier ones.
    ///
    /// Used for global assignments given one per command-line flag.
    pub fn from_fields<'a>(fields: impl IntoIterator<Item = &'a str>) -> Self {
        let joined = fields.into_iter().collect::<Vec<_>>().join(" ");
        Self::from_field(&joined)
    }

    fn from_pairs(pairs: Vec<(String, String)>, mut issues: Vec<Issue>) -> Self {
        let mut attrs = AttrSet::new();
        let mut unknown = Vec::new();

        for (name, value) in pairs {
            match AttrName::from_local(&name) {
                Some(attr) => {
                    if attr == AttrName::CutType && value.parse::<CutType>().is_err() {
                        issues.push(Issue::UnknownCutType {
                            value: value.clone(),
                        });
                    }
                    attrs.insert(attr, value);
                }
                None => {
                    issues.push(Issue::UnknownAttribute { name: name.clone() });
                    unknown.push((name, value));
                }
            }
        }

        Self {
            attrs,
            unknown,
            issues,
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty() && self.unknown.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_single_token() {
        let (pairs, issues) = extract_pairs("Triangle - shaper:cutDepth=20mm");
        assert_eq!(pairs, vec![("cutDepth".to_string(), "20mm".to_string())]);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_extract_token_glued_to_text() {
        let (pairs, issues) = extract_pairs("Triangle-shaper:cutDepth=20mm (shaper:toolDia=3mm");
        assert_eq!(
            pairs,
            vec![
                ("cutDepth".to_string(), "20mm".to_string()),
                ("toolDia".to_string(), "3mm".to_string()),
            ]
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn test_prefix_inside_word_is_malformed() {
        let (pairs, issues) = extract_pairs("noshaper:cutDepth=20mm");
        assert!(pairs.is_empty());
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_extract_no_tokens() {
        let (pairs, issues) = extract_pairs("Rectangle 3");
        assert!(pairs.is_empty());
        assert!(issues.is_empty());
        assert!(Extraction::from_field("").is_empty());
    }

    #[test]
    fn test_extract_last_value_first_position() {
        let (pairs, _) = extract_pairs(
            "shaper:cutDepth=1mm shaper:toolDia=3mm shaper:cutDepth=2mm",
        );
        assert_eq!(
            pairs,
            vec![
                ("cutDepth".to_string(), "2mm".to_string()),
                ("toolDia".to_string(), "3mm".to_string()),
            ]
        );
    }

    #[test]
    fn test_extract_value_ends_at_whitespace() {
        let (pairs, _) = extract_pairs("shaper:cutOffset=0.5mm\tTail");
        assert_eq!(pairs, vec![("cutOffset".to_string(), "0.5mm".to_string())]);
    }

    #[test]
    fn test_malformed_tokens_skipped() {
        let (pairs, issues) =
            extract_pairs("shaper:cutDepth shaper:=3 shaper:toolDia= shaper:cutType=inside");
        assert_eq!(pairs, vec![("cutType".to_string(), "inside".to_string())]);
        assert_eq!(issues.len(), 3);
        assert!(matches!(
            &issues[0],
            Issue::MalformedToken { token } if token == "shaper:cutDepth"
        ));
    }

    #[test]
    fn test_classify_unknown_name() {
        let extraction = Extraction::from_field("shaper:feedRate=100 shaper:cutDepth=5mm");
        assert_eq!(extraction.attrs.get(AttrName::CutDepth), Some("5mm"));
        assert_eq!(
            extraction.unknown,
            vec![("feedRate".to_string(), "100".to_string())]
        );
        assert_eq!(
            extraction.issues,
            vec![Issue::UnknownAttribute {
                name: "feedRate".into()
            }]
        );
    }

    #[test]
    fn test_unknown_cut_type_kept_and_reported() {
        let extraction = Extraction::from_field("shaper:cutType=engrave");
        assert_eq!(extraction.attrs.get(AttrName::CutType), Some("engrave"));
        assert_eq!(
            extraction.issues,
            vec![Issue::UnknownCutType {
                value: "engrave".into()
            }]
        );
    }

    #[test]
    fn test_from_fields_later_wins() {
        let extraction =
            Extraction::from_fields(["shaper:cutDepth=15mm", "shaper:cutDepth=10mm"]);
        assert_eq!(extraction.attrs.get(AttrName::CutDepth), Some("10mm"));
    }
}
