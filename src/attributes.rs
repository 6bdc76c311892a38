//! Whitelisted HTML attributes
//!
//! Every fragment the builder creates may carry an [`Attributes`] bag. Before
//! the bag reaches the output it is passed through [`filter_attributes`],
//! which keeps only the names the target [`ElementKind`] permits: the
//! [`COMMON`] set merged with the kind's own [`ElementKind::specific`] set.
//! Anything else is dropped without an error.
//!
//! Values are written verbatim. No escaping is performed, so callers are
//! responsible for the safety of what they pass in.

use std::fmt;

use log::trace;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

/// Attributes legal on every element kind.
pub const COMMON: &[&str] = &[
    "accesskey",
    "class",
    "contenteditable",
    "contextmenu",
    "dir",
    "draggable",
    "hidden",
    "id",
    "item",
    "itemprop",
    "lang",
    "spellcheck",
    "style",
    "subject",
    "tabindex",
    "title",
    // mouse events
    "onclick",
    "ondblclick",
    "ondrag",
    "ondragend",
    "ondragenter",
    "ondragleave",
    "ondragover",
    "ondragstop",
    "ondrop",
    "onmousedown",
    "onmousemove",
    "onmouseout",
    "onmouseover",
    "onmouseup",
    "onmousewheel",
    "onscroll",
];

const ANCHOR: &[&str] = &["href", "hreflang", "media", "ping", "rel", "target", "type"];
const IMAGE: &[&str] = &["alt", "height", "ismap", "usemap", "width"];

/// The category of markup being produced. Selects the attribute policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Anchor,
    Image,
    Heading,
    Paragraph,
    Preformatted,
    Div,
    Span,
    /// Any element without attributes of its own
    Generic,
}

impl ElementKind {
    /// Short tag-like name used in logs
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Anchor => "a",
            ElementKind::Image => "img",
            ElementKind::Heading => "h",
            ElementKind::Paragraph => "p",
            ElementKind::Preformatted => "pre",
            ElementKind::Div => "div",
            ElementKind::Span => "span",
            ElementKind::Generic => "generic",
        }
    }

    /// Attributes permitted on this kind in addition to [`COMMON`]
    pub fn specific(self) -> &'static [&'static str] {
        match self {
            ElementKind::Anchor => ANCHOR,
            ElementKind::Image => IMAGE,
            ElementKind::Heading
            | ElementKind::Paragraph
            | ElementKind::Preformatted
            | ElementKind::Div
            | ElementKind::Span
            | ElementKind::Generic => &[],
        }
    }

    /// Whether `name` may appear on this kind
    pub fn allows(self, name: &str) -> bool {
        COMMON.contains(&name) || self.specific().contains(&name)
    }

    /// Every attribute name permitted on this kind, common ones first
    pub fn allowed(self) -> impl Iterator<Item = &'static str> {
        COMMON.iter().chain(self.specific()).copied()
    }
}

/// An ordered set of attribute name/value pairs.
///
/// Insertion order is preserved and is the order in which permitted entries
/// are serialized. Inserting a name that is already present replaces its
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shortcut for a bag holding only a `class`
    pub fn class(name: impl Into<String>) -> Self {
        Self::new().with("class", name)
    }

    /// Shortcut for a bag holding only an `id`
    pub fn id(name: impl Into<String>) -> Self {
        Self::new().with("id", name)
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Raw value for `key`, regardless of any policy
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

// JSON documents may write `"width": 120` or `"hidden": true`.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(s: Scalar) -> Self {
        match s {
            Scalar::Str(s) => s,
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

struct AttributesVisitor;

impl<'de> Visitor<'de> for AttributesVisitor {
    type Value = Attributes;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of attribute names to scalar values")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Attributes, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut attrs = Attributes::new();
        while let Some((key, value)) = map.next_entry::<String, Scalar>()? {
            attrs.insert(key, value);
        }
        Ok(attrs)
    }
}

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(AttributesVisitor)
    }
}

/// Serialize the entries of `attrs` that `kind` permits.
///
/// Each kept entry becomes ` key="value"` (leading space, double quotes, value
/// untouched), in the bag's insertion order. Entries the policy rejects are
/// skipped. `None` yields an empty string.
pub fn filter_attributes(kind: ElementKind, attrs: Option<&Attributes>) -> String {
    let Some(attrs) = attrs else {
        return String::new();
    };

    let mut out = String::new();
    for (key, value) in attrs.iter() {
        if kind.allows(key) {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        } else {
            trace!("dropping attribute {:?} not allowed on <{}>", key, kind.name());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_yields_empty_for_every_kind() {
        for kind in [
            ElementKind::Anchor,
            ElementKind::Image,
            ElementKind::Heading,
            ElementKind::Paragraph,
            ElementKind::Preformatted,
            ElementKind::Div,
            ElementKind::Span,
            ElementKind::Generic,
        ] {
            assert_eq!(filter_attributes(kind, None), "");
        }
    }

    #[test]
    fn keeps_allowed_in_insertion_order() {
        let attrs = Attributes::new()
            .with("title", "t")
            .with("bogus", "x")
            .with("href", "/a")
            .with("class", "c");
        assert_eq!(
            filter_attributes(ElementKind::Anchor, Some(&attrs)),
            r#" title="t" href="/a" class="c""#
        );
    }

    #[test]
    fn specific_attributes_do_not_leak_across_kinds() {
        let attrs = Attributes::new().with("alt", "pic").with("href", "/x");
        assert_eq!(filter_attributes(ElementKind::Image, Some(&attrs)), r#" alt="pic""#);
        assert_eq!(filter_attributes(ElementKind::Anchor, Some(&attrs)), r#" href="/x""#);
        assert_eq!(filter_attributes(ElementKind::Div, Some(&attrs)), "");
    }

    #[test]
    fn mouse_events_are_common() {
        let attrs = Attributes::new().with("onclick", "go()");
        assert_eq!(
            filter_attributes(ElementKind::Span, Some(&attrs)),
            r#" onclick="go()""#
        );
    }

    #[test]
    fn values_are_not_escaped() {
        let attrs = Attributes::new().with("title", "a \"b\" <c>");
        assert_eq!(
            filter_attributes(ElementKind::Generic, Some(&attrs)),
            " title=\"a \"b\" <c>\""
        );
    }

    #[test]
    fn empty_bag_yields_empty() {
        assert_eq!(filter_attributes(ElementKind::Anchor, Some(&Attributes::new())), "");
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut attrs = Attributes::class("a").with("id", "x");
        attrs.insert("class", "b");
        let pairs: Vec<_> = attrs.iter().collect();
        assert_eq!(pairs, vec![("class", "b"), ("id", "x")]);
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn allowed_is_common_plus_specific() {
        let anchor: Vec<_> = ElementKind::Anchor.allowed().collect();
        assert_eq!(anchor.len(), COMMON.len() + 7);
        assert!(anchor.contains(&"hreflang"));
        assert_eq!(ElementKind::Generic.allowed().count(), COMMON.len());
    }

    #[test]
    fn deserialize_preserves_document_order() {
        let attrs: Attributes =
            serde_json::from_str(r#"{"width": 120, "alt": "x", "hidden": true, "id": "i"}"#)
                .unwrap();
        let pairs: Vec<_> = attrs.iter().collect();
        assert_eq!(
            pairs,
            vec![("width", "120"), ("alt", "x"), ("hidden", "true"), ("id", "i")]
        );
    }

    #[test]
    fn shortcuts_and_collect() {
        assert_eq!(Attributes::id("main").get("id"), Some("main"));
        let attrs: Attributes = [("rel", "next"), ("target", "_blank")].into_iter().collect();
        assert_eq!(attrs.get("target"), Some("_blank"));
        assert_eq!(attrs.get("missing"), None);
    }
}
