//! Minimal XML element tree
//!
//! The deposit is assembled as an in-memory tree and serialized in one
//! pass, with text and attribute values escaped through quick-xml. No
//! schema validation is performed here; element names are plain qualified
//! strings and namespaces are declared as attributes on the root.

use quick_xml::escape::escape;
use std::fmt::Write;

/// Crossref deposit schema namespace
pub const CROSSREF_NS: &str = "http://www.crossref.org/schema/4.3.6";
pub const CROSSREF_VERSION: &str = "4.3.6";
pub const CROSSREF_SCHEMA_LOCATION: &str =
    "http://www.crossref.org/schema/4.3.6 http://www.crossref.org/schemas/crossref4.3.6.xsd";
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
/// JATS namespace, used for abstracts
pub const JATS_NS: &str = "http://www.ncbi.nlm.nih.gov/JATS1";
/// AccessIndicators namespace, used for license references
pub const AI_NS: &str = "http://www.crossref.org/AccessIndicators.xsd";

/// A child of an element: a nested element or a run of text
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An XML element with a qualified name, ordered attributes and children
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Element wrapping a single text node
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut element = Self::new(name);
        element.append_text(text);
        element
    }

    /// Builder variant of [`set_attr`](Self::set_attr)
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.push((name.into(), value.into()));
    }

    pub fn append(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn append_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Direct child elements in document order
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// First direct child element with the given name
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.child_elements().find(|element| element.name == name)
    }

    /// All direct child elements with the given name
    pub fn find_all(&self, name: &str) -> Vec<&Element> {
        self.child_elements()
            .filter(|element| element.name == name)
            .collect()
    }

    /// Concatenated direct text content
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Serialize the subtree, escaping text and attribute values
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out);
        out
    }

    /// Serialize as a standalone document with the XML declaration
    pub fn to_document(&self) -> String {
        format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}", self.to_xml())
    }

    fn write_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attrs {
            // String formatting is infallible
            let _ = write!(out, " {}=\"{}\"", name, escape(value.as_str()));
        }
        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Element(element) => element.write_into(out),
                Node::Text(text) => out.push_str(&escape(text.as_str())),
            }
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_element_self_closes() {
        let element = Element::new("collection").with_attr("property", "crawler-based");
        assert_eq!(element.to_xml(), r#"<collection property="crawler-based"/>"#);
    }

    #[test]
    fn test_nested_serialization() {
        let mut doi_data = Element::new("doi_data");
        doi_data.append(Element::with_text("doi", "10.1234/example"));
        doi_data.append(Element::with_text("resource", "https://example.org/article/1"));
        assert_eq!(
            doi_data.to_xml(),
            "<doi_data><doi>10.1234/example</doi>\
             <resource>https://example.org/article/1</resource></doi_data>"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let element = Element::with_text("title", "Bread & <Butter>");
        assert_eq!(element.to_xml(), "<title>Bread &amp; &lt;Butter&gt;</title>");
    }

    #[test]
    fn test_attribute_is_escaped() {
        let element = Element::new("resource").with_attr("mime_type", "a\"b");
        assert!(element.to_xml().contains("mime_type=\"a&quot;b\""));
    }

    #[test]
    fn test_find_and_text_helpers() {
        let mut titles = Element::new("titles");
        titles.append(Element::with_text("title", "First"));
        titles.append(Element::with_text("subtitle", "Second"));
        assert_eq!(titles.find("title").unwrap().text(), "First");
        assert_eq!(titles.find_all("subtitle").len(), 1);
        assert!(titles.find("other_pages").is_none());
    }

    #[test]
    fn test_to_document_prepends_declaration() {
        let document = Element::new("doi_batch").to_document();
        assert!(document.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    }
}
