use std::{fmt, io::Write};

/// One node of the drawable scene: an SVG element with attributes, children
/// and optional text content.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Element>,
    text: Option<String>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self { tag, attrs: Vec::new(), children: Vec::new(), text: None }
    }

    /// Set an attribute, replacing any previous value.
    pub fn attr(mut self, name: &'static str, value: impl fmt::Display) -> Self {
        let value = value.to_string();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children_from(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[inline] pub fn tag(&self) -> &'static str { self.tag }

    #[inline] pub fn children(&self) -> &[Element] { &self.children }

    #[inline] pub fn text_content(&self) -> Option<&str> { self.text.as_deref() }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get("class").is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// This element and all descendants matching `predicate`, depth first.
    pub fn find_all(&self, predicate: impl Fn(&Element) -> bool + Copy) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect(predicate, &mut out);
        out
    }

    fn collect<'a>(&'a self, predicate: impl Fn(&Element) -> bool + Copy, out: &mut Vec<&'a Element>) {
        if predicate(self) { out.push(self) }
        for child in &self.children {
            child.collect(predicate, out);
        }
    }

    /// Serialize as SVG markup, one element per line.
    pub(crate) fn write_to(&self, writer: &mut impl Write, depth: usize) -> std::io::Result<()> {
        let indent = "  ".repeat(depth);
        write!(writer, "{indent}<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(writer, r#" {name}="{}""#, xml_escape(value))?;
        }

        match (&self.text, self.children.is_empty()) {
            (None, true) => writeln!(writer, "/>"),
            (Some(text), true) => writeln!(writer, ">{}</{}>", xml_escape(text), self.tag),
            (text, false) => {
                writeln!(writer, ">")?;
                if let Some(text) = text {
                    writeln!(writer, "{indent}  {}", xml_escape(text))?;
                }
                for child in &self.children {
                    child.write_to(writer, depth + 1)?;
                }
                writeln!(writer, "{indent}</{}>", self.tag)
            }
        }
    }
}

/// Escape the five XML special characters for attribute values and text.
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
