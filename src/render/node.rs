use std::borrow::Cow;
use std::fmt::Write as _;

use crate::foundation::core::Color;

/// One SVG element or text run in the composed tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((key, value.into()));
        self
    }

    /// Numeric attribute, formatted with [`num`].
    pub fn num(self, key: &'static str, value: f64) -> Self {
        self.attr(key, num(value))
    }

    pub fn fill(self, color: Color) -> Self {
        paint(self, "fill", "fill-opacity", color)
    }

    pub fn stroke(self, color: Color, width: f64) -> Self {
        paint(self, "stroke", "stroke-opacity", color).num("stroke-width", width)
    }

    pub fn opacity(self, value: f64) -> Self {
        if (value - 1.0).abs() < f64::EPSILON {
            self
        } else {
            self.num("opacity", value.clamp(0.0, 1.0))
        }
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(mut self, s: impl Into<String>) -> Self {
        self.children.push(Node::Text(s.into()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

fn paint(el: Element, key: &'static str, opacity_key: &'static str, color: Color) -> Element {
    let el = el.attr(key, color.to_hex());
    if color.a == 255 {
        el
    } else {
        el.num(opacity_key, color.opacity())
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Depth-first visit of every element, this one included.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Element)) {
        if let Node::Element(el) = self {
            f(el);
            for c in &el.children {
                c.walk(f);
            }
        }
    }

    /// Concatenated text content.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(s) => out.push_str(s),
            Node::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
        }
    }

    pub fn write_svg(&self, out: &mut String) {
        match self {
            Node::Text(s) => out.push_str(&escape_xml(s)),
            Node::Element(el) => {
                out.push('<');
                out.push_str(el.tag);
                for (k, v) in &el.attrs {
                    let _ = write!(out, " {k}=\"{}\"", escape_xml(v));
                }
                if el.children.is_empty() {
                    out.push_str("/>");
                    return;
                }
                out.push('>');
                for c in &el.children {
                    c.write_svg(out);
                }
                let _ = write!(out, "</{}>", el.tag);
            }
        }
    }
}

/// Ordered nodes produced by one renderer. Empty when the variant draws nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fragment {
    pub nodes: Vec<Node>,
}

impl Fragment {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }

    /// Wrap in a `<g>` carrying `opacity`; empty fragments stay empty.
    pub fn into_group(self, opacity: f64) -> Option<Element> {
        if self.is_empty() {
            return None;
        }
        Some(Element::new("g").opacity(opacity).children(self.nodes))
    }
}

impl From<Vec<Node>> for Fragment {
    fn from(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}

/// Compact, deterministic number formatting: at most three decimals, no trailing zeros.
pub fn num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_owned();
    }
    let rounded = (v * 1000.0).round() / 1000.0;
    let mut s = format!("{rounded:.3}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s = "0".to_owned();
    }
    s
}

pub fn escape_xml(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 8);
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
    Cow::Owned(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/node.rs"]
mod tests;
