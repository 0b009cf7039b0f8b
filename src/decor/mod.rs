//! Decoration lookup tables.
//!
//! Each overlay family (main decoration, bottom border, side borders, background texture)
//! is a static table from identifier to recipe. Rendering an identifier that is `none`
//! or not in the table yields an empty [`Fragment`]; it is never an error.

/// Bottom and side border strips.
pub mod borders;
/// Main decorative overlays and the scroll rods.
pub mod decorations;
/// Full-card background textures.
pub mod textures;

pub use borders::{
    Side, bottom_border_ids, render_bottom_border, render_side_border, side_border_ids,
};
pub use decorations::{decoration_ids, fallback_illustration, render_decoration, scroll_rods};
pub use textures::{render_texture, texture_ids};

use crate::catalog::templates::Template;
use crate::foundation::core::{Canvas, Color};
use crate::model::style::Palette;
use crate::render::node::{Element, Fragment, Node};

/// Inputs shared by every recipe: the card box and the colors recipes may tint with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecorContext {
    pub width: f64,
    pub height: f64,
    /// Template accent token.
    pub accent: Color,
    /// Template body text token.
    pub text: Color,
    /// Palette accent; replaces every hard-coded recipe color when set.
    pub accent_override: Option<Color>,
    pub palette: Option<Palette>,
}

impl DecorContext {
    pub fn new(canvas: Canvas, template: &Template, palette: Option<&Palette>) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            accent: template.style.accent,
            text: template.style.text,
            accent_override: palette.map(|p| p.accent),
            palette: palette.copied(),
        }
    }

    /// Accent override if present, else the template accent.
    pub fn accent(&self) -> Color {
        self.accent_override.unwrap_or(self.accent)
    }

    /// Accent override if present, else the recipe's own color.
    pub fn tint(&self, fallback: Color) -> Color {
        self.accent_override.unwrap_or(fallback)
    }
}

pub(crate) fn rect(x: f64, y: f64, w: f64, h: f64) -> Element {
    Element::new("rect")
        .num("x", x)
        .num("y", y)
        .num("width", w.max(0.0))
        .num("height", h.max(0.0))
}

pub(crate) fn circle(cx: f64, cy: f64, r: f64) -> Element {
    Element::new("circle").num("cx", cx).num("cy", cy).num("r", r)
}

pub(crate) fn path(d: &str) -> Element {
    Element::new("path").attr("d", d)
}

/// Centered text glyph with its baseline at `y`.
pub(crate) fn glyph(text: &str, x: f64, y: f64, size: f64, color: Color) -> Element {
    Element::new("text")
        .num("x", x)
        .num("y", y)
        .num("font-size", size)
        .attr("text-anchor", "middle")
        .fill(color)
        .text(text)
}

pub(crate) fn translate_scale(x: f64, y: f64, sx: f64, sy: f64) -> String {
    use crate::render::node::num;
    format!("translate({} {}) scale({} {})", num(x), num(y), num(sx), num(sy))
}

/// Item centers for `count` items of `size` laid out with space between them over
/// `[start, end]`.
pub(crate) fn spread_between(count: usize, size: f64, start: f64, end: f64) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![(start + end) / 2.0],
        n => {
            let first = start + size / 2.0;
            let step = (end - start - size) / (n - 1) as f64;
            (0..n).map(|i| first + step * i as f64).collect()
        }
    }
}

/// Item centers for `count` items with equal space around each over `[start, end]`.
pub(crate) fn spread_around(count: usize, start: f64, end: f64) -> Vec<f64> {
    let span = (end - start) / count.max(1) as f64;
    (0..count).map(|i| start + span * (i as f64 + 0.5)).collect()
}

pub(crate) fn stops(el: Element, stops: &[(f64, Color)]) -> Element {
    el.children(stops.iter().map(|(offset, c)| {
        Element::new("stop")
            .num("offset", *offset)
            .attr("stop-color", c.to_hex())
            .num("stop-opacity", c.opacity())
    }))
}

/// Horizontal (`horizontal = true`) or vertical linear gradient in bounding-box units.
pub(crate) fn linear_gradient(id: &str, horizontal: bool, colors: &[(f64, Color)]) -> Element {
    let el = Element::new("linearGradient")
        .attr("id", id)
        .num("x1", 0.0)
        .num("y1", 0.0)
        .num("x2", if horizontal { 1.0 } else { 0.0 })
        .num("y2", if horizontal { 0.0 } else { 1.0 });
    stops(el, colors)
}

pub(crate) fn pattern(id: &str, w: f64, h: f64, tile: Vec<Node>) -> Element {
    Element::new("pattern")
        .attr("id", id)
        .attr("patternUnits", "userSpaceOnUse")
        .num("width", w)
        .num("height", h)
        .children(tile)
}

pub(crate) fn defs(items: impl IntoIterator<Item = Element>) -> Element {
    Element::new("defs").children(items)
}

pub(crate) fn url(id: &str) -> String {
    format!("url(#{id})")
}

/// Wrap recipe output in a group tagged with the identifier. Empty output stays empty.
pub(crate) fn finish(class: &str, opacity: f64, nodes: Vec<Node>) -> Fragment {
    if nodes.is_empty() {
        return Fragment::empty();
    }
    let g = Element::new("g")
        .attr("class", class)
        .opacity(opacity)
        .children(nodes);
    Fragment::from(vec![Node::from(g)])
}

#[cfg(test)]
#[path = "../../tests/unit/decor/mod.rs"]
mod tests;
