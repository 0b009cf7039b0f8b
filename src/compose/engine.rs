use crate::catalog::templates::{
    Background, BorderSides, BorderSpec, LayoutVariant, LineStyle, Template,
};
use crate::compose::layout::{Justify, LayoutMetrics, PUSH_DOWN_PX, decoration_kind, flow};
use crate::compose::text::{block_width, line_width, lines, parse_ceremony, parse_rsvp};
use crate::decor::{
    DecorContext, Side, circle, fallback_illustration, path, rect, render_bottom_border,
    render_decoration, render_side_border, render_texture, scroll_rods, stops, translate_scale,
};
use crate::foundation::core::{Color, Point, Rect, Vec2};
use crate::model::record::DataRecord;
use crate::model::style::{FieldId, LayerKind, Palette, PhotoShape};
use crate::render::node::{Element, Fragment, Node, num};

/// Side of the inline photo frame, in px.
pub const PHOTO_FRAME_PX: f64 = 100.0;
/// Selection outline distance from the field bounds.
pub const OUTLINE_INSET_PX: f64 = 8.0;
pub const HANDLE_RADIUS_PX: f64 = 16.0;

const GROUP_GAP_PX: f64 = 4.0;

/// Editing state that only affects the selection chrome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub active_field: Option<FieldId>,
    pub move_mode: bool,
    /// False for gallery thumbnails; no selection chrome is drawn.
    pub editable: bool,
}

impl ViewState {
    pub fn thumbnail() -> Self {
        Self::default()
    }

    pub fn editing(active_field: Option<FieldId>, move_mode: bool) -> Self {
        Self {
            active_field,
            move_mode,
            editable: true,
        }
    }
}

/// Paint-order slot of a layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerRole {
    Background,
    Texture,
    Decoration,
    ScrollRods,
    LeftBorder,
    RightBorder,
    BottomBorder,
    Body,
    Fields,
    Selection,
}

impl LayerRole {
    pub fn as_str(self) -> &'static str {
        match self {
            LayerRole::Background => "background",
            LayerRole::Texture => "texture",
            LayerRole::Decoration => "decoration",
            LayerRole::ScrollRods => "scroll-rods",
            LayerRole::LeftBorder => "left-border",
            LayerRole::RightBorder => "right-border",
            LayerRole::BottomBorder => "bottom-border",
            LayerRole::Body => "body",
            LayerRole::Fields => "fields",
            LayerRole::Selection => "selection",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub role: LayerRole,
    pub fragment: Fragment,
}

/// A text field as laid out on the card.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedField {
    pub field: FieldId,
    pub font_px: f64,
    /// Manual offset applied on top of the flow position.
    pub offset: Vec2,
    /// Estimated box, offset included.
    pub bounds: Rect,
    pub color: Color,
}

/// The composed card: ordered layers plus the geometry interaction needs.
#[derive(Clone, Debug, PartialEq)]
pub struct Composition {
    pub metrics: LayoutMetrics,
    pub layers: Vec<Layer>,
    /// Fields in paint order; the active field, if any, comes last.
    pub fields: Vec<PlacedField>,
    /// Resize handle center of the active field.
    pub handle: Option<(FieldId, Point)>,
}

impl Composition {
    pub fn layer(&self, role: LayerRole) -> Option<&Layer> {
        self.layers.iter().find(|l| l.role == role)
    }

    pub fn roles(&self) -> Vec<LayerRole> {
        self.layers.iter().map(|l| l.role).collect()
    }

    pub fn field(&self, field: FieldId) -> Option<&PlacedField> {
        self.fields.iter().find(|f| f.field == field)
    }

    /// Topmost field whose bounds contain `p`.
    pub fn field_at(&self, p: Point) -> Option<FieldId> {
        self.fields
            .iter()
            .rev()
            .find(|f| f.bounds.contains(p))
            .map(|f| f.field)
    }

    /// Field whose resize handle is under `p`.
    pub fn handle_at(&self, p: Point) -> Option<FieldId> {
        self.handle
            .filter(|(_, c)| (p - *c).hypot() <= HANDLE_RADIUS_PX)
            .map(|(f, _)| f)
    }

    pub fn to_svg(&self) -> String {
        let c = self.metrics.canvas;
        let root = Element::new("svg")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("xmlns:xlink", "http://www.w3.org/1999/xlink")
            .num("width", c.width)
            .num("height", c.height)
            .attr("viewBox", format!("0 0 {} {}", num(c.width), num(c.height)))
            .children(self.layers.iter().map(|l| {
                Element::new("g")
                    .attr("data-layer", l.role.as_str())
                    .children(l.fragment.nodes.iter().cloned())
            }));
        let mut out = String::with_capacity(16 * 1024);
        Node::from(root).write_svg(&mut out);
        out
    }
}

/// Compose the card for `record` on `template`. Pure: equal inputs give equal output.
#[tracing::instrument(level = "debug", skip_all, fields(template = %template.id))]
pub fn render(record: &DataRecord, template: &Template, view: ViewState) -> Composition {
    let metrics = LayoutMetrics::compute(record, template);
    let palette = record.custom_colors.as_ref();
    let ctx = DecorContext::new(metrics.canvas, template, palette);
    let mut layers = Vec::new();
    let mut push = |role: LayerRole, fragment: Fragment| {
        if !fragment.is_empty() {
            layers.push(Layer { role, fragment });
        }
    };

    push(LayerRole::Background, background(&metrics, template, palette));
    let tex = &record.background_texture;
    push(LayerRole::Texture, render_texture(&tex.kind, tex.opacity, &ctx));
    let decor = LayerKind::from(decoration_kind(record, template));
    push(
        LayerRole::Decoration,
        render_decoration(&decor, record.decoration.opacity, &ctx),
    );
    if template.layout == LayoutVariant::Scroll {
        push(LayerRole::ScrollRods, scroll_rods(&ctx));
    }
    for (role, side, layer) in [
        (LayerRole::LeftBorder, Side::Left, &record.left_border),
        (LayerRole::RightBorder, Side::Right, &record.right_border),
    ] {
        push(role, render_side_border(side, &layer.kind, layer.opacity, &ctx));
    }
    let bottom = &record.bottom_border;
    push(
        LayerRole::BottomBorder,
        render_bottom_border(&bottom.kind, bottom.opacity, &ctx),
    );

    let theme = Theme::new(record, template);
    let column = Column::build(record, template.layout, &metrics, &theme);
    let (mut drawn, photo) = column.place(&metrics);
    let mut chrome = body(record, template, &metrics, &ctx, &theme);
    if let (Some(frame), Some(href)) = (photo, record.photo.as_deref()) {
        chrome.push(inline_photo(href, frame, record));
    }
    push(LayerRole::Body, chrome);

    let active = view.active_field.filter(|_| view.editable);
    if let Some(a) = active
        && let Some(i) = drawn.iter().position(|d| d.placed.field == a)
    {
        let selected = drawn.remove(i);
        drawn.push(selected);
    }
    let (nodes, fields): (Vec<Node>, Vec<PlacedField>) =
        drawn.into_iter().map(|d| (d.node, d.placed)).unzip();
    push(LayerRole::Fields, Fragment::from(nodes));

    let mut handle = None;
    if let Some(selected) = active.and_then(|a| fields.iter().find(|f| f.field == a)) {
        let dark = palette
            .map(|p| p.background)
            .unwrap_or_else(|| template.effective_background().base())
            .is_dark();
        let (chrome, center) = selection(selected, dark);
        handle = Some((selected.field, center));
        layers.push(Layer {
            role: LayerRole::Selection,
            fragment: chrome,
        });
    }

    tracing::debug!(
        layers = layers.len(),
        fields = fields.len(),
        scale = metrics.scale,
        "composed card"
    );
    Composition {
        metrics,
        layers,
        fields,
        handle,
    }
}

/// Template color tokens with the palette applied.
struct Theme {
    text: Color,
    accent: Color,
    headline: Color,
    font: &'static str,
    palette: Option<Palette>,
}

impl Theme {
    fn new(record: &DataRecord, template: &Template) -> Self {
        Self {
            text: template.style.text,
            accent: template.style.accent,
            headline: template.style.headline,
            font: template.style.font.css(),
            palette: record.custom_colors,
        }
    }

    /// Per-field color, else the palette role color, else the template token.
    fn field_color(&self, record: &DataRecord, field: FieldId) -> Color {
        if let Some(c) = record.text_styles.get(field).color {
            return c;
        }
        if let Some(p) = &self.palette {
            return p.color_for(field.palette_role());
        }
        match field {
            FieldId::Headline => self.headline,
            FieldId::SubHeading
            | FieldId::VenueTitle
            | FieldId::AmpersandSymbol
            | FieldId::SwastikSymbol => self.accent,
            _ => self.text,
        }
    }

    /// Accent used for secondary labels inside a field.
    fn label_color(&self, record: &DataRecord, field: FieldId) -> Color {
        record
            .text_styles
            .get(field)
            .color
            .or(self.palette.map(|p| p.accent))
            .unwrap_or(self.accent)
    }
}

fn background(metrics: &LayoutMetrics, template: &Template, palette: Option<&Palette>) -> Fragment {
    let c = metrics.canvas;
    let bg = match palette {
        Some(p) => Background::Solid {
            color: p.background,
        },
        None => template.effective_background(),
    };
    let fill = |el: Element| match bg {
        Background::Solid { color } => vec![Node::from(el.fill(color))],
        Background::Vertical { from, to } | Background::Diagonal { from, to } => {
            let diagonal = matches!(bg, Background::Diagonal { .. });
            let grad = stops(
                Element::new("linearGradient")
                    .attr("id", "card-background")
                    .num("x1", 0.0)
                    .num("y1", 0.0)
                    .num("x2", if diagonal { 1.0 } else { 0.0 })
                    .num("y2", 1.0),
                &[(0.0, from), (1.0, to)],
            );
            vec![
                Element::new("defs").child(grad).into(),
                el.attr("fill", "url(#card-background)").into(),
            ]
        }
    };
    Fragment::from(fill(rect(0.0, 0.0, c.width, c.height)))
}

fn body(
    record: &DataRecord,
    template: &Template,
    metrics: &LayoutMetrics,
    ctx: &DecorContext,
    theme: &Theme,
) -> Fragment {
    let mut out = Fragment::empty();
    let c = metrics.canvas;
    let scale = record.photo_style.scale;

    if let Some(panel) = metrics.photo_panel {
        out.push(split_panel(record, template, panel, theme));
    } else if template.layout == LayoutVariant::FullOverlay {
        let full = c.rect();
        match record.photo.as_deref() {
            Some(href) => {
                let (cx, cy) = (full.center().x, full.center().y);
                let offset = Vec2::new(record.photo_style.x, record.photo_style.y);
                out.push(
                    image(href, full).attr(
                        "transform",
                        format!(
                            "translate({} {}) scale({}) translate({} {})",
                            num(cx),
                            num(cy),
                            num(scale),
                            num(offset.x - cx),
                            num(offset.y - cy)
                        ),
                    ),
                );
            }
            None => {
                out.push(rect(0.0, 0.0, c.width, c.height).fill(Color::hex(0x1f2937)));
                out.push(fallback_illustration(ctx, full.center().x, full.center().y));
            }
        }
        let scrim = stops(
            Element::new("linearGradient")
                .attr("id", "overlay-scrim")
                .num("x1", 0.0)
                .num("y1", 0.0)
                .num("x2", 0.0)
                .num("y2", 1.0),
            &[
                (0.0, Color::BLACK.with_alpha(0.6)),
                (0.5, Color::BLACK.with_alpha(0.4)),
                (1.0, Color::BLACK),
            ],
        );
        out.push(Element::new("defs").child(scrim));
        out.push(
            rect(0.0, 0.0, c.width, c.height).attr("fill", "url(#overlay-scrim)"),
        );
    }

    let frame = match record.custom_colors {
        Some(p) => Some(BorderSpec::new(p.border, 2.0, 0.0)),
        None => template.style.border,
    };
    if let Some(spec) = frame {
        out.push(
            Element::new("g")
                .attr("class", "frame")
                .children(frame_lines(metrics.body, &spec)),
        );
    }
    out
}

fn split_panel(record: &DataRecord, template: &Template, panel: Rect, theme: &Theme) -> Element {
    let edge = theme
        .palette
        .map(|p| p.border)
        .unwrap_or(Color::hex(0xeab308).with_alpha(0.3));
    let clip = Element::new("clipPath")
        .attr("id", "split-photo-clip")
        .child(rect_of(panel));
    let mut g = Element::new("g")
        .attr("class", "photo-panel")
        .child(Element::new("defs").child(clip))
        .child(rect_of(panel).fill(Color::BLACK.with_alpha(0.2)));
    match record.photo.as_deref() {
        Some(href) => {
            let (cx, cy) = (panel.center().x, panel.center().y);
            let s = record.photo_style.scale;
            g = g.child(
                Element::new("g").attr("clip-path", "url(#split-photo-clip)").child(
                    image(href, panel)
                        .attr(
                            "transform",
                            format!(
                                "translate({} {}) scale({}) translate({} {})",
                                num(cx),
                                num(cy),
                                num(s),
                                num(-cx),
                                num(-cy)
                            ),
                        )
                        .opacity(0.9),
                ),
            );
        }
        None => {
            let grad = stops(
                Element::new("linearGradient")
                    .attr("id", "split-placeholder")
                    .num("x1", 0.0)
                    .num("y1", 0.0)
                    .num("x2", 1.0)
                    .num("y2", 1.0),
                &[(0.0, Color::hex(0x713f12)), (1.0, Color::hex(0x7f1d1d))],
            );
            let c = panel.center();
            g = g
                .child(Element::new("defs").child(grad))
                .child(rect_of(panel).attr("fill", "url(#split-placeholder)"))
                .child(
                    path("M50 0 L100 50 L50 100 L0 50 Z")
                        .attr(
                            "transform",
                            translate_scale(c.x - 48.0, c.y - 48.0, 0.96, 0.96),
                        )
                        .fill(Color::hex(0xfef08a))
                        .opacity(0.6),
                );
        }
    }
    let edge_x = if template.layout == LayoutVariant::SplitLeft {
        panel.x1 - 2.0
    } else {
        panel.x0
    };
    g.child(rect(edge_x, panel.y0, 2.0, panel.height()).fill(edge))
}

fn rect_of(r: Rect) -> Element {
    rect(r.x0, r.y0, r.width(), r.height())
}

fn image(href: &str, r: Rect) -> Element {
    Element::new("image")
        .num("x", r.x0)
        .num("y", r.y0)
        .num("width", r.width())
        .num("height", r.height())
        .attr("xlink:href", href)
        .attr("preserveAspectRatio", "xMidYMid slice")
}

/// Stroke bands for a frame drawn `spec.inset` inside `outer`.
fn frame_lines(outer: Rect, spec: &BorderSpec) -> Vec<Node> {
    let r = outer.inset(-spec.inset);
    let w = spec.width;
    let bands: Vec<(f64, f64)> = match spec.line {
        LineStyle::Double => vec![(w / 6.0, w / 3.0), (w * 5.0 / 6.0, w / 3.0)],
        LineStyle::Solid | LineStyle::Dashed => vec![(w / 2.0, w)],
    };
    let (top, sides) = match spec.sides {
        BorderSides::All => (true, true),
        BorderSides::X => (false, true),
        BorderSides::Y => (true, false),
    };
    let mut out = Vec::new();
    for (off, width) in bands {
        let b = r.inset(-off);
        let mut segments = Vec::new();
        if top {
            segments.push((b.x0, b.y0, b.x1, b.y0));
            segments.push((b.x0, b.y1, b.x1, b.y1));
        }
        if sides {
            segments.push((b.x0, b.y0, b.x0, b.y1));
            segments.push((b.x1, b.y0, b.x1, b.y1));
        }
        for (x1, y1, x2, y2) in segments {
            let mut line = Element::new("line")
                .num("x1", x1)
                .num("y1", y1)
                .num("x2", x2)
                .num("y2", y2)
                .stroke(spec.color, width);
            if spec.line == LineStyle::Dashed {
                line = line.attr("stroke-dasharray", format!("{} {}", num(w * 3.0), num(w * 2.0)));
            }
            out.push(line.into());
        }
    }
    out
}

fn inline_photo(href: &str, frame: Rect, record: &DataRecord) -> Element {
    let style = record.photo_style;
    let size = PHOTO_FRAME_PX;
    let mask = match style.shape {
        PhotoShape::Circle => circle(size / 2.0, size / 2.0, size / 2.0),
        PhotoShape::Rounded => rect(0.0, 0.0, size, size).num("rx", 8.0),
        PhotoShape::Square => rect(0.0, 0.0, size, size),
    };
    let half = num(size / 2.0);
    Element::new("g")
        .attr("class", "inline-photo")
        .attr(
            "transform",
            translate_scale(frame.x0 + style.x, frame.y0 + style.y, 1.0, 1.0),
        )
        .child(
            Element::new("defs").child(
                Element::new("clipPath")
                    .attr("id", "inline-photo-clip")
                    .child(mask.clone()),
            ),
        )
        .child(
            Element::new("g").attr("clip-path", "url(#inline-photo-clip)").child(
                image(href, Rect::new(0.0, 0.0, size, size)).attr(
                    "transform",
                    format!(
                        "translate({half} {half}) scale({}) translate(-{half} -{half})",
                        num(style.scale)
                    ),
                ),
            ),
        )
        .child(
            mask.attr("fill", "none")
                .stroke(Color::WHITE.with_alpha(0.5), 2.0),
        )
}

fn selection(field: &PlacedField, dark: bool) -> (Fragment, Point) {
    let ink = if dark { Color::WHITE } else { Color::BLACK };
    let knob = if dark { Color::hex(0x333333) } else { Color::WHITE };
    let outline = field.bounds.inset(OUTLINE_INSET_PX);
    let center = Point::new(outline.x1, outline.y1);
    let frag = Fragment::from(vec![
        Node::from(
            rect_of(outline)
                .num("rx", 4.0)
                .attr("fill", "none")
                .stroke(ink, 2.0)
                .attr("stroke-dasharray", "6 4")
                .attr("class", "selection-outline"),
        ),
        Node::from(
            circle(center.x, center.y, HANDLE_RADIUS_PX)
                .fill(knob)
                .stroke(ink, 2.0)
                .attr("class", "resize-handle"),
        ),
        Node::from(
            path("M-4 4 L4 -4 M0 -4 H4 V0 M-4 0 V4 H0")
                .attr(
                    "transform",
                    translate_scale(center.x, center.y, 1.0, 1.0),
                )
                .attr("fill", "none")
                .stroke(ink, 1.5),
        ),
    ]);
    (frag, center)
}

/// How a field's text is drawn.
enum FieldBody {
    Lines {
        lines: Vec<String>,
        leading: f64,
        weight: u16,
        opacity: f64,
        tracking: f64,
        full_width: bool,
    },
    Ceremony {
        title: Vec<String>,
        detail: Vec<String>,
        title_color: Color,
    },
    Rsvp {
        label: String,
        names: Vec<String>,
        label_color: Color,
    },
}

struct FieldBlock {
    field: FieldId,
    font_px: f64,
    color: Color,
    offset: Vec2,
    body: FieldBody,
}

impl FieldBlock {
    fn height(&self) -> f64 {
        let f = self.font_px;
        match &self.body {
            FieldBody::Lines { lines, leading, .. } => lines.len() as f64 * f * leading,
            FieldBody::Ceremony { title, detail, .. } => {
                let title_h = title.len() as f64 * f * 1.25 * 1.4;
                let gap = if title.is_empty() { 0.0 } else { 4.0 };
                2.0 + 8.0 + title_h + gap + detail.len() as f64 * f * 1.625
            }
            FieldBody::Rsvp { names, .. } => names.len().max(1) as f64 * f * 1.5,
        }
    }

    fn width(&self, content_width: f64) -> f64 {
        let f = self.font_px;
        match &self.body {
            FieldBody::Lines {
                full_width: true, ..
            }
            | FieldBody::Ceremony { .. } => content_width,
            FieldBody::Lines {
                lines, tracking, ..
            } => {
                let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
                block_width(&refs, f, *tracking)
            }
            FieldBody::Rsvp { label, names, .. } => {
                let first = names.first().map(String::as_str).unwrap_or("");
                let head = line_width(&format!("{label} {first}"), f, 0.0);
                names
                    .iter()
                    .skip(1)
                    .map(|l| line_width(l, f, 0.0))
                    .fold(head, f64::max)
            }
        }
    }
}

enum Block {
    Field(FieldBlock),
    Photo,
}

struct Part {
    block: Block,
    mt: f64,
    mb: f64,
}

impl Part {
    fn new(block: Block, mt: f64, mb: f64) -> Self {
        Self { block, mt, mb }
    }

    fn height(&self) -> f64 {
        let inner = match &self.block {
            Block::Field(f) => f.height(),
            Block::Photo => PHOTO_FRAME_PX,
        };
        self.mt + inner + self.mb
    }
}

/// Top-level children of the content column, top to bottom.
struct Column {
    groups: Vec<Vec<Part>>,
    font: &'static str,
    justify: Justify,
}

struct Drawn {
    placed: PlacedField,
    node: Node,
}

impl Column {
    fn build(
        record: &DataRecord,
        layout: LayoutVariant,
        metrics: &LayoutMetrics,
        theme: &Theme,
    ) -> Self {
        let field = |id: FieldId, body: FieldBody| {
            let style = record.text_styles.get(id);
            Block::Field(FieldBlock {
                field: id,
                font_px: metrics.font_px(id, style.font_size),
                color: theme.field_color(record, id),
                offset: Vec2::new(style.x, style.y),
                body,
            })
        };
        let text = |id: FieldId, leading: f64, weight: u16, opacity: f64, full_width: bool| {
            let raw = record.text(id);
            let owned = if id == FieldId::Headline {
                raw.to_uppercase()
            } else {
                raw.to_owned()
            };
            field(
                id,
                FieldBody::Lines {
                    lines: lines(&owned).into_iter().map(str::to_owned).collect(),
                    leading,
                    weight,
                    opacity,
                    tracking: if id == FieldId::Headline { 0.1 } else { 0.0 },
                    full_width,
                },
            )
        };

        let mut groups: Vec<Vec<Part>> = Vec::new();
        let push_down = if metrics.push_down { PUSH_DOWN_PX } else { 0.0 };
        groups.push(vec![Part::new(
            text(FieldId::Headline, 1.25, 700, 1.0, false),
            push_down,
            8.0,
        )]);
        groups.push(vec![
            Part::new(text(FieldId::GroomName, 1.0, 700, 1.0, false), 4.0, 4.0),
            Part::new(text(FieldId::GroomParents, 1.25, 400, 0.9, true), 12.0, 0.0),
        ]);

        // Split and overlay layouts show the photo elsewhere.
        let inline_photo = metrics.photo_applicable
            && matches!(
                layout,
                LayoutVariant::Standard | LayoutVariant::Scroll | LayoutVariant::Polaroid
            );
        if inline_photo {
            groups.push(vec![Part::new(Block::Photo, 8.0, 8.0)]);
        }

        if metrics.symbol_visible
            && let Some(sym) = record.symbol.field()
        {
            groups.push(vec![Part::new(text(sym, 1.0, 400, 0.9, false), 4.0, 4.0)]);
        }

        groups.push(vec![
            Part::new(text(FieldId::BrideName, 1.0, 700, 1.0, false), 8.0, 4.0),
            Part::new(text(FieldId::BrideParents, 1.25, 400, 0.9, true), 12.0, 0.0),
        ]);
        groups.push(vec![Part::new(
            text(FieldId::SubHeading, 1.2, 700, 1.0, false),
            8.0,
            4.0,
        )]);
        groups.push(vec![Part::new(
            text(FieldId::Message, 1.625, 500, 0.9, true),
            0.0,
            8.0,
        )]);

        if !record.ceremony_details.is_empty() {
            let parts = parse_ceremony(&record.ceremony_details);
            let own = |s: &str| lines(s).into_iter().map(str::to_owned).collect::<Vec<_>>();
            groups.push(vec![Part::new(
                field(
                    FieldId::CeremonyDetails,
                    FieldBody::Ceremony {
                        title: own(&parts.title),
                        detail: own(&parts.detail),
                        title_color: theme.label_color(record, FieldId::CeremonyDetails),
                    },
                ),
                0.0,
                8.0,
            )]);
        }

        groups.push(vec![
            Part::new(text(FieldId::VenueTitle, 1.2, 700, 1.0, false), 0.0, 4.0),
            Part::new(text(FieldId::VenueName, 1.25, 700, 1.0, false), 0.0, 2.0),
            Part::new(text(FieldId::VenueAddress, 1.25, 400, 0.9, false), 0.0, 8.0),
        ]);

        if !record.rsvp.is_empty() {
            let parts = parse_rsvp(&record.rsvp);
            groups.push(vec![Part::new(
                field(
                    FieldId::Rsvp,
                    FieldBody::Rsvp {
                        label: parts.label,
                        names: lines(&parts.names).into_iter().map(str::to_owned).collect(),
                        label_color: theme.label_color(record, FieldId::Rsvp),
                    },
                ),
                4.0,
                0.0,
            )]);
        }

        Self {
            groups,
            font: theme.font,
            justify: metrics.justify,
        }
    }

    /// Position every block. Returns the drawn fields and the inline photo frame.
    fn place(self, metrics: &LayoutMetrics) -> (Vec<Drawn>, Option<Rect>) {
        let content = metrics.content();
        let heights: Vec<f64> = self
            .groups
            .iter()
            .map(|g| g.iter().map(Part::height).sum())
            .collect();
        let tops = flow(
            &heights,
            content.y0,
            content.height(),
            GROUP_GAP_PX,
            self.justify,
        );
        let cx = content.center().x;
        let mut drawn = Vec::new();
        let mut photo = None;
        for (group, top) in self.groups.into_iter().zip(tops) {
            let mut y = top;
            for part in group {
                y += part.mt;
                match part.block {
                    Block::Photo => {
                        let s = PHOTO_FRAME_PX;
                        let frame = Rect::new(cx - s / 2.0, y, cx + s / 2.0, y + s);
                        photo = Some(frame);
                        y += s;
                    }
                    Block::Field(block) => {
                        let h = block.height();
                        drawn.push(draw_field(&block, cx, y, content, self.font));
                        y += h;
                    }
                }
                y += part.mb;
            }
        }
        (drawn, photo)
    }
}

fn draw_field(block: &FieldBlock, cx: f64, top: f64, content: Rect, font: &str) -> Drawn {
    let f = block.font_px;
    let w = block.width(content.width()).max(1.0);
    let h = block.height();
    let base = Rect::new(cx - w / 2.0, top, cx + w / 2.0, top + h);
    let bounds = base + block.offset;

    let text_el = |y: f64, size: f64| {
        Element::new("text")
            .num("x", cx)
            .num("y", y)
            .num("font-size", size)
            .attr("font-family", font)
            .attr("text-anchor", "middle")
    };
    let baseline = |line_top: f64, line_h: f64, size: f64| line_top + (line_h - size) / 2.0 + size * 0.8;

    let mut g = Element::new("g")
        .attr("class", "field")
        .attr("data-field", block.field.as_str());
    if block.offset != Vec2::ZERO {
        g = g.attr(
            "transform",
            format!("translate({} {})", num(block.offset.x), num(block.offset.y)),
        );
    }

    match &block.body {
        FieldBody::Lines {
            lines,
            leading,
            weight,
            opacity,
            tracking,
            ..
        } => {
            let lh = f * leading;
            for (i, line) in lines.iter().enumerate() {
                let mut t = text_el(baseline(top + lh * i as f64, lh, f), f)
                    .attr("font-weight", weight.to_string())
                    .fill(block.color)
                    .opacity(*opacity);
                if *tracking > 0.0 {
                    t = t.num("letter-spacing", f * tracking);
                }
                g = g.child(t.text(line.as_str()));
            }
        }
        FieldBody::Ceremony {
            title,
            detail,
            title_color,
        } => {
            let rule = |y: f64| {
                rect(content.x0, y, content.width(), 1.0)
                    .fill(block.color)
                    .opacity(0.9)
            };
            g = g.child(rule(top));
            let mut y = top + 1.0 + 4.0;
            let title_px = f * 1.25;
            let title_lh = title_px * 1.4;
            for line in title {
                g = g.child(
                    text_el(baseline(y, title_lh, title_px), title_px)
                        .attr("font-weight", "700")
                        .fill(*title_color)
                        .opacity(0.9)
                        .text(line.as_str()),
                );
                y += title_lh;
            }
            if !title.is_empty() {
                y += 4.0;
            }
            let lh = f * 1.625;
            for line in detail {
                g = g.child(
                    text_el(baseline(y, lh, f), f)
                        .attr("font-weight", "700")
                        .fill(block.color)
                        .opacity(0.9)
                        .text(line.as_str()),
                );
                y += lh;
            }
            g = g.child(rule(top + h - 1.0));
        }
        FieldBody::Rsvp {
            label,
            names,
            label_color,
        } => {
            let lh = f * 1.5;
            let mut rows = names.clone();
            if rows.is_empty() {
                rows.push(String::new());
            }
            for (i, line) in rows.iter().enumerate() {
                let mut t = text_el(baseline(top + lh * i as f64, lh, f), f).attr("font-weight", "700");
                if i == 0 && !label.is_empty() {
                    t = t.child(
                        Element::new("tspan")
                            .fill(*label_color)
                            .text(format!("{label} ")),
                    );
                }
                t = t.child(
                    Element::new("tspan")
                        .attr("fill", block.color.to_hex())
                        .num("fill-opacity", 0.8 * block.color.opacity())
                        .text(line.as_str()),
                );
                g = g.child(t);
            }
        }
    }

    Drawn {
        placed: PlacedField {
            field: block.field,
            font_px: f,
            offset: block.offset,
            bounds,
            color: block.color,
        },
        node: g.into(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/engine.rs"]
mod tests;
