use std::sync::OnceLock;

use crate::foundation::core::Color;
use crate::model::style::LayerKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Category {
    Traditional,
    Modern,
    Marathi,
    Floral,
    Royal,
    Unique,
    #[serde(rename = "Photo Cards")]
    PhotoCards,
    #[serde(rename = "Hindu Traditional")]
    HinduTraditional,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Traditional,
        Category::Modern,
        Category::Marathi,
        Category::Floral,
        Category::Royal,
        Category::Unique,
        Category::PhotoCards,
        Category::HinduTraditional,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Traditional => "Traditional",
            Category::Modern => "Modern",
            Category::Marathi => "Marathi",
            Category::Floral => "Floral",
            Category::Royal => "Royal",
            Category::Unique => "Unique",
            Category::PhotoCards => "Photo Cards",
            Category::HinduTraditional => "Hindu Traditional",
        }
    }

    /// Case-insensitive match on the label, ignoring spaces and dashes.
    pub fn parse(s: &str) -> Option<Self> {
        let norm = |v: &str| {
            v.chars()
                .filter(|c| !matches!(c, ' ' | '-' | '_'))
                .flat_map(char::to_lowercase)
                .collect::<String>()
        };
        let want = norm(s);
        Self::ALL.into_iter().find(|c| norm(c.label()) == want)
    }
}

/// Structural arrangement of the card body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutVariant {
    #[default]
    Standard,
    Scroll,
    SplitLeft,
    SplitRight,
    Polaroid,
    FullOverlay,
}

impl LayoutVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutVariant::Standard => "standard",
            LayoutVariant::Scroll => "scroll",
            LayoutVariant::SplitLeft => "split-left",
            LayoutVariant::SplitRight => "split-right",
            LayoutVariant::Polaroid => "polaroid",
            LayoutVariant::FullOverlay => "full-overlay",
        }
    }

    pub fn is_split(self) -> bool {
        matches!(self, LayoutVariant::SplitLeft | LayoutVariant::SplitRight)
    }
}

/// Font-family token; mapped to a CSS family list at render time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    Traditional,
    Script,
    Serif,
    Sans,
    Hindi,
}

impl FontFamily {
    pub fn css(self) -> &'static str {
        match self {
            FontFamily::Traditional => "'Playfair Display', 'Noto Serif Devanagari', serif",
            FontFamily::Script => "'Great Vibes', 'Noto Serif Devanagari', cursive",
            FontFamily::Serif => "'Cormorant Garamond', 'Noto Serif Devanagari', serif",
            FontFamily::Sans => "'Poppins', 'Noto Sans Devanagari', sans-serif",
            FontFamily::Hindi => "'Tiro Devanagari Marathi', 'Noto Serif Devanagari', serif",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Background {
    Solid { color: Color },
    /// Top-to-bottom gradient.
    Vertical { from: Color, to: Color },
    /// Top-left to bottom-right gradient.
    Diagonal { from: Color, to: Color },
}

impl Background {
    /// Representative color, used for contrast decisions.
    pub fn base(self) -> Color {
        match self {
            Background::Solid { color } => color,
            Background::Vertical { from, .. } | Background::Diagonal { from, .. } => from,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Double,
    Dashed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderSides {
    #[default]
    All,
    /// Left and right edges only.
    X,
    /// Top and bottom edges only.
    Y,
}

/// Frame drawn around the main content box.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderSpec {
    pub color: Color,
    pub width: f64,
    /// Margin between the card edge and the frame, px.
    pub inset: f64,
    pub line: LineStyle,
    pub sides: BorderSides,
}

impl BorderSpec {
    pub fn new(color: Color, width: f64, inset: f64) -> Self {
        Self {
            color,
            width,
            inset,
            line: LineStyle::Solid,
            sides: BorderSides::All,
        }
    }

    pub fn double(mut self) -> Self {
        self.line = LineStyle::Double;
        self
    }

    pub fn dashed(mut self) -> Self {
        self.line = LineStyle::Dashed;
        self
    }

    pub fn sides(mut self, sides: BorderSides) -> Self {
        self.sides = sides;
        self
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleBundle {
    pub background: Background,
    pub border: Option<BorderSpec>,
    pub text: Color,
    pub accent: Color,
    pub headline: Color,
    pub font: FontFamily,
    /// Decoration applied when the template is selected.
    pub decoration: LayerKind,
}

/// Immutable catalog entry.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub layout: LayoutVariant,
    pub has_photo: bool,
    pub has_heart_accent: bool,
    pub style: StyleBundle,
    /// Raw background override painted over the bundle background.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_override: Option<Color>,
}

impl Template {
    fn new(id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            layout: LayoutVariant::Standard,
            has_photo: false,
            has_heart_accent: false,
            style: StyleBundle {
                background: Background::Solid {
                    color: Color::WHITE,
                },
                border: None,
                text: Color::hex(0x1f2937),
                accent: Color::hex(0xfacc15),
                headline: Color::hex(0xfef08a),
                font: FontFamily::Traditional,
                decoration: LayerKind::none(),
            },
            background_override: None,
        }
    }

    fn layout(mut self, layout: LayoutVariant) -> Self {
        self.layout = layout;
        self
    }

    fn photo(mut self, yes: bool) -> Self {
        self.has_photo = yes;
        self
    }

    fn heart(mut self, yes: bool) -> Self {
        self.has_heart_accent = yes;
        self
    }

    fn bg(mut self, v: u32) -> Self {
        self.style.background = Background::Solid {
            color: Color::hex(v),
        };
        self
    }

    fn bg_with(mut self, background: Background) -> Self {
        self.style.background = background;
        self
    }

    fn override_bg(mut self, v: u32) -> Self {
        self.background_override = Some(Color::hex(v));
        self
    }

    fn border(mut self, border: BorderSpec) -> Self {
        self.style.border = Some(border);
        self
    }

    /// Text, accent and headline colors.
    fn colors(mut self, text: u32, accent: u32, headline: u32) -> Self {
        self.style.text = Color::hex(text);
        self.style.accent = Color::hex(accent);
        self.style.headline = Color::hex(headline);
        self
    }

    fn font(mut self, font: FontFamily) -> Self {
        self.style.font = font;
        self
    }

    fn decor(mut self, id: &str) -> Self {
        self.style.decoration = LayerKind::new(id);
        self
    }

    /// Background the engine paints before any palette override.
    pub fn effective_background(&self) -> Background {
        match self.background_override {
            Some(color) => Background::Solid { color },
            None => self.style.background,
        }
    }
}

fn frame(color: u32, width: f64, inset: f64) -> BorderSpec {
    BorderSpec::new(Color::hex(color), width, inset)
}

fn frame_a(color: u32, alpha: f64, width: f64, inset: f64) -> BorderSpec {
    BorderSpec::new(Color::hex(color).with_alpha(alpha), width, inset)
}

static CATALOG: OnceLock<Vec<Template>> = OnceLock::new();

/// Every template in gallery order. The first entry is the default.
pub fn catalog() -> &'static [Template] {
    CATALOG.get_or_init(build_catalog)
}

pub fn find(id: &str) -> Option<&'static Template> {
    catalog().iter().find(|t| t.id == id)
}

pub fn default_template() -> &'static Template {
    &catalog()[0]
}

/// Lookup with fallback to the default template for unknown ids.
pub fn resolve(id: &str) -> &'static Template {
    find(id).unwrap_or_else(|| {
        tracing::warn!(id, "unknown template id, falling back to default");
        default_template()
    })
}

pub fn by_category(category: Category) -> impl Iterator<Item = &'static Template> {
    catalog().iter().filter(move |t| t.category == category)
}

fn build_catalog() -> Vec<Template> {
    let mut out = Vec::with_capacity(160);
    unique(&mut out);
    modern_luxury(&mut out);
    photo_cards(&mut out);
    royal(&mut out);
    floral(&mut out);
    marathi(&mut out);
    hindu_traditional(&mut out);
    out
}

fn unique(out: &mut Vec<Template>) {
    use Category::Unique as U;
    use FontFamily::*;
    use LayoutVariant::*;

    out.push(
        Template::new("unique-royal-arch", "Mughal Archway", U)
            .heart(true)
            .bg(0x4a0404)
            .colors(0xfff7ed, 0xeab308, 0xfef08a)
            .font(Traditional)
            .decor("royal-arch"),
    );
    out.push(
        Template::new("unique-royal-pillars", "Golden Pillars", U)
            .heart(true)
            .bg_with(Background::Vertical {
                from: Color::hex(0x2c0000),
                to: Color::hex(0x500000),
            })
            .colors(0xfefce8, 0xfacc15, 0xfef9c3)
            .font(Traditional)
            .decor("royal-pillars"),
    );
    out.push(
        Template::new("unique-scroll-1", "Royal Farman Scroll", U)
            .layout(Scroll)
            .bg(0x520202)
            .border(frame_a(0xeab308, 0.5, 2.0, 8.0))
            .colors(0xfef9c3, 0xfacc15, 0xfacc15)
            .font(Script)
            .decor("damask-pattern"),
    );
    out.push(
        Template::new("unique-scroll-2", "Cream Gold Scroll", U)
            .layout(Scroll)
            .bg(0xfff8dc)
            .border(frame_a(0xca8a04, 0.3, 2.0, 8.0))
            .colors(0x713f12, 0xca8a04, 0xa16207)
            .font(Script)
            .decor("damask-pattern"),
    );
    out.push(
        Template::new("unique-gatefold-1", "Midnight Laser Cut", U)
            .bg(0x111827)
            .override_bg(0x1a1a1a)
            .border(frame_a(0xeab308, 0.3, 1.0, 32.0))
            .colors(0xfefce8, 0xfacc15, 0xfef08a)
            .font(Sans)
            .decor("gatefold-lattice"),
    );
    out.push(
        Template::new("unique-gatefold-2", "Royal Blue Gatefold", U)
            .bg(0x002366)
            .border(frame_a(0xfacc15, 0.3, 1.0, 32.0))
            .colors(0xeff6ff, 0xfacc15, 0xfef08a)
            .font(Traditional)
            .decor("gatefold-lattice"),
    );

    let splits: [(&str, &str, u32, u32, u32, u32, FontFamily, &str); 5] = [
        ("divine-split-royal-1", "Divine Split: Maroon", 0x4a0404, 0xfefce8, 0xeab308, 0xfef08a, Traditional, "damask-pattern"),
        ("divine-split-royal-2", "Divine Split: Gold", 0xb8860b, 0x450a0a, 0x991b1b, 0x7f1d1d, Traditional, "silk-texture"),
        ("divine-split-royal-3", "Divine Split: Navy", 0x0f172a, 0xe2e8f0, 0xeab308, 0xfef08a, Traditional, "islamic-pattern"),
        ("divine-split-royal-4", "Divine Split: Emerald", 0x064e3b, 0xecfdf5, 0xfacc15, 0xd1fae5, Traditional, "damask-pattern"),
        ("divine-split-royal-5", "Maharani Split", 0x800020, 0xfff7ed, 0xfb923c, 0xfed7aa, Hindi, "mandala"),
    ];
    for (id, name, bg, text, accent, head, font, decor) in splits {
        out.push(
            Template::new(id, name, U)
                .layout(SplitLeft)
                .photo(true)
                .heart(true)
                .bg(bg)
                .colors(text, accent, head)
                .font(font)
                .decor(decor),
        );
    }
}

fn modern_luxury(out: &mut Vec<Template>) {
    // (name, background, frame, decoration, text)
    let rows: [(&str, u32, Option<BorderSpec>, &str, u32); 20] = [
        ("Obsidian Gold", 0x000000, Some(frame(0xeab308, 4.0, 16.0).double()), "damask-pattern", 0xfefce8),
        ("Royal Violet", 0x4c1d95, Some(frame(0xfacc15, 4.0, 16.0).sides(BorderSides::Y)), "geometric-diagonal", 0xf5f3ff),
        ("Emerald Green Geometric", 0x047857, Some(frame(0x86efac, 4.0, 16.0)), "geometric-diagonal", 0xf0fdf4),
        ("Burgundy Rose", 0x500000, Some(frame(0xfda4af, 4.0, 16.0).double()), "silk-texture", 0xfff1f2),
        ("Emerald Luxe", 0x064e3b, Some(frame_a(0xeab308, 0.5, 4.0, 16.0)), "royal-arch", 0xecfdf5),
        ("Matte Black", 0x171717, Some(frame_a(0xffffff, 0.2, 1.0, 16.0)), "none", 0xf3f4f6),
        ("Violet Gold", 0x4b0082, Some(frame(0xeab308, 4.0, 16.0)), "mandala", 0xfefce8),
        ("Crimson Modern", 0x8b0000, Some(frame_a(0x000000, 0.3, 8.0, 16.0).sides(BorderSides::X)), "geometric-diagonal", 0xfef2f2),
        ("Carbon Fiber", 0x1a1a1a, Some(frame(0xeab308, 4.0, 16.0).sides(BorderSides::X)), "geometric-diagonal", 0xe5e7eb),
        ("Golden Night", 0x1e1b4b, None, "royal-pillars", 0xeef2ff),
        ("Aqua Zen", 0x004d40, Some(frame(0x67e8f9, 2.0, 16.0)), "floral-wreath", 0xecfeff),
        ("Rose Gold Shimmer", 0x5a1b2a, Some(frame(0xf9a8d4, 4.0, 16.0).sides(BorderSides::Y)), "silk-texture", 0xfce7f3),
        ("Deep Purple Galaxy", 0x1a0033, Some(frame(0xa855f7, 4.0, 16.0)), "stars", 0xf3e8ff),
        ("Forest Green Velvet", 0x013220, Some(frame(0xca8a04, 8.0, 16.0)), "damask-pattern", 0xecfdf5),
        ("Charcoal Elegance", 0x36454f, Some(frame_a(0xffffff, 0.5, 4.0, 16.0).double()), "geometric-diagonal", 0xf3f4f6),
        ("Sunrise Orange", 0xff7f50, Some(frame(0xfde047, 4.0, 16.0)), "none", 0xffffff),
        ("Ocean Wave Blue", 0x0077b6, Some(frame(0xffffff, 4.0, 16.0).sides(BorderSides::X)), "waves", 0xeff6ff),
        ("Golden Sand", 0xf4a460, Some(frame(0xb8860b, 2.0, 16.0)), "geometric", 0x78350f),
        ("Lavender Mist", 0xe6e6fa, Some(frame(0xd8b4fe, 2.0, 16.0).dashed()), "floral", 0x581c87),
        ("Ruby Black", 0x4a0404, Some(frame(0x7f1d1d, 8.0, 16.0)), "damask-pattern", 0xfef2f2),
    ];
    for (i, (name, bg, border, decor, text)) in rows.into_iter().enumerate() {
        let mut t = Template::new(format!("mod-lux-{}", i + 1), name, Category::Modern)
            .heart(true)
            .bg(bg)
            .colors(text, 0xfacc15, 0xfef08a)
            .font(FontFamily::Serif)
            .decor(decor);
        if let Some(b) = border {
            t = t.border(b);
        }
        out.push(t);
    }
}

fn photo_cards(out: &mut Vec<Template>) {
    use FontFamily::*;
    use LayoutVariant::*;

    // (id, name, layout, background, frame, text, accent, headline, font, decoration)
    type Row = (
        &'static str,
        &'static str,
        LayoutVariant,
        Background,
        Option<BorderSpec>,
        u32,
        u32,
        u32,
        FontFamily,
        &'static str,
    );
    let solid = |v: u32| Background::Solid {
        color: Color::hex(v),
    };
    let rows: Vec<Row> = vec![
        ("photo-royal-frame-gold", "Royal Gold Frame", Standard, solid(0x2a0a10), Some(frame(0xeab308, 8.0, 8.0)), 0xfefce8, 0xfacc15, 0xfef08a, Traditional, "royal-arch"),
        ("photo-vignette-classic", "Vintage Vignette", FullOverlay, solid(0x000000), Some(frame_a(0xffffff, 0.2, 4.0, 16.0)), 0xffffff, 0xf9a8d4, 0xfce7f3, Script, "none"),
        ("photo-overlay-gold", "Golden Haze Overlay", FullOverlay, solid(0x000000), Some(frame_a(0xfacc15, 0.5, 2.0, 8.0)), 0xfefce8, 0xfacc15, 0xfef08a, Traditional, "none"),
        (
            "photo-polaroid-premium",
            "Premium Polaroid",
            Polaroid,
            Background::Diagonal {
                from: Color::hex(0xf3f4f6),
                to: Color::hex(0xd1d5db),
            },
            None,
            0x1f2937,
            0x4b5563,
            0x111827,
            Script,
            "silk-texture",
        ),
        ("photo-circle-luxury", "Luxury Circle Frame", Standard, solid(0x1a1a1a), Some(frame(0xca8a04, 4.0, 16.0).double()), 0xe5e7eb, 0xeab308, 0xfef9c3, Traditional, "islamic-pattern"),
        ("photo-split-modern-dark", "Modern Dark Split", SplitLeft, solid(0x18181b), None, 0xd4d4d8, 0x71717a, 0xffffff, Sans, "none"),
        ("photo-card-blush-arch", "Blush Arch Photo", Standard, solid(0xfff1f2), Some(frame(0xfecdd3, 4.0, 12.0)), 0x881337, 0xfb7185, 0x9f1239, Traditional, "royal-arch"),
        ("photo-card-mint-minimal", "Mint Minimal Photo", Standard, solid(0xecfdf5), Some(frame(0xd1fae5, 2.0, 24.0)), 0x064e3b, 0x059669, 0x065f46, Sans, "none"),
        ("photo-card-midnight-sparkle", "Midnight Sparkle", FullOverlay, solid(0x172554), None, 0xeff6ff, 0xfde047, 0xfef9c3, Script, "none"),
        ("photo-card-rustic-wood", "Rustic Charm", Standard, solid(0x5c4033), Some(frame(0x3e2b22, 4.0, 8.0)), 0xffedd5, 0xfdba74, 0xfed7aa, Traditional, "damask-pattern"),
        ("photo-card-11", "Golden Leaf Overlay", FullOverlay, solid(0x1a1a1a), None, 0xfefce8, 0xfacc15, 0xfef08a, Traditional, "floral-wreath"),
        ("photo-card-12", "Art Deco Frame", Standard, solid(0x2f4f4f), Some(frame(0x9ca3af, 8.0, 8.0)), 0xf3f4f6, 0xfde047, 0xfef9c3, Serif, "geometric-diagonal"),
        ("photo-card-13", "Purple Haze Split", SplitLeft, solid(0x3b0764), None, 0xfaf5ff, 0xd8b4fe, 0xf3e8ff, Sans, "damask-pattern"),
        ("photo-card-14", "Vintage Film Strip", Polaroid, solid(0xf0f0f0), Some(frame(0x9ca3af, 4.0, 8.0)), 0x374151, 0x6b7280, 0x111827, Script, "none"),
        ("photo-card-15", "Emerald Frame Classic", Standard, solid(0x064e3b), Some(frame(0x6ee7b7, 6.0, 16.0).double()), 0xecfdf5, 0xfacc15, 0xfef08a, Traditional, "royal-pillars"),
        ("photo-card-16", "Crimson Vignette", FullOverlay, solid(0x800000), None, 0xfef2f2, 0xf9a8d4, 0xfce7f3, Script, "none"),
        ("photo-card-17", "Modern Gold Split", SplitLeft, solid(0xffd700), None, 0x1f2937, 0x4b5563, 0x000000, Sans, "damask-pattern"),
        ("photo-card-18", "Floral Teal Overlay", FullOverlay, solid(0x004d40), None, 0xf0fdfa, 0xfacc15, 0xfef08a, Traditional, "floral-wreath"),
        ("photo-card-19", "Minimal White Photo", Standard, solid(0xffffff), Some(frame(0xe5e7eb, 2.0, 16.0)), 0x1f2937, 0x6b7280, 0x000000, Sans, "none"),
    ];
    for (id, name, layout, bg, border, text, accent, head, font, decor) in rows {
        let mut t = Template::new(id, name, Category::PhotoCards)
            .layout(layout)
            .photo(true)
            .heart(true)
            .bg_with(bg)
            .colors(text, accent, head)
            .font(font)
            .decor(decor);
        if let Some(b) = border {
            t = t.border(b);
        }
        out.push(t);
    }
}

fn royal(out: &mut Vec<Template>) {
    let schemes: [(u32, &str, &str, bool); 22] = [
        (0x4a0404, "Crimson", "damask-pattern", true),
        (0x2e1065, "Imperial", "islamic-pattern", true),
        (0x0f172a, "Midnight", "damask-pattern", true),
        (0x3b1c0a, "Chocolate", "silk-texture", true),
        (0x064e3b, "Emerald", "damask-pattern", true),
        (0x000000, "Onyx", "royal-arch", true),
        (0x4b0082, "Indigo", "royal-pillars", true),
        (0x800000, "Maroon", "mandala", true),
        (0x0f766e, "Teal Elegance", "royal-pillars", true),
        (0x556b2f, "Olive Gold", "damask-pattern", true),
        (0x8b4513, "Bronze", "royal-pillars", true),
        (0x708090, "Slate Royal", "islamic-pattern", true),
        (0x6a0518, "Ruby Grand", "royal-arch", true),
        (0x1e1b4b, "Sapphire Night", "islamic-pattern", true),
        (0x2d001e, "Violet Empire", "gatefold-lattice", false),
        (0x4e342e, "Coffee Palace", "silk-texture", true),
        (0x0b5c00, "Emerald Kingdom", "royal-pillars", true),
        (0x1c1c1c, "Onyx Gem", "geometric-diagonal", true),
        (0x311b92, "Amethyst Royal", "mandala", true),
        (0x8b0000, "Garnet", "paithani-border", false),
        (0x006064, "Cyan Dynasty", "floral-wreath", true),
        (0xb8860b, "Golden Sun", "toran", true),
    ];
    for (i, (bg, name, decor, heart)) in schemes.into_iter().enumerate() {
        out.push(
            Template::new(format!("royal-gen-{i}"), format!("Royal {name}"), Category::Royal)
                .heart(heart)
                .bg(bg)
                .border(frame(0xeab308, 6.0, 16.0).double())
                .colors(0xffffff, 0xfacc15, 0xfef08a)
                .font(FontFamily::Traditional)
                .decor(decor),
        );
    }
}

fn floral(out: &mut Vec<Template>) {
    // (background, frame color, text, name)
    let styles: [(u32, u32, u32, &str); 20] = [
        (0xfdf2f8, 0xfbcfe8, 0x831843, "Blush"),
        (0xfffbeb, 0xfde68a, 0x78350f, "Cream"),
        (0xf0f9ff, 0xbae6fd, 0x0c4a6e, "Sky"),
        (0xffe4e6, 0xfda4af, 0x881337, "Rose"),
        (0xfaf5ff, 0xe9d5ff, 0x581c87, "Lavender"),
        (0xf0fdf4, 0xbbf7d0, 0x14532d, "Mint"),
        (0xfefce8, 0xfef08a, 0x713f12, "Sunshine"),
        (0xfff7ed, 0xfed7aa, 0x7c2d12, "Peach"),
        (0xf0fdfa, 0x99f6e4, 0x134e4a, "Aqua"),
        (0xffffff, 0xe5e7eb, 0x1f2937, "Classic White"),
        (0xfce4ec, 0xfce7f3, 0x9d174d, "Cherry Blossom"),
        (0xe0f2f1, 0xccfbf1, 0x115e59, "Jade Floral"),
        (0xfffde7, 0xecfccb, 0x3f6212, "Lemon Bloom"),
        (0xede7f6, 0xe0e7ff, 0x3730a3, "Indigo Petal"),
        (0xffebee, 0xfee2e2, 0x991b1b, "Crimson Rose"),
        (0xf3e5f5, 0xede9fe, 0x5b21b6, "Violet Bloom"),
        (0xe0f7fa, 0xcffafe, 0x155e75, "Cyan Floral"),
        (0xe8f5e9, 0xdcfce7, 0x166534, "Green Garden"),
        (0xfff3e0, 0xffedd5, 0x9a3412, "Autumn Floral"),
        (0xe3f2fd, 0xdbeafe, 0x1e40af, "Bluebell"),
    ];
    for (i, (bg, border, text, name)) in styles.into_iter().enumerate() {
        let decor = if i % 3 == 0 { "floral-wreath" } else { "floral-corner" };
        out.push(
            Template::new(format!("floral-gen-{i}"), format!("{name} Floral"), Category::Floral)
                .photo(i % 2 == 0)
                .heart(true)
                .bg(bg)
                .border(frame(border, 2.0, 16.0))
                .colors(text, 0x9ca3af, text)
                .font(FontFamily::Script)
                .decor(decor),
        );
    }
}

fn marathi(out: &mut Vec<Template>) {
    let photos: [(&str, &str, u32, BorderSpec, u32, u32, u32, bool, &str); 5] = [
        ("marathi-photo-1", "Peshwai Photo Royal", 0xcc5500, frame(0xfef08a, 2.0, 8.0), 0xffffff, 0xfde047, 0xfef9c3, true, "fort-silhouette"),
        ("marathi-photo-2", "Paithani Photo Frame", 0x4b0082, frame(0xeab308, 2.0, 8.0), 0xfefce8, 0xfacc15, 0xfef08a, false, "paithani-border"),
        ("marathi-photo-3", "Maratha Fort Photo", 0x8b0000, frame_a(0xffffff, 0.3, 2.0, 8.0), 0xffffff, 0xfacc15, 0xffffff, true, "fort-silhouette"),
        ("marathi-photo-4", "Golden Marathi Photo", 0xffd700, frame_a(0x7f1d1d, 0.3, 2.0, 8.0), 0x7f1d1d, 0xb91c1c, 0x991b1b, true, "toran"),
        ("marathi-photo-5", "Shivkalin Photo Classic", 0x8b4513, frame(0xfed7aa, 2.0, 8.0), 0xfff7ed, 0xfdba74, 0xffedd5, true, "royal-arch"),
    ];
    for (id, name, bg, border, text, accent, head, heart, decor) in photos {
        out.push(
            Template::new(id, name, Category::Marathi)
                .photo(true)
                .heart(heart)
                .bg(bg)
                .border(border)
                .colors(text, accent, head)
                .font(FontFamily::Hindi)
                .decor(decor),
        );
    }

    let colors: [(u32, &str, &str, bool); 21] = [
        (0x8b0000, "Shivkalin Red", "fort-silhouette", true),
        (0xcc5500, "Peshwai Orange", "fort-silhouette", true),
        (0xdc143c, "Maratha Crimson", "fort-silhouette", true),
        (0x8b4513, "Raigad Brown", "fort-silhouette", true),
        (0x00008b, "Raigad Blue", "fort-silhouette", true),
        (0x4b0082, "Royal Violet", "fort-silhouette", true),
        (0xffd700, "Maratha Gold", "toran", true),
        (0xb22222, "Brick Red", "toran", true),
        (0x800080, "Imperial Purple", "toran", true),
        (0xff4500, "Saffron Glow", "mandala", true),
        (0x2f4f4f, "Dark Slate", "toran", true),
        (0xff6347, "Tomato Red Fest", "toran", true),
        (0xdaa520, "Goldenrod", "paithani-border", false),
        (0x7b68ee, "Medium Slate Blue", "fort-silhouette", true),
        (0x2e8b57, "Sea Green", "mandala", true),
        (0xcd853f, "Peru Brown", "royal-arch", true),
        (0xd2b48c, "Tan Marathi", "silk-texture", true),
        (0xb0c4de, "Light Steel Blue", "islamic-pattern", true),
        (0x8b008b, "Dark Magenta Floral", "floral-corner", true),
        (0xa9a9a9, "Dark Gray Fort", "fort-silhouette", true),
        (0xf5deb3, "Wheat Traditional", "toran", true),
    ];
    for (i, (bg, name, decor, heart)) in colors.into_iter().enumerate() {
        // Gold needs dark text to stay legible.
        let gold = name == "Maratha Gold";
        let (text, accent, head) = if gold {
            (0x7f1d1d, 0xb91c1c, 0x991b1b)
        } else {
            (0xffffff, 0xfde047, 0xfef9c3)
        };
        let border = if gold {
            frame_a(0x7f1d1d, 0.3, 2.0, 8.0)
        } else {
            frame_a(0xffffff, 0.4, 2.0, 8.0)
        };
        out.push(
            Template::new(format!("marathi-new-{i}"), name, Category::Marathi)
                .heart(heart)
                .bg(0xffffff)
                .override_bg(bg)
                .border(border)
                .colors(text, accent, head)
                .font(FontFamily::Hindi)
                .decor(decor),
        );
    }
}

fn hindu_traditional(out: &mut Vec<Template>) {
    use FontFamily::*;

    // (name, background, frame, text, accent, headline, font, decoration, heart)
    type Row = (
        &'static str,
        u32,
        Option<BorderSpec>,
        u32,
        u32,
        u32,
        FontFamily,
        &'static str,
        bool,
    );
    let x8 = |c: u32| Some(frame(c, 8.0, 0.0).sides(BorderSides::X));
    let rows: Vec<Row> = vec![
        ("Purple Floral Paithani", 0x4a148c, x8(0xeab308), 0xfefce8, 0xfacc15, 0xfef08a, Hindi, "paithani-border", false),
        ("Deep Maroon Mandala", 0x560000, None, 0xfff7ed, 0xfb923c, 0xfed7aa, Hindi, "half-mandala-side", true),
        ("Navy Blue Royal", 0x000051, None, 0xfefce8, 0xfacc15, 0xfef9c3, Traditional, "vertical-border", true),
        ("Royal Magenta Floral", 0x880e4f, Some(frame_a(0xfacc15, 0.5, 4.0, 8.0)), 0xffffff, 0xfde047, 0xfef9c3, Hindi, "floral-wreath", true),
        ("Golden Cream Mandala", 0xfff8e1, x8(0x991b1b), 0x7f1d1d, 0xb91c1c, 0x991b1b, Traditional, "half-mandala-side", true),
        ("Dark Green Traditional", 0x1b5e20, Some(frame(0xeab308, 2.0, 8.0)), 0xfefce8, 0xfacc15, 0xfef9c3, Hindi, "toran", true),
        ("Chocolate Ornamental", 0x3e2723, None, 0xffedd5, 0xfb923c, 0xfed7aa, Traditional, "vertical-border", true),
        ("Divine Red Mandala", 0xb71c1c, Some(frame_a(0xeab308, 0.5, 4.0, 8.0)), 0xfefce8, 0xfacc15, 0xfef9c3, Hindi, "mandala", true),
        ("Saffron Toran", 0xff6f00, Some(frame(0xfef08a, 2.0, 8.0)), 0xffffff, 0xfef9c3, 0xfefce8, Hindi, "toran", true),
        ("Royal Teal Floral", 0x004d40, Some(frame(0xeab308, 2.0, 12.0)), 0xf0fdfa, 0xfacc15, 0xfef08a, Traditional, "floral-wreath", true),
        ("Magenta Paithani", 0x880e4f, None, 0xfdf2f8, 0xfacc15, 0xfef9c3, Hindi, "paithani-border", false),
        ("Golden Vertical", 0xf57f17, Some(frame(0x7f1d1d, 2.0, 8.0)), 0x450a0a, 0x991b1b, 0x7f1d1d, Traditional, "vertical-border", true),
        ("Emerald Arch", 0x1b5e20, Some(frame(0xeab308, 4.0, 16.0).double()), 0xf0fdf4, 0xfacc15, 0xfef9c3, Traditional, "royal-arch", true),
        ("Wine Pillars", 0x4a148c, None, 0xfaf5ff, 0xfacc15, 0xfef9c3, Traditional, "royal-pillars", true),
        ("Sandalwood Half-Mandala", 0x5d4037, Some(frame(0xfed7aa, 2.0, 12.0)), 0xfff7ed, 0xfdba74, 0xffedd5, Hindi, "half-mandala-side", true),
        ("Maroon Damask", 0x7f0000, Some(frame(0xca8a04, 4.0, 8.0)), 0xfef2f2, 0xeab308, 0xfef08a, Traditional, "damask-pattern", true),
        ("Coral Floral", 0xbf360c, Some(frame(0xfef08a, 2.0, 12.0)), 0xffffff, 0xfde047, 0xfef9c3, Script, "floral-corner", true),
        ("Golden Lotus Pond", 0x003366, Some(frame(0xeab308, 4.0, 8.0).double()), 0xdbeafe, 0xfde047, 0xfef9c3, Script, "floral-wreath", true),
        ("Deep Orange Lanterns", 0xe65100, None, 0xffffff, 0xfef08a, 0xfef9c3, Hindi, "lanterns-hanging", true),
        ("Copper Fort", 0x3e2723, Some(frame(0xfdba74, 2.0, 12.0)), 0xffedd5, 0xfb923c, 0xfed7aa, Hindi, "fort-silhouette", true),
        ("Ruby Silk", 0xb00020, Some(frame(0xfbcfe8, 4.0, 8.0).double()), 0xfdf2f8, 0xfde047, 0xfef9c3, Traditional, "silk-texture", true),
        ("Midnight Wreath", 0x263238, Some(frame(0x6b7280, 2.0, 12.0)), 0xe5e7eb, 0xfacc15, 0xfef9c3, Script, "floral-wreath", true),
        ("Vibrant Om Chakra", 0xff7043, Some(frame_a(0xeab308, 0.5, 4.0, 8.0)), 0xffffff, 0xfef9c3, 0xfefce8, Hindi, "mandala", true),
        ("Floral Blue Golden", 0x00796b, Some(frame(0xeab308, 2.0, 12.0)), 0xf0fdfa, 0xfacc15, 0xfef08a, Traditional, "floral-wreath", true),
        ("Crimson Elephants", 0xbf360c, Some(frame(0xfde047, 4.0, 8.0).double()), 0xffffff, 0xfde047, 0xfef9c3, Hindi, "vertical-border", true),
        ("Azure Floral Arch", 0x039be5, Some(frame(0xeab308, 4.0, 16.0).double()), 0xeff6ff, 0xfacc15, 0xfef9c3, Traditional, "royal-arch", true),
        ("Forest Gold Pillars", 0x388e3c, None, 0xf0fdf4, 0xfacc15, 0xfef9c3, Traditional, "royal-pillars", true),
        ("Saffron Geometric", 0xffb300, Some(frame(0x7f1d1d, 2.0, 8.0)), 0x450a0a, 0x991b1b, 0x7f1d1d, Traditional, "geometric-diagonal", true),
        ("Plum Lotus", 0x6a1b9a, Some(frame(0xfbcfe8, 2.0, 12.0)), 0xfaf5ff, 0xf9a8d4, 0xfce7f3, Hindi, "floral-wreath", true),
        ("Rustic Terracotta Fort", 0xe64a19, Some(frame(0xfdba74, 4.0, 8.0)), 0xffffff, 0xfb923c, 0xfed7aa, Hindi, "fort-silhouette", true),
        ("Sunstone Damask", 0xff8a65, Some(frame(0xeab308, 4.0, 8.0).double()), 0x7f1d1d, 0xfde047, 0xfef9c3, Traditional, "damask-pattern", true),
        ("Elegant Brown Mandala", 0x4e342e, Some(frame(0xfed7aa, 2.0, 12.0)), 0xffedd5, 0xfb923c, 0xfed7aa, Hindi, "half-mandala-side", true),
        ("Vedic Gold Frame", 0xfff8dc, Some(frame(0xca8a04, 8.0, 16.0).double()), 0x7f1d1d, 0xb91c1c, 0x991b1b, Traditional, "royal-arch", true),
    ];
    for (i, (name, bg, border, text, accent, head, font, decor, heart)) in rows.into_iter().enumerate() {
        let mut t = Template::new(format!("hindu-trad-{}", i + 1), name, Category::HinduTraditional)
            .heart(heart)
            .bg(bg)
            .colors(text, accent, head)
            .font(font)
            .decor(decor);
        if let Some(b) = border {
            t = t.border(b);
        }
        out.push(t);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/templates.rs"]
mod tests;
