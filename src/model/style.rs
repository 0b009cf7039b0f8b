use std::collections::BTreeMap;

use crate::foundation::core::Color;

/// Smallest font-size multiplier any field may carry.
pub const MIN_FONT_SCALE: f64 = 0.2;

/// Every independently styleable element of the card.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Headline,
    GroomName,
    GroomParents,
    BrideName,
    BrideParents,
    SubHeading,
    Message,
    CeremonyDetails,
    VenueTitle,
    VenueName,
    VenueAddress,
    Rsvp,
    AmpersandSymbol,
    SwastikSymbol,
}

/// Which palette slot recolors a field when a custom palette is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteRole {
    Text,
    Highlight,
}

impl FieldId {
    pub const ALL: [FieldId; 14] = [
        FieldId::Headline,
        FieldId::GroomName,
        FieldId::GroomParents,
        FieldId::BrideName,
        FieldId::BrideParents,
        FieldId::SubHeading,
        FieldId::Message,
        FieldId::CeremonyDetails,
        FieldId::VenueTitle,
        FieldId::VenueName,
        FieldId::VenueAddress,
        FieldId::Rsvp,
        FieldId::AmpersandSymbol,
        FieldId::SwastikSymbol,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Headline => "headline",
            FieldId::GroomName => "groomName",
            FieldId::GroomParents => "groomParents",
            FieldId::BrideName => "brideName",
            FieldId::BrideParents => "brideParents",
            FieldId::SubHeading => "subHeading",
            FieldId::Message => "message",
            FieldId::CeremonyDetails => "ceremonyDetails",
            FieldId::VenueTitle => "venueTitle",
            FieldId::VenueName => "venueName",
            FieldId::VenueAddress => "venueAddress",
            FieldId::Rsvp => "rsvp",
            FieldId::AmpersandSymbol => "ampersandSymbol",
            FieldId::SwastikSymbol => "swastikSymbol",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == s)
    }

    pub fn is_symbol(self) -> bool {
        matches!(self, FieldId::AmpersandSymbol | FieldId::SwastikSymbol)
    }

    /// Multiplier a fresh record starts with.
    pub fn default_scale(self) -> f64 {
        match self {
            FieldId::Headline => 1.2,
            FieldId::GroomName | FieldId::BrideName => 1.5,
            FieldId::GroomParents | FieldId::BrideParents => 1.2,
            FieldId::SubHeading => 1.4,
            FieldId::Message => 1.0,
            FieldId::CeremonyDetails => 1.3,
            FieldId::VenueTitle | FieldId::VenueName => 1.3,
            FieldId::VenueAddress => 1.2,
            FieldId::Rsvp => 1.5,
            FieldId::AmpersandSymbol | FieldId::SwastikSymbol => 1.8,
        }
    }

    /// Unscaled font size in `rem` before the multiplier and layout scale apply.
    pub fn base_rem(self) -> f64 {
        match self {
            FieldId::Headline => 1.2,
            FieldId::GroomName | FieldId::BrideName => 1.85,
            FieldId::GroomParents | FieldId::BrideParents => 1.0,
            FieldId::SubHeading => 1.75,
            FieldId::Message => 1.2,
            FieldId::CeremonyDetails => 1.0,
            FieldId::VenueTitle => 1.5,
            FieldId::VenueName => 1.3,
            FieldId::VenueAddress => 0.95,
            FieldId::Rsvp => 0.85,
            FieldId::AmpersandSymbol | FieldId::SwastikSymbol => 1.5,
        }
    }

    pub fn palette_role(self) -> PaletteRole {
        match self {
            FieldId::Headline
            | FieldId::SubHeading
            | FieldId::VenueTitle
            | FieldId::AmpersandSymbol
            | FieldId::SwastikSymbol => PaletteRole::Highlight,
            _ => PaletteRole::Text,
        }
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field adjustments layered over the template's defaults.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldStyle {
    /// Font-size multiplier, never below [`MIN_FONT_SCALE`].
    pub font_size: f64,
    /// Horizontal offset from the natural flow position, px.
    pub x: f64,
    /// Vertical offset from the natural flow position, px.
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl FieldStyle {
    pub fn with_scale(font_size: f64) -> Self {
        Self {
            font_size,
            x: 0.0,
            y: 0.0,
            color: None,
        }
    }

    pub fn clamp_font_size(&mut self, ceiling: f64) {
        self.font_size = clamp_scale(self.font_size, ceiling);
    }
}

/// Clamp a multiplier into `[MIN_FONT_SCALE, ceiling]`. NaN collapses to the floor.
pub fn clamp_scale(v: f64, ceiling: f64) -> f64 {
    let ceiling = ceiling.max(MIN_FONT_SCALE);
    if v.is_nan() {
        return MIN_FONT_SCALE;
    }
    v.clamp(MIN_FONT_SCALE, ceiling)
}

/// Field style table. Missing entries read as the field's default.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TextStyles(BTreeMap<FieldId, FieldStyle>);

impl Default for TextStyles {
    fn default() -> Self {
        Self(
            FieldId::ALL
                .into_iter()
                .map(|f| (f, FieldStyle::with_scale(f.default_scale())))
                .collect(),
        )
    }
}

impl TextStyles {
    pub fn get(&self, field: FieldId) -> FieldStyle {
        self.0
            .get(&field)
            .copied()
            .unwrap_or_else(|| FieldStyle::with_scale(field.default_scale()))
    }

    pub fn get_mut(&mut self, field: FieldId) -> &mut FieldStyle {
        self.0
            .entry(field)
            .or_insert_with(|| FieldStyle::with_scale(field.default_scale()))
    }

    pub fn set(&mut self, field: FieldId, style: FieldStyle) {
        self.0.insert(field, style);
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, FieldStyle)> + '_ {
        FieldId::ALL.into_iter().map(|f| (f, self.get(f)))
    }

    pub fn clear_colors(&mut self) {
        for f in FieldId::ALL {
            self.get_mut(f).color = None;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoShape {
    #[default]
    Circle,
    Square,
    Rounded,
}

/// Placement of the couple photo inside its frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PhotoStyle {
    pub shape: PhotoShape,
    pub scale: f64,
    pub x: f64,
    pub y: f64,
}

impl Default for PhotoStyle {
    fn default() -> Self {
        Self {
            shape: PhotoShape::Circle,
            scale: 1.0,
            x: 0.0,
            y: 0.0,
        }
    }
}

/// Identifier of a decoration, border or texture variant.
///
/// Kept as an open string: drafts written by newer catalogs still load, and unknown
/// identifiers simply render nothing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct LayerKind(String);

impl LayerKind {
    pub const NONE: &'static str = "none";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn none() -> Self {
        Self(Self::NONE.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_none(&self) -> bool {
        self.0.is_empty() || self.0 == Self::NONE
    }
}

impl Default for LayerKind {
    fn default() -> Self {
        Self::none()
    }
}

impl From<&str> for LayerKind {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One selectable overlay layer: which variant and how opaque.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerConfig {
    #[serde(rename = "type")]
    pub kind: LayerKind,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

fn default_opacity() -> f64 {
    1.0
}

/// Texture opacity a fresh record and a template swap start with.
pub const DEFAULT_TEXTURE_OPACITY: f64 = 0.1;

impl LayerConfig {
    pub fn new(kind: impl Into<LayerKind>, opacity: f64) -> Self {
        Self {
            kind: kind.into(),
            opacity: opacity.clamp(0.0, 1.0),
        }
    }

    pub fn none() -> Self {
        Self::new(LayerKind::none(), 1.0)
    }

    pub fn none_texture() -> Self {
        Self::new(LayerKind::none(), DEFAULT_TEXTURE_OPACITY)
    }

    pub fn is_active(&self) -> bool {
        !self.kind.is_none()
    }
}

/// Custom color palette overriding template colors.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    /// Card background.
    pub background: Color,
    /// Decorations, icons and label accents.
    pub accent: Color,
    /// Main card frame.
    pub border: Color,
    /// Body text.
    pub text: Color,
    /// Headings and the central symbol.
    pub highlight: Color,
}

impl Palette {
    pub fn color_for(&self, role: PaletteRole) -> Color {
        match role {
            PaletteRole::Text => self.text,
            PaletteRole::Highlight => self.highlight,
        }
    }
}

/// The glyph drawn between the groom and bride blocks. At most one is ever shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CentralSymbol {
    None,
    #[default]
    Swastik,
    Ampersand,
}

impl CentralSymbol {
    pub fn field(self) -> Option<FieldId> {
        match self {
            CentralSymbol::None => None,
            CentralSymbol::Swastik => Some(FieldId::SwastikSymbol),
            CentralSymbol::Ampersand => Some(FieldId::AmpersandSymbol),
        }
    }

    pub fn glyph(self) -> Option<&'static str> {
        match self {
            CentralSymbol::None => None,
            CentralSymbol::Swastik => Some("卐"),
            CentralSymbol::Ampersand => Some("&"),
        }
    }
}

// Drafts store the symbol as two flags; flattened into `DataRecord`.
#[derive(Default, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SymbolFlags {
    show_swastik: bool,
    show_ampersand: bool,
}

impl serde::Serialize for CentralSymbol {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        SymbolFlags {
            show_swastik: *self == CentralSymbol::Swastik,
            show_ampersand: *self == CentralSymbol::Ampersand,
        }
        .serialize(s)
    }
}

impl<'de> serde::Deserialize<'de> for CentralSymbol {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let flags = SymbolFlags::deserialize(d)?;
        // The ampersand wins when both flags are set, matching what gets drawn.
        Ok(if flags.show_ampersand {
            CentralSymbol::Ampersand
        } else if flags.show_swastik {
            CentralSymbol::Swastik
        } else {
            CentralSymbol::None
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/style.rs"]
mod tests;
