use crate::catalog::templates::{Category, LayoutVariant, Template};
use crate::foundation::core::{Canvas, REM_PX, Rect};
use crate::model::record::DataRecord;
use crate::model::style::FieldId;

pub const CARD_WIDTH: f64 = 530.0;
pub const CARD_HEIGHT: f64 = 750.0;
pub const CARD_HEIGHT_TALL: f64 = 900.0;

/// Share of the card width taken by the photo panel in split layouts.
pub const SPLIT_PHOTO_SHARE: f64 = 0.4;

/// Decorations that occupy the top edge and push the headline down.
pub const TOP_DECORATIONS: [&str; 8] = [
    "toran",
    "royal-arch",
    "lanterns-hanging",
    "paithani-border",
    "royal-pillars",
    "floral-corner",
    "gatefold-lattice",
    "floral-wreath",
];

pub const PUSH_DOWN_PX: f64 = 24.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// How leftover vertical space is shared between content groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Justify {
    /// First group at the top, last at the bottom.
    Between,
    /// Equal space before, between and after the groups.
    Evenly,
}

/// Everything about the card box that depends only on (record, template).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutMetrics {
    pub scale: f64,
    pub canvas: Canvas,
    /// Region the content column is laid out in, before padding.
    pub body: Rect,
    pub padding: Edges,
    /// Extra vertical inset applied inside the padding.
    pub inner_pad_y: f64,
    pub justify: Justify,
    pub symbol_visible: bool,
    pub push_down: bool,
    pub photo_applicable: bool,
    pub standalone_photo: bool,
    /// Photo panel of split layouts.
    pub photo_panel: Option<Rect>,
}

impl LayoutMetrics {
    pub fn compute(record: &DataRecord, template: &Template) -> Self {
        let layout = template.layout;
        let photo_applicable = template.has_photo && record.has_photo();
        let standalone_photo = photo_applicable && layout == LayoutVariant::Standard;
        let overlay_like = matches!(layout, LayoutVariant::FullOverlay | LayoutVariant::Polaroid);

        let canvas = Canvas {
            width: CARD_WIDTH,
            height: if standalone_photo {
                CARD_HEIGHT_TALL
            } else {
                CARD_HEIGHT
            },
        };

        let left = record.left_border.is_active();
        let right = record.right_border.is_active();
        let bottom = record.bottom_border.is_active();

        let mut scale = if layout.is_split() {
            0.95
        } else if standalone_photo || overlay_like {
            0.80
        } else {
            0.88
        };
        if left || right || bottom {
            scale *= 0.9;
        }

        let padding = Edges {
            top: 32.0,
            left: if left { 64.0 } else { 32.0 },
            right: if right { 64.0 } else { 32.0 },
            bottom: if bottom { 64.0 } else { 8.0 },
        };

        let full = canvas.rect();
        let (body, photo_panel) = match layout {
            LayoutVariant::SplitLeft => {
                let split = full.x0 + full.width() * SPLIT_PHOTO_SHARE;
                (
                    Rect::new(split, full.y0, full.x1, full.y1),
                    Some(Rect::new(full.x0, full.y0, split, full.y1)),
                )
            }
            LayoutVariant::SplitRight => {
                let split = full.x1 - full.width() * SPLIT_PHOTO_SHARE;
                (
                    Rect::new(full.x0, full.y0, split, full.y1),
                    Some(Rect::new(split, full.y0, full.x1, full.y1)),
                )
            }
            LayoutVariant::Scroll => (full.inset(-40.0), None),
            _ => (full, None),
        };

        let floral = template.category == Category::Floral;
        let (justify, inner_pad_y) = if floral || layout.is_split() {
            (Justify::Evenly, 8.0)
        } else if standalone_photo || photo_applicable {
            (Justify::Between, 8.0)
        } else {
            (Justify::Between, 0.0)
        };

        let symbol_visible = record.symbol.field().is_some()
            && !standalone_photo
            && !(photo_applicable && overlay_like);

        let push_down = TOP_DECORATIONS.contains(&decoration_kind(record, template));

        Self {
            scale,
            canvas,
            body,
            padding,
            inner_pad_y,
            justify,
            symbol_visible,
            push_down,
            photo_applicable,
            standalone_photo,
            photo_panel,
        }
    }

    /// Box the content column flows within.
    pub fn content(&self) -> Rect {
        let b = self.body;
        Rect::new(
            b.x0 + self.padding.left,
            b.y0 + self.padding.top + self.inner_pad_y,
            b.x1 - self.padding.right,
            b.y1 - self.padding.bottom - self.inner_pad_y,
        )
    }

    /// Rendered font size of a field, in px.
    pub fn font_px(&self, field: FieldId, multiplier: f64) -> f64 {
        field.base_rem() * REM_PX * multiplier * self.scale
    }
}

/// Decoration actually drawn: the record's choice, or the template default when unset.
pub fn decoration_kind<'a>(record: &'a DataRecord, template: &'a Template) -> &'a str {
    let own = record.decoration.kind.as_str();
    if own.is_empty() {
        template.style.decoration.as_str()
    } else {
        own
    }
}

/// Top edge of each block for a column of `heights` laid out in `[top, top + span]`,
/// separated by `gap` plus a share of the leftover space.
pub fn flow(heights: &[f64], top: f64, span: f64, gap: f64, justify: Justify) -> Vec<f64> {
    let n = heights.len();
    if n == 0 {
        return Vec::new();
    }
    let used: f64 = heights.iter().sum::<f64>() + gap * (n - 1) as f64;
    let free = (span - used).max(0.0);
    let (lead, extra) = match justify {
        Justify::Between if n > 1 => (0.0, free / (n - 1) as f64),
        Justify::Between => (0.0, 0.0),
        Justify::Evenly => {
            let share = free / (n + 1) as f64;
            (share, share)
        }
    };
    let mut y = top + lead;
    heights
        .iter()
        .map(|h| {
            let at = y;
            y += h + gap + extra;
            at
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/compose/layout.rs"]
mod tests;
