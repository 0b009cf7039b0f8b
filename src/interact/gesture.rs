use crate::foundation::core::Point;
use crate::model::style::{FieldId, FieldStyle, clamp_scale};

/// Pointer travel, in px, that changes the font multiplier by 1.0 while resizing.
pub const RESIZE_PX_PER_UNIT: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureState {
    Idle,
    /// Field pressed; moves apply only while move mode is on.
    Dragging {
        field: FieldId,
        start: Point,
        base: FieldStyle,
    },
    Resizing {
        field: FieldId,
        start: Point,
        base: FieldStyle,
    },
}

/// Provisional style for the gesture's field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleUpdate {
    pub field: FieldId,
    pub style: FieldStyle,
}

/// How a gesture ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureOutcome {
    pub field: FieldId,
    /// Style the field ends up with.
    pub style: FieldStyle,
    /// Whether the committed style differs from the baseline.
    pub changed: bool,
}

/// Select / move / resize state machine for a single field.
///
/// The controller never touches the record. It hands out [`StyleUpdate`]s that the owner
/// applies, and keeps the baseline so an [`abort`](GestureController::abort) can restore it.
#[derive(Clone, Debug)]
pub struct GestureController {
    state: GestureState,
    ceiling: f64,
    editable: bool,
    last: Option<FieldStyle>,
}

impl GestureController {
    pub fn new(ceiling: f64) -> Self {
        Self {
            state: GestureState::Idle,
            ceiling,
            editable: true,
            last: None,
        }
    }

    /// Controller for thumbnails: every press is ignored.
    pub fn read_only() -> Self {
        Self {
            editable: false,
            ..Self::new(crate::foundation::config::EditorConfig::default().font_scale_ceiling)
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == GestureState::Idle
    }

    pub fn active_field(&self) -> Option<FieldId> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Dragging { field, .. } | GestureState::Resizing { field, .. } => {
                Some(field)
            }
        }
    }

    /// The pointer owns the gesture; page scrolling must not react.
    pub fn captures_scroll(&self) -> bool {
        !self.is_idle()
    }

    /// Press on a field body. Returns `false` when read-only or a gesture is already running.
    pub fn press_field(&mut self, field: FieldId, point: Point, style: FieldStyle) -> bool {
        if !self.editable || !self.is_idle() {
            return false;
        }
        tracing::debug!(%field, x = point.x, y = point.y, "gesture: drag begin");
        self.state = GestureState::Dragging {
            field,
            start: point,
            base: style,
        };
        self.last = None;
        true
    }

    /// Press on the resize handle. Works regardless of move mode.
    pub fn press_resize_handle(&mut self, field: FieldId, point: Point, style: FieldStyle) -> bool {
        if !self.editable || !self.is_idle() {
            return false;
        }
        tracing::debug!(%field, "gesture: resize begin");
        self.state = GestureState::Resizing {
            field,
            start: point,
            base: style,
        };
        self.last = None;
        true
    }

    pub fn pointer_move(&mut self, point: Point, move_mode: bool) -> Option<StyleUpdate> {
        let (field, style) = match self.state {
            GestureState::Idle => return None,
            GestureState::Dragging { field, start, base } => {
                if !move_mode {
                    return None;
                }
                let d = point - start;
                let mut s = base;
                s.x = base.x + d.x;
                s.y = base.y + d.y;
                (field, s)
            }
            GestureState::Resizing { field, start, base } => {
                let d = point - start;
                let delta = (d.x + d.y) / 2.0;
                let mut s = base;
                s.font_size = clamp_scale(base.font_size + delta / RESIZE_PX_PER_UNIT, self.ceiling);
                (field, s)
            }
        };
        self.last = Some(style);
        Some(StyleUpdate { field, style })
    }

    /// Pointer up: keep the last provisional value.
    pub fn release(&mut self) -> Option<GestureOutcome> {
        self.finish("release")
    }

    /// Pointer left the field: keeps the partial value, same as a release.
    pub fn cancel(&mut self) -> Option<GestureOutcome> {
        self.finish("cancel")
    }

    /// Drop the gesture and hand back the baseline to restore.
    pub fn abort(&mut self) -> Option<StyleUpdate> {
        let (field, base) = self.take()?;
        tracing::debug!(%field, "gesture: abort");
        Some(StyleUpdate { field, style: base })
    }

    fn finish(&mut self, how: &'static str) -> Option<GestureOutcome> {
        let last = self.last;
        let (field, base) = self.take()?;
        tracing::debug!(%field, how, changed = last.is_some(), "gesture: commit");
        Some(GestureOutcome {
            field,
            style: last.unwrap_or(base),
            changed: last.is_some_and(|s| s != base),
        })
    }

    fn take(&mut self) -> Option<(FieldId, FieldStyle)> {
        let out = match self.state {
            GestureState::Idle => None,
            GestureState::Dragging { field, base, .. }
            | GestureState::Resizing { field, base, .. } => Some((field, base)),
        };
        self.state = GestureState::Idle;
        self.last = None;
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interact/gesture.rs"]
mod tests;
