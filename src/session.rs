//! The editing session: the one place the record is mutated.
//!
//! [`Editor`] owns the data record, the selected template, the active field and the
//! gesture/history/peek controllers. UI layers call into it; rendering reads from it.

use std::path::Path;

use crate::assets::photo_data_uri;
use crate::catalog::templates::{Template, default_template, find};
use crate::compose::{Composition, ViewState, render};
use crate::export::flow::{ExportAction, ExportArtifact, ExportPorts, run_export};
use crate::foundation::config::EditorConfig;
use crate::foundation::core::{Color, Point, Vec2};
use crate::foundation::error::{CardError, CardResult};
use crate::interact::{GestureController, History, PeekController, StyleUpdate, UndoStack};
use crate::model::record::{DataRecord, Language};
use crate::model::style::{
    CentralSymbol, FieldId, LayerConfig, Palette, PhotoShape, PhotoStyle, TextStyles,
};
use crate::persist::{DraftSlot, clear_draft, load_draft, save_draft};

/// Record plus template: the unit undo/redo swaps.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub record: DataRecord,
    pub template: &'static Template,
}

/// One of the five independently configurable decorative layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerSlot {
    Decoration,
    BottomBorder,
    LeftBorder,
    RightBorder,
    Texture,
}

/// Arrow nudge direction; each step moves by `nudge_step_px`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nudge {
    Up,
    Down,
    Left,
    Right,
}

impl Nudge {
    fn unit(self) -> Vec2 {
        match self {
            Nudge::Up => Vec2::new(0.0, -1.0),
            Nudge::Down => Vec2::new(0.0, 1.0),
            Nudge::Left => Vec2::new(-1.0, 0.0),
            Nudge::Right => Vec2::new(1.0, 0.0),
        }
    }
}

#[derive(Debug)]
pub struct Editor {
    record: DataRecord,
    template: &'static Template,
    active_field: Option<FieldId>,
    move_mode: bool,
    gesture: GestureController,
    /// State captured when the running gesture began; pushed to history on commit.
    gesture_checkpoint: Option<Snapshot>,
    history: UndoStack<Snapshot>,
    peek: PeekController,
    cfg: EditorConfig,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    /// Fresh session: the Marathi preset on the first catalog template.
    pub fn new(cfg: EditorConfig) -> Self {
        Self::with_record(DataRecord::marathi(), default_template(), cfg)
    }

    pub fn with_record(record: DataRecord, template: &'static Template, cfg: EditorConfig) -> Self {
        Self {
            record,
            template,
            active_field: None,
            move_mode: false,
            gesture: GestureController::new(cfg.font_scale_ceiling),
            gesture_checkpoint: None,
            history: UndoStack::default(),
            peek: PeekController::from_config(&cfg),
            cfg,
        }
    }

    pub fn record(&self) -> &DataRecord {
        &self.record
    }

    pub fn template(&self) -> &'static Template {
        self.template
    }

    pub fn config(&self) -> &EditorConfig {
        &self.cfg
    }

    pub fn language(&self) -> Language {
        Language::detect(&self.record)
    }

    pub fn active_field(&self) -> Option<FieldId> {
        self.active_field
    }

    pub fn move_mode(&self) -> bool {
        self.move_mode
    }

    pub fn gesture(&self) -> &GestureController {
        &self.gesture
    }

    pub fn peek(&self) -> &PeekController {
        &self.peek
    }

    pub fn peek_mut(&mut self) -> &mut PeekController {
        &mut self.peek
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Compose the card with the current selection chrome.
    pub fn render(&self) -> Composition {
        render(
            &self.record,
            self.template,
            ViewState::editing(self.active_field, self.move_mode),
        )
    }

    /// Compose the card as a gallery thumbnail of `template`: no selection chrome.
    pub fn thumbnail(&self, template: &Template) -> Composition {
        render(&self.record, template, ViewState::thumbnail())
    }

    pub fn select_field(&mut self, field: Option<FieldId>) {
        self.active_field = field;
    }

    pub fn set_move_mode(&mut self, on: bool) {
        self.move_mode = on;
    }

    pub fn toggle_move_mode(&mut self) -> bool {
        self.move_mode = !self.move_mode;
        self.move_mode
    }

    // ---- text and symbol -------------------------------------------------

    /// Replace a text field. Symbol fields and unchanged values are ignored.
    pub fn set_text(&mut self, field: FieldId, value: impl Into<String>) -> bool {
        let value = value.into();
        if field.is_symbol() || self.record.text(field) == value {
            return false;
        }
        self.checkpoint();
        self.record.set_text(field, value)
    }

    pub fn set_symbol(&mut self, symbol: CentralSymbol) {
        if self.record.symbol == symbol {
            return;
        }
        self.checkpoint();
        self.record.set_symbol(symbol);
    }

    /// Load the other language preset's text. Field styles go back to defaults.
    #[tracing::instrument(level = "info", skip(self))]
    pub fn switch_language(&mut self, lang: Language) {
        self.checkpoint();
        self.record.switch_language(lang);
    }

    // ---- colors ----------------------------------------------------------

    pub fn apply_palette(&mut self, palette: Palette) {
        self.checkpoint();
        self.record.apply_palette(palette);
    }

    pub fn reset_colors(&mut self) {
        self.checkpoint();
        self.record.reset_colors();
    }

    /// Recolor the active field. `false` when nothing is selected.
    pub fn set_field_color(&mut self, color: Option<Color>) -> bool {
        let Some(field) = self.active_field else {
            return false;
        };
        self.checkpoint();
        self.record.set_field_color(field, color);
        true
    }

    // ---- active-field controls ------------------------------------------

    pub fn nudge(&mut self, direction: Nudge) -> bool {
        let Some(field) = self.active_field else {
            return false;
        };
        self.checkpoint();
        self.record
            .nudge(field, direction.unit() * self.cfg.nudge_step_px);
        true
    }

    pub fn grow(&mut self) -> bool {
        self.step_font_size(self.cfg.size_step)
    }

    pub fn shrink(&mut self) -> bool {
        self.step_font_size(-self.cfg.size_step)
    }

    fn step_font_size(&mut self, delta: f64) -> bool {
        let Some(field) = self.active_field else {
            return false;
        };
        self.checkpoint();
        let size = self
            .record
            .adjust_font_size(field, delta, self.cfg.font_scale_ceiling);
        tracing::debug!(%field, size, "font size stepped");
        true
    }

    // ---- photo -----------------------------------------------------------

    pub fn set_photo(&mut self, photo: Option<String>) {
        self.checkpoint();
        self.record.set_photo(photo);
    }

    /// Embed an image file as the photo.
    pub fn set_photo_from_file(&mut self, path: &Path) -> CardResult<()> {
        let uri = photo_data_uri(path)?;
        self.set_photo(Some(uri));
        Ok(())
    }

    pub fn set_photo_shape(&mut self, shape: PhotoShape) {
        self.checkpoint();
        self.record.set_photo_shape(shape);
    }

    pub fn adjust_photo_scale(&mut self, delta: f64) {
        self.checkpoint();
        self.record.adjust_photo_scale(delta);
    }

    pub fn move_photo(&mut self, delta: Vec2) {
        self.checkpoint();
        self.record.move_photo(delta);
    }

    // ---- layers and templates --------------------------------------------

    pub fn layer(&self, slot: LayerSlot) -> &LayerConfig {
        match slot {
            LayerSlot::Decoration => &self.record.decoration,
            LayerSlot::BottomBorder => &self.record.bottom_border,
            LayerSlot::LeftBorder => &self.record.left_border,
            LayerSlot::RightBorder => &self.record.right_border,
            LayerSlot::Texture => &self.record.background_texture,
        }
    }

    pub fn set_layer(&mut self, slot: LayerSlot, config: LayerConfig) {
        self.checkpoint();
        let dst = match slot {
            LayerSlot::Decoration => &mut self.record.decoration,
            LayerSlot::BottomBorder => &mut self.record.bottom_border,
            LayerSlot::LeftBorder => &mut self.record.left_border,
            LayerSlot::RightBorder => &mut self.record.right_border,
            LayerSlot::Texture => &mut self.record.background_texture,
        };
        *dst = config;
    }

    /// Switch to the template with `id`. Unknown ids are rejected.
    pub fn select_template(&mut self, id: &str) -> CardResult<()> {
        let template =
            find(id).ok_or_else(|| CardError::validation(format!("unknown template '{id}'")))?;
        self.apply_template(template);
        Ok(())
    }

    /// Swap templates. Text content survives; layers, colors and styles are reset
    /// to what the new template implies.
    #[tracing::instrument(level = "info", skip_all, fields(from = %self.template.id, to = %template.id))]
    pub fn apply_template(&mut self, template: &'static Template) {
        self.abort_gesture();
        self.checkpoint();

        let rec = &mut self.record;
        rec.decoration = LayerConfig::new(template.style.decoration.clone(), 1.0);
        rec.bottom_border = LayerConfig::none();
        rec.left_border = LayerConfig::none();
        rec.right_border = LayerConfig::none();
        rec.background_texture = LayerConfig::none_texture();
        rec.photo_style = PhotoStyle::default();
        rec.custom_colors = None;
        rec.text_styles = TextStyles::default();

        let photo = rec.photo.take();
        let photo = if template.layout.is_split() {
            photo.or_else(|| Some(self.cfg.default_photo.clone()))
        } else if template.has_photo {
            photo
        } else {
            None
        };
        rec.set_photo(photo);

        self.template = template;
        self.active_field = None;
    }

    // ---- pointer gestures ------------------------------------------------

    /// Press at `point` in card coordinates. The active field's resize handle wins over
    /// field bodies; a press on empty card clears the selection.
    pub fn pointer_down(&mut self, point: Point) -> bool {
        if !self.gesture.is_idle() {
            return false;
        }
        let composition = self.render();
        if let Some(field) = composition.handle_at(point) {
            let style = self.record.text_styles.get(field);
            if self.gesture.press_resize_handle(field, point, style) {
                self.gesture_checkpoint = Some(self.snapshot());
                return true;
            }
            return false;
        }
        let Some(field) = composition.field_at(point) else {
            self.active_field = None;
            return false;
        };
        self.active_field = Some(field);
        let style = self.record.text_styles.get(field);
        if self.gesture.press_field(field, point, style) {
            self.gesture_checkpoint = Some(self.snapshot());
            true
        } else {
            false
        }
    }

    /// Provisional update while a gesture runs. `true` when the record changed.
    pub fn pointer_move(&mut self, point: Point) -> bool {
        match self.gesture.pointer_move(point, self.move_mode) {
            Some(update) => {
                self.apply_style(update);
                true
            }
            None => false,
        }
    }

    /// Pointer up: commit. One history entry is recorded if the gesture changed anything.
    pub fn pointer_up(&mut self) -> bool {
        let outcome = self.gesture.release();
        self.commit_gesture(outcome.map(|o| o.changed))
    }

    /// Pointer left the card mid-gesture: the partial value is kept.
    pub fn pointer_leave(&mut self) -> bool {
        let outcome = self.gesture.cancel();
        self.commit_gesture(outcome.map(|o| o.changed))
    }

    /// Drop the running gesture and restore the field to where it started.
    pub fn abort_gesture(&mut self) -> bool {
        self.gesture_checkpoint = None;
        match self.gesture.abort() {
            Some(update) => {
                self.apply_style(update);
                true
            }
            None => false,
        }
    }

    fn commit_gesture(&mut self, changed: Option<bool>) -> bool {
        let checkpoint = self.gesture_checkpoint.take();
        match (changed, checkpoint) {
            (Some(true), Some(snapshot)) => {
                self.history.checkpoint(snapshot);
                true
            }
            _ => false,
        }
    }

    fn apply_style(&mut self, update: StyleUpdate) {
        let mut style = update.style;
        style.clamp_font_size(self.cfg.font_scale_ceiling);
        self.record.text_styles.set(update.field, style);
    }

    // ---- history ---------------------------------------------------------

    pub fn undo(&mut self) -> bool {
        self.abort_gesture();
        let current = self.snapshot();
        match self.history.undo(current) {
            Some(prev) => {
                self.restore(prev);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        self.abort_gesture();
        let current = self.snapshot();
        match self.history.redo(current) {
            Some(next) => {
                self.restore(next);
                true
            }
            None => false,
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            record: self.record.clone(),
            template: self.template,
        }
    }

    fn checkpoint(&mut self) {
        let snapshot = self.snapshot();
        self.history.checkpoint(snapshot);
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.record = snapshot.record;
        self.template = snapshot.template;
    }

    // ---- drafts and export -----------------------------------------------

    pub fn save_draft(&self, slot: &mut dyn DraftSlot) -> CardResult<()> {
        save_draft(slot, &self.record, self.template)
    }

    /// Replace the session state with the stored draft. `Ok(false)` when the slot is
    /// empty. A corrupt draft is cleared and the current state is kept.
    pub fn load_draft(&mut self, slot: &mut dyn DraftSlot) -> CardResult<bool> {
        let Some(loaded) = load_draft(slot)? else {
            return Ok(false);
        };
        self.abort_gesture();
        self.checkpoint();
        self.record = loaded.record;
        self.template = loaded.template;
        self.active_field = None;
        Ok(true)
    }

    pub fn clear_draft(&self, slot: &mut dyn DraftSlot) -> CardResult<()> {
        clear_draft(slot)
    }

    /// Payment-gated export of the card as currently composed, without selection chrome.
    pub fn export(&self, action: ExportAction, ports: ExportPorts<'_>) -> CardResult<ExportArtifact> {
        let composition = render(&self.record, self.template, ViewState::thumbnail());
        run_export(action, &composition, &self.record, ports)
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
