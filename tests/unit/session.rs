use super::*;
use crate::catalog::palettes::PALETTES;
use crate::export::capture::{CaptureService, RasterImage};
use crate::export::flow::{PaymentGate, PaymentOutcome, PaymentRequest, PrintSink};
use crate::export::pdf::PdfPackager;
use crate::interact::GestureState;
use crate::persist::MemorySlot;

fn editor() -> Editor {
    Editor::with_record(
        DataRecord::english(),
        default_template(),
        EditorConfig::default(),
    )
}

fn center_of(ed: &Editor, field: FieldId) -> Point {
    ed.render().field(field).unwrap().bounds.center()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn starts_on_marathi_preset_and_default_template() {
    let ed = Editor::default();
    assert_eq!(ed.record(), &DataRecord::marathi());
    assert_eq!(ed.template().id, default_template().id);
    assert_eq!(ed.language(), Language::Marathi);
    assert_eq!(ed.active_field(), None);
    assert!(!ed.can_undo());
}

#[test]
fn text_edit_is_undoable() {
    let mut ed = editor();
    assert!(ed.set_text(FieldId::BrideName, "Meera"));
    assert_eq!(ed.record().bride_name, "Meera");

    assert!(ed.undo());
    assert_eq!(ed.record().bride_name, "Ananya");
    assert!(ed.can_redo());

    assert!(ed.redo());
    assert_eq!(ed.record().bride_name, "Meera");
}

#[test]
fn unchanged_or_symbol_text_is_ignored() {
    let mut ed = editor();
    assert!(!ed.set_text(FieldId::BrideName, "Ananya"));
    assert!(!ed.set_text(FieldId::SwastikSymbol, "x"));
    assert!(!ed.can_undo());
}

#[test]
fn field_controls_need_a_selection() {
    let mut ed = editor();
    assert!(!ed.nudge(Nudge::Left));
    assert!(!ed.grow());
    assert!(!ed.shrink());
    assert!(!ed.set_field_color(Some(Color::rgb(1, 2, 3))));
    assert!(!ed.can_undo());
    assert_eq!(ed.record(), &DataRecord::english());
}

#[test]
fn nudge_and_size_steps_use_config() {
    let mut ed = editor();
    ed.select_field(Some(FieldId::Message));
    assert!(ed.nudge(Nudge::Right));
    assert!(ed.nudge(Nudge::Up));
    let s = ed.record().text_styles.get(FieldId::Message);
    assert_eq!((s.x, s.y), (5.0, -5.0));

    assert!(ed.grow());
    assert!(approx(ed.record().text_styles.get(FieldId::Message).font_size, 1.1));

    for _ in 0..100 {
        ed.grow();
    }
    assert_eq!(ed.record().text_styles.get(FieldId::Message).font_size, 4.0);
    for _ in 0..100 {
        ed.shrink();
    }
    assert_eq!(ed.record().text_styles.get(FieldId::Message).font_size, 0.2);
}

#[test]
fn palette_apply_and_reset() {
    let mut ed = editor();
    ed.apply_palette(PALETTES[0].colors);
    assert_eq!(ed.record().custom_colors, Some(PALETTES[0].colors));
    ed.reset_colors();
    assert_eq!(ed.record().custom_colors, None);
    assert!(ed.record().text_styles.iter().all(|(_, s)| s.color.is_none()));
    assert!(ed.undo());
    assert_eq!(ed.record().custom_colors, Some(PALETTES[0].colors));
}

#[test]
fn split_template_gets_default_photo() {
    let mut ed = editor();
    ed.set_layer(LayerSlot::BottomBorder, LayerConfig::new("floral-vine", 0.5));
    ed.set_layer(LayerSlot::Texture, LayerConfig::new("dots", 0.3));
    ed.apply_palette(PALETTES[1].colors);
    ed.select_field(Some(FieldId::Headline));
    ed.nudge(Nudge::Down);

    ed.select_template("divine-split-royal-1").unwrap();
    let r = ed.record();
    assert_eq!(ed.template().id, "divine-split-royal-1");
    assert_eq!(r.decoration, LayerConfig::new("damask-pattern", 1.0));
    assert_eq!(r.bottom_border, LayerConfig::none());
    assert_eq!(r.left_border, LayerConfig::none());
    assert_eq!(r.right_border, LayerConfig::none());
    assert_eq!(r.background_texture, LayerConfig::none_texture());
    assert_eq!(r.custom_colors, None);
    assert_eq!(r.text_styles, TextStyles::default());
    assert_eq!(r.photo_style, PhotoStyle::default());
    assert_eq!(r.photo.as_deref(), Some(ed.config().default_photo.as_str()));
    assert_eq!(r.bride_name, "Ananya");
    assert_eq!(ed.active_field(), None);
}

#[test]
fn split_template_keeps_user_photo() {
    let mut ed = editor();
    ed.set_photo(Some("data:image/png;base64,AAAA".to_owned()));
    ed.select_template("divine-split-royal-2").unwrap();
    assert_eq!(ed.record().photo.as_deref(), Some("data:image/png;base64,AAAA"));
}

#[test]
fn photo_survives_only_on_photo_templates() {
    let mut ed = editor();
    ed.set_photo(Some("couple.jpg".to_owned()));
    ed.select_template("photo-royal-frame-gold").unwrap();
    assert_eq!(ed.record().photo.as_deref(), Some("couple.jpg"));

    ed.select_template("unique-royal-arch").unwrap();
    assert_eq!(ed.record().photo, None);

    assert!(ed.undo());
    assert_eq!(ed.template().id, "photo-royal-frame-gold");
    assert_eq!(ed.record().photo.as_deref(), Some("couple.jpg"));
}

#[test]
fn unknown_template_is_rejected() {
    let mut ed = editor();
    let err = ed.select_template("no-such-card").unwrap_err();
    assert!(matches!(err, CardError::Validation(_)));
    assert!(!ed.can_undo());
}

#[test]
fn language_switch_resets_styles_keeps_photo() {
    let mut ed = editor();
    ed.set_photo(Some("couple.jpg".to_owned()));
    ed.select_field(Some(FieldId::GroomName));
    ed.nudge(Nudge::Left);
    ed.switch_language(Language::Marathi);
    assert_eq!(ed.language(), Language::Marathi);
    assert_eq!(ed.record().text_styles, TextStyles::default());
    assert_eq!(ed.record().photo.as_deref(), Some("couple.jpg"));
}

#[test]
fn drag_commits_one_history_entry() {
    let mut ed = editor();
    ed.set_move_mode(true);
    let p = center_of(&ed, FieldId::GroomName);

    assert!(ed.pointer_down(p));
    assert_eq!(ed.active_field(), Some(FieldId::GroomName));
    assert!(ed.gesture().captures_scroll());
    assert!(!ed.can_undo());

    assert!(ed.pointer_move(p + Vec2::new(4.0, 2.0)));
    assert!(ed.pointer_move(p + Vec2::new(10.0, 5.0)));
    assert!(ed.pointer_up());
    assert!(ed.gesture().is_idle());

    let s = ed.record().text_styles.get(FieldId::GroomName);
    assert_eq!((s.x, s.y), (10.0, 5.0));

    assert!(ed.undo());
    let s = ed.record().text_styles.get(FieldId::GroomName);
    assert_eq!((s.x, s.y), (0.0, 0.0));
    assert!(!ed.can_undo());
}

#[test]
fn press_without_move_mode_only_selects() {
    let mut ed = editor();
    let p = center_of(&ed, FieldId::VenueName);
    assert!(ed.pointer_down(p));
    assert!(!ed.pointer_move(p + Vec2::new(30.0, 30.0)));
    assert!(!ed.pointer_up());
    assert_eq!(ed.active_field(), Some(FieldId::VenueName));
    assert!(!ed.can_undo());
    assert_eq!(ed.record(), &DataRecord::english());
}

#[test]
fn resize_handle_scales_font() {
    let mut ed = editor();
    ed.select_field(Some(FieldId::GroomName));
    let (field, handle) = ed.render().handle.unwrap();
    assert_eq!(field, FieldId::GroomName);

    assert!(ed.pointer_down(handle));
    assert!(matches!(ed.gesture().state(), GestureState::Resizing { .. }));
    assert!(ed.pointer_move(handle + Vec2::new(20.0, 20.0)));
    assert!(ed.pointer_leave());
    assert!(approx(
        ed.record().text_styles.get(FieldId::GroomName).font_size,
        1.7
    ));
    assert!(ed.can_undo());
}

#[test]
fn resize_never_goes_below_floor() {
    let mut ed = editor();
    ed.select_field(Some(FieldId::Rsvp));
    let (_, handle) = ed.render().handle.unwrap();
    assert!(ed.pointer_down(handle));
    ed.pointer_move(handle - Vec2::new(5000.0, 5000.0));
    ed.pointer_up();
    assert_eq!(ed.record().text_styles.get(FieldId::Rsvp).font_size, 0.2);
}

#[test]
fn abort_restores_baseline_without_history() {
    let mut ed = editor();
    ed.set_move_mode(true);
    let p = center_of(&ed, FieldId::Headline);
    assert!(ed.pointer_down(p));
    ed.pointer_move(p + Vec2::new(50.0, 0.0));
    assert_eq!(ed.record().text_styles.get(FieldId::Headline).x, 50.0);

    assert!(ed.abort_gesture());
    assert_eq!(ed.record().text_styles.get(FieldId::Headline).x, 0.0);
    assert!(ed.gesture().is_idle());
    assert!(!ed.can_undo());
    assert!(!ed.pointer_up());
}

#[test]
fn press_on_empty_card_clears_selection() {
    let mut ed = editor();
    ed.select_field(Some(FieldId::Message));
    assert!(!ed.pointer_down(Point::new(1.0, 1.0)));
    assert_eq!(ed.active_field(), None);
}

#[test]
fn render_shows_selection_but_thumbnail_does_not() {
    let mut ed = editor();
    ed.select_field(Some(FieldId::Message));
    assert!(ed.render().handle.is_some());
    assert!(ed.thumbnail(ed.template()).handle.is_none());
}

#[test]
fn draft_round_trip_restores_template() {
    let mut slot = MemorySlot::default();
    let mut ed = editor();
    ed.select_template("photo-royal-frame-gold").unwrap();
    ed.set_text(FieldId::GroomName, "Rohan");
    ed.save_draft(&mut slot).unwrap();

    let mut other = Editor::default();
    assert!(other.load_draft(&mut slot).unwrap());
    assert_eq!(other.record(), ed.record());
    assert_eq!(other.template().id, "photo-royal-frame-gold");

    assert!(other.undo());
    assert_eq!(other.record(), &DataRecord::marathi());
}

#[test]
fn empty_slot_loads_nothing() {
    let mut ed = editor();
    assert!(!ed.load_draft(&mut MemorySlot::default()).unwrap());
    assert!(!ed.can_undo());
}

#[test]
fn corrupt_draft_keeps_session_and_clears_slot() {
    let mut slot = MemorySlot::with("{ not json");
    let mut ed = editor();
    ed.set_text(FieldId::BrideName, "Meera");
    let err = ed.load_draft(&mut slot).unwrap_err();
    assert!(matches!(err, CardError::CorruptDraft(_)));
    assert_eq!(ed.record().bride_name, "Meera");
    assert!(!slot.is_occupied());

    ed.save_draft(&mut slot).unwrap();
    ed.clear_draft(&mut slot).unwrap();
    assert!(!slot.is_occupied());
}

struct Decline;

impl PaymentGate for Decline {
    fn request(&mut self, _: &PaymentRequest) -> PaymentOutcome {
        PaymentOutcome::Declined("card declined".to_owned())
    }
}

struct Approve;

impl PaymentGate for Approve {
    fn request(&mut self, _: &PaymentRequest) -> PaymentOutcome {
        PaymentOutcome::Paid
    }
}

struct Solid;

impl CaptureService for Solid {
    fn capture(&self, c: &Composition) -> CardResult<RasterImage> {
        let (w, h) = (c.metrics.canvas.width as u32, c.metrics.canvas.height as u32);
        RasterImage::new(w, h, [255u8, 255, 255, 255].repeat((w * h) as usize))
    }
}

struct NoPrinter;

impl PrintSink for NoPrinter {
    fn print(&mut self, _: &[u8], _: &RasterImage) -> CardResult<()> {
        Ok(())
    }
}

#[test]
fn declined_export_leaves_record_alone() {
    let ed = editor();
    let mut confirm = |_: &str| true;
    let err = ed
        .export(
            ExportAction::Image,
            ExportPorts {
                gate: &mut Decline,
                confirm: &mut confirm,
                capture: &Solid,
                packager: &PdfPackager::default(),
                printer: &mut NoPrinter,
            },
        )
        .unwrap_err();
    assert!(matches!(err, CardError::Payment(_)));
    assert_eq!(ed.record(), &DataRecord::english());
}

#[test]
fn paid_document_export_names_file_after_bride() {
    let mut ed = editor();
    ed.select_field(Some(FieldId::Message));
    let mut confirm = |_: &str| false;
    let artifact = ed
        .export(
            ExportAction::Document,
            ExportPorts {
                gate: &mut Approve,
                confirm: &mut confirm,
                capture: &Solid,
                packager: &PdfPackager::default(),
                printer: &mut NoPrinter,
            },
        )
        .unwrap();
    let ExportArtifact::Document { file_name, document } = artifact else {
        panic!("expected a document");
    };
    assert_eq!(file_name, "Ananya-wedding-card.pdf");
    assert_eq!((document.page_width, document.page_height), (530.0, 750.0));
}
