use super::*;
use crate::catalog::palettes::PALETTES;
use crate::catalog::templates::{default_template, find};
use crate::model::style::LayerConfig;

fn template(id: &str) -> &'static Template {
    find(id).unwrap()
}

fn with_photo() -> DataRecord {
    let mut r = DataRecord::marathi();
    r.set_photo(Some("data:image/png;base64,AAAA".into()));
    r
}

fn stroke_of(c: &Composition, role: LayerRole, class: &str) -> Option<String> {
    let mut found = None;
    for n in &c.layer(role)?.fragment.nodes {
        n.walk(&mut |e| {
            if found.is_none() && e.get("class") == Some(class) {
                found = e.get("stroke").map(str::to_owned);
            }
        });
    }
    found
}

#[test]
fn render_is_deterministic() {
    let r = with_photo();
    let t = template("photo-royal-frame-gold");
    let view = ViewState::editing(Some(FieldId::Message), false);
    let a = render(&r, t, view);
    let b = render(&r, t, view);
    assert_eq!(a, b);
    assert_eq!(a.to_svg(), b.to_svg());
}

#[test]
fn layers_follow_paint_order() {
    let mut r = DataRecord::marathi();
    r.background_texture = LayerConfig::new("dots", 0.3);
    r.left_border = LayerConfig::new("lotus-stack", 1.0);
    r.right_border = LayerConfig::new("lotus-stack", 1.0);
    r.bottom_border = LayerConfig::new("floral-vine", 1.0);
    let c = render(&r, default_template(), ViewState::thumbnail());
    let roles = c.roles();
    assert_eq!(roles[0], LayerRole::Background);
    assert!(roles.windows(2).all(|w| w[0] < w[1]));
    for role in [
        LayerRole::Texture,
        LayerRole::Decoration,
        LayerRole::LeftBorder,
        LayerRole::RightBorder,
        LayerRole::BottomBorder,
        LayerRole::Fields,
    ] {
        assert!(roles.contains(&role), "missing {role:?}");
    }
    assert!(!roles.contains(&LayerRole::Selection));
}

#[test]
fn inactive_layers_are_skipped() {
    let mut r = DataRecord::marathi();
    r.decoration = LayerConfig::none();
    let c = render(&r, template("unique-royal-arch"), ViewState::thumbnail());
    let roles = c.roles();
    assert!(!roles.contains(&LayerRole::Texture));
    assert!(!roles.contains(&LayerRole::Decoration));
    assert!(!roles.contains(&LayerRole::ScrollRods));
}

#[test]
fn scroll_layout_draws_rods() {
    let c = render(
        &DataRecord::marathi(),
        template("unique-scroll-1"),
        ViewState::thumbnail(),
    );
    assert!(c.layer(LayerRole::ScrollRods).is_some());
}

#[test]
fn split_layout_font_sizes_follow_scale() {
    let t = template("divine-split-royal-1");
    let mut r = with_photo();
    let c = render(&r, t, ViewState::thumbnail());
    let headline = c.field(FieldId::Headline).unwrap();
    assert!((headline.font_px - 1.2 * 16.0 * 1.2 * 0.95).abs() < 1e-9);

    r.bottom_border = LayerConfig::new("floral-vine", 1.0);
    let c = render(&r, t, ViewState::thumbnail());
    let headline = c.field(FieldId::Headline).unwrap();
    assert!((headline.font_px - 1.2 * 16.0 * 1.2 * 0.855).abs() < 1e-9);
}

#[test]
fn split_fields_stay_out_of_the_photo_panel() {
    let c = render(&with_photo(), template("divine-split-royal-1"), ViewState::thumbnail());
    let panel = c.metrics.photo_panel.unwrap();
    for f in &c.fields {
        assert!(
            f.bounds.center().x > panel.x1,
            "{} centered inside panel",
            f.field
        );
    }
}

#[test]
fn symbol_hidden_for_standalone_photo() {
    let t = template("photo-royal-frame-gold");
    let c = render(&with_photo(), t, ViewState::thumbnail());
    assert!(c.field(FieldId::SwastikSymbol).is_none());

    let c = render(&DataRecord::marathi(), t, ViewState::thumbnail());
    assert!(c.field(FieldId::SwastikSymbol).is_some());
    assert!(c.field(FieldId::AmpersandSymbol).is_none());
}

#[test]
fn empty_ceremony_and_rsvp_are_omitted() {
    let mut r = DataRecord::english();
    r.ceremony_details.clear();
    r.rsvp.clear();
    let c = render(&r, default_template(), ViewState::thumbnail());
    assert!(c.field(FieldId::CeremonyDetails).is_none());
    assert!(c.field(FieldId::Rsvp).is_none());
    assert!(c.field(FieldId::VenueName).is_some());
}

#[test]
fn rsvp_label_is_split_into_its_own_run() {
    let c = render(&DataRecord::english(), default_template(), ViewState::thumbnail());
    let svg = c.to_svg();
    assert!(svg.contains("Invitee: </tspan>"));
    assert!(svg.contains("Patil &amp; Deshmukh Family</tspan>"));
}

#[test]
fn headline_is_uppercased() {
    let c = render(&DataRecord::english(), default_template(), ViewState::thumbnail());
    assert!(c.to_svg().contains("|| SHREE GANESHAY NAMAH ||"));
}

#[test]
fn selected_field_is_painted_last_with_chrome() {
    let t = template("photo-royal-frame-gold");
    let c = render(
        &DataRecord::marathi(),
        t,
        ViewState::editing(Some(FieldId::GroomName), false),
    );
    assert_eq!(c.fields.last().unwrap().field, FieldId::GroomName);
    assert_eq!(c.roles().last(), Some(&LayerRole::Selection));
    assert_eq!(
        stroke_of(&c, LayerRole::Selection, "selection-outline").as_deref(),
        Some("#ffffff")
    );

    let (field, center) = c.handle.unwrap();
    assert_eq!(field, FieldId::GroomName);
    assert_eq!(c.handle_at(center), Some(FieldId::GroomName));
    assert_eq!(c.handle_at(center + Vec2::new(40.0, 0.0)), None);
}

#[test]
fn outline_is_black_on_light_palette() {
    let mut r = DataRecord::marathi();
    r.apply_palette(PALETTES[3].colors);
    let c = render(
        &r,
        template("photo-royal-frame-gold"),
        ViewState::editing(Some(FieldId::Message), false),
    );
    assert_eq!(
        stroke_of(&c, LayerRole::Selection, "selection-outline").as_deref(),
        Some("#000000")
    );
}

#[test]
fn thumbnails_draw_no_selection() {
    let view = ViewState {
        active_field: Some(FieldId::GroomName),
        move_mode: false,
        editable: false,
    };
    let c = render(&DataRecord::marathi(), default_template(), view);
    assert!(c.layer(LayerRole::Selection).is_none());
    assert!(c.handle.is_none());
    assert_eq!(c.fields.first().unwrap().field, FieldId::Headline);
}

#[test]
fn offsets_shift_bounds_without_reflowing() {
    let t = default_template();
    let mut r = DataRecord::marathi();
    let before = render(&r, t, ViewState::thumbnail());
    r.nudge(FieldId::GroomName, Vec2::new(10.0, 5.0));
    let after = render(&r, t, ViewState::thumbnail());

    let a = before.field(FieldId::GroomName).unwrap().bounds;
    let b = after.field(FieldId::GroomName).unwrap().bounds;
    assert!((b.x0 - a.x0 - 10.0).abs() < 1e-9);
    assert!((b.y0 - a.y0 - 5.0).abs() < 1e-9);
    assert_eq!(
        before.field(FieldId::BrideName).unwrap().bounds,
        after.field(FieldId::BrideName).unwrap().bounds
    );
}

#[test]
fn field_at_finds_the_field_under_the_pointer() {
    let c = render(&DataRecord::marathi(), default_template(), ViewState::thumbnail());
    let venue = c.field(FieldId::VenueName).unwrap().bounds;
    assert_eq!(c.field_at(venue.center()), Some(FieldId::VenueName));
    assert_eq!(c.field_at(Point::new(-5.0, -5.0)), None);
}

#[test]
fn palette_colors_reach_fields() {
    let mut r = DataRecord::marathi();
    let p = PALETTES[0].colors;
    r.apply_palette(p);
    let c = render(&r, default_template(), ViewState::thumbnail());
    assert_eq!(c.field(FieldId::Headline).unwrap().color, p.highlight);
    assert_eq!(c.field(FieldId::Message).unwrap().color, p.text);
}

#[test]
fn field_color_overrides_template_token() {
    let mut r = DataRecord::marathi();
    r.set_field_color(FieldId::GroomName, Some(Color::hex(0x123456)));
    let c = render(&r, default_template(), ViewState::thumbnail());
    assert_eq!(c.field(FieldId::GroomName).unwrap().color, Color::hex(0x123456));
}

#[test]
fn svg_document_has_root_and_layers() {
    let c = render(&with_photo(), template("photo-royal-frame-gold"), ViewState::thumbnail());
    let svg = c.to_svg();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains("viewBox=\"0 0 530 900\""));
    assert!(svg.contains("data-layer=\"fields\""));
    assert!(svg.contains("inline-photo-clip"));
    assert!(svg.ends_with("</svg>"));
}

fn body_element(c: &Composition, pred: impl Fn(&Element) -> bool) -> Option<Element> {
    let mut found = None;
    for n in &c.layer(LayerRole::Body)?.fragment.nodes {
        n.walk(&mut |e| {
            if found.is_none() && pred(e) {
                found = Some(e.clone());
            }
        });
    }
    found
}

fn leading_translate(transform: &str) -> (f64, f64) {
    let inner = transform
        .strip_prefix("translate(")
        .and_then(|s| s.split(')').next())
        .unwrap();
    let mut it = inner.split_whitespace().map(|v| v.parse::<f64>().unwrap());
    (it.next().unwrap(), it.next().unwrap())
}

fn inline_frame(c: &Composition) -> Element {
    body_element(c, |e| e.get("class") == Some("inline-photo")).unwrap()
}

#[test]
fn inline_photo_follows_photo_offsets() {
    let t = template("photo-royal-frame-gold");
    let view = ViewState::thumbnail();
    let mut r = with_photo();
    let base = render(&r, t, view);
    let (x0, y0) = leading_translate(inline_frame(&base).get("transform").unwrap());

    r.move_photo(Vec2::new(40.0, 25.0));
    let moved = render(&r, t, view);
    let (x1, y1) = leading_translate(inline_frame(&moved).get("transform").unwrap());
    assert!((x1 - x0 - 40.0).abs() < 0.01 && (y1 - y0 - 25.0).abs() < 0.01);
    assert_ne!(base.to_svg(), moved.to_svg());
}

#[test]
fn inline_photo_shape_picks_clip() {
    let t = template("photo-royal-frame-gold");
    let clip_child = |shape: PhotoShape| {
        let mut r = with_photo();
        r.set_photo_shape(shape);
        let c = render(&r, t, ViewState::thumbnail());
        let clip = body_element(&c, |e| e.get("id") == Some("inline-photo-clip")).unwrap();
        clip.children[0].as_element().unwrap().clone()
    };
    assert_eq!(clip_child(PhotoShape::Circle).tag, "circle");
    let square = clip_child(PhotoShape::Square);
    assert_eq!(square.tag, "rect");
    assert_eq!(square.get("rx"), None);
    let rounded = clip_child(PhotoShape::Rounded);
    assert_eq!(rounded.tag, "rect");
    assert_eq!(rounded.get("rx"), Some("8"));
}

#[test]
fn photo_scale_reaches_every_photo_layout() {
    for id in ["photo-royal-frame-gold", "divine-split-royal-1", "photo-overlay-gold"] {
        let mut r = with_photo();
        r.adjust_photo_scale(0.5);
        let c = render(&r, template(id), ViewState::thumbnail());
        let img = body_element(&c, |e| e.tag == "image").unwrap();
        assert!(
            img.get("transform").unwrap().contains("scale(1.5)"),
            "{id}: {:?}",
            img.get("transform")
        );
    }
}

#[test]
fn overlay_photo_follows_photo_offsets() {
    let t = template("photo-overlay-gold");
    let mut r = with_photo();
    let base = render(&r, t, ViewState::thumbnail());
    r.move_photo(Vec2::new(10.0, -6.0));
    let moved = render(&r, t, ViewState::thumbnail());
    let before = body_element(&base, |e| e.tag == "image").unwrap();
    let after = body_element(&moved, |e| e.tag == "image").unwrap();
    assert_ne!(before.get("transform"), after.get("transform"));
    assert!(after.get("transform").unwrap().ends_with("translate(-255 -381)"));
}
