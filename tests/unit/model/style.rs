use super::*;

#[test]
fn field_ids_round_trip_through_names() {
    for f in FieldId::ALL {
        assert_eq!(FieldId::parse(f.as_str()), Some(f));
        let json = serde_json::to_string(&f).unwrap();
        assert_eq!(json, format!("\"{}\"", f.as_str()));
    }
    assert_eq!(FieldId::parse("nope"), None);
}

#[test]
fn clamp_scale_enforces_floor_and_ceiling() {
    assert_eq!(clamp_scale(0.05, 4.0), MIN_FONT_SCALE);
    assert_eq!(clamp_scale(-3.0, 4.0), MIN_FONT_SCALE);
    assert_eq!(clamp_scale(f64::NAN, 4.0), MIN_FONT_SCALE);
    assert_eq!(clamp_scale(9.0, 4.0), 4.0);
    assert_eq!(clamp_scale(1.3, 4.0), 1.3);
    // A ceiling below the floor never inverts the range.
    assert_eq!(clamp_scale(1.0, 0.1), MIN_FONT_SCALE);
}

#[test]
fn text_styles_default_multipliers() {
    let styles = TextStyles::default();
    assert_eq!(styles.get(FieldId::Headline).font_size, 1.2);
    assert_eq!(styles.get(FieldId::BrideName).font_size, 1.5);
    assert_eq!(styles.get(FieldId::Message).font_size, 1.0);
    assert_eq!(styles.get(FieldId::SwastikSymbol).font_size, 1.8);
    assert!(styles.iter().all(|(_, s)| s.x == 0.0 && s.y == 0.0 && s.color.is_none()));
}

#[test]
fn text_styles_missing_entries_read_as_defaults() {
    let styles: TextStyles =
        serde_json::from_str(r##"{ "rsvp": { "fontSize": 2.0, "x": 4, "y": -2, "color": "#ff0000" } }"##)
            .unwrap();
    let rsvp = styles.get(FieldId::Rsvp);
    assert_eq!(rsvp.font_size, 2.0);
    assert_eq!(rsvp.color, Some(Color::hex(0xff0000)));
    assert_eq!(styles.get(FieldId::VenueName).font_size, 1.3);
}

#[test]
fn layer_kind_none_variants() {
    assert!(LayerKind::none().is_none());
    assert!(LayerKind::new("").is_none());
    assert!(!LayerKind::new("toran").is_none());

    let cfg: LayerConfig = serde_json::from_str(r#"{ "type": "mandala" }"#).unwrap();
    assert_eq!(cfg.kind.as_str(), "mandala");
    assert_eq!(cfg.opacity, 1.0);
    assert!(cfg.is_active());
    assert!(!LayerConfig::none_texture().is_active());
    assert_eq!(LayerConfig::new("x", 3.0).opacity, 1.0);
}

#[test]
fn central_symbol_maps_to_flags() {
    let json = serde_json::to_value(CentralSymbol::Ampersand).unwrap();
    assert_eq!(json["showAmpersand"], true);
    assert_eq!(json["showSwastik"], false);

    let both: CentralSymbol =
        serde_json::from_str(r#"{ "showSwastik": true, "showAmpersand": true }"#).unwrap();
    assert_eq!(both, CentralSymbol::Ampersand);

    let neither: CentralSymbol = serde_json::from_str("{}").unwrap();
    assert_eq!(neither, CentralSymbol::None);
    assert_eq!(neither.field(), None);
    assert_eq!(CentralSymbol::Swastik.field(), Some(FieldId::SwastikSymbol));
}

#[test]
fn palette_roles_split_highlight_and_text() {
    assert_eq!(FieldId::Headline.palette_role(), PaletteRole::Highlight);
    assert_eq!(FieldId::VenueTitle.palette_role(), PaletteRole::Highlight);
    assert_eq!(FieldId::AmpersandSymbol.palette_role(), PaletteRole::Highlight);
    assert_eq!(FieldId::Rsvp.palette_role(), PaletteRole::Text);
    assert_eq!(FieldId::CeremonyDetails.palette_role(), PaletteRole::Text);
}
