use super::*;

#[test]
fn parses_short_long_and_alpha_hex() {
    assert_eq!(Color::parse("#fff").unwrap(), Color::WHITE);
    assert_eq!(Color::parse("4a0404").unwrap(), Color::hex(0x4a0404));
    assert_eq!(
        Color::parse("#FBBF2480").unwrap(),
        Color::rgba(0xfb, 0xbf, 0x24, 0x80)
    );
}

#[test]
fn rejects_malformed_hex() {
    assert!(Color::parse("#12345").is_err());
    assert!(Color::parse("#zzzzzz").is_err());
    assert!(Color::parse("#ééé").is_err());
}

#[test]
fn serde_uses_hex_strings() {
    let c: Color = serde_json::from_str("\"#fbbf24\"").unwrap();
    assert_eq!(c, Color::hex(0xfbbf24));
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"#fbbf24\"");

    let translucent = Color::WHITE.with_alpha(0.5);
    assert_eq!(translucent.to_string(), "#ffffff80");
}

#[test]
fn darkness_heuristic_matches_catalog_backgrounds() {
    assert!(Color::hex(0x4a0404).is_dark());
    assert!(Color::hex(0x000080).is_dark());
    assert!(!Color::hex(0xfffdd0).is_dark());
    assert!(!Color::WHITE.is_dark());
}

#[test]
fn canvas_rect_starts_at_origin() {
    let r = Canvas {
        width: 530.0,
        height: 750.0,
    }
    .rect();
    assert_eq!(r.x0, 0.0);
    assert_eq!(r.width(), 530.0);
    assert_eq!(r.height(), 750.0);
}
