use super::*;
use crate::catalog::templates::default_template;

#[test]
fn context_prefers_palette_accent() {
    let canvas = Canvas {
        width: 530.0,
        height: 750.0,
    };
    let t = default_template();
    let plain = DecorContext::new(canvas, t, None);
    assert_eq!(plain.accent(), t.style.accent);
    assert_eq!(plain.tint(Color::BLACK), Color::BLACK);

    let palette = crate::catalog::palettes::PALETTES[0].colors;
    let tinted = DecorContext::new(canvas, t, Some(&palette));
    assert_eq!(tinted.accent(), palette.accent);
    assert_eq!(tinted.tint(Color::BLACK), palette.accent);
}

#[test]
fn spread_between_pins_the_ends() {
    let xs = spread_between(3, 10.0, 0.0, 100.0);
    assert_eq!(xs, vec![5.0, 50.0, 95.0]);
    assert_eq!(spread_between(1, 10.0, 0.0, 100.0), vec![50.0]);
    assert!(spread_between(0, 10.0, 0.0, 100.0).is_empty());
}

#[test]
fn spread_around_leaves_half_gaps_at_the_ends() {
    assert_eq!(spread_around(4, 0.0, 100.0), vec![12.5, 37.5, 62.5, 87.5]);
}

#[test]
fn finish_drops_empty_output() {
    assert!(finish("x", 1.0, Vec::new()).is_empty());
    let f = finish("x", 0.5, vec![rect(0.0, 0.0, 1.0, 1.0).into()]);
    let g = f.nodes[0].as_element().unwrap();
    assert_eq!(g.get("class"), Some("x"));
    assert_eq!(g.get("opacity"), Some("0.5"));
}
