use super::*;
use crate::catalog::templates::default_template;
use crate::foundation::core::Canvas;

fn ctx() -> DecorContext {
    DecorContext::new(
        Canvas {
            width: 530.0,
            height: 750.0,
        },
        default_template(),
        None,
    )
}

fn texts(f: &Fragment) -> Vec<&crate::render::node::Element> {
    let mut out = Vec::new();
    for n in &f.nodes {
        n.walk(&mut |el| {
            if el.tag == "text" {
                out.push(el);
            }
        });
    }
    out
}

#[test]
fn catalog_sizes() {
    assert_eq!(bottom_border_ids().len(), 26);
    assert_eq!(side_border_ids().len(), 20);
}

#[test]
fn unknown_borders_draw_nothing() {
    let c = ctx();
    assert!(render_bottom_border(&LayerKind::none(), 1.0, &c).is_empty());
    assert!(render_bottom_border(&LayerKind::new("zigzag-9000"), 1.0, &c).is_empty());
    assert!(render_side_border(Side::Left, &LayerKind::none(), 1.0, &c).is_empty());
}

#[test]
fn glyph_strip_repeats_its_glyph() {
    let f = render_bottom_border(&LayerKind::new("floral-vine"), 1.0, &ctx());
    let glyphs = texts(&f);
    assert_eq!(glyphs.len(), 12);
    assert!(glyphs.iter().all(|el| el.children[0] == Node::Text("🌿".into())));
    let g = f.nodes[0].as_element().unwrap();
    assert_eq!(g.get("opacity"), Some("0.9"));
}

#[test]
fn strips_stay_inside_the_bottom_band() {
    let c = ctx();
    for id in bottom_border_ids() {
        let f = render_bottom_border(&LayerKind::new(id), 1.0, &c);
        assert!(!f.is_empty(), "{id} drew nothing");
        for el in texts(&f) {
            let y: f64 = el.get("y").unwrap().parse().unwrap();
            assert!(y > c.height - BOTTOM_STRIP_PX && y <= c.height, "{id}: {y}");
        }
    }
}

#[test]
fn own_tint_applies_without_override() {
    let f = render_bottom_border(&LayerKind::new("hearts-row"), 1.0, &ctx());
    assert!(texts(&f).iter().all(|el| el.get("fill") == Some("#f87171")));
}

#[test]
fn side_stack_has_eight_rows_and_turns_per_side() {
    let c = ctx();
    let kind = LayerKind::new("floral-creeper");
    let left = render_side_border(Side::Left, &kind, 1.0, &c);
    let right = render_side_border(Side::Right, &kind, 1.0, &c);
    assert_eq!(texts(&left).len(), 8);
    assert!(texts(&left).iter().all(|el| el.get("transform").is_none()));
    assert!(
        texts(&right)
            .iter()
            .all(|el| el.get("transform").is_some_and(|t| t.starts_with("rotate(180")))
    );
    let g = right.nodes[0].as_element().unwrap();
    assert_eq!(g.get("class"), Some("floral-creeper right"));
}

#[test]
fn side_glyphs_sit_in_their_strip() {
    let c = ctx();
    let f = render_side_border(Side::Right, &LayerKind::new("lotus-stack"), 1.0, &c);
    for el in texts(&f) {
        let x: f64 = el.get("x").unwrap().parse().unwrap();
        assert!(x > c.width - SIDE_STRIP_PX);
    }
}

#[test]
fn every_side_border_draws() {
    let c = ctx();
    for id in side_border_ids() {
        for side in [Side::Left, Side::Right] {
            assert!(!render_side_border(side, &LayerKind::new(id), 1.0, &c).is_empty());
        }
    }
}

#[test]
fn bells_and_lanterns_draw_one_item_each() {
    let c = ctx();
    let bells = render_bottom_border(&LayerKind::new("hanging-bells"), 1.0, &c);
    let bell = Node::Text("🔔".to_owned());
    assert_eq!(texts(&bells).iter().filter(|t| t.children == [bell.clone()]).count(), 5);

    let lanterns = render_bottom_border(&LayerKind::new("lanterns-border"), 1.0, &c);
    let mut glows = 0;
    for n in &lanterns.nodes {
        n.walk(&mut |el| {
            if el.tag == "circle" {
                glows += 1;
            }
        });
    }
    assert_eq!(glows, 10);
}
