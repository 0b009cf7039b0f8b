use super::*;
use crate::catalog::palettes::PALETTES;
use crate::catalog::templates::default_template;
use crate::foundation::core::Canvas;

fn ctx(palette: bool) -> DecorContext {
    let p = PALETTES[1].colors;
    DecorContext::new(
        Canvas {
            width: 530.0,
            height: 750.0,
        },
        default_template(),
        palette.then_some(&p),
    )
}

fn fills(f: &Fragment) -> Vec<String> {
    let mut out = Vec::new();
    for n in &f.nodes {
        n.walk(&mut |el| {
            if let Some(v) = el.get("fill") {
                if v.starts_with('#') {
                    out.push(v.to_owned());
                }
            }
        });
    }
    out
}

#[test]
fn catalog_has_sixteen_decorations() {
    assert_eq!(decoration_ids().len(), 16);
    assert!(decoration_ids().all(|id| id != "none"));
}

#[test]
fn none_and_unknown_draw_nothing() {
    let c = ctx(false);
    assert!(render_decoration(&LayerKind::none(), 1.0, &c).is_empty());
    assert!(render_decoration(&LayerKind::new("disco-ball"), 1.0, &c).is_empty());
    assert!(render_decoration(&LayerKind::new("silk-texture"), 1.0, &c).is_empty());
}

#[test]
fn every_drawn_decoration_is_tagged() {
    let c = ctx(false);
    for id in decoration_ids() {
        let f = render_decoration(&LayerKind::new(id), 1.0, &c);
        if let Some(g) = f.nodes.first().and_then(|n| n.as_element()) {
            assert_eq!(g.get("class"), Some(id));
        }
    }
}

#[test]
fn toran_has_seven_pendants() {
    let f = render_decoration(&LayerKind::new("toran"), 1.0, &ctx(false));
    let mut beads = 0;
    f.nodes[0].walk(&mut |el| {
        if el.tag == "circle" {
            beads += 1;
        }
    });
    assert_eq!(beads, 7);
}

#[test]
fn accent_override_replaces_recipe_colors() {
    let accent = PALETTES[1].colors.accent.to_hex();
    let f = render_decoration(&LayerKind::new("toran"), 1.0, &ctx(true));
    let colors = fills(&f);
    assert!(colors.iter().filter(|c| **c != "#ffffff").all(|c| *c == accent));

    let plain = render_decoration(&LayerKind::new("toran"), 1.0, &ctx(false));
    assert!(fills(&plain).contains(&"#b91c1c".to_owned()));
}

#[test]
fn fade_multiplies_layer_opacity() {
    let f = render_decoration(&LayerKind::new("mandala"), 0.5, &ctx(false));
    let g = f.nodes[0].as_element().unwrap();
    assert_eq!(g.get("opacity"), Some("0.05"));
}

#[test]
fn scroll_rods_span_top_and_bottom() {
    let f = scroll_rods(&ctx(false));
    let g = f.nodes[0].as_element().unwrap();
    assert_eq!(g.get("class"), Some("scroll-rods"));
    // defs plus two rods
    assert_eq!(g.children.len(), 3);
}
