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

#[test]
fn catalog_has_twenty_five_textures() {
    assert_eq!(texture_ids().len(), 25);
}

#[test]
fn every_texture_draws_and_none_does_not() {
    let c = ctx();
    for id in texture_ids() {
        assert!(!render_texture(&LayerKind::new(id), 0.1, &c).is_empty(), "{id}");
    }
    assert!(render_texture(&LayerKind::none(), 0.1, &c).is_empty());
    assert!(render_texture(&LayerKind::new("velvet"), 0.1, &c).is_empty());
}

#[test]
fn tiled_textures_define_a_pattern() {
    let f = render_texture(&LayerKind::new("dots"), 0.3, &ctx());
    let mut ids = Vec::new();
    f.nodes[0].walk(&mut |el| {
        if el.tag == "pattern" {
            ids.push(el.get("id").unwrap().to_owned());
        }
    });
    assert_eq!(ids, ["texture-dots"]);
    let g = f.nodes[0].as_element().unwrap();
    assert_eq!(g.get("opacity"), Some("0.3"));
}

#[test]
fn fade_scales_texture_opacity() {
    let f = render_texture(&LayerKind::new("geometric"), 0.2, &ctx());
    let g = f.nodes[0].as_element().unwrap();
    assert_eq!(g.get("opacity"), Some("0.1"));
}
