use crate::decor::{DecorContext, circle, defs, finish, path, pattern, rect, stops, url};
use crate::foundation::core::Color;
use crate::model::style::LayerKind;
use crate::render::node::{Element, Fragment, Node, num};

/// Every pattern is drawn in translucent white over the card background.
const INK: Color = Color::rgba(255, 255, 255, 128);

enum TextureRecipe {
    /// Tile repeated over the whole card.
    Tile {
        w: f64,
        h: f64,
        tile: fn() -> Vec<Node>,
    },
    /// Free-form fill for textures that are not a simple repeat.
    Fill(fn(&DecorContext) -> Vec<Node>),
}

struct Texture {
    id: &'static str,
    fade: f64,
    recipe: TextureRecipe,
}

const fn tile(id: &'static str, w: f64, h: f64, tile: fn() -> Vec<Node>) -> Texture {
    Texture {
        id,
        fade: 1.0,
        recipe: TextureRecipe::Tile { w, h, tile },
    }
}

const fn faded(t: Texture, fade: f64) -> Texture {
    Texture { fade, ..t }
}

static TEXTURES: [Texture; 25] = [
    tile("paper", 40.0, 40.0, paper),
    tile("canvas", 4.0, 4.0, canvas),
    Texture {
        id: "silk",
        fade: 1.0,
        recipe: TextureRecipe::Fill(silk),
    },
    tile("damask", 30.0, 30.0, damask),
    Texture {
        id: "islamic",
        fade: 1.0,
        recipe: TextureRecipe::Fill(islamic),
    },
    tile("mandala", 60.0, 60.0, arabesque),
    tile("floral", 48.0, 48.0, floral_linen),
    tile("dots", 10.0, 10.0, dots),
    tile("lines", 20.0, 20.0, lines),
    tile("grunge", 64.0, 64.0, grunge),
    tile("marble", 40.0, 40.0, marble),
    tile("wood", 120.0, 24.0, wood),
    tile("stars", 50.0, 50.0, stars),
    tile("hearts", 20.0, 20.0, hearts),
    tile("glitter", 16.0, 16.0, glitter),
    faded(tile("geometric", 20.0, 35.0, geometric), 0.5),
    Texture {
        id: "waves",
        fade: 1.0,
        recipe: TextureRecipe::Fill(waves),
    },
    tile("checkered", 20.0, 20.0, checkered),
    tile("honeycomb", 24.0, 42.0, honeycomb),
    tile("lanterns-pattern", 100.0, 100.0, lantern_glow),
    faded(tile("floral-outline", 80.0, 80.0, floral_outline), 0.8),
    faded(tile("rose-bloom", 120.0, 120.0, rose_bloom), 0.6),
    faded(tile("lotus-petals", 100.0, 100.0, lotus_petals), 0.7),
    faded(tile("vine-leaves", 80.0, 80.0, vine_leaves), 0.8),
    faded(tile("peony-garden", 150.0, 150.0, peony_garden), 0.6),
];

pub fn texture_ids() -> impl ExactSizeIterator<Item = &'static str> {
    TEXTURES.iter().map(|t| t.id)
}

/// Render the background texture over the whole card.
pub fn render_texture(kind: &LayerKind, opacity: f64, ctx: &DecorContext) -> Fragment {
    let Some(t) = TEXTURES.iter().find(|t| t.id == kind.as_str()) else {
        return Fragment::empty();
    };
    let nodes = match &t.recipe {
        TextureRecipe::Tile { w, h, tile } => {
            let id = format!("texture-{}", t.id);
            vec![
                defs([pattern(&id, *w, *h, tile())]).into(),
                rect(0.0, 0.0, ctx.width, ctx.height)
                    .attr("fill", url(&id))
                    .into(),
            ]
        }
        TextureRecipe::Fill(draw) => draw(ctx),
    };
    finish(t.id, opacity.clamp(0.0, 1.0) * t.fade, nodes)
}

fn dot(x: f64, y: f64, r: f64) -> Node {
    circle(x, y, r).fill(INK).into()
}

fn ink_line(d: &str, width: f64) -> Node {
    path(d).attr("fill", "none").stroke(INK, width).into()
}

/// A tile-sized drawing from a 100-unit source, scaled into `size`.
fn scaled(size: f64, nodes: Vec<Node>) -> Vec<Node> {
    let k = num(size / 100.0);
    vec![
        Element::new("g")
            .attr("transform", format!("scale({k} {k})"))
            .children(nodes)
            .into(),
    ]
}

fn paper() -> Vec<Node> {
    [(3.0, 7.0), (17.0, 29.0), (31.0, 12.0), (9.0, 35.0), (26.0, 21.0), (36.0, 33.0)]
        .into_iter()
        .map(|(x, y)| dot(x, y, 0.6))
        .collect()
}

fn canvas() -> Vec<Node> {
    vec![
        rect(0.0, 0.0, 4.0, 0.5).fill(INK).into(),
        rect(0.0, 0.0, 0.5, 4.0).fill(INK).into(),
    ]
}

fn silk(ctx: &DecorContext) -> Vec<Node> {
    let clear = Color::WHITE.with_alpha(0.0);
    let sheen = Color::WHITE.with_alpha(0.4);
    let grad = stops(
        Element::new("linearGradient")
            .attr("id", "texture-silk-sheen")
            .attr("x1", "0")
            .attr("y1", "0")
            .attr("x2", "1")
            .attr("y2", "0.6"),
        &[
            (0.0, clear),
            (0.25, sheen),
            (0.5, clear),
            (0.75, sheen),
            (1.0, clear),
        ],
    );
    vec![
        defs([grad]).into(),
        rect(0.0, 0.0, ctx.width, ctx.height)
            .attr("fill", url("texture-silk-sheen"))
            .into(),
    ]
}

fn damask() -> Vec<Node> {
    vec![dot(15.0, 15.0, 2.0)]
}

fn islamic(ctx: &DecorContext) -> Vec<Node> {
    let hatch = |id: &str, angle: f64| {
        pattern(id, 11.0, 11.0, vec![rect(10.0, 0.0, 1.0, 11.0).fill(INK).into()])
            .attr("patternTransform", format!("rotate({})", num(angle)))
    };
    vec![
        defs([
            hatch("texture-islamic-a", 45.0),
            hatch("texture-islamic-b", -45.0),
        ])
        .into(),
        rect(0.0, 0.0, ctx.width, ctx.height)
            .attr("fill", url("texture-islamic-a"))
            .into(),
        rect(0.0, 0.0, ctx.width, ctx.height)
            .attr("fill", url("texture-islamic-b"))
            .into(),
    ]
}

fn arabesque() -> Vec<Node> {
    vec![
        ink_line("M30 10 A20 20 0 1 0 30 50 A20 20 0 1 0 30 10 Z", 0.8),
        ink_line("M30 18 L36 30 L30 42 L24 30 Z", 0.6),
        ink_line("M0 0 Q15 15 0 30 M60 30 Q45 45 60 60", 0.5),
    ]
}

fn floral_linen() -> Vec<Node> {
    let mut out = vec![dot(24.0, 24.0, 2.0)];
    for (dx, dy) in [(0.0, -5.0), (5.0, 0.0), (0.0, 5.0), (-5.0, 0.0)] {
        out.push(circle(24.0 + dx, 24.0 + dy, 2.5).attr("fill", "none").stroke(INK, 0.5).into());
    }
    out.push(rect(0.0, 0.0, 48.0, 0.4).fill(INK).into());
    out
}

fn dots() -> Vec<Node> {
    vec![dot(5.0, 5.0, 1.0)]
}

fn lines() -> Vec<Node> {
    vec![rect(0.0, 19.0, 20.0, 1.0).fill(INK).into()]
}

fn grunge() -> Vec<Node> {
    [
        (8.0, 12.0, 3.0),
        (40.0, 6.0, 1.5),
        (52.0, 44.0, 4.0),
        (20.0, 50.0, 2.0),
        (34.0, 30.0, 1.0),
        (58.0, 20.0, 1.2),
    ]
    .into_iter()
    .map(|(x, y, r)| circle(x, y, r).fill(INK).opacity(0.6).into())
    .collect()
}

fn marble() -> Vec<Node> {
    vec![ink_line("M20 0 L40 20 L20 40 L0 20 Z", 0.5)]
}

fn wood() -> Vec<Node> {
    vec![
        ink_line("M0 6 Q30 2 60 6 T120 6", 0.6),
        ink_line("M0 16 Q30 20 60 16 T120 16", 0.4),
    ]
}

fn stars() -> Vec<Node> {
    [(6.0, 9.0), (31.0, 4.0), (44.0, 27.0), (18.0, 38.0), (27.0, 22.0)]
        .into_iter()
        .map(|(x, y)| dot(x, y, 0.8))
        .collect()
}

fn hearts() -> Vec<Node> {
    vec![dot(10.0, 10.0, 2.0)]
}

fn glitter() -> Vec<Node> {
    [(2.0, 3.0), (11.0, 6.0), (6.0, 12.0), (14.0, 14.0)]
        .into_iter()
        .map(|(x, y)| dot(x, y, 0.5))
        .collect()
}

fn geometric() -> Vec<Node> {
    vec![
        path("M0 0 L10 0 L0 6 Z M20 0 L10 0 L20 6 Z M0 35 L10 35 L0 29 Z M20 35 L10 35 L20 29 Z")
            .fill(INK)
            .into(),
        path("M10 8.75 L15 17.5 L10 26.25 L5 17.5 Z").fill(INK).into(),
    ]
}

fn waves(ctx: &DecorContext) -> Vec<Node> {
    let reach = ctx.width.hypot(ctx.height);
    let rings = (reach / 5.0).ceil() as usize;
    (0..rings)
        .map(|i| {
            circle(0.0, 0.0, 1.5 + 5.0 * i as f64)
                .attr("fill", "none")
                .stroke(INK, 1.0)
                .into()
        })
        .collect()
}

fn checkered() -> Vec<Node> {
    vec![
        rect(0.0, 0.0, 10.0, 10.0).fill(INK).into(),
        rect(10.0, 10.0, 10.0, 10.0).fill(INK).into(),
    ]
}

fn honeycomb() -> Vec<Node> {
    vec![ink_line(
        "M12 0 L24 7 L24 21 L12 28 L0 21 L0 7 Z M12 28 L12 42",
        0.5,
    )]
}

fn lantern_glow() -> Vec<Node> {
    let gold = Color::hex(0xffd700);
    vec![
        circle(50.0, 50.0, 20.0).fill(gold.with_alpha(0.4)).into(),
        circle(20.0, 80.0, 15.0).fill(gold.with_alpha(0.3)).into(),
    ]
}

fn floral_outline() -> Vec<Node> {
    scaled(
        80.0,
        vec![
            path("M50 0 Q 75 25 50 50 T 50 100 Q 25 75 50 50 T 50 0")
                .attr("fill", "none")
                .stroke(Color::WHITE, 1.0)
                .opacity(0.2)
                .into(),
        ],
    )
}

fn rose_bloom() -> Vec<Node> {
    scaled(
        120.0,
        vec![
            circle(50.0, 50.0, 30.0).fill(Color::WHITE).opacity(0.1).into(),
            path("M50 20 Q 70 20 80 40 L 50 50 L 20 40 Q 30 20 50 20 Z")
                .fill(Color::WHITE)
                .opacity(0.1)
                .into(),
        ],
    )
}

fn lotus_petals() -> Vec<Node> {
    vec![
        path("M50 0 Q 70 20 85 50 Q 70 80 50 100 Q 30 80 15 50 Q 30 20 50 0 Z")
            .fill(Color::WHITE)
            .opacity(0.15)
            .into(),
    ]
}

fn vine_leaves() -> Vec<Node> {
    scaled(
        80.0,
        vec![
            path("M20 50 Q 40 30 50 10 Q 60 30 80 50 Q 60 70 50 90 Q 40 70 20 50 Z")
                .attr("fill", "none")
                .stroke(Color::WHITE, 1.0)
                .opacity(0.15)
                .into(),
            path("M80 50 Q 60 70 50 90 Q 40 70 20 50")
                .attr("fill", "none")
                .stroke(Color::WHITE, 1.0)
                .opacity(0.08)
                .into(),
        ],
    )
}

fn peony_garden() -> Vec<Node> {
    scaled(
        150.0,
        vec![
            circle(50.0, 50.0, 40.0).fill(Color::WHITE).opacity(0.08).into(),
            circle(50.0, 50.0, 20.0).fill(Color::WHITE).opacity(0.05).into(),
            path("M50 10 L60 40 L90 50 L60 60 L50 90 L40 60 L10 50 L40 40 Z")
                .fill(Color::WHITE)
                .opacity(0.03)
                .into(),
        ],
    )
}

#[cfg(test)]
#[path = "../../tests/unit/decor/textures.rs"]
mod tests;
