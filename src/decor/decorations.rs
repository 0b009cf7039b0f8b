use crate::decor::{
    DecorContext, circle, defs, finish, glyph, linear_gradient, path, pattern, rect,
    spread_around, spread_between, translate_scale, url,
};
use crate::foundation::core::Color;
use crate::model::style::LayerKind;
use crate::render::node::{Element, Fragment, Node, num};

struct Decoration {
    id: &'static str,
    /// Multiplied into the layer opacity.
    fade: f64,
    draw: fn(&DecorContext) -> Vec<Node>,
}

const fn deco(id: &'static str, fade: f64, draw: fn(&DecorContext) -> Vec<Node>) -> Decoration {
    Decoration { id, fade, draw }
}

static DECORATIONS: [Decoration; 16] = [
    deco("toran", 1.0, toran),
    deco("mandala", 0.1, mandala),
    deco("floral-corner", 1.0, floral_corner),
    deco("paithani-border", 1.0, paithani_border),
    deco("gatefold-lattice", 1.0, gatefold_lattice),
    deco("royal-arch", 1.0, royal_arch),
    deco("royal-pillars", 1.0, royal_pillars),
    deco("fort-silhouette", 0.8, fort_silhouette),
    deco("floral-wreath", 0.2, floral_wreath),
    deco("geometric-diagonal", 1.0, geometric_diagonal),
    deco("damask-pattern", 0.1, damask_pattern),
    // Selectable but drawn by the texture layer only.
    deco("islamic-pattern", 1.0, blank),
    deco("silk-texture", 1.0, blank),
    deco("vertical-border", 1.0, vertical_border),
    deco("half-mandala-side", 0.2, half_mandala_side),
    deco("lanterns-hanging", 1.0, lanterns_hanging),
];

/// Every selectable decoration identifier, in menu order (without `none`).
pub fn decoration_ids() -> impl ExactSizeIterator<Item = &'static str> {
    DECORATIONS.iter().map(|d| d.id)
}

/// Render the main decoration layer. Unknown identifiers and `none` draw nothing.
pub fn render_decoration(kind: &LayerKind, opacity: f64, ctx: &DecorContext) -> Fragment {
    let Some(d) = DECORATIONS.iter().find(|d| d.id == kind.as_str()) else {
        if !kind.is_none() {
            tracing::debug!(kind = kind.as_str(), "unknown decoration");
        }
        return Fragment::empty();
    };
    finish(d.id, opacity.clamp(0.0, 1.0) * d.fade, (d.draw)(ctx))
}

fn blank(_: &DecorContext) -> Vec<Node> {
    Vec::new()
}

fn toran(ctx: &DecorContext) -> Vec<Node> {
    let string = ctx.tint(Color::hex(0xb45309));
    let rim = ctx.tint(Color::hex(0xfde047));
    let xs = spread_between(7, 44.0, 16.0, ctx.width - 16.0);
    let mut out = Vec::new();
    for (i, x) in xs.into_iter().enumerate() {
        let d = if i % 2 == 0 { 40.0 } else { 48.0 };
        let bead = ctx.tint(if i % 2 == 0 {
            Color::hex(0xb91c1c)
        } else {
            Color::hex(0xea580c)
        });
        // The row is pulled 16px above the card edge.
        let top = -16.0;
        out.push(rect(x - 1.0, top, 2.0, 24.0).fill(string).into());
        let cy = top + 24.0 + d / 2.0;
        out.push(circle(x, cy, d / 2.0).fill(bead).stroke(rim, 1.0).into());
        out.push(glyph("✿", x, cy + 3.5, 10.0, Color::WHITE).into());
    }
    out
}

fn mandala(ctx: &DecorContext) -> Vec<Node> {
    let color = ctx.tint(ctx.text);
    let g = Element::new("g")
        .attr(
            "transform",
            translate_scale(ctx.width / 2.0 - 250.0, ctx.height / 2.0 - 250.0, 5.0, 5.0),
        )
        .child(path("M50 0 L60 40 L100 50 L60 60 L50 100 L40 60 L0 50 L40 40 Z").fill(color))
        .child(circle(50.0, 50.0, 30.0).attr("fill", "none").stroke(color, 1.0))
        .child(circle(50.0, 50.0, 20.0).attr("fill", "none").stroke(color, 0.5));
    vec![g.into()]
}

fn corner_spray(ctx: &DecorContext, transform: String) -> Element {
    let color = ctx.accent();
    Element::new("g")
        .attr("transform", transform)
        .opacity(0.9)
        .child(path("M0 0 Q 60 20, 100 100 L 0 100 L 0 0").fill(color).opacity(0.15))
        .child(path("M10,10 Q50,10 80,80").attr("fill", "none").stroke(color, 2.0))
        .child(circle(20.0, 20.0, 12.0).fill(ctx.tint(Color::hex(0xffb7b2))))
        .child(circle(40.0, 15.0, 8.0).fill(ctx.tint(Color::hex(0xffdac1))))
        .child(circle(15.0, 40.0, 8.0).fill(ctx.tint(Color::hex(0xe2f0cb))))
        .child(circle(50.0, 30.0, 5.0).fill(ctx.tint(Color::hex(0xc7ceea))))
}

fn floral_corner(ctx: &DecorContext) -> Vec<Node> {
    let top_left = translate_scale(0.0, 0.0, 1.6, 1.6);
    let bottom_right = format!(
        "translate({} {}) rotate(180 80 80) scale(1.6 1.6)",
        num(ctx.width - 160.0),
        num(ctx.height - 160.0)
    );
    vec![
        corner_spray(ctx, top_left).into(),
        corner_spray(ctx, bottom_right).into(),
    ]
}

fn paithani_border(ctx: &DecorContext) -> Vec<Node> {
    let stripe = ctx
        .accent_override
        .or(ctx.palette.map(|p| p.border))
        .unwrap_or(Color::hex(0xdaa520));
    let stripes = pattern(
        "paithani-stripes",
        20.0,
        20.0,
        vec![rect(0.0, 0.0, 10.0, 20.0).fill(stripe).into()],
    )
    .attr("patternTransform", "rotate(45)");
    let fade = linear_gradient(
        "paithani-fade",
        false,
        &[(0.5, Color::WHITE), (1.0, Color::WHITE.with_alpha(0.0))],
    );
    let mask = Element::new("mask")
        .attr("id", "paithani-mask")
        .child(rect(0.0, 0.0, ctx.width, 96.0).attr("fill", url("paithani-fade")));
    vec![
        defs([stripes, fade, mask]).into(),
        rect(0.0, 0.0, ctx.width, 96.0)
            .attr("fill", url("paithani-stripes"))
            .attr("mask", url("paithani-mask"))
            .opacity(0.9)
            .into(),
    ]
}

fn gatefold_lattice(ctx: &DecorContext) -> Vec<Node> {
    let panel = ctx.width / 5.0;
    let screen = ctx
        .palette
        .map(|p| p.background)
        .unwrap_or(Color::BLACK);
    let edge = ctx.tint(Color::hex(0xeab308).with_alpha(0.5));
    let glow = ctx.tint(Color::hex(0xca8a04).with_alpha(0.4));
    let lattice = pattern(
        "gatefold-holes",
        20.0,
        20.0,
        vec![
            path("M0 0 H20 V20 H0 Z M10 7.2 A2.8 2.8 0 1 0 10 12.8 A2.8 2.8 0 1 0 10 7.2 Z")
                .attr("fill-rule", "evenodd")
                .fill(screen)
                .into(),
        ],
    );
    let glow_l = linear_gradient(
        "gatefold-glow-l",
        true,
        &[(0.0, glow.with_alpha(0.0)), (1.0, glow)],
    );
    let glow_r = linear_gradient(
        "gatefold-glow-r",
        true,
        &[(0.0, glow), (1.0, glow.with_alpha(0.0))],
    );
    let dim = Color::BLACK.with_alpha(0.2);
    let right = ctx.width - panel;
    vec![
        defs([lattice, glow_l, glow_r]).into(),
        rect(0.0, 0.0, panel, ctx.height).fill(dim).into(),
        rect(0.0, 0.0, panel, ctx.height)
            .attr("fill", url("gatefold-holes"))
            .into(),
        rect(panel - 8.0, 0.0, 8.0, ctx.height)
            .attr("fill", url("gatefold-glow-l"))
            .into(),
        rect(panel - 2.0, 0.0, 2.0, ctx.height).fill(edge).into(),
        rect(right, 0.0, panel, ctx.height).fill(dim).into(),
        rect(right, 0.0, panel, ctx.height)
            .attr("fill", url("gatefold-holes"))
            .into(),
        rect(right, 0.0, 8.0, ctx.height)
            .attr("fill", url("gatefold-glow-r"))
            .into(),
        rect(right, 0.0, 2.0, ctx.height).fill(edge).into(),
    ]
}

fn royal_arch(ctx: &DecorContext) -> Vec<Node> {
    let color = ctx.tint(Color::hex(0xeab308));
    let jewel = ctx.tint(Color::hex(0xb91c1c));
    let sx = (ctx.width - 32.0) / 400.0;
    let sy = (ctx.height - 32.0) / 600.0;
    let g = Element::new("g")
        .attr("transform", translate_scale(16.0, 16.0, sx, sy))
        .opacity(0.8)
        .child(
            path("M10,600 L10,200 Q10,100 100,50 Q200,0 300,50 Q390,100 390,200 L390,600")
                .attr("fill", "none")
                .stroke(color, 8.0),
        )
        .child(
            path("M20,600 L20,200 Q20,110 100,60 Q200,10 300,60 Q380,110 380,200 L380,600")
                .attr("fill", "none")
                .stroke(color, 2.0)
                .attr("stroke-dasharray", "5,5"),
        )
        .child(
            Element::new("line")
                .num("x1", 200.0)
                .num("y1", 0.0)
                .num("x2", 200.0)
                .num("y2", 120.0)
                .stroke(color, 2.0),
        )
        .child(circle(200.0, 130.0, 15.0).fill(jewel));
    vec![g.into()]
}

fn pillar(ctx: &DecorContext, x: f64, left: bool) -> Vec<Node> {
    let h = ctx.height;
    let grad = if left { "pillar-l" } else { "pillar-r" };
    let capital = ctx.tint(Color::hex(0xca8a04));
    let band = ctx.tint(Color::hex(0x854d0e));
    let cx = x + 16.0;
    let body = match ctx.accent_override {
        Some(c) => rect(x, 0.0, 32.0, h).fill(c),
        None => rect(x, 0.0, 32.0, h).attr("fill", url(grad)),
    };
    let shaft = match ctx.accent_override {
        Some(c) => rect(cx - 12.0, 48.0, 24.0, h - 104.0).fill(c).opacity(0.5),
        None => rect(cx - 12.0, 48.0, 24.0, h - 104.0)
            .fill(Color::hex(0xfacc15).with_alpha(0.3))
            .stroke(Color::hex(0xca8a04).with_alpha(0.5), 1.0),
    };
    let edge_x = if left { x + 31.0 } else { x };
    vec![
        body.into(),
        rect(edge_x, 0.0, 1.0, h)
            .fill(ctx.accent_override.map_or(Color::hex(0x713f12), |_| {
                Color::BLACK.with_alpha(0.2)
            }))
            .into(),
        rect(cx - 20.0, 0.0, 40.0, 40.0).fill(capital).into(),
        rect(cx - 20.0, 36.0, 40.0, 4.0).fill(band).into(),
        shaft.into(),
        rect(cx - 20.0, h - 48.0, 40.0, 48.0).fill(capital).into(),
        rect(cx - 20.0, h - 48.0, 40.0, 4.0).fill(band).into(),
    ]
}

fn royal_pillars(ctx: &DecorContext) -> Vec<Node> {
    let dark = Color::hex(0xa16207);
    let light = Color::hex(0xeab308);
    let mut out: Vec<Node> = vec![
        defs([
            linear_gradient("pillar-l", true, &[(0.0, dark), (1.0, light)]),
            linear_gradient("pillar-r", true, &[(0.0, light), (1.0, dark)]),
        ])
        .into(),
    ];
    out.extend(pillar(ctx, 8.0, true));
    out.extend(pillar(ctx, ctx.width - 40.0, false));
    out
}

fn fort_silhouette(ctx: &DecorContext) -> Vec<Node> {
    let color = ctx.tint(Color::hex(0x292524));
    let top = ctx.height - 160.0;
    let shade = linear_gradient(
        "fort-shade",
        false,
        &[
            (0.0, Color::BLACK.with_alpha(0.0)),
            (1.0, Color::BLACK.with_alpha(0.4)),
        ],
    );
    vec![
        defs([shade]).into(),
        path("M0,150 L0,80 L30,80 L30,60 L60,60 L60,80 L100,80 L100,50 L140,50 L140,80 L180,80 L180,40 L220,40 L220,80 L260,30 L300,80 L340,40 L340,80 L380,50 L380,80 L420,60 L420,80 L460,50 L500,80 L500,150 Z")
            .attr("transform", translate_scale(0.0, top, ctx.width / 500.0, 160.0 / 150.0))
            .fill(color)
            .into(),
        rect(0.0, ctx.height - 80.0, ctx.width, 80.0)
            .attr("fill", url("fort-shade"))
            .into(),
    ]
}

fn floral_wreath(ctx: &DecorContext) -> Vec<Node> {
    let color = ctx.accent();
    let cy = ctx.height * 0.35;
    let g = Element::new("g")
        .attr(
            "transform",
            translate_scale(ctx.width / 2.0 - 160.0, cy - 160.0, 1.6, 1.6),
        )
        .child(
            path("M100,10 A90,90 0 1,0 100,190 A90,90 0 1,0 100,10 M100,30 A70,70 0 1,1 100,170 A70,70 0 1,1 100,30")
                .attr("fill-rule", "evenodd")
                .fill(color)
                .opacity(0.3),
        )
        .child(circle(100.0, 10.0, 10.0).fill(ctx.tint(Color::hex(0xffc0cb))))
        .child(circle(190.0, 100.0, 10.0).fill(ctx.tint(Color::hex(0xffa500))))
        .child(circle(100.0, 190.0, 10.0).fill(ctx.tint(Color::hex(0x800080))))
        .child(circle(10.0, 100.0, 10.0).fill(ctx.tint(Color::hex(0xff0000))));
    vec![g.into()]
}

fn geometric_diagonal(ctx: &DecorContext) -> Vec<Node> {
    let (w, h) = (ctx.width, ctx.height);
    let clear = Color::WHITE.with_alpha(0.0);
    let band = linear_gradient(
        "diagonal-band",
        true,
        &[(0.0, clear), (0.5, Color::WHITE.with_alpha(0.1)), (1.0, clear)],
    );
    let tile = |cx: f64, cy: f64| {
        rect(cx - 128.0, cy - 128.0, 256.0, 256.0)
            .attr(
                "transform",
                format!("rotate(45 {} {})", num(cx), num(cy)),
            )
            .fill(Color::WHITE.with_alpha(0.05))
    };
    vec![
        defs([band]).into(),
        rect(-w / 2.0, -h / 2.0, 2.0 * w, 2.0 * h)
            .attr("fill", url("diagonal-band"))
            .attr(
                "transform",
                format!("rotate(45 {} {})", num(w / 2.0), num(h / 2.0)),
            )
            .into(),
        tile(w, 0.0).into(),
        tile(0.0, h).into(),
    ]
}

fn damask_pattern(ctx: &DecorContext) -> Vec<Node> {
    let white = Color::WHITE;
    let tile = pattern(
        "damask-dots",
        30.0,
        30.0,
        [(0.0, 0.0), (30.0, 0.0), (0.0, 30.0), (30.0, 30.0), (15.0, 15.0)]
            .into_iter()
            .map(|(x, y)| circle(x, y, 2.0).fill(white).into())
            .collect(),
    );
    vec![
        defs([tile]).into(),
        rect(0.0, 0.0, ctx.width, ctx.height)
            .attr("fill", url("damask-dots"))
            .into(),
    ]
}

fn vertical_border(ctx: &DecorContext) -> Vec<Node> {
    let edge = ctx.tint(Color::hex(0xeab308).with_alpha(0.4));
    let mark = ctx.tint(Color::hex(0xfacc15));
    let (x, w, h) = (16.0, 48.0, ctx.height);
    let marks = spread_between(8, 32.0, 16.0, h - 16.0)
        .into_iter()
        .map(|y| Node::from(glyph("❖", x + w / 2.0, y + 8.0, 24.0, mark)));
    vec![
        rect(x, 0.0, w, h).fill(Color::BLACK.with_alpha(0.1)).into(),
        rect(x, 0.0, 2.0, h).fill(edge).into(),
        rect(x + w - 2.0, 0.0, 2.0, h).fill(edge).into(),
        Element::new("g").opacity(0.6).children(marks).into(),
    ]
}

fn half_mandala_side(ctx: &DecorContext) -> Vec<Node> {
    let color = ctx.accent();
    let g = Element::new("g")
        .attr(
            "transform",
            translate_scale(ctx.width - 200.0, ctx.height / 2.0 - 200.0, 4.0, 4.0),
        )
        .child(circle(50.0, 50.0, 45.0).attr("fill", "none").stroke(color, 1.0))
        .child(
            path("M50 5 L55 15 L65 15 L60 25 L65 35 L55 35 L50 45 L45 35 L35 35 L40 25 L35 15 L45 15 Z")
                .fill(color),
        );
    vec![g.into()]
}

const LANTERN_DROPS: [f64; 5] = [80.0, 120.0, 100.0, 130.0, 90.0];

fn lanterns_hanging(ctx: &DecorContext) -> Vec<Node> {
    let cord = ctx.tint(Color::hex(0xca8a04));
    let body = ctx.tint(Color::hex(0xff8c00));
    let trim = Color::hex(0xb8860b);
    let mut out = Vec::new();
    for (x, drop) in spread_around(5, 0.0, ctx.width).into_iter().zip(LANTERN_DROPS) {
        out.push(rect(x - 1.0, 0.0, 2.0, drop).fill(cord).into());
        let lantern = Element::new("g")
            .attr("transform", translate_scale(x - 15.0, drop - 4.0, 1.0, 1.0))
            .child(path("M5 10 L25 10 L28 25 L15 35 L2 25 Z").fill(body).stroke(trim, 1.0))
            .child(rect(10.0, 35.0, 10.0, 5.0).fill(trim))
            .child(circle(15.0, 22.0, 6.0).fill(Color::hex(0xfffacd)).opacity(0.8));
        out.push(lantern.into());
    }
    out
}

/// Gilded rods across the top and bottom edge of scroll layouts.
pub fn scroll_rods(ctx: &DecorContext) -> Fragment {
    let (edge, mid) = match ctx.accent_override {
        Some(c) => (c, Color::WHITE),
        None => (Color::hex(0xb8860b), Color::hex(0xffd700)),
    };
    let gold = linear_gradient("scroll-rod", true, &[(0.0, edge), (0.5, mid), (1.0, edge)]);
    let w = ctx.width * 1.05;
    let x = (ctx.width - w) / 2.0;
    let rod = |y: f64| {
        Element::new("g")
            .child(
                rect(x, y, w, 32.0)
                    .num("rx", 16.0)
                    .attr("fill", url("scroll-rod")),
            )
            .child(rect(x, y + 14.0, w, 4.0).fill(Color::WHITE.with_alpha(0.5)))
    };
    finish(
        "scroll-rods",
        1.0,
        vec![
            defs([gold]).into(),
            rod(-12.0).into(),
            rod(ctx.height - 20.0).into(),
        ],
    )
}

/// Stand-in artwork for a full-overlay card without a photo, centered at `(cx, cy)`.
pub fn fallback_illustration(ctx: &DecorContext, cx: f64, cy: f64) -> Element {
    let color = ctx.tint(Color::hex(0xfef08a));
    // 96px box over a 100-unit viewBox.
    let s = 0.96;
    Element::new("g")
        .attr("class", "fallback-illustration")
        .attr("transform", translate_scale(cx - 48.0, cy - 48.0, s, s))
        .opacity(0.7)
        .child(
            path("M50 20 Q70 20 80 40 Q90 60 50 90 Q10 60 20 40 Q30 20 50 20")
                .attr("fill", "none")
                .stroke(color, 2.0),
        )
        .child(circle(50.0, 40.0, 10.0).fill(color).opacity(0.5))
        .child(
            path("M50 10 L50 20 M40 15 L50 20 L60 15")
                .attr("fill", "none")
                .stroke(color, 2.0),
        )
}

#[cfg(test)]
#[path = "../../tests/unit/decor/decorations.rs"]
mod tests;
