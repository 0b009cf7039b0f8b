use crate::decor::{
    DecorContext, circle, defs, finish, glyph, path, pattern, rect, spread_around,
    spread_between, translate_scale, url,
};
use crate::foundation::core::Color;
use crate::model::style::LayerKind;
use crate::render::node::{Element, Fragment, Node, num};

/// Height of the strip every bottom border draws into.
pub const BOTTOM_STRIP_PX: f64 = 48.0;
/// Width of a side border strip.
pub const SIDE_STRIP_PX: f64 = 48.0;

const TEXT_2XL: f64 = 24.0;
const TEXT_XL: f64 = 20.0;
const TEXT_LG: f64 = 18.0;
const TEXT_XS: f64 = 12.0;

const GOLD: Color = Color::hex(0xeab308);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn key(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

enum BottomRecipe {
    /// A glyph repeated across the strip with space between.
    Strip {
        glyph: &'static str,
        count: usize,
        size: f64,
        /// Own color used when no accent override is set.
        tint: Option<Color>,
        flipped: bool,
    },
    Shape(fn(&DecorContext) -> Vec<Node>),
}

const fn strip(glyph: &'static str, count: usize, size: f64) -> BottomRecipe {
    BottomRecipe::Strip {
        glyph,
        count,
        size,
        tint: None,
        flipped: false,
    }
}

const fn tinted_strip(glyph: &'static str, count: usize, size: f64, tint: u32) -> BottomRecipe {
    BottomRecipe::Strip {
        glyph,
        count,
        size,
        tint: Some(Color::hex(tint)),
        flipped: false,
    }
}

static BOTTOM_BORDERS: [(&str, BottomRecipe); 26] = [
    ("simple-gold", BottomRecipe::Shape(simple_gold)),
    ("double-gold", BottomRecipe::Shape(double_gold)),
    ("ornate-gold", BottomRecipe::Shape(ornate_gold)),
    ("floral-vine", strip("🌿", 12, TEXT_2XL)),
    (
        "mango-paisley",
        BottomRecipe::Strip {
            glyph: "❧",
            count: 15,
            size: TEXT_2XL,
            tint: None,
            flipped: true,
        },
    ),
    ("lotus-row", strip("🪷", 10, TEXT_2XL)),
    ("elephants", strip("🐘", 8, TEXT_2XL)),
    ("diyas", strip("🪔", 12, TEXT_2XL)),
    ("kalash", strip("🏺", 12, TEXT_2XL)),
    ("om-pattern", strip("🕉", 15, TEXT_XL)),
    ("swastik-row", strip("卐", 15, TEXT_XL)),
    ("ganesha-row", strip("🐘", 8, TEXT_2XL)),
    ("shehnai", strip("🎺", 10, TEXT_2XL)),
    ("wedding-dhol", strip("🥁", 10, TEXT_2XL)),
    ("hanging-bells", BottomRecipe::Shape(hanging_bells)),
    ("temple-spire", strip("🛕", 10, TEXT_2XL)),
    ("rangoli", strip("💠", 15, TEXT_XL)),
    ("abstract-waves", BottomRecipe::Shape(abstract_waves)),
    ("dot-mandala", strip("✺", 15, TEXT_XL)),
    ("leafy-scroll", strip("🍃", 15, TEXT_XL)),
    ("royal-fence", strip("IIII", 15, TEXT_XL)),
    ("marigold-garland", tinted_strip("🏵", 12, TEXT_XL, 0xf97316)),
    ("starry-night", tinted_strip("✨", 15, TEXT_LG, 0xfef08a)),
    ("hearts-row", tinted_strip("♥", 15, TEXT_LG, 0xf87171)),
    ("geometric-diamonds", strip("❖", 15, TEXT_XL)),
    ("lanterns-border", BottomRecipe::Shape(lanterns_border)),
];

pub fn bottom_border_ids() -> impl ExactSizeIterator<Item = &'static str> {
    BOTTOM_BORDERS.iter().map(|(id, _)| *id)
}

/// Render the bottom border strip. Unknown identifiers and `none` draw nothing.
pub fn render_bottom_border(kind: &LayerKind, opacity: f64, ctx: &DecorContext) -> Fragment {
    let Some((id, recipe)) = BOTTOM_BORDERS.iter().find(|(id, _)| *id == kind.as_str()) else {
        return Fragment::empty();
    };
    let opacity = opacity.clamp(0.0, 1.0);
    match recipe {
        BottomRecipe::Strip {
            glyph: text,
            count,
            size,
            tint,
            flipped,
        } => {
            let color = ctx
                .accent_override
                .or(*tint)
                .unwrap_or(ctx.accent);
            let baseline = ctx.height - 4.0 - size * 0.2;
            let nodes = spread_between(*count, *size, 8.0, ctx.width - 8.0)
                .into_iter()
                .map(|x| {
                    let g = glyph(text, x, baseline, *size, color);
                    if *flipped {
                        let cy = baseline - size * 0.35;
                        g.attr("transform", format!("rotate(180 {} {})", num(x), num(cy)))
                            .into()
                    } else {
                        g.into()
                    }
                })
                .collect();
            finish(id, opacity * 0.9, nodes)
        }
        BottomRecipe::Shape(draw) => finish(id, opacity, draw(ctx)),
    }
}

fn simple_gold(ctx: &DecorContext) -> Vec<Node> {
    vec![
        rect(16.0, ctx.height - 20.0, ctx.width - 32.0, 4.0)
            .fill(ctx.tint(GOLD))
            .into(),
    ]
}

fn double_gold(ctx: &DecorContext) -> Vec<Node> {
    let color = ctx.tint(GOLD);
    let top = ctx.height - 24.0;
    vec![
        rect(16.0, top, ctx.width - 32.0, 2.0).fill(color).into(),
        rect(16.0, top + 6.0, ctx.width - 32.0, 2.0).fill(color).into(),
    ]
}

fn ornate_gold(ctx: &DecorContext) -> Vec<Node> {
    let umber = Color::hex(0x713f12);
    let glow = crate::decor::linear_gradient(
        "ornate-gold-glow",
        false,
        &[(0.0, umber.with_alpha(0.0)), (1.0, umber.with_alpha(0.5))],
    );
    let top = ctx.height - 32.0;
    vec![
        defs([glow]).into(),
        rect(0.0, top, ctx.width, 32.0)
            .attr("fill", url("ornate-gold-glow"))
            .into(),
        rect(0.0, top, ctx.width, 1.0).fill(ctx.tint(GOLD)).into(),
    ]
}

fn hanging_bells(ctx: &DecorContext) -> Vec<Node> {
    let color = ctx.accent();
    let top = ctx.height - 40.0;
    let bells = spread_around(5, 0.0, ctx.width)
        .into_iter()
        .map(|x| glyph("🔔", x, top + TEXT_XL, TEXT_XL, color));
    vec![Element::new("g").opacity(0.9).children(bells).into()]
}

fn abstract_waves(ctx: &DecorContext) -> Vec<Node> {
    let color = ctx.tint(GOLD.with_alpha(0.5));
    let scallop = pattern(
        "abstract-waves-tile",
        20.0,
        20.0,
        vec![
            path("M0 0 H20 V20 H0 Z M5 0 A5 5 0 0 0 15 0 Z")
                .attr("fill-rule", "evenodd")
                .fill(color)
                .into(),
        ],
    )
    .attr("patternTransform", format!("translate(0 {})", num(ctx.height - 24.0)));
    vec![
        defs([scallop]).into(),
        rect(0.0, ctx.height - 24.0, ctx.width, 24.0)
            .attr("fill", url("abstract-waves-tile"))
            .into(),
    ]
}

fn lanterns_border(ctx: &DecorContext) -> Vec<Node> {
    let body = ctx.tint(Color::hex(0xffd700));
    let trim = match ctx.accent_override {
        Some(_) => Color::BLACK.with_alpha(0.2),
        None => Color::hex(0xb8860b),
    };
    let top = ctx.height - 4.0 - 40.0;
    let lanterns = spread_between(10, 24.0, 8.0, ctx.width - 8.0)
        .into_iter()
        .map(|x| {
            Element::new("g")
                .attr("transform", translate_scale(x - 12.0, top, 1.0, 1.0))
                .child(
                    path("M12 0 L12 10 M7 10 L17 10 L19 18 L16 28 L8 28 L5 18 L7 10 Z")
                        .fill(body)
                        .stroke(trim, 1.0),
                )
                .child(circle(12.0, 20.0, 3.0).fill(Color::hex(0xfffacd)))
                .child(
                    path("M8 28 L8 35 M12 28 L12 38 M16 28 L16 35")
                        .attr("fill", "none")
                        .stroke(trim, 1.0),
                )
        });
    vec![Element::new("g").opacity(0.9).children(lanterns).into()]
}

/// How a stacked glyph is turned on each side of the card.
#[derive(Clone, Copy)]
enum Turn {
    Upright,
    /// Half turn on the right side only.
    FlipRight,
    /// Mirrored horizontally on the left side only.
    MirrorLeft,
    /// Quarter turn clockwise on the left, counter-clockwise on the right.
    Quarter,
}

enum SideRecipe {
    Stack {
        glyph: &'static str,
        size: f64,
        tint: Option<Color>,
        turn: Turn,
    },
    Shape(fn(&DecorContext, Side) -> Vec<Node>),
}

const fn stack(glyph: &'static str, size: f64, turn: Turn) -> SideRecipe {
    SideRecipe::Stack {
        glyph,
        size,
        tint: None,
        turn,
    }
}

const fn tinted_stack(glyph: &'static str, tint: u32) -> SideRecipe {
    SideRecipe::Stack {
        glyph,
        size: TEXT_LG,
        tint: Some(Color::hex(tint)),
        turn: Turn::Upright,
    }
}

const STACK_REPEAT: usize = 8;

static SIDE_BORDERS: [(&str, SideRecipe); 20] = [
    ("simple-line-gold", SideRecipe::Shape(simple_line_gold)),
    ("ornate-pillar", SideRecipe::Shape(ornate_pillar)),
    ("floral-creeper", stack("🌿", TEXT_2XL, Turn::FlipRight)),
    ("mango-motif-stack", stack("❧", TEXT_XL, Turn::MirrorLeft)),
    ("elephant-trumpeting", stack("🐘", TEXT_2XL, Turn::MirrorLeft)),
    ("lotus-stack", stack("🪷", TEXT_XL, Turn::Upright)),
    ("diya-stack", stack("🪔", TEXT_XL, Turn::Upright)),
    ("bells-hanging-side", stack("🔔", TEXT_XL, Turn::Upright)),
    ("lattice-strip", SideRecipe::Shape(lattice_strip)),
    ("royal-sword", stack("🗡", TEXT_2XL, Turn::Quarter)),
    ("shehnai-vertical", stack("🎺", TEXT_XL, Turn::Quarter)),
    ("wedding-knot", stack("🎀", TEXT_XL, Turn::Upright)),
    ("kalash-stack", stack("🏺", TEXT_XL, Turn::Upright)),
    ("geometric-zigzag", SideRecipe::Shape(geometric_zigzag)),
    ("leafy-branch", stack("🍃", TEXT_XL, Turn::Quarter)),
    ("star-string", tinted_stack("✨", 0xffffff)),
    ("heart-string", tinted_stack("♥", 0xf87171)),
    ("marigold-string", tinted_stack("🏵", 0xf97316)),
    ("abstract-curves", SideRecipe::Shape(abstract_curves)),
    ("dot-line", stack("●", TEXT_XS, Turn::Upright)),
];

pub fn side_border_ids() -> impl ExactSizeIterator<Item = &'static str> {
    SIDE_BORDERS.iter().map(|(id, _)| *id)
}

/// Render one side border strip. Unknown identifiers and `none` draw nothing.
pub fn render_side_border(
    side: Side,
    kind: &LayerKind,
    opacity: f64,
    ctx: &DecorContext,
) -> Fragment {
    let Some((id, recipe)) = SIDE_BORDERS.iter().find(|(id, _)| *id == kind.as_str()) else {
        return Fragment::empty();
    };
    let class = format!("{id} {}", side.key());
    let nodes = match recipe {
        SideRecipe::Stack {
            glyph,
            size,
            tint,
            turn,
        } => glyph_stack(ctx, side, glyph, *size, *tint, *turn),
        SideRecipe::Shape(draw) => draw(ctx, side),
    };
    finish(&class, opacity.clamp(0.0, 1.0), nodes)
}

fn strip_x(ctx: &DecorContext, side: Side, width: f64, inset: f64) -> f64 {
    match side {
        Side::Left => inset,
        Side::Right => ctx.width - inset - width,
    }
}

/// Hairline on the strip's inner edge.
fn inner_edge(ctx: &DecorContext, side: Side) -> Element {
    let x = match side {
        Side::Left => SIDE_STRIP_PX - 1.0,
        Side::Right => ctx.width - SIDE_STRIP_PX,
    };
    rect(x, 0.0, 1.0, ctx.height).fill(Color::WHITE.with_alpha(0.1))
}

fn stack_rows(ctx: &DecorContext) -> Vec<f64> {
    spread_around(STACK_REPEAT, 8.0, ctx.height - 8.0)
}

fn glyph_stack(
    ctx: &DecorContext,
    side: Side,
    text: &str,
    size: f64,
    tint: Option<Color>,
    turn: Turn,
) -> Vec<Node> {
    let color = ctx.accent_override.or(tint).unwrap_or(ctx.accent);
    let cx = strip_x(ctx, side, SIDE_STRIP_PX, 0.0) + SIDE_STRIP_PX / 2.0;
    let transform = |cy: f64| -> Option<String> {
        let (x, y) = (num(cx), num(cy));
        match (turn, side) {
            (Turn::FlipRight, Side::Right) => Some(format!("rotate(180 {x} {y})")),
            (Turn::MirrorLeft, Side::Left) => Some(format!(
                "translate({x} 0) scale(-1 1) translate(-{x} 0)"
            )),
            (Turn::Quarter, Side::Left) => Some(format!("rotate(90 {x} {y})")),
            (Turn::Quarter, Side::Right) => Some(format!("rotate(-90 {x} {y})")),
            _ => None,
        }
    };
    let mut out: Vec<Node> = vec![inner_edge(ctx, side).into()];
    for cy in stack_rows(ctx) {
        let g = glyph(text, cx, cy + size * 0.35, size, color);
        out.push(match transform(cy) {
            Some(t) => g.attr("transform", t).into(),
            None => g.into(),
        });
    }
    out
}

fn simple_line_gold(ctx: &DecorContext, side: Side) -> Vec<Node> {
    let x = strip_x(ctx, side, 4.0, 16.0);
    vec![
        rect(x, 16.0, 4.0, ctx.height - 32.0)
            .fill(ctx.tint(GOLD))
            .into(),
    ]
}

fn ornate_pillar(ctx: &DecorContext, side: Side) -> Vec<Node> {
    let color = ctx.accent();
    let stud = ctx.tint(Color::hex(0xffd700));
    let cx = strip_x(ctx, side, SIDE_STRIP_PX, 0.0) + SIDE_STRIP_PX / 2.0;
    let mut out: Vec<Node> = vec![inner_edge(ctx, side).into()];
    for cy in stack_rows(ctx) {
        out.push(
            Element::new("g")
                .attr("transform", translate_scale(cx - 10.0, cy - 30.0, 1.0, 1.0))
                .child(rect(5.0, 0.0, 10.0, 60.0).num("rx", 2.0).fill(color).opacity(0.7))
                .child(circle(10.0, 10.0, 3.0).fill(stud))
                .child(circle(10.0, 50.0, 3.0).fill(stud))
                .into(),
        );
    }
    out
}

fn lattice_strip(ctx: &DecorContext, side: Side) -> Vec<Node> {
    let color = ctx.tint(ctx.text);
    let id = format!("lattice-strip-{}", side.key());
    let dots = pattern(&id, 10.0, 10.0, vec![circle(5.0, 5.0, 2.0).fill(color).into()]);
    vec![
        defs([dots]).into(),
        rect(strip_x(ctx, side, 32.0, 0.0), 0.0, 32.0, ctx.height)
            .attr("fill", url(&id))
            .opacity(0.5)
            .into(),
    ]
}

fn geometric_zigzag(ctx: &DecorContext, side: Side) -> Vec<Node> {
    let color = ctx.tint(ctx.text);
    let id = format!("geometric-zigzag-{}", side.key());
    let x = strip_x(ctx, side, 16.0, 8.0);
    let teeth = pattern(
        &id,
        20.0,
        20.0,
        vec![path("M0 20 L10 10 L20 20 Z").fill(color).into()],
    )
    .attr("patternTransform", format!("translate({} 0)", num(x)));
    vec![
        defs([teeth]).into(),
        rect(x, 0.0, 16.0, ctx.height)
            .attr("fill", url(&id))
            .opacity(0.5)
            .into(),
    ]
}

fn abstract_curves(ctx: &DecorContext, side: Side) -> Vec<Node> {
    let x = match side {
        Side::Left => 8.0 + 24.0 - 1.0,
        Side::Right => ctx.width - 8.0 - 24.0 + 1.0,
    };
    vec![
        Element::new("line")
            .num("x1", x)
            .num("y1", 0.0)
            .num("x2", x)
            .num("y2", ctx.height)
            .stroke(ctx.tint(GOLD), 2.0)
            .attr("stroke-dasharray", "6 4")
            .into(),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/decor/borders.rs"]
mod tests;
