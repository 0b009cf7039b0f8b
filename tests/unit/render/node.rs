use super::*;

#[test]
fn num_trims_and_rounds() {
    assert_eq!(num(1.0), "1");
    assert_eq!(num(0.855), "0.855");
    assert_eq!(num(12.34567), "12.346");
    assert_eq!(num(-0.0001), "0");
    assert_eq!(num(f64::NAN), "0");
}

#[test]
fn escape_xml_handles_markup_chars() {
    assert_eq!(escape_xml("plain"), "plain");
    assert_eq!(escape_xml("A & B <c> \"d\" 'e'"), "A &amp; B &lt;c&gt; &quot;d&quot; &apos;e&apos;");
}

#[test]
fn writes_nested_elements_and_text() {
    let node: Node = Element::new("g")
        .attr("id", "x")
        .child(Element::new("rect").num("width", 10.0).fill(Color::hex(0xff0000)))
        .child(Element::new("text").text("Hosts: A & B"))
        .into();
    let mut out = String::new();
    node.write_svg(&mut out);
    assert_eq!(
        out,
        "<g id=\"x\"><rect width=\"10\" fill=\"#ff0000\"/><text>Hosts: A &amp; B</text></g>"
    );
    assert_eq!(node.text_content(), "Hosts: A & B");
}

#[test]
fn translucent_paint_emits_opacity() {
    let el = Element::new("rect").fill(Color::WHITE.with_alpha(0.5));
    assert_eq!(el.get("fill"), Some("#ffffff"));
    assert_eq!(el.get("fill-opacity"), Some("0.502"));
}

#[test]
fn empty_fragment_has_no_group() {
    assert!(Fragment::empty().into_group(1.0).is_none());
    let mut f = Fragment::empty();
    f.push(Element::new("circle"));
    let g = f.into_group(0.5).unwrap();
    assert_eq!(g.get("opacity"), Some("0.5"));
    assert_eq!(g.children.len(), 1);
}

#[test]
fn walk_visits_depth_first() {
    let node: Node = Element::new("g")
        .child(Element::new("a").child(Element::new("b")))
        .child(Element::new("c"))
        .into();
    let mut tags = Vec::new();
    node.walk(&mut |el| tags.push(el.tag));
    assert_eq!(tags, ["g", "a", "b", "c"]);
}
