use super::*;

#[test]
fn rsvp_splits_at_first_colon() {
    let p = parse_rsvp("Invitee: A & B Family");
    assert_eq!(p.label, "Invitee:");
    assert_eq!(p.names, "A & B Family");

    let p = parse_rsvp("Contact: Ravi: 98xxxx");
    assert_eq!(p.label, "Contact:");
    assert_eq!(p.names, "Ravi: 98xxxx");
}

#[test]
fn rsvp_without_colon_is_all_names() {
    let p = parse_rsvp("With best compliments");
    assert_eq!(p.label, "");
    assert_eq!(p.names, "With best compliments");
}

#[test]
fn ceremony_splits_at_first_newline() {
    let p = parse_ceremony("Haldi Ceremony\nSaturday\n(At Venue)");
    assert_eq!(p.title, "Haldi Ceremony");
    assert_eq!(p.detail, "Saturday\n(At Venue)");

    let p = parse_ceremony("Sangeet");
    assert_eq!(p.title, "Sangeet");
    assert_eq!(p.detail, "");
}

#[test]
fn lines_of_empty_text() {
    assert!(lines("").is_empty());
    assert_eq!(lines("a\r\nb"), vec!["a", "b"]);
    assert_eq!(lines("one"), vec!["one"]);
}

#[test]
fn widths_count_chars_not_bytes() {
    let w = line_width("अनया", 10.0, 0.0);
    assert!((w - 4.0 * 10.0 * ADVANCE_EM).abs() < 1e-9);
    assert_eq!(block_width(&["ab", "abcd"], 10.0, 0.0), line_width("abcd", 10.0, 0.0));
}
