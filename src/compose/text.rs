//! Text splitting and the fixed-advance metrics the layout flows with.

/// Average glyph advance as a fraction of the font size.
pub const ADVANCE_EM: f64 = 0.55;

/// RSVP line split at its first colon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsvpParts {
    /// Text up to and including the colon; empty when there is no colon.
    pub label: String,
    pub names: String,
}

/// Split `"Label: names"` at the first colon. Later colons stay in the names.
pub fn parse_rsvp(text: &str) -> RsvpParts {
    match text.split_once(':') {
        Some((label, names)) => RsvpParts {
            label: format!("{label}:"),
            names: names.trim_start().to_owned(),
        },
        None => RsvpParts {
            label: String::new(),
            names: text.to_owned(),
        },
    }
}

/// Ceremony block split at its first newline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CeremonyParts {
    pub title: String,
    pub detail: String,
}

pub fn parse_ceremony(text: &str) -> CeremonyParts {
    match text.split_once('\n') {
        Some((title, detail)) => CeremonyParts {
            title: title.to_owned(),
            detail: detail.to_owned(),
        },
        None => CeremonyParts {
            title: text.to_owned(),
            detail: String::new(),
        },
    }
}

/// Lines of a multi-line field. Empty text has no lines.
pub fn lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').map(|l| l.trim_end_matches('\r')).collect()
}

/// Estimated advance width of one line.
pub fn line_width(line: &str, font_px: f64, tracking_em: f64) -> f64 {
    let n = line.chars().count() as f64;
    n * font_px * (ADVANCE_EM + tracking_em)
}

/// Widest estimated line.
pub fn block_width(lines: &[&str], font_px: f64, tracking_em: f64) -> f64 {
    lines
        .iter()
        .map(|l| line_width(l, font_px, tracking_em))
        .fold(0.0, f64::max)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/text.rs"]
mod tests;
