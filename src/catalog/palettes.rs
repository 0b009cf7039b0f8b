use crate::foundation::core::Color;
use crate::model::style::Palette;

/// A named five-color palette offered next to the template gallery.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct NamedPalette {
    pub id: &'static str,
    pub name: &'static str,
    pub colors: Palette,
}

const fn palette(
    id: &'static str,
    name: &'static str,
    [background, accent, border, text, highlight]: [u32; 5],
) -> NamedPalette {
    NamedPalette {
        id,
        name,
        colors: Palette {
            background: Color::hex(background),
            accent: Color::hex(accent),
            border: Color::hex(border),
            text: Color::hex(text),
            highlight: Color::hex(highlight),
        },
    }
}

// background, accent, border, text, highlight
pub const PALETTES: [NamedPalette; 12] = [
    palette("deep-maroon", "Deep Maroon", [0x4a0404, 0xfbbf24, 0x7f1d1d, 0xfffbeb, 0xfbbf24]),
    palette("royal-navy", "Royal Navy", [0x000080, 0xffd700, 0x0000cd, 0xf0f9ff, 0xfcd34d]),
    palette("emerald-green", "Emerald Green", [0x064e3b, 0x34d399, 0x047857, 0xf0fdf4, 0xfde047]),
    palette("classic-white", "Classic White", [0xffffff, 0xb91c1c, 0xe5e7eb, 0x1f2937, 0xb91c1c]),
    palette("cream-paper", "Royal Cream", [0xfffdd0, 0xd97706, 0xfcd34d, 0x4a0404, 0xd97706]),
    palette("pure-black", "Luxury Black", [0x000000, 0xfcd34d, 0x333333, 0xf3f4f6, 0xfbbf24]),
    palette("imperial-purple", "Imperial Purple", [0x4b0082, 0xe9d5ff, 0x6d28d9, 0xfaf5ff, 0xfcd34d]),
    palette("saffron-orange", "Saffron", [0xe65100, 0xffe0b2, 0xff9800, 0xfff7ed, 0xffffff]),
    palette("soft-pink", "Pastel Pink", [0xfff0f5, 0xdb2777, 0xfbcfe8, 0x881337, 0xbe123c]),
    palette("chocolate-brown", "Chocolate", [0x3e2723, 0xffcc80, 0x5d4037, 0xfff7ed, 0xffcc80]),
    palette("teal-depths", "Teal Depths", [0x004d40, 0x5eead4, 0x00695c, 0xccfbf1, 0xfde047]),
    palette("charcoal-gray", "Charcoal", [0x374151, 0x9ca3af, 0x4b5563, 0xf9fafb, 0xfbbf24]),
];

pub fn find_palette(id: &str) -> Option<&'static NamedPalette> {
    PALETTES.iter().find(|p| p.id == id)
}
