use crate::foundation::core::{Color, Vec2};
use crate::model::style::{
    CentralSymbol, FieldId, LayerConfig, Palette, PhotoShape, PhotoStyle, TextStyles, clamp_scale,
};

/// Text content variant the presets are written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Marathi,
    English,
}

impl Language {
    /// English presets use the transliterated invocation in the headline.
    pub fn detect(record: &DataRecord) -> Self {
        if record.headline.contains("Shree") {
            Language::English
        } else {
            Language::Marathi
        }
    }
}

/// The invitation being edited: free text, per-field styles, overlay layers and palette.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataRecord {
    pub headline: String,
    pub groom_name: String,
    pub groom_parents: String,
    pub bride_name: String,
    pub bride_parents: String,
    pub sub_heading: String,
    pub message: String,
    pub ceremony_details: String,
    pub venue_title: String,
    pub venue_name: String,
    pub venue_address: String,
    pub rsvp: String,

    /// URI, file path or `data:` URI of the couple photo.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub photo: Option<String>,

    pub text_styles: TextStyles,
    pub photo_style: PhotoStyle,
    pub decoration: LayerConfig,
    pub bottom_border: LayerConfig,
    pub left_border: LayerConfig,
    pub right_border: LayerConfig,
    pub background_texture: LayerConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_colors: Option<Palette>,

    #[serde(flatten)]
    pub symbol: CentralSymbol,
}

fn empty_as_none<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v: Option<String> = serde::Deserialize::deserialize(d)?;
    Ok(v.filter(|s| !s.trim().is_empty()))
}

impl Default for DataRecord {
    fn default() -> Self {
        Self::marathi()
    }
}

struct PresetText {
    headline: &'static str,
    groom_name: &'static str,
    groom_parents: &'static str,
    bride_name: &'static str,
    bride_parents: &'static str,
    sub_heading: &'static str,
    message: &'static str,
    ceremony_details: &'static str,
    venue_title: &'static str,
    venue_name: &'static str,
    venue_address: &'static str,
    rsvp: &'static str,
}

const MARATHI: PresetText = PresetText {
    headline: "|| श्री गणेशाय नमः ||",
    groom_name: "चि. आदित्य",
    groom_parents: "सौ. सुमित्रा व श्री. सुरेश पाटील\nमु. पो. सातारा, ता. सातारा, जि. सातारा, यांचे जेष्ठ चिरंजीव",
    bride_name: "चि. सौ. कां. अनया",
    bride_parents: "सौ. सुजाता व श्री. रमेश देशमुख\nमु. पो. कोरेगाव, ता. कोरेगाव, जि. सातारा, यांची जेष्ठ कन्या",
    sub_heading: "यांचा शुभविवाह",
    message: "शनिवार दि. २१/०५/२०२२ रोजी दुपारी ०३:१५ मि.\nया शुभ मुहूर्तावर करण्याचे योजिले आहे,तरी आपण उपस्थित राहून \nवधु वरास शुभाशिर्वाद द्यावे ही नम्र विनंती.",
    ceremony_details: "हळदी समारंभ\nशनिवार दि. २१/०५/२०२२ रोजी सकाळी ११:३० वा.\n(विवाहस्थळी)",
    venue_title: "विवाहस्थळ",
    venue_name: "अजिंक्यतारा मंगल कार्यालय",
    venue_address: "पुणे-कोल्हापूर रोड, शेंद्रे, ता. जि. सातारा",
    rsvp: "निमंत्रक: समस्त पाटील व देशमुख परिवार",
};

const ENGLISH: PresetText = PresetText {
    headline: "|| Shree Ganeshay Namah ||",
    groom_name: "Aditya",
    groom_parents: "S/o Mrs. Sumitra & Mr. Suresh Patil\nResiding at Satara",
    bride_name: "Ananya",
    bride_parents: "D/o Mrs. Sujata & Mr. Ramesh Deshmukh\nResiding at Koregaon",
    sub_heading: "Wedding Ceremony",
    message: "We have organized the wedding on Saturday, 21/05/2022 at 03:15 PM.\nWe request your gracious presence to bless the couple.",
    ceremony_details: "Haldi Ceremony\nSaturday, 21/05/2022 at 11:30 AM\n(At Venue)",
    venue_title: "Wedding Venue",
    venue_name: "Ajinkyatara Mangal Karyalay",
    venue_address: "Pune-Kolhapur Road, Shendre, Dist. Satara",
    rsvp: "Invitee: Patil & Deshmukh Family",
};

impl DataRecord {
    /// The record a new session starts from.
    pub fn marathi() -> Self {
        Self::preset(Language::Marathi)
    }

    pub fn english() -> Self {
        Self::preset(Language::English)
    }

    pub fn preset(lang: Language) -> Self {
        let mut rec = Self {
            headline: String::new(),
            groom_name: String::new(),
            groom_parents: String::new(),
            bride_name: String::new(),
            bride_parents: String::new(),
            sub_heading: String::new(),
            message: String::new(),
            ceremony_details: String::new(),
            venue_title: String::new(),
            venue_name: String::new(),
            venue_address: String::new(),
            rsvp: String::new(),
            photo: None,
            text_styles: TextStyles::default(),
            photo_style: PhotoStyle::default(),
            decoration: LayerConfig::new("toran", 1.0),
            bottom_border: LayerConfig::none(),
            left_border: LayerConfig::none(),
            right_border: LayerConfig::none(),
            background_texture: LayerConfig::none_texture(),
            custom_colors: None,
            symbol: CentralSymbol::Swastik,
        };
        rec.fill_text(lang);
        rec
    }

    fn fill_text(&mut self, lang: Language) {
        let p = match lang {
            Language::Marathi => &MARATHI,
            Language::English => &ENGLISH,
        };
        self.headline = p.headline.to_owned();
        self.groom_name = p.groom_name.to_owned();
        self.groom_parents = p.groom_parents.to_owned();
        self.bride_name = p.bride_name.to_owned();
        self.bride_parents = p.bride_parents.to_owned();
        self.sub_heading = p.sub_heading.to_owned();
        self.message = p.message.to_owned();
        self.ceremony_details = p.ceremony_details.to_owned();
        self.venue_title = p.venue_title.to_owned();
        self.venue_name = p.venue_name.to_owned();
        self.venue_address = p.venue_address.to_owned();
        self.rsvp = p.rsvp.to_owned();
    }

    /// Swap text content to another language preset. Field styles go back to defaults;
    /// photo, layers, symbol and palette are kept.
    pub fn switch_language(&mut self, lang: Language) {
        self.fill_text(lang);
        self.text_styles = TextStyles::default();
    }

    /// Text content of a field. Symbol fields yield their glyph, or `""` when not shown.
    pub fn text(&self, field: FieldId) -> &str {
        match field {
            FieldId::Headline => &self.headline,
            FieldId::GroomName => &self.groom_name,
            FieldId::GroomParents => &self.groom_parents,
            FieldId::BrideName => &self.bride_name,
            FieldId::BrideParents => &self.bride_parents,
            FieldId::SubHeading => &self.sub_heading,
            FieldId::Message => &self.message,
            FieldId::CeremonyDetails => &self.ceremony_details,
            FieldId::VenueTitle => &self.venue_title,
            FieldId::VenueName => &self.venue_name,
            FieldId::VenueAddress => &self.venue_address,
            FieldId::Rsvp => &self.rsvp,
            FieldId::AmpersandSymbol | FieldId::SwastikSymbol => {
                if self.symbol.field() == Some(field) {
                    self.symbol.glyph().unwrap_or("")
                } else {
                    ""
                }
            }
        }
    }

    /// Replace a text field. Returns `false` for symbol fields, which carry no free text.
    pub fn set_text(&mut self, field: FieldId, value: impl Into<String>) -> bool {
        let slot = match field {
            FieldId::Headline => &mut self.headline,
            FieldId::GroomName => &mut self.groom_name,
            FieldId::GroomParents => &mut self.groom_parents,
            FieldId::BrideName => &mut self.bride_name,
            FieldId::BrideParents => &mut self.bride_parents,
            FieldId::SubHeading => &mut self.sub_heading,
            FieldId::Message => &mut self.message,
            FieldId::CeremonyDetails => &mut self.ceremony_details,
            FieldId::VenueTitle => &mut self.venue_title,
            FieldId::VenueName => &mut self.venue_name,
            FieldId::VenueAddress => &mut self.venue_address,
            FieldId::Rsvp => &mut self.rsvp,
            FieldId::AmpersandSymbol | FieldId::SwastikSymbol => return false,
        };
        *slot = value.into();
        true
    }

    pub fn set_symbol(&mut self, symbol: CentralSymbol) {
        self.symbol = symbol;
    }

    /// Apply a five-color palette: stored as the override and pushed into every field color.
    pub fn apply_palette(&mut self, palette: Palette) {
        for f in FieldId::ALL {
            self.text_styles.get_mut(f).color = Some(palette.color_for(f.palette_role()));
        }
        self.custom_colors = Some(palette);
    }

    /// Drop the palette override and every per-field color.
    pub fn reset_colors(&mut self) {
        self.custom_colors = None;
        self.text_styles.clear_colors();
    }

    pub fn set_field_color(&mut self, field: FieldId, color: Option<Color>) {
        self.text_styles.get_mut(field).color = color;
    }

    /// Shift a field's offset by `delta` px.
    pub fn nudge(&mut self, field: FieldId, delta: Vec2) {
        let s = self.text_styles.get_mut(field);
        s.x += delta.x;
        s.y += delta.y;
    }

    /// Add `delta` to a field's font multiplier, clamped to `[0.2, ceiling]`.
    pub fn adjust_font_size(&mut self, field: FieldId, delta: f64, ceiling: f64) -> f64 {
        let s = self.text_styles.get_mut(field);
        s.font_size = clamp_scale(s.font_size + delta, ceiling);
        s.font_size
    }

    pub fn set_photo(&mut self, photo: Option<String>) {
        self.photo = photo.filter(|p| !p.trim().is_empty());
    }

    pub fn has_photo(&self) -> bool {
        self.photo.is_some()
    }

    pub fn set_photo_shape(&mut self, shape: PhotoShape) {
        self.photo_style.shape = shape;
    }

    /// Photo zoom, kept positive.
    pub fn adjust_photo_scale(&mut self, delta: f64) {
        self.photo_style.scale = (self.photo_style.scale + delta).max(0.1);
    }

    pub fn move_photo(&mut self, delta: Vec2) {
        self.photo_style.x += delta.x;
        self.photo_style.y += delta.y;
    }

    /// Sanitized `<brideName>-wedding-card` stem for export file names.
    pub fn export_stem(&self) -> String {
        let name: String = self
            .bride_name
            .chars()
            .map(|c| {
                if c.is_control() || "/\\:*?\"<>|".contains(c) {
                    '_'
                } else {
                    c
                }
            })
            .collect();
        let name = name.trim_matches(|c: char| c.is_whitespace() || c == '.');
        if name.is_empty() {
            "wedding-card".to_owned()
        } else {
            format!("{name}-wedding-card")
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/record.rs"]
mod tests;
