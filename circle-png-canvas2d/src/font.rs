//! Font selection for text rendering.

use cosmic_text::Family;

/// Generic CSS family used when the requested family is not installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenericFamily {
    #[default]
    SansSerif,
    Serif,
    Monospace,
    Cursive,
    Fantasy,
}

impl GenericFamily {
    pub const ALL: [GenericFamily; 5] = [
        GenericFamily::SansSerif,
        GenericFamily::Serif,
        GenericFamily::Monospace,
        GenericFamily::Cursive,
        GenericFamily::Fantasy,
    ];

    pub(crate) fn to_family(self) -> Family<'static> {
        match self {
            GenericFamily::SansSerif => Family::SansSerif,
            GenericFamily::Serif => Family::Serif,
            GenericFamily::Monospace => Family::Monospace,
            GenericFamily::Cursive => Family::Cursive,
            GenericFamily::Fantasy => Family::Fantasy,
        }
    }
}

/// Font used by `fill_text`, the typed equivalent of a CSS
/// `"<weight> <size>px <family>, <generic>"` shorthand.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    /// Preferred family name, e.g. `"Times New Roman"`.
    pub family: String,
    /// Fallback when `family` has no face in the database.
    pub fallback: GenericFamily,
    /// CSS numeric weight (100-900).
    pub weight: u16,
    /// Font size in pixels.
    pub size_px: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        // Canvas default is "10px sans-serif"
        Self {
            family: String::from("sans-serif"),
            fallback: GenericFamily::SansSerif,
            weight: 400,
            size_px: 10.0,
        }
    }
}
