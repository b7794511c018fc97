//! The style model: every visual parameter of one circle.
//!
//! A [`StyleModel`] is plain data. It is owned by whatever front end collects
//! the user's choices and is passed by reference to the renderer. It
//! (de)serializes as camelCase JSON, and missing fields take the defaults
//! below.

use crate::error::ModelError;
use circle_png_canvas2d::GenericFamily;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

pub const DIAMETER_RANGE: RangeInclusive<u32> = 100..=500;
pub const OPACITY_RANGE: RangeInclusive<u8> = 0..=100;
pub const GRADIENT_ANGLE_RANGE: RangeInclusive<f32> = 0.0..=360.0;
pub const BORDER_WIDTH_RANGE: RangeInclusive<u32> = 0..=20;
pub const SHADOW_BLUR_RANGE: RangeInclusive<u32> = 0..=50;
pub const SHADOW_OFFSET_RANGE: RangeInclusive<i32> = -30..=30;
pub const TEXT_SIZE_RANGE: RangeInclusive<u32> = 12..=120;
pub const LETTER_SPACING_RANGE: RangeInclusive<f32> = -5.0..=20.0;
pub const TEXT_OFFSET_RANGE: RangeInclusive<i32> = -100..=100;

/// All visual parameters of one circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleModel {
    /// Circle diameter in pixels.
    pub diameter: u32,
    pub fill: FillSettings,
    pub border: BorderSettings,
    pub shadow: ShadowSettings,
    pub text: TextSettings,
}

impl Default for StyleModel {
    fn default() -> Self {
        Self {
            diameter: 300,
            fill: FillSettings::default(),
            border: BorderSettings::default(),
            shadow: ShadowSettings::default(),
            text: TextSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FillSettings {
    pub mode: FillMode,
    pub solid_color: String,
    pub gradient: GradientSettings,
    /// Opacity of the fill only; border and text are always opaque.
    pub opacity_percent: u8,
}

impl Default for FillSettings {
    fn default() -> Self {
        Self {
            mode: FillMode::Solid,
            solid_color: "#ff6b6b".to_string(),
            gradient: GradientSettings::default(),
            opacity_percent: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GradientSettings {
    #[serde(rename = "type")]
    pub kind: GradientKind,
    pub color_start: String,
    pub color_end: String,
    /// Axis angle of a linear gradient, clockwise from +x. Ignored by radial.
    pub angle_degrees: f32,
}

impl Default for GradientSettings {
    fn default() -> Self {
        Self {
            kind: GradientKind::Linear,
            color_start: "#ff6b6b".to_string(),
            color_end: "#4dabf7".to_string(),
            angle_degrees: 45.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BorderSettings {
    pub width_px: u32,
    pub color: String,
}

impl Default for BorderSettings {
    fn default() -> Self {
        Self {
            width_px: 0,
            color: "#000000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShadowSettings {
    pub blur_px: u32,
    pub offset_x: i32,
    pub offset_y: i32,
    pub color: String,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            blur_px: 0,
            offset_x: 0,
            offset_y: 0,
            color: "#00000080".to_string(),
        }
    }
}

impl ShadowSettings {
    /// Largest absolute offset on either axis.
    pub fn max_offset(&self) -> u32 {
        self.offset_x.unsigned_abs().max(self.offset_y.unsigned_abs())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextSettings {
    pub enabled: bool,
    pub content: String,
    pub color: String,
    pub size_px: u32,
    pub font_family: FontFamily,
    pub weight: FontWeight,
    pub position: TextPosition,
    /// Extra degrees added per character index; curved text only.
    pub letter_spacing_deg: f32,
    /// Anchor shift; `offset_x` applies to every position (it moves the arc
    /// center when curved), `offset_y` to straight positions only.
    pub offset_x: i32,
    pub offset_y: i32,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            content: "YOUR TEXT".to_string(),
            color: "#ffffff".to_string(),
            size_px: 32,
            font_family: FontFamily::Arial,
            weight: FontWeight::Bold,
            position: TextPosition::Center,
            letter_spacing_deg: 0.0,
            offset_x: 0,
            offset_y: 0,
        }
    }
}

impl TextSettings {
    /// Whether there is anything to draw.
    pub fn is_visible(&self) -> bool {
        self.enabled && !self.content.is_empty()
    }
}

impl StyleModel {
    /// Check every bounded field against its range.
    pub fn validate(&self) -> Result<(), ModelError> {
        check("diameter", self.diameter, &DIAMETER_RANGE)?;
        check("fill.opacityPercent", self.fill.opacity_percent, &OPACITY_RANGE)?;
        check(
            "fill.gradient.angleDegrees",
            self.fill.gradient.angle_degrees,
            &GRADIENT_ANGLE_RANGE,
        )?;
        check("border.widthPx", self.border.width_px, &BORDER_WIDTH_RANGE)?;
        check("shadow.blurPx", self.shadow.blur_px, &SHADOW_BLUR_RANGE)?;
        check("shadow.offsetX", self.shadow.offset_x, &SHADOW_OFFSET_RANGE)?;
        check("shadow.offsetY", self.shadow.offset_y, &SHADOW_OFFSET_RANGE)?;
        check("text.sizePx", self.text.size_px, &TEXT_SIZE_RANGE)?;
        check(
            "text.letterSpacingDeg",
            self.text.letter_spacing_deg,
            &LETTER_SPACING_RANGE,
        )?;
        check("text.offsetX", self.text.offset_x, &TEXT_OFFSET_RANGE)?;
        check("text.offsetY", self.text.offset_y, &TEXT_OFFSET_RANGE)?;
        Ok(())
    }
}

// NaN fails `contains`, so it is reported as out of range too
fn check<T>(field: &'static str, value: T, range: &RangeInclusive<T>) -> Result<(), ModelError>
where
    T: PartialOrd + Copy + Into<f64>,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ModelError::OutOfRange {
            field,
            value: value.into(),
            min: (*range.start()).into(),
            max: (*range.end()).into(),
        })
    }
}

/// Generates `FromStr` (case-insensitive) and `Display` for a field enum.
macro_rules! named_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().replace(['-', '_'], " ");
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name().eq_ignore_ascii_case(&wanted))
                    .ok_or_else(|| ModelError::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    #[default]
    Solid,
    Gradient,
}

named_enum!(FillMode, "fill mode", { Solid => "solid", Gradient => "gradient" });

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
}

named_enum!(GradientKind, "gradient type", { Linear => "linear", Radial => "radial" });

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Light,
    Normal,
    #[default]
    Bold,
}

named_enum!(FontWeight, "font weight", { Light => "light", Normal => "normal", Bold => "bold" });

impl FontWeight {
    /// CSS numeric weight.
    pub fn css_weight(self) -> u16 {
        match self {
            FontWeight::Light => 300,
            FontWeight::Normal => 400,
            FontWeight::Bold => 700,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextPosition {
    Top,
    #[default]
    Center,
    Bottom,
    Curved,
}

named_enum!(TextPosition, "text position", {
    Top => "top",
    Center => "center",
    Bottom => "bottom",
    Curved => "curved",
});

/// The web-safe font families offered for text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Arial,
    Futura,
    Helvetica,
    #[serde(rename = "Times New Roman")]
    TimesNewRoman,
    Georgia,
    Verdana,
    #[serde(rename = "Courier New")]
    CourierNew,
    #[serde(rename = "Comic Sans MS")]
    ComicSansMs,
    Impact,
    #[serde(rename = "Trebuchet MS")]
    TrebuchetMs,
    Palatino,
}

named_enum!(FontFamily, "font family", {
    Arial => "Arial",
    Futura => "Futura",
    Helvetica => "Helvetica",
    TimesNewRoman => "Times New Roman",
    Georgia => "Georgia",
    Verdana => "Verdana",
    CourierNew => "Courier New",
    ComicSansMs => "Comic Sans MS",
    Impact => "Impact",
    TrebuchetMs => "Trebuchet MS",
    Palatino => "Palatino",
});

impl FontFamily {
    /// Generic family used when this one is not installed.
    pub fn generic_fallback(self) -> GenericFamily {
        match self {
            FontFamily::TimesNewRoman | FontFamily::Georgia | FontFamily::Palatino => {
                GenericFamily::Serif
            }
            FontFamily::CourierNew => GenericFamily::Monospace,
            FontFamily::ComicSansMs => GenericFamily::Cursive,
            FontFamily::Impact => GenericFamily::Fantasy,
            FontFamily::Arial
            | FontFamily::Futura
            | FontFamily::Helvetica
            | FontFamily::Verdana
            | FontFamily::TrebuchetMs => GenericFamily::SansSerif,
        }
    }
}
