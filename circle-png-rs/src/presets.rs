//! Named style presets and the solid-color swatch palette.

use crate::error::ModelError;
use crate::model::{FillMode, GradientKind, StyleModel};

/// A named bundle of fill, opacity, border and shadow settings.
///
/// Applying a preset leaves the diameter, all text settings and the shadow
/// color untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub fill_mode: FillMode,
    pub solid_color: &'static str,
    pub gradient_kind: GradientKind,
    pub gradient_start: &'static str,
    pub gradient_end: &'static str,
    pub gradient_angle: f32,
    pub opacity_percent: u8,
    pub border_width: u32,
    pub border_color: &'static str,
    pub shadow_blur: u32,
    pub shadow_x: i32,
    pub shadow_y: i32,
}

impl Preset {
    /// Kebab-case form of the name, e.g. `"green-ring"`.
    pub fn slug(&self) -> String {
        self.name.to_ascii_lowercase().replace(' ', "-")
    }
}

const BASE: Preset = Preset {
    name: "",
    fill_mode: FillMode::Solid,
    solid_color: "#ff6b6b",
    gradient_kind: GradientKind::Linear,
    gradient_start: "#ff6b6b",
    gradient_end: "#4dabf7",
    gradient_angle: 45.0,
    opacity_percent: 100,
    border_width: 0,
    border_color: "#000000",
    shadow_blur: 0,
    shadow_x: 0,
    shadow_y: 0,
};

pub const PRESETS: [Preset; 12] = [
    Preset {
        name: "Solid Red",
        ..BASE
    },
    Preset {
        name: "Blue Gradient",
        fill_mode: FillMode::Gradient,
        solid_color: "#4dabf7",
        gradient_start: "#4dabf7",
        gradient_end: "#1971c2",
        gradient_angle: 135.0,
        ..BASE
    },
    Preset {
        name: "Sunset Radial",
        fill_mode: FillMode::Gradient,
        gradient_kind: GradientKind::Radial,
        gradient_start: "#ffd43b",
        gradient_end: "#ff6b6b",
        gradient_angle: 0.0,
        ..BASE
    },
    Preset {
        name: "Green Ring",
        solid_color: "#ffffff00",
        gradient_start: "#51cf66",
        gradient_end: "#2f9e44",
        border_width: 8,
        border_color: "#51cf66",
        ..BASE
    },
    Preset {
        name: "Drop Shadow",
        solid_color: "#9775fa",
        gradient_start: "#9775fa",
        gradient_end: "#6741d9",
        shadow_blur: 15,
        shadow_x: 5,
        shadow_y: 5,
        ..BASE
    },
    Preset {
        name: "Glow Effect",
        solid_color: "#ffd43b",
        gradient_start: "#ffd43b",
        gradient_end: "#fab005",
        shadow_blur: 25,
        ..BASE
    },
    Preset {
        name: "Ocean Gradient",
        fill_mode: FillMode::Gradient,
        solid_color: "#20c997",
        gradient_start: "#20c997",
        gradient_end: "#4dabf7",
        gradient_angle: 90.0,
        ..BASE
    },
    Preset {
        name: "Transparent",
        gradient_end: "#fa5252",
        opacity_percent: 50,
        ..BASE
    },
    Preset {
        name: "Neon Pink",
        solid_color: "#ff6b9d",
        gradient_start: "#ff6b9d",
        gradient_end: "#f783ac",
        border_width: 3,
        border_color: "#ff6b9d",
        shadow_blur: 20,
        ..BASE
    },
    Preset {
        name: "Fire Radial",
        fill_mode: FillMode::Gradient,
        solid_color: "#ff922b",
        gradient_kind: GradientKind::Radial,
        gradient_start: "#ffd43b",
        gradient_end: "#ff922b",
        gradient_angle: 0.0,
        ..BASE
    },
    Preset {
        name: "Purple Fade",
        fill_mode: FillMode::Gradient,
        solid_color: "#9775fa",
        gradient_start: "#9775fa",
        gradient_end: "#6741d9",
        gradient_angle: 180.0,
        opacity_percent: 80,
        ..BASE
    },
    Preset {
        name: "Black Outline",
        solid_color: "#ffffff00",
        gradient_start: "#000000",
        gradient_end: "#495057",
        border_width: 6,
        border_color: "#000000",
        ..BASE
    },
];

/// Look up a preset by display name or slug, ignoring case.
pub fn find_preset(name: &str) -> Result<&'static Preset, ModelError> {
    let wanted = name.trim().replace(['-', '_'], " ");
    PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(&wanted))
        .ok_or_else(|| ModelError::UnknownPreset(name.to_string()))
}

/// Overwrite the preset-controlled fields of `model`.
pub fn apply_preset(model: &mut StyleModel, preset: &Preset) {
    log::debug!("applying preset {:?}", preset.name);
    model.fill.mode = preset.fill_mode;
    model.fill.solid_color = preset.solid_color.to_string();
    model.fill.opacity_percent = preset.opacity_percent;

    let gradient = &mut model.fill.gradient;
    gradient.kind = preset.gradient_kind;
    gradient.color_start = preset.gradient_start.to_string();
    gradient.color_end = preset.gradient_end.to_string();
    gradient.angle_degrees = preset.gradient_angle;

    model.border.width_px = preset.border_width;
    model.border.color = preset.border_color.to_string();

    model.shadow.blur_px = preset.shadow_blur;
    model.shadow.offset_x = preset.shadow_x;
    model.shadow.offset_y = preset.shadow_y;
}

/// One entry of the quick-pick color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub color: &'static str,
}

pub const SWATCHES: [Swatch; 11] = [
    Swatch { name: "Red", color: "#ff6b6b" },
    Swatch { name: "Blue", color: "#4dabf7" },
    Swatch { name: "Green", color: "#51cf66" },
    Swatch { name: "Yellow", color: "#ffd43b" },
    Swatch { name: "Purple", color: "#9775fa" },
    Swatch { name: "Orange", color: "#ff922b" },
    Swatch { name: "Pink", color: "#ff6b9d" },
    Swatch { name: "Teal", color: "#20c997" },
    Swatch { name: "Black", color: "#000000" },
    Swatch { name: "White", color: "#ffffff" },
    Swatch { name: "Gray", color: "#868e96" },
];

pub fn find_swatch(name: &str) -> Result<&'static Swatch, ModelError> {
    SWATCHES
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| ModelError::UnknownSwatch(name.to_string()))
}

/// A swatch sets the solid fill color and nothing else.
pub fn apply_swatch(model: &mut StyleModel, swatch: &Swatch) {
    model.fill.solid_color = swatch.color.to_string();
}

impl StyleModel {
    /// Builder form of [`apply_preset`].
    pub fn with_preset(mut self, preset: &Preset) -> Self {
        apply_preset(&mut self, preset);
        self
    }
}
