use anyhow::{bail, Context};
use circle_png_rs::{
    apply_preset, apply_swatch, export_png, find_preset, find_swatch, CircleRenderer, CustomFont,
    FillMode, FontConfig, FontFamily, FontWeight, GradientKind, StyleModel, TextPosition, PRESETS,
    SWATCHES,
};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

/// circle-png: Render a styled circle to a transparent PNG
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// JSON file with a full or partial style model
    #[clap(short, long)]
    pub config: Option<String>,

    /// Preset to apply, by name or slug (e.g. "green-ring")
    #[clap(short, long)]
    pub preset: Option<String>,

    /// Palette swatch for the solid fill color (e.g. "teal")
    #[clap(long)]
    pub swatch: Option<String>,

    /// Circle diameter in pixels (100-500)
    #[clap(short, long)]
    pub diameter: Option<u32>,

    /// Fill mode: solid or gradient
    #[clap(long)]
    pub fill: Option<FillMode>,

    /// Solid fill color
    #[clap(long)]
    pub fill_color: Option<String>,

    /// Gradient type: linear or radial
    #[clap(long)]
    pub gradient: Option<GradientKind>,

    #[clap(long)]
    pub gradient_start: Option<String>,

    #[clap(long)]
    pub gradient_end: Option<String>,

    /// Linear gradient angle in degrees (0-360)
    #[clap(long)]
    pub gradient_angle: Option<f32>,

    /// Fill opacity percent (0-100)
    #[clap(long)]
    pub opacity: Option<u8>,

    /// Border width in pixels (0-20)
    #[clap(long)]
    pub border_width: Option<u32>,

    #[clap(long)]
    pub border_color: Option<String>,

    /// Shadow blur in pixels (0-50); the shadow is drawn only when this is above 0
    #[clap(long)]
    pub shadow_blur: Option<u32>,

    #[clap(long, allow_hyphen_values = true)]
    pub shadow_x: Option<i32>,

    #[clap(long, allow_hyphen_values = true)]
    pub shadow_y: Option<i32>,

    #[clap(long)]
    pub shadow_color: Option<String>,

    /// Text to draw; setting it enables text
    #[clap(short, long)]
    pub text: Option<String>,

    #[clap(long)]
    pub text_color: Option<String>,

    /// Font size in pixels (12-120)
    #[clap(long)]
    pub font_size: Option<u32>,

    /// Font family, e.g. "Georgia" or "times-new-roman"
    #[clap(long)]
    pub font: Option<FontFamily>,

    /// light, normal or bold
    #[clap(long)]
    pub font_weight: Option<FontWeight>,

    /// top, center, bottom or curved
    #[clap(long)]
    pub text_position: Option<TextPosition>,

    /// Extra degrees per character for curved text (-5 to 20)
    #[clap(long, allow_hyphen_values = true)]
    pub letter_spacing: Option<f32>,

    #[clap(long, allow_hyphen_values = true)]
    pub text_offset_x: Option<i32>,

    #[clap(long, allow_hyphen_values = true)]
    pub text_offset_y: Option<i32>,

    /// Directory the PNG is written to
    #[clap(short, long, default_value = ".")]
    pub output_dir: String,

    /// Additional directory to load fonts from (repeatable)
    #[clap(long)]
    pub font_dir: Vec<String>,

    /// Font file to register (repeatable)
    #[clap(long)]
    pub font_file: Vec<String>,

    /// Do not scan system fonts
    #[clap(long)]
    pub no_system_fonts: bool,

    /// Print the preset and swatch names and exit
    #[clap(long)]
    pub list_presets: bool,

    /// Print the final style model as JSON and exit without rendering
    #[clap(long)]
    pub print_config: bool,
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

fn list_presets() {
    println!("Presets:");
    for preset in PRESETS.iter() {
        println!("  {:<16} ({})", preset.name, preset.slug());
    }
    println!("Swatches:");
    for swatch in SWATCHES.iter() {
        println!("  {:<16} {}", swatch.name, swatch.color);
    }
}

/// Defaults, then config file, preset, swatch and individual flags.
fn build_model(args: &Args) -> anyhow::Result<StyleModel> {
    let mut model = match &args.config {
        Some(path) => {
            let path = expand(path);
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            serde_json::from_str::<StyleModel>(&text)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?
        }
        None => StyleModel::default(),
    };

    if let Some(name) = &args.preset {
        apply_preset(&mut model, find_preset(name)?);
    }
    if let Some(name) = &args.swatch {
        apply_swatch(&mut model, find_swatch(name)?);
    }

    if let Some(v) = args.diameter {
        model.diameter = v;
    }

    let fill = &mut model.fill;
    if let Some(v) = args.fill {
        fill.mode = v;
    }
    if let Some(v) = &args.fill_color {
        fill.solid_color = v.clone();
    }
    if let Some(v) = args.gradient {
        fill.gradient.kind = v;
    }
    if let Some(v) = &args.gradient_start {
        fill.gradient.color_start = v.clone();
    }
    if let Some(v) = &args.gradient_end {
        fill.gradient.color_end = v.clone();
    }
    if let Some(v) = args.gradient_angle {
        fill.gradient.angle_degrees = v;
    }
    if let Some(v) = args.opacity {
        fill.opacity_percent = v;
    }

    if let Some(v) = args.border_width {
        model.border.width_px = v;
    }
    if let Some(v) = &args.border_color {
        model.border.color = v.clone();
    }

    let shadow = &mut model.shadow;
    if let Some(v) = args.shadow_blur {
        shadow.blur_px = v;
    }
    if let Some(v) = args.shadow_x {
        shadow.offset_x = v;
    }
    if let Some(v) = args.shadow_y {
        shadow.offset_y = v;
    }
    if let Some(v) = &args.shadow_color {
        shadow.color = v.clone();
    }

    let text = &mut model.text;
    if let Some(v) = &args.text {
        text.enabled = true;
        text.content = v.clone();
    }
    if let Some(v) = &args.text_color {
        text.color = v.clone();
    }
    if let Some(v) = args.font_size {
        text.size_px = v;
    }
    if let Some(v) = args.font {
        text.font_family = v;
    }
    if let Some(v) = args.font_weight {
        text.weight = v;
    }
    if let Some(v) = args.text_position {
        text.position = v;
    }
    if let Some(v) = args.letter_spacing {
        text.letter_spacing_deg = v;
    }
    if let Some(v) = args.text_offset_x {
        text.offset_x = v;
    }
    if let Some(v) = args.text_offset_y {
        text.offset_y = v;
    }

    model.validate()?;
    Ok(model)
}

fn font_config(args: &Args) -> anyhow::Result<FontConfig> {
    let mut custom_fonts = Vec::new();
    for file in &args.font_file {
        let path = expand(file);
        let data = std::fs::read(&path)
            .with_context(|| format!("Failed to read font file {}", path.display()))?;
        custom_fonts.push(CustomFont {
            data: Arc::new(data),
        });
    }
    Ok(FontConfig {
        custom_fonts,
        load_system_fonts: !args.no_system_fonts,
        font_dirs: args.font_dir.iter().map(|d| expand(d)).collect(),
        ..FontConfig::default()
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args: Args = Args::parse();

    if args.list_presets {
        list_presets();
        return Ok(());
    }

    let model = build_model(&args)?;
    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&model)?);
        return Ok(());
    }

    let output_dir = expand(&args.output_dir);
    if !output_dir.is_dir() {
        bail!("Output directory does not exist: {}", output_dir.display());
    }

    let renderer = CircleRenderer::with_font_config(&font_config(&args)?);
    if model.text.is_visible() && !renderer.fonts().has_faces() {
        log::warn!("No fonts available; text will not be drawn");
    }

    let rendered = renderer.render(&model).context("Rendering failed")?;
    let png = export_png(&rendered).context("PNG encoding failed")?;
    let path = png
        .save_to(&output_dir)
        .with_context(|| format!("Failed to write PNG to {}", output_dir.display()))?;

    println!("{}", path.display());
    Ok(())
}
