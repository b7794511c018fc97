use circle_png_rs::{
    canvas_side, export_png, export_png_at, find_preset, CircleRenderer, FillMode, FontConfig,
    GradientKind, StyleModel, TextPosition,
};
use rstest::rstest;
use std::sync::OnceLock;

/// Renderer without fonts, for everything that does not draw text.
fn renderer() -> &'static CircleRenderer {
    static RENDERER: OnceLock<CircleRenderer> = OnceLock::new();
    RENDERER.get_or_init(|| {
        CircleRenderer::with_font_config(&FontConfig {
            load_system_fonts: false,
            ..FontConfig::default()
        })
    })
}

fn system_renderer() -> &'static CircleRenderer {
    static RENDERER: OnceLock<CircleRenderer> = OnceLock::new();
    RENDERER.get_or_init(CircleRenderer::new)
}

macro_rules! skip_if_no_fonts {
    () => {
        if !system_renderer().fonts().has_faces() {
            eprintln!("Skipping test: no system fonts available");
            return;
        }
    };
}

fn preset_model(name: &str) -> StyleModel {
    StyleModel::default().with_preset(find_preset(name).unwrap())
}

#[rstest]
#[case("Solid Red")]
#[case("Sunset Radial")]
#[case("Neon Pink")]
#[case("Purple Fade")]
fn test_render_is_deterministic(#[case] preset: &str) {
    let model = preset_model(preset);
    let first = export_png_at(&renderer().render(&model).unwrap(), 42).unwrap();
    let second = export_png_at(&renderer().render(&model).unwrap(), 42).unwrap();
    assert_eq!(first, second);
}

#[rstest]
#[case(StyleModel::default())]
#[case(preset_model("Green Ring"))]
#[case(preset_model("Black Outline"))]
#[case(preset_model("Ocean Gradient"))]
fn test_canvas_matches_side_formula(#[case] model: StyleModel) {
    let rendered = renderer().render(&model).unwrap();
    assert_eq!(rendered.side(), canvas_side(&model));
}

#[rstest]
#[case(StyleModel::default())]
#[case(preset_model("Green Ring"))]
#[case(preset_model("Black Outline"))]
fn test_no_bleed_without_blur(#[case] mut model: StyleModel) {
    model.shadow.offset_x = 20;
    model.shadow.offset_y = -20;
    let rendered = renderer().render(&model).unwrap();
    let side = rendered.side();
    let c = side as f32 / 2.0;
    // one pixel of slack for anti-aliased edges
    let limit = model.diameter as f32 / 2.0 + model.border.width_px as f32 / 2.0 + 1.0;

    for y in 0..side {
        for x in 0..side {
            let dist = ((x as f32 + 0.5 - c).powi(2) + (y as f32 + 0.5 - c).powi(2)).sqrt();
            if dist > limit {
                assert_eq!(rendered.pixel(x, y)[3], 0, "bleed at ({x}, {y})");
            }
        }
    }
}

#[rstest]
#[case(FillMode::Solid, 100)]
#[case(FillMode::Solid, 80)]
#[case(FillMode::Solid, 50)]
#[case(FillMode::Solid, 0)]
#[case(FillMode::Gradient, 100)]
#[case(FillMode::Gradient, 50)]
#[case(FillMode::Gradient, 25)]
fn test_opacity_is_linear(#[case] mode: FillMode, #[case] percent: u8) {
    let mut model = StyleModel::default();
    model.fill.mode = mode;
    model.fill.opacity_percent = percent;
    let rendered = renderer().render(&model).unwrap();

    let c = rendered.side() / 2;
    let alpha = rendered.pixel(c, c)[3] as f32;
    let expected = percent as f32 / 100.0 * 255.0;
    assert!((alpha - expected).abs() <= 1.0, "alpha {alpha} expected {expected}");
}

#[test]
fn test_opacity_does_not_touch_border() {
    let mut model = preset_model("Transparent");
    model.border.width_px = 10;
    model.border.color = "#000000".to_string();
    let rendered = renderer().render(&model).unwrap();
    let c = rendered.side() / 2;

    assert_eq!(rendered.pixel(c + 150, c), [0, 0, 0, 255]);
    assert!(rendered.pixel(c, c)[3] < 130);
}

#[test]
fn test_green_ring() {
    let rendered = renderer().render(&preset_model("green-ring")).unwrap();
    assert_eq!(rendered.side(), 416);
    let c = rendered.side() / 2;

    // Transparent interior
    assert_eq!(rendered.pixel(c, c)[3], 0);
    assert_eq!(rendered.pixel(c + 140, c)[3], 0);
    assert_eq!(rendered.pixel(c, c - 140)[3], 0);

    // 8px ring straddling the edge
    for dx in [147, 149, 151] {
        assert_eq!(rendered.pixel(c + dx, c), [0x51, 0xcf, 0x66, 255], "dx={dx}");
        assert_eq!(rendered.pixel(c - dx - 1, c), [0x51, 0xcf, 0x66, 255], "dx={dx}");
    }
    assert_eq!(rendered.pixel(c + 156, c)[3], 0);
}

#[test]
fn test_zero_border_is_invisible() {
    let mut plain = StyleModel::default();
    plain.border.color = "#000000".to_string();
    let mut colored = plain.clone();
    colored.border.color = "#ff00ff".to_string();

    let a = renderer().render(&plain).unwrap();
    let b = renderer().render(&colored).unwrap();
    assert_eq!(a.image_data(), b.image_data());
}

#[test]
fn test_drop_shadow_falls_outside_circle() {
    let model = preset_model("Drop Shadow");
    let rendered = renderer().render(&model).unwrap();
    assert_eq!(rendered.side(), 300 + 30 + 10 + 100);
    let c = rendered.side() / 2;

    // Below the circle, where the shadow is offset towards
    let below = rendered.pixel(c, c + 153);
    assert!(below[3] > 20, "{below:?}");
    assert!(below[0] < 10 && below[1] < 10 && below[2] < 10, "{below:?}");

    // The fill itself stays on top
    assert_eq!(rendered.pixel(c, c), [0x97, 0x75, 0xfa, 255]);
}

#[test]
fn test_glow_is_symmetric() {
    let rendered = renderer().render(&preset_model("Glow Effect")).unwrap();
    let c = rendered.side() / 2;
    let right = rendered.pixel(c + 155, c)[3];
    let left = rendered.pixel(c - 156, c)[3];
    assert!(right > 0);
    assert!((right as i32 - left as i32).abs() <= 2, "{right} vs {left}");
}

#[test]
fn test_png_decodes_to_same_pixels() {
    let mut model = preset_model("Fire Radial");
    model.fill.gradient.kind = GradientKind::Radial;
    let rendered = renderer().render(&model).unwrap();
    let png = export_png(&rendered).unwrap();

    let decoded = image::load_from_memory(&png.bytes).unwrap().to_rgba8();
    assert_eq!(decoded.width(), rendered.side());
    assert_eq!(decoded.height(), rendered.side());
    assert_eq!(decoded.into_raw(), rendered.image_data());
}

fn millis_of(filename: &str, diameter: u32) -> u64 {
    let prefix = format!("circle-png-{diameter}px-");
    let digits = filename
        .strip_prefix(&prefix)
        .and_then(|rest| rest.strip_suffix(".png"))
        .unwrap_or_else(|| panic!("unexpected filename {filename}"));
    assert!(!digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()));
    digits.parse().unwrap()
}

#[test]
fn test_filenames_increase() {
    let rendered = renderer().render(&StyleModel::default()).unwrap();
    let first = export_png(&rendered).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(5));
    let second = export_png(&rendered).unwrap();

    assert!(millis_of(&second.filename, 300) > millis_of(&first.filename, 300));
}

#[test]
fn test_save_to_dir() {
    let dir = tempfile::tempdir().unwrap();
    let rendered = renderer().render(&preset_model("Blue Gradient")).unwrap();
    let path = export_png_at(&rendered, 7).unwrap().save_to(dir.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), "circle-png-300px-7.png");
    let decoded = image::open(&path).unwrap();
    assert_eq!(decoded.width(), 400);
}

fn ink(model: &StyleModel) -> u64 {
    let rendered = system_renderer().render(model).unwrap();
    let base = {
        let mut plain = model.clone();
        plain.text.enabled = false;
        system_renderer().render(&plain).unwrap()
    };
    rendered
        .image_data()
        .chunks(4)
        .zip(base.image_data().chunks(4))
        .map(|(a, b)| a.iter().zip(b).map(|(x, y)| x.abs_diff(*y) as u64).sum::<u64>())
        .sum()
}

#[rstest]
#[case(TextPosition::Top)]
#[case(TextPosition::Center)]
#[case(TextPosition::Bottom)]
#[case(TextPosition::Curved)]
fn test_text_is_painted(#[case] position: TextPosition) {
    skip_if_no_fonts!();
    let mut model = StyleModel::default();
    model.text.enabled = true;
    model.text.position = position;
    assert!(ink(&model) > 0, "no text drawn at {position}");
}

#[test]
fn test_empty_curved_text_draws_nothing() {
    skip_if_no_fonts!();
    let mut model = StyleModel::default();
    model.text.enabled = true;
    model.text.content.clear();
    model.text.position = TextPosition::Curved;
    assert_eq!(ink(&model), 0);
}

/// Bounding box (min x, min y, max x, max y) of the pixels the text changed.
fn ink_bounds(model: &StyleModel) -> Option<(u32, u32, u32, u32)> {
    let rendered = system_renderer().render(model).unwrap();
    let mut plain = model.clone();
    plain.text.enabled = false;
    let base = system_renderer().render(&plain).unwrap();

    let side = rendered.side();
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for y in 0..side {
        for x in 0..side {
            if rendered.pixel(x, y) == base.pixel(x, y) {
                continue;
            }
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }
    }
    bounds
}

fn curved_model() -> StyleModel {
    let mut model = StyleModel::default();
    model.text.enabled = true;
    model.text.position = TextPosition::Curved;
    model.text.content = "AROUND THE CIRCLE".to_string();
    model
}

#[test]
fn test_curved_text_follows_offset_x() {
    skip_if_no_fonts!();
    let base = ink_bounds(&curved_model()).unwrap();

    let mut shifted = curved_model();
    shifted.text.offset_x = 40;
    let (x0, y0, x1, y1) = ink_bounds(&shifted).unwrap();

    assert!(x0.abs_diff(base.0 + 40) <= 1, "{:?} vs {:?}", (x0, x1), base);
    assert!(x1.abs_diff(base.2 + 40) <= 1, "{:?} vs {:?}", (x0, x1), base);
    assert!(y0.abs_diff(base.1) <= 1 && y1.abs_diff(base.3) <= 1);
}

#[test]
fn test_curved_text_ignores_offset_y() {
    skip_if_no_fonts!();
    let model = curved_model();
    let mut shifted = curved_model();
    shifted.text.offset_y = 40;

    let a = system_renderer().render(&model).unwrap();
    let b = system_renderer().render(&shifted).unwrap();
    assert_eq!(a.image_data(), b.image_data());
}

fn shadowed_text_model() -> StyleModel {
    let mut model = preset_model("Drop Shadow");
    model.fill.opacity_percent = 40;
    model.text.enabled = true;
    model.text.content = "II".to_string();
    model.text.size_px = 120;
    model.text.color = "#000000".to_string();
    model
}

#[test]
fn test_text_has_no_fill_opacity() {
    skip_if_no_fonts!();
    let rendered = system_renderer().render(&shadowed_text_model()).unwrap();

    // Some text pixel is fully opaque black even though the fill is at 40%
    let opaque_black = rendered
        .image_data()
        .chunks(4)
        .any(|p| p == [0, 0, 0, 255]);
    assert!(opaque_black);
}

#[test]
fn test_text_has_no_shadow() {
    skip_if_no_fonts!();
    let model = shadowed_text_model();
    let mut unshadowed = model.clone();
    unshadowed.shadow.blur_px = 0;

    // Without blur the canvas is smaller, so compare relative to its center.
    let centered = |model: &StyleModel| {
        let half = (canvas_side(model) / 2) as i64;
        let (x0, y0, x1, y1) = ink_bounds(model).unwrap();
        [x0, y0, x1, y1].map(|v| v as i64 - half)
    };

    // A text shadow at (5, 5) with blur 15 would spread the changed area
    // well past the glyphs to the right and below.
    let glyphs = centered(&unshadowed);
    let shadowed = centered(&model);
    for (got, want) in shadowed.iter().zip(&glyphs) {
        assert!((got - want).abs() <= 1, "{shadowed:?} vs {glyphs:?}");
    }
}
