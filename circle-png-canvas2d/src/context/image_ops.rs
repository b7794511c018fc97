//! Pixel data and PNG output operations for Canvas2dContext.

use super::Canvas2dContext;
use crate::error::Canvas2dResult;

impl Canvas2dContext {
    /// Straight-alpha RGBA for the `width`x`height` rectangle at (x, y).
    /// The rectangle may extend past the surface; those pixels read as 0.
    pub fn get_image_data(&self, x: i32, y: i32, width: u32, height: u32) -> Vec<u8> {
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for row in 0..height as i64 {
            for col in 0..width as i64 {
                let (px, py) = (x as i64 + col, y as i64 + row);
                let rgba = match (u32::try_from(px), u32::try_from(py)) {
                    (Ok(px), Ok(py)) => self.pixel(px, py),
                    _ => [0; 4],
                };
                data.extend_from_slice(&rgba);
            }
        }
        data
    }

    /// Straight-alpha `[r, g, b, a]` at (x, y); zero outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        // Pixmap::pixel only bounds-checks the flat index, so x past the
        // right edge would read the next row.
        if x >= self.width() || y >= self.height() {
            return [0; 4];
        }
        self.pixmap
            .pixel(x, y)
            .map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .unwrap_or_default()
    }

    /// 8-bit straight-alpha RGBA PNG of the whole surface.
    pub fn to_png(&self) -> Canvas2dResult<Vec<u8>> {
        let (width, height) = (self.width(), self.height());
        let rgba = self.get_image_data(0, 0, width, height);

        let mut out = Vec::new();
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&rgba)?;
        writer.finish()?;

        log::debug!(target: "canvas", "png {}x{}: {} bytes", width, height, out.len());
        Ok(out)
    }
}
