//! Software alpha-only surface.
//!
//! Keeps one coverage byte per pixel and ignores colour, which is all the
//! sampler needs. Text uses a block face: every visible glyph is a solid box
//! sitting on the baseline, so phrases rasterize deterministically with no
//! font files.

use glam::Vec2;

use super::traits::{AlphaMask, Fill, Font, Surface};
use crate::api::error::Result;

/// Horizontal advance as a fraction of the font size.
pub const BLOCK_ADVANCE: f32 = 0.55;
/// Share of the advance covered by the glyph box; the rest is spacing.
pub const BLOCK_INK_WIDTH: f32 = 0.8;
/// Glyph box height as a fraction of the font size (cap height).
pub const BLOCK_CAP_HEIGHT: f32 = 0.7;

#[derive(Debug, Clone)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    alpha: Vec<u8>,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            alpha: vec![0; width as usize * height as usize],
        }
    }

    /// Coverage at (x, y), 0 when out of bounds.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.alpha[(y * self.width + x) as usize]
    }

    /// Number of pixels with any coverage.
    pub fn inked_pixels(&self) -> usize {
        self.alpha.iter().filter(|&&a| a > 0).count()
    }

    /// Pixel range whose centres fall in [lo, hi), clamped to `limit`.
    fn span(lo: f32, hi: f32, limit: u32) -> std::ops::Range<u32> {
        let start = (lo - 0.5).ceil().max(0.0);
        let end = (hi - 0.5).ceil().max(0.0);
        let start = (start as u32).min(limit);
        let end = (end as u32).min(limit);
        start..end.max(start)
    }

    /// Source-over composite of `src` coverage onto one pixel.
    fn blend(&mut self, x: u32, y: u32, src: f32) {
        let idx = (y * self.width + x) as usize;
        let dst = self.alpha[idx] as f32 / 255.0;
        let out = src + dst * (1.0 - src);
        self.alpha[idx] = (out * 255.0).round().clamp(0.0, 255.0) as u8;
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, src: f32) {
        for py in Self::span(y, y + h, self.height) {
            for px in Self::span(x, x + w, self.width) {
                self.blend(px, py, src);
            }
        }
    }
}

impl Surface for RasterSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.alpha.clear();
        self.alpha.resize(width as usize * height as usize, 0);
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        for py in Self::span(y, y + height, self.height) {
            for px in Self::span(x, x + width, self.width) {
                self.alpha[(py * self.width + px) as usize] = 0;
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Fill<'_>) -> Result<()> {
        let src = fill.alpha.clamp(0.0, 1.0);
        if radius <= 0.0 || src == 0.0 {
            return Ok(());
        }
        let r2 = radius * radius;
        for py in Self::span(center.y - radius, center.y + radius, self.height) {
            for px in Self::span(center.x - radius, center.x + radius, self.width) {
                let d = Vec2::new(px as f32 + 0.5, py as f32 + 0.5) - center;
                if d.length_squared() <= r2 {
                    self.blend(px, py, src);
                }
            }
        }
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &Font, fill: Fill<'_>) -> Result<()> {
        let src = fill.alpha.clamp(0.0, 1.0);
        let advance = font.size * BLOCK_ADVANCE;
        let cap = font.size * BLOCK_CAP_HEIGHT;
        let mut cursor = x;
        for c in text.chars() {
            if !c.is_whitespace() {
                self.fill_rect(cursor, y - cap, advance * BLOCK_INK_WIDTH, cap, src);
            }
            // Whitespace still advances the cursor.
            cursor += advance;
        }
        Ok(())
    }

    fn measure_text(&mut self, text: &str, font: &Font) -> Result<f32> {
        Ok(text.chars().count() as f32 * font.size * BLOCK_ADVANCE)
    }

    fn read_alpha(&self) -> Result<AlphaMask> {
        Ok(AlphaMask::new(self.width, self.height, self.alpha.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font(size: f32) -> Font {
        Font { size, css: format!("{size}px block") }
    }

    #[test]
    fn circle_covers_pixel_centres_inside_radius() {
        let mut s = RasterSurface::new(10, 10);
        s.fill_circle(Vec2::new(5.0, 5.0), 1.0, Fill::opaque("black")).unwrap();
        // Centres (4.5,4.5) (5.5,4.5) (4.5,5.5) (5.5,5.5) sit ~0.71 from (5,5).
        assert_eq!(s.inked_pixels(), 4);
        assert_eq!(s.alpha_at(4, 4), 255);
        assert_eq!(s.alpha_at(6, 5), 0);
    }

    #[test]
    fn partial_alpha_composites_source_over() {
        let mut s = RasterSurface::new(4, 4);
        let quarter = Fill { color: "black", alpha: 0.25 };
        s.fill_circle(Vec2::new(2.0, 2.0), 3.0, quarter).unwrap();
        assert_eq!(s.alpha_at(1, 1), 64);
        s.fill_circle(Vec2::new(2.0, 2.0), 3.0, quarter).unwrap();
        // 0.25 + (64 / 255) * 0.75
        assert_eq!(s.alpha_at(1, 1), 112);
    }

    #[test]
    fn text_boxes_sit_on_the_baseline() {
        let mut s = RasterSurface::new(40, 20);
        s.fill_text("I", 0.0, 10.0, &font(10.0), Fill::opaque("black")).unwrap();
        // Box: x in [0, 4.4), y in [3, 10).
        assert_eq!(s.alpha_at(0, 3), 255);
        assert_eq!(s.alpha_at(3, 9), 255);
        assert_eq!(s.alpha_at(0, 2), 0);
        assert_eq!(s.alpha_at(0, 10), 0);
        assert_eq!(s.alpha_at(5, 5), 0);
    }

    #[test]
    fn whitespace_advances_without_ink() {
        let mut a = RasterSurface::new(40, 20);
        let mut b = RasterSurface::new(40, 20);
        a.fill_text("a b", 0.0, 20.0, &font(20.0), Fill::opaque("black")).unwrap();
        b.fill_text("ab", 0.0, 20.0, &font(20.0), Fill::opaque("black")).unwrap();
        assert_eq!(a.inked_pixels(), b.inked_pixels());
        assert_eq!(a.measure_text("a b", &font(20.0)).unwrap(), 33.0);
    }

    #[test]
    fn clear_and_resize_reset_coverage() {
        let mut s = RasterSurface::new(8, 8);
        s.fill_circle(Vec2::new(4.0, 4.0), 3.0, Fill::opaque("black")).unwrap();
        assert!(s.inked_pixels() > 0);
        s.clear();
        assert_eq!(s.inked_pixels(), 0);

        s.fill_circle(Vec2::new(4.0, 4.0), 3.0, Fill::opaque("black")).unwrap();
        s.resize(16, 4);
        assert_eq!((s.width(), s.height()), (16, 4));
        assert_eq!(s.inked_pixels(), 0);
    }

    #[test]
    fn drawing_off_surface_is_clipped() {
        let mut s = RasterSurface::new(4, 4);
        s.fill_circle(Vec2::new(-50.0, -50.0), 10.0, Fill::opaque("black")).unwrap();
        s.fill_text("far", 100.0, 100.0, &font(10.0), Fill::opaque("black")).unwrap();
        assert_eq!(s.inked_pixels(), 0);
    }
}
