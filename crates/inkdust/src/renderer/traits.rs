//! Drawing-surface contract.
//!
//! The engine never talks to a canvas directly. Two surfaces are in play:
//! the text surface (glyphs are rasterized there and read back, never shown)
//! and the particle surface (what the viewer sees). Backends implement
//! [`Surface`]: the software [`RasterSurface`](super::raster::RasterSurface)
//! for headless runs and tests, and a Canvas2D surface in the web bridge.

use glam::Vec2;

use crate::api::config::TextConfig;
use crate::api::error::Result;

/// Fill parameters for a single draw call.
///
/// Backends apply them for that call only; nothing carries over to the next one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill<'a> {
    /// CSS colour string.
    pub color: &'a str,
    /// Global alpha in [0, 1].
    pub alpha: f32,
}

impl<'a> Fill<'a> {
    pub fn opaque(color: &'a str) -> Self {
        Self { color, alpha: 1.0 }
    }
}

/// Font used for text rasterization.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// Pixel size (em height).
    pub size: f32,
    /// CSS font shorthand for backends that take one, e.g. `Bold 75px Arial`.
    pub css: String,
}

impl Font {
    pub fn from_config(text: &TextConfig) -> Self {
        Self {
            size: text.font_size,
            css: text.css_font(),
        }
    }
}

/// Read-back of a surface's alpha channel, row-major, one byte per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaMask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl AlphaMask {
    /// Wrap alpha bytes. Missing bytes read as transparent, extra bytes are ignored.
    pub fn new(width: u32, height: u32, mut data: Vec<u8>) -> Self {
        data.resize(width as usize * height as usize, 0);
        Self { width, height, data }
    }

    /// Extract the alpha channel from RGBA8 pixels (what a canvas hands back).
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Self {
        let data = rgba.chunks_exact(4).map(|px| px[3]).collect();
        Self::new(width, height, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Alpha at (x, y); out-of-bounds reads are transparent.
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.data[(y * self.width + x) as usize]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

/// A 2D drawing surface with read-back.
pub trait Surface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Change the backing size. Contents are discarded.
    fn resize(&mut self, width: u32, height: u32);

    /// Make a rectangle fully transparent.
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Make the whole surface transparent.
    fn clear(&mut self) {
        let (w, h) = (self.width() as f32, self.height() as f32);
        self.clear_rect(0.0, 0.0, w, h);
    }

    /// Fill a circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Fill<'_>) -> Result<()>;

    /// Fill `text` with its left end at `x` and its alphabetic baseline at `y`.
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &Font, fill: Fill<'_>) -> Result<()>;

    /// Advance width of `text` in pixels.
    fn measure_text(&mut self, text: &str, font: &Font) -> Result<f32>;

    /// Read back the alpha channel of the whole surface.
    fn read_alpha(&self) -> Result<AlphaMask>;
}
