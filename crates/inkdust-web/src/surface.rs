//! Canvas2D implementation of the drawing surface.

use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use inkdust::{AlphaMask, Error, Fill, Font, Result, Surface};

/// A `<canvas>` and its 2D context.
///
/// Every fill runs between `save()` and `restore()`, so colour, alpha and font
/// never leak from one draw call into the next.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| Error::surface("get_context", js_reason(e)))?
            .ok_or_else(|| Error::surface("get_context", "2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| Error::surface("get_context", "not a CanvasRenderingContext2d"))?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Position of the canvas on the page, for pointer translation.
    pub fn page_offset(&self) -> Vec2 {
        Vec2::new(self.canvas.offset_left() as f32, self.canvas.offset_top() as f32)
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx.clear_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Fill<'_>) -> Result<()> {
        self.ctx.save();
        self.ctx.set_fill_style_str(fill.color);
        self.ctx.set_global_alpha(fill.alpha as f64);
        self.ctx.begin_path();
        let drawn = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .map(|()| self.ctx.fill());
        self.ctx.restore();
        drawn.map_err(|e| Error::surface("arc", js_reason(e)))
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &Font, fill: Fill<'_>) -> Result<()> {
        self.ctx.save();
        self.ctx.set_font(&font.css);
        self.ctx.set_text_baseline("alphabetic");
        self.ctx.set_fill_style_str(fill.color);
        self.ctx.set_global_alpha(fill.alpha as f64);
        let drawn = self.ctx.fill_text(text, x as f64, y as f64);
        self.ctx.restore();
        drawn.map_err(|e| Error::surface("fill_text", js_reason(e)))
    }

    fn measure_text(&mut self, text: &str, font: &Font) -> Result<f32> {
        self.ctx.save();
        self.ctx.set_font(&font.css);
        let metrics = self.ctx.measure_text(text);
        self.ctx.restore();
        let metrics = metrics.map_err(|e| Error::surface("measure_text", js_reason(e)))?;
        Ok(metrics.width() as f32)
    }

    fn read_alpha(&self) -> Result<AlphaMask> {
        let (width, height) = (self.width(), self.height());
        // getImageData throws on an empty rectangle.
        if width == 0 || height == 0 {
            return Ok(AlphaMask::new(width, height, Vec::new()));
        }
        let image = self
            .ctx
            .get_image_data(0.0, 0.0, width as f64, height as f64)
            .map_err(|e| Error::surface("get_image_data", js_reason(e)))?;
        Ok(AlphaMask::from_rgba(width, height, &image.data().0))
    }
}

pub(crate) fn js_reason(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
