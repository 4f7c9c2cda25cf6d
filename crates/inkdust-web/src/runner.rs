use inkdust::{InkConfig, InputEvent, Result, Stage};
use web_sys::HtmlCanvasElement;

use crate::surface::CanvasSurface;

/// Owns the stage and both canvases for the page.
///
/// The page keeps one runner in a `thread_local!` and forwards animation
/// frames and pointer events to it through the `#[wasm_bindgen]` exports.
pub struct FieldRunner {
    stage: Stage,
    text: CanvasSurface,
    canvas: CanvasSurface,
}

impl FieldRunner {
    pub fn new(
        config: InkConfig,
        text_canvas: HtmlCanvasElement,
        canvas: HtmlCanvasElement,
    ) -> Result<Self> {
        let mut stage = Stage::new(config)?;
        let canvas = CanvasSurface::new(canvas)?;
        stage.pointer_mut().set_offset(canvas.page_offset());
        Ok(Self {
            stage,
            text: CanvasSurface::new(text_canvas)?,
            canvas,
        })
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.stage.push_input(event);
    }

    /// Run one animation frame. Surface failures are logged, not raised,
    /// so one bad frame does not stop the loop.
    pub fn tick(&mut self, now: f64) {
        if let Err(err) = self.stage.tick(now, &mut self.text, &mut self.canvas) {
            log::error!("frame at {now:.1} ms failed: {err}");
        }
    }

    /// Re-read the canvas position after layout changes.
    pub fn refresh_offset(&mut self) {
        let offset = self.canvas.page_offset();
        self.stage.pointer_mut().set_offset(offset);
    }

    pub fn set_offset(&mut self, x: f32, y: f32) {
        self.stage.pointer_mut().set_offset(glam::Vec2::new(x, y));
    }

    pub fn particle_count(&self) -> u32 {
        self.stage.field().len() as u32
    }

    pub fn generation(&self) -> u32 {
        self.stage.field().generation() as u32
    }
}
