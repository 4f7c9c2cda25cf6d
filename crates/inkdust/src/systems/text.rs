//! Text-to-anchor sampling.
//!
//! A phrase is rasterized onto a scratch surface, the alpha channel is read
//! back, and every grid point with ink becomes a particle anchor. The surface
//! is left clear afterwards so it never shows through.

use glam::Vec2;

use crate::api::config::TextConfig;
use crate::api::error::Result;
use crate::renderer::traits::{Fill, Font, Surface};

/// Colour the phrase is rasterized in. Only its alpha matters.
const INK: &str = "black";

/// Where one line of a phrase is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePlacement {
    /// Left end of the line.
    pub x: f32,
    /// Alphabetic baseline.
    pub baseline: f32,
}

/// Rasterizes phrases and samples their ink on a fixed grid.
#[derive(Debug, Clone)]
pub struct TextSampler {
    font: Font,
    line_height: f32,
    /// Grid stride in pixels, at least 1.
    density: u32,
}

impl TextSampler {
    pub fn new(font: Font, line_height: f32, density: u32) -> Self {
        Self {
            font,
            line_height,
            density: density.max(1),
        }
    }

    pub fn from_config(text: &TextConfig, density: u32) -> Self {
        Self::new(Font::from_config(text), text.line_height(), density)
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn density(&self) -> u32 {
        self.density
    }

    /// Center every line horizontally and the whole block vertically.
    ///
    /// The block is `line_height × lines` tall; line `i` sits one font size
    /// below the top of its slot.
    pub fn layout<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        lines: &[String],
    ) -> Result<Vec<LinePlacement>> {
        let width = surface.width() as f32;
        let height = surface.height() as f32;
        let top = (height - self.line_height * lines.len() as f32) / 2.0;

        let mut placements = Vec::with_capacity(lines.len());
        for (i, line) in lines.iter().enumerate() {
            let advance = surface.measure_text(line, &self.font)?;
            placements.push(LinePlacement {
                x: (width - advance) / 2.0,
                baseline: top + self.line_height * i as f32 + self.font.size,
            });
        }
        Ok(placements)
    }

    /// Rasterize `lines` onto `surface` and return the inked grid points,
    /// row by row from the top-left corner.
    ///
    /// The surface is cleared before drawing and again before returning.
    pub fn sample<S: Surface + ?Sized>(&self, surface: &mut S, lines: &[String]) -> Result<Vec<Vec2>> {
        surface.clear();

        let placements = self.layout(surface, lines)?;
        for (line, at) in lines.iter().zip(&placements) {
            if line.trim().is_empty() {
                continue;
            }
            surface.fill_text(line, at.x, at.baseline, &self.font, Fill::opaque(INK))?;
        }

        let mask = surface.read_alpha();
        surface.clear();
        let mask = mask?;

        let step = self.density as usize;
        let mut anchors = Vec::new();
        for y in (0..mask.height()).step_by(step) {
            for x in (0..mask.width()).step_by(step) {
                if mask.alpha(x, y) > 0 {
                    anchors.push(Vec2::new(x as f32, y as f32));
                }
            }
        }

        log::debug!(
            "sampled {} anchors from {} line(s) at stride {}",
            anchors.len(),
            lines.len(),
            self.density
        );
        Ok(anchors)
    }
}
