//! Per-tick orchestration of one field over two surfaces.
//!
//! The host calls [`Stage::tick`] from its animation-frame callback with a
//! monotonic millisecond timestamp. Input is queued between ticks and applied
//! at the start of the next one.

use crate::api::config::InkConfig;
use crate::api::error::Result;
use crate::core::time::FrameLimiter;
use crate::input::queue::{InputEvent, InputQueue, PointerTracker};
use crate::renderer::traits::{Fill, Surface};
use crate::systems::field::ParticleField;

pub struct Stage {
    config: InkConfig,
    limiter: FrameLimiter,
    field: ParticleField,
    input: InputQueue,
    pointer: PointerTracker,
    /// Frames admitted by the limiter so far.
    frames: u64,
}

impl Stage {
    /// Build a stage from a validated configuration.
    pub fn new(config: InkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            limiter: FrameLimiter::new(config.stage.fps),
            field: ParticleField::new(&config),
            input: InputQueue::new(),
            pointer: PointerTracker::new(),
            frames: 0,
            config,
        })
    }

    /// Queue an input event for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    pub fn input(&self) -> &InputQueue {
        &self.input
    }

    pub fn pointer_mut(&mut self) -> &mut PointerTracker {
        &mut self.pointer
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn config(&self) -> &InkConfig {
        &self.config
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one host tick. Returns whether the frame limiter admitted a frame.
    ///
    /// Admitted frames clear `surface` and either populate the field from
    /// `text_surface` or draw it. The field is updated on every tick.
    pub fn tick<T, S>(&mut self, now: f64, text_surface: &mut T, surface: &mut S) -> Result<bool>
    where
        T: Surface + ?Sized,
        S: Surface + ?Sized,
    {
        for event in self.input.drain() {
            match event {
                InputEvent::PointerMove { client_x, client_y } => {
                    self.pointer.move_to(client_x, client_y);
                }
                InputEvent::Resize { width, height } => {
                    log::debug!("resize to {width}x{height}");
                    surface.resize(width, height);
                    text_surface.resize(width, height);
                }
                InputEvent::Reset => self.field.reset(),
            }
        }

        let admitted = self.limiter.admit(now);
        if admitted {
            self.frames += 1;
            surface.clear();
            if self.field.is_populated() {
                self.field.draw(surface)?;
                self.draw_pointer(surface)?;
            } else {
                self.field.populate(text_surface, now)?;
            }
        }

        self.field.update(now, self.pointer.position());
        Ok(admitted)
    }

    fn draw_pointer<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        let pointer = &self.config.pointer;
        if !pointer.visible {
            return Ok(());
        }
        surface.fill_circle(self.pointer.position(), pointer.radius, Fill::opaque(&pointer.color))
    }
}
