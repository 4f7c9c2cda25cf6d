use glam::Vec2;

/// Far enough from any canvas that no particle can reach it.
pub const OFFSCREEN: Vec2 = Vec2::new(-1.0e6, -1.0e6);

/// Input event types the stage understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer (mouse or first touch) moved, in page/client coordinates.
    PointerMove { client_x: f32, client_y: f32 },
    /// Both canvases changed size.
    Resize { width: u32, height: u32 },
    /// Drop the current phrase and sample a new one on the next frame.
    Reset,
}

/// A queue of input events.
/// The host pushes events as they arrive; the stage drains them once per tick.
#[derive(Debug, Clone)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks the pointer in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerTracker {
    /// Canvas position on the page.
    offset: Vec2,
    position: Vec2,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            offset: Vec2::ZERO,
            position: OFFSCREEN,
        }
    }

    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Record a move given in client coordinates.
    pub fn move_to(&mut self, client_x: f32, client_y: f32) {
        self.position = Vec2::new(client_x, client_y) - self.offset;
    }

    /// Last local position, [`OFFSCREEN`] before the first move.
    pub fn position(&self) -> Vec2 {
        self.position
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}
