/// Pointer button codes, as reported by `MouseEvent.button`.
pub const BUTTON_PRIMARY: u32 = 0;
pub const BUTTON_SECONDARY: u32 = 2;

/// Input event types the engine understands.
/// Coordinates are CSS pixels relative to the canvas' top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A mouse button or touch went down.
    PointerDown { x: f32, y: f32, button: u32 },
    /// A mouse button or touch was released.
    PointerUp { x: f32, y: f32, button: u32 },
    /// The cursor or touch point moved.
    PointerMove { x: f32, y: f32 },
    /// Mouse wheel / trackpad scroll. Positive = away from the user (zoom out).
    Wheel { delta_y: f32 },
    /// A completed click.
    Click { x: f32, y: f32 },
    /// A touch sequence began.
    TouchStart { x: f32, y: f32 },
}

impl InputEvent {
    /// True for events that count as a user gesture for audio unlock.
    pub fn is_gesture(&self) -> bool {
        matches!(self, InputEvent::Click { .. } | InputEvent::TouchStart { .. })
    }
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and drains them each frame.
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
