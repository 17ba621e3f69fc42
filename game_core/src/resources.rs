/// Running score, read from the paddles after each tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub human: u32,     // Left paddle
    pub heuristic: u32, // Right paddle
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub human_scored: bool,
    pub heuristic_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.human_scored = false;
        self.heuristic_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn scored(&self) -> bool {
        self.human_scored || self.heuristic_scored
    }
}

/// Input from the host, applied at the start of the next frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer position relative to the top of the drawing surface
    PointerMove { y: f32 },
    TogglePause,
}

/// Inbound input queue, drained once per frame in arrival order
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn push(&mut self, event: InputEvent) {
        self.inputs.push(event);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, InputEvent> {
        self.inputs.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}
