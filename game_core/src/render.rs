//! Presentation contract
//!
//! The simulation hands a [`Frame`] copy to a [`Presenter`] once per frame.
//! [`draw_commands`] turns a frame into an ordered, host-agnostic draw list
//! so every presenter draws the same picture.

use crate::{Ball, Field, Paddle, Params, Score};

/// Read-only snapshot of everything a presenter needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub field: Field,
    pub human: Paddle,
    pub heuristic: Paddle,
    pub ball: Ball,
    pub paused: bool,
}

impl Frame {
    pub fn scores(&self) -> Score {
        Score {
            human: self.human.score,
            heuristic: self.heuristic.score,
        }
    }
}

/// Draws a frame. Has no access to simulation state beyond the snapshot.
pub trait Presenter {
    fn present(&mut self, frame: &Frame);
}

impl<F: FnMut(&Frame)> Presenter for F {
    fn present(&mut self, frame: &Frame) {
        self(frame)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
    /// Translucent black laid over the field while paused
    Shade,
}

impl Color {
    /// CSS colour string for canvas fill styles
    pub fn css(self) -> &'static str {
        match self {
            Color::Black => "BLACK",
            Color::White => "WHITE",
            Color::Shade => "rgba(0, 0, 0, 0.7)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size_px: u32,
        align: TextAlign,
        color: Color,
    },
}

pub const SCORE_FONT_PX: u32 = 45;
pub const PAUSE_TITLE_FONT_PX: u32 = 60;
pub const PAUSE_HINT_FONT_PX: u32 = 25;

/// Build the draw list for a frame, back to front
pub fn draw_commands(frame: &Frame) -> Vec<DrawCommand> {
    let field = frame.field;
    let mut commands = Vec::new();

    // Clear
    commands.push(DrawCommand::Rect {
        x: 0.0,
        y: 0.0,
        width: field.width,
        height: field.height,
        color: Color::Black,
    });

    // Net: one dash every NET_SPACING, the last starting at or above the bottom edge
    let dashes = (field.height / Params::NET_SPACING).floor() as u32;
    for i in 0..=dashes {
        commands.push(DrawCommand::Rect {
            x: field.net_x(),
            y: i as f32 * Params::NET_SPACING,
            width: Params::NET_WIDTH,
            height: Params::NET_DASH,
            color: Color::White,
        });
    }

    // Scores
    let scores = frame.scores();
    for (score, x) in [
        (scores.human, field.width / 4.0),
        (scores.heuristic, 3.0 * field.width / 4.0),
    ] {
        commands.push(DrawCommand::Text {
            text: score.to_string(),
            x,
            y: field.height / 5.0,
            size_px: SCORE_FONT_PX,
            align: TextAlign::Left,
            color: Color::White,
        });
    }

    for paddle in [&frame.human, &frame.heuristic] {
        commands.push(DrawCommand::Rect {
            x: paddle.x,
            y: paddle.y,
            width: paddle.width,
            height: paddle.height,
            color: Color::White,
        });
    }

    commands.push(DrawCommand::Circle {
        x: frame.ball.pos.x,
        y: frame.ball.pos.y,
        radius: frame.ball.radius,
        color: Color::White,
    });

    if frame.paused {
        push_pause_overlay(&mut commands, &field);
    }

    commands
}

fn push_pause_overlay(commands: &mut Vec<DrawCommand>, field: &Field) {
    let center = field.center();

    commands.push(DrawCommand::Rect {
        x: 0.0,
        y: 0.0,
        width: field.width,
        height: field.height,
        color: Color::Shade,
    });
    commands.push(DrawCommand::Text {
        text: "PAUSED".to_string(),
        x: center.x,
        y: center.y - 20.0,
        size_px: PAUSE_TITLE_FONT_PX,
        align: TextAlign::Center,
        color: Color::White,
    });
    commands.push(DrawCommand::Text {
        text: "Press SPACE to resume".to_string(),
        x: center.x,
        y: center.y + 30.0,
        size_px: PAUSE_HINT_FONT_PX,
        align: TextAlign::Center,
        color: Color::White,
    });
}
