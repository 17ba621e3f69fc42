use glam::Vec2;

use crate::{Controller, Params};

/// Playing field bounds. The origin is the top-left corner, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Ball spawn position (field centre)
    pub fn ball_spawn(&self) -> Vec2 {
        self.center()
    }

    /// The paddle the ball is heading into, judged by which half it is in
    pub fn side_of(&self, x: f32) -> Controller {
        if x < self.width / 2.0 {
            Controller::Human
        } else {
            Controller::Heuristic
        }
    }

    /// Left edge of the net dashes
    pub fn net_x(&self) -> f32 {
        self.width / 2.0 - Params::NET_WIDTH / 2.0
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(Params::FIELD_WIDTH, Params::FIELD_HEIGHT)
    }
}
