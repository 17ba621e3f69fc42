use glam::Vec2;

use crate::geometry::Aabb;

/// Who drives a paddle's vertical position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Controller {
    Human,     // Left side, follows the pointer
    Heuristic, // Right side, tracks the ball
}

impl Controller {
    /// Horizontal direction the ball leaves in after hitting this paddle
    pub fn return_direction(self) -> f32 {
        match self {
            Controller::Human => 1.0,
            Controller::Heuristic => -1.0,
        }
    }
}

/// Paddle component - `x`/`y` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub controller: Controller,
    pub x: f32, // Fixed per side
    pub y: f32, // Never clamped to the field
    pub width: f32,
    pub height: f32,
    pub score: u32,
}

impl Paddle {
    pub fn new(controller: Controller, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            controller,
            x,
            y,
            width,
            height,
            score: 0,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_top_left_size(
            Vec2::new(self.x, self.y),
            Vec2::new(self.width, self.height),
        )
    }

    /// Where the ball struck, relative to the paddle centre.
    ///
    /// -1 at the top edge, 1 at the bottom edge. Not clamped: box contacts
    /// beyond the paddle's span give values past ±1.
    pub fn collide_point(&self, ball_y: f32) -> f32 {
        let half_height = self.height / 2.0;
        (ball_y - (self.y + half_height)) / half_height
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32, // Magnitude applied on the next paddle hit
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            speed,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_half_extents(self.pos, Vec2::splat(self.radius))
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    /// Start a new rally from `center`, heading back the way the ball came from.
    pub fn reset(&mut self, center: Vec2, base_speed: f32) {
        self.pos = center;
        self.speed = base_speed;
        self.vel.x = -self.vel.x;
    }
}
