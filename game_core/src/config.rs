use crate::{Controller, Field, Params};

/// Invalid geometry for a simulation
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("paddle height {paddle} does not fit in field height {field}")]
    PaddleTooTall { paddle: f32, field: f32 },

    #[error("field width {field} leaves no gap between two paddles of width {paddle}")]
    FieldTooNarrow { field: f32, paddle: f32 },

    #[error("ball diameter {diameter} does not fit in field {width}x{height}")]
    BallTooLarge {
        diameter: f32,
        width: f32,
        height: f32,
    },
}

/// Field and entity geometry a simulation is built from.
///
/// Ball speed, speed increment and tracking gain live in [`Params`] and are
/// not configurable.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_radius: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            ball_radius: Params::BALL_RADIUS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default entity sizes on a field matching a drawing surface
    pub fn for_surface(width: f32, height: f32) -> Self {
        Self {
            field_width: width,
            field_height: height,
            ..Self::default()
        }
    }

    pub fn field(&self) -> Field {
        Field::new(self.field_width, self.field_height)
    }

    /// Get X position for paddle based on its controller (paddles sit flush on the edges)
    pub fn paddle_x(&self, controller: Controller) -> f32 {
        match controller {
            Controller::Human => 0.0,
            Controller::Heuristic => self.field_width - self.paddle_width,
        }
    }

    /// Y position that vertically centres a paddle
    pub fn paddle_spawn_y(&self) -> f32 {
        self.field_height / 2.0 - self.paddle_height / 2.0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("field width", self.field_width),
            ("field height", self.field_height),
            ("paddle width", self.paddle_width),
            ("paddle height", self.paddle_height),
            ("ball radius", self.ball_radius),
        ] {
            // Also rejects NaN
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if self.paddle_height > self.field_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                field: self.field_height,
            });
        }

        if self.paddle_width * 2.0 >= self.field_width {
            return Err(ConfigError::FieldTooNarrow {
                field: self.field_width,
                paddle: self.paddle_width,
            });
        }

        let diameter = self.ball_radius * 2.0;
        if diameter >= self.field_width || diameter >= self.field_height {
            return Err(ConfigError::BallTooLarge {
                diameter,
                width: self.field_width,
                height: self.field_height,
            });
        }

        Ok(())
    }
}
