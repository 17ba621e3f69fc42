use std::f32::consts::FRAC_PI_4;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_BASE: f32 = 5.0;
    pub const BALL_SPEED_INCREMENT: f32 = 0.1; // Added on every paddle hit, unbounded
    pub const BALL_VELOCITY_INITIAL: (f32, f32) = (5.0, 5.0);
    pub const MAX_DEFLECTION: f32 = FRAC_PI_4; // At the paddle's top/bottom edge

    // Opponent
    pub const TRACKING_GAIN: f32 = 0.1; // Fraction of the gap closed per tick

    // Net (rendering only)
    pub const NET_WIDTH: f32 = 2.0;
    pub const NET_DASH: f32 = 10.0;
    pub const NET_SPACING: f32 = 15.0;
}
