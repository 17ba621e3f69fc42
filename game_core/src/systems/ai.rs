use crate::{Ball, Controller, Paddle, Params};
use hecs::World;

/// One step of the opponent's tracking filter.
///
/// Closes a fixed fraction of the gap between the paddle centre and the ball
/// each tick, so the paddle lags fast balls and can be beaten.
pub fn track(paddle_y: f32, paddle_height: f32, ball_y: f32) -> f32 {
    paddle_y + (ball_y - (paddle_y + paddle_height / 2.0)) * Params::TRACKING_GAIN
}

/// Move the heuristic paddle toward the ball. Not clamped to the field.
pub fn track_ball(world: &mut World) {
    let ball_y = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.y);

    let Some(ball_y) = ball_y else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.controller == Controller::Heuristic {
            paddle.y = track(paddle.y, paddle.height, ball_y);
        }
    }
}
