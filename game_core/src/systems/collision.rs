use crate::{intersects, Ball, Events, Field, Paddle, Params};
use glam::Vec2;
use hecs::World;

/// Check ball collisions with walls and the paddle it is heading into
pub fn check_collisions(world: &mut World, field: &Field, events: &mut Events) {
    // First, collect ball data without holding borrows
    let ball_data = world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball);

    let mut ball = match ball_data {
        Some(ball) => ball,
        None => return, // No ball in world
    };

    if bounce_off_walls(&mut ball, field) {
        events.ball_hit_wall = true;
        log::trace!("Ball hit wall at y={:.1}", ball.pos.y);
    }

    // Only the paddle on the ball's half of the field is tested
    let target = field.side_of(ball.pos.x);
    let paddle = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .find(|paddle| paddle.controller == target);

    if let Some(paddle) = paddle {
        if intersects(&ball, &paddle) {
            deflect(&mut ball, &paddle);
            events.ball_hit_paddle = true;
            log::trace!(
                "Ball hit {:?} paddle, speed now {:.1}",
                paddle.controller,
                ball.speed
            );
        }
    }

    for (_entity, b) in world.query_mut::<&mut Ball>() {
        *b = ball;
    }
}

/// Flip vertical velocity when the ball pokes past the top or bottom edge.
///
/// The position is left as is; an overshoot is carried into the next step.
pub fn bounce_off_walls(ball: &mut Ball, field: &Field) -> bool {
    if ball.bottom() > field.height || ball.top() < 0.0 {
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Send the ball back from `paddle` at an angle set by where it struck.
///
/// Centre hits return flat, edge hits leave at up to 45 degrees. The new
/// velocity uses the current speed; the speed then grows for the next hit.
pub fn deflect(ball: &mut Ball, paddle: &Paddle) {
    let angle = paddle.collide_point(ball.pos.y) * Params::MAX_DEFLECTION;
    let direction = paddle.controller.return_direction();

    ball.vel = Vec2::new(
        direction * ball.speed * angle.cos(),
        ball.speed * angle.sin(),
    );
    ball.speed += Params::BALL_SPEED_INCREMENT;
}
