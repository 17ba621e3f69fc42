use crate::{Ball, Controller, Events, Field, Paddle, Params};
use hecs::World;

/// Check if ball left the field (scoring)
pub fn check_scoring(world: &mut World, field: &Field, events: &mut Events) {
    let mut scorer = None;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Left and right exits are exclusive, so at most one point per tick
        if ball.left() < 0.0 {
            scorer = Some(Controller::Heuristic);
        } else if ball.right() > field.width {
            scorer = Some(Controller::Human);
        } else {
            continue;
        }

        // Reset ball, served back toward the side that conceded
        ball.reset(field.ball_spawn(), Params::BALL_SPEED_BASE);
    }

    let Some(scorer) = scorer else {
        return;
    };

    match scorer {
        Controller::Human => events.human_scored = true,
        Controller::Heuristic => events.heuristic_scored = true,
    }

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.controller == scorer {
            paddle.score += 1;
            log::debug!("{:?} paddle scored, now {}", scorer, paddle.score);
        }
    }
}
