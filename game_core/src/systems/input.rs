use crate::{Controller, Paddle};
use hecs::World;

/// Centre the human paddle on the pointer. No smoothing, no clamping.
pub fn apply_pointer(world: &mut World, pointer_y: f32) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.controller == Controller::Human {
            paddle.y = pointer_y - paddle.height / 2.0;
        }
    }
}
