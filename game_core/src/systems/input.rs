use hecs::World;

use crate::{Config, Paddle, Side};

/// Center the left paddle on the pointer, clamped to the playfield
pub fn apply_pointer(world: &mut World, config: &Config, pointer_y: Option<f32>) {
    let Some(pointer_y) = pointer_y else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Left {
            paddle.y = config.clamp_paddle_y(pointer_y - paddle.height / 2.0, paddle.height);
        }
    }
}
