use hecs::World;

use crate::{Ball, Config, Paddle};

/// Move every active ball by one tick of its velocity
pub fn move_balls(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.active {
            ball.pos += ball.vel;
        }
    }
}

/// Keep both paddles inside [0, height - own height]
pub fn clamp_paddles(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = config.clamp_paddle_y(paddle.y, paddle.height);
    }
}
