use hecs::World;
use log::trace;

use crate::{Ball, Config, Events, Paddle, Side};

/// Reflect active balls off the top and bottom walls.
///
/// The bounce is lossless: only the sign of `vel.y` changes and the center
/// is put back exactly one radius inside the wall.
pub fn check_wall_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let radius = config.ball_radius;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if !ball.active {
            continue;
        }

        if ball.pos.y - radius < 0.0 {
            ball.pos.y = radius;
            ball.vel.y = -ball.vel.y;
            events.wall_hits += 1;
        }
        if ball.pos.y + radius > config.height {
            ball.pos.y = config.height - radius;
            ball.vel.y = -ball.vel.y;
            events.wall_hits += 1;
        }
    }
}

/// Vertical speed after a paddle hit, linear in the impact offset.
///
/// -1 at the top edge, 0 at the center, +1 at the bottom edge, scaled by `speed`.
pub fn deflection(ball_y: f32, paddle: &Paddle, speed: f32) -> f32 {
    let impact = (ball_y - paddle.center_y()) / (paddle.height / 2.0);
    impact * speed
}

/// Bounce active balls off both paddles.
///
/// The vertical test is point-vs-span on the ball center only, so a ball can
/// graze a paddle corner without being returned.
pub fn check_paddle_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddles first so the ball query can borrow the world mutably
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if !ball.active {
            continue;
        }

        for paddle in &paddles {
            if bounce_off_paddle(ball, paddle, config) {
                trace!(
                    "{:?} ball returned by {:?} paddle, vy={:.2}",
                    ball.slot,
                    paddle.side,
                    ball.vel.y
                );
                events.paddle_hits += 1;
            }
        }
    }
}

fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, config: &Config) -> bool {
    let radius = config.ball_radius;
    let crossed = match paddle.side {
        Side::Left => ball.left_edge(radius) < config.paddle_width,
        Side::Right => ball.right_edge(radius) > config.width - config.paddle_width,
    };

    if !crossed || !paddle.spans(ball.pos.y) {
        return false;
    }

    // Flush against the paddle face
    ball.pos.x = match paddle.side {
        Side::Left => config.paddle_width + radius,
        Side::Right => config.width - config.paddle_width - radius,
    };
    ball.vel.x = -ball.vel.x;
    ball.vel.y = deflection(ball.pos.y, paddle, config.deflection_speed);
    true
}
