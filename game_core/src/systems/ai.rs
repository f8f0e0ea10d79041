use hecs::World;

use crate::{Ball, BallSlot, Config, Paddle, Side};

/// Reactive tracking rule for the opponent paddle.
///
/// Moves `speed` toward `target_y` when the paddle center is more than
/// `dead_zone` away from it, otherwise holds. No prediction.
pub fn ai_paddle_delta(paddle_center: f32, target_y: f32, dead_zone: f32, speed: f32) -> f32 {
    if paddle_center < target_y - dead_zone {
        speed
    } else if paddle_center > target_y + dead_zone {
        -speed
    } else {
        0.0
    }
}

/// Move the right paddle after the primary ball.
///
/// The secondary ball is invisible to the opponent.
pub fn move_ai_paddle(world: &mut World, config: &Config) {
    let target_y = world
        .query::<&Ball>()
        .iter()
        .find(|(_e, ball)| ball.slot == BallSlot::Primary)
        .map(|(_e, ball)| ball.pos.y);

    let Some(target_y) = target_y else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Right {
            paddle.y += ai_paddle_delta(
                paddle.center_y(),
                target_y,
                config.ai_dead_zone,
                config.ai_speed,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    #[test]
    fn test_delta_moves_down_toward_lower_ball() {
        assert_eq!(ai_paddle_delta(100.0, 200.0, 15.0, 4.0), 4.0);
    }

    #[test]
    fn test_delta_moves_up_toward_higher_ball() {
        assert_eq!(ai_paddle_delta(300.0, 200.0, 15.0, 4.0), -4.0);
    }

    #[test]
    fn test_delta_holds_inside_dead_zone() {
        assert_eq!(ai_paddle_delta(200.0, 200.0, 15.0, 4.0), 0.0);
        assert_eq!(ai_paddle_delta(185.0, 200.0, 15.0, 4.0), 0.0, "Boundary holds");
        assert_eq!(ai_paddle_delta(215.0, 200.0, 15.0, 4.0), 0.0, "Boundary holds");
    }

    #[test]
    fn test_ai_tracks_primary_only() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Right, 150.0, config.paddle_height);
        create_paddle(&mut world, Side::Left, 150.0, config.paddle_height);
        create_ball(
            &mut world,
            Ball::new(BallSlot::Secondary, Vec2::new(600.0, 390.0), Vec2::ZERO, true),
        );
        create_ball(
            &mut world,
            Ball::new(BallSlot::Primary, Vec2::new(600.0, 20.0), Vec2::ZERO, true),
        );

        move_ai_paddle(&mut world, &config);

        for (_e, paddle) in world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Right => assert_eq!(paddle.y, 146.0, "Moves up after the primary ball"),
                Side::Left => assert_eq!(paddle.y, 150.0, "Player paddle untouched"),
            }
        }
    }
}
