use hecs::World;
use log::debug;

use crate::{Ball, BallSlot, Config, Events, Paddle, Score};

/// Give the trailing side a taller paddle while the gap is wide.
///
/// Recomputed every tick: at gap >= `imbalance_gap` the side that is behind
/// gets `trailing_paddle_scale` times the base height, otherwise both sides
/// are back at base.
pub fn update_paddle_heights(world: &mut World, config: &Config, score: &Score) {
    let trailing = if score.is_imbalanced(config.imbalance_gap) {
        score.trailing()
    } else {
        None
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.height = if trailing == Some(paddle.side) {
            config.paddle_height * config.trailing_paddle_scale
        } else {
            config.paddle_height
        };
    }
}

/// Activate the secondary ball exactly while the gap is wide.
///
/// Deactivation only clears the flag; position and velocity are kept.
pub fn update_second_ball(world: &mut World, config: &Config, score: &Score, events: &mut Events) {
    let wanted = score.is_imbalanced(config.imbalance_gap);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.slot != BallSlot::Secondary || ball.active == wanted {
            continue;
        }
        ball.active = wanted;
        events.second_ball_toggled = true;
        debug!(
            "Second ball {} at ({:.1}, {:.1}), gap {}",
            if wanted { "in play" } else { "parked" },
            ball.pos.x,
            ball.pos.y,
            score.gap()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Side};
    use glam::Vec2;

    fn heights(world: &World) -> (f32, f32) {
        let mut left = 0.0;
        let mut right = 0.0;
        for (_e, paddle) in world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => left = paddle.height,
                Side::Right => right = paddle.height,
            }
        }
        (left, right)
    }

    fn paddles() -> World {
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, 150.0, 100.0);
        create_paddle(&mut world, Side::Right, 150.0, 100.0);
        world
    }

    #[test]
    fn test_trailing_side_gets_taller_paddle() {
        let config = Config::new();
        let mut world = paddles();

        update_paddle_heights(&mut world, &config, &Score { left: 6, right: 9 });
        assert_eq!(heights(&world), (150.0, 100.0));

        update_paddle_heights(&mut world, &config, &Score { left: 5, right: 1 });
        assert_eq!(heights(&world), (100.0, 150.0));
    }

    #[test]
    fn test_heights_revert_below_gap() {
        let config = Config::new();
        let mut world = paddles();

        update_paddle_heights(&mut world, &config, &Score { left: 0, right: 3 });
        update_paddle_heights(&mut world, &config, &Score { left: 1, right: 3 });
        assert_eq!(heights(&world), (100.0, 100.0));
    }

    #[test]
    fn test_second_ball_toggles_with_gap_and_keeps_state() {
        let config = Config::new();
        let mut world = World::new();
        let mut events = Events::new();
        let parked = Vec2::new(123.0, 45.0);
        create_ball(
            &mut world,
            Ball::new(BallSlot::Secondary, parked, Vec2::new(-6.0, 1.0), false),
        );

        update_second_ball(&mut world, &config, &Score { left: 3, right: 0 }, &mut events);
        assert!(events.second_ball_toggled);
        for (_e, ball) in world.query::<&Ball>().iter() {
            assert!(ball.active);
            assert_eq!(ball.pos, parked);
        }

        events.clear();
        update_second_ball(&mut world, &config, &Score { left: 3, right: 1 }, &mut events);
        assert!(events.second_ball_toggled);
        for (_e, ball) in world.query::<&Ball>().iter() {
            assert!(!ball.active);
            assert_eq!(ball.pos, parked);
            assert_eq!(ball.vel, Vec2::new(-6.0, 1.0));
        }
    }

    #[test]
    fn test_primary_ball_is_never_parked() {
        let config = Config::new();
        let mut world = World::new();
        let mut events = Events::new();
        create_ball(
            &mut world,
            Ball::new(BallSlot::Primary, Vec2::ZERO, Vec2::ZERO, true),
        );

        update_second_ball(&mut world, &config, &Score::new(), &mut events);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert!(ball.active);
        }
        assert!(!events.second_ball_toggled);
    }
}
