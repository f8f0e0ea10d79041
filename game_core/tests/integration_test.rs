use approx::assert_abs_diff_eq;
use game_core::*;
use glam::Vec2;

fn new_sim() -> Simulation {
    Simulation::new(Config::new(), 4242)
}

fn assert_paddles_on_field(sim: &Simulation) {
    for side in [Side::Left, Side::Right] {
        let paddle = sim.paddle(side).unwrap();
        assert!(
            paddle.y >= 0.0 && paddle.y <= sim.config.height - paddle.height,
            "{:?} paddle out of bounds: y={} h={}",
            side,
            paddle.y,
            paddle.height
        );
    }
}

#[test]
fn test_first_tick_moves_ball_without_collision() {
    let mut sim = new_sim();

    advance(&mut sim, TickInput::default());

    let ball = sim.ball(BallSlot::Primary).unwrap();
    assert_eq!(ball.pos, Vec2::new(406.0, 204.0));
    assert_eq!(ball.vel, Vec2::new(6.0, 4.0));
    assert_eq!(sim.score, Score::new());
}

#[test]
fn test_paddles_stay_on_field_for_long_game() {
    let mut sim = new_sim();
    let mut previous = sim.score;

    for tick in 0..20_000u32 {
        // Sweep the pointer well past both edges
        let pointer = ((tick * 7) % 600) as f32 - 100.0;
        advance(&mut sim, TickInput::pointer(pointer));
        assert_paddles_on_field(&sim);

        assert!(sim.score.left >= previous.left && sim.score.right >= previous.right);
        previous = sim.score;

        if sim.status.is_over() {
            break;
        }
    }
}

#[test]
fn test_wall_bounce_is_lossless_in_full_step() {
    let mut sim = new_sim();
    sim.place_ball(BallSlot::Primary, Vec2::new(400.0, 13.0), Vec2::new(6.0, -5.0));

    advance(&mut sim, TickInput::default());

    let ball = sim.ball(BallSlot::Primary).unwrap();
    assert_eq!(ball.pos, Vec2::new(406.0, 10.0));
    assert_eq!(ball.vel, Vec2::new(6.0, 5.0));
    assert_eq!(sim.events.wall_hits, 1);
}

#[test]
fn test_player_returns_ball_from_paddle_center() {
    let mut sim = new_sim();
    sim.place_ball(BallSlot::Primary, Vec2::new(30.0, 200.0), Vec2::new(-6.0, 4.0));

    // Pointer at 196 puts the paddle at 146..246 with its center at 196
    advance(&mut sim, TickInput::pointer(196.0));

    let ball = sim.ball(BallSlot::Primary).unwrap();
    assert_eq!(ball.pos.x, 25.0);
    assert_eq!(ball.vel.x, 6.0);
    // Moved to y=204, 8 below center: 8 / 50 * 5
    assert_abs_diff_eq!(ball.vel.y, 0.8, epsilon = 1e-5);
    assert_eq!(sim.events.paddle_hits, 1);
}

#[test]
fn test_both_balls_returned_in_same_tick() {
    let mut sim = new_sim();
    sim.score = Score { left: 3, right: 0 };
    advance(&mut sim, TickInput::default());
    assert!(sim.ball(BallSlot::Secondary).unwrap().active);

    // Opponent is trailing, so its paddle is the enlarged one
    let right = sim.paddle(Side::Right).unwrap();
    assert_eq!(right.height, 150.0);
    let left = sim.paddle(Side::Left).unwrap();

    // Secondary reaches the right face 10 below center, primary the left face 4 below
    sim.place_ball(
        BallSlot::Secondary,
        Vec2::new(770.0, right.center_y() + 6.0),
        Vec2::new(6.0, 4.0),
    );
    sim.place_ball(
        BallSlot::Primary,
        Vec2::new(30.0, left.center_y()),
        Vec2::new(-6.0, 4.0),
    );

    advance(&mut sim, TickInput::default());

    assert_eq!(sim.events.paddle_hits, 2);
    assert_eq!(sim.score, Score { left: 3, right: 0 });

    let second = sim.ball(BallSlot::Secondary).unwrap();
    assert_eq!(second.pos.x, 775.0);
    assert_eq!(second.vel.x, -6.0);
    assert_abs_diff_eq!(second.vel.y, 10.0 / 75.0 * 5.0, epsilon = 1e-5);

    let primary = sim.ball(BallSlot::Primary).unwrap();
    assert_eq!(primary.pos.x, 25.0);
    assert_eq!(primary.vel.x, 6.0);
    assert_abs_diff_eq!(primary.vel.y, 4.0 / 50.0 * 5.0, epsilon = 1e-5);
}

#[test]
fn test_missed_ball_scores_for_opponent() {
    let mut sim = new_sim();
    // Far below the left paddle
    sim.place_ball(BallSlot::Primary, Vec2::new(12.0, 380.0), Vec2::new(-6.0, 0.0));

    advance(&mut sim, TickInput::default());

    assert_eq!(sim.score, Score { left: 0, right: 1 });
    assert_eq!(sim.ball(BallSlot::Primary).unwrap().pos, sim.config.center());
}

#[test]
fn test_imbalance_win_and_restart() {
    let mut sim = new_sim();
    sim.score = Score { left: 6, right: 9 };

    advance(&mut sim, TickInput::default());

    assert_eq!(sim.paddle(Side::Left).unwrap().height, 150.0);
    assert_eq!(sim.paddle(Side::Right).unwrap().height, 100.0);
    assert!(sim.ball(BallSlot::Secondary).unwrap().active);

    // Primary slips past the player
    sim.place_ball(BallSlot::Primary, Vec2::new(12.0, 380.0), Vec2::new(-6.0, 0.0));
    advance(&mut sim, TickInput::default());

    assert_eq!(sim.score, Score { left: 6, right: 10 });
    assert_eq!(sim.status, GameStatus::Over(Side::Right));
    assert_eq!(sim.events.game_over, Some(Side::Right));

    // Frozen until restart
    let frozen = FrameSnapshot::capture(&sim);
    for pointer in [0.0, 120.0, 390.0] {
        advance(&mut sim, TickInput::pointer(pointer));
        assert_eq!(FrameSnapshot::capture(&sim), frozen);
    }

    advance(&mut sim, TickInput::restart());

    assert!(sim.events.restarted);
    assert_eq!(sim.score, Score::new());
    assert_eq!(sim.status, GameStatus::Playing);
    let ball = sim.ball(BallSlot::Primary).unwrap();
    assert_eq!(ball.pos, sim.config.center());
    assert_eq!(ball.vel.x.abs(), 6.0);
    assert!(ball.vel.y.abs() <= 5.0);
    assert_eq!(sim.paddle(Side::Left).unwrap().height, 100.0);
    assert!(!sim.ball(BallSlot::Secondary).unwrap().active);
}

#[test]
fn test_second_ball_follows_gap_and_keeps_position() {
    let mut sim = new_sim();
    sim.score = Score { left: 3, right: 0 };

    advance(&mut sim, TickInput::default());
    assert!(sim.ball(BallSlot::Secondary).unwrap().active);
    assert!(sim.events.second_ball_toggled);

    advance(&mut sim, TickInput::default());
    let moved = sim.ball(BallSlot::Secondary).unwrap();
    assert_eq!(moved.pos, Vec2::new(394.0, 196.0));

    // Gap closes: parked after this tick
    sim.score = Score { left: 3, right: 1 };
    advance(&mut sim, TickInput::default());
    let parked = sim.ball(BallSlot::Secondary).unwrap();
    assert!(!parked.active);

    for _ in 0..10 {
        advance(&mut sim, TickInput::default());
    }
    let still = sim.ball(BallSlot::Secondary).unwrap();
    assert_eq!(still.pos, parked.pos);
    assert_eq!(still.vel, parked.vel);
    assert_eq!(Scene::from_simulation(&sim).circles().count(), 1);

    // Gap reopens: resumes from the parked spot
    sim.score = Score { left: 4, right: 1 };
    advance(&mut sim, TickInput::default());
    advance(&mut sim, TickInput::default());
    let resumed = sim.ball(BallSlot::Secondary).unwrap();
    assert!(resumed.active);
    assert_eq!(resumed.pos, parked.pos + parked.vel);
}

#[test]
fn test_opponent_ignores_second_ball() {
    let mut sim = new_sim();
    sim.score = Score { left: 0, right: 3 };
    advance(&mut sim, TickInput::default());

    // Primary level with the opponent's center, secondary far below
    sim.place_ball(BallSlot::Primary, Vec2::new(400.0, 200.0), Vec2::new(0.0, 0.0));
    sim.place_ball(BallSlot::Secondary, Vec2::new(700.0, 380.0), Vec2::new(0.0, 0.0));
    let before = sim.paddle(Side::Right).unwrap().y;

    advance(&mut sim, TickInput::default());

    assert_eq!(sim.paddle(Side::Right).unwrap().y, before);
}

#[test]
fn test_latch_drives_restart_once() {
    let mut sim = new_sim();
    let mut latch = InputLatch::new();
    sim.status = GameStatus::Over(Side::Left);
    sim.score = Score { left: 10, right: 2 };

    latch.request_restart();
    advance(&mut sim, latch.sample());
    assert!(sim.status.is_playing());

    sim.score = Score { left: 1, right: 0 };
    advance(&mut sim, latch.sample());
    assert_eq!(sim.score, Score { left: 1, right: 0 }, "Restart is not replayed");
}
