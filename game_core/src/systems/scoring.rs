use hecs::World;
use log::info;

use crate::{Ball, Config, Events, GameRng, GameStatus, Score, Side, StatusAction};

/// Award points for balls that left the playfield.
///
/// Each active ball is scored and re-served on its own, so two points can
/// land in one tick. Once a point wins the game the remaining balls are left
/// untouched.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    status: &mut GameStatus,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let radius = config.ball_radius;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if status.is_over() {
            break;
        }
        if !ball.active {
            continue;
        }

        // The side whose edge the ball crossed concedes
        let conceded = if ball.left_edge(radius) < 0.0 {
            Side::Left
        } else if ball.right_edge(radius) > config.width {
            Side::Right
        } else {
            continue;
        };
        let scorer = conceded.opponent();

        score.increment(scorer);
        events.scored(scorer);
        info!(
            "{:?} scores with the {:?} ball ({} - {})",
            scorer, ball.slot, score.left, score.right
        );

        if let Some(winner) = score.has_winner(config.win_score) {
            let result = status.transition(StatusAction::Win(winner));
            if result.success {
                events.game_over = Some(winner);
                info!(
                    "{:?} wins {} - {} ({:?} -> {:?})",
                    winner, score.left, score.right, result.from_state, result.to_state
                );
            }
        }

        ball.reset(config, rng);
    }
}
