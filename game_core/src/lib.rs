pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod scene;
pub mod status;
pub mod systems;

pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;
pub use scene::*;
pub use status::*;

use hecs::World;
use log::info;
use systems::*;

/// Everything the game needs between two frames.
///
/// Owned by the frame loop and handed to `advance` once per tick. The
/// secondary ball is always allocated; its `active` flag decides whether it
/// is simulated and drawn.
pub struct Simulation {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub status: GameStatus,
    pub events: Events,
    pub rng: GameRng,
    pub tick: u64,
}

impl Simulation {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();

        let paddle_y = config.paddle_spawn_y();
        create_paddle(&mut world, Side::Left, paddle_y, config.paddle_height);
        create_paddle(&mut world, Side::Right, paddle_y, config.paddle_height);

        // Primary first: scoring walks balls in spawn order
        create_ball(&mut world, Ball::opening(BallSlot::Primary, &config));
        create_ball(&mut world, Ball::opening(BallSlot::Secondary, &config));

        Self {
            world,
            config,
            score: Score::new(),
            status: GameStatus::Playing,
            events: Events::new(),
            rng: GameRng::new(seed),
            tick: 0,
        }
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    pub fn ball(&self, slot: BallSlot) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .find(|(_e, b)| b.slot == slot)
            .map(|(_e, b)| *b)
    }

    /// Overwrite a ball's position and velocity, keeping its slot and flag
    pub fn place_ball(&mut self, slot: BallSlot, pos: glam::Vec2, vel: glam::Vec2) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            if ball.slot == slot {
                ball.pos = pos;
                ball.vel = vel;
            }
        }
    }

    /// Back to 0 - 0 with a fresh serve
    fn restart(&mut self) {
        let result = self.status.transition(StatusAction::Restart);
        if !result.success {
            return;
        }
        self.score.reset();

        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            match ball.slot {
                BallSlot::Primary => ball.reset(&self.config, &mut self.rng),
                BallSlot::Secondary => *ball = Ball::opening(BallSlot::Secondary, &self.config),
            }
        }
        update_paddle_heights(&mut self.world, &self.config, &self.score);
        clamp_paddles(&mut self.world, &self.config);

        self.events.restarted = true;
        info!(
            "Game restarted ({:?} -> {:?} on {:?})",
            result.from_state, result.to_state, result.action
        );
    }
}

/// Advance the simulation by one fixed tick
pub fn advance(sim: &mut Simulation, input: TickInput) {
    // Clear events at start of tick
    sim.events.clear();

    // 1. Game over: only a restart changes anything
    if sim.status.is_over() {
        if input.restart {
            sim.restart();
        }
        return;
    }
    sim.tick += 1;

    // 2. Player paddle follows the pointer
    apply_pointer(&mut sim.world, &sim.config, input.pointer_y);

    // 3. Move balls
    move_balls(&mut sim.world);

    // 4. Walls, then paddles
    check_wall_collisions(&mut sim.world, &sim.config, &mut sim.events);
    check_paddle_collisions(&mut sim.world, &sim.config, &mut sim.events);

    // 5. Points and the win check
    check_scoring(
        &mut sim.world,
        &sim.config,
        &mut sim.score,
        &mut sim.status,
        &mut sim.events,
        &mut sim.rng,
    );
    if sim.status.is_over() {
        return;
    }

    // 6. Score-gap rules
    update_paddle_heights(&mut sim.world, &sim.config, &sim.score);
    update_second_ball(&mut sim.world, &sim.config, &sim.score, &mut sim.events);

    // 7. Opponent, then keep both paddles on the playfield
    move_ai_paddle(&mut sim.world, &sim.config);
    clamp_paddles(&mut sim.world, &sim.config);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32, height: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y, height),))
}

/// Helper to create a ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
