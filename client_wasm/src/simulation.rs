use game_core::{advance, Config, Events, FrameSnapshot, InputLatch, Scene, Simulation};
use log::debug;

use crate::input::{is_restart_key, pointer_to_playfield};

/// Frame-loop owner for a single-player game.
///
/// Host callbacks only write the input latch; `step` samples it once and
/// advances the simulation by one tick.
pub struct LocalGame {
    pub sim: Simulation,
    latch: InputLatch,
}

impl LocalGame {
    pub fn new(config: Config, seed: u64) -> Self {
        Self {
            sim: Simulation::new(config, seed),
            latch: InputLatch::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.sim.config
    }

    pub fn on_pointer_move(&mut self, client_y: f32, rect_top: f32, rect_height: f32) {
        let y = pointer_to_playfield(client_y, rect_top, rect_height, self.sim.config.height);
        self.latch.set_pointer(y);
    }

    /// Returns true when the key queued a restart
    pub fn on_key_down(&mut self, key: &str) -> bool {
        if self.sim.status.is_over() && is_restart_key(key) {
            self.latch.request_restart();
            return true;
        }
        false
    }

    pub fn step(&mut self) -> &Events {
        let input = self.latch.sample();
        advance(&mut self.sim, input);

        let events = &self.sim.events;
        if events.paddle_hits > 0 || events.wall_hits > 0 {
            debug!(
                "tick {}: {} paddle hit(s), {} wall hit(s)",
                self.sim.tick, events.paddle_hits, events.wall_hits
            );
        }
        events
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(&self.sim)
    }

    pub fn scene(&self) -> Scene {
        Scene::from_simulation(&self.sim)
    }
}
