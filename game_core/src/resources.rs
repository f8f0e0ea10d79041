use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a point and return the side's new total
    pub fn increment(&mut self, side: Side) -> u32 {
        let slot = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *slot += 1;
        *slot
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn gap(&self) -> u32 {
        self.left.abs_diff(self.right)
    }

    /// Side with fewer points, if any
    pub fn trailing(&self) -> Option<Side> {
        if self.left < self.right {
            Some(Side::Left)
        } else if self.right < self.left {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// True while the score gap is wide enough for the imbalance rules
    pub fn is_imbalanced(&self, gap: u32) -> bool {
        self.gap() >= gap
    }

    pub fn has_winner(&self, win_score: u32) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn coin_flip(&mut self) -> bool {
        use rand::Rng;
        self.0.gen_bool(0.5)
    }

    /// Uniform sample in [-1, 1)
    pub fn unit(&mut self) -> f32 {
        use rand::Rng;
        self.0.gen_range(-1.0..1.0)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub left_scored: u8,
    pub right_scored: u8,
    pub paddle_hits: u8,
    pub wall_hits: u8,
    pub game_over: Option<Side>,
    pub restarted: bool,
    pub second_ball_toggled: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scored(&mut self, side: Side) {
        match side {
            Side::Left => self.left_scored += 1,
            Side::Right => self.right_scored += 1,
        }
    }
}

/// Input sampled once at the top of a tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub pointer_y: Option<f32>, // Playfield-local
    pub restart: bool,
}

impl TickInput {
    pub fn pointer(y: f32) -> Self {
        Self {
            pointer_y: Some(y),
            restart: false,
        }
    }

    pub fn restart() -> Self {
        Self {
            pointer_y: None,
            restart: true,
        }
    }
}

/// Single-slot input written by the host between ticks.
///
/// The latest pointer position wins and persists; the restart flag is an
/// edge and is cleared by `sample`.
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    pointer_y: Option<f32>,
    restart: bool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pointer(&mut self, y: f32) {
        self.pointer_y = Some(y);
    }

    pub fn request_restart(&mut self) {
        self.restart = true;
    }

    pub fn sample(&mut self) -> TickInput {
        TickInput {
            pointer_y: self.pointer_y,
            restart: std::mem::take(&mut self.restart),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        assert_eq!(score.increment(Side::Left), 1);
        assert_eq!(score.increment(Side::Left), 2);
        assert_eq!(score.increment(Side::Right), 1);
        assert_eq!(score, Score { left: 2, right: 1 });
    }

    #[test]
    fn test_score_gap_and_trailing() {
        let score = Score { left: 6, right: 9 };
        assert_eq!(score.gap(), 3);
        assert_eq!(score.trailing(), Some(Side::Left));
        assert!(score.is_imbalanced(3));

        let level = Score { left: 4, right: 4 };
        assert_eq!(level.gap(), 0);
        assert_eq!(level.trailing(), None);
        assert!(!level.is_imbalanced(3));
    }

    #[test]
    fn test_score_has_winner() {
        assert_eq!(Score { left: 10, right: 3 }.has_winner(10), Some(Side::Left));
        assert_eq!(Score { left: 2, right: 10 }.has_winner(10), Some(Side::Right));
        assert_eq!(Score { left: 9, right: 9 }.has_winner(10), None);
    }

    #[test]
    fn test_score_reset() {
        let mut score = Score { left: 7, right: 3 };
        score.reset();
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.scored(Side::Left);
        events.scored(Side::Right);
        events.paddle_hits = 2;
        events.game_over = Some(Side::Left);
        events.restarted = true;

        events.clear();

        assert_eq!(events, Events::default());
    }

    #[test]
    fn test_latch_pointer_persists_restart_is_edge() {
        let mut latch = InputLatch::new();
        assert_eq!(latch.sample(), TickInput::default());

        latch.set_pointer(120.0);
        latch.set_pointer(180.0);
        latch.request_restart();

        let first = latch.sample();
        assert_eq!(first.pointer_y, Some(180.0), "Latest pointer wins");
        assert!(first.restart);

        let second = latch.sample();
        assert_eq!(second.pointer_y, Some(180.0), "Pointer persists");
        assert!(!second.restart, "Restart is consumed once");
    }

    #[test]
    fn test_rng_is_deterministic() {
        let mut a = GameRng::new(99);
        let mut b = GameRng::new(99);
        for _ in 0..8 {
            assert_eq!(a.coin_flip(), b.coin_flip());
            assert_eq!(a.unit(), b.unit());
        }
    }
}
