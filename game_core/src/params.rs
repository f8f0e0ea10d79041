/// Game tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const TRAILING_PADDLE_SCALE: f32 = 1.5; // Height multiplier for the side that is behind

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const OPENING_VX: f32 = 6.0;
    pub const OPENING_VY: f32 = 4.0;
    pub const SERVE_SPEED_X: f32 = 6.0; // Sign is randomized on every serve
    pub const SERVE_SPEED_Y: f32 = 5.0; // vy is uniform in [-5, 5)
    pub const DEFLECTION_SPEED: f32 = 5.0; // vy after hitting a paddle edge

    // Opponent
    pub const AI_SPEED: f32 = 4.0; // units per tick
    pub const AI_DEAD_ZONE: f32 = 15.0;

    // Score
    pub const WIN_SCORE: u32 = 10;
    pub const IMBALANCE_GAP: u32 = 3; // Second ball and bigger paddle kick in at this gap
}
