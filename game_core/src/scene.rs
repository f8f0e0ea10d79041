//! Renderer-facing view of the simulation
//!
//! `FrameSnapshot` is a plain copy of what a renderer needs for one frame;
//! `Scene` turns it into shapes and text laid out in playfield coordinates.

use serde::{Deserialize, Serialize};

use crate::{BallSlot, GameStatus, Side, Simulation};

pub const NET_DASH_WIDTH: f32 = 2.0;
pub const NET_DASH_HEIGHT: f32 = 20.0;
pub const NET_DASH_SPACING: f32 = 30.0;
pub const SCORE_BASELINE: f32 = 50.0;
pub const SCORE_FONT_PX: f32 = 40.0;
pub const MESSAGE_FONT_PX: f32 = 30.0;
pub const MESSAGE_LINE_GAP: f32 = 40.0;
pub const RESTART_PROMPT: &str = "Press 'R' to Restart";

/// RGBA, 0..=1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const WHITE: Color = Color([1.0, 1.0, 1.0, 1.0]);
    pub const GREEN: Color = Color([0.0, 1.0, 0.0, 1.0]);
    pub const RED: Color = Color([1.0, 0.0, 0.0, 1.0]);
    pub const YELLOW: Color = Color([1.0, 1.0, 0.0, 1.0]);

    /// `rgb(r, g, b)` for CSS
    pub fn to_css(self) -> String {
        let [r, g, b, _] = self.0;
        format!(
            "rgb({}, {}, {})",
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8
        )
    }
}

/// Ball position for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallSnapshot {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

/// Everything a renderer reads for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub ball_radius: f32,
    pub paddle_left_y: f32,
    pub paddle_left_height: f32,
    pub paddle_right_y: f32,
    pub paddle_right_height: f32,
    pub ball: BallSnapshot,
    pub second_ball: Option<BallSnapshot>, // Only while in play
    pub score_left: u32,
    pub score_right: u32,
    pub status: GameStatus,
}

impl FrameSnapshot {
    pub fn capture(sim: &Simulation) -> Self {
        let config = &sim.config;
        let (paddle_left_y, paddle_left_height) = paddle_or_spawn(sim, Side::Left);
        let (paddle_right_y, paddle_right_height) = paddle_or_spawn(sim, Side::Right);

        let snapshot_of = |slot| {
            sim.ball(slot).filter(|b| b.active).map(|b| BallSnapshot {
                x: b.pos.x,
                y: b.pos.y,
                vx: b.vel.x,
                vy: b.vel.y,
            })
        };
        let center = config.center();
        let ball = snapshot_of(BallSlot::Primary).unwrap_or(BallSnapshot {
            x: center.x,
            y: center.y,
            vx: 0.0,
            vy: 0.0,
        });

        Self {
            tick: sim.tick,
            width: config.width,
            height: config.height,
            paddle_width: config.paddle_width,
            ball_radius: config.ball_radius,
            paddle_left_y,
            paddle_left_height,
            paddle_right_y,
            paddle_right_height,
            ball,
            second_ball: snapshot_of(BallSlot::Secondary),
            score_left: sim.score.left,
            score_right: sim.score.right,
            status: sim.status,
        }
    }
}

fn paddle_or_spawn(sim: &Simulation, side: Side) -> (f32, f32) {
    sim.paddle(side)
        .map(|p| (p.y, p.height))
        .unwrap_or((sim.config.paddle_spawn_y(), sim.config.paddle_height))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rect { x: f32, y: f32, w: f32, h: f32 }, // Top-left corner
    Circle { x: f32, y: f32, r: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub shape: Shape,
    pub color: Color,
}

/// Text anchored at its left baseline
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size_px: f32,
    pub color: Color,
}

/// Draw list for one frame. Shapes never overlap, so order only matters
/// for renderers with a fixed instance budget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub sprites: Vec<Sprite>,
    pub labels: Vec<Label>,
}

impl Scene {
    pub fn build(snapshot: &FrameSnapshot) -> Self {
        let mut scene = Self::default();
        let (w, h) = (snapshot.width, snapshot.height);

        // Paddles
        scene.sprites.push(Sprite {
            shape: Shape::Rect {
                x: 0.0,
                y: snapshot.paddle_left_y,
                w: snapshot.paddle_width,
                h: snapshot.paddle_left_height,
            },
            color: Color::GREEN,
        });
        scene.sprites.push(Sprite {
            shape: Shape::Rect {
                x: w - snapshot.paddle_width,
                y: snapshot.paddle_right_y,
                w: snapshot.paddle_width,
                h: snapshot.paddle_right_height,
            },
            color: Color::RED,
        });

        // Net, after the paddles so a capped instance buffer only thins it
        for i in 0..net_dash_count(h) {
            scene.sprites.push(Sprite {
                shape: Shape::Rect {
                    x: w / 2.0 - NET_DASH_WIDTH / 2.0,
                    y: i as f32 * NET_DASH_SPACING,
                    w: NET_DASH_WIDTH,
                    h: NET_DASH_HEIGHT,
                },
                color: Color::WHITE,
            });
        }

        // Balls
        scene.sprites.push(Sprite {
            shape: Shape::Circle {
                x: snapshot.ball.x,
                y: snapshot.ball.y,
                r: snapshot.ball_radius,
            },
            color: Color::WHITE,
        });
        if let Some(second) = snapshot.second_ball {
            scene.sprites.push(Sprite {
                shape: Shape::Circle {
                    x: second.x,
                    y: second.y,
                    r: snapshot.ball_radius,
                },
                color: Color::YELLOW,
            });
        }

        // Scores
        scene.labels.push(Label {
            text: snapshot.score_left.to_string(),
            x: w / 4.0,
            y: SCORE_BASELINE,
            size_px: SCORE_FONT_PX,
            color: Color::WHITE,
        });
        scene.labels.push(Label {
            text: snapshot.score_right.to_string(),
            x: 3.0 * w / 4.0,
            y: SCORE_BASELINE,
            size_px: SCORE_FONT_PX,
            color: Color::WHITE,
        });

        if let Some(winner) = snapshot.status.winner() {
            scene.labels.push(Label {
                text: winner_message(winner).to_string(),
                x: w / 4.0,
                y: h / 2.0,
                size_px: MESSAGE_FONT_PX,
                color: Color::WHITE,
            });
            scene.labels.push(Label {
                text: RESTART_PROMPT.to_string(),
                x: w / 4.0,
                y: h / 2.0 + MESSAGE_LINE_GAP,
                size_px: MESSAGE_FONT_PX,
                color: Color::WHITE,
            });
        }

        scene
    }

    pub fn from_simulation(sim: &Simulation) -> Self {
        Self::build(&FrameSnapshot::capture(sim))
    }

    pub fn rects(&self) -> impl Iterator<Item = &Sprite> {
        self.sprites
            .iter()
            .filter(|s| matches!(s.shape, Shape::Rect { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &Sprite> {
        self.sprites
            .iter()
            .filter(|s| matches!(s.shape, Shape::Circle { .. }))
    }
}

/// Dashes from the top edge, one every `NET_DASH_SPACING`
pub fn net_dash_count(height: f32) -> usize {
    if height <= 0.0 {
        return 0;
    }
    (height / NET_DASH_SPACING).ceil() as usize
}

/// Rectangles in a full scene: the net plus both paddles
pub fn rect_count(height: f32) -> usize {
    net_dash_count(height) + 2
}

pub fn winner_message(winner: Side) -> &'static str {
    match winner {
        Side::Left => "Left Player Wins!",
        Side::Right => "Right Player Wins!",
    }
}
