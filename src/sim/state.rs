//! Game state and core simulation types

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::score::ScoreTracker;
use super::scroll::ScrollingLayer;
use crate::config::Config;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first flap
    Ready,
    /// Active gameplay
    Playing,
    /// Run ended. The player keeps falling but nothing scrolls; a new
    /// session rebuilds the whole state from scratch.
    Dead,
}

/// Animation frame for the player sprite. Exactly one is shown per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerFrame {
    /// Wings up, falling
    Up,
    /// Glide
    Mid,
    /// Wings down, climbing
    Down,
}

impl PlayerFrame {
    /// Select the frame from vertical velocity. Velocities of exactly ±1
    /// fall to `Mid`, making the partition total.
    pub fn from_velocity(velocity: f32) -> Self {
        if velocity < -FRAME_VELOCITY_THRESHOLD {
            PlayerFrame::Up
        } else if velocity > FRAME_VELOCITY_THRESHOLD {
            PlayerFrame::Down
        } else {
            PlayerFrame::Mid
        }
    }
}

/// Discrete events for the external audio collaborator. Fire-and-forget;
/// the core never consumes a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player struck an obstacle segment
    Hit,
    /// Run ended by collision
    Die,
    /// Score increment
    Score,
}

impl GameEvent {
    /// Sound asset the host should play for this event. Flapping is
    /// deliberately silent in this tuning.
    pub fn sound_asset(&self) -> &'static str {
        match self {
            GameEvent::Hit => "hit.wav",
            GameEvent::Die => "die.wav",
            GameEvent::Score => "score.wav",
        }
    }
}

/// The player character
#[derive(Debug, Clone)]
pub struct Player {
    /// Vertical position of the sprite's lower edge
    pub position: f32,
    /// Vertical velocity, units per tick
    pub velocity: f32,
    /// Animation frame selected from velocity
    pub frame: PlayerFrame,
}

impl Player {
    pub fn new(config: &Config) -> Self {
        Self {
            position: config.center_y(),
            velocity: 0.0,
            frame: PlayerFrame::Mid,
        }
    }

    /// Advance one tick. Gravity integrates while Playing or Dead (the
    /// player visibly keeps falling after death). Returns true if the
    /// player is resting on the ground after this tick.
    pub fn tick(&mut self, phase: GamePhase) -> bool {
        if matches!(phase, GamePhase::Playing | GamePhase::Dead) {
            self.velocity += GRAVITY;
            self.position += self.velocity;
        }

        // Ground clamp, idempotent: once down, every later tick re-clamps
        // the small gravity step back to the rest height.
        let grounded = self.position < GROUND_Y;
        if grounded {
            self.position = GROUND_Y;
            self.velocity = 0.0;
        }

        self.frame = PlayerFrame::from_velocity(self.velocity);
        grounded
    }

    /// Flap. The impulse replaces the current velocity outright, even while
    /// already ascending. Phase gating is the caller's job.
    pub fn jump(&mut self) {
        self.velocity = FLAP_IMPULSE;
    }

    /// Cosmetic tilt in radians, a pure function of velocity.
    pub fn rotation(&self) -> f32 {
        self.velocity * TILT_PER_VELOCITY
    }

    /// Fixed horizontal anchor: the sprite is centered on screen.
    pub fn x(&self, config: &Config) -> f32 {
        config.center_x() - PLAYER_WIDTH / 2.0
    }

    /// Bounding box at the current resolved position.
    pub fn aabb(&self, config: &Config) -> Aabb {
        Aabb::new(self.x(config), self.position, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

/// A single gapped barrier: two pipe segments sharing an x position, with a
/// randomized vertical gap anchor rolled at creation and re-rolled only when
/// the obstacle recycles to the back of the field.
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Horizontal position; decreases while Playing
    pub x: f32,
    /// Vertical anchor of the lower segment
    pub gap_y: f32,
    /// Whether this obstacle has already counted for score
    pub scored: bool,
}

impl Obstacle {
    pub fn new(index: usize, config: &Config, rng: &mut Pcg32) -> Self {
        Self {
            x: OBSTACLE_START_X + OBSTACLE_PITCH * index as f32,
            gap_y: Self::roll_gap(config, rng),
            scored: false,
        }
    }

    /// Anchor the gap around screen center, jittered by ±GAP_JITTER/2.
    fn roll_gap(config: &Config, rng: &mut Pcg32) -> f32 {
        config.center_y() - GAP_DROP + (rng.random::<f32>() - 0.5) * GAP_JITTER
    }

    /// Scroll left one tick. The caller gates this on Playing.
    pub fn advance(&mut self) {
        self.x -= SCROLL_SPEED;
    }

    /// True once the right edge has fully left the screen.
    pub fn off_screen(&self) -> bool {
        self.x < -PIPE_WIDTH
    }

    /// Wrap behind the furthest-right obstacle and re-roll the gap.
    pub fn recycle(&mut self, rightmost_x: f32, config: &Config, rng: &mut Pcg32) {
        self.x = rightmost_x + OBSTACLE_PITCH;
        self.gap_y = Self::roll_gap(config, rng);
        self.scored = false;
    }

    /// Vertical center of the navigable gap.
    pub fn gap_center(&self) -> f32 {
        self.gap_y + GAP_DROP
    }

    /// The two segment bounding boxes at the current resolved position:
    /// lower pipe at the gap anchor, upper pipe PIPE_SPAN above it.
    pub fn segments(&self) -> [Aabb; 2] {
        [
            Aabb::new(self.x, self.gap_y, PIPE_WIDTH, PIPE_HEIGHT),
            Aabb::new(self.x, self.gap_y + PIPE_SPAN, PIPE_WIDTH, PIPE_HEIGHT),
        ]
    }
}

/// Ordered pool of obstacles, spaced OBSTACLE_PITCH apart. The pool is
/// fixed-capacity but behaves as an unbounded ring: obstacles that scroll
/// off the left edge re-enter on the right with a fresh gap.
#[derive(Debug, Clone)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    pub fn new(config: &Config, rng: &mut Pcg32) -> Self {
        let obstacles = (0..OBSTACLE_COUNT)
            .map(|i| Obstacle::new(i, config, rng))
            .collect();
        Self { obstacles }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn obstacles_mut(&mut self) -> &mut [Obstacle] {
        &mut self.obstacles
    }

    /// Scroll the whole field one tick, then wrap any obstacle that has
    /// fully left the screen.
    pub fn tick(&mut self, phase: GamePhase, config: &Config, rng: &mut Pcg32) {
        if phase != GamePhase::Playing {
            return;
        }
        for obstacle in &mut self.obstacles {
            obstacle.advance();
        }

        // At most one obstacle crosses the edge per tick given the pitch,
        // but the scan is cheap either way.
        while let Some(idx) = self.obstacles.iter().position(|o| o.off_screen()) {
            let rightmost = self
                .obstacles
                .iter()
                .map(|o| o.x)
                .fold(f32::MIN, f32::max);
            self.obstacles[idx].recycle(rightmost, config, rng);
        }
    }
}

/// Complete simulation state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub player: Player,
    pub obstacles: ObstacleField,
    /// Far scrolling layer
    pub background: ScrollingLayer,
    /// Near ground strip, scrolls in lockstep with the obstacles
    pub base: ScrollingLayer,
    pub score: ScoreTracker,
    /// Gap placement RNG; consumed at construction and on recycle only
    pub rng: Pcg32,
}

impl GameState {
    pub fn new(seed: u64, config: &Config) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        Self {
            seed,
            time_ticks: 0,
            phase: GamePhase::Ready,
            player: Player::new(config),
            obstacles: ObstacleField::new(config, &mut rng),
            background: ScrollingLayer::new(
                BACKGROUND_TILE_WIDTH,
                BACKGROUND_TILES,
                BACKGROUND_SPEED,
            ),
            base: ScrollingLayer::new(BASE_TILE_WIDTH, BASE_TILES, SCROLL_SPEED),
            score: ScoreTracker::new(),
            rng,
        }
    }
}
