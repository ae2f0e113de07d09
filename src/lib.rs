//! Gapwing - a side-scrolling flap-and-glide arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, scoring, game state)
//! - `scene`: Per-frame draw list for an external renderer
//! - `config`: Logical screen geometry
//!
//! Rendering, asset loading, input polling and audio playback live outside
//! this crate. The core resolves positions and frame selections; a host
//! draws them and plays the sounds named by emitted events.

pub mod config;
pub mod scene;
pub mod sim;

pub use config::Config;
pub use sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Game tuning constants
pub mod consts {
    /// Gravity added to the player's vertical velocity each tick
    pub const GRAVITY: f32 = -0.35;
    /// Vertical velocity set by a flap
    pub const FLAP_IMPULSE: f32 = 5.0;
    /// Player sprite size
    pub const PLAYER_WIDTH: f32 = 34.0;
    pub const PLAYER_HEIGHT: f32 = 24.0;
    /// Cosmetic tilt per unit of vertical velocity (radians)
    pub const TILT_PER_VELOCITY: f32 = 0.05;
    /// |velocity| must exceed this to leave the mid animation frame
    pub const FRAME_VELOCITY_THRESHOLD: f32 = 1.0;
    /// Rest height of the ground surface (112-unit base strip, sunk by 50)
    pub const GROUND_Y: f32 = 62.0;

    /// Pipe segment size
    pub const PIPE_WIDTH: f32 = 52.0;
    pub const PIPE_HEIGHT: f32 = 320.0;
    /// Offset of the upper segment above the lower one (leaves a 100-unit gap)
    pub const PIPE_SPAN: f32 = 420.0;
    /// The gap anchor sits this far below screen center (pipe height + half gap)
    pub const GAP_DROP: f32 = 370.0;
    /// Full range of the random gap jitter (drawn uniformly, so ±100)
    pub const GAP_JITTER: f32 = 200.0;

    /// Obstacle field
    pub const OBSTACLE_COUNT: usize = 100;
    pub const OBSTACLE_START_X: f32 = 600.0;
    pub const OBSTACLE_PITCH: f32 = 200.0;
    /// Horizontal scroll speed of obstacles and the ground while playing
    pub const SCROLL_SPEED: f32 = 3.0;

    /// Far background tiling
    pub const BACKGROUND_TILE_WIDTH: f32 = 288.0;
    pub const BACKGROUND_TILES: usize = 4;
    pub const BACKGROUND_SPEED: f32 = 1.0;
    /// Ground strip tiling (scrolls at SCROLL_SPEED)
    pub const BASE_TILE_WIDTH: f32 = 336.0;
    pub const BASE_TILES: usize = 3;
    /// The ground strip is drawn sunk below the origin
    pub const BASE_SINK: f32 = -50.0;
}
