//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame step only (no wall-clock scaling)
//! - Seeded RNG only, consumed at obstacle placement
//! - Strict update order within a frame (player, obstacles, layers, score,
//!   collision), so collision checks always see post-motion positions
//! - No rendering or platform dependencies

pub mod collision;
pub mod score;
pub mod scroll;
pub mod state;
pub mod tick;

pub use collision::{Aabb, player_hits_field, player_hits_obstacle};
pub use score::ScoreTracker;
pub use scroll::ScrollingLayer;
pub use state::{GameEvent, GamePhase, GameState, Obstacle, ObstacleField, Player, PlayerFrame};
pub use tick::{TickInput, tick};
