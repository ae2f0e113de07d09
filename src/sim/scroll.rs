//! Wrap-around scrolling of a bounded tile set
//!
//! The illusion of infinite horizontal scroll from a handful of tiles: each
//! tile slides left while Playing and, once fully off-screen, jumps to the
//! trailing edge of the strip. Tile count times tile width only has to
//! cover the visible width plus one wrap margin.

use super::state::GamePhase;

/// One tiled visual layer with an independent scroll speed.
#[derive(Debug, Clone)]
pub struct ScrollingLayer {
    /// Per-tile horizontal offsets
    offsets: Vec<f32>,
    tile_width: f32,
    /// Units scrolled per tick while Playing
    speed: f32,
}

impl ScrollingLayer {
    pub fn new(tile_width: f32, tiles: usize, speed: f32) -> Self {
        Self {
            offsets: (0..tiles).map(|i| i as f32 * tile_width).collect(),
            tile_width,
            speed,
        }
    }

    pub fn offsets(&self) -> &[f32] {
        &self.offsets
    }

    pub fn tile_width(&self) -> f32 {
        self.tile_width
    }

    /// Scroll one tick (Playing only). Afterwards every offset is
    /// >= -tile_width, so the strip never shows a hole.
    pub fn tick(&mut self, phase: GamePhase) {
        if phase != GamePhase::Playing {
            return;
        }
        let span = self.tile_width * self.offsets.len() as f32;
        for offset in &mut self.offsets {
            *offset -= self.speed;
            if *offset < -self.tile_width {
                *offset += span;
            }
        }
    }
}
