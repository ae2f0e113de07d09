//! Logical screen geometry
//!
//! The simulation anchors entities against a fixed logical screen; actual
//! window size and scaling are the renderer's concern. Passed explicitly at
//! construction and per tick, never read from a global.

use serde::{Deserialize, Serialize};

use crate::consts::PIPE_WIDTH;

/// Logical screen dimensions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: 640.0,
            screen_height: 480.0,
        }
    }
}

impl Config {
    /// x-coordinate of the screen center
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.screen_width / 2.0
    }

    /// y-coordinate of the screen center
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.screen_height / 2.0
    }

    /// An obstacle counts for score once its x drops below this, i.e. once
    /// its right edge has fully passed the horizontal center.
    #[inline]
    pub fn score_threshold(&self) -> f32 {
        self.center_x() - PIPE_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_anchors() {
        let config = Config::default();
        assert_eq!(config.center_x(), 320.0);
        assert_eq!(config.center_y(), 240.0);
        assert_eq!(config.score_threshold(), 268.0);
    }
}
