//! Per-frame draw list for the external renderer
//!
//! The renderer owns textures and drawing; the core resolves, once per
//! frame, which sprite goes where. Sprites are addressed by asset name so
//! the host can load each one exactly once at startup and key its cache by
//! `SpriteKind`.

use glam::Vec2;

use crate::config::Config;
use crate::consts::*;
use crate::sim::{GamePhase, GameState, PlayerFrame};

/// Depth layers; larger draws in front.
mod depth {
    pub const BACKGROUND: f32 = -10.0;
    pub const OBSTACLES: f32 = -1.0;
    pub const OVERLAY: f32 = 0.0;
    pub const BASE: f32 = 1.0;
    pub const SCORE: f32 = 100.0;
    pub const PLAYER: f32 = 200.0;
    pub const READY_MESSAGE: f32 = 400.0;
}

/// Every distinct sprite the game can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Bird(PlayerFrame),
    /// Lower pipe segment, mouth up
    PipeLower,
    /// Upper pipe segment, mouth down
    PipeUpper,
    Background,
    Base,
    /// Score digit 0-9
    Digit(u8),
    /// "Get ready" splash, shown while waiting for the first flap
    ReadyMessage,
    GameOver,
}

const DIGIT_ASSETS: [&str; 10] = [
    "0.png", "1.png", "2.png", "3.png", "4.png", "5.png", "6.png", "7.png", "8.png", "9.png",
];

impl SpriteKind {
    /// Asset file backing this sprite, for the renderer's load-once cache.
    pub fn asset_name(&self) -> &'static str {
        match self {
            SpriteKind::Bird(PlayerFrame::Up) => "yellowbird-upflap.png",
            SpriteKind::Bird(PlayerFrame::Mid) => "yellowbird-midflap.png",
            SpriteKind::Bird(PlayerFrame::Down) => "yellowbird-downflap.png",
            SpriteKind::PipeLower => "pipe-green-up.png",
            SpriteKind::PipeUpper => "pipe-green-down.png",
            SpriteKind::Background => "background-day.png",
            SpriteKind::Base => "base.png",
            SpriteKind::Digit(digit) => DIGIT_ASSETS[*digit as usize % 10],
            SpriteKind::ReadyMessage => "message.png",
            SpriteKind::GameOver => "gameover.png",
        }
    }
}

/// Everything the renderer needs to draw one sprite this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteInstance {
    pub sprite: SpriteKind,
    /// Lower-left corner in logical screen units
    pub pos: Vec2,
    /// Depth layer; larger is in front
    pub depth: f32,
    /// Tilt in radians around the sprite origin (bird only)
    pub rotation: f32,
}

impl SpriteInstance {
    fn flat(sprite: SpriteKind, x: f32, y: f32, depth: f32) -> Self {
        Self {
            sprite,
            pos: Vec2::new(x, y),
            depth,
            rotation: 0.0,
        }
    }
}

/// Resolve the full draw list for the current frame. Exactly one bird frame
/// appears, and overlays are present only in their phase.
pub fn build_scene(state: &GameState, config: &Config) -> Vec<SpriteInstance> {
    let mut scene = Vec::new();

    for &offset in state.background.offsets() {
        scene.push(SpriteInstance::flat(
            SpriteKind::Background,
            offset,
            0.0,
            depth::BACKGROUND,
        ));
    }

    for obstacle in state.obstacles.obstacles() {
        scene.push(SpriteInstance::flat(
            SpriteKind::PipeLower,
            obstacle.x,
            obstacle.gap_y,
            depth::OBSTACLES,
        ));
        scene.push(SpriteInstance::flat(
            SpriteKind::PipeUpper,
            obstacle.x,
            obstacle.gap_y + PIPE_SPAN,
            depth::OBSTACLES,
        ));
    }

    for &offset in state.base.offsets() {
        scene.push(SpriteInstance::flat(
            SpriteKind::Base,
            offset,
            BASE_SINK,
            depth::BASE,
        ));
    }

    scene.push(SpriteInstance {
        sprite: SpriteKind::Bird(state.player.frame),
        pos: Vec2::new(state.player.x(config), state.player.position),
        depth: depth::PLAYER,
        rotation: state.player.rotation(),
    });

    // Two-digit score, tens then ones, ones nudged right
    let score = state.score.current();
    let score_x = config.center_x() - 24.0;
    let score_y = config.center_y() + 100.0;
    scene.push(SpriteInstance::flat(
        SpriteKind::Digit((score / 10 % 10) as u8),
        score_x,
        score_y,
        depth::SCORE,
    ));
    scene.push(SpriteInstance::flat(
        SpriteKind::Digit((score % 10) as u8),
        score_x + 24.0,
        score_y,
        depth::SCORE,
    ));

    match state.phase {
        GamePhase::Ready => scene.push(SpriteInstance::flat(
            SpriteKind::ReadyMessage,
            config.center_x() - 92.0,
            config.center_y() - 74.0,
            depth::READY_MESSAGE,
        )),
        GamePhase::Dead => scene.push(SpriteInstance::flat(
            SpriteKind::GameOver,
            config.center_x() - 96.0,
            config.center_y(),
            depth::OVERLAY,
        )),
        GamePhase::Playing => {}
    }

    scene
}
