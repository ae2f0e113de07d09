//! Axis-aligned collision between the player and obstacle segments
//!
//! All gameplay geometry is rectangles anchored at their lower-left corner,
//! so a strict AABB overlap test is the whole story. Checks must run after
//! every entity has moved for the frame.

use glam::Vec2;

use super::state::{Obstacle, ObstacleField, Player};
use crate::config::Config;

/// An axis-aligned box anchored at its lower-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Strict overlap: boxes that merely share an edge do not collide.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.pos.x + self.size.x > other.pos.x
            && self.pos.x < other.pos.x + other.size.x
            && self.pos.y + self.size.y > other.pos.y
            && self.pos.y < other.pos.y + other.size.y
    }
}

/// True if the player overlaps either segment of the obstacle, evaluated at
/// the obstacle's current resolved position.
pub fn player_hits_obstacle(player: &Player, obstacle: &Obstacle, config: &Config) -> bool {
    let player_box = player.aabb(config);
    obstacle
        .segments()
        .iter()
        .any(|segment| player_box.overlaps(segment))
}

/// Stateless sweep of the whole field.
pub fn player_hits_field(player: &Player, field: &ObstacleField, config: &Config) -> bool {
    field
        .obstacles()
        .iter()
        .any(|obstacle| player_hits_obstacle(player, obstacle, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn obstacle_at(x: f32, gap_y: f32) -> Obstacle {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut obstacle = Obstacle::new(0, &config, &mut rng);
        obstacle.x = x;
        obstacle.gap_y = gap_y;
        obstacle
    }

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Aabb::new(5.0, 5.0, 10.0, 10.0)));
        assert!(a.overlaps(&Aabb::new(-5.0, -5.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Aabb::new(20.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Aabb::new(0.0, -20.0, 10.0, 10.0)));
        // Shared edges are not a collision
        assert!(!a.overlaps(&Aabb::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Aabb::new(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_clear_pass_through_gap_center() {
        let config = Config::default();
        let mut player = Player::new(&config);
        // Obstacle overlapping the player column, gap anchored so its
        // center is at screen center
        let obstacle = obstacle_at(config.center_x() - PIPE_WIDTH / 2.0, 240.0 - GAP_DROP);

        // Hold the player's box centered in the 100-unit gap; never a hit
        player.position = obstacle.gap_center() - PLAYER_HEIGHT / 2.0;
        assert!(!player_hits_obstacle(&player, &obstacle, &config));
    }

    #[test]
    fn test_hit_at_gap_boundary() {
        let config = Config::default();
        let mut player = Player::new(&config);
        let obstacle = obstacle_at(config.center_x() - PIPE_WIDTH / 2.0, 240.0 - GAP_DROP);

        // One unit into the lower pipe
        player.position = obstacle.gap_y + PIPE_HEIGHT - 1.0;
        assert!(player_hits_obstacle(&player, &obstacle, &config));

        // One unit into the upper pipe
        player.position = obstacle.gap_y + PIPE_SPAN - PLAYER_HEIGHT + 1.0;
        assert!(player_hits_obstacle(&player, &obstacle, &config));
    }

    #[test]
    fn test_descent_through_gap_boundary_hits_once() {
        let config = Config::default();
        let mut player = Player::new(&config);
        let obstacle = obstacle_at(config.center_x() - PIPE_WIDTH / 2.0, 240.0 - GAP_DROP);

        // Walk the player down across the gap; it must hit the lower pipe
        // for some frame range and be clear inside the gap
        let mut hits = 0;
        let mut clears = 0;
        let mut y = obstacle.gap_y + PIPE_SPAN + 10.0;
        while y > obstacle.gap_y + PIPE_HEIGHT - 30.0 {
            player.position = y;
            if player_hits_obstacle(&player, &obstacle, &config) {
                hits += 1;
            } else {
                clears += 1;
            }
            y -= 4.0;
        }
        assert!(hits > 0);
        assert!(clears > 0);
    }

    #[test]
    fn test_horizontal_miss() {
        let config = Config::default();
        let mut player = Player::new(&config);
        // Obstacle far to the right of the player column, gap irrelevant
        let obstacle = obstacle_at(600.0, 240.0 - GAP_DROP);
        player.position = obstacle.gap_y + 100.0; // well inside pipe height
        assert!(!player_hits_obstacle(&player, &obstacle, &config));
    }

    #[test]
    fn test_field_sweep_finds_single_hit() {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut field = ObstacleField::new(&config, &mut rng);
        let mut player = Player::new(&config);

        assert!(!player_hits_field(&player, &field, &config));

        // Drag obstacle 7 over the player column at pipe height
        field.obstacles_mut()[7].x = config.center_x() - PIPE_WIDTH / 2.0;
        player.position = field.obstacles()[7].gap_y + 10.0;
        assert!(player_hits_field(&player, &field, &config));
    }
}
