//! Arena components and tuning.

use bevy::prelude::*;
use serde::Deserialize;

/// Everything built for one run; removed when leaving the game.
#[derive(Component)]
pub struct ArenaEntity;

/// Walkable floor. Item placement probes only hit this.
#[derive(Component)]
pub struct Ground;

/// Boundary wall. Absorbs projectiles.
#[derive(Component)]
pub struct Wall;

/// Stationary target with its own stat block, removed when defeated.
#[derive(Component)]
pub struct TrainingTarget;

/// Arena layout, loaded from the config file.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Side length of the square floor
    pub size: f32,
    pub wall_height: f32,
    pub player_start: (f32, f32, f32),
    pub target_positions: Vec<(f32, f32, f32)>,
    pub target_health: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            size: 40.0,
            wall_height: 2.0,
            player_start: (0.0, 1.5, 0.0),
            target_positions: vec![(6.0, 1.0, -6.0), (-6.0, 1.0, -6.0), (0.0, 1.0, -12.0)],
            target_health: 50.0,
        }
    }
}

impl ArenaConfig {
    pub fn player_start(&self) -> Vec3 {
        Vec3::new(self.player_start.0, self.player_start.1, self.player_start.2)
    }

    /// Center and half extents of the four boundary walls.
    pub fn wall_layout(&self) -> [(Vec3, Vec3); 4] {
        let half = self.size / 2.0;
        let h = self.wall_height / 2.0;
        let thickness = 0.5;
        [
            (Vec3::new(0.0, h, -half), Vec3::new(half, h, thickness)),
            (Vec3::new(0.0, h, half), Vec3::new(half, h, thickness)),
            (Vec3::new(-half, h, 0.0), Vec3::new(thickness, h, half)),
            (Vec3::new(half, h, 0.0), Vec3::new(thickness, h, half)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_enclose_the_floor() {
        let config = ArenaConfig::default();
        let half = config.size / 2.0;

        for (center, extents) in config.wall_layout() {
            let reach = center.x.abs().max(center.z.abs());
            assert_eq!(reach, half);
            assert_eq!(extents.y * 2.0, config.wall_height);
        }
    }
}
