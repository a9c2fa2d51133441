//! Finding a free spot on the ground for a new item.

use bevy::prelude::*;
use rand::Rng;
use serde::Deserialize;

/// Rules for random item placement.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlacementRules {
    /// Radius of the disk around the center
    pub radius: f32,
    pub max_attempts: u32,
    /// Height above the center the ground probe starts from
    pub probe_height: f32,
    /// Maximum length of the ground probe
    pub probe_distance: f32,
    /// How far above the ground an item floats
    pub hover_height: f32,
    /// Minimum distance to any other live item
    pub proximity_radius: f32,
}

impl Default for PlacementRules {
    fn default() -> Self {
        Self {
            radius: 10.0,
            max_attempts: 10,
            probe_height: 20.0,
            probe_distance: 40.0,
            hover_height: 0.5,
            proximity_radius: 1.0,
        }
    }
}

/// Uniform random point inside a disk of `radius` around the origin.
pub fn random_point_in_disk<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec2 {
    let distance = radius * rng.gen::<f32>().sqrt();
    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    Vec2::from_angle(angle) * distance
}

/// True when any of `occupied` lies within `radius` of `position`.
pub fn is_occupied(position: Vec3, occupied: &[Vec3], radius: f32) -> bool {
    let radius_sq = radius * radius;
    occupied
        .iter()
        .any(|other| other.distance_squared(position) <= radius_sq)
}

/// Try up to `max_attempts` random candidates around `center`.
///
/// `probe` receives the ray origin (above the candidate) and returns the
/// ground hit point under it, if any. Returns `None` when every attempt
/// missed the ground or landed too close to another item.
pub fn find_spawn_position<R, P>(
    center: Vec3,
    rules: &PlacementRules,
    rng: &mut R,
    mut probe: P,
    occupied: &[Vec3],
) -> Option<Vec3>
where
    R: Rng + ?Sized,
    P: FnMut(Vec3) -> Option<Vec3>,
{
    for _ in 0..rules.max_attempts {
        let offset = random_point_in_disk(rng, rules.radius);
        let origin = center + Vec3::new(offset.x, rules.probe_height, offset.y);

        let Some(ground) = probe(origin) else {
            continue;
        };

        let candidate = ground + Vec3::Y * rules.hover_height;
        if !is_occupied(candidate, occupied, rules.proximity_radius) {
            return Some(candidate);
        }
    }
    None
}
