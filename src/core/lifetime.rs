//! Timed self-destruction for short-lived entities.

use bevy::prelude::*;

/// Despawns the entity once the timer runs out.
///
/// Used by projectiles (so missed shots never accumulate) and by
/// one-shot visual effects.
#[derive(Component, Debug)]
pub struct Lifetime(pub Timer);

impl Lifetime {
    pub fn from_seconds(seconds: f32) -> Self {
        Self(Timer::from_seconds(seconds, TimerMode::Once))
    }

    /// Advance the timer; returns true once it has expired.
    pub fn tick(&mut self, delta: std::time::Duration) -> bool {
        self.0.tick(delta);
        self.0.finished()
    }
}

/// System that despawns entities whose lifetime expired.
pub fn expire_lifetimes(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Lifetime)>,
) {
    for (entity, mut lifetime) in query.iter_mut() {
        if lifetime.tick(time.delta()) {
            commands.entity(entity).despawn_recursive();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn lifetime_expires_after_duration() {
        let mut lifetime = Lifetime::from_seconds(5.0);

        assert!(!lifetime.tick(Duration::from_secs_f32(4.9)));
        assert!(lifetime.tick(Duration::from_secs_f32(0.2)));
    }
}
