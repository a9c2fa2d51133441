//! Viewport letterboxing: keep a fixed aspect ratio with bars.

use bevy::prelude::*;
use bevy::render::camera::Viewport;
use bevy::window::{PrimaryWindow, WindowResized};
use serde::Deserialize;

/// Viewport rectangle in normalized (0..1) window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl NormalizedRect {
    pub const FULL: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 1.0,
        height: 1.0,
    };
}

/// Largest centered rect with `target_aspect` inside a window of `current_aspect`.
///
/// A window narrower than the target gets bars top and bottom, a wider one
/// gets bars left and right.
pub fn letterbox_rect(current_aspect: f32, target_aspect: f32) -> NormalizedRect {
    let scale_height = current_aspect / target_aspect;

    if scale_height < 1.0 {
        NormalizedRect {
            x: 0.0,
            y: (1.0 - scale_height) / 2.0,
            width: 1.0,
            height: scale_height,
        }
    } else {
        let scale_width = 1.0 / scale_height;
        NormalizedRect {
            x: (1.0 - scale_width) / 2.0,
            y: 0.0,
            width: scale_width,
            height: 1.0,
        }
    }
}

/// Convert a normalized rect to a physical viewport. `None` for degenerate sizes.
pub fn physical_viewport(rect: NormalizedRect, window_size: UVec2) -> Option<Viewport> {
    if window_size.x == 0 || window_size.y == 0 {
        return None;
    }
    let size = window_size.as_vec2();
    let position = Vec2::new(rect.x, rect.y) * size;
    let extent = (Vec2::new(rect.width, rect.height) * size).max(Vec2::ONE);

    Some(Viewport {
        physical_position: position.round().as_uvec2(),
        physical_size: extent.round().as_uvec2(),
        ..default()
    })
}

/// Target aspect ratio, loaded from the config file.
#[derive(Resource, Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct LetterboxConfig {
    /// Width and height of the reference resolution
    pub target_size: (f32, f32),
}

impl Default for LetterboxConfig {
    fn default() -> Self {
        Self {
            target_size: (16.0, 9.0),
        }
    }
}

/// Keeps a camera's viewport at a fixed aspect ratio.
#[derive(Component, Debug, Clone, Copy)]
pub struct Letterbox {
    pub target: Vec2,
    /// Apply as soon as the camera is spawned
    pub apply_on_start: bool,
}

impl Default for Letterbox {
    fn default() -> Self {
        Self {
            target: Vec2::new(16.0, 9.0),
            apply_on_start: true,
        }
    }
}

impl From<&LetterboxConfig> for Letterbox {
    fn from(config: &LetterboxConfig) -> Self {
        Self {
            target: Vec2::new(config.target_size.0, config.target_size.1),
            apply_on_start: true,
        }
    }
}

impl Letterbox {
    pub fn target_aspect(&self) -> f32 {
        self.target.x / self.target.y
    }
}

/// Reapply letterboxing to every [`Letterbox`] camera.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct RefreshLetterbox;

fn apply_letterbox(camera: &mut Camera, letterbox: &Letterbox, window: &Window) {
    let window_size = UVec2::new(window.physical_width(), window.physical_height());
    if window_size.y == 0 || letterbox.target.y <= 0.0 {
        return;
    }
    let current_aspect = window_size.x as f32 / window_size.y as f32;
    let rect = letterbox_rect(current_aspect, letterbox.target_aspect());
    if let Some(viewport) = physical_viewport(rect, window_size) {
        camera.viewport = Some(viewport);
    }
}

/// Letterbox newly spawned cameras that ask for it.
pub fn letterbox_new_cameras(
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut camera_query: Query<(&mut Camera, &Letterbox), Added<Letterbox>>,
) {
    let Ok(window) = window_query.get_single() else {
        return;
    };
    for (mut camera, letterbox) in camera_query.iter_mut() {
        if letterbox.apply_on_start {
            apply_letterbox(&mut camera, letterbox, window);
        }
    }
}

/// Reapply on resize or on request.
pub fn refresh_letterbox(
    mut resized: EventReader<WindowResized>,
    mut refresh: EventReader<RefreshLetterbox>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut camera_query: Query<(&mut Camera, &Letterbox)>,
) {
    let requested = resized.read().count() + refresh.read().count() > 0;
    if !requested {
        return;
    }
    let Ok(window) = window_query.get_single() else {
        warn!("Letterbox refresh requested without a primary window");
        return;
    };
    for (mut camera, letterbox) in camera_query.iter_mut() {
        apply_letterbox(&mut camera, letterbox, window);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rect_eq(actual: NormalizedRect, expected: NormalizedRect) {
        let close = |a: f32, b: f32| (a - b).abs() < 1e-5;
        assert!(
            close(actual.x, expected.x)
                && close(actual.y, expected.y)
                && close(actual.width, expected.width)
                && close(actual.height, expected.height),
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn matching_aspect_fills_the_window() {
        assert_rect_eq(letterbox_rect(16.0 / 9.0, 16.0 / 9.0), NormalizedRect::FULL);
    }

    #[test]
    fn narrow_window_gets_horizontal_bars() {
        let rect = letterbox_rect(4.0 / 3.0, 16.0 / 9.0);

        assert_rect_eq(
            rect,
            NormalizedRect {
                x: 0.0,
                y: 0.125,
                width: 1.0,
                height: 0.75,
            },
        );
    }

    #[test]
    fn wide_window_gets_vertical_bars() {
        let rect = letterbox_rect(32.0 / 9.0, 16.0 / 9.0);

        assert_rect_eq(
            rect,
            NormalizedRect {
                x: 0.25,
                y: 0.0,
                width: 0.5,
                height: 1.0,
            },
        );
    }

    #[test]
    fn physical_viewport_is_centered() {
        let rect = letterbox_rect(4.0 / 3.0, 16.0 / 9.0);
        let viewport = physical_viewport(rect, UVec2::new(1600, 1200)).unwrap();

        assert_eq!(viewport.physical_position, UVec2::new(0, 150));
        assert_eq!(viewport.physical_size, UVec2::new(1600, 900));
    }

    #[test]
    fn zero_sized_window_is_ignored() {
        assert!(physical_viewport(NormalizedRect::FULL, UVec2::new(0, 720)).is_none());
    }
}
