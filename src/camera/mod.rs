//! Camera module - follow camera and viewport letterboxing.

mod follow;
mod letterbox;
mod plugin;

pub use follow::{follow_player, spawn_game_camera, CameraConfig, GameCamera};
pub use letterbox::{
    letterbox_new_cameras, letterbox_rect, physical_viewport, refresh_letterbox, Letterbox,
    LetterboxConfig, NormalizedRect, RefreshLetterbox,
};
pub use plugin::CameraPlugin;
