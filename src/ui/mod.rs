//! UI module - title, pause and game-over screens, HUD, and debug readout.

mod debug;
mod hud;
mod menus;
mod plugin;

pub use debug::{DebugOverlay, DebugReadout};
pub use hud::{HealthBar, HudRoot, StatsText};
pub use menus::{GameTitle, MenuButton};
pub use plugin::UiPlugin;
