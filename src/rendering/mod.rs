//! # Rendering Module
//!
//! Drawing helpers over macroquad: camera setup, HUD text, frame pacing.

pub mod display;
pub mod ui;

pub use display::*;
pub use ui::*;
