//! # Demo Configuration
//!
//! Window and per-demo settings. Every demo ships with built-in defaults; a
//! JSON file may override any subset of fields, and command line flags are
//! applied on top of that.

use crate::{ScaffoldError, ScaffoldResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Frames per second target for the demo loops.
pub const TARGET_FPS: u32 = 60;

/// Window settings shared by all demos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Frame rate cap, `0` runs uncapped
    pub target_fps: u32,
    /// Request a high-DPI framebuffer
    pub high_dpi: bool,
}

impl WindowConfig {
    /// Creates a window config with the default frame rate.
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            target_fps: TARGET_FPS,
            high_dpi: false,
        }
    }

    /// Largest width or height macroquad can be asked for.
    pub const MAX_DIMENSION: u32 = i32::MAX as u32;

    /// Checks that the window has a drawable area macroquad can represent.
    pub fn validate(&self) -> ScaffoldResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ScaffoldError::InvalidConfig(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > Self::MAX_DIMENSION || self.height > Self::MAX_DIMENSION {
            return Err(ScaffoldError::InvalidConfig(format!(
                "window size must be at most {} per side, got {}x{}",
                Self::MAX_DIMENSION,
                self.width,
                self.height
            )));
        }
        Ok(())
    }

    /// Converts into macroquad's window configuration.
    ///
    /// Sizes beyond [`Self::MAX_DIMENSION`] saturate; `validate` rejects them first.
    pub fn to_conf(&self) -> macroquad::window::Conf {
        macroquad::window::Conf {
            window_title: self.title.clone(),
            window_width: i32::try_from(self.width).unwrap_or(i32::MAX),
            window_height: i32::try_from(self.height).unwrap_or(i32::MAX),
            high_dpi: self.high_dpi,
            ..Default::default()
        }
    }
}

/// Settings for the rotating cube demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubeConfig {
    pub window: WindowConfig,
    /// Cube edge length in world units
    pub size: f32,
    /// Degrees added to the rotation every frame
    pub step_deg: f32,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::new("Rotating Cube", 800, 600),
            size: 2.0,
            step_deg: 1.0,
        }
    }
}

/// Settings for the movable ball demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallConfig {
    pub window: WindowConfig,
    /// Circle radius in pixels
    pub radius: f32,
    /// Pixels moved per frame for each held arrow key
    pub speed: f32,
    /// Keep the whole circle inside the window
    pub clamp_to_window: bool,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::new("Movable Ball", 800, 400),
            radius: 50.0,
            speed: 4.0,
            clamp_to_window: false,
        }
    }
}

/// Common behavior of the per-demo settings types.
pub trait DemoSettings: Default + Serialize + DeserializeOwned {
    fn window(&self) -> &WindowConfig;

    fn window_mut(&mut self) -> &mut WindowConfig;

    /// Checks every field, including the window.
    fn validate(&self) -> ScaffoldResult<()>;

    /// Loads settings from a JSON file, keeping defaults for absent fields.
    fn load_from<P: AsRef<Path>>(path: P) -> ScaffoldResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    /// Parses settings from JSON text, keeping defaults for absent fields.
    fn from_json(text: &str) -> ScaffoldResult<Self> {
        let overlay: Value = serde_json::from_str(text)?;
        let mut merged = serde_json::to_value(Self::default())?;
        merge_json(&mut merged, overlay);
        let settings: Self = serde_json::from_value(merged)?;
        settings.validate()?;
        Ok(settings)
    }
}

impl DemoSettings for CubeConfig {
    fn window(&self) -> &WindowConfig {
        &self.window
    }

    fn window_mut(&mut self) -> &mut WindowConfig {
        &mut self.window
    }

    fn validate(&self) -> ScaffoldResult<()> {
        self.window.validate()?;
        if self.size <= 0.0 {
            return Err(ScaffoldError::InvalidConfig(format!(
                "cube size must be positive, got {}",
                self.size
            )));
        }
        if !self.step_deg.is_finite() {
            return Err(ScaffoldError::InvalidConfig(
                "rotation step must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

impl DemoSettings for BallConfig {
    fn window(&self) -> &WindowConfig {
        &self.window
    }

    fn window_mut(&mut self) -> &mut WindowConfig {
        &mut self.window
    }

    fn validate(&self) -> ScaffoldResult<()> {
        self.window.validate()?;
        if self.radius <= 0.0 {
            return Err(ScaffoldError::InvalidConfig(format!(
                "ball radius must be positive, got {}",
                self.radius
            )));
        }
        if self.speed <= 0.0 {
            return Err(ScaffoldError::InvalidConfig(format!(
                "ball speed must be positive, got {}",
                self.speed
            )));
        }
        Ok(())
    }
}

/// Recursively overlays `overlay` onto `base`. Objects merge key by key, any
/// other value replaces what was there.
pub fn merge_json(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
