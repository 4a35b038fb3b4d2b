//! # HUD Text
//!
//! Screen-space text overlays: the FPS counter and hint lines.

use macroquad::prelude::*;

/// Below this frame rate the counter turns orange.
pub const FPS_WARN_BELOW: i32 = 30;

/// Below this frame rate the counter turns red.
pub const FPS_CRITICAL_BELOW: i32 = 15;

/// Font size of the FPS counter.
pub const FPS_FONT_SIZE: f32 = 20.0;

/// A line of text anchored by its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct HudText {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    pub color: Color,
}

impl HudText {
    pub fn new(text: impl Into<String>, x: f32, y: f32, font_size: f32, color: Color) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size,
            color,
        }
    }

    /// FPS counter label at the given corner.
    pub fn fps(fps: i32, x: f32, y: f32) -> Self {
        Self::new(fps_label(fps), x, y, FPS_FONT_SIZE, fps_color(fps))
    }

    /// Baseline y that puts the glyph tops at `self.y`.
    ///
    /// macroquad positions text by its baseline.
    pub fn baseline(&self) -> f32 {
        self.y + self.font_size * 0.75
    }

    pub fn draw(&self) {
        draw_text(&self.text, self.x, self.baseline(), self.font_size, self.color);
    }
}

/// Text shown by the FPS counter, the number padded to two columns.
pub fn fps_label(fps: i32) -> String {
    format!("{:2} FPS", fps)
}

/// Counter color for a frame rate: lime, orange when low, red when very low.
pub fn fps_color(fps: i32) -> Color {
    if fps < FPS_CRITICAL_BELOW {
        RED
    } else if fps < FPS_WARN_BELOW {
        ORANGE
    } else {
        LIME
    }
}

/// Draws the current frame rate with its top-left corner at `(x, y)`.
pub fn draw_fps_at(x: f32, y: f32) {
    HudText::fps(get_fps(), x, y).draw();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_label() {
        assert_eq!(fps_label(60), "60 FPS");
        assert_eq!(fps_label(144), "144 FPS");
    }

    #[test]
    fn test_fps_label_pads_single_digit() {
        assert_eq!(fps_label(5), " 5 FPS");
        assert_eq!(fps_label(0), " 0 FPS");
    }

    #[test]
    fn test_fps_color_thresholds() {
        assert_eq!(fps_color(0), RED);
        assert_eq!(fps_color(14), RED);
        assert_eq!(fps_color(15), ORANGE);
        assert_eq!(fps_color(29), ORANGE);
        assert_eq!(fps_color(30), LIME);
        assert_eq!(fps_color(60), LIME);
    }

    #[test]
    fn test_baseline_is_below_top() {
        let text = HudText::new("Arrow keys to move", 10.0, 10.0, 20.0, DARKGRAY);
        assert_eq!(text.baseline(), 25.0);
    }

    #[test]
    fn test_fps_hud_style() {
        let hud = HudText::fps(59, 10.0, 40.0);
        assert_eq!(hud.text, "59 FPS");
        assert_eq!(hud.color, LIME);
        assert_eq!(hud.y, 40.0);

        let slow = HudText::fps(10, 10.0, 40.0);
        assert_eq!(slow.text, "10 FPS");
        assert_eq!(slow.color, RED);
        assert_eq!(HudText::fps(20, 10.0, 40.0).color, ORANGE);
    }
}
