use std::f32::consts::PI;
use std::time::Duration;

use sfml::graphics::Color;
use sfml::system::Vector2f;

use crate::error::{Error, Result};
use crate::tween::{AnimationSpec, Easing};

pub const INNER_SHIFT: f32 = -PI / 2.0;
// 49/36 is a tuning value, keep it as is.
pub const OUTER_SHIFT: f32 = -49.0 * PI / 36.0;

/// Everything fixed at startup. Lengths are in device-independent units
/// and go through [`Settings::to_px`] before they reach the screen.
#[derive(Clone, Debug)]
pub struct Settings {
    pub width: f32,
    pub height: f32,
    pub radius: f32,
    pub center_point_radius: f32,
    pub density: f32,

    pub inner_color: Color,
    pub outer_color: Color,
    pub background: Color,

    pub time_speed: f32,
    pub step_duration: Duration,
    pub start_delay: Duration,

    pub fps_limit: u32,
    pub antialiasing_level: u32,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            width: 800.0,
            height: 600.0,
            radius: 128.0,
            center_point_radius: 2.0,
            // SFML does not report a pixel density
            density: 1.0,
            inner_color: Color::BLUE,
            outer_color: Color::GREEN,
            background: Color::WHITE,
            time_speed: 5.0,
            step_duration: Duration::from_millis(5000),
            start_delay: Duration::from_millis(5000),
            fps_limit: 60,
            antialiasing_level: 8,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(Error::InvalidSettings("window size must be positive"));
        }
        if !(self.density > 0.0) {
            return Err(Error::InvalidSettings("pixel density must be positive"));
        }
        if self.step_duration.is_zero() {
            return Err(Error::InvalidSettings("step duration must not be zero"));
        }
        Ok(())
    }

    pub fn to_px(&self, dp: f32) -> f32 {
        dp * self.density
    }

    /// Window size in whole pixels.
    pub fn window_size(&self) -> (u32, u32) {
        (
            self.to_px(self.width).round() as u32,
            self.to_px(self.height).round() as u32,
        )
    }

    pub fn center(&self) -> Vector2f {
        Vector2f::new(self.to_px(self.width) / 2.0, self.to_px(self.height) / 2.0)
    }

    pub fn with_delay(&self) -> AnimationSpec {
        AnimationSpec::tween(self.step_duration, self.start_delay, Easing::Linear)
    }

    pub fn no_delay(&self) -> AnimationSpec {
        AnimationSpec::tween(self.step_duration, Duration::ZERO, Easing::Linear)
    }
}
