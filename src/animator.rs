use std::time::Duration;

use log::trace;
use sfml::system::Vector2f;

use crate::driver::Driver;
use crate::error::Result;
use crate::frame::{Frame, Palette};
use crate::rotor::Arms;
use crate::settings::Settings;
use crate::trail::Trail;

/// Traces the tip of the outer arm while the driver moves the clock.
pub struct Animator {
    driver: Driver,
    trail: Trail,
    center: Vector2f,
    radius: f32,
    center_point_radius: f32,
    palette: Palette,
}

impl Animator {
    pub fn new(settings: &Settings) -> Result<Animator> {
        settings.validate()?;

        Ok(Animator {
            driver: Driver::new(settings.time_speed, settings.with_delay(), settings.no_delay())?,
            trail: Trail::new(),
            center: settings.center(),
            radius: settings.to_px(settings.radius),
            center_point_radius: settings.to_px(settings.center_point_radius),
            palette: Palette {
                inner: settings.inner_color,
                outer: settings.outer_color,
            },
        })
    }

    pub fn driver(&self) -> &Driver {
        &self.driver
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn time(&self) -> f32 {
        self.driver.value()
    }

    pub fn arms(&self) -> Arms {
        Arms::at(self.time(), self.center, self.radius)
    }

    /// Advances the clock by `dt`. When the clock moved, the new outer tip
    /// is appended to the trail and `true` is returned.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let before = self.driver.value();
        let now = self.driver.advance(dt);
        if now == before {
            return false;
        }

        let outer = self.arms().outer;
        self.trail.append(outer);
        trace!("frame {} at t = {}: {:?}", self.trail.len(), now, outer);
        true
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame::new(&self.arms(), self.center_point_radius, &self.trail, self.palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::Phase;
    use crate::frame::DrawCommand;
    use crate::settings::OUTER_SHIFT;

    fn close(a: Vector2f, b: Vector2f) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    #[test]
    fn geometry_at_start() {
        let animator = Animator::new(&Settings::default()).unwrap();
        let arms = animator.arms();

        assert_eq!(animator.time(), 0.0);
        assert!(animator.trail().is_empty());
        assert_eq!(arms.center, Vector2f::new(400.0, 300.0));
        assert!(close(arms.inner, Vector2f::new(400.0, 172.0)));
        assert!(close(
            arms.outer,
            Vector2f::new(
                400.0 + 128.0 * OUTER_SHIFT.cos(),
                172.0 + 128.0 * OUTER_SHIFT.sin()
            )
        ));
    }

    #[test]
    fn one_step_one_point() {
        let mut animator = Animator::new(&Settings::default()).unwrap();
        assert_eq!(animator.driver().spec().delay, Duration::from_millis(5000));

        assert!(animator.tick(Duration::from_millis(10_000)));
        assert_eq!(animator.time(), 5.0);
        assert_eq!(animator.trail().len(), 1);
        assert_eq!(animator.trail().last(), Some(animator.arms().outer));
        assert_eq!(animator.driver().phase(), Phase::Running);
        assert_eq!(animator.driver().spec().delay, Duration::ZERO);
    }

    #[test]
    fn no_frames_while_delayed() {
        let mut animator = Animator::new(&Settings::default()).unwrap();
        for _ in 0..100 {
            assert!(!animator.tick(Duration::from_millis(16)));
        }
        assert!(animator.trail().is_empty());
    }

    #[test]
    fn trail_counts_frames() {
        let mut animator = Animator::new(&Settings::default()).unwrap();
        animator.tick(Duration::from_millis(5000));

        let mut frames = 0;
        for _ in 0..400 {
            if animator.tick(Duration::from_millis(16)) {
                frames += 1;
            }
        }

        assert_eq!(frames, 400);
        assert_eq!(animator.trail().len(), frames);
        assert_eq!(animator.trail().segments().count(), frames - 1);
        assert_eq!(animator.trail().last(), Some(animator.arms().outer));
    }

    #[test]
    fn frame_does_not_append() {
        let mut animator = Animator::new(&Settings::default()).unwrap();
        animator.tick(Duration::from_millis(6000));

        let frame = animator.frame();
        assert_eq!(frame.commands().len(), 4);
        assert!(matches!(
            frame.commands()[3],
            DrawCommand::Polyline { trail, .. } if trail.len() == 1
        ));
        let _ = animator.frame();
        assert_eq!(animator.trail().len(), 1);
    }

    #[test]
    fn rejects_invalid_settings() {
        let settings = Settings {
            height: -1.0,
            ..Settings::default()
        };
        assert!(Animator::new(&settings).is_err());
    }
}
