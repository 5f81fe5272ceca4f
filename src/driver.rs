use std::time::Duration;

use log::debug;

use crate::error::{Error, Result};
use crate::tween::{AnimationSpec, Tween};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// First step, still waiting out its start delay or running it.
    Delayed,
    /// Every step after the first, none of them delayed.
    Running,
}

/// Advances the animation clock one tween at a time, each tween moving
/// it `time_speed` further than the last.
#[derive(Clone, Debug)]
pub struct Driver {
    time_speed: f32,
    no_delay: AnimationSpec,
    phase: Phase,
    tween: Tween,
    steps: u64,
}

impl Driver {
    pub fn new(
        time_speed: f32,
        with_delay: AnimationSpec,
        no_delay: AnimationSpec,
    ) -> Result<Driver> {
        if with_delay.total().is_zero() || no_delay.total().is_zero() {
            return Err(Error::InvalidSettings("animation step takes no time"));
        }

        Ok(Driver {
            time_speed,
            no_delay,
            phase: Phase::Delayed,
            tween: Tween::new(0.0, time_speed, with_delay),
            steps: 0,
        })
    }

    pub fn value(&self) -> f32 {
        self.tween.value()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Spec of the step currently in progress.
    pub fn spec(&self) -> &AnimationSpec {
        self.tween.spec()
    }

    pub fn steps_completed(&self) -> u64 {
        self.steps
    }

    /// Moves the clock forward by `dt` of wall time and returns the new
    /// clock value. Time left over from a finished step goes to the next.
    pub fn advance(&mut self, dt: Duration) -> f32 {
        let mut left = self.tween.advance(dt);

        while self.tween.is_finished() {
            self.steps += 1;
            let reached = self.tween.target();
            debug!("step {} reached clock value {}", self.steps, reached);

            if self.phase == Phase::Delayed {
                self.phase = Phase::Running;
                debug!("start delay dropped, driver running");
            }

            self.tween = Tween::new(reached, reached + self.time_speed, self.no_delay);
            if left.is_zero() {
                break;
            }
            left = self.tween.advance(left);
        }

        self.value()
    }
}
