use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
}

impl Easing {
    pub fn transform(self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction,
        }
    }
}

/// How a single animated step unfolds over time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl AnimationSpec {
    pub const fn tween(duration: Duration, delay: Duration, easing: Easing) -> AnimationSpec {
        AnimationSpec {
            duration,
            delay,
            easing,
        }
    }

    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }
}

/// Interpolates from `from` to `to` once the delay has passed.
#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    spec: AnimationSpec,
    elapsed: Duration,
}

impl Tween {
    pub fn new(from: f32, to: f32, spec: AnimationSpec) -> Tween {
        Tween {
            from,
            to,
            spec,
            elapsed: Duration::ZERO,
        }
    }

    pub fn spec(&self) -> &AnimationSpec {
        &self.spec
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_delayed(&self) -> bool {
        self.elapsed < self.spec.delay
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.spec.total()
    }

    pub fn remaining(&self) -> Duration {
        self.spec.total().saturating_sub(self.elapsed)
    }

    /// Moves the tween forward by `dt` and returns the part of `dt`
    /// left over after the tween finished.
    pub fn advance(&mut self, dt: Duration) -> Duration {
        let used = dt.min(self.remaining());
        self.elapsed += used;
        dt - used
    }

    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        if self.is_delayed() {
            return self.from;
        }

        let running = self.elapsed - self.spec.delay;
        let fraction = running.as_secs_f32() / self.spec.duration.as_secs_f32();
        self.from + (self.to - self.from) * self.spec.easing.transform(fraction)
    }
}
