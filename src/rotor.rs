use std::f32::consts::PI;

use sfml::system::Vector2f;

use crate::settings::{INNER_SHIFT, OUTER_SHIFT};

/// A unit vector spinning around the origin, `e^((speed * t + shift) * i)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotor {
    pub angular_speed: f32,
    pub phase_shift: f32,
}

/// Arm attached to the window center, `e^(t * i)`.
pub const INNER: Rotor = Rotor {
    angular_speed: 1.0,
    phase_shift: INNER_SHIFT,
};

/// Arm attached to the tip of the inner one, `e^(pi * t * i)`.
pub const OUTER: Rotor = Rotor {
    angular_speed: PI,
    phase_shift: OUTER_SHIFT,
};

impl Rotor {
    /// Direction of the arm at clock value `time`.
    ///
    /// The clock is negated, which flips the direction of rotation.
    pub fn at(&self, time: f32) -> Vector2f {
        evaluate(-time, self.angular_speed, self.phase_shift)
    }
}

pub fn evaluate(time: f32, angular_speed: f32, phase_shift: f32) -> Vector2f {
    let (sin, cos) = (angular_speed * time + phase_shift).sin_cos();
    Vector2f::new(cos, sin)
}

pub fn scale(vector: Vector2f, factor: f32) -> Vector2f {
    Vector2f::new(vector.x * factor, vector.y * factor)
}

pub fn place(vector: Vector2f, origin_x: f32, origin_y: f32) -> Vector2f {
    Vector2f::new(origin_x + vector.x, origin_y + vector.y)
}

/// Absolute positions of both arm tips.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arms {
    pub center: Vector2f,
    pub inner: Vector2f,
    pub outer: Vector2f,
}

impl Arms {
    pub fn at(time: f32, center: Vector2f, radius: f32) -> Arms {
        let inner = place(scale(INNER.at(time), radius), center.x, center.y);
        let outer = place(scale(OUTER.at(time), radius), inner.x, inner.y);

        Arms {
            center,
            inner,
            outer,
        }
    }
}
