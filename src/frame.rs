use sfml::graphics::Color;
use sfml::system::Vector2f;

use crate::rotor::Arms;
use crate::trail::Trail;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand<'a> {
    Circle {
        center: Vector2f,
        radius: f32,
        color: Color,
    },
    Line {
        start: Vector2f,
        end: Vector2f,
        color: Color,
    },
    Polyline {
        trail: &'a Trail,
        color: Color,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub inner: Color,
    pub outer: Color,
}

/// Draw commands for one frame, in painting order.
#[derive(Clone, Debug)]
pub struct Frame<'a> {
    commands: [DrawCommand<'a>; 4],
}

impl<'a> Frame<'a> {
    pub fn new(
        arms: &Arms,
        center_point_radius: f32,
        trail: &'a Trail,
        palette: Palette,
    ) -> Frame<'a> {
        Frame {
            commands: [
                DrawCommand::Circle {
                    center: arms.center,
                    radius: center_point_radius,
                    color: palette.inner,
                },
                DrawCommand::Line {
                    start: arms.center,
                    end: arms.inner,
                    color: palette.inner,
                },
                DrawCommand::Line {
                    start: arms.inner,
                    end: arms.outer,
                    color: palette.outer,
                },
                DrawCommand::Polyline {
                    trail,
                    color: palette.outer,
                },
            ],
        }
    }

    pub fn commands(&self) -> &[DrawCommand<'a>] {
        &self.commands
    }
}
