use std::time::Duration;

use log::info;
use sfml::graphics::{
    CircleShape, Color, PrimitiveType, RenderStates, RenderTarget, RenderWindow, Shape,
    Transformable, Vertex,
};
use sfml::system::{Clock, Time};
use sfml::window::{ContextSettings, Event, Style, VideoMode};
use sfml::SfBox;

use crate::animator::Animator;
use crate::error::{Error, Result};
use crate::frame::{DrawCommand, Frame};
use crate::settings::Settings;

pub struct App {
    pub frame_clock: SfBox<Clock>,
    pub ctx_settings: ContextSettings,

    pub settings: Settings,
    pub animator: Animator,

    pub window: Option<RenderWindow>,

    vertices: Vec<Vertex>,
}

impl App {
    //
    // Lifecycle code
    //

    pub fn new(settings: Settings) -> Result<App> {
        let animator = Animator::new(&settings)?;

        Ok(App {
            frame_clock: Clock::start(),
            ctx_settings: ContextSettings {
                antialiasing_level: settings.antialiasing_level,
                ..Default::default()
            },
            settings,
            animator,
            window: None,
            vertices: Vec::new(),
        })
    }

    pub fn init(&mut self) -> Result<()> {
        let (width, height) = self.settings.window_size();

        let mut window = RenderWindow::new(
            VideoMode::from((width, height)),
            "Spirograph",
            Style::TITLEBAR | Style::CLOSE,
            &self.ctx_settings,
        );
        if !window.is_open() {
            return Err(Error::WindowUnavailable);
        }
        window.set_framerate_limit(self.settings.fps_limit);

        info!(
            "opened {}x{} window (antialiasing: {})",
            width,
            height,
            window.settings().antialiasing_level
        );

        self.window = Some(window);
        self.frame_clock.restart();
        Ok(())
    }

    pub fn run(&mut self) -> Result<()> {
        if self.window.is_none() {
            self.init()?;
        }

        'main_loop: loop {
            let window = match self.window.as_mut() {
                Some(window) if window.is_open() => window,
                _ => break,
            };

            while let Some(event) = window.poll_event() {
                if let Event::Closed = event {
                    window.close();
                    break 'main_loop;
                }
            }

            let dt = Self::to_duration(self.frame_clock.restart());
            self.animator.tick(dt);

            self.request_draw();
            if let Some(window) = self.window.as_mut() {
                window.display();
            }
        }

        info!(
            "window closed at t = {} after {} steps, {} traced points",
            self.animator.time(),
            self.animator.driver().steps_completed(),
            self.animator.trail().len()
        );
        Ok(())
    }

    fn to_duration(time: Time) -> Duration {
        Duration::from_micros(time.as_microseconds().max(0) as u64)
    }

    //
    // Draw code
    //

    pub fn request_draw(&mut self) {
        if let Some(window) = self.window.as_mut() {
            Self::draw_frame(
                window,
                self.settings.background,
                &self.animator.frame(),
                &mut self.vertices,
            );
        }
    }

    /// Clears `render_target` and paints `frame` on it. `scratch` is reused
    /// between frames to hold the trail vertices.
    pub fn draw_frame(
        render_target: &mut dyn RenderTarget,
        background: Color,
        frame: &Frame<'_>,
        scratch: &mut Vec<Vertex>,
    ) {
        render_target.clear(background);

        for command in frame.commands() {
            match *command {
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => {
                    let mut circle = CircleShape::new(radius, 16);
                    circle.set_origin((radius, radius));
                    circle.set_position(center);
                    circle.set_fill_color(color);
                    render_target.draw(&circle);
                }
                DrawCommand::Line { start, end, color } => {
                    let line = [
                        Vertex::new(start, color, (0.0, 0.0).into()),
                        Vertex::new(end, color, (0.0, 0.0).into()),
                    ];
                    render_target.draw_primitives(
                        &line,
                        PrimitiveType::LINES,
                        &RenderStates::DEFAULT,
                    );
                }
                DrawCommand::Polyline { trail, color } => {
                    scratch.clear();
                    scratch.reserve(trail.len().saturating_sub(1) * 2);
                    for (start, end) in trail.segments() {
                        scratch.push(Vertex::new(start, color, (0.0, 0.0).into()));
                        scratch.push(Vertex::new(end, color, (0.0, 0.0).into()));
                    }
                    render_target.draw_primitives(
                        &scratch[..],
                        PrimitiveType::LINES,
                        &RenderStates::DEFAULT,
                    );
                }
            }
        }
    }
}
