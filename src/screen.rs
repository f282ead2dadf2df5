//! The backend contract every scene element renders through.

use crate::color::Color;
use crate::geometry::Point;
use crate::sprite::Sprite;

/// An opaque handle to a shader program owned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderProgram {
    id: u64,
}

impl ShaderProgram {
    pub fn new(id: u64) -> Self {
        Self { id }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

/// A drawing surface.
///
/// Coordinates are absolute screen coordinates, y-up. Colors are already
/// tinted by the element's rendering attributes when they reach the screen.
pub trait Screen {
    /// Draw `sprite` with its bottom-left corner at `position`.
    ///
    /// The sprite's attributes carry the final size, tint, angle and
    /// reflections to apply.
    fn render(&mut self, position: Point, sprite: &Sprite);

    /// Draw a polyline through `points`, joining the last point to the first
    /// when `closed`.
    fn draw_line(&mut self, color: Color, points: &[Point], width: f32, closed: bool);

    /// Fill the convex polygon described by `points`.
    fn draw_polygon(&mut self, color: Color, points: &[Point]);

    fn push_shader(&mut self, program: &ShaderProgram);

    fn pop_shader(&mut self);
}

/// A single backend call captured by [`RecordingScreen`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Sprite {
        position: Point,
        sprite: Sprite,
    },
    Line {
        color: Color,
        points: Vec<Point>,
        width: f32,
        closed: bool,
    },
    Polygon {
        color: Color,
        points: Vec<Point>,
    },
    PushShader(ShaderProgram),
    PopShader,
}

/// A screen that records every call instead of drawing.
///
/// Useful for tests and for replaying a frame on another backend.
#[derive(Debug, Default, Clone)]
pub struct RecordingScreen {
    calls: Vec<DrawCall>,
}

impl RecordingScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Only the sprite calls, with their positions.
    pub fn sprites(&self) -> impl Iterator<Item = (Point, &Sprite)> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Sprite { position, sprite } => Some((*position, sprite)),
            _ => None,
        })
    }

    /// Replay the recorded calls on another screen.
    pub fn replay(&self, screen: &mut dyn Screen) {
        for call in &self.calls {
            match call {
                DrawCall::Sprite { position, sprite } => screen.render(*position, sprite),
                DrawCall::Line {
                    color,
                    points,
                    width,
                    closed,
                } => screen.draw_line(*color, points, *width, *closed),
                DrawCall::Polygon { color, points } => screen.draw_polygon(*color, points),
                DrawCall::PushShader(program) => screen.push_shader(program),
                DrawCall::PopShader => screen.pop_shader(),
            }
        }
    }
}

impl Screen for RecordingScreen {
    fn render(&mut self, position: Point, sprite: &Sprite) {
        self.calls.push(DrawCall::Sprite {
            position,
            sprite: sprite.clone(),
        });
    }

    fn draw_line(&mut self, color: Color, points: &[Point], width: f32, closed: bool) {
        self.calls.push(DrawCall::Line {
            color,
            points: points.to_vec(),
            width,
            closed,
        });
    }

    fn draw_polygon(&mut self, color: Color, points: &[Point]) {
        self.calls.push(DrawCall::Polygon {
            color,
            points: points.to_vec(),
        });
    }

    fn push_shader(&mut self, program: &ShaderProgram) {
        self.calls.push(DrawCall::PushShader(*program));
    }

    fn pop_shader(&mut self) {
        self.calls.push(DrawCall::PopShader);
    }
}
