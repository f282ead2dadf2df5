use super::{place_points, points_extent, ShapeGeometry};
use crate::color::Color;
use crate::element::SceneElement;
use crate::geometry::{Point, Rect};
use crate::screen::Screen;

/// A stroked polyline through points relative to the element's position.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    color: Color,
    points: Vec<Point>,
    width: f32,
    closed: bool,
}

impl Line {
    pub fn new(color: Color, points: Vec<Point>, width: f32) -> Self {
        Self {
            color,
            points,
            width,
            closed: false,
        }
    }

    /// Join the last point back to the first.
    pub fn closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl ShapeGeometry for Line {
    /// The extent of the points grown by half the stroke width.
    fn bounding_box(&self, element: &SceneElement) -> Rect {
        let Some((min, max)) = points_extent(&self.points) else {
            return Rect::EMPTY;
        };

        let half = self.width / 2.0;
        let corners = place_points(
            element,
            &[
                Point::new(min.x - half, min.y - half),
                Point::new(max.x + half, max.y + half),
            ],
        );

        Rect::from_corners(corners[0].x, corners[0].y, corners[1].x, corners[1].y)
    }

    fn render(&self, element: &SceneElement, screen: &mut dyn Screen) {
        if self.points.is_empty() {
            return;
        }

        let color = element.attributes().convert_color(self.color);
        screen.draw_line(
            color,
            &place_points(element, &self.points),
            self.width,
            self.closed,
        );
    }
}
