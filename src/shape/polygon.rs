use super::{place_points, points_extent, ShapeGeometry};
use crate::color::Color;
use crate::element::SceneElement;
use crate::geometry::{Point, Rect};
use crate::screen::Screen;

/// A filled convex polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    color: Color,
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(color: Color, points: Vec<Point>) -> Self {
        Self { color, points }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl ShapeGeometry for Polygon {
    fn bounding_box(&self, element: &SceneElement) -> Rect {
        let Some((min, max)) = points_extent(&self.points) else {
            return Rect::EMPTY;
        };

        let corners = place_points(element, &[min, max]);
        Rect::from_corners(corners[0].x, corners[0].y, corners[1].x, corners[1].y)
    }

    fn render(&self, element: &SceneElement, screen: &mut dyn Screen) {
        if self.points.is_empty() {
            return;
        }

        let color = element.attributes().convert_color(self.color);
        screen.draw_polygon(color, &place_points(element, &self.points));
    }
}
