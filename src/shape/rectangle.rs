use super::ShapeGeometry;
use crate::color::Color;
use crate::element::SceneElement;
use crate::geometry::{Point, Rect};
use crate::screen::Screen;

/// An axis-aligned rectangle, filled or outlined.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    color: Color,
    rectangle: Rect,
    fill: bool,
    border_weight: f32,
}

impl Rectangle {
    /// A rectangle filled with `color`.
    pub fn filled(color: Color, rectangle: Rect) -> Self {
        Self {
            color,
            rectangle,
            fill: true,
            border_weight: 1.0,
        }
    }

    /// The outline of `rectangle`, `border_weight` wide.
    pub fn outline(color: Color, rectangle: Rect, border_weight: f32) -> Self {
        Self {
            color,
            rectangle,
            fill: false,
            border_weight,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn rectangle(&self) -> Rect {
        self.rectangle
    }

    pub fn is_filled(&self) -> bool {
        self.fill
    }

    pub fn border_weight(&self) -> f32 {
        self.border_weight
    }
}

impl ShapeGeometry for Rectangle {
    fn bounding_box(&self, element: &SceneElement) -> Rect {
        let origin = element.position() + self.rectangle.bottom_left();
        let scale = element.scale_factor();

        Rect::new(
            origin.x,
            origin.y,
            self.rectangle.width * scale.x,
            self.rectangle.height * scale.y,
        )
    }

    fn opaque_box(&self, element: &SceneElement) -> Rect {
        if self.fill && element.attributes().opacity() == 1.0 && self.color.is_opaque() {
            self.bounding_box(element)
        } else {
            Rect::EMPTY
        }
    }

    fn burst(&self, element: &SceneElement, tiles: &[Rect], output: &mut Vec<SceneElement>) {
        if !self.fill {
            output.push(element.clone());
            return;
        }

        let bounds = self.bounding_box(element);

        for tile in tiles {
            let inter = bounds.intersection(tile);
            if !inter.is_empty() {
                let part = Rectangle::filled(self.color, inter);
                output.push(element.fragment(Point::ZERO, part));
            }
        }
    }

    fn render(&self, element: &SceneElement, screen: &mut dyn Screen) {
        let bounds = self.bounding_box(element);
        let points = [
            bounds.bottom_left(),
            bounds.top_left(),
            bounds.top_right(),
            bounds.bottom_right(),
        ];
        let color = element.attributes().convert_color(self.color);

        if self.fill {
            screen.draw_polygon(color, &points);
        } else {
            screen.draw_line(color, &points, self.border_weight, true);
        }
    }
}
