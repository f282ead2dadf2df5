use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use super::ShapeGeometry;
use crate::color::Color;
use crate::element::SceneElement;
use crate::geometry::{Point, Rect};
use crate::screen::Screen;

/// The vertices of a star inscribed in the unit circle.
///
/// Outer vertices sit at even indices, the first one pointing up; inner
/// vertices sit at odd indices on a circle of radius `ratio`.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    coordinates: Vec<Point>,
}

impl Star {
    /// At least three branches; the ratio is clamped to `[0, 1]`.
    pub fn new(branches: usize, inner_ratio: f32) -> Self {
        Self {
            coordinates: compute_coordinates(branches.max(3), inner_ratio.clamp(0.0, 1.0)),
        }
    }

    pub fn branches(&self) -> usize {
        self.coordinates.len() / 2
    }

    pub fn set_branches(&mut self, branches: usize) {
        assert!(branches > 2, "a star needs at least three branches");
        self.coordinates = compute_coordinates(branches, self.ratio());
    }

    /// Distance of the inner vertices to the center.
    pub fn ratio(&self) -> f32 {
        self.coordinates[1].distance(Point::ZERO)
    }

    pub fn set_ratio(&mut self, ratio: f32) {
        self.coordinates = compute_coordinates(self.branches(), ratio.clamp(0.0, 1.0));
    }

    pub fn coordinates(&self) -> &[Point] {
        &self.coordinates
    }
}

fn compute_coordinates(branches: usize, ratio: f32) -> Vec<Point> {
    let count = 2 * branches;
    let step = TAU / count as f32;

    (0..count)
        .map(|i| {
            let (sin, cos) = (FRAC_PI_2 + i as f32 * step).sin_cos();
            let radius = if i % 2 == 0 { 1.0 } else { ratio };
            Point::new(cos * radius, sin * radius)
        })
        .collect()
}

/// A star drawn in the element's box, with a border and an optional fill.
#[derive(Debug, Clone, PartialEq)]
pub struct StarShape {
    star: Star,
    border_color: Color,
    border_width: f32,
    fill_color: Color,
}

impl StarShape {
    pub fn new(star: Star, border_color: Color, border_width: f32, fill_color: Color) -> Self {
        Self {
            star,
            border_color,
            border_width,
            fill_color,
        }
    }

    pub fn star(&self) -> &Star {
        &self.star
    }

    pub fn border_color(&self) -> Color {
        self.border_color
    }

    pub fn border_width(&self) -> f32 {
        self.border_width
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    fn center(element: &SceneElement) -> Point {
        element.base_bounding_box().center()
    }

    /// The star's vertices in screen coordinates.
    fn screen_coordinates(&self, element: &SceneElement) -> Vec<Point> {
        let attributes = element.attributes();
        let scale = element.scale_factor();
        let center = Self::center(element);
        let w = attributes.width() * scale.x / 2.0;
        let h = attributes.height() * scale.y / 2.0;
        let (sin, cos) = attributes.angle().sin_cos();
        let dir_x = if attributes.is_mirrored() { -1.0 } else { 1.0 };
        let dir_y = if attributes.is_flipped() { -1.0 } else { 1.0 };

        self.star
            .coordinates()
            .iter()
            .map(|p| {
                let x = p.x * dir_x;
                let y = p.y * dir_y;
                Point::new(
                    center.x + (x * cos - y * sin) * w,
                    center.y + (x * sin + y * cos) * h,
                )
            })
            .collect()
    }

    fn render_inside(&self, element: &SceneElement, screen: &mut dyn Screen, coordinates: &[Point]) {
        if self.fill_color.is_transparent() {
            return;
        }

        let color = element.attributes().convert_color(self.fill_color);
        let center = Self::center(element);
        let last = coordinates.len() - 1;

        screen.draw_polygon(
            color,
            &[center, coordinates[1], coordinates[0], coordinates[last]],
        );

        for i in (2..last).step_by(2) {
            screen.draw_polygon(
                color,
                &[center, coordinates[i + 1], coordinates[i], coordinates[i - 1]],
            );
        }
    }
}

impl ShapeGeometry for StarShape {
    /// The square inscribed in the inner circle, when the fill hides what is below.
    fn opaque_box(&self, element: &SceneElement) -> Rect {
        let attributes = element.attributes();

        if !self.fill_color.is_opaque() || attributes.opacity() != 1.0 || attributes.angle() != 0.0
        {
            return Rect::EMPTY;
        }

        let center = Self::center(element);
        let scale = element.scale_factor();
        let ratio = self.star.ratio();
        let w = attributes.width() * ratio * FRAC_PI_4.cos() / 2.0 * scale.x;
        let h = attributes.height() * ratio * FRAC_PI_4.sin() / 2.0 * scale.y;

        Rect::from_corners(center.x - w, center.y - h, center.x + w, center.y + h)
    }

    fn render(&self, element: &SceneElement, screen: &mut dyn Screen) {
        let coordinates = self.screen_coordinates(element);

        self.render_inside(element, screen, &coordinates);
        screen.draw_line(
            element.attributes().convert_color(self.border_color),
            &coordinates,
            self.border_width,
            true,
        );
    }
}
