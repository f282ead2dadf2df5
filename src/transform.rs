use crate::geometry::{Point, Rect};

/// A 2D affine transformation stored as a row-major 2x3 matrix.
///
/// Maps `(x, y)` to `(a*x + b*y + tx, c*x + d*y + ty)`. Used to find the
/// screen extent of shapes rotated around their center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Matrix data: [a, b, tx, c, d, ty]
    pub data: [f32; 6],
}

impl Transform {
    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            data: [
                1.0, 0.0, x, // row 0
                0.0, 1.0, y, // row 1
            ],
        }
    }

    /// Counter-clockwise rotation around the origin (y-up).
    pub fn rotate(angle_radians: f32) -> Self {
        let (sin, cos) = angle_radians.sin_cos();
        Self {
            data: [
                cos, -sin, 0.0, // row 0
                sin, cos, 0.0, // row 1
            ],
        }
    }

    /// Compose this transform with another: applies `other` first, then `self`.
    pub fn then(&self, other: &Transform) -> Transform {
        let [a1, b1, tx1, c1, d1, ty1] = self.data;
        let [a2, b2, tx2, c2, d2, ty2] = other.data;

        Transform {
            data: [
                a1 * a2 + b1 * c2,
                a1 * b2 + b1 * d2,
                a1 * tx2 + b1 * ty2 + tx1,
                c1 * a2 + d1 * c2,
                c1 * b2 + d1 * d2,
                c1 * tx2 + d1 * ty2 + ty1,
            ],
        }
    }

    /// Re-center this transform so it pivots around `(x, y)` instead of the origin.
    pub fn center_at(&self, x: f32, y: f32) -> Transform {
        Transform::translate(x, y)
            .then(self)
            .then(&Transform::translate(-x, -y))
    }

    pub fn transform_point(&self, p: Point) -> Point {
        let [a, b, tx, c, d, ty] = self.data;
        Point::new(a * p.x + b * p.y + tx, c * p.x + d * p.y + ty)
    }

    /// The axis-aligned box containing the four transformed corners of `rect`.
    pub fn transform_rect_bounds(&self, rect: &Rect) -> Rect {
        let corners = [
            rect.bottom_left(),
            rect.bottom_right(),
            rect.top_left(),
            rect.top_right(),
        ]
        .map(|p| self.transform_point(p));

        let mut min = corners[0];
        let mut max = corners[0];
        for p in &corners[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }

        Rect::from_corners(min.x, min.y, max.x, max.y)
    }
}
