//! The closed set of drawable shapes a [`SceneElement`] can hold.
//!
//! Every shape answers the same four questions: where it is
//! ([`bounding_box`](Shape::bounding_box)), which part of the screen it fully
//! covers ([`opaque_box`](Shape::opaque_box)), how it splits against tiles
//! ([`burst`](Shape::burst)) and how it draws itself ([`render`](Shape::render)).
//! The position, scale and attributes live on the owning element and are
//! passed in.

mod line;
mod polygon;
mod rectangle;
mod sequence;
mod shader;
mod sprite;
mod star;
mod writing;

pub use line::Line;
pub use polygon::Polygon;
pub use rectangle::Rectangle;
pub use sequence::Sequence;
pub use shader::{ShaderPop, ShaderPush};
pub use star::{Star, StarShape};

use crate::element::SceneElement;
use crate::geometry::{Point, Rect};
use crate::screen::Screen;
use crate::sprite::Sprite;
use crate::text::Writing;

/// Per-shape geometry, evaluated in the frame of the owning element.
pub(crate) trait ShapeGeometry {
    fn bounding_box(&self, element: &SceneElement) -> Rect {
        element.base_bounding_box()
    }

    fn opaque_box(&self, _element: &SceneElement) -> Rect {
        Rect::EMPTY
    }

    /// Push the fragments of `element` restricted to `tiles` into `output`.
    ///
    /// Shapes that cannot be split push a copy of the element.
    fn burst(&self, element: &SceneElement, _tiles: &[Rect], output: &mut Vec<SceneElement>) {
        output.push(element.clone());
    }

    fn render(&self, element: &SceneElement, screen: &mut dyn Screen);

    fn always_displayed(&self) -> bool {
        false
    }
}

/// The drawable held by a scene element.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Sprite(Sprite),
    Line(Line),
    Polygon(Polygon),
    Rectangle(Rectangle),
    Star(StarShape),
    Writing(Writing),
    ShaderPush(ShaderPush),
    ShaderPop(ShaderPop),
    Sequence(Sequence),
}

impl Shape {
    fn geometry(&self) -> &dyn ShapeGeometry {
        match self {
            Shape::Sprite(s) => s,
            Shape::Line(s) => s,
            Shape::Polygon(s) => s,
            Shape::Rectangle(s) => s,
            Shape::Star(s) => s,
            Shape::Writing(s) => s,
            Shape::ShaderPush(s) => s,
            Shape::ShaderPop(s) => s,
            Shape::Sequence(s) => s,
        }
    }

    pub(crate) fn bounding_box(&self, element: &SceneElement) -> Rect {
        self.geometry().bounding_box(element)
    }

    pub(crate) fn opaque_box(&self, element: &SceneElement) -> Rect {
        self.geometry().opaque_box(element)
    }

    pub(crate) fn burst(&self, element: &SceneElement, tiles: &[Rect], output: &mut Vec<SceneElement>) {
        self.geometry().burst(element, tiles, output)
    }

    pub(crate) fn render(&self, element: &SceneElement, screen: &mut dyn Screen) {
        self.geometry().render(element, screen)
    }

    pub(crate) fn always_displayed(&self) -> bool {
        self.geometry().always_displayed()
    }

    /// A short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Sprite(_) => "sprite",
            Shape::Line(_) => "line",
            Shape::Polygon(_) => "polygon",
            Shape::Rectangle(_) => "rectangle",
            Shape::Star(_) => "star",
            Shape::Writing(_) => "writing",
            Shape::ShaderPush(_) => "shader-push",
            Shape::ShaderPop(_) => "shader-pop",
            Shape::Sequence(_) => "sequence",
        }
    }
}

/// Axis-aligned extent of `points`, or `None` when there is none.
pub(crate) fn points_extent(points: &[Point]) -> Option<(Point, Point)> {
    let (first, rest) = points.split_first()?;
    let mut min = *first;
    let mut max = *first;

    for p in rest {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }

    Some((min, max))
}

/// Map shape-local points to screen coordinates.
pub(crate) fn place_points(element: &SceneElement, points: &[Point]) -> Vec<Point> {
    let position = element.position();
    let scale = element.scale_factor();

    points
        .iter()
        .map(|p| Point::new(position.x + p.x * scale.x, position.y + p.y * scale.y))
        .collect()
}

macro_rules! impl_from_shape {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Shape {
                fn from(shape: $ty) -> Self {
                    Shape::$variant(shape)
                }
            }
        )*
    };
}

impl_from_shape!(
    Sprite(Sprite),
    Line(Line),
    Polygon(Polygon),
    Rectangle(Rectangle),
    Star(StarShape),
    Writing(Writing),
    ShaderPush(ShaderPush),
    ShaderPop(ShaderPop),
    Sequence(Sequence),
);
