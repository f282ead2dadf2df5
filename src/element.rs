//! Scene elements: one shape plus the placement state shared by every shape.

use crate::attributes::RenderingAttributes;
use crate::geometry::{Point, Rect, Size};
use crate::screen::Screen;
use crate::shape::Shape;

/// A draw-list entry.
///
/// Elements are plain values: cloning one deep-copies its shape (text
/// buffers excepted, which are shared until modified).
#[derive(Debug, Clone, PartialEq)]
pub struct SceneElement {
    shape: Shape,
    position: Point,
    scale_factor: Point,
    shadow: Point,
    shadow_opacity: f32,
    attributes: RenderingAttributes,
}

impl SceneElement {
    /// Place `shape` at `position`.
    ///
    /// A writing's element is sized after the text it displays; other shapes
    /// start with a zero size which callers set when the shape needs one.
    pub fn new(position: impl Into<Point>, shape: impl Into<Shape>) -> Self {
        let shape = shape.into();
        let mut attributes = RenderingAttributes::new();

        if let Shape::Writing(writing) = &shape {
            attributes.set_size(writing.size());
        }

        Self {
            shape,
            position: position.into(),
            scale_factor: Point::ONE,
            shadow: Point::ZERO,
            shadow_opacity: 1.0,
            attributes,
        }
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.attributes.set_size(size);
        self
    }

    pub fn with_scale_factor(mut self, x: f32, y: f32) -> Self {
        self.scale_factor = Point::new(x, y);
        self
    }

    pub fn with_shadow(mut self, x: f32, y: f32, opacity: f32) -> Self {
        self.set_shadow(Point::new(x, y));
        self.set_shadow_opacity(opacity);
        self
    }

    pub fn with_attributes(mut self, attributes: RenderingAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// A fragment of this element: same attributes and shadow, unit scale.
    pub(crate) fn fragment(&self, position: Point, shape: impl Into<Shape>) -> SceneElement {
        let mut result = SceneElement::new(position, shape);
        result.attributes = self.attributes;
        result.shadow = self.shadow;
        result.shadow_opacity = self.shadow_opacity;
        result
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn shape_mut(&mut self) -> &mut Shape {
        &mut self.shape
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn scale_factor(&self) -> Point {
        self.scale_factor
    }

    pub fn set_scale_factor(&mut self, x: f32, y: f32) {
        self.scale_factor = Point::new(x, y);
    }

    pub fn shadow(&self) -> Point {
        self.shadow
    }

    pub fn set_shadow(&mut self, shadow: Point) {
        self.shadow = shadow;
    }

    pub fn shadow_opacity(&self) -> f32 {
        self.shadow_opacity
    }

    pub fn set_shadow_opacity(&mut self, opacity: f32) {
        self.shadow_opacity = opacity.clamp(0.0, 1.0);
    }

    /// A shadow is drawn when it is offset on any axis and visible.
    pub fn has_shadow(&self) -> bool {
        (self.shadow.x != 0.0 || self.shadow.y != 0.0) && self.shadow_opacity != 0.0
    }

    pub fn attributes(&self) -> &RenderingAttributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut RenderingAttributes {
        &mut self.attributes
    }

    pub fn set_attributes(&mut self, attributes: RenderingAttributes) {
        self.attributes = attributes;
    }

    /// The box spanned by the element's own size, scaled, at its position.
    pub(crate) fn base_bounding_box(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.attributes.width() * self.scale_factor.x,
            self.attributes.height() * self.scale_factor.y,
        )
    }

    /// The smallest axis-aligned box containing everything the element draws.
    pub fn bounding_box(&self) -> Rect {
        self.shape.bounding_box(self)
    }

    /// A box fully covered by opaque pixels of this element, possibly empty.
    pub fn opaque_box(&self) -> Rect {
        self.shape.opaque_box(self)
    }

    /// Split this element against `tiles`.
    pub fn burst(&self, tiles: &[Rect]) -> Vec<SceneElement> {
        let mut output = Vec::new();
        self.burst_into(tiles, &mut output);
        output
    }

    /// Same as [`burst`](Self::burst), appending to `output`.
    pub fn burst_into(&self, tiles: &[Rect], output: &mut Vec<SceneElement>) {
        self.shape.burst(self, tiles, output);
    }

    pub fn render(&self, screen: &mut dyn Screen) {
        self.shape.render(self, screen);
    }

    /// Whether the element must be drawn even when it looks hidden or off screen.
    pub fn always_displayed(&self) -> bool {
        self.shape.always_displayed()
    }

    /// Width on screen.
    pub fn width(&self) -> f32 {
        self.bounding_box().width
    }

    /// Height on screen.
    pub fn height(&self) -> f32 {
        self.bounding_box().height
    }

    /// Width before the scale factor.
    pub fn element_width(&self) -> f32 {
        let width = self.bounding_box().width;
        if self.scale_factor.x == 0.0 {
            width
        } else {
            width / self.scale_factor.x
        }
    }

    /// Height before the scale factor.
    pub fn element_height(&self) -> f32 {
        let height = self.bounding_box().height;
        if self.scale_factor.y == 0.0 {
            height
        } else {
            height / self.scale_factor.y
        }
    }
}
