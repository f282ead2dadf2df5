use std::collections::VecDeque;

use super::ShapeGeometry;
use crate::element::SceneElement;
use crate::geometry::{Point, Rect};
use crate::screen::Screen;

/// Child elements drawn as one, in the frame of the owning element.
///
/// Children positions are relative to the sequence's position and scaled by
/// its scale factor. The sequence's tint is combined into each child's.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sequence {
    elements: VecDeque<SceneElement>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_back(&mut self, element: SceneElement) {
        self.elements.push_back(element);
    }

    pub fn push_front(&mut self, element: SceneElement) {
        self.elements.push_front(element);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneElement> {
        self.elements.iter()
    }
}

impl FromIterator<SceneElement> for Sequence {
    fn from_iter<I: IntoIterator<Item = SceneElement>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

/// Map a child-frame rectangle into the frame of the sequence's element.
fn to_parent(element: &SceneElement, r: &Rect) -> Rect {
    let position = element.position();
    let scale = element.scale_factor();

    Rect::new(
        position.x + r.left() * scale.x,
        position.y + r.bottom() * scale.y,
        r.width * scale.x,
        r.height * scale.y,
    )
}

impl ShapeGeometry for Sequence {
    fn bounding_box(&self, element: &SceneElement) -> Rect {
        self.elements
            .iter()
            .map(SceneElement::bounding_box)
            .filter(|b| !b.is_empty())
            .reduce(|a, b| a.join(&b))
            .map_or(Rect::EMPTY, |joined| to_parent(element, &joined))
    }

    /// The largest opaque box among the children.
    fn opaque_box(&self, element: &SceneElement) -> Rect {
        if element.attributes().opacity() != 1.0 {
            return Rect::EMPTY;
        }

        self.elements
            .iter()
            .map(SceneElement::opaque_box)
            .filter(|b| !b.is_empty())
            .reduce(|best, b| if b.area() > best.area() { b } else { best })
            .map_or(Rect::EMPTY, |largest| to_parent(element, &largest))
    }

    fn render(&self, element: &SceneElement, screen: &mut dyn Screen) {
        let position = element.position();
        let scale = element.scale_factor();

        for child in &self.elements {
            let mut e = child.clone();
            e.attributes_mut().combine(element.attributes());

            let child_scale = e.scale_factor();
            e.set_scale_factor(child_scale.x * scale.x, child_scale.y * scale.y);

            let child_position = e.position();
            e.set_position(Point::new(
                position.x + child_position.x * scale.x,
                position.y + child_position.y * scale.y,
            ));

            e.render(screen);
        }
    }

    fn always_displayed(&self) -> bool {
        self.elements.iter().any(SceneElement::always_displayed)
    }
}
