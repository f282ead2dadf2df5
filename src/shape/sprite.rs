//! Sprite geometry: rotated bounds, clip-space mapping and tile splitting.

use super::ShapeGeometry;
use crate::attributes::RenderingAttributes;
use crate::element::SceneElement;
use crate::geometry::{Rect, Size};
use crate::screen::Screen;
use crate::sprite::Sprite;
use crate::transform::Transform;

/// Positions closer than this to the element's origin snap onto it.
const SNAP_DISTANCE: f32 = 0.1;

/// The sprite's own attributes with the element's stacked on top.
fn effective_attributes(sprite: &Sprite, element: &SceneElement) -> RenderingAttributes {
    sprite.attributes().stacked(element.attributes())
}

/// Screen units per clip pixel, on each axis.
fn clip_factors(sprite: &Sprite, element: &SceneElement) -> (f32, f32) {
    let clip = sprite.clip_rectangle();
    let scale = element.scale_factor();

    let fx = if clip.width == 0.0 {
        0.0
    } else {
        sprite.width() / clip.width * scale.x
    };
    let fy = if clip.height == 0.0 {
        0.0
    } else {
        sprite.height() / clip.height * scale.y
    };

    (fx, fy)
}

/// Reflect the interval `[a, b]` inside `[0, z]`.
fn reflect(a: f32, b: f32, z: f32) -> (f32, f32) {
    (z - b, z - a)
}

/// Map a clip-local rectangle (y-up) to screen coordinates.
pub(crate) fn scale_rectangle(sprite: &Sprite, element: &SceneElement, r: &Rect) -> Rect {
    let (fx, fy) = clip_factors(sprite, element);
    let attributes = effective_attributes(sprite, element);
    let scale = element.scale_factor();
    let position = element.position();

    let (mut left, mut right) = (r.left() * fx, r.right() * fx);
    let (mut bottom, mut top) = (r.bottom() * fy, r.top() * fy);

    if attributes.is_mirrored() {
        (left, right) = reflect(left, right, sprite.width() * scale.x);
    }
    if attributes.is_flipped() {
        (bottom, top) = reflect(bottom, top, sprite.height() * scale.y);
    }

    Rect::from_corners(
        left + position.x,
        bottom + position.y,
        right + position.x,
        top + position.y,
    )
}

/// Inverse of [`scale_rectangle`]: map a screen rectangle back into the clip.
pub(crate) fn unscale_rectangle(sprite: &Sprite, element: &SceneElement, r: &Rect) -> Rect {
    let (fx, fy) = clip_factors(sprite, element);
    assert!(
        fx != 0.0 && fy != 0.0,
        "cannot map back into a degenerate clip {:?}",
        sprite.clip_rectangle()
    );

    let attributes = effective_attributes(sprite, element);
    let scale = element.scale_factor();
    let position = element.position();

    let (mut left, mut right) = (r.left() - position.x, r.right() - position.x);
    let (mut bottom, mut top) = (r.bottom() - position.y, r.top() - position.y);

    if attributes.is_mirrored() {
        (left, right) = reflect(left, right, sprite.width() * scale.x);
    }
    if attributes.is_flipped() {
        (bottom, top) = reflect(bottom, top, sprite.height() * scale.y);
    }

    Rect::from_corners(left / fx, bottom / fy, right / fx, top / fy)
}

fn snap(value: f32, origin: f32) -> f32 {
    if (value - origin).abs() < SNAP_DISTANCE {
        origin
    } else {
        value
    }
}

impl ShapeGeometry for Sprite {
    fn bounding_box(&self, element: &SceneElement) -> Rect {
        let attributes = effective_attributes(self, element);
        let scale = element.scale_factor();
        let position = element.position();
        let w = attributes.width() * scale.x;
        let h = attributes.height() * scale.y;
        let unrotated = Rect::new(position.x, position.y, w, h);

        let result = if attributes.angle() != 0.0 {
            let center = unrotated.center();
            Transform::rotate(attributes.angle())
                .center_at(center.x, center.y)
                .transform_rect_bounds(&unrotated)
        } else {
            unrotated
        };

        debug_assert!({
            let opaque = self.opaque_box(element);
            opaque.is_empty() || result.includes(&opaque)
        });

        result
    }

    fn opaque_box(&self, element: &SceneElement) -> Rect {
        let attributes = effective_attributes(self, element);

        if !self.is_valid() || attributes.opacity() != 1.0 || attributes.angle() != 0.0 {
            return Rect::EMPTY;
        }

        let opaque = self.opaque_rectangle();
        if opaque.is_empty() {
            Rect::EMPTY
        } else {
            scale_rectangle(self, element, &opaque)
        }
    }

    fn burst(&self, element: &SceneElement, tiles: &[Rect], output: &mut Vec<SceneElement>) {
        let attributes = effective_attributes(self, element);

        if attributes.angle() != 0.0 || attributes.is_mirrored() || attributes.is_flipped() {
            log::trace!("transformed sprite is not split");
            output.push(element.clone());
            return;
        }

        let clip = self.clip_rectangle();
        if clip.is_empty() || self.width() <= 0.0 || self.height() <= 0.0 {
            log::trace!("sprite with an empty clip has no fragment");
            return;
        }

        let clip_box = scale_rectangle(
            self,
            element,
            &Rect::new(0.0, 0.0, clip.width, clip.height),
        );
        let opaque_box = self.opaque_box(element);
        let origin = element.position();

        for tile in tiles {
            let inter = clip_box.intersection(tile);
            if inter.is_empty() {
                continue;
            }

            let local = unscale_rectangle(self, element, &inter);

            // Texture clips are y-down: the top of the local box is the
            // smallest row.
            let left = (clip.x + local.left()).max(clip.left());
            let right = (clip.x + local.right()).min(clip.right());
            let top_row = (clip.y + clip.height - local.top()).max(clip.y);
            let bottom_row = (clip.y + clip.height - local.bottom()).min(clip.y + clip.height);

            let mut fragment = self.clone();
            fragment.set_clip_rectangle(Rect::new(left, top_row, right - left, bottom_row - top_row));

            let visible_opaque = opaque_box.intersection(&inter);
            let opaque = if visible_opaque.is_empty() {
                Rect::EMPTY
            } else {
                let o = unscale_rectangle(self, element, &visible_opaque);
                Rect::new(
                    o.left() - local.left(),
                    o.bottom() - local.bottom(),
                    o.width,
                    o.height,
                )
            };
            fragment.set_opaque_rectangle(opaque);
            fragment.set_size(Size::new(inter.width, inter.height));

            let position = (
                snap(inter.left(), origin.x),
                snap(inter.bottom(), origin.y),
            );
            output.push(element.fragment(position.into(), fragment));
        }
    }

    fn render(&self, element: &SceneElement, screen: &mut dyn Screen) {
        if !self.is_valid() {
            log::trace!("skipping invalid sprite");
            return;
        }

        let mut attributes = effective_attributes(self, element);
        attributes.set_size(attributes.size().scaled(element.scale_factor()));

        let mut sprite = self.clone();
        sprite.set_attributes(attributes);
        screen.render(element.position(), &sprite);
    }
}
