use super::ShapeGeometry;
use crate::element::SceneElement;
use crate::geometry::{Point, Rect, Size};
use crate::screen::Screen;
use crate::text::Writing;
use crate::transform::Transform;

impl ShapeGeometry for Writing {
    /// The element's box, turned around its center when rotated.
    fn bounding_box(&self, element: &SceneElement) -> Rect {
        let base = element.base_bounding_box();
        let angle = element.attributes().angle();

        if angle == 0.0 {
            return base;
        }

        let center = base.center();
        Transform::rotate(angle)
            .center_at(center.x, center.y)
            .transform_rect_bounds(&base)
    }

    /// Draw each glyph, stretched from the writing's size to the element's.
    ///
    /// Reflections move the glyphs across the writing's box; a rotation turns
    /// the whole text around the center of the element.
    fn render(&self, element: &SceneElement, screen: &mut dyn Screen) {
        let bitmap = self.bitmap();
        let attributes = element.attributes();
        let scale = element.scale_factor();
        let position = element.position();

        let ratio_x = if bitmap.width() == 0.0 {
            scale.x
        } else {
            scale.x * attributes.width() / bitmap.width()
        };
        let ratio_y = if bitmap.height() == 0.0 {
            scale.y
        } else {
            scale.y * attributes.height() / bitmap.height()
        };

        let center = element.base_bounding_box().center();

        for placed in bitmap.sprites() {
            let mut sprite = placed.sprite;
            if !sprite.is_valid() {
                log::trace!("skipping invalid glyph");
                continue;
            }

            sprite.attributes_mut().stack(attributes);
            let glyph = sprite.size();

            let x = if sprite.attributes().is_mirrored() {
                bitmap.width() - placed.position.x - glyph.width
            } else {
                placed.position.x
            };
            let y = if sprite.attributes().is_flipped() {
                bitmap.height() - placed.position.y - glyph.height
            } else {
                placed.position.y
            };

            let size = Size::new(glyph.width * ratio_x, glyph.height * ratio_y);
            sprite.set_size(size);

            let half = Point::new(size.width / 2.0, size.height / 2.0);
            let glyph_center = Point::new(position.x + x * ratio_x, position.y + y * ratio_y) + half;
            let origin = glyph_center.rotate(center, attributes.angle()) - half;

            screen.render(origin, &sprite);
        }
    }
}
