use super::effect::SequenceEffect;
use super::font::Font;
use super::layout::TextLayout;
use super::{HorizontalAlign, VerticalAlign};
use crate::attributes::RenderingAttributes;
use crate::geometry::{Point, Size};
use crate::sprite::Sprite;

/// A glyph sprite and the position of its bottom-left corner in the writing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlacedSprite {
    pub position: Point,
    pub sprite: Sprite,
}

impl PlacedSprite {
    pub fn new(position: Point, sprite: Sprite) -> Self {
        Self { position, sprite }
    }
}

/// Laid-out text: the glyph sprites of a string, placed in a box.
///
/// The writing's attributes tint every glyph and its size is the box the
/// text was laid out in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BitmapWriting {
    sprites: Vec<PlacedSprite>,
    effect: SequenceEffect,
    attributes: RenderingAttributes,
}

impl BitmapWriting {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay `text` out in a box of `size`, replacing the current glyphs.
    pub fn create(
        &mut self,
        font: &dyn Font,
        text: &str,
        size: Size,
        horizontal: HorizontalAlign,
        vertical: VerticalAlign,
    ) {
        self.attributes.set_size(size);
        self.sprites.clear();
        self.sprites.reserve(text.len());

        let mut bottom = f32::MAX;
        let sprites = &mut self.sprites;

        TextLayout::new(font, text, size, horizontal).arrange_text(|origin, range| {
            let mut baseline = origin;

            for c in text[range].chars() {
                let metrics = font.metrics(c);
                let position = baseline + metrics.bearing;
                sprites.push(PlacedSprite::new(position, font.sprite(c)));
                baseline.x += metrics.advance.x;
                bottom = bottom.min(position.y);
            }
        });

        if self.sprites.is_empty() {
            return;
        }

        match vertical {
            VerticalAlign::Top => {}
            VerticalAlign::Middle => self.shift_vertically(-bottom / 2.0),
            VerticalAlign::Bottom => self.shift_vertically(-bottom),
        }
    }

    fn shift_vertically(&mut self, offset: f32) {
        for placed in &mut self.sprites {
            placed.position.y += offset;
        }
    }

    pub fn sprite_count(&self) -> usize {
        self.sprites.len()
    }

    /// Glyph `i` with the writing's tint and the effect applied.
    pub fn sprite(&self, i: usize) -> PlacedSprite {
        let mut result = self.sprites[i].clone();
        result.sprite.attributes_mut().combine(&self.attributes);
        result.sprite.attributes_mut().colorize(self.effect.color(i));
        result.position += self.effect.delta(i);
        result
    }

    /// Every glyph, as returned by [`sprite`](Self::sprite).
    pub fn sprites(&self) -> impl Iterator<Item = PlacedSprite> + '_ {
        (0..self.sprites.len()).map(|i| self.sprite(i))
    }

    pub fn effect(&self) -> &SequenceEffect {
        &self.effect
    }

    pub fn set_effect(&mut self, effect: SequenceEffect) {
        self.effect = effect;
    }

    /// Advance the effect's animation.
    pub fn update(&mut self, elapsed: f32) {
        self.effect.update(elapsed);
    }

    pub fn size(&self) -> Size {
        self.attributes.size()
    }

    pub fn width(&self) -> f32 {
        self.attributes.width()
    }

    pub fn height(&self) -> f32 {
        self.attributes.height()
    }

    pub fn attributes(&self) -> &RenderingAttributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut RenderingAttributes {
        &mut self.attributes
    }
}
