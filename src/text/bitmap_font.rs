use std::collections::HashMap;

use super::font::{Font, GlyphMetrics};
use crate::geometry::{Point, Rect, Size};
use crate::sprite::Sprite;
use crate::texture::Texture;

const NO_BREAK_SPACE: char = '\u{a0}';

/// Where a character's cell lies in the font textures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharPosition {
    pub texture_index: usize,
    /// Top-left corner of the cell, in texture pixels.
    pub position: Point,
}

impl CharPosition {
    pub fn new(texture_index: usize, x: f32, y: f32) -> Self {
        Self {
            texture_index,
            position: Point::new(x, y),
        }
    }
}

/// The description of a bitmap font: cells of a uniform size cut from textures.
#[derive(Debug, Clone, Default)]
pub struct BitmapCharmap {
    pub textures: Vec<Texture>,
    pub cell_size: Size,
    pub characters: HashMap<char, CharPosition>,
}

impl BitmapCharmap {
    pub fn new(textures: Vec<Texture>, cell_size: Size) -> Self {
        Self {
            textures,
            cell_size,
            characters: HashMap::new(),
        }
    }

    pub fn with_char(mut self, character: char, position: CharPosition) -> Self {
        self.characters.insert(character, position);
        self
    }

    /// Map `characters` to consecutive cells of texture `texture_index`,
    /// left to right then top to bottom, `columns` cells per row.
    pub fn with_grid(mut self, texture_index: usize, characters: &str, columns: usize) -> Self {
        let columns = columns.max(1);

        for (i, c) in characters.chars().enumerate() {
            let x = (i % columns) as f32 * self.cell_size.width;
            let y = (i / columns) as f32 * self.cell_size.height;
            self.characters.insert(c, CharPosition::new(texture_index, x, y));
        }
        self
    }
}

/// A font whose glyphs are cells of one or more textures.
#[derive(Debug, Clone)]
pub struct BitmapFont {
    characters: HashMap<char, Sprite>,
    missing: Sprite,
}

impl BitmapFont {
    /// A font displayed at the height of its cells.
    pub fn new(charmap: &BitmapCharmap) -> Self {
        Self::with_size(charmap, charmap.cell_size.height)
    }

    /// A font whose glyphs are `size` units high.
    pub fn with_size(charmap: &BitmapCharmap, size: f32) -> Self {
        assert!(
            !charmap.characters.is_empty() && !charmap.textures.is_empty(),
            "a bitmap font needs characters and textures"
        );

        let characters: HashMap<char, Sprite> = charmap
            .characters
            .iter()
            .filter_map(|(c, place)| {
                let sprite = make_glyph(charmap, place, size);
                if sprite.is_none() {
                    log::warn!("character {c:?} lies outside of its font texture");
                }
                sprite.map(|s| (*c, s))
            })
            .collect();

        let first = charmap.textures[0];
        let mut missing = Sprite::new(first);
        let reference = characters
            .values()
            .next()
            .map_or(Size::new(size, size), Sprite::size);
        missing.set_size(Size::new(reference.width * size / reference.height, size));

        Self {
            characters,
            missing,
        }
    }

    /// The height of the glyphs.
    pub fn size(&self) -> f32 {
        self.missing.height()
    }

    pub fn has_char(&self, character: char) -> bool {
        self.characters.contains_key(&character)
    }
}

fn make_glyph(charmap: &BitmapCharmap, place: &CharPosition, size: f32) -> Option<Sprite> {
    let texture = *charmap.textures.get(place.texture_index)?;
    let cell = charmap.cell_size;

    if place.position.x + cell.width > texture.width() as f32
        || place.position.y + cell.height > texture.height() as f32
        || cell.height <= 0.0
    {
        return None;
    }

    let clip = Rect::new(place.position.x, place.position.y, cell.width, cell.height);
    let mut sprite = Sprite::with_clip(texture, clip);
    sprite.set_size(Size::new(cell.width * size / cell.height, size));
    Some(sprite)
}

impl Font for BitmapFont {
    fn metrics(&self, character: char) -> GlyphMetrics {
        let size = self.sprite(character).size();
        GlyphMetrics::new(Point::new(size.width, size.height), Point::ZERO)
    }

    fn sprite(&self, character: char) -> Sprite {
        if let Some(sprite) = self.characters.get(&character) {
            return sprite.clone();
        }

        let mut result = self.missing.clone();
        if character == ' ' || character == NO_BREAK_SPACE {
            result.attributes_mut().set_opacity(0.0);
        } else {
            log::warn!("character not found {character:?} ({})", character as u32);
        }
        result
    }

    fn line_spacing(&self) -> f32 {
        self.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charmap() -> BitmapCharmap {
        BitmapCharmap::new(vec![Texture::new(1, 64, 32)], Size::new(8.0, 16.0))
            .with_grid(0, "abcdefghijklmnop", 8)
    }

    #[test]
    fn test_glyph_resized_to_font_size() {
        let font = BitmapFont::with_size(&charmap(), 32.0);
        let a = font.sprite('a');
        assert_eq!(a.size(), Size::new(16.0, 32.0));
        assert_eq!(a.clip_rectangle(), Rect::new(0.0, 0.0, 8.0, 16.0));
        assert_eq!(font.sprite('j').clip_rectangle(), Rect::new(8.0, 16.0, 8.0, 16.0));
        assert_eq!(font.line_spacing(), 32.0);
        assert_eq!(font.metrics('b').advance, Point::new(16.0, 32.0));
    }

    #[test]
    fn test_space_is_transparent() {
        let font = BitmapFont::new(&charmap());
        assert!(!font.has_char(' '));
        let space = font.sprite(' ');
        assert_eq!(space.attributes().opacity(), 0.0);
        assert_eq!(font.metrics(' ').advance.x, 8.0);
    }

    #[test]
    fn test_cells_outside_texture_are_dropped() {
        let charmap = charmap().with_char('z', CharPosition::new(0, 60.0, 0.0));
        let font = BitmapFont::new(&charmap);
        assert!(!font.has_char('z'));
        assert!(font.has_char('p'));
    }
}
