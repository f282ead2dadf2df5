use crate::geometry::Point;
use crate::sprite::Sprite;

/// How a glyph is placed relative to the pen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlyphMetrics {
    /// Pen movement after drawing the glyph.
    pub advance: Point,
    /// Offset of the glyph's bottom-left corner from the baseline position.
    pub bearing: Point,
}

impl GlyphMetrics {
    pub fn new(advance: Point, bearing: Point) -> Self {
        Self { advance, bearing }
    }
}

/// A source of glyphs.
///
/// Layout treats a font as a pure lookup: the same character must always
/// give the same metrics and sprite.
pub trait Font {
    fn metrics(&self, character: char) -> GlyphMetrics;

    fn sprite(&self, character: char) -> Sprite;

    /// Vertical distance between two consecutive baselines.
    fn line_spacing(&self) -> f32;
}
