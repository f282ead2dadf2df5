//! Turning strings into placed glyph sprites.
//!
//! A [`Font`] supplies glyph sprites and metrics, [`TextLayout`] breaks a
//! string into lines inside a box, and [`BitmapWriting`] keeps the resulting
//! sprites. [`Writing`] is the shared handle held by scene elements.

mod bitmap_font;
mod bitmap_writing;
mod effect;
mod font;
mod layout;
mod metric;
mod writing;

pub use bitmap_font::{BitmapCharmap, BitmapFont, CharPosition};
pub use bitmap_writing::{BitmapWriting, PlacedSprite};
pub use effect::SequenceEffect;
pub use font::{Font, GlyphMetrics};
pub use layout::TextLayout;
pub use metric::TextMetric;
pub use writing::Writing;

/// Where each line starts inside the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Where the block of lines sits inside the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}
