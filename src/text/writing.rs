use std::sync::Arc;

use super::bitmap_writing::BitmapWriting;
use super::effect::SequenceEffect;
use super::font::Font;
use super::metric::TextMetric;
use super::{HorizontalAlign, VerticalAlign};
use crate::geometry::Size;

/// A shared handle to laid-out text.
///
/// Cloning a writing is cheap: clones share the same glyphs until one of
/// them is modified, at which point the modified handle gets its own copy and
/// the others keep seeing the previous text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Writing {
    inner: Arc<BitmapWriting>,
}

impl Writing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay `text` out in a box just large enough to hold it.
    pub fn from_text(
        font: &dyn Font,
        text: &str,
        horizontal: HorizontalAlign,
        vertical: VerticalAlign,
    ) -> Self {
        let mut result = Self::new();
        result.create_fitted(font, text, horizontal, vertical);
        result
    }

    /// Lay `text` out in a box of `size`.
    pub fn in_box(
        font: &dyn Font,
        text: &str,
        size: Size,
        horizontal: HorizontalAlign,
        vertical: VerticalAlign,
    ) -> Self {
        let mut result = Self::new();
        result.create(font, text, size, horizontal, vertical);
        result
    }

    pub fn create(
        &mut self,
        font: &dyn Font,
        text: &str,
        size: Size,
        horizontal: HorizontalAlign,
        vertical: VerticalAlign,
    ) {
        self.make_mut().create(font, text, size, horizontal, vertical);
    }

    /// Same as [`create`](Self::create) with the natural size of `text`.
    pub fn create_fitted(
        &mut self,
        font: &dyn Font,
        text: &str,
        horizontal: HorizontalAlign,
        vertical: VerticalAlign,
    ) {
        let size = TextMetric::new(text, font).size();
        self.create(font, text, size, horizontal, vertical);
    }

    pub fn set_effect(&mut self, effect: SequenceEffect) {
        self.make_mut().set_effect(effect);
    }

    pub fn update(&mut self, elapsed: f32) {
        self.make_mut().update(elapsed);
    }

    pub fn size(&self) -> Size {
        self.inner.size()
    }

    pub fn width(&self) -> f32 {
        self.inner.width()
    }

    pub fn height(&self) -> f32 {
        self.inner.height()
    }

    pub fn bitmap(&self) -> &BitmapWriting {
        &self.inner
    }

    /// Whether both handles currently share the same glyphs.
    pub fn shares_glyphs_with(&self, other: &Writing) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn make_mut(&mut self) -> &mut BitmapWriting {
        if Arc::strong_count(&self.inner) > 1 {
            log::trace!("detaching shared writing before modification");
        }
        Arc::make_mut(&mut self.inner)
    }
}
