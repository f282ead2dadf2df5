use crate::attributes::RenderingAttributes;
use crate::geometry::{Rect, Size, EPSILON};
use crate::texture::Texture;

/// A sub-region of a texture, drawn with its own rendering attributes.
///
/// The clip rectangle is expressed in texture pixels with `(x, y)` at its
/// top-left corner. The opaque rectangle is expressed in the clip's local
/// frame, y-up, and marks the part of the clip known to be fully opaque.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sprite {
    texture: Option<Texture>,
    clip: Rect,
    opaque: Rect,
    attributes: RenderingAttributes,
}

impl Sprite {
    /// A sprite showing the whole texture.
    pub fn new(texture: Texture) -> Self {
        let clip = Rect::new(0.0, 0.0, texture.width() as f32, texture.height() as f32);
        Self::with_clip(texture, clip)
    }

    /// A sprite showing `clip` from `texture`, with no opaque region.
    pub fn with_clip(texture: Texture, clip: Rect) -> Self {
        assert_clip_inside(&texture, &clip);

        Self {
            texture: Some(texture),
            clip,
            opaque: Rect::EMPTY,
            attributes: RenderingAttributes::with_size(clip.size()),
        }
    }

    /// A sprite showing `clip` from `texture`, with a known opaque region.
    pub fn with_opaque(texture: Texture, clip: Rect, opaque: Rect) -> Self {
        let mut sprite = Self::with_clip(texture, clip);
        sprite.set_opaque_rectangle(opaque);
        sprite
    }

    /// A sprite with no texture; it is never drawn.
    pub fn invalid() -> Self {
        Self::default()
    }

    pub fn texture(&self) -> Option<&Texture> {
        self.texture.as_ref()
    }

    pub fn clip_rectangle(&self) -> Rect {
        self.clip
    }

    pub fn set_clip_rectangle(&mut self, clip: Rect) {
        if let Some(texture) = &self.texture {
            assert_clip_inside(texture, &clip);
        }
        self.clip = clip;
    }

    pub fn opaque_rectangle(&self) -> Rect {
        self.opaque
    }

    /// Set the opaque part of the clip, in the clip's local y-up frame.
    pub fn set_opaque_rectangle(&mut self, opaque: Rect) {
        assert!(
            opaque.width >= 0.0 && opaque.height >= 0.0,
            "negative opaque rectangle {opaque:?}"
        );
        if !opaque.is_empty() {
            assert!(
                opaque.x >= -EPSILON
                    && opaque.y >= -EPSILON
                    && opaque.right() <= self.clip.width + EPSILON
                    && opaque.top() <= self.clip.height + EPSILON,
                "opaque rectangle {opaque:?} outside of clip {:?}",
                self.clip
            );
        }
        self.opaque = opaque;
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

    pub fn size(&self) -> Size {
        self.attributes.size()
    }

    pub fn set_size(&mut self, size: Size) {
        self.attributes.set_size(size);
    }

    pub fn width(&self) -> f32 {
        self.attributes.width()
    }

    pub fn height(&self) -> f32 {
        self.attributes.height()
    }

    /// Whether drawing this sprite may let the background show through.
    pub fn has_transparency(&self) -> bool {
        self.attributes.opacity() != 1.0
            || self.texture.map_or(true, |t| t.has_transparency())
    }

    /// A sprite is drawable when its texture is valid and its size is not negative.
    pub fn is_valid(&self) -> bool {
        self.texture.is_some_and(|t| t.is_valid())
            && self.width() >= 0.0
            && self.height() >= 0.0
    }
}

fn assert_clip_inside(texture: &Texture, clip: &Rect) {
    assert!(
        clip.x >= 0.0
            && clip.y >= 0.0
            && clip.right() <= texture.width() as f32 + EPSILON
            && clip.top() <= texture.height() as f32 + EPSILON,
        "clip {clip:?} outside of {}x{} texture",
        texture.width(),
        texture.height()
    );
}
