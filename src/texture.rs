//! Texture handles referenced by sprites.
//!
//! The compositor never touches pixels: a texture is only an identifier plus
//! the intrinsic dimensions needed to validate clip rectangles. Dimensions can
//! be read from decoded images so callers can build handles at load time.

use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageResult};

/// A handle to a texture owned by the screen backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Texture {
    id: u64,
    width: u32,
    height: u32,
    transparent: bool,
}

impl Texture {
    /// Create a handle for an already-uploaded texture.
    pub fn new(id: u64, width: u32, height: u32) -> Self {
        Self {
            id,
            width,
            height,
            transparent: true,
        }
    }

    /// Create a handle sized after a decoded image.
    pub fn from_image(id: u64, image: &DynamicImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            id,
            width,
            height,
            transparent: image.color().has_alpha(),
        }
    }

    /// Decode `bytes` to read the texture's intrinsic size.
    pub fn from_memory(id: u64, bytes: &[u8]) -> ImageResult<Self> {
        let image = image::load_from_memory(bytes)?;
        Ok(Self::from_image(id, &image))
    }

    /// Read the intrinsic size of an image file without decoding its pixels.
    pub fn from_path(id: u64, path: impl AsRef<Path>) -> ImageResult<Self> {
        let (width, height) = image::image_dimensions(path)?;
        Ok(Self::new(id, width, height))
    }

    /// Declare whether the pixels may contain transparency.
    pub fn with_transparency(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn has_transparency(&self) -> bool {
        self.transparent
    }

    /// A texture with no pixel cannot be drawn.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}
