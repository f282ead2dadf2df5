pub mod attributes;
pub mod color;
pub mod compositor;
pub mod element;
pub mod geometry;
pub mod screen;
pub mod shape;
pub mod sprite;
pub mod text;
pub mod texture;
pub mod transform;

// Debug counters, no-ops unless the `compositor-stats` feature is enabled
pub mod compositor_stats;

pub mod prelude {
    pub use crate::attributes::{Orientation, RenderingAttributes};
    pub use crate::color::Color;
    pub use crate::compositor::{burst_all, render_all, Compositor};
    pub use crate::element::SceneElement;
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::screen::{DrawCall, RecordingScreen, Screen, ShaderProgram};
    pub use crate::shape::{
        Line, Polygon, Rectangle, Sequence, ShaderPop, ShaderPush, Shape, Star, StarShape,
    };
    pub use crate::sprite::Sprite;
    pub use crate::text::{
        BitmapCharmap, BitmapFont, Font, HorizontalAlign, SequenceEffect, TextLayout, TextMetric,
        VerticalAlign, Writing,
    };
    pub use crate::texture::Texture;
    pub use crate::CompositorConfig;
}

/// Settings of a [`Compositor`](compositor::Compositor).
#[derive(Debug, Clone, PartialEq)]
pub struct CompositorConfig {
    /// Width of the visible screen area.
    pub width: f32,
    /// Height of the visible screen area.
    pub height: f32,
    /// Draw every queued element as is, without hiding covered parts.
    pub dumb_rendering: bool,
    /// Overlay the opaque box of every drawn fragment.
    pub render_opaque_boxes: bool,
    /// Overlaps this thin or thinner are not cut out of the visible area.
    pub occlusion_min_size: f32,
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
            dumb_rendering: false,
            render_opaque_boxes: false,
            occlusion_min_size: 8.0,
        }
    }
}

impl CompositorConfig {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn dumb_rendering(mut self, dumb: bool) -> Self {
        self.dumb_rendering = dumb;
        self
    }

    pub fn render_opaque_boxes(mut self, render: bool) -> Self {
        self.render_opaque_boxes = render;
        self
    }

    pub fn occlusion_min_size(mut self, size: f32) -> Self {
        self.occlusion_min_size = size;
        self
    }
}
