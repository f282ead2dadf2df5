//! Tint, opacity and orientation applied uniformly when an element renders.

use bitflags::bitflags;

use crate::color::Color;
use crate::geometry::Size;

bitflags! {
    /// Axis reflections applied to a bitmap.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Orientation: u8 {
        /// Reflected on the vertical axis (left/right swapped).
        const MIRRORED = 1 << 0;
        /// Reflected on the horizontal axis (top/bottom swapped).
        const FLIPPED = 1 << 1;
    }
}

/// Opacity, per-channel intensity, rotation, reflection and intrinsic size.
///
/// Mutators clamp opacity and intensities to `[0, 1]`. [`combine`](Self::combine)
/// multiplies without clamping, so tint propagated down a tree is exactly the
/// product of every ancestor's tint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderingAttributes {
    size: Size,
    orientation: Orientation,
    opacity: f32,
    red_intensity: f32,
    green_intensity: f32,
    blue_intensity: f32,
    angle: f32,
}

impl Default for RenderingAttributes {
    fn default() -> Self {
        Self::with_size(Size::ZERO)
    }
}

fn clamp_unit(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

impl RenderingAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(size: Size) -> Self {
        Self {
            size,
            orientation: Orientation::empty(),
            opacity: 1.0,
            red_intensity: 1.0,
            green_intensity: 1.0,
            blue_intensity: 1.0,
            angle: 0.0,
        }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = clamp_unit(opacity);
    }

    pub fn red_intensity(&self) -> f32 {
        self.red_intensity
    }

    pub fn green_intensity(&self) -> f32 {
        self.green_intensity
    }

    pub fn blue_intensity(&self) -> f32 {
        self.blue_intensity
    }

    pub fn set_intensity(&mut self, r: f32, g: f32, b: f32) {
        self.red_intensity = clamp_unit(r);
        self.green_intensity = clamp_unit(g);
        self.blue_intensity = clamp_unit(b);
    }

    pub fn set_red_intensity(&mut self, i: f32) {
        self.red_intensity = clamp_unit(i);
    }

    pub fn set_green_intensity(&mut self, i: f32) {
        self.green_intensity = clamp_unit(i);
    }

    pub fn set_blue_intensity(&mut self, i: f32) {
        self.blue_intensity = clamp_unit(i);
    }

    /// Multiply the current tint by `color` (alpha multiplies the opacity).
    pub fn colorize(&mut self, color: Color) {
        self.set_intensity(
            self.red_intensity * color.r,
            self.green_intensity * color.g,
            self.blue_intensity * color.b,
        );
        self.set_opacity(self.opacity * color.a);
    }

    /// Replace the tint by `color`.
    pub fn set_color(&mut self, color: Color) {
        self.set_intensity(color.r, color.g, color.b);
        self.set_opacity(color.a);
    }

    /// The tint as a color.
    pub fn color(&self) -> Color {
        Color::rgba(
            self.red_intensity,
            self.green_intensity,
            self.blue_intensity,
            self.opacity,
        )
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn set_width(&mut self, width: f32) {
        self.size.width = width;
    }

    pub fn set_height(&mut self, height: f32) {
        self.size.height = height;
    }

    /// Rotation in radians, counter-clockwise.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_mirrored(&self) -> bool {
        self.orientation.contains(Orientation::MIRRORED)
    }

    pub fn mirror(&mut self, mirrored: bool) {
        self.orientation.set(Orientation::MIRRORED, mirrored);
    }

    pub fn is_flipped(&self) -> bool {
        self.orientation.contains(Orientation::FLIPPED)
    }

    pub fn flip(&mut self, flipped: bool) {
        self.orientation.set(Orientation::FLIPPED, flipped);
    }

    /// Multiply opacity and intensities by `other`'s.
    ///
    /// Angle, orientation and size are left untouched. No clamping happens here.
    pub fn combine(&mut self, other: &RenderingAttributes) {
        self.opacity *= other.opacity;
        self.red_intensity *= other.red_intensity;
        self.green_intensity *= other.green_intensity;
        self.blue_intensity *= other.blue_intensity;
    }

    /// By-value form of [`combine`](Self::combine).
    pub fn combined(&self, other: &RenderingAttributes) -> RenderingAttributes {
        let mut result = *self;
        result.combine(other);
        result
    }

    /// [`combine`](Self::combine), then compose the transforms: angles add and
    /// reflections toggle. The size stays the one of `self`.
    pub fn stack(&mut self, other: &RenderingAttributes) {
        self.combine(other);
        self.angle += other.angle;
        self.orientation ^= other.orientation;
    }

    /// By-value form of [`stack`](Self::stack).
    pub fn stacked(&self, other: &RenderingAttributes) -> RenderingAttributes {
        let mut result = *self;
        result.stack(other);
        result
    }

    /// Apply the tint to a base color.
    pub fn convert_color(&self, c: Color) -> Color {
        Color::rgba(
            c.r * self.red_intensity,
            c.g * self.green_intensity,
            c.b * self.blue_intensity,
            c.a * self.opacity,
        )
    }
}
