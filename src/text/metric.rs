use super::font::Font;
use crate::geometry::Size;

/// The natural size of a string: its longest line by its number of lines.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetric {
    width: f32,
    height: f32,
}

impl TextMetric {
    pub fn new(text: &str, font: &dyn Font) -> Self {
        let mut width = 0.0f32;
        let mut lines = 0;

        for line in text.split('\n') {
            let line_width: f32 = line.chars().map(|c| font.metrics(c).advance.x).sum();
            width = width.max(line_width);
            lines += 1;
        }

        Self {
            width,
            height: lines as f32 * font.line_spacing(),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
