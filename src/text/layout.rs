//! Greedy line breaking of a string inside a box.

use std::ops::Range;

use super::font::Font;
use super::HorizontalAlign;
use crate::geometry::{Point, Size};

/// One line as decided by the layout.
struct Line {
    /// Character indices of the visible part, trailing spaces excluded.
    glyphs: Range<usize>,
    width: f32,
    /// Character index where the next line starts looking.
    next: usize,
}

/// Arranges a string into lines fitting a box.
///
/// Lines are stacked from the top of the box down by the font's line spacing.
/// A line ends at an explicit newline, at the end of the text, or at the last
/// space before a word that would overflow the box. A word wider than the box
/// is placed whole on its own line.
pub struct TextLayout<'a> {
    font: &'a dyn Font,
    text: &'a str,
    size: Size,
    align: HorizontalAlign,
}

impl<'a> TextLayout<'a> {
    pub fn new(font: &'a dyn Font, text: &'a str, size: Size, align: HorizontalAlign) -> Self {
        Self {
            font,
            text,
            size,
            align,
        }
    }

    /// Call `arrange` for every line that fits in the box, with the bottom-left
    /// position of the line's baseline and the byte range of its visible text.
    ///
    /// The first line is always arranged, even when the box is lower than one
    /// line. Returns the byte offset where arrangement stopped.
    pub fn arrange_text(&self, mut arrange: impl FnMut(Point, Range<usize>)) -> usize {
        self.arrange_lines(|position, line, offsets| {
            arrange(position, offsets[line.glyphs.start]..offsets[line.glyphs.end]);
        })
    }

    /// The byte offset past the last character displayed when the text is laid
    /// out starting at byte `offset`.
    ///
    /// A first word wider than the box still counts as displayed, so
    /// paginating with this value always progresses.
    pub fn longest_text(&self, offset: usize) -> usize {
        let rest = self
            .text
            .get(offset..)
            .unwrap_or_else(|| panic!("offset {offset} is not a character boundary of the text"));

        let layout = TextLayout {
            text: rest,
            ..*self
        };
        offset + layout.arrange_lines(|_, _, _| {})
    }

    /// The area covered by the arranged lines: the widest line by the number
    /// of lines.
    pub fn display_size(&self) -> Size {
        let mut width = 0.0f32;
        let mut lines = 0;

        self.arrange_lines(|_, line, _| {
            width = width.max(line.width);
            lines += 1;
        });

        Size::new(width, lines as f32 * self.font.line_spacing())
    }

    fn arrange_lines(&self, mut arrange: impl FnMut(Point, &Line, &[usize])) -> usize {
        let chars: Vec<char> = self.text.chars().collect();
        let offsets: Vec<usize> = self
            .text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(self.text.len()))
            .collect();

        let line_spacing = self.font.line_spacing();
        let mut cursor = 0;
        let mut line_count = 0usize;

        while cursor < chars.len() {
            let y = self.size.height - (line_count + 1) as f32 * line_spacing;
            if y < 0.0 && line_count > 0 {
                break;
            }

            while cursor < chars.len() && chars[cursor] == ' ' {
                cursor += 1;
            }
            if cursor == chars.len() {
                break;
            }

            let line = self.break_line(&chars, cursor);
            arrange(Point::new(self.line_left(line.width), y), &line, &offsets);

            cursor = line.next;
            line_count += 1;
        }

        offsets[cursor]
    }

    fn advance(&self, c: char) -> f32 {
        self.font.metrics(c).advance.x
    }

    fn break_line(&self, chars: &[char], start: usize) -> Line {
        let mut width = 0.0;
        let mut visible_end = start;
        let mut visible_width = 0.0;
        let mut last_break: Option<Line> = None;
        let mut i = start;

        while i < chars.len() {
            let c = chars[i];

            if c == '\n' {
                return Line {
                    glyphs: start..visible_end,
                    width: visible_width,
                    next: i + 1,
                };
            }

            let advance = self.advance(c);

            if c == ' ' {
                if visible_end == i && visible_end > start {
                    last_break = Some(Line {
                        glyphs: start..visible_end,
                        width: visible_width,
                        next: i,
                    });
                }
            } else if width + advance > self.size.width {
                return match last_break {
                    Some(line) => line,
                    None => self.whole_word(chars, start, i, width),
                };
            } else {
                visible_end = i + 1;
                visible_width = width + advance;
            }

            width += advance;
            i += 1;
        }

        Line {
            glyphs: start..visible_end,
            width: visible_width,
            next: chars.len(),
        }
    }

    /// A line made of the word overflowing at `overflow`, kept whole.
    fn whole_word(&self, chars: &[char], start: usize, overflow: usize, width: f32) -> Line {
        let mut end = overflow;
        let mut width = width;

        while end < chars.len() && chars[end] != ' ' && chars[end] != '\n' {
            width += self.advance(chars[end]);
            end += 1;
        }

        Line {
            glyphs: start..end,
            width,
            next: end,
        }
    }

    fn line_left(&self, line_width: f32) -> f32 {
        match self.align {
            HorizontalAlign::Left => 0.0,
            HorizontalAlign::Center => (self.size.width - line_width) / 2.0,
            HorizontalAlign::Right => self.size.width - line_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::Sprite;
    use crate::text::GlyphMetrics;
    use crate::texture::Texture;

    /// Every glyph is 10 units wide, lines are 20 units apart.
    struct Mono;

    impl Font for Mono {
        fn metrics(&self, _: char) -> GlyphMetrics {
            GlyphMetrics::new(Point::new(10.0, 0.0), Point::ZERO)
        }

        fn sprite(&self, _: char) -> Sprite {
            Sprite::new(Texture::new(1, 10, 20))
        }

        fn line_spacing(&self) -> f32 {
            20.0
        }
    }

    fn lines(text: &str, size: Size, align: HorizontalAlign) -> Vec<(Point, String)> {
        let mut result = Vec::new();
        TextLayout::new(&Mono, text, size, align)
            .arrange_text(|p, range| result.push((p, text[range].to_string())));
        result
    }

    #[test]
    fn test_single_line() {
        let result = lines("abc", Size::new(100.0, 20.0), HorizontalAlign::Left);
        assert_eq!(result, vec![(Point::new(0.0, 0.0), "abc".to_string())]);
    }

    #[test]
    fn test_break_at_last_space() {
        let result = lines("ab cd ef", Size::new(55.0, 100.0), HorizontalAlign::Left);
        let texts: Vec<_> = result.iter().map(|(_, t)| t.as_str()).collect();
        assert_eq!(texts, vec!["ab cd", "ef"]);
        assert_eq!(result[0].0.y, 80.0);
        assert_eq!(result[1].0.y, 60.0);
    }

    #[test]
    fn test_newline_and_alignment() {
        let result = lines("ab  \ncdef", Size::new(100.0, 100.0), HorizontalAlign::Right);
        assert_eq!(result[0], (Point::new(80.0, 80.0), "ab".to_string()));
        assert_eq!(result[1], (Point::new(60.0, 60.0), "cdef".to_string()));

        let centered = lines("ab", Size::new(100.0, 20.0), HorizontalAlign::Center);
        assert_eq!(centered[0].0, Point::new(40.0, 0.0));
    }

    #[test]
    fn test_empty_line() {
        let result = lines("a\n\nb", Size::new(100.0, 100.0), HorizontalAlign::Left);
        let texts: Vec<_> = result.iter().map(|(_, t)| t.as_str()).collect();
        assert_eq!(texts, vec!["a", "", "b"]);
        assert_eq!(result[2].0.y, 40.0);
    }

    #[test]
    fn test_long_word_is_whole() {
        let result = lines("abcdefgh ij", Size::new(35.0, 100.0), HorizontalAlign::Left);
        let texts: Vec<_> = result.iter().map(|(_, t)| t.as_str()).collect();
        assert_eq!(texts, vec!["abcdefgh", "ij"]);
    }

    #[test]
    fn test_stops_below_box_but_keeps_first_line() {
        let layout = TextLayout::new(&Mono, "ab cd ef", Size::new(25.0, 45.0), HorizontalAlign::Left);
        assert_eq!(layout.longest_text(0), 5);
        assert_eq!(layout.longest_text(5), 8);
        assert_eq!(layout.display_size(), Size::new(20.0, 40.0));

        let tiny = TextLayout::new(&Mono, "ab cd", Size::new(25.0, 5.0), HorizontalAlign::Left);
        assert_eq!(tiny.longest_text(0), 2);
    }

    #[test]
    fn test_multibyte_ranges() {
        let result = lines("été à", Size::new(35.0, 100.0), HorizontalAlign::Left);
        let texts: Vec<_> = result.iter().map(|(_, t)| t.as_str()).collect();
        assert_eq!(texts, vec!["été", "à"]);
    }
}
