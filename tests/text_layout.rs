use mosaic::prelude::*;
use mosaic::text::{BitmapWriting, GlyphMetrics};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Glyphs advance 10 units, lines are 20 units apart.
struct Mono;

impl Font for Mono {
    fn metrics(&self, _: char) -> GlyphMetrics {
        GlyphMetrics::new(Point::new(10.0, 0.0), Point::ZERO)
    }

    fn sprite(&self, _: char) -> Sprite {
        Sprite::new(Texture::new(3, 10, 20))
    }

    fn line_spacing(&self) -> f32 {
        20.0
    }
}

fn lines(text: &str, size: Size) -> Vec<(Point, String)> {
    let mut result = Vec::new();
    TextLayout::new(&Mono, text, size, HorizontalAlign::Left)
        .arrange_text(|origin, range| result.push((origin, text[range].to_string())));
    result
}

#[test]
fn test_narrow_box_wraps_second_word() {
    init_logger();
    let result = lines("hello world", Size::new(80.0, 100.0));

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].1, "hello");
    assert_eq!(result[1].1, "world");
    assert!(result[1].0.y < result[0].0.y);

    let mut writing = BitmapWriting::new();
    writing.create(
        &Mono,
        "hello world",
        Size::new(80.0, 100.0),
        HorizontalAlign::Left,
        VerticalAlign::Top,
    );
    assert_eq!(writing.sprite_count(), 10);
    assert_eq!(writing.sprite(5).position, Point::new(0.0, 60.0));
}

#[test]
fn test_longest_text_places_oversized_word() {
    let layout = TextLayout::new(
        &Mono,
        "extraordinary word",
        Size::new(50.0, 20.0),
        HorizontalAlign::Left,
    );
    assert_eq!(layout.longest_text(0), "extraordinary".len());
}

#[test]
fn test_pagination_visits_whole_text() {
    let text = "the quick brown fox jumps over the lazy dog";
    let layout = TextLayout::new(&Mono, text, Size::new(100.0, 40.0), HorizontalAlign::Left);

    let mut pages = Vec::new();
    let mut offset = 0;
    while offset < text.len() {
        let end = layout.longest_text(offset);
        assert!(end > offset);
        pages.push(text[offset..end].trim().to_string());
        offset = end;
    }

    assert_eq!(pages, vec!["the quick brown fox", "jumps over the lazy", "dog"]);
}

#[test]
fn test_layout_is_deterministic() {
    let size = Size::new(120.0, 80.0);
    for align in [HorizontalAlign::Left, HorizontalAlign::Center, HorizontalAlign::Right] {
        for vertical in [VerticalAlign::Top, VerticalAlign::Middle, VerticalAlign::Bottom] {
            let a = Writing::in_box(&Mono, "lorem ipsum dolor sit amet", size, align, vertical);
            let b = Writing::in_box(&Mono, "lorem ipsum dolor sit amet", size, align, vertical);

            assert_eq!(a.size(), b.size());
            assert_eq!(
                a.bitmap().sprites().collect::<Vec<_>>(),
                b.bitmap().sprites().collect::<Vec<_>>()
            );
        }
    }
}

#[test]
fn test_shared_writing_survives_recreation() {
    let original = Writing::from_text(&Mono, "abc", HorizontalAlign::Left, VerticalAlign::Top);
    let element = SceneElement::new((0.0, 0.0), original.clone());

    let mut edited = original.clone();
    edited.create_fitted(&Mono, "changed", HorizontalAlign::Left, VerticalAlign::Top);

    assert!(original.shares_glyphs_with(&element_writing(&element)));
    assert!(!edited.shares_glyphs_with(&original));
    assert_eq!(original.bitmap().sprite_count(), 3);
    assert_eq!(edited.bitmap().sprite_count(), 7);

    let mut screen = RecordingScreen::new();
    element.render(&mut screen);
    assert_eq!(screen.sprites().count(), 3);
}

fn element_writing(e: &SceneElement) -> Writing {
    match e.shape() {
        Shape::Writing(w) => w.clone(),
        other => panic!("expected a writing, got {}", other.kind()),
    }
}

#[test]
fn test_bitmap_font_writing() {
    init_logger();
    let charmap = BitmapCharmap::new(vec![Texture::new(5, 80, 20)], Size::new(10.0, 20.0))
        .with_grid(0, "abcdefgh", 8);
    let font = BitmapFont::new(&charmap);

    assert!(font.has_char('c'));
    assert!(!font.has_char('z'));

    let writing = Writing::from_text(&font, "bad", HorizontalAlign::Left, VerticalAlign::Top);
    assert_eq!(writing.size(), Size::new(30.0, 20.0));

    let clips: Vec<Rect> = writing
        .bitmap()
        .sprites()
        .map(|placed| placed.sprite.clip_rectangle())
        .collect();
    assert_eq!(
        clips,
        vec![
            Rect::new(10.0, 0.0, 10.0, 20.0),
            Rect::new(0.0, 0.0, 10.0, 20.0),
            Rect::new(30.0, 0.0, 10.0, 20.0),
        ]
    );
}
