use std::f32::consts::{FRAC_PI_4, PI};

use mosaic::prelude::*;
use mosaic::text::GlyphMetrics;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

struct Mono;

impl Font for Mono {
    fn metrics(&self, _: char) -> GlyphMetrics {
        GlyphMetrics::new(Point::new(10.0, 0.0), Point::ZERO)
    }

    fn sprite(&self, _: char) -> Sprite {
        Sprite::new(Texture::new(7, 10, 20))
    }

    fn line_spacing(&self) -> f32 {
        20.0
    }
}

/// A fully opaque sprite showing the whole `width` x `height` texture.
fn opaque_sprite(width: u32, height: u32) -> Sprite {
    let clip = Rect::new(0.0, 0.0, width as f32, height as f32);
    Sprite::with_opaque(Texture::new(1, width, height), clip, clip)
}

fn sprite_of(e: &SceneElement) -> &Sprite {
    match e.shape() {
        Shape::Sprite(s) => s,
        other => panic!("expected a sprite, got {}", other.kind()),
    }
}

#[test]
fn test_burst_splits_sprite_in_two() {
    init_logger();
    let e = SceneElement::new((0.0, 0.0), opaque_sprite(100, 100));
    let tiles = [Rect::new(0.0, 0.0, 50.0, 100.0), Rect::new(50.0, 0.0, 50.0, 100.0)];

    let fragments = e.burst(&tiles);

    assert_eq!(fragments.len(), 2);
    assert_eq!(fragments[0].bounding_box(), Rect::new(0.0, 0.0, 50.0, 100.0));
    assert_eq!(fragments[1].bounding_box(), Rect::new(50.0, 0.0, 50.0, 100.0));
    assert_eq!(
        fragments[0].bounding_box().join(&fragments[1].bounding_box()),
        Rect::new(0.0, 0.0, 100.0, 100.0)
    );

    assert_eq!(sprite_of(&fragments[0]).clip_rectangle(), Rect::new(0.0, 0.0, 50.0, 100.0));
    assert_eq!(sprite_of(&fragments[1]).clip_rectangle(), Rect::new(50.0, 0.0, 50.0, 100.0));
    assert_eq!(fragments[1].opaque_box(), Rect::new(50.0, 0.0, 50.0, 100.0));
}

#[test]
fn test_burst_keeps_rotated_sprite_whole() {
    init_logger();
    let mut e = SceneElement::new((0.0, 0.0), opaque_sprite(100, 100));
    e.attributes_mut().set_angle(FRAC_PI_4);
    let tiles = [Rect::new(0.0, 0.0, 50.0, 100.0), Rect::new(50.0, 0.0, 50.0, 100.0)];

    assert_eq!(e.burst(&tiles), vec![e.clone()]);
}

#[test]
fn test_burst_fragments_cover_sprite() {
    let mut sprite = opaque_sprite(64, 32);
    sprite.set_size(Size::new(100.0, 60.0));
    let e = SceneElement::new((10.0, 20.0), sprite);
    let bounds = e.bounding_box();

    let tiles = [
        Rect::new(10.0, 20.0, 50.0, 30.0),
        Rect::new(60.0, 20.0, 50.0, 30.0),
        Rect::new(10.0, 50.0, 50.0, 30.0),
        Rect::new(60.0, 50.0, 50.0, 30.0),
    ];
    let fragments = e.burst(&tiles);
    assert_eq!(fragments.len(), 4);

    let boxes: Vec<Rect> = fragments.iter().map(SceneElement::bounding_box).collect();
    let total: f32 = boxes.iter().map(Rect::area).sum();
    assert!((total - bounds.area()).abs() < 1e-2);

    let union = boxes.iter().skip(1).fold(boxes[0], |acc, b| acc.join(b));
    assert!(union.approx_eq(&bounds, 1e-3));

    for (i, a) in boxes.iter().enumerate() {
        assert!(bounds.includes(a));
        for b in &boxes[i + 1..] {
            assert!(a.intersection(b).area() < 1e-3, "{a:?} overlaps {b:?}");
        }
    }
}

#[test]
fn test_unsplittable_shapes_burst_whole() {
    let tiles = [
        Rect::new(0.0, 0.0, 20.0, 20.0),
        Rect::new(20.0, 0.0, 20.0, 20.0),
        Rect::new(0.0, 20.0, 40.0, 20.0),
    ];

    let mut rotated = SceneElement::new((5.0, 5.0), opaque_sprite(30, 30));
    rotated.attributes_mut().set_angle(0.3);

    let elements = vec![
        rotated,
        SceneElement::new(
            (0.0, 0.0),
            Line::new(Color::WHITE, vec![Point::ZERO, Point::new(40.0, 40.0)], 2.0),
        ),
        SceneElement::new(
            (0.0, 0.0),
            Polygon::new(
                Color::WHITE,
                vec![Point::ZERO, Point::new(40.0, 0.0), Point::new(20.0, 40.0)],
            ),
        ),
        SceneElement::new(
            (0.0, 0.0),
            StarShape::new(Star::new(5, 0.5), Color::BLACK, 1.0, Color::WHITE),
        )
        .with_size(Size::new(40.0, 40.0)),
        SceneElement::new(
            (0.0, 0.0),
            Writing::from_text(&Mono, "hi", HorizontalAlign::Left, VerticalAlign::Top),
        ),
        SceneElement::new((0.0, 0.0), ShaderPush::new(ShaderProgram::new(3))),
        SceneElement::new((0.0, 0.0), ShaderPop),
    ];

    for e in &elements {
        assert_eq!(e.burst(&tiles), vec![e.clone()], "{}", e.shape().kind());
    }
}

#[test]
fn test_filled_rectangle_opaque_box() {
    let filled = SceneElement::new(
        (0.0, 0.0),
        Rectangle::filled(Color::rgba8(255, 0, 0, 255), Rect::new(0.0, 0.0, 10.0, 10.0)),
    );
    assert_eq!(filled.bounding_box(), Rect::new(0.0, 0.0, 10.0, 10.0));
    assert_eq!(filled.opaque_box(), filled.bounding_box());

    let outline = SceneElement::new(
        (0.0, 0.0),
        Rectangle::outline(Color::rgba8(255, 0, 0, 255), Rect::new(0.0, 0.0, 10.0, 10.0), 1.0),
    );
    assert!(outline.opaque_box().is_empty());
}

#[test]
fn test_opaque_box_inside_bounding_box() {
    let mut child = SceneElement::new(
        (5.0, 5.0),
        Rectangle::filled(Color::WHITE, Rect::new(0.0, 0.0, 20.0, 10.0)),
    );
    child.set_scale_factor(1.5, 1.0);
    let sequence: Sequence = vec![
        child,
        SceneElement::new((0.0, 0.0), opaque_sprite(16, 16)),
    ]
    .into_iter()
    .collect();

    let mut cropped = Sprite::with_opaque(
        Texture::new(2, 64, 64),
        Rect::new(8.0, 8.0, 48.0, 32.0),
        Rect::new(4.0, 2.0, 30.0, 20.0),
    );
    cropped.set_size(Size::new(96.0, 40.0));

    let shapes: Vec<Shape> = vec![
        opaque_sprite(40, 20).into(),
        cropped.into(),
        Rectangle::filled(Color::WHITE, Rect::new(3.0, 4.0, 30.0, 20.0)).into(),
        StarShape::new(Star::new(6, 0.4), Color::BLACK, 2.0, Color::WHITE).into(),
        sequence.into(),
    ];

    for shape in shapes {
        for angle in [0.0, 0.3, PI / 2.0] {
            for (mirrored, flipped) in [(false, false), (true, false), (false, true), (true, true)] {
                for (sx, sy) in [(1.0, 1.0), (2.0, 0.5)] {
                    let mut e = SceneElement::new((12.0, -7.0), shape.clone())
                        .with_size(Size::new(40.0, 30.0))
                        .with_scale_factor(sx, sy);
                    e.attributes_mut().set_angle(angle);
                    e.attributes_mut().mirror(mirrored);
                    e.attributes_mut().flip(flipped);

                    let opaque = e.opaque_box();
                    let bounds = e.bounding_box();
                    assert!(
                        opaque.is_empty() || bounds.includes(&opaque),
                        "{} angle={angle} mirrored={mirrored} flipped={flipped} scale=({sx}, {sy}): \
                         {opaque:?} not in {bounds:?}",
                        e.shape().kind()
                    );
                }
            }
        }
    }
}

#[test]
fn test_compositor_hides_covered_parts() {
    init_logger();
    let mut compositor = Compositor::with_config(CompositorConfig::new(200.0, 200.0));
    let mut screen = RecordingScreen::new();

    compositor.begin_render();
    compositor.render(SceneElement::new((0.0, 0.0), opaque_sprite(200, 200)));
    compositor.render(SceneElement::new(
        (0.0, 0.0),
        Rectangle::filled(Color::WHITE, Rect::new(50.0, 50.0, 100.0, 100.0)),
    ));
    compositor.end_render(&mut screen);

    let calls = screen.calls();
    assert_eq!(calls.len(), 5);
    assert!(matches!(calls[4], DrawCall::Polygon { .. }));

    let visible: f32 = screen.sprites().map(|(_, s)| s.width() * s.height()).sum();
    assert!((visible - (40000.0 - 10000.0)).abs() < 1e-2);
    for (position, sprite) in screen.sprites() {
        let drawn = Rect::new(position.x, position.y, sprite.width(), sprite.height());
        assert!(drawn.intersection(&Rect::new(50.0, 50.0, 100.0, 100.0)).is_empty());
    }
}

#[test]
fn test_compositor_culls_hidden_and_offscreen_elements() {
    let mut compositor = Compositor::with_config(CompositorConfig::new(200.0, 200.0));
    let mut screen = RecordingScreen::new();

    compositor.begin_render();
    compositor.render(SceneElement::new((60.0, 60.0), opaque_sprite(20, 20)));
    compositor.render(SceneElement::new((500.0, 0.0), opaque_sprite(20, 20)));
    compositor.render(SceneElement::new(
        (0.0, 0.0),
        Rectangle::filled(Color::WHITE, Rect::new(50.0, 50.0, 100.0, 100.0)),
    ));
    compositor.end_render(&mut screen);

    assert_eq!(screen.calls().len(), 1);
    assert!(matches!(screen.calls()[0], DrawCall::Polygon { .. }));
}

#[test]
fn test_dumb_rendering_draws_everything_in_order() {
    let config = CompositorConfig::new(200.0, 200.0).dumb_rendering(true);
    let mut compositor = Compositor::with_config(config);
    let mut screen = RecordingScreen::new();

    compositor.begin_render();
    compositor.render(SceneElement::new((60.0, 60.0), opaque_sprite(20, 20)));
    compositor.render(SceneElement::new(
        (0.0, 0.0),
        Rectangle::filled(Color::WHITE, Rect::new(50.0, 50.0, 100.0, 100.0)),
    ));
    compositor.end_render(&mut screen);

    assert_eq!(screen.calls().len(), 2);
    assert!(matches!(screen.calls()[0], DrawCall::Sprite { .. }));
    assert!(matches!(screen.calls()[1], DrawCall::Polygon { .. }));
}

#[test]
fn test_shaders_are_never_culled() {
    let mut compositor = Compositor::with_config(CompositorConfig::new(100.0, 100.0));
    let mut screen = RecordingScreen::new();

    compositor.begin_render();
    compositor.render(SceneElement::new((0.0, 0.0), ShaderPush::new(ShaderProgram::new(9))));
    compositor.render(SceneElement::new((10.0, 10.0), opaque_sprite(20, 20)));
    compositor.render(SceneElement::new((0.0, 0.0), ShaderPop));
    compositor.end_render(&mut screen);

    let calls = screen.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0], DrawCall::PushShader(ShaderProgram::new(9)));
    assert!(matches!(calls[1], DrawCall::Sprite { .. }));
    assert_eq!(calls[2], DrawCall::PopShader);
}

#[test]
fn test_shadow_drawn_behind_element() {
    let config = CompositorConfig::new(100.0, 100.0).dumb_rendering(true);
    let mut compositor = Compositor::with_config(config);
    let mut screen = RecordingScreen::new();

    compositor.begin_render();
    compositor.render(
        SceneElement::new(
            (10.0, 10.0),
            Rectangle::filled(Color::WHITE, Rect::new(0.0, 0.0, 20.0, 20.0)),
        )
        .with_shadow(4.0, -4.0, 0.5),
    );
    assert_eq!(compositor.queued().len(), 2);
    compositor.end_render(&mut screen);

    let colors: Vec<Color> = screen
        .calls()
        .iter()
        .filter_map(|call| match call {
            DrawCall::Polygon { color, .. } => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(colors.len(), 2);
    assert_eq!((colors[0].r, colors[0].g, colors[0].b), (0.0, 0.0, 0.0));
    assert!((colors[0].a - 0.5).abs() < 1e-6);
    assert_eq!(colors[1], Color::WHITE);
}

#[test]
fn test_empty_elements_are_dropped() {
    let mut compositor = Compositor::new();
    compositor.begin_render();
    compositor.render(SceneElement::new((0.0, 0.0), opaque_sprite(0, 0)));
    compositor.render(SceneElement::new((0.0, 0.0), Polygon::new(Color::WHITE, Vec::new())));
    assert!(compositor.queued().is_empty());

    let mut screen = RecordingScreen::new();
    compositor.end_render(&mut screen);
    assert!(screen.calls().is_empty());
    assert!(!compositor.is_rendering());
}

#[test]
fn test_opaque_box_overlay() {
    let config = CompositorConfig::new(100.0, 100.0).render_opaque_boxes(true);
    let mut compositor = Compositor::with_config(config);
    let mut screen = RecordingScreen::new();

    compositor.begin_render();
    compositor.render(SceneElement::new((10.0, 10.0), opaque_sprite(20, 20)));
    compositor.end_render(&mut screen);

    let calls = screen.calls();
    assert_eq!(calls.len(), 3);
    assert!(matches!(calls[1], DrawCall::Polygon { .. }));
    assert!(matches!(calls[2], DrawCall::Line { closed: true, .. }));
}

#[test]
fn test_burst_all_and_render_all() {
    let elements = vec![
        SceneElement::new((0.0, 0.0), opaque_sprite(40, 40)),
        SceneElement::new((0.0, 0.0), ShaderPop),
    ];
    let tiles = [Rect::new(0.0, 0.0, 20.0, 40.0), Rect::new(20.0, 0.0, 20.0, 40.0)];

    let fragments = burst_all(&elements, &tiles);
    assert_eq!(fragments.len(), 3);

    let mut screen = RecordingScreen::new();
    render_all(&fragments, &mut screen);
    assert_eq!(screen.sprites().count(), 2);
    assert_eq!(screen.calls()[2], DrawCall::PopShader);
}

#[test]
#[should_panic(expected = "begin_render called twice")]
fn test_nested_frames_panic() {
    let mut compositor = Compositor::new();
    compositor.begin_render();
    compositor.begin_render();
}

#[test]
fn test_rotated_writing_partly_on_screen_is_drawn() {
    let mut compositor = Compositor::with_config(CompositorConfig::new(200.0, 200.0));
    let mut screen = RecordingScreen::new();

    let writing = Writing::from_text(&Mono, "a\nb\nc\nd\ne", HorizontalAlign::Left, VerticalAlign::Top);
    let mut e = SceneElement::new((-15.0, 0.0), writing);
    e.attributes_mut().set_angle(PI / 2.0);
    assert!(e.bounding_box().right() > 0.0);

    compositor.begin_render();
    compositor.render(e);
    compositor.end_render(&mut screen);

    assert_eq!(screen.sprites().count(), 5);
}
