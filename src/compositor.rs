//! Frame composition: queue elements, hide what is covered, draw the rest.

use crate::color::Color;
use crate::compositor_stats;
use crate::element::SceneElement;
use crate::geometry::{Point, Rect};
use crate::screen::Screen;
use crate::CompositorConfig;

/// Fill color of the opaque box overlay.
const OPAQUE_BOX_FILL: u32 = 0x80C0C0C0;
/// Border color of the opaque box overlay.
const OPAQUE_BOX_BORDER: u32 = 0xF0F0F0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Idle,
    Rendering,
}

/// Collects the elements of one frame and draws them on a screen.
///
/// Elements are drawn in the order they were queued, the first one at the
/// back. Unless dumb rendering is configured, parts of elements hidden
/// behind the opaque boxes of later elements are not drawn at all.
#[derive(Debug)]
pub struct Compositor {
    config: CompositorConfig,
    mode: Mode,
    elements: Vec<SceneElement>,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compositor {
    pub fn new() -> Self {
        Self::with_config(CompositorConfig::default())
    }

    pub fn with_config(config: CompositorConfig) -> Self {
        Self {
            config,
            mode: Mode::Idle,
            elements: Vec::new(),
        }
    }

    pub fn config(&self) -> &CompositorConfig {
        &self.config
    }

    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.config.width = width;
        self.config.height = height;
    }

    pub fn is_rendering(&self) -> bool {
        self.mode == Mode::Rendering
    }

    /// The elements queued so far in this frame, shadows included.
    pub fn queued(&self) -> &[SceneElement] {
        &self.elements
    }

    /// Start a new frame.
    pub fn begin_render(&mut self) {
        assert_eq!(self.mode, Mode::Idle, "begin_render called twice");
        self.mode = Mode::Rendering;
        self.elements.clear();
    }

    /// Queue `element` on top of the elements already queued.
    ///
    /// Elements with nothing to draw are dropped. An element with a shadow
    /// is queued behind a dark copy of itself.
    pub fn render(&mut self, element: SceneElement) {
        assert_eq!(self.mode, Mode::Rendering, "render called outside of a frame");

        if !element.always_displayed() && element.bounding_box().is_empty() {
            log::trace!("dropping empty {}", element.shape().kind());
            compositor_stats::record_element_culled();
            return;
        }

        if element.has_shadow() {
            self.elements.push(shadow_of(&element));
            compositor_stats::record_shadow_queued();
        }

        self.elements.push(element);
        compositor_stats::record_element_queued();
    }

    /// Draw the queued elements on `screen` and end the frame.
    pub fn end_render(&mut self, screen: &mut dyn Screen) {
        assert_eq!(self.mode, Mode::Rendering, "end_render called outside of a frame");
        self.mode = Mode::Idle;

        let elements = std::mem::take(&mut self.elements);
        let queued = elements.len();

        let visible = if self.config.dumb_rendering {
            elements
        } else {
            self.hide_covered(elements)
        };

        for element in &visible {
            element.render(screen);

            if self.config.render_opaque_boxes {
                render_opaque_box(element, screen);
            }
        }

        log::debug!(
            "frame: {} elements queued, {} fragments rendered",
            queued,
            visible.len()
        );
        compositor_stats::record_fragments_rendered(visible.len());
        compositor_stats::end_frame();
    }

    /// Split every element against the screen regions not yet covered by
    /// the elements in front of it. Returns the fragments back to front.
    fn hide_covered(&self, elements: Vec<SceneElement>) -> Vec<SceneElement> {
        let mut uncovered = vec![Rect::new(0.0, 0.0, self.config.width, self.config.height)];
        let mut visible = Vec::with_capacity(elements.len());

        for element in elements.iter().rev() {
            if !element.always_displayed() && !intersects_any(&element.bounding_box(), &uncovered) {
                compositor_stats::record_element_culled();
                continue;
            }

            element.burst_into(&uncovered, &mut visible);

            let opaque = element.opaque_box();
            if !opaque.is_empty() {
                uncovered = uncovered
                    .iter()
                    .flat_map(|area| subtract(area, &opaque, self.config.occlusion_min_size))
                    .collect();
            }
        }

        visible.reverse();
        visible
    }
}

/// A black copy of `element`, offset by its shadow.
fn shadow_of(element: &SceneElement) -> SceneElement {
    let mut shadow = element.clone();
    shadow.set_shadow(Point::ZERO);
    shadow.set_shadow_opacity(0.0);
    shadow.set_position(element.position() + element.shadow());

    let attributes = shadow.attributes_mut();
    attributes.set_intensity(0.0, 0.0, 0.0);
    attributes.set_opacity(element.attributes().opacity() * element.shadow_opacity());

    shadow
}

fn intersects_any(r: &Rect, areas: &[Rect]) -> bool {
    areas.iter().any(|a| !r.intersection(a).is_empty())
}

/// The parts of `area` outside of `hole`.
///
/// When the overlap is thinner than `min_size` on either axis, `area` is kept
/// whole rather than cut into slivers.
fn subtract(area: &Rect, hole: &Rect, min_size: f32) -> Vec<Rect> {
    let inter = area.intersection(hole);

    if inter.is_empty() || inter.width <= min_size || inter.height <= min_size {
        return vec![*area];
    }

    let mut result = Vec::with_capacity(4);

    if inter.left() != area.left() {
        result.push(Rect::from_corners(area.left(), area.bottom(), inter.left(), area.top()));
    }
    if inter.top() != area.top() {
        result.push(Rect::from_corners(inter.left(), inter.top(), inter.right(), area.top()));
    }
    if inter.right() != area.right() {
        result.push(Rect::from_corners(inter.right(), area.bottom(), area.right(), area.top()));
    }
    if inter.bottom() != area.bottom() {
        result.push(Rect::from_corners(inter.left(), area.bottom(), inter.right(), inter.bottom()));
    }

    result
}

fn render_opaque_box(element: &SceneElement, screen: &mut dyn Screen) {
    let opaque = element.opaque_box();
    if opaque.is_empty() {
        return;
    }

    let corners = [
        opaque.bottom_left(),
        opaque.top_left(),
        opaque.top_right(),
        opaque.bottom_right(),
    ];
    screen.draw_polygon(Color::from_hex_argb(OPAQUE_BOX_FILL), &corners);
    screen.draw_line(Color::from_hex(OPAQUE_BOX_BORDER), &corners, 2.0, true);
}

/// Split every element of `elements` against `tiles`, keeping their order.
pub fn burst_all(elements: &[SceneElement], tiles: &[Rect]) -> Vec<SceneElement> {
    let mut output = Vec::with_capacity(elements.len());
    for element in elements {
        element.burst_into(tiles, &mut output);
    }
    output
}

/// Render every element of `elements`, in order.
pub fn render_all(elements: &[SceneElement], screen: &mut dyn Screen) {
    for element in elements {
        element.render(screen);
    }
}
