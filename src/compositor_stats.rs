//! Compositor statistics for debugging and performance analysis.
//!
//! Enable them by compiling with the `compositor-stats` feature:
//! ```bash
//! cargo test --features compositor-stats
//! ```
//!
//! A summary is logged at debug level about once per second, showing:
//! - Frame counts
//! - Elements queued and culled before rendering
//! - Fragments sent to the screen
//! - Shadows queued

/// Snapshot of accumulated compositor statistics.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StatsSnapshot {
    pub frames: u64,
    pub elements_queued: u64,
    pub elements_culled: u64,
    pub fragments_rendered: u64,
    pub shadows_queued: u64,
}

#[cfg(feature = "compositor-stats")]
mod inner {
    use std::cell::RefCell;
    use std::time::Instant;

    thread_local! {
        static STATS: RefCell<CompositorStats> = RefCell::new(CompositorStats::new());
    }

    struct CompositorStats {
        frames: u64,
        elements_queued: u64,
        elements_culled: u64,
        fragments_rendered: u64,
        shadows_queued: u64,
        last_print: Instant,
    }

    impl CompositorStats {
        fn new() -> Self {
            Self {
                frames: 0,
                elements_queued: 0,
                elements_culled: 0,
                fragments_rendered: 0,
                shadows_queued: 0,
                last_print: Instant::now(),
            }
        }

        fn reset(&mut self) {
            *self = Self::new();
        }
    }

    /// Record an element accepted into the frame.
    #[inline]
    pub fn record_element_queued() {
        STATS.with(|s| {
            s.borrow_mut().elements_queued += 1;
        });
    }

    /// Record an element dropped because nothing of it would be visible.
    #[inline]
    pub fn record_element_culled() {
        STATS.with(|s| {
            s.borrow_mut().elements_culled += 1;
        });
    }

    /// Record a shadow copy added in front of its element.
    #[inline]
    pub fn record_shadow_queued() {
        STATS.with(|s| {
            s.borrow_mut().shadows_queued += 1;
        });
    }

    /// Record fragments sent to the screen.
    #[inline]
    pub fn record_fragments_rendered(count: usize) {
        STATS.with(|s| {
            s.borrow_mut().fragments_rendered += count as u64;
        });
    }

    /// Return a snapshot of the current stats (for testing).
    pub fn get_stats() -> super::StatsSnapshot {
        STATS.with(|s| {
            let stats = s.borrow();
            super::StatsSnapshot {
                frames: stats.frames,
                elements_queued: stats.elements_queued,
                elements_culled: stats.elements_culled,
                fragments_rendered: stats.fragments_rendered,
                shadows_queued: stats.shadows_queued,
            }
        })
    }

    /// Reset all stats to zero (for test isolation).
    pub fn reset_stats() {
        STATS.with(|s| {
            s.borrow_mut().reset();
        });
    }

    /// Called at the end of each frame to potentially log stats.
    pub fn end_frame() {
        STATS.with(|s| {
            let mut stats = s.borrow_mut();
            stats.frames += 1;

            if stats.last_print.elapsed().as_secs() >= 1 {
                let cull_rate = if stats.elements_queued > 0 {
                    (stats.elements_culled as f64 / stats.elements_queued as f64) * 100.0
                } else {
                    0.0
                };

                log::debug!(
                    "[Compositor Stats] frames={} queued={} culled={} ({:.1}%) fragments={} shadows={}",
                    stats.frames,
                    stats.elements_queued,
                    stats.elements_culled,
                    cull_rate,
                    stats.fragments_rendered,
                    stats.shadows_queued
                );

                stats.reset();
            }
        });
    }
}

#[cfg(feature = "compositor-stats")]
pub use inner::*;

// No-op implementations when feature is disabled - these get completely inlined away

#[cfg(not(feature = "compositor-stats"))]
#[inline(always)]
pub fn get_stats() -> StatsSnapshot {
    StatsSnapshot::default()
}

#[cfg(not(feature = "compositor-stats"))]
#[inline(always)]
pub fn reset_stats() {}

#[cfg(not(feature = "compositor-stats"))]
#[inline(always)]
pub fn record_element_queued() {}

#[cfg(not(feature = "compositor-stats"))]
#[inline(always)]
pub fn record_element_culled() {}

#[cfg(not(feature = "compositor-stats"))]
#[inline(always)]
pub fn record_shadow_queued() {}

#[cfg(not(feature = "compositor-stats"))]
#[inline(always)]
pub fn record_fragments_rendered(_count: usize) {}

#[cfg(not(feature = "compositor-stats"))]
#[inline(always)]
pub fn end_frame() {}

#[cfg(test)]
#[cfg(feature = "compositor-stats")]
mod tests {
    use super::*;

    /// Reset stats before each test to ensure isolation
    /// (tests share the thread-local when run on the same thread).
    fn setup() {
        reset_stats();
    }

    #[test]
    fn test_counters() {
        setup();
        record_element_queued();
        record_element_queued();
        record_element_culled();
        record_shadow_queued();
        record_fragments_rendered(3);
        let s = get_stats();
        assert_eq!(s.elements_queued, 2);
        assert_eq!(s.elements_culled, 1);
        assert_eq!(s.shadows_queued, 1);
        assert_eq!(s.fragments_rendered, 3);
    }

    #[test]
    fn test_end_frame_counts_frames() {
        setup();
        end_frame();
        end_frame();
        assert_eq!(get_stats().frames, 2);
    }

    #[test]
    fn test_reset() {
        setup();
        record_element_queued();
        reset_stats();
        assert_eq!(get_stats(), StatsSnapshot::default());
    }
}
