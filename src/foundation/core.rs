use crate::foundation::error::{UnveilError, UnveilResult};

pub use kurbo::{Point, Rect, Vec2};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Engine time in milliseconds. Monotonic, host-supplied; the crate never
/// reads a wall clock.
pub struct TimeMs(pub u64);

impl TimeMs {
    /// Zero point of a timeline.
    pub const ZERO: TimeMs = TimeMs(0);

    /// This instant advanced by `ms`, saturating at the numeric ceiling.
    pub fn saturating_add(self, ms: u64) -> TimeMs {
        TimeMs(self.0.saturating_add(ms))
    }

    /// Milliseconds elapsed since `earlier` (0 if `earlier` is in the future).
    pub fn saturating_since(self, earlier: TimeMs) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

/// Normalized progress of `elapsed_ms` through `duration_ms`, in `[0, 1]`.
///
/// A zero duration is treated as already complete.
pub fn progress(elapsed_ms: u64, duration_ms: u64) -> f64 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return 1.0;
    }
    (elapsed_ms as f64) / (duration_ms as f64)
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Size of the visual viewport in CSS-like pixels.
pub struct ViewportSize {
    /// Viewport width, > 0.
    pub width: f64,
    /// Viewport height, > 0.
    pub height: f64,
}

impl ViewportSize {
    /// Construct a validated viewport size.
    pub fn new(width: f64, height: f64) -> UnveilResult<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(UnveilError::validation(
                "viewport width/height must be finite and > 0",
            ));
        }
        Ok(Self { width, height })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One observation of the ambient scroll/resize state, broadcast to every
/// subscribed component.
pub struct ScrollSample {
    /// When the sample was taken.
    pub at: TimeMs,
    /// Vertical document offset of the viewport top, >= 0.
    pub scroll_y: f64,
    /// Viewport size at sample time.
    pub viewport: ViewportSize,
}

impl ScrollSample {
    /// The viewport rectangle in document coordinates.
    pub fn doc_rect(&self) -> Rect {
        Rect::new(
            0.0,
            self.scroll_y,
            self.viewport.width,
            self.scroll_y + self.viewport.height,
        )
    }
}

/// Fraction of `region`'s area currently inside the viewport, in `[0, 1]`.
///
/// A degenerate (zero-area) region reports 1.0 when it touches the viewport
/// rectangle and 0.0 otherwise, so point-like regions can still trigger.
pub fn visible_fraction(region: Rect, sample: &ScrollSample) -> f64 {
    let viewport = sample.doc_rect();
    let overlap = region.intersect(viewport);
    if overlap.width() <= 0.0 || overlap.height() <= 0.0 {
        // No overlapping area; a degenerate region may still touch.
        let touches = region.x0 <= viewport.x1
            && region.x1 >= viewport.x0
            && region.y0 <= viewport.y1
            && region.y1 >= viewport.y0;
        return if region.area() == 0.0 && touches {
            1.0
        } else {
            0.0
        };
    }
    (overlap.area() / region.area()).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
