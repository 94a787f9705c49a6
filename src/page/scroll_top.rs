use crate::{
    animation::ambient::{Ambient, AmbientSpec, LoopMode, StyleKey},
    animation::ease::Ease,
    animation::reveal::{Reveal, RevealStyle, Transition},
    animation::style::StyleSet,
    foundation::core::{ScrollSample, TimeMs, progress},
};

/// Scroll offset above which the control shows (strictly greater-than).
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 500.0;

/// Duration of the smooth glide back to the top.
pub const SCROLL_TOP_GLIDE_MS: u64 = 600;

#[derive(Clone, Copy, Debug)]
/// A bounded eased slide of the page offset toward a target.
pub struct Glide {
    from: f64,
    target: f64,
    started_at: TimeMs,
    duration_ms: u64,
    ease: Ease,
}

impl Glide {
    /// Start a glide from `from` to `target` at `at`.
    pub fn to(target: f64, from: f64, at: TimeMs, duration_ms: u64, ease: Ease) -> Self {
        Self {
            from,
            target,
            started_at: at,
            duration_ms,
            ease,
        }
    }

    /// Offset at `now`; holds the target exactly once arrived.
    pub fn offset(&self, now: TimeMs) -> f64 {
        let t = progress(now.saturating_since(self.started_at), self.duration_ms);
        if t >= 1.0 {
            return self.target;
        }
        let te = self.ease.apply(t);
        self.from + (self.target - self.from) * te
    }

    /// Whether the glide has arrived.
    pub fn is_done(&self, now: TimeMs) -> bool {
        now.saturating_since(self.started_at) >= self.duration_ms
    }

    /// The glide target offset.
    pub fn target(&self) -> f64 {
        self.target
    }
}

/// The "scroll to top" affordance.
///
/// Visibility is a pure function of the latest offset (`scroll_y > 500`); no
/// history, direction, or rate is consulted. While visible, an entrance pop
/// holds the control at full style and a ripple pulse loops; both are torn
/// down when visibility drops.
pub struct ScrollTopControl {
    threshold_px: f64,
    visible: bool,
    last_scroll_y: f64,
    pop: Reveal,
    pulse: Option<Ambient>,
    glide: Option<Glide>,
}

impl ScrollTopControl {
    /// New control, hidden until the page scrolls past the threshold.
    pub fn new() -> Self {
        Self {
            threshold_px: SCROLL_TOP_THRESHOLD_PX,
            visible: false,
            last_scroll_y: 0.0,
            pop: Reveal::new(Self::pop_style()),
            pulse: None,
            glide: None,
        }
    }

    // Entrance/exit pop: opacity 0 / half scale, 300 ms.
    fn pop_style() -> RevealStyle {
        RevealStyle {
            hidden: StyleSet::default().with_opacity(0.0).with_scale(0.5),
            visible: StyleSet::default(),
            transition: Transition {
                duration_ms: 300,
                delay_ms: 0,
                ease: Ease::OutCubic,
            },
        }
    }

    // Ripple: scale 0.8 -> 1.5 while fading out, every 1.5 s with a 1 s gap.
    fn pulse_spec() -> AmbientSpec {
        AmbientSpec {
            keys: vec![
                StyleKey {
                    at_ms: 0,
                    value: StyleSet::default().with_opacity(0.3).with_scale(0.8),
                    ease: Ease::Linear,
                },
                StyleKey {
                    at_ms: 1500,
                    value: StyleSet::default().with_opacity(0.0).with_scale(1.5),
                    ease: Ease::Linear,
                },
            ],
            period_ms: 1500,
            mode: LoopMode::Repeat,
            repeat_delay_ms: 1000,
            start_delay_ms: 0,
        }
    }

    /// Feed one scroll sample; O(1) and side-effect-free beyond local state.
    pub fn on_scroll(&mut self, sample: &ScrollSample) {
        self.last_scroll_y = sample.scroll_y;
        let show = sample.scroll_y > self.threshold_px;
        if show == self.visible {
            self.pop.drive(show, sample.at);
            return;
        }
        self.visible = show;
        self.pop.drive(show, sample.at);
        if show {
            tracing::debug!(scroll_y = sample.scroll_y, "scroll-top shown");
            self.pulse = Some(Ambient::started(Self::pulse_spec(), sample.at));
        } else {
            tracing::debug!(scroll_y = sample.scroll_y, "scroll-top hidden");
            // Tearing the loop down here is what cancels it; the handle must
            // not outlive visibility.
            self.pulse = None;
        }
    }

    /// Whether the control is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Begin the smooth scroll to offset 0.
    ///
    /// A no-op (returning `false`) while the control is hidden; invoking the
    /// hidden action is not an error. Returns `true` when a glide starts or
    /// is already running.
    pub fn request_scroll_to_top(&mut self, now: TimeMs) -> bool {
        if !self.visible {
            return false;
        }
        if self.glide.is_some() {
            return true;
        }
        tracing::debug!(from = self.last_scroll_y, "scroll-top glide started");
        self.glide = Some(Glide::to(
            0.0,
            self.last_scroll_y,
            now,
            SCROLL_TOP_GLIDE_MS,
            Ease::InOutCubic,
        ));
        true
    }

    /// Advance the active glide, if any, returning the offset the host should
    /// apply. Clears itself (and returns the exact target) on arrival.
    pub fn glide_step(&mut self, now: TimeMs) -> Option<f64> {
        let glide = self.glide?;
        if glide.is_done(now) {
            self.glide = None;
            return Some(glide.target());
        }
        Some(glide.offset(now))
    }

    /// Whether a glide is in flight.
    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }

    /// Entrance/exit pop style at `now`.
    pub fn style(&self, now: TimeMs) -> StyleSet {
        self.pop.sample(now)
    }

    /// Ripple style at `now`; `None` while hidden (the loop does not exist).
    pub fn pulse_style(&self, now: TimeMs) -> Option<StyleSet> {
        self.pulse.as_ref().map(|p| p.sample(now))
    }
}

impl Default for ScrollTopControl {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/scroll_top.rs"]
mod tests;
