use crate::{
    animation::ease::Ease,
    animation::style::{Lerp, StyleSet},
    foundation::core::{TimeMs, progress},
    foundation::error::{UnveilError, UnveilResult},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// The two named states a reveal animates between.
pub enum Variant {
    /// Initial, not-yet-revealed state.
    Hidden,
    /// Revealed state.
    Visible,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Timing of a single hidden/visible transition.
pub struct Transition {
    /// Interpolation length in milliseconds, > 0.
    pub duration_ms: u64,
    /// Delay before interpolation starts, in milliseconds.
    pub delay_ms: u64,
    /// Easing curve over the interpolation window.
    pub ease: Ease,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration_ms: 600,
            delay_ms: 0,
            ease: Ease::OutCubic,
        }
    }
}

impl Transition {
    /// Validate timing bounds.
    pub fn validate(&self) -> UnveilResult<()> {
        if self.duration_ms == 0 {
            return Err(UnveilError::animation("transition duration_ms must be > 0"));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Declarative reveal: the two style variants plus transition timing.
pub struct RevealStyle {
    /// Style held while hidden.
    pub hidden: StyleSet,
    /// Style held once fully revealed.
    pub visible: StyleSet,
    /// Transition timing between the variants.
    pub transition: Transition,
}

impl RevealStyle {
    /// Fade + rise preset (the common entrance used across the page).
    pub fn fade_up(rise_px: f64, transition: Transition) -> Self {
        Self {
            hidden: StyleSet::default().with_opacity(0.0).with_y(rise_px),
            visible: StyleSet::default(),
            transition,
        }
    }

    /// Validate both variants and the transition.
    pub fn validate(&self) -> UnveilResult<()> {
        self.hidden.validate()?;
        self.visible.validate()?;
        self.transition.validate()
    }
}

#[derive(Clone, Debug)]
/// Retargeting sampler for one element's reveal lifecycle.
///
/// Created in [`Variant::Hidden`] holding the hidden style exactly. Each time
/// the driving signal flips, interpolation re-anchors at the style current at
/// the flip, so a mid-flight reversal glides back instead of snapping.
pub struct Reveal {
    style: RevealStyle,
    /// Additional start delay on top of the transition's own, used by
    /// staggered groups.
    extra_delay_ms: u64,
    target: Variant,
    from: StyleSet,
    retargeted_at: Option<TimeMs>,
}

impl Reveal {
    /// New sampler resting in the hidden variant.
    pub fn new(style: RevealStyle) -> Self {
        Self {
            from: style.hidden,
            style,
            extra_delay_ms: 0,
            target: Variant::Hidden,
            retargeted_at: None,
        }
    }

    /// New sampler with a fixed extra start delay (stagger offset).
    pub fn with_extra_delay(style: RevealStyle, extra_delay_ms: u64) -> Self {
        Self {
            extra_delay_ms,
            ..Self::new(style)
        }
    }

    /// Current target variant.
    pub fn variant(&self) -> Variant {
        self.target
    }

    /// Drive the sampler from the owning trigger.
    ///
    /// `at` is the instant the driving signal flipped (not the sampling
    /// instant), so downstream start times are exact. Driving with an
    /// unchanged variant is idempotent: no timer restarts.
    pub fn drive(&mut self, in_view: bool, at: TimeMs) {
        let desired = if in_view {
            Variant::Visible
        } else {
            Variant::Hidden
        };
        if desired == self.target && self.retargeted_at.is_some() {
            return;
        }
        tracing::trace!(?desired, at = at.0, "reveal retarget");
        self.from = self.sample(at);
        self.target = desired;
        self.retargeted_at = Some(at);
    }

    fn target_style(&self) -> StyleSet {
        match self.target {
            Variant::Hidden => self.style.hidden,
            Variant::Visible => self.style.visible,
        }
    }

    /// Interpolated style at `now`.
    ///
    /// Holds the anchor style through the delay window, eases across the
    /// transition window, then holds the target exactly (no oscillation).
    pub fn sample(&self, now: TimeMs) -> StyleSet {
        let Some(started) = self.retargeted_at else {
            return self.from;
        };
        let delay = self.style.transition.delay_ms + self.extra_delay_ms;
        let elapsed = now.saturating_since(started);
        if elapsed < delay {
            return self.from;
        }
        let t = progress(elapsed - delay, self.style.transition.duration_ms);
        if t >= 1.0 {
            // Hold the target exactly; eased endpoints may round off.
            return self.target_style();
        }
        let te = self.style.transition.ease.apply(t);
        StyleSet::lerp(&self.from, &self.target_style(), te)
    }

    /// Whether the sampler has reached (and now holds) its target style.
    pub fn is_settled(&self, now: TimeMs) -> bool {
        match self.retargeted_at {
            None => true,
            Some(started) => {
                let total = self.style.transition.delay_ms
                    + self.extra_delay_ms
                    + self.style.transition.duration_ms;
                now.saturating_since(started) >= total
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/reveal.rs"]
mod tests;
