use crate::{
    foundation::core::{Rect, ScrollSample, TimeMs, visible_fraction},
    foundation::error::{UnveilError, UnveilResult},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Configuration of a viewport intersection trigger.
pub struct TriggerSpec {
    /// Fraction of the region's area that must be inside the viewport,
    /// in `[0, 1]`.
    pub threshold: f64,
    /// Latch permanently after the first satisfaction.
    pub once: bool,
}

impl Default for TriggerSpec {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            once: true,
        }
    }
}

impl TriggerSpec {
    /// Validate threshold bounds.
    pub fn validate(&self) -> UnveilResult<()> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(UnveilError::validation(
                "trigger threshold must be in [0, 1]",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
/// Intersection state machine for one observed region.
///
/// Re-evaluated on every broadcast sample. A latched (`once`) trigger that
/// has satisfied ignores all further samples and reports satisfied for the
/// rest of its life, with no flicker back.
pub struct ViewportTrigger {
    spec: TriggerSpec,
    satisfied: bool,
    latched: bool,
    changed_at: Option<TimeMs>,
}

impl ViewportTrigger {
    /// New trigger, initially unsatisfied.
    pub fn new(spec: TriggerSpec) -> UnveilResult<Self> {
        spec.validate()?;
        Ok(Self {
            spec,
            satisfied: false,
            latched: false,
            changed_at: None,
        })
    }

    /// Evaluate `region` against one sample; returns the satisfied state.
    ///
    /// The first evaluation counts: a region already in view at mount
    /// satisfies immediately, no scroll event required.
    pub fn observe(&mut self, region: Rect, sample: &ScrollSample) -> bool {
        if self.latched {
            return true;
        }
        let fraction = visible_fraction(region, sample);
        // A zero threshold still requires actual intersection, so an
        // off-screen region never satisfies it.
        let in_view = if self.spec.threshold == 0.0 {
            fraction > 0.0
        } else {
            fraction >= self.spec.threshold
        };
        if in_view != self.satisfied {
            self.satisfied = in_view;
            self.changed_at = Some(sample.at);
            if in_view && self.spec.once {
                self.latched = true;
            }
        }
        self.satisfied
    }

    /// Current satisfied state.
    pub fn is_satisfied(&self) -> bool {
        self.satisfied
    }

    /// Whether the trigger has latched (satisfied forever).
    pub fn is_latched(&self) -> bool {
        self.latched
    }

    /// Sample timestamp of the most recent state flip, if any.
    pub fn changed_at(&self) -> Option<TimeMs> {
        self.changed_at
    }

    /// The spec this trigger was built from.
    pub fn spec(&self) -> TriggerSpec {
        self.spec
    }
}

#[cfg(test)]
#[path = "../../tests/unit/observe/trigger.rs"]
mod tests;
