use crate::{
    animation::ease::Ease,
    animation::style::{Lerp, StyleSet},
    foundation::core::TimeMs,
    foundation::error::{UnveilError, UnveilResult},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One waypoint inside an ambient cycle.
pub struct StyleKey {
    /// Offset from the cycle start, in milliseconds.
    pub at_ms: u64,
    /// Style at this waypoint.
    pub value: StyleSet,
    /// Ease applied toward the next waypoint.
    pub ease: Ease,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// How a cycle repeats once it completes.
pub enum LoopMode {
    /// Restart from the first waypoint each cycle.
    Repeat,
    /// Alternate direction every cycle.
    PingPong,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Non-terminating decorative animation: waypoints swept over a fixed period,
/// repeated forever. Used for pulses, ripples, and bobbing accents - never
/// for reveal transitions.
pub struct AmbientSpec {
    /// Waypoints, sorted by `at_ms`, all within `[0, period_ms]`.
    pub keys: Vec<StyleKey>,
    /// Cycle length in milliseconds, > 0.
    pub period_ms: u64,
    /// Repeat behavior at each cycle boundary.
    pub mode: LoopMode,
    /// Hold at the cycle endpoint for this long before the next cycle.
    pub repeat_delay_ms: u64,
    /// Hold at the first waypoint for this long before the first cycle.
    pub start_delay_ms: u64,
}

impl AmbientSpec {
    /// Validate waypoint ordering and timing bounds.
    pub fn validate(&self) -> UnveilResult<()> {
        if self.period_ms == 0 {
            return Err(UnveilError::animation("ambient period_ms must be > 0"));
        }
        if self.keys.is_empty() {
            return Err(UnveilError::animation(
                "ambient spec must have at least one waypoint",
            ));
        }
        if !self.keys.windows(2).all(|w| w[0].at_ms <= w[1].at_ms) {
            return Err(UnveilError::animation(
                "ambient waypoints must be sorted by at_ms",
            ));
        }
        if self.keys.iter().any(|k| k.at_ms > self.period_ms) {
            return Err(UnveilError::animation(
                "ambient waypoint offsets must lie within the period",
            ));
        }
        for key in &self.keys {
            key.value.validate()?;
        }
        Ok(())
    }

    /// Style at `phase_ms` within one forward cycle.
    fn at_phase(&self, phase_ms: u64) -> StyleSet {
        let idx = self.keys.partition_point(|k| k.at_ms <= phase_ms);
        if idx == 0 {
            return self.keys[0].value;
        }
        if idx >= self.keys.len() {
            return self.keys[self.keys.len() - 1].value;
        }
        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.at_ms.saturating_sub(a.at_ms);
        if denom == 0 {
            return a.value;
        }
        let t = ((phase_ms - a.at_ms) as f64) / (denom as f64);
        StyleSet::lerp(&a.value, &b.value, a.ease.apply(t))
    }
}

#[derive(Clone, Debug)]
/// A running ambient loop. There is no completion condition; teardown is
/// dropping the value, which is how owners cancel the loop on hide/unmount.
pub struct Ambient {
    spec: AmbientSpec,
    started_at: TimeMs,
}

impl Ambient {
    /// Start the loop at `at`. The spec must already be validated.
    pub fn started(spec: AmbientSpec, at: TimeMs) -> Self {
        Self {
            spec,
            started_at: at,
        }
    }

    /// Style at `now`.
    ///
    /// Before the start delay the first waypoint holds; inside each cycle the
    /// waypoints interpolate; during a repeat-delay gap the cycle endpoint
    /// holds. `PingPong` reflects the phase on alternate cycles.
    pub fn sample(&self, now: TimeMs) -> StyleSet {
        let since_start = now.saturating_since(self.started_at);
        if since_start < self.spec.start_delay_ms {
            return self.spec.keys[0].value;
        }
        let elapsed = since_start - self.spec.start_delay_ms;

        let cycle_len = self.spec.period_ms + self.spec.repeat_delay_ms;
        let cycle_idx = elapsed / cycle_len;
        let pos = elapsed % cycle_len;

        let reversed = matches!(self.spec.mode, LoopMode::PingPong) && cycle_idx % 2 == 1;
        if pos >= self.spec.period_ms {
            // Holding in the gap at whichever end this cycle finished on.
            return if reversed {
                self.spec.keys[0].value
            } else {
                self.spec.keys[self.spec.keys.len() - 1].value
            };
        }

        let phase = if reversed {
            self.spec.period_ms - pos
        } else {
            pos
        };
        self.spec.at_phase(phase)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ambient.rs"]
mod tests;
