use crate::foundation::error::{UnveilError, UnveilResult};

/// Linear interpolation between two values of a type.
pub trait Lerp: Sized {
    /// Interpolate from `a` (`t = 0`) to `b` (`t = 1`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// The fixed record of animatable style parameters.
///
/// Offsets are relative to the element's resting layout position, so the
/// default is the fully-shown identity style.
pub struct StyleSet {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Horizontal offset in pixels.
    pub x: f64,
    /// Vertical offset in pixels.
    pub y: f64,
    /// Uniform scale factor.
    pub scale: f64,
}

impl Default for StyleSet {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }
}

impl StyleSet {
    /// This style with `opacity` replaced.
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    /// This style with the horizontal offset replaced.
    pub fn with_x(self, x: f64) -> Self {
        Self { x, ..self }
    }

    /// This style with the vertical offset replaced.
    pub fn with_y(self, y: f64) -> Self {
        Self { y, ..self }
    }

    /// This style with the scale factor replaced.
    pub fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    /// Every parameter must be finite; opacity additionally in `[0, 1]`.
    pub fn validate(&self) -> UnveilResult<()> {
        let finite = self.opacity.is_finite()
            && self.x.is_finite()
            && self.y.is_finite()
            && self.scale.is_finite();
        if !finite {
            return Err(UnveilError::validation("style parameters must be finite"));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(UnveilError::validation("style opacity must be in [0, 1]"));
        }
        Ok(())
    }
}

impl Lerp for StyleSet {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            opacity: f64::lerp(&a.opacity, &b.opacity, t),
            x: f64::lerp(&a.x, &b.x, t),
            y: f64::lerp(&a.y, &b.y, t),
            scale: f64::lerp(&a.scale, &b.scale, t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/style.rs"]
mod tests;
