use crate::{
    animation::reveal::{Reveal, RevealStyle, Variant},
    animation::style::StyleSet,
    foundation::core::TimeMs,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Timing applied across the children of a grouped reveal.
pub struct StaggerSpec {
    /// Delay before the first child starts, in milliseconds.
    pub base_delay_ms: u64,
    /// Extra delay per child ordinal, in milliseconds.
    pub interval_ms: u64,
}

impl Default for StaggerSpec {
    fn default() -> Self {
        Self {
            base_delay_ms: 0,
            interval_ms: 100,
        }
    }
}

#[derive(Clone, Debug)]
/// A container-triggered group of reveals.
///
/// Child `i` starts no earlier than `container flip + base_delay +
/// i * interval` plus its own transition delay. Children are driven by the
/// container's trigger only; their own geometry never matters.
pub struct RevealGroup {
    children: Vec<(String, Reveal)>,
}

impl RevealGroup {
    /// Build the group, baking each child's stagger offset into its sampler.
    pub fn new(spec: StaggerSpec, children: Vec<(String, RevealStyle)>) -> Self {
        let children = children
            .into_iter()
            .enumerate()
            .map(|(i, (id, style))| {
                let extra = spec.base_delay_ms + (i as u64) * spec.interval_ms;
                (id, Reveal::with_extra_delay(style, extra))
            })
            .collect();
        Self { children }
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the group has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Fan the container's signal out to every child.
    pub fn drive(&mut self, container_in_view: bool, at: TimeMs) {
        for (_, reveal) in &mut self.children {
            reveal.drive(container_in_view, at);
        }
    }

    /// Sample every child: `(id, style, variant)` in declaration order.
    pub fn sample_all(&self, now: TimeMs) -> Vec<(&str, StyleSet, Variant)> {
        self.children
            .iter()
            .map(|(id, reveal)| (id.as_str(), reveal.sample(now), reveal.variant()))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/stagger.rs"]
mod tests;
