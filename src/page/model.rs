use std::collections::BTreeSet;

use crate::{
    animation::ambient::AmbientSpec,
    animation::reveal::RevealStyle,
    animation::stagger::StaggerSpec,
    foundation::core::{Rect, ViewportSize},
    foundation::error::{UnveilError, UnveilResult},
    observe::trigger::TriggerSpec,
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A full page description: viewport, document extent, and sections.
pub struct Page {
    /// Initial viewport size.
    pub viewport: ViewportSize,
    /// Total scrollable document height in pixels.
    pub doc_height: f64,
    /// Sections in document order.
    pub sections: Vec<Section>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One observed region of the page and the animations it owns.
pub struct Section {
    /// Stable identifier, unique across the page.
    pub id: String,
    /// Region in document coordinates.
    pub rect: Rect,
    /// Intersection trigger configuration for this section.
    pub trigger: TriggerSpec,
    /// Individually revealed elements.
    pub elements: Vec<ElementDecl>,
    /// Optional staggered group of children.
    pub group: Option<GroupDecl>,
    /// Decorative ambient loops, running from mount.
    pub ambients: Vec<AmbientDecl>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One revealed element.
pub struct ElementDecl {
    /// Identifier, unique within the owning section.
    pub id: String,
    /// Hidden/visible variants and transition timing.
    pub reveal: RevealStyle,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A staggered container of child reveals, driven by the section trigger.
pub struct GroupDecl {
    /// Stagger timing across the children.
    pub stagger: StaggerSpec,
    /// Children in ordinal order.
    pub children: Vec<ElementDecl>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One decorative looping animation.
pub struct AmbientDecl {
    /// Identifier, unique within the owning section.
    pub id: String,
    /// The loop specification.
    pub spec: AmbientSpec,
}

impl Page {
    /// Validate the whole document: dimensions, rects, id uniqueness, and
    /// every nested trigger/transition/ambient spec.
    pub fn validate(&self) -> UnveilResult<()> {
        if !self.doc_height.is_finite() || self.doc_height <= 0.0 {
            return Err(UnveilError::validation("doc_height must be finite and > 0"));
        }
        ViewportSize::new(self.viewport.width, self.viewport.height)?;

        let mut section_ids = BTreeSet::new();
        for section in &self.sections {
            if !section_ids.insert(section.id.as_str()) {
                return Err(UnveilError::validation(format!(
                    "duplicate section id '{}'",
                    section.id
                )));
            }
            section.validate(self.doc_height)?;
        }
        Ok(())
    }

    /// Look up a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }
}

impl Section {
    fn validate(&self, doc_height: f64) -> UnveilResult<()> {
        if self.id.trim().is_empty() {
            return Err(UnveilError::validation("section id must be non-empty"));
        }
        let r = self.rect;
        let finite = [r.x0, r.y0, r.x1, r.y1].iter().all(|v| v.is_finite());
        if !finite || r.x1 < r.x0 || r.y1 < r.y0 {
            return Err(UnveilError::validation(format!(
                "section '{}' rect must be finite and non-inverted",
                self.id
            )));
        }
        if r.y0 < 0.0 || r.y1 > doc_height {
            return Err(UnveilError::validation(format!(
                "section '{}' rect lies outside the document",
                self.id
            )));
        }
        self.trigger.validate()?;

        let mut element_ids = BTreeSet::new();
        let mut check_id = |id: &str| -> UnveilResult<()> {
            if id.trim().is_empty() {
                return Err(UnveilError::validation(format!(
                    "element id in section '{}' must be non-empty",
                    self.id
                )));
            }
            if !element_ids.insert(id.to_string()) {
                return Err(UnveilError::validation(format!(
                    "duplicate element id '{}' in section '{}'",
                    id, self.id
                )));
            }
            Ok(())
        };

        for element in &self.elements {
            check_id(&element.id)?;
            element.reveal.validate()?;
        }
        if let Some(group) = &self.group {
            for child in &group.children {
                check_id(&child.id)?;
                child.reveal.validate()?;
            }
        }
        for ambient in &self.ambients {
            check_id(&ambient.id)?;
            ambient.spec.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/model.rs"]
mod tests;
