use crate::{
    animation::ambient::AmbientSpec,
    animation::reveal::RevealStyle,
    animation::stagger::StaggerSpec,
    foundation::core::{Rect, ViewportSize},
    foundation::error::{UnveilError, UnveilResult},
    observe::trigger::TriggerSpec,
    page::model::{AmbientDecl, ElementDecl, GroupDecl, Page, Section},
};

/// Chained builder for a [`Page`]; `build()` ends in validation.
pub struct PageBuilder {
    viewport: ViewportSize,
    doc_height: f64,
    sections: Vec<Section>,
}

impl PageBuilder {
    /// Start a page with the given viewport and document height.
    pub fn new(viewport: ViewportSize, doc_height: f64) -> Self {
        Self {
            viewport,
            doc_height,
            sections: Vec::new(),
        }
    }

    /// Append a finished section, rejecting duplicate ids at insertion.
    pub fn section(mut self, section: Section) -> UnveilResult<Self> {
        if self.sections.iter().any(|s| s.id == section.id) {
            return Err(UnveilError::validation(format!(
                "duplicate section id '{}'",
                section.id
            )));
        }
        self.sections.push(section);
        Ok(self)
    }

    /// Finish and validate the page.
    pub fn build(self) -> UnveilResult<Page> {
        let page = Page {
            viewport: self.viewport,
            doc_height: self.doc_height,
            sections: self.sections,
        };
        page.validate()?;
        Ok(page)
    }
}

/// Chained builder for a [`Section`].
pub struct SectionBuilder {
    id: String,
    rect: Rect,
    trigger: TriggerSpec,
    elements: Vec<ElementDecl>,
    group: Option<GroupDecl>,
    ambients: Vec<AmbientDecl>,
}

impl SectionBuilder {
    /// Start a section over `rect` with the default trigger
    /// (threshold 0.1, latched).
    pub fn new(id: impl Into<String>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            rect,
            trigger: TriggerSpec::default(),
            elements: Vec::new(),
            group: None,
            ambients: Vec::new(),
        }
    }

    /// Replace the trigger configuration.
    pub fn trigger(mut self, trigger: TriggerSpec) -> Self {
        self.trigger = trigger;
        self
    }

    /// Add an individually revealed element.
    pub fn element(mut self, id: impl Into<String>, reveal: RevealStyle) -> Self {
        self.elements.push(ElementDecl {
            id: id.into(),
            reveal,
        });
        self
    }

    /// Set the staggered group of children.
    pub fn group<S: Into<String>>(
        mut self,
        stagger: StaggerSpec,
        children: Vec<(S, RevealStyle)>,
    ) -> Self {
        self.group = Some(GroupDecl {
            stagger,
            children: children
                .into_iter()
                .map(|(id, reveal)| ElementDecl {
                    id: id.into(),
                    reveal,
                })
                .collect(),
        });
        self
    }

    /// Add a decorative ambient loop.
    pub fn ambient(mut self, id: impl Into<String>, spec: AmbientSpec) -> Self {
        self.ambients.push(AmbientDecl {
            id: id.into(),
            spec,
        });
        self
    }

    /// Finish the section.
    pub fn build(self) -> Section {
        Section {
            id: self.id,
            rect: self.rect,
            trigger: self.trigger,
            elements: self.elements,
            group: self.group,
            ambients: self.ambients,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/dsl.rs"]
mod tests;
