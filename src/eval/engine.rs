use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    animation::ambient::Ambient,
    animation::ease::Ease,
    animation::reveal::{Reveal, Variant},
    animation::stagger::RevealGroup,
    animation::style::StyleSet,
    foundation::core::{ScrollSample, TimeMs, ViewportSize},
    foundation::error::{UnveilError, UnveilResult},
    observe::signal::{Source, Subscription},
    observe::trigger::ViewportTrigger,
    page::form::{ContactForm, FormPhase},
    page::model::{Page, Section},
    page::scroll_top::{Glide, SCROLL_TOP_GLIDE_MS, ScrollTopControl},
};

#[derive(Clone, Debug, serde::Serialize)]
/// One element's evaluated state at a point in time.
pub struct EvaluatedElement {
    /// Owning section id.
    pub section: String,
    /// Element id.
    pub element: String,
    /// Reveal variant; `None` for ambient loops, which have no target state.
    pub variant: Option<Variant>,
    /// Interpolated style parameters.
    pub style: StyleSet,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Evaluated state of the scroll-top control.
pub struct EvaluatedScrollTop {
    /// Whether the control is shown.
    pub visible: bool,
    /// Entrance/exit pop style.
    pub style: StyleSet,
    /// Ripple style while the loop exists (visible only).
    pub pulse: Option<StyleSet>,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Full evaluated snapshot of the page at one instant.
pub struct EvaluatedPage {
    /// Evaluation time.
    pub at: TimeMs,
    /// Latest scroll offset.
    pub scroll_y: f64,
    /// Every element in section order: plain reveals, then group children,
    /// then ambients.
    pub elements: Vec<EvaluatedElement>,
    /// Scroll-top control state.
    pub scroll_top: EvaluatedScrollTop,
    /// Contact form phase.
    pub form_phase: FormPhase,
}

struct SectionRuntime {
    id: String,
    trigger: Rc<RefCell<ViewportTrigger>>,
    // Held for its Drop: unsubscribes the trigger when the runtime goes away.
    _observation: Subscription<ScrollSample>,
    reveals: Vec<(String, Reveal)>,
    group: Option<RevealGroup>,
    ambients: Vec<(String, Ambient)>,
}

impl SectionRuntime {
    fn build(section: &Section, scroll: &Source<ScrollSample>, now: TimeMs) -> UnveilResult<Self> {
        let trigger = Rc::new(RefCell::new(ViewportTrigger::new(section.trigger)?));
        let rect = section.rect;
        let observation = {
            let trigger = Rc::clone(&trigger);
            scroll.subscribe(move |sample| {
                trigger.borrow_mut().observe(rect, sample);
            })
        };

        let reveals = section
            .elements
            .iter()
            .map(|e| (e.id.clone(), Reveal::new(e.reveal)))
            .collect();
        let group = section.group.as_ref().map(|g| {
            RevealGroup::new(
                g.stagger,
                g.children
                    .iter()
                    .map(|c| (c.id.clone(), c.reveal))
                    .collect(),
            )
        });
        let ambients = section
            .ambients
            .iter()
            .map(|a| (a.id.clone(), Ambient::started(a.spec.clone(), now)))
            .collect();

        Ok(Self {
            id: section.id.clone(),
            trigger,
            _observation: observation,
            reveals,
            group,
            ambients,
        })
    }
}

/// Stateful, single-threaded orchestrator for one page lifetime.
///
/// Owns one broadcast [`Source`] of scroll samples; every section trigger and
/// the scroll-top control subscribe to it, so triggers latch on the scroll
/// event itself, independent of when styles are next sampled. All pending
/// work (form deadline, glides, loops) is plain owned state: dropping the
/// engine, or unmounting a section, cancels everything it owned.
pub struct PageEngine {
    page: Page,
    scroll: Source<ScrollSample>,
    viewport: ViewportSize,
    sections: Vec<SectionRuntime>,
    scroll_top: Rc<RefCell<ScrollTopControl>>,
    _scroll_top_sub: Subscription<ScrollSample>,
    section_glide: Option<Glide>,
    form: ContactForm,
}

impl PageEngine {
    /// Validate `page` and mount every runtime at `now`.
    ///
    /// The initial sample (offset 0) is broadcast during construction, so a
    /// section already in view at mount satisfies its trigger immediately.
    pub fn new(page: Page, now: TimeMs) -> UnveilResult<Self> {
        page.validate()?;

        let viewport = page.viewport;
        let scroll = Source::new(ScrollSample {
            at: now,
            scroll_y: 0.0,
            viewport,
        });

        let sections = page
            .sections
            .iter()
            .map(|s| SectionRuntime::build(s, &scroll, now))
            .collect::<UnveilResult<Vec<_>>>()?;

        let scroll_top = Rc::new(RefCell::new(ScrollTopControl::new()));
        let scroll_top_sub = {
            let control = Rc::clone(&scroll_top);
            scroll.subscribe(move |sample| {
                control.borrow_mut().on_scroll(sample);
            })
        };

        Ok(Self {
            page,
            scroll,
            viewport,
            sections,
            scroll_top,
            _scroll_top_sub: scroll_top_sub,
            section_glide: None,
            form: ContactForm::new(),
        })
    }

    fn max_scroll(&self) -> f64 {
        (self.page.doc_height - self.viewport.height).max(0.0)
    }

    /// Broadcast a new scroll offset observed at `now`.
    #[tracing::instrument(skip(self))]
    pub fn on_scroll(&mut self, scroll_y: f64, now: TimeMs) {
        let clamped = scroll_y.clamp(0.0, self.max_scroll());
        self.scroll.emit(ScrollSample {
            at: now,
            scroll_y: clamped,
            viewport: self.viewport,
        });
    }

    /// Broadcast a viewport resize observed at `now`.
    #[tracing::instrument(skip(self))]
    pub fn on_resize(&mut self, viewport: ViewportSize, now: TimeMs) {
        self.viewport = viewport;
        let scroll_y = self.scroll.latest().scroll_y.clamp(0.0, self.max_scroll());
        self.scroll.emit(ScrollSample {
            at: now,
            scroll_y,
            viewport,
        });
    }

    /// Advance time-driven state: the form deadline and any active glide.
    ///
    /// Glide offsets are fed back through the normal scroll broadcast, so
    /// triggers observe programmatic scrolling exactly like user scrolling.
    pub fn tick(&mut self, now: TimeMs) {
        self.form.tick(now);

        let step = self.scroll_top.borrow_mut().glide_step(now);
        if let Some(y) = step {
            self.on_scroll(y, now);
        }

        if let Some(glide) = self.section_glide {
            if glide.is_done(now) {
                self.section_glide = None;
                self.on_scroll(glide.target(), now);
            } else {
                self.on_scroll(glide.offset(now), now);
            }
        }
    }

    /// Start a smooth glide that brings `section_id`'s top to the viewport
    /// top (the "request access" scroll of the original page).
    pub fn scroll_to_section(&mut self, section_id: &str, now: TimeMs) -> UnveilResult<()> {
        let section = self
            .page
            .section(section_id)
            .ok_or_else(|| UnveilError::evaluation(format!("unknown section '{section_id}'")))?;
        let target = section.rect.y0.clamp(0.0, self.max_scroll());
        let from = self.scroll.latest().scroll_y;
        self.section_glide = Some(Glide::to(
            target,
            from,
            now,
            SCROLL_TOP_GLIDE_MS,
            Ease::InOutCubic,
        ));
        Ok(())
    }

    /// Evaluate every element's style at `now`.
    #[tracing::instrument(skip(self))]
    pub fn sample(&mut self, now: TimeMs) -> EvaluatedPage {
        let mut elements = Vec::new();
        for runtime in &mut self.sections {
            let (satisfied, changed_at) = {
                let trigger = runtime.trigger.borrow();
                (trigger.is_satisfied(), trigger.changed_at())
            };
            // Anchor animation starts at the trigger flip, not at this
            // sampling instant, so start times are exact.
            let at = changed_at.unwrap_or(now);

            for (id, reveal) in &mut runtime.reveals {
                reveal.drive(satisfied, at);
                elements.push(EvaluatedElement {
                    section: runtime.id.clone(),
                    element: id.clone(),
                    variant: Some(reveal.variant()),
                    style: reveal.sample(now),
                });
            }
            if let Some(group) = &mut runtime.group {
                group.drive(satisfied, at);
                for (id, style, variant) in group.sample_all(now) {
                    elements.push(EvaluatedElement {
                        section: runtime.id.clone(),
                        element: id.to_string(),
                        variant: Some(variant),
                        style,
                    });
                }
            }
            for (id, ambient) in &runtime.ambients {
                elements.push(EvaluatedElement {
                    section: runtime.id.clone(),
                    element: id.clone(),
                    variant: None,
                    style: ambient.sample(now),
                });
            }
        }

        let scroll_top = {
            let control = self.scroll_top.borrow();
            EvaluatedScrollTop {
                visible: control.is_visible(),
                style: control.style(now),
                pulse: control.pulse_style(now),
            }
        };

        EvaluatedPage {
            at: now,
            scroll_y: self.scroll.latest().scroll_y,
            elements,
            scroll_top,
            form_phase: self.form.phase(),
        }
    }

    /// Remove a section's runtime; its observation drops with it and no
    /// later sample reaches it. Returns `false` for an unknown id.
    pub fn unmount_section(&mut self, section_id: &str) -> bool {
        let before = self.sections.len();
        self.sections.retain(|s| s.id != section_id);
        let removed = self.sections.len() != before;
        if removed {
            tracing::debug!(section = section_id, "section unmounted");
        }
        removed
    }

    /// The contact form.
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// The contact form, mutably (submit/edit/reset).
    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    /// Read access to the scroll-top control.
    pub fn scroll_top(&self) -> std::cell::Ref<'_, ScrollTopControl> {
        self.scroll_top.borrow()
    }

    /// Mutable access to the scroll-top control.
    pub fn scroll_top_mut(&self) -> std::cell::RefMut<'_, ScrollTopControl> {
        self.scroll_top.borrow_mut()
    }

    /// Invoke the scroll-to-top action at `now`; `false` while hidden.
    pub fn request_scroll_to_top(&mut self, now: TimeMs) -> bool {
        self.scroll_top.borrow_mut().request_scroll_to_top(now)
    }

    /// The ambient scroll broadcast, for host-side read-only subscriptions.
    pub fn scroll_source(&self) -> &Source<ScrollSample> {
        &self.scroll
    }

    /// The validated page this engine was built from.
    pub fn page(&self) -> &Page {
        &self.page
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/engine.rs"]
mod tests;
