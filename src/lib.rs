//! Unveil is a deterministic engine for scroll-driven reveal motion and
//! simple page interaction state.
//!
//! It models the behavioral core of a single-page presentational site: which
//! regions have entered the viewport, how their entrance animations
//! interpolate (including staggered groups and looping decorative motion),
//! when the scroll-to-top affordance shows, and how a contact form moves
//! through validation and a simulated submission.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: build a [`Page`] (sections, triggers, reveal variants)
//!    directly, via [`PageBuilder`]/[`SectionBuilder`], or from JSON.
//! 2. **Mount**: [`PageEngine::new`] validates the page and subscribes every
//!    trigger to one broadcast scroll [`Source`].
//! 3. **Feed**: the host forwards scroll/resize events
//!    ([`PageEngine::on_scroll`], [`PageEngine::on_resize`]) and advances
//!    time ([`PageEngine::tick`]).
//! 4. **Sample**: [`PageEngine::sample`] evaluates every element into an
//!    [`EvaluatedPage`] of interpolated style parameters for the rendering
//!    layer.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: the crate never reads a clock; hosts pass
//!   [`TimeMs`] everywhere, which makes timing properties unit-testable.
//! - **No I/O in the engine**: the simulated form submission is a fixed
//!   deadline, not a network call.
//! - **Lifetime-tied cancellation**: every pending continuation (timers,
//!   glides, loops, observations) is plain owned state; dropping its owner
//!   cancels it.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod eval;
mod foundation;
mod observe;
mod page;

pub use animation::ambient::{Ambient, AmbientSpec, LoopMode, StyleKey};
pub use animation::ease::Ease;
pub use animation::reveal::{Reveal, RevealStyle, Transition, Variant};
pub use animation::stagger::{RevealGroup, StaggerSpec};
pub use animation::style::{Lerp, StyleSet};
pub use eval::engine::{EvaluatedElement, EvaluatedPage, EvaluatedScrollTop, PageEngine};
pub use foundation::core::{
    Point, Rect, ScrollSample, TimeMs, Vec2, ViewportSize, progress, visible_fraction,
};
pub use foundation::error::{UnveilError, UnveilResult};
pub use observe::signal::{Source, Subscription};
pub use observe::trigger::{TriggerSpec, ViewportTrigger};
pub use page::dsl::{PageBuilder, SectionBuilder};
pub use page::form::{
    ContactForm, FormError, FormFields, FormPhase, SUBMIT_LATENCY_MS, email_shape_ok,
};
pub use page::model::{AmbientDecl, ElementDecl, GroupDecl, Page, Section};
pub use page::scroll_top::{
    Glide, SCROLL_TOP_GLIDE_MS, SCROLL_TOP_THRESHOLD_PX, ScrollTopControl,
};
