//! Declarative page model, builder DSL, scroll-top control, contact form.

pub mod dsl;
pub mod form;
pub mod model;
pub mod scroll_top;
