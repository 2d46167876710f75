//! Component lifecycle.
//!
//! Every widget follows a fixed three-phase lifecycle:
//!
//! 1. **construct** — the widget's `new` consumes and validates its option
//!    bag and computes derived classes;
//! 2. **before_render** — an optional hook that runs after all slot
//!    content is in place, for attribute decisions that depend on slots
//!    (attachment wiring, position classes, last-item handling);
//! 3. **render** — a pure function from the instance to a [`Markup`] tree.
//!
//! No class or attribute computation may depend on slot content unless it
//! is deferred to `before_render` or later.

use crate::markup::Markup;

/// A renderable component.
pub trait Component {
    /// Hook invoked after slot composition, before [`Component::render`].
    ///
    /// This is the only phase allowed to mutate the instance based on slot
    /// content. The default does nothing.
    fn before_render(&mut self) {}

    /// Produce the markup tree. Must not mutate any further state.
    fn render(&self) -> Markup;
}

/// Drive a component through `before_render` and `render`.
pub fn render_component<C: Component>(component: &mut C) -> Markup {
    component.before_render();
    component.render()
}

/// Render a component straight to an HTML string.
pub fn render_to_string<C: Component>(component: &mut C) -> String {
    render_component(component).to_html()
}
