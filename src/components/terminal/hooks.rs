//! Custom hooks for terminal components.
//!
//! Provides reusable effects shared by the terminal views.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::CLOCK_TICK_MS;
use crate::utils::dom;

/// Keep the output pane scrolled to the bottom whenever history changes.
pub fn use_autoscroll(ctx: AppContext, output_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move || {
        ctx.shell.track();
        ctx.suggestions.track();
        if let Some(el) = output_ref.get() {
            dom::scroll_to_bottom(&el);
        }
    });
}

/// Refresh the status bar clock once per tick.
///
/// The ticker only writes the displayed time; shell state is never touched.
pub fn use_clock_ticker(ctx: AppContext) {
    Interval::new(CLOCK_TICK_MS, move || ctx.tick()).forget();
}
