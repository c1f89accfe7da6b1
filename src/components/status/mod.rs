//! Status bar component.
//!
//! Displays the current path, entry count, key hints and the clock.

use leptos::prelude::*;

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/status/status.module.css");

/// Status bar at the bottom of the terminal window.
///
/// ## Responsive behavior
///
/// | Breakpoint | Display |
/// |------------|---------|
/// | Desktop (> 768px) | `Path: C:\DOS  Files: 3 \| F1: Help  TAB: Complete  ESC: Exit \| date time` |
/// | Tablet (480-768px) | Key hints hidden |
/// | Mobile (< 480px) | Path and time only |
#[component]
pub fn Status() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let display_path = Signal::derive(move || ctx.shell.with(|shell| shell.display_path()));
    let entry_count = Signal::derive(move || ctx.shell.with(|shell| shell.entry_count()));

    view! {
        <footer class=css::bar>
            <div class=css::section>
                <span>"Path: "{display_path}</span>
                <span class=css::files>"Files: "{entry_count}</span>
            </div>

            <div class=css::hints>
                <span>"F1: Help"</span>
                <span>"TAB: Complete"</span>
                <span>"ESC: Exit"</span>
            </div>

            <div class=css::clock>
                <span class=css::date>{move || ctx.now.with(|(date, _)| date.clone())}</span>
                " "
                <span>{move || ctx.now.with(|(_, time)| time.clone())}</span>
            </div>
        </footer>
    }
}
