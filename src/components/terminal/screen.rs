//! Top-level screen component.
//!
//! Switches between the boot splash and the terminal window, and starts the
//! one-shot boot timer and the status bar clock.

use leptos::prelude::*;

use super::boot::{self, BootSplash};
use super::hooks::use_clock_ticker;
use super::terminal::Terminal;
use crate::app::{AppContext, ScreenMode};

stylance::import_crate_style!(css, "src/components/terminal/screen.module.css");

#[component]
pub fn Screen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    // Boot sequence runs once
    let boot_started = StoredValue::new(false);
    Effect::new(move || {
        if !boot_started.get_value() {
            boot_started.set_value(true);
            boot::run(ctx);
        }
    });

    use_clock_ticker(ctx);

    view! {
        <div class=css::screen>
            <div class=css::backdrop></div>
            {move || match ctx.screen_mode.get() {
                ScreenMode::Booting => view! { <BootSplash /> }.into_any(),
                ScreenMode::Terminal => view! { <Terminal /> }.into_any(),
            }}
        </div>
    }
}
