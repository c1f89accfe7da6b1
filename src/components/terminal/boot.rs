//! Boot splash
//!
//! Shown once at startup and replaced by the terminal after
//! [`BOOT_SPLASH_MS`], whatever the user does meanwhile.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_icons::Icon;
use log::debug;

use crate::app::{AppContext, ScreenMode};
use crate::components::icons as ic;
use crate::config::{BOOT_SPLASH_MS, SPLASH_TITLE};
use crate::utils::dom;
use dosterm_core::config::APP_VERSION;

stylance::import_crate_style!(css, "src/components/terminal/boot.module.css");

/// Schedule the switch from splash to terminal.
pub fn run(ctx: AppContext) {
    debug!("boot splash for {} ms", BOOT_SPLASH_MS);
    Timeout::new(BOOT_SPLASH_MS, move || {
        ctx.screen_mode.set(ScreenMode::Terminal);
        // The input mounts on the next render.
        focus_after_render();
    })
    .forget();
}

fn focus_after_render() {
    Timeout::new(0, dom::focus_terminal_input).forget();
}

#[component]
pub fn BootSplash() -> impl IntoView {
    view! {
        <div class=css::splash>
            <div class=css::content>
                <div class=css::logo>
                    <Icon icon=ic::TERMINAL />
                </div>
                <div class=css::heading>
                    <div class=css::title>{SPLASH_TITLE}</div>
                    <div class=css::version>{format!("Version {}", APP_VERSION)}</div>
                </div>
                <div class=css::loading>
                    <div>"Loading system files..."</div>
                    <div class=css::progressTrack>
                        <div class=css::progressBar></div>
                    </div>
                </div>
                <div class=css::hint>"Press any key to continue..."</div>
            </div>
        </div>
    }
}
