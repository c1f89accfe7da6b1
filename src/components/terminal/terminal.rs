//! Terminal window component.
//!
//! Window chrome, welcome header, command history, suggestion panel,
//! the input line and the status bar.

use leptos::prelude::*;
use leptos_icons::Icon;
use log::info;

use super::hooks::use_autoscroll;
use super::input::HistoryDirection;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::status::Status;
use crate::components::terminal::{HistoryEntry, Input, Output};
use crate::config::{EXIT_URL, WINDOW_TITLE};
use crate::utils::{BrowserClock, dom};
use dosterm_core::config::WELCOME_HINT;
use dosterm_core::{AutocompleteResult, Recall, Submission, version_banner};

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

// ============================================================================
// Terminal Component
// ============================================================================

#[component]
pub fn Terminal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let output_ref = NodeRef::<leptos::html::Div>::new();

    // Derived signals
    let prompt = Signal::derive(move || ctx.get_prompt());
    let window_class = move || {
        if ctx.maximized.get() {
            format!("{} {}", css::window, css::maximized)
        } else {
            css::window.to_string()
        }
    };

    // Callbacks
    let on_submit = create_submit_callback(ctx);
    let on_history_nav = create_history_nav_callback(ctx);
    let on_autocomplete = create_autocomplete_callback(ctx);

    use_autoscroll(ctx, output_ref);

    view! {
        <div class=window_class>
            <WindowHeader />

            <div
                node_ref=output_ref
                class=css::content
                on:click=move |_| dom::focus_terminal_input()
            >
                <div class=css::welcome>
                    {version_banner()
                        .into_iter()
                        .map(|line| view! { <Output line=line /> })
                        .collect_view()}
                    <div class=css::welcomeHint>{WELCOME_HINT}</div>
                </div>

                <For
                    each=move || ctx.shell.with(|shell| shell.history().to_vec())
                    key=|record| record.id
                    children=|record| view! { <HistoryEntry record=record /> }
                />

                <Show when=move || ctx.suggestions.with(|s| !s.is_empty())>
                    <div class=css::suggestions>
                        <div class=css::suggestionsLabel>"Suggestions:"</div>
                        <div class=css::suggestionList>
                            {move || ctx.suggestions.get()
                                .into_iter()
                                .map(|s| view! { <span class=css::suggestion>{s}</span> })
                                .collect_view()}
                        </div>
                    </div>
                </Show>

                <Input
                    prompt=prompt
                    suggestions=ctx.suggestions
                    on_submit=on_submit
                    on_history_nav=on_history_nav
                    on_autocomplete=on_autocomplete
                />
            </div>

            <Status />
        </div>
    }
}

/// Title bar with back, maximize and close buttons.
#[component]
fn WindowHeader() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let toggle_maximized = move |_: leptos::ev::MouseEvent| ctx.toggle_maximized();

    view! {
        <div class=css::header>
            <div class=css::headerTitle>
                <span class=css::headerIcon><Icon icon=ic::TERMINAL /></span>
                <span>{WINDOW_TITLE}</span>
            </div>
            <div class=css::headerButtons>
                <a class=css::headerButton href=EXIT_URL title="Back">
                    <Icon icon=ic::BACK />
                </a>
                <button class=css::headerButton on:click=toggle_maximized title="Maximize">
                    {move || if ctx.maximized.get() {
                        view! { <Icon icon=ic::MINIMIZE /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::MAXIMIZE /> }.into_any()
                    }}
                </button>
                <a class=format!("{} {}", css::headerButton, css::closeButton) href=EXIT_URL title="Close">
                    <Icon icon=ic::CLOSE />
                </a>
            </div>
        </div>
    }
}

// ============================================================================
// Callback Factories
// ============================================================================

fn create_submit_callback(ctx: AppContext) -> Callback<String> {
    Callback::new(move |input: String| {
        ctx.hide_suggestions();
        let submission = ctx.shell.try_update(|shell| shell.submit(&input, &BrowserClock));
        if submission == Some(Submission::Exit) {
            info!("exit requested, leaving terminal");
            dom::navigate_to(EXIT_URL);
        }
    })
}

fn create_history_nav_callback(ctx: AppContext) -> Callback<HistoryDirection, Recall> {
    // The recall cursor is not rendered, so history navigation does not notify.
    Callback::new(move |direction: HistoryDirection| {
        ctx.shell
            .try_update_untracked(|shell| match direction {
                HistoryDirection::Previous => shell.recall_previous(),
                HistoryDirection::Next => shell.recall_next(),
            })
            .unwrap_or(Recall::Keep)
    })
}

fn create_autocomplete_callback(ctx: AppContext) -> Callback<String, AutocompleteResult> {
    Callback::new(move |input: String| ctx.shell.with_untracked(|shell| shell.complete(&input)))
}
