//! Terminal input component with autocompletion and history navigation.

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use crate::config::CURSOR_GLYPH;
use dosterm_core::{AutocompleteResult, Recall};

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Direction of a history recall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryDirection {
    Previous,
    Next,
}

/// Terminal input field with Tab completion and history recall.
///
/// Multi-candidate completions are written to `suggestions`; the panel that
/// shows them is rendered by the parent.
#[component]
pub fn Input(
    #[prop(into)] prompt: Signal<String>,
    suggestions: RwSignal<Vec<String>>,
    on_submit: Callback<String>,
    on_history_nav: Callback<HistoryDirection, Recall>,
    on_autocomplete: Callback<String, AutocompleteResult>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let (input_value, set_input_value) = signal(String::new());

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    // Helper to move cursor to end of input
    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            let len = input.value().len() as u32;
            let _ = input.set_selection_range(len, len);
        }
    };

    let hide_suggestions = move || {
        if suggestions.with_untracked(|s| !s.is_empty()) {
            suggestions.set(Vec::new());
        }
    };

    // Handle Tab key for autocompletion
    let handle_tab = move |value: String| -> Option<String> {
        match on_autocomplete.run(value) {
            AutocompleteResult::Single(completed) => {
                hide_suggestions();
                Some(completed)
            }
            AutocompleteResult::Multiple {
                extended,
                suggestions: matches,
            } => {
                suggestions.set(matches);
                extended
            }
            AutocompleteResult::None => None,
        }
    };

    let apply_recall = move |recall: Recall| {
        if let Recall::Set(text) = recall {
            set_input_value.set(text);
            move_cursor_to_end();
        }
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        match ev.key().as_str() {
            "Enter" => {
                let value = input_value.get();
                set_input_value.set(String::new());
                on_submit.run(value);
            }
            "Tab" => {
                ev.prevent_default();
                if let Some(completed) = handle_tab(input_value.get()) {
                    set_input_value.set(completed);
                    move_cursor_to_end();
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                apply_recall(on_history_nav.run(HistoryDirection::Previous));
                hide_suggestions();
            }
            "ArrowDown" => {
                ev.prevent_default();
                apply_recall(on_history_nav.run(HistoryDirection::Next));
                hide_suggestions();
            }
            _ => {
                // Escape and any other key close the panel
                hide_suggestions();
            }
        }
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        set_input_value.set(input.value());
    };

    view! {
        <div class=css::line>
            <span class=css::prompt>{prompt}</span>
            <input
                node_ref=input_ref
                type="text"
                class=css::input
                autocomplete="off"
                spellcheck="false"
                prop:value=input_value
                on:input=handle_input
                on:keydown=handle_keydown
            />
            <span class=css::cursor>{CURSOR_GLYPH}</span>
        </div>
    }
}
