use dosterm_core::{HistoryRecord, OutputLine, OutputLineData};
use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

#[component]
pub fn Output(line: OutputLine) -> impl IntoView {
    match line.data {
        OutputLineData::Text(text) => {
            view! {
                <div class=format!("{} {}", css::line, css::textGreen)>{text}</div>
            }.into_any()
        }
        OutputLineData::Error(text) => {
            view! {
                <div class=format!("{} {}", css::line, css::textRed)>{text}</div>
            }.into_any()
        }
        OutputLineData::Empty => {
            view! {
                <div class=css::lineEmpty></div>
            }.into_any()
        }
    }
}

/// One executed command: the prompt it was typed at, then its output.
#[component]
pub fn HistoryEntry(record: HistoryRecord) -> impl IntoView {
    view! {
        <div class=css::entry>
            <div class=css::command>
                <span class=css::textYellow>{record.prompt}</span>
                <span class=css::textWhite>{record.command}</span>
            </div>
            {record.output
                .into_iter()
                .map(|line| view! { <Output line=line /> })
                .collect_view()}
        </div>
    }
}
