//! Root application module.
//!
//! Contains the main App component, AppContext definition and the
//! application-level setup logic following Leptos conventions.

use std::sync::Arc;

use leptos::prelude::*;
use log::error;

use dosterm_core::{BlogStore, Clock, Shell, VirtualFs};

use crate::components::Screen;
use crate::utils::BrowserClock;

// ============================================================================
// ScreenMode
// ============================================================================

/// Which full-page view is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScreenMode {
    /// Boot splash, replaced once the splash delay elapses.
    #[default]
    Booting,
    /// The terminal window.
    Terminal,
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// The shell is the single owner of filesystem, history and path state. The
/// remaining signals hold presentation state only:
/// - **Screen**: boot splash or terminal
/// - **Window**: maximized or framed
/// - **Suggestions**: candidates from the last multi-match Tab
/// - **Clock**: the status bar time, updated by its own ticker
#[derive(Clone, Copy)]
pub struct AppContext {
    pub shell: RwSignal<Shell>,
    pub screen_mode: RwSignal<ScreenMode>,
    pub maximized: RwSignal<bool>,
    pub suggestions: RwSignal<Vec<String>>,
    /// `(date, time)` shown in the status bar.
    pub now: RwSignal<(String, String)>,
}

impl AppContext {
    /// Creates a new application context.
    ///
    /// If the built-in posts fail to decode, the shell still starts with an
    /// empty blog.
    pub fn new() -> Self {
        let shell = Shell::builtin().unwrap_or_else(|e| {
            error!("blog content unavailable: {}", e);
            let blog = BlogStore::empty();
            let fs = VirtualFs::seeded(&blog);
            Shell::new(Arc::new(fs), Arc::new(blog))
        });

        Self::with_shell(shell, current_date_time())
    }

    /// Context around an existing shell. The window opens maximized.
    pub fn with_shell(shell: Shell, now: (String, String)) -> Self {
        Self {
            shell: RwSignal::new(shell),
            screen_mode: RwSignal::new(ScreenMode::Booting),
            maximized: RwSignal::new(true),
            suggestions: RwSignal::new(Vec::new()),
            now: RwSignal::new(now),
        }
    }

    /// Gets the current prompt string for display, e.g. `C:\DOS>`.
    pub fn get_prompt(&self) -> String {
        self.shell.with(|shell| shell.prompt())
    }

    pub fn hide_suggestions(&self) {
        if self.suggestions.with(|s| !s.is_empty()) {
            self.suggestions.set(Vec::new());
        }
    }

    pub fn toggle_maximized(&self) {
        self.maximized.update(|m| *m = !*m);
    }

    /// Refresh the status bar clock.
    pub fn tick(&self) {
        self.now.set(current_date_time());
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

fn current_date_time() -> (String, String) {
    (BrowserClock.date_string(), BrowserClock.time_string())
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the boot splash or terminal screen
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #000;
                    color: #4ade80;
                    font-family: Consolas, 'Courier New', monospace;
                ">
                    <div style="
                        max-width: 600px;
                        text-align: center;
                    ">
                        <h1 style="color: #f87171; margin-bottom: 1rem;">
                            "General failure reading drive C:"
                        </h1>
                        <p style="color: #9ca3af; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <ul style="
                            text-align: left;
                            margin: 0 0 1rem 0;
                            padding-left: 1.5rem;
                            color: #f87171;
                            font-size: 0.9rem;
                        ">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #1f2937;
                                color: #4ade80;
                                border: 1px solid #4ade80;
                                padding: 0.75rem 2rem;
                                cursor: pointer;
                                font-family: Consolas, 'Courier New', monospace;
                                font-size: 1rem;
                            "
                        >
                            "Retry"
                        </button>
                    </div>
                </div>
            }
        >
            <Screen />
        </ErrorBoundary>
    }
}
