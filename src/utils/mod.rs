//! Browser utilities.
//!
//! Provides:
//! - [`BrowserClock`] - `Clock` backed by `js_sys::Date`
//! - [`dom`] - focus, scrolling and navigation helpers
//! - [`logger`] - `log` backend writing to the browser console

mod clock;
pub mod dom;
pub mod logger;

pub use clock::BrowserClock;
