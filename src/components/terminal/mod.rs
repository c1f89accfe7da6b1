mod boot;
mod hooks;
mod input;
mod output;
mod screen;
mod terminal;

pub use input::Input;
pub use output::{HistoryEntry, Output};
pub use screen::Screen;
