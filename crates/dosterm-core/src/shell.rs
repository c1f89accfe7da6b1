//! One running terminal: shared content plus a private session.

use std::sync::Arc;

use log::{debug, info};

use crate::autocomplete::{AutocompleteResult, autocomplete};
use crate::clock::Clock;
use crate::commands::{CommandContext, Effect, dispatch};
use crate::error::BlogStoreError;
use crate::filesystem::VirtualFs;
use crate::models::BlogStore;
use crate::parser::parse_line;
use crate::session::{HistoryRecord, Recall, ShellSession};

/// What the front end should do after a line was submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Keep the terminal open.
    Continue,
    /// Leave the terminal view.
    Exit,
}

/// A virtual shell.
///
/// The filesystem and blog content are immutable and may be shared between
/// shells; each shell owns its session.
#[derive(Clone, Debug)]
pub struct Shell {
    fs: Arc<VirtualFs>,
    blog: Arc<BlogStore>,
    session: ShellSession,
}

impl Shell {
    pub fn new(fs: Arc<VirtualFs>, blog: Arc<BlogStore>) -> Self {
        info!(
            "shell ready: {} root entries, {} blog posts",
            fs.root().child_count(),
            blog.len()
        );
        Self {
            fs,
            blog,
            session: ShellSession::new(),
        }
    }

    /// A shell over the built-in tree and posts.
    pub fn builtin() -> Result<Self, BlogStoreError> {
        let blog = BlogStore::builtin()?;
        let fs = VirtualFs::seeded(&blog);
        Ok(Self::new(Arc::new(fs), Arc::new(blog)))
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    pub fn blog(&self) -> &BlogStore {
        &self.blog
    }

    pub fn session(&self) -> &ShellSession {
        &self.session
    }

    /// Execute one input line and update the session.
    pub fn submit(&mut self, line: &str, clock: &dyn Clock) -> Submission {
        let invocation = parse_line(line);
        let prompt = self.session.prompt();

        let ctx = CommandContext {
            fs: &self.fs,
            blog: &self.blog,
            session: &self.session,
            clock,
        };
        let result = dispatch(&invocation, &ctx);
        debug!("'{}' -> {:?}", line, result.effect);

        let record = HistoryRecord::new(prompt, line, result.output, clock.now_ms());
        match result.effect {
            Effect::None => self.session.record(record),
            Effect::PushDir(name) => {
                self.session.push_dir(name);
                self.session.record(record);
            }
            Effect::PopDir => {
                self.session.pop_dir();
                self.session.record(record);
            }
            Effect::ClearScreen => {
                self.session.clear_history();
            }
            Effect::TakeOver => {
                self.session.clear_history();
                self.session.record(record);
            }
            Effect::Exit => return Submission::Exit,
        }

        Submission::Continue
    }

    /// Tab completion for the uncommitted line.
    pub fn complete(&self, line: &str) -> AutocompleteResult {
        autocomplete(line, &self.session, &self.fs, &self.blog)
    }

    pub fn recall_previous(&mut self) -> Recall {
        self.session.recall_previous()
    }

    pub fn recall_next(&mut self) -> Recall {
        self.session.recall_next()
    }

    pub fn prompt(&self) -> String {
        self.session.prompt()
    }

    pub fn display_path(&self) -> String {
        self.session.display_path()
    }

    pub fn history(&self) -> &[HistoryRecord] {
        self.session.history()
    }

    /// Number of entries in the current directory.
    pub fn entry_count(&self) -> usize {
        self.fs
            .dir_at(self.session.current_path())
            .map_or(0, |dir| dir.child_count())
    }
}
