//! Command table and dispatch.
//!
//! This module provides:
//! - [`CommandSpec`] entries mapping a command name to its handler
//! - [`CommandContext`], the read-only view a handler runs against
//! - [`dispatch`] for running a parsed line and reporting failures as output
//!
//! # Architecture
//!
//! Every handler is a plain function
//! `(invocation, context) -> Result<CommandResult, ShellError>`. Handlers never
//! touch the session directly: they return an [`Effect`] which the shell
//! applies. Errors are turned into output lines here, so a failed command
//! never affects the next one.

mod execute;
mod read;
mod result;

pub use execute::version_banner;
pub use result::{CommandResult, Effect};

use log::debug;

use crate::clock::Clock;
use crate::error::ShellError;
use crate::filesystem::VirtualFs;
use crate::models::{BlogStore, FsNode};
use crate::parser::Invocation;
use crate::session::ShellSession;

/// Signature shared by every command handler.
pub type Handler = fn(&Invocation, &CommandContext<'_>) -> Result<CommandResult, ShellError>;

/// A registered command.
#[derive(Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub handler: Handler,
}

/// Everything a handler may read.
#[derive(Clone, Copy)]
pub struct CommandContext<'a> {
    pub fs: &'a VirtualFs,
    pub blog: &'a BlogStore,
    pub session: &'a ShellSession,
    pub clock: &'a dyn Clock,
}

impl<'a> CommandContext<'a> {
    /// The directory the session is in.
    pub fn current_dir(&self) -> Result<&'a FsNode, ShellError> {
        self.fs
            .dir_at(self.session.current_path())
            .ok_or(ShellError::PathNotFound)
    }
}

/// The command table, in the order names are offered for completion.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec { name: "dir", handler: execute::dir },
    CommandSpec { name: "cd", handler: execute::cd },
    CommandSpec { name: "echo", handler: execute::echo },
    CommandSpec { name: "type", handler: execute::type_file },
    CommandSpec { name: "mkdir", handler: execute::mkdir },
    CommandSpec { name: "cls", handler: execute::cls },
    CommandSpec { name: "ver", handler: execute::ver },
    CommandSpec { name: "time", handler: execute::time },
    CommandSpec { name: "date", handler: execute::date },
    CommandSpec { name: "tree", handler: execute::tree },
    CommandSpec { name: "help", handler: execute::help },
    CommandSpec { name: "exit", handler: execute::exit },
    CommandSpec { name: "copy", handler: execute::copy },
    CommandSpec { name: "del", handler: execute::del },
    CommandSpec { name: "ren", handler: execute::ren },
    CommandSpec { name: "attrib", handler: execute::attrib },
    CommandSpec { name: "read", handler: read::read },
];

/// All command names, for autocomplete.
pub fn command_names() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|spec| spec.name)
}

/// Look up a command by its lowercased name.
pub fn find(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

/// Run a parsed line.
///
/// Blank input produces no output. Unknown names and handler errors are
/// reported as output lines with [`Effect::None`].
pub fn dispatch(invocation: &Invocation, ctx: &CommandContext<'_>) -> CommandResult {
    if invocation.is_empty() {
        return CommandResult::empty();
    }

    debug!(
        "dispatch '{}' with {} arg(s) in {}",
        invocation.name,
        invocation.args.len(),
        ctx.session.display_path()
    );

    let result = match find(&invocation.name) {
        Some(spec) => (spec.handler)(invocation, ctx),
        None => Err(ShellError::UnknownCommand(invocation.name.clone())),
    };

    result.unwrap_or_else(|err| {
        debug!("'{}' failed: {}", invocation.name, err);
        CommandResult::output(err.into_lines())
    })
}
