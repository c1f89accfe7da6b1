//! Handlers for the filesystem, text and system commands.
//!
//! `copy`, `del`, `ren` and `mkdir` are simulated: they validate their
//! arguments and print a confirmation, the tree is never changed.

use crate::config::{
    APP_OWNER, APP_TITLE, APP_VERSION, COPYRIGHT_YEAR, DIR_DIR_SIZE, DIR_ENTRY_STAMP,
    DIR_FILE_SIZE, HELP_TEXT, SYNTHETIC_FILE_BYTES,
};
use crate::error::ShellError;
use crate::models::{FsNode, OutputLine};
use crate::parser::Invocation;

use super::{CommandContext, CommandResult, Effect};

type HandlerResult = Result<CommandResult, ShellError>;

// =============================================================================
// Filesystem Commands
// =============================================================================

/// `dir`: list the current directory.
pub(super) fn dir(_inv: &Invocation, ctx: &CommandContext<'_>) -> HandlerResult {
    let current = ctx.current_dir()?;

    let mut lines = vec![
        OutputLine::text(format!("Directory of {}", ctx.session.display_path())),
        OutputLine::empty(),
        OutputLine::text("    <DIR>          ."),
    ];
    if !ctx.session.is_at_root() {
        lines.push(OutputLine::text("    <DIR>          .."));
    }

    let mut files = 0;
    let mut dirs = 0;
    for node in current.children() {
        let size = if node.is_directory() {
            dirs += 1;
            DIR_DIR_SIZE
        } else {
            files += 1;
            DIR_FILE_SIZE
        };
        lines.push(OutputLine::text(format!(
            "{}  {}          {}",
            DIR_ENTRY_STAMP,
            size,
            node.name()
        )));
    }

    lines.push(OutputLine::empty());
    lines.push(OutputLine::text(format!(
        "               {} File(s)     {} bytes",
        files,
        files * SYNTHETIC_FILE_BYTES
    )));
    lines.push(OutputLine::text(format!("               {} Dir(s)", dirs)));

    Ok(CommandResult::output(lines))
}

/// `cd [target]`
pub(super) fn cd(inv: &Invocation, ctx: &CommandContext<'_>) -> HandlerResult {
    match inv.arg(0) {
        None => Ok(CommandResult::line(ctx.session.display_path())),
        Some("..") => Ok(CommandResult::effect(Effect::PopDir)),
        Some(".") => Ok(CommandResult::empty()),
        Some(target) => {
            let node = ctx
                .current_dir()?
                .child(target)
                .filter(|node| node.is_directory())
                .ok_or(ShellError::PathNotFound)?;
            Ok(CommandResult::effect(Effect::PushDir(node.name().to_string())))
        }
    }
}

/// `type <file>`
pub(super) fn type_file(inv: &Invocation, ctx: &CommandContext<'_>) -> HandlerResult {
    let name = inv.arg(0).ok_or_else(ShellError::syntax)?;
    let content = ctx
        .current_dir()?
        .child(name)
        .and_then(FsNode::content)
        .ok_or(ShellError::FileNotFound)?;

    Ok(CommandResult::output(
        content.split('\n').map(OutputLine::text).collect(),
    ))
}

/// `mkdir <dir>` (simulated)
pub(super) fn mkdir(inv: &Invocation, ctx: &CommandContext<'_>) -> HandlerResult {
    let name = inv.arg(0).ok_or_else(ShellError::syntax)?.to_uppercase();
    if ctx.current_dir()?.child(&name).is_some() {
        return Err(ShellError::AlreadyExists);
    }
    Ok(CommandResult::line(format!("Directory created: {}", name)))
}

/// `copy <src> <dst>` (simulated)
pub(super) fn copy(inv: &Invocation, _ctx: &CommandContext<'_>) -> HandlerResult {
    if inv.args.len() < 2 {
        return Err(ShellError::usage("Usage: COPY <source> <destination>"));
    }
    Ok(CommandResult::line("1 file(s) copied. (simulated)"))
}

/// `del <file>` (simulated)
pub(super) fn del(inv: &Invocation, _ctx: &CommandContext<'_>) -> HandlerResult {
    let name = inv
        .arg(0)
        .ok_or_else(|| ShellError::usage("Usage: DEL <filename>"))?;
    Ok(CommandResult::line(format!(
        "File deleted: {} (simulated)",
        name
    )))
}

/// `ren <old> <new>` (simulated)
pub(super) fn ren(inv: &Invocation, _ctx: &CommandContext<'_>) -> HandlerResult {
    let (Some(old), Some(new)) = (inv.arg(0), inv.arg(1)) else {
        return Err(ShellError::usage("Usage: REN <oldname> <newname>"));
    };
    Ok(CommandResult::line(format!(
        "File renamed: {} -> {} (simulated)",
        old, new
    )))
}

/// `attrib`: `D` for directories, `A` for files.
pub(super) fn attrib(_inv: &Invocation, ctx: &CommandContext<'_>) -> HandlerResult {
    let lines = ctx
        .current_dir()?
        .children()
        .map(|node| {
            let code = if node.is_directory() { 'D' } else { 'A' };
            OutputLine::text(format!("{}         {}", code, node.name()))
        })
        .collect();
    Ok(CommandResult::output(lines))
}

/// `tree`: the current directory and every descendant.
pub(super) fn tree(_inv: &Invocation, ctx: &CommandContext<'_>) -> HandlerResult {
    let mut lines = vec![OutputLine::text(ctx.session.display_path())];
    render_tree(ctx.current_dir()?, "", &mut lines);
    Ok(CommandResult::output(lines))
}

fn render_tree(dir: &FsNode, prefix: &str, lines: &mut Vec<OutputLine>) {
    let count = dir.child_count();
    for (index, node) in dir.children().enumerate() {
        let is_last = index + 1 == count;
        let connector = if is_last { "└── " } else { "├── " };
        let tag = if node.is_directory() { "DIR" } else { "FILE" };
        lines.push(OutputLine::text(format!(
            "{}{}[{}] {}",
            prefix,
            connector,
            tag,
            node.name()
        )));

        if node.is_directory() {
            let bar = if is_last { "    " } else { "│   " };
            render_tree(node, &format!("{}{}", prefix, bar), lines);
        }
    }
}

// =============================================================================
// Text and System Commands
// =============================================================================

/// `echo [text...]`
pub(super) fn echo(inv: &Invocation, _ctx: &CommandContext<'_>) -> HandlerResult {
    if inv.args.is_empty() {
        Ok(CommandResult::line("ECHO is on."))
    } else {
        Ok(CommandResult::line(inv.args.join(" ")))
    }
}

pub(super) fn cls(_inv: &Invocation, _ctx: &CommandContext<'_>) -> HandlerResult {
    Ok(CommandResult::effect(Effect::ClearScreen))
}

/// Product and copyright lines, shared by `ver` and the welcome header.
pub fn version_banner() -> Vec<OutputLine> {
    vec![
        OutputLine::text(format!("{} [Version {}]", APP_TITLE, APP_VERSION)),
        OutputLine::text(format!(
            "(c) {} {}. All rights reserved.",
            COPYRIGHT_YEAR, APP_OWNER
        )),
    ]
}

pub(super) fn ver(_inv: &Invocation, _ctx: &CommandContext<'_>) -> HandlerResult {
    Ok(CommandResult::output(version_banner()))
}

pub(super) fn time(_inv: &Invocation, ctx: &CommandContext<'_>) -> HandlerResult {
    Ok(CommandResult::line(format!(
        "The current time is: {}",
        ctx.clock.time_string()
    )))
}

pub(super) fn date(_inv: &Invocation, ctx: &CommandContext<'_>) -> HandlerResult {
    Ok(CommandResult::line(format!(
        "The current date is: {}",
        ctx.clock.date_string()
    )))
}

pub(super) fn help(_inv: &Invocation, _ctx: &CommandContext<'_>) -> HandlerResult {
    Ok(CommandResult::output(
        HELP_TEXT.lines().map(OutputLine::text).collect(),
    ))
}

pub(super) fn exit(_inv: &Invocation, _ctx: &CommandContext<'_>) -> HandlerResult {
    Ok(CommandResult::effect(Effect::Exit))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::super::test_support::{run, run_at};
    use super::*;

    #[test]
    fn test_dir_root() {
        let result = run("dir");
        let lines = result.texts();
        assert_eq!(lines[0], "Directory of C:");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "    <DIR>          .");
        assert_eq!(lines[3], "01-01-24  12:00      <DIR>          BLOG");
        assert!(!lines.contains(&"    <DIR>          .."));
        assert_eq!(lines[lines.len() - 2], "               0 File(s)     0 bytes");
        assert_eq!(lines[lines.len() - 1], "               7 Dir(s)");
    }

    #[test]
    fn test_dir_subdirectory() {
        let result = run_at(&["DOS"], "dir");
        let lines = result.texts();
        assert_eq!(lines[0], "Directory of C:\\DOS");
        assert_eq!(lines[3], "    <DIR>          ..");
        assert_eq!(lines[4], "01-01-24  12:00       1,024          AUTOEXEC.BAT");
        assert_eq!(lines[lines.len() - 2], "               3 File(s)     3072 bytes");
        assert_eq!(lines[lines.len() - 1], "               0 Dir(s)");
    }

    #[test]
    fn test_cd_without_target_prints_path() {
        assert_eq!(run_at(&["WINDOWS"], "cd").texts(), vec!["C:\\WINDOWS"]);
    }

    #[test]
    fn test_cd_into_directory_uses_stored_case() {
        let result = run("cd windows");
        assert!(result.output.is_empty());
        assert_eq!(result.effect, Effect::PushDir("WINDOWS".to_string()));
    }

    #[test]
    fn test_cd_dot_and_dotdot() {
        assert_eq!(run_at(&["DOS"], "cd ..").effect, Effect::PopDir);
        assert_eq!(run_at(&["DOS"], "cd .").effect, Effect::None);
    }

    #[test]
    fn test_cd_missing_or_file() {
        for line in ["cd NOWHERE", "cd CONFIG.SYS"] {
            let result = run_at(&["DOS"], line);
            assert_eq!(result.texts(), vec!["The system cannot find the path specified."]);
            assert_eq!(result.effect, Effect::None);
        }
    }

    #[test]
    fn test_echo() {
        assert_eq!(run("echo").texts(), vec!["ECHO is on."]);
        assert_eq!(run("echo  Hello   World").texts(), vec!["Hello World"]);
    }

    #[test]
    fn test_type_file() {
        assert_eq!(
            run_at(&["DOS"], "type config.sys").texts(),
            vec!["DOS Configuration File"]
        );
        let lines = run_at(&["DOCS"], "TYPE RESUME.TXT");
        assert_eq!(lines.texts()[0], "Oguz Tozkoparan");
        assert_eq!(lines.texts()[2], "");
    }

    #[test]
    fn test_type_errors() {
        assert_eq!(
            run("type").texts(),
            vec!["The syntax of the command is incorrect."]
        );
        assert_eq!(
            run("type DOS").texts(),
            vec!["The system cannot find the file specified."]
        );
        assert_eq!(
            run("type MISSING.TXT").texts(),
            vec!["The system cannot find the file specified."]
        );
    }

    #[test]
    fn test_mkdir_simulated() {
        assert_eq!(run("mkdir stuff").texts(), vec!["Directory created: STUFF"]);
        assert_eq!(
            run("mkdir dos").texts(),
            vec!["A subdirectory or file already exists."]
        );
        assert_eq!(
            run("mkdir").texts(),
            vec!["The syntax of the command is incorrect."]
        );
    }

    #[test]
    fn test_simulated_file_commands() {
        assert_eq!(run("copy a b").texts(), vec!["1 file(s) copied. (simulated)"]);
        assert_eq!(run("del a").texts(), vec!["File deleted: a (simulated)"]);
        assert_eq!(
            run("ren a b").texts(),
            vec!["File renamed: a -> b (simulated)"]
        );
    }

    #[test]
    fn test_simulated_commands_usage() {
        assert_eq!(
            run("copy a").texts(),
            vec![
                "The syntax of the command is incorrect.",
                "Usage: COPY <source> <destination>",
            ]
        );
        assert_eq!(
            run("ren a").texts(),
            vec![
                "The syntax of the command is incorrect.",
                "Usage: REN <oldname> <newname>",
            ]
        );
        assert_eq!(
            run("del").texts(),
            vec!["The syntax of the command is incorrect.", "Usage: DEL <filename>"]
        );
    }

    #[test]
    fn test_attrib() {
        assert_eq!(
            run_at(&["WINDOWS"], "attrib").texts(),
            vec!["D         SYSTEM32", "D         TEMP"]
        );
        assert_eq!(run_at(&["DOS"], "attrib").texts()[0], "A         AUTOEXEC.BAT");
    }

    #[test]
    fn test_tree_windows() {
        assert_eq!(
            run_at(&["WINDOWS"], "tree").texts(),
            vec![
                "C:\\WINDOWS",
                "├── [DIR] SYSTEM32",
                "│   ├── [FILE] CALC.EXE",
                "│   ├── [FILE] CMD.EXE",
                "│   └── [FILE] NOTEPAD.EXE",
                "└── [DIR] TEMP",
                "    └── [FILE] TEMP001.TMP",
            ]
        );
    }

    #[test]
    fn test_tree_empty_directory() {
        assert_eq!(run_at(&["TEMP"], "tree").texts(), vec!["C:\\TEMP"]);
    }

    #[test]
    fn test_ver() {
        assert_eq!(
            run("ver").texts(),
            vec![
                "Oguz Tozkoparan DOS Terminal [Version 1.0.0]",
                "(c) 2024 Oguz Tozkoparan. All rights reserved.",
            ]
        );
    }

    #[test]
    fn test_time_and_date_use_clock() {
        assert_eq!(run("time").texts(), vec!["The current time is: 1:02:03 PM"]);
        assert_eq!(run("date").texts(), vec!["The current date is: 10/14/2026"]);
    }

    #[test]
    fn test_help() {
        let result = run("help");
        let lines = result.texts();
        assert_eq!(lines[0], "Available commands:");
        assert!(lines.contains(&"TREE         - Show directory tree"));
        assert_eq!(*lines.last().unwrap(), "READ <title> - Read specific blog post");
    }

    #[test]
    fn test_cls_and_exit_effects() {
        assert_eq!(run("cls").effect, Effect::ClearScreen);
        assert!(run("cls").output.is_empty());
        assert_eq!(run("exit").effect, Effect::Exit);
    }
}
