//! Line-oriented driving of a [`Shell`] over any reader and writer.

use std::io::{BufRead, IsTerminal, Write};

use anyhow::{Result, bail};
use log::{debug, info};

use dosterm_core::config::{PATH_SEPARATOR, WELCOME_HINT};
use dosterm_core::{AutocompleteResult, Clock, OutputLine, Shell, Submission, version_banner};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Prompt on `input` until EOF or `exit`.
pub fn interactive<R: BufRead, W: Write>(
    shell: &mut Shell,
    clock: &dyn Clock,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    write_welcome(out)?;

    let mut buffer = String::new();
    loop {
        write!(out, "{}", shell.prompt())?;
        out.flush()?;

        buffer.clear();
        if input.read_line(&mut buffer)? == 0 {
            writeln!(out)?;
            break;
        }

        let line = buffer.trim_end_matches(['\r', '\n']);
        if submit_and_render(shell, clock, line, out)? == Submission::Exit {
            break;
        }
    }

    info!("session ended with {} history entries", shell.history().len());
    Ok(())
}

/// Execute `lines` in order, echoing each one after its prompt.
pub fn run_lines<W: Write>(
    shell: &mut Shell,
    clock: &dyn Clock,
    lines: &[String],
    out: &mut W,
) -> Result<()> {
    for line in lines {
        writeln!(out, "{}{}", shell.prompt(), line)?;
        if submit_and_render(shell, clock, line, out)? == Submission::Exit {
            debug!("exit requested, skipping remaining lines");
            break;
        }
    }
    Ok(())
}

/// Walk into `path` below the root, one `cd` per component.
pub fn change_dir(shell: &mut Shell, clock: &dyn Clock, path: &str) -> Result<()> {
    for part in path.split(['\\', '/']).filter(|p| !p.is_empty()) {
        shell.submit(&format!("cd {}", part), clock);
        let failed = shell
            .history()
            .last()
            .is_some_and(|record| record.output.iter().any(OutputLine::is_error));
        if failed {
            bail!("no such directory '{}' in {}", part, shell.display_path());
        }
    }
    Ok(())
}

/// Print the `tree` listing of the current directory.
pub fn print_tree<W: Write>(shell: &mut Shell, clock: &dyn Clock, out: &mut W) -> Result<()> {
    submit_and_render(shell, clock, "tree", out)?;
    Ok(())
}

/// Print the line Tab would produce, then any suggestion list.
pub fn print_completion<W: Write>(shell: &Shell, line: &str, out: &mut W) -> Result<()> {
    match shell.complete(line) {
        AutocompleteResult::Single(completed) => writeln!(out, "{}", completed)?,
        AutocompleteResult::Multiple {
            extended,
            suggestions,
        } => {
            writeln!(out, "{}", extended.as_deref().unwrap_or(line))?;
            writeln!(out, "Suggestions: {}", suggestions.join("  "))?;
        }
        AutocompleteResult::None => writeln!(out, "{}", line)?,
    }
    Ok(())
}

fn write_welcome<W: Write>(out: &mut W) -> Result<()> {
    for line in version_banner() {
        writeln!(out, "{}", line.as_str())?;
    }
    writeln!(out)?;
    writeln!(out, "{}", WELCOME_HINT)?;
    writeln!(out)?;
    Ok(())
}

fn submit_and_render<W: Write>(
    shell: &mut Shell,
    clock: &dyn Clock,
    line: &str,
    out: &mut W,
) -> Result<Submission> {
    let before = shell.history().last().map(|record| record.id);
    let submission = shell.submit(line, clock);
    if submission == Submission::Exit {
        return Ok(submission);
    }

    match shell.history().last() {
        Some(record) if Some(record.id) != before => {
            for output in &record.output {
                writeln!(out, "{}", output.as_str())?;
            }
        }
        Some(_) => {}
        None => {
            // `cls`
            if std::io::stdout().is_terminal() {
                write!(out, "{}", CLEAR_SCREEN)?;
            }
        }
    }

    debug!("cwd now {}", shell.session().current_path().join(PATH_SEPARATOR));
    Ok(submission)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use dosterm_core::FixedClock;

    use super::*;

    fn output_of(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_run_lines_echoes_prompts() {
        let mut shell = Shell::builtin().unwrap();
        let clock = FixedClock::default();
        let lines = vec!["cd dos".to_string(), "type config.sys".to_string()];

        let text = output_of(|out| run_lines(&mut shell, &clock, &lines, out));
        assert_eq!(text, "C:>cd dos\nC:\\DOS>type config.sys\nDOS Configuration File\n");
    }

    #[test]
    fn test_run_lines_stops_at_exit() {
        let mut shell = Shell::builtin().unwrap();
        let clock = FixedClock::default();
        let lines = vec!["exit".to_string(), "ver".to_string()];

        let text = output_of(|out| run_lines(&mut shell, &clock, &lines, out));
        assert_eq!(text, "C:>exit\n");
    }

    #[test]
    fn test_interactive_until_eof() {
        let mut shell = Shell::builtin().unwrap();
        let clock = FixedClock::default();
        let input = Cursor::new("echo hi\r\nfoo\n");

        let text = output_of(|out| interactive(&mut shell, &clock, input, out));
        assert!(text.starts_with("Oguz Tozkoparan DOS Terminal [Version 1.0.0]\n"));
        assert!(text.contains("Type 'help' for available commands.\n"));
        assert!(text.contains("C:>hi\n"));
        assert!(text.contains("'foo' is not recognized as an internal or external command,\n"));
        assert_eq!(shell.history().len(), 2);
    }

    #[test]
    fn test_interactive_exit() {
        let mut shell = Shell::builtin().unwrap();
        let clock = FixedClock::default();
        let input = Cursor::new("exit\nver\n");

        output_of(|out| interactive(&mut shell, &clock, input, out));
        assert!(shell.history().is_empty());
    }

    #[test]
    fn test_change_dir() {
        let mut shell = Shell::builtin().unwrap();
        let clock = FixedClock::default();
        change_dir(&mut shell, &clock, "windows\\system32").unwrap();
        assert_eq!(shell.display_path(), "C:\\WINDOWS\\SYSTEM32");
        assert!(change_dir(&mut shell, &clock, "NOWHERE").is_err());
    }

    #[test]
    fn test_change_dir_through_parent() {
        let mut shell = Shell::builtin().unwrap();
        let clock = FixedClock::default();
        change_dir(&mut shell, &clock, "dos/..").unwrap();
        assert_eq!(shell.display_path(), "C:");
        change_dir(&mut shell, &clock, "windows/./system32/..").unwrap();
        assert_eq!(shell.display_path(), "C:\\WINDOWS");
    }

    #[test]
    fn test_print_tree() {
        let mut shell = Shell::builtin().unwrap();
        let clock = FixedClock::default();
        change_dir(&mut shell, &clock, "windows").unwrap();

        let text = output_of(|out| print_tree(&mut shell, &clock, out));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "C:\\WINDOWS");
        assert!(lines.iter().any(|line| line.ends_with("SYSTEM32")));
        assert_eq!(shell.display_path(), "C:\\WINDOWS");
    }

    #[test]
    fn test_print_completion() {
        let shell = Shell::builtin().unwrap();
        assert_eq!(
            output_of(|out| print_completion(&shell, "cd W", out)),
            "cd WINDOWS \n"
        );
        assert_eq!(
            output_of(|out| print_completion(&shell, "c", out)),
            "c\nSuggestions: cd  cls  copy\n"
        );
        assert_eq!(output_of(|out| print_completion(&shell, "zzz", out)), "zzz\n");
    }
}
