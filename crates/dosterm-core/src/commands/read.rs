//! `read`: list blog posts or open one full-screen.

use crate::config::{READER_ID_WIDTH, READER_RULE_WIDTH, SEPARATOR_RUN};
use crate::error::ShellError;
use crate::models::{BlogPost, BlogStore, OutputLine};
use crate::parser::Invocation;

use super::{CommandContext, CommandResult, Effect};

const READ_USAGE: &str = "Usage: READ <post-title>";

pub(super) fn read(inv: &Invocation, ctx: &CommandContext<'_>) -> Result<CommandResult, ShellError> {
    if inv.args.is_empty() {
        let mut lines = ShellError::usage(READ_USAGE).into_lines();
        lines.push(OutputLine::empty());
        lines.extend(available_posts(ctx.blog));
        return Ok(CommandResult::output(lines));
    }

    let key = inv.args.join("-").to_lowercase();

    if let Some(post) = ctx.blog.get(&key) {
        return Ok(CommandResult::output(render_post(post)).with_effect(Effect::TakeOver));
    }

    let matches: Vec<&BlogPost> = ctx.blog.iter().filter(|post| is_fuzzy_match(post, &key)).collect();

    let mut lines = Vec::new();
    if matches.is_empty() {
        lines.push(OutputLine::text(format!("Blog post '{}' not found.", key)));
        lines.push(OutputLine::empty());
        lines.extend(available_posts(ctx.blog));
    } else {
        lines.push(OutputLine::text(format!(
            "Post '{}' not found. Did you mean:",
            key
        )));
        lines.push(OutputLine::empty());
        lines.extend(matches.into_iter().map(listing_line));
    }

    Ok(CommandResult::output(lines))
}

/// `  <id padded> - <title>`
fn listing_line(post: &BlogPost) -> OutputLine {
    OutputLine::text(format!(
        "  {:<width$} - {}",
        post.id,
        post.title,
        width = READER_ID_WIDTH
    ))
}

fn available_posts(blog: &BlogStore) -> Vec<OutputLine> {
    std::iter::once(OutputLine::text("Available blog posts:"))
        .chain(blog.iter().map(listing_line))
        .collect()
}

fn is_fuzzy_match(post: &BlogPost, key: &str) -> bool {
    post.id.contains(key)
        || post.title.to_lowercase().contains(key)
        || post.tags.iter().any(|tag| tag.to_lowercase().contains(key))
}

fn render_post(post: &BlogPost) -> Vec<OutputLine> {
    let rule = "=".repeat(READER_RULE_WIDTH);

    let mut lines = vec![
        OutputLine::text(rule.as_str()),
        OutputLine::text("BLOG POST READER - DOS TERMINAL"),
        OutputLine::text(rule.as_str()),
        OutputLine::empty(),
    ];

    for line in post.content.split('\n') {
        format_content_line(line, &mut lines);
    }

    lines.extend([
        OutputLine::empty(),
        OutputLine::text(rule.as_str()),
        OutputLine::text("End of post. Type 'read' to see available posts."),
        OutputLine::text(rule.as_str()),
    ]);
    lines
}

fn format_content_line(line: &str, out: &mut Vec<OutputLine>) {
    let is_separator = line.contains(&"=".repeat(SEPARATOR_RUN))
        || line.contains(&"-".repeat(SEPARATOR_RUN));

    if line.trim().is_empty() {
        out.push(OutputLine::empty());
    } else if is_separator {
        out.push(OutputLine::text(line));
    } else if line.starts_with('•') {
        out.push(OutputLine::text(format!("  {}", line)));
    } else if line.starts_with('"') && line.ends_with('"') {
        // Quotes are set apart by blank lines.
        out.push(OutputLine::empty());
        out.push(OutputLine::text(format!("  {}", line)));
        out.push(OutputLine::empty());
    } else {
        out.push(OutputLine::text(line));
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::run;
    use super::*;

    fn formatted(line: &str) -> Vec<String> {
        let mut out = Vec::new();
        format_content_line(line, &mut out);
        out.iter().map(|l| l.as_str().to_string()).collect()
    }

    #[test]
    fn test_read_without_args_lists_posts() {
        let result = run("read");
        let lines = result.texts();
        assert_eq!(lines[0], "The syntax of the command is incorrect.");
        assert_eq!(lines[1], "Usage: READ <post-title>");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Available blog posts:");
        assert_eq!(
            lines[4],
            "  modern-web-development    - The Future of Modern Web Development"
        );
        assert_eq!(lines.len(), 9);
        assert_eq!(result.effect, Effect::None);
    }

    #[test]
    fn test_read_exact_match_takes_over() {
        let result = run("read modern-web-development");
        assert_eq!(result.effect, Effect::TakeOver);

        let lines = result.texts();
        let rule = "=".repeat(60);
        assert_eq!(lines[0], rule);
        assert_eq!(lines[1], "BLOG POST READER - DOS TERMINAL");
        assert_eq!(lines[4], "The Future of Modern Web Development");
        assert!(lines.contains(&"  • Edge computing and CDN optimization"));
        assert_eq!(lines[lines.len() - 2], "End of post. Type 'read' to see available posts.");
        assert_eq!(lines[lines.len() - 1], rule);
    }

    #[test]
    fn test_read_joins_words_with_hyphens() {
        let result = run("read Modern Web Development");
        assert_eq!(result.effect, Effect::TakeOver);
    }

    #[test]
    fn test_read_fuzzy_match() {
        let result = run("read design");
        assert_eq!(result.effect, Effect::None);
        assert_eq!(
            result.texts(),
            vec![
                "Post 'design' not found. Did you mean:",
                "",
                "  design-systems-guide      - Building Scalable Design Systems",
                "  glassmorphism-trends      - Glassmorphism in Modern UI Design",
                "  brutalist-design-principles - Brutalist Design in Digital Interfaces",
            ]
        );
    }

    #[test]
    fn test_read_fuzzy_match_on_tag() {
        let result = run("read figma");
        let lines = result.texts();
        assert_eq!(lines[0], "Post 'figma' not found. Did you mean:");
        assert_eq!(lines.len(), 3);
        assert!(lines[2].starts_with("  design-systems-guide"));
    }

    #[test]
    fn test_read_not_found_lists_everything() {
        let missing = run("read nosuchpost");
        let listing = run("read");

        let lines = missing.texts();
        assert_eq!(lines[0], "Blog post 'nosuchpost' not found.");
        assert_eq!(lines[1], "");
        assert_eq!(&lines[2..], &listing.texts()[3..]);
    }

    #[test]
    fn test_format_blank_and_separator_lines() {
        assert_eq!(formatted("   "), vec![""]);
        assert_eq!(formatted("=========="), vec!["=========="]);
        assert_eq!(formatted("-----------"), vec!["-----------"]);
    }

    #[test]
    fn test_format_bullet_line() {
        assert_eq!(formatted("• item"), vec!["  • item"]);
    }

    #[test]
    fn test_format_quote_line() {
        assert_eq!(
            formatted("\"Less is more\""),
            vec!["", "  \"Less is more\"", ""]
        );
    }

    #[test]
    fn test_format_plain_line() {
        assert_eq!(formatted("Plain text"), vec!["Plain text"]);
    }
}
