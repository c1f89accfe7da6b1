//! The fixed tree the terminal boots with.

use log::warn;

use crate::config::ROOT_NAME;
use crate::models::{BlogStore, FsNode};

const PORTFOLIO_TXT: &str = include_str!("../../assets/text/portfolio.txt");
const README_MD: &str = include_str!("../../assets/text/readme.txt");
const SKILLS_TXT: &str = include_str!("../../assets/text/skills.txt");
const RESUME_TXT: &str = include_str!("../../assets/text/resume.txt");
const CONTACT_TXT: &str = include_str!("../../assets/text/contact.txt");
const BLOG_README_TXT: &str = include_str!("../../assets/text/blog_readme.txt");

/// Build the seeded root directory.
pub(super) fn build(blog: &BlogStore) -> FsNode {
    dir(
        ROOT_NAME,
        vec![
            dir(
                "DOS",
                vec![
                    file("COMMAND.COM", "DOS Command Interpreter"),
                    file("CONFIG.SYS", "DOS Configuration File"),
                    file("AUTOEXEC.BAT", "Automatic execution batch file"),
                ],
            ),
            dir(
                "WINDOWS",
                vec![
                    dir(
                        "SYSTEM32",
                        vec![
                            file("NOTEPAD.EXE", "Text Editor Application"),
                            file("CALC.EXE", "Calculator Application"),
                            file("CMD.EXE", "Command Prompt"),
                        ],
                    ),
                    dir("TEMP", vec![file("TEMP001.TMP", "Temporary file")]),
                ],
            ),
            dir(
                "PROJECTS",
                vec![
                    file("PORTFOLIO.TXT", PORTFOLIO_TXT),
                    file("README.MD", README_MD),
                    file("SKILLS.TXT", SKILLS_TXT),
                ],
            ),
            dir(
                "GAMES",
                vec![
                    file("SNAKE.EXE", "Classic Snake Game - Visit /games to play!"),
                    file("MEMORY.EXE", "Memory Match Game - Visit /games to play!"),
                    file("PUZZLE.EXE", "Slide Puzzle Game - Visit /games to play!"),
                    file("REACTION.EXE", "Reaction Test Game - Visit /games to play!"),
                    file("TYPING.EXE", "Typing Speed Game - Visit /games to play!"),
                ],
            ),
            dir("TEMP", vec![]),
            dir(
                "DOCS",
                vec![
                    file("RESUME.TXT", RESUME_TXT),
                    file("CONTACT.TXT", CONTACT_TXT),
                ],
            ),
            dir(
                "BLOG",
                vec![
                    file("POSTS.TXT", posts_index(blog)),
                    file("README.TXT", BLOG_README_TXT),
                ],
            ),
        ],
    )
}

/// Text of `BLOG\POSTS.TXT`.
fn posts_index(blog: &BlogStore) -> String {
    let entries: Vec<String> = blog
        .iter()
        .map(|post| {
            format!(
                "{}\n  Title: {}\n  Date: {}\n  Category: {}\n",
                post.id, post.title, post.date, post.category
            )
        })
        .collect();
    format!("Available Blog Posts:\n\n{}", entries.join("\n"))
}

fn file(name: &str, content: impl AsRef<str>) -> FsNode {
    // Assets end with a newline that is not part of the file.
    FsNode::file(name, content.as_ref().trim_end_matches('\n'))
}

fn dir(name: &str, children: Vec<FsNode>) -> FsNode {
    let mut node = FsNode::dir(name);
    for child in children {
        let child_name = child.name().to_string();
        if let Err(e) = node.insert(child) {
            warn!("seed conflict in '{}': skipping '{}' ({})", name, child_name, e);
        }
    }
    node
}
