//! Markdown to scorable prose.
//!
//! Uses pulldown-cmark for proper CommonMark parsing rather than regex-based
//! stripping. Readability formulas only make sense over running prose, so
//! anything that is not a sentence a reader would read aloud is dropped.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip markdown formatting, returning plain prose text.
///
/// Removes:
/// - Code blocks (fenced and indented) and inline code
/// - HTML blocks and inline HTML
/// - YAML frontmatter
/// - Headings (section titles are not sentences)
/// - Tables
/// - Image alt text
///
/// Preserves link text, blockquotes, list items, and emphasis (without
/// markers). Block boundaries become a single space so the sentence splitter
/// still sees `. ` between paragraphs and list items.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options);

    let mut prose = String::with_capacity(text.len() / 2);
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(
                Tag::CodeBlock(_) | Tag::Heading { .. } | Tag::Table(_) | Tag::Image { .. },
            ) => {
                skip_depth += 1;
            }
            Event::End(
                TagEnd::CodeBlock | TagEnd::Heading(_) | TagEnd::Table | TagEnd::Image,
            ) => {
                skip_depth = skip_depth.saturating_sub(1);
            }

            Event::Text(t) if skip_depth == 0 => {
                prose.push_str(&t);
            }
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => {
                prose.push(' ');
            }
            Event::End(TagEnd::Paragraph | TagEnd::Item) if skip_depth == 0 => {
                prose.push(' ');
            }

            _ => {}
        }
    }

    tracing::debug!(prose_len = prose.len(), "markdown stripped");
    prose
}

/// Drop a leading YAML frontmatter block delimited by `---` lines.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_opening) = trimmed.strip_prefix("---") else {
        return text;
    };
    let Some(close_pos) = after_opening.find("\n---") else {
        return text;
    };

    let remainder = &after_opening[close_pos + 4..];
    remainder.strip_prefix('\n').unwrap_or(remainder)
}
