//! HTML to Markdown conversion and page writing
//!
//! Conversion runs in two stages: htmd transforms the selected content
//! region (ATX headings, fenced code, non-content tags skipped), then a
//! single line pass applies the default language hint to code fences that
//! came out unlabeled.

use anyhow::Result;
use htmd::options::{CodeBlockStyle, HeadingStyle, Options};
use htmd::HtmlToMarkdown;
use std::io;
use std::path::Path;

/// Tags dropped wholesale during conversion; navigation, chrome, and
/// executable content never belong in the mirrored Markdown.
const SKIP_TAGS: &[&str] = &["script", "style", "nav", "footer", "iframe", "noscript"];

/// Language hint applied to code fences that carry none. Most unlabeled
/// blocks in the Zama docs are shell snippets.
const DEFAULT_CODE_LANGUAGE: &str = "bash";

/// Builds the htmd converter used for every page
///
/// A converter is built per conversion; nothing is shared across tasks.
fn build_converter() -> HtmlToMarkdown {
    HtmlToMarkdown::builder()
        .skip_tags(SKIP_TAGS.to_vec())
        .options(Options {
            heading_style: HeadingStyle::Atx,
            code_block_style: CodeBlockStyle::Fenced,
            ..Default::default()
        })
        .build()
}

/// Converts an HTML content region to Markdown
pub fn convert_to_markdown(html: &str) -> Result<String> {
    let converter = build_converter();
    let markdown = converter.convert(html)?;
    Ok(label_bare_fences(&markdown))
}

/// Adds the default language hint to opening code fences that have none
///
/// Closing fences and fences inside an open block are left alone; only a
/// bare opening ``` gains the hint. Fences that already carry a language
/// keep it.
fn label_bare_fences(markdown: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut in_fence = false;

    for line in markdown.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") {
            if !in_fence && trimmed == "```" {
                let indent = &line[..line.len() - trimmed.len()];
                out.push(format!("{indent}```{DEFAULT_CODE_LANGUAGE}"));
                in_fence = true;
                continue;
            }
            in_fence = !in_fence;
        }
        out.push(line.to_string());
    }

    out.join("\n")
}

/// Writes a mirrored page: source-attribution header, blank line, body
///
/// The file is overwritten in place. Writes are not atomic; the mirror is
/// regenerated wholesale on the next run.
pub fn write_page(path: &Path, url: &str, markdown: &str) -> io::Result<()> {
    std::fs::write(path, format!("# Source: {url}\n\n{markdown}\n"))
}
