//! Content assembly for file-backed documentation.
//!
//! Given resolved topics and a requested mode, this module loads backing
//! content through the [`DocsContext`](super::DocsContext) and produces the
//! final response text: full documents, quick-reference extracts, the topic
//! index, and multi-topic bundles for file-path queries.

use serde::Deserialize;

use super::{DocsContext, TopicRegistry};
use crate::error::DocsError;

/// Payload type of the file-backed registries: a backing filename relative
/// to the docs root.
pub type FileRegistry = TopicRegistry<&'static str>;

/// Line cap for the quick-reference fallback when a document has neither a
/// `## Quick Reference` heading nor any section heading.
pub const QUICK_REFERENCE_FALLBACK_LINES: usize = 50;

/// Heading that introduces a document's quick-reference section.
const QUICK_REFERENCE_MARKER: &str = "## Quick Reference";

/// Separator between topics in a multi-topic response.
const TOPIC_SEPARATOR: &str = "\n\n---\n\n";

/// Requested verbosity for file-backed documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocsMode {
    /// Complete backing content.
    #[default]
    Full,
    /// Only the quick-reference section of each document.
    QuickReference,
    /// Catalogue of topics with descriptions and content sizes.
    Index,
}

impl std::fmt::Display for DocsMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::QuickReference => write!(f, "quick_reference"),
            Self::Index => write!(f, "index"),
        }
    }
}

/// Extracts the quick-reference section from a document.
///
/// Returns the `## Quick Reference` heading and its body up to the next
/// `## ` heading, prefixed with a `# {topic}` header for context. When the
/// marker is absent, falls back to the content before the first section
/// heading, capped at [`QUICK_REFERENCE_FALLBACK_LINES`] lines.
#[must_use]
pub fn extract_quick_reference(content: &str, topic: &str) -> String {
    let lines: Vec<&str> = content.lines().collect();

    let Some(start) = lines
        .iter()
        .position(|l| l.starts_with(QUICK_REFERENCE_MARKER))
    else {
        let first_section = lines
            .iter()
            .enumerate()
            .position(|(i, l)| i > 0 && l.starts_with("## "));
        let end = first_section.unwrap_or_else(|| lines.len().min(QUICK_REFERENCE_FALLBACK_LINES));
        return lines[..end].join("\n");
    };

    let end = lines
        .iter()
        .enumerate()
        .position(|(i, l)| i > start && l.starts_with("## "))
        .unwrap_or(lines.len());

    format!("# {topic}\n\n{}", lines[start..end].join("\n"))
}

/// Version trailer appended to every assembled document.
fn version_trailer(version: &str) -> String {
    format!("\n\n---\nDocumentation version: {version}")
}

/// Assembles the overview document (the designated readme topic).
///
/// # Errors
///
/// Returns an error when no overview topic is designated or its backing
/// file cannot be read; a directly requested document is a hard failure.
pub fn overview(ctx: &DocsContext, registry: &FileRegistry) -> Result<String, DocsError> {
    let entry = registry.overview().ok_or_else(|| DocsError::UnknownTopic {
        requested: "readme".to_string(),
        available: registry.names().map(String::from).collect(),
    })?;
    let content = ctx.read(entry.doc)?;
    Ok(format!("{content}{}", version_trailer(ctx.version())))
}

/// Assembles a single named topic in the given mode.
///
/// `Index` mode ignores the topic and is handled by [`index`]; callers route
/// it before reaching here, but a stray request degrades to `Full`.
///
/// # Errors
///
/// Returns [`DocsError::UnknownTopic`] when resolution fails and
/// [`DocsError::ReadError`] when the backing file is missing — the caller
/// asked for exactly one thing, so nothing is silently substituted.
pub fn topic(
    ctx: &DocsContext,
    registry: &FileRegistry,
    name: &str,
    mode: DocsMode,
) -> Result<String, DocsError> {
    let entry = registry.resolve(name)?;
    let content = ctx.read(entry.doc)?;

    let body = match mode {
        DocsMode::QuickReference => extract_quick_reference(&content, entry.name),
        DocsMode::Full | DocsMode::Index => content,
    };

    Ok(format!("{body}{}", version_trailer(ctx.version())))
}

/// Renders the topic catalogue: identifier, content size, and description
/// for every topic in the registry. Used for discovery before committing to
/// a full document.
#[must_use]
pub fn index(ctx: &DocsContext, registry: &FileRegistry) -> String {
    let mut out = format!(
        "# XanoScript Documentation Index\nVersion: {}\n\n\
         | Topic | Size | Description |\n|-------|------|-------------|\n",
        ctx.version()
    );

    for entry in registry.iter() {
        let size = ctx
            .read(entry.doc)
            .map_or_else(|_| "-".to_string(), |c| c.len().to_string());
        out.push_str(&format!(
            "| `{}` | {size} | {} |\n",
            entry.name, entry.description
        ));
    }

    out
}

/// Assembles documentation for a file path as an ordered list of content
/// blocks: a header describing the query, then one block per matched topic.
///
/// A topic whose backing file cannot be read contributes an inline
/// placeholder instead of aborting the response — partial documentation is
/// more useful than none on this path.
#[must_use]
pub fn for_path(
    ctx: &DocsContext,
    registry: &FileRegistry,
    path: &str,
    mode: DocsMode,
    exclude: &[String],
) -> Vec<String> {
    let topics: Vec<&'static str> = registry
        .topics_for_path(path)
        .into_iter()
        .filter(|name| !exclude.iter().any(|x| x == name))
        .collect();

    let header = format!(
        "# XanoScript Documentation for: {path}\n\nMatched topics: {}\nMode: {mode}\nVersion: {}",
        topics.join(", "),
        ctx.version()
    );

    let mut blocks = vec![header];
    for name in topics {
        let Some(entry) = registry.get(name) else {
            continue;
        };
        let block = match ctx.read(entry.doc) {
            Ok(content) => match mode {
                DocsMode::QuickReference => extract_quick_reference(&content, name),
                DocsMode::Full | DocsMode::Index => content,
            },
            Err(_) => format!("[Error reading {}: file not found]", entry.doc),
        };
        blocks.push(block);
    }

    blocks
}

/// Joins multi-topic blocks into one document for transports that prefer a
/// single text payload.
#[must_use]
pub fn join_blocks(blocks: &[String]) -> String {
    blocks.join(TOPIC_SEPARATOR)
}
