use std::ops::Range;

use tracing::debug;

use crate::admonition::ParseOptions;
use crate::admonition::render::render_admonition;
use crate::grammar::{AdmonitionBlock, Block, parse_document};
use crate::lines::LineBuffer;
use crate::render::markdown::MarkdownRenderer;

/// Hard bound on admonition nesting depth. Content nested deeper than this is
/// handed to the host renderer unprocessed instead of recursing further.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Renders a full markdown document, expanding admonition blocks into their
/// presentational containers.
///
/// Each block's body is fed back through the entire document grammar before
/// the host renderer sees it, so nested admonitions, lists, emphasis, and
/// code fences inside a body render correctly at any depth.
#[must_use]
pub fn render_document(
    content: &str,
    options: &ParseOptions,
    renderer: &dyn MarkdownRenderer,
) -> String {
    let processed = expand_admonitions(content, options, renderer, 0);
    renderer.render(&processed)
}

/// Recursively replaces admonition blocks in `content` with rendered HTML.
///
/// Blocks at one nesting level never overlap (the grammar's cursor consumes
/// each block whole), so replacing right-to-left keeps earlier byte ranges
/// valid.
fn expand_admonitions(
    content: &str,
    options: &ParseOptions,
    renderer: &dyn MarkdownRenderer,
    depth: usize,
) -> String {
    if depth >= MAX_NESTING_DEPTH {
        return content.to_owned();
    }

    let buf = LineBuffer::new(content);
    let blocks = parse_document(&buf, options);
    let found: Vec<(Range<usize>, &AdmonitionBlock)> = blocks
        .iter()
        .filter_map(|b| match b {
            Block::Admonition(block) => Some((buf.splice_span(&block.line_range), block)),
            _ => None,
        })
        .collect();
    if found.is_empty() {
        return content.to_owned();
    }
    debug!(blocks = found.len(), depth, "expanding admonitions");

    let mut result = content.to_owned();
    for (span, block) in found.into_iter().rev() {
        let inner = expand_admonitions(&block.content, options, renderer, depth + 1);
        let body_html = renderer.render(&inner);
        let html = render_admonition(&block.meta, &body_html);

        // Blank-line padding: <details> / <div> are CommonMark type 6 HTML
        // blocks which cannot interrupt paragraphs.
        result.replace_range(span, &format!("\n{html}\n"));
    }

    result
}
