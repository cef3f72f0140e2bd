use std::ops::Range;

use crate::admonition::extract::extract_content;
use crate::admonition::header::parse_header;
use crate::admonition::{AdmonitionMeta, ParseOptions};
use crate::lines::LineBuffer;

/// A recognized admonition: the block token handed to the host grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmonitionBlock {
    pub meta: AdmonitionMeta,
    /// De-indented body, joined with newlines.
    pub content: String,
    /// Lines consumed: header line through the last content line, exclusive.
    pub line_range: Range<usize>,
}

/// A block-level region of the document.
///
/// `Text` covers every line no rule claimed; those regions are left for the
/// host markdown renderer untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Admonition(AdmonitionBlock),
    FencedCode { line_range: Range<usize> },
    Text { line_range: Range<usize> },
}

impl Block {
    #[must_use]
    pub fn line_range(&self) -> &Range<usize> {
        match self {
            Block::Admonition(block) => &block.line_range,
            Block::FencedCode { line_range } | Block::Text { line_range } => line_range,
        }
    }
}

/// A candidate block rule. On a match it returns the block and the index of
/// the first line after it, so the parser's cursor never re-examines consumed
/// lines.
type BlockRule = fn(&LineBuffer<'_>, usize, &ParseOptions) -> Option<(Block, usize)>;

/// Candidate rules in priority order, evaluated top-to-bottom per line. The
/// admonition rule runs ahead of fenced code so a header is never mistaken
/// for fence text; a fence, once opened, consumes everything through its
/// closer, so the admonition rule is never offered those lines.
const BLOCK_RULES: &[BlockRule] = &[try_admonition, try_fenced_code];

/// Parses the document into a flat sequence of blocks covering every line.
#[must_use]
pub fn parse_document(buf: &LineBuffer<'_>, options: &ParseOptions) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut text_start = None;
    let mut line = 0;

    'scan: while line < buf.len() {
        for rule in BLOCK_RULES {
            if let Some((block, next)) = rule(buf, line, options) {
                flush_text(&mut blocks, text_start.take(), line);
                blocks.push(block);
                line = next;
                continue 'scan;
            }
        }
        text_start.get_or_insert(line);
        line += 1;
    }

    flush_text(&mut blocks, text_start, buf.len());
    blocks
}

fn flush_text(blocks: &mut Vec<Block>, start: Option<usize>, end: usize) {
    if let Some(start) = start {
        blocks.push(Block::Text {
            line_range: start..end,
        });
    }
}

/// The admonition grammar rule: header line + indented continuation block.
///
/// A header with no indented body is rejected post hoc, leaving the line to
/// the general text handling.
fn try_admonition(
    buf: &LineBuffer<'_>,
    start: usize,
    options: &ParseOptions,
) -> Option<(Block, usize)> {
    let meta = parse_header(buf.line(start))?;
    let extracted = extract_content(buf, start + 1, buf.len(), options)?;

    let end = extracted.end_line;
    let block = AdmonitionBlock {
        meta,
        content: extracted.content(),
        line_range: start..end,
    };
    Some((Block::Admonition(block), end))
}

/// The fenced-code rule: an opening fence consumes all following lines
/// verbatim until a matching closer, or end of input when unterminated.
fn try_fenced_code(
    buf: &LineBuffer<'_>,
    start: usize,
    _options: &ParseOptions,
) -> Option<(Block, usize)> {
    let (fence_char, fence_len) = detect_opening_code_fence(buf.line(start))?;

    let mut line = start + 1;
    while line < buf.len() {
        line += 1;
        if is_closing_code_fence(buf.line(line - 1), fence_char, fence_len) {
            break;
        }
    }

    Some((
        Block::FencedCode {
            line_range: start..line,
        },
        line,
    ))
}

/// Strips up to 3 spaces of leading indentation for code fence detection.
fn strip_fence_indent(line: &str) -> Option<&str> {
    let indent = line.bytes().take_while(|&b| b == b' ').count();
    (indent <= 3).then_some(&line[indent..])
}

/// Detects an opening code fence (three or more `` ` `` or `~` characters).
/// Handles up to 3 spaces of leading indentation.
fn detect_opening_code_fence(line: &str) -> Option<(u8, usize)> {
    let rest = strip_fence_indent(line)?;
    let &ch = rest.as_bytes().first()?;
    if ch != b'`' && ch != b'~' {
        return None;
    }

    let count = rest.bytes().take_while(|&b| b == ch).count();
    if count < 3 {
        return None;
    }

    // CommonMark: backtick fence info strings must not contain backticks.
    if ch == b'`' && rest[count..].contains('`') {
        return None;
    }

    Some((ch, count))
}

/// Checks whether `line` closes a code fence opened with `fence_char` repeated
/// `min_count` times. Handles up to 3 spaces of leading indentation.
fn is_closing_code_fence(line: &str, fence_char: u8, min_count: usize) -> bool {
    let Some(rest) = strip_fence_indent(line) else {
        return false;
    };
    let count = rest.bytes().take_while(|&b| b == fence_char).count();
    count >= min_count && rest[count..].trim().is_empty()
}
