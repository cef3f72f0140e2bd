use super::{ExtractedBlock, ParseOptions};
use crate::lines::LineBuffer;

/// Consumes the indented continuation block after a header line.
///
/// Scans forward from `start` (the first line after the header) up to the
/// exclusive bound `end`:
///
/// - a blank line joins the block as an empty content line, except that with
///   `end_on_double_blank` the second consecutive blank terminates the block
///   one line earlier (the first blank stays consumed, the second does not);
/// - a line starting with a tab has that one tab stripped (a tab satisfies
///   the whole indent requirement in a single character);
/// - a line with at least 4 leading spaces has exactly 4 stripped;
/// - any other line terminates the scan without being consumed.
///
/// Returns `None` when no line ever qualified through the tab or space
/// branch; a header with no indented body is indistinguishable from plain
/// text followed by an unrelated paragraph, so the caller must reject the
/// whole block.
#[must_use]
pub fn extract_content(
    buf: &LineBuffer<'_>,
    start: usize,
    end: usize,
    options: &ParseOptions,
) -> Option<ExtractedBlock> {
    let mut content_lines = Vec::new();
    let mut saw_indented = false;
    let mut blank_run = 0;
    let mut line = start;

    while line < end {
        let text = buf.line(line);

        if text.trim().is_empty() {
            blank_run += 1;
            if options.end_on_double_blank && blank_run == 2 {
                // The second blank and everything after it is excluded; the
                // first blank remains the block's last consumed line.
                break;
            }
            content_lines.push(String::new());
            line += 1;
            continue;
        }
        blank_run = 0;

        let stripped = text
            .strip_prefix('\t')
            .or_else(|| strip_block_indent(text));
        match stripped {
            Some(rest) => {
                content_lines.push(rest.to_owned());
                saw_indented = true;
            }
            None => break,
        }
        line += 1;
    }

    saw_indented.then_some(ExtractedBlock {
        content_lines,
        end_line: line,
    })
}

/// Strips exactly 4 leading spaces. Lines indented less than 4 columns do not
/// belong to the block.
fn strip_block_indent(text: &str) -> Option<&str> {
    let spaces = text.bytes().take_while(|&b| b == b' ').count();
    (spaces >= 4).then(|| &text[4..])
}
