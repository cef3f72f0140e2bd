use std::ops::Range;

use crate::admonition::extract::extract_content;
use crate::admonition::header::parse_header;
use crate::admonition::{AdmonitionMeta, ParseOptions};
use crate::lines::LineBuffer;

/// A caret or selection interval over the document, inclusive on both ends.
///
/// This is a snapshot taken by the hosting editor, not a live reference;
/// caret motion during one computation is reflected on the next recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub from: usize,
    pub to: usize,
}

impl Selection {
    /// A collapsed selection at a single position.
    #[must_use]
    pub fn caret(at: usize) -> Self {
        Self { from: at, to: at }
    }

    /// Inclusive overlap with a byte span; touching at either end counts.
    fn overlaps(self, span: &Range<usize>) -> bool {
        self.from <= span.end && span.start <= self.to
    }
}

/// A computed replace-range: the byte span of one admonition block together
/// with everything needed to build its rendered widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveRange {
    /// From the start of the header line through the end of the last
    /// consumed content line.
    pub range: Range<usize>,
    pub meta: AdmonitionMeta,
    /// De-indented body, joined with newlines.
    pub content: String,
}

/// Computes the set of admonition ranges eligible for widget replacement in
/// a live view.
///
/// Pure function over a document snapshot: scans every line with the header
/// parser, extracts each matched block, and emits a [`LiveRange`] unless the
/// block's span overlaps a selection (in which case the source stays visible
/// as editable text, and the scan still advances past the block). The result
/// is ordered by position and disjoint.
///
/// The whole structure is recomputed from scratch on every document or
/// selection change; there is no incremental patching. When `enabled` is
/// false the function short-circuits and returns no ranges.
#[must_use]
pub fn compute_live_ranges(
    doc: &str,
    selections: &[Selection],
    options: &ParseOptions,
    enabled: bool,
) -> Vec<LiveRange> {
    if !enabled {
        return Vec::new();
    }

    let buf = LineBuffer::new(doc);
    let mut ranges = Vec::new();
    let mut line = 0;

    while line < buf.len() {
        let Some(meta) = parse_header(buf.line(line)) else {
            line += 1;
            continue;
        };
        let Some(extracted) = extract_content(&buf, line + 1, buf.len(), options) else {
            // Header with no body: plain text, keep scanning below it.
            line += 1;
            continue;
        };

        let span = buf.text_span(&(line..extracted.end_line));
        if !selections.iter().any(|s| s.overlaps(&span)) {
            ranges.push(LiveRange {
                range: span,
                meta,
                content: extracted.content(),
            });
        }
        // Advance past the block whether or not a widget was built.
        line = extracted.end_line;
    }

    ranges
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;
    use crate::admonition::AdmonitionKind;

    const DOC: &str = indoc! {"
        Before.

        !!! note \"Hi\"
            Hello

        After.
    "};

    fn ranges(doc: &str, selections: &[Selection]) -> Vec<LiveRange> {
        compute_live_ranges(doc, selections, &ParseOptions::default(), true)
    }

    fn block_span(doc: &str) -> Range<usize> {
        let only = ranges(doc, &[]);
        assert_eq!(only.len(), 1, "fixture should contain one block");
        only[0].range.clone()
    }

    #[test]
    fn disabled_returns_no_ranges() {
        let out = compute_live_ranges(DOC, &[], &ParseOptions::default(), false);
        assert!(out.is_empty());
    }

    #[test]
    fn block_materialized_without_selection() {
        let out = ranges(DOC, &[]);
        assert_eq!(out.len(), 1);
        let range = &out[0];
        assert_eq!(range.meta.kind, AdmonitionKind::Note);
        assert_eq!(range.meta.title.as_deref(), Some("Hi"));
        assert_eq!(range.content, "Hello\n");
        assert_eq!(
            &DOC[range.range.clone()],
            "!!! note \"Hi\"\n    Hello\n",
            "span covers header through last consumed line"
        );
    }

    #[test]
    fn caret_inside_block_suppresses_widget() {
        let span = block_span(DOC);
        let caret = Selection::caret(span.start + 4);
        assert!(ranges(DOC, &[caret]).is_empty());
    }

    #[test]
    fn caret_touching_either_end_counts_as_overlap() {
        let span = block_span(DOC);
        assert!(ranges(DOC, &[Selection::caret(span.start)]).is_empty());
        assert!(ranges(DOC, &[Selection::caret(span.end)]).is_empty());
    }

    #[test]
    fn caret_outside_block_keeps_widget() {
        let span = block_span(DOC);
        assert_eq!(ranges(DOC, &[Selection::caret(0)]).len(), 1);
        assert_eq!(ranges(DOC, &[Selection::caret(span.end + 1)]).len(), 1);
    }

    #[test]
    fn selection_interval_overlapping_block_suppresses_widget() {
        let span = block_span(DOC);
        let selection = Selection {
            from: 0,
            to: span.start,
        };
        assert!(ranges(DOC, &[selection]).is_empty());
    }

    #[test]
    fn suppressed_block_still_advances_scan() {
        let doc = indoc! {"
            !!! note
                First

            !!! tip
                Second
        "};
        let all = ranges(doc, &[]);
        assert_eq!(all.len(), 2);

        // Caret in the first block: only the second materializes.
        let with_caret = ranges(doc, &[Selection::caret(all[0].range.start + 1)]);
        assert_eq!(with_caret.len(), 1);
        assert_eq!(with_caret[0].meta.kind, AdmonitionKind::Tip);
    }

    #[test]
    fn any_of_multiple_selections_suppresses() {
        let span = block_span(DOC);
        let far = Selection::caret(0);
        let inside = Selection::caret(span.start + 1);
        assert!(ranges(DOC, &[far, inside]).is_empty());
    }

    #[test]
    fn ranges_are_ordered_and_disjoint() {
        let doc = indoc! {"
            !!! note
                A

            Middle.

            ??? warning
                B

            !!! tip
                C
        "};
        let out = ranges(doc, &[]);
        assert_eq!(out.len(), 3);
        for pair in out.windows(2) {
            assert!(
                pair[0].range.end < pair[1].range.start,
                "ranges must be ordered and disjoint: {:?} then {:?}",
                pair[0].range,
                pair[1].range
            );
        }
    }

    #[test]
    fn header_without_body_yields_no_range_but_scan_continues() {
        let doc = indoc! {"
            !!! note
            no indent here

            ??? tip
                Body
        "};
        let out = ranges(doc, &[]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].meta.kind, AdmonitionKind::Tip);
        assert!(out[0].meta.collapsible);
    }

    #[test]
    fn double_blank_bounds_the_range() {
        let doc = "!!! note\n    A\n\n\n    outside\n";
        let out = ranges(doc, &[]);
        assert_eq!(out.len(), 1);
        assert_eq!(
            &doc[out[0].range.clone()],
            "!!! note\n    A\n",
            "range ends past the first of the two blanks"
        );

        let keep_going = compute_live_ranges(
            doc,
            &[],
            &ParseOptions {
                end_on_double_blank: false,
            },
            true,
        );
        assert_eq!(&doc[keep_going[0].range.clone()], "!!! note\n    A\n\n\n    outside");
    }

    #[test]
    fn recompute_is_deterministic() {
        let first = ranges(DOC, &[]);
        let second = ranges(DOC, &[]);
        assert_eq!(first, second);
    }
}
