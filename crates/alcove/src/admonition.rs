pub mod extract;
pub mod header;
pub mod render;

use std::fmt;

use strum::{AsRefStr, EnumIter, EnumString};

/// The fixed whitelist of callout types.
///
/// - `AsRefStr` yields the lowercase identifier (e.g., `"note"`).
/// - `EnumString` provides case-insensitive [`FromStr`](std::str::FromStr).
/// - `Display` yields the titlecase form (e.g., `"Note"`).
///
/// Unknown type tokens are never an error; callers fall back to [`Note`]
/// (see [`header::parse_header`]).
///
/// [`Note`]: AdmonitionKind::Note
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AdmonitionKind {
    Note,
    Info,
    Tip,
    Warning,
    Important,
    Caution,
    Danger,
    Bug,
    Example,
    Quote,
    Failure,
    Success,
    Question,
}

impl fmt::Display for AdmonitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chars = self.as_ref().chars();
        if let Some(c) = chars.next() {
            write!(f, "{}{}", c.to_ascii_uppercase(), chars.as_str())
        } else {
            Ok(())
        }
    }
}

/// Parsed header metadata. Immutable once parsed.
///
/// `open` is computed for every marker, including the non-collapsible `!!!`
/// (where it is always true). Non-collapsible rendering never reads it; the
/// value is preserved for parity with the established observable output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmonitionMeta {
    pub kind: AdmonitionKind,
    /// Title text with quoting already removed. `None` when the header had no
    /// title region.
    pub title: Option<String>,
    /// Whether the block renders as a disclosure widget (`???` / `???+`).
    pub collapsible: bool,
    /// Initial expansion state for collapsible blocks.
    pub open: bool,
}

/// The only external configuration the parsing core consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// End a block at the first of two consecutive blank lines instead of
    /// letting blank runs of any length continue it.
    pub end_on_double_blank: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            end_on_double_blank: true,
        }
    }
}

/// The indented continuation block consumed after a header line.
///
/// `content_lines` holds one entry per consumed line with the block indent
/// already stripped; blank lines are empty strings. The header line itself is
/// never included. `end_line` is the exclusive index of the first line not
/// belonging to the block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedBlock {
    pub content_lines: Vec<String>,
    pub end_line: usize,
}

impl ExtractedBlock {
    /// The de-indented body as a single string, ready for recursive parsing.
    #[must_use]
    pub fn content(&self) -> String {
        self.content_lines.join("\n")
    }
}
