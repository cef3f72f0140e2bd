use std::sync::LazyLock;

use regex::Regex;

use super::{AdmonitionKind, AdmonitionMeta};

/// Matches an admonition header: marker, at least one space or tab, then a
/// type token. The collapsible-open marker must be tried before the plain
/// collapsible one so `???+` is not split into `???` + `+`.
///
/// Capture 1 is the marker, capture 2 the type token, capture 3 the raw title
/// region (possibly empty).
static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\?\?\?\+|\?\?\?|!!!)[ \t]+([A-Za-z][A-Za-z0-9_-]*)(.*)$").unwrap()
});

/// Classifies a single line as an admonition header.
///
/// Returns `None` for anything that is not a header: a malformed marker, a
/// missing type token, an indented marker. This is a normal negative result
/// that lets other grammar rules claim the line; it is never an error.
///
/// An unrecognized type token does not reject the header: the kind falls back
/// to [`AdmonitionKind::Note`].
#[must_use]
pub fn parse_header(line: &str) -> Option<AdmonitionMeta> {
    let caps = HEADER.captures(line.trim_end())?;

    let marker = caps.get(1).map_or("", |m| m.as_str());
    let token = caps.get(2).map_or("", |m| m.as_str());
    let rest = caps.get(3).map_or("", |m| m.as_str());

    let kind = token
        .parse::<AdmonitionKind>()
        .unwrap_or(AdmonitionKind::Note);

    Some(AdmonitionMeta {
        kind,
        title: parse_title(rest),
        collapsible: marker.starts_with("???"),
        open: marker == "???+" || marker == "!!!",
    })
}

/// Parses the title region after the type token.
///
/// - empty or whitespace-only → no title
/// - leading `"` or `'` → text up to the next occurrence of the same quote;
///   an unclosed quote takes everything after it (lenient, not an error)
/// - anything else → the trimmed remainder verbatim
fn parse_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let quote = trimmed.chars().next()?;
    if quote == '"' || quote == '\'' {
        let inner = &trimmed[quote.len_utf8()..];
        let title = match inner.find(quote) {
            Some(end) => &inner[..end],
            None => inner,
        };
        Some(title.to_owned())
    } else {
        Some(trimmed.to_owned())
    }
}
