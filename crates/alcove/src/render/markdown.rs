use pulldown_cmark::{Options, Parser, html};

/// The host-injected "render markdown text to output" capability.
///
/// The document pipeline only ever talks to this trait; editors and other
/// hosts substitute their own renderer. Implementations must be pure with
/// respect to the input text.
pub trait MarkdownRenderer {
    /// Renders markdown text to an HTML fragment.
    fn render(&self, text: &str) -> String;
}

/// Default renderer built on pulldown-cmark with GFM extensions.
pub struct CmarkRenderer;

impl MarkdownRenderer for CmarkRenderer {
    fn render(&self, text: &str) -> String {
        render_markdown(text)
    }
}

fn markdown_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
}

/// Renders markdown content to HTML.
#[must_use]
pub fn render_markdown(content: &str) -> String {
    let parser = Parser::new_ext(content, markdown_options());
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
