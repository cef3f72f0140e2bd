use super::AdmonitionMeta;
use crate::render::escape_html;

/// Renders an admonition container around a pre-rendered body.
///
/// Collapsible blocks become a `<details>` disclosure widget whose `open`
/// attribute reflects the marker; non-collapsible blocks become a plain
/// `<div>` and never consult `open`. `body_html` must be pre-rendered; the
/// caller handles markdown recursion.
#[must_use]
pub fn render_admonition(meta: &AdmonitionMeta, body_html: &str) -> String {
    let kind = meta.kind.as_ref();

    if meta.collapsible {
        let title = escape_html(meta.title.as_deref().unwrap_or(""));
        let open_attr = if meta.open { " open" } else { "" };
        format!(
            "<details class=\"callout mkdocs-admonition\" data-callout=\"{kind}\"{open_attr}>\n\
             <summary class=\"callout-title\"><div class=\"callout-title-inner\">{title}</div></summary>\n\
             <div class=\"callout-content\">{body_html}</div>\n\
             </details>\n"
        )
    } else {
        let title_html = meta.title.as_deref().map_or_else(String::new, |title| {
            format!(
                "<div class=\"callout-title\"><div class=\"callout-title-inner\">{}</div></div>\n",
                escape_html(title)
            )
        });
        format!(
            "<div class=\"callout mkdocs-admonition\" data-callout=\"{kind}\">\n\
             {title_html}\
             <div class=\"callout-content\">{body_html}</div>\n\
             </div>\n"
        )
    }
}
