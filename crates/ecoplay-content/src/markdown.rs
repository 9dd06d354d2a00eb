//! Markdown rendering for scenario descriptions.

use pulldown_cmark::{Options, Parser, html};

/// Renders Markdown to HTML. Inline HTML passes through unchanged.
#[must_use]
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH);
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
