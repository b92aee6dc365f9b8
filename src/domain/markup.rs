//! Markdown to HTML rendering

use pulldown_cmark::{html, Options, Parser as MdParser};

fn render_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Render entry content to HTML.
///
/// Pure and infallible: the parser accepts any input, and syntax it does not
/// recognize is emitted as text.
pub fn render(content: &str) -> String {
    let parser = MdParser::new_ext(content, render_options());
    let mut output = String::with_capacity(content.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}
