use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

/// Schemes a rendered link or image may use. Relative URLs carry no scheme.
const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Whether `url` is relative or uses one of `SAFE_SCHEMES`.
pub fn is_safe_link(url: &str) -> bool {
    let url = url.trim();

    match url.find([':', '/', '?', '#']) {
        Some(i) if url[i..].starts_with(':') => {
            SAFE_SCHEMES.contains(&url[..i].to_ascii_lowercase().as_str())
        }
        _ => true,
    }
}

fn safe_destination(dest: CowStr<'_>) -> CowStr<'_> {
    if is_safe_link(&dest) {
        dest
    } else {
        CowStr::Borrowed("#")
    }
}

/// Renders project descriptions written in Markdown.
///
/// Raw HTML blocks in the source are emitted as escaped text, and link or image
/// targets with other schemes are replaced by `#`.
pub fn to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        Event::Start(Tag::Link(kind, dest, title)) => {
            Event::Start(Tag::Link(kind, safe_destination(dest), title))
        }
        Event::Start(Tag::Image(kind, dest, title)) => {
            Event::Start(Tag::Image(kind, safe_destination(dest), title))
        }
        other => other,
    });

    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}
