use opslearn_shared::headings::AnchorMatcher;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

/// Convert Markdown content into sanitized HTML with common extensions
/// enabled. Headings get the ids the table of contents links to.
pub fn markdown_to_html(content: &str) -> String {
    if content.trim().is_empty() {
        return String::new();
    }

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let anchors = AnchorMatcher::for_markdown(content);
    let events = Parser::new_ext(content, options)
        .into_offset_iter()
        .map(|(event, range)| with_heading_id(event, range.start, &anchors));

    let mut html_output = String::new();
    html::push_html(&mut html_output, events);

    let mut sanitizer = ammonia::Builder::default();
    sanitizer
        .add_generic_attributes(&["id"])
        .add_tag_attributes("code", &["class"]);
    sanitizer.clean(&html_output).to_string()
}

fn with_heading_id<'a>(event: Event<'a>, offset: usize, anchors: &AnchorMatcher) -> Event<'a> {
    match event {
        Event::Start(Tag::Heading {
            level,
            id: None,
            classes,
            attrs,
        }) => Event::Start(Tag::Heading {
            level,
            id: anchors.claim(offset).map(|id| CowStr::from(id.to_string())),
            classes,
            attrs,
        }),
        other => other,
    }
}

/// Star string for a 1-5 rating.
pub fn rating_stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
