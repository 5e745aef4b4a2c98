use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use regex::Regex;

lazy_static::lazy_static! {
    static ref NUMBERED: Regex = Regex::new(r"^(\d+)[.)]\s+(.*)$").expect("valid list pattern");
    static ref INLINE: Regex =
        Regex::new(r"\*\*(?P<bold>.+?)\*\*|\*(?P<italic>[^*]+?)\*|`(?P<code>[^`]+)`")
            .expect("valid inline pattern");
}

/// Renders the light markdown the quiz service puts in explanations and hints:
/// bullet and numbered lists plus **bold**, *italic* and `code` spans.
pub fn render_markdown(content: &str) -> Vec<Line<'static>> {
    content
        .lines()
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return Line::from("");
            }
            if let Some(item) = trimmed.strip_prefix("- ").or(trimmed.strip_prefix("* ")) {
                let mut spans = vec![Span::from("  • ")];
                spans.extend(parse_inline(item));
                return Line::from(spans);
            }
            if let Some(caps) = NUMBERED.captures(trimmed) {
                let mut spans = vec![Span::from(format!("  {}. ", &caps[1]))];
                spans.extend(parse_inline(caps.get(2).map_or("", |m| m.as_str())));
                return Line::from(spans);
            }
            Line::from(parse_inline(trimmed))
        })
        .collect()
}

fn parse_inline(text: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in INLINE.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            spans.push(Span::from(text[last..whole.start()].to_string()));
        }
        let (content, modifier) = if let Some(m) = caps.name("bold") {
            (m.as_str(), Modifier::BOLD)
        } else if let Some(m) = caps.name("italic") {
            (m.as_str(), Modifier::ITALIC)
        } else if let Some(m) = caps.name("code") {
            (m.as_str(), Modifier::DIM)
        } else {
            (whole.as_str(), Modifier::empty())
        };
        spans.push(Span::styled(
            content.to_string(),
            Style::default().add_modifier(modifier),
        ));
        last = whole.end();
    }

    if last < text.len() {
        spans.push(Span::from(text[last..].to_string()));
    }
    if spans.is_empty() {
        spans.push(Span::from(text.to_string()));
    }
    spans
}
