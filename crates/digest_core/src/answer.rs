use digest_logging::engine_debug;
use scraper::{ElementRef, Html, Selector};

use crate::convert::Converter;
use crate::sanitize::sanitize;
use crate::types::{AnswerBody, AnswerKind, ExtractError};

const ACCEPTED_ANSWER: &str = r#"div[itemprop="acceptedAnswer"]"#;
const GENERIC_ANSWER: &str = "div.answer";
/// Post-body containers, oldest markup first.
const POST_BODY: &[&str] = &["div.post-text", "div.js-post-body"];

/// First accepted answer region, else the first generic answer region.
pub fn find_answer_region(page: &Html) -> Option<(AnswerKind, ElementRef<'_>)> {
    let probes = [
        (AnswerKind::Accepted, ACCEPTED_ANSWER),
        (AnswerKind::Generic, GENERIC_ANSWER),
    ];
    probes.into_iter().find_map(|(kind, css)| {
        let sel = Selector::parse(css).ok()?;
        page.select(&sel).next().map(|region| (kind, region))
    })
}

/// The rendered-content subtree nested inside an answer region.
pub fn find_post_body(region: ElementRef<'_>) -> Option<ElementRef<'_>> {
    POST_BODY.iter().find_map(|css| {
        let sel = Selector::parse(css).ok()?;
        region.select(&sel).next()
    })
}

/// Locate the answer to convert and render it as trimmed, sanitized markdown.
pub fn extract_answer(page: &Html, converter: &dyn Converter) -> Result<AnswerBody, ExtractError> {
    let (kind, region) = find_answer_region(page).ok_or(ExtractError::NoAnswerFound)?;
    let post_body = find_post_body(region).ok_or(ExtractError::NoAnswerFound)?;
    engine_debug!("Using {} answer region", kind);

    let rendered = converter.convert(post_body);
    Ok(AnswerBody {
        kind,
        markdown: sanitize(rendered.trim()),
    })
}
