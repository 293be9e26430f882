use digest_logging::{engine_debug, engine_warn};
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::sanitize::sanitize;
use crate::types::{ExtractError, QuestionSummary};

const LISTING_CONTAINER: &str = "#questions";
const QUESTION_SUMMARY: &str = "div.question-summary";
const HEADING_ANCHOR: &str = "h3 a";
const VOTE_COUNT: &str = "span.vote-count-post";
const USER_DETAILS: &str = "div.user-details";

/// Extract every question summary from a tag listing page, in document order.
///
/// Rows missing their heading link, vote counter or user block are skipped.
pub fn extract_listing(
    page: &Html,
    base_url: &str,
) -> Result<Vec<QuestionSummary>, ExtractError> {
    let container = Selector::parse(LISTING_CONTAINER)
        .ok()
        .and_then(|sel| page.select(&sel).next())
        .ok_or(ExtractError::MissingListing)?;

    let Ok(row_sel) = Selector::parse(QUESTION_SUMMARY) else {
        return Ok(Vec::new());
    };

    let mut summaries = Vec::new();
    for (index, row) in container.select(&row_sel).enumerate() {
        match summarize(row, base_url) {
            Some(summary) => summaries.push(summary),
            None => engine_warn!("Skipping malformed question summary at position {}", index),
        }
    }
    engine_debug!("Listing yielded {} question summaries", summaries.len());
    Ok(summaries)
}

fn summarize(row: ElementRef<'_>, base_url: &str) -> Option<QuestionSummary> {
    let anchor = first(row, HEADING_ANCHOR)?;
    let votes = first(row, VOTE_COUNT)?;
    let user_details = first(row, USER_DETAILS)?;

    let href = anchor.value().attr("href")?;
    Some(QuestionSummary {
        title: sanitize(text_of(anchor).trim()),
        link: join_link(base_url, href),
        vote_count: text_of(votes).trim().to_string(),
        author: resolve_author(user_details),
    })
}

/// Resolve the display author of a user-details block.
///
/// Tries, in order: the first link's text, the first class token of the first
/// `span` (used by the site for users without a profile link), and finally the
/// block's own text.
pub fn resolve_author(user_details: ElementRef<'_>) -> String {
    anchor_author(user_details)
        .or_else(|| span_class_author(user_details))
        .unwrap_or_else(|| text_of(user_details).trim().to_string())
}

fn anchor_author(user_details: ElementRef<'_>) -> Option<String> {
    first(user_details, "a").map(|anchor| text_of(anchor).trim().to_string())
}

fn span_class_author(user_details: ElementRef<'_>) -> Option<String> {
    first(user_details, "span")?
        .value()
        .attr("class")?
        .split_whitespace()
        .next()
        .map(ToOwned::to_owned)
}

fn join_link(base_url: &str, href: &str) -> String {
    if Url::parse(href).is_ok() {
        return href.to_string();
    }
    if href.starts_with('/') {
        format!("{}{}", base_url.trim_end_matches('/'), href)
    } else {
        format!("{base_url}{href}")
    }
}

fn first<'a>(scope: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let sel = Selector::parse(css).ok()?;
    scope.select(&sel).next()
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}
