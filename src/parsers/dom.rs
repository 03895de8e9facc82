use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Node, Selector};
use tracing::{debug, info};

use super::{extract_names_from_chunk, finalize_rounds, DOM_RULES, ROUND_MARKER};
use crate::domain::Round;
use crate::error::{ParseError, Result};
use crate::normalize::normalize_text;

// Round headings are not guaranteed to be <h*> tags; bold runs and plain
// block elements show up in the wild, so any of these can be a heading.
static LANDMARK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1, h2, h3, h4, h5, h6, b, strong, p, div, span, li").unwrap());

static BODY_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("body").unwrap());

/// Parses a verify page into its rounds. Scans the markup for round headings
/// and collects each heading's sibling content as that round's chunk; when
/// the markup carries no recognizable headings, falls back to slicing the
/// flattened body text.
pub fn parse_verify_document(html: &str) -> Result<Vec<Round>> {
    let document = Html::parse_document(html);

    let landmarks: Vec<ElementRef> = document
        .select(&LANDMARK_SELECTOR)
        .filter(|element| {
            let text = normalize_text(&element.text().collect::<String>());
            ROUND_MARKER.is_match(&text)
        })
        .collect();

    if landmarks.is_empty() {
        let flattened = normalize_text(&body_text(&document));
        if !ROUND_MARKER.is_match(&flattened) {
            return Err(ParseError::NoRoundsFound);
        }
        info!("no round headings in markup, falling back to flat-text parsing");
        return super::text::parse_from_text(&flattened);
    }

    debug!("found {} round heading(s)", landmarks.len());

    let mut rounds = Vec::new();
    for (position, heading) in landmarks.iter().enumerate() {
        let heading_text = normalize_text(&heading.text().collect::<String>());
        let number = ROUND_MARKER
            .captures(&heading_text)
            .and_then(|captures| captures[1].parse().ok())
            .unwrap_or(position as u32 + 1);

        let chunk = sibling_chunk(heading);
        let names = extract_names_from_chunk(&chunk, DOM_RULES);
        if !names.is_empty() {
            rounds.push(Round {
                round: number,
                names,
            });
        }
    }

    finalize_rounds(rounds)
}

/// Collects the text between a round heading and the next one by walking the
/// heading's following siblings. Assumes heading and content share a parent;
/// content nested inside a wrapping sibling of the next heading is cut short.
fn sibling_chunk(heading: &ElementRef) -> String {
    let mut parts = Vec::new();

    for sibling in heading.next_siblings() {
        let text = match sibling.value() {
            Node::Text(text) => text.text.to_string(),
            Node::Element(_) => match ElementRef::wrap(sibling) {
                Some(element) => element.text().collect::<String>(),
                None => continue,
            },
            _ => continue,
        };

        let text = normalize_text(&text);
        if ROUND_MARKER.is_match(&text) {
            break;
        }
        if !text.is_empty() {
            parts.push(text);
        }
    }

    parts.join("\n")
}

fn body_text(document: &Html) -> String {
    let body = document
        .select(&BODY_SELECTOR)
        .next()
        .unwrap_or_else(|| document.root_element());
    body.text().collect()
}
