//! Listing (search results) parser for the flzios site
//!
//! Parses search results HTML and extracts media entries from the
//! detail-page anchors.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::types::MediaEntry;
use crate::url::{absolutize, synthesized_poster_url, wrap_image_proxy};

// Anchors pointing at a title's detail page carry this marker in the href.
const DETAIL_MARKER_SELECTOR: &str = r#"a[href*="detiles.php"]"#;

/// Parses listing HTML and returns the extracted media entries
///
/// Entries come back in first-seen document order, one per distinct id:
/// later anchors repeating an id already recorded are discarded silently.
/// Unparseable or matchless HTML yields an empty vector — absence of
/// entries is a valid result, never an error.
///
/// # Arguments
/// * `html` - Raw HTML string from the search results page
pub fn extract_listing(html: &str) -> Vec<MediaEntry> {
    let document = Html::parse_document(html);

    let Ok(anchor_selector) = Selector::parse(DETAIL_MARKER_SELECTOR) else {
        return Vec::new();
    };

    let mut entries: Vec<MediaEntry> = Vec::new();

    for element in document.select(&anchor_selector) {
        let Some(entry) = parse_media_anchor(&element) else {
            continue;
        };
        // First occurrence wins for duplicate ids.
        if entries.iter().any(|e| e.id == entry.id) {
            continue;
        }
        entries.push(entry);
    }

    entries
}

/// Parses a single detail-page anchor into an entry
///
/// Returns `None` when the href carries no numeric id — such anchors
/// produce no entry at all.
fn parse_media_anchor(element: &ElementRef) -> Option<MediaEntry> {
    let href = element.value().attr("href")?;
    let id = extract_id(href)?;

    let mut title = element.text().collect::<String>().trim().to_string();
    if title.is_empty() {
        title = attr_non_empty(element, "title")
            .or_else(|| image_alt(element))
            .unwrap_or_else(|| format!("Film {id}"));
    }
    // A tfa= parameter overrides whatever the markup carried.
    if let Some(override_title) = extract_tfa(href) {
        title = override_title;
    }

    Some(MediaEntry {
        id: id.clone(),
        title,
        detail_link: absolutize(href),
        poster_url: poster_for(element, &id),
    })
}

/// Extracts the numeric id from an `i=<digits>` query parameter
fn extract_id(href: &str) -> Option<String> {
    let re = Regex::new(r"i=(\d+)").ok()?;
    re.captures(href)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extracts and decodes a non-empty `tfa=` title override, if present
///
/// Returns `None` for a missing or empty value, or when the value fails
/// percent-decoding — the markup-derived title then stands.
fn extract_tfa(href: &str) -> Option<String> {
    let (_, query) = href.split_once('?')?;
    // Anchored to a parameter boundary so e.g. utfa= does not match.
    let re = Regex::new(r"(?:^|&)tfa=([^&]*)").ok()?;
    let raw = re.captures(query)?.get(1)?.as_str();
    if raw.is_empty() {
        return None;
    }
    // Form encoding: '+' means space, then percent-decode.
    let plus_decoded = raw.replace('+', " ");
    let decoded = urlencoding::decode(&plus_decoded).ok()?;
    Some(decoded.into_owned())
}

/// A trimmed, non-empty attribute value
fn attr_non_empty(element: &ElementRef, name: &str) -> Option<String> {
    element
        .value()
        .attr(name)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// The `alt` text of the first image descendant, if non-empty
fn image_alt(element: &ElementRef) -> Option<String> {
    let sel = Selector::parse("img").ok()?;
    element
        .select(&sel)
        .next()
        .and_then(|img| img.value().attr("alt"))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Poster URL for an anchor: scraped image if present, bucket fallback otherwise
fn poster_for(element: &ElementRef, id: &str) -> String {
    if let Ok(sel) = Selector::parse("img")
        && let Some(img) = element.select(&sel).next()
        && let Some(src) = img.value().attr("src")
        && !src.is_empty()
    {
        return wrap_image_proxy(&absolutize(src));
    }

    // Ids come from a \d+ match; saturate to bucket zero if out of range.
    let num = id.parse::<u64>().unwrap_or(0);
    synthesized_poster_url(num)
}
