//! Detail page parser for the flzios site
//!
//! Parses a title's detail page into season/group-labeled episode lists.
//! Detail pages come in two shapes: grouped markup with `SessionBox`
//! headings followed by sibling anchors, or a flat page of bare playable
//! anchors. The grouped strategy wins whenever any marker exists.

use scraper::{ElementRef, Html, Selector};

use crate::types::{Episode, EpisodeGroups};
use crate::url::normalize_playback_url;

const SESSION_MARKER_CLASS: &str = "SessionBox";
const LINK_LABEL_SELECTOR: &str = ".LinkBox";

// Label texts on the pages are Persian; these mirror the site verbatim.
const ONLINE_PLAY_PREFIX: &str = "پخش آنلاین :";
const DEFAULT_EPISODE_NAME: &str = "پخش";
const FLAT_GROUP_LABEL: &str = "فایل اصلی";
const DEFAULT_FLAT_NAME: &str = "پخش فیلم";

/// Parses detail page HTML into grouped episode lists
///
/// Absence of playable links yields an empty mapping, not an error. When
/// group markers exist, every marker contributes a group even if no
/// playable anchor follows it.
///
/// # Arguments
/// * `html` - Raw HTML string from the detail page
pub fn extract_details(html: &str) -> EpisodeGroups {
    let document = Html::parse_document(html);

    let Ok(marker_selector) = Selector::parse(&format!(".{SESSION_MARKER_CLASS}")) else {
        return EpisodeGroups::new();
    };
    let markers: Vec<ElementRef> = document.select(&marker_selector).collect();

    if markers.is_empty() {
        return extract_flat(&document);
    }

    let mut groups = EpisodeGroups::new();

    for marker in markers {
        let label = marker.text().collect::<String>().trim().to_string();
        groups.start_group(label.clone());

        for sibling in siblings_until_next_marker(marker) {
            if let Some(episode) = playable_episode(&sibling) {
                groups.push_episode(&label, episode);
            }
        }
    }

    groups
}

/// Walks the `next_sibling` chain from a marker, stopping at the next
/// marker or the end of the sibling list; non-element nodes are skipped
fn siblings_until_next_marker(marker: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let mut out = Vec::new();

    for node in marker.next_siblings() {
        let Some(element) = ElementRef::wrap(node) else {
            continue;
        };
        if has_marker_class(&element) {
            break;
        }
        out.push(element);
    }

    out
}

fn has_marker_class(element: &ElementRef) -> bool {
    element
        .value()
        .attr("class")
        .is_some_and(|classes| classes.split_whitespace().any(|c| c == SESSION_MARKER_CLASS))
}

/// An anchor's episode, if its href passes the playable predicate
fn playable_episode(element: &ElementRef) -> Option<Episode> {
    if element.value().name() != "a" {
        return None;
    }
    let href = element.value().attr("href")?;
    if !is_playable_href(href) {
        return None;
    }

    let name = link_label(element)
        .map(|text| text.replacen(ONLINE_PLAY_PREFIX, "", 1).trim().to_string())
        .unwrap_or_else(|| DEFAULT_EPISODE_NAME.to_string());

    Some(Episode {
        name,
        url: normalize_playback_url(href),
    })
}

/// Whether a href points at a playable stream: the proprietary player
/// scheme, or a container extension anywhere in the link
fn is_playable_href(href: &str) -> bool {
    href.starts_with("vlc://") || href.contains(".mkv") || href.contains(".mp4")
}

/// Text of the anchor's `.LinkBox` label descendant, if any
fn link_label(element: &ElementRef) -> Option<String> {
    let sel = Selector::parse(LINK_LABEL_SELECTOR).ok()?;
    element
        .select(&sel)
        .next()
        .map(|label| label.text().collect::<String>())
}

/// Flat fallback: no markers at all, so every playable anchor on the page
/// lands under one synthetic group
fn extract_flat(document: &Html) -> EpisodeGroups {
    let mut groups = EpisodeGroups::new();

    let Ok(anchor_selector) = Selector::parse("a[href]") else {
        return groups;
    };

    for anchor in document.select(&anchor_selector) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if !is_playable_href(href) {
            continue;
        }

        let name = link_label(&anchor)
            .map(|text| text.trim().to_string())
            .unwrap_or_else(|| DEFAULT_FLAT_NAME.to_string());

        groups.push_episode(
            FLAT_GROUP_LABEL,
            Episode {
                name,
                url: normalize_playback_url(href),
            },
        );
    }

    groups
}
