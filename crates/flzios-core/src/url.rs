//! URL helper functions for the flzios listing site
//!
//! Builds search URLs, resolves relative links, synthesizes poster URLs
//! and normalizes playable links into canonical HTTPS form.

/// Base origin of the listing site; all relative links resolve against it
pub const SITE_BASE: &str = "https://flzios.ir";

const IMAGE_PROXY_BASE: &str = "https://wsrv.nl/?url=";
const CONTENT_RELAY_BASE: &str = "https://corsproxy.io/?url=";
const POSTER_ARCHIVE_BASE: &str = "http://vd1.findmylinkes.ir/pic-list/lists";
const PROPRIETARY_SCHEME: &str = "vlc://";

// The listing form posts a fixed Persian submit token next to the query.
const SEARCH_SUBMIT_TOKEN: &str = "%D8%AC%D8%B3%D8%AA%D8%AC%D9%88+%DA%A9%D9%86";

/// Builds the search URL for a given query
///
/// URL encodes the query and appends the fixed `send` parameter the
/// listing service expects.
///
/// # Example
/// ```
/// use flzios_core::url::build_search_url;
/// let url = build_search_url("batman");
/// assert!(url.starts_with("https://flzios.ir/list.php?q=batman&send="));
/// ```
pub fn build_search_url(query: &str) -> String {
    let encoded = urlencoding::encode(query);
    format!("{SITE_BASE}/list.php?q={encoded}&send={SEARCH_SUBMIT_TOKEN}")
}

/// Resolves a harvested href to an absolute URL against the site base
///
/// Already-absolute links pass through untouched.
pub fn absolutize(href: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{SITE_BASE}/{}", href.trim_start_matches('/'))
    }
}

/// Wraps a source image URL through the resize/crop proxy template
///
/// The proxy takes the source URL percent-encoded plus fixed target
/// dimensions for the poster grid.
pub fn wrap_image_proxy(source_url: &str) -> String {
    let encoded = urlencoding::encode(source_url);
    format!("{IMAGE_PROXY_BASE}{encoded}&w=400&h=600&fit=cover")
}

/// Synthesizes a deterministic poster URL for a numeric title id
///
/// Posters live in 1000-wide buckets keyed by `[low, low + 999]` where
/// `low = (id - 1) / 1000 * 1000 + 1`; the result is wrapped through the
/// image proxy like any scraped poster.
///
/// # Example
/// ```
/// use flzios_core::url::synthesized_poster_url;
/// let url = synthesized_poster_url(2500);
/// assert!(url.contains(&urlencoding::encode(
///     "http://vd1.findmylinkes.ir/pic-list/lists/2001-3000/2500.jpg"
/// ).into_owned()));
/// ```
pub fn synthesized_poster_url(id: u64) -> String {
    let low = id.saturating_sub(1) / 1000 * 1000 + 1;
    let source = format!("{POSTER_ARCHIVE_BASE}/{low}-{}/{id}.jpg", low + 999);
    wrap_image_proxy(&source)
}

/// Wraps a stream URL through the generic content relay
///
/// Produces the browser-fetchable form handed to the advanced player;
/// the unwrapped URL stays available as the last-resort fallback.
pub fn wrap_content_relay(url: &str) -> String {
    let encoded = urlencoding::encode(url);
    format!("{CONTENT_RELAY_BASE}{encoded}")
}

/// Cleans a harvested detail link before fetching it
///
/// Links that parse as URLs pass through unchanged. A link that fails to
/// parse is truncated to its first two `&`-separated parts, which keeps
/// the `i=` parameter pair while dropping trailing junk the listing
/// markup sometimes appends.
pub fn clean_detail_url(url: &str) -> String {
    if reqwest::Url::parse(url).is_ok() {
        return url.to_string();
    }

    let mut parts = url.splitn(3, '&');
    match (parts.next(), parts.next()) {
        (Some(first), Some(second)) => format!("{first}&{second}"),
        (Some(first), None) => first.to_string(),
        _ => url.to_string(),
    }
}

/// Normalizes a playable link into canonical HTTPS form
///
/// Pure and total: empty input maps to empty output; otherwise the
/// proprietary `vlc://` prefix is stripped, a leading `http://` becomes
/// `https://`, and `https://` is prepended if still absent. All three
/// steps operate on prefixes only, which makes the function idempotent —
/// malformed input degrades to a best-effort HTTPS string rather than
/// erroring.
///
/// # Example
/// ```
/// use flzios_core::url::normalize_playback_url;
/// assert_eq!(
///     normalize_playback_url("vlc://dl.example.com/film.mkv"),
///     "https://dl.example.com/film.mkv"
/// );
/// ```
pub fn normalize_playback_url(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let stripped = raw.strip_prefix(PROPRIETARY_SCHEME).unwrap_or(raw);

    if let Some(rest) = stripped.strip_prefix("http://") {
        return format!("https://{rest}");
    }
    if stripped.starts_with("https://") {
        stripped.to_string()
    } else {
        format!("https://{stripped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_build_search_url_simple() {
        let url = build_search_url("batman");
        assert_eq!(
            url,
            "https://flzios.ir/list.php?q=batman&send=%D8%AC%D8%B3%D8%AA%D8%AC%D9%88+%DA%A9%D9%86"
        );
    }

    #[test]
    fn test_build_search_url_encodes_spaces() {
        let url = build_search_url("doctor who");
        assert!(url.contains("q=doctor%20who"));
    }

    #[test]
    fn test_absolutize_relative() {
        assert_eq!(
            absolutize("detiles.php?i=42"),
            "https://flzios.ir/detiles.php?i=42"
        );
    }

    #[test]
    fn test_absolutize_rooted() {
        assert_eq!(
            absolutize("/pic/42.jpg"),
            "https://flzios.ir/pic/42.jpg"
        );
    }

    #[test]
    fn test_absolutize_already_absolute() {
        assert_eq!(
            absolutize("https://cdn.example.com/a.jpg"),
            "https://cdn.example.com/a.jpg"
        );
    }

    #[test]
    fn test_poster_bucket_for_2500() {
        assert_eq!(
            synthesized_poster_url(2500),
            wrap_image_proxy("http://vd1.findmylinkes.ir/pic-list/lists/2001-3000/2500.jpg")
        );
    }

    #[test]
    fn test_poster_bucket_boundaries() {
        assert_eq!(
            synthesized_poster_url(1),
            wrap_image_proxy("http://vd1.findmylinkes.ir/pic-list/lists/1-1000/1.jpg")
        );
        assert_eq!(
            synthesized_poster_url(1000),
            wrap_image_proxy("http://vd1.findmylinkes.ir/pic-list/lists/1-1000/1000.jpg")
        );
        assert_eq!(
            synthesized_poster_url(1001),
            wrap_image_proxy("http://vd1.findmylinkes.ir/pic-list/lists/1001-2000/1001.jpg")
        );
    }

    #[test]
    fn test_wrap_image_proxy_encodes_source() {
        let wrapped = wrap_image_proxy("https://flzios.ir/pic/a b.jpg");
        assert!(wrapped.starts_with("https://wsrv.nl/?url="));
        assert!(wrapped.ends_with("&w=400&h=600&fit=cover"));
        assert!(!wrapped.contains(' '));
    }

    #[test]
    fn test_clean_detail_url_valid_passthrough() {
        let url = "https://flzios.ir/detiles.php?i=42&tfa=x&extra=y";
        assert_eq!(clean_detail_url(url), url);
    }

    #[test]
    fn test_clean_detail_url_truncates_unparseable() {
        assert_eq!(
            clean_detail_url("detiles.php?i=42&tfa=x&junk=1&more=2"),
            "detiles.php?i=42&tfa=x"
        );
    }

    #[test]
    fn test_clean_detail_url_single_part() {
        assert_eq!(clean_detail_url("detiles.php?i=42"), "detiles.php?i=42");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_playback_url(""), "");
    }

    #[test]
    fn test_normalize_strips_proprietary_scheme() {
        assert_eq!(
            normalize_playback_url("vlc://dl.example.com/film.mkv"),
            "https://dl.example.com/film.mkv"
        );
    }

    #[test]
    fn test_normalize_forces_https() {
        assert_eq!(
            normalize_playback_url("http://dl.example.com/film.mp4"),
            "https://dl.example.com/film.mp4"
        );
    }

    #[test]
    fn test_normalize_prepends_scheme() {
        assert_eq!(
            normalize_playback_url("dl.example.com/film.mkv"),
            "https://dl.example.com/film.mkv"
        );
    }

    #[test]
    fn test_normalize_proprietary_over_http() {
        assert_eq!(
            normalize_playback_url("vlc://http://dl.example.com/a.mkv"),
            "https://dl.example.com/a.mkv"
        );
    }

    #[test]
    fn test_normalize_leaves_https_alone() {
        assert_eq!(
            normalize_playback_url("https://dl.example.com/a.mkv"),
            "https://dl.example.com/a.mkv"
        );
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(raw in ".*") {
            let once = normalize_playback_url(&raw);
            prop_assert_eq!(normalize_playback_url(&once), once);
        }

        #[test]
        fn normalize_output_is_https_or_empty(raw in ".*") {
            let out = normalize_playback_url(&raw);
            prop_assert!(out.is_empty() || out.starts_with("https://"));
        }
    }
}
