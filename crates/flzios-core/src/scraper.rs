//! Main scraper API for the flzios site
//!
//! Provides the high-level API combining the relay client and parsers.

use tracing::debug;

use crate::error::{FlziosError, Result};
use crate::parser::{extract_details, extract_listing};
use crate::playback::PlaybackPlan;
use crate::relay::{ClientConfig, RelayClient};
use crate::types::{EpisodeGroups, MediaEntry};
use crate::url::{build_search_url, clean_detail_url};

/// Main scraper API for the flzios listing site
///
/// Combines the relay fallback client with the HTML extractors to provide
/// a simple interface for searching titles, fetching their episode
/// groups, and planning playback.
pub struct FlziosScraper {
    client: RelayClient,
}

impl FlziosScraper {
    /// Create a new scraper with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        let client = RelayClient::new()?;
        Ok(Self { client })
    }

    /// Create a new scraper with custom client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = RelayClient::with_config(config)?;
        Ok(Self { client })
    }

    /// Search the listing for titles matching a query
    ///
    /// # Arguments
    /// * `query` - Search query string
    ///
    /// # Returns
    /// Matching entries in first-seen order, deduplicated by id; empty
    /// when the listing has no matches (a valid result, not an error)
    ///
    /// # Errors
    /// - `EmptyQuery` if the query is empty or whitespace only
    /// - `RelayExhausted` if every relay fails to fetch the listing
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> flzios_core::Result<()> {
    /// use flzios_core::FlziosScraper;
    /// let scraper = FlziosScraper::new()?;
    /// let entries = scraper.search("batman").await?;
    /// for entry in entries {
    ///     println!("{}: {}", entry.title, entry.detail_link);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, query: &str) -> Result<Vec<MediaEntry>> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(FlziosError::EmptyQuery);
        }

        let html = self.client.fetch(&build_search_url(trimmed)).await?;
        let entries = extract_listing(&html);
        debug!(count = entries.len(), "listing extracted");
        Ok(entries)
    }

    /// Fetch a title's detail page and extract its episode groups
    ///
    /// # Arguments
    /// * `detail_link` - The detail URL harvested from a [`MediaEntry`]
    ///
    /// # Returns
    /// The grouped episodes; empty when the page carries no playable link
    ///
    /// # Errors
    /// - `InvalidUrl` if the link is empty
    /// - `RelayExhausted` if every relay fails to fetch the page
    pub async fn details(&self, detail_link: &str) -> Result<EpisodeGroups> {
        if detail_link.trim().is_empty() {
            return Err(FlziosError::InvalidUrl(
                "detail link cannot be empty".to_string(),
            ));
        }

        let target = clean_detail_url(detail_link);
        let html = self.client.fetch(&target).await?;
        let groups = extract_details(&html);
        debug!(groups = groups.len(), "detail page extracted");
        Ok(groups)
    }

    /// Build the playback candidates for a raw episode link
    ///
    /// Pure convenience over [`PlaybackPlan::new`]; no network involved.
    pub fn playback(&self, raw_url: &str) -> PlaybackPlan {
        PlaybackPlan::new(raw_url)
    }
}
