//! Flzios Scraper Core Library
//!
//! Provides an async API for searching the flzios.ir movie listing,
//! extracting per-title episode groups, and planning stream playback.
//!
//! # Overview
//!
//! The listing site blocks direct cross-origin requests, so every fetch
//! goes through a chain of public relays tried in order. This crate
//! provides:
//! - A relay fallback HTTP client
//! - HTML extractors for listing and detail pages
//! - Playback URL normalization plus the player downgrade chain
//! - A generation guard that drops responses superseded by newer fetches
//!
//! # Example
//!
//! ```no_run
//! use flzios_core::{FlziosScraper, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let scraper = FlziosScraper::new()?;
//!
//!     // Search the listing
//!     let entries = scraper.search("interstellar").await?;
//!
//!     for entry in &entries {
//!         println!("{}: {}", entry.title, entry.detail_link);
//!     }
//!
//!     // Fetch episode groups for the first hit
//!     if let Some(entry) = entries.first() {
//!         let groups = scraper.details(&entry.detail_link).await?;
//!         for (label, episodes) in groups.iter() {
//!             println!("{label}: {} episodes", episodes.len());
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Playback
//!
//! Episode URLs are already normalized to canonical HTTPS form. At play
//! time, [`PlaybackPlan::new`] wraps the stream through a content relay
//! for the advanced player and keeps the bare URL as the native-element
//! fallback; [`PlayerStage::downgrade`] walks the one-directional chain
//! after a playback error.

mod error;
pub mod parser;
mod playback;
mod relay;
mod scraper;
mod session;
mod types;
pub mod url;

// Re-export client types
pub use relay::{ClientConfig, RelayClient, DEFAULT_RELAYS};

// Re-export error types
pub use error::{FlziosError, Result};

// Re-export parser functions
pub use parser::{extract_details, extract_listing};

// Re-export main scraper API
pub use scraper::FlziosScraper;

// Re-export data types
pub use playback::{PlaybackPlan, PlayerStage};
pub use session::{GenerationGuard, RequestToken};
pub use types::{Episode, EpisodeGroups, MediaEntry};

// Re-export URL helper functions for convenience
pub use url::{build_search_url, clean_detail_url, normalize_playback_url};
