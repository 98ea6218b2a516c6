//! Flzios Tauri Integration
//!
//! Provides a Tauri plugin for front-end integration with the flzios
//! scraper. The visual layer stays in the front-end; this plugin is the
//! seam it calls through for searching, detail fetching, and playback
//! planning.
//!
//! # Usage
//!
//! Register the plugin in your Tauri application:
//!
//! ```ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(flzios_tauri::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! Then invoke commands from the frontend:
//!
//! ```javascript
//! import { invoke } from '@tauri-apps/api/core';
//!
//! // Search the listing; null means the result was superseded
//! const entries = await invoke('plugin:flzios|search_movies', { query: 'batman' });
//!
//! // Fetch the episode groups of one title
//! const groups = await invoke('plugin:flzios|fetch_details', {
//!   detailLink: entries[0].detail_link
//! });
//! ```

use std::sync::Arc;
use tokio::sync::Mutex;

use flzios_core::{FlziosScraper, GenerationGuard};
use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

mod commands;

/// Shared state behind the Tauri commands
///
/// The scraper sits behind Arc<Mutex<>> for safe concurrent access. Each
/// fetching operation kind carries its own generation guard so a response
/// superseded by a newer request is dropped instead of overwriting newer
/// display state.
pub struct ScraperState {
    pub(crate) scraper: Arc<Mutex<FlziosScraper>>,
    pub(crate) search_guard: GenerationGuard,
    pub(crate) details_guard: GenerationGuard,
}

impl ScraperState {
    /// Create a new ScraperState with default configuration
    ///
    /// # Errors
    /// Returns error string if scraper initialization fails
    pub fn new() -> Result<Self, String> {
        let scraper = FlziosScraper::new().map_err(|e| e.to_string())?;
        Ok(Self {
            scraper: Arc::new(Mutex::new(scraper)),
            search_guard: GenerationGuard::new(),
            details_guard: GenerationGuard::new(),
        })
    }
}

impl Default for ScraperState {
    fn default() -> Self {
        Self::new().expect("Failed to create default ScraperState")
    }
}

/// Initialize the flzios plugin
///
/// # Example
/// ```ignore
/// tauri::Builder::default()
///     .plugin(flzios_tauri::init())
///     .run(tauri::generate_context!())
///     .expect("error while running tauri application");
/// ```
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("flzios")
        .invoke_handler(tauri::generate_handler![
            commands::search_movies,
            commands::fetch_details,
            commands::resolve_playback
        ])
        .setup(|app, _api| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .try_init();

            let state = ScraperState::new().map_err(Box::<dyn std::error::Error>::from)?;
            app.manage(state);
            Ok(())
        })
        .build()
}

// Re-export types for convenience
pub use flzios_core::{Episode, EpisodeGroups, MediaEntry, PlaybackPlan, PlayerStage};
