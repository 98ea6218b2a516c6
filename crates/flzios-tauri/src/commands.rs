//! Tauri commands for the flzios scraper
//!
//! This module contains all Tauri command implementations. The fetching
//! commands hand back `None` when a newer request of the same kind
//! started while they were in flight — for failures as well as results,
//! so a stale fetch can neither paint old entries nor an old error state
//! over the newer request.

use flzios_core::{EpisodeGroups, GenerationGuard, MediaEntry, PlaybackPlan, RequestToken};
use tauri::State;

use crate::ScraperState;

/// Maps a fetch outcome through its generation guard
///
/// A superseded fetch is silenced either way: its value and its error
/// both collapse to `Ok(None)`. Only the latest fetch may surface an
/// error to the front-end.
fn guarded<T>(
    guard: &GenerationGuard,
    token: RequestToken,
    result: flzios_core::Result<T>,
) -> Result<Option<T>, String> {
    if !guard.is_current(token) {
        return Ok(None);
    }
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) => Err(e.to_string()),
    }
}

/// Search the flzios listing
///
/// # Arguments
/// * `state` - Managed ScraperState from Tauri
/// * `query` - Search query string
///
/// # Returns
/// Matching entries, or `None` when a newer search superseded this one
///
/// # Errors
/// Returns error message as String if the latest search fails
#[tauri::command]
pub async fn search_movies(
    state: State<'_, ScraperState>,
    query: String,
) -> Result<Option<Vec<MediaEntry>>, String> {
    let token = state.search_guard.begin();
    let scraper = state.scraper.lock().await;
    let result = scraper.search(&query).await;
    guarded(&state.search_guard, token, result)
}

/// Fetch the episode groups of one title
///
/// # Arguments
/// * `state` - Managed ScraperState from Tauri
/// * `detail_link` - The detail URL of the selected entry
///
/// # Returns
/// The grouped episodes, or `None` when a newer detail fetch superseded
/// this one
///
/// # Errors
/// Returns error message as String if the latest fetch fails
#[tauri::command]
pub async fn fetch_details(
    state: State<'_, ScraperState>,
    detail_link: String,
) -> Result<Option<EpisodeGroups>, String> {
    let token = state.details_guard.begin();
    let scraper = state.scraper.lock().await;
    let result = scraper.details(&detail_link).await;
    guarded(&state.details_guard, token, result)
}

/// Build the playback candidates for a raw episode link
///
/// Pure URL work, no network; always succeeds.
#[tauri::command]
pub async fn resolve_playback(
    state: State<'_, ScraperState>,
    raw_url: String,
) -> Result<PlaybackPlan, String> {
    let scraper = state.scraper.lock().await;
    Ok(scraper.playback(&raw_url))
}
