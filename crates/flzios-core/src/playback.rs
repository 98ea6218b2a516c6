//! Playback candidates and the player downgrade chain
//!
//! A raw playable link expands into two candidate URLs: the normalized
//! stream wrapped through the content relay (what the advanced player
//! consumes) and the bare normalized stream (the last-resort form for the
//! native element). The downgrade chain is one-directional with no
//! reverse path: advanced player, then native element on the relay URL,
//! then native element on the direct URL.

use serde::{Deserialize, Serialize};

use crate::url::{normalize_playback_url, wrap_content_relay};

/// The two playback candidates derived from one raw link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackPlan {
    /// Relay-wrapped form, browser-fetchable regardless of stream origin
    pub relay_url: String,

    /// Bare canonical HTTPS form, kept as the last-resort fallback
    pub direct_url: String,
}

impl PlaybackPlan {
    /// Builds the plan for a raw link as harvested from a detail page
    pub fn new(raw_url: &str) -> Self {
        let direct_url = normalize_playback_url(raw_url);
        let relay_url = wrap_content_relay(&direct_url);
        Self {
            relay_url,
            direct_url,
        }
    }

    /// The URL a given player stage should load
    pub fn source_for(&self, stage: PlayerStage) -> &str {
        match stage {
            PlayerStage::Advanced | PlayerStage::NativeRelay => &self.relay_url,
            PlayerStage::NativeDirect => &self.direct_url,
        }
    }
}

/// Player strategy stages, ordered by preference
///
/// An error at any stage silently downgrades to the next; the chain never
/// climbs back up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerStage {
    /// Library-backed player on the relay URL
    Advanced,
    /// Native video element on the relay URL
    NativeRelay,
    /// Native video element on the direct URL; nothing comes after this
    NativeDirect,
}

impl PlayerStage {
    /// The stage to fall back to after a playback error, if any remains
    pub fn downgrade(self) -> Option<Self> {
        match self {
            Self::Advanced => Some(Self::NativeRelay),
            Self::NativeRelay => Some(Self::NativeDirect),
            Self::NativeDirect => None,
        }
    }
}
