//! Core data types for the flzios scraper
//!
//! Contains the main data structures used throughout the library.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single title extracted from a listing (search results) page
///
/// Immutable once constructed; a fresh set is produced per search.
/// All fields implement Serialize and Deserialize for Tauri compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaEntry {
    /// Numeric identifier taken from the detail link's `i=` parameter
    pub id: String,

    /// Display title (anchor text, `title` attribute, img `alt`, or a
    /// synthesized `Film {id}` label; a `tfa=` parameter overrides all)
    pub title: String,

    /// Absolute URL of the title's detail page
    pub detail_link: String,

    /// Absolute poster URL, already wrapped through the image proxy
    pub poster_url: String,
}

/// One playable episode link
///
/// The `url` has already passed through the playback normalizer, so it is
/// in canonical HTTPS form with the proprietary scheme stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Episode display name (e.g. a quality/part label from the page)
    pub name: String,

    /// Canonical HTTPS URL of the stream
    pub url: String,
}

/// Insertion-ordered mapping from a group label to its episodes
///
/// Mirrors the key semantics the detail pages rely on: groups keep the
/// order in which their labels first appeared, and re-starting an existing
/// label clears its episode list while keeping its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpisodeGroups {
    groups: Vec<(String, Vec<Episode>)>,
}

impl EpisodeGroups {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) a group under `label`
    ///
    /// A label seen before keeps its position but loses its episodes;
    /// a new label is appended at the end.
    pub fn start_group(&mut self, label: impl Into<String>) {
        let label = label.into();
        match self.groups.iter_mut().find(|(l, _)| *l == label) {
            Some((_, episodes)) => episodes.clear(),
            None => self.groups.push((label, Vec::new())),
        }
    }

    /// Append an episode to the group under `label`, creating it if absent
    pub fn push_episode(&mut self, label: &str, episode: Episode) {
        match self.groups.iter_mut().find(|(l, _)| l == label) {
            Some((_, episodes)) => episodes.push(episode),
            None => self.groups.push((label.to_string(), vec![episode])),
        }
    }

    /// Episodes recorded under `label`, if the group exists
    pub fn get(&self, label: &str) -> Option<&[Episode]> {
        self.groups
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, episodes)| episodes.as_slice())
    }

    /// Iterate groups in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Episode])> {
        self.groups
            .iter()
            .map(|(label, episodes)| (label.as_str(), episodes.as_slice()))
    }

    /// Group labels in insertion order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(label, _)| label.as_str())
    }

    /// Number of groups (including empty ones)
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when no group exists at all
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

// serde_json's default map type would lose insertion order, so the mapping
// serializes through its own ordered pair list.
impl Serialize for EpisodeGroups {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (label, episodes) in &self.groups {
            map.serialize_entry(label, episodes)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for EpisodeGroups {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct GroupsVisitor;

        impl<'de> Visitor<'de> for GroupsVisitor {
            type Value = EpisodeGroups;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of group labels to episode lists")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut groups = EpisodeGroups::new();
                while let Some((label, episodes)) =
                    access.next_entry::<String, Vec<Episode>>()?
                {
                    groups.start_group(label.clone());
                    for episode in episodes {
                        groups.push_episode(&label, episode);
                    }
                }
                Ok(groups)
            }
        }

        deserializer.deserialize_map(GroupsVisitor)
    }
}
