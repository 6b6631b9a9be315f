//! Menu/navigation overlay document.
//!
//! The overlay supplies human-facing names and long-form descriptions keyed by
//! tag and path, plus a title and an optional summary section. Tag sections
//! are held as raw JSON and decoded per lookup so one malformed section cannot
//! poison the whole overlay; lookups always produce a usable fallback.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Menu/navigation overlay.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuDocument {
    /// Page title.
    #[serde(default)]
    pub title: String,
    /// Summary entries rendered before the endpoint sections.
    #[serde(rename = "Summary", default)]
    pub summary: Vec<SummaryItem>,
    /// Tag name to endpoint-entry-list mapping, kept raw.
    #[serde(flatten)]
    sections: Map<String, Value>,
}

/// One summary entry.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryItem {
    /// Heading of the entry.
    pub name: String,
    /// Long-form text content.
    pub content: String,
}

/// One endpoint entry within a tag section.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuEntry {
    /// Path the entry describes.
    pub path: String,
    /// Display name.
    pub name: String,
    /// Long-form description.
    #[serde(default)]
    pub description: String,
}

/// Display metadata for one endpoint, with fallbacks applied.
#[derive(Debug, Clone)]
pub struct EndpointMeta {
    /// Display name (the raw path when no menu entry matches).
    pub name: String,
    /// Long-form description (empty when no menu entry matches).
    pub description: String,
}

impl MenuDocument {
    /// Parse a menu overlay from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse menu document: {e}"))
    }

    /// Entries of one tag section, in declaration order.
    ///
    /// Entries that do not decode are skipped with a diagnostic.
    pub fn entries(&self, tag: &str) -> Vec<MenuEntry> {
        let Some(items) = self.sections.get(tag).and_then(Value::as_array) else {
            return Vec::new();
        };
        items
            .iter()
            .filter_map(|item| match MenuEntry::deserialize(item) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Skipping malformed menu entry under tag {tag:?}: {e}");
                    None
                }
            })
            .collect()
    }

    /// Look up display metadata for a (tag, path) pair.
    ///
    /// Falls back to the raw path and an empty description when no entry
    /// matches, so an out-of-sync overlay never aborts rendering.
    pub fn endpoint_meta(&self, tag: &str, path: &str) -> EndpointMeta {
        match self.entries(tag).into_iter().find(|e| e.path == path) {
            Some(entry) => EndpointMeta {
                name: entry.name,
                description: entry.description,
            },
            None => {
                tracing::debug!("No menu entry for tag {tag:?} path {path:?}, using fallback");
                EndpointMeta {
                    name: path.to_string(),
                    description: String::new(),
                }
            }
        }
    }
}

/// Derive a stable anchor identifier from a path.
///
/// Path separators become hyphens, leading/trailing hyphens are trimmed and
/// the result is lower-cased. Distinct paths differing only in separator
/// placement can collide (`/users/list` vs `/users-list`); no disambiguation
/// is applied.
pub fn anchor_id(path: &str) -> String {
    path.replace('/', "-").trim_matches('-').to_lowercase()
}
