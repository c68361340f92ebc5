//! Display-title derivation for figure file names.
//!
//! Figure files carry machine-oriented names (`hr_sync_story.html`,
//! `eda_timeline_presync.html`). Listing pages show a human-readable title
//! derived from the file name stem by an ordered list of marker-based
//! rewrite rules: the first rule whose marker occurs in the stem is applied,
//! and a stem matching no rule is used verbatim.
//!
//! ## Rules
//!
//! - `hr_sync_story` → "hr - Synchronization Story"
//! - `eda_timeline_presync` → "eda Timeline - Pre-sync"
//! - `eda_timeline_postsync` → "eda Timeline - Post-sync"
//! - `scatter_overview` → "scatter_overview" (no marker, identity)

/// Marker for synchronization-story figures.
const SYNC_STORY_MARKER: &str = "_sync_story";

/// Marker for timeline figures.
const TIMELINE_MARKER: &str = "_timeline_";

/// Ordered (marker, transform) rewrite rules. First match wins.
const RULES: &[(&str, fn(&str) -> String)] = &[
    (SYNC_STORY_MARKER, sync_story_title),
    (TIMELINE_MARKER, timeline_title),
];

fn sync_story_title(stem: &str) -> String {
    stem.replace(SYNC_STORY_MARKER, " - Synchronization Story")
}

fn timeline_title(stem: &str) -> String {
    stem.replace(TIMELINE_MARKER, " Timeline - ")
        .replace("presync", "Pre-sync")
        .replace("postsync", "Post-sync")
}

/// Derive a display title from a figure file name stem.
///
/// Pure function of the stem: rules are checked in declaration order and at
/// most one applies.
pub fn derive_title(stem: &str) -> String {
    for (marker, transform) in RULES {
        if stem.contains(marker) {
            return transform(stem);
        }
    }
    stem.to_string()
}
