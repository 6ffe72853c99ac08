//! Loading events from a TOML file into an in-memory store.

use std::path::Path;

use anyhow::{Context, Result};
use luach_grid::{EventRef, MemoryEventStore};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct EventFile {
    #[serde(default)]
    event: Vec<EventToml>,
}

/// One `[[event]]` entry. Timestamps are epoch seconds.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EventToml {
    id: u64,
    start: i64,
    end: i64,
    #[serde(default = "default_color")]
    color: u32,
}

fn default_color() -> u32 {
    0xff00_00ff
}

/// Reads the events at `path`; no path yields an empty store.
pub fn load(path: Option<&Path>) -> Result<MemoryEventStore> {
    let Some(path) = path else {
        return Ok(MemoryEventStore::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read event file: {}", path.display()))?;
    let file: EventFile = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse event file: {}", path.display()))?;
    let events: Vec<EventRef> = file
        .event
        .into_iter()
        .map(|e| EventRef::new(e.id, e.start, e.end, e.color))
        .collect();
    info!(path = %path.display(), n_events = events.len(), "events loaded");
    Ok(MemoryEventStore::new(events))
}
