//! Event references and the event-store seam.

use std::convert::Infallible;

use serde::{Deserialize, Serialize};

/// The parts of an externally owned event that grids read.
///
/// Timestamps are epoch seconds; `end_ts` is the last instant the event
/// covers, so a single-day event has both timestamps on the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventRef {
    /// Identifier assigned by the event store.
    pub id: u64,
    /// Start, epoch seconds.
    pub start_ts: i64,
    /// End, epoch seconds.
    pub end_ts: i64,
    /// Display colour (ARGB).
    pub color: u32,
}

impl EventRef {
    /// Creates an event reference.
    pub fn new(id: u64, start_ts: i64, end_ts: i64, color: u32) -> Self {
        Self {
            id,
            start_ts,
            end_ts,
            color,
        }
    }
}

/// A `[start_ts, end_ts)` range requested from an event store on behalf of
/// the view identified by `key`.
///
/// The key travels with the response so that a late answer for a view the
/// user has already navigated away from can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeQuery<K> {
    key: K,
    start_ts: i64,
    end_ts: i64,
}

impl<K: Copy> RangeQuery<K> {
    pub(crate) fn new(key: K, start_ts: i64, end_ts: i64) -> Self {
        Self {
            key,
            start_ts,
            end_ts,
        }
    }

    /// Returns the view key that issued the query.
    pub fn key(&self) -> K {
        self.key
    }

    /// Inclusive start of the range, epoch seconds.
    pub fn start_ts(&self) -> i64 {
        self.start_ts
    }

    /// Exclusive end of the range, epoch seconds.
    pub fn end_ts(&self) -> i64 {
        self.end_ts
    }
}

/// A source of events that can answer range queries.
///
/// Stores that answer asynchronously do not need this trait: take the
/// [`RangeQuery`] from a session, run it however the store requires, and
/// hand the events back to the session when they arrive.
pub trait EventStore {
    /// Error produced when a query fails.
    type Error: std::error::Error;

    /// Returns every event overlapping `[start_ts, end_ts)`, in no
    /// particular order.
    fn query_range(&self, start_ts: i64, end_ts: i64) -> Result<Vec<EventRef>, Self::Error>;
}

/// An event store backed by a vector.
#[derive(Debug, Clone, Default)]
pub struct MemoryEventStore {
    events: Vec<EventRef>,
}

impl MemoryEventStore {
    /// Creates a store holding `events`.
    pub fn new(events: Vec<EventRef>) -> Self {
        Self { events }
    }

    /// Adds an event.
    pub fn push(&mut self, event: EventRef) {
        self.events.push(event);
    }

    /// Returns the number of stored events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if the store holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventStore for MemoryEventStore {
    type Error = Infallible;

    fn query_range(&self, start_ts: i64, end_ts: i64) -> Result<Vec<EventRef>, Self::Error> {
        Ok(self
            .events
            .iter()
            .filter(|e| e.start_ts < end_ts && e.end_ts >= start_ts)
            .copied()
            .collect())
    }
}
