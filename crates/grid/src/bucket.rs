//! Expanding events to the calendar days they touch.
//!
//! Each event becomes a closed [`DaySpan`] computed from its timestamps.
//! Spans are clamped to the window being rendered before they are walked,
//! so the work per event is bounded by the window length no matter how
//! long the event is. Timestamps beyond the representable days saturate
//! at the first or last day code. Events that end before they start are
//! rejected.

use std::collections::{BTreeMap, HashSet};

use chrono::FixedOffset;
use luach_calendar::DayCode;
use tracing::warn;

use crate::error::GridError;
use crate::event::EventRef;

/// The days covered by an event, `first` through `last` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySpan {
    first: DayCode,
    last: DayCode,
}

impl DaySpan {
    /// Computes the span of `event` with timestamps read at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::MalformedEvent`] if the event ends before it
    /// starts.
    pub fn of(event: &EventRef, offset: FixedOffset) -> Result<Self, GridError> {
        if event.end_ts < event.start_ts {
            return Err(GridError::MalformedEvent {
                id: event.id,
                start_ts: event.start_ts,
                end_ts: event.end_ts,
            });
        }
        Ok(Self {
            first: DayCode::saturating_from_timestamp(event.start_ts, offset),
            last: DayCode::saturating_from_timestamp(event.end_ts, offset),
        })
    }

    /// First day of the span.
    pub fn first(&self) -> DayCode {
        self.first
    }

    /// Last day of the span.
    pub fn last(&self) -> DayCode {
        self.last
    }

    /// Number of days in the span (at least 1).
    pub fn len_days(&self) -> i64 {
        self.first.days_until(self.last) + 1
    }

    /// Intersects the span with the window `first..=last`.
    pub fn clamp(self, first: DayCode, last: DayCode) -> Option<Self> {
        let clamped = Self {
            first: self.first.max(first),
            last: self.last.min(last),
        };
        (clamped.first <= clamped.last).then_some(clamped)
    }

    /// Iterates the days of the span.
    pub fn days(self) -> impl Iterator<Item = DayCode> {
        self.first.through(self.last)
    }
}

/// The events of one store response, resolved to day spans.
#[derive(Debug, Clone, Default)]
pub struct EventSpans {
    spans: Vec<(EventRef, DaySpan)>,
    rejected: Vec<GridError>,
}

impl EventSpans {
    /// Resolves `events` to day spans.
    ///
    /// Exact duplicates (a store may deliver an event more than once) are
    /// collapsed, keeping arrival order. Malformed events are logged and
    /// kept aside in [`EventSpans::rejected`].
    #[tracing::instrument(skip(events), fields(n_events = events.len()))]
    pub fn resolve(events: &[EventRef], offset: FixedOffset) -> Self {
        let mut seen = HashSet::with_capacity(events.len());
        let mut out = Self::default();
        for event in events {
            if !seen.insert(*event) {
                continue;
            }
            match DaySpan::of(event, offset) {
                Ok(span) => out.spans.push((*event, span)),
                Err(err) => {
                    warn!(id = event.id, error = %err, "rejecting event");
                    out.rejected.push(err);
                }
            }
        }
        out
    }

    /// Accepted events with their spans, in arrival order.
    pub fn spans(&self) -> &[(EventRef, DaySpan)] {
        &self.spans
    }

    /// Errors for the events that were rejected.
    pub fn rejected(&self) -> &[GridError] {
        &self.rejected
    }

    /// Groups the accepted events by every day they touch inside the
    /// window `first..=last`.
    ///
    /// Within a day, events keep their arrival order.
    pub fn by_day(&self, first: DayCode, last: DayCode) -> BTreeMap<DayCode, Vec<EventRef>> {
        let mut days: BTreeMap<DayCode, Vec<EventRef>> = BTreeMap::new();
        for (event, span) in &self.spans {
            let Some(visible) = span.clamp(first, last) else {
                continue;
            };
            for day in visible.days() {
                days.entry(day).or_default().push(*event);
            }
        }
        days
    }
}
