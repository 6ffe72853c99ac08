//! Month view sessions: one active month, one answer applied.

use luach_calendar::{CalendarOracle, DayCode, MonthAnchor};
use tracing::{debug, warn};

use crate::config::GridConfig;
use crate::event::{EventRef, EventStore, RangeQuery};
use crate::month::{MonthGrid, build_month_grid};

#[derive(Debug, Clone)]
struct ActiveMonth {
    query: RangeQuery<MonthAnchor>,
    skeleton: MonthGrid,
}

/// Drives a month view against an event store that may answer late.
///
/// Each [`MonthSession::navigate`] supersedes the previous month. A
/// response is applied only if its query was issued for the month that is
/// active when the response arrives; anything older is dropped.
///
/// # Example
///
/// ```
/// use luach_calendar::{DayCode, HebrewCalendar, MonthAnchor, hebrew};
/// use luach_grid::{GridConfig, MonthSession};
///
/// let cal = HebrewCalendar::new();
/// let today: DayCode = "20241010".parse().unwrap();
/// let mut session = MonthSession::new(GridConfig::new(), today);
///
/// let tishrei = MonthAnchor::new(&cal, 5785, hebrew::TISHREI).unwrap();
/// let stale = session.navigate(&cal, tishrei);
/// let current = session.navigate(&cal, tishrei.next(&cal));
///
/// assert!(session.receive(&stale, &[]).is_none());
/// assert!(session.receive(&current, &[]).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct MonthSession {
    config: GridConfig,
    today: DayCode,
    active: Option<ActiveMonth>,
}

impl MonthSession {
    /// Creates a session with no active month.
    pub fn new(config: GridConfig, today: DayCode) -> Self {
        Self {
            config,
            today,
            active: None,
        }
    }

    /// The grid configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The day flagged as today in built grids.
    pub fn today(&self) -> DayCode {
        self.today
    }

    /// The month currently shown, if any.
    pub fn active_anchor(&self) -> Option<MonthAnchor> {
        self.active.as_ref().map(|a| a.query.key())
    }

    /// The event-less grid of the active month.
    pub fn skeleton(&self) -> Option<&MonthGrid> {
        self.active.as_ref().map(|a| &a.skeleton)
    }

    /// Makes `anchor` the active month and returns the query for its events.
    pub fn navigate<O: CalendarOracle + ?Sized>(
        &mut self,
        oracle: &O,
        anchor: MonthAnchor,
    ) -> RangeQuery<MonthAnchor> {
        let skeleton = build_month_grid(oracle, &self.config, anchor, self.today);
        let (start_ts, end_ts) = skeleton.event_range(self.config.offset());
        let query = RangeQuery::new(anchor, start_ts, end_ts);
        self.active = Some(ActiveMonth { query, skeleton });
        query
    }

    /// Applies a store response.
    ///
    /// Returns the populated grid, or `None` if `query` is not the active
    /// month's query.
    pub fn receive(&self, query: &RangeQuery<MonthAnchor>, events: &[EventRef]) -> Option<MonthGrid> {
        let Some(active) = &self.active else {
            debug!(stale = ?query.key(), "discarding response, no active month");
            return None;
        };
        if active.query.key() != query.key() {
            debug!(
                stale = ?query.key(),
                current = ?active.query.key(),
                "discarding stale month response"
            );
            return None;
        }
        Some(
            active
                .skeleton
                .clone()
                .with_events(events, self.config.offset()),
        )
    }

    /// Queries `store` for the active month and applies the answer.
    ///
    /// Returns `None` without an active month or when the store fails.
    pub fn refresh<S: EventStore + ?Sized>(&self, store: &S) -> Option<MonthGrid> {
        let query = self.active.as_ref()?.query;
        match store.query_range(query.start_ts(), query.end_ts()) {
            Ok(events) => self.receive(&query, &events),
            Err(err) => {
                warn!(month = ?query.key(), error = %err, "event query failed");
                None
            }
        }
    }
}
