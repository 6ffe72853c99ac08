//! Year grids: per-month colour markers for a whole lunisolar year.

use std::hash::{DefaultHasher, Hash, Hasher};

use chrono::FixedOffset;
use luach_calendar::{
    CalendarOracle, DayCode, LunisolarDate, MonthAnchor, months_in_display_order,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::bucket::EventSpans;
use crate::event::{EventRef, EventStore, RangeQuery};

/// Slots per month bucket. Slots are indexed by day of month (1..=30);
/// slot 0 is never marked.
pub const YEAR_BUCKET_SLOTS: usize = 31;

const SECONDS_PER_DAY: i64 = 86_400;

/// Colour markers for the days of one month of a year grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearDayBucket {
    month: MonthAnchor,
    slots: Vec<Vec<u32>>,
}

impl YearDayBucket {
    fn new(month: MonthAnchor) -> Self {
        Self {
            month,
            slots: vec![Vec::new(); YEAR_BUCKET_SLOTS],
        }
    }

    fn mark(&mut self, day: u8, color: u32) {
        if let Some(slot) = self.slots.get_mut(usize::from(day)) {
            slot.push(color);
        }
    }

    /// The month this bucket belongs to.
    pub fn month(&self) -> MonthAnchor {
        self.month
    }

    /// Colours of the events touching `day`, in arrival order.
    pub fn colors(&self, day: u8) -> &[u32] {
        self.slots
            .get(usize::from(day))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Days with at least one marker, with their colours.
    pub fn marked_days(&self) -> impl Iterator<Item = (u8, &[u32])> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, colors)| !colors.is_empty())
            .map(|(day, colors)| (day as u8, colors.as_slice()))
    }

    /// `true` if no day of the month is marked.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }
}

/// Colour markers for every month of one lunisolar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearGrid {
    year: i32,
    months: Vec<YearDayBucket>,
    fingerprint: u64,
    today: Option<LunisolarDate>,
}

impl YearGrid {
    /// The lunisolar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// One bucket per month, 12 or 13, in calendar order from the year's
    /// first month.
    pub fn months(&self) -> &[YearDayBucket] {
        &self.months
    }

    /// The bucket for month number `month`, if the year has it.
    pub fn month(&self, month: u8) -> Option<&YearDayBucket> {
        self.months.iter().find(|b| b.month.month() == month)
    }

    /// Day 1 of month number `month`, the target for opening a month view.
    pub fn month_target(&self, month: u8) -> Option<LunisolarDate> {
        self.month(month).map(|b| b.month.first_day())
    }

    /// Fingerprint of the event set this grid was built from.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Records `today` on the grid. Days outside the grid's year clear the
    /// marker.
    pub fn with_today<O: CalendarOracle + ?Sized>(mut self, oracle: &O, today: DayCode) -> Self {
        let date = oracle.to_lunisolar(today.date());
        self.today = (date.year() == self.year).then_some(date);
        self
    }

    /// Today's lunisolar date, if it falls inside this year.
    pub fn today(&self) -> Option<LunisolarDate> {
        self.today
    }

    /// `true` if today falls in month number `month` of this year.
    pub fn is_current_month(&self, month: u8) -> bool {
        self.today.is_some_and(|t| t.month() == month)
    }
}

/// First and last day of `year`: day 1 of the oracle's year-start month
/// through the last day of the month before the next year starts.
pub fn year_bounds<O: CalendarOracle + ?Sized>(oracle: &O, year: i32) -> (DayCode, DayCode) {
    let months = months_in_display_order(oracle, year);
    let first = months
        .first()
        .map(|m| m.first_day())
        .unwrap_or_else(|| LunisolarDate::new_unchecked(year, oracle.year_start_month(), 1));
    let last = months
        .last()
        .map(|m| m.last_day(oracle))
        .unwrap_or(first);
    (
        DayCode::from_date(oracle.to_gregorian(first)),
        DayCode::from_date(oracle.to_gregorian(last)),
    )
}

/// Order-insensitive hash of an event set.
///
/// Duplicate deliveries of the same event do not change the fingerprint.
pub fn fingerprint(events: &[EventRef]) -> u64 {
    let mut sorted = events.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    let mut hasher = DefaultHasher::new();
    sorted.hash(&mut hasher);
    hasher.finish()
}

/// Builds the year grid for `year` from a store response.
///
/// Every day an event touches inside the year is marked with the event's
/// colour. Days that belong to another lunisolar year are skipped, since
/// range queries may overshoot the year boundary. Each span is converted
/// to the lunisolar calendar once and then walked month by month.
#[tracing::instrument(skip(oracle, events), fields(n_events = events.len()))]
pub fn build_year_grid<O: CalendarOracle + ?Sized>(
    oracle: &O,
    year: i32,
    events: &[EventRef],
    offset: FixedOffset,
) -> YearGrid {
    let mut months: Vec<YearDayBucket> = months_in_display_order(oracle, year)
        .into_iter()
        .map(YearDayBucket::new)
        .collect();
    let (first, last) = year_bounds(oracle, year);

    let spans = EventSpans::resolve(events, offset);
    for (event, span) in spans.spans() {
        let Some(visible) = span.clamp(first, last) else {
            continue;
        };
        let start = oracle.to_lunisolar(visible.first().date());
        let mut anchor = start.month_anchor();
        let mut day = start.day();
        let mut month_len = anchor.days(oracle);
        let mut bucket = months.iter().position(|b| b.month == anchor);
        for _ in 0..visible.len_days() {
            if let Some(i) = bucket {
                months[i].mark(day, event.color);
            }
            if day < month_len {
                day += 1;
            } else {
                anchor = anchor.next(oracle);
                day = 1;
                month_len = anchor.days(oracle);
                bucket = months.iter().position(|b| b.month == anchor);
            }
        }
    }

    YearGrid {
        year,
        months,
        fingerprint: fingerprint(events),
        today: None,
    }
}

/// Builds year grids for one year view, suppressing rebuilds when the
/// event set has not changed.
///
/// The last fingerprint lives in the builder, so independent year views
/// do not interfere with each other.
#[derive(Debug, Clone)]
pub struct YearGridBuilder {
    year: i32,
    offset: FixedOffset,
    today: Option<DayCode>,
    last_fingerprint: Option<u64>,
}

impl YearGridBuilder {
    /// Creates a builder for `year`, reading timestamps at `offset`.
    pub fn new(year: i32, offset: FixedOffset) -> Self {
        Self {
            year,
            offset,
            today: None,
            last_fingerprint: None,
        }
    }

    /// Marks `today` on every grid this builder emits.
    pub fn with_today(mut self, today: DayCode) -> Self {
        self.today = Some(today);
        self
    }

    /// The year currently shown.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Fingerprint of the last emitted grid.
    pub fn last_fingerprint(&self) -> Option<u64> {
        self.last_fingerprint
    }

    /// Switches to another year. Responses for the previous year are
    /// ignored from now on.
    pub fn navigate<O: CalendarOracle + ?Sized>(&mut self, oracle: &O, year: i32) -> RangeQuery<i32> {
        if year != self.year {
            self.year = year;
            self.last_fingerprint = None;
        }
        self.query(oracle)
    }

    /// The range to request: first day of the year up to, not including,
    /// the day after its last day.
    pub fn query<O: CalendarOracle + ?Sized>(&self, oracle: &O) -> RangeQuery<i32> {
        let (first, last) = year_bounds(oracle, self.year);
        RangeQuery::new(
            self.year,
            first.start_timestamp(self.offset),
            last.start_timestamp(self.offset) + SECONDS_PER_DAY,
        )
    }

    /// Accepts a store response.
    ///
    /// Returns `None` when the response is for a year no longer shown, or
    /// when its fingerprint matches the last emitted grid.
    pub fn receive<O: CalendarOracle + ?Sized>(
        &mut self,
        oracle: &O,
        query: &RangeQuery<i32>,
        events: &[EventRef],
    ) -> Option<YearGrid> {
        if query.key() != self.year {
            debug!(stale = query.key(), current = self.year, "discarding stale year response");
            return None;
        }
        let fp = fingerprint(events);
        if self.last_fingerprint == Some(fp) {
            debug!(year = self.year, "event set unchanged, skipping rebuild");
            return None;
        }
        self.last_fingerprint = Some(fp);
        let grid = build_year_grid(oracle, self.year, events, self.offset);
        Some(match self.today {
            Some(today) => grid.with_today(oracle, today),
            None => grid,
        })
    }

    /// Queries `store` for the current year and accepts the answer.
    ///
    /// A failing store yields `None`.
    pub fn refresh<O, S>(&mut self, oracle: &O, store: &S) -> Option<YearGrid>
    where
        O: CalendarOracle + ?Sized,
        S: EventStore + ?Sized,
    {
        let query = self.query(oracle);
        match store.query_range(query.start_ts(), query.end_ts()) {
            Ok(events) => self.receive(oracle, &query, &events),
            Err(err) => {
                warn!(year = self.year, error = %err, "event query failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luach_calendar::{HebrewCalendar, hebrew};

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn hebrew_year_bounds() {
        let cal = HebrewCalendar::new();
        let (first, last) = year_bounds(&cal, 5785);
        assert_eq!(first.to_string(), "20241003");
        assert_eq!(last.to_string(), "20250922");
    }

    #[test]
    fn fingerprint_ignores_order_and_duplicates() {
        let a = EventRef::new(1, 0, 10, 0xff);
        let b = EventRef::new(2, 5, 15, 0xee);
        assert_eq!(fingerprint(&[a, b]), fingerprint(&[b, a]));
        assert_eq!(fingerprint(&[a, b]), fingerprint(&[a, b, a]));
        assert_ne!(fingerprint(&[a]), fingerprint(&[a, b]));
        let recolored = EventRef::new(1, 0, 10, 0x00);
        assert_ne!(fingerprint(&[a]), fingerprint(&[recolored]));
    }

    #[test]
    fn bucket_slots() {
        let cal = HebrewCalendar::new();
        let mut bucket = YearDayBucket::new(MonthAnchor::new(&cal, 5785, hebrew::NISSAN).unwrap());
        assert!(bucket.is_empty());
        bucket.mark(15, 1);
        bucket.mark(15, 2);
        bucket.mark(40, 3);
        assert_eq!(bucket.colors(15), &[1, 2]);
        assert_eq!(bucket.colors(40), &[] as &[u32]);
        let marked: Vec<u8> = bucket.marked_days().map(|(d, _)| d).collect();
        assert_eq!(marked, [15]);
    }

    #[test]
    fn today_marks_current_month_only_in_its_year() {
        let cal = HebrewCalendar::new();
        // 2024-01-01 is 20 Tevet 5784.
        let jan_1: DayCode = "20240101".parse().unwrap();
        let grid = build_year_grid(&cal, 5784, &[], utc()).with_today(&cal, jan_1);
        assert_eq!(grid.today().map(|t| (t.month(), t.day())), Some((hebrew::TEVET, 20)));
        assert!(grid.is_current_month(hebrew::TEVET));
        assert!(!grid.is_current_month(hebrew::SHEVAT));

        let other = build_year_grid(&cal, 5785, &[], utc()).with_today(&cal, jan_1);
        assert_eq!(other.today(), None);
        assert!(!other.is_current_month(hebrew::TEVET));
    }

    #[test]
    fn builder_query_spans_whole_year() {
        let cal = HebrewCalendar::new();
        let builder = YearGridBuilder::new(5784, utc());
        let q = builder.query(&cal);
        assert_eq!(q.key(), 5784);
        assert_eq!((q.end_ts() - q.start_ts()) / SECONDS_PER_DAY, 383);
    }
}
