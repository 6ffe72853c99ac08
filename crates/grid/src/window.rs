//! Centered month windows for paged navigation.

use luach_calendar::{CalendarOracle, DayCode, MonthAnchor};
use serde::Serialize;
use tracing::debug;

use crate::error::GridError;

/// Number of months in a navigation window: 125 on each side of the
/// current month.
pub const DEFAULT_WINDOW_SIZE: usize = 251;

/// Walks consecutive months forward from a starting month, for a fixed
/// number of steps.
///
/// The walk can be rewound with [`MonthWalk::restart`], so a pager that
/// extends lazily can replay it instead of keeping every page around.
#[derive(Debug, Clone)]
pub struct MonthWalk<'a, O: ?Sized> {
    oracle: &'a O,
    start: MonthAnchor,
    current: MonthAnchor,
    len: usize,
    remaining: usize,
}

impl<'a, O: CalendarOracle + ?Sized> MonthWalk<'a, O> {
    /// Creates a walk of `len` months beginning with `start`.
    pub fn new(oracle: &'a O, start: MonthAnchor, len: usize) -> Self {
        Self {
            oracle,
            start,
            current: start,
            len,
            remaining: len,
        }
    }

    /// Creates a walk of `len` months with `center` at position `len / 2`.
    pub fn centered(oracle: &'a O, center: MonthAnchor, len: usize) -> Self {
        let mut start = center;
        for _ in 0..len / 2 {
            start = start.previous(oracle);
        }
        Self::new(oracle, start, len)
    }

    /// Rewinds the walk to its first month.
    pub fn restart(&mut self) {
        self.current = self.start;
        self.remaining = self.len;
    }

    /// The first month of the walk.
    pub fn start(&self) -> MonthAnchor {
        self.start
    }

    /// Turns the walk into one yielding the first day of each month.
    pub fn day_codes(self) -> impl Iterator<Item = DayCode> {
        let oracle = self.oracle;
        self.map(move |anchor| DayCode::from_date(anchor.first_gregorian(oracle)))
    }
}

impl<O: CalendarOracle + ?Sized> Iterator for MonthWalk<'_, O> {
    type Item = MonthAnchor;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let out = self.current;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.current = self.current.next(self.oracle);
        }
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<O: CalendarOracle + ?Sized> ExactSizeIterator for MonthWalk<'_, O> {}

/// A materialized window of consecutive months.
///
/// Page `i` is the month starting on `codes()[i]`; the page holding the
/// day the window was built around is at [`MonthWindow::center`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthWindow {
    anchors: Vec<MonthAnchor>,
    codes: Vec<DayCode>,
    center: usize,
    end: DayCode,
}

impl MonthWindow {
    /// Number of pages.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// `true` if the window has no pages (never the case for a window
    /// returned by [`month_window`]).
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// First day of each month, in order.
    pub fn codes(&self) -> &[DayCode] {
        &self.codes
    }

    /// The month of each page, in order.
    pub fn anchors(&self) -> &[MonthAnchor] {
        &self.anchors
    }

    /// Index of the center page.
    pub fn center(&self) -> usize {
        self.center
    }

    /// The month on the center page.
    pub fn center_anchor(&self) -> MonthAnchor {
        self.anchors[self.center]
    }

    /// First day of the month on page `index`.
    pub fn get(&self, index: usize) -> Option<DayCode> {
        self.codes.get(index).copied()
    }

    /// The page whose month contains `day`, if the window reaches it.
    pub fn position_of(&self, day: DayCode) -> Option<usize> {
        if day >= self.end {
            return None;
        }
        self.codes.partition_point(|&code| code <= day).checked_sub(1)
    }
}

/// Builds a window of `size` months centered on the month containing
/// `anchor_day`.
///
/// # Errors
///
/// Returns [`GridError::InvalidWindowSize`] if `size` is even (including
/// zero), since such a window has no center.
#[tracing::instrument(skip(oracle))]
pub fn month_window<O: CalendarOracle + ?Sized>(
    oracle: &O,
    anchor_day: DayCode,
    size: usize,
) -> Result<MonthWindow, GridError> {
    if size % 2 == 0 {
        return Err(GridError::InvalidWindowSize { size });
    }
    let center_month = MonthAnchor::containing(oracle, anchor_day.date());
    let anchors: Vec<MonthAnchor> = MonthWalk::centered(oracle, center_month, size).collect();
    let codes: Vec<DayCode> = anchors
        .iter()
        .map(|anchor| DayCode::from_date(anchor.first_gregorian(oracle)))
        .collect();
    let after_last = anchors[size - 1].next(oracle);
    let end = DayCode::from_date(after_last.first_gregorian(oracle));

    debug!(
        first = %codes[0],
        last = %codes[size - 1],
        "built month window"
    );
    Ok(MonthWindow {
        anchors,
        codes,
        center: size / 2,
        end,
    })
}
