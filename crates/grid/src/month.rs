//! Fixed-shape month grids.

use chrono::{Datelike, FixedOffset};
use luach_calendar::{CalendarOracle, DayCode, LunisolarDate, MonthAnchor};
use serde::Serialize;
use tracing::debug;

use crate::bucket::EventSpans;
use crate::config::GridConfig;
use crate::event::EventRef;

/// Number of cells in a month grid: six weeks of seven days.
pub const GRID_CELLS: usize = 42;

const SECONDS_PER_DAY: i64 = 86_400;

/// One day of a month grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridCell {
    lunisolar_day: u8,
    month: MonthAnchor,
    in_target_month: bool,
    is_today: bool,
    day_code: DayCode,
    week_of_year: u32,
    grid_index: usize,
    is_weekend: bool,
    events: Vec<EventRef>,
}

impl GridCell {
    /// Day of the lunisolar month shown in this cell.
    pub fn lunisolar_day(&self) -> u8 {
        self.lunisolar_day
    }

    /// The lunisolar date of this cell.
    pub fn lunisolar_date(&self) -> LunisolarDate {
        LunisolarDate::new_unchecked(self.month.year(), self.month.month(), self.lunisolar_day)
    }

    /// Month this cell belongs to (the target month or a neighbour).
    pub fn month(&self) -> MonthAnchor {
        self.month
    }

    /// `true` for days of the target month, `false` for overflow days.
    pub fn in_target_month(&self) -> bool {
        self.in_target_month
    }

    /// `true` if this cell is today.
    pub fn is_today(&self) -> bool {
        self.is_today
    }

    /// Gregorian day code; also the target for opening the day view.
    pub fn day_code(&self) -> DayCode {
        self.day_code
    }

    /// ISO week number of the Gregorian date.
    pub fn week_of_year(&self) -> u32 {
        self.week_of_year
    }

    /// Position in the grid (0..42).
    pub fn grid_index(&self) -> usize {
        self.grid_index
    }

    /// `true` if the Gregorian date falls on a configured weekend day.
    pub fn is_weekend(&self) -> bool {
        self.is_weekend
    }

    /// Events touching this day, in arrival order.
    pub fn events(&self) -> &[EventRef] {
        &self.events
    }
}

/// What a month grid is titled with. Rendering the name is left to the
/// caller; the year is meant to be shown only when `show_year` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthLabel {
    /// Month number of the target month.
    pub month: u8,
    /// Lunisolar year of the target month.
    pub year: i32,
    /// Whether `year` is a leap year (month 12 is then the first half of
    /// the split month).
    pub is_leap_year: bool,
    /// `true` when `year` is not the current lunisolar year.
    pub show_year: bool,
}

/// A 42-cell month grid around one lunisolar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGrid {
    anchor: MonthAnchor,
    label: MonthLabel,
    first_weekday_index: usize,
    cells: Vec<GridCell>,
    has_events: bool,
}

impl MonthGrid {
    /// The target month.
    pub fn anchor(&self) -> MonthAnchor {
        self.anchor
    }

    /// Day 1 of the target month, the target for opening the month view.
    pub fn month_target(&self) -> LunisolarDate {
        self.anchor.first_day()
    }

    /// Title information.
    pub fn label(&self) -> MonthLabel {
        self.label
    }

    /// Index of the cell holding day 1 of the target month.
    pub fn first_weekday_index(&self) -> usize {
        self.first_weekday_index
    }

    /// All 42 cells, in display order.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// The cell at `index`, if in range.
    pub fn cell(&self, index: usize) -> Option<&GridCell> {
        self.cells.get(index)
    }

    /// `true` once events have been attached.
    pub fn has_events(&self) -> bool {
        self.has_events
    }

    /// Day code of the first cell.
    pub fn first_day_code(&self) -> DayCode {
        self.cells[0].day_code
    }

    /// Day code of the last cell.
    pub fn last_day_code(&self) -> DayCode {
        self.cells[GRID_CELLS - 1].day_code
    }

    /// The `[start, end)` epoch-second range covering every cell.
    pub fn event_range(&self, offset: FixedOffset) -> (i64, i64) {
        let start = self.first_day_code().start_timestamp(offset);
        let end = self.last_day_code().start_timestamp(offset) + SECONDS_PER_DAY;
        (start, end)
    }

    /// Attaches `events` to every cell whose day they touch.
    ///
    /// Malformed events are skipped (see [`EventSpans::resolve`]).
    pub fn with_events(mut self, events: &[EventRef], offset: FixedOffset) -> Self {
        let spans = EventSpans::resolve(events, offset);
        let mut by_day = spans.by_day(self.first_day_code(), self.last_day_code());
        for cell in &mut self.cells {
            cell.events = by_day.remove(&cell.day_code).unwrap_or_default();
        }
        self.has_events = true;
        debug!(
            n_events = spans.spans().len(),
            n_rejected = spans.rejected().len(),
            "events attached to month grid"
        );
        self
    }
}

/// Builds the grid for `anchor` without events.
///
/// Leading cells hold the tail of the previous month and trailing cells the
/// head of the next one, so the grid always has [`GRID_CELLS`] cells
/// regardless of the month's length. `today` marks the cell flagged
/// `is_today` and decides whether the label shows the year.
#[tracing::instrument(skip(oracle, config), fields(year = anchor.year(), month = anchor.month()))]
pub fn build_month_grid<O: CalendarOracle + ?Sized>(
    oracle: &O,
    config: &GridConfig,
    anchor: MonthAnchor,
    today: DayCode,
) -> MonthGrid {
    let first_weekday_index = config.column_of(anchor.first_gregorian(oracle).weekday());
    let days = usize::from(anchor.days(oracle));
    let previous = anchor.previous(oracle);
    let previous_days = usize::from(previous.days(oracle));
    let next = anchor.next(oracle);

    let mut cells = Vec::with_capacity(GRID_CELLS);
    for grid_index in 0..GRID_CELLS {
        let (month, day, in_target_month) = if grid_index < first_weekday_index {
            (previous, previous_days + grid_index + 1 - first_weekday_index, false)
        } else if grid_index < first_weekday_index + days {
            (anchor, grid_index - first_weekday_index + 1, true)
        } else {
            (next, grid_index - first_weekday_index - days + 1, false)
        };
        // Lunisolar months have at most 30 days.
        let lunisolar_day = day as u8;
        let date = oracle.to_gregorian(LunisolarDate::new_unchecked(
            month.year(),
            month.month(),
            lunisolar_day,
        ));
        let day_code = DayCode::from_date(date);
        cells.push(GridCell {
            lunisolar_day,
            month,
            in_target_month,
            is_today: day_code == today,
            day_code,
            week_of_year: date.iso_week().week(),
            grid_index,
            is_weekend: config.is_weekend(date),
            events: Vec::new(),
        });
    }

    let current_year = oracle.to_lunisolar(today.date()).year();
    let label = MonthLabel {
        month: anchor.month(),
        year: anchor.year(),
        is_leap_year: oracle.is_leap_year(anchor.year()),
        show_year: anchor.year() != current_year,
    };

    MonthGrid {
        anchor,
        label,
        first_weekday_index,
        cells,
        has_events: false,
    }
}
