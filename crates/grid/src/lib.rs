//! # luach-grid
//!
//! Fixed-shape month grids, per-month year grids, event bucketing and
//! centered month windows on top of any [`luach_calendar::CalendarOracle`].
//!
//! Events come from an external store that answers range queries, possibly
//! late and possibly more than once. Month views guard against stale
//! answers by comparing the answered month with the active one; year views
//! additionally skip rebuilds when the event set's fingerprint is unchanged.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["DayCode"] -->|"month_window()"| B["MonthWindow"]
//!     B -->|"page anchor"| C["MonthSession::navigate()"]
//!     C -->|"RangeQuery"| D["EventStore"]
//!     D -->|"events"| E["MonthSession::receive()"]
//!     E --> F["MonthGrid (42 cells)"]
//!     G["YearGridBuilder::query()"] -->|"RangeQuery"| D
//!     D -->|"events"| H["YearGridBuilder::receive()"]
//!     H --> I["YearGrid"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use luach_calendar::{DayCode, HebrewCalendar, MonthAnchor};
//! use luach_grid::{EventRef, GridConfig, MemoryEventStore, MonthSession, month_window};
//!
//! let cal = HebrewCalendar::new();
//! let today: DayCode = "20241010".parse().unwrap();
//!
//! let window = month_window(&cal, today, 251).unwrap();
//! let anchor = window.center_anchor();
//!
//! let mut session = MonthSession::new(GridConfig::new(), today);
//! session.navigate(&cal, anchor);
//!
//! // 2024-10-10 12:00 UTC
//! let store = MemoryEventStore::new(vec![EventRef::new(1, 1_728_561_600, 1_728_561_600, 0)]);
//! let grid = session.refresh(&store).unwrap();
//! assert_eq!(grid.cells().len(), 42);
//! assert_eq!(grid.cells().iter().filter(|c| !c.events().is_empty()).count(), 1);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `config` | Week layout, weekend days and UTC offset |
//! | `event` | Event references, range queries, the `EventStore` trait |
//! | `bucket` | Expanding events to the days they touch |
//! | `month` | 42-cell month grids |
//! | `year` | Year grids and fingerprint-gated rebuilds |
//! | `session` | Month views with a stale-response guard |
//! | `window` | Centered month windows for paged navigation |
//! | `error` | Error types |

mod bucket;
mod config;
mod error;
mod event;
mod month;
mod session;
mod window;
mod year;

pub use bucket::{DaySpan, EventSpans};
pub use config::GridConfig;
pub use error::GridError;
pub use event::{EventRef, EventStore, MemoryEventStore, RangeQuery};
pub use month::{GRID_CELLS, GridCell, MonthGrid, MonthLabel, build_month_grid};
pub use session::MonthSession;
pub use window::{DEFAULT_WINDOW_SIZE, MonthWalk, MonthWindow, month_window};
pub use year::{
    YEAR_BUCKET_SLOTS, YearDayBucket, YearGrid, YearGridBuilder, build_year_grid, fingerprint,
    year_bounds,
};
