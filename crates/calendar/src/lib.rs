//! # luach-calendar
//!
//! Lunisolar dates, the oracle capability that converts them to and from
//! Gregorian dates, and month arithmetic that stays correct across leap
//! years with an inserted thirteenth month.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate"] -->|"CalendarOracle::to_lunisolar()"| B["LunisolarDate"]
//!     B -->|"CalendarOracle::to_gregorian()"| A
//!     B -->|".month_anchor()"| C["MonthAnchor"]
//!     C -->|".next() / .previous()"| C
//!     A -->|"DayCode::from_date()"| D["DayCode (YYYYMMDD)"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use luach_calendar::{CalendarOracle, HebrewCalendar, MonthAnchor, hebrew};
//!
//! let cal = HebrewCalendar::new();
//! // 5784 is a leap year: Adar I is followed by Adar II.
//! let adar = MonthAnchor::new(&cal, 5784, hebrew::ADAR).unwrap();
//! let next = adar.next(&cal);
//! assert_eq!((next.year(), next.month()), (5784, hebrew::ADAR_II));
//! assert_eq!(next.previous(&cal), adar);
//! assert_eq!(cal.months_in_year(5784), 13);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `oracle` | The `CalendarOracle` trait |
//! | `date` | Lunisolar dates and month anchors |
//! | `arithmetic` | Next/previous month and display order |
//! | `day_code` | `YYYYMMDD` day codes |
//! | `hebrew` | Arithmetic Hebrew calendar oracle |
//! | `synthetic` | Regular synthetic calendar for leap-pattern tests |
//! | `error` | Error types |

mod arithmetic;
mod date;
mod day_code;
mod error;
pub mod hebrew;
mod oracle;
mod synthetic;

pub use arithmetic::{LEAP_MONTH, SPLIT_MONTH, months_in_display_order};
pub use date::{LunisolarDate, MonthAnchor};
pub use day_code::DayCode;
pub use error::CalendarError;
pub use hebrew::HebrewCalendar;
pub use oracle::CalendarOracle;
pub use synthetic::SyntheticCalendar;
