//! Plain-text rendering of grids and windows.

use std::fmt::Write;

use luach_calendar::{CalendarOracle, MonthAnchor, hebrew};
use luach_grid::{GridConfig, MonthGrid, MonthWindow, YearGrid};

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

const CELL_WIDTH: usize = 5;

fn month_title<O: CalendarOracle + ?Sized>(oracle: &O, anchor: MonthAnchor) -> String {
    let name = hebrew::month_name(anchor.month(), oracle.is_leap_year(anchor.year()));
    format!("{name} {}", anchor.year())
}

/// Renders a month grid as six week rows.
///
/// Overflow days are shown in parentheses; `*` marks today and `+` a day
/// with events.
pub fn month(grid: &MonthGrid, config: &GridConfig) -> String {
    let label = grid.label();
    let name = hebrew::month_name(label.month, label.is_leap_year);
    let mut out = if label.show_year {
        format!("{name} {}\n", label.year)
    } else {
        format!("{name}\n")
    };

    for column in 0..7 {
        let day = WEEKDAYS[(usize::from(config.first_day_of_week()) + column) % 7];
        let _ = write!(out, "{day:>CELL_WIDTH$}");
    }
    out.push('\n');

    for week in grid.cells().chunks(7) {
        for cell in week {
            let mark = if cell.is_today() {
                "*"
            } else if !cell.events().is_empty() {
                "+"
            } else {
                ""
            };
            let text = if cell.in_target_month() {
                format!("{}{mark}", cell.lunisolar_day())
            } else {
                format!("({}){mark}", cell.lunisolar_day())
            };
            let _ = write!(out, "{text:>CELL_WIDTH$}");
        }
        out.push('\n');
    }
    out
}

/// Renders a year grid as one line per month listing the marked days.
/// The month containing today is suffixed with `*`.
pub fn year(grid: &YearGrid, is_leap: bool) -> String {
    let mut out = format!("{}{}\n", grid.year(), if is_leap { " (leap)" } else { "" });
    for bucket in grid.months() {
        let month = bucket.month().month();
        let mark = if grid.is_current_month(month) { "*" } else { "" };
        let name = format!("{}{mark}", hebrew::month_name(month, is_leap));
        let days: Vec<String> = bucket
            .marked_days()
            .map(|(day, colors)| {
                if colors.len() > 1 {
                    format!("{day}x{}", colors.len())
                } else {
                    day.to_string()
                }
            })
            .collect();
        let days = if days.is_empty() {
            "-".to_string()
        } else {
            days.join(" ")
        };
        let _ = writeln!(out, "{name:<10} {days}");
    }
    out
}

/// Renders a month window as one line per page, with `>` at the center.
pub fn window<O: CalendarOracle + ?Sized>(oracle: &O, window: &MonthWindow) -> String {
    let mut out = String::new();
    for (i, (code, anchor)) in window.codes().iter().zip(window.anchors()).enumerate() {
        let marker = if i == window.center() { '>' } else { ' ' };
        let _ = writeln!(out, "{marker}{i:>4}  {code}  {}", month_title(oracle, *anchor));
    }
    out
}
