use chrono::{Datelike, FixedOffset};
use luach_calendar::{CalendarOracle, DayCode, HebrewCalendar, MonthAnchor, SyntheticCalendar, hebrew};
use luach_grid::{EventRef, GRID_CELLS, GridConfig, MonthGrid, build_month_grid};

// 2024-01-01T00:00:00Z
const JAN_1: i64 = 1_704_067_200;
const DAY: i64 = 86_400;

fn today() -> DayCode {
    "20241010".parse().unwrap()
}

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

fn assert_grid_shape<O: CalendarOracle>(oracle: &O, grid: &MonthGrid) {
    let anchor = grid.anchor();
    let cells = grid.cells();
    assert_eq!(cells.len(), GRID_CELLS, "{anchor:?}");

    // One contiguous run of target-month cells, as long as the month.
    let in_target: Vec<usize> = cells
        .iter()
        .filter(|c| c.in_target_month())
        .map(|c| c.grid_index())
        .collect();
    let first = grid.first_weekday_index();
    assert_eq!(in_target.len(), usize::from(anchor.days(oracle)), "{anchor:?}");
    assert_eq!(in_target, (first..first + in_target.len()).collect::<Vec<_>>());

    // Day 1 sits at the first weekday index.
    assert_eq!(cells[first].lunisolar_day(), 1);
    assert_eq!(cells[first].month(), anchor);

    // Cells are consecutive Gregorian days.
    for pair in cells.windows(2) {
        assert_eq!(pair[0].day_code().days_until(pair[1].day_code()), 1, "{anchor:?}");
    }
    for (i, cell) in cells.iter().enumerate() {
        assert_eq!(cell.grid_index(), i);
        assert_eq!(
            oracle.to_lunisolar(cell.day_code().date()),
            cell.lunisolar_date(),
            "{anchor:?} cell {i}"
        );
    }
}

#[test]
fn hebrew_grids_have_fixed_shape() {
    let cal = HebrewCalendar::new();
    for config in [GridConfig::new(), GridConfig::new().with_first_day_of_week(1)] {
        for year in 5780..5790 {
            for month in 1..=cal.months_in_year(year) {
                let anchor = MonthAnchor::new(&cal, year, month).unwrap();
                let grid = build_month_grid(&cal, &config, anchor, today());
                assert_grid_shape(&cal, &grid);
            }
        }
    }
}

#[test]
fn synthetic_grids_have_fixed_shape() {
    for start in [1, 7] {
        let cal = SyntheticCalendar::new(3).with_year_start_month(start);
        for year in -5..5 {
            for month in 1..=cal.months_in_year(year) {
                let anchor = MonthAnchor::new(&cal, year, month).unwrap();
                let grid = build_month_grid(&cal, &GridConfig::new(), anchor, today());
                assert_grid_shape(&cal, &grid);
            }
        }
    }
}

#[test]
fn twenty_nine_day_month_starting_in_column_three() {
    let cal = SyntheticCalendar::new(3);
    let anchor = MonthAnchor::new(&cal, 1, 2).unwrap();
    assert_eq!(anchor.days(&cal), 29);

    // Rotate the week so that day 1 lands in column 3.
    let weekday = anchor.first_gregorian(&cal).weekday().num_days_from_sunday() as u8;
    let config = GridConfig::new().with_first_day_of_week((weekday + 7 - 3) % 7);
    let grid = build_month_grid(&cal, &config, anchor, today());
    assert_eq!(grid.first_weekday_index(), 3);

    let cells = grid.cells();
    // Month 1 has 30 days.
    let leading: Vec<u8> = cells[..3].iter().map(|c| c.lunisolar_day()).collect();
    assert_eq!(leading, [28, 29, 30]);
    assert!(cells[..3].iter().all(|c| !c.in_target_month() && c.month().month() == 1));

    let target: Vec<u8> = cells[3..32].iter().map(|c| c.lunisolar_day()).collect();
    assert_eq!(target, (1..=29).collect::<Vec<u8>>());
    assert!(cells[3..32].iter().all(|c| c.in_target_month()));

    let trailing: Vec<u8> = cells[32..].iter().map(|c| c.lunisolar_day()).collect();
    assert_eq!(trailing, (1..=10).collect::<Vec<u8>>());
    assert!(cells[32..].iter().all(|c| !c.in_target_month() && c.month().month() == 3));
}

#[test]
fn leap_year_grid_neighbours() {
    // Adar II 5784 is preceded by Adar I and followed by Nissan.
    let cal = HebrewCalendar::new();
    let anchor = MonthAnchor::new(&cal, 5784, hebrew::ADAR_II).unwrap();
    let grid = build_month_grid(&cal, &GridConfig::new(), anchor, today());
    let first = grid.first_weekday_index();
    if first > 0 {
        assert_eq!(grid.cells()[0].month().month(), hebrew::ADAR);
    }
    assert_eq!(grid.cells()[41].month().month(), hebrew::NISSAN);
    assert_eq!(grid.cells()[41].month().year(), 5784);
    assert_eq!(grid.label().month, hebrew::ADAR_II);
    assert!(grid.label().is_leap_year);
}

#[test]
fn three_day_event_attaches_to_three_cells() {
    // 2024-01-01 is 20 Tevet 5784.
    let cal = HebrewCalendar::new();
    let event = EventRef::new(1, JAN_1, JAN_1 + 3 * DAY - 1, 0xff00_00ff);

    let tevet = MonthAnchor::new(&cal, 5784, hebrew::TEVET).unwrap();
    let grid = build_month_grid(&cal, &GridConfig::new(), tevet, today()).with_events(&[event], utc());
    let days: Vec<String> = grid
        .cells()
        .iter()
        .filter(|c| c.events() == [event])
        .map(|c| c.day_code().to_string())
        .collect();
    assert_eq!(days, ["20240101", "20240102", "20240103"]);
    let hebrew_days: Vec<u8> = grid
        .cells()
        .iter()
        .filter(|c| !c.events().is_empty())
        .map(|c| c.lunisolar_day())
        .collect();
    assert_eq!(hebrew_days, [20, 21, 22]);

    let tishrei = MonthAnchor::new(&cal, 5785, hebrew::TISHREI).unwrap();
    let grid = build_month_grid(&cal, &GridConfig::new(), tishrei, today()).with_events(&[event], utc());
    assert!(grid.cells().iter().all(|c| c.events().is_empty()));
}

#[test]
fn long_event_is_clamped_to_grid() {
    let cal = HebrewCalendar::new();
    let tevet = MonthAnchor::new(&cal, 5784, hebrew::TEVET).unwrap();
    let event = EventRef::new(1, JAN_1 - 3650 * DAY, JAN_1 + 3650 * DAY, 0);
    let grid = build_month_grid(&cal, &GridConfig::new(), tevet, today()).with_events(&[event], utc());
    assert!(grid.cells().iter().all(|c| c.events() == [event]));
}

#[test]
fn open_ended_events_are_kept() {
    let cal = HebrewCalendar::new();
    let tevet = MonthAnchor::new(&cal, 5784, hebrew::TEVET).unwrap();
    let grid = build_month_grid(&cal, &GridConfig::new(), tevet, today());
    let jan_1: DayCode = "20240101".parse().unwrap();

    let open_ended = EventRef::new(1, JAN_1, i64::MAX, 7);
    let marked = grid.clone().with_events(&[open_ended], utc());
    for cell in marked.cells() {
        let expected = if cell.day_code() >= jan_1 { vec![open_ended] } else { vec![] };
        assert_eq!(cell.events(), expected.as_slice(), "{}", cell.day_code());
    }

    let forever = EventRef::new(2, i64::MIN, i64::MAX, 7);
    let marked = grid.with_events(&[forever], utc());
    assert!(marked.cells().iter().all(|c| c.events() == [forever]));
}

#[test]
fn overflow_cells_receive_events() {
    // Events on leading or trailing days still show in those cells.
    let cal = HebrewCalendar::new();
    let tishrei = MonthAnchor::new(&cal, 5785, hebrew::TISHREI).unwrap();
    let grid = build_month_grid(&cal, &GridConfig::new(), tishrei, today());
    let first_cell = grid.first_day_code().start_timestamp(utc());
    let event = EventRef::new(4, first_cell + 3600, first_cell + 3600, 0);
    let grid = grid.with_events(&[event], utc());
    assert_eq!(grid.cells()[0].events(), [event]);
    assert!(!grid.cells()[0].in_target_month());
}

#[test]
fn events_keep_arrival_order_and_skip_malformed() {
    let cal = HebrewCalendar::new();
    let tevet = MonthAnchor::new(&cal, 5784, hebrew::TEVET).unwrap();
    let b = EventRef::new(2, JAN_1 + 10 * 3600, JAN_1 + 11 * 3600, 0);
    let a = EventRef::new(1, JAN_1 + 3600, JAN_1 + 2 * 3600, 0);
    let bad = EventRef::new(3, JAN_1, JAN_1 - DAY, 0);
    let grid = build_month_grid(&cal, &GridConfig::new(), tevet, today())
        .with_events(&[b, bad, a, b], utc());
    let cell = grid
        .cells()
        .iter()
        .find(|c| c.day_code().to_string() == "20240101")
        .unwrap();
    let ids: Vec<u64> = cell.events().iter().map(|e| e.id).collect();
    assert_eq!(ids, [2, 1]);
}

#[test]
fn utc_offset_moves_events_across_midnight() {
    // 2024-01-01T23:30Z is already 2024-01-02 at UTC+2.
    let cal = HebrewCalendar::new();
    let tevet = MonthAnchor::new(&cal, 5784, hebrew::TEVET).unwrap();
    let config = GridConfig::new().with_utc_offset_secs(2 * 3600);
    let event = EventRef::new(1, JAN_1 + 23 * 3600 + 1800, JAN_1 + 23 * 3600 + 1800, 0);
    let grid = build_month_grid(&cal, &config, tevet, today()).with_events(&[event], config.offset());
    let days: Vec<String> = grid
        .cells()
        .iter()
        .filter(|c| !c.events().is_empty())
        .map(|c| c.day_code().to_string())
        .collect();
    assert_eq!(days, ["20240102"]);
}
