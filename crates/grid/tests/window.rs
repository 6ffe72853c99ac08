use chrono::NaiveDate;
use luach_calendar::{CalendarOracle, DayCode, HebrewCalendar, MonthAnchor, SyntheticCalendar};
use luach_grid::{DEFAULT_WINDOW_SIZE, MonthWalk, MonthWindow, month_window};

fn assert_window<O: CalendarOracle>(oracle: &O, anchor_day: DayCode, window: &MonthWindow) {
    assert_eq!(window.len(), DEFAULT_WINDOW_SIZE);
    assert_eq!(window.center(), DEFAULT_WINDOW_SIZE / 2);

    // The center page is the anchor day's month.
    let expected = MonthAnchor::containing(oracle, anchor_day.date());
    let center_code = window.get(window.center()).unwrap();
    assert_eq!(MonthAnchor::containing(oracle, center_code.date()), expected);
    assert_eq!(window.center_anchor(), expected);
    assert_eq!(window.position_of(anchor_day), Some(window.center()));

    // Every page starts on day 1 and pages tile without gaps.
    for (i, (code, anchor)) in window.codes().iter().zip(window.anchors()).enumerate() {
        let date = oracle.to_lunisolar(code.date());
        assert_eq!(date.day(), 1, "page {i}");
        assert_eq!(date.month_anchor(), *anchor, "page {i}");
    }
    for (i, pair) in window.codes().windows(2).enumerate() {
        let len = window.anchors()[i].days(oracle);
        assert_eq!(pair[0].days_until(pair[1]), i64::from(len), "page {i}");
    }
}

#[test]
fn hebrew_windows_center_on_anchor_month() {
    let cal = HebrewCalendar::new();
    let mut day = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2050, 1, 1).unwrap();
    while day < end {
        let code = DayCode::from_date(day);
        let window = month_window(&cal, code, DEFAULT_WINDOW_SIZE).unwrap();
        assert_window(&cal, code, &window);
        day += chrono::TimeDelta::days(701);
    }
}

#[test]
fn synthetic_windows_center_on_anchor_month() {
    for leap_every in [1, 2, 3, 19] {
        for start in [1, 7] {
            let cal = SyntheticCalendar::new(leap_every).with_year_start_month(start);
            for offset in [0, 29, 354, 1000, -5000] {
                let day = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + chrono::TimeDelta::days(offset);
                let code = DayCode::from_date(day);
                let window = month_window(&cal, code, DEFAULT_WINDOW_SIZE).unwrap();
                assert_window(&cal, code, &window);
            }
        }
    }
}

#[test]
fn window_holds_every_leap_month_in_range() {
    // 251 months span a little over 20 years, so more than one full
    // 19-year cycle: seven leap months at least.
    let cal = HebrewCalendar::new();
    let window = month_window(&cal, "20241010".parse().unwrap(), DEFAULT_WINDOW_SIZE).unwrap();
    let leap_months = window.anchors().iter().filter(|a| a.month() == 13).count();
    assert!(leap_months >= 7, "{leap_months}");
}

#[test]
fn lazy_walk_matches_window() {
    let cal = HebrewCalendar::new();
    let code: DayCode = "20240324".parse().unwrap();
    let window = month_window(&cal, code, 41).unwrap();
    let center = MonthAnchor::containing(&cal, code.date());
    let walk = MonthWalk::centered(&cal, center, 41);
    assert_eq!(walk.start(), window.anchors()[0]);
    let codes: Vec<DayCode> = walk.day_codes().collect();
    assert_eq!(codes, window.codes());
}
