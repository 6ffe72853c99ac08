use luach_calendar::{CalendarOracle, HebrewCalendar, MonthAnchor, SyntheticCalendar, hebrew};

fn all_anchors<O: CalendarOracle>(oracle: &O, years: std::ops::Range<i32>) -> Vec<MonthAnchor> {
    let mut anchors = Vec::new();
    for year in years {
        for month in 1..=oracle.months_in_year(year) {
            anchors.push(MonthAnchor::new(oracle, year, month).unwrap());
        }
    }
    anchors
}

fn assert_identity<O: CalendarOracle>(oracle: &O, years: std::ops::Range<i32>) {
    for anchor in all_anchors(oracle, years) {
        assert_eq!(
            anchor.next(oracle).previous(oracle),
            anchor,
            "previous(next({anchor:?}))"
        );
        assert_eq!(
            anchor.previous(oracle).next(oracle),
            anchor,
            "next(previous({anchor:?}))"
        );
    }
}

#[test]
fn identity_hebrew_multi_century() {
    assert_identity(&HebrewCalendar::new(), 5500..5900);
}

#[test]
fn identity_synthetic_leap_patterns() {
    for leap_every in [1, 2, 3, 7] {
        for start in [1, 7] {
            let cal = SyntheticCalendar::new(leap_every).with_year_start_month(start);
            assert_identity(&cal, -300..300);
        }
    }
}

#[test]
fn hebrew_next_month_is_the_following_gregorian_day() {
    // Walking `next` must land on the month that starts the day after the
    // current month ends, across every leap insertion in the range.
    let cal = HebrewCalendar::new();
    let mut anchor = MonthAnchor::new(&cal, 5600, hebrew::TISHREI).unwrap();
    while anchor.year() < 5900 {
        let last = cal.to_gregorian(anchor.last_day(&cal));
        let next = anchor.next(&cal);
        assert_eq!(
            next.first_gregorian(&cal),
            last.succ_opt().unwrap(),
            "{anchor:?} -> {next:?}"
        );
        anchor = next;
    }
}

#[test]
fn hebrew_year_turns_over_at_tishrei() {
    let cal = HebrewCalendar::new();
    let elul = MonthAnchor::new(&cal, 5784, hebrew::ELUL).unwrap();
    let tishrei = elul.next(&cal);
    assert_eq!((tishrei.year(), tishrei.month()), (5785, hebrew::TISHREI));

    let adar_ii = MonthAnchor::new(&cal, 5784, hebrew::ADAR_II).unwrap();
    let nissan = adar_ii.next(&cal);
    assert_eq!((nissan.year(), nissan.month()), (5784, hebrew::NISSAN));
    assert_eq!(nissan.previous(&cal), adar_ii);

    let adar = MonthAnchor::new(&cal, 5785, hebrew::ADAR).unwrap();
    assert_eq!(adar.next(&cal).month(), hebrew::NISSAN);
}

#[test]
fn leap_year_split_month_steps_into_leap_month() {
    // Default year start: month 12 of a leap year goes to 13, not year+1.
    let cal = SyntheticCalendar::new(4);
    let twelve = MonthAnchor::new(&cal, 8, 12).unwrap();
    let next = twelve.next(&cal);
    assert_eq!((next.year(), next.month()), (8, 13));
    let after = next.next(&cal);
    assert_eq!((after.year(), after.month()), (9, 1));

    // And the adjacent non-leap years wrap straight from 12.
    for year in [7, 9] {
        let next = MonthAnchor::new(&cal, year, 12).unwrap().next(&cal);
        assert_eq!((next.year(), next.month()), (year + 1, 1));
    }
}
