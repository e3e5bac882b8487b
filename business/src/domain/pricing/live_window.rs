use chrono::{Datelike, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Saturday opens the weekly live sale at this hour.
pub const SATURDAY_OPEN_HOUR: u32 = 9;
/// Tuesday closes the weekly live sale at this hour.
pub const TUESDAY_CLOSE_HOUR: u32 = 22;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiveWindowState {
    Open,
    Closed,
}

impl std::fmt::Display for LiveWindowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiveWindowState::Open => write!(f, "open"),
            LiveWindowState::Closed => write!(f, "closed"),
        }
    }
}

/// State of the weekly live window at a local instant.
///
/// Open from Saturday 09:00 through Tuesday 21:59, closed otherwise.
/// Pure function of the instant: no memory of previous evaluations.
pub fn live_window_state<T: Datelike + Timelike>(now: &T) -> LiveWindowState {
    let hour = now.hour();
    let open = match now.weekday() {
        Weekday::Sat => hour >= SATURDAY_OPEN_HOUR,
        Weekday::Sun | Weekday::Mon => true,
        Weekday::Tue => hour < TUESDAY_CLOSE_HOUR,
        Weekday::Wed | Weekday::Thu | Weekday::Fri => false,
    };

    if open {
        LiveWindowState::Open
    } else {
        LiveWindowState::Closed
    }
}

pub fn is_live_window<T: Datelike + Timelike>(now: &T) -> bool {
    live_window_state(now) == LiveWindowState::Open
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    // 2024-06-01 is a Saturday.
    fn at(day_offset: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1 + day_offset)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    const SAT: u32 = 0;
    const SUN: u32 = 1;
    const MON: u32 = 2;
    const TUE: u32 = 3;
    const WED: u32 = 4;
    const THU: u32 = 5;
    const FRI: u32 = 6;

    #[test]
    fn should_use_saturday_as_reference_day() {
        assert_eq!(at(SAT, 0, 0).weekday(), Weekday::Sat);
        assert_eq!(at(FRI, 0, 0).weekday(), Weekday::Fri);
    }

    #[test]
    fn should_open_on_saturday_at_nine() {
        assert!(!is_live_window(&at(SAT, 8, 59)));
        assert!(is_live_window(&at(SAT, 9, 0)));
        assert!(is_live_window(&at(SAT, 23, 59)));
    }

    #[test]
    fn should_stay_open_all_sunday_and_monday() {
        assert!(is_live_window(&at(SUN, 3, 0)));
        assert!(is_live_window(&at(SUN, 0, 0)));
        assert!(is_live_window(&at(MON, 23, 59)));
    }

    #[test]
    fn should_close_on_tuesday_at_ten_pm() {
        assert!(is_live_window(&at(TUE, 0, 0)));
        assert!(is_live_window(&at(TUE, 21, 59)));
        assert!(!is_live_window(&at(TUE, 22, 0)));
    }

    #[test]
    fn should_stay_closed_wednesday_to_friday() {
        for day in [WED, THU, FRI] {
            for hour in [0, 9, 12, 21, 23] {
                assert_eq!(
                    live_window_state(&at(day, hour, 0)),
                    LiveWindowState::Closed
                );
            }
        }
    }

    #[test]
    fn should_evaluate_offset_aware_instants_in_their_local_time() {
        let offset = chrono::FixedOffset::west_opt(6 * 3600).unwrap();
        let saturday_nine_local = at(SAT, 9, 0).and_local_timezone(offset).unwrap();
        assert!(is_live_window(&saturday_nine_local));
    }
}
