use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One stay-night, a proleptic-Gregorian calendar date.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, Serialize, Deserialize, PartialOrd, Hash)]
pub struct Night(pub NaiveDate);

impl Night {
    pub fn succ(self) -> Option<Night> {
        self.0.succ_opt().map(Night)
    }
}

impl fmt::Display for Night {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for Night {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, DATE_FORMAT).map(Night)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("check-in {check_in} is not before check-out {check_out}")]
pub struct DateRangeError {
    pub check_in: Night,
    pub check_out: Night,
}

/// A half-open stay period [check_in, check_out). The check-out night itself
/// is not occupied. Construction enforces check_in < check_out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stay {
    pub check_in: Night,
    pub check_out: Night,
}

impl Stay {
    pub fn new(check_in: Night, check_out: Night) -> Result<Stay, DateRangeError> {
        if check_in >= check_out {
            return Err(DateRangeError {
                check_in,
                check_out,
            });
        }
        Ok(Stay {
            check_in,
            check_out,
        })
    }

    pub fn nights(&self) -> Nights {
        nights(self.check_in, self.check_out)
    }
}

impl fmt::Display for Stay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.check_in, self.check_out)
    }
}

/// The nights covered by [check_in, check_out), ascending. A degenerate
/// range (check_in >= check_out) yields nothing; ranges from unvalidated
/// sources must not loop or panic here.
pub fn nights(check_in: Night, check_out: Night) -> Nights {
    Nights {
        cursor: check_in,
        end: check_out,
    }
}

#[derive(Debug, Clone)]
pub struct Nights {
    cursor: Night,
    end: Night,
}

impl Iterator for Nights {
    type Item = Night;

    fn next(&mut self) -> Option<Night> {
        if self.cursor >= self.end {
            return None;
        }
        let night = self.cursor;
        self.cursor = night.succ().unwrap_or(self.end);
        Some(night)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn night(s: &str) -> Night {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_display_roundtrip() {
        let n = night("2024-06-01");
        assert_eq!("2024-06-01", n.to_string());
        assert!(night("2024-05-31") < n);
    }

    #[test]
    fn test_rejects_invalid_dates() {
        assert!("2024-02-30".parse::<Night>().is_err());
        assert!("2024-13-01".parse::<Night>().is_err());
        assert!("not-a-date".parse::<Night>().is_err());
        assert!("2024-06-01x".parse::<Night>().is_err());
    }

    #[test]
    fn test_expands_half_open_range() {
        let all: Vec<Night> = nights(night("2024-06-01"), night("2024-06-04")).collect();
        assert_eq!(
            vec![night("2024-06-01"), night("2024-06-02"), night("2024-06-03")],
            all
        );
    }

    #[test]
    fn test_single_night() {
        let all: Vec<Night> = nights(night("2024-06-01"), night("2024-06-02")).collect();
        assert_eq!(vec![night("2024-06-01")], all);
    }

    #[test]
    fn test_crosses_leap_month_boundary() {
        let all: Vec<Night> = nights(night("2024-02-28"), night("2024-03-01")).collect();
        assert_eq!(vec![night("2024-02-28"), night("2024-02-29")], all);
    }

    #[test]
    fn test_degenerate_ranges_are_empty() {
        assert_eq!(0, nights(night("2024-06-01"), night("2024-06-01")).count());
        assert_eq!(0, nights(night("2024-06-05"), night("2024-06-01")).count());
    }

    #[test]
    fn test_restartable() {
        let range = nights(night("2024-06-01"), night("2024-06-08"));
        let first: Vec<Night> = range.clone().collect();
        let second: Vec<Night> = range.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_stay_requires_strict_order() {
        let n = night("2024-06-01");
        assert!(Stay::new(n, n).is_err());
        assert!(Stay::new(night("2024-06-02"), n).is_err());
        let stay = Stay::new(n, night("2024-06-03")).unwrap();
        assert_eq!(2, stay.nights().count());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;

    fn arb_night() -> impl Strategy<Value = Night> {
        (2000..2100i32, 1..13u32, 1..29u32)
            .prop_map(|(y, m, d)| Night(NaiveDate::from_ymd_opt(y, m, d).unwrap()))
    }

    proptest! {
        #[test]
        fn test_night_count_matches_calendar_distance(start in arb_night(), len in 0..500i64) {
            let end = Night(start.0 + Duration::days(len));
            prop_assert_eq!(len, nights(start, end).count() as i64);
        }

        #[test]
        fn test_nights_ascending_and_exclude_checkout(start in arb_night(), len in 1..120i64) {
            let end = Night(start.0 + Duration::days(len));
            let all: Vec<Night> = nights(start, end).collect();
            prop_assert_eq!(Some(&start), all.first());
            prop_assert!(all.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(all.iter().all(|n| *n < end));
        }
    }
}
