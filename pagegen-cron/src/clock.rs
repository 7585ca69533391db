//! Twelve-hour wall-clock times.

use std::{fmt, str::FromStr};

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::{Error, Result, error::in_range};

/// Hour on a twelve-hour clock, `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Hour12(u8);

impl Hour12 {
    pub fn new(hour: u8) -> Result<Self> {
        in_range("hour", hour.into(), 1, 12)?;
        Ok(Self(hour))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Hour12 {
    type Error = Error;

    fn try_from(hour: u8) -> Result<Self> {
        Self::new(hour)
    }
}

impl From<Hour12> for u8 {
    fn from(hour: Hour12) -> u8 {
        hour.0
    }
}

/// Minute of the hour, `0..=59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Minute(u8);

impl Minute {
    pub fn new(minute: u8) -> Result<Self> {
        in_range("minute", minute.into(), 0, 59)?;
        Ok(Self(minute))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Minute {
    type Error = Error;

    fn try_from(minute: u8) -> Result<Self> {
        Self::new(minute)
    }
}

impl From<Minute> for u8 {
    fn from(minute: Minute) -> u8 {
        minute.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Meridiem {
    AM,
    PM,
}

impl FromStr for Meridiem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AM" => Ok(Meridiem::AM),
            "PM" => Ok(Meridiem::PM),
            _ => Err(Error::unknown("meridiem", s)),
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::AM => f.write_str("AM"),
            Meridiem::PM => f.write_str("PM"),
        }
    }
}

/// A time of day as entered on a twelve-hour form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: Hour12,
    pub minute: Minute,
    pub meridiem: Meridiem,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8, meridiem: Meridiem) -> Result<Self> {
        Ok(Self {
            hour: Hour12::new(hour)?,
            minute: Minute::new(minute)?,
            meridiem,
        })
    }

    /// Hour on the 24-hour clock.
    ///
    /// 12 AM is midnight (0) and 12 PM is noon (12).
    pub fn hour24(self) -> u8 {
        match (self.meridiem, self.hour.get()) {
            (Meridiem::AM, 12) => 0,
            (Meridiem::AM, h) => h,
            (Meridiem::PM, 12) => 12,
            (Meridiem::PM, h) => h + 12,
        }
    }

    /// Build from a 24-hour clock reading.
    pub fn from_24h(hour: u8, minute: u8) -> Result<Self> {
        in_range("hour", hour.into(), 0, 23)?;
        let (hour, meridiem) = match hour {
            0 => (12, Meridiem::AM),
            1..=11 => (hour, Meridiem::AM),
            12 => (12, Meridiem::PM),
            _ => (hour - 12, Meridiem::PM),
        };
        Self::new(hour, minute, meridiem)
    }

    pub fn to_naive_time(self) -> NaiveTime {
        // hour24 < 24 and minute < 60 always hold here.
        NaiveTime::from_hms_opt(self.hour24().into(), self.minute.get().into(), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{:02} {}",
            self.hour.get(),
            self.minute.get(),
            self.meridiem
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hour24(hour: u8, meridiem: Meridiem) -> u8 {
        ClockTime::new(hour, 0, meridiem).unwrap().hour24()
    }

    #[test]
    fn test_to_24h_boundaries() {
        assert_eq!(hour24(12, Meridiem::AM), 0);
        assert_eq!(hour24(12, Meridiem::PM), 12);
        assert_eq!(hour24(1, Meridiem::AM), 1);
        assert_eq!(hour24(11, Meridiem::PM), 23);
    }

    #[test]
    fn test_from_24h_boundaries() {
        let cases = [
            (0, 12, Meridiem::AM),
            (12, 12, Meridiem::PM),
            (1, 1, Meridiem::AM),
            (23, 11, Meridiem::PM),
            (11, 11, Meridiem::AM),
            (13, 1, Meridiem::PM),
        ];
        for (h24, h12, meridiem) in cases {
            let time = ClockTime::from_24h(h24, 0).unwrap();
            assert_eq!(time.hour.get(), h12, "hour for {h24}");
            assert_eq!(time.meridiem, meridiem, "meridiem for {h24}");
        }
    }

    #[test]
    fn test_every_hour_round_trips() {
        for h24 in 0..24 {
            assert_eq!(ClockTime::from_24h(h24, 5).unwrap().hour24(), h24);
        }
    }

    #[test]
    fn test_ranges() {
        assert!(Hour12::new(0).is_err());
        assert!(Hour12::new(13).is_err());
        assert!(Minute::new(60).is_err());
        assert!(ClockTime::from_24h(24, 0).is_err());
        assert_eq!(
            Minute::new(75).unwrap_err(),
            Error::OutOfRange {
                field: "minute",
                value: 75,
                min: 0,
                max: 59
            }
        );
    }

    #[test]
    fn test_meridiem_parse() {
        assert_eq!("pm".parse::<Meridiem>().unwrap(), Meridiem::PM);
        assert_eq!(" AM ".parse::<Meridiem>().unwrap(), Meridiem::AM);
        assert!("noon".parse::<Meridiem>().is_err());
    }

    #[test]
    fn test_display_and_naive_time() {
        let time = ClockTime::new(9, 5, Meridiem::PM).unwrap();
        assert_eq!(time.to_string(), "9:05 PM");
        assert_eq!(
            time.to_naive_time(),
            NaiveTime::from_hms_opt(21, 5, 0).unwrap()
        );
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<Hour12>("13").is_err());
        assert_eq!(serde_json::from_str::<Hour12>("7").unwrap().get(), 7);
    }
}
