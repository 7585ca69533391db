use std::{fmt, str::FromStr};

use chrono::{Month, Weekday};
use serde::{Deserialize, Serialize};

use crate::{Error, Result, error::in_range};

/// Day of the month, `1..=31`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOfMonth(u8);

impl DayOfMonth {
    pub fn new(day: u8) -> Result<Self> {
        in_range("day of month", day.into(), 1, 31)?;
        Ok(Self(day))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DayOfMonth {
    type Error = Error;

    fn try_from(day: u8) -> Result<Self> {
        Self::new(day)
    }
}

impl From<DayOfMonth> for u8 {
    fn from(day: DayOfMonth) -> u8 {
        day.0
    }
}

/// How often a schedule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recurrence {
    Daily,
    Weekly(Weekday),
    Monthly(DayOfMonth),
    Yearly { month: Month, day: DayOfMonth },
}

impl Recurrence {
    /// A yearly recurrence on a date that exists in some year (February 29 is allowed).
    pub fn yearly(month: Month, day: u8) -> Result<Self> {
        let day = DayOfMonth::new(day)?;
        in_range("day of month", day.get().into(), 1, days_in_month(month))?;
        Ok(Recurrence::Yearly { month, day })
    }

    pub fn kind(&self) -> RecurrenceKind {
        match self {
            Recurrence::Daily => RecurrenceKind::Daily,
            Recurrence::Weekly(_) => RecurrenceKind::Weekly,
            Recurrence::Monthly(_) => RecurrenceKind::Monthly,
            Recurrence::Yearly { .. } => RecurrenceKind::Yearly,
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recurrence::Daily => f.write_str("every day"),
            Recurrence::Weekly(day) => write!(f, "every {}", weekday_name(*day)),
            Recurrence::Monthly(day) => write!(f, "monthly on day {}", day.get()),
            Recurrence::Yearly { month, day } => {
                write!(f, "every year on {} {}", month.name(), day.get())
            }
        }
    }
}

/// Recurrence without its parameters, as picked on a schedule form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecurrenceKind {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RecurrenceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RecurrenceKind::Daily => "Daily",
            RecurrenceKind::Weekly => "Weekly",
            RecurrenceKind::Monthly => "Monthly",
            RecurrenceKind::Yearly => "Yearly",
        }
    }
}

impl fmt::Display for RecurrenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecurrenceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(RecurrenceKind::Daily),
            "weekly" => Ok(RecurrenceKind::Weekly),
            "monthly" => Ok(RecurrenceKind::Monthly),
            "yearly" => Ok(RecurrenceKind::Yearly),
            _ => Err(Error::unknown("recurrence", s)),
        }
    }
}

const WEEKDAYS: [(Weekday, &str, &str); 7] = [
    (Weekday::Mon, "MON", "Monday"),
    (Weekday::Tue, "TUE", "Tuesday"),
    (Weekday::Wed, "WED", "Wednesday"),
    (Weekday::Thu, "THU", "Thursday"),
    (Weekday::Fri, "FRI", "Friday"),
    (Weekday::Sat, "SAT", "Saturday"),
    (Weekday::Sun, "SUN", "Sunday"),
];

/// Three-letter code used in expressions (`MON`).
pub fn weekday_code(day: Weekday) -> &'static str {
    WEEKDAYS[day.num_days_from_monday() as usize].1
}

/// Full English name (`Monday`).
pub fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAYS[day.num_days_from_monday() as usize].2
}

/// Parse a weekday code or full name, case-insensitively.
pub fn parse_weekday(s: &str) -> Result<Weekday> {
    let trimmed = s.trim();
    WEEKDAYS
        .iter()
        .find(|(_, code, name)| {
            trimmed.eq_ignore_ascii_case(code) || trimmed.eq_ignore_ascii_case(name)
        })
        .map(|(day, _, _)| *day)
        .ok_or_else(|| Error::unknown("weekday", s))
}

/// Parse a month number (`1..=12`), three-letter code or full name.
pub fn parse_month(s: &str) -> Result<Month> {
    let trimmed = s.trim();
    if let Ok(number) = trimmed.parse::<u8>() {
        return month_from_number(number);
    }
    (1..=12u8)
        .filter_map(|n| Month::try_from(n).ok())
        .find(|month| {
            let name = month.name();
            trimmed.eq_ignore_ascii_case(name) || trimmed.eq_ignore_ascii_case(&name[..3])
        })
        .ok_or_else(|| Error::unknown("month", s))
}

pub(crate) fn month_from_number(number: u8) -> Result<Month> {
    in_range("month", number.into(), 1, 12)?;
    Month::try_from(number).map_err(|_| Error::unknown("month", &number.to_string()))
}

fn days_in_month(month: Month) -> u32 {
    match month {
        Month::February => 29,
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_codes() {
        assert_eq!(weekday_code(Weekday::Mon), "MON");
        assert_eq!(weekday_code(Weekday::Sun), "SUN");
        assert_eq!(weekday_name(Weekday::Wed), "Wednesday");
    }

    #[test]
    fn test_parse_weekday() {
        assert_eq!(parse_weekday("MON").unwrap(), Weekday::Mon);
        assert_eq!(parse_weekday("fri").unwrap(), Weekday::Fri);
        assert_eq!(parse_weekday("Saturday").unwrap(), Weekday::Sat);
        assert!(parse_weekday("MO").is_err());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("3").unwrap(), Month::March);
        assert_eq!(parse_month("DEC").unwrap(), Month::December);
        assert_eq!(parse_month("january").unwrap(), Month::January);
        assert!(parse_month("13").is_err());
        assert!(parse_month("0").is_err());
        assert!(parse_month("Ja").is_err());
    }

    #[test]
    fn test_yearly_rejects_impossible_dates() {
        assert!(Recurrence::yearly(Month::February, 29).is_ok());
        assert!(Recurrence::yearly(Month::February, 30).is_err());
        assert!(Recurrence::yearly(Month::April, 31).is_err());
        assert!(Recurrence::yearly(Month::December, 31).is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(Recurrence::Weekly(Weekday::Mon).to_string(), "every Monday");
        assert_eq!(
            Recurrence::yearly(Month::March, 15).unwrap().to_string(),
            "every year on March 15"
        );
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("WEEKLY".parse::<RecurrenceKind>().unwrap(), RecurrenceKind::Weekly);
        assert!("hourly".parse::<RecurrenceKind>().is_err());
    }
}
