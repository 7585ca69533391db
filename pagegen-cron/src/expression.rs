//! Encoding and decoding of Quartz-style schedule expressions.
//!
//! Only the four shapes a schedule form can produce are understood:
//!
//! | recurrence | expression            |
//! |------------|-----------------------|
//! | daily      | `0 m H * * ?`         |
//! | weekly     | `0 m H ? * DAY`       |
//! | monthly    | `0 m H d * ?`         |
//! | yearly     | `0 m H d M ? *`       |

use std::{fmt, str::FromStr};

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::{
    ClockTime, DayOfMonth, Error, Recurrence, Result, Schedule,
    error::in_range,
    recurrence::{month_from_number, parse_month, parse_weekday, weekday_code},
};

/// A rendered schedule expression, e.g. `0 30 21 ? * MON`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleExpression(String);

impl ScheduleExpression {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn decode(&self) -> Result<Schedule> {
        decode(&self.0)
    }
}

impl fmt::Display for ScheduleExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ScheduleExpression> for String {
    fn from(expression: ScheduleExpression) -> String {
        expression.0
    }
}

impl FromStr for ScheduleExpression {
    type Err = Error;

    /// Accepts only expressions that decode; the text is normalized.
    fn from_str(s: &str) -> Result<Self> {
        decode(s).map(|schedule| encode(&schedule))
    }
}

/// Encode a schedule. Seconds are always `0`.
pub fn encode(schedule: &Schedule) -> ScheduleExpression {
    let minute = schedule.time.minute.get();
    let hour = schedule.time.hour24();

    let text = match schedule.recurrence {
        Recurrence::Daily => format!("0 {minute} {hour} * * ?"),
        Recurrence::Weekly(day) => format!("0 {minute} {hour} ? * {}", weekday_code(day)),
        Recurrence::Monthly(day) => format!("0 {minute} {hour} {} * ?", day.get()),
        Recurrence::Yearly { month, day } => {
            format!("0 {minute} {hour} {} {} ? *", day.get(), month.number_from_month())
        }
    };
    ScheduleExpression(text)
}

/// Day-of-week numbering: 1 = Sunday .. 7 = Saturday.
const QUARTZ_WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// One whitespace-separated field.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    /// `*`
    Any,
    /// `?`
    NoSpecific,
    Number(u32),
    Name(&'a str),
}

impl Token<'_> {
    fn text(&self) -> String {
        match self {
            Token::Any => "*".to_string(),
            Token::NoSpecific => "?".to_string(),
            Token::Number(n) => n.to_string(),
            Token::Name(name) => name.to_string(),
        }
    }
}

fn tokenize<'a>(expression: &str, field: &'a str) -> Result<Token<'a>> {
    match field {
        "*" => Ok(Token::Any),
        "?" => Ok(Token::NoSpecific),
        _ if field.bytes().all(|b| b.is_ascii_digit()) => field
            .parse()
            .map(Token::Number)
            .map_err(|_| Error::malformed(expression, format!("'{field}' is too large"))),
        _ if field.bytes().all(|b| b.is_ascii_alphabetic()) => Ok(Token::Name(field)),
        _ => Err(Error::malformed(
            expression,
            format!("unsupported field '{field}'; lists, ranges and steps are not schedule shapes"),
        )),
    }
}

/// Decode an expression back into the schedule that produced it.
///
/// The seconds field must be a number but is discarded.
pub fn decode(expression: &str) -> Result<Schedule> {
    let fields: Vec<&str> = expression.split_whitespace().collect();
    if fields.len() != 6 && fields.len() != 7 {
        return Err(Error::malformed(
            expression,
            format!("expected 6 or 7 fields, found {}", fields.len()),
        ));
    }

    let tokens = fields
        .iter()
        .map(|field| tokenize(expression, field))
        .collect::<Result<Vec<_>>>()?;

    let within = |e: Error| Error::malformed(expression, e.to_string());

    let number = |token: &Token, name: &str| match token {
        Token::Number(n) => Ok(*n),
        _ => Err(Error::malformed(expression, format!("{name} must be a number"))),
    };
    number(&tokens[0], "second")?;
    let minute = number(&tokens[1], "minute")?;
    let hour = number(&tokens[2], "hour")?;
    let time = clock_time(hour, minute).map_err(within)?;

    let recurrence = match (&tokens[3], &tokens[4], &tokens[5], tokens.get(6)) {
        (Token::NoSpecific, _, Token::NoSpecific, _) => {
            return Err(Error::malformed(
                expression,
                "day-of-month and day-of-week cannot both be '?'",
            ));
        }
        (Token::Any, Token::Any, Token::NoSpecific, None) => Recurrence::Daily,
        (Token::NoSpecific, Token::Any, day, None) => {
            Recurrence::Weekly(weekday(day).map_err(within)?)
        }
        (Token::Number(day), Token::Any, Token::NoSpecific, None) => {
            Recurrence::Monthly(day_of_month(*day).map_err(within)?)
        }
        (Token::Number(day), month, Token::NoSpecific, Some(Token::Any)) => {
            let month = month_token(month).map_err(within)?;
            day_of_month(*day)
                .and_then(|day| Recurrence::yearly(month, day.get()))
                .map_err(within)?
        }
        (dom, _, dow, _) if *dom != Token::NoSpecific && *dow != Token::NoSpecific => {
            return Err(Error::malformed(
                expression,
                "exactly one of day-of-month and day-of-week must be '?'",
            ));
        }
        _ => {
            return Err(Error::malformed(
                expression,
                "not a daily, weekly, monthly or yearly schedule",
            ));
        }
    };

    Ok(Schedule { time, recurrence })
}

fn clock_time(hour: u32, minute: u32) -> Result<ClockTime> {
    let hour = narrow("hour", hour, 23)?;
    let minute = narrow("minute", minute, 59)?;
    ClockTime::from_24h(hour, minute)
}

fn day_of_month(day: u32) -> Result<DayOfMonth> {
    DayOfMonth::new(narrow("day of month", day, 31)?)
}

fn weekday(token: &Token) -> Result<Weekday> {
    match token {
        Token::Name(name) => parse_weekday(name),
        Token::Number(n) => {
            let n = in_range("day of week", *n, 1, 7)?;
            Ok(QUARTZ_WEEKDAYS[n as usize - 1])
        }
        other => Err(Error::unknown("weekday", &other.text())),
    }
}

fn month_token(token: &Token) -> Result<chrono::Month> {
    match token {
        Token::Number(n) => month_from_number(narrow("month", *n, 12)?),
        Token::Name(name) => parse_month(name),
        other => Err(Error::unknown("month", &other.text())),
    }
}

/// Narrow to `u8`, reporting anything above `max` as out of range.
fn narrow(field: &'static str, value: u32, max: u32) -> Result<u8> {
    in_range(field, value, 0, max)?;
    u8::try_from(value).map_err(|_| Error::OutOfRange {
        field,
        value,
        min: 0,
        max,
    })
}

#[cfg(test)]
mod tests {
    use chrono::Month;

    use super::*;
    use crate::Meridiem;

    fn schedule(hour: u8, minute: u8, meridiem: Meridiem, recurrence: Recurrence) -> Schedule {
        Schedule {
            time: ClockTime::new(hour, minute, meridiem).unwrap(),
            recurrence,
        }
    }

    #[test]
    fn test_encode_weekly() {
        let s = schedule(9, 30, Meridiem::PM, Recurrence::Weekly(Weekday::Mon));
        assert_eq!(encode(&s).as_str(), "0 30 21 ? * MON");
    }

    #[test]
    fn test_encode_monthly_midnight() {
        let s = schedule(
            12,
            0,
            Meridiem::AM,
            Recurrence::Monthly(DayOfMonth::new(15).unwrap()),
        );
        assert_eq!(encode(&s).as_str(), "0 0 0 15 * ?");
    }

    #[test]
    fn test_encode_daily_and_yearly() {
        let daily = schedule(12, 5, Meridiem::PM, Recurrence::Daily);
        assert_eq!(encode(&daily).as_str(), "0 5 12 * * ?");

        let yearly = schedule(
            7,
            45,
            Meridiem::AM,
            Recurrence::yearly(Month::March, 1).unwrap(),
        );
        assert_eq!(encode(&yearly).as_str(), "0 45 7 1 3 ? *");
    }

    #[test]
    fn test_decode_weekly() {
        let decoded = decode("0 30 21 ? * MON").unwrap();
        assert_eq!(
            decoded,
            schedule(9, 30, Meridiem::PM, Recurrence::Weekly(Weekday::Mon))
        );
    }

    #[test]
    fn test_decode_discards_seconds_and_extra_spaces() {
        let decoded = decode("  45   0 0  15 * ? ").unwrap();
        assert_eq!(
            decoded,
            schedule(
                12,
                0,
                Meridiem::AM,
                Recurrence::Monthly(DayOfMonth::new(15).unwrap())
            )
        );
    }

    #[test]
    fn test_decode_accepts_names_and_quartz_numbers() {
        let yearly = decode("0 0 9 25 DEC ? *").unwrap();
        assert_eq!(yearly.recurrence, Recurrence::yearly(Month::December, 25).unwrap());

        let weekly = decode("0 0 9 ? * 2").unwrap();
        assert_eq!(weekly.recurrence, Recurrence::Weekly(Weekday::Mon));
    }

    #[test]
    fn test_decode_field_count() {
        let err = decode("0 30 21 ? *").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedExpression { ref reason, .. } if reason == "expected 6 or 7 fields, found 5"
        ));
        assert!(decode("").is_err());
        assert!(decode("0 0 0 1 1 ? * 2030").is_err());
    }

    #[test]
    fn test_decode_rejects_bad_shapes() {
        for expression in [
            "0 0 0 ? * ?",
            "0 0 0 1 * MON",
            "0 0 0 * * ? *",
            "0 0 0 1 * ? *",
            "0 0 0 L * ?",
            "0 0/5 0 * * ?",
            "0 0 0 1,15 * ?",
            "0 0 0 ? * FUNDAY",
        ] {
            let err = decode(expression).unwrap_err();
            assert!(
                matches!(err, Error::MalformedExpression { .. }),
                "{expression}: {err:?}"
            );
        }
    }

    #[test]
    fn test_decode_rejects_out_of_range() {
        for expression in [
            "0 60 0 * * ?",
            "0 0 24 * * ?",
            "0 0 0 32 * ?",
            "0 0 0 0 * ?",
            "0 0 0 30 2 ? *",
            "0 0 0 1 13 ? *",
            "0 0 0 ? * 8",
            "x 0 0 * * ?",
            "0 0 99999999999 * * ?",
        ] {
            assert!(decode(expression).is_err(), "{expression}");
        }
    }

    #[test]
    fn test_from_str_normalizes() {
        let expression: ScheduleExpression = "0 0 9 ? * mon".parse().unwrap();
        assert_eq!(expression.as_str(), "0 0 9 ? * MON");
    }
}
