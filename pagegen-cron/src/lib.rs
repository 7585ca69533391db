//! Schedule expressions for the scheduler service.
//!
//! A schedule form collects a twelve-hour start time and a [`Recurrence`].
//! [`encode`] turns that into a Quartz-style expression such as
//! `0 30 21 ? * MON`; [`decode`] recovers the form state when a stored
//! schedule is edited.
//!
//! ```
//! use chrono::Weekday;
//! use pagegen_cron::{ClockTime, Meridiem, Recurrence, Schedule, decode, encode};
//!
//! let schedule = Schedule {
//!     time: ClockTime::new(9, 30, Meridiem::PM).unwrap(),
//!     recurrence: Recurrence::Weekly(Weekday::Mon),
//! };
//! let expression = encode(&schedule);
//! assert_eq!(expression.as_str(), "0 30 21 ? * MON");
//! assert_eq!(decode(expression.as_str()).unwrap(), schedule);
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod clock;
mod error;
mod expression;
mod recurrence;
mod schedule;

pub use clock::{ClockTime, Hour12, Meridiem, Minute};
pub use error::{Error, Result};
pub use expression::{ScheduleExpression, decode, encode};
pub use recurrence::{
    DayOfMonth, Recurrence, RecurrenceKind, parse_month, parse_weekday, weekday_code,
    weekday_name,
};
pub use schedule::{
    Schedule, ScheduleFields, ScheduleRecord, ScheduleSpec, ScheduleStatus, decode_fields,
};
