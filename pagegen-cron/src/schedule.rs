use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::{
    ClockTime, DayOfMonth, Error, Meridiem, Recurrence, RecurrenceKind, Result,
    ScheduleExpression, decode, encode,
    recurrence::{month_from_number, weekday_code},
};

/// The part of a schedule an expression carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Schedule {
    pub time: ClockTime,
    pub recurrence: Recurrence,
}

impl Schedule {
    pub fn encode(&self) -> ScheduleExpression {
        encode(self)
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.recurrence, self.time)
    }
}

/// A named schedule as entered on the scheduler form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSpec {
    pub name: String,
    pub start_date: NaiveDate,
    pub time: ClockTime,
    /// `None` means the schedule never ends.
    pub end_date: Option<NaiveDate>,
    pub recurrence: Recurrence,
}

/// Time of day stored with a schedule's end date.
fn end_of_schedule_time() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN)
}

impl ScheduleSpec {
    pub fn schedule(&self) -> Schedule {
        Schedule {
            time: self.time,
            recurrence: self.recurrence,
        }
    }

    pub fn expression(&self) -> ScheduleExpression {
        encode(&self.schedule())
    }

    /// The row persisted by the scheduler service. New records are inactive.
    pub fn to_record(&self) -> ScheduleRecord {
        ScheduleRecord {
            scheduler_name: self.name.clone(),
            start_date_time: self.start_date.and_time(self.time.to_naive_time()),
            end_date_time: self
                .end_date
                .map(|date| date.and_time(end_of_schedule_time())),
            cron_expression: self.expression(),
            status: ScheduleStatus::Inactive,
        }
    }

    /// Rebuild the form state from a stored record.
    ///
    /// Time and recurrence come from the expression; only the dates are
    /// taken from the record's timestamps.
    pub fn from_record(record: &ScheduleRecord) -> Result<Self> {
        let schedule = record.cron_expression.decode()?;
        Ok(Self {
            name: record.scheduler_name.clone(),
            start_date: record.start_date_time.date(),
            time: schedule.time,
            end_date: record.end_date_time.map(|at| at.date()),
            recurrence: schedule.recurrence,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScheduleStatus {
    #[serde(rename = "0")]
    Inactive,
    #[serde(rename = "1")]
    Active,
}

/// A scheduler row as exchanged with the scheduler service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    #[serde(alias = "schedularName")]
    pub scheduler_name: String,
    pub start_date_time: NaiveDateTime,
    pub end_date_time: Option<NaiveDateTime>,
    pub cron_expression: ScheduleExpression,
    pub status: ScheduleStatus,
}

impl ScheduleRecord {
    pub fn with_status(mut self, status: ScheduleStatus) -> Self {
        self.status = status;
        self
    }
}

/// A schedule as flat form scalars.
///
/// Only the field matching `type` is meaningful; the others stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleFields {
    pub start_hour: u8,
    pub start_minute: u8,
    pub start_am_pm: Option<Meridiem>,
    #[serde(rename = "type")]
    pub recurrence: Option<RecurrenceKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<u8>,
    #[serde(rename = "repeatMonthYear", skip_serializing_if = "Option::is_none")]
    pub yearly_month: Option<u8>,
    #[serde(rename = "repeatDayOfMonthyear", skip_serializing_if = "Option::is_none")]
    pub yearly_day: Option<u8>,
}

impl From<&Schedule> for ScheduleFields {
    fn from(schedule: &Schedule) -> Self {
        let mut fields = ScheduleFields {
            start_hour: schedule.time.hour.get(),
            start_minute: schedule.time.minute.get(),
            start_am_pm: Some(schedule.time.meridiem),
            recurrence: Some(schedule.recurrence.kind()),
            ..Default::default()
        };
        match schedule.recurrence {
            Recurrence::Daily => {}
            Recurrence::Weekly(day) => fields.day_of_week = Some(weekday_code(day).to_string()),
            Recurrence::Monthly(day) => fields.day_of_month = Some(day.get()),
            Recurrence::Yearly { month, day } => {
                // number_from_month is 1..=12
                fields.yearly_month = u8::try_from(month.number_from_month()).ok();
                fields.yearly_day = Some(day.get());
            }
        }
        fields
    }
}

impl TryFrom<ScheduleFields> for Schedule {
    type Error = Error;

    fn try_from(fields: ScheduleFields) -> Result<Self> {
        let kind = fields.recurrence.ok_or(Error::MissingField {
            recurrence: "all",
            field: "a recurrence type",
        })?;
        let meridiem = fields.start_am_pm.ok_or(Error::MissingField {
            recurrence: "all",
            field: "AM or PM",
        })?;
        let time = ClockTime::new(fields.start_hour, fields.start_minute, meridiem)?;

        let missing = |field| Error::MissingField {
            recurrence: kind.as_str(),
            field,
        };
        let recurrence = match kind {
            RecurrenceKind::Daily => Recurrence::Daily,
            RecurrenceKind::Weekly => {
                let day = fields.day_of_week.ok_or_else(|| missing("a weekday"))?;
                Recurrence::Weekly(crate::parse_weekday(&day)?)
            }
            RecurrenceKind::Monthly => {
                let day = fields.day_of_month.ok_or_else(|| missing("a day of month"))?;
                Recurrence::Monthly(DayOfMonth::new(day)?)
            }
            RecurrenceKind::Yearly => {
                let month = fields.yearly_month.ok_or_else(|| missing("a month"))?;
                let day = fields.yearly_day.ok_or_else(|| missing("a day of month"))?;
                Recurrence::yearly(month_from_number(month)?, day)?
            }
        };

        Ok(Schedule { time, recurrence })
    }
}

/// Decode an expression straight into form scalars.
pub fn decode_fields(expression: &str) -> Result<ScheduleFields> {
    decode(expression).map(|schedule| ScheduleFields::from(&schedule))
}
