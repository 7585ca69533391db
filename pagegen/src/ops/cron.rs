//! Cron operations - schedule expression encoding and decoding.

use pagegen_cron::{RecurrenceKind, Result, Schedule, ScheduleExpression, ScheduleFields, parse_month};

use crate::reports::{CronFormat, CronReport};

/// Schedule form values as given on the command line.
#[derive(Debug, Clone)]
pub struct EncodeRequest {
    pub hour: u8,
    pub minute: u8,
    pub meridiem: String,
    pub repeat: String,
    pub weekday: Option<String>,
    /// Day of month for monthly and yearly schedules.
    pub day: Option<u8>,
    pub month: Option<String>,
}

/// Build the expression for a schedule form.
pub fn encode(request: &EncodeRequest) -> Result<CronReport> {
    let kind: RecurrenceKind = request.repeat.parse()?;
    let month = request.month.as_deref().map(parse_month).transpose()?;

    let fields = ScheduleFields {
        start_hour: request.hour,
        start_minute: request.minute,
        start_am_pm: Some(request.meridiem.parse()?),
        recurrence: Some(kind),
        day_of_week: request.weekday.clone(),
        day_of_month: request.day.filter(|_| kind == RecurrenceKind::Monthly),
        yearly_month: month.and_then(|m| u8::try_from(m.number_from_month()).ok()),
        yearly_day: request.day.filter(|_| kind == RecurrenceKind::Yearly),
    };
    let schedule = Schedule::try_from(fields)?;
    let expression = schedule.encode();
    tracing::debug!(%schedule, %expression, "encoded schedule");

    Ok(CronReport {
        expression,
        schedule,
        format: CronFormat::Expression,
    })
}

/// Recover the schedule form from an expression.
pub fn decode(expression: &str, format: CronFormat) -> Result<CronReport> {
    let expression: ScheduleExpression = expression.parse()?;
    let schedule = expression.decode()?;
    tracing::debug!(%schedule, %expression, "decoded schedule");

    Ok(CronReport {
        expression,
        schedule,
        format,
    })
}
