//! Cron command report data structures.

use pagegen_cron::{Schedule, ScheduleExpression, ScheduleFields};

use super::output::{Output, Report};

/// How a decoded schedule is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CronFormat {
    /// Only the expression, for scripts.
    Expression,
    /// Human-readable fields.
    Summary,
    /// The form fields as JSON.
    Json,
}

/// Report data for an encoded or decoded schedule.
#[derive(Debug)]
pub struct CronReport {
    pub expression: ScheduleExpression,
    pub schedule: Schedule,
    pub format: CronFormat,
}

impl CronReport {
    fn fields(&self) -> ScheduleFields {
        ScheduleFields::from(&self.schedule)
    }
}

impl Report for CronReport {
    fn render(&self, out: &mut dyn Output) {
        match self.format {
            CronFormat::Expression => out.preformatted(self.expression.as_str()),
            CronFormat::Json => match serde_json::to_string_pretty(&self.fields()) {
                Ok(json) => out.preformatted(&json),
                Err(e) => out.error(&format!("failed to serialize schedule: {}", e)),
            },
            CronFormat::Summary => {
                let fields = self.fields();
                out.key_value("Expression", self.expression.as_str());
                out.key_value("Schedule", &self.schedule.to_string());
                out.newline();
                out.key_value_indented("Start time", &self.schedule.time.to_string());
                out.key_value_indented("Repeat", &self.schedule.recurrence.kind().to_string());
                if let Some(day) = &fields.day_of_week {
                    out.key_value_indented("Weekday", day);
                }
                if let Some(day) = fields.day_of_month.or(fields.yearly_day) {
                    out.key_value_indented("Day", &day.to_string());
                }
                if let Some(month) = fields.yearly_month {
                    out.key_value_indented("Month", &month.to_string());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    fn report(expression: &str, format: CronFormat) -> CronReport {
        let expression: ScheduleExpression = expression.parse().unwrap();
        CronReport {
            schedule: expression.decode().unwrap(),
            expression,
            format,
        }
    }

    #[test]
    fn test_expression_format() {
        let mut out = BufferOutput::default();
        report("0 30 21 ? * MON", CronFormat::Expression).render(&mut out);
        assert_eq!(out.lines, ["0 30 21 ? * MON"]);
    }

    #[test]
    fn test_summary_format() {
        let mut out = BufferOutput::default();
        report("0 0 6 25 12 ? *", CronFormat::Summary).render(&mut out);
        assert_eq!(
            out.lines,
            [
                "Expression: 0 0 6 25 12 ? *",
                "Schedule: every year on December 25 at 6:00 AM",
                "",
                "  Start time: 6:00 AM",
                "  Repeat: Yearly",
                "  Day: 25",
                "  Month: 12",
            ]
        );
    }

    #[test]
    fn test_json_format() {
        let mut out = BufferOutput::default();
        report("0 0 9 ? * FRI", CronFormat::Json).render(&mut out);
        let json: serde_json::Value = serde_json::from_str(&out.lines[0]).unwrap();
        assert_eq!(json["type"], "Weekly");
        assert_eq!(json["dayOfWeek"], "FRI");
        assert_eq!(json["startAmPm"], "AM");
    }
}
