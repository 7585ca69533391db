use clap::{Args, Subcommand};
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::cron::{self, EncodeRequest},
    reports::{CronFormat, Report, TerminalOutput},
};

#[derive(Args)]
pub struct CronCommand {
    #[command(subcommand)]
    action: CronAction,
}

#[derive(Subcommand)]
enum CronAction {
    /// Build a schedule expression from a start time and recurrence
    Encode(EncodeArgs),

    /// Show the start time and recurrence an expression encodes
    Decode(DecodeArgs),
}

#[derive(Args)]
struct EncodeArgs {
    /// Hour on the twelve-hour clock (1-12)
    #[arg(long)]
    hour: u8,

    /// Minute (0-59)
    #[arg(long, default_value_t = 0)]
    minute: u8,

    /// AM or PM
    #[arg(long)]
    meridiem: String,

    /// daily, weekly, monthly or yearly
    #[arg(long)]
    repeat: String,

    /// Weekday for weekly schedules (MON or Monday)
    #[arg(long)]
    weekday: Option<String>,

    /// Day of month for monthly and yearly schedules
    #[arg(long)]
    day: Option<u8>,

    /// Month for yearly schedules (1-12, JUL or July)
    #[arg(long)]
    month: Option<String>,
}

#[derive(Args)]
struct DecodeArgs {
    /// Expression such as "0 30 21 ? * MON"
    expression: String,

    /// Print the schedule form fields as JSON
    #[arg(long)]
    json: bool,
}

impl CronCommand {
    pub fn run(&self) -> Result<()> {
        let report = match &self.action {
            CronAction::Encode(args) => cron::encode(&EncodeRequest {
                hour: args.hour,
                minute: args.minute,
                meridiem: args.meridiem.clone(),
                repeat: args.repeat.clone(),
                weekday: args.weekday.clone(),
                day: args.day,
                month: args.month.clone(),
            }),
            CronAction::Decode(args) => {
                let format = if args.json {
                    CronFormat::Json
                } else {
                    CronFormat::Summary
                };
                cron::decode(&args.expression, format)
            }
        }
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
