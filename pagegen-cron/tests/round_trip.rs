use chrono::{Month, NaiveDate, Weekday};
use pagegen_cron::{
    ClockTime, DayOfMonth, Error, Meridiem, Recurrence, Schedule, ScheduleSpec, decode, encode,
};

fn recurrences() -> Vec<Recurrence> {
    vec![
        Recurrence::Daily,
        Recurrence::Weekly(Weekday::Mon),
        Recurrence::Weekly(Weekday::Sun),
        Recurrence::Monthly(DayOfMonth::new(1).unwrap()),
        Recurrence::Monthly(DayOfMonth::new(31).unwrap()),
        Recurrence::yearly(Month::January, 1).unwrap(),
        Recurrence::yearly(Month::February, 29).unwrap(),
        Recurrence::yearly(Month::December, 31).unwrap(),
    ]
}

#[test]
fn decode_inverts_encode_for_every_hour() {
    for recurrence in recurrences() {
        for meridiem in [Meridiem::AM, Meridiem::PM] {
            for hour in 1..=12 {
                let schedule = Schedule {
                    time: ClockTime::new(hour, 59, meridiem).unwrap(),
                    recurrence,
                };
                let expression = encode(&schedule);
                assert_eq!(
                    decode(expression.as_str()).unwrap(),
                    schedule,
                    "{expression}"
                );
            }
        }
    }
}

#[test]
fn expressions_have_exactly_one_day_wildcard() {
    for recurrence in recurrences() {
        let schedule = Schedule {
            time: ClockTime::new(3, 15, Meridiem::PM).unwrap(),
            recurrence,
        };
        let expression = encode(&schedule);
        let fields: Vec<&str> = expression.as_str().split(' ').collect();

        let expected_len = if matches!(recurrence, Recurrence::Yearly { .. }) { 7 } else { 6 };
        assert_eq!(fields.len(), expected_len, "{expression}");
        assert_eq!(fields[0], "0");
        assert!(
            (fields[3] == "?") ^ (fields[5] == "?"),
            "{expression} must constrain exactly one day field"
        );
    }
}

#[test]
fn documented_examples() {
    let weekly = Schedule {
        time: ClockTime::new(9, 30, Meridiem::PM).unwrap(),
        recurrence: Recurrence::Weekly(Weekday::Mon),
    };
    assert_eq!(encode(&weekly).as_str(), "0 30 21 ? * MON");
    assert_eq!(decode("0 30 21 ? * MON").unwrap(), weekly);

    let monthly = Schedule {
        time: ClockTime::new(12, 0, Meridiem::AM).unwrap(),
        recurrence: Recurrence::Monthly(DayOfMonth::new(15).unwrap()),
    };
    assert_eq!(encode(&monthly).as_str(), "0 0 0 15 * ?");
}

#[test]
fn seconds_are_not_preserved() {
    let decoded = decode("30 15 8 * * ?").unwrap();
    assert_eq!(encode(&decoded).as_str(), "0 15 8 * * ?");
}

#[test]
fn field_count_mismatch_is_malformed() {
    for expression in ["0 0 0 * *", "0 0 0 1 1 ? * *"] {
        assert!(matches!(
            decode(expression),
            Err(Error::MalformedExpression { .. })
        ));
    }
}

#[test]
fn records_survive_the_edit_flow() {
    let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    for recurrence in recurrences() {
        for end_date in [None, NaiveDate::from_ymd_opt(2026, 6, 1)] {
            let spec = ScheduleSpec {
                name: "csv-export".to_string(),
                start_date: start,
                time: ClockTime::new(12, 30, Meridiem::PM).unwrap(),
                end_date,
                recurrence,
            };
            let record = spec.to_record();
            assert_eq!(ScheduleSpec::from_record(&record).unwrap(), spec);
        }
    }
}
