//! cal: Print a month calendar.

use super::{Command, ExecResult, Outcome};
use crate::session::Session;
use chrono::{Datelike, Local, NaiveDate};

pub struct Cal;

const USAGE: &str = "usage: cal [month year]";

impl Command for Cal {
    fn name(&self) -> &str {
        "cal"
    }

    fn execute(&self, args: &[&str], _session: &mut Session) -> Outcome {
        let (month, year) = match args {
            [] => {
                let today = Local::now().date_naive();
                (today.month(), today.year())
            }
            [month, year] => match (month.parse::<u32>(), year.parse::<i32>()) {
                (Ok(m), Ok(y)) => (m, y),
                _ => return Outcome::Continue(ExecResult::failure(1, USAGE)),
            },
            _ => return Outcome::Continue(ExecResult::failure(1, USAGE)),
        };

        let result = match render_month(year, month) {
            Some(text) => ExecResult::success(text),
            None => ExecResult::failure(1, format!("cal: invalid month/year: {} {}", month, year)),
        };
        Outcome::Continue(result)
    }
}

/// Render one month, weeks starting on Sunday. `None` for an invalid month.
pub fn render_month(year: i32, month: u32) -> Option<String> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let days = next.signed_duration_since(first).num_days();

    let title = format!("{} {}", first.format("%B"), year);
    let mut lines = vec![
        format!("{:^20}", title).trim_end().to_string(),
        "Su Mo Tu We Th Fr Sa".to_string(),
    ];

    let offset = first.weekday().num_days_from_sunday() as usize;
    let mut week: Vec<String> = vec!["  ".to_string(); offset];
    for day in 1..=days {
        week.push(format!("{:>2}", day));
        if week.len() == 7 {
            lines.push(week.join(" ").trim_end().to_string());
            week.clear();
        }
    }
    if !week.is_empty() {
        lines.push(week.join(" "));
    }
    Some(lines.join("\n"))
}
