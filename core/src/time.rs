use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::{Duration, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::validation::ParseError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    #[default]
    All,
    Week,
    Month,
    Year,
}

impl TimeWindow {
    pub const CHOICES: [TimeWindow; 4] = [
        TimeWindow::All,
        TimeWindow::Year,
        TimeWindow::Month,
        TimeWindow::Week,
    ];

    /// Earliest game date (inclusive) that falls inside the window, or `None` for `All`.
    ///
    /// Month and year steps use calendar arithmetic and clamp to the last valid
    /// day, so Mar 31 minus one month is the end of February.
    pub fn start(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            TimeWindow::All => None,
            TimeWindow::Week => Some(today - Duration::days(7)),
            TimeWindow::Month => Some(
                today
                    .checked_sub_months(Months::new(1))
                    .unwrap_or(NaiveDate::MIN),
            ),
            TimeWindow::Year => Some(
                today
                    .checked_sub_months(Months::new(12))
                    .unwrap_or(NaiveDate::MIN),
            ),
        }
    }

    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self.start(today) {
            Some(start) => date >= start,
            None => true,
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimeWindow::All => "all",
            TimeWindow::Week => "week",
            TimeWindow::Month => "month",
            TimeWindow::Year => "year",
        };
        f.write_str(label)
    }
}

impl FromStr for TimeWindow {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "a" => Ok(TimeWindow::All),
            "week" | "w" => Ok(TimeWindow::Week),
            "month" | "m" => Ok(TimeWindow::Month),
            "year" | "y" => Ok(TimeWindow::Year),
            _ => Err(ParseError::UnknownWindow(s.to_string())),
        }
    }
}

/// Start of the current calendar day in local time.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a game date relative to `today`.
///
/// Accepts `today`, `yesterday`, `-Nd`, `-Nw` and `YYYY-MM-DD`.
pub fn parse_game_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Err(anyhow!("Empty date string"));
    }

    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "yesterday" | "yest" => return Ok(today - Duration::days(1)),
        _ => {}
    }

    if let Some(rest) = input.strip_prefix('-') {
        let invalid = || anyhow!("Invalid relative date: {}", input);
        let (unit_at, unit) = rest.char_indices().last().ok_or_else(invalid)?;
        let num_str = &rest[..unit_at];
        if num_str.is_empty() || !num_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let count: i64 = num_str.parse().map_err(|_| invalid())?;
        let delta = match unit.to_ascii_lowercase() {
            'd' => Duration::try_days(count),
            'w' => Duration::try_weeks(count),
            _ => return Err(anyhow!("Unknown unit in relative date: {}", unit)),
        };
        return delta
            .and_then(|d| today.checked_sub_signed(d))
            .ok_or_else(invalid);
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| anyhow!("Could not parse date: {}", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_start() {
        assert_eq!(TimeWindow::Week.start(date(2025, 3, 10)), Some(date(2025, 3, 3)));
    }

    #[test]
    fn test_month_start_uses_calendar_months() {
        assert_eq!(TimeWindow::Month.start(date(2025, 3, 31)), Some(date(2025, 2, 28)));
        assert_eq!(TimeWindow::Month.start(date(2024, 3, 31)), Some(date(2024, 2, 29)));
        assert_eq!(TimeWindow::Month.start(date(2025, 1, 15)), Some(date(2024, 12, 15)));
    }

    #[test]
    fn test_year_start_handles_leap_day() {
        assert_eq!(TimeWindow::Year.start(date(2024, 2, 29)), Some(date(2023, 2, 28)));
        assert_eq!(TimeWindow::Year.start(date(2025, 6, 1)), Some(date(2024, 6, 1)));
    }

    #[test]
    fn test_all_has_no_start() {
        assert_eq!(TimeWindow::All.start(date(2025, 6, 1)), None);
        assert!(TimeWindow::All.contains(date(1990, 1, 1), date(2025, 6, 1)));
    }

    #[test]
    fn test_window_parsing() {
        assert_eq!("Week".parse::<TimeWindow>().unwrap(), TimeWindow::Week);
        assert_eq!("y".parse::<TimeWindow>().unwrap(), TimeWindow::Year);
        assert!("fortnight".parse::<TimeWindow>().is_err());
        assert_eq!(TimeWindow::default(), TimeWindow::All);
    }

    #[test]
    fn test_parse_game_date() {
        let today = date(2025, 3, 10);
        assert_eq!(parse_game_date("today", today).unwrap(), today);
        assert_eq!(parse_game_date("yesterday", today).unwrap(), date(2025, 3, 9));
        assert_eq!(parse_game_date("-3d", today).unwrap(), date(2025, 3, 7));
        assert_eq!(parse_game_date("-2w", today).unwrap(), date(2025, 2, 24));
        assert_eq!(parse_game_date("2024-11-02", today).unwrap(), date(2024, 11, 2));
        assert!(parse_game_date("-3x", today).is_err());
        assert!(parse_game_date("next tuesday", today).is_err());
        assert!(parse_game_date("", today).is_err());
    }

    #[test]
    fn test_parse_game_date_rejects_malformed_relative_dates() {
        let today = date(2025, 3, 10);
        assert!(parse_game_date("-3é", today).is_err());
        assert!(parse_game_date("-é", today).is_err());
        assert!(parse_game_date("-99999999d", today).is_err());
        assert!(parse_game_date("-9999999999999w", today).is_err());
        assert!(parse_game_date("--3d", today).is_err());
        assert!(parse_game_date("-+3d", today).is_err());
        assert!(parse_game_date("-d", today).is_err());
        assert!(parse_game_date("-", today).is_err());
        assert_eq!(parse_game_date("-0d", today).unwrap(), today);
    }
}
