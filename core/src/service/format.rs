use chrono::NaiveDate;

use crate::model::stats::Stats;

/// Hockey-style save percentage: 91.7 renders as `.917`.
///
/// Not clamped, so a perfect 100.0 renders as `.1000`.
pub fn format_save_percentage(percentage: f64) -> String {
    let thousandths = (percentage * 10.0).round() as i64;
    format!(".{:03}", thousandths)
}

pub fn format_gaa(gaa: f64) -> String {
    format!("{:.2}", gaa)
}

pub fn format_win_percentage(percentage: f64) -> String {
    format!("{:.1}%", percentage)
}

/// Wins-losses-OT/SO losses.
pub fn record_string(stats: &Stats) -> String {
    format!("{}-{}-{}", stats.wins, stats.losses, stats.ot_losses)
}

/// `Jan 5, 2025`. English month names regardless of the user locale.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
