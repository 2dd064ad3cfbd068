use crate::models::{ChartData, Exercise};
use chrono::{Datelike, Duration, NaiveDate, Utc};

const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn build_chart(exercises: &[Exercise]) -> ChartData {
    build_chart_at(Utc::now().date_naive(), exercises)
}

/// Seven day buckets ending with `today`, oldest first. Exercises are
/// matched by calendar date; anything outside the window is skipped.
pub fn build_chart_at(today: NaiveDate, exercises: &[Exercise]) -> ChartData {
    let days: Vec<NaiveDate> = (0..7)
        .rev()
        .map(|offset| today - Duration::days(offset))
        .collect();

    let mut duration_by_day = vec![0u64; days.len()];
    let mut calories_by_day = vec![0u64; days.len()];

    for exercise in exercises {
        let date = exercise.date.date_naive();
        if let Some(index) = days.iter().position(|day| *day == date) {
            duration_by_day[index] += exercise.duration_minutes();
            calories_by_day[index] += u64::from(exercise.calories);
        }
    }

    ChartData {
        labels: days
            .iter()
            .map(|day| DAY_LABELS[day.weekday().num_days_from_sunday() as usize].to_string())
            .collect(),
        duration_by_day,
        calories_by_day,
    }
}
