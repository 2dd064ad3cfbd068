use crate::models::{Exercise, StatsResponse};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

const RECENT_ACTIVITY_COUNT: usize = 3;

/// Dashboard summary for a date-descending list of exercises.
pub fn build_stats(exercises: &[Exercise]) -> StatsResponse {
    build_stats_at(Utc::now(), exercises)
}

pub fn build_stats_at(now: DateTime<Utc>, exercises: &[Exercise]) -> StatsResponse {
    let week_start = week_start(now.date_naive())
        .and_hms_opt(0, 0, 0)
        .map(|start| start.and_utc())
        .unwrap_or(now);

    let mut weekly_exercises = 0usize;
    let mut total_calories = 0u64;
    let mut total_minutes = 0u64;

    for exercise in exercises {
        if exercise.date >= week_start {
            weekly_exercises += 1;
        }
        total_calories = total_calories.saturating_add(u64::from(exercise.calories));
        total_minutes = total_minutes.saturating_add(exercise.duration_minutes());
    }

    StatsResponse {
        total_exercises: exercises.len(),
        weekly_exercises,
        total_calories,
        active_hours: minutes_to_hours(total_minutes),
        recent_activities: exercises.iter().take(RECENT_ACTIVITY_COUNT).cloned().collect(),
    }
}

/// Most recent Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

// Hours to one decimal, half rounded up. Done in integer tenths so
// 0.05-hour boundaries do not drift through float division.
fn minutes_to_hours(minutes: u64) -> f64 {
    let tenths = (minutes * 10 + 30) / 60;
    tenths as f64 / 10.0
}
