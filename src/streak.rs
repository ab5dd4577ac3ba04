use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};

use crate::model::Habit;

pub const STREAK_LOOKBACK_DAYS: i64 = 365;

/// Counts consecutive completed days ending at `today`. A missing `today`
/// yields 0 even when yesterday closes a long run.
pub fn current_streak(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut streak = 0;
    for offset in 0..STREAK_LOOKBACK_DAYS {
        let day = today - Duration::days(offset);
        if !dates.contains(&day) {
            break;
        }
        streak += 1;
    }
    streak
}

pub fn toggle_habit_date(habit: &mut Habit, date: NaiveDate, today: NaiveDate) {
    if !habit.completed_dates.remove(&date) {
        habit.completed_dates.insert(date);
    }
    habit.streak = current_streak(&habit.completed_dates, today);
    habit.best_streak = habit.best_streak.max(habit.streak);
}
