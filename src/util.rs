use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;

use crate::model::{DailyCheckIn, Habit, StudyGoal, Task};

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Short random prefix followed by the base-36 millisecond timestamp.
pub fn generate_id<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> String {
    let mut id: String = (0..8)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    id.push_str(&to_base36(now.timestamp_millis().max(0) as u64));
    id
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

pub fn format_task_detail(task: &Task) -> String {
    let mut output = String::new();
    output.push_str(&format!("Task ID: {}\n", task.id));
    output.push_str(&format!("Title: {}\n", task.title));
    output.push_str(&format!("Status: {}\n", task.status.as_str()));
    output.push_str(&format!("Priority: {}\n", task.priority.as_str()));
    if !task.description.trim().is_empty() {
        output.push_str(&format!("Description: {}\n", task.description));
    }
    if !task.subject.is_empty() {
        output.push_str(&format!("Subject: {}\n", task.subject));
    }
    if !task.chapter.is_empty() {
        output.push_str(&format!("Chapter: {}\n", task.chapter));
    }
    output.push_str(&format!(
        "Minutes: {} estimated, {} actual\n",
        task.estimated_minutes, task.actual_minutes
    ));
    if !task.due_date.is_empty() {
        output.push_str(&format!("Due: {}\n", task.due_date));
    }
    if !task.tags.is_empty() {
        output.push_str(&format!("Tags: {}\n", task.tags.join(", ")));
    }
    output.push_str(&format!("Created: {}\n", format_datetime(task.created_at)));
    if let Some(completed_at) = task.completed_at {
        output.push_str(&format!("Completed: {}\n", format_datetime(completed_at)));
    }
    output.push('\n');
    if task.subtasks.is_empty() {
        output.push_str("Subtasks: (none)");
        return output;
    }
    let done = task.subtasks.iter().filter(|sub| sub.completed).count();
    output.push_str(&format!("Subtasks: {done}/{}\n", task.subtasks.len()));
    for sub in &task.subtasks {
        let mark = if sub.completed { "x" } else { " " };
        output.push_str(&format!("- [{mark}] {} (subtask id {})\n", sub.title, sub.id));
    }
    output.trim_end().to_string()
}

pub fn format_habit_line(habit: &Habit) -> String {
    format!(
        "{:<22} {} {:<20} streak {:<3} best {:<3} days {}",
        habit.id,
        habit.icon,
        habit.name,
        habit.streak,
        habit.best_streak,
        habit.completed_dates.len()
    )
}

pub fn format_check_in_line(check_in: &DailyCheckIn) -> String {
    format!(
        "{}  mood {}  energy {}  focus {:<3} tasks {:<2} minutes {:<4} {}",
        check_in.date,
        check_in.mood,
        check_in.energy,
        check_in.focus_score,
        check_in.tasks_completed,
        check_in.total_minutes,
        check_in.notes
    )
}

pub fn format_goal_detail(goal: &StudyGoal) -> String {
    let (done, total) = goal.chapter_progress();
    let mut output = String::new();
    output.push_str(&format!("Goal ID: {}\n", goal.id));
    output.push_str(&format!("Name: {}\n", goal.name));
    output.push_str(&format!("Template: {}\n", goal.template));
    if !goal.target_date.is_empty() {
        output.push_str(&format!("Target: {}\n", goal.target_date));
    }
    output.push_str(&format!("Created: {}\n", format_datetime(goal.created_at)));
    output.push_str(&format!("Chapters: {done}/{total}\n"));
    for subject in &goal.subjects {
        let subject_done = subject.chapters.iter().filter(|ch| ch.completed).count();
        output.push_str(&format!(
            "- {} ({}/{})\n",
            subject.name,
            subject_done,
            subject.chapters.len()
        ));
        for chapter in &subject.chapters {
            let mark = if chapter.completed { "x" } else { " " };
            output.push_str(&format!(
                "  - [{mark}] {} ({}h)\n",
                chapter.name, chapter.estimated_hours
            ));
        }
    }
    output.trim_end().to_string()
}
