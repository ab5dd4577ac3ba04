use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::model::{DailyCheckIn, Habit, PomodoroSession, PomodoroSettings, StudyGoal, Task, Theme};
use crate::util::format_timestamp;

pub const BACKUP_VERSION: &str = "1.0.0";
pub const RESTORED_MESSAGE: &str = "Data restored successfully";

const CSV_HEADER: [&str; 7] = [
    "Title",
    "Subject",
    "Status",
    "Priority",
    "Due Date",
    "Estimated Min",
    "Created",
];

#[derive(Error, Debug)]
pub enum BackupError {
    #[error("Failed to parse backup file")]
    Unreadable(#[source] serde_json::Error),
    #[error("Invalid backup file format")]
    InvalidFormat,
    #[error("Failed to read backup file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    pub tasks: Vec<Task>,
    pub habits: Vec<Habit>,
    pub pomodoro_sessions: Vec<PomodoroSession>,
    pub check_ins: Vec<DailyCheckIn>,
    pub study_goals: Vec<StudyGoal>,
    pub pomodoro_settings: PomodoroSettings,
    pub theme: Theme,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

/// What an accepted backup overwrites. Collections missing from the file
/// become empty; settings missing from the file keep their current value.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupPayload {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub habits: Option<Vec<Habit>>,
    #[serde(default)]
    pub pomodoro_sessions: Option<Vec<PomodoroSession>>,
    #[serde(default)]
    pub check_ins: Option<Vec<DailyCheckIn>>,
    #[serde(default)]
    pub study_goals: Option<Vec<StudyGoal>>,
    #[serde(default)]
    pub pomodoro_settings: Option<PomodoroSettings>,
    #[serde(default)]
    pub theme: Option<Theme>,
}

impl BackupDocument {
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

pub fn default_backup_file_name(today: NaiveDate) -> String {
    format!("studyflow-backup-{}.json", today.format("%Y-%m-%d"))
}

/// Validates and decodes a backup document. Nothing is applied here, so a
/// rejected file never touches the store.
pub fn parse_backup(raw: &str) -> Result<BackupPayload, BackupError> {
    let value: Value = serde_json::from_str(raw).map_err(BackupError::Unreadable)?;
    if !is_truthy(value.get("version")) || !is_truthy(value.get("tasks")) {
        return Err(BackupError::InvalidFormat);
    }
    serde_json::from_value(value).map_err(BackupError::Unreadable)
}

pub async fn read_backup_file(path: &Path) -> Result<BackupPayload, BackupError> {
    let raw = tokio::fs::read_to_string(path).await?;
    parse_backup(&raw)
}

/// Title,Subject,Status,Priority,Due Date,Estimated Min,Created
///
/// Cells are joined as-is; commas inside a title shift the columns.
pub fn tasks_to_csv(tasks: &[Task]) -> String {
    let mut lines = Vec::with_capacity(tasks.len() + 1);
    lines.push(CSV_HEADER.join(","));
    for task in tasks {
        let cells = [
            task.title.clone(),
            task.subject.clone(),
            task.status.as_str().to_string(),
            task.priority.as_str().to_string(),
            task.due_date.clone(),
            task.estimated_minutes.to_string(),
            format_timestamp(task.created_at),
        ];
        lines.push(cells.join(","));
    }
    lines.join("\n")
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
