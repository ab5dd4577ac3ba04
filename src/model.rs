use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const ACTIVITY_LOG_LIMIT: usize = 50;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Review,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Review => "review",
            Self::Done => "done",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Priority {
    P1,
    P2,
    P3,
    P4,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
            Self::P4 => "P4",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PomodoroKind {
    Focus,
    Break,
    LongBreak,
}

impl PomodoroKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Focus => "focus",
            Self::Break => "break",
            Self::LongBreak => "long-break",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserPlan {
    Free,
    Pro,
}

impl UserPlan {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubTask {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub chapter: String,
    #[serde(default)]
    pub estimated_minutes: u32,
    #[serde(default)]
    pub actual_minutes: u32,
    #[serde(default)]
    pub subtasks: Vec<SubTask>,
    #[serde(default)]
    pub due_date: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_timer_running: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timer_started_at: Option<i64>,
}

/// Caller-supplied fields of a new task. The store fills in id, createdAt,
/// actualMinutes and the timer flag.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskInput {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub subject: String,
    pub chapter: String,
    pub estimated_minutes: u32,
    pub subtasks: Vec<SubTask>,
    pub due_date: String,
    pub completed_at: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
}

impl TaskInput {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status: TaskStatus::Todo,
            priority: Priority::P3,
            subject: String::new(),
            chapter: String::new(),
            estimated_minutes: 0,
            subtasks: Vec::new(),
            due_date: String::new(),
            completed_at: None,
            tags: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub subject: Option<String>,
    pub chapter: Option<String>,
    pub estimated_minutes: Option<u32>,
    pub actual_minutes: Option<u32>,
    pub subtasks: Option<Vec<SubTask>>,
    pub due_date: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
    pub tags: Option<Vec<String>>,
    pub is_timer_running: Option<bool>,
    pub timer_started_at: Option<i64>,
}

impl TaskChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.subject.is_none()
            && self.chapter.is_none()
            && self.estimated_minutes.is_none()
            && self.actual_minutes.is_none()
            && self.subtasks.is_none()
            && self.due_date.is_none()
            && self.completed_at.is_none()
            && self.tags.is_none()
            && self.is_timer_running.is_none()
            && self.timer_started_at.is_none()
    }

    pub fn apply(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(subject) = self.subject {
            task.subject = subject;
        }
        if let Some(chapter) = self.chapter {
            task.chapter = chapter;
        }
        if let Some(minutes) = self.estimated_minutes {
            task.estimated_minutes = minutes;
        }
        if let Some(minutes) = self.actual_minutes {
            task.actual_minutes = minutes;
        }
        if let Some(subtasks) = self.subtasks {
            task.subtasks = subtasks;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(completed_at) = self.completed_at {
            task.completed_at = Some(completed_at);
        }
        if let Some(tags) = self.tags {
            task.tags = tags;
        }
        if let Some(running) = self.is_timer_running {
            task.is_timer_running = running;
        }
        if let Some(started) = self.timer_started_at {
            task.timer_started_at = Some(started);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub completed_dates: BTreeSet<NaiveDate>,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub best_streak: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HabitInput {
    pub name: String,
    pub icon: String,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PomodoroSession {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: PomodoroKind,
    pub duration: u32,
    pub completed_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PomodoroSessionInput {
    pub task_id: Option<String>,
    pub kind: PomodoroKind,
    pub duration: u32,
    pub completed_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PomodoroSettings {
    pub focus_duration: u32,
    pub break_duration: u32,
    pub long_break_duration: u32,
    pub sessions_before_long_break: u32,
}

impl Default for PomodoroSettings {
    fn default() -> Self {
        Self {
            focus_duration: 25,
            break_duration: 5,
            long_break_duration: 15,
            sessions_before_long_break: 4,
        }
    }
}

impl PomodoroSettings {
    pub fn minutes_for(&self, kind: PomodoroKind) -> u32 {
        match kind {
            PomodoroKind::Focus => self.focus_duration,
            PomodoroKind::Break => self.break_duration,
            PomodoroKind::LongBreak => self.long_break_duration,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PomodoroSettingsChanges {
    pub focus_duration: Option<u32>,
    pub break_duration: Option<u32>,
    pub long_break_duration: Option<u32>,
    pub sessions_before_long_break: Option<u32>,
}

impl PomodoroSettingsChanges {
    pub fn is_empty(&self) -> bool {
        self.focus_duration.is_none()
            && self.break_duration.is_none()
            && self.long_break_duration.is_none()
            && self.sessions_before_long_break.is_none()
    }

    pub fn apply(self, settings: &mut PomodoroSettings) {
        if let Some(value) = self.focus_duration {
            settings.focus_duration = value;
        }
        if let Some(value) = self.break_duration {
            settings.break_duration = value;
        }
        if let Some(value) = self.long_break_duration {
            settings.long_break_duration = value;
        }
        if let Some(value) = self.sessions_before_long_break {
            settings.sessions_before_long_break = value;
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCheckIn {
    pub date: NaiveDate,
    pub mood: u8,
    pub energy: u8,
    pub focus_score: u32,
    pub tasks_completed: u32,
    pub total_minutes: u32,
    #[serde(default)]
    pub notes: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyChapter {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub estimated_hours: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudySubject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub chapters: Vec<StudyChapter>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyGoal {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub template: String,
    #[serde(default)]
    pub subjects: Vec<StudySubject>,
    #[serde(default)]
    pub target_date: String,
    pub created_at: DateTime<Utc>,
}

impl StudyGoal {
    /// Returns (completed, total) chapter counts across all subjects.
    pub fn chapter_progress(&self) -> (usize, usize) {
        self.subjects
            .iter()
            .flat_map(|subject| subject.chapters.iter())
            .fold((0, 0), |(done, total), chapter| {
                (done + usize::from(chapter.completed), total + 1)
            })
    }
}

#[derive(Clone, Debug, Default)]
pub struct StudyGoalChanges {
    pub name: Option<String>,
    pub template: Option<String>,
    pub subjects: Option<Vec<StudySubject>>,
    pub target_date: Option<String>,
}

impl StudyGoalChanges {
    pub fn apply(self, goal: &mut StudyGoal) {
        if let Some(name) = self.name {
            goal.name = name;
        }
        if let Some(template) = self.template {
            goal.template = template;
        }
        if let Some(subjects) = self.subjects {
            goal.subjects = subjects;
        }
        if let Some(target_date) = self.target_date {
            goal.target_date = target_date;
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub joined_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
    pub device: String,
    pub os: String,
    pub browser: String,
    pub location: String,
    pub tasks_completed: u32,
    pub total_focus_minutes: u32,
    pub habits_active: u32,
    pub streak: u32,
    pub plan: UserPlan,
    pub status: UserStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    pub id: String,
    pub action: String,
    pub details: String,
    pub timestamp: DateTime<Utc>,
}

/// Everything the store owns. Serialized as a whole into the snapshot slot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub current_role: Option<Role>,
    pub theme: Theme,
    pub sidebar_collapsed: bool,
    pub background: Option<String>,
    pub tasks: Vec<Task>,
    pub habits: Vec<Habit>,
    pub pomodoro_sessions: Vec<PomodoroSession>,
    pub pomodoro_settings: PomodoroSettings,
    pub check_ins: Vec<DailyCheckIn>,
    pub study_goals: Vec<StudyGoal>,
    pub activity_log: Vec<ActivityLogEntry>,
    pub registered_users: Vec<RegisteredUser>,
}
