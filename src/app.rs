use chrono::{DateTime, NaiveDate, Utc};
use rand::rngs::StdRng;
use sea_orm::DatabaseConnection;
use tracing::{debug, info};

use crate::backup::{BackupDocument, BackupPayload, BACKUP_VERSION};
use crate::clock::Clock;
use crate::db;
use crate::error::AppError;
use crate::model::{
    ActivityLogEntry, AppState, DailyCheckIn, Habit, HabitInput, PomodoroSession,
    PomodoroSessionInput, PomodoroSettings, PomodoroSettingsChanges, Role, StudyGoal,
    StudyGoalChanges, Task, TaskChanges, TaskInput, TaskStatus, Theme, ACTIVITY_LOG_LIMIT,
};
use crate::pomodoro::PhaseOutcome;
use crate::seed;
use crate::snapshot::{self, STORAGE_KEY};
use crate::streak;
use crate::templates::{build_goal, ExamTemplate, GoalDraft};
use crate::util::generate_id;

#[derive(Clone, Debug, PartialEq)]
pub enum StoreEvent {
    /// A mutation was persisted.
    Changed,
    /// The presentation layer should switch to this theme.
    ThemeApplied(Theme),
}

pub type Listener = Box<dyn Fn(&StoreEvent) + Send + Sync>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CheckInOutcome {
    Added,
    Replaced,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SeedReport {
    pub users_generated: usize,
    pub tasks_seeded: usize,
    pub habits_seeded: usize,
    pub check_ins_seeded: usize,
    pub sessions_seeded: usize,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.users_generated == 0 && self.tasks_seeded == 0
    }
}

/// Single owner of all study data. Every mutation writes the full state back
/// to the snapshot slot before returning.
pub struct App {
    db: DatabaseConnection,
    state: AppState,
    clock: Box<dyn Clock>,
    rng: StdRng,
    listeners: Vec<Listener>,
}

impl App {
    /// Rehydrates from the snapshot slot, falling back to defaults.
    pub async fn load(
        db: DatabaseConnection,
        clock: Box<dyn Clock>,
        rng: StdRng,
    ) -> Result<Self, AppError> {
        let state = match db::load_slot(&db, STORAGE_KEY).await? {
            Some(raw) => {
                debug!(bytes = raw.len(), "snapshot loaded");
                snapshot::decode(&raw)
            }
            None => AppState::default(),
        };
        Ok(Self {
            db,
            state,
            clock,
            rng,
            listeners: Vec::new(),
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Registers an observer. It is told the current theme right away.
    pub fn subscribe(&mut self, listener: Listener) {
        listener(&StoreEvent::ThemeApplied(self.state.theme));
        self.listeners.push(listener);
    }

    pub fn find_task(&self, id: &str) -> Option<&Task> {
        self.state.tasks.iter().find(|task| task.id == id)
    }

    pub fn find_habit(&self, id: &str) -> Option<&Habit> {
        self.state.habits.iter().find(|habit| habit.id == id)
    }

    pub fn find_study_goal(&self, id: &str) -> Option<&StudyGoal> {
        self.state.study_goals.iter().find(|goal| goal.id == id)
    }

    pub async fn add_task(&mut self, input: TaskInput) -> Result<Task, AppError> {
        let task = self.insert_task(input);
        self.persist().await?;
        Ok(task)
    }

    pub async fn update_task(
        &mut self,
        id: &str,
        changes: TaskChanges,
    ) -> Result<Option<Task>, AppError> {
        let Some(task) = self.state.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(None);
        };
        changes.apply(task);
        let updated = task.clone();
        self.persist().await?;
        Ok(Some(updated))
    }

    pub async fn delete_task(&mut self, id: &str) -> Result<bool, AppError> {
        let before = self.state.tasks.len();
        self.state.tasks.retain(|task| task.id != id);
        if self.state.tasks.len() == before {
            return Ok(false);
        }
        self.persist().await?;
        Ok(true)
    }

    /// Sets the status; reaching done stamps completedAt. Leaving done keeps
    /// the stamp.
    pub async fn move_task(
        &mut self,
        id: &str,
        status: TaskStatus,
    ) -> Result<Option<Task>, AppError> {
        let now = self.clock.now();
        let Some(task) = self.state.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(None);
        };
        task.status = status;
        if status == TaskStatus::Done {
            task.completed_at = Some(now);
        }
        let moved = task.clone();
        self.push_activity("Task Moved", &format!("to {}", status.as_str()));
        self.persist().await?;
        Ok(Some(moved))
    }

    pub async fn add_habit(&mut self, input: HabitInput) -> Result<Habit, AppError> {
        let habit = self.insert_habit(input);
        self.persist().await?;
        Ok(habit)
    }

    pub async fn toggle_habit_date(
        &mut self,
        id: &str,
        date: NaiveDate,
    ) -> Result<Option<Habit>, AppError> {
        let Some(habit) = self.toggle_habit_in_place(id, date) else {
            return Ok(None);
        };
        self.persist().await?;
        Ok(Some(habit))
    }

    pub async fn delete_habit(&mut self, id: &str) -> Result<bool, AppError> {
        let before = self.state.habits.len();
        self.state.habits.retain(|habit| habit.id != id);
        if self.state.habits.len() == before {
            return Ok(false);
        }
        self.persist().await?;
        Ok(true)
    }

    pub async fn add_pomodoro_session(
        &mut self,
        input: PomodoroSessionInput,
    ) -> Result<PomodoroSession, AppError> {
        let session = self.insert_session(input);
        self.persist().await?;
        Ok(session)
    }

    /// Stores a finished timer phase. Completed phases are also logged;
    /// skipped ones are recorded silently.
    pub async fn record_pomodoro_phase(
        &mut self,
        outcome: PhaseOutcome,
    ) -> Result<PomodoroSession, AppError> {
        let session = self.insert_session(PomodoroSessionInput {
            task_id: None,
            kind: outcome.kind,
            duration: outcome.minutes,
            completed_at: self.clock.now(),
        });
        if !outcome.skipped {
            self.push_activity(
                "Pomodoro Complete",
                &format!("{} session finished", outcome.kind.as_str()),
            );
        }
        self.persist().await?;
        Ok(session)
    }

    pub async fn update_pomodoro_settings(
        &mut self,
        changes: PomodoroSettingsChanges,
    ) -> Result<PomodoroSettings, AppError> {
        changes.apply(&mut self.state.pomodoro_settings);
        self.persist().await?;
        Ok(self.state.pomodoro_settings)
    }

    /// One check-in per date: a second one for the same day replaces the first.
    pub async fn add_check_in(&mut self, check_in: DailyCheckIn) -> Result<CheckInOutcome, AppError> {
        let outcome = self.upsert_check_in(check_in);
        self.persist().await?;
        Ok(outcome)
    }

    pub async fn add_study_goal(&mut self, goal: StudyGoal) -> Result<(), AppError> {
        self.state.study_goals.push(goal);
        self.persist().await
    }

    /// Copies an exam template into a new goal with fresh ids.
    pub async fn add_goal_from_template(
        &mut self,
        template: &ExamTemplate,
        draft: GoalDraft<'_>,
    ) -> Result<StudyGoal, AppError> {
        let goal = build_goal(&mut self.rng, self.clock.now(), template, draft);
        self.state.study_goals.push(goal.clone());
        self.persist().await?;
        Ok(goal)
    }

    pub async fn update_study_goal(
        &mut self,
        id: &str,
        changes: StudyGoalChanges,
    ) -> Result<Option<StudyGoal>, AppError> {
        let Some(goal) = self.state.study_goals.iter_mut().find(|goal| goal.id == id) else {
            return Ok(None);
        };
        changes.apply(goal);
        let updated = goal.clone();
        self.persist().await?;
        Ok(Some(updated))
    }

    pub async fn log_activity(
        &mut self,
        action: &str,
        details: &str,
    ) -> Result<ActivityLogEntry, AppError> {
        let entry = self.push_activity(action, details);
        self.persist().await?;
        Ok(entry)
    }

    pub async fn set_role(&mut self, role: Option<Role>) -> Result<(), AppError> {
        self.state.current_role = role;
        self.persist().await
    }

    pub async fn toggle_theme(&mut self) -> Result<Theme, AppError> {
        let next = self.state.theme.toggled();
        self.notify(&StoreEvent::ThemeApplied(next));
        self.state.theme = next;
        self.persist().await?;
        Ok(next)
    }

    pub async fn toggle_sidebar(&mut self) -> Result<bool, AppError> {
        self.state.sidebar_collapsed = !self.state.sidebar_collapsed;
        self.persist().await?;
        Ok(self.state.sidebar_collapsed)
    }

    pub async fn set_background(&mut self, background: Option<String>) -> Result<(), AppError> {
        self.state.background = background;
        self.persist().await
    }

    /// Fills empty collections with sample data. Users and the task/habit
    /// bundle are checked independently.
    pub async fn seed_sample_data(&mut self) -> Result<SeedReport, AppError> {
        let now = self.clock.now();
        let today = self.clock.today();
        let mut report = SeedReport::default();

        if self.state.registered_users.is_empty() {
            self.state.registered_users = seed::mock_users(&mut self.rng, now);
            report.users_generated = self.state.registered_users.len();
        }

        if self.state.tasks.is_empty() {
            for input in seed::sample_tasks(now) {
                self.insert_task(input);
                report.tasks_seeded += 1;
            }

            for input in seed::sample_habits() {
                let habit = self.insert_habit(input);
                for date in seed::habit_backfill(&mut self.rng, today) {
                    self.toggle_habit_in_place(&habit.id, date);
                }
                report.habits_seeded += 1;
            }

            for check_in in seed::sample_check_ins(&mut self.rng, today) {
                self.upsert_check_in(check_in);
                report.check_ins_seeded += 1;
            }

            for session in seed::sample_sessions(&mut self.rng, now) {
                self.insert_session(session);
                report.sessions_seeded += 1;
            }
        }

        if report.is_empty() {
            return Ok(report);
        }
        info!(
            users = report.users_generated,
            tasks = report.tasks_seeded,
            "sample data seeded"
        );
        self.persist().await?;
        Ok(report)
    }

    pub fn export_backup(&self) -> BackupDocument {
        BackupDocument {
            tasks: self.state.tasks.clone(),
            habits: self.state.habits.clone(),
            pomodoro_sessions: self.state.pomodoro_sessions.clone(),
            check_ins: self.state.check_ins.clone(),
            study_goals: self.state.study_goals.clone(),
            pomodoro_settings: self.state.pomodoro_settings,
            theme: self.state.theme,
            timestamp: self.clock.now(),
            version: BACKUP_VERSION.to_string(),
        }
    }

    /// Overwrites the backed-up collections wholesale.
    pub async fn restore_backup(&mut self, payload: BackupPayload) -> Result<(), AppError> {
        let BackupPayload {
            tasks,
            habits,
            pomodoro_sessions,
            check_ins,
            study_goals,
            pomodoro_settings,
            theme,
        } = payload;

        self.state.tasks = tasks;
        self.state.habits = habits.unwrap_or_default();
        self.state.pomodoro_sessions = pomodoro_sessions.unwrap_or_default();
        self.state.check_ins = check_ins.unwrap_or_default();
        self.state.study_goals = study_goals.unwrap_or_default();
        if let Some(settings) = pomodoro_settings {
            self.state.pomodoro_settings = settings;
        }
        self.state.theme = theme.unwrap_or_default();
        info!(tasks = self.state.tasks.len(), "backup restored");
        self.notify(&StoreEvent::ThemeApplied(self.state.theme));
        self.persist().await
    }

    /// Drops the stored snapshot and returns to an empty store.
    pub async fn reset(&mut self) -> Result<(), AppError> {
        db::delete_slot(&self.db, STORAGE_KEY).await?;
        self.state = AppState::default();
        info!("store cleared");
        self.notify(&StoreEvent::ThemeApplied(self.state.theme));
        self.notify(&StoreEvent::Changed);
        Ok(())
    }

    pub fn new_id(&mut self) -> String {
        generate_id(&mut self.rng, self.clock.now())
    }

    fn insert_task(&mut self, input: TaskInput) -> Task {
        let task = Task {
            id: self.new_id(),
            title: input.title,
            description: input.description,
            status: input.status,
            priority: input.priority,
            subject: input.subject,
            chapter: input.chapter,
            estimated_minutes: input.estimated_minutes,
            actual_minutes: 0,
            subtasks: input.subtasks,
            due_date: input.due_date,
            created_at: self.clock.now(),
            completed_at: input.completed_at,
            tags: input.tags,
            is_timer_running: false,
            timer_started_at: None,
        };
        self.state.tasks.push(task.clone());
        self.push_activity("Task Created", &task.title);
        task
    }

    fn insert_habit(&mut self, input: HabitInput) -> Habit {
        let habit = Habit {
            id: self.new_id(),
            name: input.name,
            icon: input.icon,
            color: input.color,
            completed_dates: Default::default(),
            streak: 0,
            best_streak: 0,
            created_at: self.clock.now(),
        };
        self.state.habits.push(habit.clone());
        habit
    }

    fn toggle_habit_in_place(&mut self, id: &str, date: NaiveDate) -> Option<Habit> {
        let today = self.clock.today();
        let habit = self.state.habits.iter_mut().find(|habit| habit.id == id)?;
        streak::toggle_habit_date(habit, date, today);
        Some(habit.clone())
    }

    fn insert_session(&mut self, input: PomodoroSessionInput) -> PomodoroSession {
        let session = PomodoroSession {
            id: self.new_id(),
            task_id: input.task_id,
            kind: input.kind,
            duration: input.duration,
            completed_at: input.completed_at,
        };
        self.state.pomodoro_sessions.push(session.clone());
        session
    }

    fn upsert_check_in(&mut self, check_in: DailyCheckIn) -> CheckInOutcome {
        match self
            .state
            .check_ins
            .iter_mut()
            .find(|existing| existing.date == check_in.date)
        {
            Some(existing) => {
                *existing = check_in;
                CheckInOutcome::Replaced
            }
            None => {
                self.state.check_ins.push(check_in);
                CheckInOutcome::Added
            }
        }
    }

    fn push_activity(&mut self, action: &str, details: &str) -> ActivityLogEntry {
        let entry = ActivityLogEntry {
            id: self.new_id(),
            action: action.to_string(),
            details: details.to_string(),
            timestamp: self.clock.now(),
        };
        self.state.activity_log.insert(0, entry.clone());
        self.state.activity_log.truncate(ACTIVITY_LOG_LIMIT);
        entry
    }

    async fn persist(&self) -> Result<(), AppError> {
        let raw = snapshot::encode(&self.state)?;
        db::save_slot(&self.db, STORAGE_KEY, &raw).await?;
        debug!(bytes = raw.len(), "snapshot written");
        self.notify(&StoreEvent::Changed);
        Ok(())
    }

    fn notify(&self, event: &StoreEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backup::parse_backup;
    use crate::clock::FixedClock;
    use crate::model::{PomodoroKind, Priority};
    use chrono::{Duration, TimeZone};
    use rand::SeedableRng;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).unwrap()
    }

    async fn open_app(dir: &TempDir) -> App {
        let db_path = db::resolve_db_path(dir.path());
        db::ensure_parent_dir(&db_path).expect("ensure parent");
        let conn = db::connect(&db_path).await.expect("connect db");
        db::ensure_schema(&conn).await.expect("ensure schema");
        App::load(
            conn,
            Box::new(FixedClock(fixed_now())),
            StdRng::seed_from_u64(7),
        )
        .await
        .expect("load app")
    }

    async fn setup_app() -> (TempDir, App) {
        let dir = TempDir::new().expect("temp dir");
        let app = open_app(&dir).await;
        (dir, app)
    }

    fn read_habit() -> HabitInput {
        HabitInput {
            name: "Read".to_string(),
            icon: "📖".to_string(),
            color: "#6366f1".to_string(),
        }
    }

    fn check_in(date: NaiveDate, mood: u8) -> DailyCheckIn {
        DailyCheckIn {
            date,
            mood,
            energy: 3,
            focus_score: 70,
            tasks_completed: 2,
            total_minutes: 200,
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn add_task_fills_store_fields_and_logs() {
        let (_dir, mut app) = setup_app().await;
        let mut input = TaskInput::new("");
        input.priority = Priority::P1;
        let task = app.add_task(input).await.expect("add task");

        assert!(!task.id.is_empty());
        assert_eq!(task.title, "");
        assert_eq!(task.created_at, fixed_now());
        assert_eq!(task.actual_minutes, 0);
        assert!(!task.is_timer_running);
        assert_eq!(app.state().tasks.len(), 1);
        assert_eq!(app.state().activity_log[0].action, "Task Created");
    }

    #[tokio::test]
    async fn update_and_delete_missing_ids_are_noops() {
        let (_dir, mut app) = setup_app().await;
        app.add_task(TaskInput::new("Keep")).await.expect("add task");
        let before = app.state().clone();

        let updated = app
            .update_task(
                "missing",
                TaskChanges {
                    title: Some("x".to_string()),
                    ..Default::default()
                },
            )
            .await
            .expect("update");
        assert!(updated.is_none());
        assert!(!app.delete_task("missing").await.expect("delete"));
        assert!(app
            .move_task("missing", TaskStatus::Done)
            .await
            .expect("move")
            .is_none());
        assert!(!app.delete_habit("missing").await.expect("delete habit"));
        assert_eq!(app.state(), &before);
    }

    #[tokio::test]
    async fn update_task_merges_only_given_fields() {
        let (_dir, mut app) = setup_app().await;
        let mut input = TaskInput::new("Polity");
        input.subject = "Polity".to_string();
        input.estimated_minutes = 90;
        let task = app.add_task(input).await.expect("add task");

        let updated = app
            .update_task(
                &task.id,
                TaskChanges {
                    actual_minutes: Some(35),
                    tags: Some(vec!["UPSC".to_string()]),
                    ..Default::default()
                },
            )
            .await
            .expect("update")
            .expect("task exists");
        assert_eq!(updated.actual_minutes, 35);
        assert_eq!(updated.tags, vec!["UPSC".to_string()]);
        assert_eq!(updated.subject, "Polity");
        assert_eq!(updated.estimated_minutes, 90);
    }

    #[tokio::test]
    async fn move_to_done_stamps_completed_at_and_keeps_it() {
        let (_dir, mut app) = setup_app().await;
        let task = app.add_task(TaskInput::new("Essay")).await.expect("add task");

        let done = app
            .move_task(&task.id, TaskStatus::Done)
            .await
            .expect("move")
            .expect("task");
        assert_eq!(done.completed_at, Some(fixed_now()));

        let back = app
            .move_task(&task.id, TaskStatus::Review)
            .await
            .expect("move")
            .expect("task");
        assert_eq!(back.status, TaskStatus::Review);
        assert_eq!(back.completed_at, Some(fixed_now()));
        assert_eq!(app.state().activity_log[0].details, "to review");
        assert_eq!(app.state().activity_log[1].details, "to done");
    }

    #[tokio::test]
    async fn habit_scenario_keeps_best_streak() {
        let (_dir, mut app) = setup_app().await;
        let habit = app.add_habit(read_habit()).await.expect("add habit");
        assert_eq!(habit.streak, 0);
        assert_eq!(habit.best_streak, 0);
        assert!(habit.completed_dates.is_empty());

        let today = app.today();
        let once = app
            .toggle_habit_date(&habit.id, today)
            .await
            .expect("toggle")
            .expect("habit");
        assert_eq!((once.streak, once.best_streak), (1, 1));

        let twice = app
            .toggle_habit_date(&habit.id, today)
            .await
            .expect("toggle")
            .expect("habit");
        assert_eq!((twice.streak, twice.best_streak), (0, 1));
        assert!(twice.completed_dates.is_empty());
    }

    #[tokio::test]
    async fn run_ending_yesterday_is_not_a_streak() {
        let (_dir, mut app) = setup_app().await;
        let habit = app.add_habit(read_habit()).await.expect("add habit");
        let today = app.today();
        for offset in 1..=5 {
            app.toggle_habit_date(&habit.id, today - Duration::days(offset))
                .await
                .expect("toggle");
        }
        let habit = app.find_habit(&habit.id).expect("habit");
        assert_eq!(habit.streak, 0);
        assert_eq!(habit.completed_dates.len(), 5);

        let id = habit.id.clone();
        let closed = app
            .toggle_habit_date(&id, today)
            .await
            .expect("toggle")
            .expect("habit");
        assert_eq!(closed.streak, 6);
        assert_eq!(closed.best_streak, 6);
    }

    #[tokio::test]
    async fn activity_log_is_capped_newest_first() {
        let (_dir, mut app) = setup_app().await;
        for idx in 0..51 {
            app.log_activity("Note", &format!("entry {idx}"))
                .await
                .expect("log");
        }
        let log = &app.state().activity_log;
        assert_eq!(log.len(), 50);
        assert_eq!(log[0].details, "entry 50");
        assert_eq!(log[49].details, "entry 1");
        assert!(log.iter().all(|entry| entry.details != "entry 0"));
    }

    #[tokio::test]
    async fn check_in_for_same_day_replaces_previous() {
        let (_dir, mut app) = setup_app().await;
        let today = app.today();
        let first = app.add_check_in(check_in(today, 3)).await.expect("check in");
        let second = app.add_check_in(check_in(today, 5)).await.expect("check in");
        let other = app
            .add_check_in(check_in(today - Duration::days(1), 4))
            .await
            .expect("check in");

        assert_eq!(first, CheckInOutcome::Added);
        assert_eq!(second, CheckInOutcome::Replaced);
        assert_eq!(other, CheckInOutcome::Added);
        assert_eq!(app.state().check_ins.len(), 2);
        assert_eq!(app.state().check_ins[0].mood, 5);
    }

    #[tokio::test]
    async fn settings_merge_without_validation() {
        let (_dir, mut app) = setup_app().await;
        let settings = app
            .update_pomodoro_settings(PomodoroSettingsChanges {
                focus_duration: Some(0),
                sessions_before_long_break: Some(9),
                ..Default::default()
            })
            .await
            .expect("settings");
        assert_eq!(settings.focus_duration, 0);
        assert_eq!(settings.break_duration, 5);
        assert_eq!(settings.long_break_duration, 15);
        assert_eq!(settings.sessions_before_long_break, 9);
    }

    #[tokio::test]
    async fn pomodoro_phases_append_sessions() {
        let (_dir, mut app) = setup_app().await;
        app.record_pomodoro_phase(PhaseOutcome {
            kind: PomodoroKind::Focus,
            minutes: 25,
            skipped: false,
        })
        .await
        .expect("complete");
        app.record_pomodoro_phase(PhaseOutcome {
            kind: PomodoroKind::Break,
            minutes: 2,
            skipped: true,
        })
        .await
        .expect("skip");

        let sessions = &app.state().pomodoro_sessions;
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[1].kind, PomodoroKind::Break);
        assert_eq!(sessions[1].duration, 2);
        let log = &app.state().activity_log;
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].action, "Pomodoro Complete");
        assert_eq!(log[0].details, "focus session finished");
    }

    #[tokio::test]
    async fn theme_toggle_notifies_listeners() {
        let (_dir, mut app) = setup_app().await;
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        app.subscribe(Box::new(move |event| {
            sink.lock().expect("lock").push(event.clone());
        }));

        let theme = app.toggle_theme().await.expect("toggle");
        assert_eq!(theme, Theme::Light);
        let events = events.lock().expect("lock").clone();
        assert_eq!(
            events,
            vec![
                StoreEvent::ThemeApplied(Theme::Dark),
                StoreEvent::ThemeApplied(Theme::Light),
                StoreEvent::Changed,
            ]
        );
    }

    #[tokio::test]
    async fn state_survives_reload() {
        let dir = TempDir::new().expect("temp dir");
        let mut app = open_app(&dir).await;
        let task = app.add_task(TaskInput::new("Persist me")).await.expect("add");
        app.set_role(Some(Role::Admin)).await.expect("role");
        app.toggle_sidebar().await.expect("sidebar");
        app.set_background(Some("aurora".to_string()))
            .await
            .expect("background");
        let expected = app.state().clone();
        drop(app);

        let reloaded = open_app(&dir).await;
        assert_eq!(reloaded.state(), &expected);
        assert_eq!(reloaded.find_task(&task.id).map(|t| t.title.as_str()), Some("Persist me"));
    }

    #[tokio::test]
    async fn seeding_is_idempotent_per_collection() {
        let (_dir, mut app) = setup_app().await;
        let first = app.seed_sample_data().await.expect("seed");
        assert_eq!(first.users_generated, 15);
        assert_eq!(first.tasks_seeded, 8);
        assert_eq!(first.habits_seeded, 6);
        assert_eq!(first.check_ins_seeded, 14);
        assert_eq!(first.sessions_seeded, 20);
        for habit in &app.state().habits {
            assert!((3..=9).contains(&habit.completed_dates.len()));
            assert_eq!(habit.streak, 0);
        }
        let task_count = app.state().tasks.len();

        let second = app.seed_sample_data().await.expect("seed again");
        assert!(second.is_empty());
        assert_eq!(app.state().tasks.len(), task_count);
        assert_eq!(app.state().registered_users.len(), 15);
    }

    #[tokio::test]
    async fn seeding_refills_tasks_but_not_users() {
        let (_dir, mut app) = setup_app().await;
        app.seed_sample_data().await.expect("seed");
        let users = app.state().registered_users.clone();
        let ids: Vec<String> = app.state().tasks.iter().map(|t| t.id.clone()).collect();
        for id in ids {
            app.delete_task(&id).await.expect("delete");
        }

        let report = app.seed_sample_data().await.expect("reseed");
        assert_eq!(report.users_generated, 0);
        assert_eq!(report.tasks_seeded, 8);
        assert_eq!(app.state().registered_users, users);
    }

    #[tokio::test]
    async fn backup_round_trip_restores_collections() {
        let (_dir, mut app) = setup_app().await;
        app.seed_sample_data().await.expect("seed");
        let raw = app
            .export_backup()
            .to_pretty_json()
            .expect("export json");
        let before_reset = app.state().clone();

        app.reset().await.expect("reset");
        assert!(app.state().tasks.is_empty());

        let payload = parse_backup(&raw).expect("parse");
        app.restore_backup(payload).await.expect("restore");
        assert_eq!(app.state().tasks, before_reset.tasks);
        assert_eq!(app.state().habits, before_reset.habits);
        assert_eq!(app.state().pomodoro_sessions, before_reset.pomodoro_sessions);
        assert_eq!(app.state().check_ins, before_reset.check_ins);
    }

    #[tokio::test]
    async fn restore_fills_missing_collections_with_defaults() {
        let (_dir, mut app) = setup_app().await;
        app.add_habit(read_habit()).await.expect("habit");
        app.update_pomodoro_settings(PomodoroSettingsChanges {
            focus_duration: Some(45),
            ..Default::default()
        })
        .await
        .expect("settings");
        app.toggle_theme().await.expect("theme");

        let payload = parse_backup(r#"{"version": "1.0.0", "tasks": []}"#).expect("parse");
        app.restore_backup(payload).await.expect("restore");
        assert!(app.state().habits.is_empty());
        assert_eq!(app.state().pomodoro_settings.focus_duration, 45);
        assert_eq!(app.state().theme, Theme::Dark);
    }

    #[tokio::test]
    async fn reset_clears_stored_snapshot() {
        let dir = TempDir::new().expect("temp dir");
        let mut app = open_app(&dir).await;
        app.add_task(TaskInput::new("Gone soon")).await.expect("add");
        app.reset().await.expect("reset");
        drop(app);

        let reloaded = open_app(&dir).await;
        assert_eq!(reloaded.state(), &AppState::default());
    }

    #[tokio::test]
    async fn goal_from_template_is_stored() {
        let (_dir, mut app) = setup_app().await;
        let template = crate::templates::find_template("UPSC CSE").expect("template");
        let goal = app
            .add_goal_from_template(
                template,
                GoalDraft {
                    name: "Mains",
                    target_date: "2027-09-01",
                    hours_per_chapter: 2.5,
                },
            )
            .await
            .expect("add goal");
        assert_eq!(goal.chapter_progress(), (0, 34));
        assert_eq!(app.find_study_goal(&goal.id), Some(&goal));
    }

    #[tokio::test]
    async fn study_goal_update_merges_by_id() {
        let (_dir, mut app) = setup_app().await;
        let goal = StudyGoal {
            id: "goal-1".to_string(),
            name: "Prelims".to_string(),
            template: "UPSC CSE".to_string(),
            subjects: Vec::new(),
            target_date: "2027-05-25".to_string(),
            created_at: fixed_now(),
        };
        app.add_study_goal(goal).await.expect("add goal");
        let updated = app
            .update_study_goal(
                "goal-1",
                StudyGoalChanges {
                    name: Some("Prelims 2027".to_string()),
                    ..Default::default()
                },
            )
            .await
            .expect("update")
            .expect("goal");
        assert_eq!(updated.name, "Prelims 2027");
        assert_eq!(updated.target_date, "2027-05-25");
        assert!(app
            .update_study_goal("nope", StudyGoalChanges::default())
            .await
            .expect("update")
            .is_none());
    }
}
