mod analytics;
mod app;
mod backup;
mod cli;
mod clock;
mod db;
mod entities;
mod error;
mod model;
mod pomodoro;
mod seed;
mod snapshot;
mod streak;
mod templates;
mod util;

use std::path::PathBuf;
use std::time::Duration;

use clap::{CommandFactory, FromArgMatches};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::analytics::{subject_distribution, AdminSummary, DashboardSummary, UserFilter};
use crate::app::{App, CheckInOutcome, StoreEvent};
use crate::backup::{default_backup_file_name, read_backup_file, tasks_to_csv, RESTORED_MESSAGE};
use crate::cli::{
    ActivityCommand, AdminCommand, AdminUsers, BackupCommand, CheckInAdd, CheckInCommand, Cli,
    Command, GoalAdd, GoalChapter, GoalCommand, GoalUpdate, HabitAdd, HabitCommand,
    HabitToggle, PomodoroCommand, PomodoroKindArg, PomodoroLog, PomodoroRun,
    PomodoroSettingsArgs, PomodoroSkip, PrefsCommand, PriorityArg, RoleArg, SeedArgs,
    TaskAdd, TaskCommand, TaskStatusArg, TaskUpdate, UserPlanArg, UserStatusArg,
};
use crate::clock::SystemClock;
use crate::error::AppError;
use crate::model::{
    DailyCheckIn, HabitInput, PomodoroKind, PomodoroSessionInput, PomodoroSettingsChanges,
    Priority, Role, StudyGoalChanges, SubTask, Task, TaskChanges, TaskInput, TaskStatus,
    UserPlan, UserStatus,
};
use crate::pomodoro::{run_timer, PomodoroTimer};
use crate::templates::{find_template, toggle_chapter, GoalDraft, EXAM_TEMPLATES};
use crate::util::{
    format_check_in_line, format_datetime, format_goal_detail, format_habit_line,
    format_task_detail,
};

const DATA_DIR_NAME: &str = ".studyflow";

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run() -> Result<(), AppError> {
    let matches = Cli::command().get_matches();
    let Cli { data_dir, command } =
        Cli::from_arg_matches(&matches).map_err(|err| AppError::InvalidInput(err.to_string()))?;
    init_tracing();

    let data_dir = resolve_data_dir(data_dir)?;
    let db_path = db::resolve_db_path(&data_dir);
    db::ensure_parent_dir(&db_path)?;
    let mut lock = db::open_lock(&db_path)?;
    let _guard = lock.write()?;

    let db = db::connect(&db_path).await?;
    db::ensure_schema(&db).await?;

    let rng = match &command {
        Command::Seed(SeedArgs { seed: Some(seed) }) => StdRng::seed_from_u64(*seed),
        _ => StdRng::from_entropy(),
    };
    let mut app = App::load(db, Box::new(SystemClock), rng).await?;
    app.subscribe(Box::new(|event| match event {
        StoreEvent::Changed => trace!("store changed"),
        StoreEvent::ThemeApplied(theme) => debug!(theme = theme.as_str(), "theme applied"),
    }));

    match command {
        Command::Task(command) => handle_task(&mut app, command).await,
        Command::Habit(command) => handle_habit(&mut app, command).await,
        Command::Pomodoro(command) => handle_pomodoro(&mut app, command).await,
        Command::Checkin(command) => handle_check_in(&mut app, command).await,
        Command::Goal(command) => handle_goal(&mut app, command).await,
        Command::Activity(command) => handle_activity(&mut app, command).await,
        Command::Prefs(command) => handle_prefs(&mut app, command).await,
        Command::Admin(command) => handle_admin(&app, command),
        Command::Backup(command) => handle_backup(&mut app, command).await,
        Command::Seed(_) => handle_seed(&mut app).await,
        Command::Stats => {
            print_dashboard(&app);
            Ok(())
        }
        Command::Reset => {
            app.reset().await?;
            println!("All data cleared.");
            Ok(())
        }
    }
}

async fn handle_task(app: &mut App, command: TaskCommand) -> Result<(), AppError> {
    match command {
        TaskCommand::Add(args) => handle_task_add(app, args).await,
        TaskCommand::List(args) => {
            let status = args.status.map(task_status_from_arg);
            let tasks: Vec<&Task> = app
                .state()
                .tasks
                .iter()
                .filter(|task| status.map_or(true, |status| task.status == status))
                .collect();
            print_task_list(&tasks);
            Ok(())
        }
        TaskCommand::Show(args) => {
            let task = app
                .find_task(&args.id)
                .ok_or_else(|| not_found("task", &args.id))?;
            println!("{}", format_task_detail(task));
            Ok(())
        }
        TaskCommand::Update(args) => handle_task_update(app, args).await,
        TaskCommand::Move(args) => {
            let status = task_status_from_arg(args.status);
            let task = app
                .move_task(&args.id, status)
                .await?
                .ok_or_else(|| not_found("task", &args.id))?;
            println!("Task ID: {} moved to {}.", task.id, task.status.as_str());
            Ok(())
        }
        TaskCommand::Remove(args) => {
            if !app.delete_task(&args.id).await? {
                return Err(not_found("task", &args.id));
            }
            println!("Removed task ID: {}.", args.id);
            Ok(())
        }
    }
}

async fn handle_task_add(app: &mut App, args: TaskAdd) -> Result<(), AppError> {
    require_non_empty("task title", &args.title)?;
    let subtasks = args
        .subtasks
        .into_iter()
        .map(|title| SubTask {
            id: app.new_id(),
            title,
            completed: false,
        })
        .collect();
    let input = TaskInput {
        title: args.title,
        description: args.description,
        status: task_status_from_arg(args.status),
        priority: priority_from_arg(args.priority),
        subject: args.subject,
        chapter: args.chapter,
        estimated_minutes: args.minutes,
        subtasks,
        due_date: args.due,
        completed_at: None,
        tags: args.tags,
    };
    let task = app.add_task(input).await?;
    println!("Created task ID: {}: {}", task.id, task.title);
    Ok(())
}

async fn handle_task_update(app: &mut App, args: TaskUpdate) -> Result<(), AppError> {
    if let Some(title) = &args.title {
        require_non_empty("task title", title)?;
    }
    let changes = TaskChanges {
        title: args.title,
        description: args.description,
        priority: args.priority.map(priority_from_arg),
        subject: args.subject,
        chapter: args.chapter,
        estimated_minutes: args.minutes,
        actual_minutes: args.actual,
        due_date: args.due,
        tags: args.tags,
        ..Default::default()
    };
    if changes.is_empty() {
        return Err(AppError::InvalidInput("no changes provided".to_string()));
    }
    let task = app
        .update_task(&args.id, changes)
        .await?
        .ok_or_else(|| not_found("task", &args.id))?;
    println!("Updated task ID: {}.", task.id);
    Ok(())
}

async fn handle_habit(app: &mut App, command: HabitCommand) -> Result<(), AppError> {
    match command {
        HabitCommand::Add(args) => handle_habit_add(app, args).await,
        HabitCommand::List => {
            if app.state().habits.is_empty() {
                println!("No habits found.");
                return Ok(());
            }
            for habit in &app.state().habits {
                println!("{}", format_habit_line(habit));
            }
            Ok(())
        }
        HabitCommand::Toggle(args) => handle_habit_toggle(app, args).await,
        HabitCommand::Remove(args) => {
            let name = app
                .find_habit(&args.id)
                .map(|habit| habit.name.clone())
                .ok_or_else(|| not_found("habit", &args.id))?;
            app.delete_habit(&args.id).await?;
            println!("Removed habit {name} (ID: {}).", args.id);
            Ok(())
        }
    }
}

async fn handle_habit_add(app: &mut App, args: HabitAdd) -> Result<(), AppError> {
    require_non_empty("habit name", &args.name)?;
    let habit = app
        .add_habit(HabitInput {
            name: args.name,
            icon: args.icon,
            color: args.color,
        })
        .await?;
    println!("Created habit ID: {}: {} {}", habit.id, habit.icon, habit.name);
    Ok(())
}

async fn handle_habit_toggle(app: &mut App, args: HabitToggle) -> Result<(), AppError> {
    let date = args.date.unwrap_or_else(|| app.today());
    let habit = app
        .toggle_habit_date(&args.id, date)
        .await?
        .ok_or_else(|| not_found("habit", &args.id))?;
    let state = if habit.completed_dates.contains(&date) {
        "done"
    } else {
        "not done"
    };
    println!(
        "{} marked {state} for {date}. Streak {} (best {}).",
        habit.name, habit.streak, habit.best_streak
    );
    Ok(())
}

async fn handle_pomodoro(app: &mut App, command: PomodoroCommand) -> Result<(), AppError> {
    match command {
        PomodoroCommand::Log(args) => handle_pomodoro_log(app, args).await,
        PomodoroCommand::List => {
            let sessions = &app.state().pomodoro_sessions;
            if sessions.is_empty() {
                println!("No sessions found.");
                return Ok(());
            }
            for session in sessions {
                let task = session.task_id.as_deref().unwrap_or("-");
                println!(
                    "{}  {:<10} {:>3} min  task {task}",
                    format_datetime(session.completed_at),
                    session.kind.as_str(),
                    session.duration
                );
            }
            Ok(())
        }
        PomodoroCommand::Settings(args) => handle_pomodoro_settings(app, args).await,
        PomodoroCommand::Run(args) => handle_pomodoro_run(app, args).await,
        PomodoroCommand::Skip(args) => handle_pomodoro_skip(app, args).await,
    }
}

async fn handle_pomodoro_log(app: &mut App, args: PomodoroLog) -> Result<(), AppError> {
    if let Some(task_id) = &args.task {
        if app.find_task(task_id).is_none() {
            return Err(not_found("task", task_id));
        }
    }
    let completed_at = app.now();
    let session = app
        .add_pomodoro_session(PomodoroSessionInput {
            task_id: args.task,
            kind: pomodoro_kind_from_arg(args.kind),
            duration: args.minutes,
            completed_at,
        })
        .await?;
    println!(
        "Logged {} session of {} min (ID: {}).",
        session.kind.as_str(),
        session.duration,
        session.id
    );
    Ok(())
}

async fn handle_pomodoro_settings(
    app: &mut App,
    args: PomodoroSettingsArgs,
) -> Result<(), AppError> {
    let changes = PomodoroSettingsChanges {
        focus_duration: args.focus,
        break_duration: args.break_minutes,
        long_break_duration: args.long_break,
        sessions_before_long_break: args.every,
    };
    let settings = if changes.is_empty() {
        app.state().pomodoro_settings
    } else {
        app.update_pomodoro_settings(changes).await?
    };
    println!("Focus: {} min", settings.focus_duration);
    println!("Break: {} min", settings.break_duration);
    println!("Long break: {} min", settings.long_break_duration);
    println!(
        "Long break every {} focus sessions",
        settings.sessions_before_long_break
    );
    Ok(())
}

async fn handle_pomodoro_run(app: &mut App, args: PomodoroRun) -> Result<(), AppError> {
    if args.tick_ms == 0 {
        return Err(AppError::InvalidInput("tick must be at least 1 ms".to_string()));
    }
    let mut timer = PomodoroTimer::new(app.state().pomodoro_settings);
    let outcomes = run_timer(
        app,
        &mut timer,
        Duration::from_millis(args.tick_ms),
        args.phases,
    )
    .await?;
    for outcome in &outcomes {
        println!(
            "Completed {} session ({} min).",
            outcome.kind.as_str(),
            outcome.minutes
        );
    }
    println!("Focus sessions this run: {}", timer.completed_focus());
    if outcomes.len() < args.phases {
        println!(
            "Timer stopped in {} with {}s left.",
            timer.mode().as_str(),
            timer.remaining_secs()
        );
    }
    Ok(())
}

async fn handle_pomodoro_skip(app: &mut App, args: PomodoroSkip) -> Result<(), AppError> {
    let mode = pomodoro_kind_from_arg(args.mode);
    let mut timer = PomodoroTimer::new(app.state().pomodoro_settings);
    timer.reset(mode);
    timer.start();
    timer.elapse(u64::from(args.elapsed));
    let outcome = timer.skip();
    let session = app.record_pomodoro_phase(outcome).await?;
    println!(
        "Skipped {} session after {} min; next up: {}.",
        session.kind.as_str(),
        session.duration,
        timer.mode().as_str()
    );
    Ok(())
}

async fn handle_check_in(app: &mut App, command: CheckInCommand) -> Result<(), AppError> {
    match command {
        CheckInCommand::Add(args) => handle_check_in_add(app, args).await,
        CheckInCommand::List => {
            if app.state().check_ins.is_empty() {
                println!("No check-ins found.");
                return Ok(());
            }
            for check_in in &app.state().check_ins {
                println!("{}", format_check_in_line(check_in));
            }
            Ok(())
        }
    }
}

async fn handle_check_in_add(app: &mut App, args: CheckInAdd) -> Result<(), AppError> {
    let date = args.date.unwrap_or_else(|| app.today());
    let outcome = app
        .add_check_in(DailyCheckIn {
            date,
            mood: args.mood,
            energy: args.energy,
            focus_score: args.focus,
            tasks_completed: args.tasks,
            total_minutes: args.minutes,
            notes: args.notes,
        })
        .await?;
    match outcome {
        CheckInOutcome::Added => println!("Saved check-in for {date}."),
        CheckInOutcome::Replaced => println!("Replaced check-in for {date}."),
    }
    Ok(())
}

async fn handle_goal(app: &mut App, command: GoalCommand) -> Result<(), AppError> {
    match command {
        GoalCommand::Add(args) => handle_goal_add(app, args).await,
        GoalCommand::List => {
            if app.state().study_goals.is_empty() {
                println!("No goals found.");
                return Ok(());
            }
            for goal in &app.state().study_goals {
                let (done, total) = goal.chapter_progress();
                println!(
                    "{}  {} [{}] {done}/{total} chapters",
                    goal.id, goal.name, goal.template
                );
            }
            Ok(())
        }
        GoalCommand::Show(args) => {
            let goal = app
                .find_study_goal(&args.id)
                .ok_or_else(|| not_found("goal", &args.id))?;
            println!("{}", format_goal_detail(goal));
            Ok(())
        }
        GoalCommand::Update(args) => handle_goal_update(app, args).await,
        GoalCommand::Chapter(args) => handle_goal_chapter(app, args).await,
        GoalCommand::Templates => {
            for template in EXAM_TEMPLATES {
                let chapters: usize = template
                    .subjects
                    .iter()
                    .map(|(_, chapters)| chapters.len())
                    .sum();
                println!(
                    "{} {}: {} subjects, {chapters} chapters",
                    template.icon,
                    template.name,
                    template.subjects.len()
                );
            }
            Ok(())
        }
    }
}

async fn handle_goal_add(app: &mut App, args: GoalAdd) -> Result<(), AppError> {
    let template = find_template(&args.template).ok_or_else(|| {
        let names: Vec<&str> = EXAM_TEMPLATES.iter().map(|t| t.name).collect();
        AppError::InvalidInput(format!(
            "unknown template '{}'; choose one of: {}",
            args.template,
            names.join(", ")
        ))
    })?;
    if !(args.hours.is_finite() && args.hours >= 0.0) {
        return Err(AppError::InvalidInput(
            "hours per chapter must be a non-negative number".to_string(),
        ));
    }
    let name = args.name.unwrap_or_else(|| template.name.to_string());
    require_non_empty("goal name", &name)?;
    let goal = app
        .add_goal_from_template(
            template,
            GoalDraft {
                name: &name,
                target_date: &args.target,
                hours_per_chapter: args.hours,
            },
        )
        .await?;
    let (_, total) = goal.chapter_progress();
    println!("Created goal ID: {}: {} ({total} chapters)", goal.id, goal.name);
    Ok(())
}

async fn handle_goal_update(app: &mut App, args: GoalUpdate) -> Result<(), AppError> {
    if args.name.is_none() && args.target.is_none() {
        return Err(AppError::InvalidInput("no changes provided".to_string()));
    }
    let goal = app
        .update_study_goal(
            &args.id,
            StudyGoalChanges {
                name: args.name,
                target_date: args.target,
                ..Default::default()
            },
        )
        .await?
        .ok_or_else(|| not_found("goal", &args.id))?;
    println!("Updated goal ID: {}.", goal.id);
    Ok(())
}

async fn handle_goal_chapter(app: &mut App, args: GoalChapter) -> Result<(), AppError> {
    let mut subjects = app
        .find_study_goal(&args.id)
        .ok_or_else(|| not_found("goal", &args.id))?
        .subjects
        .clone();
    if !toggle_chapter(&mut subjects, &args.subject, &args.chapter) {
        return Err(not_found(
            "chapter",
            &format!("{} / {}", args.subject, args.chapter),
        ));
    }
    let goal = app
        .update_study_goal(
            &args.id,
            StudyGoalChanges {
                subjects: Some(subjects),
                ..Default::default()
            },
        )
        .await?
        .ok_or_else(|| not_found("goal", &args.id))?;
    let (done, total) = goal.chapter_progress();
    println!("Goal {}: {done}/{total} chapters complete.", goal.name);
    Ok(())
}

async fn handle_activity(app: &mut App, command: ActivityCommand) -> Result<(), AppError> {
    match command {
        ActivityCommand::List(args) => {
            let log = &app.state().activity_log;
            if log.is_empty() {
                println!("No activity yet.");
                return Ok(());
            }
            for entry in log.iter().take(args.limit) {
                println!(
                    "{}  {}: {}",
                    format_datetime(entry.timestamp),
                    entry.action,
                    entry.details
                );
            }
            Ok(())
        }
        ActivityCommand::Log(args) => {
            require_non_empty("action", &args.action)?;
            let entry = app.log_activity(&args.action, &args.details).await?;
            println!("Logged activity ID: {}.", entry.id);
            Ok(())
        }
    }
}

async fn handle_prefs(app: &mut App, command: PrefsCommand) -> Result<(), AppError> {
    match command {
        PrefsCommand::Role(args) => {
            let role = role_from_arg(args.role);
            app.set_role(role).await?;
            println!("Role: {}", role.map_or("none", |role| role.as_str()));
        }
        PrefsCommand::Theme => {
            let theme = app.toggle_theme().await?;
            println!("Theme: {}", theme.as_str());
        }
        PrefsCommand::Sidebar => {
            let collapsed = app.toggle_sidebar().await?;
            println!("Sidebar: {}", if collapsed { "collapsed" } else { "expanded" });
        }
        PrefsCommand::Background(args) => {
            let value = args.value.filter(|value| !value.trim().is_empty());
            app.set_background(value.clone()).await?;
            println!("Background: {}", value.as_deref().unwrap_or("default"));
        }
        PrefsCommand::Show => {
            let state = app.state();
            println!(
                "Role: {}",
                state.current_role.map_or("none", |role| role.as_str())
            );
            println!("Theme: {}", state.theme.as_str());
            println!(
                "Sidebar: {}",
                if state.sidebar_collapsed {
                    "collapsed"
                } else {
                    "expanded"
                }
            );
            println!(
                "Background: {}",
                state.background.as_deref().unwrap_or("default")
            );
        }
    }
    Ok(())
}

fn handle_admin(app: &App, command: AdminCommand) -> Result<(), AppError> {
    if app.state().current_role != Some(Role::Admin) {
        return Err(AppError::InvalidInput(
            "admin commands require the admin role (run `studyflow prefs role admin`)".to_string(),
        ));
    }
    match command {
        AdminCommand::Users(args) => print_users(app, args),
        AdminCommand::Stats => print_admin_stats(app),
    }
    Ok(())
}

fn print_users(app: &App, args: AdminUsers) {
    let filter = UserFilter {
        search: args.search,
        status: args.status.map(user_status_from_arg),
        plan: args.plan.map(user_plan_from_arg),
    };
    let users = filter.apply(&app.state().registered_users);
    if users.is_empty() {
        println!("No users found.");
        return;
    }
    for user in users {
        println!(
            "{:<20} {:<32} {:<6} {:<8} {:<18} {}",
            user.name,
            user.email,
            user.plan.as_str(),
            user.status.as_str(),
            user.device,
            user.location
        );
    }
}

fn print_admin_stats(app: &App) {
    let summary = AdminSummary::compute(&app.state().registered_users);
    println!("Users: {}", summary.total_users);
    println!("Active: {}", summary.active_users);
    println!("Pro: {}", summary.pro_users);
    println!("Revenue: ${:.2}/month", summary.revenue);
    if !summary.devices.is_empty() {
        println!("Devices:");
        for (class, count) in &summary.devices {
            println!("- {}: {count}", class.as_str());
        }
    }
    if !summary.top_locations.is_empty() {
        println!("Top locations:");
        for (location, count) in &summary.top_locations {
            println!("- {location}: {count}");
        }
    }
}

async fn handle_backup(app: &mut App, command: BackupCommand) -> Result<(), AppError> {
    match command {
        BackupCommand::Export(args) => {
            let path = args
                .path
                .unwrap_or_else(|| PathBuf::from(default_backup_file_name(app.today())));
            let json = app.export_backup().to_pretty_json()?;
            tokio::fs::write(&path, json).await?;
            println!("Exported backup to {}.", path.display());
        }
        BackupCommand::Import(args) => {
            let payload = read_backup_file(&args.path).await?;
            app.restore_backup(payload).await?;
            println!("{RESTORED_MESSAGE}");
        }
        BackupCommand::Csv(args) => {
            tokio::fs::write(&args.path, tasks_to_csv(&app.state().tasks)).await?;
            println!(
                "Exported {} tasks to {}.",
                app.state().tasks.len(),
                args.path.display()
            );
        }
    }
    Ok(())
}

async fn handle_seed(app: &mut App) -> Result<(), AppError> {
    let report = app.seed_sample_data().await?;
    if report.is_empty() {
        println!("Sample data already present.");
        return Ok(());
    }
    if report.users_generated > 0 {
        println!("Generated {} users.", report.users_generated);
    }
    if report.tasks_seeded > 0 {
        println!(
            "Seeded {} tasks, {} habits, {} check-ins, {} sessions.",
            report.tasks_seeded,
            report.habits_seeded,
            report.check_ins_seeded,
            report.sessions_seeded
        );
    }
    Ok(())
}

fn print_dashboard(app: &App) {
    let summary = DashboardSummary::compute(app.state(), app.today());
    println!(
        "Tasks: {}/{} completed today",
        summary.completed_today, summary.total_tasks
    );
    println!("Productivity score: {}", summary.productivity_score);
    println!("Study hours: {:.1}", summary.total_hours);
    println!("Best active streak: {} days", summary.active_streak);
    println!("Focus minutes: {}", summary.focus_minutes);
    let subjects = subject_distribution(app.state());
    if !subjects.is_empty() {
        println!("Subjects:");
        for (subject, minutes) in subjects {
            println!("- {subject}: {minutes} min");
        }
    }
}

fn print_task_list(tasks: &[&Task]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }
    for task in tasks {
        let subject = if task.subject.is_empty() {
            String::new()
        } else {
            format!(" ({})", task.subject)
        };
        println!(
            "{}  [{}] {} {}{subject}",
            task.id,
            task.status.as_str(),
            task.priority.as_str(),
            task.title
        );
    }
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf, AppError> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    match std::env::var("HOME") {
        Ok(home) if !home.is_empty() => Ok(PathBuf::from(home).join(DATA_DIR_NAME)),
        _ => Err(AppError::InvalidInput(
            "unable to resolve data directory; pass --data-dir or set STUDYFLOW_HOME".to_string(),
        )),
    }
}

fn require_non_empty(label: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{label} cannot be empty")));
    }
    Ok(())
}

fn not_found(kind: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{kind} ID: {id}"))
}

fn task_status_from_arg(arg: TaskStatusArg) -> TaskStatus {
    match arg {
        TaskStatusArg::Todo => TaskStatus::Todo,
        TaskStatusArg::InProgress => TaskStatus::InProgress,
        TaskStatusArg::Review => TaskStatus::Review,
        TaskStatusArg::Done => TaskStatus::Done,
    }
}

fn priority_from_arg(arg: PriorityArg) -> Priority {
    match arg {
        PriorityArg::P1 => Priority::P1,
        PriorityArg::P2 => Priority::P2,
        PriorityArg::P3 => Priority::P3,
        PriorityArg::P4 => Priority::P4,
    }
}

fn pomodoro_kind_from_arg(arg: PomodoroKindArg) -> PomodoroKind {
    match arg {
        PomodoroKindArg::Focus => PomodoroKind::Focus,
        PomodoroKindArg::Break => PomodoroKind::Break,
        PomodoroKindArg::LongBreak => PomodoroKind::LongBreak,
    }
}

fn role_from_arg(arg: RoleArg) -> Option<Role> {
    match arg {
        RoleArg::Admin => Some(Role::Admin),
        RoleArg::User => Some(Role::User),
        RoleArg::None => None,
    }
}

fn user_status_from_arg(arg: UserStatusArg) -> UserStatus {
    match arg {
        UserStatusArg::Active => UserStatus::Active,
        UserStatusArg::Inactive => UserStatus::Inactive,
    }
}

fn user_plan_from_arg(arg: UserPlanArg) -> UserPlan {
    match arg {
        UserPlanArg::Free => UserPlan::Free,
        UserPlanArg::Pro => UserPlan::Pro,
    }
}
