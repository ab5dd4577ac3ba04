use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "studyflow",
    version,
    about = "Track study tasks, habits, pomodoros and exam goals"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "STUDYFLOW_HOME",
        value_name = "PATH",
        help = "Directory holding studyflow.db (defaults to ~/.studyflow)"
    )]
    pub data_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(subcommand)]
    Task(TaskCommand),
    #[command(subcommand)]
    Habit(HabitCommand),
    #[command(subcommand)]
    Pomodoro(PomodoroCommand),
    #[command(subcommand)]
    Checkin(CheckInCommand),
    #[command(subcommand)]
    Goal(GoalCommand),
    #[command(subcommand)]
    Activity(ActivityCommand),
    #[command(subcommand)]
    Prefs(PrefsCommand),
    #[command(subcommand)]
    Admin(AdminCommand),
    #[command(subcommand)]
    Backup(BackupCommand),
    Seed(SeedArgs),
    Stats,
    Reset,
}

#[derive(Subcommand, Debug)]
pub enum TaskCommand {
    Add(TaskAdd),
    List(TaskList),
    Show(TaskShow),
    Update(TaskUpdate),
    Move(TaskMove),
    Remove(TaskRemove),
}

#[derive(Subcommand, Debug)]
pub enum HabitCommand {
    Add(HabitAdd),
    List,
    Toggle(HabitToggle),
    Remove(HabitRemove),
}

#[derive(Subcommand, Debug)]
pub enum PomodoroCommand {
    Log(PomodoroLog),
    List,
    Settings(PomodoroSettingsArgs),
    #[command(
        about = "Run the focus/break countdown and record each finished phase",
        long_about = "Run the focus/break countdown and record each finished phase.\n\nThe data directory stays locked for the whole run: other studyflow commands wait until the timer finishes or is stopped with Ctrl-C."
    )]
    Run(PomodoroRun),
    Skip(PomodoroSkip),
}

#[derive(Subcommand, Debug)]
pub enum CheckInCommand {
    Add(CheckInAdd),
    List,
}

#[derive(Subcommand, Debug)]
pub enum GoalCommand {
    Add(GoalAdd),
    List,
    Show(GoalShow),
    Update(GoalUpdate),
    Chapter(GoalChapter),
    Templates,
}

#[derive(Subcommand, Debug)]
pub enum ActivityCommand {
    List(ActivityList),
    Log(ActivityLog),
}

#[derive(Subcommand, Debug)]
pub enum PrefsCommand {
    Role(PrefsRole),
    Theme,
    Sidebar,
    Background(PrefsBackground),
    Show,
}

#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    Users(AdminUsers),
    Stats,
}

#[derive(Subcommand, Debug)]
pub enum BackupCommand {
    Export(BackupExport),
    Import(BackupImport),
    Csv(BackupCsv),
}

#[derive(Args, Debug)]
pub struct TaskAdd {
    pub title: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, value_enum, default_value = "todo")]
    pub status: TaskStatusArg,
    #[arg(long, value_enum, default_value = "p3")]
    pub priority: PriorityArg,
    #[arg(long, default_value = "")]
    pub subject: String,
    #[arg(long, default_value = "")]
    pub chapter: String,
    #[arg(long, value_name = "MINUTES", default_value_t = 0)]
    pub minutes: u32,
    #[arg(long, value_name = "DATE", default_value = "")]
    pub due: String,
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,
    #[arg(long = "subtask", value_name = "TITLE")]
    pub subtasks: Vec<String>,
}

#[derive(Args, Debug)]
pub struct TaskList {
    #[arg(long, value_enum)]
    pub status: Option<TaskStatusArg>,
}

#[derive(Args, Debug)]
pub struct TaskShow {
    pub id: String,
}

#[derive(Args, Debug)]
pub struct TaskUpdate {
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, value_enum)]
    pub priority: Option<PriorityArg>,
    #[arg(long)]
    pub subject: Option<String>,
    #[arg(long)]
    pub chapter: Option<String>,
    #[arg(long, value_name = "MINUTES")]
    pub minutes: Option<u32>,
    #[arg(long, value_name = "MINUTES")]
    pub actual: Option<u32>,
    #[arg(long, value_name = "DATE")]
    pub due: Option<String>,
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Option<Vec<String>>,
}

#[derive(Args, Debug)]
pub struct TaskMove {
    pub id: String,
    #[arg(value_enum)]
    pub status: TaskStatusArg,
}

#[derive(Args, Debug)]
pub struct TaskRemove {
    pub id: String,
}

#[derive(Args, Debug)]
pub struct HabitAdd {
    pub name: String,
    #[arg(long, default_value = "✅")]
    pub icon: String,
    #[arg(long, default_value = "#6366f1")]
    pub color: String,
}

#[derive(Args, Debug)]
pub struct HabitToggle {
    pub id: String,
    #[arg(long, value_name = "YYYY-MM-DD", help = "Defaults to today")]
    pub date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub struct HabitRemove {
    pub id: String,
}

#[derive(Args, Debug)]
pub struct PomodoroLog {
    #[arg(long, value_enum, default_value = "focus")]
    pub kind: PomodoroKindArg,
    #[arg(long, value_name = "MINUTES")]
    pub minutes: u32,
    #[arg(long, value_name = "TASK_ID")]
    pub task: Option<String>,
}

#[derive(Args, Debug)]
pub struct PomodoroSettingsArgs {
    #[arg(long, value_name = "MINUTES")]
    pub focus: Option<u32>,
    #[arg(long = "break", value_name = "MINUTES")]
    pub break_minutes: Option<u32>,
    #[arg(long, value_name = "MINUTES")]
    pub long_break: Option<u32>,
    #[arg(long, value_name = "SESSIONS")]
    pub every: Option<u32>,
}

#[derive(Args, Debug)]
pub struct PomodoroRun {
    #[arg(long, default_value_t = 1, help = "Number of phases to run before exiting")]
    pub phases: usize,
    #[arg(
        long,
        value_name = "MS",
        default_value_t = 1000,
        help = "Length of one countdown second in milliseconds"
    )]
    pub tick_ms: u64,
}

#[derive(Args, Debug)]
pub struct PomodoroSkip {
    #[arg(long, value_enum, default_value = "focus")]
    pub mode: PomodoroKindArg,
    #[arg(long, value_name = "SECONDS", default_value_t = 0)]
    pub elapsed: u32,
}

#[derive(Args, Debug)]
pub struct CheckInAdd {
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub mood: u8,
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub energy: u8,
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub focus: u32,
    #[arg(long, default_value_t = 0)]
    pub tasks: u32,
    #[arg(long, value_name = "MINUTES", default_value_t = 0)]
    pub minutes: u32,
    #[arg(long, default_value = "")]
    pub notes: String,
    #[arg(long, value_name = "YYYY-MM-DD", help = "Defaults to today")]
    pub date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub struct GoalAdd {
    #[arg(long, help = "UPSC CSE, JEE Main or NEET")]
    pub template: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, value_name = "DATE", default_value = "")]
    pub target: String,
    #[arg(long, value_name = "HOURS", default_value_t = 3.0)]
    pub hours: f64,
}

#[derive(Args, Debug)]
pub struct GoalShow {
    pub id: String,
}

#[derive(Args, Debug)]
pub struct GoalUpdate {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, value_name = "DATE")]
    pub target: Option<String>,
}

#[derive(Args, Debug)]
pub struct GoalChapter {
    pub id: String,
    pub subject: String,
    pub chapter: String,
}

#[derive(Args, Debug)]
pub struct ActivityList {
    #[arg(long, default_value_t = 20)]
    pub limit: usize,
}

#[derive(Args, Debug)]
pub struct ActivityLog {
    pub action: String,
    #[arg(default_value = "")]
    pub details: String,
}

#[derive(Args, Debug)]
pub struct PrefsRole {
    #[arg(value_enum)]
    pub role: RoleArg,
}

#[derive(Args, Debug)]
pub struct PrefsBackground {
    #[arg(help = "Background name; omit to clear")]
    pub value: Option<String>,
}

#[derive(Args, Debug)]
pub struct AdminUsers {
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long, value_enum)]
    pub status: Option<UserStatusArg>,
    #[arg(long, value_enum)]
    pub plan: Option<UserPlanArg>,
}

#[derive(Args, Debug)]
pub struct BackupExport {
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct BackupImport {
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

#[derive(Args, Debug)]
pub struct BackupCsv {
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

#[derive(Args, Debug)]
pub struct SeedArgs {
    #[arg(long, value_name = "N", help = "Seed the random source for repeatable data")]
    pub seed: Option<u64>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum TaskStatusArg {
    Todo,
    InProgress,
    Review,
    Done,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum PriorityArg {
    P1,
    P2,
    P3,
    P4,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum PomodoroKindArg {
    Focus,
    Break,
    LongBreak,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum RoleArg {
    Admin,
    User,
    None,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum UserStatusArg {
    Active,
    Inactive,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum UserPlanArg {
    Free,
    Pro,
}
