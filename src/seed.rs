use chrono::{DateTime, Duration, NaiveDate, Timelike, Utc};
use rand::Rng;

use crate::model::{
    DailyCheckIn, HabitInput, PomodoroKind, PomodoroSessionInput, Priority, RegisteredUser,
    SubTask, TaskInput, TaskStatus, UserPlan, UserStatus,
};
use crate::util::generate_id;

pub const MOCK_USER_COUNT: usize = 15;
pub const SAMPLE_CHECK_IN_DAYS: i64 = 14;
pub const SAMPLE_SESSION_COUNT: usize = 20;

const MOCK_PEOPLE: [(&str, &str, &str); MOCK_USER_COUNT] = [
    ("Aarav Sharma", "aarav.sharma@gmail.com", "New Delhi"),
    ("Ananya Patel", "ananya.patel@gmail.com", "Mumbai"),
    ("Rohan Gupta", "rohan.gupta@outlook.com", "Bangalore"),
    ("Priya Singh", "priya.singh@gmail.com", "Pune"),
    ("Vikram Reddy", "vikram.reddy@yahoo.com", "Hyderabad"),
    ("Sneha Iyer", "sneha.iyer@gmail.com", "Chennai"),
    ("Arjun Nair", "arjun.nair@proton.me", "Kochi"),
    ("Kavya Joshi", "kavya.joshi@gmail.com", "Jaipur"),
    ("Rahul Mishra", "rahul.mishra@outlook.com", "Lucknow"),
    ("Diya Kapoor", "diya.kapoor@gmail.com", "Chandigarh"),
    ("Aditya Verma", "aditya.verma@gmail.com", "Kolkata"),
    ("Ishita Das", "ishita.das@yahoo.com", "Bhopal"),
    ("Karan Mehta", "karan.mehta@gmail.com", "Ahmedabad"),
    ("Neha Saxena", "neha.saxena@outlook.com", "Noida"),
    ("Siddharth Kumar", "sid.kumar@gmail.com", "Patna"),
];

const DEVICES: [&str; 8] = [
    "iPhone 15 Pro",
    "Samsung Galaxy S24",
    "MacBook Pro",
    "iPad Air",
    "Windows Desktop",
    "Pixel 8",
    "OnePlus 12",
    "iPhone 14",
];

const OPERATING_SYSTEMS: [&str; 8] = [
    "iOS 18",
    "Android 15",
    "macOS Sonoma",
    "iPadOS 18",
    "Windows 11",
    "Android 14",
    "OxygenOS 14",
    "iOS 17",
];

const BROWSERS: [&str; 6] = ["Safari", "Chrome", "Firefox", "Edge", "Brave", "Arc"];

const AVATARS: [&str; 15] = [
    "👨‍💻", "👩‍🎓", "👨‍🔬", "👩‍💼", "🧑‍🏫", "👩‍🎨", "🧑‍⚕️", "👨‍🚀", "👩‍🔧", "🧑‍🍳", "👨‍✈️",
    "👩‍⚖️", "🧑‍🌾", "👩‍🏭", "👨‍🎤",
];

/// Synthetic admin roster. Shape is fixed, field values come from `rng`.
pub fn mock_users<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> Vec<RegisteredUser> {
    MOCK_PEOPLE
        .iter()
        .enumerate()
        .map(|(idx, (name, email, location))| {
            let days_ago: i64 = rng.gen_range(0..60);
            let joined_at = now - Duration::days(days_ago + 30);
            let last_active = now - Duration::days(rng.gen_range(0..3));
            let hour = rng.gen_range(0..12) + 8;
            let last_active = last_active.with_hour(hour).unwrap_or(last_active);

            RegisteredUser {
                id: generate_id(&mut *rng, now),
                name: name.to_string(),
                email: email.to_string(),
                avatar: AVATARS[idx % AVATARS.len()].to_string(),
                joined_at,
                last_active,
                device: DEVICES[idx % DEVICES.len()].to_string(),
                os: OPERATING_SYSTEMS[idx % OPERATING_SYSTEMS.len()].to_string(),
                browser: BROWSERS[idx % BROWSERS.len()].to_string(),
                location: location.to_string(),
                tasks_completed: rng.gen_range(0..80) + 10,
                total_focus_minutes: rng.gen_range(0..3000) + 500,
                habits_active: rng.gen_range(0..6) + 1,
                streak: rng.gen_range(0..30),
                plan: if rng.gen_bool(0.6) {
                    UserPlan::Pro
                } else {
                    UserPlan::Free
                },
                status: if rng.gen_bool(0.85) {
                    UserStatus::Active
                } else {
                    UserStatus::Inactive
                },
            }
        })
        .collect()
}

pub fn sample_tasks(now: DateTime<Utc>) -> Vec<TaskInput> {
    let today = now.date_naive();
    let due = |offset: i64| (today + Duration::days(offset)).format("%Y-%m-%d").to_string();
    let subtask = |id: &str, title: &str, completed: bool| SubTask {
        id: id.to_string(),
        title: title.to_string(),
        completed,
    };

    let rows: [(&str, &str, TaskStatus, Priority, &str, &str, u32, i64); 8] = [
        (
            "Indian Polity - Chapter 3",
            "Study fundamental rights and directive principles",
            TaskStatus::Todo,
            Priority::P1,
            "Polity",
            "Chapter 3",
            90,
            0,
        ),
        (
            "Economics - GDP & Growth",
            "Understand GDP calculation methods",
            TaskStatus::InProgress,
            Priority::P2,
            "Economics",
            "Chapter 7",
            60,
            0,
        ),
        (
            "Geography - Monsoon Patterns",
            "Study Indian monsoon system and jet streams",
            TaskStatus::Todo,
            Priority::P2,
            "Geography",
            "Chapter 5",
            75,
            1,
        ),
        (
            "History - Modern India",
            "Revolt of 1857 and its impact",
            TaskStatus::Review,
            Priority::P1,
            "History",
            "Chapter 12",
            120,
            0,
        ),
        (
            "Current Affairs - February Week 2",
            "Compile and study current affairs",
            TaskStatus::Todo,
            Priority::P3,
            "Current Affairs",
            "",
            45,
            1,
        ),
        (
            "Essay Practice - Social Justice",
            "Write practice essay on social justice themes",
            TaskStatus::Done,
            Priority::P2,
            "Essay",
            "",
            120,
            0,
        ),
        (
            "CSAT - Logical Reasoning Set",
            "Practice 50 logical reasoning questions",
            TaskStatus::Done,
            Priority::P3,
            "CSAT",
            "Logic",
            60,
            0,
        ),
        (
            "Science & Tech Notes",
            "ISRO missions and space tech updates",
            TaskStatus::Todo,
            Priority::P4,
            "Science",
            "Space Tech",
            40,
            7,
        ),
    ];

    rows.into_iter()
        .enumerate()
        .map(
            |(idx, (title, description, status, priority, subject, chapter, minutes, due_in))| {
                let subtasks = match idx {
                    0 => vec![
                        subtask("1", "Read Laxmikanth", false),
                        subtask("2", "Make notes", false),
                    ],
                    2 => vec![
                        subtask("3", "Watch lecture", true),
                        subtask("4", "Practice MCQs", false),
                    ],
                    _ => Vec::new(),
                };
                TaskInput {
                    title: title.to_string(),
                    description: description.to_string(),
                    status,
                    priority,
                    subject: subject.to_string(),
                    chapter: chapter.to_string(),
                    estimated_minutes: minutes,
                    subtasks,
                    due_date: due(due_in),
                    completed_at: (status == TaskStatus::Done).then_some(now),
                    tags: vec!["UPSC".to_string(), subject.to_string()],
                }
            },
        )
        .collect()
}

pub fn sample_habits() -> Vec<HabitInput> {
    [
        ("Morning Revision", "📖", "#6366f1"),
        ("Exercise", "🏃", "#10b981"),
        ("Meditation", "🧘", "#8b5cf6"),
        ("Read Newspaper", "📰", "#f59e0b"),
        ("Answer Writing", "✍️", "#f43f5e"),
        ("Sleep by 11 PM", "😴", "#06b6d4"),
    ]
    .into_iter()
    .map(|(name, icon, color)| HabitInput {
        name: name.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
    })
    .collect()
}

/// 3 to 9 consecutive days ending yesterday.
pub fn habit_backfill<R: Rng>(rng: &mut R, today: NaiveDate) -> Vec<NaiveDate> {
    let days: i64 = rng.gen_range(3..=9);
    (1..=days).map(|offset| today - Duration::days(offset)).collect()
}

pub fn sample_check_ins<R: Rng>(rng: &mut R, today: NaiveDate) -> Vec<DailyCheckIn> {
    (0..SAMPLE_CHECK_IN_DAYS)
        .map(|offset| DailyCheckIn {
            date: today - Duration::days(offset),
            mood: rng.gen_range(3..6),
            energy: rng.gen_range(3..6),
            focus_score: rng.gen_range(60..90),
            tasks_completed: rng.gen_range(2..7),
            total_minutes: rng.gen_range(180..360),
            notes: String::new(),
        })
        .collect()
}

pub fn sample_sessions<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> Vec<PomodoroSessionInput> {
    (0..SAMPLE_SESSION_COUNT)
        .map(|_| PomodoroSessionInput {
            task_id: None,
            kind: PomodoroKind::Focus,
            duration: 25,
            completed_at: now - Duration::days(rng.gen_range(0..7)),
        })
        .collect()
}
