use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::{AppState, PomodoroKind, RegisteredUser, UserPlan, UserStatus};

const DEFAULT_PRODUCTIVITY_SCORE: u32 = 78;
const SCORE_WINDOW: usize = 7;
const PRO_PRICE: f64 = 9.99;
const TOP_LOCATIONS: usize = 6;

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardSummary {
    pub completed_today: usize,
    pub total_tasks: usize,
    pub productivity_score: u32,
    pub total_hours: f64,
    pub active_streak: u32,
    pub focus_minutes: u64,
}

impl DashboardSummary {
    pub fn compute(state: &AppState, today: NaiveDate) -> Self {
        let completed_today = state
            .tasks
            .iter()
            .filter(|task| {
                task.completed_at
                    .is_some_and(|done| done.date_naive() == today)
            })
            .count();

        let productivity_score = if state.check_ins.is_empty() {
            DEFAULT_PRODUCTIVITY_SCORE
        } else {
            let window = &state.check_ins[..state.check_ins.len().min(SCORE_WINDOW)];
            let sum: u64 = window
                .iter()
                .map(|check_in| u64::from(check_in.focus_score))
                .sum();
            (sum as f64 / window.len() as f64).round() as u32
        };

        let total_minutes: u64 = state
            .check_ins
            .iter()
            .map(|check_in| u64::from(check_in.total_minutes))
            .sum();

        Self {
            completed_today,
            total_tasks: state.tasks.len(),
            productivity_score,
            total_hours: (total_minutes as f64 / 60.0 * 10.0).round() / 10.0,
            active_streak: state.habits.iter().map(|habit| habit.streak).max().unwrap_or(0),
            focus_minutes: state
                .pomodoro_sessions
                .iter()
                .filter(|session| session.kind == PomodoroKind::Focus)
                .map(|session| u64::from(session.duration))
                .sum(),
        }
    }
}

/// Estimated minutes per subject; tasks without a subject are left out.
pub fn subject_distribution(state: &AppState) -> Vec<(String, u64)> {
    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
    for task in &state.tasks {
        if task.subject.is_empty() {
            continue;
        }
        *totals.entry(task.subject.as_str()).or_default() += u64::from(task.estimated_minutes);
    }
    totals
        .into_iter()
        .map(|(subject, minutes)| (subject.to_string(), minutes))
        .collect()
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    pub fn of(device: &str) -> Self {
        const MOBILE_MARKERS: [&str; 4] = ["iPhone", "Galaxy", "Pixel", "OnePlus"];
        if MOBILE_MARKERS.iter().any(|marker| device.contains(marker)) {
            Self::Mobile
        } else if device.contains("iPad") {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "Mobile",
            Self::Tablet => "Tablet",
            Self::Desktop => "Desktop",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AdminSummary {
    pub total_users: usize,
    pub active_users: usize,
    pub pro_users: usize,
    pub revenue: f64,
    pub devices: Vec<(DeviceClass, usize)>,
    pub top_locations: Vec<(String, usize)>,
}

impl AdminSummary {
    pub fn compute(users: &[RegisteredUser]) -> Self {
        let active_users = users
            .iter()
            .filter(|user| user.status == UserStatus::Active)
            .count();
        let pro_users = users
            .iter()
            .filter(|user| user.plan == UserPlan::Pro)
            .count();

        let mut devices: BTreeMap<DeviceClass, usize> = BTreeMap::new();
        let mut locations: BTreeMap<&str, usize> = BTreeMap::new();
        for user in users {
            *devices.entry(DeviceClass::of(&user.device)).or_default() += 1;
            *locations.entry(user.location.as_str()).or_default() += 1;
        }
        let mut top_locations: Vec<(String, usize)> = locations
            .into_iter()
            .map(|(location, count)| (location.to_string(), count))
            .collect();
        // stable sort keeps alphabetical order among ties
        top_locations.sort_by(|a, b| b.1.cmp(&a.1));
        top_locations.truncate(TOP_LOCATIONS);

        Self {
            total_users: users.len(),
            active_users,
            pro_users,
            revenue: pro_users as f64 * PRO_PRICE,
            devices: devices.into_iter().collect(),
            top_locations,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct UserFilter {
    pub search: Option<String>,
    pub status: Option<UserStatus>,
    pub plan: Option<UserPlan>,
}

impl UserFilter {
    pub fn matches(&self, user: &RegisteredUser) -> bool {
        if let Some(search) = self.search.as_deref().filter(|term| !term.is_empty()) {
            let needle = search.to_lowercase();
            if !user.name.to_lowercase().contains(&needle)
                && !user.email.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if self.status.is_some_and(|status| status != user.status) {
            return false;
        }
        if self.plan.is_some_and(|plan| plan != user.plan) {
            return false;
        }
        true
    }

    pub fn apply<'a>(&self, users: &'a [RegisteredUser]) -> Vec<&'a RegisteredUser> {
        users.iter().filter(|user| self.matches(user)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DailyCheckIn, PomodoroSession, Priority, Task, TaskStatus};
    use crate::seed::mock_users;
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn check_in(day: u32, focus: u32, minutes: u32) -> DailyCheckIn {
        DailyCheckIn {
            date: NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
            mood: 4,
            energy: 4,
            focus_score: focus,
            tasks_completed: 3,
            total_minutes: minutes,
            notes: String::new(),
        }
    }

    fn task(subject: &str, minutes: u32, completed_day: Option<u32>) -> Task {
        Task {
            id: format!("{subject}-{minutes}"),
            title: "t".to_string(),
            description: String::new(),
            status: TaskStatus::Todo,
            priority: Priority::P3,
            subject: subject.to_string(),
            chapter: String::new(),
            estimated_minutes: minutes,
            actual_minutes: 0,
            subtasks: Vec::new(),
            due_date: String::new(),
            created_at: Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap(),
            completed_at: completed_day
                .map(|day| Utc.with_ymd_and_hms(2026, 10, day, 15, 0, 0).unwrap()),
            tags: Vec::new(),
            is_timer_running: false,
            timer_started_at: None,
        }
    }

    #[test]
    fn empty_state_uses_default_score() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let summary = DashboardSummary::compute(&AppState::default(), today);
        assert_eq!(summary.productivity_score, 78);
        assert_eq!(summary.total_tasks, 0);
        assert_eq!(summary.active_streak, 0);
    }

    #[test]
    fn score_averages_first_seven_check_ins() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let mut state = AppState::default();
        state.check_ins = (1..=7).map(|day| check_in(day, 70, 60)).collect();
        state.check_ins.push(check_in(8, 10, 60));
        state.tasks = vec![task("History", 30, Some(17)), task("Polity", 20, Some(16))];
        let summary = DashboardSummary::compute(&state, today);
        assert_eq!(summary.productivity_score, 70);
        assert_eq!(summary.total_hours, 8.0);
        assert_eq!(summary.completed_today, 1);
    }

    #[test]
    fn subjects_sum_estimates() {
        let mut state = AppState::default();
        state.tasks = vec![
            task("History", 30, None),
            task("History", 45, None),
            task("", 99, None),
            task("Economics", 60, None),
        ];
        assert_eq!(
            subject_distribution(&state),
            vec![("Economics".to_string(), 60), ("History".to_string(), 75)]
        );
    }

    #[test]
    fn large_minute_values_add_up_without_wrapping() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let mut state = AppState::default();
        state.tasks = vec![task("Polity", u32::MAX, None), task("Polity", u32::MAX, None)];
        state.check_ins = vec![check_in(1, u32::MAX, u32::MAX), check_in(2, u32::MAX, u32::MAX)];
        state.pomodoro_sessions = (0..2)
            .map(|idx| PomodoroSession {
                id: format!("s{idx}"),
                task_id: None,
                kind: PomodoroKind::Focus,
                duration: u32::MAX,
                completed_at: Utc.with_ymd_and_hms(2026, 10, 17, 8, 0, 0).unwrap(),
            })
            .collect();

        assert_eq!(
            subject_distribution(&state),
            vec![("Polity".to_string(), 2 * u64::from(u32::MAX))]
        );
        let summary = DashboardSummary::compute(&state, today);
        assert_eq!(summary.focus_minutes, 2 * u64::from(u32::MAX));
        assert_eq!(summary.productivity_score, u32::MAX);
        assert!(summary.total_hours > f64::from(u32::MAX) / 60.0);
    }

    #[test]
    fn device_classes_follow_device_names() {
        assert_eq!(DeviceClass::of("iPhone 14"), DeviceClass::Mobile);
        assert_eq!(DeviceClass::of("Samsung Galaxy S24"), DeviceClass::Mobile);
        assert_eq!(DeviceClass::of("iPad Air"), DeviceClass::Tablet);
        assert_eq!(DeviceClass::of("MacBook Pro"), DeviceClass::Desktop);
    }

    #[test]
    fn admin_summary_over_mock_roster() {
        let now = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();
        let users = mock_users(&mut StdRng::seed_from_u64(11), now);
        let summary = AdminSummary::compute(&users);
        assert_eq!(summary.total_users, 15);
        let device_total: usize = summary.devices.iter().map(|(_, count)| count).sum();
        assert_eq!(device_total, 15);
        assert_eq!(summary.top_locations.len(), 6);
        assert!((summary.revenue - summary.pro_users as f64 * 9.99).abs() < 1e-9);
    }

    #[test]
    fn user_filter_combines_search_status_and_plan() {
        let now = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();
        let mut users = mock_users(&mut StdRng::seed_from_u64(4), now);
        users[0].status = UserStatus::Inactive;
        users[0].plan = UserPlan::Free;

        let by_email = UserFilter {
            search: Some("OUTLOOK".to_string()),
            ..Default::default()
        };
        assert_eq!(by_email.apply(&users).len(), 3);

        let narrowed = UserFilter {
            search: Some("aarav".to_string()),
            status: Some(UserStatus::Inactive),
            plan: Some(UserPlan::Free),
        };
        assert_eq!(narrowed.apply(&users).len(), 1);

        let excluded = UserFilter {
            search: Some("aarav".to_string()),
            status: Some(UserStatus::Active),
            plan: None,
        };
        assert!(excluded.apply(&users).is_empty());
    }
}
