//! Aggregates the dashboard views derive from the store on every render.
//!
//! Nothing here mutates the store; sorted views are built over borrowed entries.

use std::collections::BTreeMap;

use crate::models::{
    FinanceEntry, FinanceKind, HabitEntry, HealthEntry, InterviewSession, JobApplication,
    JobStatus, LearningEntry, LearningKind,
};
use crate::storage::Storage;
use crate::store::Store;

/// Number of entries shown in the trend charts
pub const DEFAULT_TREND_WINDOW: usize = 7;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JobStats {
    pub total: usize,
    pub applied: usize,
    pub interview: usize,
    pub offer: usize,
    pub rejected: usize,
}

impl JobStats {
    pub fn from_jobs(jobs: &[JobApplication]) -> Self {
        let count = |status: JobStatus| jobs.iter().filter(|j| j.status == status).count();
        Self {
            total: jobs.len(),
            applied: count(JobStatus::Applied),
            interview: count(JobStatus::Interview),
            offer: count(JobStatus::Offer),
            rejected: count(JobStatus::Rejected),
        }
    }
}

/// Non-empty status buckets, in pie-chart order
pub fn status_distribution(jobs: &[JobApplication]) -> Vec<(JobStatus, usize)> {
    let stats = JobStats::from_jobs(jobs);
    [
        (JobStatus::Applied, stats.applied),
        (JobStatus::Interview, stats.interview),
        (JobStatus::Offer, stats.offer),
        (JobStatus::Rejected, stats.rejected),
    ]
    .into_iter()
    .filter(|(_, count)| *count > 0)
    .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InterviewStats {
    pub total: usize,
    pub average_score: Option<f64>,
}

impl InterviewStats {
    pub fn from_interviews(interviews: &[InterviewSession]) -> Self {
        let average_score = if interviews.is_empty() {
            None
        } else {
            let sum: f64 = interviews.iter().map(|i| i.score).sum();
            Some(sum / interviews.len() as f64)
        };
        Self {
            total: interviews.len(),
            average_score,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FinanceSummary {
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
}

impl FinanceSummary {
    /// Sums by type; the sign of each amount is taken as entered
    pub fn from_entries(entries: &[FinanceEntry]) -> Self {
        let total = |kind: FinanceKind| -> f64 {
            entries
                .iter()
                .filter(|f| f.kind == kind)
                .map(|f| f.amount)
                .sum()
        };
        let income = total(FinanceKind::Income);
        let expenses = total(FinanceKind::Expense);
        Self {
            income,
            expenses,
            net: income - expenses,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HabitStats {
    pub completed: usize,
    pub total: usize,
    /// Whole percent, 0 when there is nothing to complete
    pub completion_rate: u32,
}

impl HabitStats {
    pub fn from_habits<'a>(habits: impl IntoIterator<Item = &'a HabitEntry>) -> Self {
        let (completed, total) = habits.into_iter().fold((0, 0), |(done, all), h| {
            (done + usize::from(h.completed), all + 1)
        });
        let completion_rate = if total > 0 {
            (completed as f64 / total as f64 * 100.0).round() as u32
        } else {
            0
        };
        Self {
            completed,
            total,
            completion_rate,
        }
    }
}

/// Headline numbers for the dashboard page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dashboard {
    pub jobs: JobStats,
    pub interviews: InterviewStats,
    pub finances: FinanceSummary,
    pub habits: HabitStats,
}

impl Dashboard {
    pub fn from_store<S: Storage>(store: &Store<S>) -> Self {
        Self {
            jobs: JobStats::from_jobs(store.jobs()),
            interviews: InterviewStats::from_interviews(store.interviews()),
            finances: FinanceSummary::from_entries(store.finances()),
            habits: HabitStats::from_habits(store.habits()),
        }
    }
}

/// True once there is anything to chart
pub fn has_data<S: Storage>(store: &Store<S>) -> bool {
    !store.jobs().is_empty()
        || !store.interviews().is_empty()
        || !store.habits().is_empty()
        || !store.finances().is_empty()
}

// ISO dates order correctly as plain strings. The sort is stable, so entries
// sharing a date keep their insertion order.
fn latest_by_date<'a, T>(items: &'a [T], date: fn(&T) -> &str, window: usize) -> Vec<&'a T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by(|a, b| date(a).cmp(date(b)));
    let skip = sorted.len().saturating_sub(window);
    sorted.split_off(skip)
}

/// The last `window` interviews by date, oldest first
pub fn interview_trend(interviews: &[InterviewSession], window: usize) -> Vec<&InterviewSession> {
    latest_by_date(interviews, |i| i.date.as_str(), window)
}

/// The last `window` transactions by date, oldest first
pub fn finance_trend(entries: &[FinanceEntry], window: usize) -> Vec<&FinanceEntry> {
    latest_by_date(entries, |f| f.date.as_str(), window)
}

/// Everything logged on one calendar day, matched on date equality
#[derive(Debug, Clone)]
pub struct DaySummary<'a> {
    pub date: String,
    pub habits: Vec<&'a HabitEntry>,
    pub interviews: Vec<&'a InterviewSession>,
    pub jobs: Vec<&'a JobApplication>,
    pub habit_stats: HabitStats,
}

impl<'a> DaySummary<'a> {
    pub fn for_date<S: Storage>(store: &'a Store<S>, date: &str) -> Self {
        let habits: Vec<&HabitEntry> = store.habits().iter().filter(|h| h.date == date).collect();
        let habit_stats = HabitStats::from_habits(habits.iter().copied());
        Self {
            date: date.to_string(),
            interviews: store.interviews().iter().filter(|i| i.date == date).collect(),
            jobs: store.jobs().iter().filter(|j| j.applied_date == date).collect(),
            habits,
            habit_stats,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty() && self.interviews.is_empty() && self.jobs.is_empty()
    }
}

/// Habit/note entries grouped by day, newest day first
pub fn notes_timeline(habits: &[HabitEntry]) -> Vec<(&str, Vec<&HabitEntry>)> {
    let mut by_date: BTreeMap<&str, Vec<&HabitEntry>> = BTreeMap::new();
    for habit in habits {
        by_date.entry(habit.date.as_str()).or_default().push(habit);
    }
    by_date.into_iter().rev().collect()
}

/// Every tag in use, in the order it first appears
pub fn all_tags(entries: &[LearningEntry]) -> Vec<&str> {
    let mut tags: Vec<&str> = Vec::new();
    for tag in entries.iter().flat_map(|e| e.tags.iter()) {
        if !tags.contains(&tag.as_str()) {
            tags.push(tag);
        }
    }
    tags
}

/// Search over learning entries: type, free text and tags must all match
#[derive(Debug, Clone, Default)]
pub struct LearningFilter {
    pub kind: Option<LearningKind>,
    pub query: String,
    /// Entry matches if it carries any of these; no tags selected matches everything
    pub tags: Vec<String>,
}

impl LearningFilter {
    pub fn matches(&self, entry: &LearningEntry) -> bool {
        let matches_kind = self.kind.is_none_or(|kind| entry.kind == kind);
        let query = self.query.to_lowercase();
        let matches_query = entry.title.to_lowercase().contains(&query)
            || entry.content.to_lowercase().contains(&query);
        let matches_tags = self.tags.is_empty() || self.tags.iter().any(|t| entry.tags.contains(t));
        matches_kind && matches_query && matches_tags
    }

    pub fn apply<'a>(&self, entries: &'a [LearningEntry]) -> Vec<&'a LearningEntry> {
        entries.iter().filter(|e| self.matches(e)).collect()
    }
}

/// Partition into (favourites, others), preserving order
pub fn split_favorites<'a>(
    entries: Vec<&'a LearningEntry>,
) -> (Vec<&'a LearningEntry>, Vec<&'a LearningEntry>) {
    entries.into_iter().partition(|e| e.is_favorite)
}

/// First health entry logged for `date`. Several may exist; the first one wins.
pub fn health_for_date<'a>(health: &'a [HealthEntry], date: &str) -> Option<&'a HealthEntry> {
    health.iter().find(|h| h.date == date)
}

// Stable, so entries sharing a date stay in insertion order
fn newest_first<'a, T>(items: &'a [T], date: fn(&T) -> &str) -> Vec<&'a T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by(|a, b| date(b).cmp(date(a)));
    sorted
}

/// Health history, newest day first
pub fn health_by_date_desc(health: &[HealthEntry]) -> Vec<&HealthEntry> {
    newest_first(health, |h| h.date.as_str())
}

/// Transactions, newest day first
pub fn finances_by_date_desc(entries: &[FinanceEntry]) -> Vec<&FinanceEntry> {
    newest_first(entries, |f| f.date.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        FinanceDraft, HabitCategory, HabitDraft, HealthDraft, InterviewDraft, InterviewKind,
        JobDraft, LearningDraft,
    };
    use crate::storage::MemoryStorage;

    fn make_store() -> Store<MemoryStorage> {
        Store::with_default_key(MemoryStorage::new())
    }

    fn finance(kind: FinanceKind, amount: f64, date: &str) -> FinanceDraft {
        FinanceDraft {
            date: date.to_string(),
            kind,
            category: "General".to_string(),
            amount,
            description: String::new(),
        }
    }

    fn interview(date: &str, score: f64) -> InterviewDraft {
        InterviewDraft {
            date: date.to_string(),
            kind: InterviewKind::Fullstack,
            duration: 45,
            score,
            notes: String::new(),
        }
    }

    fn habit(date: &str, completed: bool) -> HabitDraft {
        HabitDraft {
            date: date.to_string(),
            category: HabitCategory::Learning,
            description: "read".to_string(),
            completed,
        }
    }

    fn job(status: JobStatus, date: &str) -> JobDraft {
        JobDraft {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            applied_date: date.to_string(),
            status,
            notes: String::new(),
        }
    }

    #[test]
    fn test_finance_income_expense_net() {
        let mut store = make_store();
        store.add_finance(finance(FinanceKind::Income, 500.0, "2024-01-01"));
        store.add_finance(finance(FinanceKind::Expense, 200.0, "2024-01-02"));

        let summary = FinanceSummary::from_entries(store.finances());
        assert_eq!(summary.income, 500.0);
        assert_eq!(summary.expenses, 200.0);
        assert_eq!(summary.net, 300.0);
    }

    #[test]
    fn test_job_stats_and_distribution() {
        let mut store = make_store();
        store.add_job(job(JobStatus::Applied, "2024-01-01"));
        store.add_job(job(JobStatus::Applied, "2024-01-02"));
        store.add_job(job(JobStatus::Offer, "2024-01-03"));

        let stats = JobStats::from_jobs(store.jobs());
        assert_eq!(stats.total, 3);
        assert_eq!(stats.applied, 2);
        assert_eq!(stats.offer, 1);
        assert_eq!(stats.rejected, 0);

        assert_eq!(
            status_distribution(store.jobs()),
            vec![(JobStatus::Applied, 2), (JobStatus::Offer, 1)]
        );
    }

    #[test]
    fn test_interview_average() {
        assert_eq!(InterviewStats::from_interviews(&[]).average_score, None);

        let mut store = make_store();
        store.add_interview(interview("2024-01-01", 70.0));
        store.add_interview(interview("2024-01-02", 85.0));
        let stats = InterviewStats::from_interviews(store.interviews());
        assert_eq!(stats.total, 2);
        assert_eq!(stats.average_score, Some(77.5));
    }

    #[test]
    fn test_habit_completion_rate_rounds() {
        let mut store = make_store();
        store.add_habit(habit("2024-01-01", true));
        store.add_habit(habit("2024-01-01", true));
        store.add_habit(habit("2024-01-02", false));

        let stats = HabitStats::from_habits(store.habits());
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completion_rate, 67);
        assert_eq!(HabitStats::from_habits(&[]).completion_rate, 0);
    }

    #[test]
    fn test_trend_keeps_latest_window_in_date_order() {
        let mut store = make_store();
        for (day, score) in [("2024-01-09", 90.0), ("2024-01-01", 50.0), ("2024-01-05", 70.0)] {
            store.add_interview(interview(day, score));
        }

        let trend = interview_trend(store.interviews(), 2);
        let dates: Vec<&str> = trend.iter().map(|i| i.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-05", "2024-01-09"]);

        // The store keeps insertion order
        assert_eq!(store.interviews()[0].date, "2024-01-09");
        assert_eq!(interview_trend(store.interviews(), DEFAULT_TREND_WINDOW).len(), 3);
    }

    #[test]
    fn test_day_summary_matches_on_date() {
        let mut store = make_store();
        store.add_habit(habit("2024-02-01", true));
        store.add_habit(habit("2024-02-01", false));
        store.add_habit(habit("2024-02-02", true));
        store.add_interview(interview("2024-02-01", 60.0));
        store.add_job(job(JobStatus::Applied, "2024-02-01"));
        store.add_job(job(JobStatus::Applied, "2024-01-31"));

        let day = DaySummary::for_date(&store, "2024-02-01");
        assert_eq!(day.habits.len(), 2);
        assert_eq!(day.interviews.len(), 1);
        assert_eq!(day.jobs.len(), 1);
        assert_eq!(day.habit_stats.completion_rate, 50);
        assert!(DaySummary::for_date(&store, "1999-01-01").is_empty());
    }

    #[test]
    fn test_notes_timeline_newest_day_first() {
        let mut store = make_store();
        store.add_habit(habit("2024-01-01", false));
        store.add_habit(habit("2024-01-03", false));
        store.add_habit(habit("2024-01-01", true));

        let timeline = notes_timeline(store.habits());
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].0, "2024-01-03");
        assert_eq!(timeline[1].0, "2024-01-01");
        assert_eq!(timeline[1].1.len(), 2);
        assert!(!timeline[1].1[0].completed);
    }

    #[test]
    fn test_learning_filter_and_tags() {
        let mut store = make_store();
        let rust = store.add_learning(LearningDraft {
            tags: vec!["rust".to_string(), "memory".to_string()],
            ..LearningDraft::new(
                LearningKind::Concept,
                "Borrowing".to_string(),
                "Shared or unique references".to_string(),
            )
        });
        store.add_learning(LearningDraft {
            tags: vec!["sql".to_string(), "rust".to_string()],
            ..LearningDraft::new(
                LearningKind::Snippet,
                "Upsert".to_string(),
                "INSERT ... ON CONFLICT".to_string(),
            )
        });
        store.update_learning(
            &rust,
            crate::models::LearningPatch {
                is_favorite: Some(true),
                ..Default::default()
            },
        );

        assert_eq!(all_tags(store.learning()), vec!["rust", "memory", "sql"]);

        let filter = LearningFilter {
            query: "REFERENCES".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(store.learning()).len(), 1);

        let filter = LearningFilter {
            kind: Some(LearningKind::Snippet),
            ..Default::default()
        };
        assert_eq!(filter.apply(store.learning())[0].title, "Upsert");

        let filter = LearningFilter {
            tags: vec!["memory".to_string(), "sql".to_string()],
            ..Default::default()
        };
        let (favorites, others) = split_favorites(filter.apply(store.learning()));
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].title, "Borrowing");
        assert_eq!(others.len(), 1);
    }

    #[test]
    fn test_health_lookups() {
        let mut store = make_store();
        store.add_health(HealthDraft::new("2024-01-02".to_string()));
        let mut second = HealthDraft::new("2024-01-05".to_string());
        second.energy = 9;
        store.add_health(second);
        let mut duplicate = HealthDraft::new("2024-01-02".to_string());
        duplicate.energy = 1;
        store.add_health(duplicate);

        assert_eq!(health_for_date(store.health(), "2024-01-02").unwrap().energy, 5);
        assert!(health_for_date(store.health(), "2024-01-03").is_none());

        let sorted = health_by_date_desc(store.health());
        assert_eq!(sorted[0].date, "2024-01-05");
        assert_eq!(sorted.len(), 3);
    }

    #[test]
    fn test_finances_newest_first() {
        let mut store = make_store();
        store.add_finance(finance(FinanceKind::Income, 1.0, "2024-01-01"));
        store.add_finance(finance(FinanceKind::Expense, 2.0, "2024-02-01"));
        store.add_finance(finance(FinanceKind::Expense, 3.0, "2024-01-01"));

        let amounts: Vec<f64> = finances_by_date_desc(store.finances())
            .iter()
            .map(|f| f.amount)
            .collect();
        assert_eq!(amounts, vec![2.0, 1.0, 3.0]);
        assert_eq!(store.finances()[0].amount, 1.0);
    }

    #[test]
    fn test_dashboard_and_has_data() {
        let mut store = make_store();
        assert!(!has_data(&store));
        store.add_finance(finance(FinanceKind::Income, 10.0, "2024-01-01"));
        assert!(has_data(&store));

        let dashboard = Dashboard::from_store(&store);
        assert_eq!(dashboard.finances.income, 10.0);
        assert_eq!(dashboard.jobs.total, 0);
        assert_eq!(dashboard.habits.completion_rate, 0);
    }
}
