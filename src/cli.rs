use clap::{Parser, Subcommand};
use std::path::PathBuf;
use thiserror::Error;

use crate::config::Config;
use crate::models::{
    Collection, FinanceDraft, FinanceEntry, FinanceKind, FinancePatch, HabitCategory, HabitDraft,
    HabitEntry, HabitPatch, HealthDraft, HealthEntry, HealthPatch, InterviewDraft, InterviewKind,
    InterviewSession, JobApplication, JobDraft, JobPatch, JobStatus, LearningDraft, LearningEntry,
    LearningKind, LearningPatch, MigraineDraft, MigraineEntry, Mood,
};
use crate::stats::{
    self, Dashboard, DaySummary, LearningFilter, all_tags, finance_trend, health_for_date,
    interview_trend, status_distribution,
};
use crate::storage::Storage;
use crate::store::{Store, StoreError};
use crate::utils::{format_long_date, get_current_date_string, non_blank, parse_date, parse_tags};

#[derive(Parser)]
#[command(name = "cdash")]
#[command(about = "Career dashboard - track applications, interviews, habits, money, learning and health")]
#[command(version)]
pub struct Cli {
    /// Custom config file path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Use development mode (uses separate dev config/storage)
    #[arg(long)]
    pub dev: bool,

    /// More log output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Headline numbers across every collection (default if no subcommand)
    Summary,
    /// Habits, interviews and applications logged on one day
    Today {
        /// Day to show (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Print every entry of a collection with its id
    List {
        collection: Collection,
        /// Learning only: case-insensitive text in title or content
        #[arg(long)]
        search: Option<String>,
        /// Learning only: restrict to one kind
        #[arg(long)]
        kind: Option<LearningKind>,
        /// Learning only: keep entries carrying any of these tags (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Print at most this many entries
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Record a job application
    AddJob {
        company: String,
        position: String,
        /// Application date (YYYY-MM-DD)
        #[arg(long)]
        applied: Option<String>,
        /// Starting status, defaults to applied
        #[arg(long)]
        status: Option<JobStatus>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Move an application to another status
    SetJobStatus {
        id: String,
        status: JobStatus,
    },
    /// Change any field of an application
    EditJob {
        id: String,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        position: Option<String>,
        #[arg(long)]
        applied: Option<String>,
        #[arg(long)]
        status: Option<JobStatus>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Log a practice or real interview session
    AddInterview {
        #[arg(long)]
        kind: InterviewKind,
        /// Length in minutes
        #[arg(long)]
        duration: u32,
        /// Score out of 100
        #[arg(long)]
        score: f64,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Write a note / habit entry
    AddNote {
        description: String,
        /// Defaults to learning
        #[arg(long)]
        category: Option<HabitCategory>,
        #[arg(long)]
        date: Option<String>,
    },
    /// Flip a habit entry between open and completed
    ToggleHabit {
        id: String,
    },
    /// Record income or an expense
    AddFinance {
        kind: FinanceKind,
        category: String,
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        date: Option<String>,
    },
    /// Change any field of a transaction
    EditFinance {
        id: String,
        #[arg(long)]
        kind: Option<FinanceKind>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        amount: Option<f64>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        date: Option<String>,
    },
    /// Log how the day went
    LogHealth {
        #[arg(long)]
        mood: Option<Mood>,
        /// Energy from 1 to 10
        #[arg(long)]
        energy: Option<u8>,
        /// Hours slept
        #[arg(long)]
        sleep: Option<f64>,
        #[arg(long)]
        exercise: bool,
        #[arg(long)]
        symptoms: Option<String>,
        #[arg(long)]
        actions: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        date: Option<String>,
    },
    /// Change any field of a health entry
    EditHealth {
        id: String,
        #[arg(long)]
        mood: Option<Mood>,
        #[arg(long)]
        energy: Option<u8>,
        #[arg(long)]
        sleep: Option<f64>,
        /// true or false
        #[arg(long)]
        exercise: Option<bool>,
        #[arg(long)]
        symptoms: Option<String>,
        #[arg(long)]
        actions: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        date: Option<String>,
    },
    /// Log a migraine observation (pass --had if there was one)
    LogMigraine {
        #[arg(long)]
        had: bool,
        /// Severity from 1 to 10
        #[arg(long)]
        severity: Option<u8>,
        /// Hours
        #[arg(long)]
        duration: Option<f64>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        triggers: Option<String>,
        #[arg(long)]
        medications: Option<String>,
        #[arg(long)]
        relieved_by: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        date: Option<String>,
    },
    /// Save a concept, code snippet or resource
    AddLearning {
        kind: LearningKind,
        title: String,
        content: String,
        /// Snippet language (ignored for other kinds)
        #[arg(long)]
        language: Option<String>,
        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
        #[arg(long)]
        source: Option<String>,
        #[arg(long)]
        source_url: Option<String>,
    },
    /// Star or unstar a learning entry
    ToggleFavorite {
        id: String,
    },
    /// Remove an entry from a collection
    Delete {
        collection: Collection,
        id: String,
    },
    /// Print the stored blob as JSON
    Export,
    /// Replace all data with a previously exported blob
    Import {
        path: PathBuf,
    },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),
    #[error("Failed to parse date: {0}")]
    DateParseError(String),
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("{0} must be a finite number")]
    InvalidNumber(&'static str),
    #[error("No entry with id '{id}' in {collection}")]
    NotFound { collection: Collection, id: String },
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Validate a user-supplied date, or fall back to today
fn resolve_date(date: Option<String>) -> Result<String, CliError> {
    match date {
        Some(date_str) => {
            parse_date(&date_str).map_err(|e| {
                CliError::DateParseError(format!("Invalid date format '{}': {}", date_str, e))
            })?;
            Ok(date_str)
        }
        None => Ok(get_current_date_string()),
    }
}

fn require(value: String, field: &'static str) -> Result<String, CliError> {
    if value.trim().is_empty() {
        Err(CliError::MissingField(field))
    } else {
        Ok(value)
    }
}

fn finite(value: f64, field: &'static str) -> Result<f64, CliError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CliError::InvalidNumber(field))
    }
}

/// Validate a date only when one was given
fn optional_date(date: Option<String>) -> Result<Option<String>, CliError> {
    date.map(|d| resolve_date(Some(d))).transpose()
}

fn money(symbol: &str, amount: f64) -> String {
    format!("{}{:.2}", symbol, amount)
}

/// Handle the summary command
pub fn handle_summary<S: Storage>(store: &Store<S>, config: &Config) {
    if !stats::has_data(store) {
        println!("Nothing tracked yet. Add an application, interview, note or transaction to get started.");
        return;
    }

    let dashboard = Dashboard::from_store(store);
    let symbol = &config.currency_symbol;

    println!(
        "Applications: {} ({} interviewing, {} offers, {} rejected)",
        dashboard.jobs.total, dashboard.jobs.interview, dashboard.jobs.offer, dashboard.jobs.rejected
    );
    match dashboard.interviews.average_score {
        Some(avg) => println!(
            "Interviews:   {} sessions, average score {:.1}",
            dashboard.interviews.total, avg
        ),
        None => println!("Interviews:   none yet"),
    }
    println!(
        "Money:        income {}, expenses {}, net {}",
        money(symbol, dashboard.finances.income),
        money(symbol, dashboard.finances.expenses),
        money(symbol, dashboard.finances.net)
    );
    println!(
        "Habits:       {} of {} completed ({}%)",
        dashboard.habits.completed, dashboard.habits.total, dashboard.habits.completion_rate
    );

    let distribution = status_distribution(store.jobs());
    if !distribution.is_empty() {
        println!();
        println!("Application status");
        for (status, count) in distribution {
            println!("  {:<10} {}", status.label(), count);
        }
    }

    let interviews = interview_trend(store.interviews(), config.trend_window);
    if !interviews.is_empty() {
        println!();
        println!("Recent interview scores");
        for interview in interviews {
            println!("  {}  {:>5.1}", interview.date, interview.score);
        }
    }

    let finances = finance_trend(store.finances(), config.trend_window);
    if !finances.is_empty() {
        println!();
        println!("Recent transactions");
        for entry in finances {
            println!("  {}  {:<8} {}", entry.date, kind_label(entry.kind), money(symbol, entry.amount));
        }
    }
}

/// Handle the today command
pub fn handle_today<S: Storage>(store: &Store<S>, date: Option<String>) -> Result<(), CliError> {
    let date = resolve_date(date)?;
    let day = DaySummary::for_date(store, &date);

    println!("{}", format_long_date(&date));
    let health = health_for_date(store.health(), &date);
    if day.is_empty() && health.is_none() {
        println!("Nothing logged for this day.");
        return Ok(());
    }

    if let Some(health) = health {
        println!("Health");
        println!("  {}", describe_health(health));
    }

    if !day.habits.is_empty() {
        println!(
            "Entries ({}/{}, {}%)",
            day.habit_stats.completed, day.habit_stats.total, day.habit_stats.completion_rate
        );
        for habit in &day.habits {
            println!("  {}", describe_habit(habit));
        }
    }
    if !day.interviews.is_empty() {
        println!("Interviews");
        for interview in &day.interviews {
            println!("  {}", describe_interview(interview));
        }
    }
    if !day.jobs.is_empty() {
        println!("Applications");
        for job in &day.jobs {
            println!("  {}", describe_job(job));
        }
    }
    Ok(())
}

/// Handle the list command
pub fn handle_list<S: Storage>(
    store: &Store<S>,
    collection: Collection,
    filter: &LearningFilter,
    limit: Option<usize>,
    config: &Config,
) {
    let lines: Vec<String> = match collection {
        Collection::Jobs => store.jobs().iter().map(describe_job).collect(),
        Collection::Interviews => store.interviews().iter().map(describe_interview).collect(),
        Collection::Habits => stats::notes_timeline(store.habits())
            .into_iter()
            .flat_map(|(_, entries)| entries.into_iter().map(describe_habit))
            .collect(),
        Collection::Finances => stats::finances_by_date_desc(store.finances())
            .into_iter()
            .map(|f| describe_finance(f, &config.currency_symbol))
            .collect(),
        Collection::Health => stats::health_by_date_desc(store.health())
            .into_iter()
            .map(describe_health)
            .collect(),
        Collection::Learning => {
            let tags = all_tags(store.learning());
            if !tags.is_empty() {
                println!("Tags: {}", tags.join(", "));
            }
            let (favorites, others) = stats::split_favorites(filter.apply(store.learning()));
            favorites
                .into_iter()
                .chain(others)
                .map(describe_learning)
                .collect()
        }
        Collection::Migraines => store.migraines().iter().map(describe_migraine).collect(),
    };

    if lines.is_empty() {
        println!("No {} yet.", collection);
    }
    for line in lines.into_iter().take(limit.unwrap_or(usize::MAX)) {
        println!("{}", line);
    }
}

/// Handle the add-job command
pub fn handle_add_job<S: Storage>(
    store: &mut Store<S>,
    company: String,
    position: String,
    applied: Option<String>,
    status: Option<JobStatus>,
    notes: Option<String>,
) -> Result<String, CliError> {
    let company = require(company, "company")?;
    let position = require(position, "position")?;

    let mut job = JobDraft::new(company, position);
    job.applied_date = resolve_date(applied)?;
    job.status = status.unwrap_or(JobStatus::Applied);
    job.notes = notes.unwrap_or_default();

    let id = store.add_job(job);
    println!("Application added (ID: {})", id);
    Ok(id)
}

/// Handle the set-job-status command
pub fn handle_set_job_status<S: Storage>(
    store: &mut Store<S>,
    id: String,
    status: JobStatus,
) -> Result<(), CliError> {
    let patch = JobPatch {
        status: Some(status),
        ..Default::default()
    };
    if !store.update_job(&id, patch) {
        return Err(CliError::NotFound {
            collection: Collection::Jobs,
            id,
        });
    }
    println!("Application {} is now {}", id, status.label());
    Ok(())
}

/// Handle the edit-job command
pub fn handle_edit_job<S: Storage>(
    store: &mut Store<S>,
    id: String,
    company: Option<String>,
    position: Option<String>,
    applied: Option<String>,
    status: Option<JobStatus>,
    notes: Option<String>,
) -> Result<(), CliError> {
    let patch = JobPatch {
        company: company.map(|c| require(c, "company")).transpose()?,
        position: position.map(|p| require(p, "position")).transpose()?,
        applied_date: optional_date(applied)?,
        status,
        notes,
    };
    if !store.update_job(&id, patch) {
        return Err(CliError::NotFound {
            collection: Collection::Jobs,
            id,
        });
    }
    println!("Application {} updated", id);
    Ok(())
}

/// Handle the add-interview command
pub fn handle_add_interview<S: Storage>(
    store: &mut Store<S>,
    kind: InterviewKind,
    duration: u32,
    score: f64,
    date: Option<String>,
    notes: Option<String>,
) -> Result<String, CliError> {
    let interview = InterviewDraft {
        date: resolve_date(date)?,
        kind,
        duration,
        score: finite(score, "score")?,
        notes: notes.unwrap_or_default(),
    };
    let id = store.add_interview(interview);
    println!("Interview logged (ID: {})", id);
    Ok(id)
}

/// Handle the add-note command
pub fn handle_add_note<S: Storage>(
    store: &mut Store<S>,
    description: String,
    category: Option<HabitCategory>,
    date: Option<String>,
) -> Result<String, CliError> {
    let description = require(description, "description")?;
    let mut habit = HabitDraft::new(category.unwrap_or(HabitCategory::Learning), description);
    habit.date = resolve_date(date)?;

    let id = store.add_habit(habit);
    println!("Note added (ID: {})", id);
    Ok(id)
}

/// Handle the toggle-habit command
pub fn handle_toggle_habit<S: Storage>(store: &mut Store<S>, id: String) -> Result<bool, CliError> {
    let completed = match store.get::<HabitEntry>(&id) {
        Some(habit) => !habit.completed,
        None => {
            return Err(CliError::NotFound {
                collection: Collection::Habits,
                id,
            });
        }
    };
    store.update_habit(
        &id,
        HabitPatch {
            completed: Some(completed),
            ..Default::default()
        },
    );
    println!(
        "Entry {} marked {}",
        id,
        if completed { "completed" } else { "open" }
    );
    Ok(completed)
}

/// Handle the add-finance command
pub fn handle_add_finance<S: Storage>(
    store: &mut Store<S>,
    kind: FinanceKind,
    category: String,
    amount: f64,
    description: Option<String>,
    date: Option<String>,
) -> Result<String, CliError> {
    let category = require(category, "category")?;
    if finite(amount, "amount")? == 0.0 {
        return Err(CliError::MissingField("amount"));
    }

    let entry = FinanceDraft {
        date: resolve_date(date)?,
        kind,
        category,
        amount,
        description: description.unwrap_or_default(),
    };
    let id = store.add_finance(entry);
    println!("Transaction added (ID: {})", id);
    Ok(id)
}

/// Handle the edit-finance command
pub fn handle_edit_finance<S: Storage>(
    store: &mut Store<S>,
    id: String,
    kind: Option<FinanceKind>,
    category: Option<String>,
    amount: Option<f64>,
    description: Option<String>,
    date: Option<String>,
) -> Result<(), CliError> {
    if let Some(amount) = amount {
        if finite(amount, "amount")? == 0.0 {
            return Err(CliError::MissingField("amount"));
        }
    }
    let patch = FinancePatch {
        date: optional_date(date)?,
        kind,
        category: category.map(|c| require(c, "category")).transpose()?,
        amount,
        description,
    };
    if !store.update_finance(&id, patch) {
        return Err(CliError::NotFound {
            collection: Collection::Finances,
            id,
        });
    }
    println!("Transaction {} updated", id);
    Ok(())
}

/// Handle the log-health command
#[allow(clippy::too_many_arguments)]
pub fn handle_log_health<S: Storage>(
    store: &mut Store<S>,
    mood: Option<Mood>,
    energy: Option<u8>,
    sleep: Option<f64>,
    exercise: bool,
    symptoms: Option<String>,
    actions: Option<String>,
    notes: Option<String>,
    date: Option<String>,
) -> Result<String, CliError> {
    let mut entry = HealthDraft::new(resolve_date(date)?);
    if let Some(mood) = mood {
        entry.mood = mood;
    }
    if let Some(energy) = energy {
        entry.energy = energy;
    }
    if let Some(sleep) = sleep {
        entry.sleep = finite(sleep, "sleep")?;
    }
    entry.exercise = exercise;
    entry.symptoms = symptoms.unwrap_or_default();
    entry.actions = actions.unwrap_or_default();
    entry.notes = notes.unwrap_or_default();

    let id = store.add_health(entry);
    println!("Health entry logged (ID: {})", id);
    Ok(id)
}

/// Handle the edit-health command
#[allow(clippy::too_many_arguments)]
pub fn handle_edit_health<S: Storage>(
    store: &mut Store<S>,
    id: String,
    mood: Option<Mood>,
    energy: Option<u8>,
    sleep: Option<f64>,
    exercise: Option<bool>,
    symptoms: Option<String>,
    actions: Option<String>,
    notes: Option<String>,
    date: Option<String>,
) -> Result<(), CliError> {
    let patch = HealthPatch {
        date: optional_date(date)?,
        mood,
        energy,
        sleep: sleep.map(|s| finite(s, "sleep")).transpose()?,
        exercise,
        symptoms,
        actions,
        notes,
    };
    if !store.update_health(&id, patch) {
        return Err(CliError::NotFound {
            collection: Collection::Health,
            id,
        });
    }
    println!("Health entry {} updated", id);
    Ok(())
}

/// Handle the log-migraine command
#[allow(clippy::too_many_arguments)]
pub fn handle_log_migraine<S: Storage>(
    store: &mut Store<S>,
    had_migraine: bool,
    severity: Option<u8>,
    duration: Option<f64>,
    location: Option<String>,
    triggers: Option<String>,
    medications: Option<String>,
    relieved_by: Option<String>,
    notes: Option<String>,
    date: Option<String>,
) -> Result<String, CliError> {
    let entry = MigraineDraft {
        date: resolve_date(date)?,
        had_migraine,
        severity,
        duration: duration.map(|d| finite(d, "duration")).transpose()?,
        location: non_blank(location),
        triggers: non_blank(triggers),
        medications: non_blank(medications),
        relieved_by: non_blank(relieved_by),
        notes: non_blank(notes),
    };
    let id = store.add_migraine(entry);
    println!("Migraine entry logged (ID: {})", id);
    Ok(id)
}

/// Handle the add-learning command
#[allow(clippy::too_many_arguments)]
pub fn handle_add_learning<S: Storage>(
    store: &mut Store<S>,
    kind: LearningKind,
    title: String,
    content: String,
    language: Option<String>,
    tags: Option<String>,
    source: Option<String>,
    source_url: Option<String>,
) -> Result<String, CliError> {
    let title = require(title, "title")?;
    let content = require(content, "content")?;

    let mut entry = LearningDraft::new(kind, title, content);
    if kind == LearningKind::Snippet {
        entry.language = non_blank(language);
    }
    entry.tags = tags.as_deref().map(parse_tags).unwrap_or_default();
    entry.source = non_blank(source);
    entry.source_url = non_blank(source_url);

    let id = store.add_learning(entry);
    println!("Learning entry added (ID: {})", id);
    Ok(id)
}

/// Handle the toggle-favorite command
pub fn handle_toggle_favorite<S: Storage>(
    store: &mut Store<S>,
    id: String,
) -> Result<bool, CliError> {
    let favorite = match store.get::<LearningEntry>(&id) {
        Some(entry) => !entry.is_favorite,
        None => {
            return Err(CliError::NotFound {
                collection: Collection::Learning,
                id,
            });
        }
    };
    store.update_learning(
        &id,
        LearningPatch {
            is_favorite: Some(favorite),
            ..Default::default()
        },
    );
    println!(
        "Entry {} {}",
        id,
        if favorite { "starred" } else { "unstarred" }
    );
    Ok(favorite)
}

/// Handle the delete command
pub fn handle_delete<S: Storage>(
    store: &mut Store<S>,
    collection: Collection,
    id: String,
) -> Result<(), CliError> {
    if !store.delete_from(collection, &id) {
        return Err(CliError::NotFound { collection, id });
    }
    println!("Deleted {} from {}", id, collection);
    Ok(())
}

/// Handle the export command
pub fn handle_export<S: Storage>(store: &Store<S>) -> Result<(), CliError> {
    println!("{}", store.to_json()?);
    Ok(())
}

/// Handle the import command
pub fn handle_import<S: Storage>(store: &mut Store<S>, path: PathBuf) -> Result<(), CliError> {
    let blob = std::fs::read_to_string(&path)?;
    tracing::info!(path = ?path, bytes = blob.len(), "importing store data");
    store.import_json(&blob)?;
    let snapshot = store.snapshot();
    let counts: Vec<String> = Collection::ALL
        .iter()
        .map(|c| format!("{} {}", snapshot.len(*c), c))
        .collect();
    println!("Imported {}", counts.join(", "));
    Ok(())
}

fn kind_label(kind: FinanceKind) -> &'static str {
    match kind {
        FinanceKind::Income => "income",
        FinanceKind::Expense => "expense",
    }
}

fn describe_job(job: &JobApplication) -> String {
    let mut line = format!(
        "{}  {}  {} at {} [{}]",
        job.id,
        job.applied_date,
        job.position,
        job.company,
        job.status.label()
    );
    if !job.notes.is_empty() {
        line.push_str(&format!(" - {}", job.notes));
    }
    line
}

fn describe_interview(interview: &InterviewSession) -> String {
    format!(
        "{}  {}  {} interview, {} min, score {}",
        interview.id,
        interview.date,
        interview.kind.label(),
        interview.duration,
        interview.score
    )
}

fn describe_habit(habit: &HabitEntry) -> String {
    format!(
        "{}  {}  [{}] {} ({})",
        habit.id,
        habit.date,
        if habit.completed { "x" } else { " " },
        habit.description,
        habit.category.label()
    )
}

fn describe_finance(entry: &FinanceEntry, symbol: &str) -> String {
    let mut line = format!(
        "{}  {}  {:<8} {:<12} {}",
        entry.id,
        entry.date,
        kind_label(entry.kind),
        entry.category,
        money(symbol, entry.amount)
    );
    if !entry.description.is_empty() {
        line.push_str(&format!(" - {}", entry.description));
    }
    line
}

fn describe_health(entry: &HealthEntry) -> String {
    format!(
        "{}  {}  mood {}, energy {}/10, sleep {}h, exercise {}",
        entry.id,
        entry.date,
        entry.mood.label(),
        entry.energy,
        entry.sleep,
        if entry.exercise { "done" } else { "not done" }
    )
}

fn describe_learning(entry: &LearningEntry) -> String {
    let mut line = format!(
        "{}  {}{} [{}]",
        entry.id,
        if entry.is_favorite { "* " } else { "" },
        entry.title,
        entry.kind.label()
    );
    if let Some(language) = &entry.language {
        line.push_str(&format!(" ({})", language));
    }
    if !entry.tags.is_empty() {
        line.push_str(&format!(" #{}", entry.tags.join(" #")));
    }
    line
}

fn describe_migraine(entry: &MigraineEntry) -> String {
    if !entry.had_migraine {
        return format!("{}  {}  no migraine", entry.id, entry.date);
    }
    let mut line = format!("{}  {}  migraine", entry.id, entry.date);
    if let Some(severity) = entry.severity {
        line.push_str(&format!(", severity {}/10", severity));
    }
    if let Some(duration) = entry.duration {
        line.push_str(&format!(", {}h", duration));
    }
    if let Some(triggers) = &entry.triggers {
        line.push_str(&format!(", triggers: {}", triggers));
    }
    line
}
