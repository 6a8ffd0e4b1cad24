use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::get_current_date_string;

/// The seven named collections held by the store, in persisted key order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Collection {
    Jobs,
    Interviews,
    Habits,
    Finances,
    Health,
    Learning,
    Migraines,
}

impl Collection {
    pub const ALL: [Collection; 7] = [
        Collection::Jobs,
        Collection::Interviews,
        Collection::Habits,
        Collection::Finances,
        Collection::Health,
        Collection::Learning,
        Collection::Migraines,
    ];

    /// JSON key used for this collection in the persisted blob
    pub fn key(self) -> &'static str {
        match self {
            Collection::Jobs => "jobs",
            Collection::Interviews => "interviews",
            Collection::Habits => "habits",
            Collection::Finances => "finances",
            Collection::Health => "health",
            Collection::Learning => "learning",
            Collection::Migraines => "migraines",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Glue between an entity, the payload used to create it and the payload used to patch it.
///
/// Drafts are the entity minus its id. Patches carry `Some` only for the fields that
/// should change; optional entity fields use `Option<Option<T>>` so a patch can clear them.
pub trait Entity {
    type Draft;
    type Patch;

    const COLLECTION: Collection;

    fn from_draft(id: String, draft: Self::Draft) -> Self;
    fn id(&self) -> &str;
    fn apply(&mut self, patch: Self::Patch);
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// JSON has no NaN or infinity, so such numbers are written as `null`. Read them back as zero.
fn number_or_zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    Applied,
    Interview,
    Rejected,
    Offer,
}

impl JobStatus {
    pub fn label(self) -> &'static str {
        match self {
            JobStatus::Applied => "Applied",
            JobStatus::Interview => "Interview",
            JobStatus::Rejected => "Rejected",
            JobStatus::Offer => "Offer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum InterviewKind {
    Frontend,
    Fullstack,
    SystemDesign,
}

impl InterviewKind {
    pub fn label(self) -> &'static str {
        match self {
            InterviewKind::Frontend => "frontend",
            InterviewKind::Fullstack => "fullstack",
            InterviewKind::SystemDesign => "system design",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum HabitCategory {
    Learning,
    Writing,
    Freelancing,
    InterviewPrep,
}

impl HabitCategory {
    pub fn label(self) -> &'static str {
        match self {
            HabitCategory::Learning => "Learning",
            HabitCategory::Writing => "Writing",
            HabitCategory::Freelancing => "Freelancing",
            HabitCategory::InterviewPrep => "Interview Prep",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FinanceKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Mood {
    Excellent,
    Good,
    Okay,
    Poor,
}

impl Mood {
    pub fn label(self) -> &'static str {
        match self {
            Mood::Excellent => "Excellent",
            Mood::Good => "Good",
            Mood::Okay => "Okay",
            Mood::Poor => "Poor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LearningKind {
    Concept,
    Snippet,
    Resource,
}

impl LearningKind {
    pub fn label(self) -> &'static str {
        match self {
            LearningKind::Concept => "Concept",
            LearningKind::Snippet => "Code Snippet",
            LearningKind::Resource => "Resource",
        }
    }
}

// ---------------------------------------------------------------------------
// Job applications
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: String,
    pub company: String,
    pub position: String,
    pub applied_date: String, // YYYY-MM-DD
    pub status: JobStatus,
    pub notes: String,
}

#[derive(Debug, Clone)]
pub struct JobDraft {
    pub company: String,
    pub position: String,
    pub applied_date: String,
    pub status: JobStatus,
    pub notes: String,
}

#[derive(Debug, Clone, Default)]
pub struct JobPatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub applied_date: Option<String>,
    pub status: Option<JobStatus>,
    pub notes: Option<String>,
}

impl JobDraft {
    /// A freshly applied-to position, dated today
    pub fn new(company: String, position: String) -> Self {
        Self {
            company,
            position,
            applied_date: get_current_date_string(),
            status: JobStatus::Applied,
            notes: String::new(),
        }
    }
}

impl Entity for JobApplication {
    type Draft = JobDraft;
    type Patch = JobPatch;

    const COLLECTION: Collection = Collection::Jobs;

    fn from_draft(id: String, draft: JobDraft) -> Self {
        Self {
            id,
            company: draft.company,
            position: draft.position,
            applied_date: draft.applied_date,
            status: draft.status,
            notes: draft.notes,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, patch: JobPatch) {
        merge(&mut self.company, patch.company);
        merge(&mut self.position, patch.position);
        merge(&mut self.applied_date, patch.applied_date);
        merge(&mut self.status, patch.status);
        merge(&mut self.notes, patch.notes);
    }
}

// ---------------------------------------------------------------------------
// Interview sessions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSession {
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: InterviewKind,
    #[serde(deserialize_with = "number_or_zero")]
    pub duration: u32, // minutes
    #[serde(deserialize_with = "number_or_zero")]
    pub score: f64, // 0-100
    pub notes: String,
}

#[derive(Debug, Clone)]
pub struct InterviewDraft {
    pub date: String,
    pub kind: InterviewKind,
    pub duration: u32,
    pub score: f64,
    pub notes: String,
}

#[derive(Debug, Clone, Default)]
pub struct InterviewPatch {
    pub date: Option<String>,
    pub kind: Option<InterviewKind>,
    pub duration: Option<u32>,
    pub score: Option<f64>,
    pub notes: Option<String>,
}

impl Entity for InterviewSession {
    type Draft = InterviewDraft;
    type Patch = InterviewPatch;

    const COLLECTION: Collection = Collection::Interviews;

    fn from_draft(id: String, draft: InterviewDraft) -> Self {
        Self {
            id,
            date: draft.date,
            kind: draft.kind,
            duration: draft.duration,
            score: draft.score,
            notes: draft.notes,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, patch: InterviewPatch) {
        merge(&mut self.date, patch.date);
        merge(&mut self.kind, patch.kind);
        merge(&mut self.duration, patch.duration);
        merge(&mut self.score, patch.score);
        merge(&mut self.notes, patch.notes);
    }
}

// ---------------------------------------------------------------------------
// Habits (also used as free-form notes)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitEntry {
    pub id: String,
    pub date: String,
    pub category: HabitCategory,
    pub description: String,
    pub completed: bool,
}

#[derive(Debug, Clone)]
pub struct HabitDraft {
    pub date: String,
    pub category: HabitCategory,
    pub description: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct HabitPatch {
    pub date: Option<String>,
    pub category: Option<HabitCategory>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl HabitDraft {
    /// An open (not yet completed) entry for today
    pub fn new(category: HabitCategory, description: String) -> Self {
        Self {
            date: get_current_date_string(),
            category,
            description,
            completed: false,
        }
    }
}

impl Entity for HabitEntry {
    type Draft = HabitDraft;
    type Patch = HabitPatch;

    const COLLECTION: Collection = Collection::Habits;

    fn from_draft(id: String, draft: HabitDraft) -> Self {
        Self {
            id,
            date: draft.date,
            category: draft.category,
            description: draft.description,
            completed: draft.completed,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, patch: HabitPatch) {
        merge(&mut self.date, patch.date);
        merge(&mut self.category, patch.category);
        merge(&mut self.description, patch.description);
        merge(&mut self.completed, patch.completed);
    }
}

// ---------------------------------------------------------------------------
// Finances
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceEntry {
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: FinanceKind,
    pub category: String,
    #[serde(deserialize_with = "number_or_zero")]
    pub amount: f64,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct FinanceDraft {
    pub date: String,
    pub kind: FinanceKind,
    pub category: String,
    pub amount: f64,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct FinancePatch {
    pub date: Option<String>,
    pub kind: Option<FinanceKind>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub description: Option<String>,
}

impl Entity for FinanceEntry {
    type Draft = FinanceDraft;
    type Patch = FinancePatch;

    const COLLECTION: Collection = Collection::Finances;

    fn from_draft(id: String, draft: FinanceDraft) -> Self {
        Self {
            id,
            date: draft.date,
            kind: draft.kind,
            category: draft.category,
            amount: draft.amount,
            description: draft.description,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, patch: FinancePatch) {
        merge(&mut self.date, patch.date);
        merge(&mut self.kind, patch.kind);
        merge(&mut self.category, patch.category);
        merge(&mut self.amount, patch.amount);
        merge(&mut self.description, patch.description);
    }
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthEntry {
    pub id: String,
    pub date: String,
    pub mood: Mood,
    #[serde(deserialize_with = "number_or_zero")]
    pub energy: u8, // 1-10
    #[serde(deserialize_with = "number_or_zero")]
    pub sleep: f64, // hours
    pub exercise: bool,
    pub symptoms: String,
    pub actions: String,
    pub notes: String,
}

#[derive(Debug, Clone)]
pub struct HealthDraft {
    pub date: String,
    pub mood: Mood,
    pub energy: u8,
    pub sleep: f64,
    pub exercise: bool,
    pub symptoms: String,
    pub actions: String,
    pub notes: String,
}

#[derive(Debug, Clone, Default)]
pub struct HealthPatch {
    pub date: Option<String>,
    pub mood: Option<Mood>,
    pub energy: Option<u8>,
    pub sleep: Option<f64>,
    pub exercise: Option<bool>,
    pub symptoms: Option<String>,
    pub actions: Option<String>,
    pub notes: Option<String>,
}

impl HealthDraft {
    /// The entry form's starting values: a good day, mid energy, seven hours of sleep
    pub fn new(date: String) -> Self {
        Self {
            date,
            mood: Mood::Good,
            energy: 5,
            sleep: 7.0,
            exercise: false,
            symptoms: String::new(),
            actions: String::new(),
            notes: String::new(),
        }
    }
}

impl Entity for HealthEntry {
    type Draft = HealthDraft;
    type Patch = HealthPatch;

    const COLLECTION: Collection = Collection::Health;

    fn from_draft(id: String, draft: HealthDraft) -> Self {
        Self {
            id,
            date: draft.date,
            mood: draft.mood,
            energy: draft.energy,
            sleep: draft.sleep,
            exercise: draft.exercise,
            symptoms: draft.symptoms,
            actions: draft.actions,
            notes: draft.notes,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, patch: HealthPatch) {
        merge(&mut self.date, patch.date);
        merge(&mut self.mood, patch.mood);
        merge(&mut self.energy, patch.energy);
        merge(&mut self.sleep, patch.sleep);
        merge(&mut self.exercise, patch.exercise);
        merge(&mut self.symptoms, patch.symptoms);
        merge(&mut self.actions, patch.actions);
        merge(&mut self.notes, patch.notes);
    }
}

// ---------------------------------------------------------------------------
// Migraines
// ---------------------------------------------------------------------------

/// A daily migraine observation. The optional fields only mean something when
/// `had_migraine` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigraineEntry {
    pub id: String,
    pub date: String,
    pub had_migraine: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<u8>, // 1-10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>, // hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggers: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medications: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relieved_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MigraineDraft {
    pub date: String,
    pub had_migraine: bool,
    pub severity: Option<u8>,
    pub duration: Option<f64>,
    pub location: Option<String>,
    pub triggers: Option<String>,
    pub medications: Option<String>,
    pub relieved_by: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MigrainePatch {
    pub date: Option<String>,
    pub had_migraine: Option<bool>,
    pub severity: Option<Option<u8>>,
    pub duration: Option<Option<f64>>,
    pub location: Option<Option<String>>,
    pub triggers: Option<Option<String>>,
    pub medications: Option<Option<String>>,
    pub relieved_by: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

impl Entity for MigraineEntry {
    type Draft = MigraineDraft;
    type Patch = MigrainePatch;

    const COLLECTION: Collection = Collection::Migraines;

    fn from_draft(id: String, draft: MigraineDraft) -> Self {
        Self {
            id,
            date: draft.date,
            had_migraine: draft.had_migraine,
            severity: draft.severity,
            duration: draft.duration,
            location: draft.location,
            triggers: draft.triggers,
            medications: draft.medications,
            relieved_by: draft.relieved_by,
            notes: draft.notes,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, patch: MigrainePatch) {
        merge(&mut self.date, patch.date);
        merge(&mut self.had_migraine, patch.had_migraine);
        merge(&mut self.severity, patch.severity);
        merge(&mut self.duration, patch.duration);
        merge(&mut self.location, patch.location);
        merge(&mut self.triggers, patch.triggers);
        merge(&mut self.medications, patch.medications);
        merge(&mut self.relieved_by, patch.relieved_by);
        merge(&mut self.notes, patch.notes);
    }
}

// ---------------------------------------------------------------------------
// Learning
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningEntry {
    pub id: String,
    pub date: String, // creation date, not a query key
    #[serde(rename = "type")]
    pub kind: LearningKind,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

#[derive(Debug, Clone)]
pub struct LearningDraft {
    pub date: String,
    pub kind: LearningKind,
    pub title: String,
    pub content: String,
    pub language: Option<String>,
    pub tags: Vec<String>,
    pub source: Option<String>,
    pub source_url: Option<String>,
    /// Ignored on insert: new entries always start out as non-favourites
    pub is_favorite: bool,
}

#[derive(Debug, Clone, Default)]
pub struct LearningPatch {
    pub date: Option<String>,
    pub kind: Option<LearningKind>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub language: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    pub source: Option<Option<String>>,
    pub source_url: Option<Option<String>>,
    pub is_favorite: Option<bool>,
}

impl LearningDraft {
    pub fn new(kind: LearningKind, title: String, content: String) -> Self {
        Self {
            date: get_current_date_string(),
            kind,
            title,
            content,
            language: None,
            tags: Vec::new(),
            source: None,
            source_url: None,
            is_favorite: false,
        }
    }
}

impl Entity for LearningEntry {
    type Draft = LearningDraft;
    type Patch = LearningPatch;

    const COLLECTION: Collection = Collection::Learning;

    fn from_draft(id: String, draft: LearningDraft) -> Self {
        Self {
            id,
            date: draft.date,
            kind: draft.kind,
            title: draft.title,
            content: draft.content,
            language: draft.language,
            tags: draft.tags,
            source: draft.source,
            source_url: draft.source_url,
            is_favorite: false,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, patch: LearningPatch) {
        merge(&mut self.date, patch.date);
        merge(&mut self.kind, patch.kind);
        merge(&mut self.title, patch.title);
        merge(&mut self.content, patch.content);
        merge(&mut self.language, patch.language);
        merge(&mut self.tags, patch.tags);
        merge(&mut self.source, patch.source);
        merge(&mut self.source_url, patch.source_url);
        merge(&mut self.is_favorite, patch.is_favorite);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_value(JobStatus::Offer).unwrap(), json!("offer"));
        assert_eq!(
            serde_json::to_value(InterviewKind::SystemDesign).unwrap(),
            json!("system-design")
        );
        assert_eq!(
            serde_json::to_value(HabitCategory::InterviewPrep).unwrap(),
            json!("interview-prep")
        );
        let mood: Mood = serde_json::from_value(json!("okay")).unwrap();
        assert_eq!(mood, Mood::Okay);
    }

    #[test]
    fn test_job_uses_camel_case_fields() {
        let job = JobApplication {
            id: "abc".to_string(),
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            applied_date: "2024-01-05".to_string(),
            status: JobStatus::Applied,
            notes: String::new(),
        };
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["appliedDate"], json!("2024-01-05"));
        assert_eq!(value["status"], json!("applied"));
        assert!(value.get("applied_date").is_none());
    }

    #[test]
    fn test_kind_fields_serialize_as_type() {
        let entry = FinanceEntry {
            id: "f1".to_string(),
            date: "2024-02-01".to_string(),
            kind: FinanceKind::Expense,
            category: "Rent".to_string(),
            amount: 1200.0,
            description: String::new(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], json!("expense"));
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_migraine_omits_absent_optionals() {
        let entry = MigraineEntry::from_draft(
            "m1".to_string(),
            MigraineDraft {
                date: "2024-03-01".to_string(),
                had_migraine: false,
                ..Default::default()
            },
        );
        let value = serde_json::to_value(&entry).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(value["hadMigraine"], json!(false));

        // Older blobs may carry the optional fields or not
        let parsed: MigraineEntry = serde_json::from_value(json!({
            "id": "m2",
            "date": "2024-03-02",
            "hadMigraine": true,
            "severity": 7,
            "relievedBy": "dark room"
        }))
        .unwrap();
        assert_eq!(parsed.severity, Some(7));
        assert_eq!(parsed.relieved_by.as_deref(), Some("dark room"));
        assert!(parsed.duration.is_none());
    }

    #[test]
    fn test_learning_from_draft_is_never_favorite() {
        let mut draft = LearningDraft::new(
            LearningKind::Snippet,
            "Iterators".to_string(),
            "iter().map()".to_string(),
        );
        draft.is_favorite = true;
        let entry = LearningEntry::from_draft("l1".to_string(), draft);
        assert!(!entry.is_favorite);

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["isFavorite"], json!(false));
        assert_eq!(value["type"], json!("snippet"));
    }

    #[test]
    fn test_patch_only_touches_present_fields() {
        let mut job = JobApplication::from_draft(
            "j1".to_string(),
            JobDraft {
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                applied_date: "2024-01-05".to_string(),
                status: JobStatus::Applied,
                notes: "referral".to_string(),
            },
        );
        job.apply(JobPatch {
            status: Some(JobStatus::Interview),
            ..Default::default()
        });
        assert_eq!(job.status, JobStatus::Interview);
        assert_eq!(job.company, "Acme");
        assert_eq!(job.notes, "referral");
        assert_eq!(job.id, "j1");
    }

    #[test]
    fn test_patch_can_clear_optional_fields() {
        let mut entry = MigraineEntry::from_draft(
            "m1".to_string(),
            MigraineDraft {
                date: "2024-03-01".to_string(),
                had_migraine: true,
                severity: Some(6),
                triggers: Some("screens".to_string()),
                ..Default::default()
            },
        );
        entry.apply(MigrainePatch {
            had_migraine: Some(false),
            severity: Some(None),
            ..Default::default()
        });
        assert!(!entry.had_migraine);
        assert!(entry.severity.is_none());
        assert_eq!(entry.triggers.as_deref(), Some("screens"));
    }

    #[test]
    fn test_null_numbers_read_back_as_zero() {
        let health: HealthEntry = serde_json::from_value(json!({
            "id": "h1",
            "date": "2024-01-05",
            "mood": "okay",
            "energy": 6,
            "sleep": null,
            "exercise": false,
            "symptoms": "",
            "actions": "",
            "notes": ""
        }))
        .unwrap();
        assert_eq!(health.sleep, 0.0);
        assert_eq!(health.energy, 6);

        let finance = FinanceEntry {
            id: "f1".to_string(),
            date: "2024-01-05".to_string(),
            kind: FinanceKind::Expense,
            category: "Food".to_string(),
            amount: f64::NAN,
            description: String::new(),
        };
        let value = serde_json::to_value(&finance).unwrap();
        assert!(value["amount"].is_null());
        let back: FinanceEntry = serde_json::from_value(value).unwrap();
        assert_eq!(back.amount, 0.0);
    }
}
