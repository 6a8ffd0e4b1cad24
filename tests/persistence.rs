use career_dashboard::models::{
    FinanceDraft, FinanceKind, HabitCategory, HabitDraft, HealthDraft, InterviewDraft,
    InterviewKind, JobDraft, JobPatch, JobStatus, LearningDraft, LearningKind, LearningPatch,
    MigraineDraft,
};
use career_dashboard::storage::Storage;
use career_dashboard::store::DEFAULT_STORAGE_KEY;
use career_dashboard::{Collection, SqliteStorage, Store};
use tempfile::TempDir;

fn open(dir: &TempDir) -> Store<SqliteStorage> {
    let path = dir.path().join("data").join("store.db");
    let storage = SqliteStorage::new(path.to_str().unwrap()).unwrap();
    Store::with_default_key(storage)
}

#[test]
fn test_every_collection_survives_reopen() {
    let dir = TempDir::new().unwrap();

    let (job_id, learning_id) = {
        let mut store = open(&dir);
        let job_id = store.add_job(JobDraft::new("Acme".to_string(), "Engineer".to_string()));
        store.update_job(
            &job_id,
            JobPatch {
                status: Some(JobStatus::Interview),
                ..Default::default()
            },
        );
        store.add_interview(InterviewDraft {
            date: "2024-01-05".to_string(),
            kind: InterviewKind::SystemDesign,
            duration: 45,
            score: 82.5,
            notes: String::new(),
        });
        store.add_habit(HabitDraft::new(
            HabitCategory::Writing,
            "Draft a post".to_string(),
        ));
        store.add_finance(FinanceDraft {
            date: "2024-01-05".to_string(),
            kind: FinanceKind::Expense,
            category: "Books".to_string(),
            amount: 39.99,
            description: String::new(),
        });
        store.add_health(HealthDraft::new("2024-01-05".to_string()));
        let learning_id = store.add_learning(LearningDraft::new(
            LearningKind::Resource,
            "Rust book".to_string(),
            "Chapters 1-4".to_string(),
        ));
        store.update_learning(
            &learning_id,
            LearningPatch {
                is_favorite: Some(true),
                ..Default::default()
            },
        );
        store.add_migraine(MigraineDraft {
            date: "2024-01-05".to_string(),
            ..Default::default()
        });

        assert!(store.is_dirty());
        store.flush();
        assert!(!store.is_dirty());
        (job_id, learning_id)
    };

    let mut reopened = open(&dir);
    assert!(reopened.try_hydrate().unwrap());

    for collection in Collection::ALL {
        assert_eq!(reopened.snapshot().len(collection), 1, "{}", collection);
    }
    assert_eq!(reopened.jobs()[0].id, job_id);
    assert_eq!(reopened.jobs()[0].status, JobStatus::Interview);
    assert_eq!(reopened.jobs()[0].company, "Acme");
    assert_eq!(reopened.interviews()[0].kind, InterviewKind::SystemDesign);
    assert_eq!(reopened.finances()[0].amount, 39.99);
    assert_eq!(reopened.learning()[0].id, learning_id);
    assert!(reopened.learning()[0].is_favorite);
    assert!(!reopened.migraines()[0].had_migraine);
    assert!(!reopened.is_dirty());
}

#[test]
fn test_hydrate_with_nothing_saved_keeps_empty_store() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    assert!(!store.try_hydrate().unwrap());
    assert!(store.snapshot().is_empty());
}

#[test]
fn test_persisted_blob_uses_wire_names() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    store.add_job(JobDraft::new("Acme".to_string(), "Engineer".to_string()));
    store.try_persist().unwrap();

    let blob = store.storage().get_item(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 7);
    for collection in Collection::ALL {
        assert!(object.contains_key(collection.key()));
    }
    assert_eq!(value["jobs"][0]["status"], "applied");
    assert!(value["jobs"][0].get("appliedDate").is_some());
}
