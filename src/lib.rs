pub mod cli;
pub mod config;
pub mod models;
pub mod stats;
pub mod storage;
pub mod store;
pub mod utils;

pub use config::Config;
pub use models::{
    Collection, FinanceEntry, HabitEntry, HealthEntry, InterviewSession, JobApplication,
    LearningEntry, MigraineEntry,
};
pub use storage::{MemoryStorage, SqliteStorage, Storage};
pub use store::{Change, Snapshot, Store};
pub use utils::Profile;
