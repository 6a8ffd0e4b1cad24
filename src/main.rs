use career_dashboard::{
    Config, Profile, SqliteStorage, Store,
    cli::{self, Cli, Commands},
    stats::LearningFilter,
};
use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Set up error reporting with color-eyre
    color_eyre::install()?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Determine profile: --dev flag enables dev mode, otherwise use prod
    let profile = if cli.dev { Profile::Dev } else { Profile::Prod };

    // An explicit --config file wins over the profile's default location
    let config = match &cli.config {
        Some(path) => Config::load_from_path(&career_dashboard::utils::expand_path(path))?,
        None => Config::load_with_profile(profile)?,
    };

    // RUST_LOG, then -v count, then the configured level
    let default_filter = match cli.verbose {
        0 => config.log_level.clone(),
        1 => "career_dashboard=info,cdash=info".to_string(),
        _ => "career_dashboard=debug,cdash=debug".to_string(),
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Open storage and load whatever was saved last time
    let storage_path = config.get_storage_path();
    let storage = SqliteStorage::new(
        storage_path
            .to_str()
            .ok_or_else(|| color_eyre::eyre::eyre!("Storage path contains invalid UTF-8"))?,
    )?;
    let mut store = Store::new(storage, config.storage_key.clone());
    store.subscribe(|change| tracing::debug!(?change, "store changed"));
    store.hydrate();

    // Dispatch to appropriate command handler
    let outcome = dispatch(cli.command.unwrap_or(Commands::Summary), &mut store, &config);

    // Whatever the handler managed to change is written in one go
    store.flush();
    outcome?;

    Ok(())
}

fn dispatch(
    command: Commands,
    store: &mut Store<SqliteStorage>,
    config: &Config,
) -> Result<(), cli::CliError> {
    match command {
        Commands::Summary => cli::handle_summary(store, config),
        Commands::Today { date } => cli::handle_today(store, date)?,
        Commands::List {
            collection,
            search,
            kind,
            tags,
            limit,
        } => {
            let filter = LearningFilter {
                kind,
                query: search.unwrap_or_default(),
                tags,
            };
            cli::handle_list(store, collection, &filter, limit, config);
        }
        Commands::AddJob {
            company,
            position,
            applied,
            status,
            notes,
        } => {
            cli::handle_add_job(store, company, position, applied, status, notes)?;
        }
        Commands::SetJobStatus { id, status } => cli::handle_set_job_status(store, id, status)?,
        Commands::EditJob {
            id,
            company,
            position,
            applied,
            status,
            notes,
        } => cli::handle_edit_job(store, id, company, position, applied, status, notes)?,
        Commands::AddInterview {
            kind,
            duration,
            score,
            date,
            notes,
        } => {
            cli::handle_add_interview(store, kind, duration, score, date, notes)?;
        }
        Commands::AddNote {
            description,
            category,
            date,
        } => {
            cli::handle_add_note(store, description, category, date)?;
        }
        Commands::ToggleHabit { id } => {
            cli::handle_toggle_habit(store, id)?;
        }
        Commands::AddFinance {
            kind,
            category,
            amount,
            description,
            date,
        } => {
            cli::handle_add_finance(store, kind, category, amount, description, date)?;
        }
        Commands::EditFinance {
            id,
            kind,
            category,
            amount,
            description,
            date,
        } => cli::handle_edit_finance(store, id, kind, category, amount, description, date)?,
        Commands::EditHealth {
            id,
            mood,
            energy,
            sleep,
            exercise,
            symptoms,
            actions,
            notes,
            date,
        } => cli::handle_edit_health(
            store, id, mood, energy, sleep, exercise, symptoms, actions, notes, date,
        )?,
        Commands::LogHealth {
            mood,
            energy,
            sleep,
            exercise,
            symptoms,
            actions,
            notes,
            date,
        } => {
            cli::handle_log_health(
                store, mood, energy, sleep, exercise, symptoms, actions, notes, date,
            )?;
        }
        Commands::LogMigraine {
            had,
            severity,
            duration,
            location,
            triggers,
            medications,
            relieved_by,
            notes,
            date,
        } => {
            cli::handle_log_migraine(
                store,
                had,
                severity,
                duration,
                location,
                triggers,
                medications,
                relieved_by,
                notes,
                date,
            )?;
        }
        Commands::AddLearning {
            kind,
            title,
            content,
            language,
            tags,
            source,
            source_url,
        } => {
            cli::handle_add_learning(
                store, kind, title, content, language, tags, source, source_url,
            )?;
        }
        Commands::ToggleFavorite { id } => {
            cli::handle_toggle_favorite(store, id)?;
        }
        Commands::Delete { collection, id } => cli::handle_delete(store, collection, id)?,
        Commands::Export => cli::handle_export(store)?,
        Commands::Import { path } => cli::handle_import(store, path)?,
    }
    Ok(())
}
