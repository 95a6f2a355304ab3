use crate::infra::{load_documents, parse_date};
use chrono::{Local, NaiveDate};
use clap::Args;
use cv_screening::config::AppConfig;
use cv_screening::error::AppError;
use cv_screening::screening::{
    write_records, BatchOutcome, BatchRunner, ExtractionSettings, Gazetteer, HeuristicTables,
    JobProfile, ProfileCatalog,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const AD_HOC_PROFILE_ID: &str = "custom";

#[derive(Args, Debug)]
pub(crate) struct ScreenArgs {
    /// Directory holding the extracted plain-text documents (*.txt)
    #[arg(long)]
    pub(crate) documents: PathBuf,
    /// Job profile id or label from the catalog
    #[arg(long, conflicts_with = "keywords")]
    pub(crate) profile: Option<String>,
    /// Ad hoc comma separated keyword list, e.g. "python, sql"
    #[arg(long)]
    pub(crate) keywords: Option<String>,
    /// Gazetteer file with one city per line
    #[arg(long)]
    pub(crate) gazetteer: Option<PathBuf>,
    /// JSON heuristic tables replacing the built-in defaults
    #[arg(long)]
    pub(crate) heuristics: Option<PathBuf>,
    /// JSON profile catalog replacing the built-in one
    #[arg(long)]
    pub(crate) profiles: Option<PathBuf>,
    /// Reference date for age computation (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Write the CSV export to this file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Print the screened records as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ProfilesArgs {
    /// JSON profile catalog to list instead of the built-in one
    #[arg(long)]
    pub(crate) profiles: Option<PathBuf>,
}

pub(crate) fn run_screen(args: ScreenArgs, config: &AppConfig) -> Result<(), AppError> {
    let screening = &config.screening;

    let tables = match args.heuristics.as_ref().or(screening.heuristics_path.as_ref()) {
        Some(path) => HeuristicTables::from_path(path)?,
        None => HeuristicTables::default(),
    };
    let gazetteer = match args.gazetteer.as_ref().or(screening.gazetteer_path.as_ref()) {
        Some(path) => Gazetteer::from_path(path)?,
        None => {
            warn!("no gazetteer configured; every city will be reported as unknown");
            Gazetteer::default()
        }
    };
    let catalog = load_catalog(args.profiles.as_deref().or(screening.profiles_path.as_deref()))?;
    let profile = resolve_profile(&catalog, args.profile.as_deref(), args.keywords.as_deref())?;

    let reference_date = args.today.unwrap_or_else(|| Local::now().date_naive());
    let settings =
        ExtractionSettings::new(reference_date).with_city_precedence(screening.city_precedence);
    let runner = BatchRunner::new(&tables, gazetteer, settings)?;

    let (documents, load_failures) = load_documents(&args.documents)?;
    info!(
        directory = %args.documents.display(),
        documents = documents.len(),
        unreadable = load_failures.len(),
        profile = %profile.id,
        "starting screening batch"
    );

    let mut outcome = runner.run(documents, &profile)?;
    outcome.failures = load_failures.into_iter().chain(outcome.failures).collect();

    match args.output.as_ref() {
        Some(path) => {
            write_records(BufWriter::new(File::create(path)?), &profile.keywords, &outcome.records)?;
            info!(path = %path.display(), records = outcome.records.len(), "wrote csv export");
        }
        None if !args.json => {
            write_records(io::stdout().lock(), &profile.keywords, &outcome.records)?;
        }
        None => {}
    }

    if args.json {
        print_json(&outcome)?;
    }
    report_failures(&outcome);
    Ok(())
}

pub(crate) fn list_profiles(args: ProfilesArgs, config: &AppConfig) -> Result<(), AppError> {
    let path = args
        .profiles
        .as_deref()
        .or(config.screening.profiles_path.as_deref());
    let catalog = load_catalog(path)?;

    for profile in catalog.profiles() {
        println!("{} ({})", profile.id, profile.label);
        println!("  keywords: {}", profile.keywords.join(", "));
    }
    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<ProfileCatalog, AppError> {
    Ok(match path {
        Some(path) => ProfileCatalog::from_path(path)?,
        None => ProfileCatalog::builtin(),
    })
}

fn resolve_profile(
    catalog: &ProfileCatalog,
    profile: Option<&str>,
    keywords: Option<&str>,
) -> Result<JobProfile, AppError> {
    match (profile, keywords) {
        (Some(key), _) => Ok(catalog.get(key)?.clone()),
        (None, Some(raw)) => Ok(JobProfile::from_keyword_list(AD_HOC_PROFILE_ID, raw)),
        (None, None) => Err(AppError::Usage(
            "either --profile or --keywords must be provided".to_string(),
        )),
    }
}

fn print_json(outcome: &BatchOutcome) -> Result<(), AppError> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, outcome).map_err(io::Error::from)?;
    writeln!(stdout)?;
    Ok(())
}

fn report_failures(outcome: &BatchOutcome) {
    if outcome.failures.is_empty() {
        return;
    }
    eprintln!("{} document(s) skipped:", outcome.failures.len());
    for failure in &outcome.failures {
        eprintln!("- {}: {}", failure.filename, failure.message);
    }
}
