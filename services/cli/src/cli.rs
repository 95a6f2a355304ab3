use crate::screen::{list_profiles, run_screen, ProfilesArgs, ScreenArgs};
use clap::{Parser, Subcommand};
use cv_screening::config::AppConfig;
use cv_screening::error::AppError;
use cv_screening::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "CV Screening",
    about = "Screen plain-text résumés against a job keyword profile",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Screen every document in a directory and export the results
    Screen(ScreenArgs),
    /// List the configured job profiles and their keywords
    Profiles(ProfilesArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Screen(args) => run_screen(args, &config),
        Command::Profiles(args) => list_profiles(args, &config),
    }
}
