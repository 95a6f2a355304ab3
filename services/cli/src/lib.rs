mod cli;
mod infra;
mod screen;

use cv_screening::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
