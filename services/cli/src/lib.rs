mod cli;
mod render;

use career_ai::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
