mod cli;
mod commands;
mod render;

use doc_intake::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
