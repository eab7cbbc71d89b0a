mod cli;
mod infra;
mod pages;
mod routes;
mod server;
mod terminal;

use prakriti::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
