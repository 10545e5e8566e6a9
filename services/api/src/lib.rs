mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use airline_market::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
