mod check;
mod cli;
mod infra;
mod routes;
mod server;

use hostel_hub::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
