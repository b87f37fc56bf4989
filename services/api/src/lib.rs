mod assess;
mod cli;
mod infra;
mod remote;
mod routes;
mod server;

use cancer_screen::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
