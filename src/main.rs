use clap::Parser;

use fixtureboard::{cli::Cli, error::AppError, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let cli = Cli::parse();
    cli.run().await.inspect_err(|e| {
        if e.is_client_error() {
            tracing::warn!("{}", e);
        } else {
            tracing::error!("{}", e);
        }
    })
}
