use database::{db::create_connection, services::schema_guard::SchemaGuard};
use env_logger::Env;
use log::{error, info};
use server::{
    app, config::AppConfig, error::StartupError, state::AppState,
    utils::shutdown::shutdown_signal,
};
use std::process::ExitCode;

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::from_env()?;
    info!("Using database {}", config.database_path.display());

    // Diagnostic only; a missing table is logged and startup goes on
    SchemaGuard::validate(&config.database_path, config.schema_guard_timeout).await;

    let db = create_connection(&config.database()).await?;
    let app = app(AppState::new(db));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: config.bind_addr.clone(),
            source,
        })?;
    info!("Running axum on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
