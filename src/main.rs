use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use steam_library::cli::{Cli, LogFormat};
use steam_library::error::AppError;
use steam_library::handlers::{AppState, router};
use steam_library::rawg::RawgApi;
use steam_library::steam::SteamApi;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    if let Err(err) = run(cli).await {
        tracing::error!(code = err.code(), error = %err, "server stopped");
        std::process::exit(1);
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "steam_library=debug,tower_http=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Human => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let client = reqwest::Client::new();
    let steam = SteamApi::new(client.clone(), &cli.steam_api_url, cli.steam_api_key.clone())?;
    let rawg = RawgApi::new(client, &cli.rawg_api_url, cli.rawg_api_key.clone())?;

    if !steam.has_api_key() {
        tracing::warn!("STEAM_API_KEY is not set; game routes will fail");
    }
    if !rawg.has_api_key() {
        tracing::warn!("RAWG_API_KEY is not set; genre routes will fail");
    }

    let app = router(AppState { steam, rawg });

    let addr = cli.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Internal(format!("bind {addr}: {e}")))?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))
}
