use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use twitchplay::{
    config::Settings,
    server::{self, AppState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "twitchplay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env();
    let addr = settings.bind_addr();

    tracing::info!(
        preferences = %settings.preferences_path.display(),
        default_quality = ?settings.default_quality,
        "Starting twitchplay bridge on {}",
        addr
    );

    let state = AppState::from_settings(&settings)?;
    let app = server::create_router(state, &settings.cors_origin)?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
