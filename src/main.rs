use sample_service::config::Settings;
use sample_service::state::AppState;
use sample_service::{db, routes, telemetry};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load()?;
    telemetry::init(&settings);

    let pool = db::connect(&settings).await?;
    db::ensure_schema(&pool).await?;

    let state = AppState::new(settings.clone(), pool);
    let app = routes::app(state);

    let listener = TcpListener::bind((settings.host.as_str(), settings.port)).await?;
    tracing::info!(
        service = %settings.service,
        addr = %listener.local_addr()?,
        environment = ?settings.environment,
        "listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
