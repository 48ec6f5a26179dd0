use campus_nav::app;
use campus_nav::config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("campus-nav starting");

    let config = Config::from_env()?;
    config.log_startup();

    let state = app::build_state(config)?;
    app::serve(state).await
}
