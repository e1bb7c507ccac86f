use field_service::config::Config;
use field_service::modules::identity::use_cases::manage_users::seed_admin::seed_admin;
use field_service::shell::http::router;
use field_service::shell::state::AppState;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let addr = config.bind_address();

    // In-memory deps for now
    let state = AppState::in_memory(config);
    if let Some(admin) = seed_admin(state.users.as_ref(), &state.config, state.clock.now()).await? {
        tracing::info!(email = %admin.email, "seeded admin account");
    }

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("API listening on http://{}, GraphQL at /gql", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
