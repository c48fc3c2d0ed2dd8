use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use course_registration::shared::infrastructure::registration_journal::in_memory::InMemoryRegistrationJournal;
use course_registration::shell::config::AppConfig;
use course_registration::shell::http::app;
use course_registration::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("course_registration=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let seed = config.load_seed().context("loading seed data")?;
    let service = seed
        .build_service(InMemoryRegistrationJournal::new())
        .context("building registration service")?;
    tracing::info!(
        courses = service.courses().len(),
        students = service.students().len(),
        "registration service seeded"
    );

    let router = app(AppState::new(service));

    tracing::info!("REST endpoint: http://{}/courses", config.addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("binding {}", config.addr))?;
    axum::serve(listener, router).await?;
    Ok(())
}
