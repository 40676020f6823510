mod catalog;
mod config;
mod errors;
mod matching;
mod models;
mod routes;
mod state;

use anyhow::{bail, Context, Result};
use axum::http::{header, HeaderValue, Method};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::JobRoleCatalog;
use crate::config::Config;
use crate::matching::{RoleMatcher, SkillVocabulary};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TalentVault API v{}", env!("CARGO_PKG_VERSION"));

    // Skill vocabulary: built-in table unless SKILL_VOCABULARY overrides it
    let vocabulary = match &config.skill_vocabulary {
        Some(tokens) => SkillVocabulary::from_tokens(tokens),
        None => SkillVocabulary::default(),
    };
    if vocabulary.is_empty() {
        bail!("Skill vocabulary is empty; no role could ever match");
    }
    info!("Skill vocabulary loaded ({} tokens)", vocabulary.len());
    let matcher = RoleMatcher::new(vocabulary);

    // Job role catalog
    let catalog = match &config.job_roles_path {
        Some(path) => JobRoleCatalog::load(path).await?,
        None => JobRoleCatalog::default(),
    };
    if catalog.is_empty() {
        warn!("Job role catalog is empty; matches will only use inline roles");
    }

    let state = AppState::new(matcher, catalog);

    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .context("CORS_ORIGIN must be a valid origin")?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
