//! services/api/src/bin/api.rs
//!
//! Boots the mock backend: loads configuration, seeds every store and logs
//! what the UI layer would see on its first page loads.

use futures::try_join;
use kotoba_api::{config::Config, error::ApiError, facade::Facade, state::AppState};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting mock backend...");
    info!(
        "Simulated latency: {}ms + up to {}ms jitter",
        config.latency_base_ms, config.latency_jitter_ms
    );

    // --- 2. Build the Shared AppState ---
    let state = AppState::from_config(&config)?;
    let facade = Facade::new(state);

    // --- 3. Warm the Cache with the Collection Queries ---
    let (users, courses, decks, entries, tests) = try_join!(
        facade.users(),
        facade.course_details(),
        facade.decks(),
        facade.dictionary(),
        facade.tests(),
    )?;
    info!(
        "Mock backend ready: {} users, {} courses, {} decks, {} dictionary entries, {} tests",
        users.len(),
        courses.len(),
        decks.len(),
        entries.len(),
        tests.len()
    );

    for user in &users {
        let enrolled = facade.enrolled_courses(user.id).await?;
        let saved = facade.saved_decks(user.id).await?;
        info!(
            "User {} ({}): {} enrolled courses, {} saved decks, {} XP",
            user.id,
            user.profile.display_name,
            enrolled.len(),
            saved.len(),
            user.progress.current_xp
        );
    }
    info!("{} queries cached", facade.cache().len().await);

    Ok(())
}
