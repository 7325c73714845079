/**
 * Demo Data Seeder
 *
 * Connects to `DATABASE_URL`, applies migrations and loads the demo users,
 * boards, lists and tasks. Running it twice is harmless.
 */

use taskboard::backend::seed::{seed_demo_data, DEMO_PASSWORD};
use taskboard::backend::server::bcrypt_cost_from_lookup;
use taskboard::backend::store::PgStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| "DATABASE_URL must be set to seed the database")?;
    let bcrypt_cost = bcrypt_cost_from_lookup(|name| std::env::var(name).ok())?;

    let store = PgStore::connect(&database_url).await?;
    store.migrate().await?;

    let summary = seed_demo_data(&store, bcrypt_cost).await?;
    if summary.is_empty() {
        tracing::info!("Nothing to do, demo data already present");
    } else {
        tracing::info!(
            "Seeded {} users, {} boards, {} lists, {} tasks (password: {})",
            summary.users,
            summary.boards,
            summary.lists,
            summary.tasks,
            DEMO_PASSWORD
        );
    }

    Ok(())
}
