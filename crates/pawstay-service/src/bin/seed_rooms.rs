use pawstay_core::config::load_config;
use pawstay_db::db::connection::create_pool;
use pawstay_db::db::migrate::run_migrations;
use pawstay_service::seeder::seed_rooms;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;

    let filter = EnvFilter::try_new(config.logging.level.as_str())
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    run_migrations(&config.database.url).await?;

    let pool = create_pool(&config.database.url, 1).await?;
    let mut conn = pool.get().await?;

    let report = seed_rooms(&mut conn).await?;

    println!("{report}");

    Ok(())
}
