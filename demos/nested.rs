//! Nested record example
//!
//! Nested structs share the flat environment namespace; the walker
//! traverses them recursively, materializing Option-wrapped records
//! along the way.

use envbind::{FromEnv, Schema};

#[derive(Debug, Default, Schema)]
struct Config {
    #[env(name = "SERVICE_NAME")]
    service_name: String,

    #[env(nested)]
    database: Database,

    // Materialized during binding even if nothing inside resolves
    #[env(nested)]
    cache: Option<Cache>,
}

#[derive(Debug, Default, Schema)]
struct Database {
    #[env(name = "DATABASE_URL")]
    url: String,

    #[env(name = "DATABASE_POOL_SIZE")]
    pool_size: u32,
}

#[derive(Debug, Default, Schema)]
struct Cache {
    #[env(name = "CACHE_URL")]
    url: Option<String>,

    #[env(name = "CACHE_TTL_SECONDS")]
    ttl_seconds: u64,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("SERVICE_NAME", "billing");
    std::env::set_var("DATABASE_URL", "postgres://localhost/billing");
    std::env::set_var("DATABASE_POOL_SIZE", "16");
    std::env::set_var("CACHE_TTL_SECONDS", "300");

    let config = Config::from_env()?;

    println!("Service: {}", config.service_name);
    println!("Database: {} (pool {})", config.database.url, config.database.pool_size);
    if let Some(cache) = &config.cache {
        println!("Cache: {:?} (ttl {}s)", cache.url, cache.ttl_seconds);
    }

    Ok(())
}
