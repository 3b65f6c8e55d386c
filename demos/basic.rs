//! Basic usage example

use envbind::{FromEnv, Schema};

#[derive(Debug, Default, Schema)]
struct Config {
    // Loaded from DATABASE_URL
    #[env(name = "DATABASE_URL")]
    database_url: String,

    // Bare #[env] upper-cases the field name: MAX_CONNECTIONS
    #[env]
    max_connections: u32,

    // Unset variables leave the field at its current value, so defaults
    // are just the struct's starting state
    #[env(name = "SERVER_ADDR")]
    server_addr: String,

    // No attribute: never looked up
    started_at: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("MAX_CONNECTIONS", "10");

    let mut config = Config {
        server_addr: "127.0.0.1:8080".to_string(),
        ..Config::default()
    };
    envbind::bind(Some(&mut config))?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Server Address: {}", config.server_addr);
    println!("  Started At: {:?}", config.started_at);

    // Or build straight from defaults
    let fresh = Config::from_env()?;
    println!("  Fresh copy: {fresh:?}");

    Ok(())
}
