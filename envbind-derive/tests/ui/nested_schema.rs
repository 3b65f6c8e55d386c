// Nested records, plain and Option-wrapped, traverse recursively.

use std::collections::HashMap;

use envbind::Schema;

#[derive(Debug, Default, Schema)]
struct Config {
    #[env(name = "NAME")]
    name: String,

    #[env(nested)]
    database: Database,

    #[env(nested)]
    cache: Option<Cache>,
}

#[derive(Debug, Default, Schema)]
struct Database {
    #[env(name = "DATABASE_URL")]
    url: String,

    #[env(name = "DATABASE_POOL")]
    pool: u32,
}

#[derive(Debug, Default, Schema)]
struct Cache {
    #[env(name = "CACHE_URL")]
    url: Option<String>,
}

fn main() {
    let source: HashMap<String, String> = [
        ("NAME", "svc"),
        ("DATABASE_URL", "postgres://localhost/db"),
        ("DATABASE_POOL", "8"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let mut config = Config::default();
    envbind::bind_from(&source, Some(&mut config)).unwrap();

    assert_eq!(config.name, "svc");
    assert_eq!(config.database.url, "postgres://localhost/db");
    assert_eq!(config.database.pool, 8);

    // The optional record is materialized even with nothing bound inside.
    let cache = config.cache.expect("cache materialized");
    assert_eq!(cache.url, Some(String::new()));
}
