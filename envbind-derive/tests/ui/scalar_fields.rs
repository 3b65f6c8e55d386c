// Every scalar kind, plain and Option-wrapped, through the derive.

use std::collections::HashMap;

use envbind::Schema;

#[derive(Debug, Default, Schema)]
struct Config {
    #[env(name = "NAME")]
    name: String,

    #[env(name = "ENABLED")]
    enabled: bool,

    #[env(name = "COUNT")]
    count: i32,

    #[env(name = "BIG")]
    big: i64,

    #[env(name = "SIZE")]
    size: usize,

    #[env(name = "PORT")]
    port: u16,

    #[env(name = "RATIO")]
    ratio: f64,

    #[env(name = "OPT_COUNT")]
    opt_count: Option<i32>,

    #[env(name = "OPT_NAME")]
    opt_name: Option<String>,
}

fn main() {
    let source: HashMap<String, String> = [
        ("NAME", "alice"),
        ("ENABLED", "1"),
        ("COUNT", "-7"),
        ("BIG", "9223372036854775807"),
        ("SIZE", "4096"),
        ("PORT", "8080"),
        ("RATIO", "0.5"),
        ("OPT_COUNT", "42"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let mut config = Config::default();
    envbind::bind_from(&source, Some(&mut config)).unwrap();

    assert_eq!(config.name, "alice");
    assert!(config.enabled);
    assert_eq!(config.count, -7);
    assert_eq!(config.big, i64::MAX);
    assert_eq!(config.size, 4096);
    assert_eq!(config.port, 8080);
    assert_eq!(config.ratio, 0.5);
    assert_eq!(config.opt_count, Some(42));
    // Materialized with the zero equivalent even though OPT_NAME is unset.
    assert_eq!(config.opt_name, Some(String::new()));
}
