// Fields without #[env] attributes carry no key: they are never looked up,
// and unsupported types among them never fail the bind.

use std::collections::HashMap;
use std::time::Duration;

use envbind::Schema;

#[derive(Debug, Default, Schema)]
struct Config {
    #[env(name = "NAME")]
    name: String,

    // No attribute: same name exists in the source but is never read.
    count: i32,

    // Unsupported type without a key: silently skipped.
    timeout: Duration,

    // Unsupported inside Option, also unkeyed.
    tags: Option<Vec<String>>,
}

fn main() {
    let source: HashMap<String, String> = [("NAME", "alice"), ("COUNT", "7")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let mut config = Config::default();
    envbind::bind_from(&source, Some(&mut config)).unwrap();

    assert_eq!(config.name, "alice");
    assert_eq!(config.count, 0);
    assert_eq!(config.timeout, Duration::default());
    assert_eq!(config.tags, None);
}
