// A binding key on an uncoercible type is a schema authoring mistake,
// reported when the bind runs rather than at expansion time.

use std::collections::HashMap;

use envbind::{BindError, Schema};

#[derive(Debug, Default, Schema)]
struct Config {
    #[env(name = "TAGS")]
    tags: Vec<String>,
}

fn main() {
    let source: HashMap<String, String> = HashMap::new();

    let mut config = Config::default();
    let err = envbind::bind_from(&source, Some(&mut config)).unwrap_err();
    match err {
        BindError::UnsupportedType { key, type_name } => {
            assert_eq!(key, "TAGS");
            assert!(type_name.contains("Vec"));
        }
        other => panic!("expected an unsupported type error, got {other}"),
    }
}
