//! Bind process environment variables to typed Rust structs
//!
//! `envbind` populates a struct in place from environment variables. Each
//! field carries an optional binding key (the variable name); binding walks
//! the struct depth-first, looks each keyed field up, coerces the raw
//! string to the field's type and assigns it. Unset variables leave fields
//! at their current values, so a pre-populated struct doubles as the
//! default configuration.
//!
//! # Features
//!
//! - **Declarative**: `#[derive(Schema)]` with `#[env(...)]` field
//!   attributes; descriptors can also be written by hand
//! - **Typed coercion**: strings, booleans, signed/unsigned integers at
//!   every width (including `isize`/`usize`) and floats, with strict base-10
//!   parsing and bit-width range checks
//! - **Nested structs**: traversed recursively, sharing the flat
//!   environment namespace
//! - **Optional fields**: `Option<T>` wrappers are materialized during
//!   binding, never left absent on success
//! - **Precise errors**: every failure names the offending variable and
//!   target type, and chains the low-level parse failure
//!
//! # Example
//!
//! ```rust
//! use envbind::{FromEnv, Schema};
//!
//! #[derive(Debug, Default, Schema)]
//! struct Config {
//!     #[env(name = "DATABASE_URL")]
//!     database_url: String,
//!
//!     // Bare #[env] upper-cases the field name: MAX_CONNECTIONS
//!     #[env]
//!     max_connections: u32,
//!
//!     #[env(nested)]
//!     server: ServerConfig,
//! }
//!
//! #[derive(Debug, Default, Schema)]
//! struct ServerConfig {
//!     #[env(name = "SERVER_PORT")]
//!     port: u16,
//! }
//!
//! # fn main() -> Result<(), envbind::BindError> {
//! let source: std::collections::HashMap<String, String> = [
//!     ("DATABASE_URL", "postgres://localhost/db"),
//!     ("MAX_CONNECTIONS", "10"),
//!     ("SERVER_PORT", "8080"),
//! ]
//! .into_iter()
//! .map(|(k, v)| (k.to_string(), v.to_string()))
//! .collect();
//!
//! let config = Config::from_source(&source)?;
//! assert_eq!(config.database_url, "postgres://localhost/db");
//! assert_eq!(config.max_connections, 10);
//! assert_eq!(config.server.port, 8080);
//! # Ok(())
//! # }
//! ```
//!
//! `Config::from_env()` does the same against the process environment, as
//! does [`bind()`] for an existing value:
//!
//! ```rust
//! use envbind::Schema;
//!
//! #[derive(Debug, Default, Schema)]
//! struct Config {
//!     #[env(name = "ENVBIND_DOC_PORT")]
//!     port: u16,
//! }
//!
//! # fn main() -> Result<(), envbind::BindError> {
//! std::env::set_var("ENVBIND_DOC_PORT", "8080");
//! let mut config = Config::default();
//! envbind::bind(Some(&mut config))?;
//! assert_eq!(config.port, 8080);
//! # std::env::remove_var("ENVBIND_DOC_PORT");
//! # Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! - `#[env(name = "VAR_NAME")]`: bind the field to `VAR_NAME`
//! - `#[env]`: bind the field to its upper-cased name
//! - `#[env(nested)]`: recurse into the field as a nested record; works
//!   for plain and `Option`-wrapped structs
//! - no attribute: the field is never looked up and never an error
//!
//! # Single values
//!
//! [`parse()`] binds one variable into one scalar. Unlike [`bind()`], an unset
//! variable is reported as [`BindError::NotPresent`] so callers can fall
//! back to a default:
//!
//! ```rust
//! use envbind::BindError;
//!
//! let mut timeout = 30u64;
//! match envbind::parse("ENVBIND_DOC_TIMEOUT", Some(&mut timeout)) {
//!     Ok(()) | Err(BindError::NotPresent { .. }) => {}
//!     Err(err) => return Err(err),
//! }
//! assert_eq!(timeout, 30);
//! # Ok::<(), BindError>(())
//! ```
//!
//! # Boolean fields
//!
//! **Boolean coercion is deliberately non-standard.** The empty string and
//! `"0"` are `false`; every other value, including the literal `"false"`,
//! is `true`. See [`coerce`] for details before relying on it.
//!
//! # Failure behavior
//!
//! Binding is fail-fast with no rollback: the first offending field aborts
//! the call, and fields processed before it keep their newly written
//! values. Binding also assumes the environment is a stable snapshot for
//! the duration of one call; mutating it concurrently from another thread
//! is a caller error.

mod bind;
pub mod coerce;
mod error;
mod schema;
mod source;

pub use bind::{bind, bind_from, parse, parse_from, FromEnv};
pub use coerce::EnvScalar;
pub use error::{BindError, CoerceError};
pub use schema::{Field, FieldValue, OptionalSlot, RecordSlot, ScalarSlot, Schema};
pub use source::{ProcessEnv, Source};

pub use envbind_derive::Schema;
