//! Error types for environment variable binding

/// Errors that can occur while binding environment variables.
///
/// The four variants are mutually exclusive and cover two very different
/// situations:
/// - [`InvalidTarget`](BindError::InvalidTarget) and
///   [`UnsupportedType`](BindError::UnsupportedType) signal programming
///   mistakes (a misused entry point or a mis-authored schema) and are never
///   expected in correct usage.
/// - [`NotPresent`](BindError::NotPresent) and
///   [`Parse`](BindError::Parse) describe the environment itself.
///   `NotPresent` in particular is a recoverable condition that callers of
///   [`parse`](crate::parse()) are expected to handle, typically by falling
///   back to a default.
///
/// The engine never recovers from its own errors: the first failure aborts
/// the whole call and is returned verbatim. Fields written before the
/// failing one keep their new values; there is no rollback.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// The target reference handed to [`bind`](crate::bind()) or
    /// [`parse`](crate::parse()) was absent.
    ///
    /// Both entry points take `Option<&mut T>` so that the "nil pointer"
    /// misuse class stays representable; every other invalid shape is
    /// rejected at compile time.
    #[error("invalid target: expected a mutable {type_name} reference, got none")]
    InvalidTarget {
        /// Type the caller claimed to be binding into
        type_name: &'static str,
    },

    /// A schema field declares a binding key but has a type the engine does
    /// not coerce.
    ///
    /// Fields of unsupported types *without* a binding key are silently
    /// skipped; attaching a key to one is treated as a schema authoring
    /// mistake rather than ignored.
    #[error("unsupported type {type_name} for environment variable '{key}'")]
    UnsupportedType {
        /// Binding key attached to the offending field
        key: String,
        /// Declared type of the offending field
        type_name: &'static str,
    },

    /// The environment variable named by a [`parse`](crate::parse()) call is
    /// not set.
    ///
    /// Only the single-value path reports this; [`bind`](crate::bind()) treats
    /// an unset variable as "leave the field alone".
    #[error("environment variable '{key}' is not present")]
    NotPresent {
        /// Name of the missing environment variable
        key: String,
    },

    /// The environment variable is set but its value failed type-specific
    /// coercion.
    ///
    /// Carries the key, the target type and the low-level failure for
    /// diagnostic chaining.
    #[error("failed to parse environment variable '{key}' as {type_name}: {source}")]
    Parse {
        /// Name of the environment variable being parsed
        key: String,
        /// Declared type of the target field
        type_name: &'static str,
        /// Reason the raw string was rejected
        source: CoerceError,
    },
}

impl BindError {
    pub(crate) fn invalid_target<T>() -> Self {
        Self::InvalidTarget {
            type_name: std::any::type_name::<T>(),
        }
    }

    pub(crate) fn unsupported_type(key: impl Into<String>, type_name: &'static str) -> Self {
        Self::UnsupportedType {
            key: key.into(),
            type_name,
        }
    }

    pub(crate) fn not_present(key: impl Into<String>) -> Self {
        Self::NotPresent { key: key.into() }
    }

    pub(crate) fn parse(key: impl Into<String>, type_name: &'static str, source: CoerceError) -> Self {
        Self::Parse {
            key: key.into(),
            type_name,
            source,
        }
    }
}

/// Why a raw string was rejected by the scalar coercer.
///
/// Wrapped inside [`BindError::Parse`]; the underlying `std` parse error is
/// attached as the error source when one exists (float range checks are
/// performed by the coercer itself and have none).
#[derive(Debug, thiserror::Error)]
pub enum CoerceError {
    /// The raw string is not a valid base-10 literal for the target type.
    #[error("invalid syntax")]
    Syntax(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The raw string is a valid literal but does not fit the target
    /// type's bit width.
    #[error("value out of range")]
    Range(#[source] Option<Box<dyn std::error::Error + Send + Sync + 'static>>),
}
