//! The schema walker and the public entry points

use crate::error::BindError;
use crate::schema::{FieldValue, ScalarSlot, Schema};
use crate::source::{ProcessEnv, Source};
use crate::coerce::EnvScalar;

/// Bind the process environment into `target` in place.
///
/// Walks the record's fields depth-first in declaration order. For each
/// keyed scalar field the variable is looked up and coerced; an unset
/// variable leaves the field at its current value. Nested records are
/// traversed whether or not they carry a key, and `Option`-wrapped fields
/// are materialized with zero-equivalent contents before assignment, so no
/// wrapper is left absent after a successful bind.
///
/// The first failure aborts the call and is returned verbatim; fields
/// written before it keep their new values.
///
/// # Errors
///
/// - [`BindError::InvalidTarget`] if `target` is `None`
/// - [`BindError::UnsupportedType`] for a keyed field of an uncoercible type
/// - [`BindError::Parse`] when a set variable fails coercion
pub fn bind<T: Schema>(target: Option<&mut T>) -> Result<(), BindError> {
    bind_from(&ProcessEnv, target)
}

/// [`bind`], reading from an explicit [`Source`] instead of the process
/// environment.
pub fn bind_from<T: Schema>(source: &dyn Source, target: Option<&mut T>) -> Result<(), BindError> {
    let target = target.ok_or_else(BindError::invalid_target::<T>)?;
    walk(source, target)
}

/// Parse a single environment variable into a scalar target.
///
/// The degenerate one-field form of [`bind`], with one behavioral
/// difference: an unset variable is reported as
/// [`BindError::NotPresent`] (and leaves the target unmodified) instead of
/// being skipped, so callers can distinguish "not configured" from a parse
/// failure and fall back to a default.
///
/// # Errors
///
/// - [`BindError::InvalidTarget`] if `target` is `None`
/// - [`BindError::NotPresent`] if `key` is unset
/// - [`BindError::Parse`] when the value fails coercion
pub fn parse<T: EnvScalar>(key: &str, target: Option<&mut T>) -> Result<(), BindError> {
    parse_from(&ProcessEnv, key, target)
}

/// [`parse`], reading from an explicit [`Source`].
pub fn parse_from<T: EnvScalar>(
    source: &dyn Source,
    key: &str,
    target: Option<&mut T>,
) -> Result<(), BindError> {
    let target = target.ok_or_else(BindError::invalid_target::<T>)?;
    let raw = source
        .lookup(key)
        .ok_or_else(|| BindError::not_present(key))?;
    *target = T::coerce(&raw)
        .map_err(|err| BindError::parse(key, std::any::type_name::<T>(), err))?;
    Ok(())
}

/// Construct a record from the environment in one step.
///
/// Blanket-implemented for every `Schema` type with a `Default`; the
/// record starts from its default value and is then bound in place.
pub trait FromEnv: Schema + Default + Sized {
    /// Build `Self::default()` and bind the process environment into it.
    ///
    /// # Errors
    ///
    /// Same as [`bind`], minus `InvalidTarget` (the target always exists).
    fn from_env() -> Result<Self, BindError> {
        Self::from_source(&ProcessEnv)
    }

    /// [`FromEnv::from_env`], reading from an explicit [`Source`].
    fn from_source(source: &dyn Source) -> Result<Self, BindError> {
        let mut target = Self::default();
        bind_from(source, Some(&mut target))?;
        Ok(target)
    }
}

impl<T: Schema + Default> FromEnv for T {}

/// One level of the depth-first traversal.
fn walk(source: &dyn Source, record: &mut dyn Schema) -> Result<(), BindError> {
    for field in record.fields() {
        match field.value {
            FieldValue::Scalar(slot) => fill(source, field.key, field.type_name, slot)?,
            FieldValue::OptionalScalar(slot) => {
                // The wrapper is materialized even when nothing will be
                // assigned; only absence of the key short-circuits.
                fill(source, field.key, field.type_name, slot.materialize())?;
            }
            FieldValue::Record(nested) => walk(source, nested)?,
            FieldValue::OptionalRecord(slot) => walk(source, slot.materialize())?,
            FieldValue::Unsupported => {
                if let Some(key) = field.key {
                    return Err(BindError::unsupported_type(key, field.type_name));
                }
            }
        }
    }
    Ok(())
}

/// Look up a scalar field's key and coerce the value into its slot.
///
/// No key, or a key unset in the source, leaves the slot untouched.
fn fill(
    source: &dyn Source,
    key: Option<&'static str>,
    type_name: &'static str,
    slot: ScalarSlot<'_>,
) -> Result<(), BindError> {
    let Some(key) = key else { return Ok(()) };
    let Some(raw) = source.lookup(key) else { return Ok(()) };
    slot.assign(&raw)
        .map_err(|err| BindError::parse(key, type_name, err))
}
