//! Scalar coercion
//!
//! Converts raw environment strings into the supported scalar types with
//! bit-width-aware range checks. Parsing is strict base-10: no hex or octal
//! prefixes, no underscores, no locale separators.
//!
//! # Boolean coercion
//!
//! **Booleans do not use `true`/`false` parsing.** The truth table is
//! deliberately unusual and kept for compatibility with the behavior this
//! engine replaces: the empty string and `"0"` are `false`, *every* other
//! value, including the literal `"false"`, is `true`. Treat a set
//! boolean variable as a flag, not as a parsed literal.

use std::num::{IntErrorKind, ParseFloatError, ParseIntError};

use crate::error::CoerceError;

mod sealed {
    pub trait Sealed {}
}

/// A scalar type the engine can coerce from a raw environment string.
///
/// Sealed: the supported set is fixed by design (custom parse hooks are out
/// of scope), so this trait cannot be implemented outside the crate.
pub trait EnvScalar: Default + sealed::Sealed {
    /// Convert a raw environment string into the scalar.
    fn coerce(raw: &str) -> Result<Self, CoerceError>;
}

impl sealed::Sealed for String {}

impl EnvScalar for String {
    /// Direct assignment; cannot fail.
    fn coerce(raw: &str) -> Result<Self, CoerceError> {
        Ok(raw.to_owned())
    }
}

impl sealed::Sealed for bool {}

impl EnvScalar for bool {
    /// The non-standard truth table described in the module docs: only the
    /// empty string and `"0"` are false.
    fn coerce(raw: &str) -> Result<Self, CoerceError> {
        Ok(!(raw.is_empty() || raw == "0"))
    }
}

macro_rules! int_scalars {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl EnvScalar for $ty {
            fn coerce(raw: &str) -> Result<Self, CoerceError> {
                raw.parse().map_err(|err: ParseIntError| {
                    let out_of_range = matches!(
                        err.kind(),
                        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                    );
                    if out_of_range {
                        CoerceError::Range(Some(Box::new(err)))
                    } else {
                        CoerceError::Syntax(Box::new(err))
                    }
                })
            }
        }
    )*};
}

int_scalars!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! float_scalars {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl EnvScalar for $ty {
            /// Base-10 float parsing at the declared width. `std` float
            /// parsing saturates overflowing literals to infinity instead
            /// of failing, so a finite literal that comes back infinite is
            /// reported as out of range; explicit `inf`/`infinity`
            /// literals remain accepted.
            fn coerce(raw: &str) -> Result<Self, CoerceError> {
                let value: $ty = raw
                    .parse()
                    .map_err(|err: ParseFloatError| CoerceError::Syntax(Box::new(err)))?;
                if value.is_infinite() && !infinity_literal(raw) {
                    return Err(CoerceError::Range(None));
                }
                Ok(value)
            }
        }
    )*};
}

float_scalars!(f32, f64);

fn infinity_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
