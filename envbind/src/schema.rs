//! Field descriptors for bindable record types
//!
//! A record type participates in binding by implementing [`Schema`]: it
//! hands the walker an ordered list of [`Field`] descriptors, each pairing
//! an optional binding key with a mutable slot into the record. The
//! `#[derive(Schema)]` macro generates the list from the struct definition;
//! it can equally be written by hand for types the macro cannot describe.

use crate::error::CoerceError;
use crate::coerce::EnvScalar;

/// A record type whose fields can be bound from the environment.
///
/// Implementations must return descriptors in field declaration order;
/// order decides which of several failing fields is reported, since the
/// walker stops at the first error.
pub trait Schema {
    /// Descriptors for every field of the record, in declaration order.
    fn fields(&mut self) -> Vec<Field<'_>>;
}

/// One field of a record, as seen by the walker.
pub struct Field<'a> {
    /// Environment variable name bound to this field, if any.
    ///
    /// A field without a key is never looked up and never an error, with
    /// one exception: nested records are traversed whether or not they
    /// carry a key (the key itself is ignored for them).
    pub key: Option<&'static str>,
    /// Declared type of the field, for diagnostics.
    pub type_name: &'static str,
    /// Where the bound value goes.
    pub value: FieldValue<'a>,
}

/// The destination slot of a field, tagged by semantic kind.
pub enum FieldValue<'a> {
    /// A scalar leaf.
    Scalar(ScalarSlot<'a>),
    /// An `Option`-wrapped scalar leaf.
    OptionalScalar(OptionalSlot<'a>),
    /// A nested record; the walker recurses into it.
    Record(&'a mut (dyn Schema + 'a)),
    /// An `Option`-wrapped nested record; materialized before recursing.
    OptionalRecord(&'a mut (dyn RecordSlot + 'a)),
    /// A type the engine does not coerce.
    ///
    /// Skipped silently when the field has no binding key; a keyed
    /// unsupported field fails the bind.
    Unsupported,
}

macro_rules! slot_enums {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        /// Mutable reference to a scalar field, tagged by scalar kind.
        pub enum ScalarSlot<'a> {
            $($variant(&'a mut $ty),)*
        }

        /// Mutable reference to an `Option`-wrapped scalar field.
        pub enum OptionalSlot<'a> {
            $($variant(&'a mut Option<$ty>),)*
        }

        impl<'a> OptionalSlot<'a> {
            /// Ensure the wrapper holds a value and expose the contents.
            ///
            /// An absent wrapper is filled with the scalar's zero
            /// equivalent; an already present value is kept as is.
            pub fn materialize(self) -> ScalarSlot<'a> {
                match self {
                    $(Self::$variant(slot) => {
                        ScalarSlot::$variant(slot.get_or_insert_with(Default::default))
                    })*
                }
            }
        }

        impl ScalarSlot<'_> {
            /// Coerce `raw` and store the result in the slot.
            pub fn assign(self, raw: &str) -> Result<(), CoerceError> {
                match self {
                    $(Self::$variant(slot) => *slot = EnvScalar::coerce(raw)?,)*
                }
                Ok(())
            }
        }
    };
}

slot_enums! {
    Str => String,
    Bool => bool,
    I8 => i8,
    I16 => i16,
    I32 => i32,
    I64 => i64,
    Isize => isize,
    U8 => u8,
    U16 => u16,
    U32 => u32,
    U64 => u64,
    Usize => usize,
    F32 => f32,
    F64 => f64,
}

/// An `Option`-wrapped nested record.
///
/// Implemented for `Option<T>` of any `Schema` type with a `Default`; the
/// wrapper is materialized with the record's default value before the
/// walker recurses, so it is never left absent after a successful bind.
pub trait RecordSlot {
    /// Ensure the wrapper holds a record and expose it for traversal.
    ///
    /// Never overwrites an already present record.
    fn materialize(&mut self) -> &mut dyn Schema;
}

impl<T: Schema + Default> RecordSlot for Option<T> {
    fn materialize(&mut self) -> &mut dyn Schema {
        self.get_or_insert_with(T::default)
    }
}
