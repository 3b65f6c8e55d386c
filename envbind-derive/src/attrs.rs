//! Attribute parsing for `#[env(...)]` annotations.
//!
//! This module extracts binding attributes from struct fields during macro
//! expansion.

use syn::{Field, Lit};

/// Parsed `#[env(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Explicit environment variable name from `#[env(name = "...")]`.
    pub name: Option<String>,

    /// Bare `#[env]`: derive the variable name by upper-casing the field
    /// name.
    pub auto_name: bool,

    /// `#[env(nested)]`: recurse into the field as a nested record instead
    /// of treating it as a scalar.
    pub nested: bool,
}

impl FieldAttrs {
    /// Extract and parse `#[env(...)]` attributes from a struct field.
    ///
    /// Silently ignores unrecognized attributes to allow other macros to
    /// process them.
    pub fn from_field(field: &Field) -> Self {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            // Bare #[env] carries no arguments
            if matches!(attr.meta, syn::Meta::Path(_)) {
                attrs.auto_name = true;
                continue;
            }

            let _ = attr.parse_nested_meta(|meta| {
                // name = "..."
                if meta.path.is_ident("name") {
                    let value = meta.value()?;
                    let name: Lit = value.parse()?;
                    if let Lit::Str(s) = name {
                        attrs.name = Some(s.value());
                    }
                    return Ok(());
                }

                // nested
                if meta.path.is_ident("nested") {
                    attrs.nested = true;
                    return Ok(());
                }

                Err(meta.error("unsupported env attribute"))
            });
        }

        attrs
    }
}
