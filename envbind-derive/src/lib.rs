//! Derive macro implementation for envbind

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields, Type};

mod attrs;

use attrs::FieldAttrs;

/// Extract the inner type from a syntactic `Option<T>`.
fn option_inner_type(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let seg = type_path.path.segments.last()?;
    if seg.ident != "Option" {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &seg.arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }
    match args.args.first()? {
        syn::GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

/// Map a scalar type to its slot variant name, or `None` for types the
/// engine does not coerce.
///
/// Matching is syntactic on the final path segment, so a type alias of a
/// scalar is not recognized (and becomes an unsupported field).
fn scalar_variant(ty: &Type) -> Option<&'static str> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let seg = type_path.path.segments.last()?;
    if !seg.arguments.is_empty() {
        return None;
    }
    let variant = match seg.ident.to_string().as_str() {
        "String" => "Str",
        "bool" => "Bool",
        "i8" => "I8",
        "i16" => "I16",
        "i32" => "I32",
        "i64" => "I64",
        "isize" => "Isize",
        "u8" => "U8",
        "u16" => "U16",
        "u32" => "U32",
        "u64" => "U64",
        "usize" => "Usize",
        "f32" => "F32",
        "f64" => "F64",
        _ => return None,
    };
    Some(variant)
}

/// `Schema` derive macro
///
/// Implements `envbind::Schema` for a struct with named fields, producing
/// one field descriptor per field in declaration order.
///
/// # Supported Attributes
///
/// **Field-level**:
/// - `#[env(name = "VAR_NAME")]`: bind the field to `VAR_NAME`
/// - `#[env]`: bind the field to its upper-cased name
/// - `#[env(nested)]`: traverse the field as a nested record (plain or
///   `Option`-wrapped)
///
/// Fields without an `#[env]` attribute carry no binding key. Fields of
/// types the engine cannot coerce are described as unsupported; binding
/// fails only if such a field also carries a key.
///
/// # Example
///
/// See the `envbind` crate documentation for usage examples.
#[proc_macro_derive(Schema, attributes(env))]
pub fn derive_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Extract fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(
                    &input,
                    "Schema only supports structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(&input, "Schema only supports structs")
                .to_compile_error()
                .into();
        }
    };

    // Generate one descriptor per field
    let descriptors = fields.iter().map(|field| {
        let field_name = field.ident.as_ref().unwrap();
        let field_type = &field.ty;

        let attrs = FieldAttrs::from_field(field);

        // Determine the binding key, if any
        let key = attrs.name.or_else(|| {
            attrs
                .auto_name
                .then(|| field_name.to_string().to_uppercase())
        });
        let key_tokens = match &key {
            Some(key) => quote! { ::core::option::Option::Some(#key) },
            None => quote! { ::core::option::Option::None },
        };

        // Classify the declared type into a slot
        let value_tokens = if attrs.nested {
            if option_inner_type(field_type).is_some() {
                quote! { ::envbind::FieldValue::OptionalRecord(&mut self.#field_name) }
            } else {
                quote! { ::envbind::FieldValue::Record(&mut self.#field_name) }
            }
        } else if let Some(inner) = option_inner_type(field_type) {
            match scalar_variant(inner) {
                Some(variant) => {
                    let variant = format_ident!("{}", variant);
                    quote! {
                        ::envbind::FieldValue::OptionalScalar(
                            ::envbind::OptionalSlot::#variant(&mut self.#field_name),
                        )
                    }
                }
                None => quote! { ::envbind::FieldValue::Unsupported },
            }
        } else {
            match scalar_variant(field_type) {
                Some(variant) => {
                    let variant = format_ident!("{}", variant);
                    quote! {
                        ::envbind::FieldValue::Scalar(
                            ::envbind::ScalarSlot::#variant(&mut self.#field_name),
                        )
                    }
                }
                None => quote! { ::envbind::FieldValue::Unsupported },
            }
        };

        quote! {
            ::envbind::Field {
                key: #key_tokens,
                type_name: ::core::any::type_name::<#field_type>(),
                value: #value_tokens,
            }
        }
    });

    let expanded = quote! {
        #[automatically_derived]
        impl #impl_generics ::envbind::Schema for #struct_name #ty_generics #where_clause {
            fn fields(&mut self) -> ::std::vec::Vec<::envbind::Field<'_>> {
                ::std::vec![
                    #(#descriptors),*
                ]
            }
        }
    };

    TokenStream::from(expanded)
}
