//! Contains all data types to represent a type which receives the combining operators.

#[macro_use]
pub(crate) mod parse;
pub(crate) mod generate;

/// Stores the type which receives the combining operators and the primitive integer it wraps.
pub(crate) struct Flags {
    pub(crate) ident: syn::Ident,
    pub(crate) repr: syn::Ident
}
