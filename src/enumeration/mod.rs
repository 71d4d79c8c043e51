//! Contains all data types to represent a C-like enumeration which is rewritten into flags.

#[macro_use]
pub(crate) mod parse;
pub(crate) mod generate;

/// Stores all necessary information about a C-like enumeration from an attribute perspective.
pub(crate) struct Enumeration {
    /// All attributes except `repr`, with `Debug` filtered out of `#[derive(...)]`.
    pub(crate) attrs: Vec<syn::Attribute>,
    /// Span of `Debug` inside `#[derive(...)]`, if it was specified.
    pub(crate) debug: Option<proc_macro2::Span>,
    pub(crate) repr: syn::Ident,
    pub(crate) vis: syn::Visibility,
    pub(crate) ident: syn::Ident,
    pub(crate) variants: Vec<Variant>
}

/// Stores a unit variant of the enumeration.
pub(crate) struct Variant {
    pub(crate) attrs: Vec<syn::Attribute>,
    pub(crate) ident: syn::Ident,
    /// `None` means the value follows the previous variant.
    pub(crate) discriminant: Option<syn::Expr>
}

impl Variant {
    /// Returns the `#[cfg(...)]` attributes of the variant.
    pub(crate) fn cfgs(&self) -> impl Iterator<Item = &syn::Attribute> {
        self.attrs.iter().filter(|attr| attr.path.is_ident("cfg"))
    }
}
