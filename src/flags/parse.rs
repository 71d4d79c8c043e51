//! Contains code to parse the newtype of a `derive(BitOr)`.

use syn::spanned::Spanned;

impl super::Flags {
    /// Tries to parse a single field tuple struct like `struct A(u8);`.
    pub(crate) fn parse(item: proc_macro2::TokenStream) -> syn::Result<Self> {
        let input: syn::DeriveInput = syn::parse2(item)?;

        let fields = match input.data {
            syn::Data::Struct(s) => match s.fields {
                syn::Fields::Unnamed(fields) => fields,

                syn::Fields::Named(fields) => return Err(syn::Error::new(
                    fields.brace_token.span, "expected tuple struct"
                )),

                syn::Fields::Unit => return Err(syn::Error::new(
                    input.ident.span(), "expected tuple struct"
                ))
            },

            syn::Data::Enum(e) => return Err(syn::Error::new(
                e.enum_token.span(), "expected struct"
            )),

            syn::Data::Union(u) => return Err(syn::Error::new(
                u.union_token.span(), "expected struct"
            ))
        };

        if !input.generics.params.is_empty() {
            return Err(syn::Error::new(input.generics.span(), "expected no generics"));
        }

        let field = match fields.unnamed.first() {
            Some(field) if fields.unnamed.len() == 1 => field,
            _ => return Err(syn::Error::new(
                fields.paren_token.span, "expected exactly one field"
            ))
        };

        let repr = crate::primitive::integer_primitive(&field.ty)
            .ok_or_else(|| syn::Error::new(field.ty.span(), "expected integer type"))?
            .clone();

        Ok(Self { ident: input.ident, repr })
    }
}
