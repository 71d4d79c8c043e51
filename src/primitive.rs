//! Contains primitive type related helper functions.

pub(crate) fn is_integer_primitive(ident: &syn::Ident) -> bool {
    is_signed_primitive(ident) || is_unsigned_primitive(ident)
}

pub(crate) fn is_signed_primitive(ident: &syn::Ident) -> bool {
    ident == "i8" || ident == "i16" || ident == "i32" || ident == "i64" || ident == "i128" ||
    ident == "isize"
}

pub(crate) fn is_unsigned_primitive(ident: &syn::Ident) -> bool {
    ident == "u8" || ident == "u16" || ident == "u32" || ident == "u64" || ident == "u128" ||
    ident == "usize"
}

/// Returns the primitive integer identifier a type consists of, if it is a plain one.
///
/// Only bare paths like `u8` qualify, `core::primitive::u8` or references do not.
pub(crate) fn integer_primitive(ty: &syn::Type) -> Option<&syn::Ident> {
    match ty {
        syn::Type::Path(path) if path.qself.is_none() => path.path.get_ident()
            .filter(|ident| is_integer_primitive(ident)),
        syn::Type::Group(group) => integer_primitive(&group.elem),
        syn::Type::Paren(paren) => integer_primitive(&paren.elem),
        _ => None
    }
}
