use syn::spanned::Spanned;

impl super::Enumeration {
    /// Filters `Debug` from `#[derive(...)]` and returns whether it occurred.
    fn filter_derive(attrs: Vec<syn::Attribute>) -> syn::Result<
        (Vec<syn::Attribute>, Option<proc_macro2::Span>)
    > {
        let mut debug = None;
        let mut filtered_attrs = Vec::with_capacity(attrs.len());

        for mut attr in attrs {
            if !attr.path.is_ident("derive") {
                filtered_attrs.push(attr);
                continue;
            }

            let meta = match attr.parse_meta()? {
                syn::Meta::List(list) => list.nested,
                syn::Meta::Path(path) => return Err(syn::Error::new(
                    path.span(), "expected list"
                )),
                syn::Meta::NameValue(name) => return Err(syn::Error::new(
                    name.span(), "expected list"
                )),
            }.into_iter().filter(|meta| match meta {
                syn::NestedMeta::Meta(meta) if meta.path().segments.last()
                    .map_or(false, |segment| segment.ident == "Debug") =>
                {
                    debug = Some(meta.path().span());
                    false
                },
                _ => true
            }).collect::<Vec<_>>();

            if !meta.is_empty() {
                // Store the filtered paths.
                attr.tokens = quote::quote! { (#(#meta),*) };

                filtered_attrs.push(attr);
            }
        }

        Ok((filtered_attrs, debug))
    }

    /// Removes the `repr` attribute from `attrs` and returns its primitive integer type.
    fn take_repr(attrs: &mut Vec<syn::Attribute>, span: proc_macro2::Span) -> syn::Result<syn::Ident> {
        let index = attrs.iter()
            .position(|attr| attr.path.is_ident("repr"))
            .ok_or_else(|| syn::Error::new(span, "expected `repr` attribute"))?;

        let repr = match attrs.remove(index).parse_meta()? {
            syn::Meta::List(list) if list.nested.len() > 1 => Err(syn::Error::new(
                list.nested[1].span(), "expected a single integer representation"
            )),
            syn::Meta::List(list) => match list.nested.first() {
                Some(syn::NestedMeta::Meta(meta)) => meta.path().get_ident().cloned().ok_or_else(
                    || syn::Error::new(meta.span(), "expected identifier")
                ),
                Some(syn::NestedMeta::Lit(lit)) => Err(syn::Error::new(
                    lit.span(), "expected identifier"
                )),
                None => Err(syn::Error::new(
                    list.paren_token.span, "expected integer representation"
                ))
            },
            syn::Meta::NameValue(value) => Err(syn::Error::new(
                value.span(), "expected list"
            )),
            syn::Meta::Path(path) => Err(syn::Error::new(
                path.span(), "expected list"
            ))
        }?;

        if !crate::primitive::is_integer_primitive(&repr) {
            return Err(syn::Error::new(repr.span(), "expected integer representation"));
        }

        Ok(repr)
    }

    /// Tries to parse the `attribute` and `item` into an `Enumeration` structure.
    pub(crate) fn parse(
        attribute: proc_macro2::TokenStream,
        item: proc_macro2::TokenStream
    ) -> syn::Result<Self> {
        if !attribute.is_empty() {
            return Err(syn::Error::new(attribute.span(), "expected no attribute arguments"));
        }

        let input: syn::DeriveInput = syn::parse2(item)?;
        let span = input.span();

        let mut attrs = input.attrs;
        let repr = Self::take_repr(&mut attrs, span)?;
        let (attrs, debug) = Self::filter_derive(attrs)?;

        let variants = match input.data {
            syn::Data::Enum(e) => {
                if e.variants.is_empty() { return Err(syn::Error::new(
                    e.brace_token.span, "expected variants"
                )) }

                let variants = e.variants.into_iter()
                    .map(super::Variant::parse)
                    .collect::<syn::Result<Vec<_>>>()?;

                // An implicit value can not follow a variant which might not exist.
                for pair in variants.windows(2) {
                    if pair[1].discriminant.is_none() && pair[0].cfgs().next().is_some() {
                        return Err(syn::Error::new(
                            pair[1].ident.span(), "expected explicit value after a `cfg` variant"
                        ));
                    }
                }

                variants
            },

            syn::Data::Struct(s) => return Err(syn::Error::new(
                s.struct_token.span(), "expected enum"
            )),

            syn::Data::Union(u) => return Err(syn::Error::new(
                u.union_token.span(), "expected enum"
            ))
        };

        if !input.generics.params.is_empty() {
            return Err(syn::Error::new(input.generics.span(), "expected no generics"));
        }

        Ok(Self {
            attrs,
            debug,
            repr,
            vis: input.vis,
            ident: input.ident,
            variants
        })
    }
}

impl super::Variant {
    fn parse(variant: syn::Variant) -> syn::Result<Self> {
        if !matches!(variant.fields, syn::Fields::Unit) {
            return Err(syn::Error::new(variant.fields.span(), "expected unit variant"));
        }

        Ok(Self {
            attrs: variant.attrs,
            ident: variant.ident,
            discriminant: variant.discriminant.map(|(_, expr)| expr)
        })
    }
}
