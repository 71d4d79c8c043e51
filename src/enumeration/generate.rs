//! Contains code to generate the flag type which replaces the enumeration.

impl super::Enumeration {
    /// Generates the `#[repr(transparent)]` tuple struct which replaces the enumeration.
    fn generate_struct(&self) -> proc_macro2::TokenStream {
        let attrs = &self.attrs;
        let vis = &self.vis;
        let ident = &self.ident;
        let repr = &self.repr;

        quote::quote! {
            #(#attrs)*
            #[repr(transparent)]
            #vis struct #ident(#repr);
        }
    }

    /// Generates an associated constant for each variant.
    ///
    /// Implicit values follow the previous variant, just like enumeration discriminants do.
    fn generate_constants(&self) -> proc_macro2::TokenStream {
        let vis = &self.vis;
        let mut constants = proc_macro2::TokenStream::new();
        let mut previous: Option<&syn::Ident> = None;

        for variant in &self.variants {
            let attrs = &variant.attrs;
            let ident = &variant.ident;

            let value = match (&variant.discriminant, previous) {
                (Some(discriminant), _) => quote::quote!(#discriminant),
                (None, Some(previous)) => quote::quote!(Self::#previous.0 + 1),
                (None, None) => quote::quote!(0)
            };

            constants.extend(quote::quote! {
                #(#attrs)*
                #vis const #ident: Self = Self(#value);
            });

            previous = Some(ident);
        }

        constants
    }

    /// Generates `const fn bits(self)` and `const fn from_bits(bits)`.
    fn generate_conversions(&self) -> proc_macro2::TokenStream {
        let vis = &self.vis;
        let repr = &self.repr;

        quote::quote! {
            /// Returns the underlying bit pattern.
            #[inline(always)]
            #vis const fn bits(self) -> #repr {
                self.0
            }

            /// Interprets any bit pattern as a value, whether a constant is named after it or not.
            #[inline(always)]
            #vis const fn from_bits(bits: #repr) -> Self {
                Self(bits)
            }
        }
    }

    /// Generates a `const fn union(self, other: Self) -> Self` implementation.
    fn generate_union(&self) -> proc_macro2::TokenStream {
        let vis = &self.vis;

        quote::quote! {
            /// Combines both values like `|` does, but is also usable in constant expressions.
            #[inline(always)]
            #vis const fn union(self, other: Self) -> Self {
                Self(self.0 | other.0)
            }
        }
    }

    /// Generates the `core::fmt::Debug` implementation, if `#[derive(Debug)]` is specified.
    ///
    /// Prints all contained non-zero constants joined with `" | "` and appends the bits no constant
    /// covers in hexadecimal. An empty value prints the first zero constant, or `-` if there is none.
    fn generate_debug(&self) -> proc_macro2::TokenStream {
        if self.debug.is_none() { return proc_macro2::TokenStream::new(); }

        let ident = &self.ident;
        let flags = self.variants.iter().map(|variant| {
            let cfgs = variant.cfgs();
            let variant = &variant.ident;

            quote::quote!(#(#cfgs)* (core::stringify!(#variant), #ident::#variant))
        });

        quote::quote! {
            impl core::fmt::Debug for #ident {
                fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                    const FLAGS: &[(&str, #ident)] = &[
                        #(#flags),*
                    ];

                    let mut remaining = self.0;
                    let mut separator = "";

                    for (name, flag) in FLAGS {
                        if flag.0 != 0 && (self.0 & flag.0) == flag.0 {
                            f.write_str(separator)?;
                            f.write_str(name)?;
                            remaining &= !flag.0;
                            separator = " | ";
                        }
                    }

                    if remaining != 0 {
                        f.write_str(separator)?;
                        return core::write!(f, "{:#x}", remaining);
                    }

                    if separator.is_empty() {
                        return f.write_str(
                            FLAGS.iter().find(|(_, flag)| flag.0 == 0).map_or("-", |(name, _)| *name)
                        );
                    }

                    core::result::Result::Ok(())
                }
            }
        }
    }
}

/// Generates the flag type, its constants and operators for the parsed enumeration.
impl core::convert::Into<proc_macro2::TokenStream> for super::Enumeration {
    fn into(self) -> proc_macro2::TokenStream {
        let ident = &self.ident;

        let structure = self.generate_struct();
        let constants = self.generate_constants();
        let conversions = self.generate_conversions();
        let union = self.generate_union();
        let debug = self.generate_debug();

        let operators: proc_macro2::TokenStream = crate::flags::Flags {
            ident: self.ident.clone(),
            repr: self.repr.clone()
        }.into();

        quote::quote! {
            #structure

            #[allow(non_upper_case_globals)]
            impl #ident {
                #constants
                #conversions
                #union
            }

            #debug
            #operators
        }
    }
}
