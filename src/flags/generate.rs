//! Contains code to generate the combining operators.

impl super::Flags {
    /// Generates a `core::ops::BitOr` implementation.
    fn generate_bit_or(&self) -> proc_macro2::TokenStream {
        let ident = &self.ident;
        let repr = &self.repr;

        quote::quote! {
            impl core::ops::BitOr for #ident {
                type Output = Self;

                #[inline(always)]
                fn bitor(self, rhs: Self) -> Self::Output {
                    Self(<#repr as core::ops::BitOr>::bitor(self.0, rhs.0))
                }
            }
        }
    }

    /// Generates a `core::ops::BitOrAssign` implementation.
    fn generate_bit_or_assign(&self) -> proc_macro2::TokenStream {
        let ident = &self.ident;
        let repr = &self.repr;

        quote::quote! {
            impl core::ops::BitOrAssign for #ident {
                #[inline(always)]
                fn bitor_assign(&mut self, rhs: Self) {
                    <#repr as core::ops::BitOrAssign>::bitor_assign(&mut self.0, rhs.0)
                }
            }
        }
    }
}

/// Generates the operators for the parsed flag type.
impl core::convert::Into<proc_macro2::TokenStream> for super::Flags {
    fn into(self) -> proc_macro2::TokenStream {
        let bit_or = self.generate_bit_or();
        let bit_or_assign = self.generate_bit_or_assign();

        quote::quote! {
            #bit_or
            #bit_or_assign
        }
    }
}
