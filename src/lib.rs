//! # Bit flag enumerations for Rust
//!
//! Provides macros which generate the bitwise-OR operator `|` for enumeration-like types, so a
//! type can be used as a set of independent flags.
//!
//! ## Dependencies
//!
//! None, the generated code only uses `core` and works in a `#[no_std]` environment.
//!
//! ## Description
//!
//! Flags are commonly declared as a C-like enumeration with one bit per variant:
//!
//! ```rust
//! #[derive(Clone, Copy)]
//! #[repr(u8)]
//! enum Style {
//!     Bold      = 1 << 0,
//!     Italic    = 1 << 1,
//!     Underline = 1 << 2
//! }
//! ```
//!
//! An enumeration does not implement `|`, and even a hand written `core::ops::BitOr` could not
//! return `Style::Bold | Style::Italic`, because `0b011` is not the discriminant of any variant
//! and an enumeration must never hold such a value.
//!
//! The `bit_flags` attribute turns the enumeration into a `#[repr(transparent)]` tuple struct
//! over the `repr` type, each variant into an associated constant of the same name, and
//! generates `|` and `|=` for it:
//!
//! ```rust
//! #[enum_bit_flags::bit_flags]
//! #[derive(Clone, Copy, Debug, Eq, PartialEq)]
//! #[repr(u8)]
//! enum Style {
//!     Bold      = 1 << 0,
//!     Italic    = 1 << 1,
//!     Underline = 1 << 2
//! }
//!
//! let mut style = Style::Bold | Style::Italic;
//! assert_eq!(style.bits(), 0b011);
//!
//! style |= Style::Underline;
//! assert_eq!(style.bits(), 0b111);
//! assert_eq!(&format!("{:?}", style), "Bold | Italic | Underline");
//! ```
//!
//! Types which already are a newtype over a primitive integer only need the operators:
//!
//! ```rust
//! #[derive(Clone, Copy, Debug, enum_bit_flags::BitOr, Eq, PartialEq)]
//! struct Access(u32);
//!
//! impl Access {
//!     const READ:  Self = Self(1 << 0);
//!     const WRITE: Self = Self(1 << 1);
//! }
//!
//! assert_eq!(Access::READ | Access::WRITE, Access(0b11));
//! ```
//!
//! ## Semantics
//!
//! Combining is the bitwise-OR of the underlying integers and therefore commutative,
//! associative and idempotent. It is defined for every bit pattern, including zero and patterns
//! no constant is named after. Whether a combination is meaningful is up to the consumer of the
//! type, the macros do not validate it, nor do they check that the constants occupy distinct bits.
//!
//! Each type receives its own operators, so values of different flag types can not be combined:
//!
//! ```compile_fail,E0308
//! #[enum_bit_flags::bit_flags]
//! #[derive(Clone, Copy)]
//! #[repr(u8)]
//! enum Left { A = 1 }
//!
//! #[enum_bit_flags::bit_flags]
//! #[derive(Clone, Copy)]
//! #[repr(u8)]
//! enum Right { B = 2 }
//!
//! let _ = Left::A | Right::B;
//! ```


mod enumeration;
mod flags;
mod primitive;

/// This attribute rewrites a C-like enumeration with an integer `repr` into a flag type and
/// generates the `core::ops::BitOr` and `core::ops::BitOrAssign` implementations for it.
///
/// The generated type contains:
///
/// - an associated constant for every variant, which keeps the variant's name, documentation
///   and value (implicit values follow the previous variant, starting at `0`),
/// - `const fn bits(self)`, which returns the underlying bit pattern,
/// - `const fn from_bits(bits)`, which accepts every bit pattern,
/// - `const fn union(self, other)`, which combines like `|` in constant expressions.
///
/// All other attributes are applied to the generated tuple struct. If `Debug` is derived, it is
/// replaced by an implementation which prints the contained constants joined with `" | "`.
///
/// The attribute has to be placed before `#[derive(...)]`.
///
/// Example:
///
/// ```rust
/// #[enum_bit_flags::bit_flags]
/// #[derive(Clone, Copy, Debug, Eq, PartialEq)]
/// #[repr(u16)]
/// pub enum Permission {
///     /// Nothing is allowed.
///     None,
///     Read,
///     Write,
///     Execute = 1 << 2
/// }
///
/// const READ_WRITE: Permission = Permission::Read.union(Permission::Write);
///
/// assert_eq!(Permission::Read | Permission::Write, READ_WRITE);
/// assert_eq!(READ_WRITE.bits(), 0b011);
/// assert_eq!(Permission::from_bits(0b100), Permission::Execute);
///
/// assert_eq!(&format!("{:?}", Permission::None), "None");
/// assert_eq!(&format!("{:?}", READ_WRITE | Permission::from_bits(0x10)), "Read | Write | 0x10");
/// ```
///
/// The enumeration must have an integer representation:
///
/// ```compile_fail
/// #[enum_bit_flags::bit_flags]
/// #[repr(C)]
/// enum Flag { A = 1, B = 2 }
/// ```
///
/// And only unit variants:
///
/// ```compile_fail
/// #[enum_bit_flags::bit_flags]
/// #[repr(u8)]
/// enum Flag { A(u8) }
/// ```
#[proc_macro_attribute]
pub fn bit_flags(
    attribute: proc_macro::TokenStream,
    item: proc_macro::TokenStream
) -> proc_macro::TokenStream {
    match enumeration::Enumeration::parse(attribute.into(), item.into()) {
        Ok(enumeration) => Into::<proc_macro2::TokenStream>::into(enumeration),
        Err(error) => error.to_compile_error()
    }.into()
}

/// Generates the `core::ops::BitOr` and `core::ops::BitOrAssign` implementations for a tuple
/// struct with a single primitive integer field.
///
/// ```rust
/// #[derive(Clone, Copy, Debug, enum_bit_flags::BitOr, Eq, PartialEq)]
/// #[repr(transparent)]
/// pub struct Signal(i16);
///
/// let mut signal = Signal(0b01);
/// signal |= Signal(0b10);
///
/// assert_eq!(signal, Signal(0b11));
/// assert_eq!(signal | signal, signal);
/// ```
///
/// ```compile_fail
/// #[derive(enum_bit_flags::BitOr)]
/// struct Named { bits: u8 }
/// ```
#[proc_macro_derive(BitOr)]
pub fn derive_bit_or(item: proc_macro::TokenStream) -> proc_macro::TokenStream {
    match flags::Flags::parse(item.into()) {
        Ok(flags) => Into::<proc_macro2::TokenStream>::into(flags),
        Err(error) => error.to_compile_error()
    }.into()
}
