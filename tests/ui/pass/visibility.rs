//! Flags declared in a module are usable outside of it with their declared visibility.

mod style {
    #[enum_bit_flags::bit_flags]
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    #[repr(u32)]
    pub enum Style {
        Bold = 1 << 0,
        Italic = 1 << 1,
        Underline = 1 << 2
    }

    #[derive(Clone, Copy, Debug, enum_bit_flags::BitOr, Eq, PartialEq)]
    pub struct Color(pub(crate) u8);
}

use style::{Color, Style};

fn main() {
    let style = Style::Bold | Style::Underline;
    assert_eq!(style.bits(), 0b101);
    assert_eq!(Style::from_bits(0b101), style);

    assert_eq!(Color(1) | Color(4), Color(5));
}
