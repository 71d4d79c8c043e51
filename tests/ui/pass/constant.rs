//! Combinations are usable in constant expressions and in `match` patterns.

#[enum_bit_flags::bit_flags]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
enum Mode {
    Read = 1,
    Write = 2,
    Append = 4
}

const READ_WRITE: Mode = Mode::Read.union(Mode::Write);
const READ_APPEND: Mode = Mode::from_bits(Mode::Read.bits() | Mode::Append.bits());

fn describe(mode: Mode) -> &'static str {
    match mode {
        READ_WRITE => "read-write",
        READ_APPEND => "read-append",
        Mode::Read => "read",
        _ => "other"
    }
}

fn main() {
    assert_eq!(describe(Mode::Read | Mode::Write), "read-write");
    assert_eq!(describe(Mode::Append | Mode::Read), "read-append");
    assert_eq!(describe(Mode::Read), "read");
    assert_eq!(describe(Mode::Write), "other");
}
