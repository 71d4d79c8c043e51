#[derive(enum_bit_flags::BitOr)]
struct Named {
    bits: u8
}

fn main() {}
