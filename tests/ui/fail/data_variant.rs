#[enum_bit_flags::bit_flags]
#[repr(u8)]
enum Flag {
    A(u8)
}

fn main() {}
