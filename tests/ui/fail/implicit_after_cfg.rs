#[enum_bit_flags::bit_flags]
#[repr(u8)]
enum Flag {
    A = 1,
    #[cfg(any())]
    B = 2,
    C
}

fn main() {}
