#[enum_bit_flags::bit_flags]
#[repr(C)]
enum Flag {
    A = 1,
    B = 2
}

fn main() {}
