#[enum_bit_flags::bit_flags]
#[derive(Clone, Copy)]
#[repr(u8)]
enum Left {
    A = 1
}

#[enum_bit_flags::bit_flags]
#[derive(Clone, Copy)]
#[repr(u8)]
enum Right {
    B = 2
}

fn main() {
    let _ = Left::A | Right::B;
}
