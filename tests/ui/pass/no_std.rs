//! The generated code only depends on `core`.

#![no_std]

extern crate std;

#[enum_bit_flags::bit_flags]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(usize)]
enum Capability {
    Network = 1 << 0,
    Storage = 1 << 1
}

fn main() {
    let mut capabilities = Capability::Network;
    capabilities |= Capability::Storage;

    assert_eq!(capabilities.bits(), 0b11);
    std::assert_eq!(std::format!("{:?}", capabilities), "Network | Storage");
}
