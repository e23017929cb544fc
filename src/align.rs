use crate::decode::{BitString, ByteSequence, Decoded};
use crate::error::{DecodeError, Result};

/// Turns decoded material into whole octets.
///
/// Octet material passes through untouched. Bit material must hold a
/// multiple of 8 digits; it is then packed left to right, most significant
/// bit first. Nothing is ever truncated or padded.
pub fn align(decoded: Decoded) -> Result<ByteSequence> {
    match decoded {
        Decoded::Octets(bytes) => Ok(bytes),
        Decoded::Bits(bits) => pack(&bits),
    }
}

fn pack(bits: &BitString) -> Result<ByteSequence> {
    if bits.len() % 8 != 0 {
        return Err(DecodeError::Misaligned { bits: bits.len() });
    }

    Ok(bits
        .bits()
        .chunks(8)
        .map(|octet| octet.iter().fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit)))
        .collect())
}
