use crate::classify::InputType;
use crate::error::{DecodeError, Result};

pub type ByteSequence = Vec<u8>;

/// Binary digits in literal order, not yet grouped into octets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    pub(crate) fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }
}

impl From<Vec<bool>> for BitString {
    fn from(bits: Vec<bool>) -> Self {
        BitString { bits }
    }
}

/// Output of the decoder. Only `Bits` can still be misaligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Octets(ByteSequence),
    Bits(BitString),
}

/// Decodes `data` according to `input_type`.
///
/// `data` is the literal itself, except for `FileReference` where the caller
/// has already substituted the file content. Prefixed literals are expected
/// to still carry their `0x`/`0b` prefix.
pub fn decode(data: &[u8], input_type: InputType) -> Result<Decoded> {
    let body = data.get(input_type.prefix_len()..).unwrap_or_default();

    match input_type {
        InputType::HexLiteral => Ok(Decoded::Octets(hex::decode(body)?)),
        InputType::BinaryLiteral => decode_binary(body).map(Decoded::Bits),
        InputType::FileReference | InputType::PlainText => Ok(Decoded::Octets(body.to_vec())),
    }
}

fn decode_binary(digits: &[u8]) -> Result<BitString> {
    digits
        .iter()
        .enumerate()
        .map(|(position, digit)| match digit {
            b'0' => Ok(false),
            b'1' => Ok(true),
            _ => Err(DecodeError::MalformedBinary {
                character: char_at(digits, position),
                position,
            }),
        })
        .collect::<Result<Vec<_>>>()
        .map(BitString::from)
}

// everything before `position` is ASCII, so it is always a char boundary
fn char_at(digits: &[u8], position: usize) -> char {
    String::from_utf8_lossy(&digits[position..])
        .chars()
        .next()
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}
