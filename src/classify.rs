use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

/// How a literal is to be turned into bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputType {
    HexLiteral,
    BinaryLiteral,
    FileReference,
    PlainText,
}

impl InputType {
    /// Length of the textual prefix that marks this type, if any.
    pub fn prefix_len(&self) -> usize {
        match *self {
            InputType::HexLiteral | InputType::BinaryLiteral => 2,
            InputType::FileReference | InputType::PlainText => 0,
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            InputType::HexLiteral => "hex",
            InputType::BinaryLiteral => "binary",
            InputType::FileReference => "file",
            InputType::PlainText => "text",
        };
        f.write_str(name)
    }
}

fn has_prefix(literal: &[u8], prefix: &[u8]) -> bool {
    literal
        .get(..prefix.len())
        .map_or(false, |head| head.eq_ignore_ascii_case(prefix))
}

/// Classifies a literal. Precedence is fixed: hex prefix, binary prefix,
/// existing regular file, and plain text as the unconditional fallback.
///
/// The literal need not be valid UTF-8; prefixes are matched on its
/// encoded bytes.
pub fn classify(literal: impl AsRef<OsStr>) -> InputType {
    let literal = literal.as_ref();
    let bytes = literal.as_encoded_bytes();

    if has_prefix(bytes, b"0x") {
        InputType::HexLiteral
    } else if has_prefix(bytes, b"0b") {
        InputType::BinaryLiteral
    } else if Path::new(literal).is_file() {
        InputType::FileReference
    } else {
        InputType::PlainText
    }
}
