mod align;
mod classify;
mod decode;
pub mod digest;
pub mod error;

use std::borrow::Cow;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use tracing::{debug, trace};

pub use align::align;
pub use classify::{classify, InputType};
pub use decode::{decode, BitString, ByteSequence, Decoded};
pub use digest::{present, Digest};
pub use error::{DecodeError, Result};

/// Literal used when no argument is given.
pub const DEFAULT_INPUT: &str = "abc";

/// Bytes the decoder should see: the file content for a file reference,
/// the literal itself otherwise.
pub fn load(literal: &OsStr, input_type: InputType) -> Result<Cow<'_, [u8]>> {
    match input_type {
        InputType::FileReference => {
            let path = Path::new(literal);
            let content = fs::read(path).map_err(|source| DecodeError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
            trace!(path = %path.display(), len = content.len(), "read file");
            Ok(Cow::Owned(content))
        }
        _ => Ok(Cow::Borrowed(literal.as_encoded_bytes())),
    }
}

/// Classifies, decodes and validates `literal`, returning the exact bytes it
/// stands for.
pub fn resolve(literal: impl AsRef<OsStr>) -> Result<ByteSequence> {
    let literal = literal.as_ref();
    let input_type = classify(literal);
    debug!(%input_type, "classified input");

    let data = load(literal, input_type)?;
    let decoded = decode(&data, input_type)?;
    let bytes = align(decoded)?;
    debug!(len = bytes.len(), "decoded input");

    Ok(bytes)
}

/// Digest of the bytes `literal` stands for.
pub fn digest_input(literal: impl AsRef<OsStr>) -> Result<Digest> {
    let bytes = resolve(literal)?;
    Ok(Digest::of(&bytes))
}
