use std::fmt;
use std::io::{self, Write};

use sha2::{Digest as _, Sha256};

pub const DIGEST_SIZE: usize = 32;

/// A SHA-256 digest.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    /// Hashes `bytes` in one call to the SHA-256 primitive.
    pub fn of(bytes: &[u8]) -> Digest {
        Digest(Sha256::digest(bytes).into())
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// 64 lowercase hex characters, no separators.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Writes the digest as a single line.
pub fn present<W: Write>(digest: &Digest, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", digest)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::empty("", "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")]
    #[case::abc("abc", "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")]
    #[case::two_blocks(
        "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
    )]
    fn test_known_digests(#[case] message: &str, #[case] expected: &str) {
        assert_eq!(Digest::of(message.as_bytes()).to_hex(), expected);
    }

    #[test]
    fn test_hex_rendering() {
        let digest = Digest::of(b"\xff\x00");
        let hex = digest.to_string();

        assert_eq!(hex.len(), 2 * DIGEST_SIZE);
        assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        assert_eq!(hex::decode(&hex).unwrap(), digest.as_bytes().to_vec());
    }

    #[test]
    fn test_present_writes_one_line() {
        let mut out = Vec::new();
        present(&Digest::of(b"abc"), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad\n"
        );
    }
}
