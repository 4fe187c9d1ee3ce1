//! SHA-256 hashing for blocks and transactions.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn sha256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_known_vector() {
        let h = sha256(b"abc");
        assert_eq!(&h[..4], &[0xbau8, 0x78, 0x16, 0xbf]);
    }

    #[test]
    fn sha256_different_inputs() {
        assert_ne!(sha256(b"hello"), sha256(b"world"));
    }

    #[test]
    fn sha256_multi_equivalent() {
        let single = sha256(b"helloworld");
        let multi = sha256_multi(&[b"hello", b"world"]);
        assert_eq!(single, multi);
    }

    #[test]
    fn sha256_multi_empty_parts() {
        assert_eq!(sha256_multi(&[]), sha256(b""));
    }
}
