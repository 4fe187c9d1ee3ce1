//! Key and signature types for participant identity.
//!
//! Thin wrappers over the `rsa` crate's key types so the rest of the
//! workspace never names the backend directly.

use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An RSA public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(RsaPublicKey);

impl PublicKey {
    pub fn from_rsa(key: RsaPublicKey) -> Self {
        Self(key)
    }

    pub fn as_rsa(&self) -> &RsaPublicKey {
        &self.0
    }

    /// Modulus size in bits.
    pub fn bits(&self) -> usize {
        self.0.size() * 8
    }
}

/// An RSA private key.
///
/// Deliberately not `Debug`, `Clone` or `Serialize`. The backing key zeroizes
/// its limbs on drop.
pub struct PrivateKey(RsaPrivateKey);

impl PrivateKey {
    pub fn from_rsa(key: RsaPrivateKey) -> Self {
        Self(key)
    }

    pub fn as_rsa(&self) -> &RsaPrivateKey {
        &self.0
    }
}

/// A detached RSA-PSS signature.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature(pub Vec<u8>);

impl Signature {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = &self.0[..self.0.len().min(4)];
        write!(f, "Signature({}.., {} bytes)", hex::encode(prefix), self.0.len())
    }
}

/// An RSA key pair (public + private).
///
/// Use `permchain_crypto::generate_keypair()` to construct one. This struct is
/// intentionally just data.
pub struct KeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
}
