//! RSA key generation.

use crate::error::CryptoError;
use permchain_types::{KeyPair, PrivateKey, PublicKey};
use rand::rngs::OsRng;
use rsa::RsaPrivateKey;

/// Generate a new RSA key pair (public exponent 65537) from the OS random source.
pub fn generate_keypair(bits: usize) -> Result<KeyPair, CryptoError> {
    let private = RsaPrivateKey::new(&mut OsRng, bits)
        .map_err(|e| CryptoError::KeyGeneration(e.to_string()))?;
    let public = private.to_public_key();
    tracing::trace!(bits, "generated RSA key pair");
    Ok(KeyPair {
        public: PublicKey::from_rsa(public),
        private: PrivateKey::from_rsa(private),
    })
}
