//! RSA-PSS message signing and verification.
//!
//! The message is hashed with SHA-256 before the PSS encoding, MGF1 uses
//! SHA-256, and the salt is as long as the modulus allows.

use crate::error::CryptoError;
use permchain_types::{PrivateKey, PublicKey, Signature};
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, Pss};
use sha2::{Digest, Sha256};

/// Longest PSS salt for a modulus `n` with a SHA-256 digest.
///
/// `emLen - hLen - 2` where `emLen = ceil((modBits - 1) / 8)`.
pub fn max_salt_len(modulus: &BigUint) -> usize {
    let em_bits = modulus.bits().saturating_sub(1);
    let em_len = em_bits.div_ceil(8);
    em_len.saturating_sub(Sha256::output_size() + 2)
}

/// Sign a message with a private key, returning the signature.
pub fn sign_message(message: &[u8], private_key: &PrivateKey) -> Result<Signature, CryptoError> {
    let key = private_key.as_rsa();
    let digest = Sha256::digest(message);
    let scheme = Pss::new_with_salt::<Sha256>(max_salt_len(key.n()));
    let sig = key
        .sign_with_rng(&mut rand::thread_rng(), scheme, &digest)
        .map_err(|e| CryptoError::Signing(e.to_string()))?;
    Ok(Signature(sig))
}

/// Verify a signature against a message and public key.
///
/// Returns `true` if the signature is valid, `false` otherwise. Malformed
/// signatures never panic.
pub fn verify_signature(message: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
    let key = public_key.as_rsa();
    let digest = Sha256::digest(message);
    let scheme = Pss::new_with_salt::<Sha256>(max_salt_len(key.n()));
    key.verify(scheme, &digest, signature.as_bytes()).is_ok()
}
