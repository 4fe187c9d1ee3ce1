//! Cryptographic primitives for permchain.
//!
//! - **RSA-PSS** (SHA-256, MGF1/SHA-256, maximum salt length) for signing
//! - **SHA-256** for block and transaction content hashes

pub mod error;
pub mod hash;
pub mod keys;
pub mod sign;

pub use error::CryptoError;
pub use hash::{sha256, sha256_multi};
pub use keys::generate_keypair;
pub use sign::{max_salt_len, sign_message, verify_signature};
