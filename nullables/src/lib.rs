//! Nullable infrastructure for deterministic testing.
//!
//! The non-deterministic inputs of the admission pipeline (voter
//! unreliability, deliberation delay) and its write-only outputs (progress
//! messages) are abstracted behind traits. This crate provides test-friendly
//! implementations that:
//! - Return scripted values
//! - Never sleep
//! - Record what they were told
//!
//! Usage: swap real implementations for nullables in tests.

pub mod progress;
pub mod random;

pub use progress::RecordingProgress;
pub use random::NullRandomness;
