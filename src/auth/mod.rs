//! PIN-based access gate for WellSpace
//!
//! The PIN is hashed with Argon2id and kept in memory only inside zeroizing
//! buffers.

pub mod hash;
pub mod pin;

pub use hash::{hash_pin, verify_pin};
pub use pin::{validate_new_pin, PinGate, SecretPin, Unlocked, PIN_LENGTH};
