//! PIN gate
//!
//! A 4-digit PIN guards access to the data. The gate only knows how to
//! create, check, and change the PIN; reading it from the user is the CLI's
//! job.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{WellspaceError, WellspaceResult};
use crate::storage::Storage;

use super::hash::{hash_pin, verify_pin};

/// Number of digits in a PIN
pub const PIN_LENGTH: usize = 4;

pub const MSG_PIN_FORMAT: &str = "PIN must be 4 digits.";
pub const MSG_PIN_MISMATCH: &str = "PINs do not match.";
pub const MSG_PIN_INCORRECT: &str = "Incorrect PIN. Please try again.";
pub const MSG_PIN_NOT_SET: &str = "No PIN set. Run 'wellspace pin set' to create one.";
pub const MSG_PIN_ALREADY_SET: &str =
    "A PIN is already set. Use 'wellspace pin change' to replace it.";

/// A PIN held in memory; zeroed on drop
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretPin(String);

impl SecretPin {
    pub fn new(pin: impl Into<String>) -> Self {
        Self(pin.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exactly `PIN_LENGTH` ASCII digits
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == PIN_LENGTH && self.0.bytes().all(|b| b.is_ascii_digit())
    }
}

impl fmt::Debug for SecretPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretPin(****)")
    }
}

impl From<String> for SecretPin {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Proof that the PIN was checked for this invocation
#[derive(Debug)]
pub struct Unlocked(());

pub struct PinGate<'a> {
    storage: &'a Storage,
}

impl<'a> PinGate<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn is_set(&self) -> WellspaceResult<bool> {
        self.storage.pin.is_set()
    }

    /// Create the first PIN
    pub fn create(&self, pin: &SecretPin, confirm: &SecretPin) -> WellspaceResult<Unlocked> {
        if self.is_set()? {
            return Err(WellspaceError::Auth(MSG_PIN_ALREADY_SET.into()));
        }

        self.store_new(pin, confirm)?;
        tracing::info!("PIN created");
        Ok(Unlocked(()))
    }

    /// Check a PIN against the stored one
    pub fn unlock(&self, pin: &SecretPin) -> WellspaceResult<Unlocked> {
        let stored = self
            .storage
            .pin
            .get()?
            .ok_or_else(|| WellspaceError::Auth(MSG_PIN_NOT_SET.into()))?;

        // A malformed entry can never match; skip the hash work
        if !pin.is_well_formed() || !verify_pin(pin.as_str(), &stored.hash)? {
            tracing::warn!("rejected incorrect PIN");
            return Err(WellspaceError::Auth(MSG_PIN_INCORRECT.into()));
        }

        tracing::debug!("PIN accepted");
        Ok(Unlocked(()))
    }

    /// Replace the PIN; the current one was already checked by `unlock`
    pub fn change(
        &self,
        _unlocked: &Unlocked,
        new_pin: &SecretPin,
        confirm: &SecretPin,
    ) -> WellspaceResult<()> {
        self.store_new(new_pin, confirm)?;
        tracing::info!("PIN changed");
        Ok(())
    }

    fn store_new(&self, pin: &SecretPin, confirm: &SecretPin) -> WellspaceResult<()> {
        validate_new_pin(pin, confirm)?;
        let hash = hash_pin(pin.as_str())?;
        self.storage.pin.set_hash(hash)
    }
}

/// Check format first, then confirmation, matching the order users see
pub fn validate_new_pin(pin: &SecretPin, confirm: &SecretPin) -> WellspaceResult<()> {
    if !pin.is_well_formed() {
        return Err(WellspaceError::Validation(MSG_PIN_FORMAT.into()));
    }

    if pin != confirm {
        return Err(WellspaceError::Validation(MSG_PIN_MISMATCH.into()));
    }

    Ok(())
}
