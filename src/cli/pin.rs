//! PIN CLI commands
//!
//! Create, change, and verify the PIN. PINs come from `--pin` /
//! `WELLSPACE_PIN` when given, otherwise from a hidden prompt.

use clap::Subcommand;

use crate::auth::pin::MSG_PIN_NOT_SET;
use crate::auth::{PinGate, SecretPin, Unlocked};
use crate::error::{WellspaceError, WellspaceResult};
use crate::storage::Storage;

/// PIN management commands
#[derive(Subcommand)]
pub enum PinCommands {
    /// Create a PIN (only when none is set)
    Set,

    /// Change the PIN (requires the current one)
    Change {
        /// New PIN, for scripting; prompts when omitted
        #[arg(long, env = "WELLSPACE_NEW_PIN", hide_env_values = true)]
        new_pin: Option<String>,
    },

    /// Check a PIN without doing anything else
    Verify,
}

/// Handle PIN commands
pub fn handle_pin_command(
    storage: &Storage,
    pin_arg: Option<&str>,
    cmd: PinCommands,
) -> WellspaceResult<()> {
    let gate = PinGate::new(storage);

    match cmd {
        PinCommands::Set => {
            if gate.is_set()? {
                println!("A PIN is already set.");
                println!("Use 'wellspace pin change' to replace it.");
                return Ok(());
            }

            let (pin, confirm) = read_new_pin(pin_arg)?;
            gate.create(&pin, &confirm)?;
            println!("PIN created. You'll need it for every data command.");
        }

        PinCommands::Change { new_pin } => {
            let current = read_pin(pin_arg, "Enter current PIN: ")?;
            // Fail on a wrong PIN before asking for the new one
            let unlocked = gate.unlock(&current)?;

            let (pin, confirm) = read_new_pin(new_pin.as_deref())?;
            gate.change(&unlocked, &pin, &confirm)?;
            println!("PIN changed.");
        }

        PinCommands::Verify => {
            require_unlocked(storage, pin_arg)?;
            println!("PIN is correct.");
        }
    }

    Ok(())
}

/// Unlock the data for this invocation, or fail
pub fn require_unlocked(storage: &Storage, pin_arg: Option<&str>) -> WellspaceResult<Unlocked> {
    let gate = PinGate::new(storage);

    if !gate.is_set()? {
        return Err(WellspaceError::Auth(MSG_PIN_NOT_SET.to_string()));
    }

    let pin = read_pin(pin_arg, "Enter PIN: ")?;
    gate.unlock(&pin)
}

/// Read a PIN from the argument, or prompt without echo
fn read_pin(provided: Option<&str>, prompt: &str) -> WellspaceResult<SecretPin> {
    match provided {
        Some(pin) => Ok(SecretPin::new(pin.trim())),
        None => rpassword::prompt_password(prompt)
            .map(|pin| SecretPin::from(pin.trim().to_string()))
            .map_err(|e| WellspaceError::Io(format!("Failed to read PIN: {}", e))),
    }
}

/// A new PIN and its confirmation; a provided PIN confirms itself
fn read_new_pin(provided: Option<&str>) -> WellspaceResult<(SecretPin, SecretPin)> {
    match provided {
        Some(pin) => {
            let pin = SecretPin::new(pin.trim());
            Ok((pin.clone(), pin))
        }
        None => {
            let pin = read_pin(None, "Enter new 4-digit PIN: ")?;
            let confirm = read_pin(None, "Confirm PIN: ")?;
            Ok((pin, confirm))
        }
    }
}
