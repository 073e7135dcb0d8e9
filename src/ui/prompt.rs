//! Interactive prompts.
//!
//! Password entry is masked. New passwords are asked for twice; passwords
//! being verified are asked for once. No length or complexity rules are
//! applied: that is the caller's policy, not the hash format's.

use anyhow::Result;
use drupass::secret::Password;
use drupass::types::Operation;
use inquire::{Password as PasswordPrompt, PasswordDisplayMode, Select, Text};

/// Prompts for a password to hash, with confirmation.
pub fn new_password() -> Result<Password> {
    let password = PasswordPrompt::new("Enter password")
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_custom_confirmation_message("Confirm password")
        .with_custom_confirmation_error_message("passwords do not match")
        .prompt()?;

    Ok(Password::from_string(password))
}

/// Prompts once for a password to check against a stored hash.
pub fn candidate_password() -> Result<Password> {
    let password = PasswordPrompt::new("Enter password").with_display_mode(PasswordDisplayMode::Masked).without_confirmation().prompt()?;

    Ok(Password::from_string(password))
}

/// Prompts for a stored hash, trimming surrounding whitespace.
pub fn stored_hash() -> Result<String> {
    let stored = Text::new("Stored hash").prompt()?;
    Ok(stored.trim().to_owned())
}

/// Prompts for the wizard action.
pub fn select_operation() -> Result<Operation> {
    Ok(Select::new("Select operation", Operation::ALL.to_vec()).prompt()?)
}
