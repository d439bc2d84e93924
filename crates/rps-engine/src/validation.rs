//! Identity validation shared by create and join.

use rps_types::{EngineConfig, Result, RpsError};

/// A name is non-blank, no longer than `max_len` characters, and made of
/// ASCII letters and spaces only.
pub fn validate_player_name(name: &str, max_len: usize) -> Result<()> {
    if name.trim().is_empty() {
        return Err(RpsError::invalid_input("Player name is required"));
    }
    if name.chars().count() > max_len {
        return Err(RpsError::invalid_input(format!(
            "Player name must be at most {max_len} characters"
        )));
    }
    if !name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        return Err(RpsError::invalid_input(
            "Player name must only contain alphabetic characters and spaces",
        ));
    }
    Ok(())
}

/// A password only has to be non-blank here; placeholder values are
/// rejected at the boundary.
pub fn validate_password(password: &str) -> Result<()> {
    if password.trim().is_empty() {
        return Err(RpsError::invalid_input("Password is required"));
    }
    Ok(())
}

pub fn validate_identity(name: &str, password: &str, config: &EngineConfig) -> Result<()> {
    validate_player_name(name, config.max_name_len)?;
    validate_password(password)
}
