//! Request payloads accepted at the boundary.
//!
//! Missing fields deserialize to empty values and are rejected by the gate
//! as invalid input, the same as blank ones.

use std::fmt;

use rps_types::Credentials;
use serde::Deserialize;

/// Name and password sent with start, join and move requests.
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerCredentials {
    pub player_name: String,
    pub password: String,
}

impl PlayerCredentials {
    pub fn new(player_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            password: password.into(),
        }
    }

    #[must_use]
    pub fn as_credentials(&self) -> Credentials<'_> {
        Credentials::new(&self.player_name, &self.password)
    }
}

impl fmt::Debug for PlayerCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerCredentials")
            .field("player_name", &self.player_name)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A move submission. `move` is the wire code: 1 = Rock, 2 = Paper, 3 = Scissors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MoveRequest {
    pub credentials: Option<PlayerCredentials>,
    #[serde(rename = "move")]
    pub move_code: i64,
}

impl MoveRequest {
    pub fn new(credentials: PlayerCredentials, move_code: i64) -> Self {
        Self {
            credentials: Some(credentials),
            move_code,
        }
    }
}
