//! System-wide constants for the match engine.

/// Default maximum length of a player name, in characters.
pub const DEFAULT_MAX_NAME_LEN: usize = 64;

/// Password value submitted by unfilled API forms.
pub const PLACEHOLDER_PASSWORD: &str = "string";

/// Shown in place of a move that has not been revealed.
pub const HIDDEN_MOVE: &str = "Hidden";

/// Result text while no outcome is fixed.
pub const IN_PROGRESS_TEXT: &str = "InProgress";

/// Result text for equal moves.
pub const TIE_TEXT: &str = "It's a Tie!";

/// Domain separator for seat secret digests.
pub const SECRET_DIGEST_DOMAIN: &[u8] = b"rps:seat_secret:v1:";
