use gr_core::PlayerId;

/// Result type for draft operations.
pub type DraftResult<T> = Result<T, DraftError>;

/// Errors raised while generating teams or assigning gods.
///
/// All of these are user-recoverable and meant to be shown as messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    /// The roster is too small for the requested team sizes.
    #[error(
        "need at least {needed} players to generate teams ({first}v{second}), \
         have {available} ({} short)",
        .needed.saturating_sub(*.available)
    )]
    InsufficientPlayers {
        /// Players required (`first + second`).
        needed: usize,
        /// Players on the roster.
        available: usize,
        /// Size of the first team.
        first: usize,
        /// Size of the second team.
        second: usize,
    },

    /// A team size of zero was requested.
    #[error("team sizes must be at least 1 (got {first}v{second})")]
    InvalidTeamSize {
        /// Requested size of the first team.
        first: usize,
        /// Requested size of the second team.
        second: usize,
    },

    /// Every god is already taken.
    #[error("no more gods available for {player}")]
    NoCharactersAvailable {
        /// Name of the player who could not be assigned.
        player: String,
    },

    /// The player is not a member of either team.
    #[error("player {0} is not on a team")]
    PlayerNotInTeams(PlayerId),

    /// Assignment was requested before teams were generated.
    #[error("generate teams first")]
    NoTeams,

    /// A free roll was started over an empty list of gods.
    #[error("no gods to roll from")]
    EmptyPool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_players_reports_shortfall() {
        let err = DraftError::InsufficientPlayers {
            needed: 10,
            available: 7,
            first: 5,
            second: 5,
        };
        assert_eq!(
            err.to_string(),
            "need at least 10 players to generate teams (5v5), have 7 (3 short)"
        );
    }

    #[test]
    fn shortfall_never_goes_negative() {
        let err = DraftError::InsufficientPlayers {
            needed: 4,
            available: 6,
            first: 2,
            second: 2,
        };
        assert!(err.to_string().ends_with("have 6 (0 short)"));
    }

    #[test]
    fn no_characters_names_player() {
        let err = DraftError::NoCharactersAvailable {
            player: "Cara".to_string(),
        };
        assert_eq!(err.to_string(), "no more gods available for Cara");
    }
}
