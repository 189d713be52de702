//! Staff authority levels mirrored from the game server's GM hierarchy.

use serde::{Deserialize, Serialize};

/// Staff authority level.
///
/// Wire format: the legacy level name (`"PLAYABLE"`, `"PLAYER"`, ...).
/// `Playable` is synthetic — it means "no GM record" and is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorityLevel {
    Playable = 0,
    Player = 1,
    LowWizard = 2,
    HighWizard = 3,
    God = 4,
    Implementor = 5,
}

pub const ALL_LEVELS: [AuthorityLevel; 6] = [
    AuthorityLevel::Playable,
    AuthorityLevel::Player,
    AuthorityLevel::LowWizard,
    AuthorityLevel::HighWizard,
    AuthorityLevel::God,
    AuthorityLevel::Implementor,
];

impl AuthorityLevel {
    /// Hierarchy rank. Higher rank means higher authority.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Legacy level name as stored in the GM list.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Playable => "PLAYABLE",
            Self::Player => "PLAYER",
            Self::LowWizard => "LOW_WIZARD",
            Self::HighWizard => "HIGH_WIZARD",
            Self::God => "GOD",
            Self::Implementor => "IMPLEMENTOR",
        }
    }
}

impl PartialOrd for AuthorityLevel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AuthorityLevel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl std::fmt::Display for AuthorityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rank of a stored level name. Unknown names resolve to 0 (lowest privilege).
///
/// The GM list column is external data and loosely typed, so this never
/// fails — a misspelled or retired level simply grants nothing.
pub fn rank_of(level_name: &str) -> u8 {
    match level_name {
        "PLAYABLE" => 0,
        "PLAYER" => 1,
        "LOW_WIZARD" => 2,
        "HIGH_WIZARD" => 3,
        "GOD" => 4,
        "IMPLEMENTOR" => 5,
        _ => 0,
    }
}

/// Whether a user holding `user_level_name` may use a feature gated on
/// `required`. Access is granted when the user's rank is at least the
/// required rank, so every level can access its own tier.
pub fn can_access(user_level_name: &str, required: AuthorityLevel) -> bool {
    rank_of(user_level_name) >= required.rank()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_level_names_to_ranks() {
        assert_eq!(rank_of("PLAYABLE"), 0);
        assert_eq!(rank_of("PLAYER"), 1);
        assert_eq!(rank_of("LOW_WIZARD"), 2);
        assert_eq!(rank_of("HIGH_WIZARD"), 3);
        assert_eq!(rank_of("GOD"), 4);
        assert_eq!(rank_of("IMPLEMENTOR"), 5);
    }

    #[test]
    fn should_rank_unknown_level_names_as_zero() {
        assert_eq!(rank_of("SUPERGM"), 0);
        assert_eq!(rank_of("implementor"), 0);
        assert_eq!(rank_of(""), 0);
    }

    #[test]
    fn should_match_rank_comparison_for_all_level_pairs() {
        for user in ALL_LEVELS {
            for required in ALL_LEVELS {
                assert_eq!(
                    can_access(user.as_str(), required),
                    user.rank() >= required.rank(),
                    "user={user:?} required={required:?}"
                );
            }
        }
    }

    #[test]
    fn should_grant_access_to_own_tier() {
        for level in ALL_LEVELS {
            assert!(can_access(level.as_str(), level));
        }
    }

    #[test]
    fn should_order_levels_by_rank() {
        assert!(AuthorityLevel::Playable < AuthorityLevel::Player);
        assert!(AuthorityLevel::Player < AuthorityLevel::LowWizard);
        assert!(AuthorityLevel::LowWizard < AuthorityLevel::HighWizard);
        assert!(AuthorityLevel::HighWizard < AuthorityLevel::God);
        assert!(AuthorityLevel::God < AuthorityLevel::Implementor);
    }

    #[test]
    fn should_serialize_levels_as_legacy_names() {
        assert_eq!(
            serde_json::to_string(&AuthorityLevel::Implementor).unwrap(),
            "\"IMPLEMENTOR\""
        );
        assert_eq!(
            serde_json::to_string(&AuthorityLevel::LowWizard).unwrap(),
            "\"LOW_WIZARD\""
        );
    }

    #[test]
    fn should_expose_rank_and_name_consistently() {
        for level in ALL_LEVELS {
            assert_eq!(rank_of(level.as_str()), level.rank());
        }
    }
}
