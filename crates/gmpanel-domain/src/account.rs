//! Account status as stored by the game's account database.

use serde::{Deserialize, Serialize};

/// Account status column values.
///
/// The legacy table stores an enum of `OK`/`BANNED`, but other server forks
/// add their own values, so anything unrecognized is kept verbatim and
/// treated as inactive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AccountStatus {
    Known(KnownStatus),
    Other(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KnownStatus {
    Ok,
    Banned,
}

impl AccountStatus {
    pub fn from_db(value: &str) -> Self {
        match value {
            "OK" => Self::Known(KnownStatus::Ok),
            "BANNED" => Self::Known(KnownStatus::Banned),
            other => Self::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(KnownStatus::Ok) => "OK",
            Self::Known(KnownStatus::Banned) => "BANNED",
            Self::Other(s) => s,
        }
    }

    /// Only `OK` accounts may log in or use authenticated routes.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Known(KnownStatus::Ok))
    }
}
