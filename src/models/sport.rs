//! Catalog of supported sports (the match kinds a bracket can be played in).

use serde::{Deserialize, Serialize};

/// Readable name used for any id outside the catalog.
pub const INVALID_SPORT_NAME: &str = "invalid";

/// A supported kind of match. The discriminant is the public numeric id.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    Hockey = 1,
    Cricket = 2,
    Football = 3,
    Swimming = 4,
    Archery = 5,
}

impl Sport {
    /// Every supported sport, in id order.
    pub const ALL: [Sport; 5] = [
        Sport::Hockey,
        Sport::Cricket,
        Sport::Football,
        Sport::Swimming,
        Sport::Archery,
    ];

    /// Membership test against the catalog.
    pub fn from_id(id: u32) -> Option<Sport> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn id(self) -> u32 {
        self as u32
    }

    /// Lowercase human-readable name, e.g. `"archery"`.
    pub fn name(self) -> &'static str {
        match self {
            Sport::Hockey => "hockey",
            Sport::Cricket => "cricket",
            Sport::Football => "football",
            Sport::Swimming => "swimming",
            Sport::Archery => "archery",
        }
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Readable name for a raw sport id, or `"invalid"` when it is not in the catalog.
pub fn readable_name(id: u32) -> &'static str {
    Sport::from_id(id).map_or(INVALID_SPORT_NAME, Sport::name)
}
