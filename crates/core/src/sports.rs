//! Sports event categories.
//!
//! Stored as upper-case text in the `events.category` column. Text that does
//! not name a known category decodes to [`EventCategory::Unknown`] rather than
//! failing the read.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventCategory {
    #[default]
    Unknown,
    Soccer,
    Basketball,
    Tennis,
    Cricket,
    Baseball,
    IceHockey,
    AustralianRules,
    RugbyLeague,
    RugbyUnion,
    Golf,
    Boxing,
}

impl EventCategory {
    pub const ALL: &'static [Self] = &[
        Self::Unknown,
        Self::Soccer,
        Self::Basketball,
        Self::Tennis,
        Self::Cricket,
        Self::Baseball,
        Self::IceHockey,
        Self::AustralianRules,
        Self::RugbyLeague,
        Self::RugbyUnion,
        Self::Golf,
        Self::Boxing,
    ];

    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Soccer => "SOCCER",
            Self::Basketball => "BASKETBALL",
            Self::Tennis => "TENNIS",
            Self::Cricket => "CRICKET",
            Self::Baseball => "BASEBALL",
            Self::IceHockey => "ICE_HOCKEY",
            Self::AustralianRules => "AUSTRALIAN_RULES",
            Self::RugbyLeague => "RUGBY_LEAGUE",
            Self::RugbyUnion => "RUGBY_UNION",
            Self::Golf => "GOLF",
            Self::Boxing => "BOXING",
        }
    }

    /// Decode a stored category, falling back to `Unknown`.
    pub fn from_db_str(s: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .unwrap_or_default()
    }
}
