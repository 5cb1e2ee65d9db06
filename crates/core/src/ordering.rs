//! Ordering instructions for catalog listings.
//!
//! A list request carries an ordered sequence of [`SortTerm`]s. Earlier terms
//! dominate; later ones only break ties. On the wire each term is a single
//! upper-case name such as `ADVERTISED_START_TIME_DESC`.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

/// Message returned when a request orders one key in both directions.
pub const CONFLICTING_ORDER_BY: &str = "conflicting order by fields";

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// SQL keyword, also used as the wire suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Sort keys
// ---------------------------------------------------------------------------

/// A fixed enumeration of sortable fields for one resource kind.
pub trait SortKey: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Every key of the enumeration.
    const ALL: &'static [Self];

    /// Upper-case wire name, e.g. `MEETING_ID`.
    fn name(&self) -> &'static str;

    /// Storage column this key orders by.
    fn column(&self) -> &'static str;

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.name() == name)
    }
}

// ---------------------------------------------------------------------------
// Sort term
// ---------------------------------------------------------------------------

/// One `(key, direction)` ordering instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortTerm<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K: SortKey> SortTerm<K> {
    pub fn asc(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Desc,
        }
    }

    /// The same key in the other direction.
    pub fn opposite(&self) -> Self {
        Self {
            key: self.key,
            direction: self.direction.opposite(),
        }
    }
}

impl<K: SortKey> fmt::Display for SortTerm<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.key.name(), self.direction.as_str())
    }
}

impl<K: SortKey> FromStr for SortTerm<K> {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = s.rsplit_once('_').and_then(|(key, direction)| {
            Some(Self {
                key: K::from_name(key)?,
                direction: SortDirection::from_keyword(direction)?,
            })
        });

        parsed.ok_or_else(|| {
            let valid: Vec<String> = K::ALL
                .iter()
                .flat_map(|key| [Self::asc(*key), Self::desc(*key)])
                .map(|term| term.to_string())
                .collect();
            CoreError::Validation(format!(
                "Unknown order by field: '{s}'. Valid fields: {}",
                valid.join(", ")
            ))
        })
    }
}

impl<K: SortKey> Serialize for SortTerm<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, K: SortKey> Deserialize<'de> for SortTerm<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Reject a sequence that orders one key both ascending and descending.
///
/// Only the opposite-direction twin of an already visited term conflicts.
/// Repeating an identical term is accepted.
pub fn validate_order_by<K: SortKey>(terms: &[SortTerm<K>]) -> Result<(), CoreError> {
    let mut visited = HashSet::with_capacity(terms.len());

    for term in terms {
        if visited.contains(&term.opposite()) {
            return Err(CoreError::Validation(CONFLICTING_ORDER_BY.to_string()));
        }
        visited.insert(*term);
    }

    Ok(())
}
