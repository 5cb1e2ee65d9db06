//! Derived open/closed status of a race or sports event.
//!
//! Status is never stored. It is computed from the advertised start time
//! every time a row is read, so it cannot go stale.

use serde::Serialize;

use crate::types::Timestamp;

pub const STATUS_OPEN: &str = "OPEN";
pub const STATUS_CLOSED: &str = "CLOSED";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Open,
    Closed,
}

impl Status {
    /// Status of something advertised to start at `start`, observed at `now`.
    ///
    /// Open only while the start time is strictly in the future; a start
    /// time equal to `now` is already closed.
    pub fn at(start: Timestamp, now: Timestamp) -> Self {
        if start > now {
            Self::Open
        } else {
            Self::Closed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => STATUS_OPEN,
            Self::Closed => STATUS_CLOSED,
        }
    }
}
