use crate::constants::{API_REQUESTS_PER_DAY, PROJECTS, SEATS, STORAGE_MB, UNBOUNDED};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// A numeric ceiling from the closed, build-time-known key set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LimitKey {
    Seats,
    Projects,
    StorageMb,
    ApiRequestsPerDay,
}

impl LimitKey {
    /// Every known limit key.
    pub const ALL: [Self; 4] =
        [Self::Seats, Self::Projects, Self::StorageMb, Self::ApiRequestsPerDay];

    /// Canonical string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Seats => SEATS,
            Self::Projects => PROJECTS,
            Self::StorageMb => STORAGE_MB,
            Self::ApiRequestsPerDay => API_REQUESTS_PER_DAY,
        }
    }

    /// Parses a canonical limit name. Unknown names yield `None`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            SEATS => Some(Self::Seats),
            PROJECTS => Some(Self::Projects),
            STORAGE_MB => Some(Self::StorageMb),
            API_REQUESTS_PER_DAY => Some(Self::ApiRequestsPerDay),
            _ => None,
        }
    }
}

impl fmt::Display for LimitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A usage ceiling: either a concrete count or no ceiling at all.
///
/// Ordering places [`Limit::Unbounded`] above every bounded value, so
/// "an override may only raise a limit" is a plain `>=` comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Limit {
    Bounded(u64),
    Unbounded,
}

impl Limit {
    #[must_use]
    pub const fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// Whether `usage` units fit under this ceiling.
    #[must_use]
    pub const fn allows(self, usage: u64) -> bool {
        match self {
            Self::Bounded(max) => usage <= max,
            Self::Unbounded => true,
        }
    }
}

impl Ord for Limit {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Unbounded, Self::Unbounded) => Ordering::Equal,
            (Self::Unbounded, Self::Bounded(_)) => Ordering::Greater,
            (Self::Bounded(_), Self::Unbounded) => Ordering::Less,
            (Self::Bounded(a), Self::Bounded(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Limit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(max) => write!(f, "{max}"),
            Self::Unbounded => f.write_str(UNBOUNDED),
        }
    }
}

// Wire form: a bare number for bounded limits, the string "unbounded" otherwise.

impl Serialize for Limit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Bounded(max) => serializer.serialize_u64(*max),
            Self::Unbounded => serializer.serialize_str(UNBOUNDED),
        }
    }
}

impl<'de> Deserialize<'de> for Limit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Count(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Count(max) => Ok(Self::Bounded(max)),
            Raw::Text(s) if s == UNBOUNDED => Ok(Self::Unbounded),
            Raw::Text(s) => Err(serde::de::Error::custom(format!("invalid limit value: {s}"))),
        }
    }
}

/// The full set of limits, one value per [`LimitKey`].
///
/// Totality is structural: a tier or a resolved set can never omit a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    pub seats: Limit,
    pub projects: Limit,
    pub storage_mb: Limit,
    pub api_requests_per_day: Limit,
}

impl Limits {
    #[must_use]
    pub const fn get(&self, key: LimitKey) -> Limit {
        match key {
            LimitKey::Seats => self.seats,
            LimitKey::Projects => self.projects,
            LimitKey::StorageMb => self.storage_mb,
            LimitKey::ApiRequestsPerDay => self.api_requests_per_day,
        }
    }

    pub const fn set(&mut self, key: LimitKey, limit: Limit) {
        match key {
            LimitKey::Seats => self.seats = limit,
            LimitKey::Projects => self.projects = limit,
            LimitKey::StorageMb => self.storage_mb = limit,
            LimitKey::ApiRequestsPerDay => self.api_requests_per_day = limit,
        }
    }
}
