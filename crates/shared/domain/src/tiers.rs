use crate::constants::{ENTERPRISE, FREE, PRO};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Subscription tier of a tenant.
///
/// Tiers form a closed, ordered set: `Free < Pro < Enterprise`. The ordering
/// follows declaration order, so comparisons like `tier >= PlanTier::Pro`
/// express "at least Pro".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlanTier {
    /// Entry tier, no payment on file.
    #[default]
    Free,
    /// Paid tier for small teams.
    Pro,
    /// Contract tier with negotiated ceilings.
    Enterprise,
}

impl PlanTier {
    /// Every known tier, in ascending order.
    pub const ALL: [Self; 3] = [Self::Free, Self::Pro, Self::Enterprise];

    /// Canonical string form, as stored by the tenant store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => FREE,
            Self::Pro => PRO,
            Self::Enterprise => ENTERPRISE,
        }
    }

    /// Parses a canonical tier name. Unknown names yield `None`; callers decide
    /// how strictly to treat that.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            FREE => Some(Self::Free),
            PRO => Some(Self::Pro),
            ENTERPRISE => Some(Self::Enterprise),
            _ => None,
        }
    }

    /// Human-readable name for UI surfaces.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Pro => "Pro",
            Self::Enterprise => "Enterprise",
        }
    }

    #[must_use]
    pub const fn is_paid(self) -> bool {
        !matches!(self, Self::Free)
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PlanTier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PlanTier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown plan tier: {s}")))
    }
}
