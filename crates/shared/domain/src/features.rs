use crate::constants::{API_ACCESS, AUDIT_LOG, CUSTOM_BRANDING, EXPORT, SSO};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A toggleable product capability from the closed, build-time-known key set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeatureKey {
    Export,
    CustomBranding,
    AuditLog,
    Sso,
    ApiAccess,
}

impl FeatureKey {
    /// Every known feature key.
    pub const ALL: [Self; 5] =
        [Self::Export, Self::CustomBranding, Self::AuditLog, Self::Sso, Self::ApiAccess];

    /// Canonical string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Export => EXPORT,
            Self::CustomBranding => CUSTOM_BRANDING,
            Self::AuditLog => AUDIT_LOG,
            Self::Sso => SSO,
            Self::ApiAccess => API_ACCESS,
        }
    }

    /// Parses a canonical feature name. Unknown names yield `None`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            EXPORT => Some(Self::Export),
            CUSTOM_BRANDING => Some(Self::CustomBranding),
            AUDIT_LOG => Some(Self::AuditLog),
            SSO => Some(Self::Sso),
            API_ACCESS => Some(Self::ApiAccess),
            _ => None,
        }
    }
}

bitflags! {
    /// Represents a set of enabled features.
    ///
    /// One bit per [`FeatureKey`]; a clear bit means "explicitly disabled",
    /// so a `FeatureSet` is always total over the key set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FeatureSet: u32 {
        const EXPORT = 1 << 0;
        const CUSTOM_BRANDING = 1 << 1;
        const AUDIT_LOG = 1 << 2;
        const SSO = 1 << 3;
        const API_ACCESS = 1 << 4;

        const ALL = Self::EXPORT.bits()
            | Self::CUSTOM_BRANDING.bits()
            | Self::AUDIT_LOG.bits()
            | Self::SSO.bits()
            | Self::API_ACCESS.bits();
    }
}

impl FeatureSet {
    /// Whether the given feature is enabled in this set.
    #[must_use]
    pub fn enabled(self, key: FeatureKey) -> bool {
        self.contains(key.into())
    }

    /// Enables or disables a single feature.
    pub fn set_enabled(&mut self, key: FeatureKey, enabled: bool) {
        self.set(key.into(), enabled);
    }
}

impl From<FeatureKey> for FeatureSet {
    fn from(key: FeatureKey) -> Self {
        match key {
            FeatureKey::Export => Self::EXPORT,
            FeatureKey::CustomBranding => Self::CUSTOM_BRANDING,
            FeatureKey::AuditLog => Self::AUDIT_LOG,
            FeatureKey::Sso => Self::SSO,
            FeatureKey::ApiAccess => Self::API_ACCESS,
        }
    }
}

impl From<&str> for FeatureSet {
    fn from(s: &str) -> Self {
        match s {
            "all" | "*" => Self::ALL,
            _ => FeatureKey::parse(s).map_or_else(Self::empty, Self::from),
        }
    }
}

impl From<u32> for FeatureSet {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl FromIterator<FeatureKey> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = FeatureKey>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |set, key| set | key.into())
    }
}

impl Serialize for FeatureSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for FeatureSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}
