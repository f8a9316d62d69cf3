use thub_domain::constants::{
    API_ACCESS, API_REQUESTS_PER_DAY, AUDIT_LOG, CUSTOM_BRANDING, ENTERPRISE, EXPORT, FREE, PRO,
    PROJECTS, SEATS, SSO, STORAGE_MB, UNBOUNDED,
};
use thub_domain::features::FeatureKey;
use thub_domain::limits::LimitKey;
use thub_domain::tiers::PlanTier;

#[test]
fn constants_match_entity_strings() {
    assert_eq!(FREE, "free");
    assert_eq!(PRO, "pro");
    assert_eq!(ENTERPRISE, "enterprise");
    assert_eq!(EXPORT, "export");
    assert_eq!(CUSTOM_BRANDING, "custom_branding");
    assert_eq!(AUDIT_LOG, "audit_log");
    assert_eq!(SSO, "sso");
    assert_eq!(API_ACCESS, "api_access");
    assert_eq!(SEATS, "seats");
    assert_eq!(PROJECTS, "projects");
    assert_eq!(STORAGE_MB, "storage_mb");
    assert_eq!(API_REQUESTS_PER_DAY, "api_requests_per_day");
    assert_eq!(UNBOUNDED, "unbounded");
}

#[test]
fn every_key_round_trips_through_its_string_form() {
    for tier in PlanTier::ALL {
        assert_eq!(PlanTier::parse(tier.as_str()), Some(tier));
    }
    for key in FeatureKey::ALL {
        assert_eq!(FeatureKey::parse(key.as_str()), Some(key));
    }
    for key in LimitKey::ALL {
        assert_eq!(LimitKey::parse(key.as_str()), Some(key));
    }
}
