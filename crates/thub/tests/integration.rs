use thub::domain::config::ResolverConfig;
use thub::domain::features::FeatureKey;
use thub::domain::limits::{Limit, LimitKey};
use thub::domain::tenant::{TenantOverrides, TenantRecord};
use thub::domain::theme::{Theme, ThemePreference};
use thub::features::entitlements::EntitlementError;
use thub::{ResolvedTenant, TenantResolver};

fn record(plan: &str) -> TenantRecord {
    TenantRecord { plan: plan.to_owned(), overrides: None, theme: None }
}

#[test]
fn enabled_features_registry() {
    assert!(thub::features::is_enabled("entitlements"));
    assert!(thub::features::is_enabled("theming"));
    assert!(!thub::features::is_enabled("billing"));
}

#[test]
fn resolves_plain_record_with_defaults() {
    let resolver = TenantResolver::builtin();
    let resolved = resolver.resolve(&record("free")).expect("free resolves");

    assert!(!resolved.entitlements.enabled(FeatureKey::Export));
    assert_eq!(resolved.theme, Theme::default());
}

#[test]
fn resolves_full_record_from_tenant_store_json() {
    // The shape the external tenant store hands over.
    let record: TenantRecord = serde_json::from_str(
        r##"{
            "plan": "pro",
            "overrides": {
                "features": { "sso": true },
                "limits": { "seats": "unbounded" }
            },
            "theme": { "primary_color": "#ff6600" }
        }"##,
    )
    .expect("tenant record json");

    let resolver = TenantResolver::builtin();
    let ResolvedTenant { entitlements, theme } =
        resolver.resolve(&record).expect("record resolves");

    assert!(entitlements.enabled(FeatureKey::Sso));
    assert!(entitlements.enabled(FeatureKey::Export));
    assert_eq!(entitlements.limit(LimitKey::Seats), Limit::Unbounded);
    assert_eq!(theme.primary_color, "#ff6600");
    assert_eq!(theme.font_family, Theme::default().font_family);
}

#[test]
fn unknown_plan_surfaces_as_typed_error() {
    let resolver = TenantResolver::builtin();
    let err = resolver.resolve(&record("platinum")).unwrap_err();
    assert_eq!(err, EntitlementError::UnknownPlanTier { tier: "platinum".to_owned() });
}

#[test]
fn gate_shortcut_matches_full_resolution() {
    let resolver = TenantResolver::builtin();
    let mut rec = record("pro");
    rec.overrides = Some(TenantOverrides {
        limits: [("projects".to_owned(), Limit::Bounded(100))].into_iter().collect(),
        ..Default::default()
    });

    let gate = resolver.gate(&rec).expect("gate resolves");
    assert!(gate.enabled(FeatureKey::Export));
    assert_eq!(gate.limit(LimitKey::Projects), Limit::Bounded(100));
    assert!(gate.within_limit(LimitKey::Projects, 100));
    assert!(!gate.within_limit(LimitKey::Projects, 101));
}

#[test]
fn config_drives_both_resolvers() {
    let config: ResolverConfig = serde_json::from_value(serde_json::json!({
        "theme": { "background": "#101418" }
    }))
    .expect("config json");

    let resolver = TenantResolver::from_config(&config).expect("config accepted");

    let mut rec = record("enterprise");
    rec.theme = Some(ThemePreference { logo_url: Some("/custom.svg".to_owned()), ..Default::default() });

    let resolved = resolver.resolve(&rec).expect("record resolves");
    assert_eq!(resolved.entitlements.limit(LimitKey::Seats), Limit::Unbounded);
    assert_eq!(resolved.theme.background, "#101418");
    assert_eq!(resolved.theme.logo_url, "/custom.svg");
}

#[test]
fn re_resolution_is_the_update_path() {
    // The rendering layer never patches a resolved tenant; it re-resolves on
    // change and swaps the whole value.
    let resolver = TenantResolver::builtin();

    let before = resolver.resolve(&record("free")).expect("free resolves");

    let mut upgraded = record("pro");
    upgraded.overrides = Some(TenantOverrides {
        features: [("custom_branding".to_owned(), true)].into_iter().collect(),
        ..Default::default()
    });
    let after = resolver.resolve(&upgraded).expect("pro resolves");

    assert!(!before.entitlements.enabled(FeatureKey::CustomBranding));
    assert!(after.entitlements.enabled(FeatureKey::CustomBranding));
    assert_ne!(before, after);
}
