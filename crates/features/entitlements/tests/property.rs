use proptest::prelude::*;
use thub_domain::limits::{Limit, LimitKey};
use thub_domain::tenant::TenantOverrides;
use thub_domain::tiers::PlanTier;
use thub_entitlements::PlanCatalog;

fn any_tier() -> impl Strategy<Value = PlanTier> {
    prop_oneof![Just(PlanTier::Free), Just(PlanTier::Pro), Just(PlanTier::Enterprise)]
}

/// Overrides that only ever raise plan defaults, derived from the catalog row
/// itself so they are valid for whichever tier is drawn.
fn raising_overrides(catalog: &PlanCatalog, tier: PlanTier, extra: u64, lift: bool) -> TenantOverrides {
    let base = catalog.resolve_tier(tier, None).expect("base resolution");
    let mut overrides = TenantOverrides::default();
    for key in LimitKey::ALL {
        let raised = match base.limit(key) {
            Limit::Bounded(_) if lift => Limit::Unbounded,
            Limit::Bounded(max) => Limit::Bounded(max.saturating_add(extra)),
            Limit::Unbounded => Limit::Unbounded,
        };
        overrides.limits.insert(key.as_str().to_owned(), raised);
    }
    overrides
}

proptest! {
    #[test]
    fn raising_overrides_never_lower_limits(
        tier in any_tier(),
        extra in 0u64..1_000_000,
        lift in any::<bool>(),
    ) {
        let catalog = PlanCatalog::builtin();
        let overrides = raising_overrides(&catalog, tier, extra, lift);

        let base = catalog.resolve_tier(tier, None).expect("base resolution");
        let resolved = catalog.resolve_tier(tier, Some(&overrides)).expect("raising overrides accepted");

        for key in LimitKey::ALL {
            prop_assert!(resolved.limit(key) >= base.limit(key));
        }
    }

    #[test]
    fn resolution_is_deterministic(tier in any_tier(), extra in 0u64..1_000_000) {
        let catalog = PlanCatalog::builtin();
        let overrides = raising_overrides(&catalog, tier, extra, false);

        let first = catalog.resolve_tier(tier, Some(&overrides)).expect("first resolution");
        let second = catalog.resolve_tier(tier, Some(&overrides)).expect("second resolution");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn lowering_by_any_amount_is_rejected(tier in any_tier(), cut in 1u64..1_000) {
        let catalog = PlanCatalog::builtin();
        let base = catalog.resolve_tier(tier, None).expect("base resolution");

        // Only bounded limits can be lowered; unbounded plan defaults reject
        // every bounded override, which the integration tests cover.
        for key in LimitKey::ALL {
            if let Limit::Bounded(max) = base.limit(key) {
                if max == 0 {
                    continue;
                }
                let lowered = max - cut.min(max);
                let mut overrides = TenantOverrides::default();
                overrides.limits.insert(key.as_str().to_owned(), Limit::Bounded(lowered));
                prop_assert!(catalog.resolve_tier(tier, Some(&overrides)).is_err());
            }
        }
    }
}
