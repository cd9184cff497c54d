//! Checklist duration model.
//!
//! The estimate is additive: a per-tier base, a square-footage surcharge
//! billed per started 1000 sqft block, and flat feature surcharges for
//! pool, generator, and dock. Minutes are a planning figure for visit
//! scheduling, not a promise to the inspector.

use shared_types::{Property, Tier};

/// Flat surcharge for a pool below the preventative tier.
pub const POOL_MINUTES: u32 = 15;
/// Pool surcharge at the preventative tier, where chemical and filter
/// service replace the basic walk-around.
pub const POOL_PREVENTATIVE_MINUTES: u32 = 35;
/// Flat surcharge for a standby generator.
pub const GENERATOR_MINUTES: u32 = 15;
/// Flat surcharge for a dock or boat lift.
pub const DOCK_MINUTES: u32 = 15;

/// Minutes budgeted before any property-specific surcharges.
pub const fn base_minutes(tier: Tier) -> u32 {
    match tier {
        Tier::Visual => 30,
        Tier::Functional => 60,
        Tier::Comprehensive => 120,
        Tier::Preventative => 180,
    }
}

/// Minutes added per started 1000 sqft block.
pub const fn square_footage_factor(tier: Tier) -> u32 {
    match tier {
        Tier::Visual => 5,
        Tier::Functional => 10,
        Tier::Comprehensive => 15,
        Tier::Preventative => 20,
    }
}

/// Estimated visit length in minutes.
pub fn estimated_duration_minutes(
    tier: Tier,
    square_footage: Option<u32>,
    has_pool: bool,
    has_generator: bool,
    has_dock: bool,
) -> u32 {
    let mut minutes = base_minutes(tier);

    if let Some(sqft) = square_footage {
        if sqft > 0 {
            minutes += sqft.div_ceil(1000) * square_footage_factor(tier);
        }
    }

    if has_pool {
        minutes += if tier == Tier::Preventative {
            POOL_PREVENTATIVE_MINUTES
        } else {
            POOL_MINUTES
        };
    }
    if has_generator {
        minutes += GENERATOR_MINUTES;
    }
    if has_dock {
        minutes += DOCK_MINUTES;
    }

    minutes
}

/// Duration for a property record, reading the relevant feature flags.
pub fn estimate_for_property(property: &Property, tier: Tier) -> u32 {
    let features = property.features.unwrap_or_default();
    estimated_duration_minutes(
        tier,
        property.square_footage,
        features.pool,
        features.generator,
        features.dock,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::PropertyFeatures;

    #[test]
    fn test_base_minutes_deepen_with_tier() {
        assert_eq!(base_minutes(Tier::Visual), 30);
        assert_eq!(base_minutes(Tier::Functional), 60);
        assert_eq!(base_minutes(Tier::Comprehensive), 120);
        assert_eq!(base_minutes(Tier::Preventative), 180);
    }

    #[test]
    fn test_square_footage_bills_started_blocks() {
        // 2400 sqft rounds up to three 1000-sqft blocks.
        assert_eq!(
            estimated_duration_minutes(Tier::Functional, Some(2400), false, false, false),
            60 + 3 * 10
        );
        // Exact multiples do not start an extra block.
        assert_eq!(
            estimated_duration_minutes(Tier::Visual, Some(2000), false, false, false),
            30 + 2 * 5
        );
        assert_eq!(
            estimated_duration_minutes(Tier::Visual, Some(2001), false, false, false),
            30 + 3 * 5
        );
    }

    #[test]
    fn test_missing_or_zero_square_footage_adds_nothing() {
        assert_eq!(
            estimated_duration_minutes(Tier::Comprehensive, None, false, false, false),
            120
        );
        assert_eq!(
            estimated_duration_minutes(Tier::Comprehensive, Some(0), false, false, false),
            120
        );
    }

    #[test]
    fn test_pool_surcharge_grows_at_preventative() {
        assert_eq!(
            estimated_duration_minutes(Tier::Functional, Some(2400), true, false, false),
            105
        );
        assert_eq!(
            estimated_duration_minutes(Tier::Preventative, None, true, false, false),
            215
        );
    }

    #[test]
    fn test_feature_surcharges_stack() {
        assert_eq!(
            estimated_duration_minutes(Tier::Visual, None, true, true, true),
            30 + POOL_MINUTES + GENERATOR_MINUTES + DOCK_MINUTES
        );
    }

    #[test]
    fn test_property_without_features_gets_base_only() {
        let property = Property {
            id: "prop_1".to_string(),
            square_footage: None,
            features: None,
        };
        assert_eq!(estimate_for_property(&property, Tier::Visual), 30);
    }

    #[test]
    fn test_property_dock_flag_reaches_the_estimate() {
        let property = Property {
            id: "prop_2".to_string(),
            square_footage: None,
            features: Some(PropertyFeatures {
                dock: true,
                ..PropertyFeatures::default()
            }),
        };
        assert_eq!(
            estimate_for_property(&property, Tier::Visual),
            30 + DOCK_MINUTES
        );
    }
}
