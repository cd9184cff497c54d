//! Property-based tests for checklist-engine
//!
//! Drives the generator with randomized property/program/equipment
//! snapshots and checks the structural invariants of the output.

use checklist_engine::catalog::resolve_tier;
use checklist_engine::{duration, ChecklistGenerator};
use proptest::prelude::*;
use shared_types::{Equipment, ItemType, Program, Property, PropertyFeatures, Tier};

// ============================================================
// Input Strategies
// ============================================================

/// The four real tier names plus arbitrary lowercase noise that must
/// resolve to the visual fallback.
fn tier_string() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("visual".to_string()),
        Just("functional".to_string()),
        Just("comprehensive".to_string()),
        Just("preventative".to_string()),
        "[a-z]{0,12}",
    ]
}

fn features() -> impl Strategy<Value = PropertyFeatures> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(pool, generator, dock, spa)| PropertyFeatures {
            pool,
            generator,
            dock,
            spa,
            ..PropertyFeatures::default()
        },
    )
}

fn property_snapshot() -> impl Strategy<Value = Property> {
    (
        proptest::option::of(0u32..20_000),
        proptest::option::of(features()),
    )
        .prop_map(|(square_footage, features)| Property {
            id: "prop_pb".to_string(),
            square_footage,
            features,
        })
}

/// Known category vocabulary plus unmapped noise.
fn category() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("hvac".to_string()),
        Just("pool_spa".to_string()),
        Just("plumbing".to_string()),
        Just("electrical".to_string()),
        Just("kitchen".to_string()),
        Just("laundry".to_string()),
        Just("outdoor".to_string()),
        Just("safety".to_string()),
        Just("specialty".to_string()),
        "[a-z_]{1,12}",
    ]
}

fn equipment_list() -> impl Strategy<Value = Vec<Equipment>> {
    proptest::collection::vec(
        (
            category(),
            "[a-z_]{1,16}",
            proptest::collection::vec("[A-Za-z ]{1,24}", 0..4),
        ),
        0..6,
    )
    .prop_map(|records| {
        records
            .into_iter()
            .enumerate()
            .map(|(index, (category, equipment_type, visual_entries))| Equipment {
                id: format!("eq_{}", index),
                category,
                equipment_type,
                custom_name: None,
                inspection_checklist: Some(serde_json::json!({
                    "visual": visual_entries,
                    "functional": ["Exercise the unit"],
                })),
            })
            .collect()
    })
}

fn program(tier: &str) -> Program {
    Program {
        id: "prog_pb".to_string(),
        inspection_tier: tier.to_string(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================================
    // Assembly Invariants
    // ============================================================

    #[test]
    fn total_items_matches_section_sum(
        property in property_snapshot(),
        tier in tier_string(),
        equipment in equipment_list()
    ) {
        let checklist = ChecklistGenerator::new().generate(&property, &program(&tier), &equipment);
        let counted: usize = checklist.sections.iter().map(|s| s.items.len()).sum();
        prop_assert_eq!(checklist.total_items, counted);
    }

    #[test]
    fn section_orders_are_contiguous_from_one(
        property in property_snapshot(),
        tier in tier_string(),
        equipment in equipment_list()
    ) {
        let checklist = ChecklistGenerator::new().generate(&property, &program(&tier), &equipment);
        let orders: Vec<u32> = checklist.sections.iter().map(|s| s.order).collect();
        let expected: Vec<u32> = (1..=checklist.sections.len() as u32).collect();
        prop_assert_eq!(orders, expected);
    }

    #[test]
    fn no_section_is_empty(
        property in property_snapshot(),
        tier in tier_string(),
        equipment in equipment_list()
    ) {
        let checklist = ChecklistGenerator::new().generate(&property, &program(&tier), &equipment);
        prop_assert!(checklist.sections.iter().all(|s| !s.items.is_empty()));
    }

    #[test]
    fn generation_is_deterministic(
        property in property_snapshot(),
        tier in tier_string(),
        equipment in equipment_list()
    ) {
        let generator = ChecklistGenerator::new();
        let first = generator.generate(&property, &program(&tier), &equipment);
        let second = generator.generate(&property, &program(&tier), &equipment);
        prop_assert_eq!(first.sections, second.sections);
        prop_assert_eq!(first.total_items, second.total_items);
        prop_assert_eq!(
            first.estimated_duration_minutes,
            second.estimated_duration_minutes
        );
    }

    // ============================================================
    // Tier Semantics
    // ============================================================

    #[test]
    fn deeper_tiers_never_shrink_the_checklist(
        property in property_snapshot(),
        equipment in equipment_list()
    ) {
        let generator = ChecklistGenerator::new();
        let mut previous_items = 0usize;
        let mut previous_sections = 0usize;
        for tier in Tier::ALL {
            let checklist =
                generator.generate(&property, &program(tier.as_str()), &equipment);
            prop_assert!(checklist.total_items >= previous_items);
            prop_assert!(checklist.sections.len() >= previous_sections);
            previous_items = checklist.total_items;
            previous_sections = checklist.sections.len();
        }
    }

    #[test]
    fn any_tier_string_resolves_to_a_known_tier(raw in "[a-zA-Z0-9_ -]{0,16}") {
        let tier = resolve_tier(&raw);
        prop_assert!(Tier::ALL.contains(&tier));
    }

    #[test]
    fn output_tier_matches_resolution(
        property in property_snapshot(),
        tier in tier_string()
    ) {
        let checklist = ChecklistGenerator::new().generate(&property, &program(&tier), &[]);
        prop_assert_eq!(checklist.tier, resolve_tier(&tier));
    }

    // ============================================================
    // Duration Model
    // ============================================================

    #[test]
    fn duration_grows_with_square_footage(
        tier in tier_string(),
        base_sqft in 0u32..10_000,
        extra_sqft in 0u32..10_000,
        pool in any::<bool>(),
        generator in any::<bool>(),
        dock in any::<bool>()
    ) {
        let resolved = resolve_tier(&tier);
        let smaller = duration::estimated_duration_minutes(
            resolved, Some(base_sqft), pool, generator, dock);
        let larger = duration::estimated_duration_minutes(
            resolved, Some(base_sqft + extra_sqft), pool, generator, dock);
        prop_assert!(larger >= smaller);
    }

    #[test]
    fn duration_is_at_least_the_tier_base(
        property in property_snapshot(),
        tier in tier_string()
    ) {
        let checklist = ChecklistGenerator::new().generate(&property, &program(&tier), &[]);
        prop_assert!(
            checklist.estimated_duration_minutes >= duration::base_minutes(checklist.tier)
        );
    }

    // ============================================================
    // Equipment-Contributed Items
    // ============================================================

    #[test]
    fn equipment_items_are_prefixed_status_checks(
        property in property_snapshot(),
        tier in tier_string(),
        equipment in equipment_list()
    ) {
        let checklist = ChecklistGenerator::new().generate(&property, &program(&tier), &equipment);
        for item in checklist.sections.iter().flat_map(|s| s.items.iter()) {
            if item.equipment_id.is_some() {
                prop_assert_eq!(item.item_type, ItemType::Status);
                prop_assert!(item.text.contains(": "));
                prop_assert!(!item.required);
            }
        }
    }
}

// ============================================================
// Unit Tests (non-property)
// ============================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_validates() {
        assert!(ChecklistGenerator::new().catalog().validate().is_ok());
    }

    #[test]
    fn test_every_tier_name_parses() {
        for tier in Tier::ALL {
            assert_eq!(Tier::parse(tier.as_str()), Some(tier));
        }
    }

    #[test]
    fn test_bogus_tier_yields_visual_checklist() {
        let checklist = ChecklistGenerator::new().generate(
            &Property {
                id: "prop_pb".to_string(),
                square_footage: None,
                features: None,
            },
            &program("bogus"),
            &[],
        );
        assert_eq!(checklist.tier, Tier::Visual);
    }
}
