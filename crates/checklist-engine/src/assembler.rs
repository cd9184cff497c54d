//! Checklist assembly.
//!
//! Pure composition: resolve the program tier, pull cumulative template
//! items per domain area, fold in per-equipment checklist entries, and
//! return one immutable [`GeneratedChecklist`]. Generation never fails;
//! malformed or missing input shapes degrade to fewer items, with tracing
//! events at each degradation point.

use crate::catalog::{self, Catalog, TemplateItem};
use crate::category::{self, category_label, EquipmentCategory};
use crate::duration;
use serde_json::Value;
use shared_types::{
    ChecklistItem, ChecklistSection, Equipment, GeneratedChecklist, ItemType, Program, Property,
    Tier,
};
use tracing::{debug, warn};

/// Electrical equipment whose type contains this marker is treated as
/// standby-generator gear and folded into the Generator section when the
/// property's generator flag is set.
const GENERATOR_TYPE_MARKER: &str = "generator";

/// Assemble a checklist for one property/program/equipment snapshot.
pub fn generate(
    catalog: &Catalog,
    property: &Property,
    program: &Program,
    equipment: &[Equipment],
) -> GeneratedChecklist {
    let tier = catalog::resolve_tier(&program.inspection_tier);
    let tiers = tier.cumulative();
    let features = property.features.unwrap_or_default();

    let mut sections: Vec<ChecklistSection> = Vec::new();

    // Base sections, always attempted.
    push_section(
        &mut sections,
        "exterior",
        &catalog.exterior.name,
        template_items(&catalog.exterior, tier),
    );
    push_section(
        &mut sections,
        "interior",
        &catalog.interior.name,
        template_items(&catalog.interior, tier),
    );

    // HVAC only when the property has HVAC equipment on record.
    if equipment.iter().any(|e| in_category(e, EquipmentCategory::Hvac)) {
        let mut items = template_items(&catalog.hvac, tier);
        for record in equipment.iter().filter(|e| in_category(e, EquipmentCategory::Hvac)) {
            items.extend(equipment_items(record, tiers));
        }
        push_section(&mut sections, "hvac", &catalog.hvac.name, items);
    }

    if features.pool {
        let mut items = template_items(&catalog.pool, tier);
        for record in equipment
            .iter()
            .filter(|e| in_category(e, EquipmentCategory::PoolSpa))
        {
            items.extend(equipment_items(record, tiers));
        }
        push_section(&mut sections, "pool_spa", &catalog.pool.name, items);
    }

    if features.generator {
        let mut items = template_items(&catalog.generator, tier);
        for record in equipment.iter().filter(|e| {
            in_category(e, EquipmentCategory::Electrical) && is_generator_type(e)
        }) {
            items.extend(equipment_items(record, tiers));
        }
        push_section(&mut sections, "generator", &catalog.generator.name, items);
    }

    // Remaining equipment, one section per general category. Generator-typed
    // electrical gear is skipped here only when the generator section above
    // already took it.
    for general in category::GENERAL {
        let mut items = Vec::new();
        for record in equipment.iter().filter(|e| in_category(e, general)) {
            if general == EquipmentCategory::Electrical && is_generator_type(record) {
                if features.generator {
                    continue;
                }
                warn!(
                    equipment_id = %record.id,
                    "generator-type electrical equipment on a property without the generator feature, keeping it in the electrical section"
                );
            }
            items.extend(equipment_items(record, tiers));
        }
        push_section(&mut sections, general.as_str(), general.label(), items);
    }

    sections.sort_by_key(|section| section.order);
    let total_items = sections.iter().map(|section| section.items.len()).sum();

    GeneratedChecklist {
        property_id: property.id.clone(),
        program_id: program.id.clone(),
        tier,
        generated_at: chrono::Utc::now().timestamp() as u64,
        template_versions: catalog.versions(),
        sections,
        total_items,
        estimated_duration_minutes: duration::estimate_for_property(property, tier),
    }
}

/// Append a section unless it would be empty. Order is assigned from the
/// emission sequence, 1-based.
fn push_section(
    sections: &mut Vec<ChecklistSection>,
    id: &str,
    name: &str,
    items: Vec<ChecklistItem>,
) {
    if items.is_empty() {
        return;
    }
    sections.push(ChecklistSection {
        id: id.to_string(),
        name: name.to_string(),
        order: sections.len() as u32 + 1,
        items,
    });
}

/// Cumulative template items for a tier, instantiated for a checklist.
fn template_items(template: &catalog::TieredTemplate, tier: Tier) -> Vec<ChecklistItem> {
    template
        .items_up_to(tier)
        .into_iter()
        .map(instantiate)
        .collect()
}

fn instantiate(item: &TemplateItem) -> ChecklistItem {
    ChecklistItem {
        id: item.id.clone(),
        text: item.text.clone(),
        item_type: item.item_type,
        options: item.options.clone(),
        photo_required: item.photo_required,
        photo_recommended: item.photo_recommended,
        help_text: item.help_text.clone(),
        recommendation_key: item.recommendation_key.clone(),
        required: false,
        equipment_id: None,
    }
}

fn in_category(equipment: &Equipment, category: EquipmentCategory) -> bool {
    EquipmentCategory::parse(&equipment.category) == Some(category)
}

fn is_generator_type(equipment: &Equipment) -> bool {
    equipment
        .equipment_type
        .to_lowercase()
        .contains(GENERATOR_TYPE_MARKER)
}

/// Heading prefix for equipment-contributed items.
fn display_name_for(equipment: &Equipment) -> String {
    let name = equipment.display_name();
    if name.is_empty() {
        category_label(&equipment.category)
    } else {
        name.to_string()
    }
}

/// Synthesize checklist items from one equipment record's stored checklist
/// blob, for every tier in the cumulative prefix.
///
/// The blob is tier-name → array of check strings. The stored entries carry
/// no type of their own, so every synthesized item is a status check. A
/// missing tier key contributes nothing; a malformed shape contributes
/// nothing for the affected part and leaves a debug trace.
fn equipment_items(equipment: &Equipment, tiers: &[Tier]) -> Vec<ChecklistItem> {
    let mut items = Vec::new();
    let blob = match &equipment.inspection_checklist {
        Some(blob) => blob,
        None => return items,
    };
    let map = match blob.as_object() {
        Some(map) => map,
        None => {
            debug!(
                equipment_id = %equipment.id,
                "equipment checklist is not an object, skipping"
            );
            return items;
        }
    };

    let name = display_name_for(equipment);
    for tier in tiers {
        let entries = match map.get(tier.as_str()) {
            Some(Value::Array(entries)) => entries,
            Some(_) => {
                debug!(
                    equipment_id = %equipment.id,
                    tier = %tier,
                    "equipment checklist tier entry is not an array, skipping"
                );
                continue;
            }
            None => continue,
        };
        for (index, entry) in entries.iter().enumerate() {
            let text = match entry.as_str() {
                Some(text) => text,
                None => {
                    debug!(
                        equipment_id = %equipment.id,
                        tier = %tier,
                        index,
                        "equipment checklist entry is not a string, skipping"
                    );
                    continue;
                }
            };
            items.push(ChecklistItem {
                id: format!("{}_{}_{}", equipment.id, tier.as_str(), index),
                text: format!("{}: {}", name, text),
                item_type: ItemType::Status,
                options: None,
                photo_required: false,
                photo_recommended: false,
                help_text: None,
                recommendation_key: None,
                required: false,
                equipment_id: Some(equipment.id.clone()),
            });
        }
    }
    items
}
