//! Legacy serialization adapter.
//!
//! Two downstream consumers grew up against different field names for the
//! same concepts (`text`/`label`, `type`/`item_type`, `name`/`title`, and
//! the long `recommendation_template_key`). The core model keeps one
//! canonical name per concept; this module re-emits both spellings at the
//! serialization boundary so neither consumer has to migrate. Nothing in
//! the core reads these DTOs.

use serde::Serialize;
use shared_types::{ChecklistItem, ChecklistSection, GeneratedChecklist};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct LegacyChecklist {
    pub property_id: String,
    pub program_id: String,
    pub tier: String,
    pub generated_at: u64,
    pub template_versions: BTreeMap<String, u32>,
    pub sections: Vec<LegacySection>,
    pub total_items: usize,
    pub estimated_duration_minutes: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegacySection {
    pub id: String,
    pub name: String,
    /// Duplicate of `name` for the reporting consumer.
    pub title: String,
    pub order: u32,
    pub items: Vec<LegacyItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegacyItem {
    pub id: String,
    pub text: String,
    /// Duplicate of `text` for the mobile consumer.
    pub label: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Duplicate of `type` for the reporting consumer.
    pub item_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub photo_required: bool,
    pub photo_recommended: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation_template_key: Option<String>,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_id: Option<String>,
}

impl From<&GeneratedChecklist> for LegacyChecklist {
    fn from(checklist: &GeneratedChecklist) -> Self {
        Self {
            property_id: checklist.property_id.clone(),
            program_id: checklist.program_id.clone(),
            tier: checklist.tier.as_str().to_string(),
            generated_at: checklist.generated_at,
            template_versions: checklist.template_versions.clone(),
            sections: checklist.sections.iter().map(LegacySection::from).collect(),
            total_items: checklist.total_items,
            estimated_duration_minutes: checklist.estimated_duration_minutes,
        }
    }
}

impl From<&ChecklistSection> for LegacySection {
    fn from(section: &ChecklistSection) -> Self {
        Self {
            id: section.id.clone(),
            name: section.name.clone(),
            title: section.name.clone(),
            order: section.order,
            items: section.items.iter().map(LegacyItem::from).collect(),
        }
    }
}

impl From<&ChecklistItem> for LegacyItem {
    fn from(item: &ChecklistItem) -> Self {
        Self {
            id: item.id.clone(),
            text: item.text.clone(),
            label: item.text.clone(),
            kind: item.item_type.as_str().to_string(),
            item_type: item.item_type.as_str().to_string(),
            options: item.options.clone(),
            photo_required: item.photo_required,
            photo_recommended: item.photo_recommended,
            help_text: item.help_text.clone(),
            recommendation_template_key: item.recommendation_key.clone(),
            required: item.required,
            equipment_id: item.equipment_id.clone(),
        }
    }
}
