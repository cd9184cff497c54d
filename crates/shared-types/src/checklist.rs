//! Generated-checklist value objects
//!
//! The output of checklist generation. Constructed fresh on every call and
//! never mutated afterwards; the application layer renders `sections` into
//! the inspection-taking screens.

use crate::tier::Tier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The kind of answer an item expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    /// Pass/fail-style check.
    Status,
    /// Free-text observation.
    Text,
    /// Numeric reading (gauge, temperature, pressure).
    Number,
    /// One choice from a fixed option list.
    Select,
    /// Photo capture.
    Photo,
}

impl ItemType {
    pub const fn as_str(self) -> &'static str {
        match self {
            ItemType::Status => "status",
            ItemType::Text => "text",
            ItemType::Number => "number",
            ItemType::Select => "select",
            ItemType::Photo => "photo",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One inspectable question/check on a generated checklist.
///
/// Either a copy of a catalog template item or synthesized from an
/// equipment record's stored checklist (in which case `equipment_id` points
/// back at the record).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    pub item_type: ItemType,
    /// Allowed values; populated only for `select` items.
    pub options: Option<Vec<String>>,
    pub photo_required: bool,
    pub photo_recommended: bool,
    pub help_text: Option<String>,
    /// Opaque key consumed by the recommendation-suggestion system.
    pub recommendation_key: Option<String>,
    /// No required items are computed at generation time; always false today.
    pub required: bool,
    pub equipment_id: Option<String>,
}

/// A named, ordered group of items for one domain area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistSection {
    pub id: String,
    pub name: String,
    /// 1-based; assigned in emission order.
    pub order: u32,
    pub items: Vec<ChecklistItem>,
}

/// The generation output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedChecklist {
    pub property_id: String,
    pub program_id: String,
    /// The resolved tier the checklist was generated at (single value, not
    /// the cumulative set).
    pub tier: Tier,
    /// Unix seconds.
    pub generated_at: u64,
    /// Catalog-group name to version; currently always `{base: 1}`.
    pub template_versions: BTreeMap<String, u32>,
    pub sections: Vec<ChecklistSection>,
    /// Sum of item counts across all sections.
    pub total_items: usize,
    pub estimated_duration_minutes: u32,
}

impl GeneratedChecklist {
    /// Look up a section by id.
    pub fn section(&self, id: &str) -> Option<&ChecklistSection> {
        self.sections.iter().find(|section| section.id == id)
    }
}
