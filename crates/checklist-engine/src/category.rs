//! Equipment category vocabulary.
//!
//! Equipment records carry a free-form category string. The known values
//! map to typed categories; [`category_label`] keeps a graceful heading
//! for anything unmapped instead of failing the lookup.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categories with dedicated handling during assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentCategory {
    Hvac,
    PoolSpa,
    Plumbing,
    Electrical,
    Kitchen,
    Laundry,
    Outdoor,
    Safety,
    Specialty,
}

/// General categories, in section emission order. HVAC and pool/spa are
/// absent here: their equipment folds into the matching base sections
/// instead of getting a standalone one.
pub const GENERAL: [EquipmentCategory; 7] = [
    EquipmentCategory::Plumbing,
    EquipmentCategory::Electrical,
    EquipmentCategory::Kitchen,
    EquipmentCategory::Laundry,
    EquipmentCategory::Outdoor,
    EquipmentCategory::Safety,
    EquipmentCategory::Specialty,
];

impl EquipmentCategory {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "hvac" => Some(Self::Hvac),
            "pool_spa" => Some(Self::PoolSpa),
            "plumbing" => Some(Self::Plumbing),
            "electrical" => Some(Self::Electrical),
            "kitchen" => Some(Self::Kitchen),
            "laundry" => Some(Self::Laundry),
            "outdoor" => Some(Self::Outdoor),
            "safety" => Some(Self::Safety),
            "specialty" => Some(Self::Specialty),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hvac => "hvac",
            Self::PoolSpa => "pool_spa",
            Self::Plumbing => "plumbing",
            Self::Electrical => "electrical",
            Self::Kitchen => "kitchen",
            Self::Laundry => "laundry",
            Self::Outdoor => "outdoor",
            Self::Safety => "safety",
            Self::Specialty => "specialty",
        }
    }

    /// Human-facing section heading.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hvac => "HVAC",
            Self::PoolSpa => "Pool & Spa",
            Self::Plumbing => "Plumbing",
            Self::Electrical => "Electrical",
            Self::Kitchen => "Kitchen",
            Self::Laundry => "Laundry",
            Self::Outdoor => "Outdoor",
            Self::Safety => "Safety",
            Self::Specialty => "Specialty",
        }
    }
}

impl fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Section heading for a raw category string. Unknown categories keep
/// their raw value as the label.
pub fn category_label(raw: &str) -> String {
    match EquipmentCategory::parse(raw) {
        Some(category) => category.label().to_string(),
        None => raw.to_string(),
    }
}
