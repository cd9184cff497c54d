//! Input snapshots consumed by the checklist generator
//!
//! These mirror the shapes the application layer fetches from the database.
//! The generator reads them and never writes them back; every field that can
//! be null in storage is an `Option` here and degrades to "feature absent"
//! or "no extra time" downstream.

use serde::{Deserialize, Serialize};

/// Optional amenities recorded against a property. Flat booleans, all
/// defaulting to false so a partial record deserializes cleanly.
///
/// Only `pool`, `generator`, and `dock` currently drive checklist or
/// duration composition; the rest are carried for the property profile
/// screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyFeatures {
    #[serde(default)]
    pub pool: bool,
    #[serde(default)]
    pub spa: bool,
    #[serde(default)]
    pub dock: bool,
    #[serde(default)]
    pub boat_lift: bool,
    #[serde(default)]
    pub generator: bool,
    #[serde(default)]
    pub elevator: bool,
    #[serde(default)]
    pub security_system: bool,
    #[serde(default)]
    pub irrigation_system: bool,
    #[serde(default)]
    pub outdoor_kitchen: bool,
    #[serde(default)]
    pub fireplace: bool,
    #[serde(default)]
    pub fence: bool,
    #[serde(default)]
    pub gated_entry: bool,
    #[serde(default)]
    pub guest_house: bool,
    #[serde(default)]
    pub workshop: bool,
    #[serde(default)]
    pub wine_cellar: bool,
    #[serde(default)]
    pub home_theater: bool,
    #[serde(default)]
    pub sauna: bool,
    #[serde(default)]
    pub solar_panels: bool,
    #[serde(default)]
    pub hurricane_shutters: bool,
    #[serde(default)]
    pub water_softener: bool,
    #[serde(default)]
    pub well_water: bool,
    #[serde(default)]
    pub septic_system: bool,
    #[serde(default)]
    pub propane_tank: bool,
    #[serde(default)]
    pub smart_home: bool,
}

/// A property snapshot. `square_footage` and `features` may be absent for
/// records entered before those columns existed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub square_footage: Option<u32>,
    pub features: Option<PropertyFeatures>,
}

/// A service program snapshot. `inspection_tier` is the raw tier name as
/// stored; the engine resolves it (unrecognized values fall back to visual).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub id: String,
    pub inspection_tier: String,
}

/// An installed-equipment snapshot.
///
/// `category` stays a raw string: the vocabulary is owned by the equipment
/// intake flow and may grow ahead of this crate. `inspection_checklist` is
/// the AI-generated per-tier checklist blob; the engine only relies on its
/// tier-keyed shape and treats anything malformed as "no items".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equipment {
    pub id: String,
    pub category: String,
    pub equipment_type: String,
    pub custom_name: Option<String>,
    pub inspection_checklist: Option<serde_json::Value>,
}

impl Equipment {
    /// Name used when prefixing checklist items contributed by this record:
    /// the owner's nickname when one is set, otherwise the equipment type.
    pub fn display_name(&self) -> &str {
        self.custom_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.equipment_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_features_deserialize_with_defaults() {
        let features: PropertyFeatures = serde_json::from_str(r#"{"pool": true}"#).unwrap();
        assert!(features.pool);
        assert!(!features.generator);
        assert!(!features.dock);
    }

    #[test]
    fn test_display_name_prefers_custom_name() {
        let equipment = Equipment {
            id: "eq1".to_string(),
            category: "hvac".to_string(),
            equipment_type: "Air Handler".to_string(),
            custom_name: Some("Main Floor AC".to_string()),
            inspection_checklist: None,
        };
        assert_eq!(equipment.display_name(), "Main Floor AC");
    }

    #[test]
    fn test_display_name_falls_back_to_equipment_type() {
        let equipment = Equipment {
            id: "eq1".to_string(),
            category: "hvac".to_string(),
            equipment_type: "Air Handler".to_string(),
            custom_name: None,
            inspection_checklist: None,
        };
        assert_eq!(equipment.display_name(), "Air Handler");

        let blank_nickname = Equipment {
            custom_name: Some(String::new()),
            ..equipment
        };
        assert_eq!(blank_nickname.display_name(), "Air Handler");
    }
}
