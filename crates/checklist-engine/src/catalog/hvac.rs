//! Heating and cooling template. Emitted only for properties that have
//! HVAC equipment on record.

use super::{TemplateItem, TieredTemplate};

pub fn template() -> TieredTemplate {
    TieredTemplate {
        name: "HVAC".to_string(),
        version: 1,
        visual: vec![
            TemplateItem::status("hvac_filter", "Air filter clean or replaced")
                .with_recommendation_key("hvac_filter_replacement"),
            TemplateItem::status("hvac_vents", "Supply and return vents unobstructed"),
            TemplateItem::status("hvac_condenser", "Outdoor condenser clear of debris and vegetation"),
            TemplateItem::status("hvac_thermostat_display", "Thermostat powered, display legible"),
        ],
        functional: vec![
            TemplateItem::status("hvac_cooling_cycle", "System reaches set point in cooling mode"),
            TemplateItem::status("hvac_heating_cycle", "System reaches set point in heating mode"),
            TemplateItem::number("hvac_temp_split", "Supply/return temperature split (F)")
                .with_help("15-20F across the coil is typical; outside that range flag for service")
                .with_recommendation_key("hvac_service"),
            TemplateItem::status("hvac_condensate", "Condensate line draining, pan dry"),
        ],
        comprehensive: vec![
            TemplateItem::status("hvac_coil", "Evaporator coil accessible faces clean"),
            TemplateItem::status("hvac_ductwork", "Visible ductwork sealed, insulation intact"),
            TemplateItem::photo("hvac_data_plate", "Photo of unit data plate").require_photo(),
        ],
        preventative: vec![
            TemplateItem::status("hvac_coil_cleaning", "Clean condenser coil and straighten fins")
                .with_recommendation_key("hvac_deep_service"),
            TemplateItem::status("hvac_drain_treatment", "Treat condensate drain with algaecide"),
            TemplateItem::status("hvac_contactor", "Inspect contactor and capacitor for wear"),
        ],
    }
}
