//! Standby generator template. Emitted only when the property's generator
//! feature flag is set.

use super::{TemplateItem, TieredTemplate};

pub fn template() -> TieredTemplate {
    TieredTemplate {
        name: "Generator".to_string(),
        version: 1,
        visual: vec![
            TemplateItem::status("gen_enclosure", "Enclosure intact, clear of nests and debris"),
            TemplateItem::status("gen_fuel_level", "Fuel supply adequate, no smell of leaks")
                .with_recommendation_key("fuel_delivery"),
            TemplateItem::status("gen_status_panel", "Controller shows ready, no fault codes")
                .recommend_photo(),
        ],
        functional: vec![
            TemplateItem::status("gen_exercise_run", "Manual exercise run completes without faults")
                .with_help("Let the unit run at least five minutes and listen for surging"),
            TemplateItem::status("gen_transfer_switch", "Transfer switch exercises to generator and back"),
            TemplateItem::number("gen_battery_voltage", "Starting battery voltage (V)")
                .with_recommendation_key("generator_battery"),
        ],
        comprehensive: vec![
            TemplateItem::status("gen_load_test", "Carries house load through a simulated outage"),
            TemplateItem::status("gen_connections", "Fuel and electrical connections tight, no corrosion"),
        ],
        preventative: vec![
            TemplateItem::status("gen_oil_filter", "Change oil and filter per runtime hours")
                .with_recommendation_key("generator_service"),
            TemplateItem::status("gen_plugs_coolant", "Inspect spark plugs and coolant level"),
        ],
    }
}
