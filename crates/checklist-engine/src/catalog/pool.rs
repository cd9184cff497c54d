//! Pool and spa template. Emitted only when the property's pool feature
//! flag is set.

use super::{TemplateItem, TieredTemplate};

pub fn template() -> TieredTemplate {
    TieredTemplate {
        name: "Pool & Spa".to_string(),
        version: 1,
        visual: vec![
            TemplateItem::select(
                "pool_water_clarity",
                "Water clarity",
                &["clear", "cloudy", "green"],
            )
            .with_recommendation_key("pool_service")
            .recommend_photo(),
            TemplateItem::status("pool_water_level", "Water level at mid-skimmer"),
            TemplateItem::status("pool_surface_debris", "Surface and floor free of heavy debris"),
            TemplateItem::status("pool_barrier", "Safety barrier and gate latches secure"),
        ],
        functional: vec![
            TemplateItem::status("pool_pump", "Pump primes and runs without unusual noise"),
            TemplateItem::status("pool_skimmer_baskets", "Skimmer and pump baskets emptied"),
            TemplateItem::number("pool_filter_pressure", "Filter pressure (psi)")
                .with_help("Compare against the clean baseline marked on the tank"),
            TemplateItem::status("pool_chemistry", "Test strips within range, chemicals adjusted")
                .with_recommendation_key("pool_chemical_balance"),
        ],
        comprehensive: vec![
            TemplateItem::status("pool_heater", "Heater fires and holds set temperature"),
            TemplateItem::status("pool_cleaner", "Automatic cleaner travels full circuit"),
            TemplateItem::status("pool_equipment_pad", "Equipment pad plumbing free of drips or corrosion")
                .recommend_photo(),
        ],
        preventative: vec![
            TemplateItem::status("pool_filter_service", "Backwash or rinse filter media")
                .with_recommendation_key("pool_filter_service"),
            TemplateItem::status("pool_salt_cell", "Inspect and descale salt cell if fitted"),
            TemplateItem::status("pool_orings", "Lubricate pump lid and union o-rings"),
        ],
    }
}
