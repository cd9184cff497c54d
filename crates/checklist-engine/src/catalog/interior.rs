//! Interior living-space template.

use super::{TemplateItem, TieredTemplate};

pub fn template() -> TieredTemplate {
    TieredTemplate {
        name: "Interior".to_string(),
        version: 1,
        visual: vec![
            TemplateItem::status("int_ceilings", "Ceilings and walls free of stains or new cracks")
                .with_help("Water staining usually shows first at ceiling corners and around can lights")
                .recommend_photo(),
            TemplateItem::status("int_flooring", "Flooring free of damage, lifting, or soft spots"),
            TemplateItem::status("int_windows", "Windows close, latch, and show no condensation between panes"),
            TemplateItem::status("int_odors", "No musty, gas, or sewage odors present")
                .with_recommendation_key("mold_assessment"),
            TemplateItem::status("int_pests", "No signs of pest activity or droppings")
                .with_recommendation_key("pest_control"),
            TemplateItem::select(
                "int_overall",
                "Overall interior condition",
                &["good", "fair", "poor"],
            ),
        ],
        functional: vec![
            TemplateItem::status("int_faucets", "Faucets run and drain without leaks at supply lines"),
            TemplateItem::status("int_toilets", "Toilets flush and refill, no running or rocking"),
            TemplateItem::status("int_gfci", "GFCI outlets trip and reset at test buttons"),
            TemplateItem::status("int_smoke_detectors", "Smoke and CO detectors respond to test button")
                .with_recommendation_key("detector_replacement"),
            TemplateItem::number("int_water_heater_temp", "Water heater output temperature (F)")
                .with_help("Run hot water at the nearest tap for two minutes before reading"),
        ],
        comprehensive: vec![
            TemplateItem::status("int_under_sinks", "Under-sink cabinets dry, supply valves operable"),
            TemplateItem::status("int_attic_access", "Attic access shows no leaks or displaced insulation")
                .recommend_photo(),
            TemplateItem::status("int_appliance_cycles", "Run dishwasher and laundry through short cycles"),
        ],
        preventative: vec![
            TemplateItem::status("int_water_heater_flush", "Flush water heater sediment")
                .with_recommendation_key("water_heater_service"),
            TemplateItem::status("int_drain_treatment", "Treat slow drains and clean accessible traps"),
            TemplateItem::text("int_filter_sizes", "Record filter and bulb sizes for restock"),
        ],
    }
}
