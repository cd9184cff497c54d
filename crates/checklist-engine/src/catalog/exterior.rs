//! Exterior grounds and envelope template.

use super::{TemplateItem, TieredTemplate};

pub fn template() -> TieredTemplate {
    TieredTemplate {
        name: "Exterior".to_string(),
        version: 1,
        visual: vec![
            TemplateItem::select(
                "ext_roof_condition",
                "Roof condition from ground level",
                &["good", "worn", "damaged"],
            )
            .with_help("Scan for lifted shingles, sagging lines, and debris buildup")
            .with_recommendation_key("roof_repair")
            .recommend_photo(),
            TemplateItem::status("ext_siding", "Siding and trim free of damage or rot"),
            TemplateItem::status("ext_gutters", "Gutters and downspouts attached and clear")
                .with_recommendation_key("gutter_cleaning"),
            TemplateItem::status("ext_landscaping", "Landscaping trimmed back from structure"),
            TemplateItem::status("ext_driveway", "Driveway and walkways free of trip hazards"),
            TemplateItem::photo("ext_front_photo", "Photo of front elevation").require_photo(),
        ],
        functional: vec![
            TemplateItem::status("ext_garage_door", "Garage door opens, closes, and auto-reverses")
                .with_help("Place an object under the door to confirm the safety reverse"),
            TemplateItem::status("ext_exterior_lighting", "Exterior light fixtures operate"),
            TemplateItem::status("ext_locks", "Entry locks and latches engage smoothly"),
            TemplateItem::status("ext_hose_bibs", "Hose bibs open and shut without leaking")
                .with_recommendation_key("plumbing_service"),
        ],
        comprehensive: vec![
            TemplateItem::status("ext_foundation", "Foundation visible faces free of new cracks")
                .recommend_photo()
                .with_recommendation_key("foundation_eval"),
            TemplateItem::select(
                "ext_drainage",
                "Grading and drainage away from structure",
                &["adequate", "marginal", "poor"],
            ),
            TemplateItem::status("ext_fence", "Fencing and gates sound, hardware tight"),
        ],
        preventative: vec![
            TemplateItem::status("ext_sealant", "Caulk and sealant at penetrations intact")
                .with_recommendation_key("exterior_sealing"),
            TemplateItem::text("ext_wear_notes", "Note exterior wear items to watch next visit"),
        ],
    }
}
