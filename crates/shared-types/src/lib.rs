pub mod checklist;
pub mod tier;
pub mod types;

pub use checklist::{ChecklistItem, ChecklistSection, GeneratedChecklist, ItemType};
pub use tier::Tier;
pub use types::{Equipment, Program, Property, PropertyFeatures};
