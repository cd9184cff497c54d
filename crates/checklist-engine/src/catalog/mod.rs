//! Static inspection template catalog
//!
//! Five hand-authored tiered templates, one per domain area:
//! exterior, interior, HVAC, pool, generator. Each tier's list holds only
//! the items unique to that tier; cumulation happens at lookup time via
//! [`TieredTemplate::items_up_to`], which flattens the prefix returned by
//! [`Tier::cumulative`].
//!
//! The catalog is configuration data, embedded as constant Rust and pinned
//! at version 1. Authoring mistakes (an id reused across tiers, an empty
//! template) are caught by [`Catalog::validate`] rather than trusted to
//! author discipline.

pub mod exterior;
pub mod generator;
pub mod hvac;
pub mod interior;
pub mod pool;

use serde::{Deserialize, Serialize};
use shared_types::{ItemType, Tier};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;
use tracing::warn;

/// Version of the base catalog group, recorded on every generated checklist
/// under `template_versions`.
pub const BASE_CATALOG_VERSION: u32 = 1;

/// Catalog data problems caught at load time.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("template '{template}': item id '{id}' appears more than once (second occurrence in the {tier} tier)")]
    DuplicateItemId {
        template: String,
        tier: Tier,
        id: String,
    },

    #[error("template '{template}' defines no items")]
    EmptyTemplate { template: String },
}

/// One possible checklist question/check, as authored in the catalog.
///
/// Immutable after definition: generation copies items onto checklists and
/// never mutates the catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateItem {
    pub id: String,
    pub text: String,
    pub item_type: ItemType,
    /// Allowed values; populated only for `select` items.
    pub options: Option<Vec<String>>,
    pub photo_required: bool,
    pub photo_recommended: bool,
    pub help_text: Option<String>,
    /// Opaque key passed through to the recommendation-suggestion system.
    pub recommendation_key: Option<String>,
}

impl TemplateItem {
    fn new(id: &str, text: &str, item_type: ItemType) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            item_type,
            options: None,
            photo_required: false,
            photo_recommended: false,
            help_text: None,
            recommendation_key: None,
        }
    }

    /// A pass/fail check.
    pub fn status(id: &str, text: &str) -> Self {
        Self::new(id, text, ItemType::Status)
    }

    /// A free-text observation.
    pub fn text(id: &str, text: &str) -> Self {
        Self::new(id, text, ItemType::Text)
    }

    /// A numeric reading.
    pub fn number(id: &str, text: &str) -> Self {
        Self::new(id, text, ItemType::Number)
    }

    /// A fixed-choice check.
    pub fn select(id: &str, text: &str, options: &[&str]) -> Self {
        let mut item = Self::new(id, text, ItemType::Select);
        item.options = Some(options.iter().map(|option| option.to_string()).collect());
        item
    }

    /// A photo capture.
    pub fn photo(id: &str, text: &str) -> Self {
        Self::new(id, text, ItemType::Photo)
    }

    /// Attach inspector guidance.
    pub fn with_help(mut self, help: &str) -> Self {
        self.help_text = Some(help.to_string());
        self
    }

    /// Attach a recommendation-system key.
    pub fn with_recommendation_key(mut self, key: &str) -> Self {
        self.recommendation_key = Some(key.to_string());
        self
    }

    /// A photo must be captured for this item.
    pub fn require_photo(mut self) -> Self {
        self.photo_required = true;
        self
    }

    /// A photo is suggested but not mandatory.
    pub fn recommend_photo(mut self) -> Self {
        self.photo_recommended = true;
        self
    }
}

/// A tier-keyed group of template items for one domain area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TieredTemplate {
    pub name: String,
    pub version: u32,
    pub visual: Vec<TemplateItem>,
    pub functional: Vec<TemplateItem>,
    pub comprehensive: Vec<TemplateItem>,
    pub preventative: Vec<TemplateItem>,
}

impl TieredTemplate {
    /// Items unique to one tier, in authored order.
    pub fn items(&self, tier: Tier) -> &[TemplateItem] {
        match tier {
            Tier::Visual => &self.visual,
            Tier::Functional => &self.functional,
            Tier::Comprehensive => &self.comprehensive,
            Tier::Preventative => &self.preventative,
        }
    }

    /// Items for a tier with cumulation applied: every tier in the prefix,
    /// tier order across tiers, authored order within each tier.
    pub fn items_up_to(&self, tier: Tier) -> Vec<&TemplateItem> {
        tier.cumulative()
            .iter()
            .flat_map(|included| self.items(*included))
            .collect()
    }

    /// Load-time check: ids must be unique across all four tiers (lookup
    /// does no de-duplication), and a template must define at least one
    /// item somewhere.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = BTreeSet::new();
        let mut total = 0usize;
        for tier in Tier::ALL {
            for item in self.items(tier) {
                total += 1;
                if !seen.insert(item.id.clone()) {
                    return Err(CatalogError::DuplicateItemId {
                        template: self.name.clone(),
                        tier,
                        id: item.id.clone(),
                    });
                }
            }
        }
        if total == 0 {
            return Err(CatalogError::EmptyTemplate {
                template: self.name.clone(),
            });
        }
        Ok(())
    }
}

/// The five domain-area templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub exterior: TieredTemplate,
    pub interior: TieredTemplate,
    pub hvac: TieredTemplate,
    pub pool: TieredTemplate,
    pub generator: TieredTemplate,
}

impl Catalog {
    /// The embedded hand-authored catalog.
    pub fn builtin() -> Self {
        Self {
            exterior: exterior::template(),
            interior: interior::template(),
            hvac: hvac::template(),
            pool: pool::template(),
            generator: generator::template(),
        }
    }

    /// All templates, in base-section emission order.
    pub fn templates(&self) -> [&TieredTemplate; 5] {
        [
            &self.exterior,
            &self.interior,
            &self.hvac,
            &self.pool,
            &self.generator,
        ]
    }

    /// Validate every template.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for template in self.templates() {
            template.validate()?;
        }
        Ok(())
    }

    /// The `template_versions` map stamped onto generated checklists.
    /// One "base" group today; a provision for per-group versioning.
    pub fn versions(&self) -> BTreeMap<String, u32> {
        BTreeMap::from([("base".to_string(), BASE_CATALOG_VERSION)])
    }
}

/// Resolve a stored tier name. Unrecognized values fall back to visual —
/// the shallowest depth — with a warning, so a typo in a program record
/// degrades the checklist instead of failing the request.
pub fn resolve_tier(raw: &str) -> Tier {
    match Tier::parse(raw) {
        Some(tier) => tier,
        None => {
            warn!(tier = %raw, "unrecognized inspection tier, falling back to visual");
            Tier::Visual
        }
    }
}

/// The cumulative tier prefix for a stored tier name.
pub fn tiers_to_include(raw: &str) -> &'static [Tier] {
    resolve_tier(raw).cumulative()
}
