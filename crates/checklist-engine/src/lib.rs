pub mod assembler;
pub mod catalog;
pub mod category;
pub mod compat;
pub mod duration;

use catalog::{Catalog, CatalogError};
use shared_types::{Equipment, GeneratedChecklist, Program, Property};

/// ChecklistGenerator entry point
pub struct ChecklistGenerator {
    catalog: Catalog,
}

impl ChecklistGenerator {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::builtin(),
        }
    }

    /// Build a generator over a caller-supplied catalog, validated up front
    /// so data mistakes surface at construction instead of mid-generation.
    pub fn with_catalog(catalog: Catalog) -> Result<Self, CatalogError> {
        catalog.validate()?;
        Ok(Self { catalog })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn generate(
        &self,
        property: &Property,
        program: &Program,
        equipment: &[Equipment],
    ) -> GeneratedChecklist {
        assembler::generate(&self.catalog, property, program, equipment)
    }
}

impl Default for ChecklistGenerator {
    fn default() -> Self {
        Self::new()
    }
}
