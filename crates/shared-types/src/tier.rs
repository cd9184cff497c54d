//! Inspection tiers
//!
//! Service programs book inspections at one of four depths. Tiers are
//! cumulative by convention: a functional inspection covers everything a
//! visual one does, and so on up the ladder. The stored catalog keeps each
//! tier's unique items only; cumulation happens at generation time by
//! unioning the prefix returned from [`Tier::cumulative`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inspection depth for a service program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Visual,
    Functional,
    Comprehensive,
    Preventative,
}

impl Tier {
    /// All tiers in cumulation order, shallowest first.
    pub const ALL: [Tier; 4] = [
        Tier::Visual,
        Tier::Functional,
        Tier::Comprehensive,
        Tier::Preventative,
    ];

    /// Parse a tier name (case-insensitive). Returns `None` for anything
    /// outside the four known names.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "visual" => Some(Tier::Visual),
            "functional" => Some(Tier::Functional),
            "comprehensive" => Some(Tier::Comprehensive),
            "preventative" => Some(Tier::Preventative),
            _ => None,
        }
    }

    /// The string form used in program records and equipment checklists.
    pub const fn as_str(self) -> &'static str {
        match self {
            Tier::Visual => "visual",
            Tier::Functional => "functional",
            Tier::Comprehensive => "comprehensive",
            Tier::Preventative => "preventative",
        }
    }

    /// Tiers whose items a checklist at this depth includes: the prefix of
    /// [`Tier::ALL`] up to and including `self`.
    pub const fn cumulative(self) -> &'static [Tier] {
        match self {
            Tier::Visual => &[Tier::Visual],
            Tier::Functional => &[Tier::Visual, Tier::Functional],
            Tier::Comprehensive => &[Tier::Visual, Tier::Functional, Tier::Comprehensive],
            Tier::Preventative => &[
                Tier::Visual,
                Tier::Functional,
                Tier::Comprehensive,
                Tier::Preventative,
            ],
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
