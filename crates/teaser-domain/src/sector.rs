//! Sector module - industry classification

use std::fmt;

/// Industry sector detected for a company.
///
/// The sector selects which metric keywords the guardrail requires and which
/// visual theme the image search leans on. The generation step echoes the
/// sector back as a free string; the guardrail therefore keys its rule table
/// by name and degrades unknown names to a permissive pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sector {
    /// Pharmaceuticals and API manufacturing
    Pharma,
    /// Software and SaaS
    Tech,
    /// Plants, factories, industrial production
    Manufacturing,
    /// Fleet and freight operations
    Logistics,
    /// FMCG and branded consumer products
    ConsumerGoods,
    /// Direct-to-consumer and ecommerce
    D2c,
    /// Fallback when no sector scores high enough
    General,
}

impl Sector {
    /// Display name, matching the guardrail rule table keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sector::Pharma => "Pharma",
            Sector::Tech => "Tech",
            Sector::Manufacturing => "Manufacturing",
            Sector::Logistics => "Logistics",
            Sector::ConsumerGoods => "Consumer Goods",
            Sector::D2c => "D2C",
            Sector::General => "General",
        }
    }

    /// Parse a sector from its display name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pharma" => Some(Sector::Pharma),
            "Tech" => Some(Sector::Tech),
            "Manufacturing" => Some(Sector::Manufacturing),
            "Logistics" => Some(Sector::Logistics),
            "Consumer Goods" => Some(Sector::ConsumerGoods),
            "D2C" => Some(Sector::D2c),
            "General" => Some(Sector::General),
            _ => None,
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Sector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid sector: {}", s))
    }
}
