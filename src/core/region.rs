//! Postal-code prefix → region tier classification.
//!
//! Rules are evaluated in order and the first match wins: the metro prefix
//! set first, then the prefix ranges, then `Default`.

use crate::domain::model::{RegionTier, ServiceType};
use crate::utils::error::{Result, ShippingError};

/// Prefixes of the large metropolitan areas, as decimal values of the first three digits.
pub static METRO_PREFIXES: [u16; 14] = [10, 11, 12, 13, 20, 21, 22, 30, 40, 50, 60, 70, 80, 90];

/// Inclusive prefix ranges, checked after the metro set.
pub static PREFIX_RANGES: [(u16, u16, RegionTier); 3] = [
    (1, 399, RegionTier::SouthSoutheast),
    (400, 659, RegionTier::CentralNortheast),
    (660, 699, RegionTier::North),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierProfile {
    pub tier: RegionTier,
    pub base_rate: f64,
    pub standard_days: u32,
    pub express_days: u32,
}

pub static TIER_PROFILES: [TierProfile; 5] = [
    TierProfile {
        tier: RegionTier::Metro,
        base_rate: 20.0,
        standard_days: 4,
        express_days: 1,
    },
    TierProfile {
        tier: RegionTier::SouthSoutheast,
        base_rate: 28.0,
        standard_days: 5,
        express_days: 2,
    },
    TierProfile {
        tier: RegionTier::CentralNortheast,
        base_rate: 35.0,
        standard_days: 7,
        express_days: 3,
    },
    TierProfile {
        tier: RegionTier::North,
        base_rate: 42.0,
        standard_days: 9,
        express_days: 4,
    },
    TierProfile {
        tier: RegionTier::Default,
        base_rate: 30.0,
        standard_days: 6,
        express_days: 3,
    },
];

impl RegionTier {
    pub fn profile(self) -> &'static TierProfile {
        let index = match self {
            RegionTier::Metro => 0,
            RegionTier::SouthSoutheast => 1,
            RegionTier::CentralNortheast => 2,
            RegionTier::North => 3,
            RegionTier::Default => 4,
        };
        &TIER_PROFILES[index]
    }

    pub fn base_rate(self) -> f64 {
        self.profile().base_rate
    }

    pub fn delivery_days(self, service: ServiceType) -> u32 {
        let profile = self.profile();
        if service.is_express() {
            profile.express_days
        } else {
            profile.standard_days
        }
    }
}

pub fn classify(prefix: u16) -> RegionTier {
    if METRO_PREFIXES.contains(&prefix) {
        return RegionTier::Metro;
    }

    PREFIX_RANGES
        .iter()
        .find(|(low, high, _)| (*low..=*high).contains(&prefix))
        .map(|(_, _, tier)| *tier)
        .unwrap_or(RegionTier::Default)
}

/// Numeric value of the first three digits of a cleaned postal code.
pub fn prefix_of(clean_postal_code: &str) -> Result<u16> {
    clean_postal_code
        .get(..3)
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| ShippingError::InvalidPostalCode {
            value: clean_postal_code.to_string(),
        })
}
