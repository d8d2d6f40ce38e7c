use crate::domain::model::{RegionTier, ServiceType};

/// No quote is ever cheaper than this, in BRL.
pub const MINIMUM_RATE: f64 = 20.0;

pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `max(20, round2(base × max(1, weight) × multiplier))`.
///
/// The weight factor is floored at 1 kg so light parcels still pay the tier's base rate.
pub fn shipping_rate(base_rate: f64, total_weight: f64, multiplier: f64) -> f64 {
    let weight_factor = total_weight.max(1.0);
    round_to_cents(base_rate * weight_factor * multiplier).max(MINIMUM_RATE)
}

pub fn rate_for(tier: RegionTier, total_weight: f64, service: ServiceType) -> f64 {
    shipping_rate(tier.base_rate(), total_weight, service.multiplier())
}

pub fn delivery_days(tier: RegionTier, service: ServiceType) -> u32 {
    tier.delivery_days(service)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metro_two_kilos() {
        assert_eq!(rate_for(RegionTier::Metro, 2.0, ServiceType::Standard), 40.0);
        assert_eq!(rate_for(RegionTier::Metro, 2.0, ServiceType::Express), 68.0);
    }

    #[test]
    fn test_light_parcel_pays_base_rate() {
        assert_eq!(rate_for(RegionTier::Default, 0.5, ServiceType::Standard), 30.0);
        assert_eq!(rate_for(RegionTier::Default, 0.0, ServiceType::Express), 51.0);
    }

    #[test]
    fn test_floor_applies() {
        assert_eq!(shipping_rate(5.0, 1.0, 1.0), MINIMUM_RATE);
        assert_eq!(shipping_rate(0.0, 10.0, 1.7), MINIMUM_RATE);
    }

    #[test]
    fn test_rounding_to_cents() {
        // 28 × 1.333 × 1.7 = 63.4508
        assert_eq!(shipping_rate(28.0, 1.333, 1.7), 63.45);
        assert_eq!(round_to_cents(12.346), 12.35);
    }

    #[test]
    fn test_rate_never_below_floor() {
        let tiers = [
            RegionTier::Metro,
            RegionTier::SouthSoutheast,
            RegionTier::CentralNortheast,
            RegionTier::North,
            RegionTier::Default,
        ];
        for tier in tiers {
            for weight in [0.0, 0.1, 0.5, 1.0, 3.7, 25.0] {
                for service in ServiceType::ALL {
                    assert!(rate_for(tier, weight, service) >= MINIMUM_RATE);
                }
            }
        }
    }

    #[test]
    fn test_delivery_days_table() {
        assert_eq!(delivery_days(RegionTier::Metro, ServiceType::Standard), 4);
        assert_eq!(delivery_days(RegionTier::Metro, ServiceType::Express), 1);
        assert_eq!(delivery_days(RegionTier::SouthSoutheast, ServiceType::Standard), 5);
        assert_eq!(delivery_days(RegionTier::SouthSoutheast, ServiceType::Express), 2);
        assert_eq!(delivery_days(RegionTier::CentralNortheast, ServiceType::Standard), 7);
        assert_eq!(delivery_days(RegionTier::CentralNortheast, ServiceType::Express), 3);
    }
}
