use crate::config::EstimatorConfig;

use super::rates;
use super::{CoverageMode, PremiumBreakdown, VehicleProfile};

/// Derive the premium breakdown for a profile. Step order and the placement
/// of each rounding match the established estimate exactly so that figures
/// stay reproducible across hosts.
pub(super) fn breakdown(profile: &VehicleProfile, config: &EstimatorConfig) -> PremiumBreakdown {
    let third_party_base =
        rates::third_party_base(profile.vehicle_class, profile.band).unwrap_or_else(|| {
            // Fail open to a zero base rather than blocking the host UI.
            tracing::warn!(
                class = profile.vehicle_class.label(),
                band = profile.band.label(),
                "no third-party rate for class/band, using zero base"
            );
            0
        });

    let gst = round_rupees(f64::from(third_party_base) * config.gst_rate);

    if profile.coverage == CoverageMode::ThirdPartyOnly {
        // Prior claims never load a third-party-only premium.
        return PremiumBreakdown {
            total: round_rupees(f64::from(third_party_base) * (1.0 + config.gst_rate)),
            third_party_base,
            own_damage: 0,
            gst,
            claim_loading_applied: false,
        };
    }

    let rated_age = profile.age_years.min(config.max_rated_age);
    let age_multiplier = 1.0 + config.age_loading_per_year * f64::from(rated_age);
    let own_damage = round_rupees(
        rates::own_damage_rate(profile.vehicle_class)
            * f64::from(profile.declared_value)
            * age_multiplier,
    );

    let subtotal = third_party_base + own_damage;
    let gst = round_rupees(f64::from(subtotal) * config.gst_rate);
    let mut total = round_rupees(f64::from(subtotal + gst));

    let claim_loading_applied = profile.prior_claim;
    if claim_loading_applied {
        // Applied last, to the GST-inclusive total; the component fields
        // above keep their pre-loading values.
        total = round_rupees(f64::from(total) * (1.0 + config.claim_loading));
    }

    PremiumBreakdown {
        total,
        third_party_base,
        own_damage,
        gst,
        claim_loading_applied,
    }
}

fn round_rupees(value: f64) -> u32 {
    value.round() as u32
}
