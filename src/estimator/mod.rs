//! Rule-based premium estimator: a pure derivation from a vehicle profile to
//! a premium breakdown, driven by the fixed regulatory rate tables in
//! [`rates`].

mod calculator;
pub mod rates;

use serde::{Deserialize, Serialize};

use crate::config::EstimatorConfig;

pub use rates::{RatingBand, VehicleClass};

/// Whether the estimate covers own damage or third-party liability only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageMode {
    Comprehensive,
    ThirdPartyOnly,
}

impl CoverageMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Comprehensive => "Comprehensive",
            Self::ThirdPartyOnly => "Third Party Only",
        }
    }
}

/// Input to the estimator. Carries no persistent identity; the breakdown is
/// recomputed from scratch on every change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    pub vehicle_class: VehicleClass,
    pub band: RatingBand,
    /// Completed years; clamped to the configured rating ceiling.
    pub age_years: u8,
    /// Declared value; only meaningful for comprehensive cover.
    pub declared_value: u32,
    pub coverage: CoverageMode,
    pub prior_claim: bool,
}

impl VehicleProfile {
    /// A fresh profile for the given class with the class's first band
    /// selected, mirroring the front end's band reset on class change.
    pub fn new(vehicle_class: VehicleClass) -> Self {
        Self {
            vehicle_class,
            band: rates::default_band(vehicle_class),
            age_years: 0,
            declared_value: 0,
            coverage: CoverageMode::Comprehensive,
            prior_claim: false,
        }
    }
}

/// Premium components for display. When the prior-claim loading applies it is
/// folded into `total` only; the component fields keep their pre-loading
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumBreakdown {
    pub total: u32,
    pub third_party_base: u32,
    pub own_damage: u32,
    pub gst: u32,
    pub claim_loading_applied: bool,
}

/// Stateless estimator applying an [`EstimatorConfig`] to vehicle profiles.
pub struct PremiumEstimator {
    config: EstimatorConfig,
}

impl PremiumEstimator {
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    pub fn estimate(&self, profile: &VehicleProfile) -> PremiumBreakdown {
        calculator::breakdown(profile, &self.config)
    }
}

impl Default for PremiumEstimator {
    fn default() -> Self {
        Self::new(EstimatorConfig::default())
    }
}
