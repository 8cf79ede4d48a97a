use serde::{Deserialize, Serialize};

/// Limits applied to an interactive comparison session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonConfig {
    /// Maximum number of providers that may be selected at once. Attempts to
    /// add beyond the cap are rejected, not truncated.
    pub max_providers: usize,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self { max_providers: 10 }
    }
}

/// Rates the premium estimator applies on top of the regulatory base tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// GST fraction applied to the taxable premium.
    pub gst_rate: f64,
    /// Own-damage loading per completed year of vehicle age.
    pub age_loading_per_year: f64,
    /// Loading applied to the GST-inclusive total when a prior claim exists.
    pub claim_loading: f64,
    /// Vehicle age is clamped to this many completed years for rating.
    pub max_rated_age: u8,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            gst_rate: 0.18,
            age_loading_per_year: 0.02,
            claim_loading: 0.20,
            max_rated_age: 10,
        }
    }
}
