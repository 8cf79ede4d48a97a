//! Core engine for an interactive motor-insurance comparison tool.
//!
//! Two independent subsystems share no state: the comparison engine
//! ([`comparison::ComparisonSession`]) manages per-provider records, applies
//! declarative filters and an ordering, and surfaces the best option; the
//! premium estimator ([`estimator::PremiumEstimator`]) derives a rule-based
//! premium breakdown from vehicle attributes using fixed regulatory rate
//! tables. The crate is embedded in an interactive front end and exposes no
//! network or CLI surface of its own.

pub mod catalog;
pub mod comparison;
pub mod config;
pub mod estimator;

pub use comparison::{
    ComparisonError, ComparisonSession, ComparisonView, ExportError, FieldUpdate, FilterCriteria,
    OrderingKey, ProviderId, ProviderRecord,
};
pub use config::{ComparisonConfig, EstimatorConfig};
pub use estimator::{CoverageMode, PremiumBreakdown, PremiumEstimator, VehicleProfile};
