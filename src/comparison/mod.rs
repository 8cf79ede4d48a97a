//! Interactive comparison engine: per-provider records, declarative filter
//! criteria, ordering, best-of selection, and the tabular export.

pub mod domain;
mod export;
mod filter;
mod rank;
mod session;

#[cfg(test)]
mod tests;

pub use domain::{reconcile, ComparisonError, FieldUpdate, ProviderId, ProviderRecord};
pub use export::{comparison_csv, ExportError};
pub use filter::{filter_records, FilterCriteria};
pub use rank::{select_best, sort_records, OrderingKey};
pub use session::{ComparisonSession, ComparisonView};
