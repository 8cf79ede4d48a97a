use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{CoverageFlag, ProviderDirectory};

/// Identifier wrapper for providers in the active selection set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProviderId(pub String);

impl ProviderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display name used when a selected id is missing from the directory.
pub const UNKNOWN_PROVIDER_NAME: &str = "Unknown Company";

/// One mutable comparison row per selected provider.
///
/// `net_cost` is derived: it is recomputed synchronously whenever `premium`
/// or `payout` changes and is never written through any other path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderRecord {
    pub id: ProviderId,
    pub display_name: String,
    /// Free-text insured-declared-value figure; not numerically validated.
    pub idv_value: String,
    pub coverage: BTreeMap<CoverageFlag, bool>,
    pub premium: Option<u32>,
    pub payout: Option<u32>,
    pub net_cost: Option<i64>,
}

impl ProviderRecord {
    /// Create the default record for a newly selected provider: display name
    /// resolved from the directory (falling back to [`UNKNOWN_PROVIDER_NAME`]),
    /// every coverage flag included, numerics unset.
    pub fn seeded(id: ProviderId, directory: &ProviderDirectory) -> Self {
        let display_name = match directory.name_for(&id.0) {
            Some(name) => name.to_string(),
            None => {
                tracing::warn!(provider = %id, "selected id missing from directory");
                UNKNOWN_PROVIDER_NAME.to_string()
            }
        };

        let coverage = CoverageFlag::ordered()
            .into_iter()
            .map(|flag| (flag, true))
            .collect();

        Self {
            id,
            display_name,
            idv_value: String::new(),
            coverage,
            premium: None,
            payout: None,
            net_cost: None,
        }
    }

    pub fn flag(&self, flag: CoverageFlag) -> bool {
        self.coverage.get(&flag).copied().unwrap_or(true)
    }

    /// Apply one field update, keeping the `net_cost` derivation in sync.
    pub fn apply(mut self, update: FieldUpdate) -> Self {
        match update {
            FieldUpdate::IdvValue(value) => self.idv_value = value,
            FieldUpdate::Coverage(flag, included) => {
                self.coverage.insert(flag, included);
            }
            FieldUpdate::Premium(value) => {
                self.premium = value;
                self.recompute_net_cost();
            }
            FieldUpdate::Payout(value) => {
                self.payout = value;
                self.recompute_net_cost();
            }
        }
        self
    }

    fn recompute_net_cost(&mut self) {
        self.net_cost = match (self.premium, self.payout) {
            (Some(premium), Some(payout)) => Some(i64::from(premium) - i64::from(payout)),
            _ => None,
        };
    }
}

/// The updatable fields of a [`ProviderRecord`], enumerated so that an
/// unknown field key cannot exist by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldUpdate {
    IdvValue(String),
    Coverage(CoverageFlag, bool),
    Premium(Option<u32>),
    Payout(Option<u32>),
}

impl FieldUpdate {
    /// Premium update from raw text input; unparseable input clears the field.
    pub fn premium_input(raw: &str) -> Self {
        Self::Premium(parse_amount(raw))
    }

    /// Payout update from raw text input; unparseable input clears the field.
    pub fn payout_input(raw: &str) -> Self {
        Self::Payout(parse_amount(raw))
    }
}

fn parse_amount(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Reconcile the record set against a new ordered id list: ids present in
/// both keep their existing record (mutations survive), new ids get a seeded
/// default record, dropped ids vanish. Idempotent; output order follows
/// `desired`.
pub fn reconcile(
    current: &[ProviderRecord],
    desired: &[ProviderId],
    directory: &ProviderDirectory,
) -> Vec<ProviderRecord> {
    desired
        .iter()
        .map(|id| {
            current
                .iter()
                .find(|record| &record.id == id)
                .cloned()
                .unwrap_or_else(|| ProviderRecord::seeded(id.clone(), directory))
        })
        .collect()
}

/// Error raised by the comparison session.
#[derive(Debug)]
pub enum ComparisonError {
    ProviderNotSelected(ProviderId),
}

impl fmt::Display for ComparisonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonError::ProviderNotSelected(id) => {
                write!(f, "provider {} is not part of the active selection", id)
            }
        }
    }
}

impl std::error::Error for ComparisonError {}
