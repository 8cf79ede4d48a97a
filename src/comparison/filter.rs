use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::CoverageFlag;

use super::domain::ProviderRecord;

/// Declarative filter over the record set. Each coverage flag carries an
/// optional required value (absent means ignore); `max_budget` is an optional
/// ceiling on the premium. All present criteria are ANDed; an empty criteria
/// set is the identity filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    flags: BTreeMap<CoverageFlag, bool>,
    max_budget: Option<u32>,
}

impl FilterCriteria {
    /// Require a flag to hold a specific value, or `None` to stop filtering
    /// on that flag.
    pub fn require(&mut self, flag: CoverageFlag, wanted: Option<bool>) {
        match wanted {
            Some(value) => {
                self.flags.insert(flag, value);
            }
            None => {
                self.flags.remove(&flag);
            }
        }
    }

    pub fn set_max_budget(&mut self, ceiling: Option<u32>) {
        self.max_budget = ceiling;
    }

    pub fn required(&self, flag: CoverageFlag) -> Option<bool> {
        self.flags.get(&flag).copied()
    }

    pub fn max_budget(&self) -> Option<u32> {
        self.max_budget
    }

    pub fn is_identity(&self) -> bool {
        self.flags.is_empty() && self.max_budget.is_none()
    }

    fn matches(&self, record: &ProviderRecord) -> bool {
        for (flag, wanted) in &self.flags {
            if record.flag(*flag) != *wanted {
                return false;
            }
        }

        // An unknown premium is never excluded by the budget ceiling.
        if let (Some(ceiling), Some(premium)) = (self.max_budget, record.premium) {
            if premium > ceiling {
                return false;
            }
        }

        true
    }
}

/// Apply the criteria, preserving input order. Pure; the result is a stable
/// subsequence of `records`.
pub fn filter_records(records: &[ProviderRecord], criteria: &FilterCriteria) -> Vec<ProviderRecord> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}
