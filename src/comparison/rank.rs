use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::domain::ProviderRecord;

/// Field and direction used to rank providers. Exactly one is active per
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingKey {
    PremiumAsc,
    PremiumDesc,
    PayoutAsc,
    PayoutDesc,
    NetCostAsc,
    NetCostDesc,
    ProviderName,
}

impl OrderingKey {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::PremiumAsc,
            Self::PremiumDesc,
            Self::PayoutAsc,
            Self::PayoutDesc,
            Self::NetCostAsc,
            Self::NetCostDesc,
            Self::ProviderName,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PremiumAsc => "Premium (low to high)",
            Self::PremiumDesc => "Premium (high to low)",
            Self::PayoutAsc => "Payout (low to high)",
            Self::PayoutDesc => "Payout (high to low)",
            Self::NetCostAsc => "Net Cost (low to high)",
            Self::NetCostDesc => "Net Cost (high to low)",
            Self::ProviderName => "Company Name",
        }
    }
}

// Absent numerics rank as zero under every numeric key. This reproduces the
// comparison tool's established behavior and is a policy, not a data-quality
// signal.
fn amount(value: Option<u32>) -> i64 {
    value.map(i64::from).unwrap_or(0)
}

fn compare(a: &ProviderRecord, b: &ProviderRecord, key: OrderingKey) -> Ordering {
    match key {
        OrderingKey::PremiumAsc => amount(a.premium).cmp(&amount(b.premium)),
        OrderingKey::PremiumDesc => amount(b.premium).cmp(&amount(a.premium)),
        OrderingKey::PayoutAsc => amount(a.payout).cmp(&amount(b.payout)),
        OrderingKey::PayoutDesc => amount(b.payout).cmp(&amount(a.payout)),
        OrderingKey::NetCostAsc => a.net_cost.unwrap_or(0).cmp(&b.net_cost.unwrap_or(0)),
        OrderingKey::NetCostDesc => b.net_cost.unwrap_or(0).cmp(&a.net_cost.unwrap_or(0)),
        OrderingKey::ProviderName => compare_names(&a.display_name, &b.display_name),
    }
}

// Caseless lexicographic ordering with the raw name as a deterministic
// tiebreak. Stands in for locale collation; the insurer directory is ASCII.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Stable total order over the record set using the selected key; ties keep
/// their input relative order so re-renders stay deterministic.
pub fn sort_records(records: &[ProviderRecord], key: OrderingKey) -> Vec<ProviderRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare(a, b, key));
    sorted
}

/// First element of the stable sort over an already-filtered record set, or
/// `None` when the input is empty. A record excluded by the active filter can
/// never be best because the filter runs before this selection.
pub fn select_best(records: &[ProviderRecord], key: OrderingKey) -> Option<ProviderRecord> {
    sort_records(records, key).into_iter().next()
}
