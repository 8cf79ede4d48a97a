use super::common::*;
use crate::comparison::domain::{FieldUpdate, ProviderId};
use crate::comparison::rank::{select_best, sort_records, OrderingKey};

#[test]
fn premium_ascending_orders_by_amount() {
    let records = vec![
        priced("tata-aig", Some(15_000), None),
        priced("digit", Some(9_000), None),
        priced("sbi", Some(12_000), None),
    ];

    let sorted = sort_records(&records, OrderingKey::PremiumAsc);
    let ids: Vec<_> = sorted.iter().map(|record| record.id.0.as_str()).collect();
    assert_eq!(ids, ["digit", "sbi", "tata-aig"]);
}

#[test]
fn missing_premium_sorts_as_zero() {
    let records = vec![
        priced("tata-aig", Some(15_000), None),
        record("digit"),
        priced("sbi", Some(12_000), None),
    ];

    let ascending = sort_records(&records, OrderingKey::PremiumAsc);
    assert_eq!(ascending[0].id, ProviderId::new("digit"), "absent sorts first ascending");

    let descending = sort_records(&records, OrderingKey::PremiumDesc);
    assert_eq!(
        descending.last().map(|record| record.id.clone()),
        Some(ProviderId::new("digit")),
        "absent sorts last descending"
    );
}

#[test]
fn net_cost_ordering_uses_the_derived_figure() {
    let records = vec![
        priced("digit", Some(12_000), Some(2_000)),
        priced("sbi", Some(11_000), Some(4_000)),
        priced("tata-aig", Some(15_000), Some(9_000)),
    ];

    let sorted = sort_records(&records, OrderingKey::NetCostAsc);
    let ids: Vec<_> = sorted.iter().map(|record| record.id.0.as_str()).collect();
    assert_eq!(ids, ["tata-aig", "sbi", "digit"]);
}

#[test]
fn name_ordering_is_caseless_lexicographic() {
    let records = vec![
        record("united-india"),
        record("bajaj-allianz"),
        record("digit"),
    ];

    let sorted = sort_records(&records, OrderingKey::ProviderName);
    let names: Vec<_> = sorted.iter().map(|record| record.display_name.as_str()).collect();
    assert_eq!(
        names,
        ["Bajaj Allianz", "Digit General Insurance", "United India"]
    );
}

#[test]
fn sorting_is_stable_for_equal_keys() {
    let records = vec![
        priced("digit", Some(12_000), None),
        priced("sbi", Some(12_000), None),
        priced("tata-aig", Some(12_000), None),
    ];

    let sorted = sort_records(&records, OrderingKey::PremiumAsc);
    let ids: Vec<_> = sorted.iter().map(|record| record.id.0.as_str()).collect();
    assert_eq!(ids, ["digit", "sbi", "tata-aig"], "ties keep input order");
}

#[test]
fn best_is_the_first_of_the_stable_sort() {
    let records = vec![
        priced("tata-aig", Some(15_000), None),
        priced("digit", Some(9_000), None),
    ];

    let best = select_best(&records, OrderingKey::PremiumAsc).expect("non-empty input");
    assert_eq!(best.id, ProviderId::new("digit"));

    let best = select_best(&records, OrderingKey::PremiumDesc).expect("non-empty input");
    assert_eq!(best.id, ProviderId::new("tata-aig"));
}

#[test]
fn best_of_empty_input_is_none() {
    assert!(select_best(&[], OrderingKey::PremiumAsc).is_none());
}

#[test]
fn every_ordering_key_has_a_label() {
    for key in OrderingKey::ordered() {
        assert!(!key.label().is_empty());
    }
}

#[test]
fn payout_ordering_ranks_higher_payouts_first_when_descending() {
    let records = vec![
        priced("digit", None, Some(2_000)),
        priced("sbi", None, Some(8_000)),
        record("tata-aig").apply(FieldUpdate::Payout(None)),
    ];

    let sorted = sort_records(&records, OrderingKey::PayoutDesc);
    let ids: Vec<_> = sorted.iter().map(|record| record.id.0.as_str()).collect();
    assert_eq!(ids, ["sbi", "digit", "tata-aig"]);
}
