use insure_compare::catalog::CoverageFlag;
use insure_compare::{
    ComparisonConfig, ComparisonSession, FieldUpdate, OrderingKey, ProviderId,
};

fn select(session: &mut ComparisonSession, id: &str) {
    assert!(session.toggle_provider(ProviderId::new(id)), "selection accepted");
}

fn set_premium(session: &mut ComparisonSession, id: &str, premium: u32) {
    session
        .update_record(&ProviderId::new(id), FieldUpdate::Premium(Some(premium)))
        .expect("provider is selected");
}

#[test]
fn full_comparison_round_trip() {
    let mut session = ComparisonSession::new(ComparisonConfig::default());

    select(&mut session, "digit");
    select(&mut session, "hdfc-ergo");
    select(&mut session, "tata-aig");
    session.toggle_feature(CoverageFlag::ZeroDepreciation);
    session.toggle_feature(CoverageFlag::RoadsideAssistance);

    set_premium(&mut session, "digit", 11_200);
    set_premium(&mut session, "hdfc-ergo", 9_800);
    set_premium(&mut session, "tata-aig", 13_400);
    session
        .update_record(&ProviderId::new("hdfc-ergo"), FieldUpdate::Payout(Some(2_000)))
        .expect("provider is selected");
    session
        .update_record(
            &ProviderId::new("tata-aig"),
            FieldUpdate::Coverage(CoverageFlag::ZeroDepreciation, false),
        )
        .expect("provider is selected");

    // Premium ascending with a zero-dep requirement excludes tata-aig.
    session.set_flag_criterion(CoverageFlag::ZeroDepreciation, Some(true));
    let view = session.view();
    assert_eq!(view.selected_providers, 3);
    assert_eq!(view.selected_features, 2);
    assert_eq!(view.matching, 2);

    let best = view.best.expect("matching records exist");
    assert_eq!(best.id, ProviderId::new("hdfc-ergo"));
    assert_eq!(best.net_cost, Some(7_800));

    // Re-rank by net cost descending without touching the records.
    session.set_ordering(OrderingKey::NetCostDesc);
    let view = session.view();
    let ids: Vec<_> = view.ranked.iter().map(|record| record.id.0.clone()).collect();
    assert_eq!(
        ids,
        ["hdfc-ergo", "digit"],
        "absent net cost ranks as zero, last when descending"
    );

    let csv = session.export_csv().expect("export renders");
    assert!(csv.starts_with("\"Attributes\",\"HDFC ERGO\",\"Digit General Insurance\""));
    assert!(csv.contains("\"Zero Depreciation\",\"YES\",\"YES\""));
}

#[test]
fn selection_cap_holds_under_churn() {
    let mut session = ComparisonSession::new(ComparisonConfig { max_providers: 3 });

    for id in ["digit", "hdfc-ergo", "tata-aig"] {
        select(&mut session, id);
    }
    assert!(!session.toggle_provider(ProviderId::new("sbi")));
    assert_eq!(session.selected_providers().len(), 3);

    // Dropping one frees a slot; the survivor keeps its mutations.
    set_premium(&mut session, "digit", 11_200);
    assert!(session.toggle_provider(ProviderId::new("tata-aig")));
    select(&mut session, "sbi");

    let record = session
        .record(&ProviderId::new("digit"))
        .expect("still selected");
    assert_eq!(record.premium, Some(11_200));
}

#[test]
fn unknown_provider_ids_compare_under_a_fallback_name() {
    let mut session = ComparisonSession::new(ComparisonConfig::default());
    select(&mut session, "not-a-real-insurer");

    let view = session.view();
    assert_eq!(view.ranked[0].display_name, "Unknown Company");
}
