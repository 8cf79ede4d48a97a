use crate::catalog::ProviderDirectory;
use crate::comparison::domain::{FieldUpdate, ProviderId, ProviderRecord};
use crate::comparison::session::ComparisonSession;
use crate::config::ComparisonConfig;

pub(super) fn directory() -> ProviderDirectory {
    ProviderDirectory::standard()
}

pub(super) fn record(id: &str) -> ProviderRecord {
    ProviderRecord::seeded(ProviderId::new(id), &directory())
}

pub(super) fn priced(id: &str, premium: Option<u32>, payout: Option<u32>) -> ProviderRecord {
    record(id)
        .apply(FieldUpdate::Premium(premium))
        .apply(FieldUpdate::Payout(payout))
}

pub(super) fn session() -> ComparisonSession {
    ComparisonSession::new(ComparisonConfig::default())
}

pub(super) fn capped_session(max_providers: usize) -> ComparisonSession {
    ComparisonSession::new(ComparisonConfig { max_providers })
}
