use serde::Serialize;

use crate::catalog::{CoverageFlag, ProviderDirectory};
use crate::config::ComparisonConfig;

use super::domain::{reconcile, ComparisonError, FieldUpdate, ProviderId, ProviderRecord};
use super::export::{comparison_csv, ExportError};
use super::filter::{filter_records, FilterCriteria};
use super::rank::{sort_records, OrderingKey};

/// Coordinator owning the whole comparison state for one interactive session:
/// the ordered provider selection (capped), the selected feature subset, the
/// active filter criteria and ordering, and the record set kept in sync with
/// the selection via reconciliation.
///
/// Derived data (the ranked view, the best option, the counters) is
/// recomputed functionally from the owned state on every read; no derived
/// view is cached or mutated in place.
#[derive(Debug)]
pub struct ComparisonSession {
    config: ComparisonConfig,
    directory: ProviderDirectory,
    selected: Vec<ProviderId>,
    selected_features: Vec<CoverageFlag>,
    criteria: FilterCriteria,
    ordering: OrderingKey,
    records: Vec<ProviderRecord>,
}

impl ComparisonSession {
    pub fn new(config: ComparisonConfig) -> Self {
        Self::with_directory(config, ProviderDirectory::standard())
    }

    pub fn with_directory(config: ComparisonConfig, directory: ProviderDirectory) -> Self {
        Self {
            config,
            directory,
            selected: Vec::new(),
            selected_features: Vec::new(),
            criteria: FilterCriteria::default(),
            ordering: OrderingKey::PremiumAsc,
            records: Vec::new(),
        }
    }

    /// Add the provider if absent and under the cap, remove it if present.
    /// Returns `false` when an add is rejected at the cap; the selection is
    /// left unchanged in that case.
    pub fn toggle_provider(&mut self, id: ProviderId) -> bool {
        if let Some(position) = self.selected.iter().position(|selected| selected == &id) {
            self.selected.remove(position);
        } else if self.selected.len() >= self.config.max_providers {
            tracing::debug!(
                provider = %id,
                cap = self.config.max_providers,
                "selection cap reached, ignoring add"
            );
            return false;
        } else {
            self.selected.push(id);
        }

        self.records = reconcile(&self.records, &self.selected, &self.directory);
        true
    }

    /// Add or remove a coverage feature from the comparison's feature subset.
    pub fn toggle_feature(&mut self, flag: CoverageFlag) {
        if let Some(position) = self
            .selected_features
            .iter()
            .position(|selected| selected == &flag)
        {
            self.selected_features.remove(position);
        } else {
            self.selected_features.push(flag);
        }
    }

    pub fn set_flag_criterion(&mut self, flag: CoverageFlag, wanted: Option<bool>) {
        self.criteria.require(flag, wanted);
    }

    pub fn set_budget_ceiling(&mut self, ceiling: Option<u32>) {
        self.criteria.set_max_budget(ceiling);
    }

    pub fn set_ordering(&mut self, ordering: OrderingKey) {
        self.ordering = ordering;
    }

    /// Apply a field update to the record of an actively selected provider.
    pub fn update_record(
        &mut self,
        id: &ProviderId,
        update: FieldUpdate,
    ) -> Result<(), ComparisonError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| &record.id == id)
            .ok_or_else(|| ComparisonError::ProviderNotSelected(id.clone()))?;

        *record = record.clone().apply(update);
        Ok(())
    }

    pub fn selected_providers(&self) -> &[ProviderId] {
        &self.selected
    }

    pub fn selected_features(&self) -> &[CoverageFlag] {
        &self.selected_features
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn ordering(&self) -> OrderingKey {
        self.ordering
    }

    pub fn record(&self, id: &ProviderId) -> Option<&ProviderRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    /// The current derived view: filtered then stably sorted records, the
    /// best option drawn from that filtered set, and the session counters.
    pub fn view(&self) -> ComparisonView {
        let matching = filter_records(&self.records, &self.criteria);
        let ranked = sort_records(&matching, self.ordering);
        let best = ranked.first().cloned();

        ComparisonView {
            selected_providers: self.selected.len(),
            selected_features: self.selected_features.len(),
            matching: ranked.len(),
            best,
            ranked,
        }
    }

    /// Render the current derived view as delimited text for download. Owns
    /// no state of its own; two calls without an intervening update produce
    /// identical output.
    pub fn export_csv(&self) -> Result<String, ExportError> {
        comparison_csv(&self.view().ranked, &self.selected_features)
    }
}

/// Read-only snapshot handed to presentation collaborators.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonView {
    pub selected_providers: usize,
    pub selected_features: usize,
    pub matching: usize,
    pub best: Option<ProviderRecord>,
    pub ranked: Vec<ProviderRecord>,
}
