//! Application state for the HTTP server.

use std::sync::Arc;

use crate::data::Datasets;
use crate::rules::RiskRuleConfig;
use crate::services::ReportService;

/// Shared application state passed to all handlers.
///
/// Everything inside is immutable after startup, so clones are cheap and
/// handlers never contend.
#[derive(Clone)]
pub struct AppState {
    pub datasets: Arc<Datasets>,
    pub reports: ReportService,
}

impl AppState {
    pub fn new(datasets: Arc<Datasets>, risk_rules: RiskRuleConfig) -> Self {
        let reports = ReportService::new(Arc::clone(&datasets), risk_rules);
        Self { datasets, reports }
    }
}
