use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Configured fallbacks for scoring requests that leave a knob unset.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScoringDefaults {
    pub(crate) preview_limit: usize,
}
