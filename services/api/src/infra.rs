use metrics_exporter_prometheus::PrometheusHandle;
use staffing_dashboard::dashboard::View;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_view(raw: &str) -> Result<View, String> {
    View::parse(raw).ok_or_else(|| format!("unknown view '{raw}' (expected employees or hiring)"))
}

pub(crate) fn parse_page_size(raw: &str) -> Result<usize, String> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|size| *size > 0)
        .ok_or_else(|| format!("page size must be a positive integer (got '{raw}')"))
}
