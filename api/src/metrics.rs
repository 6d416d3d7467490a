use once_cell::sync::Lazy;
use prometheus::{
    opts, Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Registry,
    TextEncoder,
};

macro_rules! counter_vec {
    ($name:expr, $help:expr, $labels:expr) => {
        Lazy::new(|| IntCounterVec::new(opts!($name, $help), $labels).unwrap())
    };
}
macro_rules! histogram_vec {
    ($name:expr, $help:expr, $labels:expr) => {
        Lazy::new(|| {
            HistogramVec::new(HistogramOpts::new($name, $help).buckets(LATENCY_BUCKETS.to_vec()), $labels)
                .unwrap()
        })
    };
}
macro_rules! counter {
    ($name:expr, $help:expr) => {
        Lazy::new(|| IntCounter::new($name, $help).unwrap())
    };
}
macro_rules! gauge {
    ($name:expr, $help:expr) => {
        Lazy::new(|| IntGauge::new($name, $help).unwrap())
    };
}

const LATENCY_BUCKETS: [f64; 10] = [0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0];

// ── HTTP ────────────────────────────────────────────────────────────────────
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> =
    counter_vec!("http_requests_total", "Total HTTP requests", &["method", "path", "status"]);
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> =
    histogram_vec!("http_request_duration_seconds", "HTTP request latency", &["method", "path"]);
pub static HTTP_IN_FLIGHT: Lazy<IntGauge> = gauge!("http_requests_in_flight", "In-flight HTTP requests");

// ── Items ───────────────────────────────────────────────────────────────────
pub static ITEMS_CREATED: Lazy<IntCounter> = counter!("items_created_total", "Items created");
pub static ITEMS_UPDATED: Lazy<IntCounter> = counter!("items_updated_total", "Items updated");
pub static VALIDATION_REJECTIONS: Lazy<IntCounterVec> = counter_vec!(
    "validation_rejections_total",
    "Payloads rejected by validation",
    &["variant", "group"]
);
pub static VALIDATION_FAILURES: Lazy<IntCounterVec> = counter_vec!(
    "validation_failures_total",
    "Individual validation failures by code",
    &["code"]
);

pub fn register_all(r: &Registry) -> prometheus::Result<()> {
    r.register(Box::new(HTTP_REQUESTS_TOTAL.clone()))?;
    r.register(Box::new(HTTP_REQUEST_DURATION.clone()))?;
    r.register(Box::new(HTTP_IN_FLIGHT.clone()))?;
    r.register(Box::new(ITEMS_CREATED.clone()))?;
    r.register(Box::new(ITEMS_UPDATED.clone()))?;
    r.register(Box::new(VALIDATION_REJECTIONS.clone()))?;
    r.register(Box::new(VALIDATION_FAILURES.clone()))?;
    Ok(())
}

pub fn gather_metrics(r: &Registry) -> String {
    let encoder = TextEncoder::new();
    let families = r.gather();
    let mut buf = Vec::new();
    encoder.encode(&families, &mut buf).unwrap_or_default();
    String::from_utf8(buf).unwrap_or_default()
}

pub fn observe_http(method: &str, path: &str, status: u16, duration_secs: f64) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, path, &status.to_string()])
        .inc();
    HTTP_REQUEST_DURATION
        .with_label_values(&[method, path])
        .observe(duration_secs);
}

/// Count a rejected payload and each failure code it carried
pub fn observe_rejection<'a>(variant: &str, group: &str, codes: impl IntoIterator<Item = &'a str>) {
    VALIDATION_REJECTIONS
        .with_label_values(&[variant, group])
        .inc();
    for code in codes {
        VALIDATION_FAILURES.with_label_values(&[code]).inc();
    }
}
