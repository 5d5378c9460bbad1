//! RED metrics registry for the service.
//!
//! No metrics crates are used; the counter/histogram/gauge families are
//! backed by `DashMap` and atomics. Labels are flattened into sorted key
//! vectors so label order is deterministic within a family, and rows are
//! sorted at render time so repeated scrapes serialize identically.
//! Latency observations are stored as integer microseconds to avoid
//! floating point math on the hot path; the exposition converts back to
//! seconds.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn label_key(labels: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut key: Vec<(String, String)> = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

fn label_str(key: &[(String, String)]) -> String {
    key.iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Default)]
struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    fn inc(&self, labels: &[(&str, &str)]) {
        let counter = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {name} counter");
        let mut rows: Vec<(String, u64)> = self
            .map
            .iter()
            .map(|r| (label_str(r.key()), r.value().load(Ordering::Relaxed)))
            .collect();
        rows.sort();
        for (labels, val) in rows {
            let _ = writeln!(out, "{name}{{{labels}}} {val}");
        }
    }
}

// Fixed latency buckets. Bounds are kept in microseconds internally and
// rendered with their second-scale `le` labels.
const BUCKETS_MICROS: [u64; 10] = [
    5_000, 10_000, 25_000, 50_000, 100_000, 250_000, 500_000, 1_000_000, 2_500_000, 5_000_000,
];
const BUCKET_LABELS: [&str; 10] = [
    "0.005", "0.01", "0.025", "0.05", "0.1", "0.25", "0.5", "1.0", "2.5", "5.0",
];

struct AtomicHistogram {
    count: AtomicU64,
    sum_micros: AtomicU64,
    buckets: [AtomicU64; 10],
}

impl Default for AtomicHistogram {
    fn default() -> Self {
        Self {
            count: AtomicU64::new(0),
            sum_micros: AtomicU64::new(0),
            buckets: std::array::from_fn(|_| AtomicU64::new(0)),
        }
    }
}

#[derive(Default)]
struct HistogramVec {
    map: DashMap<Vec<(String, String)>, AtomicHistogram>,
}

impl HistogramVec {
    /// Observe a duration and increment cumulative buckets.
    fn observe(&self, labels: &[(&str, &str)], duration: Duration) {
        let hist = self
            .map
            .entry(label_key(labels))
            .or_insert_with(AtomicHistogram::default);
        let micros = duration.as_micros() as u64;

        hist.count.fetch_add(1, Ordering::Relaxed);
        hist.sum_micros.fetch_add(micros, Ordering::Relaxed);

        // Cumulative buckets: increment every bucket the value falls under.
        for (i, &b) in BUCKETS_MICROS.iter().enumerate() {
            if micros <= b {
                hist.buckets[i].fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// Render in Prometheus text exposition format (unit: seconds).
    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {name} histogram");

        // Snapshot and sort rows for a deterministic serialization.
        let mut rows: Vec<(String, [u64; 10], u64, u64)> = self
            .map
            .iter()
            .map(|r| {
                let hist = r.value();
                let buckets = std::array::from_fn(|i| hist.buckets[i].load(Ordering::Relaxed));
                (
                    label_str(r.key()),
                    buckets,
                    hist.count.load(Ordering::Relaxed),
                    hist.sum_micros.load(Ordering::Relaxed),
                )
            })
            .collect();
        rows.sort();

        for (labels, buckets, count, sum_micros) in rows {
            let prefix = if labels.is_empty() {
                String::new()
            } else {
                format!("{labels},")
            };

            for (i, le) in BUCKET_LABELS.iter().enumerate() {
                let _ = writeln!(out, "{name}_bucket{{{prefix}le=\"{le}\"}} {}", buckets[i]);
            }
            let _ = writeln!(out, "{name}_bucket{{{prefix}le=\"+Inf\"}} {count}");

            let sum_seconds = sum_micros as f64 / 1_000_000.0;
            let _ = writeln!(out, "{name}_sum{{{labels}}} {sum_seconds}");
            let _ = writeln!(out, "{name}_count{{{labels}}} {count}");
        }
    }
}

/// Single scalar gauge holding an `f64` as atomic bits.
#[derive(Default)]
struct ScalarGauge {
    bits: AtomicU64,
}

impl ScalarGauge {
    fn set(&self, v: f64) {
        self.bits.store(v.to_bits(), Ordering::Relaxed);
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {name} gauge");
        let _ = writeln!(out, "{name} {}", f64::from_bits(self.bits.load(Ordering::Relaxed)));
    }
}

/// Registry of the service's request metrics.
///
/// Lives for the process lifetime inside `AppState`; every operation is an
/// in-memory mutation or read with no error conditions.
#[derive(Default)]
pub struct ServiceMetrics {
    http_requests: CounterVec,
    request_latency: HistogramVec,
    uptime_seconds: ScalarGauge,
}

impl ServiceMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one finished request by method, endpoint, and final status.
    pub fn record_request(&self, method: &str, endpoint: &str, status: u16) {
        let status = status.to_string();
        self.http_requests.inc(&[
            ("method", method),
            ("endpoint", endpoint),
            ("status", status.as_str()),
        ]);
    }

    /// Add one latency observation for the (method, endpoint) pair.
    pub fn observe_latency(&self, method: &str, endpoint: &str, elapsed: Duration) {
        self.request_latency
            .observe(&[("method", method), ("endpoint", endpoint)], elapsed);
    }

    /// Overwrite the uptime gauge.
    pub fn set_uptime(&self, seconds: f64) {
        self.uptime_seconds.set(seconds);
    }

    /// Render all families in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.http_requests.render("http_requests_total", &mut out);
        self.request_latency
            .render("http_request_duration_seconds", &mut out);
        self.uptime_seconds.render("app_uptime_seconds", &mut out);
        out
    }
}
