//! Exposition-format and lost-update tests for the metrics registry.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use respilot_server::obs::metrics::ServiceMetrics;

#[test]
fn counter_rows_are_labeled_and_sorted() {
    let m = ServiceMetrics::new();
    m.record_request("GET", "/health", 200);
    m.record_request("GET", "/health", 200);
    m.record_request("POST", "/simulate-crash", 500);

    let out = m.render();
    assert!(out.contains("# TYPE http_requests_total counter"));
    assert!(out.contains(r#"http_requests_total{endpoint="/health",method="GET",status="200"} 2"#));
    assert!(out
        .contains(r#"http_requests_total{endpoint="/simulate-crash",method="POST",status="500"} 1"#));

    // Deterministic snapshot: same state renders byte-identically.
    assert_eq!(out, m.render());
}

#[test]
fn histogram_buckets_are_cumulative_and_ascending() {
    let m = ServiceMetrics::new();
    m.observe_latency("GET", "/", Duration::from_millis(3));
    m.observe_latency("GET", "/", Duration::from_millis(30));
    m.observe_latency("GET", "/", Duration::from_secs(10));

    let out = m.render();
    assert!(out.contains("# TYPE http_request_duration_seconds histogram"));

    let bucket_counts: Vec<u64> = out
        .lines()
        .filter(|l| l.starts_with("http_request_duration_seconds_bucket"))
        .map(|l| l.rsplit(' ').next().unwrap().parse().unwrap())
        .collect();
    assert_eq!(bucket_counts.len(), 11); // 10 bounds + +Inf
    assert!(bucket_counts.windows(2).all(|w| w[0] <= w[1]));

    assert!(out.contains(r#"_bucket{endpoint="/",method="GET",le="0.005"} 1"#));
    assert!(out.contains(r#"_bucket{endpoint="/",method="GET",le="0.05"} 2"#));
    assert!(out.contains(r#"_bucket{endpoint="/",method="GET",le="5.0"} 2"#));
    assert!(out.contains(r#"_bucket{endpoint="/",method="GET",le="+Inf"} 3"#));
    assert!(out.contains(r#"http_request_duration_seconds_sum{endpoint="/",method="GET"} 10.033"#));
    assert!(out.contains(r#"http_request_duration_seconds_count{endpoint="/",method="GET"} 3"#));
}

#[test]
fn uptime_gauge_is_overwritten_not_accumulated() {
    let m = ServiceMetrics::new();
    m.set_uptime(1.5);
    m.set_uptime(2.25);

    let out = m.render();
    assert!(out.contains("# TYPE app_uptime_seconds gauge"));
    assert!(out.contains("app_uptime_seconds 2.25"));
}

#[test]
fn counters_are_monotonic_across_scrapes() {
    let m = ServiceMetrics::new();
    let mut last = 0;
    for i in 1..=5u64 {
        m.record_request("GET", "/health", 200);
        let out = m.render();
        let row = out
            .lines()
            .find(|l| l.starts_with("http_requests_total{"))
            .unwrap();
        let value: u64 = row.rsplit(' ').next().unwrap().parse().unwrap();
        assert!(value >= last);
        assert_eq!(value, i);
        last = value;
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_increments_are_not_lost() {
    const TASKS: u64 = 8;
    const PER_TASK: u64 = 1_000;

    let m = Arc::new(ServiceMetrics::new());
    let mut handles = Vec::new();
    for _ in 0..TASKS {
        let m = Arc::clone(&m);
        handles.push(tokio::spawn(async move {
            for _ in 0..PER_TASK {
                m.record_request("GET", "/health", 200);
                m.observe_latency("GET", "/health", Duration::from_millis(1));
            }
        }));
    }
    for h in handles {
        h.await.unwrap();
    }

    let total = TASKS * PER_TASK;
    let out = m.render();
    assert!(out.contains(&format!(
        r#"http_requests_total{{endpoint="/health",method="GET",status="200"}} {total}"#
    )));
    assert!(out.contains(&format!(
        r#"http_request_duration_seconds_count{{endpoint="/health",method="GET"}} {total}"#
    )));
}
