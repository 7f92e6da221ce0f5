//! Prometheus metrics for the inventory engine.
//!
//! Recording functions are safe to call before (or without) an installed
//! recorder; samples are simply dropped.
//!
//! # Example
//!
//! ```ignore
//! use inventory_engine::observability::{init_metrics, MetricsConfig};
//!
//! init_metrics(&MetricsConfig::default())?;
//! record_order_placed(3);
//! ```

use std::net::SocketAddr;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Configuration for the metrics exporter.
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Address to bind the metrics HTTP listener.
    pub listen_addr: SocketAddr,
    /// Histogram buckets for latency measurements (in seconds).
    pub latency_buckets: Vec<f64>,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 9090)),
            // 100us to 1s
            latency_buckets: vec![
                0.0001, 0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0,
            ],
        }
    }
}

impl MetricsConfig {
    /// Create a new metrics configuration with custom address.
    #[must_use]
    pub fn with_addr(addr: SocketAddr) -> Self {
        Self {
            listen_addr: addr,
            ..Default::default()
        }
    }
}

/// Initialize the Prometheus metrics exporter.
///
/// This starts an HTTP server that exposes metrics at `/metrics`.
///
/// # Errors
///
/// Returns an error if the exporter fails to start (e.g., port already in use).
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    PrometheusBuilder::new()
        .with_http_listener(config.listen_addr)
        .set_buckets(&config.latency_buckets)
        .map_err(|e| MetricsError::Configuration(e.to_string()))?
        .install()
        .map_err(|e| MetricsError::Installation(e.to_string()))?;

    tracing::info!(
        addr = %config.listen_addr,
        "Prometheus metrics exporter started"
    );

    Ok(())
}

/// Error type for metrics operations.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// Failed to configure metrics exporter.
    #[error("metrics configuration error: {0}")]
    Configuration(String),
    /// Failed to install metrics exporter.
    #[error("metrics installation error: {0}")]
    Installation(String),
}

// ============================================================================
// Order Fulfillment Metrics
// ============================================================================

/// Record a fulfilled order of `units` units.
pub fn record_order_placed(units: u32) {
    counter!("orders_placed_total").increment(1);
    counter!("units_sold_total").increment(u64::from(units));
}

/// Record a rejected order.
///
/// # Arguments
///
/// * `reason` - Rejection reason (e.g., `"insufficient_stock"`, `"validation"`)
pub fn record_order_rejection(reason: &str) {
    counter!(
        "order_rejections_total",
        "reason" => reason.to_string()
    )
    .increment(1);
}

// ============================================================================
// Catalog Metrics
// ============================================================================

/// Record a successful catalog write.
///
/// # Arguments
///
/// * `entity` - Record kind (e.g., "category", "product")
/// * `action` - Write kind (e.g., "create", "update", "delete")
pub fn record_catalog_mutation(entity: &str, action: &str) {
    counter!(
        "catalog_mutations_total",
        "entity" => entity.to_string(),
        "action" => action.to_string()
    )
    .increment(1);
}

/// Record a delete refused because the record is still referenced.
pub fn record_delete_blocked(entity: &str) {
    counter!(
        "catalog_delete_blocked_total",
        "entity" => entity.to_string()
    )
    .increment(1);
}

// ============================================================================
// Reporting Metrics
// ============================================================================

/// Record a dashboard computation.
///
/// # Arguments
///
/// * `products` - Products in the snapshot
/// * `orders` - Orders in the snapshot
/// * `latency_seconds` - Time to snapshot and aggregate
pub fn record_dashboard_computation(products: usize, orders: usize, latency_seconds: f64) {
    counter!("dashboard_computations_total").increment(1);
    histogram!("dashboard_latency_seconds").record(latency_seconds);
    #[allow(clippy::cast_precision_loss)]
    {
        gauge!("catalog_products").set(products as f64);
        gauge!("orders_recorded").set(orders as f64);
    }
}

// ============================================================================
// HTTP Metrics
// ============================================================================

/// Record an HTTP request.
///
/// # Arguments
///
/// * `method` - HTTP method
/// * `status` - Response status code
/// * `latency_seconds` - Handler latency in seconds
pub fn record_http_request(method: &str, status: u16, latency_seconds: f64) {
    counter!(
        "http_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    histogram!(
        "http_request_duration_seconds",
        "method" => method.to_string()
    )
    .record(latency_seconds);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MetricsConfig::default();
        assert_eq!(config.listen_addr.port(), 9090);
        assert!(!config.latency_buckets.is_empty());
    }

    #[test]
    fn test_config_with_addr() {
        let addr: SocketAddr = "127.0.0.1:8080".parse().unwrap();
        let config = MetricsConfig::with_addr(addr);
        assert_eq!(config.listen_addr.port(), 8080);
    }

    #[test]
    fn test_latency_buckets_in_seconds() {
        let config = MetricsConfig::default();
        for bucket in &config.latency_buckets {
            assert!(*bucket <= 1.0, "Latency bucket {bucket} exceeds 1 second");
        }
    }

    #[test]
    fn test_record_order_placed() {
        // Actual metric recording requires an installed recorder
        record_order_placed(3);
        record_order_rejection("insufficient_stock");
    }

    #[test]
    fn test_record_catalog_mutation() {
        record_catalog_mutation("category", "delete");
        record_delete_blocked("category");
    }

    #[test]
    fn test_record_dashboard_and_http() {
        record_dashboard_computation(10, 4, 0.002);
        record_http_request("GET", 200, 0.001);
    }
}
