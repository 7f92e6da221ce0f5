//! Observability module for metrics and logging.

mod logging;
mod metrics;

pub use logging::{LoggingError, build_filter, init_logging};
pub use metrics::{
    MetricsConfig, MetricsError, init_metrics, record_catalog_mutation,
    record_dashboard_computation, record_delete_blocked, record_http_request,
    record_order_placed, record_order_rejection,
};
