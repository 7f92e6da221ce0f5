//! HTTP response envelopes.

use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::dto::{DashboardDto, OrderDto};
use crate::error::ServiceError;

/// Successful response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    /// Always true.
    pub success: bool,
    /// Human-readable outcome for writes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Payload.
    pub data: T,
}

impl<T> DataResponse<T> {
    /// Wrap a payload.
    pub const fn new(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    /// Wrap a payload with an outcome message.
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data,
        }
    }
}

/// Placed-order envelope: `{success, message, order}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPlacedResponse {
    /// Always true.
    pub success: bool,
    /// Outcome message.
    pub message: String,
    /// The created order.
    pub order: OrderDto,
}

impl OrderPlacedResponse {
    /// Wrap a freshly placed order.
    pub fn new(order: OrderDto) -> Self {
        Self {
            success: true,
            message: "Order placed successfully".to_string(),
            order,
        }
    }
}

/// Dashboard envelope: `{success, dashboardData}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    /// Always true.
    pub success: bool,
    /// Aggregated metrics.
    pub dashboard_data: DashboardDto,
}

impl DashboardResponse {
    /// Wrap computed metrics.
    pub const fn new(dashboard_data: DashboardDto) -> Self {
        Self {
            success: true,
            dashboard_data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        if self.is_internal() {
            tracing::error!(error = %self, context = ?self.context(), "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }
        (self.code().http_status(), Json(self.to_http_response())).into_response()
    }
}
