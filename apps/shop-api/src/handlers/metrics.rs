//! 进程内计数器快照。
//!
//! - GET /metrics

use api_contract::{ApiResponse, MetricsSnapshotDto};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shop_telemetry::metrics;

pub async fn get_metrics() -> Response {
    let snapshot = metrics().snapshot();
    (
        StatusCode::OK,
        Json(ApiResponse::success(MetricsSnapshotDto {
            devices_registered: snapshot.devices_registered,
            otp_requested: snapshot.otp_requested,
            users_created: snapshot.users_created,
            otp_verified: snapshot.otp_verified,
            emails_registered: snapshot.emails_registered,
            emails_rejected: snapshot.emails_rejected,
            bad_requests: snapshot.bad_requests,
        })),
    )
        .into_response()
}
