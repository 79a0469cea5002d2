//! 设备登记 handler
//!
//! - POST /api/v2/user/device/add
//!
//! 请求体为任意 JSON，原样保存；每次调用都分配新的 `device_<n>`，不去重。

use crate::AppState;
use crate::utils::parse_json;
use crate::utils::response::identity_error;
use api_contract::{ApiResponse, DeviceAddedDto, MESSAGE_DEVICE_ADDED};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shop_telemetry::record_device_registered;

/// 登记设备
///
/// 成功返回 `{status:1, data:{message, deviceId}}`。
/// 请求体不是合法 JSON 时返回 `400 INVALID.REQUEST`。
pub async fn add_device(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Response {
    let payload = match parse_json(body) {
        Ok(payload) => payload,
        Err(response) => return response,
    };
    match state.identity.add_device(payload).await {
        Ok(device_id) => {
            record_device_registered();
            tracing::info!(device_id = %device_id, "device registered");
            let data = DeviceAddedDto {
                message: MESSAGE_DEVICE_ADDED.to_string(),
                device_id: device_id.into_string(),
            };
            (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
        }
        Err(err) => identity_error(err),
    }
}
