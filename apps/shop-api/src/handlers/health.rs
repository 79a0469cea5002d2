//! 健康检查与兜底路由

use crate::utils::response::not_found_error;
use axum::{
    Json,
    response::{IntoResponse, Response},
};

/// Liveness 探针：只反映进程存活。
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true }))
}

/// 未匹配任何路由。
pub async fn not_found() -> Response {
    not_found_error()
}
