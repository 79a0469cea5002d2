//! 请求体解析
//!
//! 将 axum 的 JSON 提取失败转换为统一的 400 响应，而不是框架默认的纯文本。

use crate::utils::response::bad_request_error;
use axum::{Json, extract::rejection::JsonRejection, response::Response};

pub fn parse_json<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "rejected request body");
            Err(bad_request_error(rejection.body_text()))
        }
    }
}
