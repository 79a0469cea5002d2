//! 首页（不含价格）handler
//!
//! - POST /api/v2/user/home/withoutPrice
//!
//! 不读取请求体，始终返回同一份静态目录数据。

use api_contract::ApiResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shop_catalog::home_page;

pub async fn home_without_price() -> Response {
    (StatusCode::OK, Json(ApiResponse::success(home_page()))).into_response()
}
