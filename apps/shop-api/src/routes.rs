//! 路由定义
//!
//! 集中管理所有 API 路由，将路径映射到对应的 handlers：
//! - 健康检查：/health
//! - 计数器快照：/metrics
//! - 用户接口：/api/v2/user/*（全部为 POST，无需认证）

use super::AppState;
use super::handlers::*;
use axum::{
    Router,
    routing::{get, post},
};

pub const DEVICE_ADD_PATH: &str = "/api/v2/user/device/add";
pub const OTP_PATH: &str = "/api/v2/user/otp";
pub const OTP_VERIFICATION_PATH: &str = "/api/v2/user/otp/verification";
pub const EMAIL_REFERRAL_PATH: &str = "/api/v2/user/email/referral";
pub const HOME_WITHOUT_PRICE_PATH: &str = "/api/v2/user/home/withoutPrice";

/// 创建 API 路由
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(get_metrics))
        .route(DEVICE_ADD_PATH, post(add_device))
        .route(OTP_PATH, post(request_otp))
        .route(OTP_VERIFICATION_PATH, post(verify_otp))
        .route(EMAIL_REFERRAL_PATH, post(email_referral))
        .route(HOME_WITHOUT_PRICE_PATH, post(home_without_price))
}
