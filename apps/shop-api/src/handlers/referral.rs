//! 邮箱登记 handler
//!
//! - POST /api/v2/user/email/referral
//!
//! 首次登记返回 status 1；之后同一邮箱一律返回 status 0 与 "Email exists"（HTTP 200）。

use crate::AppState;
use crate::utils::parse_json;
use crate::utils::response::identity_error;
use api_contract::{
    ApiResponse, EmailReferralRequest, MESSAGE_EMAIL_ADDED, MESSAGE_EMAIL_EXISTS, MessageDto,
    field_text,
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shop_identity::require_field;
use shop_storage::EmailRegistration;
use shop_telemetry::record_email_referral;

pub async fn email_referral(
    State(state): State<AppState>,
    body: Result<Json<EmailReferralRequest>, JsonRejection>,
) -> Response {
    let req = match parse_json(body) {
        Ok(req) => req,
        Err(response) => return response,
    };
    let email = match require_field(req.email, "email") {
        Ok(value) => value,
        Err(err) => return identity_error(err),
    };

    match state.identity.register_email(&field_text(&email)).await {
        Ok(registration) => {
            record_email_referral(registration.is_registered());
            let response = match registration {
                EmailRegistration::Registered => {
                    tracing::info!("referral email registered");
                    ApiResponse::success(MessageDto::new(MESSAGE_EMAIL_ADDED))
                }
                EmailRegistration::AlreadyExists => {
                    tracing::info!("referral email already registered");
                    ApiResponse::rejected(MessageDto::new(MESSAGE_EMAIL_EXISTS))
                }
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => identity_error(err),
    }
}
