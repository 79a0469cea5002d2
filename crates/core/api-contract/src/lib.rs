//! 稳定的 DTO 与 API 响应契约。
//!
//! 字段命名保持与现有移动端一致（camelCase，个别字段如 `Access` 为首字母大写）。

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 成功状态值。
pub const STATUS_OK: u8 = 1;
/// 失败状态值（业务拒绝或请求错误）。
pub const STATUS_FAILED: u8 = 0;

/// 缺少必填字段的错误码。
pub const CODE_MISSING_FIELD: &str = "REQUEST.MISSING_FIELD";
/// 请求体无法解析的错误码。
pub const CODE_INVALID_REQUEST: &str = "INVALID.REQUEST";
/// 服务内部错误码。
pub const CODE_INTERNAL: &str = "INTERNAL.ERROR";
/// 路由不存在的错误码。
pub const CODE_NOT_FOUND: &str = "RESOURCE.NOT_FOUND";

pub const MESSAGE_DEVICE_ADDED: &str = "Successfully Added";
pub const MESSAGE_OTP_SENT: &str = "OTP sent successfully";
pub const MESSAGE_EMAIL_ADDED: &str = "Email added successfully";
pub const MESSAGE_EMAIL_EXISTS: &str = "Email exists";
pub const ACCESS_GRANTED: &str = "Granted";
pub const ACCESS_DENIED: &str = "Denied";

/// 标准 API 响应封装：`{status, data}`，失败时附带 `error`。
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

/// 失败响应的错误体。
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: STATUS_OK,
            data: Some(data),
            error: None,
        }
    }

    /// 业务层拒绝：HTTP 仍为 200，`status` 为 0 并携带 data。
    pub fn rejected(data: T) -> Self {
        Self {
            status: STATUS_FAILED,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: STATUS_FAILED,
            data: None,
            error: Some(ApiError {
                code: code.into(),
                message: message.into(),
                field: None,
            }),
        }
    }

    /// 缺少必填字段。
    pub fn missing_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            status: STATUS_FAILED,
            data: None,
            error: Some(ApiError {
                code: CODE_MISSING_FIELD.to_string(),
                message: format!("{field} required"),
                field: Some(field),
            }),
        }
    }
}

/// 仅含提示信息的 data。
#[derive(Debug, Serialize)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 设备登记响应 data。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceAddedDto {
    pub message: String,
    pub device_id: String,
}

/// 请求字段：任意 JSON 值均接受。
///
/// key 缺失为 `None`；key 存在（包括 `null`）为 `Some`。
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// 字段值的文本形式：字符串不带引号，其余值按 JSON 文本输出。
pub fn field_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// OTP 请求体。字段缺失由 handler 显式检查，以便返回字段名。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpRequest {
    #[serde(default, deserialize_with = "present")]
    pub mobile_number: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub device_id: Option<Value>,
}

/// OTP 请求响应 data。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpSentDto {
    pub message: String,
    pub user_id: String,
    /// 请求中的 deviceId 原样回显。
    pub device_id: Value,
}

/// OTP 校验请求体。
#[derive(Debug, Default, Deserialize)]
pub struct OtpVerificationRequest {
    #[serde(default, deserialize_with = "present")]
    pub otp: Option<Value>,
}

/// OTP 校验响应（不使用标准封装）。
#[derive(Debug, Serialize)]
pub struct OtpVerificationResponse {
    pub otp: String,
    #[serde(rename = "Access")]
    pub access: String,
}

/// 邮箱登记请求体。
#[derive(Debug, Default, Deserialize)]
pub struct EmailReferralRequest {
    #[serde(default, deserialize_with = "present")]
    pub email: Option<Value>,
}

/// 进程内计数器快照。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshotDto {
    pub devices_registered: u64,
    pub otp_requested: u64,
    pub users_created: u64,
    pub otp_verified: u64,
    pub emails_registered: u64,
    pub emails_rejected: u64,
    pub bad_requests: u64,
}
