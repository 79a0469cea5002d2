//! 身份能力：设备登记、OTP 请求/校验、邮箱登记。
//!
//! 服务只依赖存储 trait 与 [`OtpProvider`]，由启动代码注入具体实现。

mod otp;

use domain::{DeviceId, UserId};
use shop_storage::{DeviceStore, EmailRegistration, EmailStore, StorageError, UserStore};
use std::sync::Arc;

pub use otp::{OtpDecision, OtpProvider, SimulatedOtpProvider};

/// 身份相关错误。
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("{0} required")]
    MissingField(&'static str),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("otp provider error: {0}")]
    Otp(String),
}

/// 必填字段存在性检查。只检查是否提供，空字符串照常接受。
pub fn require_field<T>(value: Option<T>, field: &'static str) -> Result<T, IdentityError> {
    value.ok_or(IdentityError::MissingField(field))
}

/// OTP 请求结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpIssued {
    pub user_id: UserId,
    /// 请求中的 deviceId 原样透传，不与设备存储核对。
    pub device_id: String,
    pub user_created: bool,
}

/// OTP 校验结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpVerification {
    pub otp: String,
    pub decision: OtpDecision,
}

impl OtpVerification {
    pub fn is_accepted(&self) -> bool {
        self.decision == OtpDecision::Accepted
    }
}

/// 身份服务实现。
pub struct IdentityService {
    device_store: Arc<dyn DeviceStore>,
    user_store: Arc<dyn UserStore>,
    email_store: Arc<dyn EmailStore>,
    otp: Arc<dyn OtpProvider>,
}

impl IdentityService {
    pub fn new(
        device_store: Arc<dyn DeviceStore>,
        user_store: Arc<dyn UserStore>,
        email_store: Arc<dyn EmailStore>,
        otp: Arc<dyn OtpProvider>,
    ) -> Self {
        Self {
            device_store,
            user_store,
            email_store,
            otp,
        }
    }

    /// 登记设备：任意 JSON 原样保存，每次都分配新 ID。
    pub async fn add_device(&self, payload: serde_json::Value) -> Result<DeviceId, IdentityError> {
        let record = self.device_store.add_device(payload).await?;
        Ok(record.device_id)
    }

    /// 请求 OTP：先经 provider 下发，成功后再按手机号查找或创建用户。
    ///
    /// 下发失败时不创建用户，计数器不推进。
    pub async fn request_otp(
        &self,
        mobile_number: &str,
        device_id: &str,
    ) -> Result<OtpIssued, IdentityError> {
        self.otp.send(mobile_number).await?;
        let lookup = self.user_store.find_or_create_user(mobile_number).await?;
        Ok(OtpIssued {
            user_id: lookup.user.user_id,
            device_id: device_id.to_string(),
            user_created: lookup.created,
        })
    }

    /// 校验 OTP。
    pub async fn verify_otp(&self, otp: &str) -> Result<OtpVerification, IdentityError> {
        let decision = self.otp.verify(otp).await?;
        Ok(OtpVerification {
            otp: otp.to_string(),
            decision,
        })
    }

    /// 登记邮箱，重复提交返回 `AlreadyExists`。
    pub async fn register_email(&self, email: &str) -> Result<EmailRegistration, IdentityError> {
        Ok(self.email_store.register_email(email).await?)
    }

    pub fn device_store(&self) -> &Arc<dyn DeviceStore> {
        &self.device_store
    }
}

impl IdentityService {
    /// 全部使用内存存储与模拟 OTP。
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(shop_storage::InMemoryDeviceStore::new()),
            Arc::new(shop_storage::InMemoryUserStore::new()),
            Arc::new(shop_storage::InMemoryEmailStore::new()),
            Arc::new(SimulatedOtpProvider),
        )
    }
}
