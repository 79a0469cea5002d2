//! OTP 下发与校验。
//!
//! 当前只有模拟实现：不生成、不发送，任何 OTP 都视为通过。

use crate::IdentityError;
use async_trait::async_trait;

/// OTP 校验结论。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpDecision {
    Accepted,
    Rejected,
}

/// OTP 提供方，便于替换为真实短信通道。
#[async_trait]
pub trait OtpProvider: Send + Sync {
    /// 向手机号下发 OTP。
    async fn send(&self, mobile_number: &str) -> Result<(), IdentityError>;

    /// 校验提交的 OTP。
    async fn verify(&self, otp: &str) -> Result<OtpDecision, IdentityError>;
}

/// 模拟 OTP：下发为空操作，校验恒通过。
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedOtpProvider;

#[async_trait]
impl OtpProvider for SimulatedOtpProvider {
    async fn send(&self, mobile_number: &str) -> Result<(), IdentityError> {
        tracing::debug!(mobile_number, "simulated otp send");
        Ok(())
    }

    async fn verify(&self, _otp: &str) -> Result<OtpDecision, IdentityError> {
        Ok(OtpDecision::Accepted)
    }
}
