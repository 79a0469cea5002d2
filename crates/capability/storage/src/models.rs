//! 存储数据模型

use domain::{DeviceId, UserId};

/// 设备记录：提交的原始 JSON 原样保存。
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceRecord {
    pub device_id: DeviceId,
    pub payload: serde_json::Value,
}

/// 用户记录：手机号唯一映射到用户 ID。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub user_id: UserId,
    pub mobile_number: String,
}

/// 查找或创建用户的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLookup {
    pub user: UserRecord,
    /// 本次调用是否新建了用户。
    pub created: bool,
}

/// 邮箱登记结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailRegistration {
    Registered,
    AlreadyExists,
}

impl EmailRegistration {
    pub fn is_registered(self) -> bool {
        matches!(self, Self::Registered)
    }
}
