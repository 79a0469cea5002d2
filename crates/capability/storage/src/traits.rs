//! 存储接口 Trait 定义
//!
//! - DeviceStore：设备登记
//! - UserStore：手机号 → 用户 ID
//! - EmailStore：登记邮箱集合
//!
//! 所有接口返回 StorageError，使用 async_trait 支持 `Arc<dyn ...>` 动态分发。

use crate::error::StorageError;
use crate::models::{DeviceRecord, EmailRegistration, UserLookup, UserRecord};
use async_trait::async_trait;
use domain::DeviceId;

/// 设备存储接口
#[async_trait]
pub trait DeviceStore: Send + Sync {
    /// 生成新的设备 ID 并原样保存载荷。每次调用都新建，不去重。
    async fn add_device(&self, payload: serde_json::Value) -> Result<DeviceRecord, StorageError>;

    /// 查找指定设备
    async fn find_device(&self, device_id: &DeviceId)
    -> Result<Option<DeviceRecord>, StorageError>;

    /// 已登记设备数
    async fn count_devices(&self) -> Result<usize, StorageError>;
}

/// 用户存储接口
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 按手机号查找用户，不存在则创建（幂等）。
    async fn find_or_create_user(&self, mobile_number: &str) -> Result<UserLookup, StorageError>;

    /// 按手机号查找用户
    async fn find_user(&self, mobile_number: &str) -> Result<Option<UserRecord>, StorageError>;
}

/// 邮箱存储接口
#[async_trait]
pub trait EmailStore: Send + Sync {
    /// 登记邮箱；已存在时不覆盖，返回 `AlreadyExists`。
    async fn register_email(&self, email: &str) -> Result<EmailRegistration, StorageError>;

    async fn contains_email(&self, email: &str) -> Result<bool, StorageError>;
}
