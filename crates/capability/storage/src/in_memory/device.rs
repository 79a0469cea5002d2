//! 设备内存存储实现
//!
//! 功能：
//! - 顺序生成 `device_<n>`
//! - 原样保存提交的 JSON 载荷

use crate::error::StorageError;
use crate::models::DeviceRecord;
use crate::traits::DeviceStore;
use domain::{DEVICE_ID_PREFIX, DeviceId, IdSequence};
use std::collections::HashMap;
use std::sync::RwLock;

struct DeviceTable {
    devices: HashMap<DeviceId, serde_json::Value>,
    sequence: IdSequence,
}

/// 设备内存存储
///
/// 使用 RwLock 同时保护映射与计数器。
pub struct InMemoryDeviceStore {
    inner: RwLock<DeviceTable>,
}

impl InMemoryDeviceStore {
    /// 创建新的设备存储，计数器从 1 开始
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(DeviceTable {
                devices: HashMap::new(),
                sequence: IdSequence::new(DEVICE_ID_PREFIX),
            }),
        }
    }
}

impl Default for InMemoryDeviceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl DeviceStore for InMemoryDeviceStore {
    async fn add_device(&self, payload: serde_json::Value) -> Result<DeviceRecord, StorageError> {
        let mut table = self.inner.write().map_err(|_| StorageError::lock_failed())?;
        let device_id = table.sequence.next_device_id();
        table.devices.insert(device_id.clone(), payload.clone());
        Ok(DeviceRecord { device_id, payload })
    }

    async fn find_device(
        &self,
        device_id: &DeviceId,
    ) -> Result<Option<DeviceRecord>, StorageError> {
        let table = self.inner.read().map_err(|_| StorageError::lock_failed())?;
        Ok(table.devices.get(device_id).map(|payload| DeviceRecord {
            device_id: device_id.clone(),
            payload: payload.clone(),
        }))
    }

    async fn count_devices(&self) -> Result<usize, StorageError> {
        let table = self.inner.read().map_err(|_| StorageError::lock_failed())?;
        Ok(table.devices.len())
    }
}
