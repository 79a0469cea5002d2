//! # Shop Storage 模块
//!
//! 身份数据（设备、用户、登记邮箱）的存储抽象层。
//!
//! ## 架构设计
//!
//! 1. **接口抽象层** (`traits.rs`)：`DeviceStore`、`UserStore`、`EmailStore` 异步 Trait
//! 2. **数据模型层** (`models.rs`)：存储记录与操作结果
//! 3. **错误处理层** (`error.rs`)：统一的存储错误类型
//! 4. **实现层** (`in_memory/`)：进程内存实现，生命周期与进程一致
//!
//! ## 并发约束
//!
//! 每个存储内部用一把 `RwLock` 同时保护映射与计数器。
//! “取号 + 插入”、“查找或创建”、“判重 + 插入”都在同一个写锁内完成，
//! 并发请求不会拿到相同的 ID，也不会在唯一性检查上产生竞争。
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use shop_storage::{DeviceStore, InMemoryDeviceStore};
//!
//! let store = InMemoryDeviceStore::new();
//! let record = store.add_device(serde_json::json!({"deviceType": "android"})).await?;
//! assert_eq!(record.device_id.as_str(), "device_1");
//! ```
//!
//! ## 不在范围内
//!
//! - 持久化：进程重启后全部数据丢失
//! - 删除与更新：记录创建后不再变更

pub mod error;
pub mod in_memory;
pub mod models;
pub mod traits;

pub use error::*;
pub use models::*;
pub use traits::*;

pub use in_memory::{InMemoryDeviceStore, InMemoryEmailStore, InMemoryUserStore};
