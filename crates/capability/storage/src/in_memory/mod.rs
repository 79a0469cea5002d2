//! 内存存储实现模块
//!
//! 包含以下实现：
//! - DeviceStore: InMemoryDeviceStore
//! - UserStore: InMemoryUserStore
//! - EmailStore: InMemoryEmailStore

pub mod device;
pub mod email;
pub mod user;

pub use device::*;
pub use email::*;
pub use user::*;
