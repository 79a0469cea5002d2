//! 设备与用户标识。
//!
//! 标识格式为 `<prefix>_<n>`，`n` 从 1 开始单调递增，进程内唯一。

use std::fmt;

/// 设备 ID 前缀。
pub const DEVICE_ID_PREFIX: &str = "device";
/// 用户 ID 前缀。
pub const USER_ID_PREFIX: &str = "user";

/// 设备标识（`device_<n>`）。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceId(String);

/// 用户标识（`user_<n>`）。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(String);

macro_rules! string_id {
    ($name:ident) => {
        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

string_id!(DeviceId);
string_id!(UserId);

/// 顺序 ID 生成器。
///
/// 本身不做同步；调用方须在同一把写锁内完成“取号 + 插入”，
/// 否则并发请求可能拿到相同编号。
#[derive(Debug, Clone)]
pub struct IdSequence {
    prefix: &'static str,
    next: u64,
}

impl IdSequence {
    /// 从 1 开始计数。
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix, next: 1 }
    }

    /// 下一个将被分配的编号（不消耗）。
    pub fn peek(&self) -> u64 {
        self.next
    }

    /// 分配下一个 ID 并推进计数器。
    pub fn next_id(&mut self) -> String {
        let id = format!("{}_{}", self.prefix, self.next);
        self.next += 1;
        id
    }

    pub fn next_device_id(&mut self) -> DeviceId {
        DeviceId::new(self.next_id())
    }

    pub fn next_user_id(&mut self) -> UserId {
        UserId::new(self.next_id())
    }
}

/// 从 `<prefix>_<n>` 中解析序号，格式不符返回 None。
pub fn sequence_number(id: &str) -> Option<u64> {
    let (_, n) = id.rsplit_once('_')?;
    n.parse().ok()
}
