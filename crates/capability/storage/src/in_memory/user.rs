//! 用户内存存储实现
//!
//! 手机号为唯一键；首次出现时分配 `user_<n>`，之后返回同一 ID。

use crate::error::StorageError;
use crate::models::{UserLookup, UserRecord};
use crate::traits::UserStore;
use domain::{IdSequence, USER_ID_PREFIX, UserId};
use std::collections::HashMap;
use std::sync::RwLock;

struct UserTable {
    users: HashMap<String, UserId>,
    sequence: IdSequence,
}

/// 用户内存存储
pub struct InMemoryUserStore {
    inner: RwLock<UserTable>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(UserTable {
                users: HashMap::new(),
                sequence: IdSequence::new(USER_ID_PREFIX),
            }),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_or_create_user(&self, mobile_number: &str) -> Result<UserLookup, StorageError> {
        let mut table = self.inner.write().map_err(|_| StorageError::lock_failed())?;
        if let Some(user_id) = table.users.get(mobile_number) {
            return Ok(UserLookup {
                user: UserRecord {
                    user_id: user_id.clone(),
                    mobile_number: mobile_number.to_string(),
                },
                created: false,
            });
        }
        // 计数器只在新建用户时推进
        let user_id = table.sequence.next_user_id();
        table
            .users
            .insert(mobile_number.to_string(), user_id.clone());
        Ok(UserLookup {
            user: UserRecord {
                user_id,
                mobile_number: mobile_number.to_string(),
            },
            created: true,
        })
    }

    async fn find_user(&self, mobile_number: &str) -> Result<Option<UserRecord>, StorageError> {
        let table = self.inner.read().map_err(|_| StorageError::lock_failed())?;
        Ok(table.users.get(mobile_number).map(|user_id| UserRecord {
            user_id: user_id.clone(),
            mobile_number: mobile_number.to_string(),
        }))
    }
}
