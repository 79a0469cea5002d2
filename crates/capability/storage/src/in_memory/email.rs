//! 登记邮箱内存存储实现
//!
//! 邮箱按原始字符串比较，不做大小写折叠或去空格。

use crate::error::StorageError;
use crate::models::EmailRegistration;
use crate::traits::EmailStore;
use std::collections::HashSet;
use std::sync::RwLock;

/// 登记邮箱内存存储
pub struct InMemoryEmailStore {
    emails: RwLock<HashSet<String>>,
}

impl InMemoryEmailStore {
    pub fn new() -> Self {
        Self {
            emails: RwLock::new(HashSet::new()),
        }
    }
}

impl Default for InMemoryEmailStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl EmailStore for InMemoryEmailStore {
    async fn register_email(&self, email: &str) -> Result<EmailRegistration, StorageError> {
        let mut emails = self
            .emails
            .write()
            .map_err(|_| StorageError::lock_failed())?;
        if emails.insert(email.to_string()) {
            Ok(EmailRegistration::Registered)
        } else {
            Ok(EmailRegistration::AlreadyExists)
        }
    }

    async fn contains_email(&self, email: &str) -> Result<bool, StorageError> {
        Ok(self
            .emails
            .read()
            .map_err(|_| StorageError::lock_failed())?
            .contains(email))
    }
}
