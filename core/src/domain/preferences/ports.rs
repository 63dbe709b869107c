use crate::domain::common::entities::app_errors::CoreError;

/// String key-value storage local to one client.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: String) -> Result<(), CoreError>;

    fn delete(&self, key: &str) -> Result<(), CoreError>;
}
