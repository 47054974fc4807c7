//! 控制器内存存储实现（只读固定数据）

use crate::error::StorageError;
use crate::models::ControllerRecord;
use crate::traits::ControllerStore;

/// 控制器内存存储。
pub struct InMemoryControllerStore {
    records: Vec<ControllerRecord>,
}

impl InMemoryControllerStore {
    pub fn new(records: Vec<ControllerRecord>) -> Self {
        Self { records }
    }
}

#[async_trait::async_trait]
impl ControllerStore for InMemoryControllerStore {
    async fn list_controllers(&self) -> Result<Vec<ControllerRecord>, StorageError> {
        Ok(self.records.clone())
    }

    async fn find_controller(&self, id: &str) -> Result<Option<ControllerRecord>, StorageError> {
        Ok(self
            .records
            .iter()
            .find(|item| item.controller_id == id)
            .cloned())
    }
}
