//! 操作员组内存存储实现（只读固定数据）

use crate::error::StorageError;
use crate::models::OperatorGroupRecord;
use crate::traits::OperatorGroupStore;

/// 操作员组内存存储。
pub struct InMemoryOperatorGroupStore {
    records: Vec<OperatorGroupRecord>,
}

impl InMemoryOperatorGroupStore {
    pub fn new(records: Vec<OperatorGroupRecord>) -> Self {
        Self { records }
    }
}

#[async_trait::async_trait]
impl OperatorGroupStore for InMemoryOperatorGroupStore {
    async fn list_operator_groups(&self) -> Result<Vec<OperatorGroupRecord>, StorageError> {
        Ok(self.records.clone())
    }

    async fn find_operator_group(
        &self,
        id: &str,
    ) -> Result<Option<OperatorGroupRecord>, StorageError> {
        Ok(self
            .records
            .iter()
            .find(|item| item.group_id == id)
            .cloned())
    }
}
