//! 输入/输出点内存存储实现（只读固定数据）

use crate::error::StorageError;
use crate::models::IoPointRecord;
use crate::traits::IoPointStore;

/// 输入/输出点内存存储。
pub struct InMemoryIoPointStore {
    inputs: Vec<IoPointRecord>,
    outputs: Vec<IoPointRecord>,
}

impl InMemoryIoPointStore {
    pub fn new(inputs: Vec<IoPointRecord>, outputs: Vec<IoPointRecord>) -> Self {
        Self { inputs, outputs }
    }
}

#[async_trait::async_trait]
impl IoPointStore for InMemoryIoPointStore {
    async fn list_inputs(&self) -> Result<Vec<IoPointRecord>, StorageError> {
        Ok(self.inputs.clone())
    }

    async fn find_input(&self, id: &str) -> Result<Option<IoPointRecord>, StorageError> {
        Ok(self.inputs.iter().find(|item| item.point_id == id).cloned())
    }

    async fn list_outputs(&self) -> Result<Vec<IoPointRecord>, StorageError> {
        Ok(self.outputs.clone())
    }

    async fn find_output(&self, id: &str) -> Result<Option<IoPointRecord>, StorageError> {
        Ok(self
            .outputs
            .iter()
            .find(|item| item.point_id == id)
            .cloned())
    }
}
