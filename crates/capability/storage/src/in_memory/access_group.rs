//! 访问组内存存储实现
//!
//! 按名查找服务于持卡人挂接路由（请求体按组名引用）。

use std::sync::Arc;

use crate::error::StorageError;
use crate::models::{AccessGroupRecord, AccessGroupUpdate};
use crate::overlay::{Overlay, load_collection, save_collection};
use crate::traits::AccessGroupStore;
use domain::collections;

/// 访问组内存存储。
pub struct InMemoryAccessGroupStore {
    overlay: Arc<dyn Overlay>,
    seed: Vec<AccessGroupRecord>,
}

impl InMemoryAccessGroupStore {
    pub fn new(overlay: Arc<dyn Overlay>, seed: Vec<AccessGroupRecord>) -> Self {
        Self { overlay, seed }
    }

    fn load(&self) -> Result<Vec<AccessGroupRecord>, StorageError> {
        load_collection(self.overlay.as_ref(), collections::ACCESS_GROUPS, &self.seed)
    }
}

#[async_trait::async_trait]
impl AccessGroupStore for InMemoryAccessGroupStore {
    async fn list_access_groups(&self) -> Result<Vec<AccessGroupRecord>, StorageError> {
        self.load()
    }

    async fn find_access_group(
        &self,
        id: &str,
    ) -> Result<Option<AccessGroupRecord>, StorageError> {
        let records = self.load()?;
        Ok(records.into_iter().find(|item| item.group_id == id))
    }

    async fn find_access_group_by_name(
        &self,
        name: &str,
    ) -> Result<Option<AccessGroupRecord>, StorageError> {
        let records = self.load()?;
        Ok(records.into_iter().find(|item| item.name == name))
    }

    async fn create_access_group(
        &self,
        record: AccessGroupRecord,
    ) -> Result<AccessGroupRecord, StorageError> {
        let mut records = self.load()?;
        if records.iter().any(|item| item.group_id == record.group_id) {
            return Err(StorageError::new("access group exists"));
        }
        records.push(record.clone());
        save_collection(self.overlay.as_ref(), collections::ACCESS_GROUPS, &records)?;
        Ok(record)
    }

    async fn update_access_group(
        &self,
        id: &str,
        update: AccessGroupUpdate,
    ) -> Result<Option<AccessGroupRecord>, StorageError> {
        let mut records = self.load()?;
        let record = match records.iter_mut().find(|item| item.group_id == id) {
            Some(record) => record,
            None => return Ok(None),
        };
        if let Some(name) = update.name {
            record.name = name;
        }
        if let Some(description) = update.description {
            record.description = description;
        }
        if let Some(door_ids) = update.door_ids {
            record.door_ids = door_ids;
        }
        if let Some(schedule) = update.schedule {
            record.schedule = schedule;
        }
        if let Some(members) = update.members {
            record.members = members;
        }
        if let Some(member_count) = update.member_count {
            record.member_count = member_count;
        }
        let updated = record.clone();
        save_collection(self.overlay.as_ref(), collections::ACCESS_GROUPS, &records)?;
        Ok(Some(updated))
    }
}
