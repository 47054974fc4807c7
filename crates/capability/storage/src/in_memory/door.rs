//! 门禁点内存存储实现

use std::sync::Arc;

use crate::error::StorageError;
use crate::models::{DoorRecord, DoorUpdate};
use crate::overlay::{Overlay, load_collection, save_collection};
use crate::traits::DoorStore;
use domain::collections;

/// 门禁点内存存储。
pub struct InMemoryDoorStore {
    overlay: Arc<dyn Overlay>,
    seed: Vec<DoorRecord>,
}

impl InMemoryDoorStore {
    pub fn new(overlay: Arc<dyn Overlay>, seed: Vec<DoorRecord>) -> Self {
        Self { overlay, seed }
    }
}

#[async_trait::async_trait]
impl DoorStore for InMemoryDoorStore {
    async fn list_doors(&self) -> Result<Vec<DoorRecord>, StorageError> {
        load_collection(self.overlay.as_ref(), collections::DOORS, &self.seed)
    }

    async fn find_door(&self, id: &str) -> Result<Option<DoorRecord>, StorageError> {
        let records = load_collection(self.overlay.as_ref(), collections::DOORS, &self.seed)?;
        Ok(records.into_iter().find(|item| item.door_id == id))
    }

    async fn update_door(
        &self,
        id: &str,
        update: DoorUpdate,
    ) -> Result<Option<DoorRecord>, StorageError> {
        let mut records = load_collection(self.overlay.as_ref(), collections::DOORS, &self.seed)?;
        let record = match records.iter_mut().find(|item| item.door_id == id) {
            Some(record) => record,
            None => return Ok(None),
        };
        if let Some(name) = update.name {
            record.name = name;
        }
        if let Some(location) = update.location {
            record.location = location;
        }
        if let Some(status) = update.status {
            record.status = status;
        }
        if let Some(schedule) = update.schedule {
            record.schedule = schedule;
        }
        let updated = record.clone();
        save_collection(self.overlay.as_ref(), collections::DOORS, &records)?;
        Ok(Some(updated))
    }
}
