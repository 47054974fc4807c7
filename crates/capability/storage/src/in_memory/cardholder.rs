//! 持卡人内存存储实现
//!
//! 功能：
//! - 持卡人 CRUD 操作（只停用、不硬删除）
//! - Overlay 读穿播种 / 写穿落盘
//! - PATCH 浅合并 + modified 时间戳

use std::sync::Arc;

use crate::error::StorageError;
use crate::models::{CardholderRecord, CardholderUpdate};
use crate::overlay::{Overlay, load_collection, save_collection};
use crate::traits::CardholderStore;
use domain::collections;

/// 持卡人内存存储。
pub struct InMemoryCardholderStore {
    overlay: Arc<dyn Overlay>,
    seed: Vec<CardholderRecord>,
}

impl InMemoryCardholderStore {
    /// 创建新的持卡人存储（seed 为固定数据切片）。
    pub fn new(overlay: Arc<dyn Overlay>, seed: Vec<CardholderRecord>) -> Self {
        Self { overlay, seed }
    }
}

#[async_trait::async_trait]
impl CardholderStore for InMemoryCardholderStore {
    async fn list_cardholders(&self) -> Result<Vec<CardholderRecord>, StorageError> {
        load_collection(self.overlay.as_ref(), collections::CARDHOLDERS, &self.seed)
    }

    async fn find_cardholder(&self, id: &str) -> Result<Option<CardholderRecord>, StorageError> {
        let records = load_collection(self.overlay.as_ref(), collections::CARDHOLDERS, &self.seed)?;
        Ok(records.into_iter().find(|item| item.cardholder_id == id))
    }

    async fn create_cardholder(
        &self,
        record: CardholderRecord,
    ) -> Result<CardholderRecord, StorageError> {
        let mut records =
            load_collection(self.overlay.as_ref(), collections::CARDHOLDERS, &self.seed)?;
        if records
            .iter()
            .any(|item| item.cardholder_id == record.cardholder_id)
        {
            return Err(StorageError::new("cardholder exists"));
        }
        records.push(record.clone());
        save_collection(self.overlay.as_ref(), collections::CARDHOLDERS, &records)?;
        Ok(record)
    }

    async fn update_cardholder(
        &self,
        id: &str,
        update: CardholderUpdate,
    ) -> Result<Option<CardholderRecord>, StorageError> {
        let mut records =
            load_collection(self.overlay.as_ref(), collections::CARDHOLDERS, &self.seed)?;
        let record = match records.iter_mut().find(|item| item.cardholder_id == id) {
            Some(record) => record,
            None => return Ok(None),
        };
        if let Some(first_name) = update.first_name {
            record.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            record.last_name = last_name;
        }
        if let Some(email) = update.email {
            record.email = Some(email);
        }
        if let Some(phone) = update.phone {
            record.phone = Some(phone);
        }
        if let Some(department) = update.department {
            record.department = Some(department);
        }
        if let Some(job_title) = update.job_title {
            record.job_title = Some(job_title);
        }
        if let Some(card_number) = update.card_number {
            record.card_number = Some(card_number);
        }
        if let Some(status) = update.status {
            record.status = status;
        }
        if let Some(access_groups) = update.access_groups {
            record.access_groups = access_groups;
        }
        record.modified_ms = update.modified_ms;
        let updated = record.clone();
        save_collection(self.overlay.as_ref(), collections::CARDHOLDERS, &records)?;
        Ok(Some(updated))
    }
}
