//! 事件内存存储实现
//!
//! 事件流一次性生成、只读不回收；过滤与统计在 analytics 层完成。

use std::sync::Arc;

use crate::error::StorageError;
use crate::overlay::{Overlay, load_collection};
use crate::traits::EventStore;
use domain::{SecurityEvent, collections};

/// 事件内存存储。
pub struct InMemoryEventStore {
    overlay: Arc<dyn Overlay>,
    seed: Vec<SecurityEvent>,
}

impl InMemoryEventStore {
    pub fn new(overlay: Arc<dyn Overlay>, seed: Vec<SecurityEvent>) -> Self {
        Self { overlay, seed }
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    async fn list_events(&self) -> Result<Vec<SecurityEvent>, StorageError> {
        load_collection(self.overlay.as_ref(), collections::EVENTS, &self.seed)
    }
}
