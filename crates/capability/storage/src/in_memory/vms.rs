//! VMS 资源内存存储实现
//!
//! 摄像机集合经由 Overlay（与原浏览器存储布局一致），
//! 其余 VMS 资源运行期从不修改，直接持有固定数据。

use std::sync::Arc;

use crate::error::StorageError;
use crate::models::{BookmarkRecord, CameraRecord, RecordingServerRecord, VmsEventRecord};
use crate::overlay::{Overlay, load_collection};
use crate::traits::VmsStore;
use domain::collections;

/// VMS 资源内存存储。
pub struct InMemoryVmsStore {
    overlay: Arc<dyn Overlay>,
    cameras_seed: Vec<CameraRecord>,
    bookmarks: Vec<BookmarkRecord>,
    vms_events: Vec<VmsEventRecord>,
    recording_servers: Vec<RecordingServerRecord>,
}

impl InMemoryVmsStore {
    pub fn new(
        overlay: Arc<dyn Overlay>,
        cameras_seed: Vec<CameraRecord>,
        bookmarks: Vec<BookmarkRecord>,
        vms_events: Vec<VmsEventRecord>,
        recording_servers: Vec<RecordingServerRecord>,
    ) -> Self {
        Self {
            overlay,
            cameras_seed,
            bookmarks,
            vms_events,
            recording_servers,
        }
    }
}

#[async_trait::async_trait]
impl VmsStore for InMemoryVmsStore {
    async fn list_cameras(&self) -> Result<Vec<CameraRecord>, StorageError> {
        load_collection(
            self.overlay.as_ref(),
            collections::CAMERAS,
            &self.cameras_seed,
        )
    }

    async fn find_camera(&self, id: &str) -> Result<Option<CameraRecord>, StorageError> {
        let records = load_collection(
            self.overlay.as_ref(),
            collections::CAMERAS,
            &self.cameras_seed,
        )?;
        Ok(records.into_iter().find(|item| item.camera_id == id))
    }

    async fn list_bookmarks(&self) -> Result<Vec<BookmarkRecord>, StorageError> {
        Ok(self.bookmarks.clone())
    }

    async fn list_vms_events(&self) -> Result<Vec<VmsEventRecord>, StorageError> {
        Ok(self.vms_events.clone())
    }

    async fn list_recording_servers(&self) -> Result<Vec<RecordingServerRecord>, StorageError> {
        Ok(self.recording_servers.clone())
    }
}
