//! 存储接口 Trait 定义
//!
//! 定义所有资源存储的异步接口：
//! - CardholderStore：持卡人存储
//! - DoorStore：门禁点存储
//! - AccessGroupStore：访问组存储
//! - EventStore：事件存储
//! - ControllerStore / IoPointStore / OperatorGroupStore：只读 PACS 资源
//! - VmsStore：只读 VMS 资源
//!
//! 设计原则：
//! - 所有接口返回 StorageError
//! - update 对未知 ID 返回 Ok(None)，由 handler 翻译为 404
//! - 业务规则（外键存在性、去重）由 handler 组合完成
//! - 使用 async_trait 支持动态分发

use crate::error::StorageError;
use crate::models::{
    AccessGroupRecord, AccessGroupUpdate, BookmarkRecord, CameraRecord, CardholderRecord,
    CardholderUpdate, ControllerRecord, DoorRecord, DoorUpdate, IoPointRecord,
    OperatorGroupRecord, RecordingServerRecord, VmsEventRecord,
};
use async_trait::async_trait;
use domain::SecurityEvent;

/// 持卡人存储接口。
#[async_trait]
pub trait CardholderStore: Send + Sync {
    /// 列出全部持卡人
    async fn list_cardholders(&self) -> Result<Vec<CardholderRecord>, StorageError>;

    /// 查找指定持卡人
    async fn find_cardholder(&self, id: &str) -> Result<Option<CardholderRecord>, StorageError>;

    /// 创建新持卡人
    async fn create_cardholder(
        &self,
        record: CardholderRecord,
    ) -> Result<CardholderRecord, StorageError>;

    /// 部分更新持卡人（浅合并）
    async fn update_cardholder(
        &self,
        id: &str,
        update: CardholderUpdate,
    ) -> Result<Option<CardholderRecord>, StorageError>;
}

/// 门禁点存储接口。
#[async_trait]
pub trait DoorStore: Send + Sync {
    /// 列出全部门禁点
    async fn list_doors(&self) -> Result<Vec<DoorRecord>, StorageError>;

    /// 查找指定门禁点
    async fn find_door(&self, id: &str) -> Result<Option<DoorRecord>, StorageError>;

    /// 部分更新门禁点
    async fn update_door(
        &self,
        id: &str,
        update: DoorUpdate,
    ) -> Result<Option<DoorRecord>, StorageError>;
}

/// 访问组存储接口。
#[async_trait]
pub trait AccessGroupStore: Send + Sync {
    /// 列出全部访问组
    async fn list_access_groups(&self) -> Result<Vec<AccessGroupRecord>, StorageError>;

    /// 查找指定访问组
    async fn find_access_group(&self, id: &str)
    -> Result<Option<AccessGroupRecord>, StorageError>;

    /// 按名称查找访问组（持卡人挂接按名引用）
    async fn find_access_group_by_name(
        &self,
        name: &str,
    ) -> Result<Option<AccessGroupRecord>, StorageError>;

    /// 创建新访问组
    async fn create_access_group(
        &self,
        record: AccessGroupRecord,
    ) -> Result<AccessGroupRecord, StorageError>;

    /// 部分更新访问组
    async fn update_access_group(
        &self,
        id: &str,
        update: AccessGroupUpdate,
    ) -> Result<Option<AccessGroupRecord>, StorageError>;
}

/// 事件存储接口。
///
/// 事件流在数据集生成时一次性产生；过滤/统计由 analytics 层纯函数完成。
#[async_trait]
pub trait EventStore: Send + Sync {
    /// 读取全部事件（按生成顺序）
    async fn list_events(&self) -> Result<Vec<SecurityEvent>, StorageError>;
}

/// 控制器存储接口（只读）。
#[async_trait]
pub trait ControllerStore: Send + Sync {
    async fn list_controllers(&self) -> Result<Vec<ControllerRecord>, StorageError>;

    async fn find_controller(&self, id: &str) -> Result<Option<ControllerRecord>, StorageError>;
}

/// 输入/输出点存储接口（只读）。
#[async_trait]
pub trait IoPointStore: Send + Sync {
    async fn list_inputs(&self) -> Result<Vec<IoPointRecord>, StorageError>;

    async fn find_input(&self, id: &str) -> Result<Option<IoPointRecord>, StorageError>;

    async fn list_outputs(&self) -> Result<Vec<IoPointRecord>, StorageError>;

    async fn find_output(&self, id: &str) -> Result<Option<IoPointRecord>, StorageError>;
}

/// 操作员组存储接口（只读）。
#[async_trait]
pub trait OperatorGroupStore: Send + Sync {
    async fn list_operator_groups(&self) -> Result<Vec<OperatorGroupRecord>, StorageError>;

    async fn find_operator_group(
        &self,
        id: &str,
    ) -> Result<Option<OperatorGroupRecord>, StorageError>;
}

/// VMS 资源存储接口（只读）。
#[async_trait]
pub trait VmsStore: Send + Sync {
    async fn list_cameras(&self) -> Result<Vec<CameraRecord>, StorageError>;

    async fn find_camera(&self, id: &str) -> Result<Option<CameraRecord>, StorageError>;

    async fn list_bookmarks(&self) -> Result<Vec<BookmarkRecord>, StorageError>;

    async fn list_vms_events(&self) -> Result<Vec<VmsEventRecord>, StorageError>;

    async fn list_recording_servers(&self) -> Result<Vec<RecordingServerRecord>, StorageError>;
}
