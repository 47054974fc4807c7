//! 存储能力
//!
//! 两层结构：
//! - Overlay：按集合键存取序列化 JSON 数组的键值层（可注入替换）
//! - 实体存储：按实体划分的异步接口 + 内存实现
//!
//! 可变集合（持卡人、门、访问组、事件、摄像机）走 Overlay，
//! 首次读取时从固定数据播种；其余实体只读固定数据。

pub mod error;
pub mod in_memory;
pub mod models;
pub mod overlay;
pub mod traits;

pub use error::StorageError;
pub use in_memory::*;
pub use models::*;
pub use overlay::{MemoryOverlay, Overlay};
pub use traits::*;
