//! Overlay 键值层
//!
//! 固定数据前面的读穿/写穿缓存，作用域为一次会话：
//! - 值为序列化后的 JSON 数组，键名见 domain::collections
//! - 首次读取未命中时由上层从固定数据播种
//! - clear 丢弃全部改动，下次读取重新播种（Refresh Data 语义）
//!
//! 单写者演示语义：RwLock 保证单次调用原子，
//! 跨调用的读-改-写竞争为 last-write-wins（单写者演示语义）。

use std::collections::HashMap;
use std::sync::RwLock;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;

/// 可注入的键值存储接口。
pub trait Overlay: Send + Sync {
    /// 读取集合的序列化内容（未播种时为 None）。
    fn read(&self, key: &str) -> Option<String>;

    /// 覆盖写入集合的序列化内容。
    fn write(&self, key: &str, payload: String);

    /// 移除单个集合。
    fn remove(&self, key: &str);

    /// 清空全部集合。
    fn clear(&self);
}

/// 内存实现。
pub struct MemoryOverlay {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryOverlay {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl Overlay for MemoryOverlay {
    fn read(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .ok()
            .and_then(|map| map.get(key).cloned())
    }

    fn write(&self, key: &str, payload: String) {
        if let Ok(mut map) = self.entries.write() {
            map.insert(key.to_string(), payload);
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut map) = self.entries.write() {
            map.remove(key);
        }
    }

    fn clear(&self) {
        if let Ok(mut map) = self.entries.write() {
            map.clear();
        }
    }
}

/// 读取集合，未播种时从种子深拷贝播种后返回。
pub(crate) fn load_collection<T>(
    overlay: &dyn Overlay,
    key: &str,
    seed: &[T],
) -> Result<Vec<T>, StorageError>
where
    T: Serialize + DeserializeOwned + Clone,
{
    if let Some(payload) = overlay.read(key) {
        let records: Vec<T> = serde_json::from_str(&payload)?;
        return Ok(records);
    }
    let records: Vec<T> = seed.to_vec();
    let payload = serde_json::to_string(&records)?;
    overlay.write(key, payload);
    Ok(records)
}

/// 覆盖写回集合。
pub(crate) fn save_collection<T>(
    overlay: &dyn Overlay,
    key: &str,
    records: &[T],
) -> Result<(), StorageError>
where
    T: Serialize,
{
    let payload = serde_json::to_string(records)?;
    overlay.write(key, payload);
    Ok(())
}
