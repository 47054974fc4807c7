//! 内存存储实现模块
//!
//! 可变集合的实现经由 Overlay 读穿/写穿（首次读取播种），
//! 只读集合直接持有固定数据切片。
//!
//! 包含以下实现：
//! - CardholderStore: InMemoryCardholderStore
//! - DoorStore: InMemoryDoorStore
//! - AccessGroupStore: InMemoryAccessGroupStore
//! - EventStore: InMemoryEventStore
//! - ControllerStore: InMemoryControllerStore
//! - IoPointStore: InMemoryIoPointStore
//! - OperatorGroupStore: InMemoryOperatorGroupStore
//! - VmsStore: InMemoryVmsStore

pub mod access_group;
pub mod cardholder;
pub mod controller;
pub mod door;
pub mod event;
pub mod io_point;
pub mod operator_group;
pub mod vms;

pub use access_group::*;
pub use cardholder::*;
pub use controller::*;
pub use door::*;
pub use event::*;
pub use io_point::*;
pub use operator_group::*;
pub use vms::*;
