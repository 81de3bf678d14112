//! 持久化（persist）
//!
//! 定义记录仓储端口以及一个带级联规则的内存实现：
//! - 按类型与标识查找记录（`RecordRepository::find_by_id`）；
//! - 删除记录并按链接规则处理子记录（`RecordRepository::delete`）；
//! - 校验父记录是否存在（`RecordRepository::exists`）。
//!
//! 级联删除与置空由仓储负责，命令层不重复实现。
//!
mod inmemory;
mod repository;

pub use inmemory::InMemoryRecordStore;
pub use repository::RecordRepository;
