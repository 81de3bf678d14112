//! 品牌管理应用层（brand-application）
//!
//! 以“命令”为单位对外提供写操作：每个命令拥有稳定的逻辑名称
//! （如 `brands.asset_boards.DELETE`）、描述与输入结构，由命令总线按名称路由。
//! 所有删除命令都由同一个受保护删除流程（`delete::GuardedDelete`）实例化而来。
//!
pub mod advisory;
pub mod command;
pub mod command_bus;
pub mod command_handler;
pub mod config;
pub mod context;
pub mod delete;
pub mod dto;
pub mod error;
pub mod inmemory_command_bus;
pub mod outcome;

pub use delete::{DeleteDeps, register_delete_commands};
pub use inmemory_command_bus::InMemoryCommandBus;
