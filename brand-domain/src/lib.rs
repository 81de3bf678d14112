//! 品牌管理领域层（brand-domain）
//!
//! 提供品牌内容系统中“记录”的建模与外部协作方的端口定义：
//! - 记录（`record`）：资源类型、类型化标识、记录契约与级联链接
//! - 模型（`model`）：资产/Logo/Moodboard/Persona/Guideline/SEO 等具体记录
//! - 仓储（`persist`）：按 ID 查找与删除的端口，以及带级联规则的内存实现
//! - 授权（`authorization`）：主体、动作与允许/拒绝决策
//! - 缓存（`cache`）：列表查询缓存的失效通知端口
//!
//! 本 crate 不绑定具体存储与传输，内存实现主要用于测试与嵌入场景。
//!
pub mod authorization;
pub mod cache;
pub mod error;
pub mod model;
pub mod persist;
pub mod record;

// 允许在本 crate 内部通过 ::brand_domain 自引用，
// 以便过程宏生成的路径在本 crate 中同样可以解析。
extern crate self as brand_domain;
