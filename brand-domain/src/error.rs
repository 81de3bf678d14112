//! 领域层统一错误定义
//!
//! 聚焦序列化、仓储、授权与缓存等协作方的最小必要集合，
//! 便于在应用层统一转换为命令失败结果。
//!
use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 序列化 ---
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },

    // --- 仓储/持久化 ---
    #[error("repository error: {reason}")]
    Repository { reason: String },
    #[error("not found: {reason}")]
    NotFound { reason: String },

    // --- 协作方 ---
    #[error("authorization denied: {reason}")]
    Authorization { reason: String },
    #[error("cache error: {reason}")]
    Cache { reason: String },
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

impl<T> From<std::sync::PoisonError<T>> for DomainError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        DomainError::Repository {
            reason: format!("store lock poisoned: {err}"),
        }
    }
}
