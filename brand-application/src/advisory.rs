//! 提交后的尽力而为副作用（advisory effects）
//!
//! 这些副作用在删除已经提交之后执行：失败、接收端缺失或接收端 panic
//! 都只记录日志，不影响命令结果。
//!
use brand_domain::cache::CacheSlot;
use brand_domain::model::{TeamId, UserId};
use futures_util::FutureExt;
use std::panic::AssertUnwindSafe;

/// 单个副作用
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdvisoryEffect {
    /// 使 (查询名, 用户, 作用域) 对应的列表缓存失效
    InvalidateList {
        query: &'static str,
        actor_id: UserId,
        scope_id: Option<TeamId>,
    },
}

/// 副作用执行器
#[derive(Clone, Default)]
pub struct AdvisoryEffects {
    cache: CacheSlot,
}

impl AdvisoryEffects {
    pub fn new(cache: CacheSlot) -> Self {
        Self { cache }
    }

    /// 依次执行副作用，永不失败
    pub async fn run(&self, effects: impl IntoIterator<Item = AdvisoryEffect>) {
        for effect in effects {
            self.run_one(effect).await;
        }
    }

    async fn run_one(&self, effect: AdvisoryEffect) {
        match effect {
            AdvisoryEffect::InvalidateList {
                query,
                actor_id,
                scope_id,
            } => {
                let Some(sink) = self.cache.resolve() else {
                    tracing::debug!(query, "cache sink unavailable, invalidation skipped");
                    return;
                };

                let result = AssertUnwindSafe(sink.invalidate(query, actor_id, scope_id))
                    .catch_unwind()
                    .await;

                match result {
                    Ok(Ok(())) => {
                        tracing::debug!(query, %actor_id, ?scope_id, "list cache invalidated");
                    }
                    Ok(Err(err)) => {
                        tracing::warn!(query, %actor_id, error = %err, "list cache invalidation failed");
                    }
                    Err(_) => {
                        tracing::warn!(query, %actor_id, "list cache invalidation panicked");
                    }
                }
            }
        }
    }
}
