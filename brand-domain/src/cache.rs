//! 列表查询缓存的失效通知
//!
//! 删除成功后，相关的列表查询结果需要标记为过期。缓存子系统本身不在本系统内，
//! 这里定义其接收失效信号的端口（`CacheInvalidationSink`）、一个可延迟装配的
//! 持有者（`CacheSlot`），以及用于测试与嵌入的内存实现（`InMemoryListCache`）。
//!
use crate::error::{DomainError, DomainResult};
use crate::model::{TeamId, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use serde_json::Value;
use std::sync::{Arc, Mutex, RwLock};

/// 缓存失效接收端
#[async_trait]
pub trait CacheInvalidationSink: Send + Sync {
    /// 将 (查询名, 用户, 作用域) 对应的列表缓存标记为过期
    async fn invalidate(
        &self,
        query: &str,
        actor_id: UserId,
        scope_id: Option<TeamId>,
    ) -> DomainResult<()>;
}

/// 缓存接收端的延迟装配槽
///
/// 命令在执行时才解析接收端；槽为空是合法状态。
#[derive(Clone, Default)]
pub struct CacheSlot {
    sink: Arc<RwLock<Option<Arc<dyn CacheInvalidationSink>>>>,
}

impl CacheSlot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_sink(sink: Arc<dyn CacheInvalidationSink>) -> Self {
        let slot = Self::default();
        slot.install(sink);
        slot
    }

    /// 装配（或替换）接收端，对所有克隆出的槽可见
    pub fn install(&self, sink: Arc<dyn CacheInvalidationSink>) {
        if let Ok(mut guard) = self.sink.write() {
            *guard = Some(sink);
        }
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.sink.write() {
            *guard = None;
        }
    }

    /// 解析当前接收端；锁中毒同样视为不可用
    pub fn resolve(&self) -> Option<Arc<dyn CacheInvalidationSink>> {
        self.sink.read().ok().and_then(|guard| guard.clone())
    }
}

/// 列表缓存键
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ListCacheKey {
    pub query: String,
    pub actor_id: UserId,
    pub scope_id: Option<TeamId>,
}

impl ListCacheKey {
    pub fn new(query: impl Into<String>, actor_id: UserId, scope_id: Option<TeamId>) -> Self {
        Self {
            query: query.into(),
            actor_id,
            scope_id,
        }
    }
}

/// 一次失效记录
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Invalidation {
    pub key: ListCacheKey,
    pub at: DateTime<Utc>,
}

/// 基于内存的列表缓存
#[derive(Default)]
pub struct InMemoryListCache {
    entries: DashMap<ListCacheKey, Value>,
    log: Mutex<Vec<Invalidation>>,
}

impl InMemoryListCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, key: ListCacheKey, value: Value) {
        self.entries.insert(key, value);
    }

    pub fn get(&self, key: &ListCacheKey) -> Option<Value> {
        self.entries.get(key).map(|v| v.value().clone())
    }

    /// 按发生顺序返回所有失效记录
    pub fn invalidations(&self) -> Vec<Invalidation> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl CacheInvalidationSink for InMemoryListCache {
    async fn invalidate(
        &self,
        query: &str,
        actor_id: UserId,
        scope_id: Option<TeamId>,
    ) -> DomainResult<()> {
        let key = ListCacheKey::new(query, actor_id, scope_id);
        self.entries.remove(&key);

        let mut log = self.log.lock().map_err(|e| DomainError::Cache {
            reason: e.to_string(),
        })?;
        log.push(Invalidation { key, at: Utc::now() });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn invalidate_removes_only_matching_entry() {
        let cache = InMemoryListCache::new();
        let team7 = ListCacheKey::new("brands.asset_boards.LIST", UserId::new(1), Some(TeamId::new(7)));
        let team8 = ListCacheKey::new("brands.asset_boards.LIST", UserId::new(1), Some(TeamId::new(8)));
        cache.put(team7.clone(), json!([{"id": 42}]));
        cache.put(team8.clone(), json!([{"id": 50}]));

        cache
            .invalidate("brands.asset_boards.LIST", UserId::new(1), Some(TeamId::new(7)))
            .await
            .unwrap();

        assert!(cache.get(&team7).is_none());
        assert_eq!(cache.get(&team8), Some(json!([{"id": 50}])));

        let log = cache.invalidations();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].key, team7);
    }

    #[test]
    fn slot_resolves_installed_sink_across_clones() {
        let slot = CacheSlot::empty();
        let clone = slot.clone();
        assert!(clone.resolve().is_none());

        slot.install(Arc::new(InMemoryListCache::new()));
        assert!(clone.resolve().is_some());

        clone.clear();
        assert!(slot.resolve().is_none());
    }
}
