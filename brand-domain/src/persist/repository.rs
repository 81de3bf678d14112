use crate::error::DomainResult;
use crate::record::{Record, ResourceRef};
use async_trait::async_trait;
use std::sync::Arc;

/// 记录仓储端口
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// 按标识查找记录，不存在返回 `None`
    async fn find_by_id<R>(&self, id: R::Id) -> DomainResult<Option<R>>
    where
        R: Record;

    /// 硬删除记录；依赖该记录的子记录按其链接规则级联删除或置空
    async fn delete<R>(&self, record: &R) -> DomainResult<()>
    where
        R: Record;

    /// 判断被引用的记录是否仍然存在
    async fn exists(&self, resource: ResourceRef) -> DomainResult<bool>;
}

#[async_trait]
impl<T> RecordRepository for Arc<T>
where
    T: RecordRepository + ?Sized,
{
    async fn find_by_id<R>(&self, id: R::Id) -> DomainResult<Option<R>>
    where
        R: Record,
    {
        (**self).find_by_id::<R>(id).await
    }

    async fn delete<R>(&self, record: &R) -> DomainResult<()>
    where
        R: Record,
    {
        (**self).delete(record).await
    }

    async fn exists(&self, resource: ResourceRef) -> DomainResult<bool> {
        (**self).exists(resource).await
    }
}
