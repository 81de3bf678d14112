use super::RecordRepository;
use crate::error::{DomainError, DomainResult};
use crate::record::{Link, OnDelete, Record, ResourceKind, ResourceRef};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::RwLock;

struct StoredRow {
    payload: Value,
    links: Vec<Link>,
}

/// 基于内存的记录仓储
/// - 记录以 JSON 形式保存，并缓存其父链接
/// - 所有记录共用一把锁，删除与其级联处理在同一临界区内完成
#[derive(Default)]
pub struct InMemoryRecordStore {
    rows: RwLock<BTreeMap<ResourceRef, StoredRow>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入记录（已存在则覆盖）
    pub fn insert<R: Record>(&self, record: &R) -> DomainResult<()> {
        let row = StoredRow {
            payload: serde_json::to_value(record)?,
            links: record.links(),
        };
        self.rows.write()?.insert(record.resource(), row);
        Ok(())
    }

    /// 同步读取记录
    pub fn get<R: Record>(&self, id: R::Id) -> DomainResult<Option<R>> {
        let key = ResourceRef::new(R::KIND, id.into());
        let rows = self.rows.read()?;
        let Some(row) = rows.get(&key) else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_value(row.payload.clone())?))
    }

    /// 指定类型的记录数
    pub fn count(&self, kind: ResourceKind) -> DomainResult<usize> {
        Ok(self.rows.read()?.keys().filter(|r| r.kind == kind).count())
    }

    // 自根记录起按链接规则传播删除，返回实际删除的记录
    fn remove_cascading(
        rows: &mut BTreeMap<ResourceRef, StoredRow>,
        root: ResourceRef,
    ) -> Vec<ResourceRef> {
        let mut removed = Vec::new();
        let mut pending = vec![root];

        while let Some(target) = pending.pop() {
            if rows.remove(&target).is_none() {
                continue;
            }
            removed.push(target);

            for (child, StoredRow { payload, links }) in rows.iter_mut() {
                let mut cascade = false;
                links.retain(|link| {
                    if link.target != target {
                        return true;
                    }
                    match link.on_delete {
                        OnDelete::Cascade => {
                            cascade = true;
                            true
                        }
                        OnDelete::SetNull => {
                            if let Some(fields) = payload.as_object_mut() {
                                fields.insert(link.field.to_string(), Value::Null);
                            }
                            false
                        }
                    }
                });
                if cascade {
                    pending.push(*child);
                }
            }
        }

        removed
    }
}

#[async_trait]
impl RecordRepository for InMemoryRecordStore {
    async fn find_by_id<R>(&self, id: R::Id) -> DomainResult<Option<R>>
    where
        R: Record,
    {
        self.get::<R>(id)
    }

    async fn delete<R>(&self, record: &R) -> DomainResult<()>
    where
        R: Record,
    {
        let root = record.resource();
        let mut rows = self.rows.write()?;
        if !rows.contains_key(&root) {
            return Err(DomainError::NotFound {
                reason: root.to_string(),
            });
        }
        Self::remove_cascading(&mut rows, root);
        Ok(())
    }

    async fn exists(&self, resource: ResourceRef) -> DomainResult<bool> {
        Ok(self.rows.read()?.contains_key(&resource))
    }
}
