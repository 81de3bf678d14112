//! 品牌实体的删除命令
//!
//! 八个命令共享 [`GuardedDelete`] 流程，各自只提供一个 [`DeleteDescriptor`]：
//! 逻辑名称、标识参数、授权目标以及删除前截取的响应字段。
//!
mod guarded;

pub mod asset;
pub mod asset_board;
pub mod guideline_chapter;
pub mod guideline_entry;
pub mod logo_board;
pub mod moodboard_image;
pub mod persona;
pub mod seo_keyword_cluster;

pub use guarded::{DeleteDescriptor, DeleteTarget, DeletedSnapshot, GuardedDelete};

use crate::config::DeleteConfig;
use crate::error::AppError;
use crate::inmemory_command_bus::InMemoryCommandBus;
use bon::Builder;
use brand_domain::authorization::AuthorizationDecisionProvider;
use brand_domain::cache::CacheSlot;
use brand_domain::persist::RecordRepository;
use std::sync::Arc;

/// 删除命令的依赖
///
/// 缓存槽可以为空；此时缓存失效会被跳过，删除本身不受影响。
#[derive(Builder)]
pub struct DeleteDeps<P> {
    pub(crate) repository: Arc<P>,
    pub(crate) authorizer: Arc<dyn AuthorizationDecisionProvider>,
    #[builder(default)]
    pub(crate) cache: CacheSlot,
    #[builder(default)]
    pub(crate) config: DeleteConfig,
}

impl<P> Clone for DeleteDeps<P> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            authorizer: self.authorizer.clone(),
            cache: self.cache.clone(),
            config: self.config.clone(),
        }
    }
}

/// 将全部删除命令注册到命令总线
pub fn register_delete_commands<P>(
    bus: &InMemoryCommandBus,
    deps: &DeleteDeps<P>,
) -> Result<(), AppError>
where
    P: RecordRepository + 'static,
{
    bus.register(Arc::new(GuardedDelete::new(asset_board::descriptor(), deps)))?;
    bus.register(Arc::new(GuardedDelete::new(asset::descriptor(), deps)))?;
    bus.register(Arc::new(GuardedDelete::new(guideline_chapter::descriptor(), deps)))?;
    bus.register(Arc::new(GuardedDelete::new(guideline_entry::descriptor(), deps)))?;
    bus.register(Arc::new(GuardedDelete::new(logo_board::descriptor(), deps)))?;
    bus.register(Arc::new(GuardedDelete::new(moodboard_image::descriptor(), deps)))?;
    bus.register(Arc::new(GuardedDelete::new(persona::descriptor(), deps)))?;
    bus.register(Arc::new(GuardedDelete::new(seo_keyword_cluster::descriptor(), deps)))?;

    tracing::debug!("delete commands registered");
    Ok(())
}
