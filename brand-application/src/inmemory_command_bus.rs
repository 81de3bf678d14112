use crate::{
    command::{CommandDescriptor, CommandInput},
    command_bus::CommandBus,
    command_handler::CommandHandler,
    context::AppContext,
    error::AppError,
    outcome::CommandOutcome,
};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;

/// 基于内存的 CommandBus 实现
/// - 以命令的逻辑名称注册处理器
/// - 同名命令只允许注册一次
#[derive(Default)]
pub struct InMemoryCommandBus {
    handlers: DashMap<&'static str, Arc<dyn CommandHandler>>,
}

impl InMemoryCommandBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册命令处理器
    pub fn register(&self, handler: Arc<dyn CommandHandler>) -> Result<(), AppError> {
        let name = handler.descriptor().name;

        match self.handlers.entry(name) {
            Entry::Occupied(_) => Err(AppError::AlreadyRegisteredCommand { command: name }),
            Entry::Vacant(slot) => {
                slot.insert(handler);
                tracing::debug!(command = name, "command handler registered");
                Ok(())
            }
        }
    }

    /// 已注册命令的描述（按名称排序），用于工具发现
    pub fn descriptors(&self) -> Vec<CommandDescriptor> {
        let mut out: Vec<CommandDescriptor> = self
            .handlers
            .iter()
            .map(|e| e.value().descriptor().clone())
            .collect();
        out.sort_by(|a, b| a.name.cmp(b.name));
        out
    }
}

#[async_trait]
impl CommandBus for InMemoryCommandBus {
    async fn dispatch(
        &self,
        ctx: &AppContext,
        name: &str,
        input: CommandInput,
    ) -> Result<CommandOutcome, AppError> {
        // 先克隆出 Arc，避免持有分片锁跨越 await
        let Some(handler) = self.handlers.get(name).map(|h| h.value().clone()) else {
            return Err(AppError::HandlerNotFound(name.to_string()));
        };

        Ok(handler.handle(ctx, input).await)
    }
}
