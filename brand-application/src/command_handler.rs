use crate::{
    command::{CommandDescriptor, CommandInput},
    context::AppContext,
    outcome::CommandOutcome,
};
use async_trait::async_trait;

/// 命令处理器
///
/// `handle` 不返回错误：所有失败都在处理器内部归一化为 `CommandOutcome::Failure`。
#[async_trait]
pub trait CommandHandler: Send + Sync {
    fn descriptor(&self) -> &CommandDescriptor;

    async fn handle(&self, ctx: &AppContext, input: CommandInput) -> CommandOutcome;
}
