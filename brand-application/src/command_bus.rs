use crate::{
    command::CommandInput, context::AppContext, error::AppError, outcome::CommandOutcome,
};
use async_trait::async_trait;

/// 命令总线（Command Bus）
///
/// - 按命令的逻辑名称路由到对应处理器；
/// - 只有路由本身的问题（如未注册）以 `Err` 返回，命令的业务失败体现在 `CommandOutcome` 中。
#[async_trait]
pub trait CommandBus: Send + Sync {
    /// 分发命令到对应处理器
    ///
    /// - `ctx`：应用上下文（请求主体、关联 ID）
    /// - `name`：命令逻辑名称
    /// - `input`：命令参数
    async fn dispatch(
        &self,
        ctx: &AppContext,
        name: &str,
        input: CommandInput,
    ) -> Result<CommandOutcome, AppError>;
}
