//! 受保护删除（Guarded Delete）
//!
//! 所有删除命令共用的流程，每一步都是下一步的前置条件：
//! 1. 读取并强转标识参数；无法解析时按“不存在”处理；
//! 2. 按标识查找记录，不存在返回 `<ENTITY>_NOT_FOUND`；
//! 3. 确定授权目标：记录本身（`delete`）或其父看板（`update`），父看板缺失返回 `BOARD_NOT_FOUND`；
//! 4. 授权；任何拒绝都转换为 `ACCESS_DENIED`；
//! 5. 删除前截取响应所需字段；
//! 6. 硬删除，子记录的级联由仓储负责；
//! 7. 提交后执行尽力而为的缓存失效；
//! 8. 返回包含截取字段与提示信息的成功结果。
//!
//! 处理器边界之外不会泄漏任何错误或 panic：未归类的问题统一为 `EXECUTION_ERROR`。
//!
use super::DeleteDeps;
use crate::advisory::{AdvisoryEffect, AdvisoryEffects};
use crate::command::{CommandDescriptor, CommandInput, InputSchema};
use crate::command_handler::CommandHandler;
use crate::config::DeleteConfig;
use crate::context::AppContext;
use crate::dto::Dto;
use crate::error::AppError;
use crate::outcome::CommandOutcome;
use async_trait::async_trait;
use bon::Builder;
use brand_domain::authorization::{Action, AuthorizationDecisionProvider, Decision};
use brand_domain::error::DomainError;
use brand_domain::persist::RecordRepository;
use brand_domain::record::{Record, ResourceKind, ResourceRef};
use futures_util::FutureExt;
use serde_json::{Map, Value};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::Instrument;

const CONFIRM_FIELD: &str = "confirm";

/// 删除成功时返回的截取字段
pub trait DeletedSnapshot: Dto {
    /// 用于提示信息的展示名（名称或标题）
    fn display_name(&self) -> &str;
}

/// 授权目标
pub enum DeleteTarget<R> {
    /// 记录本身即受控资源，校验 `delete`
    Itself,
    /// 记录从属于受控的父资源，校验父资源的 `update`
    Parent {
        kind: ResourceKind,
        parent_id: fn(&R) -> Option<i64>,
    },
}

/// 删除命令的参数化描述
#[derive(Builder)]
pub struct DeleteDescriptor<R, D> {
    /// 逻辑名称，如 `brands.asset_boards.DELETE`
    name: &'static str,
    description: &'static str,
    id_field: &'static str,
    id_description: &'static str,
    not_found_code: &'static str,
    not_found_message: &'static str,
    /// 提示信息中的实体名称，如 `Asset Board`
    label: &'static str,
    target: DeleteTarget<R>,
    snapshot: fn(&R) -> D,
    /// 追加在成功提示之后的说明
    success_note: Option<&'static str>,
    /// 删除后需要失效的列表查询名
    invalidates: Option<&'static str>,
    /// 是否声明可选的 `confirm` 参数
    #[builder(default)]
    confirm_parameter: bool,
}

impl<R, D> DeleteDescriptor<R, D> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    fn command_descriptor(&self) -> CommandDescriptor {
        let mut schema = InputSchema::new()
            .integer(self.id_field, self.id_description)
            .require(self.id_field);
        if self.confirm_parameter {
            schema = schema.boolean(CONFIRM_FIELD, "Bestätigt das Löschen.");
        }

        CommandDescriptor {
            name: self.name,
            description: self.description,
            input_schema: schema,
        }
    }

    fn not_found(&self) -> AppError {
        AppError::NotFound {
            code: self.not_found_code,
            message: self.not_found_message,
        }
    }

    fn success_message(&self, display_name: &str) -> String {
        let message = format!(
            "{} '{}' wurde erfolgreich gelöscht.",
            self.label, display_name
        );
        match self.success_note {
            Some(note) => format!("{message} {note}"),
            None => message,
        }
    }
}

/// 受保护删除命令
pub struct GuardedDelete<R, D, P> {
    descriptor: DeleteDescriptor<R, D>,
    command: CommandDescriptor,
    repository: Arc<P>,
    authorizer: Arc<dyn AuthorizationDecisionProvider>,
    effects: AdvisoryEffects,
    config: DeleteConfig,
}

impl<R, D, P> GuardedDelete<R, D, P>
where
    R: Record,
    D: DeletedSnapshot,
    P: RecordRepository + 'static,
{
    pub fn new(descriptor: DeleteDescriptor<R, D>, deps: &DeleteDeps<P>) -> Self {
        Self {
            command: descriptor.command_descriptor(),
            descriptor,
            repository: deps.repository.clone(),
            authorizer: deps.authorizer.clone(),
            effects: AdvisoryEffects::new(deps.cache.clone()),
            config: deps.config.clone(),
        }
    }

    /// 执行删除流程；错误由 `handle` 统一转换为失败结果
    pub async fn execute(
        &self,
        ctx: &AppContext,
        input: &CommandInput,
    ) -> Result<Map<String, Value>, AppError> {
        let d = &self.descriptor;

        let Some(id) = input.integer(d.id_field) else {
            return Err(d.not_found());
        };

        let Some(record) = self.repository.find_by_id::<R>(R::Id::from(id)).await? else {
            return Err(d.not_found());
        };

        self.authorize(ctx, &record).await?;

        if d.confirm_parameter
            && self.config.require_cluster_confirmation
            && input.flag(CONFIRM_FIELD) != Some(true)
        {
            return Err(AppError::ConfirmationRequired(
                "Bitte bestätigen Sie das Löschen mit confirm: true.",
            ));
        }

        // 删除后记录不可再用，先截取响应字段
        let snapshot = (d.snapshot)(&record);
        let message = d.success_message(snapshot.display_name());
        let mut payload = match serde_json::to_value(&snapshot).map_err(DomainError::from)? {
            Value::Object(fields) => fields,
            other => {
                return Err(AppError::Execution(format!(
                    "snapshot of {} is not an object: {other}",
                    R::KIND
                )));
            }
        };
        payload.insert("message".to_string(), Value::String(message));

        // 查找与删除之间被并发删除时，同样按“不存在”处理
        match self.repository.delete(&record).await {
            Err(DomainError::NotFound { .. }) => return Err(d.not_found()),
            other => other?,
        }

        tracing::info!(
            command = d.name,
            resource = %record.resource(),
            actor = %ctx.actor.user_id,
            "record deleted"
        );

        if let Some(query) = d.invalidates {
            self.effects
                .run([AdvisoryEffect::InvalidateList {
                    query,
                    actor_id: ctx.actor.user_id,
                    scope_id: ctx.actor.team_id,
                }])
                .await;
        }

        Ok(payload)
    }

    async fn authorize(&self, ctx: &AppContext, record: &R) -> Result<(), AppError> {
        let (target, action) = match &self.descriptor.target {
            DeleteTarget::Itself => (record.resource(), Action::Delete),
            DeleteTarget::Parent { kind, parent_id } => {
                let Some(parent) = parent_id(record).map(|id| ResourceRef::new(*kind, id)) else {
                    return Err(AppError::board_not_found());
                };
                if !self.repository.exists(parent).await? {
                    return Err(AppError::board_not_found());
                }
                (parent, Action::Update)
            }
        };

        match self.authorizer.decide(&ctx.actor, action, target).await {
            Ok(Decision::Allow) => Ok(()),
            Ok(Decision::Deny { reason }) | Err(DomainError::Authorization { reason }) => {
                Err(AppError::AccessDenied { reason })
            }
            Err(other) => Err(other.into()),
        }
    }
}

#[async_trait]
impl<R, D, P> CommandHandler for GuardedDelete<R, D, P>
where
    R: Record,
    D: DeletedSnapshot,
    P: RecordRepository + 'static,
{
    fn descriptor(&self) -> &CommandDescriptor {
        &self.command
    }

    async fn handle(&self, ctx: &AppContext, input: CommandInput) -> CommandOutcome {
        let span = tracing::debug_span!(
            "guarded_delete",
            command = self.descriptor.name,
            correlation_id = ctx.correlation_id.as_deref(),
        );

        async move {
            tracing::debug!(actor = %ctx.actor.user_id, "delete requested");

            let result = match AssertUnwindSafe(self.execute(ctx, &input))
                .catch_unwind()
                .await
            {
                Ok(result) => result,
                Err(panic) => Err(AppError::Execution(panic_message(panic))),
            };

            match result {
                Ok(payload) => CommandOutcome::Success(payload),
                Err(err) => {
                    match &err {
                        AppError::AccessDenied { reason } => {
                            tracing::warn!(actor = %ctx.actor.user_id, reason = %reason, "delete denied");
                        }
                        AppError::NotFound { code, .. } => {
                            tracing::debug!(code = *code, "delete target not found");
                        }
                        AppError::ConfirmationRequired(_) => {
                            tracing::debug!("delete awaiting confirmation");
                        }
                        other => tracing::error!(error = %other, "delete failed"),
                    }
                    err.into()
                }
            }
        }
        .instrument(span)
        .await
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    match panic.downcast::<String>() {
        Ok(message) => *message,
        Err(panic) => match panic.downcast::<&'static str>() {
            Ok(message) => (*message).to_string(),
            Err(_) => "unexpected panic".to_string(),
        },
    }
}
