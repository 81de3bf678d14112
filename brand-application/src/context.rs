use bon::Builder;
use brand_domain::authorization::Actor;

/// 应用层上下文（Application Context）
///
/// 承载一次命令调用所需的横切信息：
/// - 请求主体（`Actor`）：用户及其当前团队，用于授权与缓存作用域；
/// - 关联 ID（`correlation_id`）：用于日志追踪。
///
/// 典型用法：
/// ```rust
/// use brand_application::context::AppContext;
/// use brand_domain::authorization::Actor;
/// use brand_domain::model::{TeamId, UserId};
///
/// let ctx = AppContext::builder()
///     .actor(Actor::builder().user_id(UserId::new(1)).team_id(TeamId::new(7)).build())
///     .correlation_id("cor-123".to_string())
///     .build();
/// assert_eq!(ctx.actor.team_id, Some(TeamId::new(7)));
/// ```
#[derive(Builder, Clone, Debug)]
pub struct AppContext {
    /// 请求主体
    pub actor: Actor,
    /// 关联 ID（可选）
    pub correlation_id: Option<String>,
}

impl AppContext {
    pub fn for_actor(actor: Actor) -> Self {
        Self {
            actor,
            correlation_id: None,
        }
    }
}
