//! 授权（Authorization）
//!
//! 策略引擎本身不在本系统内，这里只定义其端口：
//! 给定（主体、动作、目标资源）返回允许或拒绝的决策。
//!
use crate::error::DomainResult;
use crate::model::{TeamId, UserId};
use crate::record::ResourceRef;
use async_trait::async_trait;
use bon::Builder;
use dashmap::DashSet;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// 请求主体：用户及其当前所在团队（作用域）
#[derive(Builder, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Actor {
    pub user_id: UserId,
    pub team_id: Option<TeamId>,
}

/// 被校验的动作
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    View,
    Update,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::View => "view",
            Action::Update => "update",
            Action::Delete => "delete",
        })
    }
}

/// 授权决策
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny { reason: String },
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// 授权决策提供方
///
/// - 正常的拒绝以 `Decision::Deny` 返回；
/// - 返回 `DomainError::Authorization` 同样视为拒绝，其他错误视为执行失败。
#[async_trait]
pub trait AuthorizationDecisionProvider: Send + Sync {
    async fn decide(
        &self,
        actor: &Actor,
        action: Action,
        target: ResourceRef,
    ) -> DomainResult<Decision>;
}

#[async_trait]
impl<T> AuthorizationDecisionProvider for Arc<T>
where
    T: AuthorizationDecisionProvider + ?Sized,
{
    async fn decide(
        &self,
        actor: &Actor,
        action: Action,
        target: ResourceRef,
    ) -> DomainResult<Decision> {
        (**self).decide(actor, action, target).await
    }
}

/// 基于授权表的内存策略（测试与嵌入场景）
///
/// 授权可以发给单个用户，也可以发给团队；团队授权只对当前处于该团队的请求主体生效。
#[derive(Default)]
pub struct InMemoryPolicy {
    allow_all: bool,
    grants: DashSet<(UserId, Action, ResourceRef)>,
    team_grants: DashSet<(TeamId, Action, ResourceRef)>,
}

impl InMemoryPolicy {
    /// 默认拒绝，需显式授权
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_all() -> Self {
        Self {
            allow_all: true,
            ..Self::default()
        }
    }

    pub fn grant(&self, user_id: UserId, action: Action, target: ResourceRef) {
        self.grants.insert((user_id, action, target));
    }

    pub fn revoke(&self, user_id: UserId, action: Action, target: ResourceRef) {
        self.grants.remove(&(user_id, action, target));
    }

    pub fn grant_team(&self, team_id: TeamId, action: Action, target: ResourceRef) {
        self.team_grants.insert((team_id, action, target));
    }

    pub fn revoke_team(&self, team_id: TeamId, action: Action, target: ResourceRef) {
        self.team_grants.remove(&(team_id, action, target));
    }

    fn granted(&self, actor: &Actor, action: Action, target: ResourceRef) -> bool {
        self.allow_all
            || self.grants.contains(&(actor.user_id, action, target))
            || actor
                .team_id
                .is_some_and(|team| self.team_grants.contains(&(team, action, target)))
    }
}

#[async_trait]
impl AuthorizationDecisionProvider for InMemoryPolicy {
    async fn decide(
        &self,
        actor: &Actor,
        action: Action,
        target: ResourceRef,
    ) -> DomainResult<Decision> {
        if self.granted(actor, action, target) {
            return Ok(Decision::Allow);
        }

        Ok(Decision::Deny {
            reason: format!("user {} may not {action} {target}", actor.user_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ResourceKind;

    fn actor() -> Actor {
        Actor::builder()
            .user_id(UserId::new(1))
            .team_id(TeamId::new(7))
            .build()
    }

    #[tokio::test]
    async fn denies_without_grant() {
        let policy = InMemoryPolicy::new();
        let target = ResourceRef::new(ResourceKind::AssetBoard, 42);

        let decision = policy.decide(&actor(), Action::Delete, target).await.unwrap();
        assert_eq!(
            decision,
            Decision::Deny {
                reason: "user 1 may not delete asset_board#42".into()
            }
        );
    }

    #[tokio::test]
    async fn grant_is_scoped_to_action_and_target() {
        let policy = InMemoryPolicy::new();
        let target = ResourceRef::new(ResourceKind::AssetBoard, 42);
        policy.grant(UserId::new(1), Action::Update, target);

        let update = policy.decide(&actor(), Action::Update, target).await.unwrap();
        let delete = policy.decide(&actor(), Action::Delete, target).await.unwrap();
        let other = policy
            .decide(
                &actor(),
                Action::Update,
                ResourceRef::new(ResourceKind::AssetBoard, 43),
            )
            .await
            .unwrap();

        assert!(update.is_allowed());
        assert!(!delete.is_allowed());
        assert!(!other.is_allowed());

        policy.revoke(UserId::new(1), Action::Update, target);
        let revoked = policy.decide(&actor(), Action::Update, target).await.unwrap();
        assert!(!revoked.is_allowed());
    }

    #[tokio::test]
    async fn team_grant_follows_current_team() {
        let policy = InMemoryPolicy::new();
        let target = ResourceRef::new(ResourceKind::SeoBoard, 4);
        policy.grant_team(TeamId::new(7), Action::Update, target);

        let member = policy.decide(&actor(), Action::Update, target).await.unwrap();
        let outsider = Actor::builder()
            .user_id(UserId::new(2))
            .team_id(TeamId::new(8))
            .build();
        let other_team = policy.decide(&outsider, Action::Update, target).await.unwrap();
        let no_team = Actor::builder().user_id(UserId::new(3)).build();
        let teamless = policy.decide(&no_team, Action::Update, target).await.unwrap();

        assert!(member.is_allowed());
        assert!(!other_team.is_allowed());
        assert!(!teamless.is_allowed());

        policy.revoke_team(TeamId::new(7), Action::Update, target);
        let revoked = policy.decide(&actor(), Action::Update, target).await.unwrap();
        assert!(!revoked.is_allowed());
    }

    #[tokio::test]
    async fn allow_all_allows_everything() {
        let policy = InMemoryPolicy::allow_all();
        let decision = policy
            .decide(
                &actor(),
                Action::Delete,
                ResourceRef::new(ResourceKind::Persona, 1),
            )
            .await
            .unwrap();
        assert_eq!(decision, Decision::Allow);
    }
}
