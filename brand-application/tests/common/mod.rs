#![allow(dead_code)]

use async_trait::async_trait;
use brand_application::config::DeleteConfig;
use brand_application::context::AppContext;
use brand_application::{DeleteDeps, InMemoryCommandBus, register_delete_commands};
use brand_domain::authorization::{
    Action, Actor, AuthorizationDecisionProvider, Decision, InMemoryPolicy,
};
use brand_domain::cache::{CacheInvalidationSink, CacheSlot, InMemoryListCache};
use brand_domain::error::{DomainError, DomainResult};
use brand_domain::model::*;
use brand_domain::persist::{InMemoryRecordStore, RecordRepository};
use brand_domain::record::{Record, ResourceRef};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const USER: i64 = 11;
pub const TEAM: i64 = 7;

/// 记录调用次数的仓储包装
#[derive(Default)]
pub struct CountingStore {
    pub inner: InMemoryRecordStore,
    pub finds: AtomicUsize,
    pub deletes: AtomicUsize,
    pub panic_on_delete: bool,
}

impl CountingStore {
    pub fn finds(&self) -> usize {
        self.finds.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordRepository for CountingStore {
    async fn find_by_id<R>(&self, id: R::Id) -> DomainResult<Option<R>>
    where
        R: Record,
    {
        self.finds.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_id::<R>(id).await
    }

    async fn delete<R>(&self, record: &R) -> DomainResult<()>
    where
        R: Record,
    {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        if self.panic_on_delete {
            panic!("storage exploded");
        }
        self.inner.delete(record).await
    }

    async fn exists(&self, resource: ResourceRef) -> DomainResult<bool> {
        self.inner.exists(resource).await
    }
}

/// 记录每次授权请求的策略包装
pub struct RecordingPolicy {
    pub inner: InMemoryPolicy,
    pub calls: std::sync::Mutex<Vec<(Action, ResourceRef)>>,
}

impl RecordingPolicy {
    pub fn new(inner: InMemoryPolicy) -> Self {
        Self {
            inner,
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(Action, ResourceRef)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthorizationDecisionProvider for RecordingPolicy {
    async fn decide(
        &self,
        actor: &Actor,
        action: Action,
        target: ResourceRef,
    ) -> DomainResult<Decision> {
        self.calls.lock().unwrap().push((action, target));
        self.inner.decide(actor, action, target).await
    }
}

/// 总是返回固定错误的授权方
pub struct ErroringPolicy(pub fn() -> DomainError);

#[async_trait]
impl AuthorizationDecisionProvider for ErroringPolicy {
    async fn decide(&self, _: &Actor, _: Action, _: ResourceRef) -> DomainResult<Decision> {
        Err((self.0)())
    }
}

pub struct PanickingPolicy;

#[async_trait]
impl AuthorizationDecisionProvider for PanickingPolicy {
    async fn decide(&self, _: &Actor, _: Action, _: ResourceRef) -> DomainResult<Decision> {
        panic!("policy engine offline")
    }
}

pub struct FailingSink;

#[async_trait]
impl CacheInvalidationSink for FailingSink {
    async fn invalidate(&self, _: &str, _: UserId, _: Option<TeamId>) -> DomainResult<()> {
        Err(DomainError::Cache {
            reason: "cache unreachable".to_string(),
        })
    }
}

pub struct Fixture {
    pub store: Arc<CountingStore>,
    pub policy: Arc<RecordingPolicy>,
    pub cache: Arc<InMemoryListCache>,
    pub bus: InMemoryCommandBus,
    pub ctx: AppContext,
}

impl Fixture {
    pub fn allow_all() -> Self {
        Self::build(InMemoryPolicy::allow_all(), DeleteConfig::default())
    }

    pub fn deny_all() -> Self {
        Self::build(InMemoryPolicy::new(), DeleteConfig::default())
    }

    pub fn build(policy: InMemoryPolicy, config: DeleteConfig) -> Self {
        let store = Arc::new(CountingStore::default());
        let policy = Arc::new(RecordingPolicy::new(policy));
        let cache = Arc::new(InMemoryListCache::new());
        let bus = InMemoryCommandBus::new();

        let deps = DeleteDeps::builder()
            .repository(store.clone())
            .authorizer(policy.clone())
            .cache(CacheSlot::with_sink(cache.clone()))
            .config(config)
            .build();
        register_delete_commands(&bus, &deps).unwrap();

        Self {
            store,
            policy,
            cache,
            bus,
            ctx: ctx(),
        }
    }

    pub fn seed<R: Record>(&self, record: &R) {
        self.store.inner.insert(record).unwrap();
    }
}

pub fn ctx() -> AppContext {
    AppContext::for_actor(
        Actor::builder()
            .user_id(UserId::new(USER))
            .team_id(TeamId::new(TEAM))
            .build(),
    )
}

/// 注册到给定依赖的总线
pub fn bus_with<P: RecordRepository + 'static>(deps: &DeleteDeps<P>) -> InMemoryCommandBus {
    let bus = InMemoryCommandBus::new();
    register_delete_commands(&bus, deps).unwrap();
    bus
}

pub fn asset_board(id: i64, name: &str) -> AssetBoard {
    AssetBoard {
        id: AssetBoardId::new(id),
        name: name.to_string(),
        brand_id: BrandId::new(3),
        team_id: Some(TeamId::new(TEAM)),
    }
}

pub fn asset(id: i64, board: Option<i64>) -> Asset {
    Asset {
        id: AssetId::new(id),
        name: format!("asset-{id}.png"),
        asset_board_id: board.map(AssetBoardId::new),
        file_path: None,
    }
}

pub fn seo_board(id: i64) -> SeoBoard {
    SeoBoard {
        id: SeoBoardId::new(id),
        name: "SEO".to_string(),
        brand_id: BrandId::new(3),
        team_id: Some(TeamId::new(TEAM)),
    }
}

pub fn cluster(id: i64, board: i64, name: &str) -> SeoKeywordCluster {
    SeoKeywordCluster {
        id: SeoKeywordClusterId::new(id),
        name: name.to_string(),
        seo_board_id: Some(SeoBoardId::new(board)),
    }
}

pub fn keyword(id: i64, board: i64, cluster: Option<i64>) -> SeoKeyword {
    SeoKeyword {
        id: SeoKeywordId::new(id),
        keyword: format!("keyword {id}"),
        seo_board_id: SeoBoardId::new(board),
        seo_keyword_cluster_id: cluster.map(SeoKeywordClusterId::new),
        search_volume: Some(1200),
    }
}

/// 每种可删除记录各写入一条，父看板齐全
pub fn seed_every_kind(fx: &Fixture) {
    fx.seed(&asset_board(42, "Q4 Campaign"));
    fx.seed(&asset(5, Some(42)));
    fx.seed(&GuidelineChapter {
        id: GuidelineChapterId::new(3),
        title: "Typografie".to_string(),
        guideline_board_id: GuidelineBoardId::new(1),
        position: 0,
    });
    fx.seed(&GuidelineEntry {
        id: GuidelineEntryId::new(31),
        title: "Headlines".to_string(),
        guideline_chapter_id: GuidelineChapterId::new(3),
        body: None,
    });
    fx.seed(&LogoBoard {
        id: LogoBoardId::new(8),
        name: "Primärlogos".to_string(),
        brand_id: BrandId::new(3),
        team_id: Some(TeamId::new(TEAM)),
    });
    fx.seed(&Moodboard {
        id: MoodboardId::new(6),
        name: "Sommer".to_string(),
        brand_id: BrandId::new(3),
        team_id: Some(TeamId::new(TEAM)),
    });
    fx.seed(&MoodboardImage {
        id: MoodboardImageId::new(60),
        title: "Strand".to_string(),
        moodboard_id: Some(MoodboardId::new(6)),
        image_url: "https://cdn.example/strand.jpg".to_string(),
    });
    fx.seed(&Persona {
        id: PersonaId::new(12),
        name: "Marketing Maria".to_string(),
        persona_board_id: PersonaBoardId::new(2),
        team_id: Some(TeamId::new(TEAM)),
        role: None,
    });
    fx.seed(&seo_board(4));
    fx.seed(&cluster(9, 4, "Brand Terms"));
}
