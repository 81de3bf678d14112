use anyhow::Result;
use brand_application::command::CommandInput;
use brand_application::command_bus::CommandBus;
use brand_application::config::DeleteConfig;
use brand_application::context::AppContext;
use brand_application::{DeleteDeps, InMemoryCommandBus, register_delete_commands};
use brand_domain::authorization::{Action, Actor, InMemoryPolicy};
use brand_domain::cache::{CacheSlot, InMemoryListCache, ListCacheKey};
use brand_domain::model::*;
use brand_domain::persist::InMemoryRecordStore;
use brand_domain::record::{ResourceKind, ResourceRef};
use serde_json::json;
use std::sync::Arc;

fn seed(store: &InMemoryRecordStore) -> Result<()> {
    store.insert(&AssetBoard {
        id: AssetBoardId::new(42),
        name: "Q4 Campaign".to_string(),
        brand_id: BrandId::new(3),
        team_id: Some(TeamId::new(7)),
    })?;
    store.insert(&Asset {
        id: AssetId::new(5),
        name: "hero.png".to_string(),
        asset_board_id: Some(AssetBoardId::new(42)),
        file_path: Some("/files/hero.png".to_string()),
    })?;
    store.insert(&SeoBoard {
        id: SeoBoardId::new(4),
        name: "SEO".to_string(),
        brand_id: BrandId::new(3),
        team_id: Some(TeamId::new(7)),
    })?;
    store.insert(&SeoKeywordCluster {
        id: SeoKeywordClusterId::new(9),
        name: "Brand Terms".to_string(),
        seo_board_id: Some(SeoBoardId::new(4)),
    })?;
    for (id, keyword) in [(100, "brand kit"), (101, "brand guidelines")] {
        store.insert(&SeoKeyword {
            id: SeoKeywordId::new(id),
            keyword: keyword.to_string(),
            seo_board_id: SeoBoardId::new(4),
            seo_keyword_cluster_id: Some(SeoKeywordClusterId::new(9)),
            search_volume: None,
        })?;
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = DeleteConfig::from_env();
    tracing::info!(?config, "starting brand delete demo");

    let store = Arc::new(InMemoryRecordStore::new());
    seed(&store)?;

    let user = UserId::new(11);
    let policy = Arc::new(InMemoryPolicy::new());
    policy.grant(user, Action::Delete, ResourceRef::new(ResourceKind::AssetBoard, 42));
    policy.grant(user, Action::Update, ResourceRef::new(ResourceKind::SeoBoard, 4));

    let cache = Arc::new(InMemoryListCache::new());
    let deps = DeleteDeps::builder()
        .repository(store.clone())
        .authorizer(policy)
        .cache(CacheSlot::with_sink(cache.clone()))
        .config(config)
        .build();

    let bus = InMemoryCommandBus::new();
    register_delete_commands(&bus, &deps)?;

    let ctx = AppContext::builder()
        .actor(Actor::builder().user_id(user).team_id(TeamId::new(7)).build())
        .correlation_id("demo-1".to_string())
        .build();
    cache.put(
        ListCacheKey::new("brands.asset_boards.LIST", user, Some(TeamId::new(7))),
        json!([{ "id": 42, "name": "Q4 Campaign" }]),
    );

    let calls = [
        ("brands.assets.DELETE", json!({ "asset_id": 5 })),
        ("brands.asset_boards.DELETE", json!({ "asset_board_id": 42 })),
        ("brands.asset_boards.DELETE", json!({ "asset_board_id": 42 })),
        (
            "brands.seo_keyword_clusters.DELETE",
            json!({ "seo_keyword_cluster_id": 9, "confirm": true }),
        ),
    ];
    for (name, input) in calls {
        let outcome = bus.dispatch(&ctx, name, CommandInput::from(input)).await?;
        println!("{name}: {}", serde_json::to_string_pretty(&outcome)?);
    }

    println!(
        "keywords kept: {}, list invalidations: {}",
        store.count(ResourceKind::SeoKeyword)?,
        cache.invalidations().len()
    );
    Ok(())
}
