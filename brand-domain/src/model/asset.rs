use super::ids::{AssetBoardId, AssetId, AssetVersionId, BrandId, TeamId};
use brand_macros::record;
use chrono::{DateTime, Utc};

/// 资产看板：资产的容器与访问控制作用域
#[record(kind = AssetBoard, id = AssetBoardId)]
pub struct AssetBoard {
    pub name: String,
    pub brand_id: BrandId,
    pub team_id: Option<TeamId>,
}

/// 看板中的单个资产；`asset_board_id` 为空表示已脱离看板
#[record(kind = Asset, id = AssetId)]
pub struct Asset {
    pub name: String,
    #[belongs_to(AssetBoard)]
    pub asset_board_id: Option<AssetBoardId>,
    pub file_path: Option<String>,
}

/// 资产的历史版本，随资产级联删除
#[record(kind = AssetVersion, id = AssetVersionId)]
pub struct AssetVersion {
    #[belongs_to(Asset)]
    pub asset_id: AssetId,
    pub version: u32,
    pub file_path: String,
    pub created_at: DateTime<Utc>,
}
