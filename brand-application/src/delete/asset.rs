use super::guarded::{DeleteDescriptor, DeleteTarget, DeletedSnapshot};
use crate::dto::Dto;
use brand_domain::model::{Asset, AssetBoardId, AssetId};
use brand_domain::record::ResourceKind;
use serde::Serialize;

pub const NAME: &str = "brands.assets.DELETE";

#[derive(Debug, Serialize)]
pub struct AssetDeleted {
    pub asset_id: AssetId,
    pub asset_name: String,
    pub asset_board_id: Option<AssetBoardId>,
}

impl Dto for AssetDeleted {}

impl DeletedSnapshot for AssetDeleted {
    fn display_name(&self) -> &str {
        &self.asset_name
    }
}

fn snapshot(asset: &Asset) -> AssetDeleted {
    AssetDeleted {
        asset_id: asset.id,
        asset_name: asset.name.clone(),
        asset_board_id: asset.asset_board_id,
    }
}

/// 删除单个资产；授权以所属资产看板的 `update` 为准
pub fn descriptor() -> DeleteDescriptor<Asset, AssetDeleted> {
    DeleteDescriptor::<Asset, AssetDeleted>::builder()
        .name(NAME)
        .description(
            "Löscht ein Asset inklusive aller Versionen \
             (DELETE /brands/{brand}/assets/{asset_id}). \
             Erforderlicher Parameter: asset_id.",
        )
        .id_field("asset_id")
        .id_description("ID des zu löschenden Assets")
        .not_found_code("ASSET_NOT_FOUND")
        .not_found_message("Das Asset wurde nicht gefunden.")
        .label("Asset")
        .target(DeleteTarget::Parent {
            kind: ResourceKind::AssetBoard,
            parent_id: |asset: &Asset| asset.asset_board_id.map(i64::from),
        })
        .snapshot(snapshot)
        .build()
}
