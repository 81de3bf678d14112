use super::guarded::{DeleteDescriptor, DeleteTarget, DeletedSnapshot};
use crate::dto::Dto;
use brand_domain::model::{AssetBoard, AssetBoardId, BrandId};
use serde::Serialize;

pub const NAME: &str = "brands.asset_boards.DELETE";
pub const LIST_QUERY: &str = "brands.asset_boards.LIST";

#[derive(Debug, Serialize)]
pub struct AssetBoardDeleted {
    pub asset_board_id: AssetBoardId,
    pub asset_board_name: String,
    pub brand_id: BrandId,
}

impl Dto for AssetBoardDeleted {}

impl DeletedSnapshot for AssetBoardDeleted {
    fn display_name(&self) -> &str {
        &self.asset_board_name
    }
}

fn snapshot(board: &AssetBoard) -> AssetBoardDeleted {
    AssetBoardDeleted {
        asset_board_id: board.id,
        asset_board_name: board.name.clone(),
        brand_id: board.brand_id,
    }
}

/// 删除资产看板；看板内的资产及其版本由仓储级联删除
pub fn descriptor() -> DeleteDescriptor<AssetBoard, AssetBoardDeleted> {
    DeleteDescriptor::<AssetBoard, AssetBoardDeleted>::builder()
        .name(NAME)
        .description(
            "Löscht ein Asset Board inklusive aller enthaltenen Assets \
             (DELETE /brands/{brand}/asset-boards/{asset_board_id}). \
             Erforderlicher Parameter: asset_board_id.",
        )
        .id_field("asset_board_id")
        .id_description("ID des zu löschenden Asset Boards")
        .not_found_code("ASSET_BOARD_NOT_FOUND")
        .not_found_message("Das Asset Board wurde nicht gefunden.")
        .label("Asset Board")
        .target(DeleteTarget::Itself)
        .snapshot(snapshot)
        .invalidates(LIST_QUERY)
        .build()
}
