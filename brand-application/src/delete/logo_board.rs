use super::guarded::{DeleteDescriptor, DeleteTarget, DeletedSnapshot};
use crate::dto::Dto;
use brand_domain::model::{BrandId, LogoBoard, LogoBoardId};
use serde::Serialize;

pub const NAME: &str = "brands.logo_boards.DELETE";
pub const LIST_QUERY: &str = "brands.logo_boards.LIST";

#[derive(Debug, Serialize)]
pub struct LogoBoardDeleted {
    pub logo_board_id: LogoBoardId,
    pub logo_board_name: String,
    pub brand_id: BrandId,
}

impl Dto for LogoBoardDeleted {}

impl DeletedSnapshot for LogoBoardDeleted {
    fn display_name(&self) -> &str {
        &self.logo_board_name
    }
}

fn snapshot(board: &LogoBoard) -> LogoBoardDeleted {
    LogoBoardDeleted {
        logo_board_id: board.id,
        logo_board_name: board.name.clone(),
        brand_id: board.brand_id,
    }
}

pub fn descriptor() -> DeleteDescriptor<LogoBoard, LogoBoardDeleted> {
    DeleteDescriptor::<LogoBoard, LogoBoardDeleted>::builder()
        .name(NAME)
        .description(
            "Löscht ein Logo Board inklusive aller Logos \
             (DELETE /brands/{brand}/logo-boards/{logo_board_id}). \
             Erforderlicher Parameter: logo_board_id.",
        )
        .id_field("logo_board_id")
        .id_description("ID des zu löschenden Logo Boards")
        .not_found_code("LOGO_BOARD_NOT_FOUND")
        .not_found_message("Das Logo Board wurde nicht gefunden.")
        .label("Logo Board")
        .target(DeleteTarget::Itself)
        .snapshot(snapshot)
        .invalidates(LIST_QUERY)
        .build()
}
