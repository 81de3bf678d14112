use super::ids::{BrandId, LogoBoardId, LogoId, TeamId};
use brand_macros::record;

#[record(kind = LogoBoard, id = LogoBoardId)]
pub struct LogoBoard {
    pub name: String,
    pub brand_id: BrandId,
    pub team_id: Option<TeamId>,
}

#[record(kind = Logo, id = LogoId)]
pub struct Logo {
    pub name: String,
    #[belongs_to(LogoBoard)]
    pub logo_board_id: LogoBoardId,
    pub variant: Option<String>,
}
