use super::ids::{BrandId, GuidelineBoardId, GuidelineChapterId, GuidelineEntryId, TeamId};
use brand_macros::record;

#[record(kind = GuidelineBoard, id = GuidelineBoardId)]
pub struct GuidelineBoard {
    pub name: String,
    pub brand_id: BrandId,
    pub team_id: Option<TeamId>,
}

/// 品牌手册章节；删除章节会级联删除其条目
#[record(kind = GuidelineChapter, id = GuidelineChapterId)]
pub struct GuidelineChapter {
    pub title: String,
    #[belongs_to(GuidelineBoard)]
    pub guideline_board_id: GuidelineBoardId,
    pub position: u32,
}

#[record(kind = GuidelineEntry, id = GuidelineEntryId)]
pub struct GuidelineEntry {
    pub title: String,
    #[belongs_to(GuidelineChapter)]
    pub guideline_chapter_id: GuidelineChapterId,
    pub body: Option<String>,
}
