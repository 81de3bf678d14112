use super::guarded::{DeleteDescriptor, DeleteTarget, DeletedSnapshot};
use crate::dto::Dto;
use brand_domain::model::{GuidelineBoardId, GuidelineChapter, GuidelineChapterId};
use serde::Serialize;

pub const NAME: &str = "brands.guideline_chapters.DELETE";

#[derive(Debug, Serialize)]
pub struct GuidelineChapterDeleted {
    pub guideline_chapter_id: GuidelineChapterId,
    pub guideline_chapter_title: String,
    pub guideline_board_id: GuidelineBoardId,
}

impl Dto for GuidelineChapterDeleted {}

impl DeletedSnapshot for GuidelineChapterDeleted {
    fn display_name(&self) -> &str {
        &self.guideline_chapter_title
    }
}

fn snapshot(chapter: &GuidelineChapter) -> GuidelineChapterDeleted {
    GuidelineChapterDeleted {
        guideline_chapter_id: chapter.id,
        guideline_chapter_title: chapter.title.clone(),
        guideline_board_id: chapter.guideline_board_id,
    }
}

pub fn descriptor() -> DeleteDescriptor<GuidelineChapter, GuidelineChapterDeleted> {
    DeleteDescriptor::<GuidelineChapter, GuidelineChapterDeleted>::builder()
        .name(NAME)
        .description(
            "Löscht ein Guideline-Kapitel inklusive aller Einträge \
             (DELETE /brands/{brand}/guideline-chapters/{guideline_chapter_id}). \
             Erforderlicher Parameter: guideline_chapter_id.",
        )
        .id_field("guideline_chapter_id")
        .id_description("ID des zu löschenden Kapitels")
        .not_found_code("GUIDELINE_CHAPTER_NOT_FOUND")
        .not_found_message("Das Guideline-Kapitel wurde nicht gefunden.")
        .label("Kapitel")
        .target(DeleteTarget::Itself)
        .snapshot(snapshot)
        .build()
}
