use super::guarded::{DeleteDescriptor, DeleteTarget, DeletedSnapshot};
use crate::dto::Dto;
use brand_domain::model::{GuidelineChapterId, GuidelineEntry, GuidelineEntryId};
use serde::Serialize;

pub const NAME: &str = "brands.guideline_entries.DELETE";

#[derive(Debug, Serialize)]
pub struct GuidelineEntryDeleted {
    pub guideline_entry_id: GuidelineEntryId,
    pub guideline_entry_title: String,
    pub guideline_chapter_id: GuidelineChapterId,
}

impl Dto for GuidelineEntryDeleted {}

impl DeletedSnapshot for GuidelineEntryDeleted {
    fn display_name(&self) -> &str {
        &self.guideline_entry_title
    }
}

fn snapshot(entry: &GuidelineEntry) -> GuidelineEntryDeleted {
    GuidelineEntryDeleted {
        guideline_entry_id: entry.id,
        guideline_entry_title: entry.title.clone(),
        guideline_chapter_id: entry.guideline_chapter_id,
    }
}

/// 条目虽从属于章节，但授权直接针对条目本身的 `delete`
pub fn descriptor() -> DeleteDescriptor<GuidelineEntry, GuidelineEntryDeleted> {
    DeleteDescriptor::<GuidelineEntry, GuidelineEntryDeleted>::builder()
        .name(NAME)
        .description(
            "Löscht einen Guideline-Eintrag \
             (DELETE /brands/{brand}/guideline-entries/{guideline_entry_id}). \
             Erforderlicher Parameter: guideline_entry_id.",
        )
        .id_field("guideline_entry_id")
        .id_description("ID des zu löschenden Eintrags")
        .not_found_code("GUIDELINE_ENTRY_NOT_FOUND")
        .not_found_message("Der Guideline-Eintrag wurde nicht gefunden.")
        .label("Eintrag")
        .target(DeleteTarget::Itself)
        .snapshot(snapshot)
        .build()
}
