use super::guarded::{DeleteDescriptor, DeleteTarget, DeletedSnapshot};
use crate::dto::Dto;
use brand_domain::model::{MoodboardId, MoodboardImage, MoodboardImageId};
use brand_domain::record::ResourceKind;
use serde::Serialize;

pub const NAME: &str = "brands.moodboard_images.DELETE";

#[derive(Debug, Serialize)]
pub struct MoodboardImageDeleted {
    pub moodboard_image_id: MoodboardImageId,
    pub moodboard_image_title: String,
    pub moodboard_id: Option<MoodboardId>,
}

impl Dto for MoodboardImageDeleted {}

impl DeletedSnapshot for MoodboardImageDeleted {
    fn display_name(&self) -> &str {
        &self.moodboard_image_title
    }
}

fn snapshot(image: &MoodboardImage) -> MoodboardImageDeleted {
    MoodboardImageDeleted {
        moodboard_image_id: image.id,
        moodboard_image_title: image.title.clone(),
        moodboard_id: image.moodboard_id,
    }
}

pub fn descriptor() -> DeleteDescriptor<MoodboardImage, MoodboardImageDeleted> {
    DeleteDescriptor::<MoodboardImage, MoodboardImageDeleted>::builder()
        .name(NAME)
        .description(
            "Entfernt ein Bild aus einem Moodboard \
             (DELETE /brands/{brand}/moodboard-images/{moodboard_image_id}). \
             Erforderlicher Parameter: moodboard_image_id.",
        )
        .id_field("moodboard_image_id")
        .id_description("ID des zu löschenden Bildes")
        .not_found_code("MOODBOARD_IMAGE_NOT_FOUND")
        .not_found_message("Das Bild wurde nicht gefunden.")
        .label("Bild")
        .target(DeleteTarget::Parent {
            kind: ResourceKind::Moodboard,
            parent_id: |image: &MoodboardImage| image.moodboard_id.map(i64::from),
        })
        .snapshot(snapshot)
        .build()
}
