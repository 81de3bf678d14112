use super::ids::{BrandId, MoodboardId, MoodboardImageId, TeamId};
use brand_macros::record;

#[record(kind = Moodboard, id = MoodboardId)]
pub struct Moodboard {
    pub name: String,
    pub brand_id: BrandId,
    pub team_id: Option<TeamId>,
}

/// Moodboard 中的图片；访问控制以所属 Moodboard 为准
#[record(kind = MoodboardImage, id = MoodboardImageId)]
pub struct MoodboardImage {
    pub title: String,
    #[belongs_to(Moodboard)]
    pub moodboard_id: Option<MoodboardId>,
    pub image_url: String,
}
