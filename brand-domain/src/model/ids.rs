use brand_macros::record_id;

#[record_id]
pub struct BrandId(i64);

#[record_id]
pub struct TeamId(i64);

#[record_id]
pub struct UserId(i64);

#[record_id]
pub struct AssetBoardId(i64);

#[record_id]
pub struct AssetId(i64);

#[record_id]
pub struct AssetVersionId(i64);

#[record_id]
pub struct GuidelineBoardId(i64);

#[record_id]
pub struct GuidelineChapterId(i64);

#[record_id]
pub struct GuidelineEntryId(i64);

#[record_id]
pub struct LogoBoardId(i64);

#[record_id]
pub struct LogoId(i64);

#[record_id]
pub struct MoodboardId(i64);

#[record_id]
pub struct MoodboardImageId(i64);

#[record_id]
pub struct PersonaBoardId(i64);

#[record_id]
pub struct PersonaId(i64);

#[record_id]
pub struct SeoBoardId(i64);

#[record_id]
pub struct SeoKeywordClusterId(i64);

#[record_id]
pub struct SeoKeywordId(i64);
