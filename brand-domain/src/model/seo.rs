use super::ids::{BrandId, SeoBoardId, SeoKeywordClusterId, SeoKeywordId, TeamId};
use brand_macros::record;

#[record(kind = SeoBoard, id = SeoBoardId)]
pub struct SeoBoard {
    pub name: String,
    pub brand_id: BrandId,
    pub team_id: Option<TeamId>,
}

#[record(kind = SeoKeywordCluster, id = SeoKeywordClusterId)]
pub struct SeoKeywordCluster {
    pub name: String,
    #[belongs_to(SeoBoard)]
    pub seo_board_id: Option<SeoBoardId>,
}

/// 关键词属于 SEO 看板；删除聚类时仅解除聚类关联，关键词本身保留
#[record(kind = SeoKeyword, id = SeoKeywordId)]
pub struct SeoKeyword {
    pub keyword: String,
    #[belongs_to(SeoBoard)]
    pub seo_board_id: SeoBoardId,
    #[belongs_to(SeoKeywordCluster, on_delete = set_null)]
    pub seo_keyword_cluster_id: Option<SeoKeywordClusterId>,
    pub search_volume: Option<u32>,
}
