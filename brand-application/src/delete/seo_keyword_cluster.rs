use super::guarded::{DeleteDescriptor, DeleteTarget, DeletedSnapshot};
use crate::dto::Dto;
use brand_domain::model::{SeoBoardId, SeoKeywordCluster, SeoKeywordClusterId};
use brand_domain::record::ResourceKind;
use serde::Serialize;

pub const NAME: &str = "brands.seo_keyword_clusters.DELETE";

#[derive(Debug, Serialize)]
pub struct SeoKeywordClusterDeleted {
    pub seo_keyword_cluster_id: SeoKeywordClusterId,
    pub seo_keyword_cluster_name: String,
    pub seo_board_id: Option<SeoBoardId>,
}

impl Dto for SeoKeywordClusterDeleted {}

impl DeletedSnapshot for SeoKeywordClusterDeleted {
    fn display_name(&self) -> &str {
        &self.seo_keyword_cluster_name
    }
}

fn snapshot(cluster: &SeoKeywordCluster) -> SeoKeywordClusterDeleted {
    SeoKeywordClusterDeleted {
        seo_keyword_cluster_id: cluster.id,
        seo_keyword_cluster_name: cluster.name.clone(),
        seo_board_id: cluster.seo_board_id,
    }
}

/// 删除关键词聚类；聚类内的关键词保留，仅解除与聚类的关联
pub fn descriptor() -> DeleteDescriptor<SeoKeywordCluster, SeoKeywordClusterDeleted> {
    DeleteDescriptor::<SeoKeywordCluster, SeoKeywordClusterDeleted>::builder()
        .name(NAME)
        .description(
            "Löscht einen Keyword-Cluster; die enthaltenen Keywords bleiben erhalten \
             (DELETE /brands/{brand}/seo-keyword-clusters/{seo_keyword_cluster_id}). \
             Erforderlicher Parameter: seo_keyword_cluster_id.",
        )
        .id_field("seo_keyword_cluster_id")
        .id_description("ID des zu löschenden Keyword-Clusters")
        .not_found_code("SEO_KEYWORD_CLUSTER_NOT_FOUND")
        .not_found_message("Der Keyword-Cluster wurde nicht gefunden.")
        .label("Keyword-Cluster")
        .target(DeleteTarget::Parent {
            kind: ResourceKind::SeoBoard,
            parent_id: |cluster: &SeoKeywordCluster| cluster.seo_board_id.map(i64::from),
        })
        .snapshot(snapshot)
        .success_note("Die zugehörigen Keywords bleiben erhalten.")
        .confirm_parameter(true)
        .build()
}
