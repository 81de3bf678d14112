//! 记录（Record）基础抽象
//!
//! 品牌内容系统中的每一类持久化实体都是一条“记录”：
//! 拥有整型标识、所属资源类型，以及指向父记录的链接。
//! 链接声明了父记录被删除时子记录的处理方式（级联删除或置空）。
//!
use serde::{Serialize, de::DeserializeOwned};
use std::fmt::{self, Display};

/// 资源类型
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    AssetBoard,
    Asset,
    AssetVersion,
    GuidelineBoard,
    GuidelineChapter,
    GuidelineEntry,
    LogoBoard,
    Logo,
    Moodboard,
    MoodboardImage,
    PersonaBoard,
    Persona,
    SeoBoard,
    SeoKeywordCluster,
    SeoKeyword,
}

impl ResourceKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::AssetBoard => "asset_board",
            ResourceKind::Asset => "asset",
            ResourceKind::AssetVersion => "asset_version",
            ResourceKind::GuidelineBoard => "guideline_board",
            ResourceKind::GuidelineChapter => "guideline_chapter",
            ResourceKind::GuidelineEntry => "guideline_entry",
            ResourceKind::LogoBoard => "logo_board",
            ResourceKind::Logo => "logo",
            ResourceKind::Moodboard => "moodboard",
            ResourceKind::MoodboardImage => "moodboard_image",
            ResourceKind::PersonaBoard => "persona_board",
            ResourceKind::Persona => "persona",
            ResourceKind::SeoBoard => "seo_board",
            ResourceKind::SeoKeywordCluster => "seo_keyword_cluster",
            ResourceKind::SeoKeyword => "seo_keyword",
        }
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 指向某条记录的类型化引用（资源类型 + 标识）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ResourceRef {
    pub kind: ResourceKind,
    pub id: i64,
}

impl ResourceRef {
    pub const fn new(kind: ResourceKind, id: i64) -> Self {
        Self { kind, id }
    }
}

impl Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind, self.id)
    }
}

/// 记录标识：由 `#[record_id]` 宏为 `struct XxxId(i64);` 实现
pub trait RecordId:
    Copy + Display + From<i64> + Into<i64> + Send + Sync + fmt::Debug + 'static
{
}

/// 父记录被删除时子记录的处理规则
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnDelete {
    /// 随父记录一并删除
    Cascade,
    /// 保留子记录，仅将链接字段置空
    SetNull,
}

/// 子记录指向父记录的链接
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub target: ResourceRef,
    /// 子记录中保存父标识的字段名
    pub field: &'static str,
    pub on_delete: OnDelete,
}

impl Link {
    pub const fn new(target: ResourceRef, field: &'static str, on_delete: OnDelete) -> Self {
        Self {
            target,
            field,
            on_delete,
        }
    }
}

/// 持久化记录契约，通常由 `#[record(kind = .., id = ..)]` 宏实现
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    type Id: RecordId;

    const KIND: ResourceKind;

    fn id(&self) -> Self::Id;

    /// 指向父记录的链接（用于仓储执行级联规则）
    fn links(&self) -> Vec<Link>;

    fn resource(&self) -> ResourceRef {
        ResourceRef::new(Self::KIND, self.id().into())
    }
}
