//! 品牌内容记录模型
//!
//! 每个看板（Board）是访问控制的作用域，子记录通过 `#[belongs_to]`
//! 声明其父看板；删除规则由仓储执行，命令层只读取展示字段。
//!
mod asset;
mod guideline;
mod ids;
mod logo;
mod moodboard;
mod persona;
mod seo;

pub use asset::{Asset, AssetBoard, AssetVersion};
pub use guideline::{GuidelineBoard, GuidelineChapter, GuidelineEntry};
pub use ids::*;
pub use logo::{Logo, LogoBoard};
pub use moodboard::{Moodboard, MoodboardImage};
pub use persona::{Persona, PersonaBoard};
pub use seo::{SeoBoard, SeoKeyword, SeoKeywordCluster};
