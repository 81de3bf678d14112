//! 品牌内容记录的属性宏
//!
//! - `#[record_id]`：整型记录标识的新类型包装
//! - `#[record(kind = .., id = ..)]`：为记录结构体补全 `id` 字段并实现 `Record`
//!
use proc_macro::TokenStream;

mod derive_utils;
mod record;
mod record_id;

/// 记录 ID 宏
///
/// 仅支持 `struct XxxId(i64);` 形式，自动：
/// - 合并派生 Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize
/// - 以 `#[serde(transparent)]` 序列化为裸整数
/// - 实现 `new/value`、`Display`、`FromStr`、`From<i64>`、`From<Self> for i64` 与 `RecordId`
#[proc_macro_attribute]
pub fn record_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    record_id::expand(attr, item)
}

/// 记录宏
///
/// - 参数：`kind = ResourceKind 变体`、`id = 记录 ID 类型`
/// - 若缺失则在字段最前追加 `id: IdType`
/// - 字段上的 `#[belongs_to(Kind)]` 生成级联删除链接，
///   `#[belongs_to(Kind, on_delete = set_null)]` 生成置空链接；字段类型可为 ID 或 `Option<ID>`
#[proc_macro_attribute]
pub fn record(attr: TokenStream, item: TokenStream) -> TokenStream {
    record::expand(attr, item)
}
