use serde::Serialize;

/// 数据传输对象（DTO）
///
/// - 作为命令成功结果的载体，面向接口/外部系统序列化友好；
/// - 与领域记录解耦，只携带响应需要的扁平字段。
pub trait Dto: Serialize + Send + Sync + 'static {}
