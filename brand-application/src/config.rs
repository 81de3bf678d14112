//! 删除命令的配置
//!
//! 默认值保持历史行为；宿主应用可通过 serde 从配置文件加载，或用环境变量覆盖。
//!
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteConfig {
    /// 删除关键词聚类前是否要求 `confirm: true`
    pub require_cluster_confirmation: bool,
}

impl DeleteConfig {
    pub const REQUIRE_CLUSTER_CONFIRMATION_ENV: &'static str =
        "BRAND_REQUIRE_CLUSTER_CONFIRMATION";

    /// 默认值 + 环境变量覆盖
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// 以任意查找函数覆盖配置项；无法解析的值保持原值
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = lookup(Self::REQUIRE_CLUSTER_CONFIRMATION_ENV) {
            self.require_cluster_confirmation =
                parse_bool(&v).unwrap_or(self.require_cluster_confirmation);
        }
        self
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
