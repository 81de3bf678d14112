use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// f64 可精确表示的最大整数 2^53
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// 命令输入：参数名 -> 参数值
///
/// 来自工具调用或 HTTP 层的原始参数，命令自行按需读取与强转。
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandInput(Map<String, Value>);

impl CommandInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加参数（链式）
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// 读取整型参数
    ///
    /// 接受 JSON 整数、无小数部分的浮点数与数字字符串；其余一律视为缺失。
    pub fn integer(&self, field: &str) -> Option<i64> {
        match self.0.get(field)? {
            Value::Number(n) => {
                if n.is_u64() || n.is_i64() {
                    // 超出 i64 的整数不会被截断成另一个标识
                    return n.as_i64();
                }
                n.as_f64()
                    .filter(|f| f.is_finite() && f.fract() == 0.0)
                    .filter(|f| f.abs() <= MAX_EXACT_FLOAT)
                    .map(|f| f as i64)
            }
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// 读取布尔参数（也接受 "true"/"false" 字符串）
    pub fn flag(&self, field: &str) -> Option<bool> {
        match self.0.get(field)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for CommandInput {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// 非对象的 JSON 视为空输入
impl From<Value> for CommandInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}

/// 命令输入结构描述（JSON Schema 子集，仅用于工具发现）
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InputSchema {
    #[serde(rename = "type")]
    kind: &'static str,
    properties: Map<String, Value>,
    required: Vec<&'static str>,
}

impl Default for InputSchema {
    fn default() -> Self {
        Self {
            kind: "object",
            properties: Map::new(),
            required: Vec::new(),
        }
    }
}

impl InputSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn integer(self, field: &'static str, description: &'static str) -> Self {
        self.property(field, "integer", description)
    }

    pub fn boolean(self, field: &'static str, description: &'static str) -> Self {
        self.property(field, "boolean", description)
    }

    pub fn require(mut self, field: &'static str) -> Self {
        if !self.required.contains(&field) {
            self.required.push(field);
        }
        self
    }

    fn property(mut self, field: &'static str, ty: &'static str, description: &'static str) -> Self {
        self.properties.insert(
            field.to_string(),
            serde_json::json!({ "type": ty, "description": description }),
        );
        self
    }
}

/// 命令描述：稳定名称、说明与输入结构
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CommandDescriptor {
    /// 稳定的逻辑名称，形如 `<domain>.<resource_plural>.DELETE`
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: InputSchema,
}
