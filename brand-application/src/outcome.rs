use crate::error::AppError;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// 失败结果：错误码 + 提示信息
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CommandFailure {
    pub code: String,
    pub message: String,
}

impl From<AppError> for CommandFailure {
    fn from(err: AppError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.client_message(),
        }
    }
}

/// 命令结果
///
/// 序列化形态：
/// - 成功：`{"success": true, "data": {...}}`
/// - 失败：`{"success": false, "error": {"code": .., "message": ..}}`
#[derive(Clone, Debug, PartialEq)]
pub enum CommandOutcome {
    Success(Map<String, Value>),
    Failure(CommandFailure),
}

impl CommandOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CommandOutcome::Success(_))
    }

    pub fn payload(&self) -> Option<&Map<String, Value>> {
        match self {
            CommandOutcome::Success(data) => Some(data),
            CommandOutcome::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&CommandFailure> {
        match self {
            CommandOutcome::Success(_) => None,
            CommandOutcome::Failure(failure) => Some(failure),
        }
    }

    /// 失败时的错误码
    pub fn code(&self) -> Option<&str> {
        self.failure().map(|f| f.code.as_str())
    }
}

impl From<AppError> for CommandOutcome {
    fn from(err: AppError) -> Self {
        CommandOutcome::Failure(err.into())
    }
}

impl Serialize for CommandOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        match self {
            CommandOutcome::Success(data) => {
                map.serialize_entry("success", &true)?;
                map.serialize_entry("data", data)?;
            }
            CommandOutcome::Failure(failure) => {
                map.serialize_entry("success", &false)?;
                map.serialize_entry("error", failure)?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_envelope_carries_code_and_message() {
        let outcome = CommandOutcome::from(AppError::AccessDenied {
            reason: "no grant".into(),
        });

        assert_eq!(outcome.code(), Some("ACCESS_DENIED"));
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({
                "success": false,
                "error": {
                    "code": "ACCESS_DENIED",
                    "message": "Sie haben keine Berechtigung, diese Aktion auszuführen."
                }
            })
        );
    }

    #[test]
    fn success_envelope_wraps_payload() {
        let mut data = Map::new();
        data.insert("persona_id".into(), json!(3));
        let outcome = CommandOutcome::Success(data);

        assert!(outcome.is_success());
        assert_eq!(outcome.code(), None);
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({ "success": true, "data": { "persona_id": 3 } })
        );
    }

    #[test]
    fn execution_failure_keeps_underlying_text() {
        let failure = CommandFailure::from(AppError::Execution("disk full".into()));
        assert_eq!(failure.code, "EXECUTION_ERROR");
        assert_eq!(failure.message, "disk full");
    }
}
