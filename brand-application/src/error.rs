use brand_domain::error::DomainError;

/// 拒绝访问时返回给调用方的固定提示
pub const ACCESS_DENIED_MESSAGE: &str = "Sie haben keine Berechtigung, diese Aktion auszuführen.";

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    /// 记录或其必需的父记录不存在
    #[error("{code}: {message}")]
    NotFound {
        code: &'static str,
        message: &'static str,
    },

    #[error("access denied: {reason}")]
    AccessDenied { reason: String },

    #[error("confirmation required: {0}")]
    ConfirmationRequired(&'static str),

    #[error("execution: {0}")]
    Execution(String),

    #[error("handler not found: {0}")]
    HandlerNotFound(String),

    #[error("handler already registered: command={command}")]
    AlreadyRegisteredCommand { command: &'static str },
}

impl AppError {
    pub fn board_not_found() -> Self {
        AppError::NotFound {
            code: "BOARD_NOT_FOUND",
            message: "Das zugehörige Board wurde nicht gefunden.",
        }
    }

    /// 面向调用方的错误码
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound { code, .. } => *code,
            AppError::AccessDenied { .. } => "ACCESS_DENIED",
            AppError::ConfirmationRequired(_) => "CONFIRMATION_REQUIRED",
            AppError::HandlerNotFound(_) => "COMMAND_NOT_FOUND",
            AppError::Domain(_)
            | AppError::Execution(_)
            | AppError::AlreadyRegisteredCommand { .. } => "EXECUTION_ERROR",
        }
    }

    /// 面向调用方的提示信息；执行错误携带底层错误文本
    pub fn client_message(&self) -> String {
        match self {
            AppError::NotFound { message, .. } => message.to_string(),
            AppError::AccessDenied { .. } => ACCESS_DENIED_MESSAGE.to_string(),
            AppError::ConfirmationRequired(message) => (*message).to_string(),
            AppError::Domain(err) => err.to_string(),
            AppError::Execution(message) => message.clone(),
            other => other.to_string(),
        }
    }
}
