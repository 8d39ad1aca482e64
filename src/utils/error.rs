use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("JSON file not found or invalid path: {path}")]
    FileNotFound { path: String },

    #[error("Failed to load JSON: {message}")]
    ParseError { path: String, message: String },

    #[error("Failed to read JSON file {path}: {source}")]
    InputReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Scene host error: {message}")]
    HostError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Scene,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ImportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ImportError::FileNotFound { .. }
            | ImportError::ParseError { .. }
            | ImportError::InputReadError { .. } => ErrorCategory::Input,
            ImportError::ConfigError { .. }
            | ImportError::ConfigValidationError { .. }
            | ImportError::InvalidConfigValueError { .. }
            | ImportError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ImportError::HostError { .. } => ErrorCategory::Scene,
            ImportError::IoError(_)
            | ImportError::SerializationError(_)
            | ImportError::ZipError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 輸入檔案問題，使用者修正後重跑即可
            ImportError::FileNotFound { .. }
            | ImportError::ParseError { .. }
            | ImportError::InputReadError { .. } => ErrorSeverity::High,
            ImportError::ConfigError { .. }
            | ImportError::ConfigValidationError { .. }
            | ImportError::InvalidConfigValueError { .. }
            | ImportError::MissingConfigError { .. } => ErrorSeverity::High,
            // 場景已部分建立，無法回滾
            ImportError::HostError { .. } => ErrorSeverity::Critical,
            ImportError::IoError(_) => ErrorSeverity::Medium,
            ImportError::SerializationError(_) | ImportError::ZipError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ImportError::FileNotFound { path } => {
                format!("找不到 JSON 檔案: {}", path)
            }
            ImportError::ParseError { path, message } => {
                format!("無法解析 JSON 檔案 {}: {}", path, message)
            }
            ImportError::InputReadError { path, source } => {
                format!("無法讀取 JSON 檔案 {}: {}", path, source)
            }
            ImportError::IoError(e) => format!("檔案讀寫失敗: {}", e),
            ImportError::SerializationError(e) => format!("輸出序列化失敗: {}", e),
            ImportError::ZipError(e) => format!("壓縮檔建立失敗: {}", e),
            ImportError::ConfigError { message } => format!("配置錯誤: {}", message),
            ImportError::ConfigValidationError { field, message } => {
                format!("配置欄位 {} 驗證失敗: {}", field, message)
            }
            ImportError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("配置欄位 {} 的值 '{}' 無效: {}", field, value, reason),
            ImportError::MissingConfigError { field } => {
                format!("缺少必要配置: {}", field)
            }
            ImportError::HostError { message } => format!("場景建立失敗: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ImportError::FileNotFound { .. } => {
                "Check the input path and make sure the exported JSON file exists"
            }
            ImportError::ParseError { .. } => {
                "Re-export the file with QvPen Export Formatter and make sure it is valid JSON"
            }
            ImportError::InputReadError { .. } => {
                "Check that the JSON file is readable by the current user"
            }
            ImportError::IoError(_) => "Check permissions and free space of the output directory",
            ImportError::SerializationError(_) | ImportError::ZipError(_) => {
                "Retry the import; if it keeps failing, disable bundling or switch output formats"
            }
            ImportError::ConfigError { .. }
            | ImportError::ConfigValidationError { .. }
            | ImportError::InvalidConfigValueError { .. }
            | ImportError::MissingConfigError { .. } => {
                "Fix the configuration file or command line flags and try again"
            }
            ImportError::HostError { .. } => {
                "Objects created before the failure remain in the scene; clear them before retrying"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
