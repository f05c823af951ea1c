//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_eduportal_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum EduPortalError {
            $($variant(String),)*
        }

        impl EduPortalError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(EduPortalError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(EduPortalError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(EduPortalError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl EduPortalError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        EduPortalError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_eduportal_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Transaction("E004", "Transaction Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Serialization("E007", "Serialization Error"),
    ImageDecode("E008", "Image Decode Error"),
    DateParse("E009", "Date Parse Error"),
}

impl EduPortalError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for EduPortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for EduPortalError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for EduPortalError {
    fn from(err: sea_orm::DbErr) -> Self {
        EduPortalError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for EduPortalError {
    fn from(err: std::io::Error) -> Self {
        EduPortalError::DatabaseConnection(err.to_string())
    }
}

impl From<serde_json::Error> for EduPortalError {
    fn from(err: serde_json::Error) -> Self {
        EduPortalError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for EduPortalError {
    fn from(err: chrono::ParseError) -> Self {
        EduPortalError::DateParse(err.to_string())
    }
}

impl From<base64::DecodeError> for EduPortalError {
    fn from(err: base64::DecodeError) -> Self {
        EduPortalError::ImageDecode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EduPortalError>;
